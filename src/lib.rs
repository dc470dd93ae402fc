// ============================================================================
// Rate Adjuster Library
// Exchange-rate gap calculator with fixed-point decimal arithmetic
// ============================================================================

//! # Rate Adjuster
//!
//! Derives the gap between an official and a parallel-market exchange rate,
//! the gap as a percentage of the official rate, and the price adjustment
//! that percentage implies for a product.
//!
//! ## Features
//!
//! - **Fixed-point arithmetic** - two-decimal i64 values, half-away-from-zero
//!   rounding, no floats anywhere in the derivation
//! - **Pluggable derivation policies** - faithful zero-collapsing gating or
//!   exact propagating arithmetic
//! - **Pure, total contracts** - `derive` and `validate` never fail;
//!   malformed input clears a field instead of erroring
//! - **Event stream** for presentation layers, with a `tracing`-backed
//!   logging handler
//!
//! ## Example
//!
//! ```rust
//! use rate_adjuster::prelude::*;
//! use std::sync::Arc;
//!
//! let mut calc = RateCalculatorBuilder::new().build(Arc::new(NoOpEventHandler));
//!
//! calc.update(RateField::OfficialRate, "100");
//! calc.update(RateField::ParallelRate, "120");
//! calc.update(RateField::ProductPrice, "50");
//!
//! let snapshot = calc.snapshot();
//! assert!(snapshot.is_valid);
//! assert_eq!(snapshot.derived.currency_gap.to_string(), "20.00");
//! assert_eq!(snapshot.derived.gap_percentage.to_string(), "20.00");
//! assert_eq!(snapshot.derived.price_increase.to_string(), "10.00");
//! assert_eq!(snapshot.derived.adjusted_price.to_string(), "60.00");
//! ```

pub mod calculator;
pub mod domain;
pub mod interfaces;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::calculator::{
        create_from_config, derive, validate, ExactDerivation, RateCalculator,
        RateCalculatorBuilder, ShortCircuitDerivation,
    };
    pub use crate::domain::{
        CalculatorConfig, CalculatorSnapshot, DerivationPolicyType, DerivedRates, RateField,
        RateForm, SignPolicy,
    };
    pub use crate::interfaces::{
        DerivationPolicy, EventHandler, FormEvent, LoggingEventHandler, NoOpEventHandler,
    };
    pub use crate::numeric::{Money, Percent, Rate};
}
