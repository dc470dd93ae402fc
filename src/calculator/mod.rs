// ============================================================================
// Calculator Module
// Contains the derivation strategies and the stateful calculator
// ============================================================================

mod exact;
mod input;
mod rate_calculator;
mod short_circuit;

pub mod factory;

pub use exact::ExactDerivation;
pub use factory::{create_derivation_policy, create_from_config, RateCalculatorBuilder};
pub use input::parse_field_input;
pub use rate_calculator::RateCalculator;
pub use short_circuit::ShortCircuitDerivation;

use crate::domain::{DerivedRates, RateForm};
use crate::interfaces::DerivationPolicy;

/// Derive the output values from a form snapshot with the default
/// (short-circuit) policy. Pure and total: absent or zero inputs produce
/// zeros, never an error.
pub fn derive(form: &RateForm) -> DerivedRates {
    ShortCircuitDerivation.derive(form)
}

/// The ordering validation contract: `false` only when both rates are
/// present and the official rate exceeds the parallel rate.
pub fn validate(form: &RateForm) -> bool {
    form.ordering_is_valid()
}
