// ============================================================================
// Domain Models Module
// Contains the form, derived-value, and configuration types
// ============================================================================

pub mod config;
pub mod derived;
pub mod form;

pub use config::{CalculatorConfig, DerivationPolicyType, SignPolicy};
pub use derived::{CalculatorSnapshot, DerivedRates};
pub use form::{RateField, RateForm};
