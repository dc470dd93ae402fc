// ============================================================================
// Derivation Policy Interface
// Defines the contract for pluggable derivation strategies
// ============================================================================

use crate::domain::{DerivedRates, RateForm};

/// Strategy pattern interface for deriving values from a form snapshot.
/// Implementations: ShortCircuit (zero-collapsing), Exact (propagating).
///
/// Every implementation must be pure and total: the same form snapshot
/// always derives to the same values, and no input produces an error.
pub trait DerivationPolicy {
    /// Derive the four output values from the current form snapshot
    ///
    /// # Arguments
    /// * `form` - The form snapshot to derive from
    ///
    /// # Returns
    /// The derived values, all rounded to two decimal places
    fn derive(&self, form: &RateForm) -> DerivedRates;

    /// Get the policy name for logging/metrics
    fn name(&self) -> &str;
}
