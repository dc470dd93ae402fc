// ============================================================================
// Calculator Configuration
// Policy knobs for input sign handling and derivation semantics
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Sign Policy
// ============================================================================

/// How raw input with a leading sign is normalized.
///
/// The UI variants of the original calculator disagreed on this; both
/// behaviors are available and applied uniformly to all three fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SignPolicy {
    /// Clamp to non-negative via absolute value (default).
    /// Keeps the form invariant that every present field is >= 0.
    ClampAbsolute,

    /// Accept the raw sign as entered.
    PreserveSign,
}

// ============================================================================
// Derivation Policy Type
// ============================================================================

/// Selects the derivation strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DerivationPolicyType {
    /// Faithful zero-collapsing gating (default): a zero or absent operand
    /// forces the derived value, and everything downstream of it, to 0.
    /// Matches the observed behavior of the original calculator.
    ShortCircuit,

    /// Propagate exact arithmetic: zero and negative intermediate values
    /// flow through the remaining formulas. Absent operands still yield 0;
    /// division by a zero official rate yields 0.
    Exact,
}

// ============================================================================
// Complete Calculator Configuration
// ============================================================================

/// Configuration for creating a calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalculatorConfig {
    /// Raw-input sign handling
    pub sign_policy: SignPolicy,

    /// Derivation gating semantics
    pub derivation_policy: DerivationPolicyType,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self::legacy_compat()
    }
}

impl CalculatorConfig {
    /// Create a configuration with explicit policies.
    pub fn new(sign_policy: SignPolicy, derivation_policy: DerivationPolicyType) -> Self {
        Self {
            sign_policy,
            derivation_policy,
        }
    }

    /// Builder method: Set the sign policy
    pub fn with_sign_policy(mut self, policy: SignPolicy) -> Self {
        self.sign_policy = policy;
        self
    }

    /// Builder method: Set the derivation policy
    pub fn with_derivation_policy(mut self, policy: DerivationPolicyType) -> Self {
        self.derivation_policy = policy;
        self
    }

    // ========================================================================
    // Preset Configurations
    // ========================================================================

    /// Bit-compatible with the original calculator (default):
    /// absolute-value clamping and zero-collapsing gates.
    pub fn legacy_compat() -> Self {
        Self::new(SignPolicy::ClampAbsolute, DerivationPolicyType::ShortCircuit)
    }

    /// Exact numeric behavior: raw signs accepted, zero and negative
    /// intermediates propagated.
    pub fn exact_arithmetic() -> Self {
        Self::new(SignPolicy::PreserveSign, DerivationPolicyType::Exact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_legacy_compat() {
        let config = CalculatorConfig::default();
        assert_eq!(config.sign_policy, SignPolicy::ClampAbsolute);
        assert_eq!(
            config.derivation_policy,
            DerivationPolicyType::ShortCircuit
        );
        assert_eq!(config, CalculatorConfig::legacy_compat());
    }

    #[test]
    fn test_builder_pattern() {
        let config = CalculatorConfig::default()
            .with_sign_policy(SignPolicy::PreserveSign)
            .with_derivation_policy(DerivationPolicyType::Exact);

        assert_eq!(config, CalculatorConfig::exact_arithmetic());
    }
}
