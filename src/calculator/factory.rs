// ============================================================================
// Calculator Factory
// Creates calculators with proper configuration
// ============================================================================

use crate::calculator::{ExactDerivation, RateCalculator, ShortCircuitDerivation};
use crate::domain::{CalculatorConfig, DerivationPolicyType, SignPolicy};
use crate::interfaces::{DerivationPolicy, EventHandler};
use std::sync::Arc;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a calculator from configuration.
///
/// # Example
/// ```
/// use rate_adjuster::calculator::create_from_config;
/// use rate_adjuster::domain::CalculatorConfig;
/// use rate_adjuster::interfaces::NoOpEventHandler;
/// use std::sync::Arc;
///
/// let calc = create_from_config(CalculatorConfig::default(), Arc::new(NoOpEventHandler));
/// assert_eq!(calc.policy_name(), "ShortCircuit");
/// ```
pub fn create_from_config(
    config: CalculatorConfig,
    event_handler: Arc<dyn EventHandler>,
) -> RateCalculator {
    let policy = create_derivation_policy(config.derivation_policy);
    RateCalculator::new(config, policy, event_handler)
}

/// Creates the appropriate derivation strategy from configuration.
pub fn create_derivation_policy(policy: DerivationPolicyType) -> Box<dyn DerivationPolicy> {
    match policy {
        DerivationPolicyType::ShortCircuit => Box::new(ShortCircuitDerivation::new()),
        DerivationPolicyType::Exact => Box::new(ExactDerivation::new()),
    }
}

// ============================================================================
// Builder Pattern for Advanced Configuration
// ============================================================================

/// Builder for creating calculators with a fluent API.
///
/// # Example
/// ```
/// use rate_adjuster::calculator::RateCalculatorBuilder;
/// use rate_adjuster::interfaces::NoOpEventHandler;
/// use std::sync::Arc;
///
/// let calc = RateCalculatorBuilder::new()
///     .preserve_sign()
///     .exact_derivation()
///     .build(Arc::new(NoOpEventHandler));
/// assert_eq!(calc.policy_name(), "Exact");
/// ```
#[derive(Debug, Default)]
pub struct RateCalculatorBuilder {
    config: CalculatorConfig,
}

impl RateCalculatorBuilder {
    /// Create a builder with the legacy-compatible defaults.
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Sign Policy Configuration
    // ========================================================================

    /// Clamp negative input via absolute value (default)
    pub fn clamp_absolute(mut self) -> Self {
        self.config.sign_policy = SignPolicy::ClampAbsolute;
        self
    }

    /// Accept the raw sign as entered
    pub fn preserve_sign(mut self) -> Self {
        self.config.sign_policy = SignPolicy::PreserveSign;
        self
    }

    // ========================================================================
    // Derivation Policy Configuration
    // ========================================================================

    /// Zero-collapsing gating, faithful to the original (default)
    pub fn short_circuit_derivation(mut self) -> Self {
        self.config.derivation_policy = DerivationPolicyType::ShortCircuit;
        self
    }

    /// Propagating exact arithmetic
    pub fn exact_derivation(mut self) -> Self {
        self.config.derivation_policy = DerivationPolicyType::Exact;
        self
    }

    /// Replace the whole configuration at once
    pub fn with_config(mut self, config: CalculatorConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the calculator with the given event handler.
    pub fn build(self, event_handler: Arc<dyn EventHandler>) -> RateCalculator {
        create_from_config(self.config, event_handler)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interfaces::NoOpEventHandler;

    #[test]
    fn test_create_from_default_config() {
        let calc = create_from_config(CalculatorConfig::default(), Arc::new(NoOpEventHandler));
        assert_eq!(calc.policy_name(), "ShortCircuit");
        assert!(calc.form().is_empty());
    }

    #[test]
    fn test_create_exact_policy() {
        let calc = create_from_config(
            CalculatorConfig::exact_arithmetic(),
            Arc::new(NoOpEventHandler),
        );
        assert_eq!(calc.policy_name(), "Exact");
    }

    #[test]
    fn test_builder_defaults() {
        let calc = RateCalculatorBuilder::new().build(Arc::new(NoOpEventHandler));
        assert_eq!(calc.config(), &CalculatorConfig::legacy_compat());
    }

    #[test]
    fn test_builder_full_configuration() {
        let calc = RateCalculatorBuilder::new()
            .preserve_sign()
            .exact_derivation()
            .build(Arc::new(NoOpEventHandler));
        assert_eq!(calc.config(), &CalculatorConfig::exact_arithmetic());
    }
}
