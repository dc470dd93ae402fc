// ============================================================================
// Rate Calculator
// Core business logic: owns the form, recomputes derived values per mutation
// ============================================================================

use crate::calculator::input::parse_field_input;
use crate::domain::{CalculatorConfig, CalculatorSnapshot, DerivedRates, RateField, RateForm};
use crate::interfaces::{DerivationPolicy, EventHandler, FormEvent};
use chrono::Utc;
use std::sync::Arc;

/// The stateful calculator the presentation layer drives.
///
/// Owns the single [`RateForm`] instance, applies raw-text updates to it,
/// and synchronously recomputes the derived values and the validity flag
/// after every mutation - there is no caching and no background work. Each
/// mutation emits [`FormEvent`]s to the injected handler.
pub struct RateCalculator {
    /// Policy knobs (sign handling lives here; derivation is the strategy)
    config: CalculatorConfig,

    /// Pluggable derivation strategy
    policy: Box<dyn DerivationPolicy>,

    /// Event handler for form and derivation events
    event_handler: Arc<dyn EventHandler>,

    /// The one form snapshot everything derives from
    form: RateForm,
}

impl RateCalculator {
    /// Create a new calculator.
    ///
    /// Use [`crate::calculator::create_from_config`] or
    /// [`crate::calculator::RateCalculatorBuilder`] to construct the policy
    /// from configuration.
    pub fn new(
        config: CalculatorConfig,
        policy: Box<dyn DerivationPolicy>,
        event_handler: Arc<dyn EventHandler>,
    ) -> Self {
        Self {
            config,
            policy,
            event_handler,
            form: RateForm::new(),
        }
    }

    /// Apply one raw field input from the presentation layer.
    ///
    /// Empty or unparsable text clears the field; anything else is parsed,
    /// sign-normalized, and rounded to two decimals. Derived values and the
    /// validity flag are recomputed immediately and reported as events.
    pub fn update(&mut self, field: RateField, raw: &str) -> Vec<FormEvent> {
        let value = parse_field_input(raw, self.config.sign_policy);
        self.form.set(field, value);

        let mut events = Vec::new();
        match value {
            Some(v) => events.push(FormEvent::FieldUpdated {
                field,
                value: v.to_decimal(),
                timestamp: Utc::now(),
            }),
            None => events.push(FormEvent::FieldCleared {
                field,
                timestamp: Utc::now(),
            }),
        }

        self.push_recompute_events(&mut events);
        self.event_handler.on_events(events.clone());
        events
    }

    /// Reset the form to fully-empty. No parameters, no failure modes.
    pub fn reset(&mut self) -> Vec<FormEvent> {
        self.form = RateForm::new();

        let mut events = vec![FormEvent::FormReset {
            timestamp: Utc::now(),
        }];
        self.push_recompute_events(&mut events);
        self.event_handler.on_events(events.clone());
        events
    }

    /// The current form snapshot.
    pub fn form(&self) -> &RateForm {
        &self.form
    }

    /// Derive the output values from the current form.
    pub fn derived(&self) -> DerivedRates {
        self.policy.derive(&self.form)
    }

    /// The ordering-validity flag: false when the official rate exceeds the
    /// parallel rate. Non-fatal - derivation continues regardless.
    pub fn is_valid(&self) -> bool {
        self.form.ordering_is_valid()
    }

    /// One consistent view for the presentation layer to render.
    pub fn snapshot(&self) -> CalculatorSnapshot {
        CalculatorSnapshot {
            form: self.form,
            derived: self.derived(),
            is_valid: self.is_valid(),
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Name of the active derivation policy, for logging.
    pub fn policy_name(&self) -> &str {
        self.policy.name()
    }

    // ========================================================================
    // Private methods
    // ========================================================================

    fn push_recompute_events(&self, events: &mut Vec<FormEvent>) {
        let derived = self.policy.derive(&self.form);
        events.push(FormEvent::RatesDerived {
            currency_gap: derived.currency_gap.to_decimal(),
            gap_percentage: derived.gap_percentage.to_decimal(),
            price_increase: derived.price_increase.to_decimal(),
            adjusted_price: derived.adjusted_price.to_decimal(),
            timestamp: Utc::now(),
        });

        // The violation is only reportable when both rates are present
        if let (Some(official), Some(parallel)) = (self.form.official_rate, self.form.parallel_rate)
        {
            if official > parallel {
                events.push(FormEvent::OrderingViolation {
                    official_rate: official.to_decimal(),
                    parallel_rate: parallel.to_decimal(),
                    timestamp: Utc::now(),
                });
            }
        }
    }
}
