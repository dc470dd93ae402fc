// ============================================================================
// Event Handler Interface
// Defines the contract for observing form mutations and derived results
// ============================================================================

use crate::domain::RateField;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Events emitted by the calculator.
///
/// Values are carried as `rust_decimal::Decimal` - the boundary
/// representation consumers expect - rather than the internal fixed-point
/// type.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FormEvent {
    /// A field was set to a parsed, normalized value
    FieldUpdated {
        field: RateField,
        value: Decimal,
        timestamp: DateTime<Utc>,
    },

    /// A field became absent (empty or unparsable raw input)
    FieldCleared {
        field: RateField,
        timestamp: DateTime<Utc>,
    },

    /// The whole form was reset to empty
    FormReset { timestamp: DateTime<Utc> },

    /// Derived values were recomputed after a mutation
    RatesDerived {
        currency_gap: Decimal,
        gap_percentage: Decimal,
        price_increase: Decimal,
        adjusted_price: Decimal,
        timestamp: DateTime<Utc>,
    },

    /// The official rate exceeds the parallel rate (non-fatal warning)
    OrderingViolation {
        official_rate: Decimal,
        parallel_rate: Decimal,
        timestamp: DateTime<Utc>,
    },
}

/// Event handler trait for processing calculator events
/// Implementations can handle logging, display refresh, notifications, etc.
pub trait EventHandler {
    /// Handle a form event
    fn on_event(&self, event: FormEvent);

    /// Batch event handler (optional optimization)
    fn on_events(&self, events: Vec<FormEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op event handler for testing
pub struct NoOpEventHandler;

impl EventHandler for NoOpEventHandler {
    fn on_event(&self, _event: FormEvent) {
        // Do nothing
    }
}

/// Logging event handler
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn on_event(&self, event: FormEvent) {
        match &event {
            FormEvent::OrderingViolation {
                official_rate,
                parallel_rate,
                ..
            } => {
                tracing::warn!(
                    %official_rate,
                    %parallel_rate,
                    "official rate exceeds parallel rate"
                );
            },
            other => tracing::debug!("calculator event: {:?}", other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_handler() {
        let handler = NoOpEventHandler;
        handler.on_event(FormEvent::FormReset {
            timestamp: Utc::now(),
        });
        // Should not panic
    }

    #[test]
    fn test_batch_dispatch() {
        let handler = NoOpEventHandler;
        handler.on_events(vec![
            FormEvent::FieldCleared {
                field: RateField::ProductPrice,
                timestamp: Utc::now(),
            },
            FormEvent::FormReset {
                timestamp: Utc::now(),
            },
        ]);
    }
}
