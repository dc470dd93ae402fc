// ============================================================================
// Interfaces Module
// Contracts between the calculator core and its collaborators
// ============================================================================

mod derivation_policy;
mod event_handler;

pub use derivation_policy::DerivationPolicy;
pub use event_handler::{EventHandler, FormEvent, LoggingEventHandler, NoOpEventHandler};
