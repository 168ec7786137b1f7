//! Machine error types.

use thiserror::Error;

/// Errors that can occur when loading a configuration or driving a machine.
///
/// Every variant is reported before any mutation happens, so a machine that
/// returned one of these is exactly as it was before the call.
#[derive(Debug, Error, PartialEq)]
pub enum FsmError {
    /// Configuration was absent, malformed or failed validation
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    /// Target of a direct state change is not a configured state
    #[error("Unknown state '{state}'")]
    InvalidState { state: String },

    /// Current state has no transition bound to the event
    #[error("Event '{event}' is not defined for state '{state}'")]
    InvalidEvent { event: String, state: String },
}
