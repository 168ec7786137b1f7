//! Build errors for the configuration builder.

use thiserror::Error;

/// Errors that can occur when building a configuration.
#[derive(Debug, Error, PartialEq)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("No states declared. Call .state(state) or .transition(from, event, to)")]
    NoStates,

    #[error("Event '{event}' is already bound on state '{state}'")]
    DuplicateTransition { state: String, event: String },
}
