//! Builder API for ergonomic configuration construction.
//!
//! This module provides a fluent builder for configurations declared in code
//! rather than loaded from JSON, and a macro for declaring enum states.

pub mod config;
pub mod error;
pub mod macros;

pub use config::ConfigBuilder;
pub use error::BuildError;

use crate::config::MachineConfig;
use crate::core::State;

/// Create a configuration where each `(from, event, to)` triple is one
/// transition and the first source is the initial state.
///
/// # Example
///
/// ```
/// use undofsm::builder::from_transitions;
/// use undofsm::StateMachine;
///
/// let config = from_transitions(vec![
///     ("A".to_string(), "go", "B".to_string()),
///     ("B".to_string(), "back", "A".to_string()),
/// ])
/// .unwrap();
///
/// let machine = StateMachine::new(config);
/// assert_eq!(machine.state(), "A");
/// ```
pub fn from_transitions<S, E>(
    transitions: impl IntoIterator<Item = (S, E, S)>,
) -> Result<MachineConfig<S>, BuildError>
where
    S: State,
    E: Into<String>,
{
    let mut builder = ConfigBuilder::new();
    let mut first = true;
    for (from, event, to) in transitions {
        if first {
            builder = builder.initial(from.clone());
            first = false;
        }
        builder = builder.transition(from, event, to);
    }
    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_transitions_uses_first_source_as_initial() {
        let config = from_transitions(vec![
            ("B".to_string(), "go", "A".to_string()),
            ("A".to_string(), "go", "B".to_string()),
        ])
        .unwrap();

        assert_eq!(config.initial, "B");
        assert_eq!(config.states.len(), 2);
    }

    #[test]
    fn from_transitions_rejects_empty_input() {
        let result = from_transitions(Vec::<(String, &str, String)>::new());
        assert_eq!(result, Err(BuildError::MissingInitialState));
    }
}
