//! Builder for constructing machine configurations.

use crate::builder::error::BuildError;
use crate::config::{MachineConfig, StateDefinition};
use crate::core::State;
use indexmap::IndexMap;

/// Builder for constructing configurations with a fluent API.
///
/// States are recorded in the order they are first mentioned, either by
/// `.state()` or as the source of a `.transition()`. Destinations are not
/// declared implicitly.
pub struct ConfigBuilder<S: State> {
    initial: Option<S>,
    states: IndexMap<S, StateDefinition<S>>,
    duplicate: Option<BuildError>,
}

impl<S: State> ConfigBuilder<S> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            states: IndexMap::new(),
            duplicate: None,
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Declare a state. Declaring an existing state again has no effect.
    pub fn state(mut self, state: S) -> Self {
        self.states.entry(state).or_default();
        self
    }

    /// Bind `event` on `from` to `to`, declaring `from` if needed.
    ///
    /// Binding the same event twice on one state is reported by `build`.
    pub fn transition(mut self, from: S, event: impl Into<String>, to: S) -> Self {
        let event = event.into();
        let definition = self.states.entry(from.clone()).or_default();

        if definition.transitions.contains_key(&event) {
            self.duplicate.get_or_insert(BuildError::DuplicateTransition {
                state: from.name().to_string(),
                event,
            });
        } else {
            definition.transitions.insert(event, to);
        }
        self
    }

    /// Build the configuration.
    /// Returns an error if required fields are missing.
    pub fn build(self) -> Result<MachineConfig<S>, BuildError> {
        if let Some(err) = self.duplicate {
            return Err(err);
        }

        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        if self.states.is_empty() {
            return Err(BuildError::NoStates);
        }

        Ok(MachineConfig {
            initial,
            states: self.states,
        })
    }
}

impl<S: State> Default for ConfigBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(name: &str) -> String {
        name.to_string()
    }

    #[test]
    fn builder_validates_required_fields() {
        let result = ConfigBuilder::<String>::new().state(s("A")).build();

        assert_eq!(result, Err(BuildError::MissingInitialState));
    }

    #[test]
    fn builder_requires_states() {
        let result = ConfigBuilder::<String>::new().initial(s("A")).build();

        assert_eq!(result, Err(BuildError::NoStates));
    }

    #[test]
    fn builder_rejects_duplicate_transition() {
        let result = ConfigBuilder::new()
            .initial(s("A"))
            .transition(s("A"), "go", s("B"))
            .transition(s("A"), "go", s("C"))
            .build();

        assert_eq!(
            result,
            Err(BuildError::DuplicateTransition {
                state: s("A"),
                event: s("go"),
            })
        );
    }

    #[test]
    fn fluent_api_builds_config() {
        let config = ConfigBuilder::new()
            .initial(s("A"))
            .transition(s("A"), "go", s("B"))
            .transition(s("B"), "back", s("A"))
            .build()
            .unwrap();

        assert_eq!(config.initial, "A");
        assert_eq!(config.destination(&s("A"), "go"), Some(&s("B")));
        assert_eq!(config.destination(&s("B"), "back"), Some(&s("A")));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn states_keep_first_mention_order() {
        let config = ConfigBuilder::new()
            .initial(s("A"))
            .state(s("C"))
            .transition(s("A"), "go", s("B"))
            .state(s("B"))
            .state(s("C"))
            .build()
            .unwrap();

        let names: Vec<&str> = config.states.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["C", "A", "B"]);
    }

    #[test]
    fn destination_is_not_declared_implicitly() {
        let config = ConfigBuilder::new()
            .initial(s("A"))
            .transition(s("A"), "go", s("B"))
            .build()
            .unwrap();

        assert!(!config.contains_state(&s("B")));
        assert!(config.validate().is_err());
    }
}
