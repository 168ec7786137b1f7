//! Declarative machine configuration.
//!
//! A configuration names an initial state and, for every state, the events
//! it reacts to and where each one leads. States and events keep the order
//! they were declared in, which is the order `StateMachine::states` reports.
//!
//! The JSON shape is:
//!
//! ```json
//! {
//!   "initial": "A",
//!   "states": {
//!     "A": { "transitions": { "go": "B" } },
//!     "B": { "transitions": { "back": "A" } }
//!   }
//! }
//! ```

use crate::core::State;
use crate::machine::FsmError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Transitions available from one state, keyed by event name.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateDefinition<S: State> {
    #[serde(default)]
    pub transitions: IndexMap<String, S>,
}

impl<S: State> Default for StateDefinition<S> {
    fn default() -> Self {
        Self {
            transitions: IndexMap::new(),
        }
    }
}

/// Complete configuration of a machine.
///
/// `initial` is not required to be one of `states`; see
/// [`MachineConfig::validate`] for opt-in checking.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct MachineConfig<S: State = String> {
    pub initial: S,
    #[serde(default)]
    pub states: IndexMap<S, StateDefinition<S>>,
}

impl<S: State> MachineConfig<S> {
    /// Parse a configuration from JSON text.
    ///
    /// A JSON `null` is treated as an absent configuration.
    ///
    /// # Example
    ///
    /// ```rust
    /// use undofsm::config::MachineConfig;
    ///
    /// let config: MachineConfig = MachineConfig::from_json(
    ///     r#"{"initial": "A", "states": {"A": {"transitions": {"go": "B"}}, "B": {}}}"#,
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(config.initial, "A");
    /// assert_eq!(config.destination(&"A".to_string(), "go"), Some(&"B".to_string()));
    /// assert!(MachineConfig::<String>::from_json("null").is_err());
    /// ```
    pub fn from_json(json: &str) -> Result<Self, FsmError> {
        let value: Value =
            serde_json::from_str(json).map_err(|e| FsmError::Configuration(e.to_string()))?;
        Self::from_value(value)
    }

    /// Build a configuration from an already parsed JSON value.
    pub fn from_value(value: Value) -> Result<Self, FsmError> {
        if value.is_null() {
            return Err(FsmError::Configuration("configuration is absent".to_string()));
        }
        serde_json::from_value(value).map_err(|e| FsmError::Configuration(e.to_string()))
    }

    /// Whether `state` is one of the configured states.
    pub fn contains_state(&self, state: &S) -> bool {
        self.states.contains_key(state)
    }

    /// Definition of `state`, if it is configured.
    pub fn definition(&self, state: &S) -> Option<&StateDefinition<S>> {
        self.states.get(state)
    }

    /// Where `event` leads from `state`, if anywhere.
    pub fn destination(&self, state: &S, event: &str) -> Option<&S> {
        self.states.get(state)?.transitions.get(event)
    }

    /// Check that the initial state and every transition destination are
    /// configured states.
    ///
    /// Reports the first problem found. Reachability is not checked.
    pub fn validate(&self) -> Result<(), FsmError> {
        if !self.contains_state(&self.initial) {
            return Err(FsmError::Configuration(format!(
                "initial state '{}' is not a configured state",
                self.initial.name()
            )));
        }

        for (state, definition) in &self.states {
            for (event, target) in &definition.transitions {
                if !self.contains_state(target) {
                    return Err(FsmError::Configuration(format!(
                        "event '{}' on state '{}' leads to unknown state '{}'",
                        event,
                        state.name(),
                        target.name()
                    )));
                }
            }
        }

        Ok(())
    }
}
