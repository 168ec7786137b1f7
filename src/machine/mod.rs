//! The state machine itself.
//!
//! A `StateMachine` owns its configuration, its current state and its
//! undo/redo history. Forward moves (`change_state`, `trigger`) record the
//! state being left and forget anything that could have been redone;
//! `undo`/`redo` walk the recorded history in either direction.

mod error;

pub use error::FsmError;

use crate::config::MachineConfig;
use crate::core::{History, State};
use serde_json::Value;
use tracing::{debug, trace, warn};

/// Finite state machine with linear undo/redo.
///
/// # Example
///
/// ```rust
/// use undofsm::StateMachine;
///
/// let mut machine: StateMachine = StateMachine::from_json(
///     r#"{
///         "initial": "A",
///         "states": {
///             "A": { "transitions": { "go": "B" } },
///             "B": { "transitions": { "back": "A" } }
///         }
///     }"#,
/// )
/// .unwrap();
///
/// machine.trigger("go").unwrap();
/// assert_eq!(machine.state(), "B");
///
/// assert!(machine.undo());
/// assert_eq!(machine.state(), "A");
///
/// assert!(machine.redo());
/// assert_eq!(machine.state(), "B");
///
/// machine.trigger("back").unwrap();
/// assert!(!machine.redo());
/// ```
#[derive(Clone, Debug)]
pub struct StateMachine<S: State = String> {
    config: MachineConfig<S>,
    current: S,
    history: History<S>,
}

impl<S: State> StateMachine<S> {
    /// Create a machine in the configured initial state with empty history.
    ///
    /// The initial state is not required to be a configured state. A
    /// machine started outside its configuration can only leave via
    /// `change_state`.
    pub fn new(config: MachineConfig<S>) -> Self {
        if !config.contains_state(&config.initial) {
            warn!(
                initial = config.initial.name(),
                "initial state is not a configured state"
            );
        }

        Self {
            current: config.initial.clone(),
            config,
            history: History::new(),
        }
    }

    /// Create a machine after checking the configuration with
    /// [`MachineConfig::validate`].
    pub fn strict(config: MachineConfig<S>) -> Result<Self, FsmError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Create a machine from JSON configuration text.
    pub fn from_json(json: &str) -> Result<Self, FsmError> {
        Ok(Self::new(MachineConfig::from_json(json)?))
    }

    /// Create a machine from a parsed JSON configuration.
    ///
    /// `Value::Null` is an absent configuration and fails.
    pub fn from_value(value: Value) -> Result<Self, FsmError> {
        Ok(Self::new(MachineConfig::from_value(value)?))
    }

    /// Current state (pure)
    pub fn state(&self) -> &S {
        &self.current
    }

    /// Configured initial state (pure)
    pub fn initial(&self) -> &S {
        &self.config.initial
    }

    /// Configuration the machine was built from (pure)
    pub fn config(&self) -> &MachineConfig<S> {
        &self.config
    }

    /// Undo/redo history (pure)
    pub fn history(&self) -> &History<S> {
        &self.history
    }

    /// Whether `undo` would move the machine (pure)
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Whether `redo` would move the machine (pure)
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Jump to `target` regardless of transitions.
    ///
    /// Fails with [`FsmError::InvalidState`] if `target` is not configured.
    pub fn change_state(&mut self, target: S) -> Result<(), FsmError> {
        if !self.config.contains_state(&target) {
            return Err(FsmError::InvalidState {
                state: target.name().to_string(),
            });
        }

        debug!(from = self.current.name(), to = target.name(), "change state");
        self.advance(target);
        Ok(())
    }

    /// Follow the transition bound to `event` in the current state.
    ///
    /// Fails with [`FsmError::InvalidEvent`] if the current state has no such
    /// transition (or is not configured at all).
    pub fn trigger(&mut self, event: &str) -> Result<(), FsmError> {
        let Some(target) = self.config.destination(&self.current, event) else {
            return Err(FsmError::InvalidEvent {
                event: event.to_string(),
                state: self.current.name().to_string(),
            });
        };
        let target = target.clone();

        debug!(
            event,
            from = self.current.name(),
            to = target.name(),
            "trigger"
        );
        self.advance(target);
        Ok(())
    }

    fn advance(&mut self, target: S) {
        let left = std::mem::replace(&mut self.current, target);
        self.history.record(left);
    }

    /// Return to the initial state and drop the undo history.
    ///
    /// The redo history is kept, so a `redo` straight after `reset` still
    /// replays whatever was last undone.
    pub fn reset(&mut self) -> &mut Self {
        debug!(from = self.current.name(), to = self.config.initial.name(), "reset");
        self.current = self.config.initial.clone();
        self.history.clear_undo();
        self
    }

    /// States in declaration order.
    ///
    /// With no event (or an empty one) every state is returned; otherwise
    /// only states that have a transition for `event`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use undofsm::StateMachine;
    ///
    /// let machine: StateMachine = StateMachine::from_json(
    ///     r#"{"initial": "zulu", "states": {
    ///         "zulu": {"transitions": {"go": "alpha", "stop": "mike"}},
    ///         "alpha": {"transitions": {"go": "zulu"}},
    ///         "mike": {"transitions": {"go": "zulu", "stop": "zulu"}}
    ///     }}"#,
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(machine.states(None), vec!["zulu", "alpha", "mike"]);
    /// assert_eq!(machine.states(Some("stop")), vec!["zulu", "mike"]);
    /// assert!(machine.states(Some("fly")).is_empty());
    /// ```
    pub fn states(&self, event: Option<&str>) -> Vec<&S> {
        match event.filter(|e| !e.is_empty()) {
            None => self.config.states.keys().collect(),
            Some(event) => self
                .config
                .states
                .iter()
                .filter(|(_, definition)| definition.transitions.contains_key(event))
                .map(|(state, _)| state)
                .collect(),
        }
    }

    /// Events the current state reacts to, in declaration order.
    pub fn events(&self) -> Vec<&str> {
        self.config
            .definition(&self.current)
            .map(|definition| definition.transitions.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Step back one state. Returns `false` if there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.history.step_back(&self.current) {
            Some(previous) => {
                debug!(from = self.current.name(), to = previous.name(), "undo");
                self.current = previous;
                true
            }
            None => {
                trace!(state = self.current.name(), "nothing to undo");
                false
            }
        }
    }

    /// Step forward one state. Returns `false` if there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        match self.history.step_forward(&self.current) {
            Some(next) => {
                debug!(from = self.current.name(), to = next.name(), "redo");
                self.current = next;
                true
            }
            None => {
                trace!(state = self.current.name(), "nothing to redo");
                false
            }
        }
    }

    /// Forget both undo and redo history. The current state is kept.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}
