//! Linear undo/redo history.
//!
//! History is two stacks of previously occupied states. Moving forward
//! records the state being left and discards anything that could be redone;
//! stepping back and forth shuttles states between the stacks.

use super::state::State;
use serde::{Deserialize, Serialize};

/// Undo and redo stacks of a state machine.
///
/// Both stacks keep their most recent entry last.
///
/// # Example
///
/// ```rust
/// use undofsm::core::History;
///
/// let mut history: History<String> = History::new();
/// history.record("A".to_string());
///
/// // Currently in "B"; stepping back yields "A" and remembers "B".
/// let previous = history.step_back(&"B".to_string());
/// assert_eq!(previous.as_deref(), Some("A"));
/// assert!(history.can_redo());
///
/// let next = history.step_forward(&"A".to_string());
/// assert_eq!(next.as_deref(), Some("B"));
/// assert!(!history.can_redo());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct History<S: State> {
    undo: Vec<S>,
    redo: Vec<S>,
}

impl<S: State> Default for History<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> History<S> {
    /// Create an empty history.
    pub fn new() -> Self {
        Self {
            undo: Vec::new(),
            redo: Vec::new(),
        }
    }

    /// Record a forward move away from `left`.
    ///
    /// Any redoable states are dropped: once the machine moves forward the
    /// undone branch is gone.
    pub fn record(&mut self, left: S) {
        self.undo.push(left);
        self.redo.clear();
    }

    /// Step back from `current`.
    ///
    /// Returns the state to move to, or `None` (leaving history untouched)
    /// when there is nothing to undo.
    pub fn step_back(&mut self, current: &S) -> Option<S> {
        let previous = self.undo.pop()?;
        self.redo.push(current.clone());
        Some(previous)
    }

    /// Step forward from `current`, reversing the most recent step back.
    ///
    /// Returns `None` (leaving history untouched) when there is nothing to
    /// redo.
    pub fn step_forward(&mut self, current: &S) -> Option<S> {
        let next = self.redo.pop()?;
        self.undo.push(current.clone());
        Some(next)
    }

    /// Drop both stacks.
    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }

    /// Drop the undo stack only. The redo stack survives.
    pub fn clear_undo(&mut self) {
        self.undo.clear();
    }

    /// Whether `step_back` has a state to return.
    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    /// Whether `step_forward` has a state to return.
    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// States that `step_back` would return, oldest first.
    pub fn undo_stack(&self) -> &[S] {
        &self.undo
    }

    /// States that `step_forward` would return, the next one last.
    pub fn redo_stack(&self) -> &[S] {
        &self.redo
    }

    /// Total number of remembered states across both stacks.
    pub fn len(&self) -> usize {
        self.undo.len() + self.redo.len()
    }

    /// True when neither stack holds a state.
    pub fn is_empty(&self) -> bool {
        self.undo.is_empty() && self.redo.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(name: &str) -> String {
        name.to_string()
    }

    #[test]
    fn new_history_is_empty() {
        let history: History<String> = History::new();
        assert!(history.is_empty());
        assert!(!history.can_undo());
        assert!(!history.can_redo());
        assert_eq!(history.len(), 0);
    }

    #[test]
    fn record_pushes_onto_undo() {
        let mut history = History::new();
        history.record(s("A"));
        history.record(s("B"));

        assert_eq!(history.undo_stack(), &[s("A"), s("B")]);
        assert!(history.redo_stack().is_empty());
    }

    #[test]
    fn record_discards_redo() {
        let mut history = History::new();
        history.record(s("A"));
        history.step_back(&s("B"));
        assert!(history.can_redo());

        history.record(s("A"));

        assert!(!history.can_redo());
        assert_eq!(history.undo_stack(), &[s("A")]);
    }

    #[test]
    fn step_back_on_empty_is_noop() {
        let mut history: History<String> = History::new();
        assert_eq!(history.step_back(&s("A")), None);
        assert!(history.is_empty());
    }

    #[test]
    fn step_forward_on_empty_is_noop() {
        let mut history = History::new();
        history.record(s("A"));
        assert_eq!(history.step_forward(&s("B")), None);
        assert_eq!(history.undo_stack(), &[s("A")]);
        assert!(history.redo_stack().is_empty());
    }

    #[test]
    fn step_back_and_forward_shuttle_states() {
        let mut history = History::new();
        history.record(s("A"));
        history.record(s("B"));

        assert_eq!(history.step_back(&s("C")), Some(s("B")));
        assert_eq!(history.step_back(&s("B")), Some(s("A")));
        assert_eq!(history.redo_stack(), &[s("C"), s("B")]);

        assert_eq!(history.step_forward(&s("A")), Some(s("B")));
        assert_eq!(history.step_forward(&s("B")), Some(s("C")));
        assert_eq!(history.undo_stack(), &[s("A"), s("B")]);
        assert!(!history.can_redo());
    }

    #[test]
    fn clear_undo_keeps_redo() {
        let mut history = History::new();
        history.record(s("A"));
        history.record(s("B"));
        history.step_back(&s("C"));

        history.clear_undo();

        assert!(!history.can_undo());
        assert_eq!(history.redo_stack(), &[s("C")]);
    }

    #[test]
    fn clear_drops_everything() {
        let mut history = History::new();
        history.record(s("A"));
        history.record(s("B"));
        history.step_back(&s("C"));

        history.clear();

        assert!(history.is_empty());
    }

    #[test]
    fn history_serializes_correctly() {
        let mut history = History::new();
        history.record(s("A"));
        history.step_back(&s("B"));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: History<String> = serde_json::from_str(&json).unwrap();

        assert_eq!(history, deserialized);
    }
}
