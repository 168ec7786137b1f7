//! Core state machine types.
//!
//! This module contains the building blocks the machine is made of:
//! - State identifiers via the `State` trait
//! - Linear undo/redo tracking via `History`
//!
//! Nothing here knows about configurations or events.

mod history;
mod state;

pub use history::History;
pub use state::State;
