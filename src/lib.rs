//! Undofsm: a config-driven finite state machine with undo/redo
//!
//! A machine is built from a declarative configuration of states and the
//! events that move between them. It tracks the current state and keeps a
//! linear history that can be stepped back and forth.
//!
//! # Core Concepts
//!
//! - **State**: Any identifier implementing the `State` trait (`String` by default)
//! - **Configuration**: Initial state plus per-state event transitions, from JSON or a builder
//! - **History**: Undo and redo stacks; forward moves discard the redo branch
//!
//! # Example
//!
//! ```rust
//! use undofsm::builder::ConfigBuilder;
//! use undofsm::StateMachine;
//!
//! let config = ConfigBuilder::new()
//!     .initial("draft".to_string())
//!     .transition("draft".to_string(), "submit", "review".to_string())
//!     .transition("review".to_string(), "approve", "published".to_string())
//!     .state("published".to_string())
//!     .build()
//!     .unwrap();
//!
//! let mut machine = StateMachine::strict(config).unwrap();
//! machine.trigger("submit").unwrap();
//! machine.trigger("approve").unwrap();
//! assert_eq!(machine.state(), "published");
//!
//! assert!(machine.undo());
//! assert_eq!(machine.state(), "review");
//!
//! machine.change_state("draft".to_string()).unwrap();
//! assert!(!machine.redo());
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod machine;

// Re-export commonly used types
pub use config::{MachineConfig, StateDefinition};
pub use core::{History, State};
pub use machine::{FsmError, StateMachine};
