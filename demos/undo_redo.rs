//! Undo/Redo Walkthrough
//!
//! This example drives a small document workflow and walks its history.
//!
//! Key concepts:
//! - Loading a configuration from JSON
//! - Event transitions and direct state changes
//! - Undo/redo and how forward moves discard the redo branch
//! - Reset keeps the redo branch
//!
//! Run with: RUST_LOG=undofsm=debug cargo run --example undo_redo

use tracing_subscriber::EnvFilter;
use undofsm::{FsmError, StateMachine};

const WORKFLOW: &str = r#"{
    "initial": "draft",
    "states": {
        "draft":     { "transitions": { "submit": "review" } },
        "review":    { "transitions": { "approve": "published", "reject": "draft" } },
        "published": { "transitions": { "archive": "archived" } },
        "archived":  {}
    }
}"#;

fn main() -> Result<(), FsmError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Undo/Redo Walkthrough ===\n");

    let mut machine: StateMachine = StateMachine::from_json(WORKFLOW)?;
    println!("Initial state: {}", machine.state());
    println!("All states: {:?}", machine.states(None));
    println!("States reacting to 'approve': {:?}\n", machine.states(Some("approve")));

    machine.trigger("submit")?;
    machine.trigger("approve")?;
    println!("After submit + approve: {}", machine.state());

    if let Err(err) = machine.trigger("reject") {
        println!("Rejected event: {err}");
    }

    machine.undo();
    println!("Undo: {}", machine.state());
    machine.redo();
    println!("Redo: {}", machine.state());

    machine.undo();
    machine.trigger("reject")?;
    println!(
        "Undo then reject: {} (redo available: {})",
        machine.state(),
        machine.can_redo()
    );

    machine.change_state("archived".to_string())?;
    machine.undo();
    machine.reset();
    println!(
        "\nAfter reset: {} (undo available: {}, redo available: {})",
        machine.state(),
        machine.can_undo(),
        machine.can_redo()
    );

    machine.clear_history();
    println!("After clear_history: undo={} redo={}", machine.undo(), machine.redo());

    println!("\n=== Example Complete ===");
    Ok(())
}
