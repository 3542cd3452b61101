//! Connection State
//!
//! This example tracks a connection's lifecycle in a `GuardedState` shared
//! between a driver thread and several observers.
//!
//! Key concepts:
//! - Labels declared with `label_enum!`
//! - Reads run concurrently; writes are exclusive
//! - Transition rules stay with the caller, not the cell
//!
//! Run with: cargo run --example connection_state

use statekit::core::{GuardedState, Label};
use statekit::label_enum;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

label_enum! {
    enum ConnectionState {
        Disconnected,
        Connecting,
        Connected,
        Closing,
    }
}

// The cell accepts any label; the caller decides which moves are legal.
fn allowed(from: ConnectionState, to: ConnectionState) -> bool {
    use ConnectionState::*;
    matches!(
        (from, to),
        (Disconnected, Connecting)
            | (Connecting, Connected)
            | (Connecting, Disconnected)
            | (Connected, Closing)
            | (Closing, Disconnected)
    )
}

fn advance(state: &GuardedState<ConnectionState>, to: ConnectionState) {
    let from = state.current();
    if allowed(from, to) {
        state.set(to);
        println!("  {} -> {}", from.name(), to.name());
    } else {
        println!("  rejected {} -> {}", from.name(), to.name());
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== Connection State Example ===\n");

    let state = Arc::new(GuardedState::new(ConnectionState::Disconnected));

    let observers: Vec<_> = (0..3)
        .map(|n| {
            let state = Arc::clone(&state);
            thread::spawn(move || {
                for _ in 0..4 {
                    println!("  observer {n} sees {}", state.current().name());
                    thread::sleep(Duration::from_millis(5));
                }
            })
        })
        .collect();

    advance(&state, ConnectionState::Connecting);
    advance(&state, ConnectionState::Closing);
    advance(&state, ConnectionState::Connected);
    advance(&state, ConnectionState::Closing);
    advance(&state, ConnectionState::Disconnected);

    for observer in observers {
        let _ = observer.join();
    }

    println!("\nFinal state: {:?}", state.current());
    println!("\n=== Example Complete ===");
}
