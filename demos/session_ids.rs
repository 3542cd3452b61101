//! Session IDs
//!
//! This example hands out session IDs from a small configured range,
//! runs the pool dry, and shows freed IDs coming back into circulation.
//!
//! Key concepts:
//! - Allocator bounds loaded from configuration
//! - `CapacityExhausted` as a recoverable condition
//! - Idempotent `free` on cleanup paths
//!
//! Run with: cargo run --example session_ids

use statekit::builder::AllocatorBuilder;
use statekit::idgen::{AllocError, IdRange};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Session IDs Example ===\n");

    let range: IdRange = match serde_json::from_str(r#"{"min": 10, "max": 12}"#) {
        Ok(range) => range,
        Err(err) => {
            eprintln!("bad range config: {err}");
            return;
        }
    };

    let ids = match AllocatorBuilder::new().range(range).build() {
        Ok(ids) => ids,
        Err(err) => {
            eprintln!("cannot build allocator: {err}");
            return;
        }
    };

    let mut sessions = Vec::new();
    loop {
        match ids.allocate() {
            Ok(id) => {
                println!("  opened session {id}");
                sessions.push(id);
            }
            Err(err @ AllocError::CapacityExhausted { .. }) => {
                println!("  {err}");
                break;
            }
            Err(err) => {
                eprintln!("unexpected error: {err}");
                return;
            }
        }
    }

    let closed = sessions.remove(1);
    ids.free(closed);
    ids.free(closed);
    ids.free(5);
    println!("  closed session {closed} (twice), freed stray id 5");

    match ids.allocate() {
        Ok(id) => println!("  reopened session {id}"),
        Err(err) => println!("  {err}"),
    }

    println!("\nAllocator: {:?}", ids);
    println!("\n=== Example Complete ===");
}
