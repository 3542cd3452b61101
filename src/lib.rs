//! Statekit: thread-safe building blocks for stateful services
//!
//! Two independent in-memory primitives that a service embeds in its own
//! domain objects:
//!
//! - **GuardedState**: a reader/writer-locked cell holding the current
//!   state label of an object, for use beneath finite-state-machine logic
//! - **RangeIdAllocator**: hands out unique integer IDs from a fixed
//!   inclusive range and reclaims them for reuse
//!
//! Both are `Send + Sync`; share them across threads with `Arc`.
//!
//! # Example
//!
//! ```rust
//! use statekit::core::GuardedState;
//! use statekit::idgen::RangeIdAllocator;
//! use statekit::label_enum;
//!
//! label_enum! {
//!     pub enum ConnState {
//!         Opening,
//!         Open,
//!         Closed,
//!     }
//! }
//!
//! struct Connection {
//!     id: i64,
//!     state: GuardedState<ConnState>,
//! }
//!
//! let ids = RangeIdAllocator::new(1, 1024).unwrap();
//! let conn = Connection {
//!     id: ids.allocate().unwrap(),
//!     state: GuardedState::new(ConnState::Opening),
//! };
//!
//! conn.state.set(ConnState::Open);
//! assert!(conn.state.is(&ConnState::Open));
//!
//! conn.state.set(ConnState::Closed);
//! ids.free(conn.id);
//! assert_eq!(ids.in_use(), 0);
//! ```

pub mod builder;
pub mod core;
pub mod idgen;

// Re-export commonly used types
pub use builder::AllocatorBuilder;
pub use crate::core::{GuardedState, Label};
pub use idgen::{AllocError, IdRange, RangeIdAllocator};
