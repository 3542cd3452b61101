//! Guarded state cell.
//!
//! This module contains the storage side of a state machine:
//! - Label definitions via the `Label` trait
//! - `GuardedState`, a reader/writer-locked holder for the current label
//!
//! Transition rules live with the caller; nothing here validates them.

mod cell;
mod label;

pub use cell::GuardedState;
pub use label::Label;
