//! Bounded-range identifier allocation.
//!
//! [`RangeIdAllocator`] hands out unique integer IDs from a fixed inclusive
//! range and takes them back for reuse. It is meant to sit inside a session
//! or connection manager that calls [`allocate`](RangeIdAllocator::allocate)
//! when an object is created and [`free`](RangeIdAllocator::free) when it
//! goes away.
//!
//! The only failure at runtime is [`AllocError::CapacityExhausted`]; freeing
//! an unknown ID is never an error.

mod allocator;
mod bitmap;
pub mod error;
mod range;

pub use allocator::{RangeIdAllocator, DEFAULT_MAX_RANGE_SIZE};
pub use error::AllocError;
pub use range::IdRange;
