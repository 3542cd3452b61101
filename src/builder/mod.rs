//! Ergonomic construction helpers.
//!
//! - [`label_enum!`](crate::label_enum) declares a label enum with its
//!   `Label` implementation.
//! - [`AllocatorBuilder`] assembles a [`RangeIdAllocator`](crate::idgen::RangeIdAllocator)
//!   from configured bounds.

pub mod allocator;
pub mod macros;

pub use allocator::AllocatorBuilder;
