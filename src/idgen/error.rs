//! Allocator error types.

use thiserror::Error;

/// Errors that can occur when building or using a range allocator
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AllocError {
    /// Every ID in the range is currently allocated
    #[error("No available value in range [{min}, {max}] to allocate id")]
    CapacityExhausted { min: i64, max: i64 },

    /// Upper bound is below the lower bound
    #[error("Invalid id range: max ({max}) is less than min ({min})")]
    InvalidRange { min: i64, max: i64 },

    /// Range holds more IDs than the allocator is allowed to track
    #[error("Id range of {size} values exceeds the limit of {limit}")]
    RangeTooLarge { size: u64, limit: u64 },

    /// Bitmap for the range could not be allocated
    #[error("Cannot allocate tracking space for {size} ids")]
    OutOfMemory { size: u64 },

    /// A required builder bound was not set
    #[error("Allocator bound `{0}` not specified")]
    MissingBound(&'static str),
}
