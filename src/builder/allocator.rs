//! Builder for constructing range allocators from configuration.

use crate::idgen::{AllocError, IdRange, RangeIdAllocator, DEFAULT_MAX_RANGE_SIZE};

/// Builder for [`RangeIdAllocator`] with a fluent API.
///
/// # Example
///
/// ```
/// use statekit::builder::AllocatorBuilder;
///
/// let ids = AllocatorBuilder::new()
///     .min(1)
///     .max(1 << 26)
///     .max_range_size(1 << 26)
///     .build()
///     .unwrap();
///
/// assert_eq!(ids.capacity(), 1 << 26);
/// ```
#[derive(Clone, Debug)]
pub struct AllocatorBuilder {
    min: Option<i64>,
    max: Option<i64>,
    max_range_size: u64,
}

impl AllocatorBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            min: None,
            max: None,
            max_range_size: DEFAULT_MAX_RANGE_SIZE,
        }
    }

    /// Set the lowest ID (required).
    pub fn min(mut self, min: i64) -> Self {
        self.min = Some(min);
        self
    }

    /// Set the highest ID (required).
    pub fn max(mut self, max: i64) -> Self {
        self.max = Some(max);
        self
    }

    /// Set both bounds from a configured range.
    pub fn range(self, range: IdRange) -> Self {
        self.min(range.min).max(range.max)
    }

    /// Override the largest range size the allocator may track.
    pub fn max_range_size(mut self, limit: u64) -> Self {
        self.max_range_size = limit;
        self
    }

    /// Build the allocator.
    /// Returns an error if a bound is missing or the range is unusable.
    pub fn build(self) -> Result<RangeIdAllocator, AllocError> {
        let min = self.min.ok_or(AllocError::MissingBound("min"))?;
        let max = self.max.ok_or(AllocError::MissingBound("max"))?;
        RangeIdAllocator::with_limit(IdRange::new(min, max), self.max_range_size)
    }
}

impl Default for AllocatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
