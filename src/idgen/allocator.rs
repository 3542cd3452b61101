//! Bounded-range ID allocator with circular free-slot scanning.

use super::bitmap::OffsetBitmap;
use super::error::AllocError;
use super::range::IdRange;
use parking_lot::Mutex;
use std::fmt;
use tracing::{debug, trace};

/// Largest range [`RangeIdAllocator::new`] accepts (16M IDs, 2 MiB of bitmap).
///
/// Use [`AllocatorBuilder::max_range_size`](crate::builder::AllocatorBuilder::max_range_size)
/// to raise it.
pub const DEFAULT_MAX_RANGE_SIZE: u64 = 1 << 24;

/// Mutable part of the allocator, guarded by one lock.
struct Pool {
    /// Next offset to probe, always in `[0, size)`.
    cursor: u64,
    allocated: OffsetBitmap,
    in_use: u64,
}

impl Pool {
    fn advance(&mut self) {
        self.cursor = (self.cursor + 1) % self.allocated.len();
    }
}

/// Hands out unique IDs from a fixed inclusive range and takes them back.
///
/// IDs are found by scanning forward from a persistent cursor, wrapping at
/// the end of the range. The cursor moves past every ID it hands out, so
/// freed IDs are picked up again when the scan comes back around to them.
///
/// # Example
///
/// ```rust
/// use statekit::idgen::{AllocError, RangeIdAllocator};
///
/// let ids = RangeIdAllocator::new(10, 12).unwrap();
///
/// assert_eq!(ids.allocate(), Ok(10));
/// assert_eq!(ids.allocate(), Ok(11));
/// assert_eq!(ids.allocate(), Ok(12));
/// assert_eq!(
///     ids.allocate(),
///     Err(AllocError::CapacityExhausted { min: 10, max: 12 })
/// );
///
/// ids.free(11);
/// assert_eq!(ids.allocate(), Ok(11));
/// ```
pub struct RangeIdAllocator {
    range: IdRange,
    size: u64,
    pool: Mutex<Pool>,
}

impl RangeIdAllocator {
    /// Create an allocator over `[min, max]`.
    ///
    /// Fails with [`AllocError::InvalidRange`] when `max < min` and with
    /// [`AllocError::RangeTooLarge`] when the range holds more than
    /// [`DEFAULT_MAX_RANGE_SIZE`] IDs. [`AllocError::OutOfMemory`] is
    /// returned if the tracking bitmap cannot be allocated.
    pub fn new(min: i64, max: i64) -> Result<Self, AllocError> {
        Self::with_limit(IdRange::new(min, max), DEFAULT_MAX_RANGE_SIZE)
    }

    /// Create an allocator from configured bounds.
    pub fn from_range(range: IdRange) -> Result<Self, AllocError> {
        Self::with_limit(range, DEFAULT_MAX_RANGE_SIZE)
    }

    pub(crate) fn with_limit(range: IdRange, limit: u64) -> Result<Self, AllocError> {
        if range.max < range.min {
            return Err(AllocError::InvalidRange {
                min: range.min,
                max: range.max,
            });
        }
        // Only the full i64 span has no u64 size; no limit can admit it.
        let size = range
            .size()
            .ok_or(AllocError::RangeTooLarge { size: u64::MAX, limit })?;
        if size > limit {
            return Err(AllocError::RangeTooLarge { size, limit });
        }
        let allocated = OffsetBitmap::try_new(size).ok_or(AllocError::OutOfMemory { size })?;

        debug!(min = range.min, max = range.max, size, "created id allocator");
        Ok(Self {
            range,
            size,
            pool: Mutex::new(Pool {
                cursor: 0,
                allocated,
                in_use: 0,
            }),
        })
    }

    /// Allocate the next free ID.
    ///
    /// Returns [`AllocError::CapacityExhausted`] when every ID in the range
    /// is in use; the allocator is left exactly as it was before the call.
    pub fn allocate(&self) -> Result<i64, AllocError> {
        let mut pool = self.pool.lock();

        let start = pool.cursor;
        while pool.allocated.get(pool.cursor) {
            pool.advance();
            if pool.cursor == start {
                debug!(
                    min = self.range.min,
                    max = self.range.max,
                    "id range exhausted"
                );
                return Err(AllocError::CapacityExhausted {
                    min: self.range.min,
                    max: self.range.max,
                });
            }
        }

        let offset = pool.cursor;
        pool.allocated.set(offset);
        pool.in_use += 1;
        pool.advance();

        // offset < size, so this stays within [min, max].
        let id = self.range.min.wrapping_add_unsigned(offset);
        trace!(id, "allocated id");
        Ok(id)
    }

    /// Return `id` to the pool.
    ///
    /// IDs outside the range and IDs that are not currently allocated are
    /// ignored, so cleanup paths can free unconditionally.
    pub fn free(&self, id: i64) {
        if !self.range.contains(id) {
            trace!(id, "ignoring free of out-of-range id");
            return;
        }

        let offset = id.abs_diff(self.range.min);
        let mut pool = self.pool.lock();
        if pool.allocated.clear(offset) {
            pool.in_use -= 1;
            trace!(id, "freed id");
        } else {
            trace!(id, "ignoring free of unallocated id");
        }
    }

    pub fn min(&self) -> i64 {
        self.range.min
    }

    pub fn max(&self) -> i64 {
        self.range.max
    }

    pub fn range(&self) -> IdRange {
        self.range
    }

    /// Total number of IDs in the range.
    pub fn capacity(&self) -> u64 {
        self.size
    }

    /// Whether `id` lies within the allocator's bounds.
    pub fn contains(&self, id: i64) -> bool {
        self.range.contains(id)
    }

    /// Whether `id` is currently handed out.
    pub fn is_allocated(&self, id: i64) -> bool {
        self.range.contains(id) && self.pool.lock().allocated.get(id.abs_diff(self.range.min))
    }

    /// Number of IDs currently handed out.
    pub fn in_use(&self) -> u64 {
        self.pool.lock().in_use
    }

    /// Number of IDs that can still be allocated.
    pub fn available(&self) -> u64 {
        self.size - self.in_use()
    }

    #[cfg(test)]
    fn cursor(&self) -> u64 {
        self.pool.lock().cursor
    }
}

impl fmt::Debug for RangeIdAllocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pool = self.pool.lock();
        f.debug_struct("RangeIdAllocator")
            .field("min", &self.range.min)
            .field("max", &self.range.max)
            .field("cursor", &pool.cursor)
            .field("in_use", &pool.in_use)
            .finish()
    }
}
