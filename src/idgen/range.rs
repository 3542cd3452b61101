//! Inclusive ID bounds as a plain configuration value.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Inclusive `[min, max]` bounds of an allocatable ID space.
///
/// Deserializable so host services can keep allocator bounds in their own
/// configuration files.
///
/// # Example
///
/// ```rust
/// use statekit::idgen::IdRange;
///
/// let range: IdRange = serde_json::from_str(r#"{"min": 1000, "max": 1999}"#).unwrap();
/// assert_eq!(range.size(), Some(1000));
/// assert!(range.contains(1500));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IdRange {
    pub min: i64,
    pub max: i64,
}

impl IdRange {
    pub fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    /// Number of IDs in the range.
    ///
    /// `None` when `max < min`, or for the full `i64` span whose size does
    /// not fit in a `u64`.
    pub fn size(&self) -> Option<u64> {
        if self.max < self.min {
            return None;
        }
        self.max.abs_diff(self.min).checked_add(1)
    }

    pub fn contains(&self, id: i64) -> bool {
        self.min <= id && id <= self.max
    }
}

impl From<RangeInclusive<i64>> for IdRange {
    fn from(range: RangeInclusive<i64>) -> Self {
        Self::new(*range.start(), *range.end())
    }
}
