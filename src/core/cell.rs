//! Thread-safe holder for the current state label.

use super::label::Label;
use parking_lot::RwLock;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use tracing::trace;

/// Reader/writer-locked cell holding one label.
///
/// The cell is a storage primitive: it never checks whether moving from one
/// label to another is legal. Callers that need transition rules validate
/// them before calling [`set`](Self::set).
///
/// Reads run concurrently with each other and are exclusive with writes.
///
/// # Example
///
/// ```rust
/// use statekit::core::GuardedState;
/// use statekit::label_enum;
///
/// label_enum! {
///     pub enum Door {
///         Open,
///         Closed,
///         Locked,
///     }
/// }
///
/// let door = GuardedState::new(Door::Closed);
/// assert!(door.is(&Door::Closed));
///
/// door.set(Door::Locked);
/// assert_eq!(door.current(), Door::Locked);
/// ```
pub struct GuardedState<L: Label> {
    current: RwLock<L>,
}

impl<L: Label> GuardedState<L> {
    /// Create a cell holding `initial`.
    pub fn new(initial: L) -> Self {
        Self {
            current: RwLock::new(initial),
        }
    }

    /// Copy of the current label.
    pub fn current(&self) -> L {
        self.current.read().clone()
    }

    /// Check whether the current label equals `target`.
    pub fn is(&self, target: &L) -> bool {
        *self.current.read() == *target
    }

    /// Overwrite the current label. Any label may follow any other.
    pub fn set(&self, next: L) {
        self.replace(next);
    }

    /// Overwrite the current label and return the one it replaced.
    ///
    /// ```rust
    /// use statekit::core::GuardedState;
    ///
    /// let phase = GuardedState::new("handshake");
    /// let previous = phase.replace("streaming");
    ///
    /// assert_eq!(previous, "handshake");
    /// assert!(phase.is(&"streaming"));
    /// ```
    pub fn replace(&self, next: L) -> L {
        let mut current = self.current.write();
        trace!(from = current.name(), to = next.name(), "state label set");
        std::mem::replace(&mut *current, next)
    }

    /// Run `f` against the current label while holding the read lock.
    ///
    /// Keep `f` short; writers wait until it returns.
    pub fn with_current<R>(&self, f: impl FnOnce(&L) -> R) -> R {
        f(&*self.current.read())
    }

    /// Consume the cell and return its label.
    pub fn into_inner(self) -> L {
        self.current.into_inner()
    }
}

impl<L: Label + Default> Default for GuardedState<L> {
    fn default() -> Self {
        Self::new(L::default())
    }
}

impl<L: Label> From<L> for GuardedState<L> {
    fn from(initial: L) -> Self {
        Self::new(initial)
    }
}

impl<L: Label> fmt::Debug for GuardedState<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GuardedState")
            .field("current", &*self.current.read())
            .finish()
    }
}

#[derive(Serialize)]
struct CellRef<'a, L> {
    #[serde(rename = "Current")]
    current: &'a L,
}

#[derive(Deserialize)]
struct CellOwned<L> {
    #[serde(rename = "Current")]
    current: L,
}

// The lock itself is never part of the serialized form.
impl<L: Label + Serialize> Serialize for GuardedState<L> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let current = self.current.read();
        CellRef { current: &*current }.serialize(serializer)
    }
}

impl<'de, L: Label + Deserialize<'de>> Deserialize<'de> for GuardedState<L> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        CellOwned::<L>::deserialize(deserializer).map(|cell| Self::new(cell.current))
    }
}
