//! Label trait for values held in a state cell.
//!
//! A label names the position a stateful object is in. The cell that
//! stores it does not interpret it beyond equality and a display name.

use std::borrow::Cow;
use std::fmt::Debug;

/// Trait for state labels.
///
/// All methods are pure. Labels are small values that callers copy in and
/// out of a [`GuardedState`](crate::core::GuardedState).
///
/// # Required Traits
///
/// - `Clone`: reads hand out copies, never references into the cell
/// - `PartialEq`: needed for [`GuardedState::is`](crate::core::GuardedState::is)
/// - `Debug`: labels show up in diagnostics
/// - `Send` + `Sync`: cells are shared across threads
///
/// # Example
///
/// ```rust
/// use statekit::core::Label;
///
/// #[derive(Clone, PartialEq, Debug)]
/// enum LinkState {
///     Down,
///     Negotiating,
///     Up,
/// }
///
/// impl Label for LinkState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Down => "Down",
///             Self::Negotiating => "Negotiating",
///             Self::Up => "Up",
///         }
///     }
/// }
///
/// assert_eq!(LinkState::Negotiating.name(), "Negotiating");
/// ```
pub trait Label: Clone + PartialEq + Debug + Send + Sync {
    /// Get the label's name for display/logging.
    fn name(&self) -> &str;
}

impl Label for String {
    fn name(&self) -> &str {
        self.as_str()
    }
}

impl Label for &'static str {
    fn name(&self) -> &str {
        self
    }
}

impl Label for Cow<'static, str> {
    fn name(&self) -> &str {
        self.as_ref()
    }
}
