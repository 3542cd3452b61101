//! Macros for declaring label enums.

/// Generate a label enum and its `Label` implementation.
///
/// Each variant's name is its identifier. The enum derives `Clone`, `Copy`,
/// `PartialEq`, `Eq`, `Hash`, `Debug` and serde's `Serialize`/`Deserialize`.
///
/// # Example
///
/// ```
/// use statekit::core::Label;
/// use statekit::label_enum;
///
/// label_enum! {
///     pub enum SessionState {
///         Connecting,
///         Active,
///         Closed,
///     }
/// }
///
/// assert_eq!(SessionState::Active.name(), "Active");
/// ```
#[macro_export]
macro_rules! label_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::Label for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}
