//! Macros for ergonomic state declaration.

/// Declare an enum usable as a machine state.
///
/// Derives the traits `State` requires and implements `name()` as the
/// variant name. The calling crate needs `serde` as a dependency.
///
/// # Example
///
/// ```
/// use undofsm::core::State;
/// use undofsm::state_enum;
///
/// state_enum! {
///     pub enum Phase {
///         Draft,
///         Review,
///         Published,
///     }
/// }
///
/// assert_eq!(Phase::Review.name(), "Review");
/// ```
#[macro_export]
macro_rules! state_enum {
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
        #[derive(Clone, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}
