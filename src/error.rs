//! Error and result types for the registration surfaces.

use derive_more::{Display, Error};

/// Crate-wide result alias.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Failures from deck registration and parameter binding.
///
/// The actuator path itself is total over its input domain and never returns
/// an error; see [`crate::servo`].
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The deck registry has no free slot left.
    #[display("deck registry is full")]
    DeckRegistryFull,

    /// A deck with the same name is already registered.
    #[display("deck '{name}' is already registered")]
    DeckAlreadyRegistered {
        /// Name the colliding driver registered under.
        name: &'static str,
    },

    /// The parameter group has no free slot left.
    #[display("parameter group is full")]
    ParamGroupFull,

    /// A parameter with the same name already exists in the group.
    #[display("parameter '{name}' is already declared")]
    ParamAlreadyDeclared {
        /// Name of the colliding entry.
        name: &'static str,
    },

    /// No parameter with the requested name exists in the group.
    #[display("unknown parameter")]
    UnknownParam,

    /// The parameter is read-only from the host side.
    #[display("parameter is read-only")]
    ParamReadOnly,

    /// The written value does not match the parameter's declared type.
    #[display("parameter type mismatch")]
    ParamTypeMismatch,
}
