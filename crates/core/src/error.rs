use thiserror::Error;

/// A requested option value was not a member of its allowed set.
///
/// Only surfaced when rendering in strict mode; lenient rendering swallows
/// it and uses `fallback` instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "invalid {family} option {requested:?}: expected one of [{}], would fall back to {fallback:?}",
    .allowed.join(", ")
)]
pub struct InvalidOptionError {
    /// Option family the value was requested for (e.g. `"scheme"`).
    pub family: &'static str,
    /// The value the caller supplied.
    pub requested: String,
    /// Every value the family accepts, in declaration order.
    pub allowed: Vec<String>,
    /// The value lenient mode substitutes.
    pub fallback: String,
}

/// A caller tried to override an attribute that a component or slot fixes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("`{key}` is not an accepted argument for {owner}")]
pub struct StructuralConflictError {
    /// The offending configuration key.
    pub key: &'static str,
    /// Component or slot that owns the fixed attribute (e.g. `"Subhead.description"`).
    pub owner: &'static str,
}

/// Errors that can occur while rendering a component tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewError {
    /// Invalid option value in strict mode.
    #[error(transparent)]
    InvalidOption(#[from] InvalidOptionError),
    /// Fixed structural attribute overridden by the caller.
    #[error(transparent)]
    StructuralConflict(#[from] StructuralConflictError),
    /// Icon name not present in the icon table.
    #[error("unknown icon: {name:?}")]
    UnknownIcon {
        /// The requested icon name.
        name: String,
    },
}

impl ViewError {
    /// Create an unknown icon error
    pub fn unknown_icon(name: impl Into<String>) -> Self {
        Self::UnknownIcon { name: name.into() }
    }

    /// Returns true if lenient rendering would have recovered from this error.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ViewError::InvalidOption(_))
    }
}
