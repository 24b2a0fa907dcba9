//! Render-time configuration.

use serde::{Deserialize, Serialize};

/// How the option resolver treats values outside their allowed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FallbackMode {
    /// Substitute the fallback silently (production behaviour).
    #[default]
    Lenient,
    /// Return an [`InvalidOptionError`](crate::InvalidOptionError) instead of falling back.
    Strict,
}

impl FallbackMode {
    /// Returns true for [`FallbackMode::Strict`].
    pub fn is_strict(self) -> bool {
        matches!(self, FallbackMode::Strict)
    }
}

/// Options shared by every component in one render call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RenderOptions {
    /// Raise on invalid option values instead of falling back.
    ///
    /// Meant for test suites that need to see invalid configuration
    /// rather than have the fallback mask it.
    #[serde(default)]
    pub strict_options: bool,
}

impl RenderOptions {
    /// Production defaults: invalid options fall back silently.
    pub const fn lenient() -> Self {
        Self {
            strict_options: false,
        }
    }

    /// Test defaults: invalid options are reported as errors.
    pub const fn strict() -> Self {
        Self {
            strict_options: true,
        }
    }

    /// Returns the resolver mode these options select.
    pub fn fallback_mode(&self) -> FallbackMode {
        if self.strict_options {
            FallbackMode::Strict
        } else {
            FallbackMode::Lenient
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::lenient()
    }
}
