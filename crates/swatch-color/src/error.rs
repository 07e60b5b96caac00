//! Error types for color string handling.
//!
//! Two failure modes exist:
//! - the string does not start with a recognized notation prefix
//!   ([`ColorError::InvalidFormat`])
//! - the notation is recognized but its contents are not usable numbers
//!   ([`ColorError::InvalidComponent`], [`ColorError::Malformed`])
//!
//! Malformed numerics are rejected rather than propagated as NaN, so every
//! successful call returns finite channel values.

use thiserror::Error;

/// Result type for color operations.
pub type ColorResult<T> = Result<T, ColorError>;

/// Color operation error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorError {
    /// The string does not start with `#`, `rgb`, `hsl` or `color(srgb`.
    ///
    /// An empty string (the usual fallback of a failed style lookup) also
    /// lands here.
    #[error("invalid color string: {0:?}")]
    InvalidFormat(String),

    /// A component of a recognized notation is not a finite number.
    #[error("invalid component {component:?} in color {color:?}")]
    InvalidComponent {
        /// The full color string.
        color: String,
        /// The offending component, as written.
        component: String,
    },

    /// The notation is recognized but structurally broken
    /// (missing parenthesis, wrong number of components, bad hex length).
    #[error("malformed color {color:?}: {reason}")]
    Malformed {
        /// The full color string.
        color: String,
        /// What is wrong with it.
        reason: String,
    },

    /// A format name could not be parsed (`hex`, `rgb`, `hsl`, `float`).
    #[error("unknown color format: {0:?}")]
    UnknownFormat(String),
}

impl ColorError {
    /// Creates an [`ColorError::InvalidFormat`] error.
    #[inline]
    pub fn invalid_format(color: impl Into<String>) -> Self {
        Self::InvalidFormat(color.into())
    }

    /// Creates an [`ColorError::InvalidComponent`] error.
    #[inline]
    pub fn invalid_component(color: impl Into<String>, component: impl Into<String>) -> Self {
        Self::InvalidComponent {
            color: color.into(),
            component: component.into(),
        }
    }

    /// Creates an [`ColorError::Malformed`] error.
    #[inline]
    pub fn malformed(color: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Malformed {
            color: color.into(),
            reason: reason.into(),
        }
    }

    /// Returns `true` if the notation itself was not recognized.
    #[inline]
    pub fn is_format_error(&self) -> bool {
        matches!(self, Self::InvalidFormat(_))
    }

    /// Returns `true` if the notation was recognized but its contents were not.
    #[inline]
    pub fn is_content_error(&self) -> bool {
        matches!(self, Self::InvalidComponent { .. } | Self::Malformed { .. })
    }
}
