//! Error types for palette loading and lookups.

use std::path::PathBuf;

use swatch_color::ColorError;
use thiserror::Error;

/// Result type for theme operations.
pub type ThemeResult<T> = Result<T, ThemeError>;

/// Errors that can occur while loading or using a palette.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// I/O error reading a palette file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error.
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Palette file not found.
    #[error("palette file not found: {path}")]
    PaletteNotFound {
        /// Path that was searched.
        path: PathBuf,
    },

    /// A palette entry is not a valid color string.
    #[error("invalid color for {name:?}: {source}")]
    InvalidColor {
        /// Palette entry name.
        name: String,
        /// Underlying parse error.
        #[source]
        source: ColorError,
    },

    /// A derived entry refers to a color that does not exist.
    #[error("{name:?} derives from unknown color {from:?}")]
    UnknownReference {
        /// Derived entry name.
        name: String,
        /// Missing base color name.
        from: String,
    },

    /// Color operation failed.
    #[error(transparent)]
    Color(#[from] ColorError),
}

impl ThemeError {
    /// Creates a [`ThemeError::InvalidColor`] error.
    #[inline]
    pub fn invalid_color(name: impl Into<String>, source: ColorError) -> Self {
        Self::InvalidColor {
            name: name.into(),
            source,
        }
    }

    /// Returns `true` if this error came from reading or parsing the file.
    #[inline]
    pub fn is_load_error(&self) -> bool {
        matches!(self, Self::Io(_) | Self::Yaml(_) | Self::PaletteNotFound { .. })
    }
}
