//! # swatch-color
//!
//! Color string engine for UI theming, chart styling and GPU clear colors.
//!
//! - **Parsing** - `#rrggbb[aa]`, `rgb()/rgba()`, `hsl()/hsla()`, `color(srgb ...)`
//! - **Conversion** - RGB ↔ HSL, RGB → hex bytes, RGB → float vector
//! - **Serialization** - back to hex, rgb or hsl text
//! - **Adjustment** - hue/saturation/lightness/alpha, written back in the
//!   caller's own notation
//! - **Contrast** - WCAG relative luminance and contrast ratio, premultiplied alpha
//!
//! # Architecture
//!
//! ```text
//!        adjust         contrast
//!           |               |
//!           +-------+-------+
//!                   |
//!     parse ---> convert <--- format
//!                   |
//!                 model
//! ```
//!
//! All functions are pure; there is no shared state.
//!
//! # Quick Start
//!
//! ```rust
//! use swatch_color::{convert, contrast_ratio, Format};
//! use swatch_color::adjust::{lighten, set_alpha};
//!
//! assert_eq!(convert("rgb(255, 87, 51)", Format::Hex).unwrap(), "#ff5733");
//! assert_eq!(lighten("hsl(10.59, 100%, 60%)", 10.0).unwrap(), "hsl(10.59, 100%, 70%)");
//! assert_eq!(set_alpha("hsl(10.59, 100%, 60%)", 0.5).unwrap(), "hsla(10.59, 100%, 60%, 50%)");
//!
//! let ratio = contrast_ratio("#ffffff", "#ff5733").unwrap();
//! assert!(ratio > 3.0);
//! ```
//!
//! # Errors
//!
//! Unknown notations fail with [`ColorError::InvalidFormat`]. Recognized
//! notations with unusable numbers fail with [`ColorError::InvalidComponent`]
//! or [`ColorError::Malformed`]; they never produce NaN channels.
//!
//! # Used By
//!
//! - `swatch-theme` - palette validation and contrast audits
//! - `swatch` - command-line front end

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod adjust;
pub mod contrast;
pub mod convert;
mod error;
pub mod format;
pub mod model;
pub mod parse;
pub mod wcag;

pub use contrast::{
    blend_with_white, clear_color, contrast_ratio, contrast_ratio_against_black,
    contrast_ratio_rgb, premultiply_alpha, relative_luminance,
};
pub use error::{ColorError, ColorResult};
pub use format::{
    convert, destructure_to_float, destructure_to_hex, destructure_to_hsl, destructure_to_rgb,
    to_hex_string, to_hsl_string, to_rgb_string,
};
pub use model::{ColorSource, FloatRgba, Format, Hex, Hsl, Notation, Rgb};
pub use parse::{parse_hsl, parse_rgb};
pub use wcag::{WcagLevel, wcag_levels};

/// Prelude with commonly used types and functions
pub mod prelude {
    pub use crate::adjust::{
        add_hue, alpha, darken, hue, lighten, lightness, saturation, set_alpha, set_hue,
        set_lightness, set_saturation,
    };
    pub use crate::{
        ColorError, ColorResult, FloatRgba, Format, Hex, Hsl, Notation, Rgb, WcagLevel,
        contrast_ratio, convert, parse_hsl, parse_rgb, premultiply_alpha,
    };
}
