//! # swatch-theme
//!
//! Named color palettes on top of `swatch-color`.
//!
//! - [`Palette`] - YAML palette files with validated and derived colors
//! - [`StyleSource`] / [`resolve_color`] - name lookups that never fail
//! - [`Palette::audit`] - WCAG contrast of every entry against the background
//!
//! # Example
//!
//! ```rust
//! use swatch_theme::{Palette, resolve_color};
//!
//! let palette = Palette::from_yaml_str(r##"
//! name: docs
//! colors:
//!   text: "#1e293b"
//! "##).unwrap();
//!
//! assert_eq!(resolve_color(&palette, "--text"), "#1e293b");
//!
//! let checks = palette.audit(4.5).unwrap();
//! assert!(checks[0].passes);
//! ```
//!
//! # Used By
//!
//! - `swatch theme` - palette lookups and audits from the command line

#![warn(missing_docs)]

mod audit;
mod error;
mod palette;
mod style;

pub use audit::ContrastCheck;
pub use error::{ThemeError, ThemeResult};
pub use palette::{DEFAULT_BACKGROUND, Palette, Scheme};
pub use style::{StyleSource, resolve_color};
