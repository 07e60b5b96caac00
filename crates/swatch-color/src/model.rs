//! Numeric color tuples and format selectors.
//!
//! # Types
//!
//! - [`Rgb`] - red/green/blue on the 0-255 scale, optional alpha in [0, 1]
//! - [`Hsl`] - hue in degrees, saturation/lightness in percent, optional alpha
//! - [`Hex`] - two-character lowercase hex bytes, optional alpha byte
//! - [`FloatRgba`] - `[r, g, b, a]` in [0, 1] for GPU/compositing use
//!
//! Alpha is always `Option<f64>` on the [0, 1] scale. `None` means the
//! source color had no explicit alpha, which matters for serialization:
//! `rgb(...)` versus `rgba(...)`, `#rrggbb` versus `#rrggbbaa`.
//!
//! # Selectors
//!
//! - [`Format`] - target of [`convert`](crate::convert)
//! - [`Notation`] - textual family of an input string, preserved by
//!   the channel adjustments in [`adjust`](crate::adjust)

use std::fmt;
use std::str::FromStr;

use crate::error::ColorError;

/// Four-float color vector `[r, g, b, a]`, each in [0, 1].
///
/// Whether it holds premultiplied values depends on the producer:
/// [`premultiply_alpha`](crate::premultiply_alpha) returns premultiplied data,
/// [`destructure_to_float`](crate::destructure_to_float) straight data.
pub type FloatRgba = [f64; 4];

/// RGB color, channels on the 0-255 scale.
///
/// Channels are normally integral but may carry fractions when parsed
/// from `color(srgb ...)`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    /// Red, 0-255.
    pub r: f64,
    /// Green, 0-255.
    pub g: f64,
    /// Blue, 0-255.
    pub b: f64,
    /// Alpha, 0-1, if explicitly given.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub alpha: Option<f64>,
}

impl Rgb {
    /// Creates an opaque color without explicit alpha.
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, alpha: None }
    }

    /// Creates a color with explicit alpha.
    #[inline]
    pub const fn with_alpha(r: f64, g: f64, b: f64, alpha: f64) -> Self {
        Self {
            r,
            g,
            b,
            alpha: Some(alpha),
        }
    }

    /// Returns the color channels as `[r, g, b]`.
    #[inline]
    pub fn channels(&self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }

    /// Returns 3 or 4 values, matching the presence of alpha.
    pub fn to_vec(&self) -> Vec<f64> {
        let mut out = self.channels().to_vec();
        out.extend(self.alpha);
        out
    }
}

/// HSL color.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hsl {
    /// Hue in degrees, nominally [0, 360).
    pub h: f64,
    /// Saturation in percent, [0, 100].
    pub s: f64,
    /// Lightness in percent, [0, 100].
    pub l: f64,
    /// Alpha, 0-1, if explicitly given.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub alpha: Option<f64>,
}

impl Hsl {
    /// Creates a color without explicit alpha.
    #[inline]
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l, alpha: None }
    }

    /// Creates a color with explicit alpha.
    #[inline]
    pub const fn with_alpha(h: f64, s: f64, l: f64, alpha: f64) -> Self {
        Self {
            h,
            s,
            l,
            alpha: Some(alpha),
        }
    }

    /// Returns 3 or 4 values, matching the presence of alpha.
    pub fn to_vec(&self) -> Vec<f64> {
        let mut out = vec![self.h, self.s, self.l];
        out.extend(self.alpha);
        out
    }
}

/// Hex color as two-character lowercase byte strings.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hex {
    /// Red byte, e.g. `"ff"`.
    pub r: String,
    /// Green byte.
    pub g: String,
    /// Blue byte.
    pub b: String,
    /// Alpha byte, if the color had explicit alpha.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub alpha: Option<String>,
}

impl Hex {
    /// Returns 3 or 4 byte strings, matching the presence of alpha.
    pub fn to_vec(&self) -> Vec<&str> {
        let mut out = vec![self.r.as_str(), self.g.as_str(), self.b.as_str()];
        out.extend(self.alpha.as_deref());
        out
    }
}

impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}{}{}", self.r, self.g, self.b)?;
        if let Some(a) = &self.alpha {
            f.write_str(a)?;
        }
        Ok(())
    }
}

/// Target format for [`convert`](crate::convert).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Format {
    /// `#rrggbb` / `#rrggbbaa`.
    #[default]
    Hex,
    /// `rgb(r, g, b)` / `rgba(r, g, b, a)`.
    Rgb,
    /// `hsl(h, s%, l%)` / `hsla(h, s%, l%, a%)`.
    Hsl,
    /// `[r,g,b,a]` float vector text.
    Float,
}

impl Format {
    /// Lowercase name, as accepted by [`FromStr`].
    pub fn name(&self) -> &'static str {
        match self {
            Self::Hex => "hex",
            Self::Rgb => "rgb",
            Self::Hsl => "hsl",
            Self::Float => "float",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Format {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hex" => Ok(Self::Hex),
            "rgb" | "rgba" => Ok(Self::Rgb),
            "hsl" | "hsla" => Ok(Self::Hsl),
            "float" | "vec4" => Ok(Self::Float),
            _ => Err(ColorError::UnknownFormat(s.to_string())),
        }
    }
}

/// Textual family of a color string.
///
/// Detected once from the leading characters of the input and used to
/// write derived colors back in the caller's notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Notation {
    /// Starts with `#`.
    Hex,
    /// Starts with `rgb`.
    Rgb,
    /// Anything else.
    Hsl,
}

impl Notation {
    /// Detects the notation of `color`. Unknown prefixes fall back to HSL.
    pub fn detect(color: &str) -> Self {
        let color = color.trim_start();
        if color.starts_with('#') {
            Self::Hex
        } else if color.starts_with("rgb") {
            Self::Rgb
        } else {
            Self::Hsl
        }
    }
}

impl From<Notation> for Format {
    fn from(n: Notation) -> Self {
        match n {
            Notation::Hex => Format::Hex,
            Notation::Rgb => Format::Rgb,
            Notation::Hsl => Format::Hsl,
        }
    }
}

/// Either a color string or an already destructured float vector.
///
/// Accepted by [`premultiply_alpha`](crate::premultiply_alpha).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorSource<'a> {
    /// A color string in any supported notation.
    Text(&'a str),
    /// A straight-alpha float vector.
    Float(FloatRgba),
}

impl<'a> From<&'a str> for ColorSource<'a> {
    fn from(s: &'a str) -> Self {
        Self::Text(s)
    }
}

impl<'a> From<&'a String> for ColorSource<'a> {
    fn from(s: &'a String) -> Self {
        Self::Text(s.as_str())
    }
}

impl From<FloatRgba> for ColorSource<'_> {
    fn from(v: FloatRgba) -> Self {
        Self::Float(v)
    }
}
