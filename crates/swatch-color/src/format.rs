//! Serialization of color tuples back to text.
//!
//! Two layers:
//!
//! - tuple formatters: [`format_hex`], [`format_rgb`], [`format_hsl`], [`format_float`]
//! - string entry points that parse first: [`to_hex_string`], [`to_rgb_string`],
//!   [`to_hsl_string`], [`convert`] and the `destructure_to_*` family
//!
//! # Output grammar
//!
//! ```text
//! #rrggbb | #rrggbbaa                     lowercase hex
//! rgb(r, g, b) | rgba(r, g, b, a)          alpha as a 0-1 float
//! hsl(h, s%, l%) | hsla(h, s%, l%, a%)     alpha as a percentage
//! [r,g,b,a]                                float vector
//! ```
//!
//! HSL numbers are printed with at most 2 (hue) or 3 (saturation, lightness,
//! alpha) decimals, trailing zeros trimmed: `10.00` → `10`, `100.000%` → `100%`.

use crate::convert::{rgb_to_float, rgb_to_hex};
use crate::error::ColorResult;
use crate::model::{FloatRgba, Format, Hex, Hsl, Rgb};
use crate::parse::{parse_hsl, parse_rgb};

/// Shortest round-trip representation; integral values print without a fraction.
pub(crate) fn format_number(v: f64) -> String {
    if v == 0.0 {
        // avoids "-0"
        return "0".to_string();
    }
    format!("{}", v)
}

/// Fixed precision with trailing zeros (and a bare dot) removed.
pub(crate) fn format_fixed(v: f64, decimals: usize) -> String {
    let s = format!("{:.*}", decimals, v);
    let s = if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s.as_str()
    };
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

/// Formats RGB as `#rrggbb` or `#rrggbbaa`.
pub fn format_hex(rgb: &Rgb) -> String {
    rgb_to_hex(rgb).to_string()
}

/// Formats RGB as `rgb(r, g, b)` or `rgba(r, g, b, a)`.
pub fn format_rgb(rgb: &Rgb) -> String {
    let (r, g, b) = (
        format_number(rgb.r),
        format_number(rgb.g),
        format_number(rgb.b),
    );
    match rgb.alpha {
        Some(a) => format!("rgba({}, {}, {}, {})", r, g, b, format_number(a)),
        None => format!("rgb({}, {}, {})", r, g, b),
    }
}

/// Formats HSL as `hsl(h, s%, l%)` or `hsla(h, s%, l%, a%)`.
///
/// ```rust
/// use swatch_color::{Hsl, format::format_hsl};
///
/// assert_eq!(format_hsl(&Hsl::new(10.59, 100.0, 60.0)), "hsl(10.59, 100%, 60%)");
/// assert_eq!(format_hsl(&Hsl::with_alpha(200.0, 50.0, 50.0, 0.5)), "hsla(200, 50%, 50%, 50%)");
/// ```
pub fn format_hsl(hsl: &Hsl) -> String {
    let (h, s, l) = (
        format_fixed(hsl.h, 2),
        format_fixed(hsl.s, 3),
        format_fixed(hsl.l, 3),
    );
    match hsl.alpha {
        Some(a) => format!("hsla({}, {}%, {}%, {}%)", h, s, l, format_fixed(a * 100.0, 3)),
        None => format!("hsl({}, {}%, {}%)", h, s, l),
    }
}

/// Formats a float vector as `[r,g,b,a]`.
pub fn format_float(v: &FloatRgba) -> String {
    let parts: Vec<String> = v.iter().map(|c| format_number(*c)).collect();
    format!("[{}]", parts.join(","))
}

/// Converts any color string to hex notation.
pub fn to_hex_string(color: &str) -> ColorResult<String> {
    parse_rgb(color).map(|rgb| format_hex(&rgb))
}

/// Converts any color string to `rgb()`/`rgba()` notation.
pub fn to_rgb_string(color: &str) -> ColorResult<String> {
    parse_rgb(color).map(|rgb| format_rgb(&rgb))
}

/// Converts any color string to `hsl()`/`hsla()` notation.
pub fn to_hsl_string(color: &str) -> ColorResult<String> {
    parse_hsl(color).map(|hsl| format_hsl(&hsl))
}

/// Converts a color string from its own notation to `to`.
///
/// # Example
///
/// ```rust
/// use swatch_color::{convert, Format};
///
/// assert_eq!(convert("rgb(255, 87, 51)", Format::Hex).unwrap(), "#ff5733");
/// assert_eq!(convert("#ff5733", Format::Hsl).unwrap(), "hsl(10.59, 100%, 60%)");
/// ```
pub fn convert(color: &str, to: Format) -> ColorResult<String> {
    match to {
        Format::Hex => to_hex_string(color),
        Format::Rgb => to_rgb_string(color),
        Format::Hsl => to_hsl_string(color),
        Format::Float => destructure_to_float(color).map(|v| format_float(&v)),
    }
}

/// Parses a color string into hex byte strings.
pub fn destructure_to_hex(color: &str) -> ColorResult<Hex> {
    parse_rgb(color).map(|rgb| rgb_to_hex(&rgb))
}

/// Parses a color string into RGB.
#[inline]
pub fn destructure_to_rgb(color: &str) -> ColorResult<Rgb> {
    parse_rgb(color)
}

/// Parses a color string into HSL.
#[inline]
pub fn destructure_to_hsl(color: &str) -> ColorResult<Hsl> {
    parse_hsl(color)
}

/// Parses a color string into a straight-alpha float vector.
pub fn destructure_to_float(color: &str) -> ColorResult<FloatRgba> {
    parse_rgb(color).map(|rgb| rgb_to_float(&rgb))
}
