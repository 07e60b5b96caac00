//! Tuple-to-tuple color model conversions.
//!
//! Pure numeric transforms with no string handling:
//!
//! - [`rgb_to_hsl`] / [`hsl_to_rgb`]
//! - [`rgb_to_hex`]
//! - [`rgb_to_float`]
//!
//! Alpha passes through every conversion untouched.
//!
//! # Rounding
//!
//! RGB→HSL rounds hue to 2 decimals and saturation/lightness percentages to
//! 2 decimals. HSL→RGB rounds channels to integers. A round trip through HSL
//! is therefore stable but not bit-exact for fractional RGB input.

use crate::model::{FloatRgba, Hex, Hsl, Rgb};

/// Rounds half towards positive infinity.
///
/// `-0.5` rounds to `0`, not `-1`.
#[inline]
pub(crate) fn round_half_up(v: f64) -> f64 {
    (v + 0.5).floor()
}

/// Rounds to `decimals` decimal places.
#[inline]
pub(crate) fn round_to(v: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (v * scale).round() / scale
}

/// Converts RGB (0-255) to HSL (degrees, percent).
///
/// # Example
///
/// ```rust
/// use swatch_color::{Rgb, convert::rgb_to_hsl};
///
/// let hsl = rgb_to_hsl(&Rgb::new(255.0, 87.0, 51.0));
/// assert_eq!((hsl.h, hsl.s, hsl.l), (10.59, 100.0, 60.0));
/// ```
pub fn rgb_to_hsl(rgb: &Rgb) -> Hsl {
    let r = rgb.r / 255.0;
    let g = rgb.g / 255.0;
    let b = rgb.b / 255.0;

    let c_max = r.max(g).max(b);
    let c_min = r.min(g).min(b);
    let delta = c_max - c_min;

    let mut h = 0.0;
    if delta != 0.0 {
        h = if c_max == r {
            // `%` keeps the sign of the dividend
            ((g - b) / delta) % 6.0
        } else if c_max == g {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };
        h = round_half_up(h * 60.0 * 100.0) / 100.0;
        if h < 0.0 {
            h += 360.0;
        }
    }

    let l = (c_max + c_min) / 2.0;
    let s = if delta == 0.0 {
        0.0
    } else {
        delta / (1.0 - (2.0 * l - 1.0).abs())
    };

    Hsl {
        h,
        s: round_to(s * 100.0, 2),
        l: round_to(l * 100.0, 2),
        alpha: rgb.alpha.filter(|a| *a >= 0.0),
    }
}

/// Converts HSL (degrees, percent) to RGB (0-255, integral).
///
/// Hue is expected in [0, 360). A hue outside that range selects no sector
/// and produces the achromatic `(m, m, m)` gray.
pub fn hsl_to_rgb(hsl: &Hsl) -> Rgb {
    let h = hsl.h;
    let s = hsl.s / 100.0;
    let l = hsl.l / 100.0;

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = if (0.0..60.0).contains(&h) {
        (c, x, 0.0)
    } else if (60.0..120.0).contains(&h) {
        (x, c, 0.0)
    } else if (120.0..180.0).contains(&h) {
        (0.0, c, x)
    } else if (180.0..240.0).contains(&h) {
        (0.0, x, c)
    } else if (240.0..300.0).contains(&h) {
        (x, 0.0, c)
    } else if (300.0..360.0).contains(&h) {
        (c, 0.0, x)
    } else {
        (0.0, 0.0, 0.0)
    };

    Rgb {
        r: round_half_up((r + m) * 255.0),
        g: round_half_up((g + m) * 255.0),
        b: round_half_up((b + m) * 255.0),
        alpha: hsl.alpha,
    }
}

/// Quantizes a 0-255 channel to a byte.
#[inline]
fn to_byte(v: f64) -> u8 {
    round_half_up(v).clamp(0.0, 255.0) as u8
}

#[inline]
fn byte_hex(v: u8) -> String {
    format!("{:02x}", v)
}

/// Converts RGB to lowercase hex byte strings.
///
/// Fractional channels are rounded; alpha becomes `round(alpha * 255)`.
pub fn rgb_to_hex(rgb: &Rgb) -> Hex {
    Hex {
        r: byte_hex(to_byte(rgb.r)),
        g: byte_hex(to_byte(rgb.g)),
        b: byte_hex(to_byte(rgb.b)),
        alpha: rgb.alpha.map(|a| byte_hex(to_byte(a * 255.0))),
    }
}

/// Converts RGB to a `[r, g, b, a]` float vector. Missing alpha becomes 1.
#[inline]
pub fn rgb_to_float(rgb: &Rgb) -> FloatRgba {
    [
        rgb.r / 255.0,
        rgb.g / 255.0,
        rgb.b / 255.0,
        rgb.alpha.unwrap_or(1.0),
    ]
}
