//! Relative luminance, contrast ratio and premultiplied alpha.
//!
//! # Contrast
//!
//! Colors are first blended over opaque white (`v * a + 255 * (1 - a)`). Each
//! channel is then linearized with the WCAG 2.0 sRGB curve and weighted with
//! the Rec.709 coefficients.
//!
//! ```text
//! v' = v / 255
//! lin = v' / 12.92                       if v' <= 0.03928
//!       ((v' + 0.055) / 1.055) ^ 2.4     otherwise
//! L = 0.2126 R + 0.7152 G + 0.0722 B
//! ratio = (L_max + 0.05) / (L_min + 0.05)        in [1, 21]
//! ```
//!
//! # Premultiplied alpha
//!
//! [`premultiply_alpha`] produces `[r*a, g*a, b*a, a]` for GPU clear colors
//! and compositing paths that expect premultiplied input.

use tracing::trace;

use crate::convert::rgb_to_float;
use crate::error::ColorResult;
use crate::model::{ColorSource, FloatRgba, Rgb};
use crate::parse::parse_rgb;

/// Rec.709 luminance weights `[R, G, B]`.
pub const LUMA_WEIGHTS: [f64; 3] = [0.2126, 0.7152, 0.0722];

/// Threshold of the linear segment of the WCAG 2.0 sRGB curve.
const LINEAR_THRESHOLD: f64 = 0.03928;

/// Decodes an sRGB channel in [0, 1] to linear light.
#[inline]
fn linearize(v: f64) -> f64 {
    if v <= LINEAR_THRESHOLD {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance of an RGB color (0-255 channels). Alpha is ignored.
///
/// ```rust
/// use swatch_color::{Rgb, relative_luminance};
///
/// assert!((relative_luminance(&Rgb::new(255.0, 255.0, 255.0)) - 1.0).abs() < 1e-9);
/// assert_eq!(relative_luminance(&Rgb::new(0.0, 0.0, 0.0)), 0.0);
/// ```
pub fn relative_luminance(rgb: &Rgb) -> f64 {
    rgb.channels()
        .iter()
        .zip(LUMA_WEIGHTS)
        .map(|(v, w)| linearize(v / 255.0) * w)
        .sum()
}

/// Blends a color over opaque white. Missing alpha counts as 1.
///
/// The result has no alpha.
pub fn blend_with_white(rgb: &Rgb) -> Rgb {
    let a = rgb.alpha.unwrap_or(1.0);
    let blend = |v: f64| v * a + 255.0 * (1.0 - a);
    Rgb::new(blend(rgb.r), blend(rgb.g), blend(rgb.b))
}

/// Contrast ratio between two parsed colors, in [1, 21].
pub fn contrast_ratio_rgb(a: &Rgb, b: &Rgb) -> f64 {
    let l1 = relative_luminance(&blend_with_white(a));
    let l2 = relative_luminance(&blend_with_white(b));
    (l1.max(l2) + 0.05) / (l1.min(l2) + 0.05)
}

/// Contrast ratio between two color strings, in [1, 21].
///
/// # Example
///
/// ```rust
/// use swatch_color::contrast_ratio;
///
/// let ratio = contrast_ratio("#FFFFFF", "#000000").unwrap();
/// assert!((ratio - 21.0).abs() < 1e-9);
/// ```
pub fn contrast_ratio(col1: &str, col2: &str) -> ColorResult<f64> {
    let a = parse_rgb(col1)?;
    let b = parse_rgb(col2)?;
    let ratio = contrast_ratio_rgb(&a, &b);
    trace!(col1, col2, ratio, "contrast_ratio");
    Ok(ratio)
}

/// Contrast ratio of `color` against black (`#000000`).
pub fn contrast_ratio_against_black(color: &str) -> ColorResult<f64> {
    contrast_ratio(color, "#000000")
}

/// Multiplies r, g, b by alpha. Alpha itself is kept.
///
/// Accepts a color string or an already destructured float vector.
///
/// ```rust
/// use swatch_color::premultiply_alpha;
///
/// assert_eq!(premultiply_alpha("rgba(255, 0, 0, 0.5)").unwrap(), [0.5, 0.0, 0.0, 0.5]);
/// assert_eq!(premultiply_alpha([1.0, 1.0, 1.0, 0.25]).unwrap(), [0.25, 0.25, 0.25, 0.25]);
/// ```
pub fn premultiply_alpha<'a>(color: impl Into<ColorSource<'a>>) -> ColorResult<FloatRgba> {
    let [r, g, b, a] = match color.into() {
        ColorSource::Text(s) => rgb_to_float(&parse_rgb(s)?),
        ColorSource::Float(v) => v,
    };
    Ok([r * a, g * a, b * a, a])
}

/// Premultiplied float vector of `color` with its alpha replaced by `alpha`.
///
/// Used for GPU clear colors, where a nearly transparent theme color is
/// wanted rather than the theme color itself.
///
/// Alpha is replaced on the float vector, not through a string round trip.
pub fn clear_color(color: &str, alpha: f64) -> ColorResult<FloatRgba> {
    let [r, g, b, _] = rgb_to_float(&parse_rgb(color)?);
    premultiply_alpha([r, g, b, alpha])
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_black_white_extremes() {
        assert_abs_diff_eq!(contrast_ratio("#FFFFFF", "#000000").unwrap(), 21.0, epsilon = 1e-9);
        assert_abs_diff_eq!(contrast_ratio("#FFFFFF", "#FFFFFF").unwrap(), 1.0, epsilon = 1e-9);
        assert_abs_diff_eq!(contrast_ratio_against_black("#000000").unwrap(), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_symmetric() {
        let a = contrast_ratio("#ff5733", "#ffffff").unwrap();
        let b = contrast_ratio("#ffffff", "#ff5733").unwrap();
        assert_abs_diff_eq!(a, b, epsilon = 1e-12);
    }

    #[test]
    fn test_known_ratios() {
        // reference values from common WCAG calculators
        assert!((contrast_ratio("#767676", "#ffffff").unwrap() - 4.54).abs() < 0.01);
        assert!((contrast_ratio("#ff0000", "#ffffff").unwrap() - 4.0).abs() < 0.01);
        assert!((contrast_ratio("#FFFFFF", "#FF5733").unwrap() - 3.15).abs() < 0.01);
    }

    #[test]
    fn test_transparent_color_blends_to_white() {
        let ratio = contrast_ratio("rgba(0, 0, 0, 0)", "#ffffff").unwrap();
        assert_abs_diff_eq!(ratio, 1.0, epsilon = 1e-9);
        let half = contrast_ratio("rgba(0, 0, 0, 0.5)", "#ffffff").unwrap();
        assert!(half > 1.0 && half < 21.0);
    }

    #[test]
    fn test_blend_with_white() {
        let out = blend_with_white(&Rgb::with_alpha(0.0, 0.0, 0.0, 0.5));
        assert_eq!(out, Rgb::new(127.5, 127.5, 127.5));
        let out = blend_with_white(&Rgb::new(10.0, 20.0, 30.0));
        assert_eq!(out, Rgb::new(10.0, 20.0, 30.0));
    }

    #[test]
    fn test_ratio_range() {
        let colors = ["#000000", "#ffffff", "#ff5733", "hsl(200, 50%, 50%)", "rgba(1, 2, 3, 0.1)"];
        for a in colors {
            for b in colors {
                let r = contrast_ratio(a, b).unwrap();
                assert!((1.0 - 1e-9..=21.0 + 1e-9).contains(&r), "{} vs {} = {}", a, b, r);
            }
        }
    }

    #[test]
    fn test_premultiply() {
        let v = premultiply_alpha("#ff000080").unwrap();
        assert_abs_diff_eq!(v[0], 128.0 / 255.0, epsilon = 1e-12);
        assert_eq!(v[1], 0.0);
        assert_abs_diff_eq!(v[3], 128.0 / 255.0, epsilon = 1e-12);
        assert_eq!(premultiply_alpha("#ffffff").unwrap(), [1.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_clear_color() {
        let v = clear_color("#ffffff", 0.01).unwrap();
        for c in v {
            assert_abs_diff_eq!(c, 0.01, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_invalid() {
        assert!(contrast_ratio("nope", "#000000").is_err());
        assert!(premultiply_alpha("").is_err());
    }
}
