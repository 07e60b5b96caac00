//! Channel-level color adjustments.
//!
//! Every operation here follows the same three steps:
//!
//! 1. detect the input's [`Notation`] and parse it to [`Hsl`]
//! 2. change one HSL channel
//! 3. serialize the result in the detected notation
//!
//! so `lighten("#cceeff", 10.0)` answers in hex and
//! `lighten("hsl(200, 100%, 90%)", 10.0)` answers in HSL.
//!
//! # Example
//!
//! ```rust
//! use swatch_color::adjust::{add_hue, darken, set_alpha};
//!
//! assert_eq!(add_hue("hsl(350, 100%, 60%)", 20.0).unwrap(), "hsl(10, 100%, 60%)");
//! assert_eq!(darken("hsl(10.59, 100%, 60%)", 10.0).unwrap(), "hsl(10.59, 100%, 50%)");
//! assert_eq!(set_alpha("#ff5733", 0.5).unwrap(), "#ff573380");
//! ```

use tracing::debug;

use crate::convert::hsl_to_rgb;
use crate::error::{ColorError, ColorResult};
use crate::format::{format_hex, format_hsl, format_rgb};
use crate::model::{Hsl, Notation};
use crate::parse::parse_hsl;

/// Serializes `hsl` in the given notation.
pub fn render(notation: Notation, hsl: &Hsl) -> String {
    match notation {
        Notation::Hex => format_hex(&hsl_to_rgb(hsl)),
        Notation::Rgb => format_rgb(&hsl_to_rgb(hsl)),
        Notation::Hsl => format_hsl(hsl),
    }
}

/// Parses `color`, applies `f` to its HSL form and writes it back in the
/// original notation.
///
/// Fails with [`ColorError::InvalidComponent`] if `f` leaves a channel that
/// is not finite.
pub fn derive_with<F>(color: &str, f: F) -> ColorResult<String>
where
    F: FnOnce(Hsl) -> Hsl,
{
    let notation = Notation::detect(color);
    let hsl = parse_hsl(color)?;
    let next = f(hsl);
    let channels = [
        ("hue", Some(next.h)),
        ("saturation", Some(next.s)),
        ("lightness", Some(next.l)),
        ("alpha", next.alpha),
    ];
    for (name, value) in channels {
        if let Some(v) = value.filter(|v| !v.is_finite()) {
            return Err(ColorError::invalid_component(color, format!("{} {}", name, v)));
        }
    }
    debug!(color, ?notation, h = next.h, s = next.s, l = next.l, "adjust");
    Ok(render(notation, &next))
}

/// Returns the hue in degrees.
pub fn hue(color: &str) -> ColorResult<f64> {
    parse_hsl(color).map(|hsl| hsl.h)
}

/// Rotates the hue by `degrees`.
///
/// A result above 360 is reduced by 360 once and a negative result is
/// raised by 360 once; larger overshoots are not reduced further.
pub fn add_hue(color: &str, degrees: f64) -> ColorResult<String> {
    derive_with(color, |hsl| {
        let h = hsl.h + degrees;
        let h = if h > 360.0 {
            h - 360.0
        } else if h < 0.0 {
            h + 360.0
        } else {
            h
        };
        Hsl { h, ..hsl }
    })
}

/// Replaces the hue.
pub fn set_hue(color: &str, hue: f64) -> ColorResult<String> {
    derive_with(color, |hsl| Hsl { h: hue, ..hsl })
}

/// Returns the saturation in percent.
pub fn saturation(color: &str) -> ColorResult<f64> {
    parse_hsl(color).map(|hsl| hsl.s)
}

/// Replaces the saturation (percent).
pub fn set_saturation(color: &str, percent: f64) -> ColorResult<String> {
    derive_with(color, |hsl| Hsl { s: percent, ..hsl })
}

/// Returns the lightness in percent.
pub fn lightness(color: &str) -> ColorResult<f64> {
    parse_hsl(color).map(|hsl| hsl.l)
}

/// Replaces the lightness (percent).
pub fn set_lightness(color: &str, lightness: f64) -> ColorResult<String> {
    derive_with(color, |hsl| Hsl { l: lightness, ..hsl })
}

/// Adds `percent` to the lightness, clamped to [0, 100].
pub fn lighten(color: &str, percent: f64) -> ColorResult<String> {
    derive_with(color, |hsl| Hsl {
        l: (hsl.l + percent).clamp(0.0, 100.0),
        ..hsl
    })
}

/// Subtracts `percent` from the lightness, clamped to [0, 100].
pub fn darken(color: &str, percent: f64) -> ColorResult<String> {
    derive_with(color, |hsl| Hsl {
        l: (hsl.l - percent).clamp(0.0, 100.0),
        ..hsl
    })
}

/// Returns the explicit alpha (0-1), or `None` if the color has none.
pub fn alpha(color: &str) -> ColorResult<Option<f64>> {
    parse_hsl(color).map(|hsl| hsl.alpha)
}

/// Replaces the alpha (0-1). The result always carries explicit alpha.
pub fn set_alpha(color: &str, alpha: f64) -> ColorResult<String> {
    derive_with(color, |hsl| Hsl {
        alpha: Some(alpha),
        ..hsl
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const HSL: &str = "hsl(10.59, 100%, 60%)";

    #[test]
    fn test_getters() {
        assert_eq!(hue(HSL).unwrap(), 10.59);
        assert_eq!(saturation(HSL).unwrap(), 100.0);
        assert_eq!(lightness(HSL).unwrap(), 60.0);
        assert_eq!(alpha(HSL).unwrap(), None);
        assert_eq!(alpha("hsla(10.59, 100%, 60%, 0.3)").unwrap(), Some(0.3));
    }

    #[test]
    fn test_add_hue() {
        assert_eq!(add_hue(HSL, 10.0).unwrap(), "hsl(20.59, 100%, 60%)");
    }

    #[test]
    fn test_add_hue_wraps_once() {
        assert_eq!(add_hue("hsl(350,100%,60%)", 20.0).unwrap(), "hsl(10, 100%, 60%)");
        // 350 + 400 = 750, reduced once to 390 only
        assert_eq!(add_hue("hsl(350,100%,60%)", 400.0).unwrap(), "hsl(390, 100%, 60%)");
        assert_eq!(add_hue("hsl(350,100%,60%)", 10.0).unwrap(), "hsl(360, 100%, 60%)");
    }

    #[test]
    fn test_add_negative_hue_wraps_once() {
        assert_eq!(add_hue(HSL, -30.0).unwrap(), "hsl(340.59, 100%, 60%)");
        assert_eq!(add_hue("#ff5733", -30.0).unwrap(), "#ff3375");
        assert_eq!(add_hue("rgb(255, 87, 51)", -30.0).unwrap(), "rgb(255, 51, 117)");
        assert_eq!(hue(&add_hue(HSL, -30.0).unwrap()).unwrap(), 340.59);
    }

    #[test]
    fn test_non_finite_channels_rejected() {
        for result in [
            lighten(HSL, f64::NAN),
            darken("#ff5733", f64::NAN),
            set_saturation("rgb(255, 87, 51)", f64::INFINITY),
            set_hue(HSL, f64::NAN),
            add_hue(HSL, f64::NEG_INFINITY),
            set_alpha(HSL, f64::NAN),
        ] {
            let err = result.unwrap_err();
            assert!(matches!(err, ColorError::InvalidComponent { .. }), "{:?}", err);
        }
    }

    #[test]
    fn test_set_saturation() {
        assert_eq!(set_saturation(HSL, 50.0).unwrap(), "hsl(10.59, 50%, 60%)");
    }

    #[test]
    fn test_set_hue_and_lightness() {
        assert_eq!(set_hue(HSL, 200.0).unwrap(), "hsl(200, 100%, 60%)");
        assert_eq!(set_lightness("#ffffff", 0.0).unwrap(), "#000000");
        assert_eq!(
            set_lightness("rgba(255, 255, 255, 1)", 0.0).unwrap(),
            "rgba(0, 0, 0, 1)"
        );
    }

    #[test]
    fn test_set_alpha() {
        assert_eq!(set_alpha(HSL, 0.5).unwrap(), "hsla(10.59, 100%, 60%, 50%)");
        assert_eq!(
            set_alpha("rgb(255, 255, 255)", 0.5).unwrap(),
            "rgba(255, 255, 255, 0.5)"
        );
        assert_eq!(set_alpha("#FFFFFF", 0.5).unwrap(), "#ffffff80");
    }

    #[test]
    fn test_lighten_darken() {
        assert_eq!(lighten(HSL, 10.0).unwrap(), "hsl(10.59, 100%, 70%)");
        assert_eq!(darken(HSL, 10.0).unwrap(), "hsl(10.59, 100%, 50%)");
    }

    #[test]
    fn test_lighten_darken_clamp() {
        assert_eq!(lighten(HSL, 500.0).unwrap(), "hsl(10.59, 100%, 100%)");
        assert_eq!(darken(HSL, 500.0).unwrap(), "hsl(10.59, 100%, 0%)");
        assert_eq!(lighten(HSL, -500.0).unwrap(), "hsl(10.59, 100%, 0%)");
        assert_eq!(lighten("#cceeff", 100.0).unwrap(), "#ffffff");
        assert_eq!(darken("rgb(204, 238, 255)", 100.0).unwrap(), "rgb(0, 0, 0)");
    }

    #[test]
    fn test_notation_is_preserved() {
        assert!(add_hue("#cceeff", 10.0).unwrap().starts_with('#'));
        assert!(add_hue("rgb(204, 238, 255)", 10.0).unwrap().starts_with("rgb("));
        assert!(add_hue("hsl(200, 100%, 90%)", 10.0).unwrap().starts_with("hsl("));
    }

    #[test]
    fn test_add_hue_reference_examples() {
        assert_eq!(add_hue("hsl(200, 100%, 90%)", 10.0).unwrap(), "hsl(210, 100%, 90%)");
        assert_eq!(add_hue("rgb(204, 238, 255)", 10.0).unwrap(), "rgb(204, 230, 255)");
        assert_eq!(add_hue("#cceeff", 10.0).unwrap(), "#cce6ff");
    }

    #[test]
    fn test_invalid_input() {
        assert!(lighten("red", 10.0).unwrap_err().is_format_error());
    }
}
