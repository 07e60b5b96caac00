//! Color string parsing.
//!
//! Every textual notation funnels into [`parse_rgb`]; [`parse_hsl`] is the
//! same parse followed by [`rgb_to_hsl`].
//!
//! # Accepted notations
//!
//! | Prefix | Example | Notes |
//! |--------|---------|-------|
//! | `#` | `#ff5733`, `#ff5733FF` | 6 or 8 hex digits, either case |
//! | `rgb` | `rgb(255, 87, 51)`, `rgba(255, 87, 51, 0.5)` | any `%` component is divided by 100 |
//! | `hsl` | `hsl(10.59deg, 100%, 60%)`, `hsla(10, 50%, 50%, 50%)` | `%` alpha is divided by 100 |
//! | `color(srgb` | `color(srgb 1 0.34 0.2 / 0.5)` | channels in [0, 1] |
//!
//! Anything else, including the empty string, is
//! [`ColorError::InvalidFormat`]. Components that are not finite numbers
//! are rejected with [`ColorError::InvalidComponent`].

use tracing::trace;

use crate::convert::{hsl_to_rgb, rgb_to_hsl};
use crate::error::{ColorError, ColorResult};
use crate::model::{Hsl, Rgb};

/// Parses any supported color string into RGB.
///
/// # Example
///
/// ```rust
/// use swatch_color::{parse_rgb, Rgb};
///
/// assert_eq!(parse_rgb("#ff5733").unwrap(), Rgb::new(255.0, 87.0, 51.0));
/// assert_eq!(parse_rgb("hsl(10.59, 100%, 60%)").unwrap(), Rgb::new(255.0, 87.0, 51.0));
/// assert!(parse_rgb("red").is_err());
/// ```
pub fn parse_rgb(color: &str) -> ColorResult<Rgb> {
    let color = color.trim();
    trace!(color, "parse::rgb");

    if let Some(digits) = color.strip_prefix('#') {
        parse_hex(color, digits)
    } else if color.starts_with("rgb") {
        parse_rgb_function(color)
    } else if color.starts_with("hsl") {
        parse_hsl_function(color).map(|hsl| hsl_to_rgb(&hsl))
    } else if color.starts_with("color(srgb") {
        parse_srgb_function(color)
    } else {
        Err(ColorError::invalid_format(color))
    }
}

/// Parses any supported color string into HSL.
///
/// HSL input also goes through RGB, so the result is normalized to the
/// precision of [`rgb_to_hsl`].
pub fn parse_hsl(color: &str) -> ColorResult<Hsl> {
    parse_rgb(color).map(|rgb| rgb_to_hsl(&rgb))
}

fn parse_hex(color: &str, digits: &str) -> ColorResult<Rgb> {
    if !matches!(digits.len(), 6 | 8) {
        return Err(ColorError::malformed(
            color,
            format!("expected 6 or 8 hex digits, found {}", digits.len()),
        ));
    }
    if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(ColorError::invalid_component(color, bad.to_string()));
    }

    // all ascii, so byte slicing is on char boundaries
    let byte = |i: usize| -> ColorResult<f64> {
        let pair = &digits[i..i + 2];
        u8::from_str_radix(pair, 16)
            .map(f64::from)
            .map_err(|_| ColorError::invalid_component(color, pair))
    };

    let rgb = Rgb::new(byte(0)?, byte(2)?, byte(4)?);
    if digits.len() == 8 {
        Ok(Rgb {
            alpha: Some(byte(6)? / 255.0),
            ..rgb
        })
    } else {
        Ok(rgb)
    }
}

fn parse_rgb_function(color: &str) -> ColorResult<Rgb> {
    let values = arguments(color)?
        .split(',')
        .map(|part| {
            if part.contains('%') {
                number(color, &part.replace('%', "")).map(|v| v / 100.0)
            } else {
                number(color, part)
            }
        })
        .collect::<ColorResult<Vec<f64>>>()?;

    match values[..] {
        [r, g, b] => Ok(Rgb::new(r, g, b)),
        [r, g, b, a] => Ok(Rgb::with_alpha(r, g, b, a)),
        _ => Err(component_count(color, values.len())),
    }
}

fn parse_hsl_function(color: &str) -> ColorResult<Hsl> {
    let values = arguments(color)?
        .split(',')
        .enumerate()
        .map(|(i, part)| {
            if i == 3 && part.contains('%') {
                number(color, &part.replace('%', "")).map(|v| v / 100.0)
            } else {
                number(color, &part.replace('%', "").replace("deg", ""))
            }
        })
        .collect::<ColorResult<Vec<f64>>>()?;

    match values[..] {
        [h, s, l] => Ok(Hsl::new(h, s, l)),
        [h, s, l, a] => Ok(Hsl::with_alpha(h, s, l, a)),
        _ => Err(component_count(color, values.len())),
    }
}

fn parse_srgb_function(color: &str) -> ColorResult<Rgb> {
    let args = arguments(color)?;
    let args = args.trim_start().strip_prefix("srgb").unwrap_or(args);

    let (channels, alpha) = match args.split_once('/') {
        Some((channels, alpha)) => (channels, Some(alpha)),
        None => (args, None),
    };

    let values = channels
        .split_whitespace()
        .map(|part| number(color, part).map(|v| v * 255.0))
        .collect::<ColorResult<Vec<f64>>>()?;
    let [r, g, b] = values[..] else {
        return Err(component_count(color, values.len()));
    };

    match alpha {
        None => Ok(Rgb::new(r, g, b)),
        Some(a) => {
            let a = a.trim();
            let alpha = match a.strip_suffix('%') {
                Some(pct) => number(color, pct)? / 100.0,
                None => number(color, a)?,
            };
            Ok(Rgb::with_alpha(r, g, b, alpha))
        }
    }
}

/// Returns the text between the first `(` and the following `)`.
fn arguments(color: &str) -> ColorResult<&str> {
    let open = color
        .find('(')
        .ok_or_else(|| ColorError::malformed(color, "missing '('"))?;
    let close = color[open..]
        .find(')')
        .map(|i| open + i)
        .ok_or_else(|| ColorError::malformed(color, "missing ')'"))?;
    Ok(&color[open + 1..close])
}

fn number(color: &str, part: &str) -> ColorResult<f64> {
    part.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ColorError::invalid_component(color, part.trim()))
}

fn component_count(color: &str, found: usize) -> ColorError {
    ColorError::malformed(color, format!("expected 3 or 4 components, found {}", found))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex() {
        assert_eq!(parse_rgb("#ff5733").unwrap(), Rgb::new(255.0, 87.0, 51.0));
        assert_eq!(parse_rgb("#FF5733").unwrap(), Rgb::new(255.0, 87.0, 51.0));
        assert_eq!(
            parse_rgb("#ff5733FF").unwrap(),
            Rgb::with_alpha(255.0, 87.0, 51.0, 1.0)
        );
    }

    #[test]
    fn test_hex_zero_alpha_is_kept() {
        let rgb = parse_rgb("#00000000").unwrap();
        assert_eq!(rgb.alpha, Some(0.0));
    }

    #[test]
    fn test_hex_short_form_rejected() {
        let err = parse_rgb("#fff").unwrap_err();
        assert!(matches!(err, ColorError::Malformed { .. }));
        let err = parse_rgb("#ff57zz").unwrap_err();
        assert!(matches!(err, ColorError::InvalidComponent { .. }));
    }

    #[test]
    fn test_rgb_function() {
        assert_eq!(
            parse_rgb("rgb(255, 87, 51)").unwrap(),
            Rgb::new(255.0, 87.0, 51.0)
        );
        assert_eq!(
            parse_rgb("rgba(255, 87, 51, 0.5)").unwrap(),
            Rgb::with_alpha(255.0, 87.0, 51.0, 0.5)
        );
    }

    #[test]
    fn test_rgb_percent_divides_any_slot() {
        assert_eq!(
            parse_rgb("rgba(255, 87, 51, 50%)").unwrap(),
            Rgb::with_alpha(255.0, 87.0, 51.0, 0.5)
        );
        // the marker alone triggers the division, whatever the slot
        assert_eq!(parse_rgb("rgb(100%, 0, 0)").unwrap().r, 1.0);
    }

    #[test]
    fn test_hsl_function() {
        assert_eq!(
            parse_rgb("hsl(10.59, 100%, 60%)").unwrap(),
            Rgb::new(255.0, 87.0, 51.0)
        );
        assert_eq!(
            parse_rgb("hsl(10.59deg, 100%, 60%, 100%)").unwrap(),
            Rgb::with_alpha(255.0, 87.0, 51.0, 1.0)
        );
        assert_eq!(
            parse_rgb("hsla(10.59, 100%, 60%, 0.25)").unwrap().alpha,
            Some(0.25)
        );
    }

    #[test]
    fn test_parse_hsl_normalizes() {
        let hsl = parse_hsl("#ff5733").unwrap();
        assert_eq!(hsl, Hsl::new(10.59, 100.0, 60.0));
        let hsl = parse_hsl("hsl(10.59deg, 100%, 60%, 100%)").unwrap();
        assert_eq!(hsl, Hsl::with_alpha(10.59, 100.0, 60.0, 1.0));
    }

    #[test]
    fn test_srgb_function() {
        let rgb = parse_rgb("color(srgb 1 0.5 0)").unwrap();
        assert_eq!(rgb, Rgb::new(255.0, 127.5, 0.0));

        let rgb = parse_rgb("color(srgb 0 0 1 / 0.5)").unwrap();
        assert_eq!(rgb, Rgb::with_alpha(0.0, 0.0, 255.0, 0.5));

        let rgb = parse_rgb("color(srgb 0 0 1 / 25%)").unwrap();
        assert_eq!(rgb.alpha, Some(0.25));
    }

    #[test]
    fn test_unknown_prefix() {
        for input in ["", "red", "lab(50% 40 59)", "oklch(0.7 0.1 200)", "  "] {
            let err = parse_rgb(input).unwrap_err();
            assert!(err.is_format_error(), "{:?} -> {:?}", input, err);
        }
    }

    #[test]
    fn test_malformed_numerics_rejected() {
        let err = parse_rgb("rgb(255, abc, 51)").unwrap_err();
        assert_eq!(err, ColorError::invalid_component("rgb(255, abc, 51)", "abc"));

        assert!(parse_rgb("rgb(255, , 51)").unwrap_err().is_content_error());
        assert!(parse_rgb("rgb(255, 87)").unwrap_err().is_content_error());
        assert!(parse_rgb("rgb(1, 2, 3, 4, 5)").unwrap_err().is_content_error());
        assert!(parse_rgb("rgb 255 87 51").unwrap_err().is_content_error());
        assert!(parse_rgb("rgb(255, 87, 51").unwrap_err().is_content_error());
        assert!(parse_rgb("hsl(NaN, 10%, 10%)").unwrap_err().is_content_error());
        assert!(parse_rgb("color(srgb 1 1)").unwrap_err().is_content_error());
    }

    #[test]
    fn test_surrounding_whitespace() {
        assert_eq!(
            parse_rgb("  rgb(1, 2, 3)\n").unwrap(),
            Rgb::new(1.0, 2.0, 3.0)
        );
    }
}
