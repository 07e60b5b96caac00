//! Color info command.
//!
//! Shows one color in every notation together with its HSL channels,
//! relative luminance and contrast against white and black.

use anyhow::{Context, Result};
use serde::Serialize;
use swatch_color::format::format_float;
use swatch_color::{
    Format, Notation, Rgb, WcagLevel, contrast_ratio_rgb, convert, destructure_to_float,
    parse_hsl, parse_rgb, relative_luminance, wcag_levels,
};

use super::format_levels;
use crate::InfoArgs;

#[derive(Debug, Serialize)]
struct ColorInfo {
    input: String,
    hex: String,
    rgb: String,
    hsl: String,
    float: [f64; 4],
    hue: f64,
    saturation: f64,
    lightness: f64,
    alpha: Option<f64>,
    luminance: f64,
    contrast_white: f64,
    contrast_black: f64,
    levels_white: Vec<WcagLevel>,
    levels_black: Vec<WcagLevel>,
}

impl ColorInfo {
    fn gather(color: &str) -> Result<Self> {
        let rgb = parse_rgb(color).with_context(|| format!("Failed to parse {:?}", color))?;
        let hsl = parse_hsl(color)?;
        let white = contrast_ratio_rgb(&rgb, &Rgb::new(255.0, 255.0, 255.0));
        let black = contrast_ratio_rgb(&rgb, &Rgb::new(0.0, 0.0, 0.0));

        Ok(Self {
            input: color.to_string(),
            hex: convert(color, Format::Hex)?,
            rgb: convert(color, Format::Rgb)?,
            hsl: convert(color, Format::Hsl)?,
            float: destructure_to_float(color)?,
            hue: hsl.h,
            saturation: hsl.s,
            lightness: hsl.l,
            alpha: rgb.alpha,
            luminance: relative_luminance(&rgb),
            contrast_white: white,
            contrast_black: black,
            levels_white: wcag_levels(white),
            levels_black: wcag_levels(black),
        })
    }
}

/// Runs the info command.
pub fn run(args: InfoArgs, verbose: u8) -> Result<()> {
    let infos = args
        .colors
        .iter()
        .map(String::as_str)
        .map(ColorInfo::gather)
        .collect::<Result<Vec<_>>>()?;

    if args.json {
        let out = if infos.len() == 1 {
            serde_json::to_string_pretty(&infos[0])?
        } else {
            serde_json::to_string_pretty(&infos)?
        };
        println!("{}", out);
        return Ok(());
    }

    for (i, info) in infos.iter().enumerate() {
        if i > 0 {
            println!();
        }
        print_text(info, verbose);
    }
    Ok(())
}

/// Prints info in human-readable text format.
fn print_text(info: &ColorInfo, verbose: u8) {
    println!("{}", info.input);
    println!("  Hex:        {}", info.hex);
    println!("  RGB:        {}", info.rgb);
    println!("  HSL:        {}", info.hsl);
    println!("  Float:      {}", format_float(&info.float));
    println!(
        "  Channels:   h={} s={}% l={}%",
        info.hue, info.saturation, info.lightness
    );
    match info.alpha {
        Some(a) => println!("  Alpha:      {}", a),
        None => println!("  Alpha:      (none)"),
    }
    println!("  Luminance:  {:.4}", info.luminance);
    println!(
        "  On white:   {:.2} ({})",
        info.contrast_white,
        format_levels(&info.levels_white)
    );
    println!(
        "  On black:   {:.2} ({})",
        info.contrast_black,
        format_levels(&info.levels_black)
    );
    if verbose > 0 {
        println!("  Notation:   {:?}", Notation::detect(&info.input));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gather() {
        let info = ColorInfo::gather("rgb(255, 87, 51)").unwrap();
        assert_eq!(info.hex, "#ff5733");
        assert_eq!(info.hsl, "hsl(10.59, 100%, 60%)");
        assert_eq!(info.hue, 10.59);
        assert_eq!(info.alpha, None);
        assert!(info.contrast_white > 3.0 && info.contrast_white < 4.5);
        assert!(info.levels_white.contains(&WcagLevel::AaLarge));
    }

    #[test]
    fn test_gather_json() {
        let info = ColorInfo::gather("#00000080").unwrap();
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["hex"], "#00000080");
        assert_eq!(json["levels_white"][0], "AaLarge");
    }

    #[test]
    fn test_gather_rejects_garbage() {
        assert!(ColorInfo::gather("not a color").is_err());
    }
}
