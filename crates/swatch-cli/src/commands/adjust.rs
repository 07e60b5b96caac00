//! Channel adjustment command.
//!
//! Steps run in a fixed order: hue shift, hue, saturation, lightness,
//! lighten, darken, alpha. Each step keeps the notation of the input.

use anyhow::{Context, Result};
use swatch_color::adjust;
use swatch_color::ColorResult;
use tracing::trace;

use crate::AdjustArgs;

type Step = (&'static str, Option<f64>, fn(&str, f64) -> ColorResult<String>);

/// Runs the adjust command.
pub fn run(args: AdjustArgs, _verbose: u8) -> Result<()> {
    println!("{}", apply(&args)?);
    Ok(())
}

fn apply(args: &AdjustArgs) -> Result<String> {
    let steps: [Step; 7] = [
        ("hue-add", args.hue_add, adjust::add_hue),
        ("hue", args.hue, adjust::set_hue),
        ("saturation", args.saturation, adjust::set_saturation),
        ("lightness", args.lightness, adjust::set_lightness),
        ("lighten", args.lighten, adjust::lighten),
        ("darken", args.darken, adjust::darken),
        ("alpha", args.alpha, adjust::set_alpha),
    ];

    let mut color = args.color.clone();
    for (name, value, op) in steps {
        let Some(value) = value else { continue };
        color = op(&color, value).with_context(|| format!("--{} {} on {:?}", name, value, color))?;
        trace!(step = name, value, %color);
    }
    Ok(color)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(color: &str) -> AdjustArgs {
        AdjustArgs {
            color: color.to_string(),
            hue_add: None,
            hue: None,
            saturation: None,
            lightness: None,
            lighten: None,
            darken: None,
            alpha: None,
        }
    }

    #[test]
    fn test_no_steps_returns_input() {
        assert_eq!(apply(&args("#ff5733")).unwrap(), "#ff5733");
    }

    #[test]
    fn test_steps_keep_notation() {
        let mut a = args("hsl(10.59, 100%, 60%)");
        a.hue_add = Some(10.0);
        a.lighten = Some(10.0);
        a.alpha = Some(0.5);
        // each step re-reads the previous result through rgb
        assert_eq!(apply(&a).unwrap(), "hsla(20.78, 100%, 70%, 50%)");
    }

    #[test]
    fn test_bad_color() {
        let mut a = args("red");
        a.darken = Some(5.0);
        assert!(apply(&a).is_err());
    }
}
