//! WCAG contrast command.

use anyhow::{Context, Result};
use swatch_color::{contrast_ratio, wcag_levels};

use super::format_levels;
use crate::ContrastArgs;

/// Prints the contrast ratio to two decimals and the WCAG levels it meets.
pub fn run(args: ContrastArgs, verbose: u8) -> Result<()> {
    let ratio = contrast_ratio(&args.foreground, &args.background).with_context(|| {
        format!(
            "Failed to compare {:?} with {:?}",
            args.foreground, args.background
        )
    })?;

    if verbose > 0 {
        println!("{} on {}", args.foreground, args.background);
    }
    println!("{:.2}", ratio);
    println!("WCAG: {}", format_levels(&wcag_levels(ratio)));
    Ok(())
}
