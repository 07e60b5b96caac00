//! Alpha premultiplication command.
//!
//! Prints the premultiplied `[r,g,b,a]` vector of a color, optionally with
//! its alpha replaced first (`--clear`), as used for GPU clear colors.

use anyhow::{Context, Result};
use clap::Args;
use swatch_color::{clear_color, format::format_float, premultiply_alpha};
use tracing::debug;

/// Arguments for the `premultiply` command.
#[derive(Args)]
pub struct PremultArgs {
    /// Input color
    pub color: String,

    /// Replace alpha with this value before premultiplying
    #[arg(long, value_name = "ALPHA")]
    pub clear: Option<f64>,
}

/// Run the premultiply command.
pub fn run(args: PremultArgs, _verbose: u8) -> Result<()> {
    let v = match args.clear {
        Some(alpha) => {
            debug!(color = %args.color, alpha, "clear color");
            clear_color(&args.color, alpha)
        }
        None => premultiply_alpha(args.color.as_str()),
    }
    .with_context(|| format!("Failed to premultiply {:?}", args.color))?;

    println!("{}", format_float(&v));
    Ok(())
}
