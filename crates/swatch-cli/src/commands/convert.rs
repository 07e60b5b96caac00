//! Notation conversion command.

use anyhow::{Context, Result};
use tracing::debug;

use crate::ConvertArgs;

/// Runs the convert command, printing the color in the target notation.
pub fn run(args: ConvertArgs, _verbose: u8) -> Result<()> {
    debug!(color = %args.color, to = %args.to, "convert");
    let out = swatch_color::convert(&args.color, args.to)
        .with_context(|| format!("Failed to convert {:?}", args.color))?;
    println!("{}", out);
    Ok(())
}
