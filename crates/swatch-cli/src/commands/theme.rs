//! Palette command.
//!
//! Without options lists every color. `--get` resolves one name the way
//! theme code does. `--min-ratio` audits every color against the palette
//! background and fails if any entry falls short.

use anyhow::{Context, Result, bail};
use swatch_theme::{Palette, resolve_color};
use tracing::info;

use super::format_levels;
use crate::ThemeArgs;

/// Runs the theme command.
pub fn run(args: ThemeArgs, verbose: u8) -> Result<()> {
    let palette = Palette::from_file(&args.palette)
        .with_context(|| format!("Failed to load palette: {}", args.palette.display()))?;
    info!(name = palette.name(), colors = palette.len(), "palette");

    if let Some(name) = &args.get {
        let color = resolve_color(&palette, name);
        if color.is_empty() {
            bail!("No color named {:?} in {}", name, args.palette.display());
        }
        println!("{}", color);
        return Ok(());
    }

    if verbose > 0 || args.min_ratio.is_none() {
        let title = if palette.name().is_empty() {
            args.palette.display().to_string()
        } else {
            palette.name().to_string()
        };
        println!("{} ({}, background {})", title, palette.scheme(), palette.background());
    }

    let Some(min_ratio) = args.min_ratio else {
        let width = palette.names().map(str::len).max().unwrap_or(0);
        for (name, color) in palette.iter() {
            println!("  {:<width$}  {}", name, color, width = width);
        }
        return Ok(());
    };

    let checks = palette.audit(min_ratio)?;
    let width = checks.iter().map(|c| c.name.len()).max().unwrap_or(0);
    for check in &checks {
        println!(
            "  {:<width$}  {:>5.2}  {:<4}  {}",
            check.name,
            check.ratio,
            if check.passes { "ok" } else { "FAIL" },
            format_levels(&check.levels),
            width = width
        );
    }

    let failed = checks.iter().filter(|c| !c.passes).count();
    if failed > 0 {
        bail!("{} of {} colors below {:.2}:1", failed, checks.len(), min_ratio);
    }
    Ok(())
}
