//! swatch - color string toolbox
//!
//! Converts, inspects and adjusts CSS-style color strings, checks WCAG
//! contrast and audits theme palettes.

use anyhow::Result;
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;
use swatch_color::Format;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "swatch")]
#[command(author, version, about = "Color string conversion and contrast toolbox")]
#[command(long_about = "
Parses hex, rgb(), hsl() and color(srgb ...) strings, converts between
them, derives lighter/darker/shifted variants and checks WCAG contrast.

Examples:
  swatch convert '#ff5733' --to hsl         # hsl(10.59, 100%, 60%)
  swatch info 'rgb(255, 87, 51)' --json
  swatch adjust '#ff5733' --lighten 10 --alpha 0.5
  swatch contrast '#767676' '#ffffff'       # 4.54
  swatch premultiply 'rgba(255, 0, 0, 0.5)'
  swatch theme palette.yaml --min-ratio 4.5
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a color to another notation
    #[command(visible_alias = "c")]
    Convert(ConvertArgs),

    /// Show a color in every notation
    #[command(visible_alias = "i")]
    Info(InfoArgs),

    /// Derive a color by changing its channels
    #[command(visible_alias = "a")]
    Adjust(AdjustArgs),

    /// WCAG contrast ratio between two colors
    Contrast(ContrastArgs),

    /// Premultiplied float vector of a color
    #[command(visible_alias = "premult")]
    Premultiply(commands::premult::PremultArgs),

    /// List, resolve or audit a palette file
    #[command(visible_alias = "t")]
    Theme(ThemeArgs),
}

#[derive(Args)]
struct ConvertArgs {
    /// Input color
    color: String,

    /// Target notation: hex, rgb, hsl, float
    #[arg(short, long, default_value = "hex")]
    to: Format,
}

#[derive(Args)]
struct InfoArgs {
    /// Input color(s)
    #[arg(required = true)]
    colors: Vec<String>,

    /// Machine-readable output (JSON)
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct AdjustArgs {
    /// Input color; the result keeps its notation
    color: String,

    /// Add degrees to the hue
    #[arg(long, allow_hyphen_values = true)]
    hue_add: Option<f64>,

    /// Set the hue (degrees)
    #[arg(long)]
    hue: Option<f64>,

    /// Set the saturation (0-100)
    #[arg(short, long)]
    saturation: Option<f64>,

    /// Set the lightness (0-100)
    #[arg(short, long)]
    lightness: Option<f64>,

    /// Raise lightness by this many points
    #[arg(long)]
    lighten: Option<f64>,

    /// Lower lightness by this many points
    #[arg(long)]
    darken: Option<f64>,

    /// Set alpha (0-1)
    #[arg(short, long)]
    alpha: Option<f64>,
}

#[derive(Args)]
struct ContrastArgs {
    /// Foreground color
    foreground: String,

    /// Background color
    #[arg(default_value = "#000000")]
    background: String,
}

#[derive(Args)]
struct ThemeArgs {
    /// Palette YAML file
    palette: PathBuf,

    /// Print a single color by name (accepts --name and color- prefixes)
    #[arg(short, long)]
    get: Option<String>,

    /// Audit every color against the background; fail below this ratio
    #[arg(short, long)]
    min_ratio: Option<f64>,
}

/// Installs the stderr log subscriber.
///
/// `RUST_LOG` wins when set; otherwise `-v` selects debug and `-vv` trace.
fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .without_time()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Convert(args) => commands::convert::run(args, cli.verbose),
        Commands::Info(args) => commands::info::run(args, cli.verbose),
        Commands::Adjust(args) => commands::adjust::run(args, cli.verbose),
        Commands::Contrast(args) => commands::contrast::run(args, cli.verbose),
        Commands::Premultiply(args) => commands::premult::run(args, cli.verbose),
        Commands::Theme(args) => commands::theme::run(args, cli.verbose),
    }
}
