//! CLI command implementations

pub mod adjust;
pub mod contrast;
pub mod convert;
pub mod info;
pub mod premult;
pub mod theme;

use swatch_color::WcagLevel;

/// Formats WCAG levels as a comma separated list, or `none`.
pub fn format_levels(levels: &[WcagLevel]) -> String {
    if levels.is_empty() {
        return "none".to_string();
    }
    levels
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
