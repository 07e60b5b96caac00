//! Named style lookups.
//!
//! Theme code often asks a style source for a color by property name and
//! wants a plain string back. [`resolve_color`] does that, logging a
//! warning and returning an empty string when the property is missing.

use std::collections::HashMap;

use tracing::warn;

use crate::palette::Palette;

/// Something that can answer style property lookups.
pub trait StyleSource {
    /// Returns the raw value of `name`, if present.
    fn property(&self, name: &str) -> Option<String>;
}

/// Looks up `name` in `source`, returning `""` if it is missing.
///
/// ```rust
/// use std::collections::HashMap;
/// use swatch_theme::resolve_color;
///
/// let mut vars = HashMap::new();
/// vars.insert("--primary".to_string(), "#ff5733".to_string());
///
/// assert_eq!(resolve_color(&vars, "--primary"), "#ff5733");
/// assert_eq!(resolve_color(&vars, "--missing"), "");
/// ```
pub fn resolve_color<S: StyleSource + ?Sized>(source: &S, name: &str) -> String {
    match source.property(name) {
        Some(value) => value.trim().to_string(),
        None => {
            warn!(property = name, "Could not find color");
            String::new()
        }
    }
}

impl StyleSource for HashMap<String, String> {
    fn property(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

/// Accepts bare names, CSS custom property names (`--primary`) and
/// `color-` prefixed names. `background` and `background-color` resolve to
/// the palette background unless the palette defines them itself.
impl StyleSource for Palette {
    fn property(&self, name: &str) -> Option<String> {
        let name = name.trim();
        let bare = name.strip_prefix("--").unwrap_or(name);
        let candidates = [bare, bare.strip_prefix("color-").unwrap_or(bare)];
        for candidate in candidates {
            if let Some(color) = self.get(candidate) {
                return Some(color.to_string());
            }
        }
        match bare {
            "background" | "background-color" => Some(self.background().to_string()),
            _ => None,
        }
    }
}
