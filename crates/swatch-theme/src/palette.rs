//! Palette files.
//!
//! A palette is a YAML document mapping names to color strings, plus an
//! optional list of colors derived from other entries:
//!
//! ```yaml
//! name: Default
//! scheme: light
//! background: "#ffffff"
//! colors:
//!   primary: "#ff5733"
//!   text: "hsl(0, 0%, 10%)"
//! derived:
//!   - name: primary-hover
//!     from: primary
//!     darken: 10
//!   - name: primary-faint
//!     from: primary
//!     alpha: 0.2
//! ```
//!
//! Every color is validated when the palette is loaded, so lookups on a
//! loaded palette always return parseable strings. Derived colors are
//! written in the notation of the color they derive from.
//!
//! # Example
//!
//! ```rust
//! use swatch_theme::Palette;
//!
//! let palette = Palette::from_yaml_str(r##"
//! name: demo
//! colors:
//!   primary: "#ff5733"
//! derived:
//!   - name: primary-dark
//!     from: primary
//!     darken: 10
//! "##).unwrap();
//!
//! assert_eq!(palette.get("primary"), Some("#ff5733"));
//! assert!(palette.get("primary-dark").is_some());
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;
use swatch_color::{adjust, parse_rgb};
use tracing::{debug, trace};

use crate::error::{ThemeError, ThemeResult};

/// Background used when a palette does not name one.
pub const DEFAULT_BACKGROUND: &str = "#ffffff";

/// Light or dark color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    /// Light backgrounds, dark text.
    #[default]
    Light,
    /// Dark backgrounds, light text.
    Dark,
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Light => "light",
            Self::Dark => "dark",
        })
    }
}

impl FromStr for Scheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(format!("unknown scheme: {}", other)),
        }
    }
}

/// A named set of validated theme colors.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    name: String,
    scheme: Scheme,
    background: String,
    colors: BTreeMap<String, String>,
}

impl Default for Palette {
    fn default() -> Self {
        Self::new("")
    }
}

impl Palette {
    /// Creates an empty light palette on a white background.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            scheme: Scheme::Light,
            background: DEFAULT_BACKGROUND.to_string(),
            colors: BTreeMap::new(),
        }
    }

    /// Loads a palette from a YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> ThemeResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ThemeError::PaletteNotFound {
                path: path.to_path_buf(),
            });
        }
        debug!(path = %path.display(), "Loading palette");
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Loads a palette from a YAML string.
    pub fn from_yaml_str(yaml: &str) -> ThemeResult<Self> {
        let raw: RawPalette = serde_yaml::from_str(yaml)?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawPalette) -> ThemeResult<Self> {
        let mut palette = Self::new(raw.name.unwrap_or_default());
        palette.scheme = raw.scheme.unwrap_or_default();
        if let Some(background) = raw.background {
            palette.set_background(background)?;
        }

        for (name, color) in raw.colors.unwrap_or_default() {
            palette.insert(name, color)?;
        }

        for derived in raw.derived.unwrap_or_default() {
            let color = palette.derive(&derived)?;
            trace!(name = %derived.name, %color, "derived");
            palette.insert(derived.name, color)?;
        }

        debug!(name = %palette.name, colors = palette.colors.len(), "Palette loaded");
        Ok(palette)
    }

    fn derive(&self, entry: &RawDerived) -> ThemeResult<String> {
        let base = self
            .get(&entry.from)
            .ok_or_else(|| ThemeError::UnknownReference {
                name: entry.name.clone(),
                from: entry.from.clone(),
            })?;

        let invalid = |e| ThemeError::invalid_color(entry.name.as_str(), e);
        let mut color = base.to_string();
        if let Some(d) = entry.add_hue {
            color = adjust::add_hue(&color, d).map_err(invalid)?;
        }
        if let Some(s) = entry.saturation {
            color = adjust::set_saturation(&color, s).map_err(invalid)?;
        }
        if let Some(p) = entry.lighten {
            color = adjust::lighten(&color, p).map_err(invalid)?;
        }
        if let Some(p) = entry.darken {
            color = adjust::darken(&color, p).map_err(invalid)?;
        }
        if let Some(a) = entry.alpha {
            color = adjust::set_alpha(&color, a).map_err(invalid)?;
        }
        Ok(color)
    }

    /// Palette name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Color scheme.
    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    /// Sets the color scheme.
    pub fn set_scheme(&mut self, scheme: Scheme) {
        self.scheme = scheme;
    }

    /// Background color used for contrast audits.
    pub fn background(&self) -> &str {
        &self.background
    }

    /// Sets the background color after validating it.
    pub fn set_background(&mut self, color: impl Into<String>) -> ThemeResult<()> {
        let color = color.into();
        parse_rgb(&color).map_err(|e| ThemeError::invalid_color("background", e))?;
        self.background = color;
        Ok(())
    }

    /// Adds or replaces a color after validating it.
    pub fn insert(&mut self, name: impl Into<String>, color: impl Into<String>) -> ThemeResult<()> {
        let (name, color) = (name.into(), color.into());
        parse_rgb(&color).map_err(|e| ThemeError::invalid_color(name.as_str(), e))?;
        self.colors.insert(name, color);
        Ok(())
    }

    /// Looks up a color by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.colors.get(name).map(String::as_str)
    }

    /// Color names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.colors.keys().map(String::as_str)
    }

    /// `(name, color)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.colors.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of colors, derived ones included.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns `true` if the palette holds no colors.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

// ============================================================================
// Raw YAML structures for serde
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawPalette {
    name: Option<String>,
    scheme: Option<Scheme>,
    background: Option<String>,
    colors: Option<BTreeMap<String, String>>,
    derived: Option<Vec<RawDerived>>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawDerived {
    name: String,
    from: String,
    add_hue: Option<f64>,
    saturation: Option<f64>,
    lighten: Option<f64>,
    darken: Option<f64>,
    alpha: Option<f64>,
}
