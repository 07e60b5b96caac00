//! Contrast audit of a palette against its background.

use swatch_color::{WcagLevel, contrast_ratio, wcag_levels};
use tracing::{debug, warn};

use crate::error::{ThemeError, ThemeResult};
use crate::palette::Palette;

/// Contrast of one palette entry against the palette background.
#[derive(Debug, Clone, PartialEq)]
pub struct ContrastCheck {
    /// Palette entry name.
    pub name: String,
    /// Entry color as written in the palette.
    pub color: String,
    /// Contrast ratio against the background, 1..=21.
    pub ratio: f64,
    /// WCAG levels met, weakest first.
    pub levels: Vec<WcagLevel>,
    /// Whether `ratio` reaches the requested minimum.
    pub passes: bool,
}

impl Palette {
    /// Checks every color against the background.
    ///
    /// Entries below `min_ratio` are reported with `passes == false` and
    /// logged at warn level. Results are in name order.
    pub fn audit(&self, min_ratio: f64) -> ThemeResult<Vec<ContrastCheck>> {
        let background = self.background();
        let mut checks = Vec::with_capacity(self.len());

        for (name, color) in self.iter() {
            let ratio = contrast_ratio(color, background)
                .map_err(|e| ThemeError::invalid_color(name, e))?;
            let passes = ratio >= min_ratio;
            if !passes {
                warn!(name, color, ratio, min_ratio, "Insufficient contrast");
            }
            checks.push(ContrastCheck {
                name: name.to_string(),
                color: color.to_string(),
                ratio,
                levels: wcag_levels(ratio),
                passes,
            });
        }

        debug!(
            palette = self.name(),
            checked = checks.len(),
            failed = checks.iter().filter(|c| !c.passes).count(),
            "Audit complete"
        );
        Ok(checks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_audit_against_white() {
        let mut p = Palette::new("audit");
        p.insert("black", "#000000").unwrap();
        p.insert("gray", "#767676").unwrap();
        p.insert("white", "#ffffff").unwrap();

        let checks = p.audit(WcagLevel::Aa.min_ratio()).unwrap();
        let names: Vec<_> = checks.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["black", "gray", "white"]);

        assert!(checks[0].passes);
        assert_eq!(checks[0].levels, WcagLevel::ALL.to_vec());
        assert!(checks[1].passes);
        assert!(checks[1].levels.contains(&WcagLevel::Aa));
        assert!(!checks[1].levels.contains(&WcagLevel::Aaa));
        assert!(!checks[2].passes);
        assert!(checks[2].levels.is_empty());
    }

    #[test]
    fn test_audit_uses_palette_background() {
        let mut p = Palette::new("dark");
        p.set_background("#000000").unwrap();
        p.insert("white", "#ffffff").unwrap();
        let checks = p.audit(7.0).unwrap();
        assert!((checks[0].ratio - 21.0).abs() < 1e-9);
    }

    #[test]
    fn test_audit_empty() {
        assert!(Palette::new("empty").audit(4.5).unwrap().is_empty());
    }
}
