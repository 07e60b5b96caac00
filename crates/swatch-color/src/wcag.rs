//! WCAG 2.x contrast conformance levels.

use std::fmt;

/// A WCAG contrast requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WcagLevel {
    /// AA, normal text: 4.5:1.
    Aa,
    /// AA, large text: 3:1.
    AaLarge,
    /// AAA, normal text: 7:1.
    Aaa,
    /// AAA, large text: 4.5:1.
    AaaLarge,
}

impl WcagLevel {
    /// All levels, weakest requirement first.
    pub const ALL: [WcagLevel; 4] = [Self::AaLarge, Self::Aa, Self::AaaLarge, Self::Aaa];

    /// Minimum contrast ratio for this level.
    pub fn min_ratio(&self) -> f64 {
        match self {
            Self::AaLarge => 3.0,
            Self::Aa | Self::AaaLarge => 4.5,
            Self::Aaa => 7.0,
        }
    }

    /// Returns `true` if `ratio` satisfies this level.
    #[inline]
    pub fn passes(&self, ratio: f64) -> bool {
        ratio >= self.min_ratio()
    }
}

impl fmt::Display for WcagLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Aa => "AA",
            Self::AaLarge => "AA large",
            Self::Aaa => "AAA",
            Self::AaaLarge => "AAA large",
        })
    }
}

/// Every level satisfied by `ratio`, weakest first.
pub fn wcag_levels(ratio: f64) -> Vec<WcagLevel> {
    WcagLevel::ALL
        .into_iter()
        .filter(|level| level.passes(ratio))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds() {
        assert!(WcagLevel::Aa.passes(4.5));
        assert!(!WcagLevel::Aaa.passes(4.5));
        assert!(WcagLevel::AaLarge.passes(3.0));
        assert!(!WcagLevel::AaLarge.passes(2.99));
    }

    #[test]
    fn test_levels() {
        assert!(wcag_levels(1.0).is_empty());
        assert_eq!(wcag_levels(3.5), vec![WcagLevel::AaLarge]);
        assert_eq!(wcag_levels(21.0), WcagLevel::ALL.to_vec());
    }
}
