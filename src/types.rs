//! Strength classification and display result types.

use std::fmt;

/// Discrete strength classification derived from the 0-5 heuristic score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strength {
    Weak,
    Moderate,
    Strong,
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Strength::Weak => "Weak",
            Strength::Moderate => "Moderate",
            Strength::Strong => "Strong",
        };
        f.write_str(label)
    }
}

/// Immutable evaluation triple: classification plus the display attributes
/// the progress indicator applies verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrengthResult {
    pub strength: Strength,
    /// RGB hex string for the progress fill.
    pub color: &'static str,
    /// Fill width as a CSS percentage string.
    pub width: &'static str,
}

pub const WEAK_COLOR: &str = "#ff5f75";
pub const MODERATE_COLOR: &str = "#ffc241";
pub const STRONG_COLOR: &str = "#25d996";

pub const WEAK_WIDTH: &str = "20%";
pub const MODERATE_WIDTH: &str = "60%";
pub const STRONG_WIDTH: &str = "100%";

impl StrengthResult {
    /// Maps a heuristic score to its classification and display attributes.
    ///
    /// - score >= 5 -> Strong
    /// - 3..=4 -> Moderate
    /// - otherwise -> Weak
    pub fn from_score(score: u8) -> Self {
        if score >= 5 {
            StrengthResult {
                strength: Strength::Strong,
                color: STRONG_COLOR,
                width: STRONG_WIDTH,
            }
        } else if score >= 3 {
            StrengthResult {
                strength: Strength::Moderate,
                color: MODERATE_COLOR,
                width: MODERATE_WIDTH,
            }
        } else {
            StrengthResult {
                strength: Strength::Weak,
                color: WEAK_COLOR,
                width: WEAK_WIDTH,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_score_weak_band() {
        for score in 0..=2 {
            let result = StrengthResult::from_score(score);
            assert_eq!(result.strength, Strength::Weak);
            assert_eq!(result.color, WEAK_COLOR);
            assert_eq!(result.width, "20%");
        }
    }

    #[test]
    fn test_from_score_moderate_band() {
        for score in 3..=4 {
            let result = StrengthResult::from_score(score);
            assert_eq!(result.strength, Strength::Moderate);
            assert_eq!(result.color, MODERATE_COLOR);
            assert_eq!(result.width, "60%");
        }
    }

    #[test]
    fn test_from_score_strong_band() {
        for score in [5, 6, 10] {
            let result = StrengthResult::from_score(score);
            assert_eq!(result.strength, Strength::Strong);
            assert_eq!(result.color, "#25d996");
            assert_eq!(result.width, "100%");
        }
    }

    #[test]
    fn test_strength_display_labels() {
        assert_eq!(Strength::Weak.to_string(), "Weak");
        assert_eq!(Strength::Moderate.to_string(), "Moderate");
        assert_eq!(Strength::Strong.to_string(), "Strong");
    }
}
