use alloc::string::String;
use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::*;

/// Inclusive bounds on the number of letters a word may have. An absent `max` means unbounded.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LengthRange {
    min: usize,
    max: Option<usize>,
}

impl LengthRange {
    pub const fn new(min: usize, max: Option<usize>) -> Self {
        Self { min, max }
    }

    pub const fn min(self) -> usize {
        self.min
    }

    pub const fn max(self) -> Option<usize> {
        self.max
    }

    pub const fn contains(self, len: usize) -> bool {
        if len < self.min {
            return false;
        }
        match self.max {
            Some(max) => len <= max,
            None => true,
        }
    }

    /// Same range with the upper bound clamped to `limit`.
    pub fn capped(self, limit: usize) -> Self {
        let max = self.max.map_or(limit, |max| max.min(limit));
        Self::new(self.min, Some(max))
    }
}

impl fmt::Display for LengthRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.max {
            Some(max) => write!(f, "{} to {}", self.min, max),
            None => write!(f, "at least {}", self.min),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HintMode {
    Always,
    Toggle,
    Never,
}

impl HintMode {
    pub const fn initially_visible(self) -> bool {
        matches!(self, Self::Always)
    }

    pub const fn is_toggleable(self) -> bool {
        matches!(self, Self::Toggle)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::Medium
    }
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }

    pub const fn length_range(self) -> LengthRange {
        match self {
            Self::Easy => LengthRange::new(3, Some(5)),
            Self::Medium => LengthRange::new(6, Some(8)),
            Self::Hard => LengthRange::new(9, None),
        }
    }

    pub const fn hint_mode(self) -> HintMode {
        match self {
            Self::Easy => HintMode::Always,
            Self::Medium => HintMode::Toggle,
            Self::Hard => HintMode::Never,
        }
    }

    /// Normalizes `word` and checks its letter count against this tier, returning the normalized word.
    pub fn validate(self, word: &str) -> Result<String> {
        let word = normalize_word(word);
        let range = self.length_range();
        if range.contains(word.chars().count()) {
            Ok(word)
        } else {
            Err(GameError::InvalidLength(range))
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        let s = s.trim();
        Difficulty::ALL
            .into_iter()
            .find(|difficulty| difficulty.name().eq_ignore_ascii_case(s))
            .ok_or(ParseDifficultyError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_rejects_short_easy_word() {
        assert_eq!(
            Difficulty::Easy.validate("AB"),
            Err(GameError::InvalidLength(LengthRange::new(3, Some(5))))
        );
    }

    #[test]
    fn validate_accepts_and_normalizes() {
        assert_eq!(Difficulty::Easy.validate(" cat ").unwrap(), "CAT");
        assert_eq!(Difficulty::Medium.validate("Elephant").unwrap(), "ELEPHANT");
        assert_eq!(
            Difficulty::Hard.validate("chocolate").unwrap(),
            "CHOCOLATE"
        );
    }

    #[test]
    fn validate_counts_after_trimming() {
        // padded to 7 chars but only 5 letters
        assert!(Difficulty::Easy.validate(" HELLO ").is_ok());
        assert!(Difficulty::Medium.validate(" HELLO ").is_err());
    }

    #[test]
    fn hard_has_no_upper_bound() {
        let long = "A".repeat(40);
        assert!(Difficulty::Hard.validate(&long).is_ok());
        assert!(Difficulty::Hard.validate("ELEPHANT").is_err());
    }

    #[test]
    fn hint_modes_per_tier() {
        assert!(Difficulty::Easy.hint_mode().initially_visible());
        assert!(Difficulty::Medium.hint_mode().is_toggleable());
        assert!(!Difficulty::Medium.hint_mode().initially_visible());
        assert_eq!(Difficulty::Hard.hint_mode(), HintMode::Never);
    }

    #[test]
    fn capped_range_clamps_upper_bound() {
        assert_eq!(
            Difficulty::Hard.length_range().capped(20),
            LengthRange::new(9, Some(20))
        );
        assert_eq!(
            Difficulty::Easy.length_range().capped(20),
            LengthRange::new(3, Some(5))
        );
    }

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("Hard".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert_eq!(" easy".parse::<Difficulty>(), Ok(Difficulty::Easy));
        assert_eq!("expert".parse::<Difficulty>(), Err(ParseDifficultyError));
    }

    #[test]
    fn length_range_display() {
        use alloc::string::ToString;

        assert_eq!(LengthRange::new(3, Some(5)).to_string(), "3 to 5");
        assert_eq!(LengthRange::new(9, None).to_string(), "at least 9");
    }
}
