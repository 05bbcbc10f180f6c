#![no_std]

extern crate alloc;

use alloc::string::String;
use serde::{Deserialize, Serialize};

pub use clock::*;
pub use difficulty::*;
pub use engine::*;
pub use error::*;
pub use random::*;
pub use scoring::*;
pub use session::*;
pub use shuffle::*;
pub use stats::*;
pub use store::*;
pub use tile::*;

mod clock;
mod difficulty;
mod engine;
mod error;
mod random;
mod scoring;
mod session;
mod shuffle;
mod stats;
mod store;
mod tile;

/// Trims surrounding whitespace and uppercases, the canonical form every round compares against.
pub fn normalize_word(word: &str) -> String {
    word.trim().to_uppercase()
}

/// Tunables shared by a whole game session. Every field falls back to its default when missing from
/// a config file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub history_limit: usize,
    pub shuffle_retries: usize,
    pub record_losses: bool,
    pub fast_secs: u64,
    pub steady_secs: u64,
    pub max_word_len: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            history_limit: DEFAULT_HISTORY_LIMIT,
            shuffle_retries: DEFAULT_SHUFFLE_RETRIES,
            record_losses: true,
            fast_secs: DEFAULT_FAST_SECS,
            steady_secs: DEFAULT_STEADY_SECS,
            max_word_len: 20,
        }
    }
}

impl GameConfig {
    pub const fn scoring(&self) -> ScoringPolicy {
        ScoringPolicy::new(self.fast_secs, self.steady_secs)
    }

    pub const fn shuffler(&self) -> Shuffler {
        Shuffler::new(self.shuffle_retries)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CheckOutcome {
    /// Same arrangement as the previous check, nothing was counted.
    Unchanged { correct: bool },
    Incorrect,
    Correct,
}

impl CheckOutcome {
    pub const fn has_update(self) -> bool {
        use CheckOutcome::*;
        match self {
            Unchanged { .. } => false,
            Incorrect => true,
            Correct => true,
        }
    }

    pub const fn is_correct(self) -> bool {
        matches!(self, Self::Correct | Self::Unchanged { correct: true })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_trims_and_uppercases() {
        assert_eq!(normalize_word("  cat \n"), "CAT");
        assert_eq!(normalize_word("Élan"), "ÉLAN");
    }

    #[test]
    fn config_fills_missing_fields_with_defaults() {
        let config: GameConfig = serde_json::from_str(r#"{"record_losses": false}"#).unwrap();

        assert!(!config.record_losses);
        assert_eq!(config.history_limit, 20);
        assert_eq!(config.shuffler().max_retries(), 10);
        assert_eq!(config.scoring(), ScoringPolicy::default());
    }

    #[test]
    fn unchanged_check_keeps_previous_correctness() {
        assert!(CheckOutcome::Unchanged { correct: true }.is_correct());
        assert!(!CheckOutcome::Unchanged { correct: false }.has_update());
        assert!(CheckOutcome::Incorrect.has_update());
    }
}
