use serde::{Deserialize, Serialize};

pub const MAX_STARS: u8 = 3;
pub const DEFAULT_FAST_SECS: u64 = 30;
pub const DEFAULT_STEADY_SECS: u64 = 60;

/// Star rating for a solved round.
///
/// Rules are tried in order and the first match wins:
/// no attempts is a perfect score, one attempt under `fast_secs` is three stars, up to two attempts under
/// `steady_secs` is two stars, up to three attempts is one star, anything else is zero.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringPolicy {
    fast_secs: u64,
    steady_secs: u64,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_FAST_SECS, DEFAULT_STEADY_SECS)
    }
}

impl ScoringPolicy {
    pub const fn new(fast_secs: u64, steady_secs: u64) -> Self {
        Self {
            fast_secs,
            steady_secs,
        }
    }

    /// `attempts` includes the winning check, `elapsed_secs` is measured at that check.
    pub const fn rate(&self, attempts: u32, elapsed_secs: u64) -> u8 {
        if attempts == 0 {
            MAX_STARS
        } else if attempts == 1 && elapsed_secs < self.fast_secs {
            3
        } else if attempts <= 2 && elapsed_secs < self.steady_secs {
            2
        } else if attempts <= 3 {
            1
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_table() {
        let policy = ScoringPolicy::default();

        assert_eq!(policy.rate(0, 999), 3);
        assert_eq!(policy.rate(1, 29), 3);
        assert_eq!(policy.rate(1, 30), 2);
        assert_eq!(policy.rate(2, 59), 2);
        assert_eq!(policy.rate(2, 60), 1);
        assert_eq!(policy.rate(3, 61), 1);
        assert_eq!(policy.rate(4, 5), 0);
    }

    #[test]
    fn first_matching_rule_wins() {
        let policy = ScoringPolicy::default();

        assert_eq!(policy.rate(1, 45), 2);
        assert_eq!(policy.rate(1, 75), 1);
    }

    #[test]
    fn thresholds_are_configurable() {
        let policy = ScoringPolicy::new(10, 20);

        assert_eq!(policy.rate(1, 15), 2);
        assert_eq!(policy.rate(2, 25), 1);
    }
}
