use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

pub const DEFAULT_SHUFFLE_RETRIES: usize = 10;

/// Unbiased Fisher-Yates shuffler that tries to never hand back the input order.
///
/// When the input has at least two distinguishable elements a result equal to the input is thrown away and the
/// shuffle is redone, at most `max_retries` times. After that the last attempt is returned as is.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shuffler {
    max_retries: usize,
}

impl Default for Shuffler {
    fn default() -> Self {
        Self::new(DEFAULT_SHUFFLE_RETRIES)
    }
}

impl Shuffler {
    pub const fn new(max_retries: usize) -> Self {
        Self { max_retries }
    }

    pub const fn max_retries(&self) -> usize {
        self.max_retries
    }

    pub fn shuffle<T: Clone + PartialEq>(&self, items: &[T], rng: &mut impl RandomSource) -> Vec<T> {
        self.shuffle_by(items, rng, |a, b| a == b)
    }

    /// Shuffles `items`, comparing orders with `same` instead of identity, so records can be distinct
    /// while still counting as the same arrangement.
    pub fn shuffle_by<T: Clone>(
        &self,
        items: &[T],
        rng: &mut impl RandomSource,
        same: impl Fn(&T, &T) -> bool,
    ) -> Vec<T> {
        let mut shuffled = items.to_vec();
        if items.len() <= 1 {
            return shuffled;
        }

        let distinguishable = items.iter().any(|item| !same(item, &items[0]));
        if !distinguishable {
            fisher_yates(&mut shuffled, rng);
            return shuffled;
        }

        for _ in 0..=self.max_retries {
            shuffled.clone_from_slice(items);
            fisher_yates(&mut shuffled, rng);
            if !shuffled.iter().zip(items).all(|(a, b)| same(a, b)) {
                return shuffled;
            }
        }

        log::warn!(
            "Shuffle kept the original order after {} retries, returning it anyway",
            self.max_retries
        );
        shuffled
    }
}

fn fisher_yates<T>(items: &mut [T], rng: &mut impl RandomSource) {
    for i in (1..items.len()).rev() {
        let j = rng.below(i + 1);
        items.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::ScriptedRandom;
    use alloc::vec;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn short_inputs_are_returned_unchanged() {
        let mut rng = ScriptedRandom::new(&[]);
        let shuffler = Shuffler::default();

        assert!(shuffler.shuffle::<char>(&[], &mut rng).is_empty());
        assert_eq!(shuffler.shuffle(&['A'], &mut rng), vec!['A']);
        assert_eq!(rng.calls, 0);
    }

    #[test]
    fn identity_result_is_retried() {
        // first pass swaps (2,2) then (1,1), which is the input order again
        let mut rng = ScriptedRandom::new(&[2, 1, 0, 0]);

        let shuffled = Shuffler::default().shuffle(&chars("ABC"), &mut rng);

        assert_eq!(shuffled, chars("BCA"));
        assert_eq!(rng.calls, 4);
    }

    #[test]
    fn retries_are_capped() {
        let mut rng = ScriptedRandom::new(&[]);

        let shuffled = Shuffler::new(10).shuffle(&chars("AB"), &mut rng);

        assert_eq!(shuffled, chars("AB"));
        assert_eq!(rng.calls, 11);
    }

    #[test]
    fn identical_elements_do_not_retry() {
        let mut rng = ScriptedRandom::new(&[]);

        let shuffled = Shuffler::default().shuffle(&chars("AAAA"), &mut rng);

        assert_eq!(shuffled, chars("AAAA"));
        assert_eq!(rng.calls, 3);
    }

    #[test]
    fn seeded_shuffles_never_repeat_input() {
        let mut rng = SeededRandom::new(7);
        let shuffler = Shuffler::new(64);

        for word in ["AB", "CAT", "ELEPHANT", "BOOK", "MISSISSIPPI"] {
            let letters = chars(word);
            for _ in 0..200 {
                let shuffled = shuffler.shuffle(&letters, &mut rng);
                assert_ne!(shuffled, letters);

                let mut sorted = shuffled.clone();
                sorted.sort_unstable();
                let mut expected = letters.clone();
                expected.sort_unstable();
                assert_eq!(sorted, expected);
            }
        }
    }

    #[test]
    fn shuffle_by_compares_with_given_key() {
        // distinct records but equal keys count as the same order
        let items = [(1, 'A'), (2, 'A'), (3, 'B')];
        let mut rng = ScriptedRandom::new(&[2, 1, 1, 0]);

        let shuffled = Shuffler::default().shuffle_by(&items, &mut rng, |a, b| a.1 == b.1);

        // second pass: swap(2,1) then swap(1,0) gives B, A, A
        assert_eq!(shuffled, vec![(3, 'B'), (1, 'A'), (2, 'A')]);
    }
}
