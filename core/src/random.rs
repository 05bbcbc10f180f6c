use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Source of uniform random indices for shuffling and decorative choices.
pub trait RandomSource {
    /// Uniform value in `0..bound`, `bound` must be non-zero.
    fn below(&mut self, bound: usize) -> usize;
}

impl<T: RandomSource + ?Sized> RandomSource for &mut T {
    fn below(&mut self, bound: usize) -> usize {
        (**self).below(bound)
    }
}

/// Reproducible source backed by a small fast PRNG.
#[derive(Clone, Debug)]
pub struct SeededRandom {
    seed: u64,
    rng: SmallRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SeededRandom {
    fn below(&mut self, bound: usize) -> usize {
        self.rng.random_range(0..bound)
    }
}

/// Replays a fixed list of values, then keeps answering `bound - 1`, which leaves a Fisher-Yates pass
/// as the identity.
#[cfg(test)]
#[derive(Clone, Debug, Default)]
pub(crate) struct ScriptedRandom {
    values: alloc::collections::VecDeque<usize>,
    pub(crate) calls: usize,
}

#[cfg(test)]
impl ScriptedRandom {
    pub(crate) fn new(values: &[usize]) -> Self {
        Self {
            values: values.iter().copied().collect(),
            calls: 0,
        }
    }
}

#[cfg(test)]
impl RandomSource for ScriptedRandom {
    fn below(&mut self, bound: usize) -> usize {
        self.calls += 1;
        match self.values.pop_front() {
            Some(value) => value % bound,
            None => bound - 1,
        }
    }
}
