use alloc::string::ToString;

use crate::*;

/// Shown after a check that did not solve the round.
pub const ENCOURAGEMENTS: [&str; 5] = [
    "Almost there!\nTry once more!",
    "Don't give up!\nYou've got this!",
    "So close!\nOne more try!",
    "Nice effort!\nKeep going!",
    "You're on the right track!\nGo again!",
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RoundReport {
    Won {
        stars: u8,
        elapsed_secs: u64,
        attempts: u32,
    },
    Missed {
        encouragement: &'static str,
    },
    /// Nothing changed since the previous check.
    Repeated {
        correct: bool,
    },
}

/// Ties a round, its stopwatch and the statistics together the way a front end drives them.
///
/// A won round is recorded once, then refuses further moves until `close_round` or the next `start_round`.
#[derive(Debug)]
pub struct GameSession<S, C, R> {
    config: GameConfig,
    scoring: ScoringPolicy,
    engine: RoundEngine,
    stats: StatsAggregator<S>,
    stopwatch: Stopwatch,
    solved: bool,
    clock: C,
    rng: R,
}

impl<S: StatsStore, C: Clock, R: RandomSource> GameSession<S, C, R> {
    pub fn new(config: GameConfig, store: S, clock: C, rng: R) -> Self {
        let stats = StatsAggregator::load(store, config.history_limit);
        Self {
            scoring: config.scoring(),
            engine: RoundEngine::new(config.shuffler()),
            stats,
            stopwatch: Stopwatch::default(),
            solved: false,
            clock,
            rng,
            config,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> RoundState {
        self.engine.state()
    }

    pub fn round(&self) -> Option<&Round> {
        self.engine.round()
    }

    pub fn is_solved(&self) -> bool {
        self.solved
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.stopwatch.elapsed_secs(&self.clock)
    }

    pub fn statistics(&self) -> &Statistics {
        self.stats.statistics()
    }

    pub fn stats(&self) -> &StatsAggregator<S> {
        &self.stats
    }

    /// Starts a round and its stopwatch. A round still in progress is abandoned first.
    pub fn start_round(&mut self, word: &str, difficulty: Difficulty) -> Result<&Round> {
        let word = difficulty.validate(word)?;
        let max_len = self.config.max_word_len;
        if word.chars().count() > max_len {
            return Err(GameError::InvalidLength(
                difficulty.length_range().capped(max_len),
            ));
        }

        self.abandon_round();
        self.engine.start(&word, difficulty, &mut self.rng)?;
        self.stopwatch.start(&self.clock);
        self.engine.round().ok_or(GameError::NotActive)
    }

    pub fn swap(&mut self, i: usize, j: usize) -> Result<()> {
        self.check_playable()?;
        self.engine.swap(i, j)
    }

    pub fn shuffle(&mut self) -> Result<()> {
        self.check_playable()?;
        self.engine.shuffle_all(&mut self.rng)
    }

    pub fn toggle_hint(&mut self) -> Result<bool> {
        self.engine.toggle_hint()
    }

    pub fn check(&mut self) -> Result<RoundReport> {
        if self.solved {
            return Ok(RoundReport::Repeated { correct: true });
        }

        match self.engine.check()? {
            CheckOutcome::Unchanged { correct } => Ok(RoundReport::Repeated { correct }),
            CheckOutcome::Incorrect => {
                let encouragement = ENCOURAGEMENTS[self.rng.below(ENCOURAGEMENTS.len())];
                Ok(RoundReport::Missed { encouragement })
            }
            CheckOutcome::Correct => {
                self.stopwatch.stop(&self.clock);
                let elapsed_secs = self.stopwatch.elapsed_secs(&self.clock);

                let round = self.engine.round().ok_or(GameError::NotActive)?;
                let attempts = round.attempts();
                let stars = self.scoring.rate(attempts, elapsed_secs);
                let entry = HistoryEntry {
                    word: round.original_word().to_string(),
                    difficulty: round.difficulty(),
                    elapsed_secs,
                    attempts,
                    stars,
                    won: true,
                    timestamp_millis: self.clock.wall_millis(),
                };

                self.stats.record_result(entry);
                self.solved = true;
                log::info!(
                    "Solved in {}s with {} attempts, {} stars",
                    elapsed_secs,
                    attempts,
                    stars
                );

                Ok(RoundReport::Won {
                    stars,
                    elapsed_secs,
                    attempts,
                })
            }
        }
    }

    /// Back to idle after the result of a won round was shown.
    pub fn close_round(&mut self) {
        self.engine.reset();
        self.stopwatch.reset();
        self.solved = false;
    }

    /// Drops the current round, recording it as a loss when configured to. Returns whether a loss was recorded.
    pub fn abandon_round(&mut self) -> bool {
        let recorded = match self.engine.round() {
            Some(round) if !self.solved && self.config.record_losses => {
                let entry = HistoryEntry {
                    word: round.original_word().to_string(),
                    difficulty: round.difficulty(),
                    elapsed_secs: self.stopwatch.elapsed_secs(&self.clock),
                    attempts: round.attempts(),
                    stars: 0,
                    won: false,
                    timestamp_millis: self.clock.wall_millis(),
                };
                self.stats.record_result(entry);
                true
            }
            _ => false,
        };

        self.close_round();
        recorded
    }

    pub fn reset_stats(&mut self) -> &Statistics {
        self.stats.reset_all()
    }

    fn check_playable(&self) -> Result<()> {
        if self.solved {
            Err(GameError::AlreadySolved)
        } else {
            Ok(())
        }
    }
}
