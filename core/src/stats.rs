use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

pub const DEFAULT_HISTORY_LIMIT: usize = 20;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelStats {
    pub played: u32,
    pub won: u32,
    /// Fastest win in seconds.
    pub best_time: Option<u64>,
    pub total_stars: u32,
}

impl LevelStats {
    pub fn win_rate(&self) -> f32 {
        if self.played == 0 {
            0.0
        } else {
            self.won as f32 / self.played as f32
        }
    }

    pub fn average_stars(&self) -> f32 {
        if self.won == 0 {
            0.0
        } else {
            self.total_stars as f32 / self.won as f32
        }
    }

    fn record(&mut self, entry: &HistoryEntry) {
        self.played = self.played.saturating_add(1);
        if !entry.won {
            return;
        }

        self.won = self.won.saturating_add(1);
        self.total_stars = self.total_stars.saturating_add(entry.stars.into());
        if self.best_time.is_none_or(|best| entry.elapsed_secs < best) {
            self.best_time = Some(entry.elapsed_secs);
        }
    }
}

/// One completed round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub word: String,
    pub difficulty: Difficulty,
    pub elapsed_secs: u64,
    pub attempts: u32,
    pub stars: u8,
    pub won: bool,
    pub timestamp_millis: u64,
}

/// Cumulative statistics over every tier plus the most recent rounds, newest first.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Statistics {
    pub easy: LevelStats,
    pub medium: LevelStats,
    pub hard: LevelStats,
    pub history: Vec<HistoryEntry>,
    pub total_games: u32,
    pub total_wins: u32,
}

impl Statistics {
    pub fn level(&self, difficulty: Difficulty) -> &LevelStats {
        match difficulty {
            Difficulty::Easy => &self.easy,
            Difficulty::Medium => &self.medium,
            Difficulty::Hard => &self.hard,
        }
    }

    fn level_mut(&mut self, difficulty: Difficulty) -> &mut LevelStats {
        match difficulty {
            Difficulty::Easy => &mut self.easy,
            Difficulty::Medium => &mut self.medium,
            Difficulty::Hard => &mut self.hard,
        }
    }

    pub fn last_game(&self) -> Option<&HistoryEntry> {
        self.history.first()
    }

    /// Folds one result into the totals and prepends it to the history, keeping at most `history_limit`
    /// entries.
    pub fn record(&mut self, entry: HistoryEntry, history_limit: usize) {
        self.total_games = self.total_games.saturating_add(1);
        if entry.won {
            self.total_wins = self.total_wins.saturating_add(1);
        }
        self.level_mut(entry.difficulty).record(&entry);

        self.history.insert(0, entry);
        self.history.truncate(history_limit);
    }
}

/// Owns the statistics for a session and keeps the store in sync with every change.
///
/// Store failures never roll back the in-memory value, they are logged and leave the aggregator dirty until the
/// next successful write.
#[derive(Debug)]
pub struct StatsAggregator<S> {
    stats: Statistics,
    store: S,
    history_limit: usize,
    dirty: bool,
}

impl<S: StatsStore> StatsAggregator<S> {
    /// Loads the persisted statistics, falling back to empty ones when missing or unreadable.
    pub fn load(mut store: S, history_limit: usize) -> Self {
        let mut stats = match store.load() {
            Ok(Some(stats)) => stats,
            Ok(None) => Statistics::default(),
            Err(err) => {
                log::warn!("Could not load statistics, starting fresh: {}", err);
                Statistics::default()
            }
        };
        stats.history.truncate(history_limit);

        Self {
            stats,
            store,
            history_limit,
            dirty: false,
        }
    }

    pub fn statistics(&self) -> &Statistics {
        &self.stats
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Whether the last change could not be persisted.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn record_result(&mut self, entry: HistoryEntry) -> &Statistics {
        log::debug!(
            "Recording {} on {}: won={} stars={} in {}s",
            entry.word,
            entry.difficulty,
            entry.won,
            entry.stars,
            entry.elapsed_secs
        );
        self.stats.record(entry, self.history_limit);

        self.dirty = match self.store.save(&self.stats) {
            Ok(()) => false,
            Err(err) => {
                log::error!("Could not save statistics: {}", err);
                true
            }
        };
        &self.stats
    }

    /// Clears every counter and the history, and erases the persisted copy.
    pub fn reset_all(&mut self) -> &Statistics {
        self.stats = Statistics::default();

        self.dirty = match self.store.erase() {
            Ok(()) => false,
            Err(err) => {
                log::error!("Could not erase statistics: {}", err);
                true
            }
        };
        &self.stats
    }
}
