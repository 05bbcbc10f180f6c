use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundState {
    Idle,
    Active,
}

impl RoundState {
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }
}

impl Default for RoundState {
    fn default() -> Self {
        Self::Idle
    }
}

/// Live state of a round. The tiles are always a permutation of the letters of `original_word`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Round {
    original_word: String,
    tiles: Vec<Tile>,
    attempts: u32,
    hint_visible: bool,
    last_checked: Option<String>,
    difficulty: Difficulty,
}

impl Round {
    pub fn original_word(&self) -> &str {
        &self.original_word
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn hint_visible(&self) -> bool {
        self.hint_visible
    }

    /// The word to show as a hint, only while the hint is visible.
    pub fn hint(&self) -> Option<&str> {
        self.hint_visible.then_some(self.original_word.as_str())
    }

    pub fn last_checked(&self) -> Option<&str> {
        self.last_checked.as_deref()
    }

    /// Current left to right letters of the tiles.
    pub fn arrangement(&self) -> String {
        self.tiles.iter().map(Tile::letter).collect()
    }

    pub fn is_solved(&self) -> bool {
        self.tiles
            .iter()
            .map(Tile::letter)
            .eq(self.original_word.chars())
    }

    fn clear_check(&mut self) {
        for tile in &mut self.tiles {
            tile.set_status(TileStatus::Unset);
        }
        self.last_checked = None;
    }
}

/// Round state machine: `Idle` until `start`, `Active` until `reset` or the next `start`.
///
/// A solved round stays `Active` so the caller can present the result before closing it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RoundEngine {
    shuffler: Shuffler,
    round: Option<Round>,
    next_tile_id: u32,
}

impl RoundEngine {
    pub fn new(shuffler: Shuffler) -> Self {
        Self {
            shuffler,
            round: None,
            next_tile_id: 0,
        }
    }

    pub fn state(&self) -> RoundState {
        if self.round.is_some() {
            RoundState::Active
        } else {
            RoundState::Idle
        }
    }

    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    /// Starts a new round, replacing any round in progress. On failure the previous state is kept.
    pub fn start(
        &mut self,
        word: &str,
        difficulty: Difficulty,
        rng: &mut impl RandomSource,
    ) -> Result<&Round> {
        let original_word = difficulty.validate(word)?;

        let letters: Vec<char> = original_word.chars().collect();
        let letters = self.shuffler.shuffle(&letters, rng);

        let mut tiles = Vec::with_capacity(letters.len());
        for letter in letters {
            let color = TileColor::random(rng);
            tiles.push(Tile::new(self.next_tile_id, letter, color));
            self.next_tile_id = self.next_tile_id.wrapping_add(1);
        }

        log::debug!(
            "Round started: {} letters on {}, hint mode {:?}",
            tiles.len(),
            difficulty,
            difficulty.hint_mode()
        );

        let round: &Round = self.round.insert(Round {
            original_word,
            tiles,
            attempts: 0,
            hint_visible: difficulty.hint_mode().initially_visible(),
            last_checked: None,
            difficulty,
        });
        Ok(round)
    }

    /// Exchanges two tiles and clears the markers of the last check.
    pub fn swap(&mut self, i: usize, j: usize) -> Result<()> {
        let round = self.active_round_mut()?;

        let len = round.tiles.len();
        for index in [i, j] {
            if index >= len {
                return Err(GameError::IndexOutOfRange { index, len });
            }
        }

        round.tiles.swap(i, j);
        round.clear_check();
        log::trace!("Swapped tiles {} and {}", i, j);
        Ok(())
    }

    /// Reorders every tile, keeping each tile's identity and color.
    pub fn shuffle_all(&mut self, rng: &mut impl RandomSource) -> Result<()> {
        let shuffler = self.shuffler;
        let round = self.active_round_mut()?;

        round.tiles = shuffler.shuffle_by(&round.tiles, rng, |a, b| a.letter() == b.letter());
        round.clear_check();
        log::trace!("Shuffled tiles into {}", round.arrangement());
        Ok(())
    }

    /// Checks the current arrangement, marking every tile correct or incorrect.
    ///
    /// Checking the same arrangement twice without a swap or shuffle in between counts once.
    pub fn check(&mut self) -> Result<CheckOutcome> {
        let round = self.active_round_mut()?;

        let arrangement = round.arrangement();
        let correct = arrangement == round.original_word;

        if round.last_checked.as_deref() == Some(arrangement.as_str()) {
            return Ok(CheckOutcome::Unchanged { correct });
        }

        round.attempts = round.attempts.saturating_add(1);
        for (tile, expected) in round.tiles.iter_mut().zip(round.original_word.chars()) {
            tile.set_status(if tile.letter() == expected {
                TileStatus::Correct
            } else {
                TileStatus::Incorrect
            });
        }
        round.last_checked = Some(arrangement);

        log::debug!(
            "Check #{}: {}",
            round.attempts,
            if correct { "correct" } else { "incorrect" }
        );

        Ok(if correct {
            CheckOutcome::Correct
        } else {
            CheckOutcome::Incorrect
        })
    }

    /// Flips hint visibility, returning the new visibility. Only tiers with a toggleable hint allow it.
    pub fn toggle_hint(&mut self) -> Result<bool> {
        let round = self.active_round_mut()?;

        if !round.difficulty.hint_mode().is_toggleable() {
            return Err(GameError::HintLocked);
        }

        round.hint_visible = !round.hint_visible;
        Ok(round.hint_visible)
    }

    pub fn reset(&mut self) {
        if self.round.take().is_some() {
            log::debug!("Round reset");
        }
    }

    fn active_round_mut(&mut self) -> Result<&mut Round> {
        self.round.as_mut().ok_or(GameError::NotActive)
    }
}
