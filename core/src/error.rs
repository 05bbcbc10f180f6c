use thiserror::Error;

use crate::LengthRange;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Word length must be {0} letters")]
    InvalidLength(LengthRange),
    #[error("No round in progress")]
    NotActive,
    #[error("Round already solved, no new moves are accepted")]
    AlreadySolved,
    #[error("Hint cannot be toggled at this difficulty")]
    HintLocked,
    #[error("Tile index {index} out of range for {len} tiles")]
    IndexOutOfRange { index: usize, len: usize },
}

impl GameError {
    /// Operations rejected because of the round's state rather than their arguments.
    pub const fn is_not_allowed(self) -> bool {
        matches!(self, Self::NotActive | Self::AlreadySolved | Self::HintLocked)
    }
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
#[error("Unknown difficulty, expected easy, medium or hard")]
pub struct ParseDifficultyError;

pub type Result<T> = core::result::Result<T, GameError>;
