use serde::{Deserialize, Serialize};

use crate::*;

/// Stable identity of a tile, unique within the engine that created it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TileId(u32);

impl TileId {
    pub const fn get(self) -> u32 {
        self.0
    }
}

/// Result of the last check for a tile's position.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileStatus {
    Unset,
    Correct,
    Incorrect,
}

impl Default for TileStatus {
    fn default() -> Self {
        Self::Unset
    }
}

/// Decorative palette, has no effect on scoring.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileColor {
    Coral,
    Teal,
    Mustard,
    Sky,
    Mint,
    Pink,
    Lavender,
    Rose,
}

impl TileColor {
    pub const PALETTE: [TileColor; 8] = [
        TileColor::Coral,
        TileColor::Teal,
        TileColor::Mustard,
        TileColor::Sky,
        TileColor::Mint,
        TileColor::Pink,
        TileColor::Lavender,
        TileColor::Rose,
    ];

    pub const fn hex(self) -> &'static str {
        match self {
            Self::Coral => "#ff6b6b",
            Self::Teal => "#4ecdc4",
            Self::Mustard => "#feca57",
            Self::Sky => "#48dbfb",
            Self::Mint => "#1dd1a1",
            Self::Pink => "#ff9ff3",
            Self::Lavender => "#a29bfe",
            Self::Rose => "#fd79a8",
        }
    }

    pub fn random(rng: &mut impl RandomSource) -> Self {
        Self::PALETTE[rng.below(Self::PALETTE.len())]
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    id: TileId,
    letter: char,
    color: TileColor,
    status: TileStatus,
}

impl Tile {
    pub(crate) const fn new(id: u32, letter: char, color: TileColor) -> Self {
        Self {
            id: TileId(id),
            letter,
            color,
            status: TileStatus::Unset,
        }
    }

    pub const fn id(&self) -> TileId {
        self.id
    }

    pub const fn letter(&self) -> char {
        self.letter
    }

    pub const fn color(&self) -> TileColor {
        self.color
    }

    pub const fn status(&self) -> TileStatus {
        self.status
    }

    pub(crate) fn set_status(&mut self, status: TileStatus) {
        self.status = status;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::ScriptedRandom;

    #[test]
    fn random_color_indexes_palette() {
        let mut rng = ScriptedRandom::new(&[0, 3, 15]);

        assert_eq!(TileColor::random(&mut rng), TileColor::Coral);
        assert_eq!(TileColor::random(&mut rng), TileColor::Sky);
        assert_eq!(TileColor::random(&mut rng), TileColor::Rose);
    }

    #[test]
    fn new_tile_starts_unset() {
        let tile = Tile::new(4, 'Q', TileColor::Mint);

        assert_eq!(tile.id().get(), 4);
        assert_eq!(tile.letter(), 'Q');
        assert_eq!(tile.status(), TileStatus::default());
        assert_eq!(tile.color().hex(), "#1dd1a1");
    }
}
