use serde::{Deserialize, Serialize};

/// Concealment status of a single tile.
///
/// `Hidden` and `Marked` toggle into each other; `Mine` and `Number` are
/// absorbing: once a tile reaches one of them its status never changes
/// again. `Number` carries the adjacent-mine count computed at the moment
/// the tile was revealed; it is never recomputed afterwards.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileStatus {
    Hidden,
    Marked,
    Mine,
    Number(u8),
}

impl TileStatus {
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Mine | Self::Number(_))
    }
}

impl Default for TileStatus {
    fn default() -> Self {
        Self::Hidden
    }
}

/// One cell of the board. The mine flag is fixed at construction; only the
/// status ever changes. A tile's position is its index in the board grid.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub(crate) mine: bool,
    pub(crate) status: TileStatus,
}

impl Tile {
    pub const fn has_mine(self) -> bool {
        self.mine
    }

    pub const fn status(self) -> TileStatus {
        self.status
    }

    /// Adjacent-mine count, present only once the tile has been revealed
    /// as a number.
    pub const fn adjacent_mines(self) -> Option<u8> {
        match self.status {
            TileStatus::Number(count) => Some(count),
            _ => None,
        }
    }
}
