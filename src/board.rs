use ndarray::Array2;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::ops::Index;

use crate::*;

/// Minesweeper board: a rectangular grid of tiles plus the mutation rules
/// that take them through their status state machine.
///
/// All mutation happens in place behind `&mut self`; callers that want a
/// snapshot of the previous state clone the board first. Neither `mark` nor
/// `reveal` consults the win/lose predicates, that is left to the caller's
/// game loop.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    tiles: Array2<Tile>,
}

impl Board {
    /// Builds a board of all-hidden tiles with mines at exactly the given
    /// coordinates.
    ///
    /// Fails with [`GameError::InvalidCoords`] when a mine coordinate falls
    /// outside `size`, and [`GameError::DuplicateMine`] when the same
    /// coordinate is supplied twice.
    pub fn new(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let mut tiles: Array2<Tile> = Array2::default(size.to_nd_index());

        for &coords in mine_coords {
            if coords.0 >= size.0 || coords.1 >= size.1 {
                return Err(GameError::InvalidCoords);
            }
            let tile = &mut tiles[coords.to_nd_index()];
            if tile.mine {
                return Err(GameError::DuplicateMine);
            }
            tile.mine = true;
        }

        Ok(Self { tiles })
    }

    /// Square-board convenience over [`Board::new`].
    pub fn square(size: Coord, mine_coords: &[Coord2]) -> Result<Self> {
        Self::new((size, size), mine_coords)
    }

    /// Builds a board with a randomly placed minefield.
    pub fn random(config: GameConfig, seed: u64) -> Self {
        let mine_coords = RandomMinePlacer::new(seed).place(config);
        Self::new(config.size, &mine_coords).expect("placer yields distinct in-bounds coords")
    }

    pub fn size(&self) -> Coord2 {
        self.tiles.bounds()
    }

    pub fn total_tiles(&self) -> CellCount {
        self.tiles.len().try_into().unwrap()
    }

    pub fn mine_count(&self) -> CellCount {
        self.count_tiles(|tile| tile.mine)
    }

    /// Number of tiles currently carrying a mark.
    pub fn marked_count(&self) -> CellCount {
        self.count_tiles(|tile| tile.status == TileStatus::Marked)
    }

    /// Toggles the mark on the tile at `coords`.
    ///
    /// Hidden tiles become marked, marked tiles become hidden again, and
    /// tiles in a terminal status are left alone.
    pub fn mark(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        use MarkOutcome::*;
        use TileStatus::*;

        let coords = self.validate_coords(coords)?;

        let tile = &mut self.tiles[coords.to_nd_index()];
        Ok(match tile.status {
            Hidden => {
                tile.status = Marked;
                Changed
            }
            Marked => {
                tile.status = Hidden;
                Changed
            }
            Mine | Number(_) => NoChange,
        })
    }

    /// Reveals the tile at `coords`.
    ///
    /// Revealing a non-hidden tile changes nothing. Revealing a mine leaves
    /// it exposed as the losing move and touches no other tile. Revealing a
    /// safe tile records its adjacent-mine count; when that count is zero
    /// the contiguous zero-count region and its numbered rim are opened as
    /// well, skipping marked tiles.
    ///
    /// The cascade is an explicit worklist rather than recursion, so deep
    /// zero regions on large boards cannot exhaust the stack. It terminates
    /// because a tile leaves `Hidden` before its neighbors are enqueued and
    /// non-hidden tiles are dropped on pop.
    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.validate_coords(coords)?;

        let tile = self.tiles[coords.to_nd_index()];
        if tile.status != TileStatus::Hidden {
            return Ok(RevealOutcome::NoChange);
        }

        if tile.mine {
            self.tiles[coords.to_nd_index()].status = TileStatus::Mine;
            return Ok(RevealOutcome::HitMine);
        }

        let mut worklist = VecDeque::from([coords]);
        while let Some(visit) = worklist.pop_front() {
            // a tile can be enqueued by two of its neighbors
            if self.tiles[visit.to_nd_index()].status != TileStatus::Hidden {
                continue;
            }

            let adjacent_mines = self.adjacent_mine_count(visit);
            self.tiles[visit.to_nd_index()].status = TileStatus::Number(adjacent_mines);

            if adjacent_mines == 0 {
                worklist.extend(
                    self.tiles
                        .iter_adjacent(visit)
                        .filter(|&pos| self.tiles[pos.to_nd_index()].status == TileStatus::Hidden),
                );
            }
        }

        Ok(RevealOutcome::Revealed)
    }

    /// True when every tile is either revealed as a number or marked.
    ///
    /// Deliberately checks status only: a mark on a safe tile still counts
    /// toward the win, matching classic play where the board is cleared
    /// once nothing hidden remains.
    pub fn is_won(&self) -> bool {
        self.tiles
            .iter()
            .all(|tile| matches!(tile.status, TileStatus::Number(_) | TileStatus::Marked))
    }

    /// True when a mine has been exposed by a reveal.
    pub fn is_lost(&self) -> bool {
        self.tiles
            .iter()
            .any(|tile| tile.status == TileStatus::Mine)
    }

    fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        self.tiles
            .iter_adjacent(coords)
            .filter(|&pos| self.tiles[pos.to_nd_index()].mine)
            .count()
            .try_into()
            .unwrap()
    }

    fn count_tiles(&self, pred: impl Fn(&Tile) -> bool) -> CellCount {
        self.tiles
            .iter()
            .filter(|tile| pred(tile))
            .count()
            .try_into()
            .unwrap()
    }
}

impl Index<Coord2> for Board {
    type Output = Tile;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.tiles[coords.to_nd_index()]
    }
}
