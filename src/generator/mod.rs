use crate::*;
pub use random::*;

mod random;

/// Strategy for producing the set of distinct mine coordinates a board is
/// built from.
pub trait MinePlacer {
    fn place(&self, config: GameConfig) -> Vec<Coord2>;
}
