use super::*;

/// Purely random placement: every layout with the requested mine count is
/// equally likely. Seeded, so a given seed and config always reproduce the
/// same minefield.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RandomMinePlacer {
    seed: u64,
}

impl RandomMinePlacer {
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MinePlacer for RandomMinePlacer {
    fn place(&self, config: GameConfig) -> Vec<Coord2> {
        use rand::prelude::*;

        let total = config.total_tiles();
        let mines = if config.mines > total {
            log::warn!(
                "Requested {} mines but the board only fits {}, clamping",
                config.mines,
                total
            );
            total
        } else {
            config.mines
        };

        // partial Fisher-Yates over the linearized grid, distinct by
        // construction
        let mut slots: Vec<CellCount> = (0..total).collect();
        let mut rng = SmallRng::seed_from_u64(self.seed);

        (0..mines as usize)
            .map(|i| {
                let pick = rng.random_range(i..slots.len());
                slots.swap(i, pick);
                let slot = slots[i];
                let width = config.size.1 as CellCount;
                ((slot / width) as Coord, (slot % width) as Coord)
            })
            .collect()
    }
}
