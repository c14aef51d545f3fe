use rand::Rng;
use rand::seq::SliceRandom;

use super::rng::seeded_rng;
use crate::config::GameConfig;
use crate::state::{Cell, Grid};

/// Produces randomized starting boards.
///
/// Cell 0 always holds the agent; the remaining fifteen cells are a uniform
/// shuffle of the fixed item pool (3 hazards, 3 bonuses, 6 food, 3 empty).
#[derive(Clone, Copy, Debug, Default)]
pub struct GridFactory;

impl GridFactory {
    /// Items distributed over every cell except the agent's start.
    pub fn item_pool() -> [Cell; GameConfig::CELL_COUNT - 1] {
        let mut pool = [Cell::Empty; GameConfig::CELL_COUNT - 1];
        let counts = [
            (Cell::Hazard, GameConfig::HAZARD_COUNT),
            (Cell::Bonus, GameConfig::BONUS_COUNT),
            (Cell::Food, GameConfig::FOOD_COUNT),
            (Cell::Empty, GameConfig::EMPTY_COUNT),
        ];

        let mut slot = 0;
        for (cell, count) in counts {
            for _ in 0..count {
                pool[slot] = cell;
                slot += 1;
            }
        }
        pool
    }

    /// Generates a board using the caller's random source.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Grid {
        let mut pool = Self::item_pool();
        pool.shuffle(rng);

        let mut cells = [Cell::Empty; GameConfig::CELL_COUNT];
        cells[GameConfig::AGENT_START as usize] = Cell::Agent;
        cells[1..].copy_from_slice(&pool);

        tracing::debug!(cells = ?cells, "generated layout");

        Grid::from_generated(cells)
    }

    /// Generates the board determined by `seed`.
    pub fn generate_seeded(seed: u64) -> Grid {
        Self::generate(&mut seeded_rng(seed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::CellIndex;

    #[test]
    fn item_pool_matches_configured_counts() {
        let pool = GridFactory::item_pool();
        let count = |kind| pool.iter().filter(|&&cell| cell == kind).count();
        assert_eq!(count(Cell::Hazard), 3);
        assert_eq!(count(Cell::Bonus), 3);
        assert_eq!(count(Cell::Food), 6);
        assert_eq!(count(Cell::Empty), 3);
        assert_eq!(count(Cell::Agent), 0);
    }

    #[test]
    fn agent_starts_in_the_corner() {
        let grid = GridFactory::generate_seeded(7);
        assert_eq!(grid.get(CellIndex::ORIGIN), Cell::Agent);
        assert_eq!(grid.agent_index(), CellIndex::ORIGIN);
    }

    #[test]
    fn same_seed_same_layout() {
        assert_eq!(
            GridFactory::generate_seeded(42),
            GridFactory::generate_seeded(42)
        );
    }

    #[test]
    fn different_seeds_eventually_differ() {
        let first = GridFactory::generate_seeded(0);
        assert!((1..32).any(|seed| GridFactory::generate_seeded(seed) != first));
    }
}
