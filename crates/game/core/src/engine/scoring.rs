//! One-step utility scoring and greedy move selection.
//!
//! Every neighbor of the agent is scored with the resource count held *before*
//! the move. Resource changes from the chosen move are applied afterwards by
//! the engine, so collecting a bonus never raises the utility of the move that
//! collected it.

use arrayvec::ArrayVec;

use super::neighbors::Neighbors;
use crate::config::GameConfig;
use crate::state::{Cell, CellIndex, Grid};

/// Scored neighbors of one decision step, in neighbor order.
pub type Candidates = ArrayVec<Candidate, 4>;

/// A scored move target. Lives only for the decision step that produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Candidate {
    pub target: CellIndex,
    pub utility: i32,
}

/// Assigns utilities to candidate moves.
pub struct MoveScorer;

impl MoveScorer {
    /// Utility of moving onto `target` while holding `resources` charges.
    ///
    /// | target | utility |
    /// |---|---|
    /// | bonus | +10 |
    /// | food | +5 |
    /// | hazard, no charges | −9999 |
    /// | hazard, charged | +1 |
    /// | empty / agent | 0 |
    pub fn score(grid: &Grid, target: CellIndex, resources: u32) -> i32 {
        match grid.get(target) {
            Cell::Bonus => GameConfig::BONUS_UTILITY,
            Cell::Food => GameConfig::FOOD_UTILITY,
            Cell::Hazard if resources == 0 => GameConfig::FATAL_HAZARD_UTILITY,
            Cell::Hazard => GameConfig::SHIELDED_HAZARD_UTILITY,
            Cell::Empty | Cell::Agent => GameConfig::NEUTRAL_UTILITY,
        }
    }

    /// Scores every neighbor in order, all with the same resource count.
    pub fn score_all(grid: &Grid, neighbors: &Neighbors, resources: u32) -> Candidates {
        neighbors
            .iter()
            .map(|&target| {
                let utility = Self::score(grid, target, resources);
                tracing::debug!(target = %target, utility, "scored candidate");
                Candidate { target, utility }
            })
            .collect()
    }

    /// Picks the candidate with the highest utility.
    ///
    /// Linear scan keeping a candidate only when it is strictly better than the
    /// current best, so the first of several equal maxima wins. Returns `None`
    /// for an empty slice.
    pub fn select(candidates: &[Candidate]) -> Option<Candidate> {
        let mut best: Option<Candidate> = None;
        for &candidate in candidates {
            match best {
                Some(current) if candidate.utility <= current.utility => {}
                _ => best = Some(candidate),
            }
        }
        best
    }
}
