//! Orthogonal adjacency on the 4x4 board.

use arrayvec::ArrayVec;

use crate::config::GameConfig;
use crate::state::CellIndex;

/// Neighbor list for one cell: between two (corners) and four (interior).
pub type Neighbors = ArrayVec<CellIndex, 4>;

/// Orthogonal step directions, in the order neighbors are enumerated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Enumeration order. Tie-breaking in move selection depends on it.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Returns the cell one step away from `from`, if it is on the board.
    pub fn step(self, from: CellIndex) -> Option<CellIndex> {
        let (row, col) = (from.row(), from.col());
        match self {
            Direction::Up if row > 0 => CellIndex::from_row_col(row - 1, col),
            Direction::Down if row + 1 < GameConfig::GRID_HEIGHT => {
                CellIndex::from_row_col(row + 1, col)
            }
            Direction::Left if col > 0 => CellIndex::from_row_col(row, col - 1),
            Direction::Right if col + 1 < GameConfig::GRID_WIDTH => {
                CellIndex::from_row_col(row, col + 1)
            }
            _ => None,
        }
    }
}

/// Resolves the in-bounds orthogonal neighbors of a cell.
pub struct NeighborResolver;

impl NeighborResolver {
    /// Returns the neighbors of `index` in up, down, left, right order.
    ///
    /// The order is fixed: the move selector keeps the first maximal candidate,
    /// so reordering here changes which of several equal moves is taken.
    pub fn neighbors(index: CellIndex) -> Neighbors {
        Direction::ALL
            .iter()
            .filter_map(|direction| direction.step(index))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn idx(i: u8) -> CellIndex {
        CellIndex::new(i).unwrap()
    }

    fn raw(neighbors: &Neighbors) -> Vec<u8> {
        neighbors.iter().map(|n| n.get()).collect()
    }

    #[test]
    fn corners_have_two_neighbors() {
        assert_eq!(raw(&NeighborResolver::neighbors(idx(0))), vec![4, 1]);
        assert_eq!(raw(&NeighborResolver::neighbors(idx(3))), vec![7, 2]);
        assert_eq!(raw(&NeighborResolver::neighbors(idx(12))), vec![8, 13]);
        assert_eq!(raw(&NeighborResolver::neighbors(idx(15))), vec![11, 14]);
    }

    #[test]
    fn edges_have_three_neighbors() {
        assert_eq!(raw(&NeighborResolver::neighbors(idx(1))), vec![5, 0, 2]);
        assert_eq!(raw(&NeighborResolver::neighbors(idx(7))), vec![3, 11, 6]);
    }

    #[test]
    fn interior_has_four_in_fixed_order() {
        assert_eq!(raw(&NeighborResolver::neighbors(idx(5))), vec![1, 9, 4, 6]);
        assert_eq!(
            raw(&NeighborResolver::neighbors(idx(10))),
            vec![6, 14, 9, 11]
        );
    }

    #[test]
    fn left_and_right_do_not_wrap_rows() {
        assert_eq!(Direction::Left.step(idx(4)), None);
        assert_eq!(Direction::Right.step(idx(3)), None);
        assert_eq!(Direction::Up.step(idx(2)), None);
        assert_eq!(Direction::Down.step(idx(13)), None);
    }
}
