use std::fmt;

use crate::config::GameConfig;

/// Row-major index of a cell on the 4x4 board.
///
/// Always in `0..GameConfig::CELL_COUNT`; constructors reject anything else, so
/// code holding a `CellIndex` never needs a bounds check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct CellIndex(u8);

impl CellIndex {
    /// Top-left cell, where generated games place the agent.
    pub const ORIGIN: Self = Self(GameConfig::AGENT_START);

    /// Returns the index if it lies on the board.
    #[inline]
    pub const fn new(index: u8) -> Option<Self> {
        if (index as usize) < GameConfig::CELL_COUNT {
            Some(Self(index))
        } else {
            None
        }
    }

    /// Builds an index from board coordinates.
    #[inline]
    pub const fn from_row_col(row: u8, col: u8) -> Option<Self> {
        if row < GameConfig::GRID_HEIGHT && col < GameConfig::GRID_WIDTH {
            Some(Self(row * GameConfig::GRID_WIDTH + col))
        } else {
            None
        }
    }

    /// Iterates every cell in row-major order.
    pub fn all() -> impl Iterator<Item = CellIndex> {
        (0..GameConfig::CELL_COUNT as u8).map(Self)
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / GameConfig::GRID_WIDTH
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.0 % GameConfig::GRID_WIDTH
    }
}

impl Default for CellIndex {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl fmt::Display for CellIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for CellIndex {
    type Error = OutOfBoard;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(OutOfBoard(value))
    }
}

impl From<CellIndex> for u8 {
    fn from(index: CellIndex) -> Self {
        index.0
    }
}

/// Raw index that does not name a cell on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("cell index {0} is outside the board")]
pub struct OutOfBoard(pub u8);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_indices_past_the_board() {
        assert!(CellIndex::new(15).is_some());
        assert!(CellIndex::new(16).is_none());
        assert_eq!(CellIndex::try_from(200), Err(OutOfBoard(200)));
    }

    #[test]
    fn row_and_col_are_row_major() {
        let index = CellIndex::new(6).unwrap();
        assert_eq!(index.row(), 1);
        assert_eq!(index.col(), 2);
        assert_eq!(CellIndex::from_row_col(1, 2), Some(index));
        assert_eq!(CellIndex::from_row_col(4, 0), None);
    }

    #[test]
    fn all_covers_the_board_in_order() {
        let indices: Vec<u8> = CellIndex::all().map(CellIndex::get).collect();
        assert_eq!(indices, (0..16).collect::<Vec<_>>());
    }
}
