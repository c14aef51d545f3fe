use std::fmt;
use std::str::FromStr;

use super::{Cell, CellIndex};
use crate::config::GameConfig;
use crate::error::GridError;

/// The 4x4 board in row-major order.
///
/// A `Grid` obtained from [`Grid::from_cells`], [`str::parse`] or the layout
/// generator holds exactly one [`Cell::Agent`]. Only the engine moves the
/// agent afterwards, which keeps that invariant between steps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawGrid"))]
pub struct Grid {
    cells: [Cell; GameConfig::CELL_COUNT],
}

/// Unvalidated wire form of [`Grid`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawGrid {
    cells: [Cell; GameConfig::CELL_COUNT],
}

#[cfg(feature = "serde")]
impl TryFrom<RawGrid> for Grid {
    type Error = GridError;

    fn try_from(raw: RawGrid) -> Result<Self, Self::Error> {
        Self::from_cells(raw.cells)
    }
}

impl TryFrom<[Cell; GameConfig::CELL_COUNT]> for Grid {
    type Error = GridError;

    fn try_from(cells: [Cell; GameConfig::CELL_COUNT]) -> Result<Self, Self::Error> {
        Self::from_cells(cells)
    }
}

impl Grid {
    /// Validates a full board and wraps it.
    pub fn from_cells(cells: [Cell; GameConfig::CELL_COUNT]) -> Result<Self, GridError> {
        let agents = cells.iter().filter(|&&cell| cell == Cell::Agent).count();
        match agents {
            0 => Err(GridError::MissingAgent),
            1 => Ok(Self { cells }),
            count => Err(GridError::MultipleAgents { count }),
        }
    }

    /// Wraps a board built by the layout generator, which places exactly one
    /// agent by construction.
    pub(crate) const fn from_generated(cells: [Cell; GameConfig::CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Validates a board given as a slice of any length.
    pub fn from_slice(cells: &[Cell]) -> Result<Self, GridError> {
        let cells: [Cell; GameConfig::CELL_COUNT] = cells
            .try_into()
            .map_err(|_| GridError::WrongCellCount { found: cells.len() })?;
        Self::from_cells(cells)
    }

    #[inline]
    pub fn get(&self, index: CellIndex) -> Cell {
        self.cells[index.as_usize()]
    }

    #[inline]
    pub(crate) fn set(&mut self, index: CellIndex, cell: Cell) {
        self.cells[index.as_usize()] = cell;
    }

    pub fn cells(&self) -> &[Cell; GameConfig::CELL_COUNT] {
        &self.cells
    }

    /// Iterates the board one row at a time, top row first.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(GameConfig::GRID_WIDTH as usize)
    }

    /// Location of the agent marker.
    pub fn agent_index(&self) -> CellIndex {
        CellIndex::all()
            .find(|&index| self.get(index) == Cell::Agent)
            .unwrap_or(CellIndex::ORIGIN)
    }

    /// Number of cells holding `kind`.
    pub fn count(&self, kind: Cell) -> usize {
        self.cells.iter().filter(|&&cell| cell == kind).count()
    }

    /// Number of Food and Bonus cells left on the board.
    pub fn remaining_consumables(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_consumable()).count()
    }

    /// Moves the agent marker, leaving `from` empty.
    pub(crate) fn relocate_agent(&mut self, from: CellIndex, to: CellIndex) {
        self.set(from, Cell::Empty);
        self.set(to, Cell::Agent);
    }
}

impl FromStr for Grid {
    type Err = GridError;

    /// Parses a layout such as `"P F - - / G C F - / ..."`.
    ///
    /// Whitespace and `/` separators are ignored, so the sixteen symbols may
    /// also be written contiguously (`"PF--GCF-..."`).
    fn from_str(layout: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = layout
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/')
            .collect();

        let mut cells = Vec::with_capacity(symbols.len());
        for (position, symbol) in symbols.iter().enumerate() {
            let mut buf = [0u8; 4];
            let text = symbol.encode_utf8(&mut buf);
            let cell = Cell::from_str(text).map_err(|_| GridError::UnknownSymbol {
                symbol: text.to_string(),
                position,
            })?;
            cells.push(cell);
        }

        Self::from_slice(&cells)
    }
}

impl fmt::Display for Grid {
    /// Renders four space-separated rows, one per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_index, row) in self.rows().enumerate() {
            if row_index > 0 {
                writeln!(f)?;
            }
            for (col, cell) in row.iter().enumerate() {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{cell}")?;
            }
        }
        Ok(())
    }
}
