//! Errors raised while building a grid from external input.
//!
//! The rules themselves are total: [`CellIndex`](crate::CellIndex) keeps indices
//! in range and [`Grid`](crate::Grid) is a fixed-size array. The only fallible
//! surface is turning caller-supplied cells or text into a valid grid.

use crate::config::GameConfig;

/// Error returned when a layout does not describe a valid grid.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GridError {
    #[error("layout has {found} cells, expected {expected}", expected = GameConfig::CELL_COUNT)]
    WrongCellCount { found: usize },

    #[error("unknown cell symbol {symbol:?} at position {position}")]
    UnknownSymbol { symbol: String, position: usize },

    #[error("layout has no agent cell")]
    MissingAgent,

    #[error("layout has {count} agent cells, expected exactly one")]
    MultipleAgents { count: usize },
}

impl GridError {
    /// Returns a static identifier for this error variant.
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::WrongCellCount { .. } => "wrong_cell_count",
            Self::UnknownSymbol { .. } => "unknown_symbol",
            Self::MissingAgent => "missing_agent",
            Self::MultipleAgents { .. } => "multiple_agents",
        }
    }
}
