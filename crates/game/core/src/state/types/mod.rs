mod agent;
mod cell;
mod common;
mod grid;

pub use agent::AgentState;
pub use cell::Cell;
pub use common::{CellIndex, OutOfBoard};
pub use grid::Grid;
