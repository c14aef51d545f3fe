//! Authoritative board and agent representation.
//!
//! This module owns the data structures that describe the board cells and the
//! agent. Callers query this state freely but mutate it exclusively through
//! the engine.
pub mod types;

pub use types::{AgentState, Cell, CellIndex, Grid, OutOfBoard};

/// Canonical snapshot of one game: the board plus the agent standing on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    pub grid: Grid,
    pub agent: AgentState,
}

impl GameState {
    /// Starts a game on `grid` with the agent on its marker and no resources.
    pub fn new(grid: Grid) -> Self {
        let agent = AgentState::new(grid.agent_index());
        Self { grid, agent }
    }

    /// Starts a game with the agent already holding `resources` charges.
    pub fn with_resources(grid: Grid, resources: u32) -> Self {
        let agent = AgentState::new(grid.agent_index()).with_resources(resources);
        Self { grid, agent }
    }
}
