//! Deterministic rules for the pellet grid game.
//!
//! `pellet-core` defines the board, the agent and the greedy one-step policy
//! that moves the agent around a 4x4 grid collecting food and bonuses while
//! avoiding hazards. All state mutation flows through [`engine::GameLoop`];
//! randomness is confined to [`env::GridFactory`], so a game is fully
//! determined by its starting board.
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod state;

pub use config::GameConfig;
pub use engine::{
    Candidate, Candidates, Direction, GameLoop, GameStatus, GameSummary, MoveScorer,
    NeighborResolver, Neighbors, StepObserver, StepOutcome, StepReport, TerminationChecker,
};
pub use env::{GridFactory, LayoutRng, seeded_rng};
pub use error::GridError;
pub use state::{AgentState, Cell, CellIndex, GameState, Grid, OutOfBoard};
