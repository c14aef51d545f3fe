//! Values the engine reports back to its caller.

use super::scoring::Candidates;
use crate::state::{Cell, CellIndex, Grid};

/// Lifecycle of one game. Every variant except `Running` is terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    #[default]
    Running,
    /// No food or bonus left on the board.
    Won,
    /// The agent stepped onto a hazard at `cell` without a charge.
    LostToHazard { cell: CellIndex },
    /// The agent had no neighbor to move to.
    Stuck,
    /// The move budget ran out.
    StepLimitReached,
}

impl GameStatus {
    pub const fn is_terminal(&self) -> bool {
        !matches!(self, Self::Running)
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::Won => "won",
            Self::LostToHazard { .. } => "lost_to_hazard",
            Self::Stuck => "stuck",
            Self::StepLimitReached => "step_limit_reached",
        }
    }
}

/// Everything that happened during one completed move.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StepReport {
    /// 1-based move number.
    pub step: u32,
    pub from: CellIndex,
    pub to: CellIndex,
    /// What occupied `to` before the agent arrived.
    pub consumed: Cell,
    pub utility: i32,
    /// Charges held after the move's effects were applied.
    pub resources: u32,
    pub total_utility: i32,
    /// Every neighbor considered, in resolution order.
    pub candidates: Candidates,
}

/// Result of a single [`GameLoop::step`](super::GameLoop::step) call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// The agent moved. The game may have become terminal through the move
    /// budget; check [`GameLoop::status`](super::GameLoop::status).
    Moved(StepReport),
    /// The game is over and nothing moved on this call.
    Finished(GameStatus),
}

/// Final state of a completed game.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameSummary {
    pub status: GameStatus,
    pub steps: u32,
    pub resources: u32,
    pub total_utility: i32,
    pub grid: Grid,
}

/// Receives a report after every move made by [`GameLoop::run`](super::GameLoop::run).
pub trait StepObserver {
    fn on_step(&mut self, report: &StepReport);
}

impl<F> StepObserver for F
where
    F: FnMut(&StepReport),
{
    fn on_step(&mut self, report: &StepReport) {
        self(report)
    }
}
