//! Greedy decision loop.
//!
//! The [`GameLoop`] is the authoritative reducer for [`GameState`]. Each call
//! to [`GameLoop::step`] checks the win condition, scores every neighbor of the
//! agent, commits the best move and reports what happened. All board and
//! agent mutation flows through it.

mod neighbors;
mod outcome;
mod scoring;
mod termination;

pub use neighbors::{Direction, NeighborResolver, Neighbors};
pub use outcome::{GameStatus, GameSummary, StepObserver, StepOutcome, StepReport};
pub use scoring::{Candidate, Candidates, MoveScorer};
pub use termination::TerminationChecker;

use crate::config::GameConfig;
use crate::state::{AgentState, Cell, GameState, Grid};

/// Drives one game from its starting board to a terminal status.
///
/// Owns the board and agent exclusively for the duration of the game; callers
/// observe them through accessors and [`StepReport`]s.
#[derive(Clone, Debug)]
pub struct GameLoop {
    state: GameState,
    status: GameStatus,
    steps: u32,
    total_utility: i32,
}

impl GameLoop {
    /// Starts a game on `grid` with the agent on its marker and no charges.
    pub fn new(grid: Grid) -> Self {
        Self::from_state(GameState::new(grid))
    }

    /// Starts a game from an arbitrary state (e.g. an agent already holding
    /// charges).
    pub fn from_state(state: GameState) -> Self {
        Self {
            state,
            status: GameStatus::Running,
            steps: 0,
            total_utility: 0,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.state.grid
    }

    pub fn agent(&self) -> &AgentState {
        &self.state.agent
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Number of moves committed so far.
    pub fn steps(&self) -> u32 {
        self.steps
    }

    pub fn total_utility(&self) -> i32 {
        self.total_utility
    }

    /// Advances the game by one decision.
    ///
    /// Once the game is terminal this keeps returning
    /// [`StepOutcome::Finished`] without touching the state.
    pub fn step(&mut self) -> StepOutcome {
        if self.status.is_terminal() {
            return StepOutcome::Finished(self.status);
        }

        if TerminationChecker::all_consumed(&self.state.grid) {
            return StepOutcome::Finished(self.finish(GameStatus::Won));
        }

        let origin = self.state.agent.position;
        let resources = self.state.agent.resources;
        let shielded = self.state.agent.is_shielded();
        let neighbors = NeighborResolver::neighbors(origin);

        // All candidates are scored against the pre-move resource count.
        let candidates = MoveScorer::score_all(&self.state.grid, &neighbors, resources);
        let Some(best) = MoveScorer::select(&candidates) else {
            return StepOutcome::Finished(self.finish(GameStatus::Stuck));
        };

        let consumed = self.state.grid.get(best.target);
        tracing::debug!(
            from = %origin,
            to = %best.target,
            cell = %consumed,
            utility = best.utility,
            "selected move"
        );

        if consumed == Cell::Hazard && !shielded {
            self.total_utility += best.utility;
            return StepOutcome::Finished(
                self.finish(GameStatus::LostToHazard { cell: best.target }),
            );
        }

        let agent = &mut self.state.agent;
        match consumed {
            Cell::Bonus => agent.resources += 1,
            Cell::Hazard => agent.resources = agent.resources.saturating_sub(1),
            Cell::Food | Cell::Empty | Cell::Agent => {}
        }
        self.state.grid.relocate_agent(origin, best.target);
        agent.position = best.target;

        self.total_utility += best.utility;
        self.steps += 1;

        let report = StepReport {
            step: self.steps,
            from: origin,
            to: best.target,
            consumed,
            utility: best.utility,
            resources: agent.resources,
            total_utility: self.total_utility,
            candidates,
        };

        if self.steps >= GameConfig::MAX_STEPS {
            self.finish(GameStatus::StepLimitReached);
        }

        StepOutcome::Moved(report)
    }

    /// Steps until the game is terminal, handing every move to `observer`.
    pub fn run<O: StepObserver>(&mut self, mut observer: O) -> GameSummary {
        loop {
            match self.step() {
                StepOutcome::Moved(report) => observer.on_step(&report),
                StepOutcome::Finished(_) => break,
            }
        }
        self.summary()
    }

    /// Snapshot of the game as it stands.
    pub fn summary(&self) -> GameSummary {
        GameSummary {
            status: self.status,
            steps: self.steps,
            resources: self.state.agent.resources,
            total_utility: self.total_utility,
            grid: self.state.grid,
        }
    }

    fn finish(&mut self, status: GameStatus) -> GameStatus {
        tracing::info!(
            status = status.as_str(),
            steps = self.steps,
            total_utility = self.total_utility,
            "game finished"
        );
        self.status = status;
        status
    }
}
