//! Stdout renderers for game progress.
//!
//! The engine never reads anything back from here; presenters only consume
//! board snapshots, step reports and the final summary.

use std::io::Write;

use anyhow::Result;
use pellet_core::{GameStatus, GameSummary, Grid, StepReport};
use serde_json::json;

const SEPARATOR: &str = "--------------------------------------------------";

/// Output surface for one game.
pub trait Presenter {
    /// Called once with the starting board.
    fn initial(&mut self, grid: &Grid) -> Result<()>;

    /// Called after every committed move with the board as it now stands.
    fn step(&mut self, report: &StepReport, grid: &Grid) -> Result<()>;

    /// Called once when the game reaches a terminal status.
    fn finished(&mut self, summary: &GameSummary) -> Result<()>;
}

/// Human-readable boards and narration.
pub struct TextPresenter<W> {
    out: W,
}

impl<W: Write> TextPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn grid(&mut self, grid: &Grid) -> Result<()> {
        writeln!(self.out, "{grid}")?;
        writeln!(self.out)?;
        Ok(())
    }
}

impl<W: Write> Presenter for TextPresenter<W> {
    fn initial(&mut self, grid: &Grid) -> Result<()> {
        writeln!(self.out, "Initial grid:")?;
        self.grid(grid)
    }

    fn step(&mut self, report: &StepReport, grid: &Grid) -> Result<()> {
        writeln!(
            self.out,
            "After move {} (agent -> cell {}):",
            report.step, report.to
        )?;
        self.grid(grid)?;
        writeln!(self.out, "Power pellets: {}", report.resources)?;
        writeln!(self.out, "Utility from this move: {}", report.utility)?;
        writeln!(self.out, "Total utility so far: {}", report.total_utility)?;
        writeln!(self.out, "{SEPARATOR}")?;
        Ok(())
    }

    fn finished(&mut self, summary: &GameSummary) -> Result<()> {
        writeln!(self.out, "{}", narrate(summary.status))?;
        writeln!(self.out, "Final grid:")?;
        self.grid(&summary.grid)?;
        writeln!(self.out, "Final total utility: {}", summary.total_utility)?;
        self.out.flush()?;
        Ok(())
    }
}

/// One JSON object per line, tagged by `event`.
pub struct JsonPresenter<W> {
    out: W,
}

impl<W: Write> JsonPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, value: serde_json::Value) -> Result<()> {
        serde_json::to_writer(&mut self.out, &value)?;
        writeln!(self.out)?;
        Ok(())
    }
}

impl<W: Write> Presenter for JsonPresenter<W> {
    fn initial(&mut self, grid: &Grid) -> Result<()> {
        self.emit(json!({ "event": "initial", "grid": grid.to_string() }))
    }

    fn step(&mut self, report: &StepReport, grid: &Grid) -> Result<()> {
        self.emit(json!({ "event": "step", "report": report, "grid": grid.to_string() }))
    }

    fn finished(&mut self, summary: &GameSummary) -> Result<()> {
        self.emit(json!({
            "event": "finished",
            "status": summary.status.as_str(),
            "summary": summary,
        }))?;
        self.out.flush()?;
        Ok(())
    }
}

/// Sentence describing how a game ended.
pub fn narrate(status: GameStatus) -> String {
    match status {
        GameStatus::Running => "The game is still running.".to_string(),
        GameStatus::Won => "All pellets have been consumed! The agent wins!".to_string(),
        GameStatus::LostToHazard { cell } => {
            format!("The agent moved onto a hazard at cell {cell} with no power pellet! Game over.")
        }
        GameStatus::Stuck => "The agent has no moves left. Game over.".to_string(),
        GameStatus::StepLimitReached => "Maximum step limit reached. Ending game.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pellet_core::{CellIndex, GameLoop};

    fn play_text(layout: &str) -> String {
        let mut game = GameLoop::new(layout.parse().unwrap());
        let mut presenter = TextPresenter::new(Vec::new());
        crate::play(&mut game, &mut presenter).unwrap();
        String::from_utf8(presenter.into_inner()).unwrap()
    }

    #[test]
    fn text_output_walks_through_a_winning_game() {
        let output = play_text("PF-- ---- ---- ----");
        let expected = "\
Initial grid:
P F - -
- - - -
- - - -
- - - -

After move 1 (agent -> cell 1):
- P - -
- - - -
- - - -
- - - -

Power pellets: 0
Utility from this move: 5
Total utility so far: 5
--------------------------------------------------
All pellets have been consumed! The agent wins!
Final grid:
- P - -
- - - -
- - - -
- - - -

Final total utility: 5
";
        assert_eq!(output, expected);
    }

    #[test]
    fn text_output_names_the_fatal_cell() {
        let output = play_text("PG-- G--- ---- ---F");
        assert!(output.contains("hazard at cell 4 with no power pellet"));
        assert!(output.ends_with("Final total utility: -9999\n"));
        assert!(!output.contains("After move"));
    }

    #[test]
    fn json_output_is_one_object_per_line() {
        let mut game = GameLoop::new("PFF- ---- ---- ----".parse().unwrap());
        let mut presenter = JsonPresenter::new(Vec::new());
        crate::play(&mut game, &mut presenter).unwrap();
        let output = String::from_utf8(presenter.into_inner()).unwrap();

        let events: Vec<serde_json::Value> = output
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        let kinds: Vec<&str> = events.iter().map(|e| e["event"].as_str().unwrap()).collect();
        assert_eq!(kinds, vec!["initial", "step", "step", "finished"]);
        assert_eq!(events[2]["report"]["total_utility"], 10);
        assert_eq!(events[3]["status"], "won");
    }

    #[test]
    fn narration_covers_every_terminal_status() {
        assert!(narrate(GameStatus::Stuck).contains("no moves left"));
        assert!(narrate(GameStatus::StepLimitReached).contains("step limit"));
        let lost = GameStatus::LostToHazard {
            cell: CellIndex::new(9).unwrap(),
        };
        assert!(narrate(lost).contains("cell 9"));
    }
}
