//! Command-line client for the pellet grid game.
//!
//! The binary is the composition root: it loads [`ClientConfig`] from the
//! environment, installs logging, builds the starting board and hands the
//! game to a [`Presenter`] one move at a time.

pub mod config;
pub mod logging;
pub mod presentation;

pub use config::{ClientConfig, LoggingConfig, OutputFormat};
pub use presentation::{JsonPresenter, Presenter, TextPresenter, narrate};

use anyhow::Result;
use pellet_core::{GameLoop, GameSummary, StepOutcome};

/// Plays `game` to completion, rendering the start, every move and the end.
pub fn play(game: &mut GameLoop, presenter: &mut dyn Presenter) -> Result<GameSummary> {
    presenter.initial(game.grid())?;

    loop {
        match game.step() {
            StepOutcome::Moved(report) => presenter.step(&report, game.grid())?,
            StepOutcome::Finished(_) => break,
        }
    }

    let summary = game.summary();
    presenter.finished(&summary)?;
    Ok(summary)
}
