//! Pellet grid client binary.
//!
//! Runs a single game and prints it to stdout.
//!
//! # Examples
//!
//! ```bash
//! # Random board
//! cargo run -p pellet-client
//!
//! # Reproducible board with per-candidate logs on stderr
//! PELLET_SEED=7 RUST_LOG=pellet_core=debug cargo run -p pellet-client
//!
//! # Explicit board, machine-readable output
//! PELLET_LAYOUT="PFG- C--- F--F ---G" PELLET_OUTPUT=json cargo run -p pellet-client
//! ```

use anyhow::Result;
use pellet_client::{ClientConfig, JsonPresenter, OutputFormat, Presenter, TextPresenter, logging};
use pellet_core::GameLoop;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = ClientConfig::from_env();
    logging::setup_logging(&config.logging)?;

    tracing::info!(
        seed = ?config.seed,
        layout = ?config.layout,
        output = %config.output,
        "starting pellet client"
    );

    let grid = config.initial_grid()?;
    let mut game = GameLoop::new(grid);

    let stdout = std::io::stdout().lock();
    let mut presenter: Box<dyn Presenter> = match config.output {
        OutputFormat::Text => Box::new(TextPresenter::new(stdout)),
        OutputFormat::Json => Box::new(JsonPresenter::new(stdout)),
    };

    let summary = pellet_client::play(&mut game, presenter.as_mut())?;

    tracing::info!(
        status = summary.status.as_str(),
        steps = summary.steps,
        total_utility = summary.total_utility,
        "game complete"
    );
    Ok(())
}
