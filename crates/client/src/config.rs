//! Client configuration loaded from the process environment.
use std::env;

use anyhow::{Context, Result};
use pellet_core::{Grid, GridFactory};

/// How game progress is written to stdout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum OutputFormat {
    /// Human-readable boards and narration.
    #[default]
    Text,
    /// One JSON object per line (initial board, each move, final summary).
    Json,
}

/// Configuration required to set up a single game run.
#[derive(Clone, Debug, Default)]
pub struct ClientConfig {
    /// Seed for a reproducible random layout.
    pub seed: Option<u64>,
    /// Explicit starting board; takes precedence over `seed`.
    pub layout: Option<String>,
    pub output: OutputFormat,
    pub logging: LoggingConfig,
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `PELLET_SEED` - Seed for the random layout (default: OS entropy)
    /// - `PELLET_LAYOUT` - Explicit 16-symbol starting board (default: random)
    /// - `PELLET_OUTPUT` - `text` or `json` (default: text)
    /// - `PELLET_LOG_ANSI` - Colorized log output (default: true)
    /// - `RUST_LOG` - Log filter directives (default: warn)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        config.seed = read_env::<u64>("PELLET_SEED");

        config.layout = env::var("PELLET_LAYOUT")
            .ok()
            .filter(|layout| !layout.trim().is_empty());

        if let Some(output) = read_env::<OutputFormat>("PELLET_OUTPUT") {
            config.output = output;
        }

        if let Some(ansi) = read_env::<bool>("PELLET_LOG_ANSI") {
            config.logging.ansi = ansi;
        }

        config
    }

    /// Builds the starting board this configuration describes.
    pub fn initial_grid(&self) -> Result<Grid> {
        if let Some(layout) = &self.layout {
            return layout
                .parse::<Grid>()
                .with_context(|| format!("invalid PELLET_LAYOUT {layout:?}"));
        }

        Ok(match self.seed {
            Some(seed) => {
                tracing::info!(seed, "generating seeded layout");
                GridFactory::generate_seeded(seed)
            }
            None => GridFactory::generate(&mut rand::rng()),
        })
    }
}

/// Log output configuration.
#[derive(Clone, Debug)]
pub struct LoggingConfig {
    /// Filter used when `RUST_LOG` is unset.
    pub default_directive: String,
    pub ansi: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            default_directive: "warn".to_string(),
            ansi: true,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pellet_core::{Cell, CellIndex};

    #[test]
    fn output_format_parses_case_insensitively() {
        assert_eq!("JSON".parse::<OutputFormat>().ok(), Some(OutputFormat::Json));
        assert_eq!("text".parse::<OutputFormat>().ok(), Some(OutputFormat::Text));
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn layout_takes_precedence_over_seed() {
        let config = ClientConfig {
            seed: Some(3),
            layout: Some("PF-- ---- ---- ----".to_string()),
            ..ClientConfig::default()
        };
        let grid = config.initial_grid().unwrap();
        assert_eq!(grid.get(CellIndex::new(1).unwrap()), Cell::Food);
        assert_eq!(grid.count(Cell::Food), 1);
    }

    #[test]
    fn seed_reproduces_the_generated_board() {
        let config = ClientConfig {
            seed: Some(99),
            ..ClientConfig::default()
        };
        assert_eq!(
            config.initial_grid().unwrap(),
            GridFactory::generate_seeded(99)
        );
    }

    #[test]
    fn invalid_layout_names_the_variable() {
        let config = ClientConfig {
            layout: Some("P F".to_string()),
            ..ClientConfig::default()
        };
        let message = format!("{:#}", config.initial_grid().unwrap_err());
        assert!(message.contains("PELLET_LAYOUT"));
        assert!(message.contains("expected 16"));
    }
}
