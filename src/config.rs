//! Runtime settings for the `contact-manager` binary.
//!
//! Values come from command line flags, falling back to environment variables
//! (a `.env` file in the working directory is loaded first when present).

use std::path::PathBuf;

use dotenv::dotenv;
use tracing_subscriber::EnvFilter;

use crate::cli::command::Cli;

pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// CSV file preloaded into the session manager.
    pub seed: Option<PathBuf>,

    /// `tracing` filter directive, `RUST_LOG` when set.
    pub log_filter: String,
}

impl Settings {
    pub fn from_cli(cli: Cli) -> Self {
        let log_filter = std::env::var("RUST_LOG")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Self {
            seed: cli.seed,
            log_filter,
        }
    }
}

/// Loads `.env` into the process environment. Missing file is not an error.
pub fn load_dotenv() {
    dotenv().ok();
}

/// Installs the stderr `tracing` subscriber. Stdout is reserved for the menu.
pub fn init_logging(settings: &Settings) {
    let filter = EnvFilter::try_new(&settings.log_filter)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_is_taken_from_cli() {
        let cli = Cli {
            seed: Some(PathBuf::from("people.csv")),
        };

        let settings = Settings::from_cli(cli);

        assert_eq!(settings.seed, Some(PathBuf::from("people.csv")));
        assert!(!settings.log_filter.is_empty());
    }
}
