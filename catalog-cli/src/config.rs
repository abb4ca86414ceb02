//! Process configuration
//!
//! Settings come from flags or the environment (see `commands::DatabaseArgs`
//! and `ServeArgs`). A `.env` file in the current directory, or any parent,
//! seeds the environment first. Variables already set are never overwritten.

use std::path::PathBuf;

use tracing::{debug, info, warn};

/// What happened while looking for a `.env` file.
#[derive(Debug)]
pub enum DotenvOutcome {
    Loaded(PathBuf),
    NotFound,
    Invalid(String),
}

/// Load `.env` into the process environment.
///
/// Runs before tracing is initialized, so the outcome is returned and logged
/// later through [`report`].
pub fn load_dotenv() -> DotenvOutcome {
    match dotenvy::dotenv() {
        Ok(path) => DotenvOutcome::Loaded(path),
        Err(e) if e.not_found() => DotenvOutcome::NotFound,
        Err(e) => DotenvOutcome::Invalid(e.to_string()),
    }
}

pub fn report(outcome: &DotenvOutcome) {
    match outcome {
        DotenvOutcome::Loaded(path) => info!("Loaded configuration from {}", path.display()),
        DotenvOutcome::NotFound => debug!("No .env file found, using environment variables only"),
        DotenvOutcome::Invalid(e) => warn!("Ignoring unreadable .env file: {}", e),
    }
}
