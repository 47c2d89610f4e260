//! Error types for the stats engine

use thiserror::Error;

use crate::config::ConfigError;

/// Result type alias for stats engine operations
pub type Result<T> = std::result::Result<T, StatsError>;

/// Errors that stop a report (or the whole process) from running
///
/// Missing or malformed week documents are not errors: they contribute
/// nothing to the week and are only logged.
#[derive(Error, Debug)]
pub enum StatsError {
    /// Configuration is missing or invalid
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The player directory could not be loaded
    #[error("Player directory error: {0}")]
    PlayerDirectory(#[from] weekly_loader::LoaderError),

    /// A player that had to exist was not in the registry
    #[error("Lookup error: {0}")]
    Lookup(#[from] player_registry::PlayerLookupError),
}
