//! Weekly Loader - Reads pre-fetched MyFantasyLeague exports from disk
//!
//! Position-week score lists, league-week matchup results and the player
//! directory are decoded into typed records. Week documents that are missing
//! or malformed are reported as absent rather than failing the caller.

pub mod de;
pub mod error;
pub mod loader;
pub mod types;

pub use error::{LoaderError, Result};
pub use loader::{load_player_directory, FileWeeklySource, WeeklySource};
pub use types::{
    MatchupResults, PlayerEntry, PlayerResultDetails, TeamResultDetails, WeeklyPlayerScore,
    WeeklyResults,
};
