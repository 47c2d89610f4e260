use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error, warn};

use crate::error::{LoaderError, Result};
use crate::types::{
    PlayerDirectoryResponse, PlayerEntry, PlayerScoresResponse, WeeklyPlayerScore, WeeklyResults,
    WeeklyResultsResponse,
};

/// Directory (under the data root) holding position-week score exports
pub const SCORES_DIR: &str = "scores";

/// Directory (under the data root) holding league-week results exports
pub const RESULTS_DIR: &str = "weeklyResults";

/// Source of weekly documents for the aggregators
///
/// Implementations never fail: a document that cannot be produced is
/// reported as `None` and contributes nothing to the week.
pub trait WeeklySource: Send + Sync {
    /// Rank-ordered scores for one position code (e.g. "QB") and week
    fn position_week(&self, position_code: &str, week: u32) -> Option<Vec<WeeklyPlayerScore>>;

    /// Matchup results for one league and week
    fn league_week(&self, league_key: &str, week: u32) -> Option<WeeklyResults>;
}

/// Reads weekly exports from a local data directory
///
/// Layout:
/// - `<root>/scores/<CODE>_week<N>.json`
/// - `<root>/weeklyResults/<leagueKey>week<N>.json`
#[derive(Debug, Clone)]
pub struct FileWeeklySource {
    data_dir: PathBuf,
}

impl FileWeeklySource {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self { data_dir: data_dir.into() }
    }

    pub fn scores_path(&self, position_code: &str, week: u32) -> PathBuf {
        self.data_dir.join(SCORES_DIR).join(format!("{position_code}_week{week}.json"))
    }

    pub fn results_path(&self, league_key: &str, week: u32) -> PathBuf {
        self.data_dir.join(RESULTS_DIR).join(format!("{league_key}week{week}.json"))
    }

    /// Read and decode a position-week export
    pub fn read_position_week(
        &self,
        position_code: &str,
        week: u32,
    ) -> Result<Vec<WeeklyPlayerScore>> {
        let response: PlayerScoresResponse =
            read_document(&self.scores_path(position_code, week))?;
        Ok(response.into_scores())
    }

    /// Read and decode a league-week export
    pub fn read_league_week(&self, league_key: &str, week: u32) -> Result<WeeklyResults> {
        let response: WeeklyResultsResponse = read_document(&self.results_path(league_key, week))?;
        Ok(response.weekly_results.unwrap_or_default())
    }
}

impl WeeklySource for FileWeeklySource {
    fn position_week(&self, position_code: &str, week: u32) -> Option<Vec<WeeklyPlayerScore>> {
        absorb(self.read_position_week(position_code, week))
    }

    fn league_week(&self, league_key: &str, week: u32) -> Option<WeeklyResults> {
        absorb(self.read_league_week(league_key, week))
    }
}

/// Load the MFL player directory
///
/// Unlike week documents, failures here are returned to the caller.
pub fn load_player_directory(path: impl AsRef<Path>) -> Result<Vec<PlayerEntry>> {
    let response: PlayerDirectoryResponse = read_document(path.as_ref())?;
    let players = response.players.map(|d| d.players).unwrap_or_default();
    debug!("Found {} players in {:?}", players.len(), path.as_ref());
    Ok(players)
}

fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T> {
    debug!("Reading {:?}", path);
    let content = fs::read_to_string(path)
        .map_err(|source| LoaderError::Io { path: path.to_path_buf(), source })?;
    serde_json::from_str(&content)
        .map_err(|source| LoaderError::Decode { path: path.to_path_buf(), source })
}

fn absorb<T>(result: Result<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) if e.is_not_found() => {
            warn!("No data at {:?}, treating as empty", e.path());
            None
        }
        Err(e) => {
            error!("Failed to load weekly data: {}", e);
            None
        }
    }
}
