use serde::{Deserialize, Serialize};

use crate::de::{number, one_or_many};

/// Roster status MFL assigns to players in a team's starting lineup
pub const STARTER_STATUS: &str = "starter";

/// One player's score in a position-week export
///
/// The rank is implicit: the export is already ordered, so the first entry
/// is rank 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyPlayerScore {
    /// MFL player ID (may not exist in the player directory)
    #[serde(rename = "id", deserialize_with = "number")]
    pub player_id: u32,
    /// Fantasy points scored this week
    #[serde(default, deserialize_with = "number")]
    pub score: f64,
}

/// Top-level `playerScores` export document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerScoresResponse {
    #[serde(rename = "playerScores", default)]
    pub wrapper: Option<PlayerScoresWrapper>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerScoresWrapper {
    #[serde(rename = "playerScore", default, deserialize_with = "one_or_many")]
    pub player_scores: Vec<WeeklyPlayerScore>,
}

impl PlayerScoresResponse {
    /// Ordered scores, empty when the wrapper is absent
    pub fn into_scores(self) -> Vec<WeeklyPlayerScore> {
        self.wrapper.map(|w| w.player_scores).unwrap_or_default()
    }
}

/// Top-level `weeklyResults` export document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeeklyResultsResponse {
    #[serde(rename = "weeklyResults", default)]
    pub weekly_results: Option<WeeklyResults>,
}

/// One league's results for one week
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeeklyResults {
    #[serde(rename = "matchup", default, deserialize_with = "one_or_many")]
    pub matchups: Vec<MatchupResults>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchupResults {
    #[serde(rename = "franchise", default, deserialize_with = "one_or_many")]
    pub teams: Vec<TeamResultDetails>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamResultDetails {
    #[serde(rename = "player", default, deserialize_with = "one_or_many")]
    pub player_results: Vec<PlayerResultDetails>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerResultDetails {
    #[serde(rename = "id", deserialize_with = "number")]
    pub player_id: u32,
    #[serde(default, deserialize_with = "number")]
    pub score: f64,
    /// `starter`, `nonstarter`, ...
    #[serde(default)]
    pub status: String,
}

impl PlayerResultDetails {
    pub fn is_starter(&self) -> bool {
        self.status == STARTER_STATUS
    }
}

impl WeeklyResults {
    /// Total number of player entries across all matchups and teams
    pub fn player_entry_count(&self) -> usize {
        self.matchups
            .iter()
            .flat_map(|m| m.teams.iter())
            .map(|t| t.player_results.len())
            .sum()
    }
}

/// Top-level `players` directory document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerDirectoryResponse {
    #[serde(default)]
    pub players: Option<PlayerDirectory>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerDirectory {
    #[serde(rename = "player", default, deserialize_with = "one_or_many")]
    pub players: Vec<PlayerEntry>,
}

/// A player as listed in the MFL directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerEntry {
    #[serde(deserialize_with = "number")]
    pub id: u32,
    /// Player name as MFL formats it (e.g., "Brady, Tom")
    pub name: String,
    /// Raw position code (e.g., "QB", "CB", "PK")
    #[serde(default)]
    pub position: String,
    /// Team abbreviation (e.g., "NEP")
    #[serde(default)]
    pub team: Option<String>,
}
