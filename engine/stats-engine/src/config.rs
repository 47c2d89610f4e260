//! Configuration for the stats engine
//!
//! Leagues are listed by key in the required `league_keys`, and each key
//! must have a matching `[league.<key>]` table:
//!
//! ```toml
//! data_dir = "data"
//! league_keys = ["zealots1"]
//!
//! [season]
//! first_week = 1
//! last_week = 13
//! roster_week = 13
//!
//! [league.zealots1]
//! league_id = 12345
//! server_id = 61
//! name = "Zealots One"
//! franchise_id = "0004"
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Environment variable overriding `data_dir`
pub const DATA_DIR_ENV: &str = "LEAGUE_STATS_DATA_DIR";

/// Player directory file name inside the data directory
pub const DEFAULT_PLAYERS_FILE: &str = "mfl_players.json";

/// Errors in the process configuration. All of them are fatal at startup.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("required property '{0}' is missing")]
    MissingProperty(String),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Validated configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsConfig {
    /// Root of the pre-fetched export files
    pub data_dir: PathBuf,

    /// Player directory file, relative to `data_dir` unless absolute
    pub players_file: PathBuf,

    /// Weeks covered by the season reports
    pub season: SeasonWindow,

    /// Leagues in configured order
    pub leagues: Vec<LeagueConfig>,
}

/// Range of weeks the reports scan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeasonWindow {
    pub first_week: u32,
    pub last_week: u32,

    /// Week whose rosters are counted. Late enough that every owner still
    /// manages their team.
    pub roster_week: u32,
}

/// A configured league
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeagueConfig {
    /// Configuration key; export files are named after it
    pub key: String,

    /// MFL league ID
    pub league_id: u32,

    /// MFL server ID
    pub server_id: u32,

    /// Display name
    pub name: String,

    /// Franchise of interest within the league, if any
    pub franchise_id: Option<String>,
}

/// Config file as written, before required properties are checked
#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    data_dir: Option<PathBuf>,
    players_file: Option<PathBuf>,
    league_keys: Option<Vec<String>>,
    season: Option<SeasonWindow>,
    #[serde(default)]
    league: HashMap<String, RawLeague>,
}

#[derive(Debug, Default, Deserialize)]
struct RawLeague {
    league_id: Option<u32>,
    server_id: Option<u32>,
    name: Option<String>,
    franchise_id: Option<String>,
}

impl Default for SeasonWindow {
    fn default() -> Self {
        Self { first_week: 1, last_week: 13, roster_week: 13 }
    }
}

impl SeasonWindow {
    pub fn weeks(&self) -> RangeInclusive<u32> {
        self.first_week..=self.last_week
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.first_week == 0 {
            return Err(ConfigError::Invalid("season.first_week must be at least 1".to_string()));
        }

        if self.first_week > self.last_week {
            return Err(ConfigError::Invalid(format!(
                "season.first_week ({}) is after season.last_week ({})",
                self.first_week, self.last_week
            )));
        }

        if !self.weeks().contains(&self.roster_week) {
            return Err(ConfigError::Invalid(format!(
                "season.roster_week ({}) is outside weeks {}-{}",
                self.roster_week, self.first_week, self.last_week
            )));
        }

        Ok(())
    }
}

impl StatsConfig {
    /// Load configuration from a TOML file, then apply environment overrides
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;

        let mut config = Self::from_toml_str(&content)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = toml::from_str(content)?;
        Self::from_raw(raw)
    }

    fn from_raw(mut raw: RawConfig) -> Result<Self, ConfigError> {
        let league_keys = raw
            .league_keys
            .take()
            .ok_or_else(|| ConfigError::MissingProperty("league_keys".to_string()))?;
        let mut leagues: Vec<LeagueConfig> = Vec::with_capacity(league_keys.len());

        for key in league_keys.iter().map(|k| k.trim()).filter(|k| !k.is_empty()) {
            if leagues.iter().any(|league| league.key == key) {
                return Err(ConfigError::Invalid(format!("duplicate league key '{key}' in league_keys")));
            }

            let prefix = format!("league.{key}");
            let league = raw
                .league
                .remove(key)
                .ok_or_else(|| ConfigError::MissingProperty(prefix.clone()))?;

            let league = LeagueConfig {
                key: key.to_string(),
                league_id: league
                    .league_id
                    .ok_or_else(|| ConfigError::MissingProperty(format!("{prefix}.league_id")))?,
                server_id: league
                    .server_id
                    .ok_or_else(|| ConfigError::MissingProperty(format!("{prefix}.server_id")))?,
                name: league
                    .name
                    .ok_or_else(|| ConfigError::MissingProperty(format!("{prefix}.name")))?,
                franchise_id: league.franchise_id,
            };

            debug!(
                "Found configured league '{}', using ({}, {}, {:?})",
                league.key, league.league_id, league.server_id, league.franchise_id
            );
            leagues.push(league);
        }

        let season = raw.season.unwrap_or_default();
        season.validate()?;

        info!("Found {} configured leagues", leagues.len());

        Ok(Self {
            data_dir: raw.data_dir.unwrap_or_else(|| PathBuf::from("data")),
            players_file: raw.players_file.unwrap_or_else(|| PathBuf::from(DEFAULT_PLAYERS_FILE)),
            season,
            leagues,
        })
    }

    /// Apply overrides from environment variables
    pub fn apply_env_overrides(&mut self) {
        if let Ok(data_dir) = std::env::var(DATA_DIR_ENV) {
            self.data_dir = PathBuf::from(data_dir);
        }
    }

    /// Full path of the player directory file
    pub fn players_path(&self) -> PathBuf {
        self.data_dir.join(&self.players_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_CONFIG: &str = r#"
        data_dir = "/srv/mfl"
        league_keys = ["zealots1", "zealots2"]

        [season]
        first_week = 1
        last_week = 13
        roster_week = 12

        [league.zealots1]
        league_id = 12345
        server_id = 61
        name = "Zealots One"
        franchise_id = "0004"

        [league.zealots2]
        league_id = 23456
        server_id = 62
        name = "Zealots Two"
    "#;

    #[test]
    fn test_full_config() {
        let config = StatsConfig::from_toml_str(FULL_CONFIG).unwrap();

        assert_eq!(config.data_dir, PathBuf::from("/srv/mfl"));
        assert_eq!(config.players_path(), PathBuf::from("/srv/mfl/mfl_players.json"));
        assert_eq!(config.season.roster_week, 12);
        assert_eq!(config.leagues.len(), 2);
        assert_eq!(config.leagues[0].key, "zealots1");
        assert_eq!(config.leagues[0].franchise_id.as_deref(), Some("0004"));
        assert_eq!(config.leagues[1].server_id, 62);
        assert_eq!(config.leagues[1].franchise_id, None);
    }

    #[test]
    fn test_defaults() {
        let config = StatsConfig::from_toml_str("league_keys = []").unwrap();

        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert_eq!(config.season, SeasonWindow::default());
        assert_eq!(config.season.weeks(), 1..=13);
        assert!(config.leagues.is_empty());
    }

    #[test]
    fn test_missing_league_table() {
        let err = StatsConfig::from_toml_str(r#"league_keys = ["ghost"]"#).unwrap_err();
        assert!(matches!(err, ConfigError::MissingProperty(ref p) if p == "league.ghost"));
    }

    #[test]
    fn test_missing_league_keys() {
        let toml = r#"
            [league.zealots1]
            league_id = 12345
            server_id = 61
            name = "Zealots One"
        "#;

        let err = StatsConfig::from_toml_str(toml).unwrap_err();
        assert!(matches!(err, ConfigError::MissingProperty(ref p) if p == "league_keys"));
        assert!(matches!(StatsConfig::from_toml_str(""), Err(ConfigError::MissingProperty(_))));
    }

    #[test]
    fn test_duplicate_league_key() {
        let toml = r#"
            league_keys = ["zealots1", " zealots1"]

            [league.zealots1]
            league_id = 12345
            server_id = 61
            name = "Zealots One"
        "#;

        let err = StatsConfig::from_toml_str(toml).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(ref msg) if msg.contains("zealots1")));
    }

    #[test]
    fn test_data_dir_env_override() {
        let mut config = StatsConfig::from_toml_str(FULL_CONFIG).unwrap();

        std::env::set_var(DATA_DIR_ENV, "/mnt/exports");
        config.apply_env_overrides();
        std::env::remove_var(DATA_DIR_ENV);

        assert_eq!(config.data_dir, PathBuf::from("/mnt/exports"));
        assert_eq!(config.players_path(), PathBuf::from("/mnt/exports/mfl_players.json"));

        config.apply_env_overrides();
        assert_eq!(config.data_dir, PathBuf::from("/mnt/exports"));
    }

    #[test]
    fn test_missing_required_property() {
        let toml = r#"
            league_keys = ["zealots1"]

            [league.zealots1]
            league_id = 12345
            name = "Zealots One"
        "#;

        let err = StatsConfig::from_toml_str(toml).unwrap_err();
        assert!(matches!(err, ConfigError::MissingProperty(ref p) if p == "league.zealots1.server_id"));
    }

    #[test]
    fn test_invalid_season() {
        let toml = r#"
            league_keys = []

            [season]
            first_week = 5
            last_week = 3
            roster_week = 4
        "#;
        assert!(matches!(StatsConfig::from_toml_str(toml), Err(ConfigError::Invalid(_))));

        let toml = r#"
            league_keys = []

            [season]
            first_week = 1
            last_week = 13
            roster_week = 14
        "#;
        assert!(matches!(StatsConfig::from_toml_str(toml), Err(ConfigError::Invalid(_))));

        let toml = r#"
            league_keys = []

            [season]
            first_week = 0
        "#;
        assert!(matches!(StatsConfig::from_toml_str(toml), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_partial_season_uses_defaults() {
        let toml = r#"
            league_keys = []

            [season]
            last_week = 14
        "#;

        let config = StatsConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.season.weeks(), 1..=14);
        assert_eq!(config.season.roster_week, 13);
    }

    #[test]
    fn test_malformed_toml() {
        assert!(matches!(StatsConfig::from_toml_str("league_keys = ["), Err(ConfigError::Parse(_))));
    }
}
