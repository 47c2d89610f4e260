//! Stats Engine
//!
//! Season reports over weekly MyFantasyLeague exports: how often players
//! finish as weekly starters at their position, how many players of each
//! position sit on league rosters, and how many starter points each position
//! produces.

pub mod calculator;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod points;
pub mod ranking;
pub mod roster;

pub use calculator::ScoreAggregator;
pub use config::{ConfigError, LeagueConfig, SeasonWindow, StatsConfig};
pub use engine::StatsEngine;
pub use error::{Result, StatsError};
pub use models::*;
pub use points::WeeklyPointsAggregator;
pub use ranking::rank_breakdowns;
pub use roster::RosterCounter;

#[cfg(test)]
pub(crate) mod test_support;
