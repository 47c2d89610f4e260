//! In-memory fixtures shared by the aggregator tests

use player_registry::{Player, PlayerRegistry, Position};
use std::collections::HashMap;
use weekly_loader::{
    MatchupResults, PlayerResultDetails, TeamResultDetails, WeeklyPlayerScore, WeeklyResults,
    WeeklySource,
};

use crate::config::LeagueConfig;

#[derive(Debug, Default)]
pub struct MemorySource {
    scores: HashMap<(String, u32), Vec<WeeklyPlayerScore>>,
    results: HashMap<(String, u32), WeeklyResults>,
}

impl MemorySource {
    pub fn with_scores(mut self, code: &str, week: u32, ids: &[u32]) -> Self {
        let scores = ids
            .iter()
            .enumerate()
            .map(|(i, &player_id)| WeeklyPlayerScore { player_id, score: 100.0 - i as f64 })
            .collect();
        self.scores.insert((code.to_string(), week), scores);
        self
    }

    pub fn with_results(mut self, league_key: &str, week: u32, results: WeeklyResults) -> Self {
        self.results.insert((league_key.to_string(), week), results);
        self
    }
}

impl WeeklySource for MemorySource {
    fn position_week(&self, position_code: &str, week: u32) -> Option<Vec<WeeklyPlayerScore>> {
        self.scores.get(&(position_code.to_string(), week)).cloned()
    }

    fn league_week(&self, league_key: &str, week: u32) -> Option<WeeklyResults> {
        self.results.get(&(league_key.to_string(), week)).cloned()
    }
}

/// Team with `(player_id, score, status)` entries
pub fn team(entries: &[(u32, f64, &str)]) -> TeamResultDetails {
    TeamResultDetails {
        player_results: entries
            .iter()
            .map(|&(player_id, score, status)| PlayerResultDetails {
                player_id,
                score,
                status: status.to_string(),
            })
            .collect(),
    }
}

/// Results with each inner list of teams forming one matchup
pub fn results(matchups: Vec<Vec<TeamResultDetails>>) -> WeeklyResults {
    WeeklyResults {
        matchups: matchups.into_iter().map(|teams| MatchupResults { teams }).collect(),
    }
}

pub fn league(key: &str) -> LeagueConfig {
    LeagueConfig {
        key: key.to_string(),
        league_id: 10000,
        server_id: 60,
        name: key.to_uppercase(),
        franchise_id: None,
    }
}

pub fn registry() -> PlayerRegistry {
    PlayerRegistry::from_players(vec![
        Player::new(1, "Alice", Position::Quarterback),
        Player::new(2, "Bob", Position::Quarterback),
        Player::new(3, "Carol", Position::RunningBack),
        Player::new(4, "Dave", Position::Cornerback),
        Player::new(5, "Erin", Position::Safety),
        Player::new(6, "Frank", Position::DefensiveTackle),
        Player::new(7, "Grace", Position::DefensiveEnd),
        Player::new(8, "Heidi", Position::WideReceiver),
        Player::new(9, "Ivan", Position::Kicker),
    ])
}

/// Registry with `count` players at one position, IDs starting at `first_id`
pub fn bulk_registry(first_id: u32, count: u32, position: Position) -> PlayerRegistry {
    PlayerRegistry::from_players(
        (first_id..first_id + count).map(|id| Player::new(id, format!("Player {id:03}"), position)),
    )
}
