//! Starter fantasy points per position across leagues and weeks

use player_registry::PlayerRegistry;
use tracing::{debug, trace, warn};
use weekly_loader::{WeeklyResults, WeeklySource};

use crate::config::{LeagueConfig, SeasonWindow};
use crate::models::PositionPoints;

pub struct WeeklyPointsAggregator<'a, S: ?Sized> {
    registry: &'a PlayerRegistry,
    source: &'a S,
    leagues: &'a [LeagueConfig],
    season: SeasonWindow,
}

impl<'a, S: WeeklySource + ?Sized> WeeklyPointsAggregator<'a, S> {
    pub fn new(
        registry: &'a PlayerRegistry,
        source: &'a S,
        leagues: &'a [LeagueConfig],
        season: SeasonWindow,
    ) -> Self {
        Self { registry, source, leagues, season }
    }

    /// Sum starter scores per position bucket
    ///
    /// Leagues are visited in configured order and weeks in ascending order,
    /// so repeated runs over the same data produce identical totals.
    pub fn compute_position_points(&self) -> PositionPoints {
        let mut points = PositionPoints::default();

        for league in self.leagues {
            for week in self.season.weeks() {
                debug!("Loading week {} for {}", week, league.key);

                if let Some(results) = self.source.league_week(&league.key, week) {
                    self.add_starter_points(&mut points, &results);
                }
            }
        }

        if !points.unknown_players.is_empty() {
            warn!("Unknown starters: {:?}", points.unknown_players);
        }

        points
    }

    fn add_starter_points(&self, points: &mut PositionPoints, results: &WeeklyResults) {
        let starters = results
            .matchups
            .iter()
            .flat_map(|m| m.teams.iter())
            .flat_map(|t| t.player_results.iter())
            .filter(|p| p.is_starter());

        for entry in starters {
            points.starters_scanned += 1;

            let Some(player) = self.registry.find_by_id(entry.player_id) else {
                warn!("Could not find starter in registry for ID {}", entry.player_id);
                points.unknown_players.insert(entry.player_id);
                continue;
            };

            let bucket = player.bucket();
            trace!("Adding {} score of {} for {}", bucket, entry.score, player.name);
            *points.totals.entry(bucket).or_insert(0.0) += entry.score;
        }
    }
}
