//! Rostered-player counts per position at a snapshot week
//!
//! The weekly results export is used instead of the league rosters because
//! rosters reflect the off-season configuration.

use player_registry::PlayerRegistry;
use tracing::{debug, trace, warn};
use weekly_loader::{TeamResultDetails, WeeklySource};

use crate::config::LeagueConfig;
use crate::models::RosterCounts;

pub struct RosterCounter<'a, S: ?Sized> {
    registry: &'a PlayerRegistry,
    source: &'a S,
    leagues: &'a [LeagueConfig],
    week: u32,
}

impl<'a, S: WeeklySource + ?Sized> RosterCounter<'a, S> {
    pub fn new(
        registry: &'a PlayerRegistry,
        source: &'a S,
        leagues: &'a [LeagueConfig],
        week: u32,
    ) -> Self {
        Self { registry, source, leagues, week }
    }

    /// Count every rostered player (starters and bench) by position bucket
    pub fn compute_roster_counts(&self) -> RosterCounts {
        let mut counts = RosterCounts::default();

        for league in self.leagues {
            debug!("Loading week {} for {}", self.week, league.key);

            let Some(results) = self.source.league_week(&league.key, self.week) else {
                continue;
            };

            for team in results.matchups.iter().flat_map(|m| m.teams.iter()) {
                self.count_team(&mut counts, team);
            }
        }

        if !counts.unknown_players.is_empty() {
            warn!("Unknown players: {:?}", counts.unknown_players);
        }

        counts
    }

    fn count_team(&self, counts: &mut RosterCounts, team: &TeamResultDetails) {
        counts.teams_in_play += 1;

        for entry in &team.player_results {
            counts.entries_scanned += 1;

            match self.registry.find_by_id(entry.player_id) {
                Some(player) => {
                    let bucket = player.bucket();
                    trace!("Incrementing {} count for {}", bucket, player.name);
                    *counts.counts.entry(bucket).or_insert(0) += 1;
                }
                None => {
                    warn!("Could not find player in registry for ID {}", entry.player_id);
                    counts.unresolved_entries += 1;
                    counts.unknown_players.insert(entry.player_id);
                }
            }
        }
    }
}
