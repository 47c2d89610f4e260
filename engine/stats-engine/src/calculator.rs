//! Starter-finish aggregation for the "starter weeks" report

use player_registry::{PlayerRegistry, PositionBucket};
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, trace, warn};
use weekly_loader::WeeklySource;

use crate::config::SeasonWindow;
use crate::models::{BreakdownScan, PlayerScoreBreakdown};

/// Counts, per player, the weeks they finished inside the starter ranks of
/// their position
pub struct ScoreAggregator<'a, S: ?Sized> {
    registry: &'a PlayerRegistry,
    source: &'a S,
    season: SeasonWindow,
}

impl<'a, S: WeeklySource + ?Sized> ScoreAggregator<'a, S> {
    pub fn new(registry: &'a PlayerRegistry, source: &'a S, season: SeasonWindow) -> Self {
        Self { registry, source, season }
    }

    /// Breakdowns for every player who finished as a starter at least once
    pub fn compute_breakdowns(&self, position: PositionBucket) -> Vec<PlayerScoreBreakdown> {
        self.scan(position).breakdowns
    }

    /// Run the aggregation pass over the season window
    ///
    /// Each week only the first `starter_limit` entries of the position's
    /// score list are consulted. Players missing from the registry are
    /// recorded and skipped.
    pub fn scan(&self, position: PositionBucket) -> BreakdownScan {
        let Some(limit) = position.starter_limit() else {
            warn!("No starter limit for position {}, nothing to aggregate", position);
            return BreakdownScan::default();
        };

        let mut by_player: BTreeMap<u32, PlayerScoreBreakdown> = BTreeMap::new();
        let mut unknown_players = BTreeSet::new();
        let mut weeks_loaded = 0;

        for week in self.season.weeks() {
            debug!("Loading week {} for {}", week, position);

            let Some(scores) = self.source.position_week(position.code(), week) else {
                continue;
            };
            weeks_loaded += 1;

            for (index, score) in scores.iter().take(limit).enumerate() {
                let rank = index + 1;

                let Some(player) = self.registry.find_by_id(score.player_id) else {
                    warn!("Could not find player {} ranked {} in week {}", score.player_id, rank, week);
                    unknown_players.insert(score.player_id);
                    continue;
                };

                let tier = by_player
                    .entry(player.id)
                    .or_insert_with(|| PlayerScoreBreakdown::new(player))
                    .add_top_finish(rank);
                trace!("Week {}: {} finished {} ({:?})", week, player.name, rank, tier);
            }
        }

        debug!(
            "Aggregated {} players for {} over {} weeks",
            by_player.len(),
            position,
            weeks_loaded
        );

        BreakdownScan {
            breakdowns: by_player.into_values().collect(),
            unknown_players,
            weeks_loaded,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{bulk_registry, registry, MemorySource};
    use player_registry::Position;

    fn find(breakdowns: &[PlayerScoreBreakdown], id: u32) -> Option<&PlayerScoreBreakdown> {
        breakdowns.iter().find(|b| b.player_id == id)
    }

    #[test]
    fn test_single_week_quarterback() {
        let registry = registry();
        let ids = [1, 2, 101, 102, 103, 104, 105, 106, 107, 108, 109, 110];
        let source = MemorySource::default().with_scores("QB", 1, &ids);

        let aggregator = ScoreAggregator::new(&registry, &source, SeasonWindow::default());
        let breakdowns = aggregator.compute_breakdowns(PositionBucket::Quarterback);

        let alice = find(&breakdowns, 1).unwrap();
        assert_eq!(alice.name, "Alice");
        assert_eq!((alice.top12_finishes, alice.top24_finishes, alice.top36_finishes), (1, 0, 0));
        assert_eq!(breakdowns.len(), 2);
    }

    #[test]
    fn test_quarterback_limit_ignores_rank_13_and_beyond() {
        let registry = bulk_registry(100, 20, Position::Quarterback);
        let ids: Vec<u32> = (100..120).collect();
        let source = MemorySource::default().with_scores("QB", 1, &ids);

        let aggregator = ScoreAggregator::new(&registry, &source, SeasonWindow::default());
        let breakdowns = aggregator.compute_breakdowns(PositionBucket::Quarterback);

        assert_eq!(breakdowns.len(), 12);
        assert!(breakdowns.iter().all(|b| b.top12_finishes == 1 && b.top24_finishes == 0));
        assert!(find(&breakdowns, 112).is_none());
    }

    #[test]
    fn test_running_back_tiers() {
        let registry = bulk_registry(100, 30, Position::RunningBack);
        let ids: Vec<u32> = (100..130).collect();
        let source = MemorySource::default().with_scores("RB", 2, &ids);

        let aggregator = ScoreAggregator::new(&registry, &source, SeasonWindow::default());
        let breakdowns = aggregator.compute_breakdowns(PositionBucket::RunningBack);

        assert_eq!(breakdowns.len(), 24);
        assert_eq!(find(&breakdowns, 111).unwrap().top12_finishes, 1);
        assert_eq!(find(&breakdowns, 112).unwrap().top24_finishes, 1);
        assert!(breakdowns.iter().all(|b| b.top36_finishes == 0));
    }

    #[test]
    fn test_wide_receiver_never_passes_rank_36() {
        let registry = bulk_registry(100, 40, Position::WideReceiver);
        let ids: Vec<u32> = (100..140).collect();
        let source = MemorySource::default().with_scores("WR", 1, &ids);

        let aggregator = ScoreAggregator::new(&registry, &source, SeasonWindow::default());
        let breakdowns = aggregator.compute_breakdowns(PositionBucket::WideReceiver);

        assert_eq!(breakdowns.len(), 36);
        assert_eq!(breakdowns.iter().map(|b| b.top36_finishes).sum::<u32>(), 12);
        assert_eq!(breakdowns.iter().map(|b| b.total_finishes()).sum::<u32>(), 36);
        assert!(find(&breakdowns, 136).is_none());
    }

    #[test]
    fn test_accumulates_across_weeks_and_survives_missing_weeks() {
        let registry = registry();
        let source = MemorySource::default()
            .with_scores("QB", 1, &[1, 2])
            .with_scores("QB", 3, &[2, 1])
            .with_scores("QB", 13, &[1]);

        let aggregator = ScoreAggregator::new(&registry, &source, SeasonWindow::default());
        let scan = aggregator.scan(PositionBucket::Quarterback);

        assert_eq!(scan.weeks_loaded, 3);
        assert_eq!(find(&scan.breakdowns, 1).unwrap().top12_finishes, 3);
        assert_eq!(find(&scan.breakdowns, 2).unwrap().top12_finishes, 2);
    }

    #[test]
    fn test_unknown_players_are_skipped() {
        let registry = registry();
        let source = MemorySource::default().with_scores("QB", 1, &[999, 1]);

        let aggregator = ScoreAggregator::new(&registry, &source, SeasonWindow::default());
        let scan = aggregator.scan(PositionBucket::Quarterback);

        assert_eq!(scan.breakdowns.len(), 1);
        assert_eq!(scan.breakdowns[0].player_id, 1);
        assert!(scan.unknown_players.contains(&999));
    }

    #[test]
    fn test_short_week_list() {
        let registry = registry();
        let source = MemorySource::default().with_scores("DB", 1, &[4, 5]);

        let aggregator = ScoreAggregator::new(&registry, &source, SeasonWindow::default());
        let breakdowns = aggregator.compute_breakdowns(PositionBucket::DefensiveBack);

        assert_eq!(breakdowns.len(), 2);
    }

    #[test]
    fn test_unknown_position_contributes_nothing() {
        let registry = registry();
        let source = MemorySource::default().with_scores("UNKNOWN", 1, &[1, 2]);

        let aggregator = ScoreAggregator::new(&registry, &source, SeasonWindow::default());
        assert!(aggregator.compute_breakdowns(PositionBucket::Unknown).is_empty());
    }

    #[test]
    fn test_weeks_outside_window_are_ignored() {
        let registry = registry();
        let source = MemorySource::default()
            .with_scores("QB", 1, &[1])
            .with_scores("QB", 14, &[1]);

        let aggregator = ScoreAggregator::new(&registry, &source, SeasonWindow::default());
        let breakdowns = aggregator.compute_breakdowns(PositionBucket::Quarterback);

        assert_eq!(breakdowns[0].top12_finishes, 1);
    }
}
