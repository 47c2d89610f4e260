use chrono::Utc;
use player_registry::{Player, PlayerRegistry, PositionBucket};
use std::sync::Arc;
use tracing::info;
use weekly_loader::{FileWeeklySource, WeeklySource};

use crate::calculator::ScoreAggregator;
use crate::config::{LeagueConfig, SeasonWindow, StatsConfig};
use crate::error::Result;
use crate::models::{PositionCountReport, PositionPointsReport, StarterWeeksReport};
use crate::points::WeeklyPointsAggregator;
use crate::ranking::rank_breakdowns;
use crate::roster::RosterCounter;

/// Entry point for the season reports
///
/// The registry and league list are read-only. Every report call builds its
/// own accumulators, so one engine can serve concurrent callers.
pub struct StatsEngine<S> {
    registry: Arc<PlayerRegistry>,
    leagues: Vec<LeagueConfig>,
    season: SeasonWindow,
    source: S,
}

impl StatsEngine<FileWeeklySource> {
    /// Load the player directory and wire a file-backed engine
    pub fn from_config(config: &StatsConfig) -> Result<Self> {
        info!("Creating stats engine over {:?}", config.data_dir);

        let registry = PlayerRegistry::load_from_file(config.players_path())?;
        let source = FileWeeklySource::new(&config.data_dir);

        Ok(Self::new(Arc::new(registry), config.leagues.clone(), config.season, source))
    }
}

impl<S: WeeklySource> StatsEngine<S> {
    pub fn new(
        registry: Arc<PlayerRegistry>,
        leagues: Vec<LeagueConfig>,
        season: SeasonWindow,
        source: S,
    ) -> Self {
        Self { registry, leagues, season, source }
    }

    pub fn registry(&self) -> &PlayerRegistry {
        &self.registry
    }

    pub fn leagues(&self) -> &[LeagueConfig] {
        &self.leagues
    }

    pub fn season(&self) -> SeasonWindow {
        self.season
    }

    /// Look up a player that is expected to exist
    pub fn player(&self, id: u32) -> Result<&Player> {
        Ok(self.registry.find_by_id_or_fail(id)?)
    }

    /// Ranked weekly starter finishes for one position
    pub fn starter_weeks(&self, position: PositionBucket) -> StarterWeeksReport {
        let scan = ScoreAggregator::new(&self.registry, &self.source, self.season).scan(position);

        let mut breakdowns = scan.breakdowns;
        rank_breakdowns(&mut breakdowns);

        info!("Starter weeks for {}: {} players ranked", position, breakdowns.len());

        StarterWeeksReport {
            position,
            breakdowns,
            unknown_players: scan.unknown_players,
            weeks_loaded: scan.weeks_loaded,
            generated_at: Utc::now(),
        }
    }

    /// Rostered players per position at the snapshot week
    pub fn position_count(&self) -> PositionCountReport {
        let week = self.season.roster_week;
        let counts =
            RosterCounter::new(&self.registry, &self.source, &self.leagues, week).compute_roster_counts();

        info!(
            "Position count: {} teams across {} leagues, {} unknown players",
            counts.teams_in_play,
            self.leagues.len(),
            counts.unknown_players.len()
        );

        PositionCountReport {
            week,
            counts: counts.counts,
            teams_in_play: counts.teams_in_play,
            league_count: self.leagues.len(),
            entries_scanned: counts.entries_scanned,
            unresolved_entries: counts.unresolved_entries,
            unknown_players: counts.unknown_players,
            generated_at: Utc::now(),
        }
    }

    /// Starter points per position over the season window
    pub fn position_points(&self) -> PositionPointsReport {
        let points = WeeklyPointsAggregator::new(&self.registry, &self.source, &self.leagues, self.season)
            .compute_position_points();

        info!("Position points: {} starters scanned", points.starters_scanned);

        PositionPointsReport {
            first_week: self.season.first_week,
            last_week: self.season.last_week,
            totals: points.totals,
            starters_scanned: points.starters_scanned,
            unknown_players: points.unknown_players,
            generated_at: Utc::now(),
        }
    }
}
