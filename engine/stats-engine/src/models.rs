use chrono::{DateTime, Utc};
use player_registry::{Player, Position, PositionBucket};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Weekly rank band a finish falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishTier {
    /// Ranks 1-12
    Top12,
    /// Ranks 13-24
    Top24,
    /// Ranks 25-36
    Top36,
}

impl FinishTier {
    /// Tier for a 1-based weekly rank, `None` outside 1-36
    pub fn for_rank(rank: usize) -> Option<Self> {
        match rank {
            1..=12 => Some(FinishTier::Top12),
            13..=24 => Some(FinishTier::Top24),
            25..=36 => Some(FinishTier::Top36),
            _ => None,
        }
    }
}

/// Tiered weekly finishes of one player over the season
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerScoreBreakdown {
    pub player_id: u32,
    pub name: String,
    pub position: Position,

    /// Externally computed grade; ranks as 0 when absent
    pub grade: Option<i32>,

    pub top12_finishes: u32,
    pub top24_finishes: u32,
    pub top36_finishes: u32,
}

impl PlayerScoreBreakdown {
    /// Empty breakdown for a registry player
    pub fn new(player: &Player) -> Self {
        Self {
            player_id: player.id,
            name: player.name.clone(),
            position: player.position,
            grade: None,
            top12_finishes: 0,
            top24_finishes: 0,
            top36_finishes: 0,
        }
    }

    /// Record one weekly finish at a 1-based rank
    ///
    /// Ranks outside 1-36 are ignored. Returns the tier that was credited.
    pub fn add_top_finish(&mut self, rank: usize) -> Option<FinishTier> {
        let tier = FinishTier::for_rank(rank)?;
        match tier {
            FinishTier::Top12 => self.top12_finishes += 1,
            FinishTier::Top24 => self.top24_finishes += 1,
            FinishTier::Top36 => self.top36_finishes += 1,
        }
        Some(tier)
    }

    pub fn total_finishes(&self) -> u32 {
        self.top12_finishes + self.top24_finishes + self.top36_finishes
    }
}

/// Output of one score aggregation pass
#[derive(Debug, Clone, Default)]
pub struct BreakdownScan {
    /// One entry per player seen, ordered by player ID
    pub breakdowns: Vec<PlayerScoreBreakdown>,
    pub unknown_players: BTreeSet<u32>,
    pub weeks_loaded: u32,
}

/// Output of one roster counting pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RosterCounts {
    pub counts: BTreeMap<PositionBucket, u32>,
    pub teams_in_play: u32,
    /// Player entries seen on all rosters
    pub entries_scanned: u32,
    /// Entries whose player was not in the registry
    pub unresolved_entries: u32,
    pub unknown_players: BTreeSet<u32>,
}

impl RosterCounts {
    pub fn count(&self, bucket: PositionBucket) -> u32 {
        self.counts.get(&bucket).copied().unwrap_or(0)
    }

    pub fn total_counted(&self) -> u32 {
        self.counts.values().sum()
    }
}

/// Output of one weekly points pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PositionPoints {
    pub totals: BTreeMap<PositionBucket, f64>,
    /// Starter entries seen across all leagues and weeks
    pub starters_scanned: u32,
    pub unknown_players: BTreeSet<u32>,
}

impl PositionPoints {
    pub fn total(&self, bucket: PositionBucket) -> f64 {
        self.totals.get(&bucket).copied().unwrap_or(0.0)
    }

    pub fn grand_total(&self) -> f64 {
        self.totals.values().sum()
    }
}

/// Ranked "starter weeks" report for one position
#[derive(Debug, Clone, Serialize)]
pub struct StarterWeeksReport {
    pub position: PositionBucket,
    pub breakdowns: Vec<PlayerScoreBreakdown>,
    pub unknown_players: BTreeSet<u32>,
    pub weeks_loaded: u32,
    pub generated_at: DateTime<Utc>,
}

/// Rostered players per position at the snapshot week
#[derive(Debug, Clone, Serialize)]
pub struct PositionCountReport {
    pub week: u32,
    pub counts: BTreeMap<PositionBucket, u32>,
    pub teams_in_play: u32,
    pub league_count: usize,
    pub entries_scanned: u32,
    pub unresolved_entries: u32,
    pub unknown_players: BTreeSet<u32>,
    pub generated_at: DateTime<Utc>,
}

impl PositionCountReport {
    /// Average rostered players of a position per team
    pub fn per_team(&self, bucket: PositionBucket) -> f64 {
        if self.teams_in_play == 0 {
            return 0.0;
        }
        self.counts.get(&bucket).copied().unwrap_or(0) as f64 / self.teams_in_play as f64
    }

    /// Average rostered players of a position per league
    pub fn per_league(&self, bucket: PositionBucket) -> f64 {
        if self.league_count == 0 {
            return 0.0;
        }
        self.counts.get(&bucket).copied().unwrap_or(0) as f64 / self.league_count as f64
    }
}

/// Starter points per position over the season window
#[derive(Debug, Clone, Serialize)]
pub struct PositionPointsReport {
    pub first_week: u32,
    pub last_week: u32,
    pub totals: BTreeMap<PositionBucket, f64>,
    pub starters_scanned: u32,
    pub unknown_players: BTreeSet<u32>,
    pub generated_at: DateTime<Utc>,
}

impl PositionPointsReport {
    /// Share of all starter points scored by a position, in percent
    pub fn share(&self, bucket: PositionBucket) -> f64 {
        let total: f64 = self.totals.values().sum();
        if total == 0.0 {
            return 0.0;
        }
        self.totals.get(&bucket).copied().unwrap_or(0.0) / total * 100.0
    }
}
