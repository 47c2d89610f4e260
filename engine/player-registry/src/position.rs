//! Raw MFL positions and the buckets they are reported under

use serde::{Deserialize, Serialize};
use std::fmt;

/// A player's position as listed in the MFL directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Position {
    #[serde(rename = "QB")]
    Quarterback,
    #[serde(rename = "RB")]
    RunningBack,
    #[serde(rename = "WR")]
    WideReceiver,
    #[serde(rename = "TE")]
    TightEnd,
    #[serde(rename = "PK")]
    Kicker,
    #[serde(rename = "CB")]
    Cornerback,
    #[serde(rename = "S")]
    Safety,
    #[serde(rename = "DT")]
    DefensiveTackle,
    #[serde(rename = "DE")]
    DefensiveEnd,
    #[serde(rename = "LB")]
    Linebacker,
    #[serde(rename = "DB")]
    DefensiveBack,
    #[serde(rename = "DL")]
    DefensiveLineman,
    #[serde(rename = "UNKNOWN")]
    Unknown,
}

impl Position {
    /// Parse an MFL position code. Unrecognized codes map to `Unknown`.
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_uppercase().as_str() {
            "QB" => Position::Quarterback,
            "RB" => Position::RunningBack,
            "WR" => Position::WideReceiver,
            "TE" => Position::TightEnd,
            "PK" | "K" => Position::Kicker,
            "CB" => Position::Cornerback,
            "S" => Position::Safety,
            "DT" => Position::DefensiveTackle,
            "DE" => Position::DefensiveEnd,
            "LB" => Position::Linebacker,
            "DB" => Position::DefensiveBack,
            "DL" => Position::DefensiveLineman,
            _ => Position::Unknown,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Position::Quarterback => "QB",
            Position::RunningBack => "RB",
            Position::WideReceiver => "WR",
            Position::TightEnd => "TE",
            Position::Kicker => "PK",
            Position::Cornerback => "CB",
            Position::Safety => "S",
            Position::DefensiveTackle => "DT",
            Position::DefensiveEnd => "DE",
            Position::Linebacker => "LB",
            Position::DefensiveBack => "DB",
            Position::DefensiveLineman => "DL",
            Position::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Normalized position used as the key of every report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PositionBucket {
    #[serde(rename = "QB")]
    Quarterback,
    #[serde(rename = "RB")]
    RunningBack,
    #[serde(rename = "WR")]
    WideReceiver,
    #[serde(rename = "TE")]
    TightEnd,
    #[serde(rename = "PK")]
    Kicker,
    #[serde(rename = "DB")]
    DefensiveBack,
    #[serde(rename = "LB")]
    Linebacker,
    #[serde(rename = "DL")]
    DefensiveLineman,
    #[serde(rename = "UNKNOWN")]
    Unknown,
}

impl PositionBucket {
    pub const ALL: [PositionBucket; 9] = [
        PositionBucket::Quarterback,
        PositionBucket::RunningBack,
        PositionBucket::WideReceiver,
        PositionBucket::TightEnd,
        PositionBucket::Kicker,
        PositionBucket::DefensiveBack,
        PositionBucket::Linebacker,
        PositionBucket::DefensiveLineman,
        PositionBucket::Unknown,
    ];

    /// Parse a bucket from either a bucket code or a raw position code
    pub fn from_code(code: &str) -> Self {
        normalize(Position::from_code(code))
    }

    /// Code used in export file names (e.g. "QB_week1.json")
    pub fn code(&self) -> &'static str {
        Position::from(*self).code()
    }

    /// Number of weekly finishers that count as starters at this position
    ///
    /// Returns `None` for positions that have no starter slots.
    pub fn starter_limit(&self) -> Option<usize> {
        match self {
            PositionBucket::Quarterback | PositionBucket::TightEnd | PositionBucket::Kicker => {
                Some(12)
            }
            PositionBucket::RunningBack => Some(24),
            PositionBucket::WideReceiver
            | PositionBucket::DefensiveBack
            | PositionBucket::Linebacker
            | PositionBucket::DefensiveLineman => Some(36),
            PositionBucket::Unknown => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PositionBucket::Quarterback => "Quarterback",
            PositionBucket::RunningBack => "Running Back",
            PositionBucket::WideReceiver => "Wide Receiver",
            PositionBucket::TightEnd => "Tight End",
            PositionBucket::Kicker => "Kicker",
            PositionBucket::DefensiveBack => "Defensive Back",
            PositionBucket::Linebacker => "Linebacker",
            PositionBucket::DefensiveLineman => "Defensive Lineman",
            PositionBucket::Unknown => "Unknown",
        }
    }
}

impl From<PositionBucket> for Position {
    fn from(bucket: PositionBucket) -> Self {
        match bucket {
            PositionBucket::Quarterback => Position::Quarterback,
            PositionBucket::RunningBack => Position::RunningBack,
            PositionBucket::WideReceiver => Position::WideReceiver,
            PositionBucket::TightEnd => Position::TightEnd,
            PositionBucket::Kicker => Position::Kicker,
            PositionBucket::DefensiveBack => Position::DefensiveBack,
            PositionBucket::Linebacker => Position::Linebacker,
            PositionBucket::DefensiveLineman => Position::DefensiveLineman,
            PositionBucket::Unknown => Position::Unknown,
        }
    }
}

impl fmt::Display for PositionBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Map a raw position to its reporting bucket
///
/// Cornerbacks and safeties report as defensive backs, tackles and ends as
/// defensive linemen.
pub fn normalize(position: Position) -> PositionBucket {
    match position {
        Position::Quarterback => PositionBucket::Quarterback,
        Position::RunningBack => PositionBucket::RunningBack,
        Position::WideReceiver => PositionBucket::WideReceiver,
        Position::TightEnd => PositionBucket::TightEnd,
        Position::Kicker => PositionBucket::Kicker,
        Position::Cornerback | Position::Safety | Position::DefensiveBack => {
            PositionBucket::DefensiveBack
        }
        Position::DefensiveTackle | Position::DefensiveEnd | Position::DefensiveLineman => {
            PositionBucket::DefensiveLineman
        }
        Position::Linebacker => PositionBucket::Linebacker,
        Position::Unknown => PositionBucket::Unknown,
    }
}
