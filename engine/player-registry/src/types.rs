use serde::{Deserialize, Serialize};
use thiserror::Error;
use weekly_loader::PlayerEntry;

use crate::position::{normalize, Position, PositionBucket};

/// A known player, as loaded from the MFL player directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// MFL player ID
    pub id: u32,

    /// Player name as MFL stores it (e.g., "Brady, Tom")
    pub name: String,

    /// Primary position
    pub position: Position,

    /// Team abbreviation, when listed
    pub team: Option<String>,
}

impl Player {
    pub fn new(id: u32, name: impl Into<String>, position: Position) -> Self {
        Self { id, name: name.into(), position, team: None }
    }

    /// Name in reading order ("Brady, Tom" becomes "Tom Brady")
    pub fn display_name(&self) -> String {
        match self.name.split_once(',') {
            Some((last, first)) if !first.trim().is_empty() => {
                format!("{} {}", first.trim(), last.trim())
            }
            _ => self.name.trim().to_string(),
        }
    }

    /// Reporting bucket for this player's position
    pub fn bucket(&self) -> PositionBucket {
        normalize(self.position)
    }
}

impl From<PlayerEntry> for Player {
    fn from(entry: PlayerEntry) -> Self {
        Self {
            id: entry.id,
            name: entry.name,
            position: Position::from_code(&entry.position),
            team: entry.team,
        }
    }
}

/// Errors that can occur during player lookup
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlayerLookupError {
    #[error("Player {0} not found in registry")]
    PlayerNotFound(u32),
}
