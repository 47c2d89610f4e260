use crate::types::{Player, PlayerLookupError};
use std::collections::HashMap;
use std::path::Path;
use tracing::{info, warn};

/// Player Registry - Read-only lookup of players by MFL ID
///
/// Built once from the player directory and never mutated afterwards, so a
/// single instance can be shared by any number of concurrent reports.
#[derive(Debug, Clone, Default)]
pub struct PlayerRegistry {
    /// Players in directory order
    players: Vec<Player>,

    /// Map from player ID to index in `players`
    by_id: HashMap<u32, usize>,
}

impl PlayerRegistry {
    /// Build the registry from an already-decoded player list
    ///
    /// When an ID appears more than once the first entry wins.
    pub fn from_players(players: impl IntoIterator<Item = Player>) -> Self {
        let mut registry = Self::default();

        for player in players {
            if registry.by_id.contains_key(&player.id) {
                warn!("Duplicate player ID {} ({}), keeping first entry", player.id, player.name);
                continue;
            }
            registry.by_id.insert(player.id, registry.players.len());
            registry.players.push(player);
        }

        registry
    }

    /// Load the MFL player directory from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(file_path: P) -> weekly_loader::Result<Self> {
        info!("Loading player directory from: {:?}", file_path.as_ref());

        let entries = weekly_loader::load_player_directory(&file_path)?;
        let registry = Self::from_players(entries.into_iter().map(Player::from));

        info!("Registry loaded with {} players", registry.len());
        Ok(registry)
    }

    /// Get a player by ID
    pub fn find_by_id(&self, id: u32) -> Option<&Player> {
        self.by_id.get(&id).map(|&index| &self.players[index])
    }

    /// Get a player by ID, treating absence as an error
    pub fn find_by_id_or_fail(&self, id: u32) -> Result<&Player, PlayerLookupError> {
        self.find_by_id(id).ok_or(PlayerLookupError::PlayerNotFound(id))
    }

    /// All players in directory order
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Search for players by partial name match
    pub fn search_players(&self, query: &str) -> Vec<&Player> {
        let query_lower = query.to_lowercase();
        self.players.iter().filter(|p| p.name.to_lowercase().contains(&query_lower)).collect()
    }
}
