//! Player store interface and in-memory implementation
//!
//! This module defines the persistence collaborator consumed by standings and
//! pairing, along with an in-memory implementation for tests and one-shot runs.

use crate::error::{Result, TournamentError};
use crate::store::snapshot::TournamentData;
use crate::types::{Player, PlayerId, WinTotal};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::debug;

/// Trait for tournament storage operations
///
/// Every call is self-contained: implementations acquire whatever resource they
/// need, run the query and release it before returning.
#[cfg_attr(test, mockall::automock)]
pub trait PlayerStore: Send + Sync {
    /// Remove every recorded match
    fn clear_matches(&self) -> Result<()>;

    /// Remove every player (and matches that reference them)
    fn clear_players(&self) -> Result<()>;

    /// Number of registered players
    fn count_players(&self) -> Result<usize>;

    /// Number of recorded matches
    fn count_matches(&self) -> Result<usize>;

    /// Register a player and return the id the store assigned
    fn register_player(&self, name: &str) -> Result<PlayerId>;

    /// Number of matches the player has won
    fn win_count(&self, player_id: PlayerId) -> Result<u32>;

    /// Number of matches the player has lost
    fn loss_count(&self, player_id: PlayerId) -> Result<u32>;

    /// Record the outcome of a single match
    fn record_match(&self, winner_id: PlayerId, loser_id: PlayerId) -> Result<()>;

    /// Look up a player's registered name
    fn player_name(&self, player_id: PlayerId) -> Result<String>;

    /// All players in store order
    fn all_players(&self) -> Result<Vec<Player>>;

    /// All player ids in store order
    fn all_player_ids(&self) -> Result<Vec<PlayerId>>;

    /// Win totals for players that have played, ordered by wins descending
    fn win_aggregate(&self) -> Result<Vec<WinTotal>>;

    /// Ids from [`PlayerStore::win_aggregate`], in the same order
    fn win_aggregate_ids(&self) -> Result<Vec<PlayerId>> {
        Ok(self
            .win_aggregate()?
            .into_iter()
            .map(|total| total.id)
            .collect())
    }
}

/// In-memory player store implementation
#[derive(Debug, Default)]
pub struct InMemoryPlayerStore {
    data: RwLock<TournamentData>,
}

impl InMemoryPlayerStore {
    /// Create a new, empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, TournamentData>> {
        self.data.read().map_err(|_| {
            TournamentError::StoreUnavailable {
                message: "Failed to acquire store read lock".to_string(),
            }
            .into()
        })
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, TournamentData>> {
        self.data.write().map_err(|_| {
            TournamentError::StoreUnavailable {
                message: "Failed to acquire store write lock".to_string(),
            }
            .into()
        })
    }
}

impl PlayerStore for InMemoryPlayerStore {
    fn clear_matches(&self) -> Result<()> {
        self.write()?.clear_matches();
        Ok(())
    }

    fn clear_players(&self) -> Result<()> {
        self.write()?.clear_players();
        Ok(())
    }

    fn count_players(&self) -> Result<usize> {
        Ok(self.read()?.players.len())
    }

    fn count_matches(&self) -> Result<usize> {
        Ok(self.read()?.matches.len())
    }

    fn register_player(&self, name: &str) -> Result<PlayerId> {
        let id = self.write()?.register_player(name);
        debug!("In-memory store assigned id {} to '{}'", id, name);
        Ok(id)
    }

    fn win_count(&self, player_id: PlayerId) -> Result<u32> {
        self.read()?.win_count(player_id)
    }

    fn loss_count(&self, player_id: PlayerId) -> Result<u32> {
        self.read()?.loss_count(player_id)
    }

    fn record_match(&self, winner_id: PlayerId, loser_id: PlayerId) -> Result<()> {
        self.write()?.record_match(winner_id, loser_id)
    }

    fn player_name(&self, player_id: PlayerId) -> Result<String> {
        Ok(self.read()?.find_player(player_id)?.name.clone())
    }

    fn all_players(&self) -> Result<Vec<Player>> {
        Ok(self.read()?.players.clone())
    }

    fn all_player_ids(&self) -> Result<Vec<PlayerId>> {
        Ok(self.read()?.player_ids())
    }

    fn win_aggregate(&self) -> Result<Vec<WinTotal>> {
        self.read()?.win_aggregate()
    }
}
