//! Test fixtures and store doubles for integration testing

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use swiss_room::error::Result;
use swiss_room::store::{InMemoryPlayerStore, PlayerStore};
use swiss_room::types::{Player, PlayerId, WinTotal};
use swiss_room::{Tournament, TournamentError};

/// Tournament over a fresh in-memory store
pub fn create_test_tournament() -> Tournament {
    Tournament::new(Arc::new(InMemoryPlayerStore::new()))
}

/// Register every name and return the assigned ids in order
pub fn register_all(tournament: &Tournament, names: &[&str]) -> Vec<PlayerId> {
    names
        .iter()
        .map(|name| tournament.register_player(name).unwrap())
        .collect()
}

/// Store whose backend has gone away; every call fails
#[derive(Debug, Default)]
pub struct UnreachableStore {
    calls: AtomicUsize,
}

impl UnreachableStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn fail<T>(&self) -> Result<T> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(TournamentError::StoreUnavailable {
            message: "could not connect to server".to_string(),
        }
        .into())
    }
}

impl PlayerStore for UnreachableStore {
    fn clear_matches(&self) -> Result<()> {
        self.fail()
    }

    fn clear_players(&self) -> Result<()> {
        self.fail()
    }

    fn count_players(&self) -> Result<usize> {
        self.fail()
    }

    fn count_matches(&self) -> Result<usize> {
        self.fail()
    }

    fn register_player(&self, _name: &str) -> Result<PlayerId> {
        self.fail()
    }

    fn win_count(&self, _player_id: PlayerId) -> Result<u32> {
        self.fail()
    }

    fn loss_count(&self, _player_id: PlayerId) -> Result<u32> {
        self.fail()
    }

    fn record_match(&self, _winner_id: PlayerId, _loser_id: PlayerId) -> Result<()> {
        self.fail()
    }

    fn player_name(&self, _player_id: PlayerId) -> Result<String> {
        self.fail()
    }

    fn all_players(&self) -> Result<Vec<Player>> {
        self.fail()
    }

    fn all_player_ids(&self) -> Result<Vec<PlayerId>> {
        self.fail()
    }

    fn win_aggregate(&self) -> Result<Vec<WinTotal>> {
        self.fail()
    }
}

/// In-memory store whose win aggregate only lists players with at least one
/// win, like a view built from an inner join on the winner column
#[derive(Debug, Default)]
pub struct WinnersOnlyStore {
    inner: InMemoryPlayerStore,
}

impl WinnersOnlyStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PlayerStore for WinnersOnlyStore {
    fn clear_matches(&self) -> Result<()> {
        self.inner.clear_matches()
    }

    fn clear_players(&self) -> Result<()> {
        self.inner.clear_players()
    }

    fn count_players(&self) -> Result<usize> {
        self.inner.count_players()
    }

    fn count_matches(&self) -> Result<usize> {
        self.inner.count_matches()
    }

    fn register_player(&self, name: &str) -> Result<PlayerId> {
        self.inner.register_player(name)
    }

    fn win_count(&self, player_id: PlayerId) -> Result<u32> {
        self.inner.win_count(player_id)
    }

    fn loss_count(&self, player_id: PlayerId) -> Result<u32> {
        self.inner.loss_count(player_id)
    }

    fn record_match(&self, winner_id: PlayerId, loser_id: PlayerId) -> Result<()> {
        self.inner.record_match(winner_id, loser_id)
    }

    fn player_name(&self, player_id: PlayerId) -> Result<String> {
        self.inner.player_name(player_id)
    }

    fn all_players(&self) -> Result<Vec<Player>> {
        self.inner.all_players()
    }

    fn all_player_ids(&self) -> Result<Vec<PlayerId>> {
        self.inner.all_player_ids()
    }

    fn win_aggregate(&self) -> Result<Vec<WinTotal>> {
        Ok(self
            .inner
            .win_aggregate()?
            .into_iter()
            .filter(|total| total.wins > 0)
            .collect())
    }
}
