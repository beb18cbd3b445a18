//! Tournament facade
//!
//! Ties an injected player store to the standings calculator and the pairing
//! generator, and exposes the operations a tournament organiser runs between
//! rounds.

use crate::config::AppConfig;
use crate::error::Result;
use crate::ranking::{PairingGenerator, StandingsCalculator};
use crate::store::PlayerStore;
use crate::types::{Pairing, PlayerId, StandingRow, UnplayedPolicy};
use std::sync::Arc;
use tracing::{debug, info};

/// A Swiss-system tournament backed by a player store
#[derive(Clone)]
pub struct Tournament {
    /// Persistence collaborator, shared with other handles
    store: Arc<dyn PlayerStore>,
    /// Standings calculator
    standings: StandingsCalculator,
    /// Pairing generator
    pairing: PairingGenerator,
}

impl Tournament {
    /// Create a tournament with the default standings policy
    pub fn new(store: Arc<dyn PlayerStore>) -> Self {
        Self::with_policy(store, UnplayedPolicy::default())
    }

    /// Create a tournament with an explicit standings policy
    pub fn with_policy(store: Arc<dyn PlayerStore>, policy: UnplayedPolicy) -> Self {
        Self {
            store,
            standings: StandingsCalculator::new(policy),
            pairing: PairingGenerator::new(),
        }
    }

    /// Create a tournament configured from application settings
    pub fn from_config(store: Arc<dyn PlayerStore>, config: &AppConfig) -> Self {
        Self::with_policy(store, config.standings.unplayed_policy)
    }

    pub fn store(&self) -> &Arc<dyn PlayerStore> {
        &self.store
    }

    pub fn policy(&self) -> UnplayedPolicy {
        self.standings.policy()
    }

    /// Remove all match records
    pub fn delete_matches(&self) -> Result<()> {
        self.store.clear_matches()?;
        info!("Deleted all matches");
        Ok(())
    }

    /// Remove all players (and any matches they played)
    pub fn delete_players(&self) -> Result<()> {
        self.store.clear_players()?;
        info!("Deleted all players");
        Ok(())
    }

    pub fn count_players(&self) -> Result<usize> {
        self.store.count_players()
    }

    pub fn count_matches(&self) -> Result<usize> {
        self.store.count_matches()
    }

    /// Register a player; the store assigns the id
    pub fn register_player(&self, name: &str) -> Result<PlayerId> {
        let id = self.store.register_player(name)?;
        info!("Registered player '{}' with id {}", name, id);
        Ok(id)
    }

    /// Record the outcome of a single match
    pub fn report_match(&self, winner_id: PlayerId, loser_id: PlayerId) -> Result<()> {
        self.store.record_match(winner_id, loser_id)?;
        info!("Recorded match: {} beat {}", winner_id, loser_id);
        Ok(())
    }

    /// Current standings, first place first
    pub fn player_standings(&self) -> Result<Vec<StandingRow>> {
        let standings = self.standings.compute_standings(self.store.as_ref())?;
        debug!("Standings: {:?}", standings);
        Ok(standings)
    }

    /// Pairings for the next round
    pub fn swiss_pairings(&self) -> Result<Vec<Pairing>> {
        let pairings = self.pairing.generate_pairings(self.store.as_ref())?;
        for pairing in &pairings {
            debug!("Pairing: {}", pairing);
        }
        Ok(pairings)
    }
}
