//! Next-round pairing generation
//!
//! Players are paired strictly by adjacent rank: first against second, third
//! against fourth, and so on. Rematches are not avoided.

use crate::error::{Result, TournamentError};
use crate::store::PlayerStore;
use crate::types::{Pairing, PlayerId};
use std::collections::HashSet;
use tracing::debug;

/// Produces Swiss pairings for the next round
#[derive(Debug, Clone, Copy, Default)]
pub struct PairingGenerator;

impl PairingGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Generate pairings for the next round from the store's current state.
    ///
    /// Fails with [`TournamentError::OddPlayerCount`] when the ranking has an
    /// odd length; no bye is assigned.
    pub fn generate_pairings<S: PlayerStore + ?Sized>(
        &self,
        store: &S,
    ) -> Result<Vec<Pairing>> {
        let ranking = self.ranking(store)?;
        let pairs = pair_adjacent(&ranking)?;

        let mut pairings = Vec::with_capacity(pairs.len());
        for (id1, id2) in pairs {
            pairings.push(Pairing {
                id1,
                name1: store.player_name(id1)?,
                id2,
                name2: store.player_name(id2)?,
            });
        }

        debug!("Generated {} pairings", pairings.len());
        Ok(pairings)
    }

    /// Player ids in pairing order.
    ///
    /// With no matches this is plain store order. Otherwise it is the win
    /// aggregate followed by every remaining player in store order.
    pub fn ranking<S: PlayerStore + ?Sized>(&self, store: &S) -> Result<Vec<PlayerId>> {
        if store.count_matches()? == 0 {
            return store.all_player_ids();
        }

        let all_ids = store.all_player_ids()?;
        let aggregate = store.win_aggregate_ids()?;
        merge_ranking(&aggregate, &all_ids)
    }
}

/// Combine the aggregate ordering with the full player list.
///
/// Aggregate ids come first in their given order; ids that appear only in
/// `all_ids` follow in `all_ids` order. Every id appears exactly once.
pub fn merge_ranking(aggregate: &[PlayerId], all_ids: &[PlayerId]) -> Result<Vec<PlayerId>> {
    let known: HashSet<PlayerId> = all_ids.iter().copied().collect();
    let mut seen = HashSet::with_capacity(all_ids.len());
    let mut ranking = Vec::with_capacity(all_ids.len());

    for &id in aggregate {
        if !known.contains(&id) {
            return Err(TournamentError::DataInconsistency {
                reason: format!("ranked player {} is not registered", id),
            }
            .into());
        }
        if seen.insert(id) {
            ranking.push(id);
        }
    }

    ranking.extend(all_ids.iter().copied().filter(|id| seen.insert(*id)));
    Ok(ranking)
}

/// Split a ranking into consecutive pairs
pub fn pair_adjacent(ranking: &[PlayerId]) -> Result<Vec<(PlayerId, PlayerId)>> {
    if ranking.len() % 2 != 0 {
        return Err(TournamentError::OddPlayerCount {
            count: ranking.len(),
        }
        .into());
    }

    Ok(ranking.chunks_exact(2).map(|pair| (pair[0], pair[1])).collect())
}
