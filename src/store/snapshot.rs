//! Tournament data snapshot shared by the store backends
//!
//! Holds players and matches plus the id serial, and implements every store
//! query as a plain function over that data. Backends only decide where the
//! snapshot lives and how access to it is scoped.

use crate::error::{Result, TournamentError};
use crate::types::{Match, Player, PlayerId, WinTotal};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Complete persistent state of one tournament
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TournamentData {
    /// Next id to hand out; never rewound, even after players are cleared
    pub next_id: PlayerId,
    pub players: Vec<Player>,
    pub matches: Vec<Match>,
}

impl Default for TournamentData {
    fn default() -> Self {
        Self {
            next_id: 1,
            players: Vec::new(),
            matches: Vec::new(),
        }
    }
}

impl TournamentData {
    pub fn register_player(&mut self, name: &str) -> PlayerId {
        let id = self.next_id;
        self.next_id += 1;
        self.players.push(Player {
            id,
            name: name.to_string(),
            registered_at: Utc::now(),
        });
        id
    }

    pub fn clear_matches(&mut self) {
        self.matches.clear();
    }

    /// Remove all players along with any match that references them
    pub fn clear_players(&mut self) {
        let removed: HashSet<PlayerId> = self.players.drain(..).map(|p| p.id).collect();
        self.matches
            .retain(|m| !removed.contains(&m.winner_id) && !removed.contains(&m.loser_id));
    }

    pub fn find_player(&self, player_id: PlayerId) -> Result<&Player> {
        self.players
            .iter()
            .find(|p| p.id == player_id)
            .ok_or_else(|| TournamentError::PlayerNotFound { player_id }.into())
    }

    pub fn record_match(&mut self, winner_id: PlayerId, loser_id: PlayerId) -> Result<()> {
        if winner_id == loser_id {
            return Err(TournamentError::InvalidMatch {
                reason: format!("player {} cannot play against themselves", winner_id),
            }
            .into());
        }
        self.find_player(winner_id)?;
        self.find_player(loser_id)?;

        self.matches.push(Match {
            winner_id,
            loser_id,
            reported_at: Utc::now(),
        });
        Ok(())
    }

    pub fn win_count(&self, player_id: PlayerId) -> Result<u32> {
        let wins = self
            .matches
            .iter()
            .filter(|m| m.winner_id == player_id)
            .count();
        match_count(wins, player_id)
    }

    pub fn loss_count(&self, player_id: PlayerId) -> Result<u32> {
        let losses = self
            .matches
            .iter()
            .filter(|m| m.loser_id == player_id)
            .count();
        match_count(losses, player_id)
    }

    pub fn player_ids(&self) -> Vec<PlayerId> {
        self.players.iter().map(|p| p.id).collect()
    }

    /// Win totals for every player that has played at least one match.
    ///
    /// Ordered by wins descending, ties in registration order. Players with
    /// no recorded matches are not part of the aggregate.
    pub fn win_aggregate(&self) -> Result<Vec<WinTotal>> {
        let mut wins: HashMap<PlayerId, usize> = HashMap::new();
        for m in &self.matches {
            *wins.entry(m.winner_id).or_insert(0) += 1;
            wins.entry(m.loser_id).or_insert(0);
        }

        let known: HashSet<PlayerId> = self.players.iter().map(|p| p.id).collect();
        if let Some(dangling) = wins.keys().find(|id| !known.contains(id)) {
            return Err(TournamentError::DataInconsistency {
                reason: format!("match references unknown player {}", dangling),
            }
            .into());
        }

        let mut totals = Vec::with_capacity(wins.len());
        for player in &self.players {
            if let Some(&w) = wins.get(&player.id) {
                totals.push(WinTotal {
                    id: player.id,
                    name: player.name.clone(),
                    wins: match_count(w, player.id)?,
                });
            }
        }

        // Stable sort keeps registration order among equal win counts
        totals.sort_by(|a, b| b.wins.cmp(&a.wins));
        Ok(totals)
    }
}

/// Narrow a per-player match count to the width used in standings
fn match_count(count: usize, player_id: PlayerId) -> Result<u32> {
    u32::try_from(count).map_err(|_| {
        TournamentError::DataInconsistency {
            reason: format!(
                "player {} has {} matches, more than can be ranked",
                player_id, count
            ),
        }
        .into()
    })
}
