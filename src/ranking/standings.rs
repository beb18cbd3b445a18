//! Standings computation
//!
//! Ranks players by wins using the store's win aggregate. Ties keep the order
//! the store reports; no secondary tie-break is applied.

use crate::error::{Result, TournamentError};
use crate::store::PlayerStore;
use crate::types::{StandingRow, UnplayedPolicy};
use std::collections::HashSet;
use tracing::{debug, warn};

/// Derives ranked standings from a player store snapshot
#[derive(Debug, Clone, Copy, Default)]
pub struct StandingsCalculator {
    policy: UnplayedPolicy,
}

impl StandingsCalculator {
    pub fn new(policy: UnplayedPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> UnplayedPolicy {
        self.policy
    }

    /// Compute the standings table, first place first.
    ///
    /// Before any match is recorded every player is listed at 0/0 in store
    /// order. Afterwards rows follow the win aggregate, and players the
    /// aggregate leaves out are either appended in store order or dropped,
    /// depending on the configured [`UnplayedPolicy`].
    pub fn compute_standings<S: PlayerStore + ?Sized>(
        &self,
        store: &S,
    ) -> Result<Vec<StandingRow>> {
        if store.count_matches()? == 0 {
            let rows: Vec<StandingRow> = store
                .all_players()?
                .into_iter()
                .map(|player| StandingRow::unplayed(player.id, player.name))
                .collect();
            debug!("No matches recorded, {} players at 0/0", rows.len());
            return Ok(rows);
        }

        let totals = store.win_aggregate()?;
        let mut rows = Vec::with_capacity(totals.len());
        for total in totals {
            let wins = store.win_count(total.id)?;
            let losses = store.loss_count(total.id)?;
            if wins != total.wins {
                return Err(TournamentError::DataInconsistency {
                    reason: format!(
                        "aggregate reports {} wins for player {} but {} were counted",
                        total.wins, total.id, wins
                    ),
                }
                .into());
            }

            rows.push(StandingRow {
                id: total.id,
                name: total.name,
                wins,
                matches_played: wins + losses,
            });
        }

        match self.policy {
            UnplayedPolicy::Include => {
                let ranked: HashSet<_> = rows.iter().map(|row| row.id).collect();
                let mut appended = 0;
                for player in store.all_players()? {
                    if ranked.contains(&player.id) {
                        continue;
                    }
                    let wins = store.win_count(player.id)?;
                    let losses = store.loss_count(player.id)?;
                    rows.push(StandingRow {
                        id: player.id,
                        name: player.name,
                        wins,
                        matches_played: wins + losses,
                    });
                    appended += 1;
                }
                if appended > 0 {
                    debug!("Appended {} players missing from the win aggregate", appended);
                    // Stable: aggregate order is kept among equal win counts
                    rows.sort_by(|a, b| b.wins.cmp(&a.wins));
                }
            }
            UnplayedPolicy::AggregateOnly => {
                let missing = store.count_players()?.saturating_sub(rows.len());
                if missing > 0 {
                    warn!(
                        "{} players have no matches and are omitted from standings",
                        missing
                    );
                }
            }
        }

        debug!("Computed standings with {} rows", rows.len());
        Ok(rows)
    }
}
