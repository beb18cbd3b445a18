//! Common types used throughout the tournament service

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for players, assigned by the store
pub type PlayerId = u64;

/// A registered tournament participant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub registered_at: DateTime<Utc>,
}

/// Outcome of a single match. Draws are not modelled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub winner_id: PlayerId,
    pub loser_id: PlayerId,
    pub reported_at: DateTime<Utc>,
}

/// One entry of the store's win aggregate read model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinTotal {
    pub id: PlayerId,
    pub name: String,
    pub wins: u32,
}

/// A player's row in the standings table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingRow {
    pub id: PlayerId,
    pub name: String,
    pub wins: u32,
    /// Always `wins + losses`
    pub matches_played: u32,
}

impl StandingRow {
    /// Row for a player who has not played yet
    pub fn unplayed(id: PlayerId, name: String) -> Self {
        Self {
            id,
            name,
            wins: 0,
            matches_played: 0,
        }
    }
}

/// Two players drawn to meet in the next round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pairing {
    pub id1: PlayerId,
    pub name1: String,
    pub id2: PlayerId,
    pub name2: String,
}

impl Pairing {
    pub fn ids(&self) -> (PlayerId, PlayerId) {
        (self.id1, self.id2)
    }
}

impl fmt::Display for Pairing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) vs {} ({})",
            self.name1, self.id1, self.name2, self.id2
        )
    }
}

/// How standings treat players missing from the win aggregate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnplayedPolicy {
    /// Append players absent from the aggregate with a 0/0 record
    #[default]
    Include,
    /// Report only what the aggregate returns
    AggregateOnly,
}

impl fmt::Display for UnplayedPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnplayedPolicy::Include => write!(f, "include"),
            UnplayedPolicy::AggregateOnly => write!(f, "aggregate_only"),
        }
    }
}

impl std::str::FromStr for UnplayedPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "include" => Ok(UnplayedPolicy::Include),
            "aggregate_only" | "aggregate-only" => Ok(UnplayedPolicy::AggregateOnly),
            other => Err(format!("unknown unplayed policy: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pairing_display() {
        let pairing = Pairing {
            id1: 1,
            name1: "Twilight Sparkle".to_string(),
            id2: 2,
            name2: "Fluttershy".to_string(),
        };
        assert_eq!(pairing.to_string(), "Twilight Sparkle (1) vs Fluttershy (2)");
        assert_eq!(pairing.ids(), (1, 2));
    }

    #[test]
    fn test_unplayed_policy_parse() {
        assert_eq!(
            "include".parse::<UnplayedPolicy>().unwrap(),
            UnplayedPolicy::Include
        );
        assert_eq!(
            "Aggregate-Only".parse::<UnplayedPolicy>().unwrap(),
            UnplayedPolicy::AggregateOnly
        );
        assert!("sometimes".parse::<UnplayedPolicy>().is_err());
        assert_eq!(UnplayedPolicy::default(), UnplayedPolicy::Include);
    }
}
