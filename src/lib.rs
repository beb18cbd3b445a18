//! Swiss Room - Swiss-system tournament standings and pairing
//!
//! This crate registers players, records match results through a pluggable
//! player store, ranks players by wins and pairs them by adjacent rank for the
//! next round.

pub mod config;
pub mod error;
pub mod ranking;
pub mod store;
pub mod tournament;
pub mod types;

// Re-export commonly used types and traits
pub use error::{ErrorKind, Result, TournamentError};
pub use types::*;

// Re-export key components
pub use ranking::{PairingGenerator, StandingsCalculator};
pub use store::{InMemoryPlayerStore, JsonFilePlayerStore, PlayerStore};
pub use tournament::Tournament;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
