//! Standings and Swiss pairing
//!
//! Both components are stateless and read everything they need from an
//! injected [`crate::store::PlayerStore`] on each call.

pub mod pairing;
pub mod standings;

// Re-export commonly used types
pub use pairing::{merge_ranking, pair_adjacent, PairingGenerator};
pub use standings::StandingsCalculator;
