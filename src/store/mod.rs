//! Persistence collaborator for players and matches
//!
//! This module defines the store interface consumed by standings and pairing,
//! with an in-memory backend and a JSON file backend.

pub mod json_file;
pub mod player_store;
pub mod snapshot;

use crate::config::{StoreBackend, StoreSettings};
use std::sync::Arc;

// Re-export commonly used types
pub use json_file::JsonFilePlayerStore;
pub use player_store::{InMemoryPlayerStore, PlayerStore};
pub use snapshot::TournamentData;

#[cfg(test)]
pub use player_store::MockPlayerStore;

/// Open the store selected by the configuration
pub fn open_store(settings: &StoreSettings) -> Arc<dyn PlayerStore> {
    match settings.backend {
        StoreBackend::Memory => Arc::new(InMemoryPlayerStore::new()),
        StoreBackend::Json => Arc::new(JsonFilePlayerStore::new(settings.path.clone())),
    }
}
