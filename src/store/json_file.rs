//! JSON file backed player store
//!
//! Each operation opens the snapshot file, reads it, optionally writes it back
//! and closes it again. Nothing is cached between calls, so separate processes
//! pointed at the same file see each other's writes.

use crate::error::{Result, TournamentError};
use crate::store::player_store::PlayerStore;
use crate::store::snapshot::TournamentData;
use crate::types::{Player, PlayerId, WinTotal};
use std::fs;
use std::io::ErrorKind as IoErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Player store persisted as a pretty-printed JSON document
#[derive(Debug, Clone)]
pub struct JsonFilePlayerStore {
    path: PathBuf,
}

impl JsonFilePlayerStore {
    /// Create a store for the given file. The file is created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the current snapshot; a missing file is an empty tournament
    pub fn load(&self) -> Result<TournamentData> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == IoErrorKind::NotFound => {
                debug!("Store file {} not found, starting empty", self.path.display());
                return Ok(TournamentData::default());
            }
            Err(e) => {
                return Err(TournamentError::StoreUnavailable {
                    message: format!("failed to read {}: {}", self.path.display(), e),
                }
                .into())
            }
        };

        serde_json::from_str(&contents).map_err(|e| {
            TournamentError::StoreUnavailable {
                message: format!("failed to parse {}: {}", self.path.display(), e),
            }
            .into()
        })
    }

    fn save(&self, data: &TournamentData) -> Result<()> {
        let json = serde_json::to_string_pretty(data).map_err(|e| {
            TournamentError::StoreUnavailable {
                message: format!("failed to serialize tournament: {}", e),
            }
        })?;

        // Write next to the target and rename so a crash never leaves a torn file
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, json)
            .and_then(|_| fs::rename(&tmp_path, &self.path))
            .map_err(|e| TournamentError::StoreUnavailable {
                message: format!("failed to write {}: {}", self.path.display(), e),
            })?;

        Ok(())
    }

    /// Load, apply a mutation and persist the result
    fn modify<T>(&self, f: impl FnOnce(&mut TournamentData) -> Result<T>) -> Result<T> {
        let mut data = self.load()?;
        let value = f(&mut data)?;
        self.save(&data)?;
        Ok(value)
    }
}

impl PlayerStore for JsonFilePlayerStore {
    fn clear_matches(&self) -> Result<()> {
        self.modify(|data| {
            data.clear_matches();
            Ok(())
        })
    }

    fn clear_players(&self) -> Result<()> {
        self.modify(|data| {
            data.clear_players();
            Ok(())
        })
    }

    fn count_players(&self) -> Result<usize> {
        Ok(self.load()?.players.len())
    }

    fn count_matches(&self) -> Result<usize> {
        Ok(self.load()?.matches.len())
    }

    fn register_player(&self, name: &str) -> Result<PlayerId> {
        self.modify(|data| Ok(data.register_player(name)))
    }

    fn win_count(&self, player_id: PlayerId) -> Result<u32> {
        self.load()?.win_count(player_id)
    }

    fn loss_count(&self, player_id: PlayerId) -> Result<u32> {
        self.load()?.loss_count(player_id)
    }

    fn record_match(&self, winner_id: PlayerId, loser_id: PlayerId) -> Result<()> {
        self.modify(|data| data.record_match(winner_id, loser_id))
    }

    fn player_name(&self, player_id: PlayerId) -> Result<String> {
        Ok(self.load()?.find_player(player_id)?.name.clone())
    }

    fn all_players(&self) -> Result<Vec<Player>> {
        Ok(self.load()?.players)
    }

    fn all_player_ids(&self) -> Result<Vec<PlayerId>> {
        Ok(self.load()?.player_ids())
    }

    fn win_aggregate(&self) -> Result<Vec<WinTotal>> {
        self.load()?.win_aggregate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{error_kind, ErrorKind};

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFilePlayerStore::new(dir.path().join("tournament.json"));

        assert_eq!(store.count_players().unwrap(), 0);
        assert_eq!(store.count_matches().unwrap(), 0);
        assert!(!store.path().exists());
    }

    #[test]
    fn test_state_survives_between_handles() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tournament.json");

        let a;
        let b;
        {
            let store = JsonFilePlayerStore::new(&path);
            a = store.register_player("Alice").unwrap();
            b = store.register_player("Bob").unwrap();
            store.record_match(a, b).unwrap();
        }

        let reopened = JsonFilePlayerStore::new(&path);
        assert_eq!(reopened.count_players().unwrap(), 2);
        assert_eq!(reopened.count_matches().unwrap(), 1);
        assert_eq!(reopened.player_name(b).unwrap(), "Bob");
        assert_eq!(reopened.win_aggregate_ids().unwrap(), vec![a, b]);
    }

    #[test]
    fn test_failed_mutation_is_not_persisted() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFilePlayerStore::new(dir.path().join("tournament.json"));
        let a = store.register_player("Alice").unwrap();

        assert!(store.record_match(a, 77).is_err());
        assert_eq!(store.count_matches().unwrap(), 0);
    }

    #[test]
    fn test_corrupt_file_is_store_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tournament.json");
        fs::write(&path, "{ not json").unwrap();

        let store = JsonFilePlayerStore::new(&path);
        let err = store.count_players().unwrap_err();
        assert_eq!(error_kind(&err), Some(ErrorKind::StoreUnavailable));
    }

    #[test]
    fn test_write_failure_is_store_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("tournament.json");
        let store = JsonFilePlayerStore::new(&path);

        let err = store.register_player("Alice").unwrap_err();
        assert_eq!(error_kind(&err), Some(ErrorKind::StoreUnavailable));
        assert!(!path.exists());
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn test_ids_not_reused_after_clear() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFilePlayerStore::new(dir.path().join("tournament.json"));

        let first = store.register_player("Alice").unwrap();
        store.clear_players().unwrap();
        let second = store.register_player("Bob").unwrap();

        assert!(second > first);
        assert_eq!(store.count_players().unwrap(), 1);
    }
}
