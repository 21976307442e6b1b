//! Saving and restoring the monster roster.
//!
//! Only monster records are persisted; terrain comes from the scenario and is
//! rebuilt before a snapshot is applied.

use std::fs;
use std::path::{Path, PathBuf};

use ai_core::MonsterRecord;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::level::Level;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Monster roster at the start of a turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelSnapshot {
    pub turn: u64,
    pub monsters: Vec<MonsterRecord>,
}

impl LevelSnapshot {
    pub fn capture(level: &Level, turn: u64) -> Self {
        Self {
            turn,
            monsters: level.to_records(),
        }
    }

    /// Replaces `level`'s roster with the saved monsters.
    pub fn apply(&self, level: &mut Level) -> crate::Result<()> {
        level.restore_records(&self.monsters)
    }
}

/// Stores snapshots as `{name}.json` files in one directory.
pub struct SnapshotStore {
    base_dir: PathBuf,
}

impl SnapshotStore {
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self, SnapshotError> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    fn snapshot_path(&self, name: &str) -> PathBuf {
        self.base_dir.join(format!("{}.json", name))
    }

    pub fn save(&self, name: &str, snapshot: &LevelSnapshot) -> Result<(), SnapshotError> {
        let path = self.snapshot_path(name);
        let temp_path = path.with_extension("json.tmp");

        let json = serde_json::to_vec_pretty(snapshot)?;
        fs::write(&temp_path, json)?;
        fs::rename(&temp_path, &path)?;

        tracing::debug!(turn = snapshot.turn, path = %path.display(), "saved snapshot");
        Ok(())
    }

    pub fn load(&self, name: &str) -> Result<Option<LevelSnapshot>, SnapshotError> {
        let path = self.snapshot_path(name);
        if !path.exists() {
            return Ok(None);
        }

        let bytes = fs::read(&path)?;
        let snapshot: LevelSnapshot = serde_json::from_slice(&bytes)?;

        tracing::debug!(turn = snapshot.turn, path = %path.display(), "loaded snapshot");
        Ok(Some(snapshot))
    }
}

#[cfg(test)]
mod tests {
    use ai_core::{Position, Species};

    use super::*;
    use crate::level::TerrainGrid;

    #[test]
    fn save_then_load_restores_the_roster() {
        let dir = tempfile::tempdir().unwrap();
        let store = SnapshotStore::new(dir.path().join("saves")).unwrap();

        let terrain = TerrainGrid::from_rows(&["......"]).unwrap();
        let mut level = Level::new(terrain.clone());
        level.spawn(Species::lookup('W'), Position::new(2, 0)).unwrap();
        level.spawn(Species::lookup('N'), Position::new(4, 0)).unwrap();

        store.save("slot1", &LevelSnapshot::capture(&level, 17)).unwrap();
        let loaded = store.load("slot1").unwrap().unwrap();
        assert_eq!(loaded.turn, 17);

        let mut fresh = Level::new(terrain);
        loaded.apply(&mut fresh).unwrap();
        assert_eq!(fresh.monsters(), level.monsters());
        assert_eq!(fresh.occupant(Position::new(4, 0)), level.occupant(Position::new(4, 0)));
    }

    #[test]
    fn missing_snapshot_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = SnapshotStore::new(dir.path()).unwrap();
        assert!(store.load("nothing").unwrap().is_none());
    }

    #[test]
    fn corrupt_snapshot_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = SnapshotStore::new(dir.path()).unwrap();
        fs::write(dir.path().join("bad.json"), b"{ not json").unwrap();
        assert!(matches!(store.load("bad"), Err(SnapshotError::Json(_))));
    }
}
