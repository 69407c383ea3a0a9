// SPDX-License-Identifier: Apache-2.0
//! Filesystem-backed [`StatsStore`]: a single `stats.json` under the
//! platform config directory. Saves go through a temp-file rename so a
//! crash mid-write never leaves a half-written ledger behind.

use directories::ProjectDirs;
use flarb_app_core::stats::{StatsError, StatsStore};
use std::fs;
use std::path::PathBuf;

/// Stats blob stored as one JSON file in a fixed directory.
pub struct FsStatsStore {
    path: PathBuf,
}

impl FsStatsStore {
    /// Create a store under the user config directory
    /// (e.g., `~/.config/Flarb/stats.json`).
    pub fn new() -> Result<Self, StatsError> {
        let proj = ProjectDirs::from("dev", "flarb", "Flarb")
            .ok_or_else(|| StatsError::Other("could not resolve config dir".into()))?;
        Self::with_dir(proj.config_dir().to_path_buf())
    }

    /// Create a store under an explicit directory (tests, sandboxes).
    pub fn with_dir(dir: PathBuf) -> Result<Self, StatsError> {
        fs::create_dir_all(&dir)?;
        Ok(Self {
            path: dir.join("stats.json"),
        })
    }
}

impl StatsStore for FsStatsStore {
    fn fetch(&self) -> Result<Option<Vec<u8>>, StatsError> {
        match fs::read(&self.path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn persist(&self, data: &[u8]) -> Result<(), StatsError> {
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, data)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flarb_app_core::stats::{FrameStats, StatsLedger};

    fn scratch_store(tag: &str) -> FsStatsStore {
        let dir = std::env::temp_dir().join(format!("flarb-stats-fs-{}-{tag}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        FsStatsStore::with_dir(dir).unwrap()
    }

    #[test]
    fn fresh_store_has_no_save() {
        let store = scratch_store("fresh");
        assert!(store.fetch().unwrap().is_none());
    }

    #[test]
    fn stats_round_trip_through_ledger() {
        let ledger = StatsLedger::new(scratch_store("roundtrip"));
        let stats = FrameStats { taps: 9, wins: 2 };
        ledger.save(&stats).unwrap();
        assert_eq!(ledger.load(), stats);
    }

    #[test]
    fn persist_leaves_no_temp_file() {
        let store = scratch_store("tmpfile");
        let tmp = store.path.with_extension("json.tmp");
        store.persist(b"{}").unwrap();
        assert!(store.path.exists());
        assert!(!tmp.exists());
    }

    #[test]
    fn corrupt_file_reads_as_fresh_ledger() {
        let store = scratch_store("corrupt");
        fs::write(&store.path, b"not json at all").unwrap();
        let ledger = StatsLedger::new(store);
        assert_eq!(ledger.load(), FrameStats::default());
    }
}
