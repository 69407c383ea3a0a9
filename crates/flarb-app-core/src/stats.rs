// SPDX-License-Identifier: Apache-2.0
//! Lifetime play statistics and their best-effort persistence.
//!
//! Per-round game state is never persisted; only the aggregate counters in
//! [`FrameStats`] survive a session. Persistence is deliberately forgiving:
//! a missing, empty, or unreadable save reads as a fresh ledger — the game
//! never refuses to start over a bad stats file.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Aggregate counters carried across sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct FrameStats {
    /// Total taps across all sessions.
    pub taps: u64,
    /// Total wins across all sessions.
    pub wins: u64,
}

impl FrameStats {
    /// Record one counted tap.
    pub fn record_tap(&mut self) {
        self.taps += 1;
    }

    /// Record one win.
    pub fn record_win(&mut self) {
        self.wins += 1;
    }
}

/// Error type for stats persistence.
#[derive(Debug, Error)]
pub enum StatsError {
    /// I/O failure while reading or writing the save.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// The stats failed to serialize.
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
    /// Catch-all variant for adapter-specific failures.
    #[error("{0}")]
    Other(String),
}

/// Storage port for the single stats blob.
pub trait StatsStore {
    /// Read the persisted blob; `Ok(None)` when nothing has been saved yet.
    fn fetch(&self) -> Result<Option<Vec<u8>>, StatsError>;
    /// Persist the blob, replacing any previous save.
    fn persist(&self, data: &[u8]) -> Result<(), StatsError>;
}

/// Best-effort persistence for [`FrameStats`] over a [`StatsStore`].
pub struct StatsLedger<S> {
    store: S,
}

impl<S> StatsLedger<S> {
    /// Create a ledger over the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Consume the ledger and return the inner store.
    pub fn into_inner(self) -> S {
        self.store
    }
}

impl<S> StatsLedger<S>
where
    S: StatsStore,
{
    /// Load the saved counters. Missing, empty, or unreadable saves all read
    /// as [`FrameStats::default`]; load never fails.
    pub fn load(&self) -> FrameStats {
        let bytes = match self.store.fetch() {
            Ok(Some(bytes)) if !bytes.is_empty() => bytes,
            _ => return FrameStats::default(),
        };
        serde_json::from_slice(&bytes).unwrap_or_default()
    }

    /// Serialize and persist the counters (pretty JSON).
    pub fn save(&self, stats: &FrameStats) -> Result<(), StatsError> {
        let data = serde_json::to_vec_pretty(stats)?;
        self.store.persist(&data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn counters_accumulate() {
        let mut stats = FrameStats::default();
        stats.record_tap();
        stats.record_tap();
        stats.record_win();
        assert_eq!(stats, FrameStats { taps: 2, wins: 1 });
    }

    #[derive(Default)]
    struct MemStore {
        blob: RefCell<Option<Vec<u8>>>,
    }

    impl StatsStore for MemStore {
        fn fetch(&self) -> Result<Option<Vec<u8>>, StatsError> {
            Ok(self.blob.borrow().clone())
        }

        fn persist(&self, data: &[u8]) -> Result<(), StatsError> {
            *self.blob.borrow_mut() = Some(data.to_vec());
            Ok(())
        }
    }

    #[test]
    fn fresh_store_loads_default() {
        let ledger = StatsLedger::new(MemStore::default());
        assert_eq!(ledger.load(), FrameStats::default());
    }

    #[test]
    fn save_then_load_round_trips() {
        let ledger = StatsLedger::new(MemStore::default());
        let stats = FrameStats { taps: 17, wins: 3 };
        ledger.save(&stats).unwrap();
        assert_eq!(ledger.load(), stats);
    }

    #[test]
    fn corrupt_save_reads_as_fresh_ledger() {
        let ledger = StatsLedger::new(MemStore::default());
        ledger.store.persist(b"{ not json").unwrap();
        assert_eq!(ledger.load(), FrameStats::default());
    }

    #[test]
    fn empty_save_reads_as_fresh_ledger() {
        let ledger = StatsLedger::new(MemStore::default());
        ledger.store.persist(b"").unwrap();
        assert_eq!(ledger.load(), FrameStats::default());
    }

    #[test]
    fn failing_fetch_reads_as_fresh_ledger() {
        struct BrokenStore;
        impl StatsStore for BrokenStore {
            fn fetch(&self) -> Result<Option<Vec<u8>>, StatsError> {
                Err(StatsError::Other("disk on fire".into()))
            }
            fn persist(&self, _data: &[u8]) -> Result<(), StatsError> {
                Ok(())
            }
        }
        let ledger = StatsLedger::new(BrokenStore);
        assert_eq!(ledger.load(), FrameStats::default());
    }
}
