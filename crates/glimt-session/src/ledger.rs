//! The snapshot ledger: immutable transitions over the result set.
//!
//! Every operation takes the prior state and returns the next one; nothing
//! mutates in place behind the caller's back. Snapshots arrive in bulk from
//! one run and replace prior contents wholesale.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use glimt_sim::Snapshot;

use crate::error::{LedgerError, LedgerResult};

/// Thresholds governing memory warnings and the auto-collapse hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// Aggregate character count at which the warning level is critical.
    pub critical_total_chars: usize,
    /// Snapshot count above which the ledger suggests collapsed display.
    pub collapse_snapshot_count: usize,
    /// Aggregate character count above which collapsed display is suggested.
    pub collapse_total_chars: usize,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            critical_total_chars: 8 * 1024 * 1024,
            collapse_snapshot_count: 24,
            collapse_total_chars: 1024 * 1024,
        }
    }
}

/// Memory pressure of the current result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningLevel {
    /// Below half the critical threshold.
    None,
    /// At or above half the critical threshold.
    Moderate,
    /// At or above the critical threshold.
    Critical,
}

/// Aggregate memory usage plus the derived warning level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemorySummary {
    /// Sum of `char_count` over all held snapshots.
    pub total_bytes: usize,
    /// Warning level against [`LedgerConfig::critical_total_chars`].
    pub warning_level: WarningLevel,
}

/// The ledger's state at one point in time.
#[derive(Debug, Clone, Default)]
pub struct LedgerState {
    snapshots: Vec<Snapshot>,
    /// Snapshot id → position, rebuilt whenever the set is replaced.
    index: FxHashMap<String, usize>,
    selected: Option<String>,
    total_chars: usize,
    auto_collapsed: bool,
    is_loading: bool,
    error: Option<String>,
}

impl LedgerState {
    /// The held snapshots, in gate-sequence order.
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// Look up a snapshot by id.
    pub fn get(&self, id: &str) -> Option<&Snapshot> {
        self.index.get(id).map(|&i| &self.snapshots[i])
    }

    /// Id of the selected snapshot, if any.
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// The selected snapshot, if any.
    pub fn selected_snapshot(&self) -> Option<&Snapshot> {
        self.selected.as_deref().and_then(|id| self.get(id))
    }

    /// Sum of `char_count` over all held snapshots.
    pub fn total_chars(&self) -> usize {
        self.total_chars
    }

    /// Whether the UI should default to a collapsed presentation.
    pub fn auto_collapsed(&self) -> bool {
        self.auto_collapsed
    }

    /// Whether a run is in flight.
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// The last terminal failure, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Check if the ledger holds no snapshots.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    /// A run was dispatched: loading set, stale error cleared.
    pub fn begin_run(&self) -> Self {
        Self {
            is_loading: true,
            error: None,
            ..self.clone()
        }
    }

    /// A run completed: replace contents wholesale and re-derive accounting.
    ///
    /// Any prior selection points into the replaced set and is dropped.
    pub fn complete(&self, snapshots: Vec<Snapshot>, config: &LedgerConfig) -> Self {
        let total_chars = snapshots.iter().map(|s| s.char_count).sum();
        let index = snapshots
            .iter()
            .enumerate()
            .map(|(i, s)| (s.id.clone(), i))
            .collect();
        let auto_collapsed = snapshots.len() > config.collapse_snapshot_count
            || total_chars > config.collapse_total_chars;
        Self {
            snapshots,
            index,
            selected: None,
            total_chars,
            auto_collapsed,
            is_loading: false,
            error: None,
        }
    }

    /// A run failed: record the error, keep prior snapshots untouched.
    pub fn fail(&self, error: impl Into<String>) -> Self {
        Self {
            is_loading: false,
            error: Some(error.into()),
            ..self.clone()
        }
    }

    /// A run was cancelled by the caller: clear loading, stay silent.
    pub fn cancelled(&self) -> Self {
        Self {
            is_loading: false,
            ..self.clone()
        }
    }

    /// Drop all snapshots and selection.
    pub fn clear(&self) -> Self {
        Self::default()
    }

    /// Change selection.
    ///
    /// Selecting an id not present in the ledger is rejected with
    /// [`LedgerError::SnapshotNotFound`]; `None` clears the selection.
    pub fn select(&self, id: Option<&str>) -> LedgerResult<Self> {
        let selected = match id {
            Some(id) if !self.index.contains_key(id) => {
                return Err(LedgerError::SnapshotNotFound(id.to_string()));
            }
            Some(id) => Some(id.to_string()),
            None => None,
        };
        Ok(Self {
            selected,
            ..self.clone()
        })
    }

    /// Aggregate memory usage and its warning level.
    pub fn memory_summary(&self, config: &LedgerConfig) -> MemorySummary {
        let total_bytes = self.total_chars;
        let warning_level = if total_bytes >= config.critical_total_chars {
            WarningLevel::Critical
        } else if total_bytes * 2 >= config.critical_total_chars {
            WarningLevel::Moderate
        } else {
            WarningLevel::None
        };
        MemorySummary {
            total_bytes,
            warning_level,
        }
    }
}
