//! Single-consumer session: one run in flight, cancel-and-replace dispatch.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use glimt_sim::Snapshot;

use crate::channel::{RunHandle, SimRequest, SimResponse, submit};
use crate::error::{ChannelError, LedgerResult};
use crate::ledger::{LedgerConfig, LedgerState, MemorySummary};

/// The payload the embedding UI store applies verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotUpdate {
    /// Snapshots in gate-sequence order.
    pub snapshots: Vec<Snapshot>,
    /// Sum of `char_count` over `snapshots`.
    pub total_char_count: usize,
    /// Whether the UI should default to a collapsed presentation.
    pub auto_collapsed: bool,
}

/// Consumer seam for the excluded UI state container.
///
/// Implementations apply the payloads verbatim; all validation and
/// accounting has already happened on this side of the boundary.
pub trait SnapshotSink {
    /// Replace the store's snapshots with a fresh result set.
    fn set_snapshots(&mut self, update: SnapshotUpdate);
    /// Drop the store's snapshots.
    fn clear_snapshots(&mut self);
}

impl LedgerState {
    /// Build the consumer payload for the current result set.
    pub fn to_update(&self) -> SnapshotUpdate {
        SnapshotUpdate {
            snapshots: self.snapshots().to_vec(),
            total_char_count: self.total_chars(),
            auto_collapsed: self.auto_collapsed(),
        }
    }
}

/// Drives the compute channel and the ledger for one consumer.
///
/// At most one run is in flight at a time: [`SimSession::dispatch`] tears
/// down any outstanding run before submitting, so two result sets can
/// never interleave in the ledger.
#[derive(Default)]
pub struct SimSession {
    config: LedgerConfig,
    state: LedgerState,
    inflight: Option<RunHandle>,
}

impl SimSession {
    /// Create a session with the given ledger thresholds.
    pub fn new(config: LedgerConfig) -> Self {
        Self {
            config,
            state: LedgerState::default(),
            inflight: None,
        }
    }

    /// The ledger's current state.
    pub fn state(&self) -> &LedgerState {
        &self.state
    }

    /// Whether a run is in flight.
    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    /// Dispatch a run, cancelling and replacing any outstanding one.
    ///
    /// Must be called within a tokio runtime.
    pub fn dispatch(&mut self, request: SimRequest) {
        if let Some(prior) = self.inflight.take() {
            warn!("dispatch while a run is in flight; cancelling the prior run");
            prior.cancel();
        }
        self.state = self.state.begin_run();
        self.inflight = Some(submit(request));
    }

    /// Await the in-flight run and fold its outcome into the ledger.
    ///
    /// Success replaces the snapshots; an in-band failure records the error
    /// and leaves prior snapshots untouched; a caller-initiated cancellation
    /// stays silent. Loading always clears. No-op without an in-flight run.
    pub async fn settle(&mut self) -> &LedgerState {
        let Some(run) = self.inflight.take() else {
            return &self.state;
        };
        self.state = match run.wait().await {
            Ok(SimResponse::Completed { snapshots }) => {
                debug!(snapshots = snapshots.len(), "run settled");
                self.state.complete(snapshots, &self.config)
            }
            Ok(SimResponse::Failed { error }) => self.state.fail(error),
            Err(ChannelError::Cancelled) => self.state.cancelled(),
            Err(err) => self.state.fail(err.to_string()),
        };
        &self.state
    }

    /// Cancel the in-flight run, if any. Clears loading without recording
    /// an error.
    pub fn cancel(&mut self) {
        if let Some(run) = self.inflight.take() {
            run.cancel();
            self.state = self.state.cancelled();
        }
    }

    /// Drop all snapshots and selection.
    pub fn clear(&mut self) {
        self.state = self.state.clear();
    }

    /// Change selection; rejects ids not present in the ledger.
    pub fn select(&mut self, id: Option<&str>) -> LedgerResult<()> {
        self.state = self.state.select(id)?;
        Ok(())
    }

    /// Aggregate memory usage and its warning level.
    pub fn memory_summary(&self) -> MemorySummary {
        self.state.memory_summary(&self.config)
    }

    /// Push the current result set into the consumer store.
    pub fn publish(&self, sink: &mut dyn SnapshotSink) {
        if self.state.is_empty() {
            sink.clear_snapshots();
        } else {
            sink.set_snapshots(self.state.to_update());
        }
    }
}
