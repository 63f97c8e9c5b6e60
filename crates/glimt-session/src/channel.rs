//! The compute channel: typed request/response over a blocking task.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::task::JoinHandle;
use tracing::{debug, instrument};

use glimt_ir::Circuit;
use glimt_sim::{Evolution, NormalizerConfig, SimLimits, Snapshot, normalize};

use crate::error::{ChannelError, ChannelResult};

/// One simulation request: the circuit plus the caller-supplied bounds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimRequest {
    /// The circuit to replay.
    pub circuit: Circuit,
    /// Memory ceiling for the amplitude buffer.
    pub limits: SimLimits,
    /// Bounds applied while normalizing each state.
    pub normalizer: NormalizerConfig,
}

impl SimRequest {
    /// Create a request with default limits and normalizer bounds.
    pub fn new(circuit: Circuit) -> Self {
        Self {
            circuit,
            limits: SimLimits::default(),
            normalizer: NormalizerConfig::default(),
        }
    }

    /// Override the memory ceiling.
    #[must_use]
    pub fn with_limits(mut self, limits: SimLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Override the normalizer bounds.
    #[must_use]
    pub fn with_normalizer(mut self, normalizer: NormalizerConfig) -> Self {
        self.normalizer = normalizer;
        self
    }
}

/// The single response a run produces.
///
/// Validation and compute faults arrive in-band as [`SimResponse::Failed`];
/// only the channel itself dying surfaces as [`ChannelError`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SimResponse {
    /// The run completed; snapshots are in gate-sequence order.
    Completed {
        /// One snapshot per applied gate.
        snapshots: Vec<Snapshot>,
    },
    /// The run failed before completing.
    Failed {
        /// Human-readable failure description.
        error: String,
    },
}

/// Handle to one in-flight run.
///
/// Dropping the handle without waiting discards the eventual response, so
/// a torn-down run can never deliver stale snapshots to the caller.
pub struct RunHandle {
    cancelled: Arc<AtomicBool>,
    join: JoinHandle<SimResponse>,
}

impl RunHandle {
    /// Tear the run down.
    ///
    /// The worker checks the flag between gates and bails; a response that
    /// raced past the flag is discarded by [`RunHandle::wait`].
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
        self.join.abort();
    }

    /// Check whether [`RunHandle::cancel`] was called.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    /// Wait for the run's single response.
    ///
    /// A cancelled run yields [`ChannelError::Cancelled`] even if the
    /// worker finished first; a panicked worker yields
    /// [`ChannelError::Terminated`]. This never hangs past completion of
    /// the blocking task.
    pub async fn wait(self) -> ChannelResult<SimResponse> {
        let outcome = self.join.await;
        if self.cancelled.load(Ordering::Relaxed) {
            return Err(ChannelError::Cancelled);
        }
        match outcome {
            Ok(response) => Ok(response),
            Err(err) if err.is_cancelled() => Err(ChannelError::Cancelled),
            Err(err) => Err(ChannelError::Terminated(err.to_string())),
        }
    }
}

/// Submit a request to its own blocking compute task.
///
/// Exactly one [`SimResponse`] is produced per request; every fault inside
/// the run (validation, gate application, normalization, even a panic) is
/// contained at this boundary. Must be called within a tokio runtime.
#[instrument(skip(request), fields(qubits = request.circuit.qubit_count(), gates = request.circuit.len()))]
pub fn submit(request: SimRequest) -> RunHandle {
    let cancelled = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&cancelled);
    let join = tokio::task::spawn_blocking(move || run_request(&request, &flag));
    RunHandle { cancelled, join }
}

/// Run engine + normalizer to completion inside the compute context.
fn run_request(request: &SimRequest, cancelled: &AtomicBool) -> SimResponse {
    let evolution = match Evolution::new(&request.circuit, &request.limits) {
        Ok(evolution) => evolution,
        Err(err) => {
            return SimResponse::Failed {
                error: err.to_string(),
            };
        }
    };

    let mut snapshots = Vec::with_capacity(evolution.len());
    for state in evolution {
        if cancelled.load(Ordering::Relaxed) {
            // The caller tore this run down; the response is discarded.
            return SimResponse::Failed {
                error: "run cancelled".to_string(),
            };
        }
        snapshots.push(normalize(&state, &request.normalizer));
    }

    debug!(snapshots = snapshots.len(), "run completed");
    SimResponse::Completed { snapshots }
}
