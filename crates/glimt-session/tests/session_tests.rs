//! End-to-end tests of the session: channel plus ledger under success,
//! failure, and cancellation.

use glimt_ir::{Circuit, QubitId};
use glimt_session::{
    LedgerConfig, LedgerError, SimRequest, SimSession, SnapshotSink, SnapshotUpdate, WarningLevel,
};
use glimt_sim::SimLimits;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn bell_circuit() -> Circuit {
    let mut circuit = Circuit::new(2);
    circuit.h(QubitId(0)).unwrap();
    circuit.cx(QubitId(0), QubitId(1)).unwrap();
    circuit
}

#[tokio::test]
async fn test_successful_run_populates_ledger() {
    init_tracing();
    let mut session = SimSession::default();

    session.dispatch(SimRequest::new(bell_circuit()));
    assert!(session.is_loading());

    let state = session.settle().await;
    assert!(!state.is_loading());
    assert!(state.error().is_none());
    assert_eq!(state.snapshots().len(), 2);
    assert_eq!(state.snapshots()[0].gate_name, "h");
    assert_eq!(state.snapshots()[1].gate_name, "cx");

    let expected_total: usize = state.snapshots().iter().map(|s| s.char_count).sum();
    assert_eq!(state.total_chars(), expected_total);
}

#[tokio::test]
async fn test_failed_run_keeps_prior_snapshots() {
    init_tracing();
    let mut session = SimSession::default();

    session.dispatch(SimRequest::new(bell_circuit()));
    session.settle().await;
    assert_eq!(session.state().snapshots().len(), 2);

    // Second run trips the memory ceiling inside the worker.
    let oversized = SimRequest::new(Circuit::new(20)).with_limits(SimLimits::new(1024));
    session.dispatch(oversized);
    assert!(session.state().error().is_none());

    let state = session.settle().await;
    assert!(!state.is_loading());
    assert!(state.error().unwrap().contains("ceiling"));
    assert_eq!(state.snapshots().len(), 2, "prior snapshots must survive");
}

#[tokio::test]
async fn test_redispatch_cancels_and_replaces() {
    init_tracing();
    let mut session = SimSession::default();

    // A run with plenty of gates, then an immediate replacement.
    let mut first = Circuit::new(10);
    for _ in 0..128 {
        first.h(QubitId(3)).unwrap();
    }
    let mut second = Circuit::new(1);
    second.x(QubitId(0)).unwrap();

    session.dispatch(SimRequest::new(first));
    session.dispatch(SimRequest::new(second));

    let state = session.settle().await;
    assert!(!state.is_loading());
    assert!(state.error().is_none());
    // Only the replacement's result set may land.
    assert_eq!(state.snapshots().len(), 1);
    assert_eq!(state.snapshots()[0].qubit_count, 1);
    assert_eq!(state.snapshots()[0].gate_name, "x");

    // Nothing left to settle: the first run's response was discarded.
    let settled_again = session.settle().await;
    assert_eq!(settled_again.snapshots().len(), 1);
}

#[tokio::test]
async fn test_cancel_is_silent() {
    init_tracing();
    let mut session = SimSession::default();

    session.dispatch(SimRequest::new(bell_circuit()));
    session.cancel();

    let state = session.state();
    assert!(!state.is_loading());
    assert!(state.error().is_none());
    assert!(state.is_empty());
}

#[tokio::test]
async fn test_selection_lifecycle() {
    init_tracing();
    let mut session = SimSession::default();

    session.dispatch(SimRequest::new(bell_circuit()));
    session.settle().await;

    let id = session.state().snapshots()[0].id.clone();
    session.select(Some(&id)).unwrap();
    assert_eq!(session.state().selected(), Some(id.as_str()));

    assert!(matches!(
        session.select(Some("no-such-id")),
        Err(LedgerError::SnapshotNotFound(_))
    ));
    // The failed select left the previous selection in place.
    assert_eq!(session.state().selected(), Some(id.as_str()));

    session.select(None).unwrap();
    assert!(session.state().selected().is_none());
}

#[tokio::test]
async fn test_memory_summary_reflects_config() {
    init_tracing();
    let mut session = SimSession::new(LedgerConfig {
        critical_total_chars: 50,
        ..LedgerConfig::default()
    });

    session.dispatch(SimRequest::new(bell_circuit()));
    session.settle().await;

    // Two 2-qubit snapshots comfortably exceed 50 characters.
    let summary = session.memory_summary();
    assert!(summary.total_bytes > 50);
    assert_eq!(summary.warning_level, WarningLevel::Critical);
}

/// Store double recording what the session publishes.
#[derive(Default)]
struct RecordingSink {
    sets: Vec<SnapshotUpdate>,
    clears: usize,
}

impl SnapshotSink for RecordingSink {
    fn set_snapshots(&mut self, update: SnapshotUpdate) {
        self.sets.push(update);
    }

    fn clear_snapshots(&mut self) {
        self.clears += 1;
    }
}

#[tokio::test]
async fn test_publish_mirrors_ledger() {
    init_tracing();
    let mut session = SimSession::default();
    let mut sink = RecordingSink::default();

    session.dispatch(SimRequest::new(bell_circuit()));
    session.settle().await;
    session.publish(&mut sink);

    let update = sink.sets.last().unwrap();
    assert_eq!(update.snapshots.len(), 2);
    assert_eq!(update.total_char_count, session.state().total_chars());
    assert_eq!(update.auto_collapsed, session.state().auto_collapsed());

    session.clear();
    session.publish(&mut sink);
    assert_eq!(sink.clears, 1);
}
