//! `glimt-session` — off-thread simulation runs and the snapshot ledger.
//!
//! The two caller-facing halves of the Glimt engine:
//!
//! - **Compute channel** ([`channel`]): a typed request/response contract.
//!   [`submit`] runs engine + normalizer to completion on a blocking tokio
//!   task and hands back a [`RunHandle`]; faults and panics are translated
//!   at the boundary, and [`RunHandle::cancel`] tears a run down without
//!   letting a stale response escape.
//! - **Snapshot ledger** ([`ledger`]): an immutable state machine over the
//!   normalized snapshots, covering memory accounting, warning levels,
//!   selection, and the auto-collapse hint for large result sets.
//!
//! [`SimSession`] ties the two together for the common single-consumer
//! case: one request in flight at a time, dispatch cancels and replaces.
//!
//! # Quick start
//!
//! ```rust
//! use glimt_ir::{Circuit, QubitId};
//! use glimt_session::{SimRequest, SimSession};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let mut circuit = Circuit::new(2);
//! circuit.h(QubitId(0)).unwrap();
//! circuit.cx(QubitId(0), QubitId(1)).unwrap();
//!
//! let mut session = SimSession::default();
//! session.dispatch(SimRequest::new(circuit));
//! let state = session.settle().await;
//! assert_eq!(state.snapshots().len(), 2);
//! assert!(!state.is_loading());
//! # }
//! ```

pub mod channel;
pub mod error;
pub mod ledger;
pub mod session;

pub use channel::{RunHandle, SimRequest, SimResponse, submit};
pub use error::{ChannelError, ChannelResult, LedgerError, LedgerResult};
pub use ledger::{LedgerConfig, LedgerState, MemorySummary, WarningLevel};
pub use session::{SimSession, SnapshotSink, SnapshotUpdate};
