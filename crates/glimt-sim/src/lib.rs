//! `glimt-sim` — bounded-memory statevector evolution.
//!
//! Replays a `glimt_ir::Circuit` against the all-zero basis state and
//! yields one full state per applied gate, then normalizes each state into
//! a bounded, serializable [`Snapshot`] for the caller-side ledger.
//!
//! The engine is a pure function of its inputs: validation (including the
//! caller-supplied memory ceiling in [`SimLimits`]) happens before any
//! amplitude buffer is allocated, and [`Evolution`] is a finite,
//! forward-only iterator, so dropping it early pays for no further gates.
//!
//! # Quick start
//!
//! ```rust
//! use glimt_ir::{Circuit, QubitId};
//! use glimt_sim::{Evolution, NormalizerConfig, SimLimits, normalize};
//!
//! let mut circuit = Circuit::new(2);
//! circuit.x(QubitId(0)).unwrap();
//! circuit.cx(QubitId(0), QubitId(1)).unwrap();
//!
//! let config = NormalizerConfig::default();
//! let snapshots: Vec<_> = Evolution::new(&circuit, &SimLimits::default())
//!     .unwrap()
//!     .map(|state| normalize(&state, &config))
//!     .collect();
//! assert_eq!(snapshots.len(), 2);
//! ```

pub mod error;
pub mod evolve;
pub mod limits;
pub mod snapshot;
pub mod statevector;

pub use error::{SimError, SimResult};
pub use evolve::{Evolution, QuantumState, evolve};
pub use limits::SimLimits;
pub use snapshot::{NormalizerConfig, Snapshot, normalize};
pub use statevector::Statevector;
