//! Glimt Circuit Intermediate Representation
//!
//! This crate provides the data structures a circuit editor hands to the
//! Glimt evolution engine: qubit addressing, the closed gate catalog, and
//! the immutable [`Circuit`] program (an ordered gate list).
//!
//! # Overview
//!
//! A [`Circuit`] is a qubit count plus an ordered sequence of [`Gate`]s.
//! There is no graph structure: the engine replays gates in sequence order,
//! so the list *is* the program. Every gate records its [`GateKind`], its
//! operand qubits, and the position it was appended at.
//!
//! Structural validation (operand range, arity, duplicate operands) happens
//! eagerly on [`Circuit::push`] and again wholesale via
//! [`Circuit::validate`], since circuits can arrive from the editor as JSON
//! and bypass the builder entirely.
//!
//! # Example: X then CNOT
//!
//! ```rust
//! use glimt_ir::{Circuit, QubitId};
//!
//! let mut circuit = Circuit::new(2);
//! circuit.x(QubitId(0)).unwrap();
//! circuit.cx(QubitId(0), QubitId(1)).unwrap();
//!
//! assert_eq!(circuit.len(), 2);
//! assert!(circuit.validate().is_ok());
//! ```
//!
//! # Supported Gates
//!
//! | Gate | Qubits | Description |
//! |------|--------|-------------|
//! | `X`, `Y`, `Z` | 1 | Pauli gates |
//! | `H` | 1 | Hadamard gate |
//! | `S`, `Sdg`, `T`, `Tdg` | 1 | Phase-family Clifford gates |
//! | `Rx`, `Ry`, `Rz`, `P` | 1 | Parametrized rotations |
//! | `U` | 1 | Universal single-qubit gate U(θ,φ,λ) |
//! | `CX` | 2 | Controlled-NOT (CNOT) |
//! | `CZ` | 2 | Controlled-Z |
//! | `Swap` | 2 | SWAP gate |
//! | `CCX` | 3 | Toffoli (CCNOT) gate |

pub mod circuit;
pub mod error;
pub mod gate;
pub mod qubit;

pub use circuit::{Circuit, Gate};
pub use error::{IrError, IrResult};
pub use gate::GateKind;
pub use qubit::QubitId;
