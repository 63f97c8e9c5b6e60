//! Error types for the IR crate.

use crate::qubit::QubitId;
use thiserror::Error;

/// Errors that can occur while building or validating a circuit.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IrError {
    /// Gate operand addresses a qubit outside the circuit.
    #[error("Gate '{gate_name}' at position {position}: qubit {qubit:?} out of range (circuit has {qubit_count} qubits)")]
    QubitOutOfRange {
        /// The out-of-range operand.
        qubit: QubitId,
        /// Number of qubits in the circuit.
        qubit_count: u32,
        /// Name of the offending gate.
        gate_name: &'static str,
        /// Sequence position of the offending gate.
        position: usize,
    },

    /// Gate received the wrong number of operands for its kind.
    #[error("Gate '{gate_name}' at position {position} requires {expected} qubits, got {got}")]
    OperandCountMismatch {
        /// Name of the offending gate.
        gate_name: &'static str,
        /// Arity declared by the gate kind.
        expected: u32,
        /// Operand count actually supplied.
        got: u32,
        /// Sequence position of the offending gate.
        position: usize,
    },

    /// The same qubit appears twice in one gate's operands.
    #[error("Gate '{gate_name}' at position {position}: duplicate operand {qubit:?}")]
    DuplicateOperand {
        /// The repeated operand.
        qubit: QubitId,
        /// Name of the offending gate.
        gate_name: &'static str,
        /// Sequence position of the offending gate.
        position: usize,
    },

    /// Gate name from the boundary does not match any catalog entry.
    #[error("Unknown gate kind '{0}'")]
    UnknownGate(String),

    /// Gate name is known but the parameter list does not fit it.
    #[error("Gate '{gate_name}' takes {expected} parameters, got {got}")]
    ParameterCountMismatch {
        /// Name of the gate being constructed.
        gate_name: &'static str,
        /// Parameter count declared by the gate kind.
        expected: usize,
        /// Parameter count actually supplied.
        got: usize,
    },
}

/// Result type for IR operations.
pub type IrResult<T> = Result<T, IrError>;
