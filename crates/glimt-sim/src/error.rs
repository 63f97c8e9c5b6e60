//! Error types for the simulation crate.

use glimt_ir::IrError;
use thiserror::Error;

/// Errors that can occur when setting up or running an evolution.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SimError {
    /// The circuit failed structural validation.
    #[error("Invalid circuit: {0}")]
    InvalidCircuit(#[from] IrError),

    /// The state vector for this qubit count would exceed the memory ceiling.
    #[error(
        "State for {qubit_count} qubits requires {required_bytes} bytes, over the {max_state_bytes}-byte ceiling"
    )]
    StateTooLarge {
        /// Requested qubit count.
        qubit_count: u32,
        /// Bytes the amplitude vector would occupy.
        required_bytes: u128,
        /// The configured ceiling.
        max_state_bytes: u64,
    },
}

/// Result type for simulation operations.
pub type SimResult<T> = Result<T, SimError>;
