//! Error types for the session crate.

use thiserror::Error;

/// Failures of the compute channel itself, as opposed to failures the
/// worker reports in-band via [`crate::SimResponse::Failed`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChannelError {
    /// The run was cancelled before delivering a response.
    #[error("Simulation run cancelled")]
    Cancelled,

    /// The compute context died without producing a response.
    #[error("Compute context terminated: {0}")]
    Terminated(String),
}

/// Result type for channel operations.
pub type ChannelResult<T> = Result<T, ChannelError>;

/// Errors from ledger transitions.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LedgerError {
    /// Selection targeted an id not present in the ledger.
    #[error("No snapshot with id '{0}'")]
    SnapshotNotFound(String),
}

/// Result type for ledger operations.
pub type LedgerResult<T> = Result<T, LedgerError>;
