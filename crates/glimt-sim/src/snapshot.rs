//! Snapshot normalization: bounded, serializable state records.

use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use uuid::Uuid;

use crate::evolve::QuantumState;

/// Bounds applied while normalizing a raw state into a [`Snapshot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizerConfig {
    /// Length cap for [`Snapshot::state_preview`], in characters.
    pub preview_chars: usize,
    /// `char_count` above which a snapshot is flagged [`Snapshot::is_large`].
    pub large_snapshot_chars: usize,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            preview_chars: 320,
            large_snapshot_chars: 64 * 1024,
        }
    }
}

/// The bounded record of one post-gate state, safe for a UI to hold in bulk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Unique snapshot id.
    pub id: String,
    /// Sequence position of the gate that produced the state.
    pub gate_index: usize,
    /// Display name of that gate.
    pub gate_name: String,
    /// Prefix of `full_state`, capped at the configured preview length.
    pub state_preview: String,
    /// Deterministic textual encoding of the full amplitude vector.
    pub full_state: String,
    /// Exact length of `full_state` (the encoding is pure ASCII, so bytes
    /// and characters coincide).
    pub char_count: usize,
    /// Number of qubits in the state.
    pub qubit_count: u32,
    /// Whether `char_count` exceeds the configured per-snapshot threshold.
    pub is_large: bool,
    /// Creation time, unix milliseconds.
    pub timestamp: i64,
}

/// Render a basis index as a bitstring, qubit 0 first.
fn basis_label(index: usize, qubit_count: u32) -> String {
    let mut label = String::with_capacity(qubit_count as usize);
    for bit in 0..qubit_count {
        label.push(if (index >> bit) & 1 == 1 { '1' } else { '0' });
    }
    label
}

/// Render the amplitude vector as one `bitstring: re+im i` line per basis
/// index, ascending, with fixed 6-decimal formatting. The same state always
/// yields byte-identical text.
fn render_full_state(state: &QuantumState) -> String {
    let line_len = state.qubit_count as usize + 26;
    let mut out = String::with_capacity(state.amplitudes.len() * line_len);
    for (index, amp) in state.amplitudes.iter().enumerate() {
        let label = basis_label(index, state.qubit_count);
        let _ = writeln!(out, "{label}: {re:+.6}{im:+.6}i", re = amp.re, im = amp.im);
    }
    out
}

/// Normalize a raw state into a bounded [`Snapshot`].
pub fn normalize(state: &QuantumState, config: &NormalizerConfig) -> Snapshot {
    let full_state = render_full_state(state);
    let char_count = full_state.len();
    let state_preview = if char_count <= config.preview_chars {
        full_state.clone()
    } else {
        full_state.chars().take(config.preview_chars).collect()
    };
    Snapshot {
        id: Uuid::new_v4().to_string(),
        gate_index: state.gate_index,
        gate_name: state.gate_name.to_string(),
        state_preview,
        full_state,
        char_count,
        qubit_count: state.qubit_count,
        is_large: char_count > config.large_snapshot_chars,
        timestamp: chrono::Utc::now().timestamp_millis(),
    }
}
