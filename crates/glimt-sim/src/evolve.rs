//! Gate-by-gate circuit replay.

use num_complex::Complex64;
use tracing::debug;

use glimt_ir::Circuit;

use crate::error::SimResult;
use crate::limits::SimLimits;
use crate::statevector::Statevector;

/// The full state after one gate, tagged with its origin.
///
/// A `QuantumState` is an independent copy: later gate applications never
/// mutate it. It lives only inside the compute context; the normalizer
/// reduces it to a bounded snapshot before anything crosses back.
#[derive(Debug, Clone, PartialEq)]
pub struct QuantumState {
    /// Sequence position of the gate that produced this state.
    pub gate_index: usize,
    /// Display name of that gate.
    pub gate_name: &'static str,
    /// Number of qubits.
    pub qubit_count: u32,
    /// Dense amplitudes, indexed by computational-basis integer.
    pub amplitudes: Vec<Complex64>,
}

/// Lazy replay of a circuit: one [`QuantumState`] per gate, in gate order.
///
/// Finite and forward-only; dropping the iterator early pays for no
/// further gates. Construction validates the circuit and the memory
/// ceiling before the amplitude buffer is allocated.
#[derive(Debug)]
pub struct Evolution<'a> {
    gates: std::slice::Iter<'a, glimt_ir::Gate>,
    state: Statevector,
}

impl<'a> Evolution<'a> {
    /// Validate `circuit` against `limits` and set up the initial state.
    ///
    /// Fails with the offending gate's position on structural violations,
    /// or with [`crate::SimError::StateTooLarge`] if `2^qubit_count`
    /// amplitudes would not fit the ceiling. Nothing is allocated on
    /// failure.
    pub fn new(circuit: &'a Circuit, limits: &SimLimits) -> SimResult<Self> {
        circuit.validate()?;
        limits.check(circuit.qubit_count())?;
        debug!(
            qubits = circuit.qubit_count(),
            gates = circuit.len(),
            "starting evolution"
        );
        Ok(Self {
            gates: circuit.gates().iter(),
            state: Statevector::new(circuit.qubit_count()),
        })
    }

    /// Gates not yet replayed.
    pub fn remaining(&self) -> usize {
        self.gates.len()
    }
}

impl Iterator for Evolution<'_> {
    type Item = QuantumState;

    fn next(&mut self) -> Option<QuantumState> {
        let gate = self.gates.next()?;
        self.state.apply(gate);
        Some(QuantumState {
            gate_index: gate.position,
            gate_name: gate.name(),
            qubit_count: self.state.num_qubits(),
            amplitudes: self.state.amplitudes().to_vec(),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.gates.size_hint()
    }
}

impl ExactSizeIterator for Evolution<'_> {}

/// Replay `circuit` from the all-zero basis state.
///
/// Convenience constructor for [`Evolution::new`].
pub fn evolve<'a>(circuit: &'a Circuit, limits: &SimLimits) -> SimResult<Evolution<'a>> {
    Evolution::new(circuit, limits)
}
