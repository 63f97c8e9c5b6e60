//! The circuit program: an ordered gate list over a fixed qubit register.

use serde::{Deserialize, Serialize};

use crate::error::{IrError, IrResult};
use crate::gate::GateKind;
use crate::qubit::QubitId;

/// One gate application within a circuit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gate {
    /// The kind of gate, with bound parameters.
    pub kind: GateKind,
    /// Qubit operands, in the order the kind declares them
    /// (controls before targets for controlled gates).
    pub operands: Vec<QubitId>,
    /// Position of this gate in the circuit's sequence order.
    pub position: usize,
}

impl Gate {
    /// Get the display name of this gate.
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }
}

/// A quantum circuit: a qubit count plus an ordered gate sequence.
///
/// Gates are appended through [`Circuit::push`] or the per-gate convenience
/// methods, which validate eagerly. Once handed to the engine a circuit is
/// read-only input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circuit {
    /// Number of qubits the circuit addresses.
    qubit_count: u32,
    /// Gates in sequence order.
    gates: Vec<Gate>,
}

impl Circuit {
    /// Create an empty circuit over `qubit_count` qubits.
    pub fn new(qubit_count: u32) -> Self {
        Self {
            qubit_count,
            gates: vec![],
        }
    }

    /// Number of qubits the circuit addresses.
    pub fn qubit_count(&self) -> u32 {
        self.qubit_count
    }

    /// The gates in sequence order.
    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    /// Number of gates in the circuit.
    pub fn len(&self) -> usize {
        self.gates.len()
    }

    /// Check if the circuit has no gates.
    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    /// Append a gate, validating operands against the catalog and register.
    pub fn push(
        &mut self,
        kind: GateKind,
        operands: impl IntoIterator<Item = QubitId>,
    ) -> IrResult<&mut Self> {
        let gate = Gate {
            kind,
            operands: operands.into_iter().collect(),
            position: self.gates.len(),
        };
        check_gate(&gate, self.qubit_count)?;
        self.gates.push(gate);
        Ok(self)
    }

    // =========================================================================
    // Single-qubit gates
    // =========================================================================

    /// Apply Pauli-X gate.
    pub fn x(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(GateKind::X, [qubit])
    }

    /// Apply Pauli-Y gate.
    pub fn y(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(GateKind::Y, [qubit])
    }

    /// Apply Pauli-Z gate.
    pub fn z(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(GateKind::Z, [qubit])
    }

    /// Apply Hadamard gate.
    pub fn h(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(GateKind::H, [qubit])
    }

    /// Apply S gate.
    pub fn s(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(GateKind::S, [qubit])
    }

    /// Apply S-dagger gate.
    pub fn sdg(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(GateKind::Sdg, [qubit])
    }

    /// Apply T gate.
    pub fn t(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(GateKind::T, [qubit])
    }

    /// Apply T-dagger gate.
    pub fn tdg(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(GateKind::Tdg, [qubit])
    }

    /// Apply Rx rotation gate.
    pub fn rx(&mut self, theta: f64, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(GateKind::Rx(theta), [qubit])
    }

    /// Apply Ry rotation gate.
    pub fn ry(&mut self, theta: f64, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(GateKind::Ry(theta), [qubit])
    }

    /// Apply Rz rotation gate.
    pub fn rz(&mut self, theta: f64, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(GateKind::Rz(theta), [qubit])
    }

    /// Apply phase gate.
    pub fn p(&mut self, theta: f64, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(GateKind::P(theta), [qubit])
    }

    /// Apply universal U gate.
    pub fn u(&mut self, theta: f64, phi: f64, lambda: f64, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(GateKind::U(theta, phi, lambda), [qubit])
    }

    // =========================================================================
    // Multi-qubit gates
    // =========================================================================

    /// Apply CNOT (CX) gate.
    pub fn cx(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.push(GateKind::CX, [control, target])
    }

    /// Apply CZ gate.
    pub fn cz(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.push(GateKind::CZ, [control, target])
    }

    /// Apply SWAP gate.
    pub fn swap(&mut self, q1: QubitId, q2: QubitId) -> IrResult<&mut Self> {
        self.push(GateKind::Swap, [q1, q2])
    }

    /// Apply Toffoli (CCX) gate.
    pub fn ccx(&mut self, c1: QubitId, c2: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.push(GateKind::CCX, [c1, c2, target])
    }

    /// Validate the whole circuit against the catalog and register.
    ///
    /// Circuits built through [`Circuit::push`] are already valid; this is
    /// the fail-fast pass for circuits deserialized from the boundary. The
    /// first violation is reported, carrying the offending gate's position.
    pub fn validate(&self) -> IrResult<()> {
        for gate in &self.gates {
            check_gate(gate, self.qubit_count)?;
        }
        Ok(())
    }
}

/// Check one gate's operands against its kind's arity and the register.
fn check_gate(gate: &Gate, qubit_count: u32) -> IrResult<()> {
    let expected = gate.kind.arity();
    let got = gate.operands.len() as u32;
    if got != expected {
        return Err(IrError::OperandCountMismatch {
            gate_name: gate.name(),
            expected,
            got,
            position: gate.position,
        });
    }
    for (i, &qubit) in gate.operands.iter().enumerate() {
        if qubit.0 >= qubit_count {
            return Err(IrError::QubitOutOfRange {
                qubit,
                qubit_count,
                gate_name: gate.name(),
                position: gate.position,
            });
        }
        if gate.operands[..i].contains(&qubit) {
            return Err(IrError::DuplicateOperand {
                qubit,
                gate_name: gate.name(),
                position: gate.position,
            });
        }
    }
    Ok(())
}
