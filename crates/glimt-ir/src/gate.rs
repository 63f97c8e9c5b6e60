//! The gate catalog: a closed set of supported gate kinds.

use serde::{Deserialize, Serialize};

use crate::error::{IrError, IrResult};

/// A gate kind with bound parameters.
///
/// The catalog is a closed enum: every supported gate has an arm, so the
/// engine's dispatch is an exhaustive match and an unrecognized kind can
/// only arise from boundary text, where [`GateKind::from_name`] rejects it.
/// Rotation parameters are concrete radians: the editor binds values
/// before a circuit is dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GateKind {
    /// Pauli-X gate.
    X,
    /// Pauli-Y gate.
    Y,
    /// Pauli-Z gate.
    Z,
    /// Hadamard gate.
    H,
    /// S gate (sqrt(Z)).
    S,
    /// S-dagger gate.
    Sdg,
    /// T gate (fourth root of Z).
    T,
    /// T-dagger gate.
    Tdg,
    /// Rotation around X axis.
    Rx(f64),
    /// Rotation around Y axis.
    Ry(f64),
    /// Rotation around Z axis.
    Rz(f64),
    /// Phase gate.
    P(f64),
    /// Universal single-qubit gate U(θ, φ, λ).
    U(f64, f64, f64),
    /// Controlled-X (CNOT) gate.
    CX,
    /// Controlled-Z gate.
    CZ,
    /// SWAP gate.
    Swap,
    /// Toffoli gate (CCX).
    CCX,
}

impl GateKind {
    /// Get the display name of this gate.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            GateKind::X => "x",
            GateKind::Y => "y",
            GateKind::Z => "z",
            GateKind::H => "h",
            GateKind::S => "s",
            GateKind::Sdg => "sdg",
            GateKind::T => "t",
            GateKind::Tdg => "tdg",
            GateKind::Rx(_) => "rx",
            GateKind::Ry(_) => "ry",
            GateKind::Rz(_) => "rz",
            GateKind::P(_) => "p",
            GateKind::U(_, _, _) => "u",
            GateKind::CX => "cx",
            GateKind::CZ => "cz",
            GateKind::Swap => "swap",
            GateKind::CCX => "ccx",
        }
    }

    /// Get the number of qubit operands this gate takes.
    #[inline]
    pub fn arity(&self) -> u32 {
        match self {
            GateKind::X
            | GateKind::Y
            | GateKind::Z
            | GateKind::H
            | GateKind::S
            | GateKind::Sdg
            | GateKind::T
            | GateKind::Tdg
            | GateKind::Rx(_)
            | GateKind::Ry(_)
            | GateKind::Rz(_)
            | GateKind::P(_)
            | GateKind::U(_, _, _) => 1,

            GateKind::CX | GateKind::CZ | GateKind::Swap => 2,

            GateKind::CCX => 3,
        }
    }

    /// Get the bound parameters of this gate.
    pub fn parameters(&self) -> Vec<f64> {
        match self {
            GateKind::Rx(t) | GateKind::Ry(t) | GateKind::Rz(t) | GateKind::P(t) => vec![*t],
            GateKind::U(t, p, l) => vec![*t, *p, *l],
            _ => vec![],
        }
    }

    /// Check if this gate kind carries parameters.
    pub fn is_parameterized(&self) -> bool {
        matches!(
            self,
            GateKind::Rx(_) | GateKind::Ry(_) | GateKind::Rz(_) | GateKind::P(_) | GateKind::U(..)
        )
    }

    /// Catalog lookup for gate data arriving as text from the boundary.
    ///
    /// Accepts the display names of all catalog arms plus the common
    /// aliases `cnot` and `toffoli`. An unrecognized name yields
    /// [`IrError::UnknownGate`]; a known name with the wrong number of
    /// parameters yields [`IrError::ParameterCountMismatch`].
    pub fn from_name(name: &str, params: &[f64]) -> IrResult<Self> {
        fn fixed(kind: GateKind, params: &[f64]) -> IrResult<GateKind> {
            if params.is_empty() {
                Ok(kind)
            } else {
                Err(IrError::ParameterCountMismatch {
                    gate_name: kind.name(),
                    expected: 0,
                    got: params.len(),
                })
            }
        }

        fn one(name: &'static str, params: &[f64]) -> IrResult<f64> {
            match params {
                [t] => Ok(*t),
                _ => Err(IrError::ParameterCountMismatch {
                    gate_name: name,
                    expected: 1,
                    got: params.len(),
                }),
            }
        }

        match name {
            "x" => fixed(GateKind::X, params),
            "y" => fixed(GateKind::Y, params),
            "z" => fixed(GateKind::Z, params),
            "h" => fixed(GateKind::H, params),
            "s" => fixed(GateKind::S, params),
            "sdg" => fixed(GateKind::Sdg, params),
            "t" => fixed(GateKind::T, params),
            "tdg" => fixed(GateKind::Tdg, params),
            "rx" => Ok(GateKind::Rx(one("rx", params)?)),
            "ry" => Ok(GateKind::Ry(one("ry", params)?)),
            "rz" => Ok(GateKind::Rz(one("rz", params)?)),
            "p" => Ok(GateKind::P(one("p", params)?)),
            "u" => match params {
                [t, p, l] => Ok(GateKind::U(*t, *p, *l)),
                _ => Err(IrError::ParameterCountMismatch {
                    gate_name: "u",
                    expected: 3,
                    got: params.len(),
                }),
            },
            "cx" | "cnot" => fixed(GateKind::CX, params),
            "cz" => fixed(GateKind::CZ, params),
            "swap" => fixed(GateKind::Swap, params),
            "ccx" | "toffoli" => fixed(GateKind::CCX, params),
            _ => Err(IrError::UnknownGate(name.to_string())),
        }
    }
}
