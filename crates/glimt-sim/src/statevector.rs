//! Dense statevector with in-place gate application.

use num_complex::Complex64;
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

use glimt_ir::{Gate, GateKind};

/// A statevector over `2^n` complex amplitudes.
///
/// Gates mutate the vector in place. Controlled gates touch only the basis
/// states whose control bits are all 1: a conditional permutation or phase
/// update, O(2^n) per gate, never a dense-matrix multiply.
#[derive(Debug)]
pub struct Statevector {
    /// The state amplitudes (2^n complex numbers).
    amplitudes: Vec<Complex64>,
    /// Number of qubits.
    num_qubits: u32,
}

impl Statevector {
    /// Create a new statevector initialized to |0...0⟩.
    pub fn new(num_qubits: u32) -> Self {
        let mut amplitudes = vec![Complex64::new(0.0, 0.0); 1usize << num_qubits];
        amplitudes[0] = Complex64::new(1.0, 0.0);
        Self {
            amplitudes,
            num_qubits,
        }
    }

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    /// The amplitude vector, indexed by computational-basis integer.
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    /// Basis-state count (`2^n`).
    fn dim(&self) -> usize {
        self.amplitudes.len()
    }

    /// Apply a validated gate in place.
    pub fn apply(&mut self, gate: &Gate) {
        let q = &gate.operands;
        match gate.kind {
            GateKind::X => self.apply_x(q[0].0 as usize),
            GateKind::Y => self.apply_y(q[0].0 as usize),
            GateKind::Z => self.apply_phase(q[0].0 as usize, PI),
            GateKind::H => self.apply_h(q[0].0 as usize),
            GateKind::S => self.apply_phase(q[0].0 as usize, FRAC_PI_2),
            GateKind::Sdg => self.apply_phase(q[0].0 as usize, -FRAC_PI_2),
            GateKind::T => self.apply_phase(q[0].0 as usize, FRAC_PI_4),
            GateKind::Tdg => self.apply_phase(q[0].0 as usize, -FRAC_PI_4),
            GateKind::Rx(theta) => self.apply_rx(q[0].0 as usize, theta),
            GateKind::Ry(theta) => self.apply_ry(q[0].0 as usize, theta),
            GateKind::Rz(theta) => self.apply_rz(q[0].0 as usize, theta),
            GateKind::P(theta) => self.apply_phase(q[0].0 as usize, theta),
            GateKind::U(theta, phi, lambda) => self.apply_u(q[0].0 as usize, theta, phi, lambda),
            GateKind::CX => self.apply_cx(q[0].0 as usize, q[1].0 as usize),
            GateKind::CZ => self.apply_cz(q[0].0 as usize, q[1].0 as usize),
            GateKind::Swap => self.apply_swap(q[0].0 as usize, q[1].0 as usize),
            GateKind::CCX => self.apply_ccx(q[0].0 as usize, q[1].0 as usize, q[2].0 as usize),
        }
    }

    // =========================================================================
    // Single-qubit gate implementations
    // =========================================================================

    fn apply_x(&mut self, qubit: usize) {
        let mask = 1 << qubit;
        for i in 0..self.dim() {
            if i & mask == 0 {
                self.amplitudes.swap(i, i | mask);
            }
        }
    }

    fn apply_y(&mut self, qubit: usize) {
        let mask = 1 << qubit;
        let i_val = Complex64::new(0.0, 1.0);
        for i in 0..self.dim() {
            if i & mask == 0 {
                let j = i | mask;
                let tmp = self.amplitudes[i];
                self.amplitudes[i] = -i_val * self.amplitudes[j];
                self.amplitudes[j] = i_val * tmp;
            }
        }
    }

    fn apply_h(&mut self, qubit: usize) {
        let mask = 1 << qubit;
        let sqrt2_inv = 1.0 / 2.0_f64.sqrt();
        for i in 0..self.dim() {
            if i & mask == 0 {
                let j = i | mask;
                let a = self.amplitudes[i];
                let b = self.amplitudes[j];
                self.amplitudes[i] = sqrt2_inv * (a + b);
                self.amplitudes[j] = sqrt2_inv * (a - b);
            }
        }
    }

    /// Phase rotation of the |1⟩ component. Covers Z, S, Sdg, T, Tdg and P.
    fn apply_phase(&mut self, qubit: usize, theta: f64) {
        let mask = 1 << qubit;
        let phase = Complex64::from_polar(1.0, theta);
        for i in 0..self.dim() {
            if i & mask != 0 {
                self.amplitudes[i] *= phase;
            }
        }
    }

    fn apply_rx(&mut self, qubit: usize, theta: f64) {
        let mask = 1 << qubit;
        let c = (theta / 2.0).cos();
        let neg_i_s = Complex64::new(0.0, -(theta / 2.0).sin());
        for i in 0..self.dim() {
            if i & mask == 0 {
                let j = i | mask;
                let a = self.amplitudes[i];
                let b = self.amplitudes[j];
                self.amplitudes[i] = c * a + neg_i_s * b;
                self.amplitudes[j] = neg_i_s * a + c * b;
            }
        }
    }

    fn apply_ry(&mut self, qubit: usize, theta: f64) {
        let mask = 1 << qubit;
        let c = (theta / 2.0).cos();
        let s = (theta / 2.0).sin();
        for i in 0..self.dim() {
            if i & mask == 0 {
                let j = i | mask;
                let a = self.amplitudes[i];
                let b = self.amplitudes[j];
                self.amplitudes[i] = c * a - s * b;
                self.amplitudes[j] = s * a + c * b;
            }
        }
    }

    fn apply_rz(&mut self, qubit: usize, theta: f64) {
        let mask = 1 << qubit;
        let phase_0 = Complex64::from_polar(1.0, -theta / 2.0);
        let phase_1 = Complex64::from_polar(1.0, theta / 2.0);
        for i in 0..self.dim() {
            if i & mask == 0 {
                self.amplitudes[i] *= phase_0;
            } else {
                self.amplitudes[i] *= phase_1;
            }
        }
    }

    fn apply_u(&mut self, qubit: usize, theta: f64, phi: f64, lambda: f64) {
        let mask = 1 << qubit;
        let c = (theta / 2.0).cos();
        let s = (theta / 2.0).sin();
        let e_il = Complex64::from_polar(1.0, lambda);
        let e_ip = Complex64::from_polar(1.0, phi);
        let e_ipl = Complex64::from_polar(1.0, phi + lambda);
        for i in 0..self.dim() {
            if i & mask == 0 {
                let j = i | mask;
                let a = self.amplitudes[i];
                let b = self.amplitudes[j];
                self.amplitudes[i] = c * a - e_il * s * b;
                self.amplitudes[j] = e_ip * s * a + e_ipl * c * b;
            }
        }
    }

    // =========================================================================
    // Multi-qubit gate implementations
    // =========================================================================

    fn apply_cx(&mut self, control: usize, target: usize) {
        let ctrl_mask = 1 << control;
        let tgt_mask = 1 << target;
        for i in 0..self.dim() {
            if (i & ctrl_mask != 0) && (i & tgt_mask == 0) {
                self.amplitudes.swap(i, i | tgt_mask);
            }
        }
    }

    fn apply_cz(&mut self, control: usize, target: usize) {
        let ctrl_mask = 1 << control;
        let tgt_mask = 1 << target;
        for i in 0..self.dim() {
            if (i & ctrl_mask != 0) && (i & tgt_mask != 0) {
                self.amplitudes[i] = -self.amplitudes[i];
            }
        }
    }

    fn apply_swap(&mut self, q1: usize, q2: usize) {
        let mask1 = 1 << q1;
        let mask2 = 1 << q2;
        for i in 0..self.dim() {
            if (i & mask1 != 0) && (i & mask2 == 0) {
                let j = (i & !mask1) | mask2;
                self.amplitudes.swap(i, j);
            }
        }
    }

    fn apply_ccx(&mut self, c1: usize, c2: usize, target: usize) {
        let c1_mask = 1 << c1;
        let c2_mask = 1 << c2;
        let tgt_mask = 1 << target;
        for i in 0..self.dim() {
            if (i & c1_mask != 0) && (i & c2_mask != 0) && (i & tgt_mask == 0) {
                self.amplitudes.swap(i, i | tgt_mask);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glimt_ir::QubitId;
    use std::f64::consts::PI;

    fn approx_eq(a: Complex64, b: Complex64) -> bool {
        (a - b).norm() < 1e-10
    }

    fn gate(kind: GateKind, operands: &[u32]) -> Gate {
        Gate {
            kind,
            operands: operands.iter().map(|&q| QubitId(q)).collect(),
            position: 0,
        }
    }

    #[test]
    fn test_initial_state() {
        let sv = Statevector::new(2);
        assert!(approx_eq(sv.amplitudes[0], Complex64::new(1.0, 0.0)));
        for &amp in &sv.amplitudes[1..] {
            assert!(approx_eq(amp, Complex64::new(0.0, 0.0)));
        }
    }

    #[test]
    fn test_x_gate() {
        let mut sv = Statevector::new(1);
        sv.apply(&gate(GateKind::X, &[0]));
        assert!(approx_eq(sv.amplitudes[0], Complex64::new(0.0, 0.0)));
        assert!(approx_eq(sv.amplitudes[1], Complex64::new(1.0, 0.0)));
    }

    #[test]
    fn test_hadamard() {
        let mut sv = Statevector::new(1);
        sv.apply(&gate(GateKind::H, &[0]));
        let sqrt2_inv = 1.0 / 2.0_f64.sqrt();
        assert!(approx_eq(sv.amplitudes[0], Complex64::new(sqrt2_inv, 0.0)));
        assert!(approx_eq(sv.amplitudes[1], Complex64::new(sqrt2_inv, 0.0)));
    }

    #[test]
    fn test_bell_state() {
        let mut sv = Statevector::new(2);
        sv.apply(&gate(GateKind::H, &[0]));
        sv.apply(&gate(GateKind::CX, &[0, 1]));
        let sqrt2_inv = 1.0 / 2.0_f64.sqrt();
        assert!(approx_eq(sv.amplitudes[0], Complex64::new(sqrt2_inv, 0.0)));
        assert!(approx_eq(sv.amplitudes[1], Complex64::new(0.0, 0.0)));
        assert!(approx_eq(sv.amplitudes[2], Complex64::new(0.0, 0.0)));
        assert!(approx_eq(sv.amplitudes[3], Complex64::new(sqrt2_inv, 0.0)));
    }

    #[test]
    fn test_cx_ignores_clear_control() {
        let mut sv = Statevector::new(2);
        sv.apply(&gate(GateKind::CX, &[0, 1]));
        assert!(approx_eq(sv.amplitudes[0], Complex64::new(1.0, 0.0)));
        assert!(approx_eq(sv.amplitudes[3], Complex64::new(0.0, 0.0)));
    }

    #[test]
    fn test_cz_phase_flip() {
        // |11⟩ picks up a sign; |01⟩ does not.
        let mut sv = Statevector::new(2);
        sv.apply(&gate(GateKind::X, &[0]));
        sv.apply(&gate(GateKind::X, &[1]));
        sv.apply(&gate(GateKind::CZ, &[0, 1]));
        assert!(approx_eq(sv.amplitudes[3], Complex64::new(-1.0, 0.0)));

        let mut sv = Statevector::new(2);
        sv.apply(&gate(GateKind::X, &[0]));
        sv.apply(&gate(GateKind::CZ, &[0, 1]));
        assert!(approx_eq(sv.amplitudes[1], Complex64::new(1.0, 0.0)));
    }

    #[test]
    fn test_swap() {
        let mut sv = Statevector::new(2);
        sv.apply(&gate(GateKind::X, &[0]));
        sv.apply(&gate(GateKind::Swap, &[0, 1]));
        assert!(approx_eq(sv.amplitudes[2], Complex64::new(1.0, 0.0)));
    }

    #[test]
    fn test_toffoli() {
        let mut sv = Statevector::new(3);
        sv.apply(&gate(GateKind::X, &[0]));
        sv.apply(&gate(GateKind::X, &[1]));
        sv.apply(&gate(GateKind::CCX, &[0, 1, 2]));
        assert!(approx_eq(sv.amplitudes[7], Complex64::new(1.0, 0.0)));
    }

    #[test]
    fn test_rx_zero_is_identity() {
        let mut sv = Statevector::new(1);
        sv.apply(&gate(GateKind::H, &[0]));
        let before = sv.amplitudes.clone();
        sv.apply(&gate(GateKind::Rx(0.0), &[0]));
        for (a, b) in sv.amplitudes.iter().zip(&before) {
            assert!(approx_eq(*a, *b));
        }
    }

    #[test]
    fn test_u_matches_composites() {
        // U(θ, 0, 0) acts as Ry(θ).
        let theta = 0.37;
        let mut via_u = Statevector::new(1);
        via_u.apply(&gate(GateKind::H, &[0]));
        via_u.apply(&gate(GateKind::U(theta, 0.0, 0.0), &[0]));

        let mut via_ry = Statevector::new(1);
        via_ry.apply(&gate(GateKind::H, &[0]));
        via_ry.apply(&gate(GateKind::Ry(theta), &[0]));

        for (a, b) in via_u.amplitudes.iter().zip(&via_ry.amplitudes) {
            assert!(approx_eq(*a, *b));
        }
    }

    #[test]
    fn test_s_squared_is_z() {
        let mut via_s = Statevector::new(1);
        via_s.apply(&gate(GateKind::X, &[0]));
        via_s.apply(&gate(GateKind::S, &[0]));
        via_s.apply(&gate(GateKind::S, &[0]));

        let mut via_z = Statevector::new(1);
        via_z.apply(&gate(GateKind::X, &[0]));
        via_z.apply(&gate(GateKind::Z, &[0]));

        for (a, b) in via_s.amplitudes.iter().zip(&via_z.amplitudes) {
            assert!(approx_eq(*a, *b));
        }
    }

    #[test]
    fn test_norm_preserved() {
        let mut sv = Statevector::new(3);
        for g in [
            gate(GateKind::H, &[0]),
            gate(GateKind::Rx(1.2), &[1]),
            gate(GateKind::CX, &[0, 2]),
            gate(GateKind::Ry(PI / 3.0), &[2]),
            gate(GateKind::CCX, &[0, 1, 2]),
        ] {
            sv.apply(&g);
        }
        let norm_sq: f64 = sv.amplitudes.iter().map(|a| a.norm_sqr()).sum();
        assert!((norm_sq - 1.0).abs() < 1e-10);
    }
}
