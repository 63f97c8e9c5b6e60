//! Caller-supplied resource ceiling for the evolution engine.

use serde::{Deserialize, Serialize};

use crate::error::{SimError, SimResult};

/// Bytes one amplitude occupies: a double-precision real/imaginary pair.
const AMPLITUDE_BYTES: u128 = 16;

/// Memory ceiling for a single evolution run.
///
/// Simulating `n` qubits takes `2^n` complex amplitudes; the engine checks
/// this ceiling before allocating anything, so an oversized request fails
/// with [`SimError::StateTooLarge`] instead of exhausting the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimLimits {
    /// Largest amplitude buffer a run may allocate, in bytes.
    pub max_state_bytes: u64,
}

impl SimLimits {
    /// Create a ceiling of `max_state_bytes`.
    pub fn new(max_state_bytes: u64) -> Self {
        Self { max_state_bytes }
    }

    /// Bytes the amplitude vector for `qubit_count` qubits would occupy.
    pub fn required_bytes(qubit_count: u32) -> u128 {
        // Saturate far past any configurable ceiling rather than overflow.
        if qubit_count >= 100 {
            u128::MAX
        } else {
            AMPLITUDE_BYTES << qubit_count
        }
    }

    /// Check a qubit count against the ceiling.
    pub fn check(&self, qubit_count: u32) -> SimResult<()> {
        let required_bytes = Self::required_bytes(qubit_count);
        if required_bytes > u128::from(self.max_state_bytes) {
            return Err(SimError::StateTooLarge {
                qubit_count,
                required_bytes,
                max_state_bytes: self.max_state_bytes,
            });
        }
        Ok(())
    }

    /// Largest qubit count the ceiling admits.
    pub fn max_qubits(&self) -> u32 {
        let mut n = 0;
        while n < 100 && self.check(n + 1).is_ok() {
            n += 1;
        }
        n
    }
}

impl Default for SimLimits {
    /// 256 MiB of amplitudes, enough for 24 qubits of double-precision state.
    fn default() -> Self {
        Self {
            max_state_bytes: 256 * 1024 * 1024,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_bytes() {
        assert_eq!(SimLimits::required_bytes(0), 16);
        assert_eq!(SimLimits::required_bytes(1), 32);
        assert_eq!(SimLimits::required_bytes(10), 16 * 1024);
        assert_eq!(SimLimits::required_bytes(120), u128::MAX);
    }

    #[test]
    fn test_check_boundary() {
        // 2 qubits = 64 bytes exactly.
        let limits = SimLimits::new(64);
        assert!(limits.check(2).is_ok());
        assert!(matches!(
            limits.check(3),
            Err(SimError::StateTooLarge {
                qubit_count: 3,
                required_bytes: 128,
                max_state_bytes: 64,
            })
        ));
    }

    #[test]
    fn test_max_qubits() {
        assert_eq!(SimLimits::new(64).max_qubits(), 2);
        assert_eq!(SimLimits::default().max_qubits(), 24);
        assert_eq!(SimLimits::new(0).max_qubits(), 0);
    }
}
