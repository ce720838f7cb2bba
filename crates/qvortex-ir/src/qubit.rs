//! Qubit identifiers and the basis-index bit convention.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Index of a qubit within a circuit, in `[0, N)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QubitId(pub u32);

impl QubitId {
    /// The index as a `usize`.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Bit mask selecting this qubit inside a basis index of an
    /// `num_qubits`-wide register.
    ///
    /// Qubit 0 is the most significant bit, so the bitstring of basis index
    /// `i` reads qubit 0 first. The caller guarantees `self.0 < num_qubits`.
    #[inline]
    pub fn mask(self, num_qubits: usize) -> usize {
        1 << (num_qubits - 1 - self.index())
    }

    /// Check whether this qubit exists in a register of `num_qubits`.
    #[inline]
    pub fn is_within(self, num_qubits: u32) -> bool {
        self.0 < num_qubits
    }
}

impl fmt::Display for QubitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}

impl From<u32> for QubitId {
    fn from(id: u32) -> Self {
        QubitId(id)
    }
}

/// Render basis index `index` as a bitstring of `num_qubits` characters.
///
/// Character `k` is the value of qubit `k`.
pub fn basis_bitstring(index: usize, num_qubits: usize) -> String {
    format!("{index:0num_qubits$b}")
}
