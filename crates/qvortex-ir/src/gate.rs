//! Gate types.
//!
//! A [`Gate`] is one placed element of the circuit document: an
//! [`Operation`] together with the editor-assigned `time` column and `id`.
//! The JSON shape is flat, matching the exported circuit files:
//!
//! ```json
//! { "id": "CX-1", "time": 1, "type": "CX", "control": 0, "target": 1 }
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter;

use crate::qubit::QubitId;

/// The operation a gate performs.
///
/// Two-qubit operations name their first qubit `control`, including
/// `SWAP`, whose qubits are symmetric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Operation {
    // Single-qubit Pauli gates
    /// Hadamard gate.
    H {
        /// Target qubit.
        target: QubitId,
    },
    /// Pauli-X gate.
    X {
        /// Target qubit.
        target: QubitId,
    },
    /// Pauli-Y gate.
    Y {
        /// Target qubit.
        target: QubitId,
    },
    /// Pauli-Z gate.
    Z {
        /// Target qubit.
        target: QubitId,
    },

    // Phase gates
    /// S gate (sqrt(Z)).
    S {
        /// Target qubit.
        target: QubitId,
    },
    /// T gate (fourth root of Z).
    T {
        /// Target qubit.
        target: QubitId,
    },

    // Two-qubit gates
    /// Controlled-X (CNOT) gate.
    CX {
        /// Control qubit.
        control: QubitId,
        /// Target qubit.
        target: QubitId,
    },
    /// Controlled-Z gate.
    CZ {
        /// Control qubit.
        control: QubitId,
        /// Target qubit.
        target: QubitId,
    },
    /// SWAP gate.
    #[serde(rename = "SWAP")]
    Swap {
        /// First qubit.
        control: QubitId,
        /// Second qubit.
        target: QubitId,
    },

    /// Measurement marker. Resolved after evolution, never mid-circuit.
    M {
        /// Measured qubit.
        target: QubitId,
    },
}

impl Operation {
    /// Get the document name of this operation.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Operation::H { .. } => "H",
            Operation::X { .. } => "X",
            Operation::Y { .. } => "Y",
            Operation::Z { .. } => "Z",
            Operation::S { .. } => "S",
            Operation::T { .. } => "T",
            Operation::CX { .. } => "CX",
            Operation::CZ { .. } => "CZ",
            Operation::Swap { .. } => "SWAP",
            Operation::M { .. } => "M",
        }
    }

    /// The target qubit.
    #[inline]
    pub fn target(&self) -> QubitId {
        match *self {
            Operation::H { target }
            | Operation::X { target }
            | Operation::Y { target }
            | Operation::Z { target }
            | Operation::S { target }
            | Operation::T { target }
            | Operation::CX { target, .. }
            | Operation::CZ { target, .. }
            | Operation::Swap { target, .. }
            | Operation::M { target } => target,
        }
    }

    /// The control (or second) qubit of a two-qubit operation.
    #[inline]
    pub fn control(&self) -> Option<QubitId> {
        match *self {
            Operation::CX { control, .. }
            | Operation::CZ { control, .. }
            | Operation::Swap { control, .. } => Some(control),
            _ => None,
        }
    }

    /// All qubits touched, control first.
    pub fn qubits(&self) -> impl Iterator<Item = QubitId> {
        self.control().into_iter().chain(iter::once(self.target()))
    }

    /// Get the number of qubits this operation acts on.
    #[inline]
    pub fn num_qubits(&self) -> u32 {
        if self.control().is_some() { 2 } else { 1 }
    }

    /// Check if this operation is a measurement marker.
    #[inline]
    pub fn is_measurement(&self) -> bool {
        matches!(self, Operation::M { .. })
    }

    /// Check if this operation evolves the statevector.
    #[inline]
    pub fn is_unitary(&self) -> bool {
        !self.is_measurement()
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.control() {
            Some(control) => write!(f, "{} {}, {}", self.name(), control, self.target()),
            None => write!(f, "{} {}", self.name(), self.target()),
        }
    }
}

/// A gate placed on the circuit grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gate {
    /// Editor handle, unique within a circuit when non-empty.
    #[serde(default)]
    pub id: String,
    /// Time column. Only used for ordering; need not be unique.
    pub time: u32,
    /// The operation.
    #[serde(flatten)]
    pub op: Operation,
}

impl Gate {
    /// Create a new gate.
    pub fn new(id: impl Into<String>, time: u32, op: Operation) -> Self {
        Self {
            id: id.into(),
            time,
            op,
        }
    }

    /// Create a gate without an id.
    pub fn at(time: u32, op: Operation) -> Self {
        Self::new(String::new(), time, op)
    }

    /// Get the name of this gate.
    pub fn name(&self) -> &'static str {
        self.op.name()
    }

    /// The target qubit.
    pub fn target(&self) -> QubitId {
        self.op.target()
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @t={}", self.op, self.time)
    }
}
