//! Error types for the IR crate.

use std::fmt;

use crate::qubit::QubitId;
use thiserror::Error;

/// Identifies a gate in the circuit's input list for error reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateRef {
    /// Position in the input gate list.
    pub position: usize,
    /// The gate's id (may be empty).
    pub id: String,
    /// The gate's document name.
    pub name: &'static str,
}

impl fmt::Display for GateRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.id.is_empty() {
            write!(f, "{} gate #{}", self.name, self.position)
        } else {
            write!(f, "{} gate #{} ('{}')", self.name, self.position, self.id)
        }
    }
}

/// Semantic problems with a circuit. Reported before any simulation work.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ValidationError {
    /// The circuit declares no qubits.
    #[error("Circuit must have at least one qubit")]
    EmptyRegister,

    /// The circuit is wider than the configured limit.
    #[error("Circuit has {requested} qubits but at most {max} are supported")]
    QubitCountExceeded {
        /// Declared qubit count.
        requested: u32,
        /// Configured maximum.
        max: u32,
    },

    /// A gate addresses a qubit outside `[0, N)`.
    #[error("{gate} references qubit {qubit} but circuit only has {num_qubits} qubits")]
    InvalidQubitIndex {
        /// The offending gate.
        gate: GateRef,
        /// The out-of-range qubit.
        qubit: QubitId,
        /// Register width.
        num_qubits: u32,
    },

    /// A two-qubit gate uses the same qubit twice.
    #[error("{gate} uses {qubit} as both control and target")]
    InvalidControlTarget {
        /// The offending gate.
        gate: GateRef,
        /// The repeated qubit.
        qubit: QubitId,
    },

    /// Two gates share a non-empty id.
    #[error("{gate} reuses the id of gate #{first_position}")]
    DuplicateGateId {
        /// The second gate carrying the id.
        gate: GateRef,
        /// Position of the first gate with that id.
        first_position: usize,
    },
}

impl ValidationError {
    /// The offending gate, when the error is about a specific gate.
    pub fn gate(&self) -> Option<&GateRef> {
        match self {
            ValidationError::InvalidQubitIndex { gate, .. }
            | ValidationError::InvalidControlTarget { gate, .. }
            | ValidationError::DuplicateGateId { gate, .. } => Some(gate),
            ValidationError::EmptyRegister | ValidationError::QubitCountExceeded { .. } => None,
        }
    }
}

/// Errors that can occur in IR operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IrError {
    /// The circuit document is structurally malformed.
    #[error("Invalid circuit document: {0}")]
    Parse(#[from] serde_json::Error),

    /// The circuit is well-formed but semantically invalid.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Result type for IR operations.
pub type IrResult<T> = Result<T, IrError>;
