//! Circuit document and builder API.

use serde::{Deserialize, Serialize};

use crate::error::{IrResult, ValidationError};
use crate::gate::{Gate, Operation};
use crate::qubit::QubitId;
use crate::validate::{self, OrderedCircuit};

/// Register width accepted by [`Circuit::validate`].
pub const DEFAULT_MAX_QUBITS: u32 = 24;

/// Hard ceiling for any configured limit (2^30 amplitudes is 16 GiB).
pub const MAX_SUPPORTED_QUBITS: u32 = 30;

/// A quantum circuit as produced by the circuit editor.
///
/// The circuit is a plain document: a register width and an unordered list
/// of timed gates. Nothing is checked until [`Circuit::validate`] turns it
/// into an [`OrderedCircuit`], except in the builder methods, which reject
/// bad indices immediately.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circuit {
    /// Number of qubits.
    #[serde(rename = "qubits")]
    num_qubits: u32,
    /// Gates in editor order.
    #[serde(default)]
    gates: Vec<Gate>,
    /// Shot count requested alongside the circuit, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    shots: Option<u32>,
}

impl Circuit {
    /// Create an empty circuit with `num_qubits` qubits.
    pub fn new(num_qubits: u32) -> Self {
        Self {
            num_qubits,
            gates: vec![],
            shots: None,
        }
    }

    /// Create a circuit from an existing gate list.
    pub fn from_gates(num_qubits: u32, gates: Vec<Gate>) -> Self {
        let mut circuit = Self::new(num_qubits);
        circuit.gates = gates;
        circuit
    }

    /// Parse a circuit document from JSON.
    pub fn from_json(source: &str) -> IrResult<Self> {
        Ok(serde_json::from_str(source)?)
    }

    /// Serialize the circuit document to pretty-printed JSON.
    pub fn to_json(&self) -> IrResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    /// Get the gates in editor order.
    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    /// Get the number of gates.
    pub fn num_gates(&self) -> usize {
        self.gates.len()
    }

    /// Shot count stored in the document, if any.
    pub fn shots(&self) -> Option<u32> {
        self.shots
    }

    /// Store a shot count in the document.
    #[must_use]
    pub fn with_shots(mut self, shots: u32) -> Self {
        self.shots = Some(shots);
        self
    }

    /// Append an already-placed gate without any checks.
    pub fn push_gate(&mut self, gate: Gate) {
        self.gates.push(gate);
    }

    /// First time column after every gate touching `qubit`.
    fn next_free_time(&self, qubit: QubitId) -> u32 {
        self.gates
            .iter()
            .filter(|g| g.op.qubits().any(|q| q == qubit))
            .map(|g| g.time.saturating_add(1))
            .max()
            .unwrap_or(0)
    }

    /// `"{name}-{n}"` for the smallest `n ≥ start` not already used as an id.
    fn fresh_id(&self, name: &str, start: usize) -> String {
        (start..)
            .map(|n| format!("{name}-{n}"))
            .find(|id| self.gates.iter().all(|g| g.id != *id))
            .unwrap_or_default()
    }

    /// Validate against [`DEFAULT_MAX_QUBITS`] and produce the execution order.
    pub fn validate(&self) -> Result<OrderedCircuit, ValidationError> {
        validate::validate(self, DEFAULT_MAX_QUBITS)
    }

    /// Validate against a caller-supplied qubit limit.
    pub fn validate_with_limit(&self, max_qubits: u32) -> Result<OrderedCircuit, ValidationError> {
        validate::validate(self, max_qubits)
    }

    // =========================================================================
    // Builder
    // =========================================================================

    /// Place `op` in the first time column where all its qubits are free.
    fn place(&mut self, op: Operation) -> Result<&mut Self, ValidationError> {
        let position = self.gates.len();
        let time = op
            .qubits()
            .map(|q| self.next_free_time(q))
            .max()
            .unwrap_or(0);
        let gate = Gate::new(self.fresh_id(op.name(), position), time, op);
        validate::check_gate(position, &gate, self.num_qubits)?;
        self.push_gate(gate);
        Ok(self)
    }

    /// Apply Hadamard gate.
    pub fn h(&mut self, target: QubitId) -> Result<&mut Self, ValidationError> {
        self.place(Operation::H { target })
    }

    /// Apply Pauli-X gate.
    pub fn x(&mut self, target: QubitId) -> Result<&mut Self, ValidationError> {
        self.place(Operation::X { target })
    }

    /// Apply Pauli-Y gate.
    pub fn y(&mut self, target: QubitId) -> Result<&mut Self, ValidationError> {
        self.place(Operation::Y { target })
    }

    /// Apply Pauli-Z gate.
    pub fn z(&mut self, target: QubitId) -> Result<&mut Self, ValidationError> {
        self.place(Operation::Z { target })
    }

    /// Apply S gate.
    pub fn s(&mut self, target: QubitId) -> Result<&mut Self, ValidationError> {
        self.place(Operation::S { target })
    }

    /// Apply T gate.
    pub fn t(&mut self, target: QubitId) -> Result<&mut Self, ValidationError> {
        self.place(Operation::T { target })
    }

    /// Apply CNOT (CX) gate.
    pub fn cx(&mut self, control: QubitId, target: QubitId) -> Result<&mut Self, ValidationError> {
        self.place(Operation::CX { control, target })
    }

    /// Apply CZ gate.
    pub fn cz(&mut self, control: QubitId, target: QubitId) -> Result<&mut Self, ValidationError> {
        self.place(Operation::CZ { control, target })
    }

    /// Apply SWAP gate.
    pub fn swap(&mut self, q1: QubitId, q2: QubitId) -> Result<&mut Self, ValidationError> {
        self.place(Operation::Swap {
            control: q1,
            target: q2,
        })
    }

    /// Add a measurement marker.
    pub fn measure(&mut self, target: QubitId) -> Result<&mut Self, ValidationError> {
        self.place(Operation::M { target })
    }

    /// Add a measurement marker on every qubit.
    pub fn measure_all(&mut self) -> Result<&mut Self, ValidationError> {
        for q in 0..self.num_qubits {
            self.measure(QubitId(q))?;
        }
        Ok(self)
    }

    // =========================================================================
    // Standard circuits
    // =========================================================================

    /// Create a Bell state circuit: H(0) at t=0, CX(0, 1) at t=1.
    pub fn bell() -> Result<Self, ValidationError> {
        let mut circuit = Self::new(2);
        circuit.h(QubitId(0))?.cx(QubitId(0), QubitId(1))?;
        Ok(circuit)
    }

    /// Create a GHZ state circuit on `n` qubits.
    pub fn ghz(n: u32) -> Result<Self, ValidationError> {
        let mut circuit = Self::new(n);
        if n == 0 {
            return Ok(circuit);
        }
        circuit.h(QubitId(0))?;
        for i in 1..n {
            circuit.cx(QubitId(i - 1), QubitId(i))?;
        }
        Ok(circuit)
    }
}
