//! Circuit validation and deterministic gate ordering.
//!
//! [`validate`] is the only way to obtain an [`OrderedCircuit`], so every
//! ordered circuit is known to be in bounds. The execution order is:
//!
//! 1. ascending `time`,
//! 2. then ascending target qubit,
//! 3. then input list position.
//!
//! Gates at the same time on different targets commute, so for editor
//! output (one gate per grid cell) the final state does not depend on the
//! order of the input list.

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::{debug, warn};

use crate::circuit::Circuit;
use crate::dag::DependencyDag;
use crate::error::{GateRef, ValidationError};
use crate::gate::{Gate, Operation};

fn gate_ref(position: usize, gate: &Gate) -> GateRef {
    GateRef {
        position,
        id: gate.id.clone(),
        name: gate.name(),
    }
}

/// Check a single gate's qubit indices against a register of `num_qubits`.
pub(crate) fn check_gate(
    position: usize,
    gate: &Gate,
    num_qubits: u32,
) -> Result<(), ValidationError> {
    for qubit in gate.op.qubits() {
        if !qubit.is_within(num_qubits) {
            return Err(ValidationError::InvalidQubitIndex {
                gate: gate_ref(position, gate),
                qubit,
                num_qubits,
            });
        }
    }
    if let Some(control) = gate.op.control() {
        if control == gate.op.target() {
            return Err(ValidationError::InvalidControlTarget {
                gate: gate_ref(position, gate),
                qubit: control,
            });
        }
    }
    Ok(())
}

/// Validate `circuit` and order its gates for execution.
pub fn validate(circuit: &Circuit, max_qubits: u32) -> Result<OrderedCircuit, ValidationError> {
    let num_qubits = circuit.num_qubits();
    if num_qubits == 0 {
        return Err(ValidationError::EmptyRegister);
    }
    if num_qubits > max_qubits {
        return Err(ValidationError::QubitCountExceeded {
            requested: num_qubits,
            max: max_qubits,
        });
    }

    let mut seen_ids: FxHashMap<&str, usize> = FxHashMap::default();
    for (position, gate) in circuit.gates().iter().enumerate() {
        check_gate(position, gate, num_qubits)?;
        if gate.id.is_empty() {
            continue;
        }
        if let Some(&first_position) = seen_ids.get(gate.id.as_str()) {
            return Err(ValidationError::DuplicateGateId {
                gate: gate_ref(position, gate),
                first_position,
            });
        }
        seen_ids.insert(gate.id.as_str(), position);
    }

    // sort_by_key is stable, so equal keys keep their list order.
    let mut gates = circuit.gates().to_vec();
    gates.sort_by_key(|g| (g.time, g.target()));

    warn_slot_collisions(&gates);
    debug!(
        "Validated circuit: {} qubits, {} gates",
        num_qubits,
        gates.len()
    );

    Ok(OrderedCircuit { num_qubits, gates })
}

/// Log gates that share a time column and a qubit.
///
/// Their relative order comes from the tie-break rule rather than from the
/// editor grid, so it depends on target index and list position.
fn warn_slot_collisions(ordered: &[Gate]) {
    for column in ordered.chunk_by(|a, b| a.time == b.time) {
        if column.len() < 2 {
            continue;
        }
        let mut occupied = FxHashSet::default();
        for gate in column {
            for qubit in gate.op.qubits() {
                if !occupied.insert(qubit) {
                    warn!(
                        "Slot collision at t={}: {} shares {} with an earlier gate in the same column",
                        gate.time, gate.op, qubit
                    );
                }
            }
        }
    }
}

/// A validated circuit with gates in execution order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedCircuit {
    num_qubits: u32,
    gates: Vec<Gate>,
}

impl OrderedCircuit {
    /// Get the number of qubits.
    #[inline]
    pub fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    /// Gates in execution order.
    #[inline]
    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    /// Operations in execution order.
    pub fn operations(&self) -> impl Iterator<Item = &Operation> {
        self.gates.iter().map(|g| &g.op)
    }

    /// Get the number of gates, measurement markers included.
    pub fn len(&self) -> usize {
        self.gates.len()
    }

    /// Check whether the circuit has no gates.
    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    /// Number of unitary gates.
    pub fn num_unitary(&self) -> usize {
        self.operations().filter(|op| op.is_unitary()).count()
    }

    /// Qubits carrying at least one measurement marker, ascending.
    pub fn measured_qubits(&self) -> Vec<crate::QubitId> {
        let mut qubits: Vec<_> = self
            .operations()
            .filter(|op| op.is_measurement())
            .map(Operation::target)
            .collect();
        qubits.sort_unstable();
        qubits.dedup();
        qubits
    }

    /// Build the wire-dependency DAG of this circuit.
    pub fn dag(&self) -> DependencyDag {
        DependencyDag::from_ordered(self)
    }
}
