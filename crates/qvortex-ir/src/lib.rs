//! qvortex Circuit Model
//!
//! This crate provides the circuit data model consumed by the qvortex
//! statevector engine: qubit identifiers, the closed set of supported gates,
//! the circuit document exchanged with the editor, and the validation step
//! that turns a document into a deterministic execution order.
//!
//! # Overview
//!
//! A [`Circuit`] is what the editor exports: a register width and an
//! unordered list of [`Gate`]s, each placed at an integer `time` column.
//! [`Circuit::validate`] checks it and returns an [`OrderedCircuit`] whose
//! gates are sorted by time, then target qubit, then list position.
//!
//! # Bit ordering
//!
//! Qubit 0 is the most significant bit of a basis index. Basis index `i` is
//! rendered as `i` in binary, zero-padded to the register width, so the
//! first character of a bitstring is qubit 0.
//!
//! # Example: Building a Bell State
//!
//! ```rust
//! use qvortex_ir::{Circuit, QubitId};
//!
//! let mut circuit = Circuit::new(2);
//! circuit.h(QubitId(0)).unwrap();
//! circuit.cx(QubitId(0), QubitId(1)).unwrap();
//!
//! let ordered = circuit.validate().unwrap();
//! assert_eq!(ordered.len(), 2);
//! assert_eq!(ordered.dag().depth(), 2);
//! ```
//!
//! # Example: Loading an exported document
//!
//! ```rust
//! use qvortex_ir::Circuit;
//!
//! let circuit = Circuit::from_json(
//!     r#"{"qubits": 1, "gates": [{"type": "X", "target": 0, "time": 0, "id": "X-1"}]}"#,
//! ).unwrap();
//! assert_eq!(circuit.num_gates(), 1);
//! ```
//!
//! # Supported Gates
//!
//! | Gate | Qubits | Description |
//! |------|--------|-------------|
//! | `H` | 1 | Hadamard gate |
//! | `X`, `Y`, `Z` | 1 | Pauli gates |
//! | `S`, `T` | 1 | Phase gates |
//! | `CX` | 2 | Controlled-NOT (CNOT) |
//! | `CZ` | 2 | Controlled-Z |
//! | `SWAP` | 2 | SWAP gate |
//! | `M` | 1 | Measurement marker (deferred) |

pub mod circuit;
pub mod dag;
pub mod error;
pub mod gate;
pub mod qubit;
pub mod validate;

pub use circuit::{Circuit, DEFAULT_MAX_QUBITS, MAX_SUPPORTED_QUBITS};
pub use dag::DependencyDag;
pub use error::{GateRef, IrError, IrResult, ValidationError};
pub use gate::{Gate, Operation};
pub use qubit::{QubitId, basis_bitstring};
pub use validate::OrderedCircuit;
