//! qvortex Statevector Simulation Engine
//!
//! Runs circuits from `qvortex-ir` on a dense statevector and samples
//! measurement outcomes with the Born rule. Simulation is exact up to
//! floating-point error; the only randomness is in shot sampling.
//!
//! # Features
//!
//! - **Exact Evolution**: `2^n` `Complex64` amplitudes, updated in place
//! - **Deferred Measurement**: `M` gates mark qubits; sampling happens once
//!   at the end over the whole register
//! - **Parallel Kernels**: pair updates and shot sampling run on rayon for
//!   larger registers
//! - **Reproducible Sampling**: optional seed for identical histograms
//!
//! # Performance
//!
//! | Qubits | Memory | Simulation Speed |
//! |--------|--------|------------------|
//! | 10 | ~16 KB | Instant |
//! | 15 | ~512 KB | Fast |
//! | 20 | ~16 MB | Moderate |
//! | 24 | ~256 MB | Slow |
//!
//! # Example
//!
//! ```rust
//! use qvortex_ir::Circuit;
//! use qvortex_sim::{SimConfig, Simulator};
//!
//! let simulator = Simulator::new(SimConfig::default().with_seed(7));
//! let result = simulator.run(&Circuit::bell().unwrap()).unwrap();
//!
//! // Only |00⟩ and |11⟩ are ever observed
//! assert!(result.counts.keys().all(|k| k == "00" || k == "11"));
//! assert_eq!(result.total_shots(), 1000);
//! ```

mod config;
mod error;
mod result;
mod sampling;
mod simulator;
mod statevector;

pub use config::{ConfigError, SimConfig};
pub use error::{SimError, SimResult};
pub use result::{Amplitude, SimulationResult};
pub use sampling::{Cdf, sample_counts};
pub use simulator::{Simulator, simulate};
pub use statevector::Statevector;
