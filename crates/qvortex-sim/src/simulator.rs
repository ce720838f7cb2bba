//! Simulation driver: validate, evolve, check, sample, assemble.

use std::time::{Duration, Instant};

use qvortex_ir::{Circuit, MAX_SUPPORTED_QUBITS, OrderedCircuit, ValidationError, basis_bitstring};
use tracing::{debug, info, instrument, warn};

use crate::config::SimConfig;
use crate::error::{SimError, SimResult};
use crate::result::{Amplitude, SimulationResult};
use crate::sampling::{Cdf, sample_counts};
use crate::statevector::Statevector;

/// Simulate a validated circuit with the default configuration.
pub fn simulate(circuit: &OrderedCircuit, shots: u32) -> SimResult<SimulationResult> {
    Simulator::default().simulate(circuit, shots)
}

/// Local statevector simulator.
///
/// Holds only configuration; every call allocates its own state, so one
/// simulator can serve concurrent runs.
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    config: SimConfig,
}

impl Simulator {
    /// Create a simulator with the given configuration.
    pub fn new(config: SimConfig) -> Self {
        Self { config }
    }

    /// Create a simulator from validated configuration.
    pub fn try_new(config: SimConfig) -> SimResult<Self> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Get the configuration.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Validate `circuit` and run it. Uses the circuit's own shot count when
    /// it has one, otherwise the configured default.
    pub fn run(&self, circuit: &Circuit) -> SimResult<SimulationResult> {
        let shots = circuit.shots().unwrap_or(self.config.shots);
        self.run_with_shots(circuit, shots)
    }

    /// Validate `circuit` and run it for `shots` draws.
    pub fn run_with_shots(&self, circuit: &Circuit, shots: u32) -> SimResult<SimulationResult> {
        let ordered = circuit.validate_with_limit(self.config.max_qubits)?;
        self.simulate(&ordered, shots)
    }

    /// Run a validated circuit.
    #[instrument(skip(self, circuit), fields(qubits = circuit.num_qubits(), gates = circuit.len()))]
    pub fn simulate(&self, circuit: &OrderedCircuit, shots: u32) -> SimResult<SimulationResult> {
        let num_qubits = circuit.num_qubits();
        // `new` skips config validation, so clamp to the hard ceiling here.
        let max_qubits = self.config.max_qubits.min(MAX_SUPPORTED_QUBITS);
        if num_qubits > max_qubits {
            return Err(ValidationError::QubitCountExceeded {
                requested: num_qubits,
                max: max_qubits,
            }
            .into());
        }
        if shots > self.config.max_shots {
            return Err(SimError::ShotLimitExceeded {
                requested: shots,
                max: self.config.max_shots,
            });
        }

        let start = Instant::now();
        let n = num_qubits as usize;
        debug!("Starting simulation: {} qubits, {} shots", n, shots);

        let mut sv = Statevector::new(n)
            .with_parallel_threshold(self.config.parallel_threshold_qubits as usize);
        for op in circuit.operations() {
            sv.apply(op);
        }
        debug!("Applied {} unitary gates", circuit.num_unitary());

        let norm = sv.norm_sqr();
        if (norm - 1.0).abs() > self.config.norm_tolerance {
            warn!("State norm {} outside tolerance, discarding run", norm);
            return Err(SimError::InvariantViolation {
                norm,
                tolerance: self.config.norm_tolerance,
            });
        }

        let cdf = Cdf::new(&sv.probabilities());
        let histogram = sample_counts(&cdf, shots, self.config.seed);
        let counts = histogram
            .into_iter()
            .map(|(idx, count)| (basis_bitstring(idx, n), count))
            .collect();

        let elapsed = start.elapsed();
        debug!("Simulation completed in {:?}", elapsed);

        Ok(SimulationResult {
            counts,
            statevector: sv.into_amplitudes().into_iter().map(Amplitude::from).collect(),
            execution_time_ms: elapsed.as_secs_f64() * 1000.0,
            shots,
        })
    }

    /// Run `circuit` on the blocking thread pool, honouring the configured
    /// timeout.
    ///
    /// On timeout the caller gets [`SimError::Timeout`] immediately; the
    /// blocking task runs to completion in the background and its result
    /// is dropped.
    #[instrument(skip(self, circuit), fields(qubits = circuit.num_qubits()))]
    pub async fn run_async(&self, circuit: Circuit) -> SimResult<SimulationResult> {
        let simulator = self.clone();
        let handle = tokio::task::spawn_blocking(move || simulator.run(&circuit));

        let joined = match self.config.timeout_ms {
            Some(ms) => tokio::time::timeout(Duration::from_millis(ms), handle)
                .await
                .map_err(|_| {
                    warn!("Simulation exceeded {} ms", ms);
                    SimError::Timeout(ms)
                })?,
            None => handle.await,
        };

        let result = joined.map_err(|e| SimError::Task(e.to_string()))??;
        info!(
            "Simulation finished: {} outcomes in {:.3} ms",
            result.counts.len(),
            result.execution_time_ms
        );
        Ok(result)
    }
}
