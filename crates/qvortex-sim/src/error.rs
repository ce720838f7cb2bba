//! Error types for the simulation engine.

use qvortex_ir::ValidationError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors raised while running a circuit.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SimError {
    /// The circuit was rejected before any state was allocated.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The evolved state is no longer normalized.
    #[error("State norm drifted to {norm:.12} (tolerance {tolerance:e}); result discarded")]
    InvariantViolation { norm: f64, tolerance: f64 },

    /// More shots requested than the configured limit allows.
    #[error("Requested {requested} shots but the limit is {max}")]
    ShotLimitExceeded { requested: u32, max: u32 },

    /// Invalid engine configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The run did not finish within the configured timeout.
    #[error("Simulation timed out after {0} ms")]
    Timeout(u64),

    /// The blocking simulation task panicked or was cancelled.
    #[error("Simulation task failed: {0}")]
    Task(String),
}

/// Result type for simulation operations.
pub type SimResult<T> = Result<T, SimError>;
