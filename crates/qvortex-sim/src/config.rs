//! Simulator configuration.
//!
//! Supports loading configuration from:
//! 1. A YAML file (default `~/.qvortex/config.yaml`)
//! 2. Environment variables (with `QVORTEX_` prefix)
//!
//! Environment variables override the file, which overrides the defaults.

use std::path::{Path, PathBuf};

use qvortex_ir::{DEFAULT_MAX_QUBITS, MAX_SUPPORTED_QUBITS};
use serde::{Deserialize, Serialize};

/// Engine settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Shots used when the circuit does not request a count.
    pub shots: u32,

    /// Largest register accepted by validation.
    pub max_qubits: u32,

    /// Largest shot count accepted for a single run.
    pub max_shots: u32,

    /// Allowed deviation of the final norm from 1.
    pub norm_tolerance: f64,

    /// Registers with at least this many qubits use parallel kernels.
    pub parallel_threshold_qubits: u32,

    /// RNG seed for reproducible histograms.
    pub seed: Option<u64>,

    /// Wall-clock limit for `run_async`, in milliseconds.
    pub timeout_ms: Option<u64>,
}

fn default_shots() -> u32 {
    1000
}

fn default_max_shots() -> u32 {
    1_000_000
}

fn default_norm_tolerance() -> f64 {
    1e-6
}

fn default_parallel_threshold() -> u32 {
    14
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            shots: default_shots(),
            max_qubits: DEFAULT_MAX_QUBITS,
            max_shots: default_max_shots(),
            norm_tolerance: default_norm_tolerance(),
            parallel_threshold_qubits: default_parallel_threshold(),
            seed: None,
            timeout_ms: None,
        }
    }
}

impl SimConfig {
    /// Default config file location, `~/.qvortex/config.yaml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".qvortex").join("config.yaml"))
    }

    /// Load configuration from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {e}", path.display())))?;
        Self::from_yaml(&contents)
    }

    /// Parse configuration from YAML text.
    pub fn from_yaml(contents: &str) -> Result<Self, ConfigError> {
        let config: SimConfig =
            serde_yaml_ng::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with the following precedence:
    /// 1. `config_file` if given, else the default path if it exists
    /// 2. Environment variable overrides
    pub fn load(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match config_file {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_path().filter(|p| p.exists()) {
                Some(path) => Self::from_file(path)?,
                None => Self::default(),
            },
        };

        let config = config.merge_env();
        config.validate()?;
        Ok(config)
    }

    /// Override fields from `QVORTEX_*` environment variables that are set
    /// and parse. Unset or unparsable variables leave the field unchanged.
    pub fn merge_env(mut self) -> Self {
        if let Some(v) = env_parse("QVORTEX_SHOTS") {
            self.shots = v;
        }
        if let Some(v) = env_parse("QVORTEX_MAX_QUBITS") {
            self.max_qubits = v;
        }
        if let Some(v) = env_parse("QVORTEX_MAX_SHOTS") {
            self.max_shots = v;
        }
        if let Some(v) = env_parse("QVORTEX_NORM_TOLERANCE") {
            self.norm_tolerance = v;
        }
        if let Some(v) = env_parse("QVORTEX_PARALLEL_THRESHOLD") {
            self.parallel_threshold_qubits = v;
        }
        if let Some(v) = env_parse("QVORTEX_SEED") {
            self.seed = Some(v);
        }
        if let Some(v) = env_parse("QVORTEX_TIMEOUT_MS") {
            self.timeout_ms = Some(v);
        }
        self
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_qubits == 0 || self.max_qubits > MAX_SUPPORTED_QUBITS {
            return Err(ConfigError::Invalid(format!(
                "max_qubits must be between 1 and {MAX_SUPPORTED_QUBITS}, got {}",
                self.max_qubits
            )));
        }

        if self.shots > self.max_shots {
            return Err(ConfigError::Invalid(format!(
                "shots ({}) exceeds max_shots ({})",
                self.shots, self.max_shots
            )));
        }

        if !self.norm_tolerance.is_finite() || self.norm_tolerance <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "norm_tolerance must be a positive number, got {}",
                self.norm_tolerance
            )));
        }

        if self.timeout_ms == Some(0) {
            return Err(ConfigError::Invalid(
                "timeout_ms must be greater than 0; omit the field to disable the timeout"
                    .to_string(),
            ));
        }

        Ok(())
    }

    /// Set the default shot count.
    pub fn with_shots(mut self, shots: u32) -> Self {
        self.shots = shots;
        self
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the qubit limit.
    pub fn with_max_qubits(mut self, max_qubits: u32) -> Self {
        self.max_qubits = max_qubits;
        self
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok()?.trim().parse().ok()
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
