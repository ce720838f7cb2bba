//! Simulation result document.

use std::collections::BTreeMap;

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

/// A complex amplitude as exchanged with the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Amplitude {
    pub real: f64,
    pub imag: f64,
}

impl Amplitude {
    /// Squared magnitude, i.e. the Born-rule probability.
    pub fn probability(&self) -> f64 {
        self.real * self.real + self.imag * self.imag
    }

    /// Magnitude `|a|`.
    pub fn magnitude(&self) -> f64 {
        self.real.hypot(self.imag)
    }

    /// Phase in degrees, in `(-180, 180]`.
    pub fn phase_degrees(&self) -> f64 {
        // `+ 0.0` clears a signed zero left by negation.
        let deg = (self.imag + 0.0).atan2(self.real).to_degrees();
        if deg <= -180.0 { deg + 360.0 } else { deg }
    }
}

impl From<Complex64> for Amplitude {
    fn from(c: Complex64) -> Self {
        Self {
            real: c.re,
            imag: c.im,
        }
    }
}

impl From<Amplitude> for Complex64 {
    fn from(a: Amplitude) -> Self {
        Complex64::new(a.real, a.imag)
    }
}

/// Output of one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    /// Observed bitstrings and how often each occurred.
    pub counts: BTreeMap<String, u64>,
    /// Final amplitudes indexed by basis state.
    pub statevector: Vec<Amplitude>,
    /// Wall-clock time of evolution and sampling.
    pub execution_time_ms: f64,
    /// Number of shots requested.
    pub shots: u32,
}

impl SimulationResult {
    /// Number of qubits implied by the statevector length.
    pub fn num_qubits(&self) -> usize {
        self.statevector.len().trailing_zeros() as usize
    }

    /// Sum of all counts.
    pub fn total_shots(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Born-rule probability per basis state.
    pub fn probabilities(&self) -> Vec<f64> {
        self.statevector.iter().map(Amplitude::probability).collect()
    }

    /// Counts sorted by frequency, most frequent first. Ties keep
    /// bitstring order.
    pub fn sorted_counts(&self) -> Vec<(&str, u64)> {
        let mut sorted: Vec<_> = self.counts.iter().map(|(k, &v)| (k.as_str(), v)).collect();
        sorted.sort_by(|a, b| b.1.cmp(&a.1));
        sorted
    }

    /// The most frequent outcome, if any shots were taken.
    pub fn most_frequent(&self) -> Option<(&str, u64)> {
        self.sorted_counts().into_iter().next()
    }

    /// Observed frequency of `bitstring`.
    pub fn frequency(&self, bitstring: &str) -> f64 {
        let total = self.total_shots();
        if total == 0 {
            return 0.0;
        }
        self.counts.get(bitstring).copied().unwrap_or(0) as f64 / total as f64
    }

    /// Serialize as JSON for the renderer.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SimulationResult {
        let h = std::f64::consts::FRAC_1_SQRT_2;
        SimulationResult {
            counts: BTreeMap::from([("00".to_string(), 480), ("11".to_string(), 520)]),
            statevector: vec![
                Amplitude { real: h, imag: 0.0 },
                Amplitude { real: 0.0, imag: 0.0 },
                Amplitude { real: 0.0, imag: 0.0 },
                Amplitude { real: 0.0, imag: h },
            ],
            execution_time_ms: 0.25,
            shots: 1000,
        }
    }

    #[test]
    fn test_json_shape() {
        let json: serde_json::Value = serde_json::from_str(&sample().to_json().unwrap()).unwrap();
        assert_eq!(json["counts"]["11"], 520);
        assert_eq!(json["statevector"][3]["imag"], std::f64::consts::FRAC_1_SQRT_2);
        assert_eq!(json["executionTimeMs"], 0.25);
        assert_eq!(json["shots"], 1000);
    }

    #[test]
    fn test_helpers() {
        let result = sample();
        assert_eq!(result.num_qubits(), 2);
        assert_eq!(result.total_shots(), 1000);
        assert_eq!(result.most_frequent(), Some(("11", 520)));
        assert_eq!(result.sorted_counts()[1], ("00", 480));
        assert!((result.frequency("00") - 0.48).abs() < 1e-12);
        assert_eq!(result.frequency("01"), 0.0);

        let probs = result.probabilities();
        assert!((probs[0] - 0.5).abs() < 1e-12);
        assert!((probs[3] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_amplitude_polar() {
        let a = Amplitude {
            real: 0.0,
            imag: 0.5,
        };
        assert!((a.magnitude() - 0.5).abs() < 1e-12);
        assert!((a.phase_degrees() - 90.0).abs() < 1e-12);

        let b = Amplitude {
            real: -1.0,
            imag: 0.0,
        };
        assert!((b.phase_degrees() - 180.0).abs() < 1e-12);
    }

    #[test]
    fn test_phase_of_negated_real_amplitude() {
        let a = Amplitude {
            real: -std::f64::consts::FRAC_1_SQRT_2,
            imag: -0.0,
        };
        assert!((a.phase_degrees() - 180.0).abs() < 1e-12);

        let b = Amplitude {
            real: 0.3,
            imag: -0.3,
        };
        assert!((b.phase_degrees() + 45.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_counts() {
        let result = SimulationResult {
            counts: BTreeMap::new(),
            statevector: vec![Amplitude::from(Complex64::new(1.0, 0.0))],
            execution_time_ms: 0.0,
            shots: 0,
        };
        assert_eq!(result.most_frequent(), None);
        assert_eq!(result.frequency("0"), 0.0);
        assert_eq!(result.num_qubits(), 0);
    }
}
