//! Dense statevector and gate kernels.
//!
//! Qubit 0 is the most significant bit of a basis index, so qubit `q` of an
//! `n`-qubit register has mask `1 << (n - 1 - q)`.

use std::f64::consts::FRAC_1_SQRT_2;

use num_complex::Complex64;
use qvortex_ir::{Operation, QubitId};
use rayon::prelude::*;

/// 2x2 gate matrix, row major.
type Matrix2 = [[Complex64; 2]; 2];

const ZERO: Complex64 = Complex64::new(0.0, 0.0);
const ONE: Complex64 = Complex64::new(1.0, 0.0);
const I: Complex64 = Complex64::new(0.0, 1.0);
const H: Complex64 = Complex64::new(FRAC_1_SQRT_2, 0.0);

const HADAMARD: Matrix2 = [[H, H], [H, Complex64::new(-FRAC_1_SQRT_2, 0.0)]];
const PAULI_Y: Matrix2 = [[ZERO, Complex64::new(0.0, -1.0)], [I, ZERO]];
const PHASE_S: Matrix2 = [[ONE, ZERO], [ZERO, I]];
// e^{iπ/4}
const PHASE_T: Matrix2 = [
    [ONE, ZERO],
    [ZERO, Complex64::new(FRAC_1_SQRT_2, FRAC_1_SQRT_2)],
];

/// A statevector representing a quantum state.
#[derive(Debug, Clone)]
pub struct Statevector {
    /// The state amplitudes (2^n complex numbers).
    amplitudes: Vec<Complex64>,
    /// Number of qubits.
    num_qubits: usize,
    /// Use rayon for pair updates.
    parallel: bool,
}

impl Statevector {
    /// Create a new statevector initialized to |0...0⟩.
    pub fn new(num_qubits: usize) -> Self {
        let mut amplitudes = vec![ZERO; 1 << num_qubits];
        amplitudes[0] = ONE;
        Self {
            amplitudes,
            num_qubits,
            parallel: false,
        }
    }

    /// Enable parallel kernels when the register has at least
    /// `threshold_qubits` qubits.
    pub fn with_parallel_threshold(mut self, threshold_qubits: usize) -> Self {
        self.parallel = self.num_qubits >= threshold_qubits;
        self
    }

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Amplitudes indexed by basis state.
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    /// Consume the statevector, returning its amplitudes.
    pub fn into_amplitudes(self) -> Vec<Complex64> {
        self.amplitudes
    }

    /// Sum of squared magnitudes.
    pub fn norm_sqr(&self) -> f64 {
        if self.parallel {
            self.amplitudes.par_iter().map(|a| a.norm_sqr()).sum()
        } else {
            self.amplitudes.iter().map(|a| a.norm_sqr()).sum()
        }
    }

    /// Born-rule probability of every basis state.
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(|a| a.norm_sqr()).collect()
    }

    fn mask(&self, qubit: QubitId) -> usize {
        qubit.mask(self.num_qubits)
    }

    /// Apply an operation. Measurement markers leave the state unchanged.
    ///
    /// Qubit indices must already be validated against the register.
    pub fn apply(&mut self, op: &Operation) {
        match *op {
            Operation::H { target } => self.apply_matrix(target, &HADAMARD),
            Operation::X { target } => self.apply_x(target),
            Operation::Y { target } => self.apply_matrix(target, &PAULI_Y),
            Operation::Z { target } => self.apply_z(target),
            Operation::S { target } => self.apply_matrix(target, &PHASE_S),
            Operation::T { target } => self.apply_matrix(target, &PHASE_T),
            Operation::CX { control, target } => self.apply_cx(control, target),
            Operation::CZ { control, target } => self.apply_cz(control, target),
            Operation::Swap { control, target } => self.apply_swap(control, target),
            Operation::M { .. } => {}
        }
    }

    // =========================================================================
    // Pair iteration
    // =========================================================================

    /// Call `f(base, a0, a1)` once for every pair of indices `(base,
    /// base | mask)` with the `mask` bit clear in `base`.
    fn for_each_pair<F>(&mut self, mask: usize, f: F)
    where
        F: Fn(usize, &mut Complex64, &mut Complex64) + Sync,
    {
        let block = mask << 1;
        let visit = |(chunk_index, chunk): (usize, &mut [Complex64])| {
            let (lo, hi) = chunk.split_at_mut(mask);
            let offset = chunk_index * block;
            for (k, (a0, a1)) in lo.iter_mut().zip(hi.iter_mut()).enumerate() {
                f(offset + k, a0, a1);
            }
        };

        if self.parallel {
            self.amplitudes
                .par_chunks_mut(block)
                .enumerate()
                .for_each(visit);
        } else {
            self.amplitudes.chunks_mut(block).enumerate().for_each(visit);
        }
    }

    // =========================================================================
    // Single-qubit gate implementations
    // =========================================================================

    fn apply_matrix(&mut self, target: QubitId, m: &Matrix2) {
        let mask = self.mask(target);
        self.for_each_pair(mask, |_, a0, a1| {
            let (x, y) = (*a0, *a1);
            *a0 = m[0][0] * x + m[0][1] * y;
            *a1 = m[1][0] * x + m[1][1] * y;
        });
    }

    fn apply_x(&mut self, target: QubitId) {
        let mask = self.mask(target);
        self.for_each_pair(mask, |_, a0, a1| std::mem::swap(a0, a1));
    }

    fn apply_z(&mut self, target: QubitId) {
        let mask = self.mask(target);
        self.for_each_pair(mask, |_, _, a1| *a1 = -*a1);
    }

    // =========================================================================
    // Two-qubit gate implementations
    // =========================================================================

    fn apply_cx(&mut self, control: QubitId, target: QubitId) {
        let ctrl_mask = self.mask(control);
        let tgt_mask = self.mask(target);
        self.for_each_pair(tgt_mask, |base, a0, a1| {
            if base & ctrl_mask != 0 {
                std::mem::swap(a0, a1);
            }
        });
    }

    fn apply_cz(&mut self, control: QubitId, target: QubitId) {
        let ctrl_mask = self.mask(control);
        let tgt_mask = self.mask(target);
        self.for_each_pair(tgt_mask, |base, _, a1| {
            if base & ctrl_mask != 0 {
                *a1 = -*a1;
            }
        });
    }

    fn apply_swap(&mut self, q1: QubitId, q2: QubitId) {
        self.apply_cx(q1, q2);
        self.apply_cx(q2, q1);
        self.apply_cx(q1, q2);
    }
}
