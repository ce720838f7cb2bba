//! Born-rule sampling.
//!
//! Shots are drawn by inverse transform over the cumulative distribution of
//! basis-state probabilities. Draws run on rayon in fixed-size chunks, each
//! with its own RNG and histogram; histograms are merged once at the end.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// Shots drawn per rayon task.
pub const SHOT_CHUNK: u32 = 4096;

/// Cumulative distribution over basis states.
#[derive(Debug, Clone)]
pub struct Cdf {
    cumulative: Vec<f64>,
}

impl Cdf {
    /// Build from per-state probabilities.
    pub fn new(probabilities: &[f64]) -> Self {
        let cumulative = probabilities
            .iter()
            .scan(0.0, |acc, p| {
                *acc += p;
                Some(*acc)
            })
            .collect();
        Self { cumulative }
    }

    /// Total probability mass.
    pub fn total(&self) -> f64 {
        self.cumulative.last().copied().unwrap_or(0.0)
    }

    /// Basis index for a uniform draw `r ∈ [0, 1)`.
    ///
    /// Draws are scaled by the total mass, so a norm within tolerance of 1
    /// never lands past the last state. Zero-probability states are never
    /// returned.
    pub fn index_for(&self, r: f64) -> usize {
        let x = r * self.total();
        let idx = self.cumulative.partition_point(|&c| c <= x);
        idx.min(self.cumulative.len().saturating_sub(1))
    }
}

/// Draw `shots` samples and return a histogram of basis indices.
///
/// With a seed, chunk `k` uses `StdRng::seed_from_u64(seed + k)`, so the
/// histogram depends only on the seed and the distribution.
pub fn sample_counts(cdf: &Cdf, shots: u32, seed: Option<u64>) -> FxHashMap<usize, u64> {
    let num_chunks = shots.div_ceil(SHOT_CHUNK);

    (0..num_chunks)
        .into_par_iter()
        .map(|chunk| {
            let start = chunk * SHOT_CHUNK;
            let len = SHOT_CHUNK.min(shots - start);
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(u64::from(chunk))),
                None => StdRng::from_entropy(),
            };

            let mut counts = FxHashMap::default();
            for _ in 0..len {
                let r: f64 = rng.r#gen();
                *counts.entry(cdf.index_for(r)).or_insert(0) += 1;
            }
            counts
        })
        .reduce(FxHashMap::default, |mut merged, part| {
            for (idx, n) in part {
                *merged.entry(idx).or_insert(0) += n;
            }
            merged
        })
}
