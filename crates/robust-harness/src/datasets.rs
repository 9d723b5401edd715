//! Reproducible sample generation
//!
//! Every generator takes an explicit seed and uses `ChaCha8Rng`, whose
//! output is stable across platforms and `rand` releases.

use anyhow::{Context, Result};
use rand::seq::index::sample;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};

/// Seed used by the benchmarks and the cross-validation binary
pub const DEFAULT_SEED: u64 = 42;

/// The ten-value sample used throughout the reference tests
pub const REFERENCE_SAMPLE: [f64; 10] = [87.30, 84.00, 85.40, 78.00, 85.00, 89.00, 79.00, 89.00, 76.00, 86.50];

/// One gross outlier on top of 1..=10
pub const OUTLIER_SAMPLE: [f64; 11] = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 1_000.0];

/// `n` values in `[0, 1000]` with three-decimal resolution
pub fn seeded_uniform(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n)
        .map(|_| f64::from(rng.gen_range(0..=1_000_000_u32)) / 1000.0)
        .collect()
}

/// `n` draws from `N(mean, std_dev²)`
pub fn seeded_normal(n: usize, mean: f64, std_dev: f64, seed: u64) -> Result<Vec<f64>> {
    let normal = Normal::new(mean, std_dev)
        .with_context(|| format!("invalid normal parameters mean={mean} std_dev={std_dev}"))?;
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    Ok((0..n).map(|_| normal.sample(&mut rng)).collect())
}

/// Copy of `base` with `count` distinct positions overwritten by `value`
///
/// `count` is capped at the sample size.
pub fn with_outliers(base: &[f64], count: usize, value: f64, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut data = base.to_vec();
    let count = count.min(data.len());
    for index in sample(&mut rng, data.len(), count) {
        data[index] = value;
    }
    data
}
