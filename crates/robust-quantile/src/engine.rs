//! Sample quantile evaluation
//!
//! All nine definitions share one engine that works on sorted, finite data.
//! Ranks are 1-based and clamped to `[1, n]`, so extreme probabilities
//! collapse onto the sample minimum and maximum. A fuzz of four machine
//! epsilons absorbs rounding in `n * p` before flooring, which keeps results
//! identical to R's `quantile()` at exact integer positions.

use crate::QuantileType;
use num_traits::ToPrimitive;
use robust_core::sample::{check_sorted_input, sorted_copy};
use robust_core::{Error, Result};
use tracing::trace;

const FUZZ: f64 = 4.0 * f64::EPSILON;

/// Quantile of an unsorted sample
///
/// The sample is copied and sorted; the caller's slice is left untouched.
/// Probabilities outside `[0, 1]` are clamped.
///
/// # Errors
///
/// * [`Error::InsufficientData`] for an empty sample
/// * [`Error::NonFinite`] when an element is not a finite number
/// * [`Error::InvalidProbability`] when `p` is NaN or infinite
///
/// # Example
///
/// ```rust
/// use robust_quantile::{quantile, QuantileType};
///
/// let data = [9, 0, 8, 1, 7, 2, 6, 3, 5, 4];
/// assert_eq!(quantile(&data, 0.25, QuantileType::Type7).unwrap(), 2.25);
/// assert_eq!(quantile(&data, 0.25, QuantileType::Type1).unwrap(), 2.0);
/// ```
pub fn quantile<T: ToPrimitive>(sample: &[T], p: f64, qtype: QuantileType) -> Result<f64> {
    let p = clamp_probability(p)?;
    let sorted = sorted_copy(sample, 1)?;
    Ok(evaluate(&sorted, p, qtype))
}

/// Quantile of data the caller guarantees is sorted ascending
pub fn quantile_sorted(sorted: &[f64], p: f64, qtype: QuantileType) -> Result<f64> {
    let p = clamp_probability(p)?;
    check_sorted_input(sorted, 1)?;
    Ok(evaluate(sorted, p, qtype))
}

/// Several quantiles of sorted data, in the order of `ps`
pub fn quantiles_sorted(sorted: &[f64], ps: &[f64], qtype: QuantileType) -> Result<Vec<f64>> {
    check_sorted_input(sorted, 1)?;
    ps.iter()
        .map(|&p| clamp_probability(p).map(|p| evaluate(sorted, p, qtype)))
        .collect()
}

/// Clamp a finite probability into `[0, 1]`
///
/// # Errors
///
/// [`Error::InvalidProbability`] when `p` is NaN or infinite.
pub fn clamp_probability(p: f64) -> Result<f64> {
    if !p.is_finite() {
        return Err(Error::InvalidProbability { p });
    }
    Ok(p.clamp(0.0, 1.0))
}

fn evaluate(sorted: &[f64], p: f64, qtype: QuantileType) -> f64 {
    let value = match qtype.plotting_position() {
        Some((a, b)) => interpolated(sorted, p, a, b),
        None => match qtype {
            QuantileType::Type1 => inverse_ecdf(sorted, p),
            QuantileType::Type2 => inverse_ecdf_averaged(sorted, p),
            _ => nearest_even(sorted, p),
        },
    };
    trace!(n = sorted.len(), p, qtype = qtype.number(), value, "quantile");
    value
}

/// Order statistic `x_rank` with the rank clamped to `[1, n]`
fn order_stat(sorted: &[f64], rank: i64) -> f64 {
    let n = sorted.len() as i64;
    sorted[(rank.clamp(1, n) - 1) as usize]
}

fn fuzzy_floor(x: f64) -> i64 {
    (x + FUZZ).floor() as i64
}

// Type 1
fn inverse_ecdf(sorted: &[f64], p: f64) -> f64 {
    let np = sorted.len() as f64 * p;
    let j = fuzzy_floor(np);
    if np > j as f64 {
        order_stat(sorted, j + 1)
    } else {
        order_stat(sorted, j)
    }
}

// Type 2
fn inverse_ecdf_averaged(sorted: &[f64], p: f64) -> f64 {
    let np = sorted.len() as f64 * p;
    let j = fuzzy_floor(np);
    if np > j as f64 {
        order_stat(sorted, j + 1)
    } else {
        0.5 * order_stat(sorted, j) + 0.5 * order_stat(sorted, j + 1)
    }
}

// Type 3
fn nearest_even(sorted: &[f64], p: f64) -> f64 {
    let m = sorted.len() as f64 * p - 0.5;
    let j = fuzzy_floor(m);
    if m == j as f64 && j.rem_euclid(2) == 0 {
        order_stat(sorted, j)
    } else {
        order_stat(sorted, j + 1)
    }
}

// Types 4-9
fn interpolated(sorted: &[f64], p: f64, a: f64, b: f64) -> f64 {
    let n = sorted.len() as i64;
    let h = a + p * (n as f64 + 1.0 - a - b);
    let k = fuzzy_floor(h);
    let mut d = h - k as f64;
    if d.abs() < FUZZ {
        d = 0.0;
    }

    if k < 1 {
        return sorted[0];
    }
    if k >= n {
        return sorted[sorted.len() - 1];
    }
    let lo = order_stat(sorted, k);
    let hi = order_stat(sorted, k + 1);
    if d == 0.0 || lo == hi {
        return lo;
    }
    // Weighted form stays finite when hi - lo exceeds f64::MAX
    (1.0 - d) * lo + d * hi
}
