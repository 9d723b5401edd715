//! Tukey fences and outlier detection
//!
//! A value is an outlier when it lies strictly outside
//! `[Q1 − 1.5·IQR, Q3 + 1.5·IQR]`.

use crate::iqr::quartiles_sorted;
use num_traits::ToPrimitive;
use robust_core::sample::sorted_copy;
use robust_core::{Result, RobustEstimator};
use robust_quantile::QuantileType;
use serde::Serialize;
use tracing::debug;

/// Multiplier applied to the IQR to place the fences
pub const TUKEY_MULTIPLIER: f64 = 1.5;

/// Inner Tukey fences and the quartiles they were built from
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TukeyFences {
    pub lower: f64,
    pub upper: f64,
    pub q1: f64,
    pub q3: f64,
    pub iqr: f64,
}

impl TukeyFences {
    /// Whether `x` falls outside the fences
    pub fn is_outlier(&self, x: f64) -> bool {
        x < self.lower || x > self.upper
    }
}

/// Fences of an unsorted sample
pub fn tukey_fences<T: ToPrimitive>(sample: &[T], qtype: QuantileType) -> Result<TukeyFences> {
    let sorted = sorted_copy(sample, 1)?;
    tukey_fences_sorted(&sorted, qtype)
}

/// Fences of pre-sorted data
pub fn tukey_fences_sorted(sorted: &[f64], qtype: QuantileType) -> Result<TukeyFences> {
    let (q1, q3) = quartiles_sorted(sorted, qtype)?;
    let iqr = q3 - q1;
    Ok(TukeyFences {
        lower: q1 - TUKEY_MULTIPLIER * iqr,
        upper: q3 + TUKEY_MULTIPLIER * iqr,
        q1,
        q3,
        iqr,
    })
}

/// Values outside the Tukey fences, in ascending order
///
/// ```rust
/// use robust_quantile::QuantileType;
/// use robust_spread::outliers;
///
/// assert_eq!(outliers(&[1, 2, 3, 4, 5, 100], QuantileType::Type7).unwrap(), vec![100.0]);
/// ```
pub fn outliers<T: ToPrimitive>(sample: &[T], qtype: QuantileType) -> Result<Vec<f64>> {
    let sorted = sorted_copy(sample, 1)?;
    outliers_sorted(&sorted, qtype)
}

/// Outliers of pre-sorted data, in ascending order
pub fn outliers_sorted(sorted: &[f64], qtype: QuantileType) -> Result<Vec<f64>> {
    let fences = tukey_fences_sorted(sorted, qtype)?;
    let found: Vec<f64> = sorted.iter().copied().filter(|&x| fences.is_outlier(x)).collect();
    if !found.is_empty() {
        debug!(
            count = found.len(),
            lower = fences.lower,
            upper = fences.upper,
            "tukey outliers detected"
        );
    }
    Ok(found)
}

/// Tukey fence rule as a reusable estimator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TukeyRule {
    qtype: QuantileType,
}

impl TukeyRule {
    pub fn new(qtype: QuantileType) -> Self {
        Self { qtype }
    }

    /// Outliers of an unsorted sample under this rule
    pub fn outliers(&self, sample: &[f64]) -> Result<Vec<f64>> {
        outliers(sample, self.qtype)
    }
}

impl RobustEstimator for TukeyRule {
    type Output = TukeyFences;

    fn estimate(&self, sample: &[f64]) -> Result<TukeyFences> {
        tukey_fences(sample, self.qtype)
    }

    fn estimate_sorted(&self, sorted_sample: &[f64]) -> Result<TukeyFences> {
        tukey_fences_sorted(sorted_sample, self.qtype)
    }
}
