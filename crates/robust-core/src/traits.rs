//! Core traits for robust statistical estimation
//!
//! This module provides the foundational traits that all statistical
//! estimators build upon. Algorithm-specific traits (like QuantileEstimator,
//! SpreadEstimator, etc.) are defined in their respective crates.

use crate::Result;

/// Core trait for robust estimators
///
/// This trait defines the interface for estimators that compute a single
/// statistic from a data sample.
pub trait RobustEstimator {
    /// Output type of the estimator
    type Output;

    /// Estimate the statistic from the given sample
    ///
    /// The sample is copied and validated; it is never reordered.
    fn estimate(&self, sample: &[f64]) -> Result<Self::Output>;

    /// Estimate from pre-sorted data (optimization opportunity)
    fn estimate_sorted(&self, sorted_sample: &[f64]) -> Result<Self::Output> {
        self.estimate(sorted_sample)
    }
}

/// Base trait for all central tendency estimators
///
/// This is the fundamental trait for estimators that measure the "center"
/// or "typical value" of a distribution. Implementations include means,
/// medians, trimmed means, and other robust measures.
///
/// # API Convention
///
/// - Methods without suffix copy and sort the data (take `&[f64]`)
/// - Methods with `_sorted` suffix require pre-sorted data (take `&[f64]`)
///
/// # Example
///
/// ```rust
/// use robust_core::{CentralTendencyEstimator, Error, Result};
///
/// #[derive(Clone)]
/// struct Midrange;
///
/// impl CentralTendencyEstimator for Midrange {
///     fn estimate_sorted(&self, sorted_data: &[f64]) -> Result<f64> {
///         match (sorted_data.first(), sorted_data.last()) {
///             (Some(lo), Some(hi)) => Ok((lo + hi) / 2.0),
///             _ => Err(Error::empty_input()),
///         }
///     }
///
///     fn name(&self) -> &str { "Midrange" }
///     fn is_robust(&self) -> bool { false }
///     fn breakdown_point(&self) -> f64 { 0.0 }
/// }
///
/// assert_eq!(Midrange.estimate(&[3.0, 1.0, 2.0]).unwrap(), 2.0);
/// ```
pub trait CentralTendencyEstimator: Send + Sync + Clone {
    /// Estimate the central tendency from a sample
    ///
    /// The default implementation normalizes a sorted copy and delegates to
    /// [`estimate_sorted`](Self::estimate_sorted).
    fn estimate(&self, data: &[f64]) -> Result<f64> {
        let sorted = crate::sample::sorted_copy(data, 1)?;
        self.estimate_sorted(&sorted)
    }

    /// Estimate the central tendency from pre-sorted data
    fn estimate_sorted(&self, sorted_data: &[f64]) -> Result<f64>;

    /// Human-readable name of the estimator
    fn name(&self) -> &str;

    /// Whether this estimator is robust to outliers
    fn is_robust(&self) -> bool;

    /// The breakdown point (fraction of contamination the estimator can handle)
    /// - 0.0 for non-robust estimators (e.g., mean)
    /// - 0.5 for maximally robust estimators (e.g., median)
    fn breakdown_point(&self) -> f64;
}
