//! Core traits for spread estimation

use robust_core::sample::sorted_copy;
use robust_core::Result;

/// Intrinsic properties of a spread estimator that don't depend on implementation details
pub trait SpreadEstimatorProperties {
    /// Get the name of this spread estimator
    fn name(&self) -> &str;

    /// Check if this estimator is robust to outliers
    fn is_robust(&self) -> bool;

    /// Get the asymptotic breakdown point (0.0 to 0.5)
    fn breakdown_point(&self) -> f64;

    /// Get the efficiency of this estimator relative to the standard deviation
    /// for normal distributions (0.0 to 1.0)
    fn gaussian_efficiency(&self) -> f64;
}

/// Trait for spread/scale estimators
///
/// Estimators carry their own configuration (quantile definition, scaling
/// constant) so they can be stored and passed around by value.
pub trait SpreadEstimator: SpreadEstimatorProperties {
    /// Estimate spread from an unsorted sample
    ///
    /// The sample is copied and sorted; the caller's slice is not touched.
    fn estimate(&self, data: &[f64]) -> Result<f64> {
        let sorted = sorted_copy(data, 1)?;
        self.estimate_sorted(&sorted)
    }

    /// Compute spread from pre-sorted data
    fn estimate_sorted(&self, sorted_data: &[f64]) -> Result<f64>;
}
