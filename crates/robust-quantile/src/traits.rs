//! Core traits for quantile estimation

use crate::Result;
use robust_core::sample::sorted_copy;
use robust_core::CentralTendencyEstimator;

/// Main trait for quantile estimation
///
/// This extends `CentralTendencyEstimator` since the median (p = 0.5) is a
/// measure of central tendency.
pub trait QuantileEstimator: CentralTendencyEstimator {
    /// Estimate a single quantile
    ///
    /// The data is copied and sorted; the caller's order is preserved.
    ///
    /// # Arguments
    /// * `data` - The data sample
    /// * `p` - The probability, clamped to `[0, 1]`
    fn quantile(&self, data: &[f64], p: f64) -> Result<f64> {
        let sorted = sorted_copy(data, 1)?;
        self.quantile_sorted(&sorted, p)
    }

    /// Estimate a single quantile from pre-sorted data
    fn quantile_sorted(&self, sorted_data: &[f64], p: f64) -> Result<f64>;

    /// Estimate multiple quantiles, sorting a copy of the data once
    fn quantiles(&self, data: &[f64], ps: &[f64]) -> Result<Vec<f64>> {
        let sorted = sorted_copy(data, 1)?;
        self.quantiles_sorted(&sorted, ps)
    }

    /// Estimate multiple quantiles from pre-sorted data
    fn quantiles_sorted(&self, sorted_data: &[f64], ps: &[f64]) -> Result<Vec<f64>> {
        ps.iter().map(|&p| self.quantile_sorted(sorted_data, p)).collect()
    }
}
