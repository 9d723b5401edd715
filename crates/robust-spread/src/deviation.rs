//! Robust dispersion from the interquartile range
//!
//! `S* = (1.25 / 1.35) · IQR / √n` approximates the standard error of the
//! median for normal data. Its square is the robust variance, and
//! `100 · S* / |median|` the robust coefficient of variation.

use crate::iqr::iqr_sorted;
use crate::traits::{SpreadEstimator, SpreadEstimatorProperties};
use num_traits::ToPrimitive;
use robust_core::sample::{check_sorted_input, sorted_copy};
use robust_core::utils::median_of_sorted;
use robust_core::{Result, ZERO_SCALE_EPSILON};
use robust_quantile::QuantileType;

/// Ratio converting an IQR into a scale comparable to the standard deviation
pub const IQR_SCALE: f64 = 1.25 / 1.35;

/// Robust deviation `S*` of an unsorted sample
pub fn robust_deviation<T: ToPrimitive>(sample: &[T], qtype: QuantileType) -> Result<f64> {
    let sorted = sorted_copy(sample, 1)?;
    robust_deviation_sorted(&sorted, qtype)
}

/// Robust deviation `S*` of pre-sorted data
pub fn robust_deviation_sorted(sorted: &[f64], qtype: QuantileType) -> Result<f64> {
    let iqr = iqr_sorted(sorted, qtype)?;
    Ok(IQR_SCALE * iqr / (sorted.len() as f64).sqrt())
}

/// Robust variance `S*²` of an unsorted sample
pub fn robust_variance<T: ToPrimitive>(sample: &[T], qtype: QuantileType) -> Result<f64> {
    robust_deviation(sample, qtype).map(|s| s * s)
}

/// Robust variance `S*²` of pre-sorted data
pub fn robust_variance_sorted(sorted: &[f64], qtype: QuantileType) -> Result<f64> {
    robust_deviation_sorted(sorted, qtype).map(|s| s * s)
}

/// Robust coefficient of variation in percent
///
/// Zero when the median is within [`ZERO_SCALE_EPSILON`] of zero.
///
/// ```rust
/// use robust_quantile::QuantileType;
/// use robust_spread::robust_cv;
///
/// assert_eq!(robust_cv(&[-1.0, 0.0, 1.0, 0.0], QuantileType::Type7).unwrap(), 0.0);
/// ```
pub fn robust_cv<T: ToPrimitive>(sample: &[T], qtype: QuantileType) -> Result<f64> {
    let sorted = sorted_copy(sample, 1)?;
    robust_cv_sorted(&sorted, qtype)
}

/// Robust coefficient of variation of pre-sorted data
pub fn robust_cv_sorted(sorted: &[f64], qtype: QuantileType) -> Result<f64> {
    check_sorted_input(sorted, 1)?;
    let center = median_of_sorted(sorted);
    if center.abs() < ZERO_SCALE_EPSILON {
        return Ok(0.0);
    }
    let s = robust_deviation_sorted(sorted, qtype)?;
    Ok(100.0 * s / center.abs())
}

/// Robust deviation estimator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RobustDeviation {
    qtype: QuantileType,
}

impl RobustDeviation {
    /// Create an estimator using the given quartile definition
    pub fn new(qtype: QuantileType) -> Self {
        Self { qtype }
    }
}

impl SpreadEstimatorProperties for RobustDeviation {
    fn name(&self) -> &str {
        "Robust deviation (S*)"
    }

    fn is_robust(&self) -> bool {
        true
    }

    fn breakdown_point(&self) -> f64 {
        0.25
    }

    fn gaussian_efficiency(&self) -> f64 {
        0.37
    }
}

impl SpreadEstimator for RobustDeviation {
    fn estimate_sorted(&self, sorted_data: &[f64]) -> Result<f64> {
        robust_deviation_sorted(sorted_data, self.qtype)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use robust_core::Error;

    const REFERENCE: [f64; 10] = [87.30, 84.00, 85.40, 78.00, 85.00, 89.00, 79.00, 89.00, 76.00, 86.50];

    #[test]
    fn test_reference_sample() {
        let t7 = QuantileType::Type7;
        assert_relative_eq!(robust_deviation(&REFERENCE, t7).unwrap(), 2.005_703_886_310_498, epsilon = 1e-9);
        assert_relative_eq!(robust_variance(&REFERENCE, t7).unwrap(), 4.022_848_079_561_035, epsilon = 1e-9);
        assert_relative_eq!(robust_cv(&REFERENCE, t7).unwrap(), 2.354_112_542_617_955, epsilon = 1e-9);
    }

    #[test]
    fn test_negative_sample() {
        let data = [-9.0, -7.0, -5.0, -3.0];
        assert_relative_eq!(
            robust_deviation(&data, QuantileType::Type7).unwrap(),
            1.388_888_888_888_889,
            epsilon = 1e-9
        );
        // |median| in the denominator keeps the CV positive
        assert!(robust_cv(&data, QuantileType::Type7).unwrap() > 0.0);
    }

    #[test]
    fn test_zero_dispersion() {
        assert_eq!(robust_deviation(&[4.0, 4.0, 4.0], QuantileType::Type7).unwrap(), 0.0);
        assert_eq!(robust_cv(&[0.0, 0.0, 0.0], QuantileType::Type7).unwrap(), 0.0);
    }

    #[test]
    fn test_estimator_matches_function() {
        let est = RobustDeviation::new(QuantileType::Type6);
        assert_eq!(
            est.estimate(&REFERENCE).unwrap(),
            robust_deviation(&REFERENCE, QuantileType::Type6).unwrap()
        );
    }

    #[test]
    fn test_errors() {
        let empty: [f64; 0] = [];
        assert_eq!(robust_cv(&empty, QuantileType::Type7), Err(Error::empty_input()));
        assert_eq!(
            robust_variance(&[1.0, f64::NAN], QuantileType::Type7),
            Err(Error::NonFinite { index: 1 })
        );
    }
}
