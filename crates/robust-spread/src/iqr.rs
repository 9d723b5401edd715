//! Interquartile Range (IQR) estimator

use crate::traits::{SpreadEstimator, SpreadEstimatorProperties};
use num_traits::ToPrimitive;
use robust_core::sample::{check_sorted_input, sorted_copy};
use robust_core::Result;
use robust_quantile::{quantiles_sorted, QuantileType};

/// `Q(0.75) − Q(0.25)` of an unsorted sample
///
/// ```rust
/// use robust_quantile::QuantileType;
/// use robust_spread::iqr;
///
/// let data: Vec<f64> = (0..10).map(f64::from).collect();
/// assert_eq!(iqr(&data, QuantileType::Type7).unwrap(), 4.5);
/// assert_eq!(iqr(&data, QuantileType::Type1).unwrap(), 5.0);
/// ```
pub fn iqr<T: ToPrimitive>(sample: &[T], qtype: QuantileType) -> Result<f64> {
    let sorted = sorted_copy(sample, 1)?;
    iqr_sorted(&sorted, qtype)
}

/// IQR of pre-sorted data
pub fn iqr_sorted(sorted: &[f64], qtype: QuantileType) -> Result<f64> {
    let (q1, q3) = quartiles_sorted(sorted, qtype)?;
    Ok(q3 - q1)
}

/// First and third quartiles of pre-sorted data
pub fn quartiles_sorted(sorted: &[f64], qtype: QuantileType) -> Result<(f64, f64)> {
    check_sorted_input(sorted, 1)?;
    let qs = quantiles_sorted(sorted, &[0.25, 0.75], qtype)?;
    Ok((qs[0], qs[1]))
}

/// Interquartile Range estimator
///
/// Holds the quantile definition used for both quartiles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Iqr {
    qtype: QuantileType,
}

impl Iqr {
    /// Create a new IQR estimator
    pub fn new(qtype: QuantileType) -> Self {
        Self { qtype }
    }
}

impl SpreadEstimatorProperties for Iqr {
    fn name(&self) -> &str {
        "IQR"
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

impl SpreadEstimator for Iqr {
    fn estimate_sorted(&self, sorted_data: &[f64]) -> Result<f64> {
        iqr_sorted(sorted_data, self.qtype)
    }
}
