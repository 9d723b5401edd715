//! Normal-approximation interval for the median
//!
//! `median ± z·S*`, where `S*` is the robust deviation. The default uses the
//! textbook `z = 1.96` for a 95% interval; other levels take `z` from the
//! standard normal quantile function.

use crate::types::{ConfidenceInterval, ConfidenceLevel};
use num_traits::ToPrimitive;
use robust_core::sample::{check_sorted_input, sorted_copy};
use robust_core::utils::median_of_sorted;
use robust_core::{Error, Result, RobustEstimator};
use robust_quantile::QuantileType;
use robust_spread::robust_deviation_sorted;
use statrs::distribution::{ContinuousCDF, Normal};
use tracing::debug;

/// Critical value used by the default 95% interval
pub const DEFAULT_Z: f64 = 1.96;

/// Median confidence interval builder
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MedianInterval {
    z: f64,
    level: f64,
    qtype: QuantileType,
}

impl Default for MedianInterval {
    fn default() -> Self {
        Self {
            z: DEFAULT_Z,
            level: 0.95,
            qtype: QuantileType::Type7,
        }
    }
}

impl MedianInterval {
    /// The default 95% interval with `z = 1.96`
    pub fn new() -> Self {
        Self::default()
    }

    /// Interval at an arbitrary confidence level
    ///
    /// # Errors
    /// [`Error::InvalidParameter`] if `level` is not in (0, 1)
    pub fn with_level(level: f64) -> Result<Self> {
        let level = ConfidenceLevel::new(level)?;
        let normal = Normal::new(0.0, 1.0)
            .map_err(|e| Error::InvalidParameter(format!("standard normal: {e}")))?;
        let z = normal.inverse_cdf(1.0 - level.tail_probability());
        debug!(level = level.value(), z, "median interval critical value");
        Ok(Self {
            z,
            level: level.value(),
            qtype: QuantileType::Type7,
        })
    }

    /// Use another quantile definition for the quartiles behind `S*`
    pub fn with_quantile_type(mut self, qtype: QuantileType) -> Self {
        self.qtype = qtype;
        self
    }

    /// Critical value
    pub fn z(&self) -> f64 {
        self.z
    }

    pub fn confidence_level(&self) -> f64 {
        self.level
    }

    /// Interval for an unsorted sample
    pub fn interval<T: ToPrimitive>(&self, sample: &[T]) -> Result<ConfidenceInterval> {
        let sorted = sorted_copy(sample, 1)?;
        self.build(&sorted)
    }

    /// Interval for pre-sorted data
    pub fn interval_sorted(&self, sorted: &[f64]) -> Result<ConfidenceInterval> {
        check_sorted_input(sorted, 1)?;
        self.build(sorted)
    }

    fn build(&self, sorted: &[f64]) -> Result<ConfidenceInterval> {
        let center = median_of_sorted(sorted);
        let s = robust_deviation_sorted(sorted, self.qtype)?;
        Ok(ConfidenceInterval::symmetric(center, self.z * s, self.level))
    }
}

impl RobustEstimator for MedianInterval {
    type Output = ConfidenceInterval;

    fn estimate(&self, sample: &[f64]) -> Result<ConfidenceInterval> {
        self.interval(sample)
    }

    fn estimate_sorted(&self, sorted_sample: &[f64]) -> Result<ConfidenceInterval> {
        self.interval_sorted(sorted_sample)
    }
}

/// 95% interval `median ± 1.96·S*` using type 7 quartiles
///
/// ```rust
/// use robust_confidence::confidence_interval;
///
/// let ci = confidence_interval(&[87.3, 84.0, 85.4, 78.0, 85.0, 89.0, 79.0, 89.0, 76.0, 86.5]).unwrap();
/// assert!((ci.estimate - 85.2).abs() < 1e-9);
/// assert!(ci.contains(85.2));
/// ```
pub fn confidence_interval<T: ToPrimitive>(sample: &[T]) -> Result<ConfidenceInterval> {
    MedianInterval::default().interval(sample)
}

/// [`confidence_interval`] for pre-sorted data
pub fn confidence_interval_sorted(sorted: &[f64]) -> Result<ConfidenceInterval> {
    MedianInterval::default().interval_sorted(sorted)
}
