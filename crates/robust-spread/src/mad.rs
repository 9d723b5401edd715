//! Median Absolute Deviation (MAD) estimators
//!
//! MAD is the median of the absolute deviations from the sample median.
//! Multiplying it by [`MAD_CONSISTENCY`] makes it a consistent estimator of
//! the standard deviation for normally distributed data.

use crate::traits::{SpreadEstimator, SpreadEstimatorProperties};
use num_traits::ToPrimitive;
use robust_core::sample::{check_sorted_input, sort_ascending, sorted_copy};
use robust_core::utils::median_of_sorted;
use robust_core::Result;

/// Consistency factor `1 / Φ⁻¹(3/4)`, rounded as is conventional
pub const MAD_CONSISTENCY: f64 = 1.4826;

/// Raw MAD of an unsorted sample
///
/// ```rust
/// use robust_spread::mad;
///
/// assert_eq!(mad(&[1.0, 2.0, 3.0, 4.0, 100.0]).unwrap(), 1.0);
/// ```
pub fn mad<T: ToPrimitive>(sample: &[T]) -> Result<f64> {
    let sorted = sorted_copy(sample, 1)?;
    Ok(raw_mad(&sorted))
}

/// Raw MAD of pre-sorted data
pub fn mad_sorted(sorted: &[f64]) -> Result<f64> {
    check_sorted_input(sorted, 1)?;
    Ok(raw_mad(sorted))
}

/// MAD scaled by [`MAD_CONSISTENCY`]
pub fn standardized_mad<T: ToPrimitive>(sample: &[T]) -> Result<f64> {
    mad(sample).map(|m| MAD_CONSISTENCY * m)
}

/// MAD of pre-sorted data scaled by [`MAD_CONSISTENCY`]
pub fn standardized_mad_sorted(sorted: &[f64]) -> Result<f64> {
    mad_sorted(sorted).map(|m| MAD_CONSISTENCY * m)
}

fn raw_mad(sorted: &[f64]) -> f64 {
    let center = median_of_sorted(sorted);
    let mut deviations: Vec<f64> = sorted.iter().map(|x| (x - center).abs()).collect();
    sort_ascending(&mut deviations);
    median_of_sorted(&deviations)
}

/// Median Absolute Deviation (MAD) estimator
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Mad;

impl Mad {
    /// Create a new MAD estimator
    pub fn new() -> Self {
        Self
    }
}

impl SpreadEstimatorProperties for Mad {
    fn name(&self) -> &str {
        "MAD"
    }

    fn is_robust(&self) -> bool {
        true
    }

    fn breakdown_point(&self) -> f64 {
        0.5
    }

    fn gaussian_efficiency(&self) -> f64 {
        0.3675 // 36.75% efficiency for MAD
    }
}

impl SpreadEstimator for Mad {
    fn estimate_sorted(&self, sorted_data: &[f64]) -> Result<f64> {
        mad_sorted(sorted_data)
    }
}

/// Standardized MAD estimator (scaled by consistency factor)
///
/// The consistency factor (1.4826) makes it comparable to standard deviation
/// for normally distributed data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StandardizedMad {
    consistency_factor: f64,
}

impl StandardizedMad {
    /// Create with default consistency factor
    pub fn new() -> Self {
        Self {
            consistency_factor: MAD_CONSISTENCY,
        }
    }

    /// Create with custom consistency factor
    pub fn with_factor(consistency_factor: f64) -> Self {
        Self { consistency_factor }
    }

    /// The factor applied to the raw MAD
    pub fn consistency_factor(&self) -> f64 {
        self.consistency_factor
    }
}

impl Default for StandardizedMad {
    fn default() -> Self {
        Self::new()
    }
}

impl SpreadEstimatorProperties for StandardizedMad {
    fn name(&self) -> &str {
        "Standardized MAD"
    }

    fn is_robust(&self) -> bool {
        true
    }

    fn breakdown_point(&self) -> f64 {
        0.5
    }

    fn gaussian_efficiency(&self) -> f64 {
        0.3675
    }
}

impl SpreadEstimator for StandardizedMad {
    fn estimate_sorted(&self, sorted_data: &[f64]) -> Result<f64> {
        mad_sorted(sorted_data).map(|m| self.consistency_factor * m)
    }
}
