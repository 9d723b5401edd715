//! Trimmed mean
//!
//! Drops `floor(n·α)` order statistics from each tail and averages the rest.

use num_traits::ToPrimitive;
use robust_core::sample::{check_sorted_input, sorted_copy};
use robust_core::utils::mean;
use robust_core::{CentralTendencyEstimator, Error, Result};
use tracing::trace;

/// Trim fraction used when none is given
pub const DEFAULT_TRIM_FRACTION: f64 = 0.1;

/// Reject trim fractions outside `[0, 0.5)`
///
/// NaN is rejected as well.
pub fn validate_trim_fraction(alpha: f64) -> Result<()> {
    if !(0.0..0.5).contains(&alpha) {
        return Err(Error::InvalidTrimFraction { alpha });
    }
    Ok(())
}

/// Trimmed mean of an unsorted sample
///
/// # Errors
///
/// * [`Error::InvalidTrimFraction`] when `alpha` is outside `[0, 0.5)`
/// * [`Error::TrimTooLarge`] when trimming would leave nothing to average
/// * the usual sample validation errors
///
/// ```rust
/// use robust_location::trimmed_mean;
///
/// let data = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 1_000.0];
/// assert_eq!(trimmed_mean(&data, 0.1).unwrap(), 5.5);
/// ```
pub fn trimmed_mean<T: ToPrimitive>(sample: &[T], alpha: f64) -> Result<f64> {
    validate_trim_fraction(alpha)?;
    let sorted = sorted_copy(sample, 1)?;
    trim_sorted(&sorted, alpha)
}

/// Trimmed mean of pre-sorted data
pub fn trimmed_mean_sorted(sorted: &[f64], alpha: f64) -> Result<f64> {
    validate_trim_fraction(alpha)?;
    check_sorted_input(sorted, 1)?;
    trim_sorted(sorted, alpha)
}

fn trim_sorted(sorted: &[f64], alpha: f64) -> Result<f64> {
    let n = sorted.len();
    if n == 1 {
        return Ok(sorted[0]);
    }
    if alpha == 0.0 {
        return Ok(mean(sorted));
    }

    let g = (n as f64 * alpha).floor() as usize;
    if n <= 2 * g {
        return Err(Error::TrimTooLarge { alpha, n });
    }
    trace!(n, g, "trimming order statistics from each tail");
    Ok(mean(&sorted[g..n - g]))
}

/// Trimmed mean estimator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrimmedMean {
    alpha: f64,
}

impl TrimmedMean {
    /// Create with the given trim fraction
    pub fn new(alpha: f64) -> Result<Self> {
        validate_trim_fraction(alpha)?;
        Ok(Self { alpha })
    }

    /// Fraction trimmed from each tail
    pub fn trim_fraction(&self) -> f64 {
        self.alpha
    }
}

impl Default for TrimmedMean {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_TRIM_FRACTION,
        }
    }
}

impl CentralTendencyEstimator for TrimmedMean {
    fn estimate_sorted(&self, sorted_data: &[f64]) -> Result<f64> {
        trimmed_mean_sorted(sorted_data, self.alpha)
    }

    fn name(&self) -> &str {
        "Trimmed mean"
    }

    fn is_robust(&self) -> bool {
        self.alpha > 0.0
    }

    fn breakdown_point(&self) -> f64 {
        self.alpha
    }
}
