//! Winsorized mean
//!
//! Values below `Q(α)` or above `Q(1−α)` are pulled in to those cut points
//! before averaging. The cut points come from a quantile estimator, the
//! type 7 Hyndman-Fan definition by default.

use crate::trimmed::{validate_trim_fraction, DEFAULT_TRIM_FRACTION};
use num_traits::ToPrimitive;
use robust_core::sample::{check_sorted_input, sorted_copy};
use robust_core::utils::mean;
use robust_core::{CentralTendencyEstimator, Result};
use robust_quantile::{HyndmanFan, QuantileEstimator, QuantileType};

/// Winsorized mean of an unsorted sample
///
/// ```rust
/// use robust_location::winsorized_mean;
/// use robust_quantile::QuantileType;
///
/// let data = [1.0, 2.0, 3.0, 4.0, 100.0];
/// // Cut points are Q(0.2) = 1 and Q(0.8) = 4
/// let m = winsorized_mean(&data, 0.2, QuantileType::Type1).unwrap();
/// assert_eq!(m, 2.8);
/// ```
pub fn winsorized_mean<T: ToPrimitive>(sample: &[T], alpha: f64, qtype: QuantileType) -> Result<f64> {
    validate_trim_fraction(alpha)?;
    let sorted = sorted_copy(sample, 1)?;
    winsorize_sorted(&sorted, alpha, &HyndmanFan::new(qtype))
}

/// Winsorized mean of pre-sorted data
pub fn winsorized_mean_sorted(sorted: &[f64], alpha: f64, qtype: QuantileType) -> Result<f64> {
    winsorized_mean_sorted_with(sorted, alpha, &HyndmanFan::new(qtype))
}

/// Winsorized mean of pre-sorted data with cut points from any quantile estimator
pub fn winsorized_mean_sorted_with<Q: QuantileEstimator>(
    sorted: &[f64],
    alpha: f64,
    quantile_est: &Q,
) -> Result<f64> {
    validate_trim_fraction(alpha)?;
    check_sorted_input(sorted, 1)?;
    winsorize_sorted(sorted, alpha, quantile_est)
}

fn winsorize_sorted<Q: QuantileEstimator>(sorted: &[f64], alpha: f64, quantile_est: &Q) -> Result<f64> {
    if sorted.len() == 1 {
        return Ok(sorted[0]);
    }
    if alpha == 0.0 {
        return Ok(mean(sorted));
    }

    let cuts = quantile_est.quantiles_sorted(sorted, &[alpha, 1.0 - alpha])?;
    let (lower, upper) = (cuts[0], cuts[1]);
    let clamped: Vec<f64> = sorted.iter().map(|&x| x.clamp(lower, upper)).collect();
    Ok(mean(&clamped))
}

/// Winsorized mean estimator, parameterized by the quantile estimator
/// that places the cut points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WinsorizedMean<Q: QuantileEstimator = HyndmanFan> {
    alpha: f64,
    quantile_est: Q,
}

impl WinsorizedMean<HyndmanFan> {
    /// Create with the given trim fraction and Hyndman-Fan definition
    pub fn new(alpha: f64, qtype: QuantileType) -> Result<Self> {
        Self::with_estimator(alpha, HyndmanFan::new(qtype))
    }
}

impl<Q: QuantileEstimator> WinsorizedMean<Q> {
    /// Create with a custom quantile estimator
    pub fn with_estimator(alpha: f64, quantile_est: Q) -> Result<Self> {
        validate_trim_fraction(alpha)?;
        Ok(Self { alpha, quantile_est })
    }

    /// Fraction winsorized in each tail
    pub fn trim_fraction(&self) -> f64 {
        self.alpha
    }
}

impl Default for WinsorizedMean<HyndmanFan> {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_TRIM_FRACTION,
            quantile_est: HyndmanFan::default(),
        }
    }
}

impl<Q: QuantileEstimator> CentralTendencyEstimator for WinsorizedMean<Q> {
    fn estimate_sorted(&self, sorted_data: &[f64]) -> Result<f64> {
        winsorized_mean_sorted_with(sorted_data, self.alpha, &self.quantile_est)
    }

    fn name(&self) -> &str {
        "Winsorized mean"
    }

    fn is_robust(&self) -> bool {
        self.alpha > 0.0
    }

    fn breakdown_point(&self) -> f64 {
        self.alpha
    }
}
