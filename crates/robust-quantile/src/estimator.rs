//! Hyndman-Fan quantile estimator
//!
//! [`HyndmanFan`] binds one of the nine definitions to the
//! [`QuantileEstimator`] interface so it can be passed wherever an estimator
//! is expected, e.g. as the cut-point rule of a winsorized mean.

use crate::engine;
use crate::{QuantileEstimator, QuantileType, Result};
use robust_core::CentralTendencyEstimator;

/// Sample quantile estimator using a fixed Hyndman-Fan definition
///
/// # Example
///
/// ```rust
/// use robust_quantile::{hyndman_fan, QuantileEstimator, QuantileType};
///
/// let est = hyndman_fan(QuantileType::Type6);
/// let data: Vec<f64> = (0..10).map(f64::from).collect();
/// assert_eq!(est.quantile(&data, 0.75).unwrap(), 7.25);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct HyndmanFan {
    qtype: QuantileType,
}

impl HyndmanFan {
    /// Create an estimator for the given definition
    pub fn new(qtype: QuantileType) -> Self {
        Self { qtype }
    }

    /// The definition this estimator evaluates
    pub fn qtype(&self) -> QuantileType {
        self.qtype
    }
}

/// Create a Hyndman-Fan estimator
pub fn hyndman_fan(qtype: QuantileType) -> HyndmanFan {
    HyndmanFan::new(qtype)
}

impl QuantileEstimator for HyndmanFan {
    fn quantile_sorted(&self, sorted_data: &[f64], p: f64) -> Result<f64> {
        engine::quantile_sorted(sorted_data, p, self.qtype)
    }

    fn quantiles_sorted(&self, sorted_data: &[f64], ps: &[f64]) -> Result<Vec<f64>> {
        engine::quantiles_sorted(sorted_data, ps, self.qtype)
    }
}

impl CentralTendencyEstimator for HyndmanFan {
    fn estimate_sorted(&self, sorted_data: &[f64]) -> Result<f64> {
        self.quantile_sorted(sorted_data, 0.5)
    }

    fn name(&self) -> &str {
        self.qtype.name()
    }

    fn is_robust(&self) -> bool {
        true
    }

    fn breakdown_point(&self) -> f64 {
        0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimate_is_median() {
        let est = HyndmanFan::default();
        assert_eq!(est.qtype(), QuantileType::Type7);
        assert_eq!(est.estimate(&[5.0, 1.0, 3.0, 2.0]).unwrap(), 2.5);
        assert_eq!(est.name(), "Hyndman-Fan type 7");
        assert!(est.is_robust());
    }

    #[test]
    fn test_quantiles_keep_request_order() {
        let est = hyndman_fan(QuantileType::Type1);
        let data = [4.0, 0.0, 3.0, 1.0, 2.0];
        assert_eq!(est.quantiles(&data, &[1.0, 0.0, 0.5]).unwrap(), vec![4.0, 0.0, 2.0]);
    }

    #[test]
    fn test_type_2_median_of_even_sample() {
        let est = hyndman_fan(QuantileType::Type2);
        assert_eq!(est.estimate(&[1.0, 2.0, 3.0, 4.0]).unwrap(), 2.5);
    }
}
