//! Huber M-estimator of location
//!
//! Iteratively reweighted mean starting at the median. Observations within
//! `c = k·scale` of the current location get weight 1, the rest get
//! `c / |x − μ|`. The scale is `1.4826·MAD`, computed once from the sample
//! and held fixed for every iteration.

use num_traits::ToPrimitive;
use robust_core::sample::{check_sorted_input, sorted_copy};
use robust_core::utils::median_of_sorted;
use robust_core::{CentralTendencyEstimator, Error, Result, ZERO_SCALE_EPSILON};
use robust_spread::{mad_sorted, MAD_CONSISTENCY};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Tuning constant giving 95% efficiency at the normal distribution
pub const DEFAULT_HUBER_K: f64 = 1.345;
pub const DEFAULT_HUBER_MAX_ITERATIONS: usize = 50;
pub const DEFAULT_HUBER_TOLERANCE: f64 = 0.001;

/// Total weight below which the reweighting step is abandoned
const MIN_TOTAL_WEIGHT: f64 = 1e-12;

/// Tuning parameters for the Huber estimator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HuberParams {
    /// Cutoff multiplier applied to the scale
    pub k: f64,
    /// Iteration cap; reaching it is not an error
    pub max_iterations: usize,
    /// Convergence threshold on the change in location
    pub tolerance: f64,
}

impl HuberParams {
    /// Create validated parameters
    pub fn new(k: f64, max_iterations: usize, tolerance: f64) -> Result<Self> {
        let params = Self {
            k,
            max_iterations,
            tolerance,
        };
        params.validate()?;
        Ok(params)
    }

    /// Reject parameters the iteration cannot run with
    pub fn validate(&self) -> Result<()> {
        if !(self.k.is_finite() && self.k > 0.0) {
            return Err(Error::InvalidParameter(format!(
                "Huber k must be a positive finite number, got {}",
                self.k
            )));
        }
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(Error::InvalidParameter(format!(
                "Huber tolerance must be a positive finite number, got {}",
                self.tolerance
            )));
        }
        if self.max_iterations == 0 {
            return Err(Error::InvalidParameter(
                "Huber max_iterations must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for HuberParams {
    fn default() -> Self {
        Self {
            k: DEFAULT_HUBER_K,
            max_iterations: DEFAULT_HUBER_MAX_ITERATIONS,
            tolerance: DEFAULT_HUBER_TOLERANCE,
        }
    }
}

/// Outcome of a Huber fit
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HuberEstimate {
    /// Estimated location
    pub location: f64,
    /// Reweighting steps performed
    pub iterations: usize,
    /// False when the iteration cap was hit or the weights collapsed
    pub converged: bool,
}

impl HuberEstimate {
    fn immediate(location: f64) -> Self {
        Self {
            location,
            iterations: 0,
            converged: true,
        }
    }
}

/// Huber location of an unsorted sample
///
/// ```rust
/// use robust_location::{huber_mean, HuberParams};
///
/// let data = [1.0, 2.0, 3.0, 4.0, 100.0];
/// let mu = huber_mean(&data, &HuberParams::default()).unwrap();
/// assert!((mu - 3.0).abs() < 1e-3);
/// ```
pub fn huber_mean<T: ToPrimitive>(sample: &[T], params: &HuberParams) -> Result<f64> {
    huber_estimate(sample, params).map(|est| est.location)
}

/// Huber location of pre-sorted data
pub fn huber_mean_sorted(sorted: &[f64], params: &HuberParams) -> Result<f64> {
    huber_estimate_sorted(sorted, params).map(|est| est.location)
}

/// Full Huber fit of an unsorted sample
pub fn huber_estimate<T: ToPrimitive>(sample: &[T], params: &HuberParams) -> Result<HuberEstimate> {
    params.validate()?;
    let sorted = sorted_copy(sample, 1)?;
    fit(&sorted, params)
}

/// Full Huber fit of pre-sorted data
pub fn huber_estimate_sorted(sorted: &[f64], params: &HuberParams) -> Result<HuberEstimate> {
    params.validate()?;
    check_sorted_input(sorted, 1)?;
    fit(sorted, params)
}

#[instrument(level = "debug", skip_all, fields(n = sorted.len(), k = params.k))]
fn fit(sorted: &[f64], params: &HuberParams) -> Result<HuberEstimate> {
    if sorted.len() == 1 {
        return Ok(HuberEstimate::immediate(sorted[0]));
    }

    let center = median_of_sorted(sorted);
    let scale = MAD_CONSISTENCY * mad_sorted(sorted)?;
    if scale < ZERO_SCALE_EPSILON {
        debug!(center, "zero scale, returning median");
        return Ok(HuberEstimate::immediate(center));
    }

    let cutoff = params.k * scale;
    let mut mu = center;
    for iteration in 1..=params.max_iterations {
        let (weighted_sum, total_weight) = sorted.iter().fold((0.0, 0.0), |(sum, total), &x| {
            let dist = (x - mu).abs();
            let w = if dist <= cutoff { 1.0 } else { cutoff / dist };
            (sum + w * x, total + w)
        });

        if total_weight < MIN_TOTAL_WEIGHT {
            debug!(iteration, mu, "weights collapsed, stopping");
            return Ok(HuberEstimate {
                location: mu,
                iterations: iteration - 1,
                converged: false,
            });
        }

        let next = weighted_sum / total_weight;
        let step = (next - mu).abs();
        mu = next;
        if step < params.tolerance {
            debug!(iteration, mu, "converged");
            return Ok(HuberEstimate {
                location: mu,
                iterations: iteration,
                converged: true,
            });
        }
    }

    debug!(
        iterations = params.max_iterations,
        mu, "iteration cap reached without convergence"
    );
    Ok(HuberEstimate {
        location: mu,
        iterations: params.max_iterations,
        converged: false,
    })
}

/// Huber M-estimator
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Huber {
    params: HuberParams,
}

impl Huber {
    pub fn new(params: HuberParams) -> Result<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &HuberParams {
        &self.params
    }

    /// Fit with diagnostics
    pub fn fit(&self, data: &[f64]) -> Result<HuberEstimate> {
        huber_estimate(data, &self.params)
    }
}

impl CentralTendencyEstimator for Huber {
    fn estimate_sorted(&self, sorted_data: &[f64]) -> Result<f64> {
        huber_mean_sorted(sorted_data, &self.params)
    }

    fn name(&self) -> &str {
        "Huber M-estimator"
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
    use approx::assert_relative_eq;

    #[test]
    fn test_resists_outlier() {
        let est = huber_estimate(&[1.0, 2.0, 3.0, 4.0, 100.0], &HuberParams::default()).unwrap();
        assert_relative_eq!(est.location, 3.0, epsilon = 1e-3);
        assert_eq!(est.iterations, 1);
        assert!(est.converged);
    }

    #[test]
    fn test_single_and_constant() {
        let params = HuberParams::default();
        assert_eq!(huber_estimate(&[8.5], &params).unwrap(), HuberEstimate::immediate(8.5));
        let est = huber_estimate(&[2.0, 2.0, 2.0, 9.0], &params).unwrap();
        // MAD is zero, so the median comes back untouched
        assert_eq!(est.location, 2.0);
        assert_eq!(est.iterations, 0);
    }

    #[test]
    fn test_cap_is_not_an_error() {
        let params = HuberParams::new(DEFAULT_HUBER_K, 1, 1e-12).unwrap();
        let data = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 50.0, 60.0];
        let est = huber_estimate(&data, &params).unwrap();
        assert_eq!(est.iterations, 1);
        assert!(!est.converged);
        assert!(est.location > 4.5);
    }

    #[test]
    fn test_params_validation() {
        assert!(HuberParams::new(0.0, 50, 0.001).is_err());
        assert!(HuberParams::new(-1.0, 50, 0.001).is_err());
        assert!(HuberParams::new(1.345, 0, 0.001).is_err());
        assert!(HuberParams::new(1.345, 50, 0.0).is_err());
        assert!(HuberParams::new(f64::NAN, 50, 0.001).is_err());
        let err = HuberParams::new(1.345, 50, f64::INFINITY).unwrap_err();
        assert!(err.is_usage());

        let bad = HuberParams {
            k: -2.0,
            ..HuberParams::default()
        };
        assert!(huber_mean(&[1.0, 2.0], &bad).is_err());
        assert!(Huber::new(bad).is_err());
    }

    #[test]
    fn test_symmetric_data_stays_centered() {
        let data = [-3.0, -1.0, 0.0, 1.0, 3.0];
        assert_relative_eq!(huber_mean(&data, &HuberParams::default()).unwrap(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_estimator() {
        let huber = Huber::default();
        assert_eq!(*huber.params(), HuberParams::default());
        let data = [1.0, 2.0, 3.0, 4.0, 100.0];
        assert_eq!(huber.estimate(&data).unwrap(), huber.fit(&data).unwrap().location);
    }

    #[test]
    fn test_params_serde() {
        let json = serde_json::to_string(&HuberParams::default()).unwrap();
        let back: HuberParams = serde_json::from_str(&json).unwrap();
        assert_eq!(back, HuberParams::default());
    }
}
