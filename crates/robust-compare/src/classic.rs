//! Classical descriptive statistics
//!
//! Mean-based counterparts to the robust estimators, kept for comparison.
//! Dispersion uses the two-pass formula around the mean.

use num_traits::ToPrimitive;
use robust_core::sample::normalize;
use robust_core::utils::{mean, median_of_sorted, round_to};
use robust_core::{Result, ZERO_SCALE_EPSILON};
use serde::Serialize;

/// Standard scores above this magnitude are outliers
pub const Z_SCORE_THRESHOLD: f64 = 3.0;

/// Classical (non-robust) statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassicStats;

impl ClassicStats {
    pub fn new() -> Self {
        Self
    }

    /// Arithmetic mean
    pub fn mean<T: ToPrimitive>(&self, sample: &[T]) -> Result<f64> {
        let values = normalize(sample, 1, false)?;
        Ok(mean(&values))
    }

    /// Median
    pub fn median<T: ToPrimitive>(&self, sample: &[T]) -> Result<f64> {
        let values = normalize(sample, 1, true)?;
        Ok(median_of_sorted(&values))
    }

    /// Variance with Bessel's correction (divides by n − 1)
    pub fn sample_variance<T: ToPrimitive>(&self, sample: &[T]) -> Result<f64> {
        let values = normalize(sample, 2, false)?;
        Ok(sum_of_squares(&values) / (values.len() - 1) as f64)
    }

    /// Variance dividing by n
    pub fn population_variance<T: ToPrimitive>(&self, sample: &[T]) -> Result<f64> {
        let values = normalize(sample, 2, false)?;
        Ok(sum_of_squares(&values) / values.len() as f64)
    }

    /// Sample standard deviation
    pub fn standard_deviation<T: ToPrimitive>(&self, sample: &[T]) -> Result<f64> {
        self.sample_variance(sample).map(f64::sqrt)
    }

    /// Coefficient of variation in percent; zero when the mean is zero
    pub fn coefficient_of_variation<T: ToPrimitive>(&self, sample: &[T]) -> Result<f64> {
        let values = normalize(sample, 2, false)?;
        let m = mean(&values);
        if m.abs() < ZERO_SCALE_EPSILON {
            return Ok(0.0);
        }
        let sd = (sum_of_squares(&values) / (values.len() - 1) as f64).sqrt();
        Ok(sd / m.abs() * 100.0)
    }

    /// Values with `|z| > 3`, in ascending order
    ///
    /// Empty when the standard deviation is zero.
    pub fn z_score_outliers<T: ToPrimitive>(&self, sample: &[T]) -> Result<Vec<f64>> {
        let values = normalize(sample, 2, true)?;
        Ok(z_outliers(&values))
    }

    /// All classical metrics at once, unrounded
    pub fn summary<T: ToPrimitive>(&self, sample: &[T]) -> Result<ClassicSummary> {
        let values = normalize(sample, 2, true)?;
        let m = mean(&values);
        let variance = sum_of_squares(&values) / (values.len() - 1) as f64;
        let sd = variance.sqrt();
        let cv = if m.abs() < ZERO_SCALE_EPSILON {
            0.0
        } else {
            sd / m.abs() * 100.0
        };
        Ok(ClassicSummary {
            count: values.len(),
            mean: m,
            median: median_of_sorted(&values),
            std_dev: sd,
            sample_variance: variance,
            cv,
            z_score_outliers: z_outliers(&values),
        })
    }
}

fn sum_of_squares(values: &[f64]) -> f64 {
    let m = mean(values);
    values.iter().map(|x| (x - m) * (x - m)).sum()
}

// Expects sorted input so the result is ascending
fn z_outliers(values: &[f64]) -> Vec<f64> {
    let m = mean(values);
    let sd = (sum_of_squares(values) / (values.len() - 1) as f64).sqrt();
    if sd < ZERO_SCALE_EPSILON {
        return Vec::new();
    }
    values
        .iter()
        .copied()
        .filter(|x| ((x - m) / sd).abs() > Z_SCORE_THRESHOLD)
        .collect()
}

/// Classical metrics of one sample
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassicSummary {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub std_dev: f64,
    pub sample_variance: f64,
    pub cv: f64,
    pub z_score_outliers: Vec<f64>,
}

impl ClassicSummary {
    /// Copy with every scalar rounded; outliers are left exact
    pub fn rounded(&self, decimals: u32) -> Self {
        Self {
            count: self.count,
            mean: round_to(self.mean, decimals),
            median: round_to(self.median, decimals),
            std_dev: round_to(self.std_dev, decimals),
            sample_variance: round_to(self.sample_variance, decimals),
            cv: round_to(self.cv, decimals),
            z_score_outliers: self.z_score_outliers.clone(),
        }
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
        let stats = ClassicStats::new();
        assert_relative_eq!(stats.mean(&REFERENCE).unwrap(), 83.92, epsilon = 1e-9);
        assert_relative_eq!(stats.median(&REFERENCE).unwrap(), 85.2, epsilon = 1e-9);
        assert_relative_eq!(stats.sample_variance(&REFERENCE).unwrap(), 21.670_666_666_666_666, epsilon = 1e-9);
        assert_relative_eq!(stats.population_variance(&REFERENCE).unwrap(), 19.5036, epsilon = 1e-9);
        assert_relative_eq!(stats.standard_deviation(&REFERENCE).unwrap(), 4.655_176_330_351_694, epsilon = 1e-9);
        assert_relative_eq!(
            stats.coefficient_of_variation(&REFERENCE).unwrap(),
            4.655_176_330_351_694 / 83.92 * 100.0,
            epsilon = 1e-9
        );
        assert!(stats.z_score_outliers(&REFERENCE).unwrap().is_empty());
    }

    #[test]
    fn test_dispersion_needs_two_values() {
        let stats = ClassicStats::new();
        assert_eq!(stats.mean(&[3.0]).unwrap(), 3.0);
        assert_eq!(stats.sample_variance(&[3.0]), Err(Error::insufficient(2, 1)));
        assert_eq!(stats.population_variance(&[3.0]), Err(Error::insufficient(2, 1)));
        assert!(stats.summary(&[3.0]).is_err());
    }

    #[test]
    fn test_cv_zero_mean() {
        assert_eq!(ClassicStats.coefficient_of_variation(&[-1.0, 1.0]).unwrap(), 0.0);
    }

    #[test]
    fn test_z_score_outliers() {
        let mut data = vec![10.0; 20];
        data.push(1_000.0);
        assert_eq!(ClassicStats.z_score_outliers(&data).unwrap(), vec![1_000.0]);
        assert!(ClassicStats.z_score_outliers(&[5.0, 5.0, 5.0]).unwrap().is_empty());
    }

    #[test]
    fn test_z_score_masks_single_outlier_in_small_sample() {
        // Six points cannot produce |z| > 3 with the sample deviation
        let data = [10.0, 10.0, 11.0, 12.0, 10.0, 500.0];
        assert!(ClassicStats.z_score_outliers(&data).unwrap().is_empty());
    }

    #[test]
    fn test_summary_and_rounding() {
        let summary = ClassicStats.summary(&REFERENCE).unwrap();
        assert_eq!(summary.count, 10);
        let rounded = summary.rounded(2);
        assert_eq!(rounded.std_dev, 4.66);
        assert_eq!(rounded.mean, 83.92);
        assert_eq!(rounded.sample_variance, 21.67);
    }
}
