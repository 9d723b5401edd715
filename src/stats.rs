//! Configured facade over the estimator crates

use crate::config::StatGuardConfig;
use crate::summary::RobustSummary;
use num_traits::ToPrimitive;
use robust_compare::{ClassicStats, ClassicSummary, ComparisonReport, StatsComparator};
use robust_confidence::{ConfidenceInterval, MedianInterval};
use robust_core::sample::sorted_copy;
use robust_core::utils::{mean, median_of_sorted};
use robust_core::Result;
use robust_location::HuberEstimate;
use robust_quantile::QuantileType;
use robust_spread::TukeyFences;
use tracing::debug;

/// Robust statistics with configured defaults
///
/// Every method takes an unsorted sample of any primitive numeric type and
/// works on a validated copy; the caller's data is never reordered.
///
/// ```rust
/// use statguard::RobustStats;
///
/// let stats = RobustStats::default();
/// let data = [87.3, 84.0, 85.4, 78.0, 85.0, 89.0, 79.0, 89.0, 76.0, 86.5];
///
/// assert!((stats.median(&data).unwrap() - 85.2).abs() < 1e-12);
/// assert!((stats.iqr(&data).unwrap() - 6.85).abs() < 1e-9);
/// assert!(stats.outliers(&data).unwrap().is_empty());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RobustStats {
    config: StatGuardConfig,
    interval: MedianInterval,
}

impl Default for RobustStats {
    fn default() -> Self {
        let config = StatGuardConfig::default();
        Self {
            interval: MedianInterval::default().with_quantile_type(config.quantile_type),
            config,
        }
    }
}

impl RobustStats {
    /// Facade with a validated configuration
    pub fn new(config: StatGuardConfig) -> Result<Self> {
        config.validate()?;
        // 1.96 exactly for the default level, the normal quantile otherwise
        let interval = if config.confidence_level == crate::config::DEFAULT_CONFIDENCE_LEVEL {
            MedianInterval::default()
        } else {
            MedianInterval::with_level(config.confidence_level)?
        };
        Ok(Self {
            interval: interval.with_quantile_type(config.quantile_type),
            config,
        })
    }

    pub fn config(&self) -> &StatGuardConfig {
        &self.config
    }

    fn qtype(&self) -> QuantileType {
        self.config.quantile_type
    }

    /// Sample quantile under the configured definition
    pub fn quantile<T: ToPrimitive>(&self, sample: &[T], p: f64) -> Result<f64> {
        robust_quantile::quantile(sample, p, self.qtype())
    }

    /// Several quantiles from one sort
    pub fn quantiles<T: ToPrimitive>(&self, sample: &[T], probs: &[f64]) -> Result<Vec<f64>> {
        let sorted = sorted_copy(sample, 1)?;
        robust_quantile::quantiles_sorted(&sorted, probs, self.qtype())
    }

    pub fn median<T: ToPrimitive>(&self, sample: &[T]) -> Result<f64> {
        robust_spread::median(sample)
    }

    /// Raw MAD
    pub fn mad<T: ToPrimitive>(&self, sample: &[T]) -> Result<f64> {
        robust_spread::mad(sample)
    }

    /// MAD scaled by 1.4826
    pub fn standardized_mad<T: ToPrimitive>(&self, sample: &[T]) -> Result<f64> {
        robust_spread::standardized_mad(sample)
    }

    pub fn iqr<T: ToPrimitive>(&self, sample: &[T]) -> Result<f64> {
        robust_spread::iqr(sample, self.qtype())
    }

    pub fn robust_deviation<T: ToPrimitive>(&self, sample: &[T]) -> Result<f64> {
        robust_spread::robust_deviation(sample, self.qtype())
    }

    pub fn robust_variance<T: ToPrimitive>(&self, sample: &[T]) -> Result<f64> {
        robust_spread::robust_variance(sample, self.qtype())
    }

    pub fn robust_cv<T: ToPrimitive>(&self, sample: &[T]) -> Result<f64> {
        robust_spread::robust_cv(sample, self.qtype())
    }

    pub fn tukey_fences<T: ToPrimitive>(&self, sample: &[T]) -> Result<TukeyFences> {
        robust_spread::tukey_fences(sample, self.qtype())
    }

    /// Values outside the Tukey fences, ascending
    pub fn outliers<T: ToPrimitive>(&self, sample: &[T]) -> Result<Vec<f64>> {
        robust_spread::outliers(sample, self.qtype())
    }

    /// Median interval at the configured level
    pub fn confidence_interval<T: ToPrimitive>(&self, sample: &[T]) -> Result<ConfidenceInterval> {
        self.interval.interval(sample)
    }

    pub fn trimmed_mean<T: ToPrimitive>(&self, sample: &[T]) -> Result<f64> {
        robust_location::trimmed_mean(sample, self.config.trim_fraction)
    }

    pub fn winsorized_mean<T: ToPrimitive>(&self, sample: &[T]) -> Result<f64> {
        robust_location::winsorized_mean(sample, self.config.trim_fraction, self.qtype())
    }

    pub fn huber_mean<T: ToPrimitive>(&self, sample: &[T]) -> Result<f64> {
        robust_location::huber_mean(sample, &self.config.huber)
    }

    /// Huber fit with iteration count and convergence flag
    pub fn huber_estimate<T: ToPrimitive>(&self, sample: &[T]) -> Result<HuberEstimate> {
        robust_location::huber_estimate(sample, &self.config.huber)
    }

    /// Every robust metric from a single sort
    pub fn summary<T: ToPrimitive>(&self, sample: &[T]) -> Result<RobustSummary> {
        let sorted = sorted_copy(sample, 1)?;
        let qtype = self.qtype();
        let summary = RobustSummary {
            count: sorted.len(),
            mean: mean(&sorted),
            median: median_of_sorted(&sorted),
            mad: robust_spread::mad_sorted(&sorted)?,
            iqr: robust_spread::iqr_sorted(&sorted, qtype)?,
            robust_deviation: robust_spread::robust_deviation_sorted(&sorted, qtype)?,
            robust_variance: robust_spread::robust_variance_sorted(&sorted, qtype)?,
            robust_cv: robust_spread::robust_cv_sorted(&sorted, qtype)?,
            outliers: robust_spread::outliers_sorted(&sorted, qtype)?,
            confidence_interval: self.interval.interval_sorted(&sorted)?,
        };
        debug!(count = summary.count, outliers = summary.outliers.len(), "robust summary");
        Ok(summary)
    }

    /// Classical metrics; needs at least two values
    pub fn classic_summary<T: ToPrimitive>(&self, sample: &[T]) -> Result<ClassicSummary> {
        ClassicStats.summary(sample)
    }

    /// Classical-versus-robust comparison; needs at least two values
    pub fn compare<T: ToPrimitive>(&self, sample: &[T]) -> Result<ComparisonReport> {
        StatsComparator::new(self.qtype()).analyze(sample)
    }
}
