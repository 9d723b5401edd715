//! One-call robust summary of a sample

use robust_confidence::ConfidenceInterval;
use robust_core::utils::round_to;
use serde::Serialize;

/// Robust descriptive statistics of one sample
///
/// Values are exact; use [`RobustSummary::rounded`] for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RobustSummary {
    pub count: usize,
    /// Arithmetic mean, for reference against the median
    pub mean: f64,
    pub median: f64,
    /// Raw median absolute deviation
    pub mad: f64,
    pub iqr: f64,
    /// `S* = (1.25 / 1.35) · IQR / √n`
    pub robust_deviation: f64,
    pub robust_variance: f64,
    /// `S*` relative to the median, in percent
    pub robust_cv: f64,
    /// Values outside the Tukey fences, ascending
    pub outliers: Vec<f64>,
    pub confidence_interval: ConfidenceInterval,
}

impl RobustSummary {
    /// Copy with every scalar and the interval bounds rounded
    ///
    /// Outliers are sample values and are left exact.
    pub fn rounded(&self, decimals: u32) -> Self {
        let ci = &self.confidence_interval;
        Self {
            count: self.count,
            mean: round_to(self.mean, decimals),
            median: round_to(self.median, decimals),
            mad: round_to(self.mad, decimals),
            iqr: round_to(self.iqr, decimals),
            robust_deviation: round_to(self.robust_deviation, decimals),
            robust_variance: round_to(self.robust_variance, decimals),
            robust_cv: round_to(self.robust_cv, decimals),
            outliers: self.outliers.clone(),
            confidence_interval: ConfidenceInterval::new(
                round_to(ci.lower, decimals),
                round_to(ci.upper, decimals),
                round_to(ci.estimate, decimals),
                ci.confidence_level,
            ),
        }
    }
}
