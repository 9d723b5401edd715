//! Classical-versus-robust comparison
//!
//! Puts the mean next to the median and the standard deviation next to the
//! standardized MAD. A large gap in either means outliers are steering the
//! classical figures, and the verdict says how much to trust them.

use crate::classic::ClassicStats;
use num_traits::ToPrimitive;
use robust_core::sample::normalize;
use robust_core::utils::{median_of_sorted, round_to};
use robust_core::{Result, ZERO_SCALE_EPSILON};
use robust_quantile::QuantileType;
use robust_spread::{outliers_sorted, standardized_mad_sorted};
use serde::{Serialize, Serializer};
use std::fmt;
use tracing::debug;

/// |bias| above this percentage triggers an alert
pub const BIAS_ALERT_PERCENT: f64 = 10.0;
/// |bias| above this percentage calls for caution
pub const BIAS_CAUTION_PERCENT: f64 = 5.0;
/// Noise ratio above this triggers an alert
pub const NOISE_ALERT_RATIO: f64 = 1.5;
/// Noise ratio above this calls for caution
pub const NOISE_CAUTION_RATIO: f64 = 1.2;

/// How far classical statistics can be trusted for a sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Stable,
    Caution,
    Alert,
}

impl Verdict {
    /// Classify a bias percentage and noise ratio
    pub fn from_metrics(bias_percent: f64, noise_ratio: f64) -> Self {
        if bias_percent.abs() > BIAS_ALERT_PERCENT || noise_ratio > NOISE_ALERT_RATIO {
            Self::Alert
        } else if bias_percent.abs() > BIAS_CAUTION_PERCENT || noise_ratio > NOISE_CAUTION_RATIO {
            Self::Caution
        } else {
            Self::Stable
        }
    }

    /// Short uppercase label used in serialized reports
    pub fn code(self) -> &'static str {
        match self {
            Self::Stable => "STABLE",
            Self::Caution => "CAUTION",
            Self::Alert => "ALERT",
        }
    }

    /// Human-readable conclusion
    pub fn message(self) -> &'static str {
        match self {
            Self::Alert => "ALERT: Data is highly influenced by outliers. Use robust metrics.",
            Self::Caution => "CAUTION: There is moderate bias. Compare both metrics before deciding.",
            Self::Stable => {
                "STABLE: Data follows a clean distribution. Classic statistics are reliable."
            }
        }
    }
}

impl Serialize for Verdict {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Side-by-side classical and robust metrics with a verdict
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonReport {
    pub classic_mean: f64,
    pub robust_median: f64,
    pub absolute_difference: f64,
    /// `(mean − median) / |median| · 100`
    pub bias_percent: f64,
    pub std_dev: f64,
    /// Standardized MAD
    pub robust_deviation: f64,
    /// `std_dev / robust_deviation`
    pub noise_ratio: f64,
    pub tukey_outliers: usize,
    pub z_score_outliers: usize,
    pub verdict: Verdict,
}

impl ComparisonReport {
    /// Copy with every metric rounded; counts and verdict are unchanged
    pub fn rounded(&self, decimals: u32) -> Self {
        Self {
            classic_mean: round_to(self.classic_mean, decimals),
            robust_median: round_to(self.robust_median, decimals),
            absolute_difference: round_to(self.absolute_difference, decimals),
            bias_percent: round_to(self.bias_percent, decimals),
            std_dev: round_to(self.std_dev, decimals),
            robust_deviation: round_to(self.robust_deviation, decimals),
            noise_ratio: round_to(self.noise_ratio, decimals),
            ..self.clone()
        }
    }
}

/// Compares classical statistics against their robust counterparts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatsComparator {
    qtype: QuantileType,
}

impl StatsComparator {
    /// Comparator whose Tukey fences use the given quantile definition
    pub fn new(qtype: QuantileType) -> Self {
        Self { qtype }
    }

    /// Analyze a sample of at least two values
    pub fn analyze<T: ToPrimitive>(&self, sample: &[T]) -> Result<ComparisonReport> {
        let sorted = normalize(sample, 2, true)?;
        let classic = ClassicStats.summary(&sorted)?;
        let median = median_of_sorted(&sorted);
        let robust_deviation = standardized_mad_sorted(&sorted)?;

        let bias_percent = if median.abs() > ZERO_SCALE_EPSILON {
            (classic.mean - median) / median.abs() * 100.0
        } else {
            0.0
        };

        let noise_ratio = if robust_deviation.abs() > ZERO_SCALE_EPSILON {
            classic.std_dev / robust_deviation
        } else if classic.std_dev.abs() > ZERO_SCALE_EPSILON {
            // Robust spread is zero while the classical one is not
            2.0
        } else {
            1.0
        };

        let verdict = Verdict::from_metrics(bias_percent, noise_ratio);
        debug!(bias_percent, noise_ratio, ?verdict, "comparison verdict");

        Ok(ComparisonReport {
            classic_mean: classic.mean,
            robust_median: median,
            absolute_difference: (classic.mean - median).abs(),
            bias_percent,
            std_dev: classic.std_dev,
            robust_deviation,
            noise_ratio,
            tukey_outliers: outliers_sorted(&sorted, self.qtype)?.len(),
            z_score_outliers: classic.z_score_outliers.len(),
            verdict,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use robust_core::Error;

    #[test]
    fn test_alert() {
        let report = StatsComparator::default().analyze(&[10, 10, 11, 12, 10, 500]).unwrap();
        assert_eq!(report.verdict, Verdict::Alert);
        assert_relative_eq!(report.robust_median, 10.5);
        assert!(report.bias_percent > 700.0);
        assert_eq!(report.tukey_outliers, 1);
        assert_eq!(report.z_score_outliers, 0);
    }

    #[test]
    fn test_stable() {
        let report = StatsComparator::default().analyze(&[100.0, 102.0, 98.0, 101.0, 99.0]).unwrap();
        assert_eq!(report.verdict, Verdict::Stable);
        assert_relative_eq!(report.bias_percent, 0.0, epsilon = 1e-12);
        assert_relative_eq!(report.noise_ratio, 2.5_f64.sqrt() / 1.4826, epsilon = 1e-12);
    }

    #[test]
    fn test_caution() {
        let report = StatsComparator::default().analyze(&[10.0, 11.0, 12.0, 13.0, 14.0, 19.0]).unwrap();
        assert_eq!(report.verdict, Verdict::Caution);
        assert_relative_eq!(report.bias_percent, 0.666_666_666_666_667 / 12.5 * 100.0, epsilon = 1e-9);
        assert!(report.noise_ratio > 1.2 && report.noise_ratio < 1.5);
    }

    #[test]
    fn test_zero_robust_deviation() {
        let report = StatsComparator::default().analyze(&[5.0, 5.0, 5.0, 9.0]).unwrap();
        assert_eq!(report.noise_ratio, 2.0);
        assert_eq!(report.verdict, Verdict::Alert);

        let flat = StatsComparator::default().analyze(&[5.0, 5.0]).unwrap();
        assert_eq!(flat.noise_ratio, 1.0);
        assert_eq!(flat.verdict, Verdict::Stable);
    }

    #[test]
    fn test_zero_median_has_no_bias() {
        let report = StatsComparator::default().analyze(&[-1.0, 0.0, 0.0, 4.0]).unwrap();
        assert_eq!(report.bias_percent, 0.0);
    }

    #[test]
    fn test_needs_two_values() {
        assert_eq!(StatsComparator::default().analyze(&[1.0]), Err(Error::insufficient(2, 1)));
    }

    #[test]
    fn test_verdict_thresholds_are_strict() {
        assert_eq!(Verdict::from_metrics(10.0, 1.0), Verdict::Caution);
        assert_eq!(Verdict::from_metrics(-10.5, 1.0), Verdict::Alert);
        assert_eq!(Verdict::from_metrics(5.0, 1.2), Verdict::Stable);
        assert_eq!(Verdict::from_metrics(0.0, 1.21), Verdict::Caution);
        assert_eq!(Verdict::from_metrics(0.0, 1.51), Verdict::Alert);
    }

    #[test]
    fn test_verdict_text() {
        assert!(Verdict::Alert.to_string().starts_with("ALERT:"));
        assert!(Verdict::Caution.to_string().starts_with("CAUTION:"));
        assert!(Verdict::Stable.to_string().starts_with("STABLE:"));
        assert_eq!(serde_json::to_string(&Verdict::Caution).unwrap(), "\"CAUTION\"");
    }

    #[test]
    fn test_serialized_verdict_matches_code() {
        for verdict in [Verdict::Stable, Verdict::Caution, Verdict::Alert] {
            let json = serde_json::to_value(verdict).unwrap();
            assert_eq!(json, serde_json::Value::from(verdict.code()));
            assert!(verdict.message().starts_with(verdict.code()));
        }
    }

    #[test]
    fn test_rounded_report() {
        let report = StatsComparator::default().analyze(&[10.0, 11.0, 12.0, 13.0, 14.0, 19.0]).unwrap();
        let rounded = report.rounded(2);
        assert_eq!(rounded.bias_percent, 5.33);
        assert_eq!(rounded.verdict, report.verdict);
    }
}
