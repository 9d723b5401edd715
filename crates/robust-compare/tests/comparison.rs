//! Comparator behaviour on whole samples

use approx::assert_relative_eq;
use proptest::prelude::*;
use robust_compare::{ClassicStats, StatsComparator, Verdict};
use robust_quantile::QuantileType;

#[test]
fn test_reference_sample_report() {
    let data = [87.30, 84.00, 85.40, 78.00, 85.00, 89.00, 79.00, 89.00, 76.00, 86.50];
    let report = StatsComparator::new(QuantileType::Type7).analyze(&data).unwrap();

    assert_relative_eq!(report.classic_mean, 83.92, epsilon = 1e-9);
    assert_relative_eq!(report.robust_median, 85.2, epsilon = 1e-9);
    assert_relative_eq!(report.absolute_difference, 1.28, epsilon = 1e-9);
    assert_relative_eq!(report.robust_deviation, 2.95 * 1.4826, epsilon = 1e-9);
    assert_relative_eq!(report.std_dev, 4.655_176_330_351_694, epsilon = 1e-9);
    assert_eq!(report.tukey_outliers, 0);
    // Noise ratio 1.064 and bias -1.5% are both inside the stable band
    assert_eq!(report.verdict, Verdict::Stable);
}

#[test]
fn test_report_serializes() {
    let report = StatsComparator::default().analyze(&[1.0, 2.0, 3.0, 4.0]).unwrap();
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["verdict"], "STABLE");
    assert_eq!(json["tukey_outliers"], 0);
}

#[test]
fn test_classic_summary_matches_methods() {
    let data = [3.0, 9.0, 1.0, 4.0, 7.0];
    let summary = ClassicStats.summary(&data).unwrap();
    assert_eq!(summary.mean, ClassicStats.mean(&data).unwrap());
    assert_eq!(summary.median, ClassicStats.median(&data).unwrap());
    assert_relative_eq!(summary.std_dev, ClassicStats.standard_deviation(&data).unwrap(), epsilon = 1e-12);
    assert_relative_eq!(summary.cv, ClassicStats.coefficient_of_variation(&data).unwrap(), epsilon = 1e-12);
}

proptest! {
    #[test]
    fn prop_verdict_follows_thresholds(data in prop::collection::vec(-500.0..500.0_f64, 2..40)) {
        let report = StatsComparator::default().analyze(&data).unwrap();
        prop_assert_eq!(report.verdict, Verdict::from_metrics(report.bias_percent, report.noise_ratio));
        prop_assert!(report.noise_ratio >= 0.0);
        prop_assert!(report.absolute_difference >= 0.0);
    }
}
