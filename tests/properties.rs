//! Property tests across the facade

use proptest::prelude::*;
use statguard::prelude::*;

fn sample() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1e4..1e4_f64, 1..60)
}

proptest! {
    #[test]
    fn summary_ignores_input_order(mut data in sample()) {
        let stats = RobustStats::default();
        let forward = stats.summary(&data).unwrap();
        data.reverse();
        let reversed = stats.summary(&data).unwrap();
        prop_assert_eq!(forward.median, reversed.median);
        prop_assert_eq!(forward.iqr, reversed.iqr);
        prop_assert_eq!(forward.outliers, reversed.outliers);
        prop_assert_eq!(forward.confidence_interval, reversed.confidence_interval);
    }

    #[test]
    fn summary_is_idempotent(data in sample()) {
        let stats = RobustStats::default();
        prop_assert_eq!(stats.summary(&data).unwrap(), stats.summary(&data).unwrap());
    }

    #[test]
    fn outliers_lie_outside_fences(data in sample()) {
        let stats = RobustStats::default();
        let fences = stats.tukey_fences(&data).unwrap();
        let found = stats.outliers(&data).unwrap();
        for x in &found {
            prop_assert!(fences.is_outlier(*x));
        }
        let expected = data.iter().filter(|x| fences.is_outlier(**x)).count();
        prop_assert_eq!(found.len(), expected);
        prop_assert!(found.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn robust_means_stay_in_range(data in sample(), alpha in 0.0..0.49_f64) {
        let stats = RobustStats::new(StatGuardConfig::default().with_trim_fraction(alpha)).unwrap();
        let lo = data.iter().copied().fold(f64::INFINITY, f64::min);
        let hi = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let slack = 1e-9 * (1.0 + lo.abs().max(hi.abs()));
        for value in [
            stats.trimmed_mean(&data).unwrap(),
            stats.winsorized_mean(&data).unwrap(),
            stats.huber_mean(&data).unwrap(),
        ] {
            prop_assert!(value >= lo - slack && value <= hi + slack);
        }
    }

    #[test]
    fn interval_brackets_median(data in sample()) {
        let stats = RobustStats::default();
        let ci = stats.confidence_interval(&data).unwrap();
        prop_assert!(ci.lower <= ci.estimate && ci.estimate <= ci.upper);
        prop_assert_eq!(ci.estimate, stats.median(&data).unwrap());
    }
}
