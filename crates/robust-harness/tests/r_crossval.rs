//! Agreement with R; every test returns early when Rscript is missing

use approx::assert_relative_eq;
use robust_harness::datasets::{seeded_uniform, OUTLIER_SAMPLE, REFERENCE_SAMPLE};
use robust_harness::{validate_means, validate_quantiles, RRuntime, DEFAULT_SEED};
use robust_location::HuberParams;

fn runtime() -> Option<RRuntime> {
    let runtime = RRuntime::detect();
    if runtime.is_none() {
        eprintln!("Rscript not available; skipping R cross-validation");
    }
    runtime
}

#[test]
fn test_quantiles_match_r_on_reference_grid() {
    let Some(r) = runtime() else { return };
    let data: Vec<f64> = (0..10).map(f64::from).collect();
    for report in validate_quantiles(&r, &data, &[0.25, 0.5, 0.75], 1e-6).unwrap() {
        assert!(report.passed(), "{report}");
    }
}

#[test]
fn test_quantiles_match_r_on_random_data() {
    let Some(r) = runtime() else { return };
    let probs = [0.0, 0.01, 0.1, 0.333, 0.5, 0.9, 0.999, 1.0];
    for data in [seeded_uniform(137, DEFAULT_SEED), REFERENCE_SAMPLE.to_vec()] {
        for report in validate_quantiles(&r, &data, &probs, 1e-9).unwrap() {
            assert!(report.passed(), "{report}");
        }
    }
}

#[test]
fn test_robust_means_match_r() {
    let Some(r) = runtime() else { return };
    if !r.has_package("MASS") {
        eprintln!("R package MASS missing; skipping");
        return;
    }
    let params = HuberParams::new(1.345, 200, 1e-9).unwrap();
    let report = validate_means(&r, &OUTLIER_SAMPLE, 0.1, &params).unwrap();
    assert_relative_eq!(report.ours.0, report.reference.0, epsilon = 1e-10);
    assert_relative_eq!(report.ours.1, report.reference.1, epsilon = 1e-10);
    assert_relative_eq!(report.ours.2, report.reference.2, epsilon = 2e-6);
}
