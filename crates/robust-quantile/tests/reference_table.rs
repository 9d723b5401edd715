//! Values produced by R's `quantile(0:9, c(.25, .5, .75), type = k)`
//! and invariants that hold for every definition

use approx::assert_relative_eq;
use proptest::prelude::*;
use robust_quantile::{quantile, quantile_sorted, QuantileType};

const R_REFERENCE: [(u8, [f64; 3]); 9] = [
    (1, [2.0, 4.0, 7.0]),
    (2, [2.0, 4.5, 7.0]),
    (3, [1.0, 4.0, 7.0]),
    (4, [1.5, 4.0, 6.5]),
    (5, [2.0, 4.5, 7.0]),
    (6, [1.75, 4.5, 7.25]),
    (7, [2.25, 4.5, 6.75]),
    (8, [1.916_666_666_666_667, 4.5, 7.083_333_333_333_333]),
    (9, [1.937_5, 4.5, 7.062_5]),
];

#[test]
fn test_r_reference_table() {
    let data: Vec<f64> = (0..10).map(f64::from).collect();

    for (number, expected) in R_REFERENCE {
        let qtype = QuantileType::try_from(number).unwrap();
        for (p, want) in [0.25, 0.5, 0.75].into_iter().zip(expected) {
            let got = quantile(&data, p, qtype).unwrap();
            assert_relative_eq!(got, want, epsilon = 1e-7);
        }
    }
}

#[test]
fn test_reference_sample_quartiles() {
    let data = [87.30, 84.00, 85.40, 78.00, 85.00, 89.00, 79.00, 89.00, 76.00, 86.50];
    let q1 = quantile(&data, 0.25, QuantileType::Type7).unwrap();
    let q2 = quantile(&data, 0.5, QuantileType::Type7).unwrap();
    let q3 = quantile(&data, 0.75, QuantileType::Type7).unwrap();
    assert_relative_eq!(q1, 80.25, epsilon = 1e-9);
    assert_relative_eq!(q2, 85.2, epsilon = 1e-9);
    assert_relative_eq!(q3, 87.1, epsilon = 1e-9);
}

#[test]
fn test_unsupported_types_are_rejected() {
    for number in [0_i64, 10, -7] {
        let err = QuantileType::new(number).unwrap_err();
        assert!(err.is_usage());
    }
}

fn sample() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1.0e6..1.0e6_f64, 1..60)
}

fn any_type() -> impl Strategy<Value = QuantileType> {
    (1_i64..=9).prop_map(|k| QuantileType::new(k).unwrap())
}

proptest! {
    #[test]
    fn prop_extremes_are_min_and_max(data in sample(), qtype in any_type()) {
        let min = data.iter().copied().fold(f64::INFINITY, f64::min);
        let max = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        prop_assert_eq!(quantile(&data, 0.0, qtype).unwrap(), min);
        prop_assert_eq!(quantile(&data, 1.0, qtype).unwrap(), max);
    }

    #[test]
    fn prop_result_within_range(data in sample(), p in 0.0..=1.0_f64, qtype in any_type()) {
        let q = quantile(&data, p, qtype).unwrap();
        let min = data.iter().copied().fold(f64::INFINITY, f64::min);
        let max = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        // Interpolation may land one ulp past the bracketing order statistic
        let tol = 1e-9 * max.abs().max(min.abs()).max(1.0);
        prop_assert!(q >= min - tol && q <= max + tol);
    }

    #[test]
    fn prop_order_invariant(data in sample(), p in 0.0..=1.0_f64, qtype in any_type()) {
        let mut reversed = data.clone();
        reversed.reverse();
        let mut sorted = data.clone();
        sorted.sort_by(f64::total_cmp);

        let q = quantile(&data, p, qtype).unwrap();
        prop_assert_eq!(q, quantile(&reversed, p, qtype).unwrap());
        prop_assert_eq!(q, quantile_sorted(&sorted, p, qtype).unwrap());
    }

    #[test]
    fn prop_discontinuous_types_return_sample_values(
        data in sample(),
        p in 0.0..=1.0_f64,
        number in prop_oneof![Just(1_i64), Just(3_i64)],
    ) {
        let q = quantile(&data, p, QuantileType::new(number).unwrap()).unwrap();
        prop_assert!(data.contains(&q));
    }
}
