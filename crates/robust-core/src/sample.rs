//! Sample normalization
//!
//! Every estimator works on an owned, validated copy of the caller's data.
//! The caller's slice is never reordered: [`normalize`] converts each element
//! to `f64`, rejects anything that is not a finite number, and optionally
//! sorts the copy ascending.

use crate::{Error, Result};
use num_traits::ToPrimitive;
use tracing::trace;

/// Convert, validate and optionally sort a sample into a new vector
///
/// # Errors
///
/// * [`Error::InsufficientData`] when `data` has fewer than `min_len` elements
/// * [`Error::NonFinite`] when an element is NaN, infinite or cannot be
///   represented as `f64`
///
/// # Examples
///
/// ```rust
/// use robust_core::sample::normalize;
///
/// let data = [3_i32, 1, 2];
/// assert_eq!(normalize(&data, 1, true).unwrap(), vec![1.0, 2.0, 3.0]);
/// assert_eq!(data, [3, 1, 2]);
/// ```
pub fn normalize<T: ToPrimitive>(data: &[T], min_len: usize, sort: bool) -> Result<Vec<f64>> {
    check_len(data.len(), min_len)?;

    let mut values = Vec::with_capacity(data.len());
    for (index, value) in data.iter().enumerate() {
        match value.to_f64() {
            Some(v) if v.is_finite() => values.push(v),
            _ => {
                trace!(index, "rejecting non-finite sample element");
                return Err(Error::NonFinite { index });
            }
        }
    }

    if sort {
        sort_ascending(&mut values);
    }
    Ok(values)
}

/// Normalize and sort; the common entry point for order-statistic estimators
pub fn sorted_copy<T: ToPrimitive>(data: &[T], min_len: usize) -> Result<Vec<f64>> {
    normalize(data, min_len, true)
}

/// Validate a slice the caller claims is already sorted
///
/// Only the length and finiteness are checked; the order is trusted.
pub fn check_sorted_input(sorted: &[f64], min_len: usize) -> Result<()> {
    check_len(sorted.len(), min_len)?;
    match sorted.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(Error::NonFinite { index }),
        None => Ok(()),
    }
}

/// Sort finite values ascending
pub fn sort_ascending(values: &mut [f64]) {
    values.sort_by(f64::total_cmp);
}

fn check_len(actual: usize, min_len: usize) -> Result<()> {
    if actual < min_len.max(1) {
        trace!(actual, expected = min_len.max(1), "rejecting undersized sample");
        return Err(Error::insufficient(min_len.max(1), actual));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_sorts_copy() {
        let data = vec![3.0, 1.0, 5.0, 2.0, 4.0];
        let original = data.clone();
        let sorted = normalize(&data, 1, true).unwrap();
        assert_eq!(sorted, vec![1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(data, original);
    }

    #[test]
    fn test_normalize_keeps_order_when_unsorted() {
        let data = [3.0, 1.0, 2.0];
        assert_eq!(normalize(&data, 1, false).unwrap(), vec![3.0, 1.0, 2.0]);
    }

    #[test]
    fn test_normalize_integers() {
        let data: [u64; 4] = [10, 2, 7, 2];
        assert_eq!(sorted_copy(&data, 1).unwrap(), vec![2.0, 2.0, 7.0, 10.0]);
    }

    #[test]
    fn test_empty_is_rejected() {
        let data: [f64; 0] = [];
        assert_eq!(normalize(&data, 1, true), Err(Error::empty_input()));
        // A minimum of zero still means at least one value
        assert_eq!(normalize(&data, 0, true), Err(Error::empty_input()));
    }

    #[test]
    fn test_minimum_length() {
        assert_eq!(
            normalize(&[1.0], 2, false),
            Err(Error::InsufficientData { expected: 2, actual: 1 })
        );
        assert!(normalize(&[1.0, 2.0], 2, false).is_ok());
    }

    #[test]
    fn test_non_finite_reports_index() {
        assert_eq!(normalize(&[1.0, f64::NAN, 3.0], 1, true), Err(Error::NonFinite { index: 1 }));
        assert_eq!(
            normalize(&[1.0, 2.0, f64::INFINITY], 1, true),
            Err(Error::NonFinite { index: 2 })
        );
        assert_eq!(
            normalize(&[f64::NEG_INFINITY], 1, true),
            Err(Error::NonFinite { index: 0 })
        );
    }

    #[test]
    fn test_check_sorted_input() {
        assert!(check_sorted_input(&[1.0, 2.0], 1).is_ok());
        assert_eq!(check_sorted_input(&[], 1), Err(Error::empty_input()));
        assert_eq!(check_sorted_input(&[1.0, f64::NAN], 1), Err(Error::NonFinite { index: 1 }));
    }

    #[test]
    fn test_sort_negative_and_duplicates() {
        let mut values = vec![3.0, -1.0, 0.0, -5.0, 3.0];
        sort_ascending(&mut values);
        assert_eq!(values, vec![-5.0, -1.0, 0.0, 3.0, 3.0]);
    }
}
