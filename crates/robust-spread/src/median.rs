//! Sample median

use num_traits::ToPrimitive;
use robust_core::sample::{check_sorted_input, sorted_copy};
use robust_core::utils::median_of_sorted;
use robust_core::Result;

/// Median of an unsorted sample
///
/// For an even number of values this is the mean of the two central order
/// statistics, which equals the type 7 quantile at p = 0.5.
///
/// ```rust
/// use robust_spread::median;
///
/// assert_eq!(median(&[3, 1, 2]).unwrap(), 2.0);
/// assert_eq!(median(&[-9.0, -7.0, -5.0, -3.0]).unwrap(), -6.0);
/// ```
pub fn median<T: ToPrimitive>(sample: &[T]) -> Result<f64> {
    let sorted = sorted_copy(sample, 1)?;
    Ok(median_of_sorted(&sorted))
}

/// Median of pre-sorted data
pub fn median_sorted(sorted: &[f64]) -> Result<f64> {
    check_sorted_input(sorted, 1)?;
    Ok(median_of_sorted(sorted))
}

#[cfg(test)]
mod tests {
    use super::*;
    use robust_core::Error;
    use robust_quantile::{quantile, QuantileType};

    #[test]
    fn test_median_odd_and_even() {
        assert_eq!(median(&[5.0, 1.0, 3.0]).unwrap(), 3.0);
        assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]).unwrap(), 2.5);
        assert_eq!(median(&[7_u8]).unwrap(), 7.0);
    }

    #[test]
    fn test_median_matches_type_7() {
        let data = [87.30, 84.00, 85.40, 78.00, 85.00, 89.00, 79.00, 89.00, 76.00, 86.50];
        let q = quantile(&data, 0.5, QuantileType::Type7).unwrap();
        assert!((median(&data).unwrap() - q).abs() < 1e-12);
    }

    #[test]
    fn test_median_errors() {
        let empty: [f64; 0] = [];
        assert_eq!(median(&empty), Err(Error::empty_input()));
        assert_eq!(median(&[1.0, f64::INFINITY]), Err(Error::NonFinite { index: 1 }));
        assert_eq!(median_sorted(&[]), Err(Error::empty_input()));
    }
}
