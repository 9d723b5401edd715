//! Robust spread measurements for statistical analysis
//!
//! This crate provides robust estimators of scale/spread including:
//! - Median and MAD (Median Absolute Deviation), raw and standardized
//! - IQR (Interquartile Range) under any Hyndman-Fan quantile definition
//! - Robust deviation `S*`, its square, and the robust coefficient of variation
//! - Tukey fences and outlier detection
//!
//! # Estimator Properties
//!
//! | Estimator | Breakdown Point | Efficiency | Use When |
//! |-----------|----------------|------------|----------|
//! | Std Dev | 0% | 100% | Data is clean, normal |
//! | MAD | 50% | 37% | Heavy contamination possible |
//! | IQR | 25% | 37% | Moderate robustness needed |
//!
//! # Example
//!
//! ```rust
//! use robust_quantile::QuantileType;
//! use robust_spread::{mad, outliers, robust_deviation};
//!
//! let sample = vec![1.0, 2.0, 3.0, 4.0, 5.0, 100.0]; // Outlier!
//!
//! assert_eq!(mad(&sample).unwrap(), 1.5);
//! assert_eq!(outliers(&sample, QuantileType::Type7).unwrap(), vec![100.0]);
//! assert!(robust_deviation(&sample, QuantileType::Type7).unwrap() < 2.0);
//! ```

pub mod deviation;
pub mod fences;
pub mod iqr;
pub mod mad;
pub mod median;
pub mod traits;

pub use deviation::{
    robust_cv, robust_cv_sorted, robust_deviation, robust_deviation_sorted, robust_variance,
    robust_variance_sorted, RobustDeviation, IQR_SCALE,
};
pub use fences::{
    outliers, outliers_sorted, tukey_fences, tukey_fences_sorted, TukeyFences, TukeyRule,
    TUKEY_MULTIPLIER,
};
pub use iqr::{iqr, iqr_sorted, quartiles_sorted, Iqr};
pub use mad::{mad, mad_sorted, standardized_mad, standardized_mad_sorted, Mad, StandardizedMad, MAD_CONSISTENCY};
pub use median::{median, median_sorted};
pub use traits::{SpreadEstimator, SpreadEstimatorProperties};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        iqr, mad, median, outliers, robust_deviation, Iqr, Mad, RobustDeviation,
        SpreadEstimator, SpreadEstimatorProperties, StandardizedMad, TukeyFences,
    };
}
