//! Robust location estimators
//!
//! - **Trimmed mean**: discards a fraction of each tail
//! - **Winsorized mean**: clamps each tail to a quantile cut point
//! - **Huber M-estimator**: reweights distant observations, with an
//!   inspectable [`HuberEstimate`]
//!
//! Each estimator has a free function taking an unsorted sample of any
//! primitive numeric type, a `_sorted` twin, and a struct implementing
//! [`robust_core::CentralTendencyEstimator`].
//!
//! # Example
//!
//! ```rust
//! use robust_location::{huber_mean, trimmed_mean, winsorized_mean, HuberParams};
//! use robust_quantile::QuantileType;
//!
//! let data = [10.0, 10.0, 11.0, 12.0, 10.0, 500.0];
//! let plain = data.iter().sum::<f64>() / data.len() as f64;
//!
//! assert!(trimmed_mean(&data, 0.2).unwrap() < plain);
//! assert!(winsorized_mean(&data, 0.2, QuantileType::Type7).unwrap() < plain);
//! assert!(huber_mean(&data, &HuberParams::default()).unwrap() < 15.0);
//! ```

pub mod huber;
pub mod trimmed;
pub mod winsorized;

pub use huber::{
    huber_estimate, huber_estimate_sorted, huber_mean, huber_mean_sorted, Huber, HuberEstimate,
    HuberParams, DEFAULT_HUBER_K, DEFAULT_HUBER_MAX_ITERATIONS, DEFAULT_HUBER_TOLERANCE,
};
pub use trimmed::{
    trimmed_mean, trimmed_mean_sorted, validate_trim_fraction, TrimmedMean, DEFAULT_TRIM_FRACTION,
};
pub use winsorized::{
    winsorized_mean, winsorized_mean_sorted, winsorized_mean_sorted_with, WinsorizedMean,
};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        huber_mean, trimmed_mean, winsorized_mean, Huber, HuberEstimate, HuberParams,
        TrimmedMean, WinsorizedMean,
    };
}
