//! Sample quantiles
//!
//! This crate implements the nine sample quantile definitions catalogued by
//! Hyndman & Fan (1996), with results matching R's `quantile(x, p, type = k)`.
//!
//! # Features
//!
//! - **Nine definitions**: [`QuantileType`] covers the discontinuous types 1-3
//!   and the interpolating types 4-9; type 7 is the default
//! - **Generic input**: [`quantile`] accepts any slice of primitive numbers
//! - **Pre-sorted fast path**: [`quantile_sorted`] and [`quantiles_sorted`]
//!   skip the copy-and-sort step
//! - **Estimator interface**: [`HyndmanFan`] implements [`QuantileEstimator`]
//!
//! # Example
//!
//! ```rust
//! use robust_quantile::{quantile, QuantileType};
//!
//! let data = [87.3, 84.0, 85.4, 78.0, 85.0, 89.0, 79.0, 89.0, 76.0, 86.5];
//! let q3 = quantile(&data, 0.75, QuantileType::Type7).unwrap();
//! let q1 = quantile(&data, 0.25, QuantileType::Type7).unwrap();
//! assert!((q3 - q1 - 6.85).abs() < 1e-9);
//! ```

pub mod estimator;
pub mod engine;
pub mod traits;
pub mod types;

pub use estimator::{hyndman_fan, HyndmanFan};
pub use engine::{clamp_probability, quantile, quantile_sorted, quantiles_sorted};
pub use traits::QuantileEstimator;
pub use types::QuantileType;

// Re-export from robust-core
pub use robust_core::{Error, Result};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        hyndman_fan, quantile, quantile_sorted, Error, HyndmanFan, QuantileEstimator,
        QuantileType, Result,
    };
}
