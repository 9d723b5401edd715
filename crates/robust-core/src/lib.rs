//! Core traits and types for robust statistical analysis
//!
//! This crate provides the pieces every other statguard crate builds on:
//!
//! - **Errors**: a single [`Error`] enum with an [`ErrorKind`] split between
//!   bad data and unsupported configuration
//! - **Sample normalization**: validated, sorted copies of caller data
//!   ([`sample::normalize`]); caller slices are never mutated
//! - **Traits**: [`RobustEstimator`] and [`CentralTendencyEstimator`]
//!
//! # Example
//!
//! ```rust
//! use robust_core::{sample, utils};
//!
//! let data = vec![5.0, 1.0, 4.0, 2.0, 3.0];
//! let sorted = sample::sorted_copy(&data, 1).unwrap();
//! assert_eq!(utils::median_of_sorted(&sorted), 3.0);
//! assert_eq!(utils::mean(&sorted), 3.0);
//! ```

pub mod error;
pub mod sample;
pub mod traits;
pub mod utils;

// Re-export core types
pub use error::{Error, ErrorKind, Result};
pub use traits::{CentralTendencyEstimator, RobustEstimator};

/// Difference below which a location or scale is treated as zero
pub const ZERO_SCALE_EPSILON: f64 = 1e-9;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, ErrorKind};
    pub use crate::{CentralTendencyEstimator, Result, RobustEstimator};
}
