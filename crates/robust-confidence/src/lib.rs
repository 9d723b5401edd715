//! Confidence intervals for robust statistics
//!
//! The interval implemented here brackets the sample median with a
//! normal-approximation margin `z·S*`, where `S*` is the robust deviation
//! derived from the interquartile range.
//!
//! # Example
//!
//! ```rust
//! use robust_confidence::{confidence_interval, MedianInterval};
//!
//! let data = [12.0, 15.0, 11.0, 14.0, 13.0, 12.5, 90.0];
//! let ci = confidence_interval(&data).unwrap();
//! assert!(ci.contains(13.0));
//!
//! let ci99 = MedianInterval::with_level(0.99).unwrap().interval(&data).unwrap();
//! assert!(ci99.width() > ci.width());
//! ```

pub mod median_interval;
pub mod types;

pub use median_interval::{confidence_interval, confidence_interval_sorted, MedianInterval, DEFAULT_Z};
pub use types::{ConfidenceInterval, ConfidenceLevel};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{confidence_interval, ConfidenceInterval, ConfidenceLevel, MedianInterval};
}
