//! # statguard
//!
//! Classical and robust descriptive statistics for numeric samples.
//!
//! The workspace is split by concern and re-exported here:
//!
//! - [`quantile`]: the nine Hyndman-Fan sample quantile definitions
//! - [`spread`]: median, MAD, IQR, robust deviation and Tukey outliers
//! - [`location`]: trimmed, winsorized and Huber means
//! - [`confidence`]: the median confidence interval
//! - [`compare`]: classical statistics and the classical-versus-robust verdict
//!
//! [`RobustStats`] bundles them behind a [`StatGuardConfig`], and
//! [`export`] renders summaries as JSON or CSV.
//!
//! ## Quick Start
//!
//! ```rust
//! use statguard::prelude::*;
//!
//! let stats = RobustStats::default();
//! let latencies = [12.0, 11.5, 13.1, 12.2, 11.9, 250.0];
//!
//! let summary = stats.summary(&latencies).unwrap();
//! assert_eq!(summary.outliers, vec![250.0]);
//!
//! let report = stats.compare(&latencies).unwrap();
//! assert_eq!(report.verdict, Verdict::Alert);
//! ```

pub mod config;
pub mod export;
pub mod stats;
pub mod summary;

pub use config::{
    StatGuardConfig, DEFAULT_CONFIDENCE_LEVEL, DEFAULT_HUBER_K, DEFAULT_HUBER_MAX_ITERATIONS,
    DEFAULT_HUBER_TOLERANCE, DEFAULT_QUANTILE_TYPE, DEFAULT_TRIM_FRACTION, MAD_CONSISTENCY,
    ZERO_SCALE_EPSILON,
};
pub use export::{to_csv, to_csv_with_delimiter, to_json, CsvRecord, ExportError};
pub use stats::RobustStats;
pub use summary::RobustSummary;

pub use robust_compare as compare;
pub use robust_confidence as confidence;
pub use robust_location as location;
pub use robust_quantile as quantile;
pub use robust_spread as spread;

pub use robust_core::{Error, ErrorKind, Result};

pub mod prelude {
    pub use crate::{RobustStats, RobustSummary, StatGuardConfig};

    pub use robust_compare::{ClassicStats, ComparisonReport, StatsComparator, Verdict};
    pub use robust_confidence::{confidence_interval, ConfidenceInterval, MedianInterval};
    pub use robust_core::{CentralTendencyEstimator, Error, Result, RobustEstimator};
    pub use robust_location::{huber_mean, trimmed_mean, winsorized_mean, HuberParams};
    pub use robust_quantile::{quantile, QuantileEstimator, QuantileType};
    pub use robust_spread::{iqr, mad, median, outliers, robust_deviation};
}
