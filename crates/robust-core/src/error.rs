//! Error types for robust statistical analysis
//!
//! Provides a unified error type for all statguard crates. Every failure is a
//! precondition violation: either the sample itself is unusable
//! ([`ErrorKind::DataValidation`]) or the caller asked for a configuration the
//! estimators do not support ([`ErrorKind::Usage`]).

use thiserror::Error;

/// Core error type for robust statistical operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// A sample element is NaN, infinite or not representable as `f64`
    #[error("Invalid input: sample element at index {index} is not a finite number")]
    NonFinite { index: usize },

    /// Trim fraction outside `[0, 0.5)`
    #[error("Invalid trim fraction {alpha}: must be in [0, 0.5)")]
    InvalidTrimFraction { alpha: f64 },

    /// Trimming would remove every observation
    #[error("Trim fraction {alpha} too large for a sample of {n} values")]
    TrimTooLarge { alpha: f64, n: usize },

    /// Quantile type outside the nine Hyndman-Fan definitions
    #[error("Unsupported quantile type {0}: must be an integer in [1, 9]")]
    UnsupportedQuantileType(i64),

    /// Probability that cannot be clamped into `[0, 1]`
    #[error("Invalid probability {p}: must be a finite number")]
    InvalidProbability { p: f64 },

    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Broad classification used by callers to decide how to report a failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The sample is empty, too small, or contains non-numeric values
    DataValidation,
    /// The caller requested an unsupported configuration
    Usage,
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for empty input
    pub fn empty_input() -> Self {
        Self::InsufficientData {
            expected: 1,
            actual: 0,
        }
    }

    /// Create an error for a sample below the minimum size
    pub fn insufficient(expected: usize, actual: usize) -> Self {
        Self::InsufficientData { expected, actual }
    }

    /// Classify the error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InsufficientData { .. }
            | Self::NonFinite { .. }
            | Self::InvalidTrimFraction { .. }
            | Self::TrimTooLarge { .. } => ErrorKind::DataValidation,
            Self::UnsupportedQuantileType(_)
            | Self::InvalidProbability { .. }
            | Self::InvalidParameter(_) => ErrorKind::Usage,
        }
    }

    /// Whether the sample itself was rejected
    pub fn is_data_validation(&self) -> bool {
        self.kind() == ErrorKind::DataValidation
    }

    /// Whether the requested configuration was rejected
    pub fn is_usage(&self) -> bool {
        self.kind() == ErrorKind::Usage
    }
}
