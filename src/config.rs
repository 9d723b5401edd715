//! Estimator configuration
//!
//! [`StatGuardConfig`] collects the defaults the [`RobustStats`](crate::RobustStats)
//! facade applies to every call. It can be built in code with the `with_*`
//! methods or deserialized; missing fields take their defaults.

use robust_confidence::ConfidenceLevel;
use robust_core::Result;
use robust_location::{validate_trim_fraction, HuberParams};
use robust_quantile::QuantileType;
use serde::{Deserialize, Serialize};

pub use robust_core::ZERO_SCALE_EPSILON;
pub use robust_location::{
    DEFAULT_HUBER_K, DEFAULT_HUBER_MAX_ITERATIONS, DEFAULT_HUBER_TOLERANCE, DEFAULT_TRIM_FRACTION,
};
pub use robust_spread::MAD_CONSISTENCY;

/// Quantile definition used when none is configured
pub const DEFAULT_QUANTILE_TYPE: QuantileType = QuantileType::Type7;

/// Level of the median confidence interval
pub const DEFAULT_CONFIDENCE_LEVEL: f64 = 0.95;

/// Defaults applied by the facade
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatGuardConfig {
    /// Definition used for IQR, fences, `S*` and winsorizing cut points
    pub quantile_type: QuantileType,
    /// Fraction removed from each tail by the trimmed and winsorized means
    pub trim_fraction: f64,
    pub huber: HuberParams,
    /// Level of the median confidence interval
    pub confidence_level: f64,
}

impl Default for StatGuardConfig {
    fn default() -> Self {
        Self {
            quantile_type: DEFAULT_QUANTILE_TYPE,
            trim_fraction: DEFAULT_TRIM_FRACTION,
            huber: HuberParams::default(),
            confidence_level: DEFAULT_CONFIDENCE_LEVEL,
        }
    }
}

impl StatGuardConfig {
    pub fn with_quantile_type(mut self, quantile_type: QuantileType) -> Self {
        self.quantile_type = quantile_type;
        self
    }

    pub fn with_trim_fraction(mut self, trim_fraction: f64) -> Self {
        self.trim_fraction = trim_fraction;
        self
    }

    pub fn with_huber(mut self, huber: HuberParams) -> Self {
        self.huber = huber;
        self
    }

    pub fn with_confidence_level(mut self, confidence_level: f64) -> Self {
        self.confidence_level = confidence_level;
        self
    }

    /// Check every field
    pub fn validate(&self) -> Result<()> {
        validate_trim_fraction(self.trim_fraction)?;
        self.huber.validate()?;
        ConfidenceLevel::new(self.confidence_level)?;
        Ok(())
    }
}
