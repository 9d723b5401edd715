//! The nine Hyndman-Fan sample quantile definitions
//!
//! Types 1-3 are discontinuous and always return an order statistic (or, for
//! type 2, the average of two). Types 4-9 interpolate linearly between
//! adjacent order statistics and differ only in their plotting position
//! `h = a + p(n + 1 - a - b)`.

use robust_core::Error;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sample quantile definition, numbered as in Hyndman & Fan (1996) and R
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum QuantileType {
    /// Inverse of the empirical distribution function
    Type1,
    /// Type 1 with averaging at discontinuities
    Type2,
    /// Nearest even order statistic (SAS definition 2)
    Type3,
    /// Linear interpolation of the empirical CDF
    Type4,
    /// Piecewise linear with knots at the midpoints (hydrologists' choice)
    Type5,
    /// `p_k = E[F(x_k)]` (Minitab, SPSS)
    Type6,
    /// `p_k = mode[F(x_k)]` (R, Excel and NumPy default)
    #[default]
    Type7,
    /// Approximately median-unbiased regardless of distribution
    Type8,
    /// Approximately unbiased when the data are normal
    Type9,
}

impl QuantileType {
    /// Every definition in ascending order
    pub const ALL: [QuantileType; 9] = [
        QuantileType::Type1,
        QuantileType::Type2,
        QuantileType::Type3,
        QuantileType::Type4,
        QuantileType::Type5,
        QuantileType::Type6,
        QuantileType::Type7,
        QuantileType::Type8,
        QuantileType::Type9,
    ];

    /// Look up a definition by its number
    ///
    /// # Errors
    ///
    /// [`Error::UnsupportedQuantileType`] for anything outside `1..=9`.
    ///
    /// ```rust
    /// use robust_quantile::QuantileType;
    ///
    /// assert_eq!(QuantileType::new(7).unwrap(), QuantileType::Type7);
    /// assert!(QuantileType::new(0).is_err());
    /// ```
    pub fn new(number: i64) -> Result<Self, Error> {
        match number {
            1..=9 => Ok(Self::ALL[(number - 1) as usize]),
            other => Err(Error::UnsupportedQuantileType(other)),
        }
    }

    /// The definition's number, 1 through 9
    pub fn number(self) -> u8 {
        match self {
            Self::Type1 => 1,
            Self::Type2 => 2,
            Self::Type3 => 3,
            Self::Type4 => 4,
            Self::Type5 => 5,
            Self::Type6 => 6,
            Self::Type7 => 7,
            Self::Type8 => 8,
            Self::Type9 => 9,
        }
    }

    /// Whether the definition interpolates between order statistics
    pub fn is_continuous(self) -> bool {
        self.plotting_position().is_some()
    }

    /// The `(a, b)` plotting-position constants of a continuous definition
    ///
    /// Returns `None` for the discontinuous types 1-3.
    pub fn plotting_position(self) -> Option<(f64, f64)> {
        match self {
            Self::Type1 | Self::Type2 | Self::Type3 => None,
            Self::Type4 => Some((0.0, 1.0)),
            Self::Type5 => Some((0.5, 0.5)),
            Self::Type6 => Some((0.0, 0.0)),
            Self::Type7 => Some((1.0, 1.0)),
            Self::Type8 => Some((1.0 / 3.0, 1.0 / 3.0)),
            Self::Type9 => Some((3.0 / 8.0, 3.0 / 8.0)),
        }
    }

    /// Estimator name used in logs and reports
    pub fn name(self) -> &'static str {
        match self {
            Self::Type1 => "Hyndman-Fan type 1",
            Self::Type2 => "Hyndman-Fan type 2",
            Self::Type3 => "Hyndman-Fan type 3",
            Self::Type4 => "Hyndman-Fan type 4",
            Self::Type5 => "Hyndman-Fan type 5",
            Self::Type6 => "Hyndman-Fan type 6",
            Self::Type7 => "Hyndman-Fan type 7",
            Self::Type8 => "Hyndman-Fan type 8",
            Self::Type9 => "Hyndman-Fan type 9",
        }
    }
}

impl TryFrom<i64> for QuantileType {
    type Error = Error;

    fn try_from(number: i64) -> Result<Self, Error> {
        Self::new(number)
    }
}

impl TryFrom<u8> for QuantileType {
    type Error = Error;

    fn try_from(number: u8) -> Result<Self, Error> {
        Self::new(i64::from(number))
    }
}

impl From<QuantileType> for i64 {
    fn from(qtype: QuantileType) -> i64 {
        i64::from(qtype.number())
    }
}

impl fmt::Display for QuantileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "type {}", self.number())
    }
}
