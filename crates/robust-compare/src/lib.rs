//! Classical statistics and the classical-versus-robust comparator
//!
//! [`ClassicStats`] provides the mean-based metrics; [`StatsComparator`]
//! measures how far they drift from the median and MAD and turns the gap
//! into a [`Verdict`].
//!
//! # Example
//!
//! ```rust
//! use robust_compare::{StatsComparator, Verdict};
//!
//! let report = StatsComparator::default().analyze(&[10, 10, 11, 12, 10, 500]).unwrap();
//! assert_eq!(report.verdict, Verdict::Alert);
//! ```

pub mod classic;
pub mod comparator;

pub use classic::{ClassicStats, ClassicSummary, Z_SCORE_THRESHOLD};
pub use comparator::{ComparisonReport, StatsComparator, Verdict};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{ClassicStats, ComparisonReport, StatsComparator, Verdict};
}
