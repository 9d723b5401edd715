//! Test and operations harness
//!
//! - [`datasets`]: seeded sample generators
//! - [`rscript`]: a thin wrapper around `Rscript`
//! - [`crossval`]: comparison of the estimators with R's results
//!
//! R is optional. Callers check [`rscript::RRuntime::detect`] and skip
//! when it returns `None`.

pub mod crossval;
pub mod datasets;
pub mod rscript;

pub use crossval::{validate_means, validate_quantiles, MeansReport, Mismatch, ReferenceQuantiles, TypeReport};
pub use datasets::{seeded_normal, seeded_uniform, with_outliers, DEFAULT_SEED};
pub use rscript::{RRuntime, RobustMeans};
