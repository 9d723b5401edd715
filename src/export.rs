//! JSON and CSV export of summaries
//!
//! CSV output is one header row and one value row. Sequence fields are
//! joined with `|` (an empty sequence is an empty cell) and a confidence
//! interval becomes `ci_lower` and `ci_upper` columns.

use crate::summary::RobustSummary;
use robust_compare::{ClassicSummary, ComparisonReport};
use serde::Serialize;
use thiserror::Error;

/// Failure while rendering an export
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV serialization failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV buffer could not be flushed: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// A summary that flattens into a single CSV row
pub trait CsvRecord {
    /// Column names, in output order
    fn headers() -> Vec<&'static str>;

    /// Cell values matching [`headers`](Self::headers)
    fn values(&self) -> Vec<String>;
}

fn join_sequence(values: &[f64]) -> String {
    values.iter().map(f64::to_string).collect::<Vec<_>>().join("|")
}

impl CsvRecord for RobustSummary {
    fn headers() -> Vec<&'static str> {
        vec![
            "count",
            "mean",
            "median",
            "mad",
            "iqr",
            "robust_deviation",
            "robust_variance",
            "robust_cv",
            "outliers",
            "ci_lower",
            "ci_upper",
        ]
    }

    fn values(&self) -> Vec<String> {
        vec![
            self.count.to_string(),
            self.mean.to_string(),
            self.median.to_string(),
            self.mad.to_string(),
            self.iqr.to_string(),
            self.robust_deviation.to_string(),
            self.robust_variance.to_string(),
            self.robust_cv.to_string(),
            join_sequence(&self.outliers),
            self.confidence_interval.lower.to_string(),
            self.confidence_interval.upper.to_string(),
        ]
    }
}

impl CsvRecord for ClassicSummary {
    fn headers() -> Vec<&'static str> {
        vec!["count", "mean", "median", "std_dev", "sample_variance", "cv", "z_score_outliers"]
    }

    fn values(&self) -> Vec<String> {
        vec![
            self.count.to_string(),
            self.mean.to_string(),
            self.median.to_string(),
            self.std_dev.to_string(),
            self.sample_variance.to_string(),
            self.cv.to_string(),
            join_sequence(&self.z_score_outliers),
        ]
    }
}

impl CsvRecord for ComparisonReport {
    fn headers() -> Vec<&'static str> {
        vec![
            "classic_mean",
            "robust_median",
            "absolute_difference",
            "bias_percent",
            "std_dev",
            "robust_deviation",
            "noise_ratio",
            "tukey_outliers",
            "z_score_outliers",
            "verdict",
        ]
    }

    fn values(&self) -> Vec<String> {
        vec![
            self.classic_mean.to_string(),
            self.robust_median.to_string(),
            self.absolute_difference.to_string(),
            self.bias_percent.to_string(),
            self.std_dev.to_string(),
            self.robust_deviation.to_string(),
            self.noise_ratio.to_string(),
            self.tukey_outliers.to_string(),
            self.z_score_outliers.to_string(),
            self.verdict.code().to_string(),
        ]
    }
}

/// Pretty-printed JSON
pub fn to_json<S: Serialize>(summary: &S) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(summary)?)
}

/// Comma-separated header and value rows
pub fn to_csv<R: CsvRecord>(record: &R) -> Result<String, ExportError> {
    to_csv_with_delimiter(record, b',')
}

/// Header and value rows with a custom field delimiter
pub fn to_csv_with_delimiter<R: CsvRecord>(record: &R, delimiter: u8) -> Result<String, ExportError> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(Vec::new());
    writer.write_record(R::headers())?;
    writer.write_record(record.values())?;
    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8(bytes)?)
}
