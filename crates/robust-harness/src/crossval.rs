//! Cross-validation of the estimators against a reference implementation

use crate::rscript::{RRuntime, RobustMeans};
use anyhow::Result;
use robust_location::{huber_mean, trimmed_mean, winsorized_mean, HuberParams};
use robust_quantile::{quantile, QuantileType};
use serde::Serialize;
use std::fmt;
use tracing::{debug, info};

/// Source of reference quantiles
pub trait ReferenceQuantiles {
    fn quantiles(&self, data: &[f64], probs: &[f64], qtype: QuantileType) -> Result<Vec<f64>>;
}

impl ReferenceQuantiles for RRuntime {
    fn quantiles(&self, data: &[f64], probs: &[f64], qtype: QuantileType) -> Result<Vec<f64>> {
        RRuntime::quantiles(self, data, probs, qtype)
    }
}

/// One probability where the two implementations disagree
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Mismatch {
    pub p: f64,
    pub ours: f64,
    pub reference: f64,
}

impl Mismatch {
    pub fn difference(&self) -> f64 {
        (self.ours - self.reference).abs()
    }
}

/// Outcome for one quantile definition
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeReport {
    pub qtype: u8,
    pub mismatches: Vec<Mismatch>,
}

impl TypeReport {
    pub fn passed(&self) -> bool {
        self.mismatches.is_empty()
    }
}

impl fmt::Display for TypeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.passed() {
            return write!(f, "Type {} OK", self.qtype);
        }
        for (i, m) in self.mismatches.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(
                f,
                "Type {} mismatch at p={} (ours={}, r={})",
                self.qtype, m.p, m.ours, m.reference
            )?;
        }
        Ok(())
    }
}

/// Compare all nine quantile definitions against the reference
pub fn validate_quantiles<R: ReferenceQuantiles>(
    reference: &R,
    data: &[f64],
    probs: &[f64],
    epsilon: f64,
) -> Result<Vec<TypeReport>> {
    QuantileType::ALL
        .iter()
        .map(|&qtype| -> Result<TypeReport> {
            let expected = reference.quantiles(data, probs, qtype)?;
            let mut mismatches = Vec::new();
            for (&p, &want) in probs.iter().zip(&expected) {
                let ours = quantile(data, p, qtype)?;
                if (ours - want).abs() > epsilon {
                    mismatches.push(Mismatch {
                        p,
                        ours,
                        reference: want,
                    });
                }
            }
            debug!(qtype = qtype.number(), mismatches = mismatches.len(), "validated");
            Ok(TypeReport {
                qtype: qtype.number(),
                mismatches,
            })
        })
        .collect()
}

/// Our robust means next to R's
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MeansReport {
    pub ours: (f64, f64, f64),
    pub reference: (f64, f64, f64),
}

impl MeansReport {
    /// Largest absolute difference across the three estimators
    pub fn max_difference(&self) -> f64 {
        let (a, b, c) = self.ours;
        let (x, y, z) = self.reference;
        (a - x).abs().max((b - y).abs()).max((c - z).abs())
    }
}

/// Compare trimmed, winsorized and Huber means against R
///
/// Huber runs with a generous iteration cap so both sides reach the
/// same fixed point.
pub fn validate_means(runtime: &RRuntime, data: &[f64], alpha: f64, params: &HuberParams) -> Result<MeansReport> {
    let RobustMeans {
        trimmed,
        winsorized,
        huber,
    } = runtime.robust_means(data, alpha, params.k, params.tolerance)?;

    let ours = (
        trimmed_mean(data, alpha)?,
        winsorized_mean(data, alpha, QuantileType::Type7)?,
        huber_mean(data, params)?,
    );
    let report = MeansReport {
        ours,
        reference: (trimmed, winsorized, huber),
    };
    info!(max_difference = report.max_difference(), "robust means validated");
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Reference that answers from a fixed table
    struct Table(Vec<(u8, Vec<f64>)>);

    impl ReferenceQuantiles for Table {
        fn quantiles(&self, _data: &[f64], _probs: &[f64], qtype: QuantileType) -> Result<Vec<f64>> {
            let (_, values) = self
                .0
                .iter()
                .find(|(n, _)| *n == qtype.number())
                .ok_or_else(|| anyhow::anyhow!("no entry for {qtype}"))?;
            Ok(values.clone())
        }
    }

    fn r_table() -> Table {
        Table(vec![
            (1, vec![2.0, 4.0, 7.0]),
            (2, vec![2.0, 4.5, 7.0]),
            (3, vec![1.0, 4.0, 7.0]),
            (4, vec![1.5, 4.0, 6.5]),
            (5, vec![2.0, 4.5, 7.0]),
            (6, vec![1.75, 4.5, 7.25]),
            (7, vec![2.25, 4.5, 6.75]),
            (8, vec![1.916_666_666_666_667, 4.5, 7.083_333_333_333_333]),
            (9, vec![1.9375, 4.5, 7.0625]),
        ])
    }

    #[test]
    fn test_all_types_pass_against_table() {
        let data: Vec<f64> = (0..10).map(f64::from).collect();
        let reports = validate_quantiles(&r_table(), &data, &[0.25, 0.5, 0.75], 1e-6).unwrap();
        assert_eq!(reports.len(), 9);
        for report in &reports {
            assert!(report.passed(), "{report}");
            assert_eq!(report.to_string(), format!("Type {} OK", report.qtype));
        }
    }

    #[test]
    fn test_mismatch_is_reported() {
        let mut table = r_table();
        table.0[6].1[1] = 4.0;
        let data: Vec<f64> = (0..10).map(f64::from).collect();
        let reports = validate_quantiles(&table, &data, &[0.25, 0.5, 0.75], 1e-6).unwrap();
        let bad: Vec<_> = reports.iter().filter(|r| !r.passed()).collect();
        assert_eq!(bad.len(), 1);
        assert_eq!(bad[0].qtype, 7);
        assert_eq!(bad[0].mismatches[0].difference(), 0.5);
        assert_eq!(bad[0].to_string(), "Type 7 mismatch at p=0.5 (ours=4.5, r=4)");
    }

    #[test]
    fn test_reference_errors_propagate() {
        let data = [1.0, 2.0];
        assert!(validate_quantiles(&Table(Vec::new()), &data, &[0.5], 1e-6).is_err());
    }
}
