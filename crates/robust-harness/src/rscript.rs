//! Shelling out to R
//!
//! R is the reference implementation for every estimator in the workspace.
//! [`RRuntime`] locates `Rscript`, runs short inline programs and parses
//! their output. Nothing in the estimator crates depends on this module.

use anyhow::{bail, Context, Result};
use robust_quantile::QuantileType;
use serde::Deserialize;
use std::env;
use std::fmt::Display;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, warn};

/// A located `Rscript` executable
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RRuntime {
    rscript: PathBuf,
}

/// Reference values for the robust means, as computed by R
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct RobustMeans {
    pub trimmed: f64,
    pub winsorized: f64,
    pub huber: f64,
}

impl RRuntime {
    /// Search `PATH` for `Rscript`
    pub fn detect() -> Option<Self> {
        let path = env::var_os("PATH")?;
        let found = env::split_paths(&path)
            .map(|dir| dir.join(executable_name()))
            .find(|candidate| candidate.is_file());
        match found {
            Some(rscript) => {
                debug!(rscript = %rscript.display(), "found Rscript");
                Some(Self { rscript })
            }
            None => {
                warn!("Rscript not found on PATH");
                None
            }
        }
    }

    /// Use a specific executable
    pub fn at(rscript: impl Into<PathBuf>) -> Self {
        Self {
            rscript: rscript.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.rscript
    }

    /// Run an inline R program and return its standard output
    pub fn eval(&self, script: &str) -> Result<String> {
        debug!(script, "running Rscript");
        let output = Command::new(&self.rscript)
            .arg("-e")
            .arg(script)
            .output()
            .with_context(|| format!("failed to execute {}", self.rscript.display()))?;

        if !output.status.success() {
            bail!(
                "Rscript exited with {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }
        String::from_utf8(output.stdout).context("Rscript produced non-UTF-8 output")
    }

    /// Whether an R package can be loaded
    pub fn has_package(&self, name: &str) -> bool {
        let script = format!("if (!requireNamespace('{name}', quietly = TRUE)) quit(status = 1)");
        self.eval(&script).is_ok()
    }

    /// `quantile(data, probs, type = k, names = FALSE)`
    pub fn quantiles(&self, data: &[f64], probs: &[f64], qtype: QuantileType) -> Result<Vec<f64>> {
        let script = format!(
            "data <- c({}); probs <- c({}); \
             res <- quantile(data, probs = probs, type = {}, names = FALSE); \
             cat(format(res, digits = 17), sep = \",\")",
            join(data),
            join(probs),
            qtype.number()
        );
        let values = parse_csv_line(&self.eval(&script)?)?;
        if values.len() != probs.len() {
            bail!("expected {} quantiles from R, got {}", probs.len(), values.len());
        }
        Ok(values)
    }

    /// Trimmed mean (base R), winsorized mean with type 7 cut points, and
    /// `MASS::huber` location
    pub fn robust_means(&self, data: &[f64], alpha: f64, k: f64, tol: f64) -> Result<RobustMeans> {
        if !self.has_package("MASS") {
            bail!("R package MASS is not installed");
        }
        let script = format!(
            "suppressPackageStartupMessages(library(MASS)); \
             x <- c({}); alpha <- {alpha}; \
             q <- quantile(x, probs = c(alpha, 1 - alpha), type = 7, names = FALSE); \
             w <- mean(pmin(pmax(x, q[1]), q[2])); \
             h <- huber(x, k = {k}, tol = {tol})$mu; \
             cat(sprintf('{{\"trimmed\": %.17g, \"winsorized\": %.17g, \"huber\": %.17g}}', \
                 mean(x, trim = alpha), w, h))",
            join(data)
        );
        let output = self.eval(&script)?;
        serde_json::from_str(output.trim()).with_context(|| format!("invalid JSON from R: {output}"))
    }
}

fn executable_name() -> &'static str {
    if cfg!(windows) {
        "Rscript.exe"
    } else {
        "Rscript"
    }
}

fn join<T: Display>(values: &[T]) -> String {
    values.iter().map(ToString::to_string).collect::<Vec<_>>().join(",")
}

/// Parse R's comma-separated `cat()` output
pub fn parse_csv_line(output: &str) -> Result<Vec<f64>> {
    output
        .trim()
        .split(',')
        .map(str::trim)
        .filter(|field| !field.is_empty())
        .map(|field| {
            field
                .parse::<f64>()
                .with_context(|| format!("unparseable value from R: {field:?}"))
        })
        .collect()
}
