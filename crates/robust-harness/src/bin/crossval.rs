//! Cross-validate the quantile engine (and optionally the robust means)
//! against R.
//!
//! Exit status: 0 when everything matches, 2 on any mismatch, 1 when R is
//! unavailable or fails.

use anyhow::Result;
use clap::Parser;
use robust_harness::crossval::{validate_means, validate_quantiles};
use robust_harness::datasets::OUTLIER_SAMPLE;
use robust_harness::RRuntime;
use robust_location::{HuberParams, DEFAULT_HUBER_K, DEFAULT_TRIM_FRACTION};
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(about = "Compare statguard estimators with R's reference implementations")]
struct Args {
    /// Comma-separated sample values
    #[arg(short, long, value_delimiter = ',', allow_hyphen_values = true, default_value = "0,1,2,3,4,5,6,7,8,9")]
    data: Vec<f64>,

    /// Comma-separated probabilities
    #[arg(short, long, value_delimiter = ',', default_value = "0.25,0.5,0.75")]
    probs: Vec<f64>,

    /// Largest tolerated absolute difference
    #[arg(short, long, default_value_t = 1e-6)]
    epsilon: f64,

    /// Also check trimmed, winsorized and Huber means (needs the MASS package)
    #[arg(long)]
    means: bool,
}

fn run(args: &Args, runtime: &RRuntime) -> Result<bool> {
    let mut all_ok = true;
    for report in validate_quantiles(runtime, &args.data, &args.probs, args.epsilon)? {
        println!("{report}");
        all_ok &= report.passed();
    }

    if args.means {
        let params = HuberParams::new(DEFAULT_HUBER_K, 200, 1e-9)?;
        let report = validate_means(runtime, &OUTLIER_SAMPLE, DEFAULT_TRIM_FRACTION, &params)?;
        let ok = report.max_difference() <= args.epsilon;
        println!(
            "Means {} (ours={:?}, r={:?})",
            if ok { "OK" } else { "mismatch" },
            report.ours,
            report.reference
        );
        all_ok &= ok;
    }
    Ok(all_ok)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let Some(runtime) = RRuntime::detect() else {
        eprintln!("Rscript not found. Install R to run this validation.");
        return ExitCode::from(1);
    };

    match run(&args, &runtime) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(2),
        Err(err) => {
            error!("{err:#}");
            eprintln!("cross-validation failed: {err:#}");
            ExitCode::from(1)
        }
    }
}
