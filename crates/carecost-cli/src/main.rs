//! carecost - insurance cost estimation CLI
//!
//! Usage:
//!   carecost estimate --age 19 --bmi 27.9 --children 0 --sex female --smoker yes --region southwest
//!   carecost coefficients            # Fitted intercept and coefficients
//!   carecost evaluate --seed 7       # Holdout MAE, RMSE and R²
//!   carecost explore                 # Charges by smoker, BMI vs charges
//!
//! The dataset is read from `--data` or `CARECOST_DATA` (default `insurance.csv`).

use carecost::data::QueryRecord;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod commands;
mod error;
mod output;

use commands::{coefficients, estimate, evaluate, explore};
use output::OutputFormat;

/// carecost - Annual insurance cost estimator
///
/// Fits a least-squares model to historical insurance records and estimates
/// the annual cost for a new applicant.
#[derive(Parser)]
#[command(name = "carecost")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Historical insurance records (CSV)
    #[arg(long, global = true, env = "CARECOST_DATA", default_value = "insurance.csv")]
    data: PathBuf,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Verbose logging (debug level)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate annual insurance cost for one applicant
    Estimate {
        /// Age in years (18-80)
        #[arg(long, value_parser = clap::value_parser!(u32).range(18..=80))]
        age: u32,

        /// Body-mass index (15.0-50.0)
        #[arg(long, value_parser = parse_bmi)]
        bmi: f64,

        /// Number of dependent children (0-5)
        #[arg(long, value_parser = clap::value_parser!(u32).range(0..=5))]
        children: u32,

        /// Sex: female or male
        #[arg(long)]
        sex: String,

        /// Smoker: yes or no
        #[arg(long)]
        smoker: String,

        /// Region: northeast, northwest, southeast or southwest
        #[arg(long)]
        region: String,
    },

    /// Show the fitted intercept and per-feature coefficients
    Coefficients,

    /// Fit on a random training share and report errors on the rest
    Evaluate {
        /// Fraction of records held out for testing
        #[arg(long, default_value = "0.2")]
        test_size: f64,

        /// Shuffle seed
        #[arg(long, default_value = "42")]
        seed: u64,
    },

    /// Summarize charges by smoking status and their relation to BMI
    Explore,
}

fn parse_bmi(s: &str) -> Result<f64, String> {
    let bmi: f64 = s.parse().map_err(|_| format!("'{s}' is not a number"))?;
    if (15.0..=50.0).contains(&bmi) {
        Ok(bmi)
    } else {
        Err(format!("{bmi} is not in 15.0..=50.0"))
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Estimate {
            age,
            bmi,
            children,
            sex,
            smoker,
            region,
        } => {
            let query = QueryRecord::new(age, bmi, children, sex, smoker, region);
            estimate::run(&cli.data, &query, cli.format)
        }
        Commands::Coefficients => coefficients::run(&cli.data, cli.format),
        Commands::Evaluate { test_size, seed } => evaluate::run(&cli.data, test_size, seed, cli.format),
        Commands::Explore => explore::run(&cli.data, cli.format),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("error: {e}");
            e.exit_code()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_bmi_bounds() {
        assert_eq!(parse_bmi("27.9"), Ok(27.9));
        assert_eq!(parse_bmi("15"), Ok(15.0));
        assert!(parse_bmi("50.1").is_err());
        assert!(parse_bmi("fat").is_err());
    }
}
