//! Holdout evaluation

use crate::error::Result;
use crate::output::{self, OutputFormat};
use carecost::pipeline::evaluate_holdout;
use std::path::Path;

pub(crate) fn run(data: &Path, test_size: f64, seed: u64, format: OutputFormat) -> Result<()> {
    let dataset = super::load_dataset(data)?;
    let report = evaluate_holdout(dataset.records(), test_size, seed)?;

    match format {
        OutputFormat::Json => output::json(&report),
        OutputFormat::Table => {
            output::section("Holdout Evaluation");
            output::kv("Train records", report.n_train);
            output::kv("Test records", report.n_test);
            output::kv("Seed", seed);
            output::kv("MAE", output::currency(report.mae));
            output::kv("RMSE", output::currency(report.rmse));
            output::kv("R²", format!("{:.4}", report.r2));
            Ok(())
        }
    }
}
