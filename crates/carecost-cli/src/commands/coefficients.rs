//! Show the fitted model

use crate::error::Result;
use crate::output::{self, OutputFormat};
use carecost::pipeline::PremiumEstimator;
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
struct Coefficient {
    feature: String,
    value: f64,
}

#[derive(Serialize)]
struct ModelOutput {
    n_samples: usize,
    intercept: f64,
    coefficients: Vec<Coefficient>,
}

pub(crate) fn run(data: &Path, format: OutputFormat) -> Result<()> {
    let dataset = super::load_dataset(data)?;
    let estimator = PremiumEstimator::from_dataset(&dataset)?;
    let model = estimator.model();

    let coefficients: Vec<Coefficient> = estimator
        .named_coefficients()
        .into_iter()
        .map(|(feature, value)| Coefficient { feature, value })
        .collect();

    match format {
        OutputFormat::Json => output::json(&ModelOutput {
            n_samples: model.n_samples(),
            intercept: model.intercept(),
            coefficients,
        }),
        OutputFormat::Table => {
            output::section("Model");
            output::kv("Samples", model.n_samples());
            output::kv("Intercept", format!("{:.4}", model.intercept()));

            output::section("Coefficients");
            let width = coefficients.iter().map(|c| c.feature.len()).max().unwrap_or(0);
            for c in &coefficients {
                println!("  {:<width$}  {:>14.4}", c.feature, c.value);
            }
            Ok(())
        }
    }
}
