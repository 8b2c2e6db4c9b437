//! Estimate annual cost for one person

use crate::error::Result;
use crate::output::{self, OutputFormat};
use carecost::data::QueryRecord;
use carecost::pipeline::{Estimate, PremiumEstimator};
use serde::Serialize;
use std::path::Path;

const SMOKER_ADVISORY: &str =
    "Smoking is the largest driver of insurance cost. This estimate is flagged as high risk.";

#[derive(Serialize)]
struct EstimateOutput<'a> {
    query: &'a QueryRecord,
    #[serde(flatten)]
    estimate: Estimate,
}

pub(crate) fn run(data: &Path, query: &QueryRecord, format: OutputFormat) -> Result<()> {
    let dataset = super::load_dataset(data)?;
    let estimator = PremiumEstimator::from_dataset(&dataset)?;
    let estimate = estimator.estimate(query)?;

    match format {
        OutputFormat::Json => output::json(&EstimateOutput { query, estimate }),
        OutputFormat::Table => {
            output::section("Applicant");
            output::kv("Age", query.age);
            output::kv("BMI", format!("{:.1}", query.bmi));
            output::kv("Children", query.children);
            output::kv("Sex", &query.sex);
            output::kv("Smoker", &query.smoker);
            output::kv("Region", &query.region);

            output::section("Estimate");
            output::kv("Annual cost", output::currency(estimate.charges));
            if estimate.high_risk {
                output::warning(SMOKER_ADVISORY);
            }
            Ok(())
        }
    }
}
