//! Exploratory summaries of the risk factors

use crate::error::Result;
use crate::output::{self, OutputFormat};
use carecost::data::DatasetSummary;
use carecost::stats::{bmi_charge_relation, smoker_charge_summary, BmiChargeRelation, GroupChargeSummary};
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
struct ExploreOutput {
    dataset: DatasetSummary,
    charges_by_smoker: Vec<GroupChargeSummary>,
    bmi_vs_charges: Vec<BmiChargeRelation>,
}

pub(crate) fn run(data: &Path, format: OutputFormat) -> Result<()> {
    let dataset = super::load_dataset(data)?;
    let report = ExploreOutput {
        dataset: dataset.summary(),
        charges_by_smoker: smoker_charge_summary(dataset.records())?,
        bmi_vs_charges: bmi_charge_relation(dataset.records())?,
    };

    match format {
        OutputFormat::Json => output::json(&report),
        OutputFormat::Table => {
            print_table(&report);
            Ok(())
        }
    }
}

fn print_table(report: &ExploreOutput) {
    let summary = &report.dataset;
    output::section("Dataset");
    output::kv("Records", summary.n_records);
    output::kv("Smokers", summary.n_smokers);
    output::kv("Mean charges", output::currency(summary.mean_charges));

    output::section("Charges by Smoker");
    println!(
        "  {:<6} {:>6} {:>12} {:>12} {:>12} {:>12} {:>12}",
        "smoker", "count", "min", "q1", "median", "q3", "max"
    );
    for group in &report.charges_by_smoker {
        let c = &group.charges;
        println!(
            "  {:<6} {:>6} {:>12.2} {:>12.2} {:>12.2} {:>12.2} {:>12.2}",
            group.smoker, group.count, c.min, c.q1, c.median, c.q3, c.max
        );
    }

    output::section("BMI vs Charges");
    println!("  {:<6} {:>6} {:>12} {:>12}", "smoker", "count", "corr", "slope");
    for relation in &report.bmi_vs_charges {
        println!(
            "  {:<6} {:>6} {:>12} {:>12}",
            relation.smoker,
            relation.count,
            output::optional(relation.correlation, 3),
            output::optional(relation.slope, 2)
        );
    }
}
