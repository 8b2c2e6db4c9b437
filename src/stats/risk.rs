//! Exploratory views of the two known risk factors: smoking and BMI.
//!
//! These are the numeric content behind a "charges by smoker" box plot and a
//! "charges vs. BMI, coloured by smoker" scatter plot.

use super::{corr, FiveNumberSummary};
use crate::data::{normalize_category, HistoricalRecord, SMOKER_LEVELS};
use crate::error::{CareCostError, Result};
use crate::linear_model::CostEstimator;
use crate::primitives::{Matrix, Vector};
use serde::Serialize;

/// Distribution of charges within one smoker group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupChargeSummary {
    /// Smoker level (`no` or `yes`)
    pub smoker: String,
    /// Number of records in the group
    pub count: usize,
    /// Mean charges
    pub mean: f64,
    /// Box-plot statistics of charges
    pub charges: FiveNumberSummary,
}

/// Relation between BMI and charges within one smoker group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BmiChargeRelation {
    /// Smoker level (`no` or `yes`)
    pub smoker: String,
    /// Number of records in the group
    pub count: usize,
    /// Pearson correlation of BMI and charges, if defined
    pub correlation: Option<f64>,
    /// Change in charges per BMI unit, if the group determines a line
    pub slope: Option<f64>,
    /// Charges at BMI zero on that line
    pub intercept: Option<f64>,
}

fn group_by_smoker(records: &[HistoricalRecord]) -> Vec<(&'static str, Vec<&HistoricalRecord>)> {
    SMOKER_LEVELS
        .iter()
        .map(|&level| {
            let members = records
                .iter()
                .filter(|r| normalize_category(&r.smoker) == level)
                .collect::<Vec<_>>();
            (level, members)
        })
        .filter(|(_, members)| !members.is_empty())
        .collect()
}

/// Box-plot statistics of charges for smokers and non-smokers.
///
/// Groups are reported in level order (`no`, `yes`); empty groups are left out.
///
/// # Errors
///
/// Returns `EmptyInput` if no record belongs to a known smoker level.
pub fn smoker_charge_summary(records: &[HistoricalRecord]) -> Result<Vec<GroupChargeSummary>> {
    let groups = group_by_smoker(records);
    if groups.is_empty() {
        return Err(CareCostError::empty_input("no records with a known smoker level"));
    }

    groups
        .into_iter()
        .map(|(level, members)| {
            let charges: Vec<f64> = members.iter().map(|r| r.charges).collect();
            Ok(GroupChargeSummary {
                smoker: level.to_string(),
                count: charges.len(),
                mean: charges.iter().sum::<f64>() / charges.len() as f64,
                charges: FiveNumberSummary::from_values(&charges)?,
            })
        })
        .collect()
}

/// Correlation and least-squares line of charges on BMI per smoker group.
///
/// # Errors
///
/// Returns `EmptyInput` if no record belongs to a known smoker level.
pub fn bmi_charge_relation(records: &[HistoricalRecord]) -> Result<Vec<BmiChargeRelation>> {
    let groups = group_by_smoker(records);
    if groups.is_empty() {
        return Err(CareCostError::empty_input("no records with a known smoker level"));
    }

    groups
        .into_iter()
        .map(|(level, members)| {
            let bmi: Vec<f64> = members.iter().map(|r| r.bmi).collect();
            let charges: Vec<f64> = members.iter().map(|r| r.charges).collect();

            let x = Matrix::from_vec(bmi.len(), 1, bmi.clone())?;
            let line = match CostEstimator::solve(&x, &Vector::from_slice(&charges)) {
                Ok(model) => Some((model.coefficients()[0], model.intercept())),
                Err(CareCostError::SingularMatrix { .. }) => None,
                Err(e) => return Err(e),
            };

            Ok(BmiChargeRelation {
                smoker: level.to_string(),
                count: members.len(),
                correlation: corr(&bmi, &charges)?,
                slope: line.map(|(slope, _)| slope),
                intercept: line.map(|(_, intercept)| intercept),
            })
        })
        .collect()
}
