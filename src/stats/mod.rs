//! Descriptive statistics over charge data.
//!
//! - Quantiles using the R-7 method (Hyndman & Fan 1996)
//! - Five-number summary (min, Q1, median, Q3, max), the basis of a box plot
//! - Pearson correlation
//!
//! # Examples
//!
//! ```
//! use carecost::stats::{quantile, FiveNumberSummary};
//!
//! let data = [1.0, 2.0, 3.0, 4.0, 5.0];
//! assert_eq!(quantile(&data, 0.5).expect("non-empty data"), 3.0);
//!
//! let summary = FiveNumberSummary::from_values(&data).expect("non-empty data");
//! assert_eq!(summary.iqr(), 2.0);
//! ```

pub mod risk;

pub use risk::{bmi_charge_relation, smoker_charge_summary, BmiChargeRelation, GroupChargeSummary};

use crate::error::{CareCostError, Result};
use serde::Serialize;

/// Five-number summary: minimum, Q1, median, Q3, maximum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FiveNumberSummary {
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

impl FiveNumberSummary {
    /// Computes the summary of `values`.
    ///
    /// # Errors
    ///
    /// Returns `EmptyInput` for no values and `InvalidParameter` if any value
    /// is NaN.
    pub fn from_values(values: &[f64]) -> Result<Self> {
        let sorted = sorted_copy(values)?;
        Ok(Self {
            min: sorted[0],
            q1: quantile_sorted(&sorted, 0.25),
            median: quantile_sorted(&sorted, 0.5),
            q3: quantile_sorted(&sorted, 0.75),
            max: sorted[sorted.len() - 1],
        })
    }

    /// Interquartile range (Q3 - Q1).
    #[must_use]
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }
}

/// Computes quantile `q` of `values` with linear interpolation (R-7).
///
/// # Errors
///
/// Returns `EmptyInput` for no values and `InvalidParameter` if `q` is not in
/// [0, 1] or a value is NaN.
pub fn quantile(values: &[f64], q: f64) -> Result<f64> {
    if !(0.0..=1.0).contains(&q) {
        return Err(CareCostError::InvalidParameter {
            param: "q".to_string(),
            value: q.to_string(),
            constraint: "in [0, 1]".to_string(),
        });
    }
    let sorted = sorted_copy(values)?;
    Ok(quantile_sorted(&sorted, q))
}

/// Pearson correlation coefficient between `x` and `y`.
///
/// Returns `Ok(None)` when either side has zero variance.
///
/// # Errors
///
/// Returns `DimensionMismatch` for different lengths and `EmptyInput` for
/// empty inputs.
pub fn corr(x: &[f64], y: &[f64]) -> Result<Option<f64>> {
    let n = x.len();

    if n != y.len() {
        return Err(CareCostError::DimensionMismatch {
            expected: format!("{n} values in y"),
            actual: format!("{} values in y", y.len()),
        });
    }

    if n == 0 {
        return Err(CareCostError::empty_input("correlation of empty vectors"));
    }

    let x_mean = x.iter().sum::<f64>() / n as f64;
    let y_mean = y.iter().sum::<f64>() / n as f64;

    let mut cov_sum = 0.0;
    let mut x_var_sum = 0.0;
    let mut y_var_sum = 0.0;

    for (&xi, &yi) in x.iter().zip(y) {
        let x_diff = xi - x_mean;
        let y_diff = yi - y_mean;
        cov_sum += x_diff * y_diff;
        x_var_sum += x_diff * x_diff;
        y_var_sum += y_diff * y_diff;
    }

    if x_var_sum <= f64::EPSILON * n as f64 || y_var_sum <= f64::EPSILON * n as f64 {
        return Ok(None);
    }

    Ok(Some((cov_sum / (x_var_sum.sqrt() * y_var_sum.sqrt())).clamp(-1.0, 1.0)))
}

fn sorted_copy(values: &[f64]) -> Result<Vec<f64>> {
    if values.is_empty() {
        return Err(CareCostError::empty_input("statistics of empty data"));
    }
    if values.iter().any(|v| v.is_nan()) {
        return Err(CareCostError::InvalidParameter {
            param: "values".to_string(),
            value: "NaN".to_string(),
            constraint: "comparable numbers".to_string(),
        });
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    Ok(sorted)
}

// R-7: h = (n - 1) * q, interpolate between floor(h) and ceil(h)
fn quantile_sorted(sorted: &[f64], q: f64) -> f64 {
    let h = (sorted.len() - 1) as f64 * q;
    let lo = h.floor() as usize;
    let hi = h.ceil() as usize;
    sorted[lo] + (h - lo as f64) * (sorted[hi] - sorted[lo])
}
