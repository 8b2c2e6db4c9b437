//! End-to-end premium estimation session.
//!
//! [`PremiumEstimator::fit`] encodes the historical records and fits the
//! least-squares model in one step, so a value of this type is always ready
//! to answer queries. Encoder and model come from the same fit and cannot
//! drift apart.

use crate::data::{HistoricalRecord, InsuranceDataset, QueryRecord};
use crate::error::Result;
use crate::linear_model::{CostEstimator, FittedModel};
use crate::metrics::{mae, r_squared, rmse};
use crate::model_selection::train_test_split;
use crate::preprocessing::FeatureEncoder;
use serde::Serialize;

/// A point estimate of annual cost for one query.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Estimate {
    /// Predicted annual charges
    pub charges: f64,
    /// True for smokers, the attribute that drives cost up the most
    pub high_risk: bool,
}

/// Fitted encoder and model for one session.
///
/// # Examples
///
/// ```
/// use carecost::data::{InsuranceDataset, QueryRecord};
/// use carecost::pipeline::PremiumEstimator;
///
/// let csv = "age,sex,bmi,children,smoker,region,charges
/// 19,female,27.9,0,yes,southwest,16884.924
/// 18,male,33.77,1,no,southeast,1725.5523
/// 28,male,33,3,no,southeast,4449.462
/// 33,male,22.705,0,no,northwest,21984.47061
/// 32,male,28.88,0,no,northwest,3866.8552
/// 31,female,25.74,0,no,southeast,3756.6216
/// 46,female,33.44,1,no,southeast,8240.5896
/// 37,female,27.74,3,no,northwest,7281.5056
/// 37,male,29.83,2,no,northeast,6406.4107
/// 60,female,25.84,0,no,northwest,28923.13692
/// 25,male,26.22,0,no,northeast,2721.3208
/// 62,female,26.29,0,yes,southeast,27808.7251
/// ";
/// let dataset = InsuranceDataset::from_reader(csv.as_bytes()).unwrap();
/// let estimator = PremiumEstimator::from_dataset(&dataset).unwrap();
///
/// let query = QueryRecord::new(19, 27.9, 0, "female", "yes", "southwest");
/// let estimate = estimator.estimate(&query).unwrap();
/// assert!(estimate.charges.is_finite());
/// assert!(estimate.high_risk);
/// ```
#[derive(Debug, Clone)]
pub struct PremiumEstimator {
    encoder: FeatureEncoder,
    model: FittedModel,
}

impl PremiumEstimator {
    /// Encodes `records` and fits the model.
    ///
    /// # Errors
    ///
    /// Returns `EmptyInput` for no records, `UnknownCategory` for a value
    /// outside the known levels and `SingularMatrix` if the records cannot
    /// determine a unique fit.
    pub fn fit(records: &[HistoricalRecord]) -> Result<Self> {
        let mut encoder = FeatureEncoder::new();
        let (x, y) = encoder.fit_transform(records)?;
        let model = CostEstimator::solve(&x, &y)?;
        tracing::debug!(
            n_records = records.len(),
            intercept = model.intercept(),
            "premium estimator ready"
        );
        Ok(Self { encoder, model })
    }

    /// Fits on a loaded dataset.
    ///
    /// # Errors
    ///
    /// Same as [`fit`](Self::fit).
    pub fn from_dataset(dataset: &InsuranceDataset) -> Result<Self> {
        Self::fit(dataset.records())
    }

    /// Estimates annual charges for `query`.
    ///
    /// # Errors
    ///
    /// Returns `UnknownCategory` for a categorical value outside the fitted
    /// vocabulary.
    pub fn estimate(&self, query: &QueryRecord) -> Result<Estimate> {
        let features = self.encoder.transform_one(query)?;
        Ok(Estimate {
            charges: self.model.predict(&features)?,
            high_risk: query.is_smoker(),
        })
    }

    /// The fitted encoder.
    #[must_use]
    pub fn encoder(&self) -> &FeatureEncoder {
        &self.encoder
    }

    /// The fitted model.
    #[must_use]
    pub fn model(&self) -> &FittedModel {
        &self.model
    }

    /// Coefficients paired with their feature names, in feature order.
    #[must_use]
    pub fn named_coefficients(&self) -> Vec<(String, f64)> {
        self.encoder
            .feature_names()
            .into_iter()
            .zip(self.model.coefficients().as_slice().iter().copied())
            .collect()
    }

    /// Scores the fitted model on `records`.
    ///
    /// # Errors
    ///
    /// Returns `EmptyInput` for no records and `UnknownCategory` for a value
    /// outside the fitted vocabulary.
    pub fn evaluate(&self, records: &[HistoricalRecord]) -> Result<EvaluationReport> {
        if records.is_empty() {
            return Err(crate::error::CareCostError::empty_input("no evaluation records"));
        }
        let x = self.encoder.transform(records)?;
        let y_true = crate::primitives::Vector::from_vec(records.iter().map(|r| r.charges).collect());
        let y_pred = self.model.predict_batch(&x)?;

        Ok(EvaluationReport {
            n_train: self.model.n_samples(),
            n_test: records.len(),
            mae: mae(&y_pred, &y_true),
            rmse: rmse(&y_pred, &y_true),
            r2: r_squared(&y_pred, &y_true),
        })
    }
}

/// Error metrics of a model on held-out records.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EvaluationReport {
    /// Records the model was fitted on
    pub n_train: usize,
    /// Records the metrics were computed on
    pub n_test: usize,
    /// Mean absolute error
    pub mae: f64,
    /// Root mean squared error
    pub rmse: f64,
    /// Coefficient of determination
    pub r2: f64,
}

/// Fits on a seeded random share of `records` and scores on the rest.
///
/// # Errors
///
/// Returns `InvalidParameter` for a degenerate split, plus any error of
/// [`PremiumEstimator::fit`] on the training part.
pub fn evaluate_holdout(records: &[HistoricalRecord], test_size: f64, seed: u64) -> Result<EvaluationReport> {
    let (train, test) = train_test_split(records, test_size, seed)?;
    tracing::debug!(n_train = train.len(), n_test = test.len(), seed, "holdout split");
    PremiumEstimator::fit(&train)?.evaluate(&test)
}
