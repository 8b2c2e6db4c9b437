//! Linear models for regression.
//!
//! Ordinary Least Squares (OLS) linear regression with an intercept.

use crate::error::{CareCostError, Result};
use crate::metrics::r_squared;
use crate::primitives::{Matrix, Vector};
use serde::Serialize;

/// Coefficients and intercept of a fitted least-squares model.
///
/// Only [`CostEstimator::fit`] creates one. It is never updated in place:
/// refitting produces a new model from the full batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FittedModel {
    /// One coefficient per encoded feature.
    coefficients: Vector<f64>,
    /// Intercept (bias) term.
    intercept: f64,
    /// Number of training samples.
    n_samples: usize,
}

impl FittedModel {
    /// Returns the coefficients (excluding intercept).
    #[must_use]
    pub fn coefficients(&self) -> &Vector<f64> {
        &self.coefficients
    }

    /// Returns the intercept term.
    #[must_use]
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Number of features the model expects.
    #[must_use]
    pub fn n_features(&self) -> usize {
        self.coefficients.len()
    }

    /// Number of samples the model was fitted on.
    #[must_use]
    pub fn n_samples(&self) -> usize {
        self.n_samples
    }

    /// Predicts the target for one encoded feature vector.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if `x.len()` differs from the number of
    /// coefficients.
    pub fn predict(&self, x: &[f64]) -> Result<f64> {
        if x.len() != self.coefficients.len() {
            return Err(CareCostError::dimension_mismatch(
                "n_features",
                self.coefficients.len(),
                x.len(),
            ));
        }
        let dot: f64 = self
            .coefficients
            .as_slice()
            .iter()
            .zip(x)
            .map(|(b, v)| b * v)
            .sum();
        Ok(self.intercept + dot)
    }

    /// Predicts the target for every row of `x`.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if the column count differs from the
    /// number of coefficients.
    pub fn predict_batch(&self, x: &Matrix<f64>) -> Result<Vector<f64>> {
        Ok(x.matvec(&self.coefficients)?.add_scalar(self.intercept))
    }

    /// Computes the R² score of the model on `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if shapes disagree.
    pub fn score(&self, x: &Matrix<f64>, y: &Vector<f64>) -> Result<f64> {
        let y_pred = self.predict_batch(x)?;
        if y_pred.len() != y.len() {
            return Err(CareCostError::dimension_mismatch("targets", y_pred.len(), y.len()));
        }
        Ok(r_squared(&y_pred, y))
    }
}

/// Ordinary Least Squares estimator for annual insurance cost.
///
/// Fits `y = Xβ + b` by minimizing the residual sum of squares.
///
/// # Solver
///
/// Columns of `X` and the target are centered on their means, then the
/// normal equations `(XcᵀXc) β = Xcᵀ yc` are solved by Cholesky
/// decomposition. The intercept is recovered as `ȳ - x̄·β`. Centering absorbs
/// the intercept so that a constant column shows up as a zero pivot.
///
/// Rank deficiency (too few samples, a constant column, exact collinearity)
/// is reported as `SingularMatrix`; no pseudo-inverse fallback is attempted.
///
/// # Examples
///
/// ```
/// use carecost::linear_model::CostEstimator;
/// use carecost::primitives::{Matrix, Vector};
///
/// // y = 2x + 1
/// let x = Matrix::from_vec(4, 1, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
/// let y = Vector::from_slice(&[3.0, 5.0, 7.0, 9.0]);
///
/// let mut estimator = CostEstimator::new();
/// let model = estimator.fit(&x, &y).unwrap();
/// assert!((model.coefficients()[0] - 2.0).abs() < 1e-9);
/// assert!((estimator.predict(&[10.0]).unwrap() - 21.0).abs() < 1e-9);
/// ```
///
/// # Performance
///
/// - Time complexity: O(n·p² + p³) where n = samples, p = features
/// - Space complexity: O(n·p)
#[derive(Debug, Clone, Default)]
pub struct CostEstimator {
    model: Option<FittedModel>,
}

impl CostEstimator {
    /// Creates an unfitted estimator.
    #[must_use]
    pub fn new() -> Self {
        Self { model: None }
    }

    /// Returns true if the estimator has been fitted.
    #[must_use]
    pub fn is_fitted(&self) -> bool {
        self.model.is_some()
    }

    /// The fitted model, if any.
    #[must_use]
    pub fn model(&self) -> Option<&FittedModel> {
        self.model.as_ref()
    }

    /// Fits the model on the full batch, replacing any previous fit.
    ///
    /// On error the estimator keeps its previous state.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `x` has no rows (`EmptyInput`)
    /// - `x` and `y` disagree on the sample count (`DimensionMismatch`)
    /// - `x` is rank-deficient (`SingularMatrix`)
    pub fn fit(&mut self, x: &Matrix<f64>, y: &Vector<f64>) -> Result<&FittedModel> {
        let model = Self::solve(x, y)?;
        Ok(self.model.insert(model))
    }

    /// Predicts the target for one encoded feature vector.
    ///
    /// # Errors
    ///
    /// Returns `NotFitted` before [`fit`](Self::fit) and `DimensionMismatch`
    /// for a vector of the wrong length.
    pub fn predict(&self, x: &[f64]) -> Result<f64> {
        self.model
            .as_ref()
            .ok_or_else(|| CareCostError::not_fitted("CostEstimator"))?
            .predict(x)
    }

    /// Solves the least-squares problem without touching estimator state.
    ///
    /// # Errors
    ///
    /// Same as [`fit`](Self::fit).
    pub fn solve(x: &Matrix<f64>, y: &Vector<f64>) -> Result<FittedModel> {
        let (n_samples, n_features) = x.shape();

        if n_samples == 0 {
            return Err(CareCostError::empty_input("cannot fit with zero samples"));
        }

        if n_samples != y.len() {
            return Err(CareCostError::dimension_mismatch(
                "n_samples",
                n_samples,
                y.len(),
            ));
        }

        // With an intercept there are n_features + 1 parameters to determine
        if n_samples <= n_features {
            return Err(CareCostError::singular(format!(
                "{n_samples} samples cannot determine {} parameters (features plus intercept)",
                n_features + 1
            )));
        }

        let x_mean = x.column_means();
        let y_mean = y.mean();

        let mut centered = Vec::with_capacity(n_samples * n_features);
        for i in 0..n_samples {
            centered.extend(x.row(i).iter().zip(&x_mean).map(|(v, m)| v - m));
        }
        let xc = Matrix::from_vec(n_samples, n_features, centered)?;
        let yc = y.add_scalar(-y_mean);

        let xt = xc.transpose();
        let xtx = xt.matmul(&xc)?;
        let xty = xt.matvec(&yc)?;

        let coefficients = xtx.cholesky_solve(&xty)?;
        let intercept = y_mean
            - coefficients
                .as_slice()
                .iter()
                .zip(&x_mean)
                .map(|(b, m)| b * m)
                .sum::<f64>();

        tracing::debug!(n_samples, n_features, intercept, "fitted least-squares model");

        Ok(FittedModel {
            coefficients,
            intercept,
            n_samples,
        })
    }
}
