//! Feature encoding for insurance records.
//!
//! Turns records into the fixed-order numeric vectors consumed by
//! [`CostEstimator`](crate::linear_model::CostEstimator):
//!
//! ```text
//! [age, bmi, children, sex_male, smoker_yes,
//!  region_northwest, region_southeast, region_southwest]
//! ```
//!
//! Every categorical field follows one rule: its levels are sorted and the
//! first level is the dropped reference, encoded as all-zero indicators. For
//! the two-level fields this yields a single bit (`male`, `yes`); for region
//! it drops `northeast`.
//!
//! # Example
//!
//! ```
//! use carecost::data::{HistoricalRecord, QueryRecord};
//! use carecost::preprocessing::FeatureEncoder;
//!
//! let records = vec![HistoricalRecord {
//!     age: 19,
//!     sex: "female".to_string(),
//!     bmi: 27.9,
//!     children: 0,
//!     smoker: "yes".to_string(),
//!     region: "southwest".to_string(),
//!     charges: 16884.924,
//! }];
//!
//! let mut encoder = FeatureEncoder::new();
//! let (x, y) = encoder.fit_transform(&records).expect("valid records");
//! assert_eq!(x.shape(), (1, 8));
//! assert_eq!(y.len(), 1);
//!
//! let query = QueryRecord::new(40, 31.5, 2, "male", "no", "northwest");
//! let v = encoder.transform_one(&query).expect("encoder is fitted");
//! assert_eq!(v, vec![40.0, 31.5, 2.0, 1.0, 0.0, 1.0, 0.0, 0.0]);
//! ```

use crate::data::{
    normalize_category, HistoricalRecord, QueryRecord, REGION_LEVELS, SEX_LEVELS, SMOKER_LEVELS,
};
use crate::error::{CareCostError, Result};
use crate::primitives::{Matrix, Vector};
use serde::Serialize;

/// Number of encoded feature dimensions.
pub const N_FEATURES: usize = 8;

/// Numeric attributes, passed through unchanged, in encoded order.
const NUMERIC_FEATURES: [&str; 3] = ["age", "bmi", "children"];

/// Levels of one categorical field and its dropped reference level.
///
/// The vocabulary is the inspectable record of how a field is encoded. The
/// reference level is always `levels[0]` after sorting; each remaining level
/// contributes one indicator column named `{field}_{level}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoricalVocabulary {
    field: String,
    levels: Vec<String>,
    counts: Vec<usize>,
}

impl CategoricalVocabulary {
    /// Creates a vocabulary over the given levels, sorted canonically.
    /// Only built from the fixed level tables, which always hold at least
    /// two distinct levels.
    #[must_use]
    pub(crate) fn new(field: &str, levels: &[&str]) -> Self {
        let mut levels: Vec<String> = levels.iter().map(|l| normalize_category(l)).collect();
        levels.sort();
        levels.dedup();
        assert!(
            levels.len() >= 2,
            "A categorical field needs at least two levels"
        );
        let counts = vec![0; levels.len()];
        Self {
            field: field.to_string(),
            levels,
            counts,
        }
    }

    /// Field name.
    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }

    /// All levels in canonical order, reference first.
    #[must_use]
    pub fn levels(&self) -> &[String] {
        &self.levels
    }

    /// The dropped reference level.
    #[must_use]
    pub fn reference(&self) -> &str {
        &self.levels[0]
    }

    /// Levels that receive an indicator column, in column order.
    #[must_use]
    pub fn encoded_levels(&self) -> &[String] {
        &self.levels[1..]
    }

    /// Number of training records seen per level (zero before fitting).
    #[must_use]
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// Indicator column names, e.g. `region_northwest`.
    #[must_use]
    pub fn column_names(&self) -> Vec<String> {
        self.encoded_levels()
            .iter()
            .map(|level| format!("{}_{level}", self.field))
            .collect()
    }

    /// Position of `value` among the levels.
    ///
    /// # Errors
    ///
    /// Returns `UnknownCategory` if the value is not a level.
    pub fn index_of(&self, value: &str) -> Result<usize> {
        let normalized = normalize_category(value);
        self.levels
            .iter()
            .position(|level| *level == normalized)
            .ok_or_else(|| CareCostError::UnknownCategory {
                field: self.field.clone(),
                value: value.to_string(),
                expected: self.levels.clone(),
            })
    }

    /// Appends the indicator bits for `value` to `out`.
    ///
    /// # Errors
    ///
    /// Returns `UnknownCategory` if the value is not a level.
    pub fn encode_into(&self, value: &str, out: &mut Vec<f64>) -> Result<()> {
        let idx = self.index_of(value)?;
        out.extend((1..self.levels.len()).map(|i| if i == idx { 1.0 } else { 0.0 }));
        Ok(())
    }

    fn record(&mut self, value: &str) -> Result<()> {
        let idx = self.index_of(value)?;
        self.counts[idx] += 1;
        Ok(())
    }
}

/// The encoding learned by [`FeatureEncoder::fit_transform`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EncoderVocabulary {
    /// Encoding of `sex`
    pub sex: CategoricalVocabulary,
    /// Encoding of `smoker`
    pub smoker: CategoricalVocabulary,
    /// Encoding of `region`
    pub region: CategoricalVocabulary,
}

impl EncoderVocabulary {
    fn known() -> Self {
        Self {
            sex: CategoricalVocabulary::new("sex", &SEX_LEVELS),
            smoker: CategoricalVocabulary::new("smoker", &SMOKER_LEVELS),
            region: CategoricalVocabulary::new("region", &REGION_LEVELS),
        }
    }

    /// Encoded column names in feature order.
    #[must_use]
    pub fn feature_names(&self) -> Vec<String> {
        let mut names: Vec<String> = NUMERIC_FEATURES.iter().map(|s| (*s).to_string()).collect();
        names.extend(self.sex.column_names());
        names.extend(self.smoker.column_names());
        names.extend(self.region.column_names());
        names
    }

    fn encode(&self, query: &QueryRecord) -> Result<Vec<f64>> {
        let mut features = Vec::with_capacity(N_FEATURES);
        features.push(f64::from(query.age));
        features.push(query.bmi);
        features.push(f64::from(query.children));
        self.sex.encode_into(&query.sex, &mut features)?;
        self.smoker.encode_into(&query.smoker, &mut features)?;
        self.region.encode_into(&query.region, &mut features)?;
        debug_assert_eq!(features.len(), N_FEATURES);
        Ok(features)
    }
}

/// Maps raw records into the shared numeric feature space.
///
/// Unfitted until [`fit_transform`](Self::fit_transform) succeeds; query
/// encoding before that fails with `NotFitted`.
#[derive(Debug, Clone, Default)]
pub struct FeatureEncoder {
    vocabulary: Option<EncoderVocabulary>,
}

impl FeatureEncoder {
    /// Creates an unfitted encoder.
    #[must_use]
    pub fn new() -> Self {
        Self { vocabulary: None }
    }

    /// Returns true once `fit_transform` has succeeded.
    #[must_use]
    pub fn is_fitted(&self) -> bool {
        self.vocabulary.is_some()
    }

    /// The learned vocabulary, if fitted.
    #[must_use]
    pub fn vocabulary(&self) -> Option<&EncoderVocabulary> {
        self.vocabulary.as_ref()
    }

    /// Encoded column names in feature order.
    #[must_use]
    pub fn feature_names(&self) -> Vec<String> {
        self.vocabulary
            .as_ref()
            .map_or_else(|| EncoderVocabulary::known().feature_names(), EncoderVocabulary::feature_names)
    }

    /// Learns the vocabulary from `records` and encodes them.
    ///
    /// Returns the design matrix (one row per record, [`N_FEATURES`]
    /// columns) and the vector of charges. On error the encoder keeps its
    /// previous state.
    ///
    /// # Errors
    ///
    /// Returns `EmptyInput` for no records and `UnknownCategory` for a
    /// categorical value outside the known levels.
    pub fn fit_transform(&mut self, records: &[HistoricalRecord]) -> Result<(Matrix<f64>, Vector<f64>)> {
        if records.is_empty() {
            return Err(CareCostError::empty_input("no training records"));
        }

        let mut vocabulary = EncoderVocabulary::known();
        for record in records {
            vocabulary.sex.record(&record.sex)?;
            vocabulary.smoker.record(&record.smoker)?;
            vocabulary.region.record(&record.region)?;
        }

        let mut data = Vec::with_capacity(records.len() * N_FEATURES);
        let mut charges = Vec::with_capacity(records.len());
        for record in records {
            data.extend(vocabulary.encode(&record.to_query())?);
            charges.push(record.charges);
        }

        let x = Matrix::from_vec(records.len(), N_FEATURES, data)?;
        self.vocabulary = Some(vocabulary);
        Ok((x, Vector::from_vec(charges)))
    }

    /// Encodes one query with the fitted vocabulary.
    ///
    /// # Errors
    ///
    /// Returns `NotFitted` before `fit_transform` and `UnknownCategory` for a
    /// categorical value outside the vocabulary.
    pub fn transform_one(&self, query: &QueryRecord) -> Result<Vec<f64>> {
        self.fitted()?.encode(query)
    }

    /// Encodes a batch of historical records without refitting.
    ///
    /// # Errors
    ///
    /// Same as [`transform_one`](Self::transform_one).
    pub fn transform(&self, records: &[HistoricalRecord]) -> Result<Matrix<f64>> {
        let vocabulary = self.fitted()?;
        let rows = records
            .iter()
            .map(|r| vocabulary.encode(&r.to_query()))
            .collect::<Result<Vec<_>>>()?;
        Matrix::from_rows(&rows, N_FEATURES)
    }

    fn fitted(&self) -> Result<&EncoderVocabulary> {
        self.vocabulary
            .as_ref()
            .ok_or_else(|| CareCostError::not_fitted("FeatureEncoder"))
    }
}
