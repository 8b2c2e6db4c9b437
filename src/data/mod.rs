//! Insurance records and the historical dataset loader.
//!
//! Rows are deserialized into [`HistoricalRecord`] by header name, so column
//! order in the file does not matter. Malformed rows are rejected here with
//! their line number rather than surfacing later inside encoding.

use crate::error::{CareCostError, Result};
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;

/// Accepted values of the `sex` field, in canonical order.
pub const SEX_LEVELS: [&str; 2] = ["female", "male"];

/// Accepted values of the `smoker` field, in canonical order.
pub const SMOKER_LEVELS: [&str; 2] = ["no", "yes"];

/// Accepted values of the `region` field, in canonical order.
pub const REGION_LEVELS: [&str; 4] = ["northeast", "northwest", "southeast", "southwest"];

/// One row of the historical training dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalRecord {
    /// Age in years
    pub age: u32,
    /// Sex (`female` or `male`)
    pub sex: String,
    /// Body-mass index
    pub bmi: f64,
    /// Number of dependent children
    pub children: u32,
    /// Smoker status (`no` or `yes`)
    pub smoker: String,
    /// Residential region
    pub region: String,
    /// Historical annual cost
    pub charges: f64,
}

impl HistoricalRecord {
    /// Returns the attributes of this record without the target.
    #[must_use]
    pub fn to_query(&self) -> QueryRecord {
        QueryRecord {
            age: self.age,
            bmi: self.bmi,
            children: self.children,
            sex: self.sex.clone(),
            smoker: self.smoker.clone(),
            region: self.region.clone(),
        }
    }
}

/// Attributes of a single person whose cost is to be estimated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryRecord {
    /// Age in years
    pub age: u32,
    /// Body-mass index
    pub bmi: f64,
    /// Number of dependent children
    pub children: u32,
    /// Sex (`female` or `male`)
    pub sex: String,
    /// Smoker status (`no` or `yes`)
    pub smoker: String,
    /// Residential region
    pub region: String,
}

impl QueryRecord {
    /// Creates a query from raw attribute values.
    #[must_use]
    pub fn new(
        age: u32,
        bmi: f64,
        children: u32,
        sex: impl Into<String>,
        smoker: impl Into<String>,
        region: impl Into<String>,
    ) -> Self {
        Self {
            age,
            bmi,
            children,
            sex: sex.into(),
            smoker: smoker.into(),
            region: region.into(),
        }
    }

    /// True when the person smokes, the one attribute flagged as high risk.
    #[must_use]
    pub fn is_smoker(&self) -> bool {
        normalize_category(&self.smoker) == "yes"
    }
}

/// Canonical form of a categorical value: trimmed and ASCII-lowercased.
#[must_use]
pub fn normalize_category(value: &str) -> String {
    value.trim().to_ascii_lowercase()
}

/// The historical dataset, validated and immutable once loaded.
///
/// # Examples
///
/// ```
/// use carecost::data::InsuranceDataset;
///
/// let csv = "age,sex,bmi,children,smoker,region,charges\n\
///            19,female,27.9,0,yes,southwest,16884.924\n";
/// let dataset = InsuranceDataset::from_reader(csv.as_bytes()).expect("valid CSV");
/// assert_eq!(dataset.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct InsuranceDataset {
    records: Vec<HistoricalRecord>,
}

impl InsuranceDataset {
    /// Loads and validates a dataset from a CSV file.
    ///
    /// # Errors
    ///
    /// Returns `Io` if the file cannot be opened, `InvalidRecord` for the
    /// first malformed row, and `EmptyInput` if the file holds no rows.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path.as_ref())?;
        Self::from_reader(file)
    }

    /// Loads and validates a dataset from any CSV source.
    ///
    /// # Errors
    ///
    /// Same as [`InsuranceDataset::from_path`], minus opening the file.
    pub fn from_reader<R: Read>(source: R) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(source);

        let mut records = Vec::new();
        for (idx, row) in reader.deserialize::<HistoricalRecord>().enumerate() {
            // Header is line 1
            let fallback_line = idx as u64 + 2;
            let record = row.map_err(|e| CareCostError::InvalidRecord {
                line: e.position().map_or(fallback_line, csv::Position::line),
                message: e.to_string(),
            })?;
            records.push(validate_record(record, fallback_line)?);
        }

        if records.is_empty() {
            return Err(CareCostError::empty_input("dataset has no rows"));
        }

        Ok(Self { records })
    }

    /// Builds a dataset from in-memory records, applying the load-time checks.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRecord` (line = 1-based record index + 1) for the first
    /// bad record and `EmptyInput` for an empty list.
    pub fn from_records(records: Vec<HistoricalRecord>) -> Result<Self> {
        if records.is_empty() {
            return Err(CareCostError::empty_input("dataset has no rows"));
        }
        let records = records
            .into_iter()
            .enumerate()
            .map(|(idx, record)| validate_record(record, idx as u64 + 2))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { records })
    }

    /// Returns the records.
    #[must_use]
    pub fn records(&self) -> &[HistoricalRecord] {
        &self.records
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false for a loaded dataset.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Summary statistics over the dataset.
    #[must_use]
    pub fn summary(&self) -> DatasetSummary {
        let n = self.records.len();
        let charges: Vec<f64> = self.records.iter().map(|r| r.charges).collect();
        let mean = charges.iter().sum::<f64>() / n as f64;
        let smokers = self.records.iter().filter(|r| r.smoker == "yes").count();

        DatasetSummary {
            n_records: n,
            n_smokers: smokers,
            mean_charges: mean,
            min_charges: charges.iter().copied().fold(f64::INFINITY, f64::min),
            max_charges: charges.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        }
    }
}

/// Summary statistics for a loaded dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetSummary {
    /// Number of records
    pub n_records: usize,
    /// Number of smokers
    pub n_smokers: usize,
    /// Mean historical charges
    pub mean_charges: f64,
    /// Minimum historical charges
    pub min_charges: f64,
    /// Maximum historical charges
    pub max_charges: f64,
}

impl std::fmt::Display for DatasetSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Dataset:")?;
        writeln!(f, "  Records:      {}", self.n_records)?;
        writeln!(f, "  Smokers:      {}", self.n_smokers)?;
        writeln!(f, "  Mean charges: {:.2}", self.mean_charges)?;
        writeln!(f, "  Min charges:  {:.2}", self.min_charges)?;
        write!(f, "  Max charges:  {:.2}", self.max_charges)
    }
}

fn validate_record(mut record: HistoricalRecord, line: u64) -> Result<HistoricalRecord> {
    let invalid = |message: String| CareCostError::InvalidRecord { line, message };

    if !record.bmi.is_finite() {
        return Err(invalid(format!("bmi must be a finite number, got {}", record.bmi)));
    }
    if !record.charges.is_finite() {
        return Err(invalid(format!(
            "charges must be a finite number, got {}",
            record.charges
        )));
    }

    record.sex = checked_level("sex", &record.sex, &SEX_LEVELS).map_err(invalid)?;
    record.smoker = checked_level("smoker", &record.smoker, &SMOKER_LEVELS).map_err(invalid)?;
    record.region = checked_level("region", &record.region, &REGION_LEVELS).map_err(invalid)?;

    Ok(record)
}

fn checked_level(field: &str, value: &str, levels: &[&str]) -> std::result::Result<String, String> {
    let normalized = normalize_category(value);
    if levels.contains(&normalized.as_str()) {
        Ok(normalized)
    } else {
        Err(format!(
            "{field} must be one of [{}], got '{value}'",
            levels.join(", ")
        ))
    }
}
