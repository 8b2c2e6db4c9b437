//! Command implementations

pub(crate) mod coefficients;
pub(crate) mod estimate;
pub(crate) mod evaluate;
pub(crate) mod explore;

use crate::error::{CliError, Result};
use carecost::data::InsuranceDataset;
use std::path::Path;

/// Loads the historical dataset, checking the path first so a missing file
/// is reported by name.
pub(crate) fn load_dataset(path: &Path) -> Result<InsuranceDataset> {
    if !path.exists() {
        return Err(CliError::FileNotFound(path.to_path_buf()));
    }
    if !path.is_file() {
        return Err(CliError::NotAFile(path.to_path_buf()));
    }

    let dataset = InsuranceDataset::from_path(path)?;
    tracing::debug!(path = %path.display(), n_records = dataset.len(), "loaded dataset");
    Ok(dataset)
}
