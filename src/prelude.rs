//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use carecost::prelude::*;
//! ```

pub use crate::data::{HistoricalRecord, InsuranceDataset, QueryRecord};
pub use crate::error::CareCostError;
pub use crate::linear_model::{CostEstimator, FittedModel};
pub use crate::metrics::{mae, mse, r_squared, rmse};
pub use crate::pipeline::{Estimate, PremiumEstimator};
pub use crate::preprocessing::FeatureEncoder;
pub use crate::primitives::{Matrix, Vector};
