//! Carecost: annual medical insurance cost estimation in pure Rust.
//!
//! Carecost fits an ordinary least-squares model to historical insurance
//! records and estimates annual charges for new applicants. Categorical
//! attributes are one-hot encoded against a fixed vocabulary with the first
//! level of each field as the dropped reference.
//!
//! # Quick Start
//!
//! ```
//! use carecost::prelude::*;
//!
//! let csv = "age,sex,bmi,children,smoker,region,charges
//! 19,female,27.9,0,yes,southwest,16884.924
//! 18,male,33.77,1,no,southeast,1725.5523
//! 28,male,33,3,no,southeast,4449.462
//! 33,male,22.705,0,no,northwest,21984.47061
//! 32,male,28.88,0,no,northwest,3866.8552
//! 31,female,25.74,0,no,southeast,3756.6216
//! 46,female,33.44,1,no,southeast,8240.5896
//! 37,female,27.74,3,no,northwest,7281.5056
//! 37,male,29.83,2,no,northeast,6406.4107
//! 60,female,25.84,0,no,northwest,28923.13692
//! 25,male,26.22,0,no,northeast,2721.3208
//! 62,female,26.29,0,yes,southeast,27808.7251
//! ";
//! let dataset = InsuranceDataset::from_reader(csv.as_bytes()).unwrap();
//!
//! // Encode and fit in one step
//! let estimator = PremiumEstimator::from_dataset(&dataset).unwrap();
//!
//! let query = QueryRecord::new(45, 31.2, 2, "male", "no", "northwest");
//! let estimate = estimator.estimate(&query).unwrap();
//! assert!(estimate.charges.is_finite());
//! assert!(!estimate.high_risk);
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: Core Vector and Matrix types
//! - [`data`]: Insurance records and the CSV loader
//! - [`preprocessing`]: One-hot feature encoding
//! - [`linear_model`]: Ordinary least-squares regression
//! - [`pipeline`]: Fitted estimation session
//! - [`metrics`]: Regression metrics
//! - [`model_selection`]: Train/test splitting
//! - [`stats`]: Descriptive statistics and risk-factor views

pub mod data;
pub mod error;
pub mod linear_model;
pub mod metrics;
pub mod model_selection;
pub mod pipeline;
pub mod prelude;
pub mod preprocessing;
pub mod primitives;
pub mod stats;

pub use error::{CareCostError, Result};
pub use primitives::{Matrix, Vector};
