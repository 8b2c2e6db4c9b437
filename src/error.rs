//! Error types for carecost operations.
//!
//! Every failure of the estimation pipeline is local and deterministic, so
//! none of them is retried or replaced with a default value.

use std::fmt;

/// Main error type for carecost operations.
///
/// # Examples
///
/// ```
/// use carecost::error::CareCostError;
///
/// let err = CareCostError::DimensionMismatch {
///     expected: "8 features".to_string(),
///     actual: "7 features".to_string(),
/// };
/// assert!(err.to_string().contains("dimension mismatch"));
/// ```
#[derive(Debug)]
pub enum CareCostError {
    /// A component was used before it was fitted.
    NotFitted {
        /// Component name (e.g., "FeatureEncoder")
        component: String,
    },

    /// A categorical value outside the known vocabulary.
    UnknownCategory {
        /// Field name
        field: String,
        /// Offending value
        value: String,
        /// Accepted levels
        expected: Vec<String>,
    },

    /// The training matrix is rank-deficient.
    SingularMatrix {
        /// What made the system singular
        reason: String,
    },

    /// Vector/matrix dimensions disagree.
    DimensionMismatch {
        /// Expected dimensions description
        expected: String,
        /// Actual dimensions found
        actual: String,
    },

    /// An operation received no data.
    EmptyInput {
        /// What was empty
        context: String,
    },

    /// A dataset row failed validation at load time.
    InvalidRecord {
        /// 1-based line number in the source (header is line 1)
        line: u64,
        /// Error description
        message: String,
    },

    /// Invalid parameter value provided.
    InvalidParameter {
        /// Parameter name
        param: String,
        /// Provided value
        value: String,
        /// Constraint description
        constraint: String,
    },

    /// I/O error (file not found, permission denied, etc.).
    Io(std::io::Error),
}

impl fmt::Display for CareCostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CareCostError::NotFitted { component } => {
                write!(f, "{component} is not fitted, call fit first")
            }
            CareCostError::UnknownCategory {
                field,
                value,
                expected,
            } => {
                write!(
                    f,
                    "Unknown category for {field}: '{value}' (expected one of: {})",
                    expected.join(", ")
                )
            }
            CareCostError::SingularMatrix { reason } => {
                write!(f, "Singular matrix, no unique least-squares solution: {reason}")
            }
            CareCostError::DimensionMismatch { expected, actual } => {
                write!(f, "Feature dimension mismatch: expected {expected}, got {actual}")
            }
            CareCostError::EmptyInput { context } => write!(f, "Empty input: {context}"),
            CareCostError::InvalidRecord { line, message } => {
                write!(f, "Invalid record at line {line}: {message}")
            }
            CareCostError::InvalidParameter {
                param,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "Invalid parameter: {param} = {value}, expected {constraint}"
                )
            }
            CareCostError::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for CareCostError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CareCostError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CareCostError {
    fn from(err: std::io::Error) -> Self {
        CareCostError::Io(err)
    }
}

impl CareCostError {
    /// Create a dimension mismatch error with descriptive context
    #[must_use]
    pub fn dimension_mismatch(context: &str, expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch {
            expected: format!("{context}={expected}"),
            actual: format!("{actual}"),
        }
    }

    /// Create a not-fitted error for the named component
    #[must_use]
    pub fn not_fitted(component: &str) -> Self {
        Self::NotFitted {
            component: component.to_string(),
        }
    }

    /// Create a singular matrix error
    #[must_use]
    pub fn singular(reason: impl Into<String>) -> Self {
        Self::SingularMatrix {
            reason: reason.into(),
        }
    }

    /// Create an empty input error
    #[must_use]
    pub fn empty_input(context: &str) -> Self {
        Self::EmptyInput {
            context: context.to_string(),
        }
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, CareCostError>;
