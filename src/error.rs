//! Typed errors for fitting and model search.
//!
//! The three kinds map to the three ways a fit can go wrong:
//!
//! - mismatched observation counts between variables
//! - a design matrix that cannot be solved (singular / too few observations)
//! - degenerate search input (e.g., a full model with no explanatory variables)
//!
//! Arithmetic edge cases (zero degrees of freedom, singular normal equations)
//! are always surfaced as typed errors rather than NaN or infinite scores.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, FitError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FitError {
    /// Explanatory/response vectors with unequal observation counts.
    #[error("variable lengths differ: expected {expected} observations, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    /// The model cannot produce a score (singular design, insufficient
    /// degrees of freedom, zero response variance).
    #[error("model cannot be fitted: {reason}")]
    NonFittableModel { reason: String },

    /// Search input missing or degenerate.
    #[error("insufficient parameters: {reason}")]
    InsufficientParameters { reason: String },
}

impl FitError {
    pub(crate) fn non_fittable(reason: impl Into<String>) -> Self {
        FitError::NonFittableModel {
            reason: reason.into(),
        }
    }

    pub(crate) fn insufficient(reason: impl Into<String>) -> Self {
        FitError::InsufficientParameters {
            reason: reason.into(),
        }
    }
}
