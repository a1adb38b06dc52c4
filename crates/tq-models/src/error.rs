//! Turbulence model errors.

use tq_core::TqError;
use thiserror::Error;

/// Result type for model construction.
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors raised while building a turbulence model.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    /// Non-physical input (negative k, zero epsilon, ...).
    #[error("Non-physical value for {what}")]
    NonPhysical { what: &'static str },

    /// Input fields do not share one discretization.
    #[error("Cell count mismatch for {what}: expected {expected}, found {found}")]
    CellCountMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },

    #[error(transparent)]
    Core(#[from] TqError),
}
