//! tq-core: stable foundation for turbfields.
//!
//! Contains:
//! - numeric (Real + tolerances + float helpers)
//! - tensor (symmetric second-rank tensor)
//! - field (per-cell scalar and symmetric-tensor fields)
//! - error (shared error types)

pub mod error;
pub mod field;
pub mod numeric;
pub mod tensor;

// Re-exports: nice ergonomics for downstream crates
pub use error::{TqError, TqResult};
pub use field::*;
pub use numeric::*;
pub use tensor::SymmTensor;
