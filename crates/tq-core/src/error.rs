use thiserror::Error;

pub type TqResult<T> = Result<T, TqError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TqError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Field size mismatch: {what} (expected={expected}, found={found})")]
    SizeMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },
}
