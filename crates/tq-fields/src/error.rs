//! Error types for turbulence field publication.

use crate::catalog::ModelFamily;
use thiserror::Error;
use tq_core::TqError;
use tq_registry::RegistryError;

/// Errors raised while configuring or running a function object.
///
/// None of these are retryable: they all stem from the case setup and
/// repeat until the configuration or the registered model changes.
#[derive(Error, Debug)]
pub enum FieldsError {
    #[error("Turbulence model not found in database under '{key}', deactivating")]
    ModelUnavailable { key: String },

    #[error("Invalid field selection: '{name}' is not a {family} turbulence field")]
    InvalidFieldSelection { name: String, family: ModelFamily },

    #[error("Missing entry '{what}' in dictionary")]
    MissingEntry { what: &'static str },

    #[error("Invalid setting: {what}")]
    InvalidSetting { what: String },

    #[error("Unknown function object type '{type_name}' (known: {known})")]
    UnknownType { type_name: String, known: String },

    #[error("Dictionary error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Core(#[from] TqError),
}

pub type FieldsResult<T> = Result<T, FieldsError>;
