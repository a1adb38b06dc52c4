//! tq-registry: shared object registry and field write pipeline.

pub mod registry;
pub mod sink;

pub use registry::{ObjectRegistry, RegisteredModel};
pub use sink::{DirectorySink, FieldSink, MemorySink, StoredField, WriteRecord, time_name};

pub type RegistryResult<T> = Result<T, RegistryError>;

#[derive(thiserror::Error, Debug)]
pub enum RegistryError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Field not found: {key} at time {time}")]
    FieldNotFound { key: String, time: String },
}
