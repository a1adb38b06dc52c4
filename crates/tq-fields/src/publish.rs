//! Publication of fields into the registry and the write pipeline.

use crate::error::FieldsResult;
use crate::selector::FieldSelection;
use tq_core::FieldValue;
use tq_registry::{FieldSink, ObjectRegistry};
use tracing::{debug, warn};

/// `<namespace>:<name>`, the registry key of a published field.
pub fn namespaced_key(namespace: &str, name: &str) -> String {
    format!("{namespace}:{name}")
}

/// Stores and forwards fields under one namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Publisher {
    namespace: String,
}

impl Publisher {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }

    pub fn key(&self, name: &str) -> String {
        namespaced_key(&self.namespace, name)
    }

    /// Label `field` as `name` and register it under the namespaced key,
    /// replacing the value of an earlier cycle.
    pub fn store(&self, registry: &mut ObjectRegistry, name: &str, field: FieldValue) -> String {
        let key = self.key(name);
        let field = field.renamed(name);
        debug!(key = %key, kind = %field.kind(), cells = field.len(), "publishing field");
        registry.store(key.clone(), field);
        key
    }

    /// Ask `sink` to persist every selected field currently in the
    /// registry. Returns the keys written.
    ///
    /// Nothing is evaluated here: a selected key with no stored field is
    /// skipped.
    pub fn write(
        &self,
        registry: &ObjectRegistry,
        selection: &FieldSelection,
        sink: &mut dyn FieldSink,
    ) -> FieldsResult<Vec<String>> {
        let mut written = Vec::with_capacity(selection.len());
        for name in selection.iter() {
            let key = self.key(name);
            match registry.lookup_field(&key) {
                Some(field) => {
                    sink.request_write(&key, field)?;
                    written.push(key);
                }
                None => {
                    warn!(key = %key, "field not found in registry, not writing");
                }
            }
        }
        Ok(written)
    }
}
