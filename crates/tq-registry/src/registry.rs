//! Name-keyed registry of turbulence models and published fields.
//!
//! Models and fields live in separate tables: a model key never collides
//! with a field name. Fields are ordered by name so that listings and
//! writes are deterministic.

use std::collections::{BTreeMap, HashMap};
use tq_core::FieldValue;
use tq_models::{CompressibleTurbulenceModel, IncompressibleTurbulenceModel};
use tracing::debug;

/// A model resident in the registry. One key holds at most one model of
/// either family.
pub enum RegisteredModel {
    Compressible(Box<dyn CompressibleTurbulenceModel>),
    Incompressible(Box<dyn IncompressibleTurbulenceModel>),
}

impl RegisteredModel {
    pub fn name(&self) -> &str {
        match self {
            RegisteredModel::Compressible(m) => m.name(),
            RegisteredModel::Incompressible(m) => m.name(),
        }
    }

    pub fn is_compressible(&self) -> bool {
        matches!(self, RegisteredModel::Compressible(_))
    }
}

impl std::fmt::Debug for RegisteredModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let family = if self.is_compressible() {
            "Compressible"
        } else {
            "Incompressible"
        };
        write!(f, "{}({})", family, self.name())
    }
}

#[derive(Debug, Default)]
pub struct ObjectRegistry {
    models: HashMap<String, RegisteredModel>,
    fields: BTreeMap<String, FieldValue>,
}

impl ObjectRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a model, replacing whatever model was under `key`.
    pub fn insert_model(
        &mut self,
        key: impl Into<String>,
        model: RegisteredModel,
    ) -> Option<RegisteredModel> {
        let key = key.into();
        debug!(key = %key, model = ?model, "registering turbulence model");
        self.models.insert(key, model)
    }

    pub fn insert_compressible(
        &mut self,
        key: impl Into<String>,
        model: Box<dyn CompressibleTurbulenceModel>,
    ) -> Option<RegisteredModel> {
        self.insert_model(key, RegisteredModel::Compressible(model))
    }

    pub fn insert_incompressible(
        &mut self,
        key: impl Into<String>,
        model: Box<dyn IncompressibleTurbulenceModel>,
    ) -> Option<RegisteredModel> {
        self.insert_model(key, RegisteredModel::Incompressible(model))
    }

    pub fn remove_model(&mut self, key: &str) -> Option<RegisteredModel> {
        self.models.remove(key)
    }

    pub fn find_compressible(&self, key: &str) -> Option<&dyn CompressibleTurbulenceModel> {
        match self.models.get(key)? {
            RegisteredModel::Compressible(m) => Some(m.as_ref()),
            RegisteredModel::Incompressible(_) => None,
        }
    }

    pub fn find_incompressible(&self, key: &str) -> Option<&dyn IncompressibleTurbulenceModel> {
        match self.models.get(key)? {
            RegisteredModel::Incompressible(m) => Some(m.as_ref()),
            RegisteredModel::Compressible(_) => None,
        }
    }

    /// Register a field under `name`, returning the value it replaced.
    pub fn store(&mut self, name: impl Into<String>, field: FieldValue) -> Option<FieldValue> {
        let name = name.into();
        let previous = self.fields.insert(name.clone(), field);
        debug!(
            field = %name,
            replaced = previous.is_some(),
            "stored field"
        );
        previous
    }

    pub fn lookup_field(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    pub fn contains_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }
}
