//! The `turbulenceFields` function object.

use crate::dispatch::dispatch;
use crate::error::FieldsResult;
use crate::function_object::FunctionObject;
use crate::publish::Publisher;
use crate::selector::FieldSelection;
use crate::settings::{Dict, TurbulenceFieldsSettings};
use tq_core::Real;
use tq_models::{CMU, PROPERTIES_NAME};
use tq_registry::{FieldSink, ObjectRegistry};
use tracing::info;

/// Stores selected turbulence quantities of the active model in the
/// registry as `turbulenceProperties:<name>`.
#[derive(Debug, Clone)]
pub struct TurbulenceFields {
    name: String,
    model_key: String,
    selection: FieldSelection,
    cmu: Real,
    publisher: Publisher,
}

impl TurbulenceFields {
    pub const TYPE_NAME: &'static str = "turbulenceFields";

    pub fn new(name: &str, dict: &Dict) -> FieldsResult<Self> {
        let mut fo = Self {
            name: name.to_string(),
            model_key: PROPERTIES_NAME.to_string(),
            selection: FieldSelection::new(),
            cmu: CMU,
            publisher: Publisher::new(PROPERTIES_NAME),
        };
        fo.read(dict)?;
        Ok(fo)
    }

    pub fn selection(&self) -> &FieldSelection {
        &self.selection
    }

    pub fn cmu(&self) -> Real {
        self.cmu
    }

    /// Registry keys this object publishes to.
    pub fn keys(&self) -> Vec<String> {
        self.selection
            .iter()
            .map(|name| self.publisher.key(name))
            .collect()
    }
}

impl FunctionObject for TurbulenceFields {
    fn type_name(&self) -> &'static str {
        Self::TYPE_NAME
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn read(&mut self, dict: &Dict) -> FieldsResult<()> {
        let settings = TurbulenceFieldsSettings::from_dict(dict)?;
        self.selection.configure(settings.requested_names()?);
        self.cmu = settings.cmu;

        if self.selection.is_empty() {
            info!(
                function_type = Self::TYPE_NAME,
                name = %self.name,
                "no fields requested to be stored"
            );
        } else {
            info!(
                function_type = Self::TYPE_NAME,
                name = %self.name,
                count = self.selection.len(),
                fields = %self.keys().join(" "),
                "storing fields"
            );
        }
        Ok(())
    }

    fn execute(&mut self, registry: &mut ObjectRegistry) -> FieldsResult<()> {
        dispatch(
            registry,
            &self.model_key,
            &self.selection,
            self.cmu,
            &self.publisher,
        )?;
        Ok(())
    }

    fn write(&mut self, registry: &ObjectRegistry, sink: &mut dyn FieldSink) -> FieldsResult<()> {
        self.publisher.write(registry, &self.selection, sink)?;
        Ok(())
    }
}
