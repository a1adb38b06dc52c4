//! Function objects: per-cycle hooks constructed by type name.

use crate::error::{FieldsError, FieldsResult};
use crate::settings::{Dict, lookup_str};
use crate::turbulence_fields::TurbulenceFields;
use std::collections::BTreeMap;
use tq_core::Real;
use tq_registry::{FieldSink, ObjectRegistry};
use tracing::{debug, error};

/// A hook run by the host once per cycle: `execute` then `write`.
pub trait FunctionObject {
    /// Type name the object was constructed from.
    fn type_name(&self) -> &'static str;

    /// Instance name from the case file.
    fn name(&self) -> &str;

    /// Re-read settings, replacing the current ones.
    fn read(&mut self, dict: &Dict) -> FieldsResult<()>;

    /// Evaluate and publish into the registry.
    fn execute(&mut self, registry: &mut ObjectRegistry) -> FieldsResult<()>;

    /// Forward what `execute` published to the write pipeline.
    fn write(&mut self, registry: &ObjectRegistry, sink: &mut dyn FieldSink) -> FieldsResult<()>;
}

/// Builds a function object from its instance name and dictionary.
pub type Constructor = fn(&str, &Dict) -> FieldsResult<Box<dyn FunctionObject>>;

/// Type name → constructor.
#[derive(Clone, Default)]
pub struct FunctionObjectTable {
    constructors: BTreeMap<&'static str, Constructor>,
}

impl FunctionObjectTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Table with every function object this crate provides.
    pub fn with_builtins() -> Self {
        let mut table = Self::new();
        table.register(TurbulenceFields::TYPE_NAME, |name, dict| {
            Ok(Box::new(TurbulenceFields::new(name, dict)?))
        });
        table
    }

    pub fn register(&mut self, type_name: &'static str, constructor: Constructor) {
        self.constructors.insert(type_name, constructor);
    }

    pub fn type_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.constructors.keys().copied()
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.constructors.contains_key(type_name)
    }

    /// Construct from a dictionary naming its `type`.
    pub fn construct(&self, name: &str, dict: &Dict) -> FieldsResult<Box<dyn FunctionObject>> {
        let type_name = lookup_str(dict, "type")?;
        let constructor =
            self.constructors
                .get(type_name)
                .ok_or_else(|| FieldsError::UnknownType {
                    type_name: type_name.to_string(),
                    known: self.type_names().collect::<Vec<_>>().join(", "),
                })?;
        debug!(name, type_name, "constructing function object");
        constructor(name, dict)
    }
}

impl std::fmt::Debug for FunctionObjectTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.type_names()).finish()
    }
}

/// The function objects of a case, run in case-file order.
#[derive(Default)]
pub struct FunctionObjectList {
    objects: Vec<Box<dyn FunctionObject>>,
}

impl FunctionObjectList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a `functions` mapping of instance name → dictionary.
    pub fn from_dict(table: &FunctionObjectTable, functions: &Dict) -> FieldsResult<Self> {
        let mut list = Self::new();
        for (name, value) in functions {
            let name = name.as_str().ok_or_else(|| FieldsError::InvalidSetting {
                what: "function object names must be strings".to_string(),
            })?;
            let dict = value
                .as_mapping()
                .ok_or_else(|| FieldsError::InvalidSetting {
                    what: format!("function object '{name}' must be a dictionary"),
                })?;
            list.push(table.construct(name, dict)?);
        }
        Ok(list)
    }

    pub fn push(&mut self, object: Box<dyn FunctionObject>) {
        self.objects.push(object);
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn names(&self) -> Vec<&str> {
        self.objects.iter().map(|o| o.name()).collect()
    }

    /// Run one cycle at `time`. The first failure aborts the cycle.
    pub fn run_cycle(
        &mut self,
        time: Real,
        registry: &mut ObjectRegistry,
        sink: &mut dyn FieldSink,
    ) -> FieldsResult<()> {
        sink.begin_time(time);
        for object in &mut self.objects {
            let result = object
                .execute(registry)
                .and_then(|()| object.write(registry, sink));
            if let Err(err) = result {
                error!(
                    function_type = object.type_name(),
                    name = object.name(),
                    time,
                    error = %err,
                    "function object failed"
                );
                return Err(err);
            }
        }
        Ok(())
    }
}
