//! tq-fields: publish turbulence quantities of the active model.
//!
//! The `turbulenceFields` function object selects named quantities (k,
//! epsilon, R, ...) from whichever turbulence model is registered, evaluates
//! them once per cycle and stores them in the object registry as
//! `<model key>:<field name>` so output and other function objects can find
//! them.
//!
//! # Example
//!
//! ```
//! use tq_fields::{FunctionObject, FunctionObjectTable, settings::parse_dict};
//! use tq_models::{FrozenIncompressibleModel, PROPERTIES_NAME};
//! use tq_registry::{MemorySink, ObjectRegistry};
//!
//! let mut registry = ObjectRegistry::new();
//! let model = FrozenIncompressibleModel::uniform(4, 1.0, 0.09, 1.0e-5).unwrap();
//! registry.insert_incompressible(PROPERTIES_NAME, Box::new(model));
//!
//! let dict = parse_dict("type: turbulenceFields\nfields: [k, omega]").unwrap();
//! let mut fo = FunctionObjectTable::with_builtins()
//!     .construct("turbulenceFields1", &dict)
//!     .unwrap();
//!
//! let mut sink = MemorySink::new();
//! fo.execute(&mut registry).unwrap();
//! fo.write(&registry, &mut sink).unwrap();
//! assert!(registry.contains_field("turbulenceProperties:omega"));
//! assert_eq!(sink.writes().len(), 2);
//! ```

pub mod catalog;
pub mod dispatch;
pub mod error;
pub mod function_object;
pub mod locator;
pub mod publish;
pub mod selector;
pub mod settings;
pub mod turbulence_fields;

// Re-exports
pub use catalog::{CompressibleField, FieldTag, IncompressibleField, ModelFamily, ResolvedTag};
pub use dispatch::{derive_omega, dispatch};
pub use error::{FieldsError, FieldsResult};
pub use function_object::{FunctionObject, FunctionObjectList, FunctionObjectTable};
pub use locator::{ActiveModel, resolve_active_family};
pub use publish::{Publisher, namespaced_key};
pub use selector::FieldSelection;
pub use settings::{Dict, TurbulenceFieldsSettings};
pub use turbulence_fields::TurbulenceFields;
