//! Active turbulence model lookup.

use crate::catalog::ModelFamily;
use tq_models::{CompressibleTurbulenceModel, IncompressibleTurbulenceModel};
use tq_registry::ObjectRegistry;

/// The model registered under the turbulence key for the current cycle.
///
/// Borrows the registry: the handle must not outlive the cycle it was
/// resolved in, since the host may swap the model between cycles.
#[derive(Clone, Copy)]
pub enum ActiveModel<'a> {
    Compressible(&'a dyn CompressibleTurbulenceModel),
    Incompressible(&'a dyn IncompressibleTurbulenceModel),
    Unavailable,
}

impl ActiveModel<'_> {
    pub fn family(&self) -> Option<ModelFamily> {
        match self {
            ActiveModel::Compressible(_) => Some(ModelFamily::Compressible),
            ActiveModel::Incompressible(_) => Some(ModelFamily::Incompressible),
            ActiveModel::Unavailable => None,
        }
    }

    pub fn is_available(&self) -> bool {
        !matches!(self, ActiveModel::Unavailable)
    }
}

impl std::fmt::Debug for ActiveModel<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActiveModel::Compressible(m) => write!(f, "Compressible({})", m.name()),
            ActiveModel::Incompressible(m) => write!(f, "Incompressible({})", m.name()),
            ActiveModel::Unavailable => write!(f, "Unavailable"),
        }
    }
}

/// Find the model registered under `key`, compressible first.
pub fn resolve_active_family<'a>(registry: &'a ObjectRegistry, key: &str) -> ActiveModel<'a> {
    if let Some(model) = registry.find_compressible(key) {
        ActiveModel::Compressible(model)
    } else if let Some(model) = registry.find_incompressible(key) {
        ActiveModel::Incompressible(model)
    } else {
        ActiveModel::Unavailable
    }
}
