//! Per-cycle evaluation of the selected fields.
//!
//! Each tag maps to a small accessor function on its family's model trait.
//! Name resolution happens once, against the active family's catalog, so
//! there is a single "invalid field selection" path for both families.

use crate::catalog::{CompressibleField, FieldTag, IncompressibleField};
use crate::error::{FieldsError, FieldsResult};
use crate::locator::{ActiveModel, resolve_active_family};
use crate::publish::Publisher;
use crate::selector::FieldSelection;
use tq_core::{FieldValue, Real, ScalarField, TqResult};
use tq_models::{CompressibleTurbulenceModel, IncompressibleTurbulenceModel};
use tq_registry::ObjectRegistry;

/// Evaluates one compressible field. The `Real` argument is Cmu.
pub type CompressibleAccessor =
    fn(&dyn CompressibleTurbulenceModel, Real) -> TqResult<FieldValue>;

/// Evaluates one incompressible field. The `Real` argument is Cmu.
pub type IncompressibleAccessor =
    fn(&dyn IncompressibleTurbulenceModel, Real) -> TqResult<FieldValue>;

/// Turbulence frequency from dissipation rate and kinetic energy:
///
/// ```text
/// omega = epsilon / (Cmu k)
/// ```
///
/// Evaluated pointwise in exactly this order. Zero k is not guarded and
/// gives whatever IEEE division gives.
pub fn derive_omega(k: &ScalarField, epsilon: &ScalarField, cmu: Real) -> TqResult<ScalarField> {
    epsilon.zip_with(k, "omega", |&eps, &k| eps / (cmu * k))
}

/// The model's own omega when it has one, otherwise the derived value.
fn omega_field(
    direct: Option<ScalarField>,
    k: impl FnOnce() -> ScalarField,
    epsilon: impl FnOnce() -> ScalarField,
    cmu: Real,
) -> TqResult<FieldValue> {
    let omega = match direct {
        Some(omega) => omega,
        None => derive_omega(&k(), &epsilon(), cmu)?,
    };
    Ok(omega.into())
}

impl CompressibleField {
    pub fn accessor(self) -> CompressibleAccessor {
        match self {
            CompressibleField::K => |m, _| Ok(m.k().into()),
            CompressibleField::Epsilon => |m, _| Ok(m.epsilon().into()),
            CompressibleField::Omega => {
                |m, cmu| omega_field(m.omega(), || m.k(), || m.epsilon(), cmu)
            }
            CompressibleField::Mut => |m, _| Ok(m.mu_t().into()),
            CompressibleField::MuEff => |m, _| Ok(m.mu_eff().into()),
            CompressibleField::Alphat => |m, _| Ok(m.alphat().into()),
            CompressibleField::AlphaEff => |m, _| Ok(m.alpha_eff().into()),
            CompressibleField::R => |m, _| Ok(m.r().into()),
            CompressibleField::DevRhoReff => |m, _| Ok(m.dev_rho_reff().into()),
        }
    }
}

impl IncompressibleField {
    pub fn accessor(self) -> IncompressibleAccessor {
        match self {
            IncompressibleField::K => |m, _| Ok(m.k().into()),
            IncompressibleField::Epsilon => |m, _| Ok(m.epsilon().into()),
            IncompressibleField::Omega => {
                |m, cmu| omega_field(m.omega(), || m.k(), || m.epsilon(), cmu)
            }
            IncompressibleField::Nut => |m, _| Ok(m.nut().into()),
            IncompressibleField::NuEff => |m, _| Ok(m.nu_eff().into()),
            IncompressibleField::R => |m, _| Ok(m.r().into()),
            IncompressibleField::DevReff => |m, _| Ok(m.dev_reff().into()),
        }
    }
}

/// Resolve every selected name first, then evaluate. An unknown name fails
/// before any accessor runs.
fn evaluate<T: FieldTag>(
    selection: &FieldSelection,
    fetch: impl Fn(T) -> TqResult<FieldValue>,
) -> FieldsResult<Vec<(String, FieldValue)>> {
    let tags = selection
        .iter()
        .map(|name| T::from_name(name).map(|tag| (name, tag)))
        .collect::<FieldsResult<Vec<_>>>()?;

    let mut fields = Vec::with_capacity(tags.len());
    for (name, tag) in tags {
        fields.push((name.to_string(), fetch(tag)?));
    }
    Ok(fields)
}

/// Evaluate the selected fields on the model registered under `model_key`
/// and publish them. Returns the registry keys written to.
///
/// Either every selected field is published or the registry is left
/// untouched and an error is returned.
pub fn dispatch(
    registry: &mut ObjectRegistry,
    model_key: &str,
    selection: &FieldSelection,
    cmu: Real,
    publisher: &Publisher,
) -> FieldsResult<Vec<String>> {
    let fields = match resolve_active_family(registry, model_key) {
        ActiveModel::Compressible(model) => {
            evaluate(selection, |tag: CompressibleField| tag.accessor()(model, cmu))?
        }
        ActiveModel::Incompressible(model) => {
            evaluate(selection, |tag: IncompressibleField| tag.accessor()(model, cmu))?
        }
        ActiveModel::Unavailable => {
            return Err(FieldsError::ModelUnavailable {
                key: model_key.to_string(),
            });
        }
    };

    Ok(fields
        .into_iter()
        .map(|(name, field)| publisher.store(registry, &name, field))
        .collect())
}
