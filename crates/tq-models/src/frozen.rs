//! Frozen k-epsilon models.
//!
//! These models hold a snapshot of the transported turbulence quantities (k,
//! epsilon) together with the mean strain rate S = symm(grad U) and evaluate
//! the derived quantities with the standard linear eddy-viscosity relations:
//!
//! ```text
//! nut   = Cmu k² / epsilon
//! R     = 2/3 k I - 2 nut dev(S)
//! Reff  = -2 nuEff dev(S)
//! ```
//!
//! They do not advance anything in time; a host replaces the model between
//! cycles when the flow changes.

use crate::coefficients::{CMU, PRT};
use crate::error::{ModelError, ModelResult};
use crate::model::{CompressibleTurbulenceModel, IncompressibleTurbulenceModel};
use tq_core::{
    Real, ScalarField, SymmTensor, SymmTensorField, TqError, ensure_finite, ensure_positive,
};

/// Shared k-epsilon snapshot.
#[derive(Clone, Debug)]
struct KEpsilonState {
    k: ScalarField,
    epsilon: ScalarField,
    strain_rate: SymmTensorField,
    omega: Option<ScalarField>,
}

impl KEpsilonState {
    fn new(k: ScalarField, epsilon: ScalarField) -> ModelResult<Self> {
        check_cells("epsilon", k.len(), epsilon.len())?;
        for &v in k.values() {
            if ensure_finite(v, "k")? < 0.0 {
                return Err(ModelError::NonPhysical {
                    what: "k must be non-negative",
                });
            }
        }
        check_positive(&epsilon, "epsilon must be positive")?;
        let cells = k.len();
        Ok(Self {
            k: k.renamed("k"),
            epsilon: epsilon.renamed("epsilon"),
            strain_rate: SymmTensorField::uniform("S", cells, SymmTensor::ZERO),
            omega: None,
        })
    }

    fn cells(&self) -> usize {
        self.k.len()
    }

    fn set_strain_rate(&mut self, s: SymmTensorField) -> ModelResult<()> {
        check_cells("strain rate", self.cells(), s.len())?;
        if !s.values().iter().all(SymmTensor::is_finite) {
            return Err(ModelError::NonPhysical {
                what: "strain rate must be finite",
            });
        }
        self.strain_rate = s;
        Ok(())
    }

    fn set_omega(&mut self, omega: ScalarField) -> ModelResult<()> {
        check_cells("omega", self.cells(), omega.len())?;
        for &v in omega.values() {
            ensure_finite(v, "omega")?;
        }
        self.omega = Some(omega.renamed("omega"));
        Ok(())
    }

    fn nut(&self) -> ScalarField {
        pointwise("nut", &self.k, &self.epsilon, |k, eps| CMU * k * k / eps)
    }

    fn r(&self, nut: &ScalarField) -> SymmTensorField {
        let values = self
            .k
            .values()
            .iter()
            .zip(nut.values())
            .zip(self.strain_rate.values())
            .map(|((&k, &nut), s)| SymmTensor::spherical(2.0 / 3.0 * k) - s.dev() * (2.0 * nut))
            .collect();
        SymmTensorField::new("R", values)
    }

    /// -2 coeff dev(S), the deviatoric effective stress for a given
    /// effective viscosity.
    fn dev_stress(&self, name: &str, coeff: &ScalarField) -> SymmTensorField {
        let values = coeff
            .values()
            .iter()
            .zip(self.strain_rate.values())
            .map(|(&c, s)| s.dev() * (-2.0 * c))
            .collect();
        SymmTensorField::new(name, values)
    }
}

fn check_cells(what: &'static str, expected: usize, found: usize) -> ModelResult<()> {
    if expected != found {
        return Err(ModelError::CellCountMismatch {
            what,
            expected,
            found,
        });
    }
    Ok(())
}

/// Finite and strictly positive; a finite non-positive value is non-physical.
fn positive(v: Real, what: &'static str) -> ModelResult<Real> {
    ensure_positive(v, what).map_err(|err| match err {
        TqError::InvalidArg { .. } => ModelError::NonPhysical { what },
        other => other.into(),
    })
}

fn check_positive(field: &ScalarField, what: &'static str) -> ModelResult<()> {
    for &v in field.values() {
        positive(v, what)?;
    }
    Ok(())
}

/// Pointwise combination of two fields already known to share a length.
fn pointwise(
    name: &str,
    a: &ScalarField,
    b: &ScalarField,
    f: impl Fn(Real, Real) -> Real,
) -> ScalarField {
    let values = a
        .values()
        .iter()
        .zip(b.values())
        .map(|(&x, &y)| f(x, y))
        .collect();
    ScalarField::new(name, values)
}

/// Frozen k-epsilon model for incompressible flow.
#[derive(Clone, Debug)]
pub struct FrozenIncompressibleModel {
    state: KEpsilonState,
    nu: ScalarField,
}

impl FrozenIncompressibleModel {
    /// Create a model from per-cell k, epsilon and laminar viscosity nu.
    pub fn new(k: ScalarField, epsilon: ScalarField, nu: ScalarField) -> ModelResult<Self> {
        let state = KEpsilonState::new(k, epsilon)?;
        check_cells("nu", state.cells(), nu.len())?;
        check_positive(&nu, "nu must be positive")?;
        Ok(Self {
            state,
            nu: nu.renamed("nu"),
        })
    }

    /// Uniform values in every cell.
    pub fn uniform(cells: usize, k: Real, epsilon: Real, nu: Real) -> ModelResult<Self> {
        Self::new(
            ScalarField::uniform("k", cells, k),
            ScalarField::uniform("epsilon", cells, epsilon),
            ScalarField::uniform("nu", cells, nu),
        )
    }

    /// Mean strain-rate tensor S = symm(grad U). Zero when not set.
    pub fn with_strain_rate(mut self, strain_rate: SymmTensorField) -> ModelResult<Self> {
        self.state.set_strain_rate(strain_rate)?;
        Ok(self)
    }

    /// Make the model expose omega directly instead of leaving it to callers.
    pub fn with_omega(mut self, omega: ScalarField) -> ModelResult<Self> {
        self.state.set_omega(omega)?;
        Ok(self)
    }

    pub fn cells(&self) -> usize {
        self.state.cells()
    }
}

impl IncompressibleTurbulenceModel for FrozenIncompressibleModel {
    fn name(&self) -> &str {
        "frozenKEpsilon"
    }

    fn k(&self) -> ScalarField {
        self.state.k.clone()
    }

    fn epsilon(&self) -> ScalarField {
        self.state.epsilon.clone()
    }

    fn omega(&self) -> Option<ScalarField> {
        self.state.omega.clone()
    }

    fn nut(&self) -> ScalarField {
        self.state.nut()
    }

    fn nu_eff(&self) -> ScalarField {
        pointwise("nuEff", &self.nu, &self.state.nut(), |nu, nut| nu + nut)
    }

    fn r(&self) -> SymmTensorField {
        self.state.r(&self.state.nut())
    }

    fn dev_reff(&self) -> SymmTensorField {
        self.state.dev_stress("devReff", &self.nu_eff())
    }
}

/// Laminar transport properties of a compressible fluid.
#[derive(Clone, Debug)]
pub struct CompressibleTransport {
    /// Density [kg/m³]
    pub rho: ScalarField,
    /// Laminar dynamic viscosity [kg/(m·s)]
    pub mu: ScalarField,
    /// Laminar thermal diffusivity for enthalpy [kg/(m·s)]
    pub alpha: ScalarField,
}

impl CompressibleTransport {
    pub fn uniform(cells: usize, rho: Real, mu: Real, alpha: Real) -> Self {
        Self {
            rho: ScalarField::uniform("rho", cells, rho),
            mu: ScalarField::uniform("mu", cells, mu),
            alpha: ScalarField::uniform("alpha", cells, alpha),
        }
    }
}

/// Frozen k-epsilon model for compressible flow.
#[derive(Clone, Debug)]
pub struct FrozenCompressibleModel {
    state: KEpsilonState,
    transport: CompressibleTransport,
    prt: Real,
}

impl FrozenCompressibleModel {
    pub fn new(
        k: ScalarField,
        epsilon: ScalarField,
        transport: CompressibleTransport,
    ) -> ModelResult<Self> {
        let state = KEpsilonState::new(k, epsilon)?;
        check_cells("rho", state.cells(), transport.rho.len())?;
        check_cells("mu", state.cells(), transport.mu.len())?;
        check_cells("alpha", state.cells(), transport.alpha.len())?;
        check_positive(&transport.rho, "rho must be positive")?;
        check_positive(&transport.mu, "mu must be positive")?;
        check_positive(&transport.alpha, "alpha must be positive")?;
        Ok(Self {
            state,
            transport,
            prt: PRT,
        })
    }

    pub fn uniform(
        cells: usize,
        k: Real,
        epsilon: Real,
        transport: CompressibleTransport,
    ) -> ModelResult<Self> {
        Self::new(
            ScalarField::uniform("k", cells, k),
            ScalarField::uniform("epsilon", cells, epsilon),
            transport,
        )
    }

    /// Override the turbulent Prandtl number (default 0.85).
    pub fn with_prt(mut self, prt: Real) -> ModelResult<Self> {
        self.prt = positive(prt, "Prt must be positive")?;
        Ok(self)
    }

    pub fn with_strain_rate(mut self, strain_rate: SymmTensorField) -> ModelResult<Self> {
        self.state.set_strain_rate(strain_rate)?;
        Ok(self)
    }

    pub fn with_omega(mut self, omega: ScalarField) -> ModelResult<Self> {
        self.state.set_omega(omega)?;
        Ok(self)
    }

    pub fn cells(&self) -> usize {
        self.state.cells()
    }
}

impl CompressibleTurbulenceModel for FrozenCompressibleModel {
    fn name(&self) -> &str {
        "frozenKEpsilon"
    }

    fn k(&self) -> ScalarField {
        self.state.k.clone()
    }

    fn epsilon(&self) -> ScalarField {
        self.state.epsilon.clone()
    }

    fn omega(&self) -> Option<ScalarField> {
        self.state.omega.clone()
    }

    fn mu_t(&self) -> ScalarField {
        pointwise("mut", &self.transport.rho, &self.state.nut(), |rho, nut| {
            rho * nut
        })
    }

    fn mu_eff(&self) -> ScalarField {
        pointwise("muEff", &self.transport.mu, &self.mu_t(), |mu, mut_| mu + mut_)
    }

    fn alphat(&self) -> ScalarField {
        let prt = self.prt;
        self.mu_t().map("alphat", |mut_| mut_ / prt)
    }

    fn alpha_eff(&self) -> ScalarField {
        pointwise("alphaEff", &self.transport.alpha, &self.alphat(), |a, at| {
            a + at
        })
    }

    fn r(&self) -> SymmTensorField {
        self.state.r(&self.state.nut())
    }

    fn dev_rho_reff(&self) -> SymmTensorField {
        self.state.dev_stress("devRhoReff", &self.mu_eff())
    }
}
