//! Turbulence model accessor contracts.

use tq_core::{ScalarField, SymmTensorField};

/// Well-known name a host registers its turbulence model under.
pub const PROPERTIES_NAME: &str = "turbulenceProperties";

/// Accessors of a turbulence model solving for a compressible (variable
/// density) flow.
///
/// Every accessor returns a freshly evaluated field over the simulation's
/// cells. Implementations must be thread-safe (Send + Sync).
pub trait CompressibleTurbulenceModel: Send + Sync {
    /// Model name (for debugging/logging).
    fn name(&self) -> &str;

    /// Turbulent kinetic energy k [m²/s²].
    fn k(&self) -> ScalarField;

    /// Turbulent kinetic energy dissipation rate epsilon [m²/s³].
    fn epsilon(&self) -> ScalarField;

    /// Turbulence specific dissipation rate omega [1/s].
    ///
    /// Default implementation returns None: the model does not solve for
    /// omega, callers derive it from k and epsilon.
    fn omega(&self) -> Option<ScalarField> {
        None
    }

    /// Turbulent dynamic viscosity [kg/(m·s)].
    fn mu_t(&self) -> ScalarField;

    /// Effective (laminar + turbulent) dynamic viscosity [kg/(m·s)].
    fn mu_eff(&self) -> ScalarField;

    /// Turbulent thermal diffusivity for enthalpy [kg/(m·s)].
    fn alphat(&self) -> ScalarField;

    /// Effective thermal diffusivity for enthalpy [kg/(m·s)].
    fn alpha_eff(&self) -> ScalarField;

    /// Reynolds stress tensor [m²/s²].
    fn r(&self) -> SymmTensorField;

    /// Effective stress tensor including the laminar stress [kg/(m·s²)].
    fn dev_rho_reff(&self) -> SymmTensorField;
}

/// Accessors of a turbulence model solving for an incompressible flow.
pub trait IncompressibleTurbulenceModel: Send + Sync {
    /// Model name (for debugging/logging).
    fn name(&self) -> &str;

    /// Turbulent kinetic energy k [m²/s²].
    fn k(&self) -> ScalarField;

    /// Turbulent kinetic energy dissipation rate epsilon [m²/s³].
    fn epsilon(&self) -> ScalarField;

    /// Turbulence specific dissipation rate omega [1/s], if solved for.
    fn omega(&self) -> Option<ScalarField> {
        None
    }

    /// Turbulent kinematic viscosity [m²/s].
    fn nut(&self) -> ScalarField;

    /// Effective (laminar + turbulent) kinematic viscosity [m²/s].
    fn nu_eff(&self) -> ScalarField;

    /// Reynolds stress tensor [m²/s²].
    fn r(&self) -> SymmTensorField;

    /// Effective kinematic stress tensor including the laminar stress [m²/s²].
    fn dev_reff(&self) -> SymmTensorField;
}
