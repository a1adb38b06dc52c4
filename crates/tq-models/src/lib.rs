//! tq-models: turbulence model interfaces for turbfields.
//!
//! Provides:
//! - `CompressibleTurbulenceModel` / `IncompressibleTurbulenceModel`, the
//!   accessor contracts a host turbulence model exposes
//! - frozen k-epsilon reference models holding precomputed k, epsilon and
//!   strain rate, used by the CLI and tests
//! - model coefficients (Cmu, turbulent Prandtl number)
//!
//! # Example
//!
//! ```
//! use tq_models::{FrozenIncompressibleModel, IncompressibleTurbulenceModel};
//!
//! let model = FrozenIncompressibleModel::uniform(4, 1.0, 0.09, 1.0e-5).unwrap();
//! let nut = model.nut();
//! assert_eq!(nut.len(), 4);
//! ```

pub mod coefficients;
pub mod error;
pub mod frozen;
pub mod model;

// Re-exports for ergonomics
pub use coefficients::{CMU, PRT};
pub use error::{ModelError, ModelResult};
pub use frozen::{CompressibleTransport, FrozenCompressibleModel, FrozenIncompressibleModel};
pub use model::{CompressibleTurbulenceModel, IncompressibleTurbulenceModel, PROPERTIES_NAME};
