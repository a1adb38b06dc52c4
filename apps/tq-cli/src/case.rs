//! Case files: the model snapshot, run control and function objects.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tq_core::{Real, ScalarField, SymmTensor, SymmTensorField};
use tq_fields::{Dict, FieldsError, FunctionObjectList, FunctionObjectTable, ModelFamily};
use tq_models::{
    CompressibleTransport, FrozenCompressibleModel, FrozenIncompressibleModel, ModelError, PRT,
    PROPERTIES_NAME,
};
use tq_registry::{ObjectRegistry, RegistryError};

pub type CliResult<T> = Result<T, CliError>;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read case file {path}: {source}")]
    CaseFileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse case file: {0}")]
    CaseParse(#[from] serde_yaml::Error),

    #[error("Invalid case: {0}")]
    Validation(String),

    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    #[error(transparent)]
    Fields(#[from] FieldsError),

    #[error(transparent)]
    Registry(#[from] RegistryError),
}

#[derive(Debug, Clone, Deserialize)]
pub struct Case {
    pub model: ModelDef,
    #[serde(default)]
    pub run: RunDef,
    #[serde(default)]
    pub functions: Dict,
}

/// Uniform frozen k-epsilon snapshot.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "family", rename_all = "lowercase")]
pub enum ModelDef {
    Incompressible {
        cells: usize,
        k: Real,
        epsilon: Real,
        nu: Real,
        #[serde(default)]
        omega: Option<Real>,
        /// S components: xx, xy, xz, yy, yz, zz
        #[serde(default)]
        strain_rate: Option<[Real; 6]>,
    },
    Compressible {
        cells: usize,
        k: Real,
        epsilon: Real,
        rho: Real,
        mu: Real,
        alpha: Real,
        #[serde(default = "default_prt")]
        prt: Real,
        #[serde(default)]
        omega: Option<Real>,
        #[serde(default)]
        strain_rate: Option<[Real; 6]>,
    },
}

fn default_prt() -> Real {
    PRT
}

#[derive(Debug, Clone, Deserialize)]
pub struct RunDef {
    #[serde(default = "default_steps")]
    pub steps: usize,
    #[serde(default = "default_dt")]
    pub dt: Real,
}

fn default_steps() -> usize {
    1
}

fn default_dt() -> Real {
    1.0
}

impl Default for RunDef {
    fn default() -> Self {
        Self {
            steps: default_steps(),
            dt: default_dt(),
        }
    }
}

fn strain_field(cells: usize, s: Option<[Real; 6]>) -> SymmTensorField {
    let [xx, xy, xz, yy, yz, zz] = s.unwrap_or([0.0; 6]);
    SymmTensorField::uniform("S", cells, SymmTensor::new(xx, xy, xz, yy, yz, zz))
}

impl ModelDef {
    pub fn family(&self) -> ModelFamily {
        match self {
            ModelDef::Incompressible { .. } => ModelFamily::Incompressible,
            ModelDef::Compressible { .. } => ModelFamily::Compressible,
        }
    }

    pub fn cells(&self) -> usize {
        match self {
            ModelDef::Incompressible { cells, .. } | ModelDef::Compressible { cells, .. } => *cells,
        }
    }

    /// Build the model and register it under the turbulence key.
    pub fn register(&self, registry: &mut ObjectRegistry) -> CliResult<()> {
        match *self {
            ModelDef::Incompressible {
                cells,
                k,
                epsilon,
                nu,
                omega,
                strain_rate,
            } => {
                let mut model = FrozenIncompressibleModel::uniform(cells, k, epsilon, nu)?
                    .with_strain_rate(strain_field(cells, strain_rate))?;
                if let Some(omega) = omega {
                    model = model.with_omega(ScalarField::uniform("omega", cells, omega))?;
                }
                registry.insert_incompressible(PROPERTIES_NAME, Box::new(model));
            }
            ModelDef::Compressible {
                cells,
                k,
                epsilon,
                rho,
                mu,
                alpha,
                prt,
                omega,
                strain_rate,
            } => {
                let transport = CompressibleTransport::uniform(cells, rho, mu, alpha);
                let mut model = FrozenCompressibleModel::uniform(cells, k, epsilon, transport)?
                    .with_prt(prt)?
                    .with_strain_rate(strain_field(cells, strain_rate))?;
                if let Some(omega) = omega {
                    model = model.with_omega(ScalarField::uniform("omega", cells, omega))?;
                }
                registry.insert_compressible(PROPERTIES_NAME, Box::new(model));
            }
        }
        Ok(())
    }
}

impl Case {
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CliError::CaseFileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    pub fn parse(text: &str) -> CliResult<Self> {
        let case: Case = serde_yaml::from_str(text)?;
        case.validate()?;
        Ok(case)
    }

    pub fn validate(&self) -> CliResult<()> {
        if self.model.cells() == 0 {
            return Err(CliError::Validation(
                "model must have at least one cell".to_string(),
            ));
        }
        if self.run.steps == 0 {
            return Err(CliError::Validation("run.steps must be positive".to_string()));
        }
        if !self.run.dt.is_finite() || self.run.dt <= 0.0 {
            return Err(CliError::Validation(format!(
                "run.dt must be positive, got {}",
                self.run.dt
            )));
        }
        Ok(())
    }

    pub fn function_objects(&self, table: &FunctionObjectTable) -> CliResult<FunctionObjectList> {
        Ok(FunctionObjectList::from_dict(table, &self.functions)?)
    }
}
