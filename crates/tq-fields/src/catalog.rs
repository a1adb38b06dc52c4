//! Closed catalogs of publishable turbulence fields.
//!
//! Each model family has its own tag enum. A name only resolves against the
//! catalog of the family that is active, so a compressible-only name such as
//! `mut` is rejected when an incompressible model is registered and vice
//! versa.

use crate::error::{FieldsError, FieldsResult};
use core::fmt;
use tq_core::FieldKind;

/// The two mutually exclusive turbulence model families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelFamily {
    Compressible,
    Incompressible,
}

impl ModelFamily {
    pub const ALL: [ModelFamily; 2] = [ModelFamily::Compressible, ModelFamily::Incompressible];

    pub fn key(&self) -> &'static str {
        match self {
            ModelFamily::Compressible => "compressible",
            ModelFamily::Incompressible => "incompressible",
        }
    }

    /// Field names this family publishes, in catalog order.
    pub fn field_names(&self) -> Vec<&'static str> {
        match self {
            ModelFamily::Compressible => names_of::<CompressibleField>(),
            ModelFamily::Incompressible => names_of::<IncompressibleField>(),
        }
    }
}

impl fmt::Display for ModelFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl std::str::FromStr for ModelFamily {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "compressible" => Ok(ModelFamily::Compressible),
            "incompressible" => Ok(ModelFamily::Incompressible),
            _ => Err("unknown model family"),
        }
    }
}

/// A closed set of field tags belonging to one model family.
pub trait FieldTag: Copy + Eq + fmt::Debug + 'static {
    const FAMILY: ModelFamily;
    const ALL: &'static [Self];

    /// Canonical name used in dictionaries and registry keys.
    fn name(self) -> &'static str;

    /// Value kind of the field this tag produces.
    fn kind(self) -> FieldKind;

    /// Look up a tag by its canonical name (case-sensitive).
    fn from_name(name: &str) -> FieldsResult<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|tag| tag.name() == name)
            .ok_or_else(|| FieldsError::InvalidFieldSelection {
                name: name.to_string(),
                family: Self::FAMILY,
            })
    }
}

fn names_of<T: FieldTag>() -> Vec<&'static str> {
    T::ALL.iter().map(|t| t.name()).collect()
}

/// Fields of a compressible turbulence model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompressibleField {
    K,
    Epsilon,
    Omega,
    Mut,
    MuEff,
    Alphat,
    AlphaEff,
    R,
    DevRhoReff,
}

impl FieldTag for CompressibleField {
    const FAMILY: ModelFamily = ModelFamily::Compressible;
    const ALL: &'static [Self] = &[
        CompressibleField::K,
        CompressibleField::Epsilon,
        CompressibleField::Omega,
        CompressibleField::Mut,
        CompressibleField::MuEff,
        CompressibleField::Alphat,
        CompressibleField::AlphaEff,
        CompressibleField::R,
        CompressibleField::DevRhoReff,
    ];

    fn name(self) -> &'static str {
        match self {
            CompressibleField::K => "k",
            CompressibleField::Epsilon => "epsilon",
            CompressibleField::Omega => "omega",
            CompressibleField::Mut => "mut",
            CompressibleField::MuEff => "muEff",
            CompressibleField::Alphat => "alphat",
            CompressibleField::AlphaEff => "alphaEff",
            CompressibleField::R => "R",
            CompressibleField::DevRhoReff => "devRhoReff",
        }
    }

    fn kind(self) -> FieldKind {
        match self {
            CompressibleField::R | CompressibleField::DevRhoReff => FieldKind::SymmTensor,
            _ => FieldKind::Scalar,
        }
    }
}

/// Fields of an incompressible turbulence model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IncompressibleField {
    K,
    Epsilon,
    Omega,
    Nut,
    NuEff,
    R,
    DevReff,
}

impl FieldTag for IncompressibleField {
    const FAMILY: ModelFamily = ModelFamily::Incompressible;
    const ALL: &'static [Self] = &[
        IncompressibleField::K,
        IncompressibleField::Epsilon,
        IncompressibleField::Omega,
        IncompressibleField::Nut,
        IncompressibleField::NuEff,
        IncompressibleField::R,
        IncompressibleField::DevReff,
    ];

    fn name(self) -> &'static str {
        match self {
            IncompressibleField::K => "k",
            IncompressibleField::Epsilon => "epsilon",
            IncompressibleField::Omega => "omega",
            IncompressibleField::Nut => "nut",
            IncompressibleField::NuEff => "nuEff",
            IncompressibleField::R => "R",
            IncompressibleField::DevReff => "devReff",
        }
    }

    fn kind(self) -> FieldKind {
        match self {
            IncompressibleField::R | IncompressibleField::DevReff => FieldKind::SymmTensor,
            _ => FieldKind::Scalar,
        }
    }
}

/// A tag resolved against one family's catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedTag {
    Compressible(CompressibleField),
    Incompressible(IncompressibleField),
}

impl ResolvedTag {
    pub fn kind(&self) -> FieldKind {
        match self {
            ResolvedTag::Compressible(t) => t.kind(),
            ResolvedTag::Incompressible(t) => t.kind(),
        }
    }
}

/// Resolve `name` against the catalog of `family`.
pub fn resolve_tag(name: &str, family: ModelFamily) -> FieldsResult<ResolvedTag> {
    match family {
        ModelFamily::Compressible => CompressibleField::from_name(name).map(ResolvedTag::Compressible),
        ModelFamily::Incompressible => {
            IncompressibleField::from_name(name).map(ResolvedTag::Incompressible)
        }
    }
}
