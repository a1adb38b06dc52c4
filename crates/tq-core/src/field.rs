//! Per-cell fields sharing the simulation's spatial discretization.
//!
//! A field is a name plus one value per cell. Boundary handling and
//! geometry belong to the host and are not represented here.

use crate::error::{TqError, TqResult};
use crate::numeric::Real;
use crate::tensor::SymmTensor;
use core::fmt;

/// Named list of per-cell values.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Field<T> {
    name: String,
    values: Vec<T>,
}

pub type ScalarField = Field<Real>;
pub type SymmTensorField = Field<SymmTensor>;

impl<T> Field<T> {
    pub fn new(name: impl Into<String>, values: Vec<T>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn values(&self) -> &[T] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Same values under a new name.
    pub fn renamed(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Pointwise map into a new field.
    pub fn map<U>(&self, name: impl Into<String>, f: impl Fn(&T) -> U) -> Field<U> {
        Field::new(name, self.values.iter().map(f).collect())
    }

    /// Pointwise combination of two fields of equal length.
    pub fn zip_with<U, V>(
        &self,
        other: &Field<U>,
        name: impl Into<String>,
        f: impl Fn(&T, &U) -> V,
    ) -> TqResult<Field<V>> {
        if self.len() != other.len() {
            return Err(TqError::SizeMismatch {
                what: "pointwise field operation",
                expected: self.len(),
                found: other.len(),
            });
        }
        let values = self
            .values
            .iter()
            .zip(other.values.iter())
            .map(|(a, b)| f(a, b))
            .collect();
        Ok(Field::new(name, values))
    }
}

impl<T: Clone> Field<T> {
    pub fn uniform(name: impl Into<String>, cells: usize, value: T) -> Self {
        Self::new(name, vec![value; cells])
    }
}

/// Value kind of a published field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FieldKind {
    Scalar,
    SymmTensor,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Scalar => write!(f, "scalar"),
            FieldKind::SymmTensor => write!(f, "symmTensor"),
        }
    }
}

/// A field of either value kind.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", content = "field"))]
pub enum FieldValue {
    Scalar(ScalarField),
    SymmTensor(SymmTensorField),
}

impl FieldValue {
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldValue::Scalar(_) => FieldKind::Scalar,
            FieldValue::SymmTensor(_) => FieldKind::SymmTensor,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            FieldValue::Scalar(f) => f.name(),
            FieldValue::SymmTensor(f) => f.name(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            FieldValue::Scalar(f) => f.len(),
            FieldValue::SymmTensor(f) => f.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn renamed(self, name: impl Into<String>) -> Self {
        match self {
            FieldValue::Scalar(f) => FieldValue::Scalar(f.renamed(name)),
            FieldValue::SymmTensor(f) => FieldValue::SymmTensor(f.renamed(name)),
        }
    }

    pub fn as_scalar(&self) -> Option<&ScalarField> {
        match self {
            FieldValue::Scalar(f) => Some(f),
            FieldValue::SymmTensor(_) => None,
        }
    }

    pub fn as_symm_tensor(&self) -> Option<&SymmTensorField> {
        match self {
            FieldValue::SymmTensor(f) => Some(f),
            FieldValue::Scalar(_) => None,
        }
    }
}

impl From<ScalarField> for FieldValue {
    fn from(f: ScalarField) -> Self {
        FieldValue::Scalar(f)
    }
}

impl From<SymmTensorField> for FieldValue {
    fn from(f: SymmTensorField) -> Self {
        FieldValue::SymmTensor(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zip_with_rejects_mismatched_lengths() {
        let a = ScalarField::uniform("a", 3, 1.0);
        let b = ScalarField::uniform("b", 4, 1.0);
        let err = a.zip_with(&b, "c", |x, y| x + y).unwrap_err();
        assert!(matches!(
            err,
            TqError::SizeMismatch {
                expected: 3,
                found: 4,
                ..
            }
        ));
    }

    #[test]
    fn field_value_reports_kind_and_name() {
        let s: FieldValue = ScalarField::uniform("k", 2, 1.0).into();
        let t: FieldValue = SymmTensorField::uniform("R", 2, SymmTensor::IDENTITY).into();
        assert_eq!(s.kind(), FieldKind::Scalar);
        assert_eq!(t.kind(), FieldKind::SymmTensor);
        assert_eq!(t.name(), "R");
        assert!(s.as_symm_tensor().is_none());
        assert_eq!(s.renamed("x").name(), "x");
    }

    #[test]
    fn map_keeps_cell_count() {
        let k = ScalarField::new("k", vec![1.0, 2.0, 4.0]);
        let half = k.map("half", |v| v * 0.5);
        assert_eq!(half.values(), &[0.5, 1.0, 2.0]);
        assert_eq!(half.name(), "half");
    }
}
