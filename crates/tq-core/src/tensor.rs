//! Symmetric second-rank tensor in three dimensions.

use crate::numeric::Real;
use core::ops::{Add, Mul, Neg, Sub};

/// Six independent components of a symmetric 3x3 tensor.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SymmTensor {
    pub xx: Real,
    pub xy: Real,
    pub xz: Real,
    pub yy: Real,
    pub yz: Real,
    pub zz: Real,
}

impl SymmTensor {
    pub const ZERO: SymmTensor = SymmTensor::new(0.0, 0.0, 0.0, 0.0, 0.0, 0.0);

    /// Unit (identity) tensor I.
    pub const IDENTITY: SymmTensor = SymmTensor::new(1.0, 0.0, 0.0, 1.0, 0.0, 1.0);

    pub const fn new(xx: Real, xy: Real, xz: Real, yy: Real, yz: Real, zz: Real) -> Self {
        Self {
            xx,
            xy,
            xz,
            yy,
            yz,
            zz,
        }
    }

    /// Spherical tensor s*I.
    pub fn spherical(s: Real) -> Self {
        Self::IDENTITY * s
    }

    pub fn trace(&self) -> Real {
        self.xx + self.yy + self.zz
    }

    /// Deviatoric part: T - tr(T)/3 I.
    pub fn dev(&self) -> Self {
        *self - Self::spherical(self.trace() / 3.0)
    }

    /// Components in (xx, xy, xz, yy, yz, zz) order.
    pub fn components(&self) -> [Real; 6] {
        [self.xx, self.xy, self.xz, self.yy, self.yz, self.zz]
    }

    pub fn is_finite(&self) -> bool {
        self.components().iter().all(|c| c.is_finite())
    }
}

impl Add for SymmTensor {
    type Output = SymmTensor;

    fn add(self, rhs: SymmTensor) -> SymmTensor {
        SymmTensor::new(
            self.xx + rhs.xx,
            self.xy + rhs.xy,
            self.xz + rhs.xz,
            self.yy + rhs.yy,
            self.yz + rhs.yz,
            self.zz + rhs.zz,
        )
    }
}

impl Sub for SymmTensor {
    type Output = SymmTensor;

    fn sub(self, rhs: SymmTensor) -> SymmTensor {
        self + (-rhs)
    }
}

impl Neg for SymmTensor {
    type Output = SymmTensor;

    fn neg(self) -> SymmTensor {
        self * -1.0
    }
}

impl Mul<Real> for SymmTensor {
    type Output = SymmTensor;

    fn mul(self, s: Real) -> SymmTensor {
        SymmTensor::new(
            self.xx * s,
            self.xy * s,
            self.xz * s,
            self.yy * s,
            self.yz * s,
            self.zz * s,
        )
    }
}
