//! Standard k-epsilon model coefficients.

use tq_core::Real;

/// Cmu, relating nut, k and epsilon: nut = Cmu k^2 / epsilon.
pub const CMU: Real = 0.09;

/// Default turbulent Prandtl number.
pub const PRT: Real = 0.85;
