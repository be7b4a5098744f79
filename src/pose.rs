//! Rigid 2D placements and the small matrix algebra beneath them

use crate::float_types::{EPSILON, Real};
use nalgebra::{Matrix2, Point2, Vector2};

/// Standard counter-clockwise rotation matrix for `theta` radians.
#[inline]
pub fn rotation_2x2(theta: Real) -> Matrix2<Real> {
    let (s, c) = theta.sin_cos();
    Matrix2::new(c, -s, s, c)
}

/// A rigid 2D placement: an orthonormal 2×2 linear part plus a translation.
///
/// The linear part must remain a pure rotation (no scale, skew, or shear).
/// [`Pose::inverse_orthonormal`] relies on `R⁻¹ == Rᵀ`; feeding it a
/// non-orthonormal linear part silently corrupts every distance evaluated
/// through the inverse.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub linear: Matrix2<Real>,
    pub translation: Vector2<Real>,
}

impl Pose {
    #[inline]
    pub fn identity() -> Self {
        Self {
            linear: Matrix2::identity(),
            translation: Vector2::zeros(),
        }
    }

    /// Rotation by `theta` radians about the local origin, then translation.
    #[inline]
    pub fn from_angle(theta: Real, translation: Vector2<Real>) -> Self {
        Self {
            linear: rotation_2x2(theta),
            translation,
        }
    }

    /// Pure translation, no rotation.
    #[inline]
    pub fn from_translation(translation: Vector2<Real>) -> Self {
        Self {
            linear: Matrix2::identity(),
            translation,
        }
    }

    /// `R*p + t`.
    #[inline]
    pub fn apply(&self, p: &Point2<Real>) -> Point2<Real> {
        Point2::from(self.linear * p.coords + self.translation)
    }

    /// Inverse of an orthonormal pose: `Rᵀ` and `-Rᵀ t`.
    ///
    /// # Contract
    ///
    /// `self.linear` must be orthonormal. The result is numeric garbage
    /// otherwise; only a debug assertion checks the precondition.
    #[inline]
    pub fn inverse_orthonormal(&self) -> Self {
        debug_assert!(
            self.is_orthonormal(),
            "pose linear part must be orthonormal"
        );
        let rt = self.linear.transpose();
        Self {
            linear: rt,
            translation: -(rt * self.translation),
        }
    }

    /// True when the linear part is orthonormal within tolerance.
    pub fn is_orthonormal(&self) -> bool {
        (self.linear * self.linear.transpose() - Matrix2::identity()).norm() <= 16.0 * EPSILON
    }
}
