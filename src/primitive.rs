//! Analytic primitives and their signed distance evaluators

use crate::errors::ValidationError;
use crate::float_types::Real;
use crate::pose::Pose;
use nalgebra::{Point2, Vector2};

/// Upper clamp applied to every sampled distance. There is no lower clamp;
/// negative means inside.
pub const MAX_DISTANCE: Real = 1.0;

/// The analytic shape of a primitive, expressed in its own local frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    Circle { radius: Real },
    Rect { half_extents: Vector2<Real> },
}

impl Shape {
    /// Signed distance from `p` to the shape boundary in the shape's local
    /// frame. Negative inside.
    pub fn local_distance(&self, p: &Point2<Real>) -> Real {
        match *self {
            Shape::Circle { radius } => p.coords.norm() - radius,
            Shape::Rect { half_extents } => {
                // length(max(|p| - h, 0)) + min(max(d.x, d.y), 0)
                let d = p.coords.abs() - half_extents;
                let outside = Vector2::new(d.x.max(0.0), d.y.max(0.0)).norm();
                outside + d.x.max(d.y).min(0.0)
            },
        }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        match *self {
            Shape::Circle { radius } => {
                if !(radius.is_finite() && radius > 0.0) {
                    return Err(ValidationError::InvalidRadius(radius));
                }
            },
            Shape::Rect { half_extents } => {
                let ok = half_extents.x.is_finite()
                    && half_extents.x > 0.0
                    && half_extents.y.is_finite()
                    && half_extents.y > 0.0;
                if !ok {
                    return Err(ValidationError::InvalidHalfExtents(
                        half_extents.x,
                        half_extents.y,
                    ));
                }
            },
        }
        Ok(())
    }
}

/// A placed primitive: a [`Shape`] plus its world pose and the precomputed
/// inverse pose used to pull world points into the local frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Primitive {
    shape: Shape,
    pose: Pose,
    inv_pose: Pose,
}

impl Primitive {
    /// Validates the shape parameters and precomputes the inverse pose.
    pub fn new(shape: Shape, pose: Pose) -> Result<Self, ValidationError> {
        shape.validate()?;
        Ok(Self {
            shape,
            pose,
            inv_pose: pose.inverse_orthonormal(),
        })
    }

    /// Circle of `radius` centered at `center`.
    pub fn circle(center: Point2<Real>, radius: Real) -> Result<Self, ValidationError> {
        Self::new(
            Shape::Circle { radius },
            Pose::from_translation(center.coords),
        )
    }

    /// Rectangle of `half_extents` centered at `center`, rotated by `theta`
    /// radians.
    pub fn rect(
        center: Point2<Real>,
        theta: Real,
        half_extents: Vector2<Real>,
    ) -> Result<Self, ValidationError> {
        Self::new(
            Shape::Rect { half_extents },
            Pose::from_angle(theta, center.coords),
        )
    }

    #[inline]
    pub fn shape(&self) -> Shape {
        self.shape
    }

    #[inline]
    pub fn pose(&self) -> Pose {
        self.pose
    }

    /// Signed world-space distance from `p` to this primitive's boundary.
    #[inline]
    pub fn distance(&self, p: &Point2<Real>) -> Real {
        self.shape.local_distance(&self.inv_pose.apply(p))
    }
}

/// Result of a nearest-primitive scan.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapResult {
    /// Signed distance, clamped from above to [`MAX_DISTANCE`].
    pub distance: Real,
    /// Index of the closest primitive; `prims.len()` when the scan found none.
    pub index: usize,
}

/// Scans `prims` for the smallest signed distance to `p`.
///
/// Ties keep the first minimum encountered. An empty collection yields the
/// clamped sentinel distance and the one-past-end index.
pub fn nearest(prims: &[Primitive], p: &Point2<Real>) -> MapResult {
    let mut index = prims.len();
    let mut distance = Real::MAX;
    for (i, prim) in prims.iter().enumerate() {
        let d = prim.distance(p);
        if d < distance {
            distance = d;
            index = i;
        }
    }
    MapResult {
        distance: distance.min(MAX_DISTANCE),
        index,
    }
}
