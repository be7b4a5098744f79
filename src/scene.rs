//! The scene editor: a full rasterize at construction, smooth CSG edits after

use crate::blend::{BLEND_RADIUS, smooth_max, smooth_min};
use crate::errors::ValidationError;
use crate::field::{DistanceField, GridConfig, GridMapping};
use crate::float_types::{FRAC_PI_2, PI, Real};
use crate::pose::Pose;
use crate::primitive::{Primitive, Shape};
use nalgebra::{Point2, Vector2};

/// One recorded edit.
///
/// `Carve` subtracts the primitive from the raster; it never deletes a
/// previously added primitive from the record.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EditOp {
    Add(Primitive),
    Carve(Primitive),
}

/// An editable 2D SDF scene.
///
/// The grid is the live state the rendering boundary consumes; the base
/// primitive set and the ordered edit record are the authoring history.
/// Interactive edits blend a single new primitive into the existing grid in
/// O(cells); the history is only walked again by [`Scene::rebuild`].
///
/// Every edit takes `&mut self`, so edits are serialized by construction.
/// Edits apply in call order and are not commutative between add and carve:
/// each one reads the result of the previous one.
#[derive(Clone, Debug)]
pub struct Scene {
    config: GridConfig,
    base: Vec<Primitive>,
    edits: Vec<EditOp>,
    field: DistanceField,
}

impl Scene {
    /// Builds a scene and fully rasterizes `base` into the grid,
    /// O(cells × primitives). The grid is allocated once and never resized.
    pub fn new(config: GridConfig, base: Vec<Primitive>) -> Result<Self, ValidationError> {
        config.validate()?;
        let mut field = DistanceField::new(&config);
        field.rebuild(&base);
        Ok(Self {
            config,
            base,
            edits: Vec::new(),
            field,
        })
    }

    /// A scene with no primitives: every sample at
    /// [`MAX_DISTANCE`](crate::primitive::MAX_DISTANCE).
    pub fn empty(config: GridConfig) -> Result<Self, ValidationError> {
        Self::new(config, Vec::new())
    }

    /// The fixed demonstration scene: a ground dot, two rotated-box
    /// mountains, a small house, a tree, and a crescent moon cut from an
    /// add/carve pair near the top-right corner of the default grid.
    pub fn demo() -> Result<Self, ValidationError> {
        let rect = |x: Real, y: Real, theta: Real, hx: Real, hy: Real| {
            Primitive::rect(Point2::new(x, y), theta, Vector2::new(hx, hy))
        };
        let base = vec![
            Primitive::circle(Point2::new(0.0, 0.0), 0.01)?,
            rect(0.3, 0.0, PI / 4.0, 0.2, 0.3)?, // left mountain
            rect(0.7, 0.0, PI / 4.0, 0.3, 0.3)?, // right mountain
            rect(0.6, 0.4, 0.0, 0.2, 0.03)?,     // house foundation
            rect(0.45, 0.43, FRAC_PI_2, 0.02, 0.01)?, // left wall, lower
            rect(0.45, 0.545, FRAC_PI_2, 0.05, 0.01)?, // left wall, upper
            rect(0.75, 0.5, FRAC_PI_2, 0.1, 0.01)?, // right wall
            rect(0.48, 0.6, PI / 6.0, 0.15, 0.02)?, // roof, left slope
            rect(0.72, 0.6, -PI / 6.0, 0.15, 0.02)?, // roof, right slope
            rect(0.15, 0.3, 0.0, 0.03, 0.2)?,    // tree trunk
            Primitive::circle(Point2::new(0.15, 0.5), 0.11)?,
            Primitive::circle(Point2::new(0.15, 0.61), 0.09)?,
        ];
        let mut scene = Self::new(GridConfig::default(), base)?;
        scene.add_circle(Point2::new(2.0, 2.0), 0.5)?;
        scene.carve_circle(Point2::new(2.2, 2.2), 0.5)?;
        Ok(scene)
    }

    /// Smooth-unions a new primitive into the live grid and records it.
    /// O(cells), independent of how many primitives came before.
    pub fn add(&mut self, shape: Shape, pose: Pose) -> Result<(), ValidationError> {
        let op = EditOp::Add(Primitive::new(shape, pose)?);
        Self::apply(&mut self.field, op);
        self.edits.push(op);
        Ok(())
    }

    /// Smooth-subtracts ("carves") a new primitive out of the live grid and
    /// records it. A carve is a one-shot local blend against the current
    /// field; carving the exact shape of an earlier add does not restore the
    /// prior grid bit-for-bit, because the smooth blends are not exact set
    /// inverses.
    pub fn carve(&mut self, shape: Shape, pose: Pose) -> Result<(), ValidationError> {
        let op = EditOp::Carve(Primitive::new(shape, pose)?);
        Self::apply(&mut self.field, op);
        self.edits.push(op);
        Ok(())
    }

    /// Adds a circle at `center` — the primary-click entry point of the
    /// input boundary.
    pub fn add_circle(&mut self, center: Point2<Real>, radius: Real) -> Result<(), ValidationError> {
        self.add(
            Shape::Circle { radius },
            Pose::from_translation(center.coords),
        )
    }

    /// Carves a circle at `center` — the secondary-click entry point.
    pub fn carve_circle(
        &mut self,
        center: Point2<Real>,
        radius: Real,
    ) -> Result<(), ValidationError> {
        self.carve(
            Shape::Circle { radius },
            Pose::from_translation(center.coords),
        )
    }

    /// Recovery path: re-rasterizes the base set, then replays every recorded
    /// edit in order. O(cells × (base + edits)); interactive edits never need
    /// this.
    pub fn rebuild(&mut self) {
        self.field.rebuild(&self.base);
        for &op in &self.edits {
            Self::apply(&mut self.field, op);
        }
    }

    fn apply(field: &mut DistanceField, op: EditOp) {
        match op {
            EditOp::Add(prim) => {
                field.sweep(|p, old| smooth_min(old, prim.distance(p), BLEND_RADIUS));
            },
            EditOp::Carve(prim) => {
                field.sweep(|p, old| smooth_max(old, -prim.distance(p), BLEND_RADIUS));
            },
        }
    }

    /// Grid edge length in texels; always a power of two.
    #[inline]
    pub fn grid_size(&self) -> usize {
        self.field.size()
    }

    /// Read-only float buffer for texture upload, row-major.
    #[inline]
    pub fn buffer(&self) -> &[Real] {
        self.field.samples()
    }

    /// Texture-ready `u8` luminance buffer (samples clamped to `[0, 1]` and
    /// scaled by 255).
    #[inline]
    pub fn luminance_buffer(&self) -> Vec<u8> {
        self.field.luminance()
    }

    /// Sampling density the windowing boundary composes into its
    /// window↔world transform.
    #[inline]
    pub fn samples_per_world_unit(&self) -> Real {
        self.config.samples_per_world_unit
    }

    /// The world↔grid mapping, also needed by the windowing boundary.
    #[inline]
    pub fn mapping(&self) -> &GridMapping {
        self.field.mapping()
    }

    #[inline]
    pub fn field(&self) -> &DistanceField {
        &self.field
    }

    /// The primitives rasterized at construction.
    #[inline]
    pub fn base_primitives(&self) -> &[Primitive] {
        &self.base
    }

    /// The ordered edit record, adds and carves alike.
    #[inline]
    pub fn edits(&self) -> &[EditOp] {
        &self.edits
    }
}
