//! The rasterized distance grid and its world↔grid mapping

use crate::errors::ValidationError;
use crate::float_types::Real;
use crate::primitive::{MAX_DISTANCE, Primitive, nearest};
use nalgebra::Point2;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Grid resolution and sampling density for a scene.
///
/// Replaces the process-wide static world↔grid matrices of older designs: the
/// scene derives its [`GridMapping`] from this once, at construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridConfig {
    /// Grid edge length in texels. Must be a power of two, required by the
    /// texture-upload boundary.
    pub size: usize,
    /// How many texels cover one world unit.
    pub samples_per_world_unit: Real,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            size: 512,
            samples_per_world_unit: 128.0,
        }
    }
}

impl GridConfig {
    pub(crate) fn validate(&self) -> Result<(), ValidationError> {
        if !self.size.is_power_of_two() {
            return Err(ValidationError::GridSizeNotPowerOfTwo(self.size));
        }
        if !(self.samples_per_world_unit.is_finite() && self.samples_per_world_unit > 0.0) {
            return Err(ValidationError::InvalidSampleDensity(
                self.samples_per_world_unit,
            ));
        }
        Ok(())
    }
}

/// Uniform-scale affine map between world space and continuous grid space.
/// The world origin lands at the grid center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridMapping {
    scale: Real,
    offset: Real,
}

impl GridMapping {
    pub(crate) fn new(config: &GridConfig) -> Self {
        Self {
            scale: config.samples_per_world_unit,
            offset: config.size as Real * 0.5,
        }
    }

    /// World point to continuous grid coordinates.
    #[inline]
    pub fn world_to_grid(&self, p: &Point2<Real>) -> Point2<Real> {
        Point2::new(p.x * self.scale + self.offset, p.y * self.scale + self.offset)
    }

    /// Continuous grid coordinates back to world space; exact closed-form
    /// inverse of [`GridMapping::world_to_grid`].
    #[inline]
    pub fn grid_to_world(&self, g: &Point2<Real>) -> Point2<Real> {
        Point2::new((g.x - self.offset) / self.scale, (g.y - self.offset) / self.scale)
    }

    /// World position of the center of cell `(x, y)`.
    #[inline]
    pub fn cell_center_world(&self, x: usize, y: usize) -> Point2<Real> {
        self.grid_to_world(&Point2::new(x as Real + 0.5, y as Real + 0.5))
    }
}

/// A square grid of signed distance samples, row-major, `size * size` texels.
///
/// Each sample holds the signed distance from its cell's world-space center
/// to the scene boundary, clamped from above to [`MAX_DISTANCE`].
#[derive(Clone, Debug)]
pub struct DistanceField {
    size: usize,
    mapping: GridMapping,
    samples: Vec<Real>,
}

impl DistanceField {
    /// Allocates a field with every sample at [`MAX_DISTANCE`] (empty scene).
    pub(crate) fn new(config: &GridConfig) -> Self {
        Self {
            size: config.size,
            mapping: GridMapping::new(config),
            samples: vec![MAX_DISTANCE; config.size * config.size],
        }
    }

    /// Grid edge length in texels; always a power of two.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn mapping(&self) -> &GridMapping {
        &self.mapping
    }

    /// Read-only view of the raw samples, row-major.
    #[inline]
    pub fn samples(&self) -> &[Real] {
        &self.samples
    }

    /// Sample at cell `(x, y)`. Panics when out of bounds.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Real {
        self.samples[y * self.size + x]
    }

    /// Sample at the cell containing world point `p`, or `None` off the grid.
    pub fn sample_world(&self, p: &Point2<Real>) -> Option<Real> {
        let g = self.mapping.world_to_grid(p);
        if g.x < 0.0 || g.y < 0.0 {
            return None;
        }
        let (x, y) = (g.x as usize, g.y as usize);
        if x >= self.size || y >= self.size {
            return None;
        }
        Some(self.get(x, y))
    }

    /// Texture-ready luminance: each sample clamped to `[0, 1]` and scaled
    /// to `u8`.
    pub fn luminance(&self) -> Vec<u8> {
        self.samples
            .iter()
            .map(|&d| (d.clamp(0.0, 1.0) * 255.0) as u8)
            .collect()
    }

    /// Full rasterize: every cell gets the clamped nearest-primitive distance.
    pub(crate) fn rebuild(&mut self, prims: &[Primitive]) {
        self.sweep(|p, _old| nearest(prims, p).distance);
    }

    /// Applies `f` to every cell, passing the cell's world-space center and
    /// its current value. Rows are independent, so the `parallel` feature
    /// splits the sweep per row.
    pub(crate) fn sweep<F>(&mut self, f: F)
    where
        F: Fn(&Point2<Real>, Real) -> Real + Sync + Send,
    {
        let mapping = self.mapping;
        let size = self.size;

        #[cfg(feature = "parallel")]
        let rows = self.samples.par_chunks_mut(size);
        #[cfg(not(feature = "parallel"))]
        let rows = self.samples.chunks_mut(size);

        rows.enumerate().for_each(|(y, row)| {
            for (x, value) in row.iter_mut().enumerate() {
                let world = mapping.cell_center_world(x, y);
                *value = f(&world, *value);
            }
        });
    }
}
