//! Validation errors

use crate::float_types::Real;
use std::fmt::Display;

/// All the possible validation issues we might encounter
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// (InvalidRadius) A circle radius is not strictly positive and finite
    InvalidRadius(Real),
    /// (InvalidHalfExtents) A rectangle half-extent is not strictly positive and finite
    InvalidHalfExtents(Real, Real),
    /// (GridSizeNotPowerOfTwo) The grid edge length is not a power of two
    GridSizeNotPowerOfTwo(usize),
    /// (InvalidSampleDensity) samples-per-world-unit is not strictly positive and finite
    InvalidSampleDensity(Real),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::InvalidRadius(radius) => write!(
                f,
                "(InvalidRadius) A circle radius must be strictly positive and finite, got: {}",
                radius
            ),
            ValidationError::InvalidHalfExtents(hx, hy) => write!(
                f,
                "(InvalidHalfExtents) Rectangle half-extents must be strictly positive and finite, got: ({}, {})",
                hx, hy
            ),
            ValidationError::GridSizeNotPowerOfTwo(size) => write!(
                f,
                "(GridSizeNotPowerOfTwo) The grid edge length must be a power of two, got: {}",
                size
            ),
            ValidationError::InvalidSampleDensity(density) => write!(
                f,
                "(InvalidSampleDensity) samples-per-world-unit must be strictly positive and finite, got: {}",
                density
            ),
        }
    }
}
