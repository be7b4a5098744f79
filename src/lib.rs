//! An interactive **2D signed distance field (SDF)** scene engine: analytic
//! circle and rectangle primitives are rasterized into a square grid of signed
//! distances, then edited in place with smooth constructive-solid-geometry
//! (CSG) blends (*add* = smooth union, *carve* = smooth subtraction).
//!
//! The grid is host-side only: the rendering boundary reads the sample buffer
//! (or its `u8` luminance form) for texture upload and never writes back.
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64
//! - **parallel**: use rayon to split grid sweeps per row

#![forbid(unsafe_code)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod blend;
pub mod errors;
pub mod field;
pub mod float_types;
pub mod pose;
pub mod primitive;
pub mod scene;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use field::{DistanceField, GridConfig, GridMapping};
pub use pose::Pose;
pub use primitive::{MAX_DISTANCE, MapResult, Primitive, Shape, nearest};
pub use scene::{EditOp, Scene};
