//! Test support library
//! Provides various helper functions & utilities for tests.

use sdfield::float_types::Real;

/// True when `a` and `b` differ by less than `eps`.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}
