//! Polynomial smooth min/max, after <https://iquilezles.org/articles/smin/>

use crate::float_types::Real;

/// Transition radius used by the scene's incremental edits. Must stay
/// strictly positive: both blends divide by it.
pub const BLEND_RADIUS: Real = 0.1;

/// Smooth union of two signed distances with transition radius `k`.
#[inline]
pub fn smooth_min(a: Real, b: Real, k: Real) -> Real {
    let h = (k - (a - b).abs()).max(0.0);
    a.min(b) - h * h * 0.25 / k
}

/// Smooth subtraction dual of [`smooth_min`].
#[inline]
pub fn smooth_max(a: Real, b: Real, k: Real) -> Real {
    let h = (k - (a - b).abs()).max(0.0);
    a.max(b) + h * h * 0.25 / k
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduces_to_hard_min_max_outside_the_blend_band() {
        // |a - b| >= k leaves no transition to round off.
        assert_eq!(smooth_min(0.0, 1.0, 0.1), 0.0);
        assert_eq!(smooth_max(0.0, 1.0, 0.1), 1.0);
    }

    #[test]
    fn rounds_the_transition_inside_the_band() {
        let k = 0.1;
        assert!(smooth_min(0.0, 0.05, k) < 0.0);
        assert!(smooth_max(0.0, 0.05, k) > 0.05);
        // The correction never exceeds k/4.
        assert!(smooth_min(0.0, 0.0, k) >= -k * 0.25);
        assert!(smooth_max(0.0, 0.0, k) <= k * 0.25);
    }

    #[test]
    fn commutative() {
        let k = 0.1;
        assert_eq!(smooth_min(0.02, -0.03, k), smooth_min(-0.03, 0.02, k));
        assert_eq!(smooth_max(0.02, -0.03, k), smooth_max(-0.03, 0.02, k));
    }
}
