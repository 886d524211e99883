//! Easing curves

use serde::{Deserialize, Serialize};

/// Bisection steps when inverting the bezier x(t). 2^-24 is below f32 precision.
const BEZIER_SOLVE_STEPS: u32 = 24;

/// Maps linear progress in [0, 1] to eased progress in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub enum Easing {
    Linear,
    /// Standard material tween curve: cubic bezier (0.4, 0.0, 0.2, 1.0)
    #[default]
    FastOutSlowIn,
    /// CSS-style cubic bezier with control points (x1, y1) and (x2, y2).
    /// x1 and x2 must lie in [0, 1] for the curve to be a function of time.
    CubicBezier { x1: f32, y1: f32, x2: f32, y2: f32 },
}

impl Easing {
    /// Eased progress for linear progress `t`. Clamps `t` to [0, 1] and hits
    /// both endpoints exactly.
    pub fn apply(&self, t: f32) -> f32 {
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        match *self {
            Easing::Linear => t,
            Easing::FastOutSlowIn => cubic_bezier(0.4, 0.0, 0.2, 1.0, t),
            Easing::CubicBezier { x1, y1, x2, y2 } => {
                cubic_bezier(x1.clamp(0.0, 1.0), y1, x2.clamp(0.0, 1.0), y2, t)
            }
        }
    }
}

/// One coordinate of a cubic bezier with endpoints 0 and 1
#[inline]
fn bezier_coord(p1: f32, p2: f32, s: f32) -> f32 {
    let inv = 1.0 - s;
    3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
}

/// Solve x(s) = x by bisection, then return y(s).
///
/// Bisection over a monotone x(s) keeps the result monotone in `x`, which
/// Newton iteration does not guarantee.
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, x: f32) -> f32 {
    let mut lo = 0.0f32;
    let mut hi = 1.0f32;
    for _ in 0..BEZIER_SOLVE_STEPS {
        let mid = (lo + hi) * 0.5;
        if bezier_coord(x1, x2, mid) < x {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    bezier_coord(y1, y2, (lo + hi) * 0.5)
}
