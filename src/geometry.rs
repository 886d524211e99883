//! Surface geometry for ripple sizing
//!
//! All coordinates are surface-local. The host hands in bounds every frame;
//! nothing here is stored between frames.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::RippleError;

/// A 2D coordinate. Distance is `Vec2::distance`.
pub type Point = Vec2;

/// Axis-aligned surface bounds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub min: Vec2,
    /// Width and height (never negative)
    pub size: Vec2,
}

impl Rect {
    /// Bounds at `min` with the given size. Negative extents clamp to zero.
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self {
            min,
            size: size.max(Vec2::ZERO),
        }
    }

    /// Bounds anchored at the surface origin
    pub fn from_size(width: f32, height: f32) -> Self {
        Self::new(Vec2::ZERO, Vec2::new(width, height))
    }

    /// Checked variant of [`Rect::from_size`] for hosts that want to reject
    /// empty or non-finite surfaces up front.
    pub fn try_from_size(width: f32, height: f32) -> Result<Self, RippleError> {
        if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
            return Err(RippleError::DegenerateBounds { width, height });
        }
        Ok(Self::from_size(width, height))
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.y
    }

    #[inline]
    pub fn area(&self) -> f32 {
        self.size.x * self.size.y
    }

    /// Zero-area bounds (a line or a point)
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.area() <= 0.0
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.min + self.size * 0.5
    }

    /// Corners in order: top-left, top-right, bottom-right, bottom-left
    pub fn corners(&self) -> [Vec2; 4] {
        let max = self.min + self.size;
        [
            self.min,
            Vec2::new(max.x, self.min.y),
            max,
            Vec2::new(self.min.x, max.y),
        ]
    }

    /// Same bounds shifted by `offset`
    pub fn translate(&self, offset: Vec2) -> Self {
        Self {
            min: self.min + offset,
            size: self.size,
        }
    }
}

/// Radius a circle centered at `origin` needs to cover all of `bounds`.
///
/// Half the diagonal plus the origin's offset from the center. By the
/// triangle inequality every corner is within that distance of `origin`.
/// It overshoots the farthest-corner distance for off-center touches, but
/// costs two distance calls instead of four.
///
/// Degenerate bounds yield 0.
pub fn coverage_radius(origin: Point, bounds: &Rect) -> f32 {
    if bounds.is_degenerate() {
        return 0.0;
    }
    let center = bounds.center();
    let half_diagonal = bounds.min.distance(center);
    let center_to_origin = origin.distance(center);
    half_diagonal + center_to_origin
}
