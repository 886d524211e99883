//! Render output handed to the host
//!
//! The core never rasterizes. Each frame it produces one `DrawCircle` per
//! active ripple, in registry order (later ripples draw on top). Hosts with
//! a GPU path can pack those into `RippleInstance` buffers.

use bytemuck::{Pod, Zeroable};
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Linear RGBA color, components in [0, 1]
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with alpha multiplied by `factor` (clamped to [0, 1])
    pub fn scale_alpha(self, factor: f32) -> Self {
        Self {
            a: self.a * factor.clamp(0.0, 1.0),
            ..self
        }
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// One filled circle for the host renderer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCircle {
    pub center: Vec2,
    pub radius: f32,
    /// Base color with alpha already scaled by the ripple's fade
    pub color: Rgba,
    /// Same as `color.a`, for renderers that take opacity separately
    pub alpha: f32,
}

impl DrawCircle {
    /// Nothing would be drawn (zero radius or fully transparent)
    pub fn is_invisible(&self) -> bool {
        self.radius <= 0.0 || self.alpha <= 0.0
    }

    pub fn to_instance(&self) -> RippleInstance {
        RippleInstance {
            center: self.center.to_array(),
            radius: self.radius,
            _pad: 0.0,
            color: self.color.to_array(),
        }
    }
}

/// GPU instance data for one ripple circle (32 bytes, 16-byte aligned fields)
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct RippleInstance {
    pub center: [f32; 2],
    pub radius: f32,
    pub _pad: f32,
    pub color: [f32; 4],
}

/// Pack draw instructions into instance data, skipping invisible circles
pub fn instances(circles: &[DrawCircle]) -> Vec<RippleInstance> {
    circles
        .iter()
        .filter(|c| !c.is_invisible())
        .map(DrawCircle::to_instance)
        .collect()
}

/// Raw bytes for an instance buffer upload
pub fn instance_bytes(instances: &[RippleInstance]) -> &[u8] {
    bytemuck::cast_slice(instances)
}
