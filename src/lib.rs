//! Touch Ripple - tap feedback effect engine
//!
//! Core modules:
//! - `geometry`: Surface bounds and the coverage radius
//! - `anim`: Time-based tweens and easing curves
//! - `ripple`: A single ripple and its spread/fade channels
//! - `registry`: Ordered collection of active ripples
//! - `controller`: Gesture-to-ripple bridge producing per-frame draw lists
//! - `render`: Draw instructions handed to the host renderer
//! - `settings`: Ripple style and timing configuration
//! - `shared`: Thread-safe controller handle

pub mod anim;
pub mod controller;
pub mod error;
pub mod geometry;
pub mod registry;
pub mod render;
pub mod ripple;
pub mod settings;
pub mod shared;

pub use controller::{GestureEvent, TouchRipple};
pub use error::RippleError;
pub use geometry::{Point, Rect, coverage_radius};
pub use registry::RippleRegistry;
pub use render::{DrawCircle, Rgba, RippleInstance};
pub use ripple::{Ripple, RippleId, RipplePhase, RippleState};
pub use settings::{RippleStyle, RippleTiming};
pub use shared::SharedTouchRipple;

/// Effect constants
pub mod consts {
    /// Spread value a ripple starts at (already partially expanded)
    pub const SPREAD_START: f32 = 0.3;
    /// Spread value a ripple ends at (full coverage)
    pub const SPREAD_END: f32 = 1.0;

    /// Spread 0.3 -> 1.0 duration (ms)
    pub const SPREAD_DURATION_MS: u64 = 250;
    /// Fade 0 -> 1 duration (ms), runs alongside the spread
    pub const FADE_IN_DURATION_MS: u64 = 100;
    /// Fade 1 -> 0 duration (ms), starts once the spread finishes
    pub const FADE_OUT_DURATION_MS: u64 = 500;

    /// Default blur applied over the ripple layer (dp)
    pub const DEFAULT_BLUR_RADIUS: f32 = 30.0;

    /// Host frame interval used by the demo loop (60 Hz)
    pub const FRAME_DT_MS: u64 = 16;
}
