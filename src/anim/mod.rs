//! Animation driver
//!
//! Everything here is evaluated from elapsed wall-clock time, never by
//! accumulating per-frame deltas, so results do not depend on frame rate:
//! - `Tween` interpolates one value over a fixed duration
//! - `Channel` runs tweens back to back on a single timeline
//! - `Easing` maps linear progress to curved progress

pub mod channel;
pub mod easing;
pub mod tween;

pub use channel::{Channel, ChannelSample};
pub use easing::Easing;
pub use tween::Tween;
