//! Error types
//!
//! The effect is visual polish: nothing here is allowed to break the host's
//! tap handling. Errors only surface from constructors and config loading.

use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum RippleError {
    #[error("invalid {channel} duration: {millis} ms (must be > 0)")]
    InvalidDuration { channel: &'static str, millis: i128 },
    #[error("invalid ripple timing: {0}")]
    InvalidTiming(String),
    #[error("degenerate surface bounds: {width}x{height}")]
    DegenerateBounds { width: f32, height: f32 },
    #[error("invalid ripple config: {0}")]
    Config(#[from] serde_json::Error),
}

impl RippleError {
    pub(crate) fn invalid_duration(channel: &'static str, duration: Duration) -> Self {
        Self::InvalidDuration {
            channel,
            millis: duration.as_millis() as i128,
        }
    }
}
