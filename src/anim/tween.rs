//! Single-value tween

use std::time::Duration;

use super::easing::Easing;
use crate::error::RippleError;

/// Interpolates `from -> to` over `duration`, shaped by `easing`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    /// Name used in error messages and logs
    pub label: &'static str,
    pub from: f32,
    pub to: f32,
    duration: Duration,
    pub easing: Easing,
}

impl Tween {
    /// Create a tween with the default easing.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDuration` if `duration` is zero.
    pub fn new(label: &'static str, from: f32, to: f32, duration: Duration) -> Result<Self, RippleError> {
        if duration.is_zero() {
            return Err(RippleError::invalid_duration(label, duration));
        }
        Ok(Self {
            label,
            from,
            to,
            duration,
            easing: Easing::default(),
        })
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    #[inline]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Linear progress in [0, 1] after `elapsed`
    pub fn progress(&self, elapsed: Duration) -> f32 {
        if elapsed >= self.duration {
            return 1.0;
        }
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()) as f32
    }

    /// Interpolated value after `elapsed`. Exactly `from` at zero and exactly
    /// `to` once the duration has passed.
    pub fn value_at(&self, elapsed: Duration) -> f32 {
        if elapsed >= self.duration {
            return self.to;
        }
        let eased = self.easing.apply(self.progress(elapsed));
        self.from + (self.to - self.from) * eased
    }

    #[inline]
    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration
    }
}
