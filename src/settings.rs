//! Ripple style and timing configuration
//!
//! Loaded from JSON by hosts that keep it alongside their theme. Every field
//! has a default so partial documents load.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::anim::{Channel, Easing, Tween};
use crate::consts::*;
use crate::error::RippleError;
use crate::render::Rgba;
use crate::ripple::Target;

/// Durations and start value for a ripple's channels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RippleTiming {
    /// Spread value at creation, in [0, 1]
    pub spread_start: f32,
    /// Spread 0.3 -> 1.0 (ms). Durations are unsigned; `from_json` maps
    /// negative values to `InvalidDuration`.
    pub spread_ms: u64,
    /// Fade 0 -> 1, concurrent with the spread (ms). Must not outlast the
    /// spread, or the fade-out would cut in before full opacity.
    pub fade_in_ms: u64,
    /// Fade 1 -> 0, after the spread (ms)
    pub fade_out_ms: u64,
    pub easing: Easing,
}

impl Default for RippleTiming {
    fn default() -> Self {
        Self {
            spread_start: SPREAD_START,
            spread_ms: SPREAD_DURATION_MS,
            fade_in_ms: FADE_IN_DURATION_MS,
            fade_out_ms: FADE_OUT_DURATION_MS,
            easing: Easing::FastOutSlowIn,
        }
    }
}

impl RippleTiming {
    /// Reject zero durations, a fade-in longer than the spread and a spread
    /// start outside [0, 1].
    ///
    /// # Errors
    ///
    /// Returns `InvalidDuration` naming the first offending channel, or
    /// `InvalidTiming` for the other cases.
    pub fn validate(&self) -> Result<(), RippleError> {
        self.channels().map(|_| ())
    }

    /// Build the two channels a ripple runs:
    /// - spread then fade-out, back to back
    /// - fade-in, alongside the spread
    pub(crate) fn channels(&self) -> Result<[Channel<Target>; 2], RippleError> {
        if !(0.0..=SPREAD_END).contains(&self.spread_start) {
            return Err(RippleError::InvalidTiming(format!(
                "spread_start {} outside [0, {}]",
                self.spread_start, SPREAD_END
            )));
        }
        let ms = Duration::from_millis;
        let spread = Tween::new("spread", self.spread_start, SPREAD_END, ms(self.spread_ms))?
            .with_easing(self.easing);
        let fade_out = Tween::new("fade-out", 1.0, 0.0, ms(self.fade_out_ms))?.with_easing(self.easing);
        let fade_in = Tween::new("fade-in", 0.0, 1.0, ms(self.fade_in_ms))?.with_easing(self.easing);
        if self.fade_in_ms > self.spread_ms {
            return Err(RippleError::InvalidTiming(format!(
                "fade-in ({} ms) outlasts spread ({} ms)",
                self.fade_in_ms, self.spread_ms
            )));
        }

        Ok([
            Channel::new()
                .then(Target::Spread, spread)
                .then(Target::Fade, fade_out),
            Channel::new().then(Target::Fade, fade_in),
        ])
    }

    /// Time from creation to completion (both channels finished)
    pub fn lifetime(&self) -> Duration {
        let spread_then_fade =
            Duration::from_millis(self.spread_ms).saturating_add(Duration::from_millis(self.fade_out_ms));
        spread_then_fade.max(Duration::from_millis(self.fade_in_ms))
    }
}

/// Visual configuration for a ripple surface
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RippleStyle {
    /// Base color; its alpha is scaled by each ripple's fade
    pub color: Rgba,
    /// Blur over the ripple layer (dp), only where the platform supports it
    pub blur_radius: f32,
    pub timing: RippleTiming,
}

impl Default for RippleStyle {
    fn default() -> Self {
        Self {
            color: Rgba::new(1.0, 1.0, 1.0, 0.25),
            blur_radius: DEFAULT_BLUR_RADIUS,
            timing: RippleTiming::default(),
        }
    }
}

impl RippleStyle {
    pub fn with_color(mut self, color: Rgba) -> Self {
        self.color = color;
        self
    }

    pub fn with_timing(mut self, timing: RippleTiming) -> Self {
        self.timing = timing;
        self
    }

    /// Blur to apply given the host's blur capability. `None` disables it.
    pub fn effective_blur_radius(&self, platform_supports_blur: bool) -> Option<f32> {
        if platform_supports_blur && self.blur_radius > 0.0 {
            Some(self.blur_radius)
        } else {
            None
        }
    }

    /// Parse and validate a JSON style document.
    ///
    /// # Errors
    ///
    /// Returns `Config` for malformed JSON, `InvalidDuration` for zero or
    /// negative durations and `InvalidTiming` for inconsistent timing.
    pub fn from_json(json: &str) -> Result<Self, RippleError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        for (channel, key) in [
            ("spread", "spread_ms"),
            ("fade-in", "fade_in_ms"),
            ("fade-out", "fade_out_ms"),
        ] {
            let millis = value
                .get("timing")
                .and_then(|timing| timing.get(key))
                .and_then(serde_json::Value::as_i64);
            if let Some(millis) = millis.filter(|m| *m < 0) {
                return Err(RippleError::InvalidDuration {
                    channel,
                    millis: i128::from(millis),
                });
            }
        }
        let style: Self = serde_json::from_value(value)?;
        style.timing.validate()?;
        log::info!("Loaded ripple style (lifetime {:?})", style.timing.lifetime());
        Ok(style)
    }

    pub fn to_json(&self) -> Result<String, RippleError> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_lifetime() {
        assert_eq!(RippleTiming::default().lifetime(), Duration::from_millis(750));
    }

    #[test]
    fn test_lifetime_saturates() {
        let timing = RippleTiming {
            spread_ms: u64::MAX,
            fade_out_ms: 1,
            ..Default::default()
        };
        assert!(timing.validate().is_ok());
        let expected = Duration::from_millis(u64::MAX) + Duration::from_millis(1);
        assert_eq!(timing.lifetime(), expected);
    }

    #[test]
    fn test_json_with_huge_spread_loads() {
        let style =
            RippleStyle::from_json(r#"{ "timing": { "spread_ms": 18446744073709551615, "fade_out_ms": 1 } }"#)
                .unwrap();
        assert_eq!(style.timing.spread_ms, u64::MAX);
    }

    #[test]
    fn test_fade_in_longer_than_spread_rejected() {
        let timing = RippleTiming {
            fade_in_ms: 400,
            easing: Easing::Linear,
            ..Default::default()
        };
        assert!(matches!(timing.validate(), Err(RippleError::InvalidTiming(_))));

        // Equal durations: fade-in peaks exactly as the fade-out takes over
        let timing = RippleTiming {
            fade_in_ms: 250,
            ..Default::default()
        };
        assert!(timing.validate().is_ok());
    }

    #[test]
    fn test_spread_start_out_of_range_rejected() {
        for start in [5.0, -0.1, f32::NAN] {
            let timing = RippleTiming {
                spread_start: start,
                ..Default::default()
            };
            assert!(matches!(timing.validate(), Err(RippleError::InvalidTiming(_))));
        }
        assert!(matches!(
            RippleStyle::from_json(r#"{ "timing": { "spread_start": 5.0 } }"#),
            Err(RippleError::InvalidTiming(_))
        ));
    }

    #[test]
    fn test_json_negative_duration_is_invalid_duration() {
        let err = RippleStyle::from_json(r#"{ "timing": { "fade_out_ms": -5 } }"#).unwrap_err();
        assert!(matches!(
            err,
            RippleError::InvalidDuration { channel: "fade-out", millis: -5 }
        ));
    }

    #[test]
    fn test_zero_duration_rejected() {
        let timing = RippleTiming {
            fade_out_ms: 0,
            ..Default::default()
        };
        assert!(matches!(
            timing.validate(),
            Err(RippleError::InvalidDuration { channel: "fade-out", .. })
        ));
    }

    #[test]
    fn test_blur_gated_by_platform() {
        let style = RippleStyle::default();
        assert_eq!(style.effective_blur_radius(true), Some(DEFAULT_BLUR_RADIUS));
        assert_eq!(style.effective_blur_radius(false), None);

        let unblurred = RippleStyle {
            blur_radius: 0.0,
            ..Default::default()
        };
        assert_eq!(unblurred.effective_blur_radius(true), None);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let style = RippleStyle::from_json(r#"{ "blur_radius": 12.0 }"#).unwrap();
        assert_eq!(style.blur_radius, 12.0);
        assert_eq!(style.timing, RippleTiming::default());
    }

    #[test]
    fn test_json_roundtrip_keeps_color() {
        let style = RippleStyle::default().with_color(Rgba::new(0.1, 0.2, 0.3, 0.4));
        let json = style.to_json().unwrap();
        let loaded = RippleStyle::from_json(&json).unwrap();
        assert_eq!(loaded.color, style.color);
    }

    #[test]
    fn test_json_rejects_zero_duration() {
        let err = RippleStyle::from_json(r#"{ "timing": { "spread_ms": 0 } }"#).unwrap_err();
        assert!(matches!(err, RippleError::InvalidDuration { channel: "spread", .. }));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            RippleStyle::from_json("{ not json"),
            Err(RippleError::Config(_))
        ));
    }
}
