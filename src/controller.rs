//! Gesture-to-ripple bridge
//!
//! The host does gesture recognition and owns the clock. Each recognized tap
//! spawns and attaches a ripple; each frame the host calls `advance` (which
//! detaches ripples whose channels have all finished) and then `frame` to
//! get the circles to draw.
//!
//! Nothing on the tap path may panic or return an error to the host: bad
//! input is logged and dropped.

use std::fmt;
use std::time::Duration;

use glam::Vec2;

use crate::error::RippleError;
use crate::geometry::{Rect, coverage_radius};
use crate::registry::RippleRegistry;
use crate::render::DrawCircle;
use crate::ripple::{RippleId, RippleState};
use crate::settings::RippleStyle;

/// Optional gesture lifecycle hook
pub type Callback = Box<dyn FnMut() + Send>;

/// Gesture events from the host's recognizer, in surface-local coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    /// Pointer pressed
    Down(Vec2),
    /// Pointer released
    Up(Vec2),
    /// Recognized tap
    Tap(Vec2),
}

/// Ripple surface: style, active ripples and gesture hooks
pub struct TouchRipple {
    style: RippleStyle,
    registry: RippleRegistry,
    on_tap: Option<Callback>,
    on_tap_start: Option<Callback>,
    on_tap_end: Option<Callback>,
}

impl fmt::Debug for TouchRipple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TouchRipple")
            .field("style", &self.style)
            .field("registry", &self.registry)
            .field("on_tap", &self.on_tap.is_some())
            .field("on_tap_start", &self.on_tap_start.is_some())
            .field("on_tap_end", &self.on_tap_end.is_some())
            .finish()
    }
}

impl TouchRipple {
    /// # Errors
    ///
    /// Returns the error from [`RippleTiming::validate`](crate::RippleTiming::validate)
    /// if the style's timing is rejected.
    pub fn new(style: RippleStyle) -> Result<Self, RippleError> {
        style.timing.validate()?;
        Ok(Self {
            style,
            registry: RippleRegistry::new(),
            on_tap: None,
            on_tap_start: None,
            on_tap_end: None,
        })
    }

    pub fn on_tap(mut self, callback: impl FnMut() + Send + 'static) -> Self {
        self.on_tap = Some(Box::new(callback));
        self
    }

    pub fn on_tap_start(mut self, callback: impl FnMut() + Send + 'static) -> Self {
        self.on_tap_start = Some(Box::new(callback));
        self
    }

    pub fn on_tap_end(mut self, callback: impl FnMut() + Send + 'static) -> Self {
        self.on_tap_end = Some(Box::new(callback));
        self
    }

    pub fn style(&self) -> &RippleStyle {
        &self.style
    }

    /// Replace the style. Ripples already running keep their old timing.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDuration` and keeps the current style if the new
    /// timing has a zero duration.
    pub fn set_style(&mut self, style: RippleStyle) -> Result<(), RippleError> {
        style.timing.validate()?;
        self.style = style;
        Ok(())
    }

    /// Route a gesture event. Returns the spawned ripple for taps.
    pub fn handle(&mut self, event: GestureEvent, now: Duration) -> Option<RippleId> {
        match event {
            GestureEvent::Down(_) => {
                fire(&mut self.on_tap_start);
                None
            }
            GestureEvent::Up(_) => {
                fire(&mut self.on_tap_end);
                None
            }
            GestureEvent::Tap(point) => {
                let id = self.tap(point, now);
                fire(&mut self.on_tap);
                id
            }
        }
    }

    /// Spawn and attach a ripple at `point`, animated from `now`.
    ///
    /// Non-finite coordinates are ignored.
    pub fn tap(&mut self, point: Vec2, now: Duration) -> Option<RippleId> {
        if !point.is_finite() {
            log::warn!("Ignoring tap at non-finite point {:?}", point);
            return None;
        }
        match self.registry.spawn(point, now, &self.style.timing) {
            Ok(ripple) => {
                let id = ripple.id();
                self.registry.attach(ripple);
                Some(id)
            }
            Err(e) => {
                log::warn!("Failed to start ripple: {}", e);
                None
            }
        }
    }

    /// Advance all ripples to `now` and detach the ones that completed.
    /// Returns the detached IDs.
    pub fn advance(&mut self, now: Duration) -> Vec<RippleId> {
        let completed = self.registry.advance(now);
        for id in &completed {
            self.registry.detach(*id);
        }
        completed
    }

    /// Draw list for the current state, in draw order
    pub fn frame(&self, bounds: &Rect) -> Vec<DrawCircle> {
        self.registry
            .snapshot()
            .iter()
            .map(|ripple| draw_circle(ripple, bounds, &self.style))
            .collect()
    }

    /// `advance` then `frame`, for hosts that do both every frame
    pub fn tick(&mut self, now: Duration, bounds: &Rect) -> Vec<DrawCircle> {
        self.advance(now);
        self.frame(bounds)
    }

    pub fn snapshot(&self) -> Vec<RippleState> {
        self.registry.snapshot()
    }

    /// Stop every running ripple and detach it immediately (surface torn
    /// down). Returns how many were cancelled.
    pub fn cancel_all(&mut self) -> usize {
        let cancelled = self.registry.clear();
        if cancelled > 0 {
            log::debug!("Cancelled {} in-flight ripples", cancelled);
        }
        cancelled
    }

    #[inline]
    pub fn active_count(&self) -> usize {
        self.registry.len()
    }

    /// No ripples in flight; the host can stop requesting frames
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.registry.is_empty()
    }
}

fn fire(callback: &mut Option<Callback>) {
    if let Some(cb) = callback.as_mut() {
        cb();
    }
}

/// Circle for one ripple: full-coverage radius scaled by spread, base color
/// faded by the ripple's opacity
fn draw_circle(ripple: &RippleState, bounds: &Rect, style: &RippleStyle) -> DrawCircle {
    let color = style.color.scale_alpha(ripple.fade);
    DrawCircle {
        center: ripple.origin,
        radius: coverage_radius(ripple.origin, bounds) * ripple.spread,
        color,
        alpha: color.a,
    }
}
