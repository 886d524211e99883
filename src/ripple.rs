//! A single ripple and its animation timelines
//!
//! Each ripple owns two channels started at creation:
//! - spread 0.3 -> 1.0, followed by fade 1.0 -> 0.0
//! - fade 0.0 -> 1.0, alongside the spread
//!
//! Both write the fade value. The step that started last wins, so the quick
//! fade-in holds full opacity until the slow fade-out takes over. The ripple
//! completes once every channel has finished.

use std::time::Duration;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::anim::Channel;
use crate::error::RippleError;
use crate::settings::RippleTiming;

/// Identity of a ripple within its registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RippleId(pub u64);

/// Lifecycle of a ripple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RipplePhase {
    /// Constructed, not yet advanced
    Created,
    /// At least one channel still running
    Animating,
    /// Every channel finished (terminal)
    Completed,
}

/// Values a ripple's channels drive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Target {
    Spread,
    Fade,
}

/// Read-only view of a ripple, handed to renderers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RippleState {
    pub id: RippleId,
    pub origin: Vec2,
    /// Radius growth progress (0.3 to 1.0)
    pub spread: f32,
    /// Opacity (0 to 1)
    pub fade: f32,
    pub phase: RipplePhase,
}

/// One active ripple
#[derive(Debug, Clone)]
pub struct Ripple {
    id: RippleId,
    origin: Vec2,
    /// Host timestamp at creation
    started_at: Duration,
    channels: [Channel<Target>; 2],
    spread: f32,
    fade: f32,
    phase: RipplePhase,
}

impl Ripple {
    /// Start a ripple at `origin`, timed from `now`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDuration` for a zero duration and `InvalidTiming` for
    /// inconsistent timing (see [`RippleTiming::validate`]).
    pub fn new(id: RippleId, origin: Vec2, now: Duration, timing: &RippleTiming) -> Result<Self, RippleError> {
        Ok(Self {
            id,
            origin,
            started_at: now,
            channels: timing.channels()?,
            spread: timing.spread_start,
            fade: 0.0,
            phase: RipplePhase::Created,
        })
    }

    #[inline]
    pub fn id(&self) -> RippleId {
        self.id
    }

    #[inline]
    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    #[inline]
    pub fn started_at(&self) -> Duration {
        self.started_at
    }

    #[inline]
    pub fn spread(&self) -> f32 {
        self.spread
    }

    #[inline]
    pub fn fade(&self) -> f32 {
        self.fade
    }

    #[inline]
    pub fn phase(&self) -> RipplePhase {
        self.phase
    }

    #[inline]
    pub fn is_completed(&self) -> bool {
        self.phase == RipplePhase::Completed
    }

    /// Time from creation to completion
    pub fn lifetime(&self) -> Duration {
        self.channels
            .iter()
            .map(Channel::total_duration)
            .max()
            .unwrap_or_default()
    }

    /// Time since creation. Timestamps before creation count as zero.
    pub fn elapsed(&self, now: Duration) -> Duration {
        now.saturating_sub(self.started_at)
    }

    /// Move the channels to `now` and update spread, fade and phase.
    ///
    /// Returns the phase after the update. Once `Completed` the ripple no
    /// longer changes.
    pub fn advance(&mut self, now: Duration) -> RipplePhase {
        if self.phase == RipplePhase::Completed {
            return self.phase;
        }

        let elapsed = self.elapsed(now);
        if let Some(spread) = self.sample(Target::Spread, elapsed) {
            self.spread = spread;
        }
        if let Some(fade) = self.sample(Target::Fade, elapsed) {
            self.fade = fade;
        }

        self.phase = if self.channels.iter().all(|c| c.is_finished(elapsed)) {
            RipplePhase::Completed
        } else {
            RipplePhase::Animating
        };
        self.phase
    }

    /// Current value of `target`: the write from whichever step started last.
    /// On a tie the later channel wins.
    fn sample(&self, target: Target, elapsed: Duration) -> Option<f32> {
        self.channels
            .iter()
            .filter_map(|c| c.sample(target, elapsed))
            .max_by_key(|s| s.started)
            .map(|s| s.value)
    }

    pub fn state(&self) -> RippleState {
        RippleState {
            id: self.id,
            origin: self.origin,
            spread: self.spread,
            fade: self.fade,
            phase: self.phase,
        }
    }
}
