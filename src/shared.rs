//! Thread-safe ripple surface handle
//!
//! For hosts whose input callbacks run on a different thread than the
//! render loop. Every call takes the lock for its whole duration, so a frame
//! always sees the registry between mutations, never halfway through one.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use glam::Vec2;

use crate::controller::{GestureEvent, TouchRipple};
use crate::geometry::Rect;
use crate::render::DrawCircle;
use crate::ripple::{RippleId, RippleState};

/// Cloneable handle to a [`TouchRipple`] behind a mutex
#[derive(Debug, Clone)]
pub struct SharedTouchRipple {
    inner: Arc<Mutex<TouchRipple>>,
}

impl SharedTouchRipple {
    pub fn new(ripples: TouchRipple) -> Self {
        Self {
            inner: Arc::new(Mutex::new(ripples)),
        }
    }

    /// A panic elsewhere while holding the lock leaves the registry usable
    /// (every mutation is a single push or remove), so recover instead of
    /// propagating the poison into the tap handler.
    fn lock(&self) -> MutexGuard<'_, TouchRipple> {
        self.inner.lock().unwrap_or_else(|poisoned: PoisonError<_>| {
            log::warn!("Ripple surface lock poisoned, recovering");
            poisoned.into_inner()
        })
    }

    /// Run `f` with exclusive access
    pub fn with<R>(&self, f: impl FnOnce(&mut TouchRipple) -> R) -> R {
        f(&mut self.lock())
    }

    pub fn handle(&self, event: GestureEvent, now: Duration) -> Option<RippleId> {
        self.lock().handle(event, now)
    }

    pub fn tap(&self, point: Vec2, now: Duration) -> Option<RippleId> {
        self.lock().tap(point, now)
    }

    pub fn advance(&self, now: Duration) -> Vec<RippleId> {
        self.lock().advance(now)
    }

    pub fn frame(&self, bounds: &Rect) -> Vec<DrawCircle> {
        self.lock().frame(bounds)
    }

    pub fn tick(&self, now: Duration, bounds: &Rect) -> Vec<DrawCircle> {
        self.lock().tick(now, bounds)
    }

    pub fn snapshot(&self) -> Vec<RippleState> {
        self.lock().snapshot()
    }

    pub fn cancel_all(&self) -> usize {
        self.lock().cancel_all()
    }

    pub fn is_idle(&self) -> bool {
        self.lock().is_idle()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::RippleStyle;
    use std::thread;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn test_taps_from_another_thread() {
        let shared = SharedTouchRipple::new(TouchRipple::new(RippleStyle::default()).unwrap());
        let input = shared.clone();

        let handle = thread::spawn(move || {
            for i in 0..10 {
                input.tap(Vec2::new(i as f32 * 10.0, 5.0), ms(i * 10));
            }
        });

        let bounds = Rect::from_size(200.0, 200.0);
        // Frames taken while taps land are always whole
        for _ in 0..50 {
            let frame = shared.frame(&bounds);
            assert!(frame.len() <= 10);
        }
        handle.join().unwrap();

        assert_eq!(shared.snapshot().len(), 10);
        assert_eq!(shared.advance(ms(5000)).len(), 10);
        assert!(shared.is_idle());
    }

    #[test]
    fn test_recovers_from_poisoned_lock() {
        let shared = SharedTouchRipple::new(TouchRipple::new(RippleStyle::default()).unwrap());
        let poisoner = shared.clone();
        let result = thread::spawn(move || {
            let _: () = poisoner.with(|_| panic!("render thread crashed"));
        })
        .join();
        assert!(result.is_err());

        assert!(shared.tap(Vec2::new(1.0, 1.0), ms(0)).is_some());
        assert_eq!(shared.cancel_all(), 1);
    }
}
