//! Ordered collection of active ripples
//!
//! Insertion order is draw order. Renderers never iterate the live list:
//! `snapshot` hands out a copy, so attach/detach between frames can't tear
//! a render pass.

use std::time::Duration;

use glam::Vec2;

use crate::error::RippleError;
use crate::ripple::{Ripple, RippleId, RipplePhase, RippleState};
use crate::settings::RippleTiming;

#[derive(Debug, Clone)]
pub struct RippleRegistry {
    /// Active ripples in insertion order
    ripples: Vec<Ripple>,
    /// Next ripple ID
    next_id: u64,
}

impl Default for RippleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl RippleRegistry {
    pub fn new() -> Self {
        Self {
            ripples: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new ripple ID
    pub fn next_ripple_id(&mut self) -> RippleId {
        let id = RippleId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Construct a ripple with a fresh ID. Does not attach it.
    pub fn spawn(&mut self, origin: Vec2, now: Duration, timing: &RippleTiming) -> Result<Ripple, RippleError> {
        let id = self.next_ripple_id();
        Ripple::new(id, origin, now, timing)
    }

    /// Append a ripple. No deduplication.
    pub fn attach(&mut self, ripple: Ripple) {
        log::debug!("Ripple {:?} attached at {:?}", ripple.id(), ripple.origin());
        self.ripples.push(ripple);
    }

    /// Remove the ripple with this identity. Returns false if it wasn't
    /// present.
    pub fn detach(&mut self, id: RippleId) -> bool {
        match self.ripples.iter().position(|r| r.id() == id) {
            Some(index) => {
                // `remove`, not `swap_remove`: draw order must survive
                self.ripples.remove(index);
                log::debug!("Ripple {:?} detached ({} active)", id, self.ripples.len());
                true
            }
            None => false,
        }
    }

    /// Advance every ripple to `now`. Returns the IDs that are completed,
    /// in registry order. Completed ripples stay attached until detached.
    pub fn advance(&mut self, now: Duration) -> Vec<RippleId> {
        let mut completed = Vec::new();
        for ripple in &mut self.ripples {
            if ripple.advance(now) == RipplePhase::Completed {
                completed.push(ripple.id());
            }
        }
        completed
    }

    /// Copy of the active ripples in insertion order
    pub fn snapshot(&self) -> Vec<RippleState> {
        self.ripples.iter().map(Ripple::state).collect()
    }

    pub fn get(&self, id: RippleId) -> Option<&Ripple> {
        self.ripples.iter().find(|r| r.id() == id)
    }

    pub fn contains(&self, id: RippleId) -> bool {
        self.get(id).is_some()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.ripples.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ripples.is_empty()
    }

    /// Drop every ripple. Returns how many were removed.
    pub fn clear(&mut self) -> usize {
        let removed = self.ripples.len();
        self.ripples.clear();
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn spawn_at(registry: &mut RippleRegistry, x: f32, y: f32, now: Duration) -> RippleId {
        let ripple = registry
            .spawn(Vec2::new(x, y), now, &RippleTiming::default())
            .unwrap();
        let id = ripple.id();
        registry.attach(ripple);
        id
    }

    #[test]
    fn test_snapshot_keeps_insertion_order() {
        let mut registry = RippleRegistry::new();
        let a = spawn_at(&mut registry, 1.0, 1.0, ms(0));
        let b = spawn_at(&mut registry, 2.0, 2.0, ms(0));
        let c = spawn_at(&mut registry, 3.0, 3.0, ms(0));
        registry.detach(b);

        let ids: Vec<_> = registry.snapshot().iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![a, c]);
    }

    #[test]
    fn test_detach_absent_is_noop() {
        let mut registry = RippleRegistry::new();
        let a = spawn_at(&mut registry, 1.0, 1.0, ms(0));
        assert!(registry.detach(a));
        assert!(!registry.detach(a));
        assert!(!registry.detach(RippleId(999)));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_detach_is_identity_based() {
        let mut registry = RippleRegistry::new();
        // Same origin and time: equal values, different identities
        let a = spawn_at(&mut registry, 5.0, 5.0, ms(0));
        let b = spawn_at(&mut registry, 5.0, 5.0, ms(0));
        assert_ne!(a, b);
        registry.detach(a);
        assert_eq!(registry.len(), 1);
        assert!(registry.contains(b));
    }

    #[test]
    fn test_snapshot_is_a_copy() {
        let mut registry = RippleRegistry::new();
        spawn_at(&mut registry, 1.0, 1.0, ms(0));
        let frame = registry.snapshot();
        registry.clear();
        // The frame already taken is unaffected
        assert_eq!(frame.len(), 1);
        assert!(registry.snapshot().is_empty());
    }

    #[test]
    fn test_advance_reports_completed() {
        let mut registry = RippleRegistry::new();
        let early = spawn_at(&mut registry, 1.0, 1.0, ms(0));
        let late = spawn_at(&mut registry, 2.0, 2.0, ms(500));

        assert!(registry.advance(ms(400)).is_empty());
        assert_eq!(registry.advance(ms(750)), vec![early]);
        assert_eq!(registry.advance(ms(1250)), vec![early, late]);
    }
}
