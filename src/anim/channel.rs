//! Sequential tween timelines
//!
//! A channel is a list of steps played back to back. Each step drives one
//! target (a key chosen by the owner). Several channels may drive the same
//! target; the owner resolves that by taking the step that started last.

use std::time::Duration;

use super::tween::Tween;

/// Value a channel currently writes to a target
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelSample {
    pub value: f32,
    /// Offset from the channel start at which the writing step began
    pub started: Duration,
}

#[derive(Debug, Clone)]
struct Step<K> {
    target: K,
    tween: Tween,
    /// Offset from the channel start
    start: Duration,
}

/// Tweens run one after another on a single timeline
#[derive(Debug, Clone)]
pub struct Channel<K> {
    steps: Vec<Step<K>>,
    total: Duration,
}

impl<K> Default for Channel<K> {
    fn default() -> Self {
        Self {
            steps: Vec::new(),
            total: Duration::ZERO,
        }
    }
}

impl<K: Copy + PartialEq> Channel<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a step that starts when the previous one finishes
    pub fn then(mut self, target: K, tween: Tween) -> Self {
        self.steps.push(Step {
            target,
            tween,
            start: self.total,
        });
        self.total += tween.duration();
        self
    }

    /// Time until the last step finishes
    #[inline]
    pub fn total_duration(&self) -> Duration {
        self.total
    }

    #[inline]
    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.total
    }

    /// Value written to `target` at `elapsed`, from the latest step driving
    /// that target which has already started. `None` until such a step starts.
    pub fn sample(&self, target: K, elapsed: Duration) -> Option<ChannelSample> {
        self.steps
            .iter()
            .rev()
            .find(|step| step.target == target && step.start <= elapsed)
            .map(|step| ChannelSample {
                value: step.tween.value_at(elapsed - step.start),
                started: step.start,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anim::Easing;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Key {
        A,
        B,
    }

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn linear(from: f32, to: f32, millis: u64) -> Tween {
        Tween::new("test", from, to, ms(millis))
            .unwrap()
            .with_easing(Easing::Linear)
    }

    #[test]
    fn test_steps_run_back_to_back() {
        let channel = Channel::new()
            .then(Key::A, linear(0.0, 1.0, 100))
            .then(Key::B, linear(1.0, 0.0, 200));
        assert_eq!(channel.total_duration(), ms(300));

        assert!(channel.sample(Key::B, ms(50)).is_none());
        let b = channel.sample(Key::B, ms(200)).unwrap();
        assert_eq!(b.started, ms(100));
        assert!((b.value - 0.5).abs() < 1e-4);

        // A holds its end value after its step is done
        assert_eq!(channel.sample(Key::A, ms(250)).unwrap().value, 1.0);
        assert!(!channel.is_finished(ms(299)));
        assert!(channel.is_finished(ms(300)));
    }

    #[test]
    fn test_later_step_on_same_target_takes_over() {
        let channel = Channel::new()
            .then(Key::A, linear(0.0, 1.0, 100))
            .then(Key::A, linear(1.0, 0.0, 100));
        assert!((channel.sample(Key::A, ms(50)).unwrap().value - 0.5).abs() < 1e-4);
        let late = channel.sample(Key::A, ms(150)).unwrap();
        assert_eq!(late.started, ms(100));
        assert!((late.value - 0.5).abs() < 1e-4);
    }

    #[test]
    fn test_empty_channel_is_finished() {
        let channel: Channel<Key> = Channel::new();
        assert!(channel.is_finished(Duration::ZERO));
        assert!(channel.sample(Key::A, ms(10)).is_none());
    }
}
