//! Time-driven scalar animation
//!
//! `AnimatedValue` owns a single `f32` and at most one running timing.
//! Starting a new timing interrupts the running one; the caller learns about
//! it through the returned `AnimationEnd { finished: false }`. Progress is
//! only advanced by `tick(now)`, so callers control the clock.

use std::time::{Duration, Instant};

use crate::easing::Easing;

/// Identity of one started timing on an `AnimatedValue`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnimationId(u64);

/// Parameters for a single timed transition
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingConfig {
    /// Target value
    pub to: f32,
    /// Time from start to target
    pub duration: Duration,
    /// Curve applied to linear progress
    pub easing: Easing,
}

/// Reported once per started timing, either on completion or interruption
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationEnd {
    pub id: AnimationId,
    /// `true` if the target was reached, `false` if interrupted
    pub finished: bool,
}

#[derive(Debug, Clone)]
struct Timing {
    id: AnimationId,
    from: f32,
    to: f32,
    duration: Duration,
    easing: Easing,
    started_at: Instant,
}

impl Timing {
    /// Linear progress (0.0 to 1.0)
    fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }
}

/// A scalar that moves toward a target over time
#[derive(Debug, Clone)]
pub struct AnimatedValue {
    value: f32,
    running: Option<Timing>,
    next_id: u64,
}

impl AnimatedValue {
    pub fn new(value: f32) -> Self {
        Self {
            value,
            running: None,
            next_id: 0,
        }
    }

    /// Current value (as of the last tick)
    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn is_animating(&self) -> bool {
        self.running.is_some()
    }

    /// Id of the running timing, if any
    pub fn running_id(&self) -> Option<AnimationId> {
        self.running.as_ref().map(|t| t.id)
    }

    /// Target of the running timing, if any
    pub fn target(&self) -> Option<f32> {
        self.running.as_ref().map(|t| t.to)
    }

    /// Start a timing from the current value
    ///
    /// Returns the new id and, if a timing was already running, the
    /// interruption notice for it.
    pub fn start(&mut self, config: TimingConfig, now: Instant) -> (AnimationId, Option<AnimationEnd>) {
        let interrupted = self.stop();

        let id = AnimationId(self.next_id);
        self.next_id += 1;
        self.running = Some(Timing {
            id,
            from: self.value,
            to: config.to,
            duration: config.duration,
            easing: config.easing,
            started_at: now,
        });

        (id, interrupted)
    }

    /// Advance to `now`
    ///
    /// Returns `Some` exactly once per timing, when its target is reached.
    pub fn tick(&mut self, now: Instant) -> Option<AnimationEnd> {
        let timing = self.running.as_ref()?;
        let t = timing.progress(now);

        if t >= 1.0 {
            self.value = timing.to;
            let id = timing.id;
            self.running = None;
            return Some(AnimationEnd { id, finished: true });
        }

        let eased = timing.easing.apply(t);
        self.value = timing.from + (timing.to - timing.from) * eased;
        None
    }

    /// Interrupt the running timing, keeping the current value
    pub fn stop(&mut self) -> Option<AnimationEnd> {
        self.running.take().map(|timing| AnimationEnd {
            id: timing.id,
            finished: false,
        })
    }

    /// Interrupt any running timing and jump to `value`
    pub fn set_value(&mut self, value: f32) -> Option<AnimationEnd> {
        let interrupted = self.stop();
        self.value = value;
        interrupted
    }

    /// Derive a dependent value through a range mapping
    pub fn interpolate(&self, mapping: &Interpolation) -> f32 {
        mapping.map(self.value)
    }
}

impl Default for AnimatedValue {
    fn default() -> Self {
        Self::new(0.0)
    }
}

/// Linear mapping from an input range to an output range
///
/// Values outside the input range are extended along the same line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interpolation {
    pub input: (f32, f32),
    pub output: (f32, f32),
}

impl Interpolation {
    /// `[0, 1] -> [0, 1]`
    pub const IDENTITY: Self = Self {
        input: (0.0, 1.0),
        output: (0.0, 1.0),
    };

    pub fn new(input: (f32, f32), output: (f32, f32)) -> Self {
        Self { input, output }
    }

    pub fn map(&self, value: f32) -> f32 {
        let (in_start, in_end) = self.input;
        let (out_start, out_end) = self.output;
        let span = in_end - in_start;
        if span.abs() < f32::EPSILON {
            return out_start;
        }
        let t = (value - in_start) / span;
        out_start + (out_end - out_start) * t
    }
}

impl Default for Interpolation {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timing(to: f32, ms: u64, easing: Easing) -> TimingConfig {
        TimingConfig {
            to,
            duration: Duration::from_millis(ms),
            easing,
        }
    }

    #[test]
    fn test_linear_progress() {
        let t0 = Instant::now();
        let mut value = AnimatedValue::new(0.0);
        value.start(timing(1.0, 200, Easing::Linear), t0);

        assert!(value.tick(t0 + Duration::from_millis(50)).is_none());
        assert!((value.value() - 0.25).abs() < 1e-4);

        assert!(value.tick(t0 + Duration::from_millis(100)).is_none());
        assert!((value.value() - 0.5).abs() < 1e-4);
    }

    #[test]
    fn test_completion_snaps_to_target_once() {
        let t0 = Instant::now();
        let mut value = AnimatedValue::new(0.0);
        let (id, interrupted) = value.start(timing(1.0, 200, Easing::OutExpo), t0);
        assert!(interrupted.is_none());

        let end = value.tick(t0 + Duration::from_millis(250)).unwrap();
        assert_eq!(end, AnimationEnd { id, finished: true });
        assert_eq!(value.value(), 1.0);
        assert!(!value.is_animating());

        // Nothing more to report
        assert!(value.tick(t0 + Duration::from_millis(300)).is_none());
    }

    #[test]
    fn test_start_interrupts_running_timing() {
        let t0 = Instant::now();
        let mut value = AnimatedValue::new(0.0);
        let (first, _) = value.start(timing(1.0, 200, Easing::Linear), t0);
        value.tick(t0 + Duration::from_millis(100));

        let (second, interrupted) =
            value.start(timing(0.0, 200, Easing::Linear), t0 + Duration::from_millis(100));
        assert_ne!(first, second);
        assert_eq!(
            interrupted,
            Some(AnimationEnd {
                id: first,
                finished: false
            })
        );

        // The new timing starts from where the old one stopped
        value.tick(t0 + Duration::from_millis(200));
        assert!((value.value() - 0.25).abs() < 1e-4);
    }

    #[test]
    fn test_zero_duration_completes_on_first_tick() {
        let t0 = Instant::now();
        let mut value = AnimatedValue::new(0.3);
        let (id, _) = value.start(timing(0.0, 0, Easing::InQuad), t0);
        assert_eq!(value.tick(t0), Some(AnimationEnd { id, finished: true }));
        assert_eq!(value.value(), 0.0);
    }

    #[test]
    fn test_tick_before_start_holds_value() {
        let t0 = Instant::now();
        let mut value = AnimatedValue::new(0.0);
        value.start(timing(1.0, 200, Easing::Linear), t0 + Duration::from_millis(10));
        assert!(value.tick(t0).is_none());
        assert_eq!(value.value(), 0.0);
    }

    #[test]
    fn test_set_value_stops_animation() {
        let t0 = Instant::now();
        let mut value = AnimatedValue::new(0.0);
        let (id, _) = value.start(timing(1.0, 200, Easing::Linear), t0);
        let end = value.set_value(0.5);
        assert_eq!(end, Some(AnimationEnd { id, finished: false }));
        assert_eq!(value.value(), 0.5);
        assert!(value.tick(t0 + Duration::from_secs(1)).is_none());
    }

    #[test]
    fn test_interpolation() {
        assert_eq!(Interpolation::IDENTITY.map(0.42), 0.42);

        let half = Interpolation::new((0.0, 1.0), (0.0, 0.5));
        assert!((half.map(0.5) - 0.25).abs() < 1e-6);
        // Extends past the input range
        assert!((half.map(2.0) - 1.0).abs() < 1e-6);

        let degenerate = Interpolation::new((1.0, 1.0), (0.2, 0.8));
        assert_eq!(degenerate.map(5.0), 0.2);
    }
}
