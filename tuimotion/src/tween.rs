//! Timer-driven value tweening.
//!
//! A [`Tween`] holds the value a property is animating from, the target it is
//! animating to, and when it started. Sampling is pure: callers pass `now`,
//! so the same tween can be driven by the frame loop or stepped in tests.

use std::time::{Duration, Instant};

use crate::transitions::{Easing, TransitionConfig};
use crate::types::Rgb;

/// A value that can be interpolated.
pub trait Lerp: Copy + PartialEq {
    /// Value at `t` between `from` (0.0) and `to` (1.0).
    fn lerp(from: Self, to: Self, t: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(from: Self, to: Self, t: f32) -> Self {
        from + (to - from) * t
    }
}

impl Lerp for Rgb {
    fn lerp(from: Self, to: Self, t: f32) -> Self {
        from.mix(to, t)
    }
}

#[derive(Debug, Clone)]
pub struct Tween<T> {
    from: T,
    to: T,
    start: Option<Instant>,
    duration: Duration,
    easing: Easing,
}

impl<T: Lerp> Tween<T> {
    /// A tween settled at `value`.
    pub fn new(value: T) -> Self {
        Self {
            from: value,
            to: value,
            start: None,
            duration: Duration::ZERO,
            easing: Easing::Linear,
        }
    }

    /// The value this tween is heading to (or resting at).
    pub fn target(&self) -> T {
        self.to
    }

    /// Eased progress of the current run, 1.0 when settled.
    pub fn progress(&self, now: Instant) -> f32 {
        let Some(start) = self.start else {
            return 1.0;
        };
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(start);
        let linear = (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0);
        self.easing.apply(linear)
    }

    pub fn value(&self, now: Instant) -> T {
        let progress = self.progress(now);
        if progress >= 1.0 {
            self.to
        } else {
            T::lerp(self.from, self.to, progress)
        }
    }

    pub fn is_running(&self, now: Instant) -> bool {
        match self.start {
            Some(start) => now.saturating_duration_since(start) < self.duration,
            None => false,
        }
    }

    /// Animate toward `target`, starting from wherever the tween is at `now`.
    ///
    /// Retargeting mid-flight continues from the current interpolated value
    /// rather than the previous starting value.
    pub fn animate_to(&mut self, target: T, config: TransitionConfig, now: Instant) {
        if target == self.to {
            return;
        }

        if config.duration.is_zero() {
            self.snap_to(target);
            return;
        }

        self.from = self.value(now);
        self.to = target;
        self.start = Some(now);
        self.duration = config.duration;
        self.easing = config.easing;
    }

    /// Jump straight to `target`, cancelling any running animation.
    pub fn snap_to(&mut self, target: T) {
        self.from = target;
        self.to = target;
        self.start = None;
        self.duration = Duration::ZERO;
    }

    /// Drop bookkeeping for a finished run so `is_running` stays cheap.
    pub fn settle(&mut self, now: Instant) {
        if self.start.is_some() && !self.is_running(now) {
            self.snap_to(self.to);
        }
    }
}

impl<T: Lerp + Default> Default for Tween<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
