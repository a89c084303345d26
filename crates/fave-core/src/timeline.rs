//! Tweens placed on the button's shared clock.
//!
//! Every start time is absolute (time since the button was created), so layers
//! created by the same transition stay in step no matter how the clock is driven.

use crate::color::Color;
use crate::easing::Easing;
use std::time::Duration;

pub trait Interpolate: Copy {
    fn interpolate(self, to: Self, progress: f64) -> Self;
}

impl Interpolate for f64 {
    fn interpolate(self, to: Self, progress: f64) -> Self {
        self * (1.0 - progress) + to * progress
    }
}

impl Interpolate for Color {
    fn interpolate(self, to: Self, progress: f64) -> Self {
        self.lerp(to, progress)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween<T> {
    pub from: T,
    pub to: T,
    pub start: Duration,
    pub duration: Duration,
    pub easing: Easing,
}

impl<T: Interpolate> Tween<T> {
    pub fn new(from: T, to: T, start: Duration, duration: Duration) -> Self {
        Self {
            from,
            to,
            start,
            duration,
            easing: Easing::default(),
        }
    }

    pub fn eased(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn end(&self) -> Duration {
        self.start + self.duration
    }

    /// Linear progress at `now`, before easing.
    pub fn progress(&self, now: Duration) -> f64 {
        if now < self.start {
            return 0.0;
        }
        if self.duration.is_zero() {
            return 1.0;
        }
        let local = (now - self.start).as_secs_f64();
        (local / self.duration.as_secs_f64()).min(1.0)
    }

    pub fn sample(&self, now: Duration) -> T {
        let progress = self.progress(now);
        if progress >= 1.0 {
            return self.to;
        }
        self.from.interpolate(self.to, self.easing.apply(progress))
    }

    pub fn is_finished(&self, now: Duration) -> bool {
        now >= self.end()
    }
}

/// One animated property: a resting value plus tweens chained after it.
///
/// At any instant the tween that started most recently wins; before the first
/// tween starts the resting value shows.
#[derive(Debug, Clone, PartialEq)]
pub struct Track<T> {
    rest: T,
    segments: Vec<Tween<T>>,
}

impl<T: Interpolate> Track<T> {
    pub fn new(rest: T) -> Self {
        Self {
            rest,
            segments: Vec::new(),
        }
    }

    pub fn push(&mut self, tween: Tween<T>) {
        let at = self
            .segments
            .iter()
            .position(|s| s.start > tween.start)
            .unwrap_or(self.segments.len());
        self.segments.insert(at, tween);
    }

    /// Drop pending tweens and hold `value` from now on.
    pub fn set(&mut self, value: T) {
        self.rest = value;
        self.segments.clear();
    }

    pub fn value(&self, now: Duration) -> T {
        self.segments
            .iter()
            .rev()
            .find(|s| s.start <= now)
            .map(|s| s.sample(now))
            .unwrap_or(self.rest)
    }

    pub fn end(&self) -> Option<Duration> {
        self.segments.iter().map(Tween::end).max()
    }

    pub fn is_finished(&self, now: Duration) -> bool {
        self.end().is_none_or(|end| now >= end)
    }
}
