use crate::color::Color;
use crate::easing::Easing;
use crate::geometry::Point;
use crate::timeline::{Track, Tween};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingFrame {
    pub center: Point,
    pub radius: f64,
    pub line_width: f64,
    pub color: Color,
}

/// Circular stroke that grows out of the icon and collapses back into it.
#[derive(Debug, Clone)]
pub struct Ring {
    center: Point,
    line_width: f64,
    born: Duration,
    radius: Track<f64>,
    color: Track<Color>,
}

impl Ring {
    pub fn create(center: Point, radius: f64, line_width: f64, color: Color, at: Duration) -> Self {
        Self {
            center,
            line_width,
            born: at,
            radius: Track::new(radius),
            color: Track::new(color),
        }
    }

    pub fn animate_to_radius(
        &mut self,
        radius: f64,
        to_color: Color,
        duration: Duration,
        delay: Duration,
    ) {
        let start = self.born + delay;
        let from_radius = self.radius.value(start);
        let from_color = self.color.value(start);
        self.radius
            .push(Tween::new(from_radius, radius, start, duration).eased(Easing::EaseOut));
        self.color
            .push(Tween::new(from_color, to_color, start, duration).eased(Easing::EaseOut));
    }

    /// Shrink from `radius` down to nothing. Once this finishes the ring is spent.
    pub fn animate_collapse(&mut self, radius: f64, duration: Duration, delay: Duration) {
        let start = self.born + delay;
        self.radius
            .push(Tween::new(radius, 0.0, start, duration).eased(Easing::EaseIn));
    }

    pub fn radius_at(&self, now: Duration) -> f64 {
        self.radius.value(now)
    }

    pub fn color_at(&self, now: Duration) -> Color {
        self.color.value(now)
    }

    pub fn frame(&self, now: Duration) -> RingFrame {
        let radius = self.radius.value(now).max(0.0);
        RingFrame {
            center: self.center,
            radius,
            // never wider than the disc it outlines
            line_width: self.line_width.min(radius * 2.0),
            color: self.color.value(now),
        }
    }

    pub fn finish_time(&self) -> Duration {
        self.radius
            .end()
            .into_iter()
            .chain(self.color.end())
            .max()
            .unwrap_or(self.born)
    }

    pub fn is_finished(&self, now: Duration) -> bool {
        now >= self.finish_time()
    }
}
