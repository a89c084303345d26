use crate::color::{Color, ColorPair};
use crate::easing::Easing;
use crate::geometry::Point;
use crate::timeline::{Track, Tween};
use std::time::Duration;

pub const DOT_RADIUS_FACTORS: (f64, f64) = (0.0633, 0.04);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DotRadii {
    pub first: f64,
    pub second: f64,
}

impl DotRadii {
    /// Dot sizes scale with the button width.
    pub fn for_width(width: f64) -> Self {
        Self {
            first: width * DOT_RADIUS_FACTORS.0,
            second: width * DOT_RADIUS_FACTORS.1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dot {
    pub center: Point,
    pub radius: f64,
    pub color: Color,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SparkFrame {
    pub first: Dot,
    pub second: Dot,
    pub opacity: f64,
}

/// One radiating pair of concentric dots.
#[derive(Debug, Clone)]
pub struct Spark {
    origin: Point,
    angle: f64,
    colors: ColorPair,
    radii: DotRadii,
    born: Duration,
    distance: Track<f64>,
    reveal: Track<f64>,
    fade: Track<f64>,
    scale: Track<f64>,
}

impl Spark {
    pub fn create(
        origin: Point,
        radius: f64,
        colors: ColorPair,
        angle: f64,
        radii: DotRadii,
        at: Duration,
    ) -> Self {
        Self {
            origin,
            angle,
            colors,
            radii,
            born: at,
            distance: Track::new(radius),
            reveal: Track::new(0.0),
            fade: Track::new(1.0),
            scale: Track::new(1.0),
        }
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn colors(&self) -> ColorPair {
        self.colors
    }

    /// Push the dots out to `to_radius` while fading them in.
    pub fn animate_ignite_show(&mut self, to_radius: f64, duration: Duration, delay: Duration) {
        let start = self.born + delay;
        let from = self.distance.value(start);
        self.distance
            .push(Tween::new(from, to_radius, start, duration).eased(Easing::EaseOut));
        self.reveal
            .push(Tween::new(0.0, 1.0, start, duration).eased(Easing::EaseOut));
    }

    /// Shrink and fade the dots out. Once this finishes the spark is spent.
    pub fn animate_ignite_hide(&mut self, duration: Duration, delay: Duration) {
        let start = self.born + delay;
        self.fade
            .push(Tween::new(1.0, 0.0, start, duration).eased(Easing::EaseIn));
        self.scale
            .push(Tween::new(1.0, 0.0, start, duration).eased(Easing::EaseIn));
    }

    pub fn distance_at(&self, now: Duration) -> f64 {
        self.distance.value(now)
    }

    /// Show and hide may overlap; the visible opacity is their product.
    pub fn opacity_at(&self, now: Duration) -> f64 {
        self.reveal.value(now) * self.fade.value(now)
    }

    pub fn frame(&self, now: Duration) -> SparkFrame {
        let center = self.origin.polar(self.distance.value(now), self.angle);
        let scale = self.scale.value(now).max(0.0);
        SparkFrame {
            first: Dot {
                center,
                radius: self.radii.first * scale,
                color: self.colors.first,
            },
            second: Dot {
                center,
                radius: self.radii.second * scale,
                color: self.colors.second,
            },
            opacity: self.opacity_at(now),
        }
    }

    pub fn finish_time(&self) -> Duration {
        [&self.distance, &self.reveal, &self.fade, &self.scale]
            .into_iter()
            .filter_map(Track::end)
            .max()
            .unwrap_or(self.born)
    }

    pub fn is_finished(&self, now: Duration) -> bool {
        now >= self.finish_time()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::ColorScheme;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    fn spark() -> Spark {
        let mut spark = Spark::create(
            Point::new(50.0, 50.0),
            52.0,
            ColorScheme::default().dot_pair(),
            90.0,
            DotRadii::for_width(100.0),
            ms(1_000),
        );
        spark.animate_ignite_show(71.5, ms(400), ms(36));
        spark.animate_ignite_hide(ms(700), ms(200));
        spark
    }

    #[test]
    fn test_hidden_until_show_starts() {
        let spark = spark();
        assert_eq!(spark.opacity_at(ms(1_000)), 0.0);
        assert_eq!(spark.distance_at(ms(1_010)), 52.0);
        let frame = spark.frame(ms(1_000));
        assert!((frame.first.center.y - 102.0).abs() < 1e-9);
        assert_eq!(frame.first.center, frame.second.center);
    }

    #[test]
    fn test_moves_outwards_and_fades() {
        let spark = spark();
        assert_eq!(spark.distance_at(ms(1_436)), 71.5);
        assert!(spark.opacity_at(ms(1_300)) > 0.0);
        assert!(spark.opacity_at(ms(1_300)) < 1.0);

        let late = spark.frame(ms(1_899));
        assert!(late.first.radius < DotRadii::for_width(100.0).first);
        assert_eq!(spark.opacity_at(ms(1_900)), 0.0);
    }

    #[test]
    fn test_finishes_with_the_hide() {
        let spark = spark();
        assert_eq!(spark.finish_time(), ms(1_900));
        assert!(!spark.is_finished(ms(1_899)));
        assert!(spark.is_finished(ms(1_900)));
    }

    #[test]
    fn test_dot_radii_scale_with_width() {
        let radii = DotRadii::for_width(100.0);
        assert!((radii.first - 6.33).abs() < 1e-9);
        assert!((radii.second - 4.0).abs() < 1e-9);
    }
}
