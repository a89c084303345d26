use crate::glyph::Glyph;

pub const SPARK_ANGLE_OFFSET: f64 = 10.0; // degrees

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point at `radius` from `self` along `degrees`, measured clockwise from +x
    /// (y grows downwards).
    pub fn polar(self, radius: f64, degrees: f64) -> Self {
        let theta = degrees.to_radians();
        Self::new(
            self.x + radius * theta.cos(),
            self.y + radius * theta.sin(),
        )
    }

    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Insets {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

impl Insets {
    pub fn uniform(value: f64) -> Self {
        Self {
            top: value,
            left: value,
            bottom: value,
            right: value,
        }
    }
}

/// The host area the button occupies, in its own coordinate space.
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    pub width: f64,
    pub height: f64,
    pub insets: Insets,
    /// Image the host already shows; used when no normal image is given.
    pub image: Option<Glyph>,
}

impl Surface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            insets: Insets::default(),
            image: None,
        }
    }

    pub fn with_insets(mut self, insets: Insets) -> Self {
        self.insets = insets;
        self
    }

    pub fn with_image(mut self, image: Glyph) -> Self {
        self.image = Some(image);
        self
    }

    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    pub fn content_width(&self) -> f64 {
        (self.width - self.insets.left - self.insets.right).max(0.0)
    }

    pub fn content_height(&self) -> f64 {
        (self.height - self.insets.top - self.insets.bottom).max(0.0)
    }

    pub fn contains(&self, point: Point) -> bool {
        (0.0..=self.width).contains(&point.x) && (0.0..=self.height).contains(&point.y)
    }
}

/// Angle in degrees of the spark at `index` when `count` sparks share the circle.
pub fn spark_angle(index: usize, count: usize) -> f64 {
    let step = 360.0 / count.max(1) as f64;
    step * index as f64 + SPARK_ANGLE_OFFSET
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{a} != {b}");
    }

    #[test]
    fn test_polar_offsets_from_center() {
        let center = Point::new(50.0, 50.0);

        let east = center.polar(10.0, 0.0);
        assert_close(east.x, 60.0);
        assert_close(east.y, 50.0);

        let south = center.polar(10.0, 90.0);
        assert_close(south.x, 50.0);
        assert_close(south.y, 60.0);

        let far = center.polar(32.0, 217.0);
        assert_close((far.x - center.x).hypot(far.y - center.y), 32.0);
    }

    #[test]
    fn test_spark_angles_for_seven_sparks() {
        let step = 360.0 / 7.0;
        for index in 0..7 {
            assert_close(spark_angle(index, 7), step * index as f64 + 10.0);
        }
        assert_close(spark_angle(0, 7), 10.0);
    }

    #[test]
    fn test_content_width_subtracts_horizontal_insets() {
        let surface = Surface::new(100.0, 80.0).with_insets(Insets {
            top: 5.0,
            left: 10.0,
            bottom: 5.0,
            right: 15.0,
        });
        assert_close(surface.content_width(), 75.0);
        assert_close(surface.content_height(), 70.0);
        assert_eq!(surface.center(), Point::new(50.0, 40.0));
    }

    #[test]
    fn test_contains_is_bounded_by_surface() {
        let surface = Surface::new(40.0, 40.0);
        assert!(surface.contains(Point::new(0.0, 40.0)));
        assert!(!surface.contains(Point::new(-1.0, 10.0)));
        assert!(!surface.contains(Point::new(10.0, 41.0)));
    }
}
