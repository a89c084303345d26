use crate::config::ButtonConfig;
use fave_core::geometry::Point;
use fave_core::glyph::IconName;
use fave_core::{FaveButton, FaveError, Glyph, Surface};
use gtk4 as gtk;

pub mod glyphs;
pub mod view;

pub use glyphs::GlyphCache;
pub use view::draw;

/// Ring and sparks reach past the button; the canvas leaves room for them.
pub const CANVAS_SCALE: f64 = 1.8;

pub fn build(config: &ButtonConfig, host_image: Option<Glyph>) -> Result<FaveButton, FaveError> {
    FaveButton::new(
        config.surface(host_image),
        config.normal_image.clone(),
        config.selected_image.clone(),
        config.colors,
    )
}

/// The image the host toolkit already shows for our windows, if any.
pub fn host_image() -> Option<Glyph> {
    gtk::Window::default_icon_name()
        .filter(|name| !name.is_empty())
        .map(|name| Glyph::Themed(IconName::new(name.as_str())))
}

/// Square drawing area with the button surface centered inside it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Canvas {
    pub size: f64,
    pub offset: Point,
}

impl Canvas {
    pub fn around(surface: &Surface) -> Self {
        let size = surface.width.max(surface.height) * CANVAS_SCALE;
        Self {
            size,
            offset: Point::new((size - surface.width) / 2.0, (size - surface.height) / 2.0),
        }
    }

    pub fn pixels(&self) -> i32 {
        self.size.ceil() as i32
    }

    pub fn to_button(&self, point: Point) -> Point {
        point.offset(-self.offset.x, -self.offset.y)
    }
}
