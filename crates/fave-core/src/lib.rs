pub mod button;
pub mod color;
pub mod control;
pub mod easing;
pub mod geometry;
pub mod glyph;
pub mod layers;
mod macros;
pub mod schedule;
pub mod timeline;

pub use button::{FaveButton, FaveButtonDelegate, FaveError};
pub use color::{Color, ColorPair, ColorScheme};
pub use geometry::{Insets, Point, Surface};
pub use glyph::Glyph;
