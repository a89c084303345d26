use derive_more::{From, Into};
use palette::rgb::FromHexError;
use palette::{LinSrgba, Mix, Srgb, Srgba, WithAlpha};
use serde::{Deserialize, Serialize};
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, From, Into, DeserializeFromStr, SerializeDisplay)]
pub struct Color(Srgba<f64>);

#[derive(Debug, Error)]
pub enum ColorError {
    #[error("invalid hex color '{0}': {1}")]
    Hex(String, FromHexError),
}

impl Color {
    pub fn rgb8(red: u8, green: u8, blue: u8) -> Self {
        let rgb: Srgb<f64> = Srgb::<u8>::new(red, green, blue).into_format();
        Self(rgb.with_alpha(1.0))
    }

    pub fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self(Srgba::<f64>::new(red, green, blue, alpha))
    }

    pub fn components(&self) -> (f64, f64, f64, f64) {
        self.0.into_components()
    }

    /// Blend towards `to`; `progress` is clamped to `0.0..=1.0`. Mixing happens in
    /// linear light so midpoints don't go muddy.
    pub fn lerp(self, to: Color, progress: f64) -> Color {
        let progress = progress.clamp(0.0, 1.0);
        if progress <= 0.0 {
            return self;
        }
        if progress >= 1.0 {
            return to;
        }
        let from: LinSrgba<f64> = self.0.into_linear();
        let to: LinSrgba<f64> = to.0.into_linear();
        Self(Srgba::<f64>::from_linear(from.mix(to, progress)))
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let rgb: Srgb<u8> = s.parse().map_err(|e| ColorError::Hex(s.to_string(), e))?;
        Ok(Self::rgb8(rgb.red, rgb.green, rgb.blue))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rgb: Srgb<u8> = self.0.color.into_format();
        write!(f, "#{:02x}{:02x}{:02x}", rgb.red, rgb.green, rgb.blue)
    }
}

/// The two dot colors of one spark.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorPair {
    pub first: Color,
    pub second: Color,
}

impl ColorPair {
    pub fn new(first: Color, second: Color) -> Self {
        Self { first, second }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorScheme {
    pub normal: Color,
    pub selected: Color,
    pub dot_first: Color,
    pub dot_second: Color,
    pub circle_from: Color,
    pub circle_to: Color,
}

impl ColorScheme {
    pub fn for_state(&self, selected: bool) -> Color {
        if selected { self.selected } else { self.normal }
    }

    pub fn dot_pair(&self) -> ColorPair {
        ColorPair::new(self.dot_first, self.dot_second)
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            normal: Color::rgb8(137, 156, 167),
            selected: Color::rgb8(226, 38, 77),
            dot_first: Color::rgb8(152, 219, 236),
            dot_second: Color::rgb8(247, 188, 48),
            circle_from: Color::rgb8(221, 70, 136),
            circle_to: Color::rgb8(205, 143, 246),
        }
    }
}
