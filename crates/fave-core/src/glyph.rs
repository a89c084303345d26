use derive_more::{AsRef, Deref, Display, From, Into};
use serde::{Deserialize, Deserializer, de};
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use strum::{Display as StrumDisplay, EnumIter, EnumString};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Deref, From, Into, AsRef)]
pub struct IconName(String);

crate::impl_string_newtype!(IconName);

/// Vector shapes drawn without any image asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, EnumIter, StrumDisplay)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum Shape {
    Heart,
    Star,
}

/// What the icon layer shows. Parsed from config strings:
/// a shape name, a path (anything with a `/` or a leading `~`), or a themed icon name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, DeserializeFromStr, SerializeDisplay)]
pub enum Glyph {
    Shape(Shape),
    Themed(IconName),
    File(PathBuf),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GlyphError {
    #[error("glyph must not be empty")]
    Empty,
}

impl FromStr for Glyph {
    type Err = GlyphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(GlyphError::Empty);
        }
        if let Ok(shape) = s.parse::<Shape>() {
            return Ok(Self::Shape(shape));
        }
        if s.contains('/') || s.starts_with('~') {
            return Ok(Self::File(expand_home(s)));
        }
        Ok(Self::Themed(IconName::new(s)))
    }
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Shape(shape) => write!(f, "{shape}"),
            Self::Themed(name) => write!(f, "{name}"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

impl From<Shape> for Glyph {
    fn from(shape: Shape) -> Self {
        Self::Shape(shape)
    }
}

/// For optional glyph fields: an absent, empty or blank value means no glyph.
pub fn deserialize_optional<'de, D>(deserializer: D) -> Result<Option<Glyph>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)?.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s.parse().map(Some).map_err(de::Error::custom),
    }
}

fn expand_home(s: &str) -> PathBuf {
    match (s.strip_prefix("~/"), std::env::var_os("HOME")) {
        (Some(rest), Some(home)) => PathBuf::from(home).join(rest),
        _ => PathBuf::from(s),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_parsing() {
        let cases = vec![
            ("heart", Glyph::Shape(Shape::Heart)),
            ("HEART", Glyph::Shape(Shape::Heart)),
            (" Star ", Glyph::Shape(Shape::Star)),
            (
                "emblem-favorite",
                Glyph::Themed(IconName::new("emblem-favorite")),
            ),
            (
                "/usr/share/icons/like.png",
                Glyph::File(PathBuf::from("/usr/share/icons/like.png")),
            ),
            ("icons/like.svg", Glyph::File(PathBuf::from("icons/like.svg"))),
        ];

        for (input, expected) in cases {
            assert_eq!(input.parse::<Glyph>().unwrap(), expected, "{input}");
        }
    }

    #[test]
    fn test_empty_glyph_is_rejected() {
        assert_eq!("   ".parse::<Glyph>(), Err(GlyphError::Empty));
    }

    #[test]
    fn test_glyph_deserialization() {
        let glyph: Glyph = serde_json::from_str("\"star\"").unwrap();
        assert_eq!(glyph, Glyph::Shape(Shape::Star));
        assert_eq!(serde_json::to_string(&glyph).unwrap(), "\"star\"");
    }

    #[test]
    fn test_optional_glyph_treats_blank_as_none() {
        #[derive(Deserialize)]
        struct Images {
            #[serde(default, deserialize_with = "deserialize_optional")]
            selected: Option<Glyph>,
        }

        let parse = |json: &str| serde_json::from_str::<Images>(json).unwrap().selected;
        assert_eq!(parse(r#"{"selected": ""}"#), None);
        assert_eq!(parse(r#"{"selected": "  "}"#), None);
        assert_eq!(parse(r#"{"selected": null}"#), None);
        assert_eq!(parse("{}"), None);
        assert_eq!(parse(r#"{"selected": "star"}"#), Some(Glyph::Shape(Shape::Star)));
    }
}
