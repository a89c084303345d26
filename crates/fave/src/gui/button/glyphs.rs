use fave_core::glyph::IconName;
use fave_core::Glyph;
use freedesktop_icons::lookup;
use gdk_pixbuf::Pixbuf;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub const ICON_SIZE: i32 = 256;

/// Pixbufs for the image-backed glyphs of one button. Shapes need none.
#[derive(Default)]
pub struct GlyphCache {
    pixbufs: HashMap<Glyph, Pixbuf>,
}

impl GlyphCache {
    pub fn load<'a>(glyphs: impl IntoIterator<Item = &'a Glyph>) -> Self {
        let pixbufs = glyphs
            .into_iter()
            .filter_map(|glyph| {
                let path = resolve_path(glyph)?;
                match Pixbuf::from_file_at_scale(&path, ICON_SIZE, ICON_SIZE, true) {
                    Ok(pixbuf) => Some((glyph.clone(), pixbuf)),
                    Err(e) => {
                        log::error!("Failed to load icon '{}': {}", path.display(), e);
                        None
                    }
                }
            })
            .collect();
        Self { pixbufs }
    }

    pub fn get(&self, glyph: &Glyph) -> Option<&Pixbuf> {
        self.pixbufs.get(glyph)
    }
}

pub fn resolve_path(glyph: &Glyph) -> Option<PathBuf> {
    match glyph {
        Glyph::Shape(_) => None,
        Glyph::File(path) => Some(path.clone()),
        Glyph::Themed(name) => {
            let found = find_icon_path(name);
            if found.is_none() {
                log::warn!("No icon named '{}' in the current theme", name);
            }
            found
        }
    }
}

pub fn find_icon_path(icon_name: &IconName) -> Option<PathBuf> {
    if icon_name.is_empty() {
        return None;
    }

    let path = Path::new(icon_name.as_str());
    if path.is_absolute() && path.exists() {
        return Some(path.to_path_buf());
    }

    lookup(icon_name.as_str())
        .with_size(512)
        .with_scale(1)
        .find()
}

#[cfg(test)]
mod tests {
    use super::*;
    use fave_core::glyph::Shape;

    #[test]
    fn test_shapes_need_no_file() {
        assert_eq!(resolve_path(&Glyph::Shape(Shape::Heart)), None);
        assert!(GlyphCache::load([&Glyph::Shape(Shape::Star)]).get(&Glyph::Shape(Shape::Star)).is_none());
    }

    #[test]
    fn test_files_resolve_to_themselves() {
        let glyph = Glyph::File(PathBuf::from("/tmp/like.png"));
        assert_eq!(resolve_path(&glyph), Some(PathBuf::from("/tmp/like.png")));
    }

    #[test]
    fn test_empty_icon_name_finds_nothing() {
        assert_eq!(find_icon_path(&IconName::new("")), None);
    }
}
