use crate::color::Color;
use crate::easing::Easing;
use crate::glyph::Glyph;
use crate::timeline::{Track, Tween};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconFrame<'a> {
    pub glyph: &'a Glyph,
    pub tint: Color,
    pub scale: f64,
}

/// The glyph that stays on screen for the whole life of the button.
#[derive(Debug, Clone)]
pub struct FaveIcon {
    normal: Glyph,
    selected: Option<Glyph>,
    tint: Track<Color>,
    scale: Track<f64>,
    // (when, show selected glyph from then on), and what showed before it
    swap: (Duration, bool),
    shown_before_swap: bool,
}

impl FaveIcon {
    pub fn create(icon: Glyph, color: Color, selected_icon: Option<Glyph>) -> Self {
        Self {
            normal: icon,
            selected: selected_icon,
            tint: Track::new(color),
            scale: Track::new(1.0),
            swap: (Duration::ZERO, false),
            shown_before_swap: false,
        }
    }

    pub fn normal_glyph(&self) -> &Glyph {
        &self.normal
    }

    pub fn glyphs(&self) -> impl Iterator<Item = &Glyph> {
        std::iter::once(&self.normal).chain(self.selected.as_ref())
    }

    /// Recolor (and swap glyph if a selected one exists) for the given state.
    ///
    /// With a zero `duration` the new look applies at `now`, with no tween.
    /// An animated select also springs the glyph in from nothing once `delay` passes.
    pub fn animate_select(
        &mut self,
        is_selected: bool,
        fill_color: Color,
        duration: Duration,
        delay: Duration,
        now: Duration,
    ) {
        let start = now + delay;
        self.shown_before_swap = self.shows_selected(now);

        if duration.is_zero() {
            self.tint.set(fill_color);
            self.scale.set(1.0);
            self.swap = (now, is_selected);
            return;
        }

        let current = self.tint.value(now);
        self.tint.set(current);
        self.tint
            .push(Tween::new(current, fill_color, start, duration).eased(Easing::EaseOut));

        self.scale.set(1.0);
        if is_selected {
            self.scale
                .push(Tween::new(0.0, 1.0, start, duration).eased(Easing::ElasticOut));
        }

        self.swap = (start, is_selected);
    }

    fn shows_selected(&self, now: Duration) -> bool {
        let (at, selected) = self.swap;
        if now >= at {
            selected
        } else {
            self.shown_before_swap
        }
    }

    fn glyph_for(&self, selected: bool) -> &Glyph {
        match (&self.selected, selected) {
            (Some(glyph), true) => glyph,
            _ => &self.normal,
        }
    }

    pub fn tint_at(&self, now: Duration) -> Color {
        self.tint.value(now)
    }

    pub fn frame(&self, now: Duration) -> IconFrame<'_> {
        IconFrame {
            glyph: self.glyph_for(self.shows_selected(now)),
            tint: self.tint.value(now),
            scale: self.scale.value(now),
        }
    }

    pub fn is_animating(&self, now: Duration) -> bool {
        !(self.tint.is_finished(now) && self.scale.is_finished(now) && now >= self.swap.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::ColorScheme;
    use crate::glyph::Shape;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    fn icon() -> FaveIcon {
        FaveIcon::create(
            Glyph::Shape(Shape::Star),
            ColorScheme::default().normal,
            Some(Glyph::Shape(Shape::Heart)),
        )
    }

    #[test]
    fn test_immediate_select_has_no_tween() {
        let colors = ColorScheme::default();
        let mut icon = icon();
        icon.animate_select(true, colors.selected, Duration::ZERO, Duration::ZERO, ms(500));

        let frame = icon.frame(ms(500));
        assert_eq!(frame.tint, colors.selected);
        assert_eq!(frame.scale, 1.0);
        assert_eq!(frame.glyph, &Glyph::Shape(Shape::Heart));
        assert!(!icon.is_animating(ms(500)));
    }

    #[test]
    fn test_delayed_select_keeps_old_look_until_delay() {
        let colors = ColorScheme::default();
        let mut icon = icon();
        icon.animate_select(true, colors.selected, ms(1_000), ms(184), ms(0));

        let early = icon.frame(ms(100));
        assert_eq!(early.tint, colors.normal);
        assert_eq!(early.scale, 1.0);
        assert_eq!(early.glyph, &Glyph::Shape(Shape::Star));

        let swapped = icon.frame(ms(184));
        assert_eq!(swapped.glyph, &Glyph::Shape(Shape::Heart));
        assert_eq!(swapped.scale, 0.0);

        let done = icon.frame(ms(1_184));
        assert_eq!(done.tint, colors.selected);
        assert_eq!(done.scale, 1.0);
        assert!(icon.is_animating(ms(1_000)));
        assert!(!icon.is_animating(ms(1_184)));
    }

    #[test]
    fn test_deselect_starts_right_away() {
        let colors = ColorScheme::default();
        let mut icon = icon();
        icon.animate_select(true, colors.selected, Duration::ZERO, Duration::ZERO, ms(0));
        icon.animate_select(false, colors.normal, ms(1_000), Duration::ZERO, ms(10));

        let frame = icon.frame(ms(10));
        assert_eq!(frame.glyph, &Glyph::Shape(Shape::Star));
        assert_eq!(frame.tint, colors.selected);
        assert_eq!(frame.scale, 1.0);
        assert_eq!(icon.tint_at(ms(1_010)), colors.normal);
    }

    #[test]
    fn test_without_selected_glyph_only_tint_changes() {
        let colors = ColorScheme::default();
        let mut icon = FaveIcon::create(Glyph::Shape(Shape::Heart), colors.normal, None);
        icon.animate_select(true, colors.selected, Duration::ZERO, Duration::ZERO, ms(0));
        assert_eq!(icon.frame(ms(0)).glyph, &Glyph::Shape(Shape::Heart));
        assert_eq!(icon.glyphs().count(), 1);
    }
}
