use super::delegate::FaveButtonDelegate;
use super::frame::ButtonFrame;
use super::{
    COLLAPSE_DURATION, DURATION, EXPAND_DURATION, ICON_SHOW_DELAY, IGNITE_FROM_FACTOR,
    IGNITE_TO_FACTOR, RING_LINE_WIDTH, RING_RADIUS_FACTOR, RING_SEED_RADIUS, SPARK_GROUP_COUNT,
    SPARK_HIDE_DELAY, SPARK_HIDE_DURATION, SPARK_SHOW_DELAY, SPARK_SHOW_DURATION,
};
use crate::color::{ColorPair, ColorScheme};
use crate::geometry::{self, Surface};
use crate::glyph::Glyph;
use crate::layers::{DotRadii, FaveIcon, Ring, Spark};
use crate::schedule::OneShot;
use std::fmt;
use std::rc::{Rc, Weak};
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FaveError {
    #[error("no image for the normal state: configure one or give the surface an image")]
    MissingNormalImage,
}

/// Result of advancing the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tick {
    pub should_redraw: bool,
    pub notified: bool,
}

/// The favorite toggle: owns the icon, the short-lived ring and sparks, and the
/// clock they all run on.
///
/// Nothing here reads wall time. The host calls [`FaveButton::advance`] once per
/// frame; layers are pruned and the delegate is told about selection changes
/// from inside that call.
pub struct FaveButton {
    surface: Surface,
    colors: ColorScheme,
    spark_group_count: usize,
    selected: bool,
    clock: Duration,
    icon: FaveIcon,
    ring: Option<Ring>,
    sparks: Vec<Spark>,
    delegate: Option<Weak<dyn FaveButtonDelegate>>,
    notification: OneShot<bool>,
}

impl FaveButton {
    /// Fails when there is no normal image at all, neither passed in nor on the surface.
    pub fn new(
        surface: Surface,
        normal_image: Option<Glyph>,
        selected_image: Option<Glyph>,
        colors: ColorScheme,
    ) -> Result<Self, FaveError> {
        let normal_image = normal_image
            .or_else(|| surface.image.clone())
            .ok_or(FaveError::MissingNormalImage)?;

        Ok(Self {
            icon: FaveIcon::create(normal_image, colors.normal, selected_image),
            surface,
            colors,
            spark_group_count: SPARK_GROUP_COUNT,
            selected: false,
            clock: Duration::ZERO,
            ring: None,
            sparks: Vec::new(),
            delegate: None,
            notification: OneShot::default(),
        })
    }

    pub fn set_delegate<D: FaveButtonDelegate + 'static>(&mut self, delegate: &Rc<D>) {
        let delegate = Rc::downgrade(delegate) as Weak<dyn FaveButtonDelegate>;
        self.delegate = Some(delegate);
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn spark_group_count(&self) -> usize {
        self.spark_group_count
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn icon(&self) -> &FaveIcon {
        &self.icon
    }

    pub fn ring(&self) -> Option<&Ring> {
        self.ring.as_ref()
    }

    pub fn sparks(&self) -> &[Spark] {
        &self.sparks
    }

    pub fn elapsed(&self) -> Duration {
        self.clock
    }

    pub fn notification_due(&self) -> Option<Duration> {
        self.notification.due()
    }

    pub fn ring_radius(&self) -> f64 {
        self.surface.content_width() * RING_RADIUS_FACTOR
    }

    /// Flip the selection with the full animation, then tell the delegate
    /// `DURATION` later. A toggle before that replaces the pending notice.
    pub fn toggle(&mut self) {
        let selected = !self.selected;
        self.transition(selected, true);

        let due = self.clock + DURATION;
        if self.notification.schedule(due, selected).is_some() {
            log::debug!("Replaced pending selection notice");
        }
    }

    /// Programmatic selection. Never notifies the delegate.
    pub fn set_selected(&mut self, selected: bool, animated: bool) {
        if selected == self.selected {
            return;
        }
        self.transition(selected, animated);
    }

    /// Spark colors for `index`: the delegate's list round-robin, else the dot colors.
    pub fn dot_colors(&self, index: usize) -> ColorPair {
        Self::pick(self.delegate_palette().as_deref(), index)
            .unwrap_or_else(|| self.colors.dot_pair())
    }

    pub fn advance(&mut self, dt: Duration) -> Tick {
        let was_animating = self.is_animating();
        self.clock += dt;
        let now = self.clock;

        self.sparks.retain(|spark| !spark.is_finished(now));
        if self.ring.as_ref().is_some_and(|ring| ring.is_finished(now)) {
            self.ring = None;
        }

        let notified = self
            .notification
            .poll(now)
            .is_some_and(|selected| self.notify(selected));

        Tick {
            should_redraw: was_animating || self.is_animating(),
            notified,
        }
    }

    pub fn is_animating(&self) -> bool {
        self.ring.is_some() || !self.sparks.is_empty() || self.icon.is_animating(self.clock)
    }

    /// Nothing left to draw or deliver; the host can stop advancing the clock.
    pub fn is_idle(&self) -> bool {
        !self.is_animating() && !self.notification.is_pending()
    }

    /// Take over the selection of a button this one replaces, without animating,
    /// along with any delegate notice it still owed.
    pub fn carry_over(&mut self, previous: &FaveButton) {
        self.set_selected(previous.selected, false);
        if let Some((due, selected)) = previous.notification.peek() {
            let remaining = due.saturating_sub(previous.clock);
            self.notification.schedule(self.clock + remaining, selected);
        }
    }

    pub fn frame(&self) -> ButtonFrame<'_> {
        let now = self.clock;
        ButtonFrame {
            center: self.surface.center(),
            icon_size: self
                .surface
                .content_width()
                .min(self.surface.content_height()),
            icon: self.icon.frame(now),
            ring: self.ring.as_ref().map(|ring| ring.frame(now)),
            sparks: self.sparks.iter().map(|spark| spark.frame(now)).collect(),
        }
    }

    fn transition(&mut self, selected: bool, animated: bool) {
        log::debug!(
            "Fave button {} ({})",
            if selected { "selected" } else { "deselected" },
            if animated { "animated" } else { "immediate" }
        );

        self.selected = selected;
        self.release_layers();

        let color = self.colors.for_state(selected);
        let now = self.clock;

        if !animated {
            self.icon
                .animate_select(selected, color, Duration::ZERO, Duration::ZERO, now);
            return;
        }

        let delay = if selected {
            ICON_SHOW_DELAY
        } else {
            Duration::ZERO
        };
        self.icon.animate_select(selected, color, DURATION, delay, now);

        if selected {
            self.ignite();
        }
    }

    fn ignite(&mut self) {
        let radius = self.ring_radius();
        let ignite_to = radius * IGNITE_TO_FACTOR;

        let mut ring = Ring::create(
            self.surface.center(),
            RING_SEED_RADIUS,
            RING_LINE_WIDTH,
            self.colors.circle_from,
            self.clock,
        );
        ring.animate_to_radius(radius, self.colors.circle_to, EXPAND_DURATION, Duration::ZERO);
        ring.animate_collapse(radius, COLLAPSE_DURATION, EXPAND_DURATION);
        self.ring = Some(ring);

        self.sparks = self.create_sparks(radius * IGNITE_FROM_FACTOR);
        for spark in &mut self.sparks {
            spark.animate_ignite_show(ignite_to, SPARK_SHOW_DURATION, SPARK_SHOW_DELAY);
            spark.animate_ignite_hide(SPARK_HIDE_DURATION, SPARK_HIDE_DELAY);
        }
    }

    fn create_sparks(&self, radius: f64) -> Vec<Spark> {
        let palette = self.delegate_palette();
        let radii = DotRadii::for_width(self.surface.width);
        let center = self.surface.center();

        (0..self.spark_group_count)
            .map(|index| {
                let colors = Self::pick(palette.as_deref(), index)
                    .unwrap_or_else(|| self.colors.dot_pair());
                let angle = geometry::spark_angle(index, self.spark_group_count);
                Spark::create(center, radius, colors, angle, radii, self.clock)
            })
            .collect()
    }

    fn release_layers(&mut self) {
        self.ring = None;
        self.sparks.clear();
    }

    fn delegate(&self) -> Option<Rc<dyn FaveButtonDelegate>> {
        self.delegate.as_ref()?.upgrade()
    }

    fn delegate_palette(&self) -> Option<Vec<ColorPair>> {
        self.delegate()?
            .dot_colors(self)
            .filter(|colors| !colors.is_empty())
    }

    fn pick(palette: Option<&[ColorPair]>, index: usize) -> Option<ColorPair> {
        palette.map(|colors| colors[index % colors.len()])
    }

    fn notify(&self, selected: bool) -> bool {
        match self.delegate() {
            Some(delegate) => {
                log::trace!("Notifying delegate: selected = {}", selected);
                delegate.selection_changed(self, selected);
                true
            }
            None => false,
        }
    }
}

impl fmt::Debug for FaveButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FaveButton")
            .field("selected", &self.selected)
            .field("clock", &self.clock)
            .field("ring", &self.ring.is_some())
            .field("sparks", &self.sparks.len())
            .field("notification", &self.notification.due())
            .finish_non_exhaustive()
    }
}
