use super::model::FaveButton;
use crate::color::ColorPair;

/// Observer of a button. The button only keeps a `Weak` to it.
pub trait FaveButtonDelegate {
    /// Called once the selection animation has had its full duration.
    fn selection_changed(&self, button: &FaveButton, selected: bool);

    /// Colors for the sparks, handed out round-robin by spark index.
    /// `None` or an empty list falls back to the button's own dot colors.
    fn dot_colors(&self, _button: &FaveButton) -> Option<Vec<ColorPair>> {
        None
    }
}
