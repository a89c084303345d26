use super::app::{AppModel, AppMsg};
use fave_core::{ColorPair, FaveButton, FaveButtonDelegate};
use relm4::ComponentSender;
use std::cell::RefCell;

/// Forwards settled selections to the app and supplies the configured spark palette.
pub struct AppDelegate {
    sender: ComponentSender<AppModel>,
    palette: RefCell<Vec<ColorPair>>,
}

impl AppDelegate {
    pub fn new(sender: ComponentSender<AppModel>, palette: Vec<ColorPair>) -> Self {
        Self {
            sender,
            palette: RefCell::new(palette),
        }
    }

    pub fn set_palette(&self, palette: Vec<ColorPair>) {
        *self.palette.borrow_mut() = palette;
    }
}

impl FaveButtonDelegate for AppDelegate {
    fn selection_changed(&self, _button: &FaveButton, selected: bool) {
        log::info!(
            "Selection settled: {}",
            if selected { "favorite" } else { "normal" }
        );
        self.sender.input(AppMsg::SelectionChanged(selected));
    }

    fn dot_colors(&self, _button: &FaveButton) -> Option<Vec<ColorPair>> {
        let palette = self.palette.borrow();
        (!palette.is_empty()).then(|| palette.clone())
    }
}
