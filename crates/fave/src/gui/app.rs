use crate::config;
use crate::events::AppEvent;
use crate::gui::button::{self, Canvas, GlyphCache};
use crate::gui::delegate::AppDelegate;
use crate::gui::theme;
use fave_core::control::Command;
use fave_core::geometry::Point;
use fave_core::FaveButton;
use gtk::prelude::*;
use gtk4 as gtk;
use relm4::prelude::*;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

pub struct AppModel {
    pub button: Rc<RefCell<FaveButton>>,
    pub glyphs: Rc<RefCell<GlyphCache>>,
    pub delegate: Rc<AppDelegate>,
    pub canvas: Canvas,
    pub selected: bool,
    pub drawing_area: gtk::DrawingArea,
    ticking: Rc<Cell<bool>>,
}

#[derive(Debug)]
pub enum AppMsg {
    Click(Point),
    Command(Command),
    SelectionChanged(bool),
    ConfigReload,
}

impl From<AppEvent> for AppMsg {
    fn from(event: AppEvent) -> Self {
        match event {
            AppEvent::Command(c) => AppMsg::Command(c),
            AppEvent::ConfigReload => AppMsg::ConfigReload,
        }
    }
}

#[relm4::component(pub)]
impl SimpleComponent for AppModel {
    type Init = (
        config::Config,
        FaveButton,
        async_channel::Receiver<AppEvent>,
    );
    type Input = AppMsg;
    type Output = ();

    view! {
        #[root]
        #[name = "window"]
        gtk::ApplicationWindow {
            set_title: Some("Fave"),
            set_resizable: false,

            add_controller = gtk::EventControllerKey {
                connect_key_pressed[sender] => move |_, key, _, _| {
                    if key == gtk::gdk::Key::space || key == gtk::gdk::Key::Return {
                        sender.input(AppMsg::Command(Command::Toggle));
                        return glib::Propagation::Stop;
                    }
                    glib::Propagation::Proceed
                }
            },

            gtk::Box {
                set_orientation: gtk::Orientation::Vertical,

                #[name = "drawing_area"]
                gtk::DrawingArea {
                    set_content_width: model.canvas.pixels(),
                    set_content_height: model.canvas.pixels(),
                    add_css_class: "fave-canvas",

                    add_controller = gtk::GestureClick {
                        connect_released[sender] => move |_, _, x, y| {
                            sender.input(AppMsg::Click(Point::new(x, y)));
                        }
                    }
                },

                gtk::Label {
                    add_css_class: "fave-status",
                    #[watch]
                    set_label: if model.selected { "Favorite" } else { "Not a favorite" },
                }
            }
        }
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let (config, mut fave, rx) = init;

        theme::load_css();

        let delegate = Rc::new(AppDelegate::new(sender.clone(), config.dot_palette));
        fave.set_delegate(&delegate);

        let model = AppModel {
            glyphs: Rc::new(RefCell::new(GlyphCache::load(fave.icon().glyphs()))),
            canvas: Canvas::around(fave.surface()),
            selected: fave.is_selected(),
            button: Rc::new(RefCell::new(fave)),
            delegate,
            drawing_area: gtk::DrawingArea::default(),
            ticking: Rc::new(Cell::new(false)),
        };

        let widgets = view_output!();

        let mut model = model;
        model.drawing_area = widgets.drawing_area.clone();

        let (button_draw, glyphs_draw) = (model.button.clone(), model.glyphs.clone());
        widgets.drawing_area.set_draw_func(move |_, cr, _, _| {
            let fave = button_draw.borrow();
            let offset = Canvas::around(fave.surface()).offset;
            cr.translate(offset.x, offset.y);
            if let Err(e) = button::draw(cr, &fave.frame(), &glyphs_draw.borrow()) {
                log::error!("Drawing error: {}", e);
            }
        });

        let sender_clone = sender.clone();
        relm4::spawn(async move {
            while let Ok(event) = rx.recv().await {
                sender_clone.input(AppMsg::from(event));
            }
        });

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, _sender: ComponentSender<Self>) {
        match msg {
            AppMsg::Click(point) => {
                let mut fave = self.button.borrow_mut();
                if fave.surface().contains(self.canvas.to_button(point)) {
                    fave.toggle();
                }
            }
            AppMsg::Command(command) => {
                let mut fave = self.button.borrow_mut();
                match command.target() {
                    None => fave.toggle(),
                    Some((selected, animated)) => {
                        fave.set_selected(selected, animated);
                        // programmatic changes don't go through the delegate
                        self.selected = fave.is_selected();
                    }
                }
            }
            AppMsg::SelectionChanged(selected) => {
                self.selected = selected;
            }
            AppMsg::ConfigReload => self.reload(),
        }
        self.ensure_ticking();
        self.drawing_area.queue_draw();
    }
}

impl AppModel {
    /// Drive the button from the frame clock until it has nothing left to do.
    fn ensure_ticking(&self) {
        if self.ticking.get() || self.button.borrow().is_idle() {
            return;
        }
        self.ticking.set(true);

        let (button, ticking) = (self.button.clone(), self.ticking.clone());
        let last_frame = Cell::new(None::<i64>);
        self.drawing_area.add_tick_callback(move |area, clock| {
            let now = clock.frame_time();
            let dt = last_frame
                .replace(Some(now))
                .map_or(0, |prev| (now - prev).max(0));

            let mut fave = button.borrow_mut();
            let tick = fave.advance(Duration::from_micros(dt as u64));
            if tick.should_redraw {
                area.queue_draw();
            }

            if fave.is_idle() {
                ticking.set(false);
                glib::ControlFlow::Break
            } else {
                glib::ControlFlow::Continue
            }
        });
    }

    fn reload(&mut self) {
        let new_config = match config::load_config() {
            Ok(c) => c,
            Err(e) => {
                log::error!("Failed to reload config: {}", e);
                return;
            }
        };

        let mut fave = match button::build(&new_config.button, button::host_image()) {
            Ok(fave) => fave,
            Err(e) => {
                log::error!("Keeping current button, reloaded config is unusable: {}", e);
                return;
            }
        };

        fave.carry_over(&self.button.borrow());
        fave.set_delegate(&self.delegate);
        self.delegate.set_palette(new_config.dot_palette);

        *self.glyphs.borrow_mut() = GlyphCache::load(fave.icon().glyphs());
        self.canvas = Canvas::around(fave.surface());
        self.drawing_area.set_content_width(self.canvas.pixels());
        self.drawing_area.set_content_height(self.canvas.pixels());
        *self.button.borrow_mut() = fave;

        log::info!("Configuration reloaded");
    }
}
