use fave::config;
use fave::gui::app::AppModel;
use fave::gui::button;
use fave::sys::runtime;
use gtk4 as gtk;
use relm4::prelude::*;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = config::load_or_setup();

    gtk::init()?;
    let fave = button::build(&config.button, button::host_image())?;

    let (tx, rx) = async_channel::bounded(32);

    // Start Background Services
    runtime::start_background_services(tx);

    let app = RelmApp::new("org.fave.Fave");

    app.run::<AppModel>((config, fave, rx));
    Ok(())
}
