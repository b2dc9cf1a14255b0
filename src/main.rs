use eframe::egui;

mod app;
mod catalog;
mod clipboard;
mod ui;

use app::DeckApp;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("DevCode Library")
            .with_inner_size([960.0, 720.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "DevCode Library",
        options,
        Box::new(|cc| Ok(Box::new(DeckApp::new(cc)))),
    )?;

    Ok(())
}
