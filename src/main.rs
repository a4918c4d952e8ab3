// Weekday Selector demo
// Main entry point

use weekday_selector::ui_egui::DemoApp;

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Weekday Selector demo v{}", env!("CARGO_PKG_VERSION"));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, 260.0])
            .with_min_inner_size([280.0, 200.0])
            .with_title("Weekday Selector"),
        ..Default::default()
    };

    eframe::run_native(
        "Weekday Selector",
        options,
        Box::new(|cc| Ok(Box::new(DemoApp::new(cc)))),
    )
}
