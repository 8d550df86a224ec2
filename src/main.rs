//! Sentinel-Q - attack-surface visualization console
//!
//! Binary entry point: sets up logging, the native window, and the wgpu
//! backend, then hands off to the application state.

use eframe::egui;

use sentinelq::SentinelApp;

/// Application entry point.
fn main() -> Result<(), eframe::Error> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Sentinel-Q")
            .with_inner_size([1280.0, 800.0]),
        renderer: eframe::Renderer::Wgpu,
        ..Default::default()
    };

    eframe::run_native(
        "Sentinel-Q",
        options,
        Box::new(|_cc| Ok(Box::new(SentinelApp::new()))),
    )
}
