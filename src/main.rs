#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
// Entry point stays minimal: window config and app startup only.
// All logic lives in the app module (src/app.rs).

use eframe::egui;

mod app;
mod logger;
mod standards;
mod types;
mod ui_constants;
mod views;

fn main() -> eframe::Result<()> {
    // Initialize in-app GUI logger (also mirrors to stderr when enabled)
    logger::init();
    app::settings::load_settings_from_disk();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1080.0, 760.0])
            .with_min_inner_size([560.0, 420.0])
            .with_resizable(true),
        ..Default::default()
    };

    let res = eframe::run_native(
        "PM Standards Hub",
        native_options,
        Box::new(|cc| {
            let zoom = { app::settings::APP_SETTINGS.read().unwrap().zoom };
            cc.egui_ctx.set_zoom_factor(zoom);
            Box::new(app::StandardsHubApp::default())
        }),
    );
    if let Err(ref e) = res {
        log::error!("eframe::run_native failed: {e}");
    }
    res
}
