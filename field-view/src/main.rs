//! Application entry point for the particle-field viewer.
//!
//! This binary loads the layered configuration, sets up eframe/egui and
//! delegates all interactive logic and rendering to [`Viewer`] from the
//! `viewer` module.

mod config;
mod viewer;

use config::AppConfig;
use viewer::Viewer;

/// Starts the native eframe application.
///
/// Configuration failures are logged and replaced by defaults; the only
/// hard errors left are eframe's own window and event-loop failures.
///
/// ### Returns
/// - `Ok(())` if the application runs to completion without errors.
/// - `Err` if eframe fails to create the native window or event loop.
fn main() -> eframe::Result<()> {
    env_logger::init();

    let config = AppConfig::load().unwrap_or_else(|e| {
        log::warn!("Failed to load config: {e}. Using defaults.");
        AppConfig::default()
    });

    log::info!(
        "starting {} with {} particles",
        config.window.title,
        config.field.particle_count
    );

    let title = config.window.title.clone();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([
            config.window.width as f32,
            config.window.height as f32,
        ]),
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| {
            // Construct the root app state for the viewer.
            Ok(Box::new(Viewer::new(config)))
        }),
    )
}
