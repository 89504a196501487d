#![deny(missing_docs)]
#![deny(warnings)]

//! Entry point for the egui-based news check UI.
#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]
use std::sync::Arc;

use eframe::egui;
use newscheck::config;
use newscheck::egui_app::controller::EguiController;
use newscheck::egui_app::ui::{EguiApp, MIN_VIEWPORT_SIZE};
use newscheck::logging;
use newscheck::prediction::HttpPredictor;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(err) = logging::init() {
        eprintln!("Logging disabled: {err}");
    }

    let viewport = egui::ViewportBuilder::default()
        .with_title("Fake News Detector")
        .with_inner_size([820.0, 760.0])
        .with_min_inner_size(MIN_VIEWPORT_SIZE);
    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "newscheck",
        native_options,
        Box::new(|_cc| match build_app() {
            Ok(app) => Ok(Box::new(app)),
            Err(message) => Ok(Box::new(LaunchError { message })),
        }),
    )?;
    Ok(())
}

fn build_app() -> Result<EguiApp, String> {
    let settings =
        config::load_or_default().map_err(|err| format!("Failed to load config: {err}"))?;
    let predictor = HttpPredictor::new(&settings.predict);
    tracing::info!(endpoint = predictor.endpoint(), "Prediction endpoint configured");
    Ok(EguiApp::new(EguiController::new(Arc::new(predictor))))
}

/// Minimal fallback app to display initialization errors.
struct LaunchError {
    message: String,
}

impl eframe::App for LaunchError {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Failed to start UI");
                ui.label(&self.message);
            });
        });
    }
}
