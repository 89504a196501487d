//! egui renderer for the news check window.

mod analysis_form;
mod result_panel;
mod sample_cards;
mod status_bar;
pub mod style;

use std::time::Duration;

use eframe::egui::{self, RichText, Vec2};

use crate::egui_app::controller::EguiController;

/// Smallest window size that keeps the form usable.
pub const MIN_VIEWPORT_SIZE: Vec2 = Vec2::new(560.0, 520.0);
const PENDING_REPAINT_INTERVAL: Duration = Duration::from_millis(100);
const CONTENT_MAX_WIDTH: f32 = 760.0;

/// Renders the egui UI from the controller's state.
pub struct EguiApp {
    controller: EguiController,
    visuals_set: bool,
}

impl EguiApp {
    pub fn new(controller: EguiController) -> Self {
        Self {
            controller,
            visuals_set: false,
        }
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::dark();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }

    fn render_header(&self, ui: &mut egui::Ui) {
        let palette = style::palette();
        ui.add_space(12.0);
        ui.label(RichText::new("Fake News Detector").size(26.0).strong());
        ui.label(
            RichText::new("Paste a headline or article and check whether it looks fake or real.")
                .color(palette.text_muted),
        );
        ui.add_space(12.0);
    }
}

impl eframe::App for EguiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        self.controller.poll_background_jobs();

        self.render_status_bar(ctx);
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("main_scroll")
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.set_max_width(CONTENT_MAX_WIDTH);
                        ui.vertical(|ui| {
                            self.render_header(ui);
                            self.render_analysis_form(ui);
                            self.render_result_panel(ui);
                            self.render_sample_cards(ui);
                        });
                    });
                });
        });

        if self.controller.is_analysis_pending() {
            ctx.request_repaint_after(PENDING_REPAINT_INTERVAL);
        }
    }
}
