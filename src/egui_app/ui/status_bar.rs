use super::EguiApp;
use super::style;
use eframe::egui::{self, Frame, Margin, RichText};

impl EguiApp {
    pub(super) fn render_status_bar(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        let mut open_logs = false;
        egui::TopBottomPanel::bottom("status_bar")
            .frame(
                Frame::new()
                    .fill(palette.bg_secondary)
                    .inner_margin(Margin::symmetric(8, 4)),
            )
            .show(ctx, |ui| {
                let status = &self.controller.ui.status;
                ui.horizontal(|ui| {
                    let (rect, _) =
                        ui.allocate_exact_size(egui::vec2(14.0, 14.0), egui::Sense::hover());
                    ui.painter().circle_filled(
                        rect.center(),
                        6.0,
                        style::status_badge_color(status.tone),
                    );
                    ui.label(RichText::new(status.tone.badge_label()).strong());
                    ui.separator();
                    ui.label(&status.text);
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.small_button("Open logs").clicked() {
                            open_logs = true;
                        }
                    });
                });
            });
        if open_logs {
            self.controller.open_logs_folder();
        }
    }
}
