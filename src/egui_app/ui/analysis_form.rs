use super::EguiApp;
use super::style;
use crate::prediction::MIN_INPUT_CHARS;
use eframe::egui::{self, RichText};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum FormAction {
    None,
    Analyze,
    Clear,
}

impl EguiApp {
    /// Text input with the Analyze and Clear buttons.
    pub(super) fn render_analysis_form(&mut self, ui: &mut egui::Ui) {
        let palette = style::palette();
        let form = &mut self.controller.ui.analysis;
        let response = ui.add(
            egui::TextEdit::multiline(&mut form.input)
                .hint_text("Paste news text here…")
                .desired_rows(8)
                .desired_width(f32::INFINITY),
        );
        if form.focus_input_requested {
            response.request_focus();
            form.focus_input_requested = false;
        }
        let edited = response.changed();

        let chars = form.trimmed_chars();
        let count_color = if chars >= MIN_INPUT_CHARS {
            palette.text_muted
        } else {
            palette.warning
        };
        ui.label(
            RichText::new(format!("{chars} characters (minimum {MIN_INPUT_CHARS})"))
                .small()
                .color(count_color),
        );
        ui.add_space(6.0);

        let mut action = FormAction::None;
        let submit_enabled = form.submit_enabled;
        ui.horizontal(|ui| {
            if ui
                .add_enabled(
                    submit_enabled,
                    egui::Button::new(RichText::new("Analyze").strong()),
                )
                .clicked()
            {
                action = FormAction::Analyze;
            }
            if ui.button("Clear").clicked() {
                action = FormAction::Clear;
            }
        });

        if edited {
            self.controller.validate_input();
        }
        match action {
            FormAction::None => {}
            FormAction::Analyze => self.controller.analyze(),
            FormAction::Clear => self.controller.clear(),
        }
    }
}
