use super::EguiApp;
use super::style;
use crate::egui_app::state::{AnalysisPhase, PanelVariant};
use eframe::egui::{self, CornerRadius, Margin, RichText, Stroke};

const ANALYSIS_COMPLETED: &str = "Analysis completed successfully";
const ANALYSIS_BASIS: &str = "Based on AI analysis of text patterns and linguistic features";

/// Headline, sentence and optional detail lines for one panel state.
struct PanelContent<'a> {
    headline: &'a str,
    sentence: &'a str,
    details: Vec<String>,
}

fn panel_content(phase: &AnalysisPhase) -> Option<PanelContent<'_>> {
    match phase {
        AnalysisPhase::Idle => None,
        AnalysisPhase::Loading => Some(PanelContent {
            headline: "Analyzing...",
            sentence: "Please wait while we process your request",
            details: Vec::new(),
        }),
        AnalysisPhase::Result(prediction) => {
            let mut details = vec![ANALYSIS_COMPLETED.to_string()];
            if let Some(confidence) = &prediction.confidence {
                details.push(format!("Confidence: {confidence}"));
            }
            details.push(ANALYSIS_BASIS.to_string());
            Some(PanelContent {
                headline: &prediction.label,
                sentence: prediction.verdict.summary(),
                details,
            })
        }
        AnalysisPhase::Error(message) => Some(PanelContent {
            headline: "Error",
            sentence: message,
            details: Vec::new(),
        }),
    }
}

impl EguiApp {
    /// Verdict card shown below the form once an analysis has started.
    pub(super) fn render_result_panel(&mut self, ui: &mut egui::Ui) {
        let phase = &self.controller.ui.analysis.phase;
        let (Some(variant), Some(content)) = (phase.variant(), panel_content(phase)) else {
            return;
        };
        let palette = style::palette();
        let accent = style::variant_color(variant);

        ui.add_space(16.0);
        egui::Frame::new()
            .fill(style::variant_fill(variant))
            .stroke(Stroke::new(1.5, accent))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(Margin::same(16))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(style::variant_icon(variant))
                            .size(34.0)
                            .color(accent),
                    );
                    ui.add_space(10.0);
                    ui.vertical(|ui| {
                        ui.label(RichText::new(content.headline).size(22.0).strong());
                        ui.label(RichText::new(content.sentence).color(palette.text_primary));
                    });
                });
                if variant == PanelVariant::Loading {
                    ui.add_space(8.0);
                    ui.add(egui::Spinner::new().size(22.0));
                }
                if !content.details.is_empty() {
                    ui.add_space(8.0);
                    ui.separator();
                    let mut lines = content.details.iter();
                    if let Some(first) = lines.next() {
                        ui.label(RichText::new(first).color(palette.text_primary));
                    }
                    for line in lines {
                        ui.label(RichText::new(line).small().color(palette.text_muted));
                    }
                }
            });
    }
}
