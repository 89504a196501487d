use super::EguiApp;
use super::style;
use crate::samples::{self, SampleCard};
use eframe::egui::{self, CornerRadius, Margin, RichText, Stroke};

/// What a click on a sample card asked for. The card body and its "Try"
/// button are separate widgets, so one click yields at most one action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum SampleCardAction {
    Load(usize),
    Try(usize),
}

impl EguiApp {
    pub(super) fn render_sample_cards(&mut self, ui: &mut egui::Ui) {
        let palette = style::palette();
        ui.add_space(20.0);
        ui.label(RichText::new("Try a sample").size(16.0).strong());
        ui.label(
            RichText::new("Click a card to load it, or press Try to analyze it immediately.")
                .small()
                .color(palette.text_muted),
        );
        ui.add_space(6.0);

        let mut action = None;
        for (index, card) in samples::sample_cards().iter().enumerate() {
            ui.push_id(("sample_card", index), |ui| {
                if let Some(clicked) = render_card(ui, index, card) {
                    action = Some(clicked);
                }
            });
            ui.add_space(6.0);
        }

        match action.and_then(|action| resolve(action).map(|card| (action, card))) {
            Some((SampleCardAction::Load(_), card)) => self.controller.load_sample(card.text),
            Some((SampleCardAction::Try(_), card)) => {
                self.controller.load_sample_and_analyze(card.text)
            }
            None => {}
        }
    }
}

fn resolve(action: SampleCardAction) -> Option<&'static SampleCard> {
    match action {
        SampleCardAction::Load(index) | SampleCardAction::Try(index) => samples::sample_card(index),
    }
}

fn render_card(ui: &mut egui::Ui, index: usize, card: &SampleCard) -> Option<SampleCardAction> {
    let palette = style::palette();
    let mut action = None;
    egui::Frame::new()
        .fill(palette.bg_secondary)
        .stroke(Stroke::new(1.0, palette.panel_outline))
        .corner_radius(CornerRadius::same(6))
        .inner_margin(Margin::same(10))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(RichText::new(card.title).strong());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .button("Try")
                        .on_hover_text("Load this sample and analyze it")
                        .clicked()
                    {
                        action = Some(SampleCardAction::Try(index));
                    }
                });
            });
            let body = ui
                .add(
                    egui::Label::new(RichText::new(card.text).color(palette.text_muted))
                        .wrap()
                        .sense(egui::Sense::click()),
                )
                .on_hover_cursor(egui::CursorIcon::PointingHand)
                .on_hover_text("Load into the text box");
            if body.clicked() && action.is_none() {
                action = Some(SampleCardAction::Load(index));
            }
        });
    action
}
