use eframe::egui::{
    Color32, Stroke, Visuals,
    epaint::{CornerRadius, Shadow},
    style::WidgetVisuals,
};

use crate::egui_app::state::{PanelVariant, StatusTone};

#[derive(Clone, Copy)]
pub struct Palette {
    pub bg_primary: Color32,
    pub bg_secondary: Color32,
    pub bg_tertiary: Color32,
    pub panel_outline: Color32,
    pub text_primary: Color32,
    pub text_muted: Color32,
    pub accent_ice: Color32,
    pub verdict_fake: Color32,
    pub verdict_real: Color32,
    pub verdict_unknown: Color32,
    pub warning: Color32,
}

pub fn palette() -> Palette {
    Palette {
        bg_primary: Color32::from_rgb(12, 13, 16),
        bg_secondary: Color32::from_rgb(24, 26, 30),
        bg_tertiary: Color32::from_rgb(40, 43, 48),
        panel_outline: Color32::from_rgb(52, 56, 62),
        text_primary: Color32::from_rgb(210, 214, 220),
        text_muted: Color32::from_rgb(140, 146, 155),
        accent_ice: Color32::from_rgb(167, 217, 255),
        verdict_fake: Color32::from_rgb(214, 69, 80),
        verdict_real: Color32::from_rgb(56, 176, 120),
        verdict_unknown: Color32::from_rgb(195, 165, 122),
        warning: Color32::from_rgb(242, 153, 74),
    }
}

pub fn apply_visuals(visuals: &mut Visuals) {
    let palette = palette();
    visuals.window_fill = palette.bg_primary;
    visuals.panel_fill = palette.bg_primary;
    visuals.override_text_color = Some(palette.text_primary);
    visuals.hyperlink_color = palette.accent_ice;
    visuals.extreme_bg_color = palette.bg_secondary;
    visuals.faint_bg_color = palette.bg_secondary;
    visuals.error_fg_color = palette.verdict_fake;
    visuals.warn_fg_color = palette.warning;
    visuals.selection.stroke = Stroke::new(1.0, palette.accent_ice);
    visuals.widgets.noninteractive.bg_fill = palette.bg_secondary;
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, palette.text_primary);
    for widget in [
        &mut visuals.widgets.inactive,
        &mut visuals.widgets.hovered,
        &mut visuals.widgets.active,
        &mut visuals.widgets.open,
    ] {
        set_widget(widget, palette);
    }
    visuals.window_corner_radius = CornerRadius::same(6);
    visuals.popup_shadow = Shadow::NONE;
}

fn set_widget(vis: &mut WidgetVisuals, palette: Palette) {
    vis.corner_radius = CornerRadius::same(4);
    vis.bg_fill = palette.bg_tertiary;
    vis.weak_bg_fill = palette.bg_tertiary;
    vis.bg_stroke = Stroke::new(1.0, palette.panel_outline);
    vis.fg_stroke = Stroke::new(1.0, palette.text_primary);
}

/// Accent color for a result panel variant.
pub fn variant_color(variant: PanelVariant) -> Color32 {
    let palette = palette();
    match variant {
        PanelVariant::Loading => palette.panel_outline,
        PanelVariant::Fake => palette.verdict_fake,
        PanelVariant::Real => palette.verdict_real,
        PanelVariant::Unknown => palette.verdict_unknown,
        PanelVariant::Error => palette.warning,
    }
}

/// Icon glyph drawn next to the result headline.
pub fn variant_icon(variant: PanelVariant) -> &'static str {
    match variant {
        PanelVariant::Loading | PanelVariant::Unknown => "?",
        PanelVariant::Fake => "⚠",
        PanelVariant::Real => "✔",
        PanelVariant::Error => "❗",
    }
}

/// Background tint for a panel, darkened toward the app background.
pub fn variant_fill(variant: PanelVariant) -> Color32 {
    let accent = variant_color(variant);
    let base = palette().bg_secondary;
    let mix = |a: u8, b: u8| ((a as u16 + 3 * b as u16) / 4) as u8;
    Color32::from_rgb(
        mix(accent.r(), base.r()),
        mix(accent.g(), base.g()),
        mix(accent.b(), base.b()),
    )
}

pub fn status_badge_color(tone: StatusTone) -> Color32 {
    match tone {
        StatusTone::Idle => Color32::from_rgb(42, 42, 42),
        StatusTone::Busy => Color32::from_rgb(31, 139, 255),
        StatusTone::Info => Color32::from_rgb(64, 140, 112),
        StatusTone::Warning => Color32::from_rgb(192, 138, 43),
        StatusTone::Error => Color32::from_rgb(192, 57, 43),
    }
}
