use crate::egui_app::state::StatusTone;
use crate::form::Severity;
use eframe::egui::{
    Color32, Stroke, Visuals,
    epaint::{CornerRadius, Shadow},
    style::WidgetVisuals,
};

#[derive(Clone, Copy)]
pub struct Palette {
    pub bg_primary: Color32,
    pub bg_secondary: Color32,
    pub bg_tertiary: Color32,
    pub panel_outline: Color32,
    pub grid_soft: Color32,
    pub text_primary: Color32,
    pub text_muted: Color32,
    pub accent_moss: Color32,
    pub accent_ice: Color32,
    pub warning: Color32,
    pub danger: Color32,
    pub success: Color32,
}

pub fn palette() -> Palette {
    Palette {
        bg_primary: Color32::from_rgb(12, 13, 12),
        bg_secondary: Color32::from_rgb(24, 27, 25),
        bg_tertiary: Color32::from_rgb(40, 44, 41),
        panel_outline: Color32::from_rgb(44, 50, 46),
        grid_soft: Color32::from_rgb(30, 34, 31),
        text_primary: Color32::from_rgb(196, 202, 194),
        text_muted: Color32::from_rgb(142, 150, 140),
        accent_moss: Color32::from_rgb(150, 196, 120),
        accent_ice: Color32::from_rgb(167, 217, 255),
        warning: Color32::from_rgb(214, 172, 92),
        danger: Color32::from_rgb(214, 96, 84),
        success: Color32::from_rgb(102, 176, 136),
    }
}

pub fn apply_visuals(visuals: &mut Visuals) {
    let palette = palette();
    visuals.window_fill = palette.bg_primary;
    visuals.panel_fill = palette.bg_secondary;
    visuals.override_text_color = Some(palette.text_primary);
    visuals.hyperlink_color = palette.accent_ice;
    visuals.extreme_bg_color = palette.bg_primary;
    visuals.faint_bg_color = palette.bg_secondary;
    visuals.error_fg_color = palette.danger;
    visuals.warn_fg_color = palette.warning;
    visuals.selection.bg_fill = palette.grid_soft;
    visuals.selection.stroke = Stroke::new(1.0, palette.accent_moss);
    visuals.widgets.noninteractive.bg_fill = palette.bg_secondary;
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, palette.text_primary);
    for widget in [
        &mut visuals.widgets.inactive,
        &mut visuals.widgets.hovered,
        &mut visuals.widgets.active,
        &mut visuals.widgets.open,
    ] {
        set_rectilinear(widget, palette);
    }
    visuals.window_corner_radius = CornerRadius::ZERO;
    visuals.menu_corner_radius = CornerRadius::ZERO;
    visuals.popup_shadow = Shadow::NONE;
}

fn set_rectilinear(vis: &mut WidgetVisuals, palette: Palette) {
    vis.corner_radius = CornerRadius::ZERO;
    vis.bg_fill = palette.bg_tertiary;
    vis.weak_bg_fill = palette.grid_soft;
    vis.bg_stroke = Stroke::new(1.0, palette.panel_outline);
    vis.fg_stroke = Stroke::new(1.0, palette.text_primary);
}

pub fn section_stroke() -> Stroke {
    Stroke::new(1.0, palette().panel_outline)
}

pub fn card_fill() -> Color32 {
    palette().bg_secondary
}

pub fn status_badge_color(tone: StatusTone) -> Color32 {
    let palette = palette();
    match tone {
        StatusTone::Idle => palette.text_muted,
        StatusTone::Busy => palette.accent_ice,
        StatusTone::Info => palette.success,
        StatusTone::Warning => palette.warning,
        StatusTone::Error => palette.danger,
    }
}

pub fn severity_color(severity: Severity) -> Color32 {
    let palette = palette();
    match severity {
        Severity::Good => palette.success,
        Severity::Bad => palette.danger,
        Severity::Warn => palette.warning,
    }
}
