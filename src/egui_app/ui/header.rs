use super::style;
use super::*;
use eframe::egui::RichText;

impl EguiApp {
    pub(super) fn render_header(&mut self, ui: &mut egui::Ui) {
        let palette = style::palette();
        ui.horizontal(|ui| {
            ui.heading(RichText::new("🍄 Sporecheck").color(palette.text_primary));
            ui.label(RichText::new("Mushroom edibility classifier").color(palette.text_muted));
        });
        ui.add_space(6.0);
        let percent = self.controller.progress_percent();
        let bar = egui::ProgressBar::new(f32::from(percent) / 100.0)
            .fill(palette.accent_moss)
            .text(format!("{percent}% described"));
        ui.add(bar);
    }
}
