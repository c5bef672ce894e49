use super::style;
use super::*;
use eframe::egui::RichText;

impl EguiApp {
    pub(super) fn render_result_card(&mut self, ui: &mut egui::Ui) {
        let palette = style::palette();
        let view = self.controller.result_view();
        let accent = style::severity_color(view.severity);
        Frame::new()
            .fill(style::card_fill())
            .stroke(egui::Stroke::new(1.0, accent))
            .inner_margin(Margin::same(10))
            .show(ui, |ui| {
                ui.label(RichText::new("Result").strong().color(palette.text_primary));
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    ui.label(RichText::new(view.icon.symbol()).size(28.0).color(accent));
                    ui.vertical(|ui| {
                        ui.label(RichText::new(&view.title).strong().size(18.0).color(accent));
                        ui.label(
                            RichText::new(view.severity.class_name().to_uppercase())
                                .small()
                                .color(palette.text_muted),
                        );
                    });
                });
                if let Some(confidence) = &view.confidence {
                    ui.add_space(4.0);
                    ui.label(
                        RichText::new(format!("Confidence: {confidence}"))
                            .color(palette.text_primary),
                    );
                }
                ui.add_space(8.0);
                ui.label(RichText::new(view.note).italics().color(palette.text_muted));
            });
    }
}
