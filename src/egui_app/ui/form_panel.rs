use super::style;
use super::*;
use crate::egui_app::state::SchemaStatus;
use crate::form::FieldControl;
use eframe::egui::RichText;

const PREDICT_LABEL: &str = "Predict";
const LOADING_LABEL: &str = "Analyzing…";

impl EguiApp {
    pub(super) fn render_form_card(&mut self, ui: &mut egui::Ui) {
        let palette = style::palette();
        Frame::new()
            .fill(style::card_fill())
            .stroke(style::section_stroke())
            .inner_margin(Margin::same(10))
            .show(ui, |ui| {
                ui.label(RichText::new("Features").strong().color(palette.text_primary));
                ui.add_space(6.0);
                match self.controller.ui.schema.clone() {
                    SchemaStatus::Loading => {
                        ui.horizontal(|ui| {
                            ui.spinner();
                            ui.label(RichText::new("Loading schema…").color(palette.text_muted));
                        });
                    }
                    SchemaStatus::Failed(message) => {
                        ui.label(RichText::new(message).color(palette.danger));
                        ui.add_space(6.0);
                        if ui.button("Retry").clicked() {
                            self.controller.reload_schema();
                        }
                    }
                    SchemaStatus::Ready => self.render_fields(ui),
                }
            });
    }

    fn render_fields(&mut self, ui: &mut egui::Ui) {
        let palette = style::palette();
        let controls = self.controller.field_controls();
        if controls.is_empty() {
            ui.label(
                RichText::new(crate::egui_app::controller::NO_FIELDS_MESSAGE)
                    .color(palette.warning),
            );
            return;
        }
        let enabled = !self.controller.is_loading();
        let mut change = None;
        egui::ScrollArea::vertical()
            .id_salt("feature_fields")
            .max_height((ui.available_height() - 90.0).max(120.0))
            .show(ui, |ui| {
                for control in &controls {
                    ui.add_enabled_ui(enabled, |ui| {
                        if let Some(picked) = field_row(ui, control) {
                            control.choose(picked, |name, value| {
                                change = Some((name.to_string(), value.to_string()));
                            });
                        }
                    });
                    ui.add_space(4.0);
                }
            });
        if let Some((name, value)) = change {
            self.controller.set_field_value(&name, &value);
        }
        ui.add_space(8.0);
        self.render_messages(ui);
        self.render_actions(ui);
    }

    fn render_messages(&mut self, ui: &mut egui::Ui) {
        let palette = style::palette();
        if let Some(message) = self.controller.error_message() {
            ui.label(RichText::new(message).color(palette.danger));
            if let Some(hint) = self.controller.error_hint() {
                ui.label(RichText::new(hint).color(palette.text_muted));
            }
        } else if let Some(advice) = self.controller.advisory_message() {
            ui.label(RichText::new(advice).color(palette.text_muted));
        }
        ui.add_space(6.0);
    }

    fn render_actions(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let label = if self.controller.is_loading() {
                LOADING_LABEL
            } else {
                PREDICT_LABEL
            };
            let response = ui
                .add_enabled(self.controller.can_predict(), egui::Button::new(label))
                .on_disabled_hover_text("Select a value for every feature first");
            if response.clicked() {
                self.controller.predict();
            }
            if ui.button("Reset").clicked() {
                self.controller.request_reset();
            }
        });
    }
}

/// Draw one labelled combo box; returns the index picked this frame.
fn field_row(ui: &mut egui::Ui, control: &FieldControl) -> Option<usize> {
    let palette = style::palette();
    let mut picked = None;
    ui.horizontal(|ui| {
        let label = ui.label(RichText::new(&control.label).color(palette.text_primary));
        if let Some(description) = &control.description {
            label.on_hover_text(description);
        }
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            egui::ComboBox::from_id_salt(("field", control.name.as_str()))
                .selected_text(&control.selected_label)
                .width(180.0)
                .show_ui(ui, |ui| {
                    for (index, option) in control.options.iter().enumerate() {
                        let selected = control.selected_index == Some(index);
                        if ui.selectable_label(selected, &option.display_label).clicked() {
                            picked = Some(index);
                        }
                    }
                });
        });
    });
    picked
}
