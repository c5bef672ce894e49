//! egui renderer for the classification form.

mod form_panel;
mod header;
mod result_panel;
mod status_bar;
pub mod style;

use std::sync::Arc;
use std::time::Duration;

use crate::classifier_api::HttpClassifierClient;
use crate::config::AppConfig;
use crate::egui_app::controller::{DialogConfirm, EguiController};
use eframe::egui::{self, Frame, Margin};

/// Smallest window that still fits both cards side by side.
pub const MIN_VIEWPORT_SIZE: egui::Vec2 = egui::vec2(760.0, 520.0);

const BUSY_REPAINT_INTERVAL: Duration = Duration::from_millis(50);

/// Renders the egui UI using the shared controller state.
pub struct EguiApp {
    controller: EguiController,
    visuals_set: bool,
}

impl EguiApp {
    /// Create the app for `config` and start fetching the schema.
    pub fn new(config: &AppConfig) -> Self {
        let client = Arc::new(HttpClassifierClient::new(&config.api_base_url));
        let controller =
            EguiController::new(client, config.labels.clone(), Box::new(DialogConfirm));
        Self::with_controller(controller)
    }

    /// Wrap an existing controller, loading the schema if it has none yet.
    pub fn with_controller(mut controller: EguiController) -> Self {
        if controller.fields().is_empty() {
            controller.load_schema();
        }
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

    fn render_body(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        egui::CentralPanel::default()
            .frame(
                Frame::new()
                    .fill(palette.bg_primary)
                    .inner_margin(Margin::same(12)),
            )
            .show(ctx, |ui| {
                self.render_header(ui);
                ui.add_space(10.0);
                ui.columns(2, |columns| {
                    self.render_form_card(&mut columns[0]);
                    self.render_result_card(&mut columns[1]);
                });
            });
    }
}

impl eframe::App for EguiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        self.controller.tick();
        self.render_status(ctx);
        self.render_body(ctx);
        if self.controller.has_pending_jobs() {
            ctx.request_repaint_after(BUSY_REPAINT_INTERVAL);
        }
    }
}
