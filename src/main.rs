#![deny(missing_docs)]
#![deny(warnings)]

//! Entry point for the Sporecheck desktop client.
#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]
use eframe::egui;
use sporecheck::config;
use sporecheck::egui_app::ui::{EguiApp, MIN_VIEWPORT_SIZE};
use sporecheck::logging;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let loaded = config::load_or_default();
    let log_filter = loaded
        .as_ref()
        .ok()
        .and_then(|config| config.log_filter.clone());
    if let Err(err) = logging::init(log_filter.as_deref()) {
        eprintln!("Logging disabled: {err}");
    }

    let viewport = egui::ViewportBuilder::default()
        .with_min_inner_size(MIN_VIEWPORT_SIZE)
        .with_inner_size(egui::vec2(980.0, 640.0));
    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    eframe::run_native(
        "Sporecheck",
        native_options,
        Box::new(move |_cc| match loaded {
            Ok(config) => {
                tracing::info!("Classifier at {}", config.api_base_url);
                Ok(Box::new(EguiApp::new(&config)))
            }
            Err(err) => {
                tracing::error!("Failed to load config: {err}");
                Ok(Box::new(LaunchError {
                    message: format!("Failed to load config: {err}"),
                }))
            }
        }),
    )?;
    Ok(())
}

/// Minimal fallback app to display initialization errors.
struct LaunchError {
    message: String,
}

impl eframe::App for LaunchError {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Failed to start Sporecheck");
                ui.label(&self.message);
            });
        });
    }
}
