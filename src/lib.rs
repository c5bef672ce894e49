//! Library exports for the desktop client and its tests.
/// Application directory helpers.
pub mod app_dirs;
/// Client side of the classification service.
pub mod classifier_api;
/// Persisted settings.
pub mod config;
/// egui front end.
pub mod egui_app;
/// Schema-driven form logic.
pub mod form;
mod http_client;
/// Logging setup.
pub mod logging;
