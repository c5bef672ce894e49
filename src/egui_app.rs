//! egui front end: session controller, display state and renderer.

pub mod controller;
pub mod state;
pub mod ui;
