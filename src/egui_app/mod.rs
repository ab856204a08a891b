//! Shared egui UI modules.

/// Controller bridging app state to the renderer.
pub mod controller;
/// Shared state types for the egui UI.
pub mod state;
/// egui renderer.
pub mod ui;
/// Helpers to convert prediction data into view structs.
pub mod view_model;
