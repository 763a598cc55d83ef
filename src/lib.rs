// Core modules
pub mod app;
pub mod data;
pub mod models;
pub mod ui;
pub mod utils;

pub use app::DashboardApp;

/// Builds the GUI app. Public entry point for the binary to call.
pub fn run_app(cc: &eframe::CreationContext<'_>) -> DashboardApp {
    DashboardApp::new(cc)
}
