// Core modules
pub mod analysis;
pub mod app;
pub mod config;
pub mod data;
pub mod models;
pub mod ui;

// Re-export commonly used types outside of crate
pub use app::App;
pub use models::{AnalysisMode, OptionRecord, PlotField};

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Analytics backend base URL (scheme + host)
    #[arg(long)]
    pub api_base: Option<String>,

    /// Symbol to analyze on startup (overrides the persisted one)
    #[arg(long)]
    pub symbol: Option<String>,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> App {
    App::new(cc, args)
}
