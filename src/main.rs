//! Unbounded Gomoku GUI
//!
//! Two players take turns on a board that grows wherever they click.

use std::path::PathBuf;

use clap::Parser;
use gomoku::ui::GomokuApp;
use gomoku::{AppConfig, AppError};

/// Two-player five-in-a-row on an unbounded board.
#[derive(Parser)]
#[command(name = "gomoku", about = "Two-player Gomoku on an unbounded board")]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(long, default_value = "gomoku.toml")]
    config: PathBuf,
}

fn main() -> Result<(), AppError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = AppConfig::load_or_default(&cli.config)?;
    tracing::info!("starting with config {:?}", config);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_min_inner_size([320.0, 240.0])
            .with_title(config.window.title.clone()),
        ..Default::default()
    };

    eframe::run_native(
        "Gomoku",
        options,
        Box::new(move |cc| Ok(Box::new(GomokuApp::new(cc, &config)))),
    )?;
    Ok(())
}
