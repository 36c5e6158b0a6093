#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// Global data directory, set from command line
static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Get the data directory (set from command line or default)
pub fn get_data_dir() -> PathBuf {
    DATA_DIR.get().cloned().unwrap_or_else(|| {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("maison")
    })
}

/// Maison Atelier - marketing site desktop shell
#[derive(Parser, Debug)]
#[command(name = "maison-desktop")]
#[command(about = "Maison Atelier - single-page site with local draft persistence")]
struct Args {
    /// Data directory for drafts and the submission record
    #[arg(short, long)]
    data_dir: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt::init();

    // Uncaught runtime errors are logged, never shown to the visitor
    std::panic::set_hook(Box::new(|info| {
        tracing::error!("Uncaught error: {info}");
    }));

    let args = Args::parse();

    let data_dir = args.data_dir.unwrap_or_else(|| {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("maison")
    });

    // Store data directory globally
    let _ = DATA_DIR.set(data_dir.clone());

    let window_width = 1200.0;
    let window_height = 900.0;

    tracing::info!("Starting with data dir: {:?}", data_dir);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Maison Atelier")
            .with_inner_size(dioxus::desktop::LogicalSize::new(
                window_width,
                window_height,
            ))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
