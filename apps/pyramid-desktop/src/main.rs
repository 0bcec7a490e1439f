mod app;
mod clock;
mod host;
mod hud;
mod keymap;

use anyhow::Result;
use clap::Parser;
use host::GpuApp;
use pyramid_config::AppConfig;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use winit::event_loop::{ControlFlow, EventLoop};

#[derive(Parser)]
#[command(name = "pyramid-desktop", about = "Fly around a pyramid")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// YAML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override window width
    #[arg(long)]
    width: Option<u32>,

    /// Override window height
    #[arg(long)]
    height: Option<u32>,

    /// Start with the cursor free instead of captured
    #[arg(long)]
    no_capture: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    let mut config = AppConfig::load_or_default(cli.config.as_deref())?;
    if let Some(width) = cli.width {
        config.window.width = width;
    }
    if let Some(height) = cli.height {
        config.window.height = height;
    }
    if cli.no_capture {
        config.window.capture_mouse = false;
    }
    config.validate()?;

    tracing::info!("pyramid-desktop starting");

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = GpuApp::new(config)?;
    event_loop.run_app(&mut app)?;

    app.finish()
}
