use anyhow::Context;
use clap::{Parser, Subcommand};
use pyramid_camera::{Camera, Projection};
use pyramid_config::AppConfig;
use pyramid_input::InputScript;
use pyramid_render::{DebugTextRenderer, Frame, Renderer};
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pyramid-cli", about = "Headless tool for the pyramid camera")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// YAML config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and crate info
    Info,
    /// Print the effective configuration as YAML
    Config,
    /// Print the initial camera frame
    Inspect,
    /// Replay a YAML input script into the camera and print the result
    Replay {
        /// Script file with an `events` list
        script: PathBuf,
        /// Print the final camera state as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Camera state in machine-readable form.
#[derive(Serialize)]
struct CameraReport {
    position: glam::Vec3,
    front: glam::Vec3,
    right: glam::Vec3,
    up: glam::Vec3,
    yaw: f32,
    pitch: f32,
    zoom: f32,
    view: [f32; 16],
    view_projection: [f32; 16],
}

impl CameraReport {
    fn new(camera: &Camera, projection: &Projection) -> Self {
        Self {
            position: camera.position(),
            front: camera.front(),
            right: camera.right(),
            up: camera.up(),
            yaw: camera.yaw(),
            pitch: camera.pitch(),
            zoom: camera.zoom(),
            view: camera.view_matrix().to_cols_array(),
            view_projection: camera.view_projection(projection).to_cols_array(),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();

    let config = AppConfig::load_or_default(cli.config.as_deref())?;

    match cli.command {
        Commands::Info => {
            println!("pyramid-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("render: {}", pyramid_render::crate_info());
            let camera = Camera::from_settings(&config.camera)?;
            println!(
                "camera: speed={} sensitivity={} zoom range={:?}",
                camera.movement_speed(),
                camera.mouse_sensitivity(),
                camera.zoom_range()
            );
        }
        Commands::Config => {
            print!("{}", config.to_yaml_string()?);
        }
        Commands::Inspect => {
            let camera = Camera::from_settings(&config.camera)?;
            let frame = Frame::from_camera(&camera, &config.projection());
            print!("{}", DebugTextRenderer::new().render(&frame));
        }
        Commands::Replay { script, json } => {
            let input = InputScript::load(&script)
                .with_context(|| format!("loading {}", script.display()))?;
            let mut camera = Camera::from_settings(&config.camera)?;
            input.replay(&mut camera);
            tracing::info!("replayed {} events", input.events.len());

            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&CameraReport::new(&camera, &config.projection()))?
                );
            } else {
                let frame = Frame::from_camera(&camera, &config.projection());
                println!("Replayed {} events", input.events.len());
                print!("{}", DebugTextRenderer::new().render(&frame));
            }
        }
    }

    Ok(())
}
