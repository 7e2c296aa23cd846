//! palette-raster - render a YAML scene to a PPM image.
//!
//! Without `--scene` the built-in demo scene is drawn.

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn, LevelFilter};
use palette_raster::scene::Scene;
use std::path::PathBuf;

/// Rasterize rectangles, circles and triangles to a PPM image
#[derive(Parser, Debug)]
#[command(name = "palette-raster")]
#[command(author = "PAIML Team")]
#[command(version)]
#[command(about = "Rasterize rectangles, circles and triangles to a PPM image", long_about = None)]
struct Cli {
    /// Scene file (YAML); the demo scene is used when omitted
    #[arg(short, long)]
    scene: Option<PathBuf>,

    /// Output file stem (".ppm" is appended)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Override the canvas width
    #[arg(long)]
    width: Option<u32>,

    /// Override the canvas height
    #[arg(long)]
    height: Option<u32>,

    /// Also write "<stem>.png"
    #[arg(long)]
    png: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let mut builder = pretty_env_logger::formatted_builder();
    builder.filter_level(match verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    });
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    builder.init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut scene = match &cli.scene {
        Some(path) => Scene::load(path)
            .with_context(|| format!("loading scene {}", path.display()))?,
        None => Scene::default(),
    };
    if let Some(width) = cli.width {
        scene.width = width;
    }
    if let Some(height) = cli.height {
        scene.height = height;
    }
    if let Some(output) = cli.output {
        scene.output = output;
    }

    info!(
        "rendering {} shapes on {}x{}",
        scene.shapes.len(),
        scene.width,
        scene.height
    );
    let report = scene.render().context("creating canvas")?;
    if !report.is_complete() {
        warn!(
            "{} of {} shapes rejected",
            report.failures.len(),
            scene.shapes.len()
        );
    }

    let written = report
        .framebuffer
        .export(&scene.output)
        .context("writing PPM")?;
    println!("{}", written.display());

    if cli.png {
        let png_path = written.with_extension("png");
        report
            .framebuffer
            .export_png(&png_path)
            .context("writing PNG")?;
        println!("{}", png_path.display());
    }

    Ok(())
}
