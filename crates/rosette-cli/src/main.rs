//! rosette - hue rose and chroma maps for a raster image
//!
//! Reads one image, reduces it to a rose of chroma mass per hue petal, and
//! writes the weight, hue and weighted-hue maps alongside a JSON report.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod image_loader;
mod output;

use config::AppConfig;
use output::RoseReport;

#[derive(Parser)]
#[command(name = "rosette")]
#[command(author, version, about = "Hue rose and chroma maps for a raster image")]
#[command(long_about = "
Converts an image to CIE LCh(uv), sums chroma per hue petal, and writes
three visualization maps plus a JSON report.

Examples:
  rosette photo.jpg                       # maps + rose into the current dir
  rosette photo.jpg -o out/ -p 36         # 36 petals into out/
  rosette photo.jpg --json                # also print the report
  ROSETTE_MAX_PIXELS=100000 rosette big.tif
")]
struct Cli {
    /// Input image
    input: PathBuf,

    /// Output directory
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// Number of hue petals (overrides ROSETTE_PETALS)
    #[arg(short, long)]
    petals: Option<usize>,

    /// Working-resolution pixel budget (overrides ROSETTE_MAX_PIXELS)
    #[arg(long)]
    max_pixels: Option<u32>,

    /// Print the JSON report to stdout
    #[arg(long)]
    json: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = AppConfig::default().with_overrides(cli.petals, cli.max_pixels);
    config.validate().context("invalid configuration")?;
    tracing::debug!("{config:?}");

    let rgb = image_loader::load_image(&cli.input, config.max_pixels)
        .with_context(|| format!("failed to load {}", cli.input.display()))?;

    let analysis = rosette_core::analyze(&rgb, config.petals).context("analysis failed")?;
    let report = RoseReport::new(&cli.input, &analysis);

    let stem = cli
        .input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());
    let files = output::write_analysis(&cli.out_dir, &stem, &report, &analysis)
        .with_context(|| format!("failed to write results to {}", cli.out_dir.display()))?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("rose:          {}", files.report.display());
        println!("weight:        {}", files.weight.display());
        println!("hue:           {}", files.hue.display());
        println!("weighted hue:  {}", files.weighted_hue.display());
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let env_filter =
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
