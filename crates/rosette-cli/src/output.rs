//! Writes an analysis to disk as PNG maps plus a JSON rose.

use std::fs;
use std::path::{Path, PathBuf};

use rosette_core::{RgbImage, RoseAnalysis, RoseChart, RoseData};
use serde::{Deserialize, Serialize};

/// JSON document written next to the maps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoseReport {
    /// Source image file name.
    pub source: String,
    /// Working resolution `[width, height]` the analysis ran at.
    pub size: [u32; 2],
    /// Raw chroma mass per petal.
    pub rose: RoseData,
    /// Mass per petal as a fraction of the total.
    pub normalized: Vec<f32>,
    /// Polar-area chart data.
    pub chart: RoseChart,
}

impl RoseReport {
    pub fn new(source: &Path, analysis: &RoseAnalysis) -> Self {
        let (width, height) = analysis.weight.dimensions();
        Self {
            source: source
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
            size: [width, height],
            normalized: analysis.rose.normalized(),
            chart: RoseChart::from_rose(&analysis.rose),
            rose: analysis.rose.clone(),
        }
    }
}

/// Paths of everything [`write_analysis`] produced.
#[derive(Debug, Clone)]
pub struct WrittenFiles {
    pub weight: PathBuf,
    pub hue: PathBuf,
    pub weighted_hue: PathBuf,
    pub report: PathBuf,
}

/// Write `<stem>_weight.png`, `<stem>_hue.png`, `<stem>_weighted_hue.png`
/// and `<stem>_rose.json` into `out_dir`, creating it if needed.
pub fn write_analysis(
    out_dir: &Path,
    stem: &str,
    report: &RoseReport,
    analysis: &RoseAnalysis,
) -> Result<WrittenFiles, OutputError> {
    fs::create_dir_all(out_dir)?;

    let files = WrittenFiles {
        weight: out_dir.join(format!("{stem}_weight.png")),
        hue: out_dir.join(format!("{stem}_hue.png")),
        weighted_hue: out_dir.join(format!("{stem}_weighted_hue.png")),
        report: out_dir.join(format!("{stem}_rose.json")),
    };

    save_png(&analysis.weight, &files.weight)?;
    save_png(&analysis.hue, &files.hue)?;
    save_png(&analysis.weighted_hue, &files.weighted_hue)?;
    fs::write(&files.report, serde_json::to_vec_pretty(report)?)?;

    tracing::info!("wrote maps and rose to {}", out_dir.display());
    Ok(files)
}

fn save_png(image: &RgbImage, path: &Path) -> Result<(), OutputError> {
    image
        .to_rgba8()
        .save_with_format(path, image::ImageFormat::Png)?;
    tracing::debug!("wrote {}", path.display());
    Ok(())
}

/// Errors that can occur while writing results.
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode image: {0}")]
    Encode(#[from] image::ImageError),
    #[error("failed to serialize rose: {0}")]
    Json(#[from] serde_json::Error),
}
