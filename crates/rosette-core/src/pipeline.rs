//! End-to-end hue analysis of one RGB image.
//!
//! Sequence:
//! 1. RGB → LCh(uv)
//! 2. LCh(uv) → hue rose
//! 3. LCh(uv) → weight map and weighted-hue map
//! 4. LCh(uv) → HSLuv → hue map
//!
//! Every stage reads an immutable buffer and returns a new one, so nothing
//! here depends on stage order beyond the data flow itself.

use std::time::Instant;

use crate::color_management::color_space::{ColorModel, Lch, Rgb};
use crate::error::{Result, RosetteError};
use crate::image::RgbImage;
use crate::scopes::rose::{self, RoseData};
use crate::visualize;

/// Everything derived from one input image.
#[derive(Debug, Clone)]
pub struct RoseAnalysis {
    /// Chroma mass per hue petal.
    pub rose: RoseData,
    /// Chroma normalized to the image maximum, as grayscale.
    pub weight: RgbImage,
    /// Hue alone at full saturation.
    pub hue: RgbImage,
    /// Hue and chroma at a fixed lightness.
    pub weighted_hue: RgbImage,
}

/// Analyze a normalized RGB image into a rose with `num_petal` petals and
/// the three visualization maps.
///
/// The petal count is checked before any conversion work is done.
pub fn analyze(rgb: &RgbImage, num_petal: usize) -> Result<RoseAnalysis> {
    if num_petal == 0 {
        return Err(RosetteError::InvalidPetalCount(num_petal));
    }

    let start = Instant::now();
    let (width, height) = rgb.dimensions();

    let lch = rgb.to_lch();
    tracing::debug!("{} -> {}: {width}x{height}", Rgb::LABEL, Lch::LABEL);

    let rose = rose::compute(&lch, num_petal)?;
    if rose.is_achromatic() {
        tracing::warn!("image is achromatic; rose and weight map will be empty");
    }

    let weight = visualize::weight_map(&lch);
    let weighted_hue = visualize::weighted_hue_map(&lch);
    let hue = visualize::hue_map(&lch.to_hsluv());

    tracing::debug!(
        "analyzed {width}x{height} into {num_petal} petals in {:.1} ms",
        start.elapsed().as_secs_f64() * 1000.0
    );

    Ok(RoseAnalysis {
        rose,
        weight,
        hue,
        weighted_hue,
    })
}
