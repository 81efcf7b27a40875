//! Polar-area chart data for drawing a [`RoseData`].
//!
//! The chart itself is drawn by the host. This module only derives what a
//! polar-area renderer needs: one radius, color and angle label per petal.

use serde::{Deserialize, Serialize};

use crate::color_management::convert::hsluv_to_rgb;
use crate::scopes::rose::RoseData;

/// HSLuv saturation of petal swatches.
const PETAL_SATURATION: f32 = 100.0;
/// HSLuv lightness of petal swatches.
const PETAL_LIGHTNESS: f32 = 65.0;

/// Ready-to-draw polar-area chart for a hue rose.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoseChart {
    /// Petal radius, `sqrt(mass)` rounded to 3 decimals, so that petal
    /// *area* is proportional to chroma mass.
    pub radii: Vec<f32>,
    /// 8-bit sRGB swatch for each petal.
    pub colors: Vec<[u8; 3]>,
    /// Start angle of each petal in whole degrees.
    pub labels: Vec<u32>,
}

impl RoseChart {
    /// Derive chart data from a rose.
    pub fn from_rose(rose: &RoseData) -> Self {
        let n = rose.petal_count();
        Self {
            radii: rose
                .petals
                .iter()
                .map(|&mass| (mass.max(0.0).sqrt() * 1000.0).round() / 1000.0)
                .collect(),
            colors: petal_colors(n),
            labels: (0..n)
                .map(|i| (i as f32 / n as f32 * 360.0).round() as u32)
                .collect(),
        }
    }
}

/// Evenly spaced HSLuv hues at full saturation, as 8-bit sRGB.
pub fn petal_colors(num_petal: usize) -> Vec<[u8; 3]> {
    (0..num_petal)
        .map(|i| {
            let hue = 360.0 * i as f32 / num_petal as f32;
            let rgb = hsluv_to_rgb([hue, PETAL_SATURATION, PETAL_LIGHTNESS]);
            rgb.map(|c| (c * 255.0).round().clamp(0.0, 255.0) as u8)
        })
        .collect()
}
