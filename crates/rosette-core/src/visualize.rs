//! Derived visualization images.
//!
//! Three RGB images that explain what the rose is built from:
//! - **weight map**: chroma as grayscale, normalized to the image maximum
//! - **hue map**: hue alone, at full HSLuv saturation and mid lightness
//! - **weighted-hue map**: hue and chroma at a fixed lightness
//!
//! None of the outputs are clamped. Out-of-gamut components survive until
//! the 8-bit serializer saturates them.

use crate::image::{HsluvImage, LchImage, RgbImage};

/// Saturation used by the hue map.
const HUE_MAP_SATURATION: f32 = 100.0;
/// Lightness used by the hue map.
const HUE_MAP_LIGHTNESS: f32 = 50.0;
/// LCh(uv) lightness used by the weighted-hue map.
const WEIGHTED_HUE_LIGHTNESS: f32 = 65.0;

/// Largest chroma in the image, or 0 for an achromatic image.
pub fn max_chroma(lch: &LchImage) -> f32 {
    lch.chroma().fold(0.0, f32::max)
}

/// Grayscale map of each pixel's chroma relative to the image maximum.
///
/// An achromatic image (max chroma 0) produces an all-black map.
pub fn weight_map(lch: &LchImage) -> RgbImage {
    let max = max_chroma(lch);
    if max <= 0.0 {
        tracing::debug!("weight map: achromatic image, emitting black");
    }
    lch.convert(|[_, c, _]| {
        let w = if max > 0.0 { c / max } else { 0.0 };
        [w, w, w]
    })
}

/// Map of hue alone: every pixel becomes HSLuv `(h, 100, 50)` in sRGB.
///
/// Gray pixels carry hue 0 and render as the 0° color.
pub fn hue_map(hsluv: &HsluvImage) -> RgbImage {
    let synthetic: HsluvImage =
        hsluv.convert(|[h, _, _]| [h, HUE_MAP_SATURATION, HUE_MAP_LIGHTNESS]);
    synthetic.to_rgb()
}

/// Map of hue and chroma at a fixed lightness: LCh(uv) `(65, c, h)` in sRGB.
pub fn weighted_hue_map(lch: &LchImage) -> RgbImage {
    // Own pass; not shared with `weight_map`.
    let max = max_chroma(lch);
    if max <= 0.0 {
        tracing::debug!("weighted-hue map: achromatic image, emitting flat gray");
    }
    let synthetic: LchImage = lch.convert(|[_, c, h]| [WEIGHTED_HUE_LIGHTNESS, c, h]);
    synthetic.to_rgb()
}
