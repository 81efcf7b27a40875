//! 8-bit raster boundary and working-resolution fitting.
//!
//! Decoded images enter the pipeline through [`RgbImage::from_rgba8`] and
//! leave through [`RgbImage::to_rgba8`], which is the only place where
//! components are saturated into displayable range.

use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, Rgba, RgbaImage};

use crate::error::Result;
use crate::image::RgbImage;

impl RgbImage {
    /// Normalize an 8-bit RGBA raster to [0, 1] RGB. Alpha is dropped.
    pub fn from_rgba8(raster: &RgbaImage) -> Result<Self> {
        let (width, height) = raster.dimensions();
        let pixels = raster
            .pixels()
            .map(|p| [p.0[0], p.0[1], p.0[2]].map(|c| c as f32 / 255.0))
            .collect();
        Self::new(width, height, pixels)
    }

    /// Serialize to an opaque 8-bit RGBA raster, saturating every component.
    pub fn to_rgba8(&self) -> RgbaImage {
        let mut raster = RgbaImage::new(self.width(), self.height());
        for (dst, &px) in raster.pixels_mut().zip(self.pixels()) {
            let [r, g, b] = px.map(saturate_u8);
            *dst = Rgba([r, g, b, u8::MAX]);
        }
        raster
    }
}

/// Scale a [0, 1] component to a byte the way a clamped 8-bit canvas does:
/// saturate to [0, 255], round half to even, NaN becomes 0.
pub fn saturate_u8(value: f32) -> u8 {
    if value.is_nan() {
        return 0;
    }
    (value * 255.0).clamp(0.0, 255.0).round_ties_even() as u8
}

/// Shrink an image whose area exceeds `max_pixels`.
///
/// Each side is divided by `area / max_pixels`, the area ratio itself rather
/// than its square root, so oversized images land well under the budget.
/// Images already within budget are returned unchanged.
pub fn fit_pixel_budget(image: DynamicImage, max_pixels: u32) -> DynamicImage {
    let (width, height) = image.dimensions();
    let area = width as f64 * height as f64;
    let scale = (area / max_pixels.max(1) as f64).max(1.0);
    if scale <= 1.0 {
        return image;
    }

    let target_w = ((width as f64 / scale).floor() as u32).max(1);
    let target_h = ((height as f64 / scale).floor() as u32).max(1);
    tracing::debug!("downscaling {width}x{height} -> {target_w}x{target_h} (scale {scale:.3})");
    image.resize_exact(target_w, target_h, FilterType::Triangle)
}
