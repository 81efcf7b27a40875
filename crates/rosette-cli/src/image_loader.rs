//! Image loading and working-resolution fitting for the CLI.

use std::path::Path;

use rosette_core::RgbImage;
use rosette_core::raster::fit_pixel_budget;

/// Load an image from disk, fit it to `max_pixels`, and normalize to RGB.
///
/// Supports every format enabled in the `image` crate (PNG, JPEG, ...).
pub fn load_image(path: &Path, max_pixels: u32) -> Result<RgbImage, ImageLoadError> {
    let img = image::open(path).map_err(ImageLoadError::Decode)?;
    let (src_w, src_h) = (img.width(), img.height());

    let fitted = fit_pixel_budget(img, max_pixels);
    let rgba = fitted.to_rgba8();
    let rgb = RgbImage::from_rgba8(&rgba)?;

    tracing::info!(
        "loaded {} ({src_w}x{src_h}, working {}x{})",
        path.display(),
        rgb.width(),
        rgb.height()
    );
    Ok(rgb)
}

/// Errors that can occur during image loading.
#[derive(Debug, thiserror::Error)]
pub enum ImageLoadError {
    #[error("failed to decode image: {0}")]
    Decode(image::ImageError),
    #[error("decoded image is unusable: {0}")]
    Empty(#[from] rosette_core::RosetteError),
}
