//! Rosette Core — perceptual hue analysis for raster images.
//!
//! Converts normalized RGB pixels into CIE LCh(uv) and HSLuv, reduces the
//! chroma-weighted hue into a rose histogram, and derives three RGB
//! visualization images. No file I/O; decoding and encoding stay with the host.

pub mod color_management;
pub mod error;
pub mod image;
pub mod pipeline;
pub mod raster;
pub mod scopes;
pub mod visualize;

// Re-exports for convenience.
pub use color_management::color_space::{ColorModel, Hsluv, Lch, Rgb};
pub use error::{Result, RosetteError};
pub use image::{HsluvImage, LchImage, PixelBuffer, RgbImage};
pub use pipeline::{RoseAnalysis, analyze};
pub use scopes::{RoseChart, RoseData};
