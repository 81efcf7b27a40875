//! Color model tags carried by pixel buffers.
//!
//! The tags are uninhabited types used only at the type level, so an
//! [`RgbImage`](crate::RgbImage) can never be handed to a function that
//! expects an [`LchImage`](crate::LchImage).

use std::fmt;

/// A color model whose triplets a [`PixelBuffer`](crate::PixelBuffer) holds.
pub trait ColorModel: fmt::Debug + Clone + Copy + PartialEq + Send + Sync + 'static {
    /// Human-readable label for log output.
    const LABEL: &'static str;
}

/// sRGB-encoded red/green/blue, each in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rgb {}

/// CIE LCh(uv): lightness [0, 100], chroma [0, ~180), hue in degrees [0, 360).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lch {}

/// HSLuv: hue in degrees [0, 360), saturation [0, 100], lightness [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hsluv {}

impl ColorModel for Rgb {
    const LABEL: &'static str = "RGB";
}

impl ColorModel for Lch {
    const LABEL: &'static str = "LCh(uv)";
}

impl ColorModel for Hsluv {
    const LABEL: &'static str = "HSLuv";
}
