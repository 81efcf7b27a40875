//! Image representation for the hue analysis pipeline.

use std::marker::PhantomData;

use crate::color_management::color_space::{ColorModel, Hsluv, Lch, Rgb};
use crate::color_management::convert;
use crate::error::{Result, RosetteError};

/// A `width × height` grid of color triplets in the color model `M`.
///
/// Buffers are immutable once built: every transform returns a new buffer,
/// so one source can feed several transforms without coordination.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer<M: ColorModel> {
    width: u32,
    height: u32,
    pixels: Vec<[f32; 3]>,
    model: PhantomData<M>,
}

/// Normalized sRGB image, components in [0, 1].
pub type RgbImage = PixelBuffer<Rgb>;
/// CIE LCh(uv) image, triplets `[l, c, h]`.
pub type LchImage = PixelBuffer<Lch>;
/// HSLuv image, triplets `[h, s, l]`.
pub type HsluvImage = PixelBuffer<Hsluv>;

impl<M: ColorModel> PixelBuffer<M> {
    /// Build a buffer from row-major triplets.
    ///
    /// Rejects zero dimensions and any `pixels.len() != width * height`.
    pub fn new(width: u32, height: u32, pixels: Vec<[f32; 3]>) -> Result<Self> {
        let expected = (width as usize).checked_mul(height as usize);
        if width == 0 || height == 0 || expected != Some(pixels.len()) {
            return Err(RosetteError::InvalidDimensions {
                width,
                height,
                len: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
            model: PhantomData,
        })
    }

    /// A buffer where every pixel holds the same triplet.
    pub fn filled(width: u32, height: u32, value: [f32; 3]) -> Result<Self> {
        let len = (width as usize)
            .checked_mul(height as usize)
            .ok_or(RosetteError::InvalidDimensions { width, height, len: 0 })?;
        Self::new(width, height, vec![value; len])
    }

    /// Image width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)`.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Row-major pixel triplets. Length = width × height.
    pub fn pixels(&self) -> &[[f32; 3]] {
        &self.pixels
    }

    /// Number of pixels.
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// Always `false`: zero-sized buffers are rejected at construction.
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Consume the buffer and return its triplets.
    pub fn into_pixels(self) -> Vec<[f32; 3]> {
        self.pixels
    }

    /// Map every triplet through `f`, producing a buffer in model `N`.
    ///
    /// Pure and order-independent. Results are not clamped; saturation is
    /// the job of whoever serializes the buffer for display.
    pub fn convert<N, F>(&self, f: F) -> PixelBuffer<N>
    where
        N: ColorModel,
        F: Fn([f32; 3]) -> [f32; 3],
    {
        PixelBuffer {
            width: self.width,
            height: self.height,
            pixels: self.pixels.iter().map(|&px| f(px)).collect(),
            model: PhantomData,
        }
    }
}

impl RgbImage {
    /// Convert to CIE LCh(uv).
    pub fn to_lch(&self) -> LchImage {
        self.convert(convert::rgb_to_lch)
    }

    /// Convert to HSLuv.
    pub fn to_hsluv(&self) -> HsluvImage {
        self.convert(convert::rgb_to_hsluv)
    }
}

impl LchImage {
    /// Convert to sRGB (unclamped).
    pub fn to_rgb(&self) -> RgbImage {
        self.convert(convert::lch_to_rgb)
    }

    /// Convert to HSLuv.
    pub fn to_hsluv(&self) -> HsluvImage {
        self.convert(convert::lch_to_hsluv)
    }

    /// Chroma channel of every pixel.
    pub fn chroma(&self) -> impl Iterator<Item = f32> + '_ {
        self.pixels.iter().map(|px| px[1])
    }
}

impl HsluvImage {
    /// Convert to sRGB (unclamped).
    pub fn to_rgb(&self) -> RgbImage {
        self.convert(convert::hsluv_to_rgb)
    }

    /// Convert to CIE LCh(uv).
    pub fn to_lch(&self) -> LchImage {
        self.convert(convert::hsluv_to_lch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_length_mismatch() {
        let err = RgbImage::new(3, 2, vec![[0.0; 3]; 5]).unwrap_err();
        assert_eq!(
            err,
            RosetteError::InvalidDimensions {
                width: 3,
                height: 2,
                len: 5
            }
        );
    }

    #[test]
    fn test_new_rejects_zero_dimensions() {
        assert!(RgbImage::new(0, 4, vec![]).is_err());
        assert!(LchImage::new(4, 0, vec![]).is_err());
    }

    #[test]
    fn test_new_accepts_exact_length() {
        let img = HsluvImage::new(4, 3, vec![[0.0; 3]; 12]).unwrap();
        assert_eq!(img.dimensions(), (4, 3));
        assert_eq!(img.len(), 12);
        assert!(!img.is_empty());
    }

    #[test]
    fn test_convert_preserves_dimensions_and_order() {
        let pixels: Vec<[f32; 3]> = (0..6).map(|i| [i as f32, 0.0, 0.0]).collect();
        let img = RgbImage::new(3, 2, pixels).unwrap();
        let out: LchImage = img.convert(|px| [px[0] * 2.0, px[1], px[2]]);
        assert_eq!(out.dimensions(), (3, 2));
        assert_eq!(out.pixels()[5], [10.0, 0.0, 0.0]);
        // The source is untouched.
        assert_eq!(img.pixels()[5], [5.0, 0.0, 0.0]);
    }

    #[test]
    fn test_convert_does_not_clamp() {
        let img = RgbImage::filled(2, 2, [0.5, 0.5, 0.5]).unwrap();
        let out: RgbImage = img.convert(|px| [px[0] * 4.0, -1.0, px[2]]);
        assert!(out.pixels().iter().all(|px| px[0] == 2.0 && px[1] == -1.0));
    }

    #[test]
    fn test_typed_conversions_roundtrip() {
        let img = RgbImage::filled(5, 1, [0.8, 0.3, 0.2]).unwrap();
        let back = img.to_lch().to_hsluv().to_rgb();
        assert_eq!(back.dimensions(), img.dimensions());
        for (a, b) in back.pixels().iter().zip(img.pixels()) {
            for c in 0..3 {
                assert!((a[c] - b[c]).abs() < 1e-3, "{a:?} vs {b:?}");
            }
        }
    }
}
