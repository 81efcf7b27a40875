//! Hue rose computation.
//!
//! Bins every pixel by its LCh(uv) hue angle and accumulates its chroma,
//! so each petal holds the total colorfulness of one hue range rather than a
//! pixel count. Achromatic pixels contribute nothing.
//!
//! # Binning
//! ```text
//! petal = round(h / 360 × (n − 1))
//! ```
//! The index is not wrapped modulo `n`: hues near 0° and near 360° land in
//! the two endpoint petals, which therefore each cover half the angular width
//! of the interior petals.

use serde::{Deserialize, Serialize};

use crate::error::{Result, RosetteError};
use crate::image::LchImage;

/// Chroma mass per hue petal. Length = petal count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoseData {
    /// Summed chroma for each petal, indexed by ascending hue.
    pub petals: Vec<f32>,
}

impl RoseData {
    /// Number of petals.
    pub fn petal_count(&self) -> usize {
        self.petals.len()
    }

    /// Total chroma mass across all petals.
    pub fn total(&self) -> f32 {
        self.petals.iter().map(|&p| p as f64).sum::<f64>() as f32
    }

    /// True when no petal holds any chroma, i.e. every pixel was gray.
    pub fn is_achromatic(&self) -> bool {
        self.petals.iter().all(|&p| p <= 0.0)
    }

    /// Petals divided by the total mass. All zeros for an achromatic image.
    pub fn normalized(&self) -> Vec<f32> {
        let total = self.total();
        if total <= 0.0 {
            return vec![0.0; self.petals.len()];
        }
        self.petals.iter().map(|&p| p / total).collect()
    }
}

/// Petal index for a hue angle in degrees.
///
/// Hues outside [0, 360] saturate to the endpoint petals; NaN maps to 0.
pub fn petal_index(hue: f32, num_petal: usize) -> usize {
    let last = num_petal.saturating_sub(1);
    let idx = (hue / 360.0 * last as f32).round();
    // `as` saturates negatives and NaN to 0.
    (idx as usize).min(last)
}

/// Compute the hue rose from an LCh(uv) image.
///
/// Fails with [`RosetteError::InvalidPetalCount`] when `num_petal` is 0.
pub fn compute(image: &LchImage, num_petal: usize) -> Result<RoseData> {
    if num_petal == 0 {
        return Err(RosetteError::InvalidPetalCount(num_petal));
    }

    let mut sums = vec![0.0_f64; num_petal];
    for px in image.pixels() {
        let [_, chroma, hue] = *px;
        sums[petal_index(hue, num_petal)] += chroma as f64;
    }

    Ok(RoseData {
        petals: sums.into_iter().map(|s| s as f32).collect(),
    })
}
