//! Per-triplet conversions between sRGB, CIE LCh(uv) and HSLuv.
//!
//! The color math is delegated to `palette`, wrapped with the HSLuv edge
//! rules: saturation is 0 at the black and white lightness extremes (where
//! the gamut has no chroma to normalize against), and achromatic colors get
//! hue 0 instead of whatever `atan2` makes of float noise.
//!
//! Every conversion is otherwise unclamped: out-of-gamut values pass through
//! so the caller decides where to saturate. Hue components are always
//! returned in [0, 360).

use palette::convert::FromColorUnclamped;
use palette::{Hsluv, Lchuv, Srgb};

/// Below this chroma a color is treated as gray: chroma 0, hue 0.
///
/// Sits above the f32 noise of converting exact grays and well below one
/// 8-bit step of real colorfulness.
pub const ACHROMATIC_CHROMA: f32 = 1e-2;
/// Lightness above which HSLuv treats a color as white.
const WHITE_LIGHTNESS: f32 = 99.999;
/// Lightness below which HSLuv treats a color as black.
const BLACK_LIGHTNESS: f32 = 1e-3;

/// sRGB `[r, g, b]` → LCh(uv) `[l, c, h]`.
pub fn rgb_to_lch(rgb: [f32; 3]) -> [f32; 3] {
    let lch: Lchuv = Lchuv::from_color_unclamped(to_srgb(rgb));
    if lch.chroma.is_nan() || lch.chroma < ACHROMATIC_CHROMA {
        return [lch.l, 0.0, 0.0];
    }
    [lch.l, lch.chroma, lch.hue.into_positive_degrees()]
}

/// LCh(uv) `[l, c, h]` → sRGB `[r, g, b]`.
pub fn lch_to_rgb(lch: [f32; 3]) -> [f32; 3] {
    if lch[0] <= 0.0 {
        return [0.0; 3];
    }
    from_srgb(Srgb::from_color_unclamped(to_lchuv(lch)))
}

/// sRGB `[r, g, b]` → HSLuv `[h, s, l]`.
pub fn rgb_to_hsluv(rgb: [f32; 3]) -> [f32; 3] {
    lch_to_hsluv(rgb_to_lch(rgb))
}

/// HSLuv `[h, s, l]` → sRGB `[r, g, b]`.
pub fn hsluv_to_rgb(hsluv: [f32; 3]) -> [f32; 3] {
    lch_to_rgb(hsluv_to_lch(hsluv))
}

/// LCh(uv) `[l, c, h]` → HSLuv `[h, s, l]`.
///
/// Saturation is 0 at the lightness extremes.
pub fn lch_to_hsluv(lch: [f32; 3]) -> [f32; 3] {
    let [l, _, h] = lch;
    if l > WHITE_LIGHTNESS {
        return [positive_degrees(h), 0.0, 100.0];
    }
    if l < BLACK_LIGHTNESS {
        return [positive_degrees(h), 0.0, 0.0];
    }
    let hsluv: Hsluv = Hsluv::from_color_unclamped(to_lchuv(lch));
    from_hsluv(hsluv)
}

/// HSLuv `[h, s, l]` → LCh(uv) `[l, c, h]`.
///
/// Chroma is 0 at the lightness extremes regardless of saturation.
pub fn hsluv_to_lch(hsluv: [f32; 3]) -> [f32; 3] {
    let [h, _, l] = hsluv;
    if l > WHITE_LIGHTNESS {
        return [100.0, 0.0, positive_degrees(h)];
    }
    if l < BLACK_LIGHTNESS {
        return [0.0, 0.0, positive_degrees(h)];
    }
    let lch: Lchuv = Lchuv::from_color_unclamped(to_hsluv(hsluv));
    [lch.l, lch.chroma, lch.hue.into_positive_degrees()]
}

fn positive_degrees(h: f32) -> f32 {
    let h = h.rem_euclid(360.0);
    // rem_euclid of a tiny negative can round up to exactly 360.
    if h >= 360.0 { 0.0 } else { h }
}

fn to_srgb(rgb: [f32; 3]) -> Srgb {
    Srgb::new(rgb[0], rgb[1], rgb[2])
}

fn from_srgb(srgb: Srgb) -> [f32; 3] {
    [srgb.red, srgb.green, srgb.blue]
}

fn to_lchuv(lch: [f32; 3]) -> Lchuv {
    Lchuv::new(lch[0], lch[1], lch[2])
}

fn to_hsluv(hsluv: [f32; 3]) -> Hsluv {
    Hsluv::new(hsluv[0], hsluv[1], hsluv[2])
}

fn from_hsluv(hsluv: Hsluv) -> [f32; 3] {
    [hsluv.hue.into_positive_degrees(), hsluv.saturation, hsluv.l]
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-3;

    const SAMPLES: [[f32; 3]; 9] = [
        [0.0, 0.0, 0.0],
        [1.0, 1.0, 1.0],
        [0.5, 0.5, 0.5],
        [0.8, 0.2, 0.1],
        [0.1, 0.6, 0.3],
        [0.2, 0.3, 0.9],
        [0.9, 0.85, 0.1],
        [0.35, 0.1, 0.45],
        [0.05, 0.05, 0.06],
    ];

    fn assert_close3(actual: [f32; 3], expected: [f32; 3], tol: f32) {
        for i in 0..3 {
            let diff = (actual[i] - expected[i]).abs();
            assert!(
                diff <= tol,
                "channel {i} mismatch: got {actual:?}, expected {expected:?}, diff {diff} > {tol}"
            );
        }
    }

    #[test]
    fn test_rgb_lch_roundtrip_preserves_values() {
        for rgb in SAMPLES {
            let back = lch_to_rgb(rgb_to_lch(rgb));
            assert_close3(back, rgb, EPSILON);
        }
    }

    #[test]
    fn test_rgb_hsluv_roundtrip_preserves_values() {
        for rgb in SAMPLES {
            let back = hsluv_to_rgb(rgb_to_hsluv(rgb));
            assert_close3(back, rgb, EPSILON);
        }
    }

    #[test]
    fn test_lch_hsluv_share_hue() {
        for rgb in SAMPLES {
            let lch = rgb_to_lch(rgb);
            if lch[1] < 1.0 {
                continue;
            }
            let hsluv = lch_to_hsluv(lch);
            assert!((lch[2] - hsluv[0]).abs() < EPSILON, "{lch:?} vs {hsluv:?}");
            assert!((lch[0] - hsluv[2]).abs() < EPSILON, "{lch:?} vs {hsluv:?}");
        }
    }

    #[test]
    fn test_lch_hsluv_roundtrip_preserves_values() {
        let lch = rgb_to_lch([0.8, 0.2, 0.1]);
        assert_close3(hsluv_to_lch(lch_to_hsluv(lch)), lch, 1e-2);
    }

    #[test]
    fn test_hsluv_extremes_have_zero_saturation() {
        let white = rgb_to_hsluv([1.0, 1.0, 1.0]);
        assert_eq!(white, [0.0, 0.0, 100.0]);
        let black = rgb_to_hsluv([0.0, 0.0, 0.0]);
        assert_eq!(black, [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_hsluv_extremes_ignore_saturation() {
        for s in [0.0, 50.0, 100.0] {
            assert_close3(hsluv_to_rgb([200.0, s, 100.0]), [1.0, 1.0, 1.0], EPSILON);
            assert_eq!(hsluv_to_rgb([200.0, s, 0.0]), [0.0, 0.0, 0.0]);
            assert_eq!(hsluv_to_lch([200.0, s, 0.0]), [0.0, 0.0, 200.0]);
        }
    }

    #[test]
    fn test_grays_get_zero_hue_and_chroma() {
        for v in [0.0, 0.02, 0.18, 0.5, 0.73, 0.99, 1.0] {
            let lch = rgb_to_lch([v, v, v]);
            assert_eq!([lch[1], lch[2]], [0.0, 0.0], "gray {v}: {lch:?}");
            let hsluv = rgb_to_hsluv([v, v, v]);
            assert_eq!([hsluv[0], hsluv[1]], [0.0, 0.0], "gray {v}: {hsluv:?}");
        }
    }

    #[test]
    fn test_one_step_off_gray_keeps_its_hue() {
        let lch = rgb_to_lch([128.0 / 255.0, 128.0 / 255.0, 129.0 / 255.0]);
        assert!(lch[1] > ACHROMATIC_CHROMA, "chroma: {}", lch[1]);
        assert!(lch[2] > 180.0 && lch[2] < 300.0, "bluish hue expected: {}", lch[2]);
    }

    #[test]
    fn test_conversions_never_produce_nan() {
        for rgb in SAMPLES {
            let all = [
                rgb_to_lch(rgb),
                rgb_to_hsluv(rgb),
                lch_to_rgb(rgb_to_lch(rgb)),
                hsluv_to_rgb(rgb_to_hsluv(rgb)),
            ];
            for triplet in all {
                assert!(triplet.iter().all(|c| c.is_finite()), "{rgb:?} -> {triplet:?}");
            }
        }
    }

    #[test]
    fn test_white_is_achromatic() {
        let lch = rgb_to_lch([1.0, 1.0, 1.0]);
        assert!((lch[0] - 100.0).abs() < 0.01, "white lightness: {}", lch[0]);
        assert!(lch[1] < 0.01, "white chroma: {}", lch[1]);
    }

    #[test]
    fn test_hue_is_positive_degrees() {
        for rgb in SAMPLES {
            let h = rgb_to_lch(rgb)[2];
            assert!((0.0..=360.0).contains(&h), "hue out of range: {h}");
            let h = rgb_to_hsluv(rgb)[0];
            assert!((0.0..=360.0).contains(&h), "hue out of range: {h}");
        }
    }

    #[test]
    fn test_red_hue_near_twelve_degrees() {
        // Pure sRGB red sits at roughly 12.2° in LCh(uv).
        let lch = rgb_to_lch([1.0, 0.0, 0.0]);
        assert!((lch[2] - 12.17).abs() < 0.1, "red hue: {}", lch[2]);
        assert!((lch[1] - 179.04).abs() < 0.2, "red chroma: {}", lch[1]);
    }

    #[test]
    fn test_lch_to_rgb_is_unclamped() {
        // Lightness 65 with very high chroma is far outside the sRGB gamut.
        let rgb = lch_to_rgb([65.0, 170.0, 260.0]);
        assert!(rgb.iter().any(|c| !(0.0..=1.0).contains(c)), "expected out-of-gamut: {rgb:?}");
    }
}
