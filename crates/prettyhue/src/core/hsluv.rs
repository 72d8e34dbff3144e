//! [HSLuv and HPLuv](https://www.hsluv.org/math/).
//!
//! Both models rescale the chroma of LCh(uv) so that saturation is relative to
//! the sRGB gamut boundary. For a given lightness, that boundary is formed by
//! six lines in the chroma plane, one for each RGB channel hitting 0 or 1.

use super::conversion::XYZ_TO_LINEAR_SRGB;
use crate::Float;

const KAPPA: Float = 903.2962962962963;
#[allow(clippy::excessive_precision)]
const EPSILON: Float = 0.0088564516790356308;

/// Lightness above this threshold counts as white.
const LIGHTNESS_MAX: Float = 99.9999999;
/// Lightness below this threshold counts as black.
const LIGHTNESS_MIN: Float = 1e-8;

/// Compute the six lines bounding the sRGB gamut at lightness `l` in `0..=100`.
/// Each line is given as slope and intercept.
fn bounds(l: Float) -> [(Float, Float); 6] {
    let sub1 = (l + 16.0).powi(3) / 1_560_896.0;
    let sub2 = if sub1 > EPSILON { sub1 } else { l / KAPPA };

    let mut lines = [(0.0, 0.0); 6];
    for (index, [m0, m1, m2]) in XYZ_TO_LINEAR_SRGB.iter().enumerate() {
        for k in 0..2 {
            let k = k as Float;
            let top1 = (284_517.0 * m0 - 94_839.0 * m2) * sub2;
            let top2 = (838_422.0 * m2 + 769_860.0 * m1 + 731_718.0 * m0) * l * sub2
                - 769_860.0 * k * l;
            let bottom = (632_260.0 * m2 - 126_452.0 * m1) * sub2 + 126_452.0 * k;
            lines[2 * index + k as usize] = (top1 / bottom, top2 / bottom);
        }
    }

    lines
}

/// Determine the maximum chroma for lightness `l` in `0..=100` and hue `h` in
/// degrees.
fn max_chroma_for_lh(l: Float, h: Float) -> Float {
    let (sin, cos) = h.to_radians().sin_cos();

    bounds(l)
        .iter()
        .map(|(slope, intercept)| intercept / (sin - slope * cos))
        .filter(|length| *length > 0.0)
        .fold(Float::MAX, Float::min)
}

/// Determine the maximum chroma for lightness `l` in `0..=100` that is safe
/// for all hues.
fn max_safe_chroma_for_l(l: Float) -> Float {
    bounds(l)
        .iter()
        .map(|(slope, intercept)| {
            let x = intercept / (-1.0 / slope - slope);
            x.hypot(x.mul_add(*slope, *intercept))
        })
        .fold(Float::MAX, Float::min)
}

/// Rescale LCh(uv) chroma to saturation, given a function computing the
/// maximum chroma for lightness and hue.
#[allow(non_snake_case)]
fn to_saturation<F>(value: &[Float; 3], max_chroma: F) -> [Float; 3]
where
    F: Fn(Float, Float) -> Float,
{
    let [L, C, h] = *value;
    let l = L * 100.0;

    let s = if !(LIGHTNESS_MIN..=LIGHTNESS_MAX).contains(&l) {
        0.0
    } else {
        C * 100.0 / max_chroma(l, h)
    };

    [h, s, L]
}

/// Rescale saturation back to LCh(uv) chroma, given a function computing the
/// maximum chroma for lightness and hue.
#[allow(non_snake_case)]
fn to_chroma<F>(value: &[Float; 3], max_chroma: F) -> [Float; 3]
where
    F: Fn(Float, Float) -> Float,
{
    let [h, s, L] = *value;
    let l = L * 100.0;

    let C = if !(LIGHTNESS_MIN..=LIGHTNESS_MAX).contains(&l) {
        0.0
    } else {
        max_chroma(l, h) / 100.0 * s
    };

    [L, C, h]
}

/// Convert coordinates for LCh(uv) to HSLuv.
pub(crate) fn luv_lch_to_hsluv(value: &[Float; 3]) -> [Float; 3] {
    to_saturation(value, max_chroma_for_lh)
}

/// Convert coordinates for HSLuv to LCh(uv).
pub(crate) fn hsluv_to_luv_lch(value: &[Float; 3]) -> [Float; 3] {
    to_chroma(value, max_chroma_for_lh)
}

/// Convert coordinates for LCh(uv) to HPLuv.
pub(crate) fn luv_lch_to_hpluv(value: &[Float; 3]) -> [Float; 3] {
    to_saturation(value, |l, _| max_safe_chroma_for_l(l))
}

/// Convert coordinates for HPLuv to LCh(uv).
pub(crate) fn hpluv_to_luv_lch(value: &[Float; 3]) -> [Float; 3] {
    to_chroma(value, |l, _| max_safe_chroma_for_l(l))
}
