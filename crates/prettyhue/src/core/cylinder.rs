//! Cylindrical rearrangements of sRGB.
//!
//! HSV and HSL derive directly from gamma-corrected sRGB and need neither XYZ
//! nor a white point. In both models, achromatic colors have hue and
//! saturation zero.

use crate::Float;

/// Compute the hue in degrees for the sRGB coordinates with the given maximum
/// and range.
#[inline]
fn hue(value: &[Float; 3], max: Float, range: Float) -> Float {
    let [r, g, b] = *value;

    let sector = if max == r {
        ((g - b) / range) % 6.0
    } else if max == g {
        (b - r) / range + 2.0
    } else {
        (r - g) / range + 4.0
    };
    let h = sector * 60.0;

    if h < 0.0 {
        h + 360.0
    } else {
        h
    }
}

/// Convert coordinates for sRGB to HSV.
pub(crate) fn srgb_to_hsv(value: &[Float; 3]) -> [Float; 3] {
    let [r, g, b] = *value;
    let min = r.min(g).min(b);
    let max = r.max(g).max(b);
    let range = max - min;

    let s = if max == 0.0 { 0.0 } else { range / max };
    let h = if range == 0.0 {
        0.0
    } else {
        hue(value, max, range)
    };

    [h, s, max]
}

/// Convert coordinates for HSV to sRGB.
///
/// The hue is wrapped into `0..360` first, so that any multiple of 360º
/// selects the same sector.
pub(crate) fn hsv_to_srgb(value: &[Float; 3]) -> [Float; 3] {
    let [h, s, v] = *value;
    let hp = h.rem_euclid(360.0) / 60.0;
    let chroma = v * s;
    let x = chroma * (1.0 - ((hp % 2.0) - 1.0).abs());
    let m = v - chroma;

    let (r, g, b) = match (hp.floor() as usize).min(5) {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };

    [m + r, m + g, m + b]
}

/// Convert coordinates for sRGB to HSL.
pub(crate) fn srgb_to_hsl(value: &[Float; 3]) -> [Float; 3] {
    let [r, g, b] = *value;
    let min = r.min(g).min(b);
    let max = r.max(g).max(b);
    let range = max - min;
    let l = (max + min) / 2.0;

    if range == 0.0 {
        return [0.0, 0.0, l];
    }

    let denominator = if l < 0.5 {
        max + min
    } else {
        2.0 - max - min
    };
    let s = if denominator == 0.0 {
        0.0
    } else {
        range / denominator
    };

    [hue(value, max, range), s, l]
}

/// Convert coordinates for HSL to sRGB.
pub(crate) fn hsl_to_srgb(value: &[Float; 3]) -> [Float; 3] {
    let [h, s, l] = *value;
    if s == 0.0 {
        return [l, l, l];
    }

    let t1 = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let t2 = 2.0 * l - t1;
    let h = h.rem_euclid(360.0) / 360.0;

    let channel = |t: Float| {
        let t = if t < 0.0 {
            t + 1.0
        } else if t > 1.0 {
            t - 1.0
        } else {
            t
        };

        if 6.0 * t < 1.0 {
            (t1 - t2).mul_add(6.0 * t, t2)
        } else if 2.0 * t < 1.0 {
            t1
        } else if 3.0 * t < 2.0 {
            (t1 - t2).mul_add((2.0 / 3.0 - t) * 6.0, t2)
        } else {
            t2
        }
    };

    [channel(h + 1.0 / 3.0), channel(h), channel(h - 1.0 / 3.0)]
}
