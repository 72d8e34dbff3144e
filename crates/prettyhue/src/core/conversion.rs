use super::cylinder::{hsl_to_srgb, hsv_to_srgb, srgb_to_hsl, srgb_to_hsv};
use super::hsluv::{hpluv_to_luv_lch, hsluv_to_luv_lch, luv_lch_to_hpluv, luv_lch_to_hsluv};
use super::{ColorSpace, WhitePoint, D65};
use crate::Float;

/// Convert the given 24-bit RGB coordinates to floating point coordinates.
#[inline]
pub(crate) fn from_24bit(r: u8, g: u8, b: u8) -> [Float; 3] {
    [r as Float / 255.0, g as Float / 255.0, b as Float / 255.0]
}

/// Convert the color coordinates to 24-bit representation.
///
/// This function scales each coordinate by 255, adds one half, and truncates.
/// Out-of-gamut coordinates saturate at `0x00` and `0xff`.
pub(crate) fn to_24bit(coordinates: &[Float; 3]) -> [u8; 3] {
    let [r, g, b] = *coordinates;
    [
        r.mul_add(255.0, 0.5) as u8,
        g.mul_add(255.0, 0.5) as u8,
        b.mul_add(255.0, 0.5) as u8,
    ]
}

// --------------------------------------------------------------------------------------------------------------------

/// Multiply the 3 by 3 matrix and 3-element vector with each other, producing a
/// new 3-element vector.
#[inline]
fn multiply(matrix: &[[Float; 3]; 3], vector: &[Float; 3]) -> [Float; 3] {
    let [row1, row2, row3] = matrix;

    [
        row1[0].mul_add(vector[0], row1[1].mul_add(vector[1], row1[2] * vector[2])),
        row2[0].mul_add(vector[0], row2[1].mul_add(vector[1], row2[2] * vector[2])),
        row3[0].mul_add(vector[0], row3[1].mul_add(vector[1], row3[2] * vector[2])),
    ]
}

// --------------------------------------------------------------------------------------------------------------------

/// Remove sRGB's gamma from a single coordinate.
///
/// Values up to 0.04045, including all negative values, fall into the linear
/// segment near black.
#[inline]
pub(crate) fn linearize(value: Float) -> Float {
    if value <= 0.04045 {
        value / 12.92
    } else {
        ((value + 0.055) / 1.055).powf(2.4)
    }
}

/// Apply sRGB's gamma to a single coordinate. This is the inverse of
/// [`linearize`].
#[inline]
pub(crate) fn delinearize(value: Float) -> Float {
    if value <= 0.0031308 {
        value * 12.92
    } else {
        value.powf(1.0 / 2.4).mul_add(1.055, -0.055)
    }
}

/// Approximate sRGB's gamma removal with an exponent of 2.2.
///
/// The approximation is off by up to a few percent near black. Negative values
/// keep their sign instead of turning into not-a-number.
#[inline]
pub(crate) fn fast_linearize(value: Float) -> Float {
    value.abs().powf(2.2).copysign(value)
}

/// Approximate sRGB's gamma with an exponent of 1/2.2. This is the inverse of
/// [`fast_linearize`].
#[inline]
pub(crate) fn fast_delinearize(value: Float) -> Float {
    value.abs().powf(1.0 / 2.2).copysign(value)
}

/// Convert coordinates from sRGB to linear sRGB. This is a one-hop, direct
/// conversion.
fn srgb_to_linear_srgb(value: &[Float; 3]) -> [Float; 3] {
    [linearize(value[0]), linearize(value[1]), linearize(value[2])]
}

/// Convert coordinates from linear sRGB to sRGB. This is a one-hop, direct
/// conversion.
fn linear_srgb_to_srgb(value: &[Float; 3]) -> [Float; 3] {
    [
        delinearize(value[0]),
        delinearize(value[1]),
        delinearize(value[2]),
    ]
}

// --------------------------------------------------------------------------------------------------------------------
// https://github.com/color-js/color.js/blob/a77e080a070039c534dda3965a769675aac5f75e/src/spaces/srgb-linear.js

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const LINEAR_SRGB_TO_XYZ: [[Float; 3]; 3] = [
    [ 0.41239079926595934, 0.357584339383878,   0.1804807884018343  ],
    [ 0.21263900587151027, 0.715168678767756,   0.07219231536073371 ],
    [ 0.01933081871559182, 0.11919477979462598, 0.9505321522496607  ],
];

/// Convert coordinates for linear sRGB to XYZ. This is a one-hop, direct conversion.
fn linear_srgb_to_xyz(value: &[Float; 3]) -> [Float; 3] {
    multiply(&LINEAR_SRGB_TO_XYZ, value)
}

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
pub(crate) const XYZ_TO_LINEAR_SRGB: [[Float; 3]; 3] = [
    [  3.2409699419045226,  -1.537383177570094,   -0.4986107602930034  ],
    [ -0.9692436362808796,   1.8759675015077202,   0.04155505740717559 ],
    [  0.05563007969699366, -0.20397695888897652,  1.0569715142428786  ],
];

/// Convert coordinates for XYZ to linear sRGB. This is a one-hop, direct
/// conversion.
fn xyz_to_linear_srgb(value: &[Float; 3]) -> [Float; 3] {
    multiply(&XYZ_TO_LINEAR_SRGB, value)
}

// --------------------------------------------------------------------------------------------------------------------

const NEAR_ZERO: Float = 1e-14;

/// Convert coordinates for XYZ to xyY. This is a one-hop, direct conversion.
///
/// Black has no chromaticity of its own, so this function substitutes the
/// white point's chromaticity.
fn xyz_to_xyy(value: &[Float; 3], white: &WhitePoint) -> [Float; 3] {
    let [x, y, z] = *value;
    let sum = x + y + z;

    if sum.abs() < NEAR_ZERO {
        let (wx, wy) = white.chromaticity();
        [wx, wy, y]
    } else {
        [x / sum, y / sum, y]
    }
}

/// Convert coordinates for xyY to XYZ. This is a one-hop, direct conversion.
#[allow(non_snake_case)]
fn xyy_to_xyz(value: &[Float; 3]) -> [Float; 3] {
    let [x, y, Y] = *value;

    if y.abs() < NEAR_ZERO {
        [0.0, Y, 0.0]
    } else {
        let scale = Y / y;
        [scale * x, Y, scale * (1.0 - x - y)]
    }
}

// --------------------------------------------------------------------------------------------------------------------

const DELTA: Float = 6.0 / 29.0;
const DELTA_CUBED: Float = DELTA * DELTA * DELTA;
const LINEAR_SLOPE: Float = 1.0 / (3.0 * DELTA * DELTA);
const LINEAR_OFFSET: Float = 4.0 / 29.0;

/// CIELAB's forward transfer function.
#[inline]
pub(crate) fn lab_f(t: Float) -> Float {
    if t > DELTA_CUBED {
        t.cbrt()
    } else {
        t.mul_add(LINEAR_SLOPE, LINEAR_OFFSET)
    }
}

/// CIELAB's inverse transfer function.
#[inline]
pub(crate) fn lab_finv(t: Float) -> Float {
    if t > DELTA {
        t * t * t
    } else {
        3.0 * DELTA * DELTA * (t - LINEAR_OFFSET)
    }
}

/// Convert coordinates for XYZ to CIELAB relative to the given white point.
/// This is a one-hop, direct conversion.
fn xyz_to_lab(value: &[Float; 3], white: &WhitePoint) -> [Float; 3] {
    let [x, y, z] = *value;
    let [xw, yw, zw] = *white.xyz();

    let fx = lab_f(x / xw);
    let fy = lab_f(y / yw);
    let fz = lab_f(z / zw);

    [fy.mul_add(1.16, -0.16), 5.0 * (fx - fy), 2.0 * (fy - fz)]
}

/// Convert coordinates for CIELAB to XYZ relative to the given white point.
/// This is a one-hop, direct conversion.
#[allow(non_snake_case)]
fn lab_to_xyz(value: &[Float; 3], white: &WhitePoint) -> [Float; 3] {
    let [L, a, b] = *value;
    let [xw, yw, zw] = *white.xyz();

    let l2 = (L + 0.16) / 1.16;
    [
        xw * lab_finv(a.mul_add(0.2, l2)),
        yw * lab_finv(l2),
        zw * lab_finv(b.mul_add(-0.5, l2)),
    ]
}

// --------------------------------------------------------------------------------------------------------------------

/// The slope of CIELUV lightness near black, scaled to unit range.
const LUV_LINEAR_SLOPE: Float = (29.0 / 3.0) * (29.0 / 3.0) * (29.0 / 3.0) / 100.0;

/// Compute the u′, v′ chromaticity for the XYZ coordinates.
///
/// If the denominator is zero, as is the case for black, this function returns
/// the origin.
#[inline]
fn uv_prime(value: &[Float; 3]) -> (Float, Float) {
    let [x, y, z] = *value;
    let denominator = x + 15.0 * y + 3.0 * z;

    if denominator == 0.0 {
        (0.0, 0.0)
    } else {
        (4.0 * x / denominator, 9.0 * y / denominator)
    }
}

/// Convert coordinates for XYZ to CIELUV relative to the given white point.
/// This is a one-hop, direct conversion.
#[allow(non_snake_case)]
fn xyz_to_luv(value: &[Float; 3], white: &WhitePoint) -> [Float; 3] {
    let relative_y = value[1] / white.xyz()[1];
    let L = if relative_y <= DELTA_CUBED {
        relative_y * LUV_LINEAR_SLOPE
    } else {
        relative_y.cbrt().mul_add(1.16, -0.16)
    };

    let (u_prime, v_prime) = uv_prime(value);
    let (un, vn) = uv_prime(white.xyz());

    [L, 13.0 * L * (u_prime - un), 13.0 * L * (v_prime - vn)]
}

/// Convert coordinates for CIELUV to XYZ relative to the given white point.
/// This is a one-hop, direct conversion.
#[allow(non_snake_case)]
fn luv_to_xyz(value: &[Float; 3], white: &WhitePoint) -> [Float; 3] {
    let [L, u, v] = *value;
    if L == 0.0 {
        return [0.0, 0.0, 0.0];
    }

    let yw = white.xyz()[1];
    let y = if L <= 0.08 {
        yw * L / LUV_LINEAR_SLOPE
    } else {
        let l2 = (L + 0.16) / 1.16;
        yw * l2 * l2 * l2
    };

    let (un, vn) = uv_prime(white.xyz());
    let u_prime = u / (13.0 * L) + un;
    let v_prime = v / (13.0 * L) + vn;
    if v_prime == 0.0 {
        return [0.0, y, 0.0];
    }

    [
        y * 9.0 * u_prime / (4.0 * v_prime),
        y,
        y * (12.0 - 3.0 * u_prime - 20.0 * v_prime) / (4.0 * v_prime),
    ]
}

// --------------------------------------------------------------------------------------------------------------------

const ACHROMATIC_EPSILON: Float = 1e-4;

/// Convert the rectangular pair to hue and chroma.
///
/// If both coordinates are (nearly) zero, the hue is zero.
#[inline]
fn rectangular_to_polar(first: Float, second: Float) -> (Float, Float) {
    let hue = if (second - first).abs() <= ACHROMATIC_EPSILON && second.abs() <= ACHROMATIC_EPSILON
    {
        0.0
    } else {
        (second.atan2(first).to_degrees() + 360.0) % 360.0
    };

    (hue, first.hypot(second))
}

/// Convert hue and chroma to a rectangular pair.
#[inline]
fn polar_to_rectangular(hue: Float, chroma: Float) -> (Float, Float) {
    let (sin, cos) = hue.to_radians().sin_cos();
    (chroma * cos, chroma * sin)
}

/// Convert coordinates for CIELAB to HCL. This is a one-hop, direct
/// conversion.
#[allow(non_snake_case)]
fn lab_to_hcl(value: &[Float; 3]) -> [Float; 3] {
    let [L, a, b] = *value;
    let (h, C) = rectangular_to_polar(a, b);
    [h, C, L]
}

/// Convert coordinates for HCL to CIELAB. This is a one-hop, direct
/// conversion.
#[allow(non_snake_case)]
fn hcl_to_lab(value: &[Float; 3]) -> [Float; 3] {
    let [h, C, L] = *value;
    let (a, b) = polar_to_rectangular(h, C);
    [L, a, b]
}

/// Convert coordinates for CIELUV to LCh(uv). This is a one-hop, direct
/// conversion.
#[allow(non_snake_case)]
fn luv_to_luv_lch(value: &[Float; 3]) -> [Float; 3] {
    let [L, u, v] = *value;
    let (h, C) = rectangular_to_polar(u, v);
    [L, C, h]
}

/// Convert coordinates for LCh(uv) to CIELUV. This is a one-hop, direct
/// conversion.
#[allow(non_snake_case)]
fn luv_lch_to_luv(value: &[Float; 3]) -> [Float; 3] {
    let [L, C, h] = *value;
    let (u, v) = polar_to_rectangular(h, C);
    [L, u, v]
}

// --------------------------------------------------------------------------------------------------------------------

/// Determine whether the color space is sRGB or derived from sRGB without
/// going through XYZ.
#[inline]
const fn is_rgb_branch(space: ColorSpace) -> bool {
    use ColorSpace::*;
    matches!(space, Srgb | LinearSrgb | Hsv | Hsl)
}

/// Convert coordinates on the RGB branch to sRGB.
fn rgb_branch_to_srgb(space: ColorSpace, value: &[Float; 3]) -> [Float; 3] {
    match space {
        ColorSpace::LinearSrgb => linear_srgb_to_srgb(value),
        ColorSpace::Hsv => hsv_to_srgb(value),
        ColorSpace::Hsl => hsl_to_srgb(value),
        _ => *value,
    }
}

/// Convert sRGB coordinates to a color space on the RGB branch.
fn srgb_to_rgb_branch(space: ColorSpace, value: &[Float; 3]) -> [Float; 3] {
    match space {
        ColorSpace::LinearSrgb => srgb_to_linear_srgb(value),
        ColorSpace::Hsv => srgb_to_hsv(value),
        ColorSpace::Hsl => srgb_to_hsl(value),
        _ => *value,
    }
}

/// Convert coordinates for HSLuv to XYZ. This is a four-hop conversion that
/// always uses D65.
#[inline]
fn hsluv_to_xyz(value: &[Float; 3]) -> [Float; 3] {
    luv_to_xyz(&luv_lch_to_luv(&hsluv_to_luv_lch(value)), &D65)
}

/// Convert coordinates for XYZ to HSLuv. This is a four-hop conversion that
/// always uses D65.
#[inline]
fn xyz_to_hsluv(value: &[Float; 3]) -> [Float; 3] {
    luv_lch_to_hsluv(&luv_to_luv_lch(&xyz_to_luv(value, &D65)))
}

/// Convert coordinates for HPLuv to XYZ. This is a four-hop conversion that
/// always uses D65.
#[inline]
fn hpluv_to_xyz(value: &[Float; 3]) -> [Float; 3] {
    luv_to_xyz(&luv_lch_to_luv(&hpluv_to_luv_lch(value)), &D65)
}

/// Convert coordinates for XYZ to HPLuv. This is a four-hop conversion that
/// always uses D65.
#[inline]
fn xyz_to_hpluv(value: &[Float; 3]) -> [Float; 3] {
    luv_lch_to_hpluv(&luv_to_luv_lch(&xyz_to_luv(value, &D65)))
}

/// Convert the coordinates from one color space to another.
///
/// This function converts the coordinates to the targeted color space, which
/// may be the same as the original color space. Conversions to and from
/// CIELAB, CIELUV, HCL, LCh(uv), and xyY use the given white point. HSLuv and
/// HPLuv always use D65. This function does not check whether the result is in
/// gamut for the targeted color space.
#[must_use = "function returns new color coordinates and does not mutate original value"]
pub(crate) fn convert(
    from_space: ColorSpace,
    to_space: ColorSpace,
    coordinates: &[Float; 3],
    white: &WhitePoint,
) -> [Float; 3] {
    use ColorSpace::*;

    // 1. Be done if color spaces are the same.
    if from_space == to_space {
        return *coordinates;
    }

    // 2. Handle in-branch conversions that don't go through root XYZ
    if is_rgb_branch(from_space) && is_rgb_branch(to_space) {
        let srgb = rgb_branch_to_srgb(from_space, coordinates);
        return srgb_to_rgb_branch(to_space, &srgb);
    }

    match (from_space, to_space) {
        (Lab, Hcl) => return lab_to_hcl(coordinates),
        (Hcl, Lab) => return hcl_to_lab(coordinates),
        (Luv, LuvLch) => return luv_to_luv_lch(coordinates),
        (LuvLch, Luv) => return luv_lch_to_luv(coordinates),
        _ => (),
    }

    // 3a. Convert from source color space to root XYZ
    let intermediate = match from_space {
        Srgb | Hsv | Hsl => linear_srgb_to_xyz(&srgb_to_linear_srgb(&rgb_branch_to_srgb(
            from_space,
            coordinates,
        ))),
        LinearSrgb => linear_srgb_to_xyz(coordinates),
        Xyz => *coordinates,
        Xyy => xyy_to_xyz(coordinates),
        Lab => lab_to_xyz(coordinates, white),
        Luv => luv_to_xyz(coordinates, white),
        Hcl => lab_to_xyz(&hcl_to_lab(coordinates), white),
        LuvLch => luv_to_xyz(&luv_lch_to_luv(coordinates), white),
        Hsluv => hsluv_to_xyz(coordinates),
        Hpluv => hpluv_to_xyz(coordinates),
    };

    // 3b. Convert from root XYZ to target color space on different branch
    match to_space {
        Srgb | Hsv | Hsl => srgb_to_rgb_branch(
            to_space,
            &linear_srgb_to_srgb(&xyz_to_linear_srgb(&intermediate)),
        ),
        LinearSrgb => xyz_to_linear_srgb(&intermediate),
        Xyz => intermediate,
        Xyy => xyz_to_xyy(&intermediate, white),
        Lab => xyz_to_lab(&intermediate, white),
        Luv => xyz_to_luv(&intermediate, white),
        Hcl => lab_to_hcl(&xyz_to_lab(&intermediate, white)),
        LuvLch => luv_to_luv_lch(&xyz_to_luv(&intermediate, white)),
        Hsluv => xyz_to_hsluv(&intermediate),
        Hpluv => xyz_to_hpluv(&intermediate),
    }
}
