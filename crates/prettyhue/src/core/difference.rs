use super::{convert, is_achromatic, ColorSpace, WhitePoint};
use crate::Float;

/// A choice of strategy for interpolating hues.
///
/// This enum is used by [`Color::interpolate`](crate::Color::interpolate).
///
/// Since hues are expressed as angles, the same perceptual hue has an infinite
/// number of representations modulo 360. Furthermore, there are two ways of
/// interpolating between two hues, clockwise and counter-clockwise. Consistent
/// with [CSS Color 4](https://www.w3.org/TR/css-color-4/#hue-interpolation),
/// the interpolation strategy selects the way based either on the distance
/// between hues, [`HueInterpolation::Shorter`] and
/// [`HueInterpolation::Longer`], or on the direction,
/// [`HueInterpolation::Increasing`] and [`HueInterpolation::Decreasing`].
/// The `blend_*` methods on [`Color`](crate::Color) all use
/// [`HueInterpolation::Shorter`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum HueInterpolation {
    /// Take the shorter arc between the two hue angles.
    #[default]
    Shorter,
    /// Take the longer arc between the two hue angles.
    Longer,
    /// Keep increasing hue angles.
    Increasing,
    /// Keep decreasing hue angles.
    Decreasing,
}

/// Adjust the pair of hues based on interpolation strategy.
fn prepare_hue_interpolation(strategy: HueInterpolation, h1: Float, h2: Float) -> [Float; 2] {
    match strategy {
        HueInterpolation::Shorter => {
            if 180.0 < h2 - h1 {
                return [h1 + 360.0, h2];
            } else if h2 - h1 < -180.0 {
                return [h1, h2 + 360.0];
            }
        }
        HueInterpolation::Longer => {
            if (0.0..=180.0).contains(&(h2 - h1)) {
                return [h1 + 360.0, h2];
            } else if (-180.0..=0.0).contains(&(h2 - h1)) {
                return [h1, h2 + 360.0];
            }
        }
        HueInterpolation::Increasing => {
            if h2 < h1 {
                return [h1, h2 + 360.0];
            }
        }
        HueInterpolation::Decreasing => {
            if h1 < h2 {
                return [h1 + 360.0, h2];
            }
        }
    }

    [h1, h2]
}

/// Prepare sRGB coordinates for interpolation.
///
/// This function converts both colors to the interpolation color space. For
/// polar color spaces, it then wraps both hues into `0..360`. If exactly one of
/// the two colors is gray, that color adopts the other color's hue, so that the
/// interpolation does not sweep through unrelated hues. Finally, it adjusts the
/// hues to follow the interpolation strategy.
///
/// By separating preparation from actual interpolation, it becomes possible to
/// amortize the overhead of the former when generating several interpolated
/// colors, e.g., when computing a gradient.
#[must_use = "function returns new color coordinates and does not mutate original values"]
pub(crate) fn prepare_to_interpolate(
    coordinates1: &[Float; 3],
    coordinates2: &[Float; 3],
    interpolation_space: ColorSpace,
    strategy: HueInterpolation,
    white: &WhitePoint,
) -> ([Float; 3], [Float; 3]) {
    let mut coordinates1 = convert(ColorSpace::Srgb, interpolation_space, coordinates1, white);
    let mut coordinates2 = convert(ColorSpace::Srgb, interpolation_space, coordinates2, white);

    if let Some(index) = interpolation_space.hue_index() {
        coordinates1[index] = coordinates1[index].rem_euclid(360.0);
        coordinates2[index] = coordinates2[index].rem_euclid(360.0);

        // Fill in hue of gray
        let gray1 = is_achromatic(interpolation_space, &coordinates1);
        let gray2 = is_achromatic(interpolation_space, &coordinates2);
        if gray1 && !gray2 {
            coordinates1[index] = coordinates2[index];
        } else if gray2 && !gray1 {
            coordinates2[index] = coordinates1[index];
        }

        [coordinates1[index], coordinates2[index]] =
            prepare_hue_interpolation(strategy, coordinates1[index], coordinates2[index]);
    }

    (coordinates1, coordinates2)
}

/// Interpolate between the prepared coordinates.
///
/// This function calculates the linear interpolation for the given factor
/// between equivalent coordinates of the two colors. For the result to be
/// meaningful, the coordinates must be prepared with
/// [`prepare_to_interpolate`].
#[must_use = "function returns new color coordinates and does not mutate original values"]
pub(crate) fn interpolate(
    fraction: Float,
    coordinates1: &[Float; 3],
    coordinates2: &[Float; 3],
) -> [Float; 3] {
    [
        fraction.mul_add(coordinates2[0] - coordinates1[0], coordinates1[0]),
        fraction.mul_add(coordinates2[1] - coordinates1[1], coordinates1[1]),
        fraction.mul_add(coordinates2[2] - coordinates1[2], coordinates1[2]),
    ]
}
