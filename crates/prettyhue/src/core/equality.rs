use super::{ColorSpace, FloatExt};
use crate::{Bits, Float};

/// Test macro for asserting the equality of floating point numbers.
///
/// This macro relies on [`to_eq_bits`] to normalize the two floating point
/// numbers by zeroing out not-a-numbers, reducing resolution, and dropping the
/// sign of negative zeros and then compares the resulting bit strings.
///
/// # Panics
///
/// This macro panics if the normalized bit strings are not identical. Its
/// message places the numbers below each other at the beginning of subsequent
/// lines for easy comparability.
#[macro_export]
macro_rules! assert_close_enough {
    ($f1:expr, $f2:expr $(,)?) => {
        let (f1, f2) = ($f1, $f2);
        let bits1 = $crate::to_eq_bits(f1);
        let bits2 = $crate::to_eq_bits(f2);
        assert_eq!(bits1, bits2, "quantities differ:\n{:?}\n{:?}", f1, f2);
    };
}

/// Test macro for asserting that two coordinate arrays describe the same
/// color.
///
/// Given a color space and two coordinate arrays, this macro normalizes the
/// coordinates by zeroing out not-a-numbers, scaling hues to unit range,
/// reducing resolution, and dropping the sign of negative zeros before
/// comparing the resulting bit strings.
///
/// # Panics
///
/// This macro panics if the normalized bit strings are not identical. Its
/// message places the coordinates below each other at the beginning of
/// subsequent lines for easy comparability.
#[cfg(test)]
macro_rules! assert_same_coordinates {
    ($space:expr , $cs1:expr , $cs2:expr $(,)?) => {
        let (space, cs1, cs2) = ($space, $cs1, $cs2);
        let bits1 = $crate::core::to_eq_coordinates(space, cs1);
        let bits2 = $crate::core::to_eq_coordinates(space, cs2);
        assert_eq!(
            bits1, bits2,
            "color coordinates differ:\n{:?}\n{:?}",
            cs1, cs2
        );
    };
}

#[cfg(test)]
pub(crate) use assert_same_coordinates;

// --------------------------------------------------------------------------------------------------------------------

/// Normalize coordinates for equality testing.
#[cfg(test)]
#[must_use = "function returns new color coordinates and does not mutate original value"]
pub(crate) fn to_eq_coordinates(space: ColorSpace, coordinates: &[Float; 3]) -> [Bits; 3] {
    let mut coordinates = *coordinates;

    // Normalize rotation and scale to unit range.
    if let Some(index) = space.hue_index() {
        coordinates[index] = coordinates[index].rem_euclid(360.0) / 360.0;
    }

    coordinates.map(to_eq_bits)
}

/// Helper function to normalize a floating point number before equality
/// testing.
///
/// This function zeros out not-a-number, reduces significant digits after the
/// decimal, and drops the sign of negative zero and returns the result as a bit
/// string. It is only public because the [`assert_close_enough`] test macro
/// uses it.
#[doc(hidden)]
#[inline]
pub fn to_eq_bits(f: Float) -> Bits {
    // Eliminate not-a-number.
    let mut f = if f.is_nan() { 0.0 } else { f };

    // Reduce precision.
    f = (<Float as FloatExt>::ROUNDING_FACTOR * f).round();

    // Too much negativity!
    if f == -0.0 {
        f = 0.0
    }

    f.to_bits()
}

// --------------------------------------------------------------------------------------------------------------------

/// The chroma at or below which HCL and LCh(uv) colors count as gray.
pub(crate) const ACHROMATIC_CHROMA: Float = 0.00015;

/// Determine whether the polar coordinates describe a gray.
///
/// For HCL and LCh(uv), this function compares chroma against a small
/// threshold. For the HSV family, it checks for zero saturation. Colors in
/// non-polar color spaces are never considered gray.
pub(crate) fn is_achromatic(space: ColorSpace, coordinates: &[Float; 3]) -> bool {
    use ColorSpace::*;

    match space {
        Hcl | LuvLch => coordinates[1] <= ACHROMATIC_CHROMA,
        Hsv | Hsl | Hsluv | Hpluv => coordinates[1] == 0.0,
        _ => false,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::assert_close_enough;

    #[test]
    fn test_eq_bits() {
        assert_eq!(to_eq_bits(-0.0), to_eq_bits(0.0), "signed zero");
        assert_eq!(to_eq_bits(Float::NAN), to_eq_bits(0.0), "not-a-number");
        assert_close_enough!(0.1 + 0.2, 0.3);
    }

    #[test]
    fn test_eq_coordinates() {
        assert_eq!(
            to_eq_coordinates(ColorSpace::Hcl, &[-30.0, 0.5, 0.5]),
            to_eq_coordinates(ColorSpace::Hcl, &[330.0, 0.5, 0.5]),
            "HCL hue -30º",
        );
        assert_eq!(
            to_eq_coordinates(ColorSpace::LuvLch, &[0.5, 0.5, 720.0]),
            to_eq_coordinates(ColorSpace::LuvLch, &[0.5, 0.5, 0.0]),
            "LCh(uv) hue 720º",
        );
        assert_ne!(
            to_eq_coordinates(ColorSpace::Lab, &[-30.0, 0.5, 0.5]),
            to_eq_coordinates(ColorSpace::Lab, &[330.0, 0.5, 0.5]),
            "CIELAB has no hue",
        );
    }

    #[test]
    fn test_achromatic() {
        assert!(is_achromatic(ColorSpace::Hcl, &[120.0, 0.0001, 0.5]), "HCL with low chroma");
        assert!(!is_achromatic(ColorSpace::Hcl, &[120.0, 0.001, 0.5]), "HCL with some chroma");
        assert!(is_achromatic(ColorSpace::LuvLch, &[0.5, 0.0, 0.0]), "LCh(uv) with zero chroma");
        assert!(is_achromatic(ColorSpace::Hsv, &[0.0, 0.0, 0.7]), "HSV with zero saturation");
        assert!(!is_achromatic(ColorSpace::Hsl, &[0.0, 0.01, 0.7]), "HSL with some saturation");
        assert!(!is_achromatic(ColorSpace::Lab, &[0.5, 0.0, 0.0]), "CIELAB has no hue");
    }
}
