use crate::Float;

/// A reference white point in XYZ.
///
/// CIELAB, CIELUV, their polar forms HCL and LCh(uv), as well as the
/// chromaticity of black in xyY are all relative to a reference white. The
/// same white point must be used when converting to one of these models and
/// back again.
///
/// This crate provides [`D65`] and [`D50`]. Other white points can be created
/// with [`WhitePoint::new`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct WhitePoint([Float; 3]);

/// The D65 standard illuminant, i.e., daylight around noon.
///
/// The tristimulus values are those of sRGB white under the conversion matrix
/// used by this crate. Hence `#ffffff` has CIELAB coordinates `[1, 0, 0]` to
/// within floating point error. They differ from the rounded values commonly
/// quoted for D65, `[0.95047, 1.0, 1.08883]`, only in the fifth decimal.
#[allow(clippy::excessive_precision)]
pub const D65: WhitePoint = WhitePoint([0.9504559270516717, 1.0, 1.0890577507598784]);

/// The D50 standard illuminant, i.e., daylight near sunrise and sunset.
///
/// This crate does not perform chromatic adaptation. Using D50 with colors
/// in sRGB merely changes the reference white for normalization.
pub const D50: WhitePoint = WhitePoint([0.96422, 1.0, 0.82521]);

impl WhitePoint {
    /// Create a new white point with the given tristimulus values.
    pub const fn new(x: Float, y: Float, z: Float) -> Self {
        Self([x, y, z])
    }

    /// Access the tristimulus values.
    pub const fn xyz(&self) -> &[Float; 3] {
        &self.0
    }

    /// Compute the chromaticity coordinates x, y of this white point.
    pub fn chromaticity(&self) -> (Float, Float) {
        let [x, y, z] = self.0;
        let sum = x + y + z;
        (x / sum, y / sum)
    }
}

impl Default for WhitePoint {
    /// The default white point is [`D65`].
    fn default() -> Self {
        D65
    }
}

impl AsRef<[Float; 3]> for WhitePoint {
    fn as_ref(&self) -> &[Float; 3] {
        &self.0
    }
}

#[cfg(test)]
mod test {
    use super::{D50, D65};
    use crate::assert_close_enough;

    #[test]
    fn test_chromaticity() {
        let (x, y) = D65.chromaticity();
        assert!((x - 0.312727).abs() < 1e-4, "D65 x is {}", x);
        assert!((y - 0.329023).abs() < 1e-4, "D65 y is {}", y);

        let (x, y) = D50.chromaticity();
        assert_close_enough!(x, 0.96422 / 2.78943);
        assert_close_enough!(y, 1.0 / 2.78943);
    }
}
