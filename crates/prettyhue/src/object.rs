use std::str::FromStr;

use crate::core::{
    clip, convert, euclidean, fast_delinearize, fast_linearize, format, format_hex, from_24bit,
    in_gamut, interpolate, parse, prepare_to_interpolate, to_24bit, ColorSpace,
    HueInterpolation, WhitePoint, D65,
};
use crate::error::HexFormatError;
use crate::Float;

/// Create a new color from 24-bit integer coordinates.
///
/// Like [`Color::from_24bit`], this macro creates a new color from 24-bit
/// integer coordinates. However, it also is safe to use in const expressions.
///
/// Older Rust versions do not allow floating point operations in const
/// functions. However, they do allow floating point operations in const
/// expressions, notably as arguments to a const function such as
/// [`Color::new`]. Hence, this macro converts the integer coordinates before
/// passing them on.
///
/// ```
/// # use prettyhue::{rgb, Color};
/// const GOLDENROD: Color = rgb!(0xda, 0xa5, 0x20);
/// assert_eq!(GOLDENROD.to_hex(), "#daa520");
/// ```
#[macro_export]
macro_rules! rgb {
    ($r:expr, $g:expr, $b:expr) => {
        $crate::Color::new([
            $r as $crate::Float / 255.0,
            $g as $crate::Float / 255.0,
            $b as $crate::Float / 255.0,
        ])
    };
}

/// A color object.
///
/// Every color object stores three gamma-corrected sRGB coordinates. Colors
/// in other models are computed on demand with [`Color::to`] and turned back
/// into color objects with [`Color::from_space`]. Both also come in variants
/// that take an explicit [`WhitePoint`]; all other methods use [`D65`].
///
/// # Gamut
///
/// The coordinates of displayable colors have unit range. Conversions and
/// blends may well produce coordinates outside that range. That is not an
/// error. [`Color::is_valid`] detects such colors and [`Color::clamped`]
/// forces them back into gamut.
///
/// # Equality
///
/// Colors compare equal only if their coordinates are exactly the same. Use
/// [`Color::almost_equal`] to allow for the error accumulated by conversions.
///
/// # Coordinate Access
///
/// Rust code can access individual coordinates by indexing a color object with
/// integers `0..=2` or through [`AsRef`].
#[derive(Copy, Clone, Default, PartialEq)]
pub struct Color {
    coordinates: [Float; 3],
}

impl Color {
    /// Instantiate a new color with the given sRGB coordinates.
    ///
    /// ```
    /// # use prettyhue::Color;
    /// let pink = Color::new([1.0, 0.75, 0.8]);
    /// assert_eq!(pink.as_ref(), &[1.0, 0.75, 0.8]);
    /// ```
    #[inline]
    pub const fn new(coordinates: [Float; 3]) -> Self {
        Self { coordinates }
    }

    /// Instantiate a new color from its sRGB coordinates.
    #[inline]
    pub const fn srgb(r: Float, g: Float, b: Float) -> Self {
        Self::new([r, g, b])
    }

    /// Instantiate a new color from its 24-bit sRGB coordinates.
    ///
    /// ```
    /// # use prettyhue::Color;
    /// let blue = Color::from_24bit(0x31, 0x78, 0xea);
    /// assert_eq!(blue.to_hex(), "#3178ea");
    /// ```
    #[inline]
    pub fn from_24bit(r: u8, g: u8, b: u8) -> Self {
        Self::new(from_24bit(r, g, b))
    }

    /// Instantiate a new color from coordinates in the given color space,
    /// relative to [`D65`].
    ///
    /// ```
    /// # use prettyhue::{Color, ColorSpace};
    /// let red = Color::from_space(ColorSpace::Hsv, [0.0, 1.0, 1.0]);
    /// assert_eq!(red.to_hex(), "#ff0000");
    /// ```
    #[inline]
    pub fn from_space(space: ColorSpace, coordinates: [Float; 3]) -> Self {
        Self::from_space_with(space, coordinates, &D65)
    }

    /// Instantiate a new color from coordinates in the given color space,
    /// relative to the given white point.
    ///
    /// The white point only matters for CIELAB, CIELUV, HCL, LCh(uv), and
    /// xyY. HSLuv and HPLuv always use [`D65`].
    pub fn from_space_with(space: ColorSpace, coordinates: [Float; 3], white: &WhitePoint) -> Self {
        Self::new(convert(space, ColorSpace::Srgb, &coordinates, white))
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Access the sRGB coordinates.
    #[inline]
    pub const fn coordinates(&self) -> &[Float; 3] {
        &self.coordinates
    }

    /// Determine the 24-bit sRGB coordinates.
    ///
    /// Each coordinate is scaled by 255, incremented by one half, and
    /// truncated, saturating at the ends.
    #[inline]
    pub fn to_24bit(&self) -> [u8; 3] {
        to_24bit(&self.coordinates)
    }

    /// Format this color in six digit hashed hexadecimal notation.
    ///
    /// ```
    /// # use prettyhue::Color;
    /// assert_eq!(Color::srgb(1.0, 0.5, 0.0).to_hex(), "#ff8000");
    /// assert_eq!(Color::srgb(1.5, -0.5, 0.0).to_hex(), "#ff0000");
    /// ```
    #[inline]
    pub fn to_hex(&self) -> String {
        format_hex(&self.coordinates)
    }

    /// Parse a color in hashed hexadecimal notation.
    ///
    /// This method accepts three and six digits, independent of case. It is
    /// equivalent to [`Color::from_str`].
    ///
    /// ```
    /// # use prettyhue::Color;
    /// # use prettyhue::error::HexFormatError;
    /// assert_eq!(Color::from_hex("#f0c")?, Color::from_hex("#FF00CC")?);
    /// assert_eq!(Color::from_hex("f0c"), Err(HexFormatError::UnknownFormat));
    /// # Ok::<(), HexFormatError>(())
    /// ```
    #[inline]
    pub fn from_hex(s: &str) -> Result<Self, HexFormatError> {
        parse(s).map(Self::new)
    }

    /// Convert this color to the given color space, relative to [`D65`].
    ///
    /// ```
    /// # use prettyhue::{Color, ColorSpace};
    /// let [h, c, l] = Color::srgb(1.0, 0.0, 0.0).to(ColorSpace::Hcl);
    /// assert!((h - 39.99987).abs() < 1e-5);
    /// assert!((c - 1.04550).abs() < 1e-5);
    /// assert!((l - 0.53237).abs() < 1e-5);
    /// ```
    #[inline]
    pub fn to(&self, space: ColorSpace) -> [Float; 3] {
        self.to_with(space, &D65)
    }

    /// Convert this color to the given color space, relative to the given
    /// white point.
    #[inline]
    pub fn to_with(&self, space: ColorSpace, white: &WhitePoint) -> [Float; 3] {
        convert(ColorSpace::Srgb, space, &self.coordinates, white)
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Convert to linear sRGB.
    pub fn linear_rgb(&self) -> [Float; 3] {
        self.to(ColorSpace::LinearSrgb)
    }

    /// Create a color from linear sRGB coordinates.
    pub fn from_linear_rgb(r: Float, g: Float, b: Float) -> Self {
        Self::from_space(ColorSpace::LinearSrgb, [r, g, b])
    }

    /// Convert to linear sRGB, approximating the gamma curve with an
    /// exponent of 2.2.
    ///
    /// This is faster than [`Color::linear_rgb`] but off by up to a few
    /// percent for dark colors.
    pub fn fast_linear_rgb(&self) -> [Float; 3] {
        self.coordinates.map(fast_linearize)
    }

    /// Create a color from linear sRGB coordinates, approximating the gamma
    /// curve with an exponent of 1/2.2.
    pub fn from_fast_linear_rgb(r: Float, g: Float, b: Float) -> Self {
        Self::new([r, g, b].map(fast_delinearize))
    }

    /// Convert to XYZ.
    pub fn xyz(&self) -> [Float; 3] {
        self.to(ColorSpace::Xyz)
    }

    /// Create a color from XYZ coordinates.
    pub fn from_xyz(x: Float, y: Float, z: Float) -> Self {
        Self::from_space(ColorSpace::Xyz, [x, y, z])
    }

    /// Convert to xyY.
    pub fn xyy(&self) -> [Float; 3] {
        self.to(ColorSpace::Xyy)
    }

    /// Create a color from xyY coordinates.
    #[allow(non_snake_case)]
    pub fn from_xyy(x: Float, y: Float, Y: Float) -> Self {
        Self::from_space(ColorSpace::Xyy, [x, y, Y])
    }

    /// Convert to CIELAB relative to [`D65`].
    pub fn lab(&self) -> [Float; 3] {
        self.to(ColorSpace::Lab)
    }

    /// Convert to CIELAB relative to the given white point.
    pub fn lab_with(&self, white: &WhitePoint) -> [Float; 3] {
        self.to_with(ColorSpace::Lab, white)
    }

    /// Create a color from CIELAB coordinates relative to [`D65`].
    #[allow(non_snake_case)]
    pub fn from_lab(L: Float, a: Float, b: Float) -> Self {
        Self::from_space(ColorSpace::Lab, [L, a, b])
    }

    /// Create a color from CIELAB coordinates relative to the given white
    /// point.
    #[allow(non_snake_case)]
    pub fn from_lab_with(L: Float, a: Float, b: Float, white: &WhitePoint) -> Self {
        Self::from_space_with(ColorSpace::Lab, [L, a, b], white)
    }

    /// Convert to CIELUV relative to [`D65`].
    pub fn luv(&self) -> [Float; 3] {
        self.to(ColorSpace::Luv)
    }

    /// Convert to CIELUV relative to the given white point.
    pub fn luv_with(&self, white: &WhitePoint) -> [Float; 3] {
        self.to_with(ColorSpace::Luv, white)
    }

    /// Create a color from CIELUV coordinates relative to [`D65`].
    #[allow(non_snake_case)]
    pub fn from_luv(L: Float, u: Float, v: Float) -> Self {
        Self::from_space(ColorSpace::Luv, [L, u, v])
    }

    /// Create a color from CIELUV coordinates relative to the given white
    /// point.
    #[allow(non_snake_case)]
    pub fn from_luv_with(L: Float, u: Float, v: Float, white: &WhitePoint) -> Self {
        Self::from_space_with(ColorSpace::Luv, [L, u, v], white)
    }

    /// Convert to HCL, i.e., polar CIELAB, relative to [`D65`].
    ///
    /// Note that the hue comes first.
    pub fn hcl(&self) -> [Float; 3] {
        self.to(ColorSpace::Hcl)
    }

    /// Convert to HCL relative to the given white point.
    pub fn hcl_with(&self, white: &WhitePoint) -> [Float; 3] {
        self.to_with(ColorSpace::Hcl, white)
    }

    /// Create a color from HCL coordinates relative to [`D65`].
    #[allow(non_snake_case)]
    pub fn from_hcl(h: Float, C: Float, L: Float) -> Self {
        Self::from_space(ColorSpace::Hcl, [h, C, L])
    }

    /// Create a color from HCL coordinates relative to the given white point.
    #[allow(non_snake_case)]
    pub fn from_hcl_with(h: Float, C: Float, L: Float, white: &WhitePoint) -> Self {
        Self::from_space_with(ColorSpace::Hcl, [h, C, L], white)
    }

    /// Convert to LCh(uv), i.e., polar CIELUV, relative to [`D65`].
    ///
    /// Note that the hue comes last.
    pub fn luv_lch(&self) -> [Float; 3] {
        self.to(ColorSpace::LuvLch)
    }

    /// Convert to LCh(uv) relative to the given white point.
    pub fn luv_lch_with(&self, white: &WhitePoint) -> [Float; 3] {
        self.to_with(ColorSpace::LuvLch, white)
    }

    /// Create a color from LCh(uv) coordinates relative to [`D65`].
    #[allow(non_snake_case)]
    pub fn from_luv_lch(L: Float, C: Float, h: Float) -> Self {
        Self::from_space(ColorSpace::LuvLch, [L, C, h])
    }

    /// Create a color from LCh(uv) coordinates relative to the given white
    /// point.
    #[allow(non_snake_case)]
    pub fn from_luv_lch_with(L: Float, C: Float, h: Float, white: &WhitePoint) -> Self {
        Self::from_space_with(ColorSpace::LuvLch, [L, C, h], white)
    }

    /// Convert to HSV.
    pub fn hsv(&self) -> [Float; 3] {
        self.to(ColorSpace::Hsv)
    }

    /// Create a color from HSV coordinates.
    pub fn from_hsv(h: Float, s: Float, v: Float) -> Self {
        Self::from_space(ColorSpace::Hsv, [h, s, v])
    }

    /// Convert to HSL.
    pub fn hsl(&self) -> [Float; 3] {
        self.to(ColorSpace::Hsl)
    }

    /// Create a color from HSL coordinates.
    pub fn from_hsl(h: Float, s: Float, l: Float) -> Self {
        Self::from_space(ColorSpace::Hsl, [h, s, l])
    }

    /// Convert to HSLuv.
    ///
    /// ```
    /// # use prettyhue::Color;
    /// let [h, s, l] = Color::from_24bit(0x31, 0x78, 0xea).hsluv();
    /// assert!((h - 256.394).abs() < 1e-3);
    /// assert!((s - 0.895).abs() < 1e-3);
    /// assert!((l - 0.519).abs() < 1e-3);
    /// ```
    pub fn hsluv(&self) -> [Float; 3] {
        self.to(ColorSpace::Hsluv)
    }

    /// Create a color from HSLuv coordinates.
    pub fn from_hsluv(h: Float, s: Float, l: Float) -> Self {
        Self::from_space(ColorSpace::Hsluv, [h, s, l])
    }

    /// Convert to HPLuv.
    ///
    /// HPLuv saturation may exceed 1 for highly saturated colors.
    pub fn hpluv(&self) -> [Float; 3] {
        self.to(ColorSpace::Hpluv)
    }

    /// Create a color from HPLuv coordinates.
    pub fn from_hpluv(h: Float, s: Float, l: Float) -> Self {
        Self::from_space(ColorSpace::Hpluv, [h, s, l])
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Determine whether this color is displayable, i.e., all coordinates are
    /// in unit range.
    ///
    /// ```
    /// # use prettyhue::Color;
    /// assert!(Color::srgb(0.0, 0.5, 1.0).is_valid());
    /// assert!(!Color::from_lab(0.5, 1.5, 0.0).is_valid());
    /// ```
    #[inline]
    pub fn is_valid(&self) -> bool {
        in_gamut(ColorSpace::Srgb, &self.coordinates)
    }

    /// Clamp the coordinates to unit range.
    #[inline]
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn clamped(&self) -> Self {
        Self::new(clip(ColorSpace::Srgb, &self.coordinates))
    }

    /// Determine whether the two colors are nearly the same, i.e., the sum of
    /// absolute differences between their coordinates is less than 3/255.
    pub fn almost_equal(&self, other: &Self) -> bool {
        let total: Float = self
            .coordinates
            .iter()
            .zip(other.coordinates.iter())
            .map(|(c1, c2)| (c1 - c2).abs())
            .sum();

        total < 3.0 / 255.0
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Compute the Euclidian distance in sRGB.
    ///
    /// This is fast but does not match human perception well. Prefer
    /// [`Color::distance_lab`].
    pub fn distance_rgb(&self, other: &Self) -> Float {
        euclidean(&self.coordinates, &other.coordinates)
    }

    /// Compute the Euclidian distance in linear sRGB.
    pub fn distance_linear_rgb(&self, other: &Self) -> Float {
        euclidean(&self.linear_rgb(), &other.linear_rgb())
    }

    /// Compute the Euclidian distance in CIELAB.
    ///
    /// This is the recommended metric for perceptual differences.
    ///
    /// ```
    /// # use prettyhue::Color;
    /// # use prettyhue::error::HexFormatError;
    /// let cream = Color::from_hex("#fdffcc")?;
    /// let navy = Color::from_hex("#242a42")?;
    /// assert!((cream.distance_lab(&navy) - 0.91582).abs() < 1e-5);
    /// assert!((cream.distance_rgb(&navy) - 1.30949).abs() < 1e-5);
    /// assert_eq!(cream.distance_lab(&navy), navy.distance_lab(&cream));
    /// # Ok::<(), HexFormatError>(())
    /// ```
    pub fn distance_lab(&self, other: &Self) -> Float {
        euclidean(&self.lab(), &other.lab())
    }

    /// Compute the Euclidian distance in CIELUV.
    pub fn distance_luv(&self, other: &Self) -> Float {
        euclidean(&self.luv(), &other.luv())
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Prepare to interpolate between this and the other color.
    ///
    /// This method converts both colors to the interpolation color space. For
    /// polar color spaces, a gray endpoint adopts the other endpoint's hue, and
    /// the two hues are adjusted to follow the hue interpolation strategy.
    /// [`Interpolator::at`] generates the actual, interpolated colors. It does
    /// not clamp them.
    ///
    /// # Examples
    ///
    /// ```
    /// # use prettyhue::{Color, ColorSpace, HueInterpolation};
    /// # use prettyhue::error::HexFormatError;
    /// let cream = Color::from_hex("#fdffcc")?;
    /// let navy = Color::from_hex("#242a42")?;
    /// let interpolator = cream.interpolate(&navy, ColorSpace::Lab, HueInterpolation::Shorter);
    /// assert_eq!(interpolator.at(0.5).to_hex(), "#8b8d85");
    /// # Ok::<(), HexFormatError>(())
    /// ```
    #[inline]
    pub fn interpolate(
        &self,
        other: &Self,
        space: ColorSpace,
        strategy: HueInterpolation,
    ) -> Interpolator {
        Interpolator::new(self, other, space, strategy)
    }

    /// Blend with the other color in the given color space, taking the shorter
    /// arc for hues.
    #[inline]
    fn blend(&self, other: &Self, space: ColorSpace, fraction: Float) -> Self {
        self.interpolate(other, space, HueInterpolation::Shorter)
            .at(fraction)
    }

    /// Blend with the other color in sRGB.
    ///
    /// This tends to produce muddy intermediate colors. Prefer
    /// [`Color::blend_lab`].
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn blend_rgb(&self, other: &Self, fraction: Float) -> Self {
        self.blend(other, ColorSpace::Srgb, fraction)
    }

    /// Blend with the other color in linear sRGB.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn blend_linear_rgb(&self, other: &Self, fraction: Float) -> Self {
        self.blend(other, ColorSpace::LinearSrgb, fraction)
    }

    /// Blend with the other color in HSV.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn blend_hsv(&self, other: &Self, fraction: Float) -> Self {
        self.blend(other, ColorSpace::Hsv, fraction)
    }

    /// Blend with the other color in CIELAB.
    ///
    /// This is the recommended way of blending colors.
    ///
    /// ```
    /// # use prettyhue::Color;
    /// # use prettyhue::error::HexFormatError;
    /// let cream = Color::from_hex("#fdffcc")?;
    /// let navy = Color::from_hex("#242a42")?;
    /// assert_eq!(cream.blend_lab(&navy, 0.0), cream);
    /// assert!(cream.blend_lab(&navy, 1.0).almost_equal(&navy));
    /// assert_eq!(cream.blend_lab(&navy, 0.5).to_hex(), "#8b8d85");
    /// # Ok::<(), HexFormatError>(())
    /// ```
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn blend_lab(&self, other: &Self, fraction: Float) -> Self {
        self.blend(other, ColorSpace::Lab, fraction)
    }

    /// Blend with the other color in CIELUV.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn blend_luv(&self, other: &Self, fraction: Float) -> Self {
        self.blend(other, ColorSpace::Luv, fraction)
    }

    /// Blend with the other color in HCL.
    ///
    /// ```
    /// # use prettyhue::Color;
    /// # use prettyhue::error::HexFormatError;
    /// let cream = Color::from_hex("#fdffcc")?;
    /// let navy = Color::from_hex("#242a42")?;
    /// assert_eq!(cream.blend_hcl(&navy, 0.5).to_hex(), "#579697");
    /// # Ok::<(), HexFormatError>(())
    /// ```
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn blend_hcl(&self, other: &Self, fraction: Float) -> Self {
        self.blend(other, ColorSpace::Hcl, fraction)
    }

    /// Blend with the other color in LCh(uv).
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn blend_luv_lch(&self, other: &Self, fraction: Float) -> Self {
        self.blend(other, ColorSpace::LuvLch, fraction)
    }
}

impl FromStr for Color {
    type Err = HexFormatError;

    /// Instantiate a color from its hashed hexadecimal representation.
    ///
    /// The notation has three or six hexadecimal digits, e.g., `#123` or
    /// `#cafe00`. The three digit version is a short form of the six digit
    /// version with every digit repeated. In other words, the red coordinate
    /// in `#123` is not 0x1/0xf but 0x11/0xff. Letters may be upper or lower
    /// case. White space is not trimmed.
    ///
    /// ```
    /// # use prettyhue::Color;
    /// # use prettyhue::error::HexFormatError;
    /// use std::str::FromStr;
    ///
    /// let navy = Color::from_str("#011480")?;
    /// assert_eq!(navy, Color::from_24bit(0x01, 0x14, 0x80));
    ///
    /// let rose: Color = str::parse("#FDC")?;
    /// assert_eq!(rose, Color::from_24bit(0xff, 0xdd, 0xcc));
    /// # Ok::<(), HexFormatError>(())
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl TryFrom<&str> for Color {
    type Error = HexFormatError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Color::from_str(value)
    }
}

impl AsRef<[Float; 3]> for Color {
    fn as_ref(&self) -> &[Float; 3] {
        &self.coordinates
    }
}

impl std::ops::Index<usize> for Color {
    type Output = Float;

    /// Access the coordinate with the given index.
    ///
    /// # Panics
    ///
    /// This method panics if `2 < index`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use prettyhue::Color;
    /// let purple = Color::srgb(0.5, 0.4, 0.75);
    /// assert_eq!(purple[2], 0.75);
    /// ```
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.coordinates[index]
    }
}

impl std::fmt::Debug for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [c1, c2, c3] = self.coordinates;
        f.write_fmt(format_args!("Color([{}, {}, {}])", c1, c2, c3))
    }
}

impl std::fmt::Display for Color {
    /// Format this color.
    ///
    /// This method formats the color with the CSS `color()` function and three
    /// space-separated sRGB coordinates. It respects the formatter's
    /// precision, defaulting to 5 digits past the decimal. Use
    /// [`Color::to_hex`] for hashed hexadecimal notation instead.
    ///
    /// ```
    /// # use prettyhue::Color;
    /// # use prettyhue::error::HexFormatError;
    /// let lime = Color::from_hex("#a1d2ae")?;
    /// assert_eq!(format!("{}", lime), "color(srgb 0.63137 0.82353 0.68235)");
    /// assert_eq!(format!("{:.3}", lime), "color(srgb 0.631 0.824 0.682)");
    /// assert_eq!(format!("{}", Color::srgb(1.0, 0.5, 0.0)), "color(srgb 1 0.5 0)");
    /// # Ok::<(), HexFormatError>(())
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        format(&self.coordinates, f)
    }
}

// ====================================================================================================================

/// A color interpolator.
///
/// An interpolator holds two colors converted to the interpolation color space
/// and prepared for interpolation. See [`Color::interpolate`].
#[derive(Clone, Debug)]
pub struct Interpolator {
    space: ColorSpace,
    coordinates1: [Float; 3],
    coordinates2: [Float; 3],
}

impl Interpolator {
    /// Create a new color interpolator.
    ///
    /// See [`Color::interpolate`] for an example.
    pub fn new(
        color1: &Color,
        color2: &Color,
        space: ColorSpace,
        strategy: HueInterpolation,
    ) -> Self {
        let (coordinates1, coordinates2) = prepare_to_interpolate(
            &color1.coordinates,
            &color2.coordinates,
            space,
            strategy,
            &D65,
        );

        Self {
            space,
            coordinates1,
            coordinates2,
        }
    }

    /// Access the interpolation color space.
    #[inline]
    pub const fn space(&self) -> ColorSpace {
        self.space
    }

    /// Compute the interpolated color for the given fraction.
    ///
    /// A fraction of 0 yields the first color and a fraction of 1 the second
    /// color, modulo conversion error. Fractions outside `0..=1` extrapolate.
    pub fn at(&self, fraction: Float) -> Color {
        let mut coordinates = interpolate(fraction, &self.coordinates1, &self.coordinates2);
        if let Some(index) = self.space.hue_index() {
            coordinates[index] = coordinates[index].rem_euclid(360.0);
        }

        Color::from_space(self.space, coordinates)
    }
}

#[cfg(test)]
#[allow(clippy::excessive_precision)]
mod test {
    use super::{Color, Interpolator};
    use crate::core::{ColorSpace, HueInterpolation, D50};
    use crate::error::HexFormatError;
    use crate::Float;

    /// A row of reference values, relative to D65 unless marked otherwise.
    struct Sample {
        srgb: [Float; 3],
        hex: &'static str,
        hsl: [Float; 3],
        hsv: [Float; 3],
        xyz: [Float; 3],
        xyy: [Float; 3],
        lab: [Float; 3],
        lab_d50: [Float; 3],
        luv: [Float; 3],
        luv_d50: [Float; 3],
        hcl: [Float; 3],
        hcl_d50: [Float; 3],
    }

    const SAMPLES: [Sample; 15] = [
        Sample {
            srgb: [1.0, 1.0, 1.0],
            hex: "#ffffff",
            hsl: [0.0, 0.0, 1.0],
            hsv: [0.0, 0.0, 1.0],
            xyz: [0.95047, 1.0, 1.08883],
            xyy: [0.312727, 0.329023, 1.0],
            lab: [1.0, 0.0, 0.0],
            lab_d50: [1.0, -0.023881, -0.193622],
            luv: [1.0, 0.0, 0.0],
            luv_d50: [1.0, -0.14716, -0.25658],
            hcl: [0.0, 0.0, 1.0],
            hcl_d50: [262.9688, 0.195089, 1.0],
        },
        Sample {
            srgb: [0.5, 1.0, 1.0],
            hex: "#80ffff",
            hsl: [180.0, 1.0, 0.75],
            hsv: [180.0, 0.5, 1.0],
            xyz: [0.626296, 0.832848, 1.073634],
            xyy: [0.247276, 0.328828, 0.832848],
            lab: [0.93139, -0.353319, -0.108946],
            lab_d50: [0.93139, -0.3741, -0.301663],
            luv: [0.93139, -0.53909, -0.1163],
            luv_d50: [0.93139, -0.67615, -0.35528],
            hcl: [197.1371, 0.369735, 0.93139],
            hcl_d50: [218.8817, 0.480574, 0.93139],
        },
        Sample {
            srgb: [1.0, 0.5, 1.0],
            hex: "#ff80ff",
            hsl: [300.0, 1.0, 0.75],
            hsv: [300.0, 0.5, 1.0],
            xyz: [0.66943, 0.43792, 0.99515],
            xyy: [0.318397, 0.208285, 0.43792],
            lab: [0.720892, 0.651673, -0.422133],
            lab_d50: [0.720892, 0.630425, -0.610035],
            luv: [0.72089, 0.60047, -0.77626],
            luv_d50: [0.72089, 0.49438, -0.96123],
            hcl: [327.0661, 0.77645, 0.720892],
            hcl_d50: [315.9417, 0.877257, 0.720892],
        },
        Sample {
            srgb: [1.0, 1.0, 0.5],
            hex: "#ffff80",
            hsl: [60.0, 1.0, 0.75],
            hsv: [60.0, 0.5, 1.0],
            xyz: [0.808654, 0.943273, 0.34193],
            xyy: [0.386203, 0.450496, 0.943273],
            lab: [0.977637, -0.165795, 0.602017],
            lab_d50: [0.977637, -0.188424, 0.47041],
            luv: [0.97764, 0.05759, 0.79816],
            luv_d50: [0.97764, -0.08628, 0.54731],
            hcl: [105.3975, 0.62443, 0.977637],
            hcl_d50: [111.8287, 0.506743, 0.977637],
        },
        Sample {
            srgb: [0.5, 0.5, 1.0],
            hex: "#8080ff",
            hsl: [240.0, 1.0, 0.75],
            hsv: [240.0, 0.5, 1.0],
            xyz: [0.345256, 0.270768, 0.979954],
            xyy: [0.216329, 0.169656, 0.270768],
            lab: [0.590453, 0.332846, -0.637099],
            lab_d50: [0.590453, 0.315806, -0.82404],
            luv: [0.59045, -0.07568, -1.04877],
            luv_d50: [0.59045, -0.16257, -1.20027],
            hcl: [297.5843, 0.718805, 0.590453],
            hcl_d50: [290.9689, 0.882482, 0.590453],
        },
        Sample {
            srgb: [1.0, 0.5, 0.5],
            hex: "#ff8080",
            hsl: [0.0, 1.0, 0.75],
            hsv: [0.0, 0.5, 1.0],
            xyz: [0.527613, 0.381193, 0.24825],
            xyy: [0.455996, 0.329451, 0.381193],
            lab: [0.681085, 0.483884, 0.228328],
            lab_d50: [0.681085, 0.464258, 0.110043],
            luv: [0.68108, 0.92148, 0.19879],
            luv_d50: [0.68108, 0.82125, 0.02404],
            hcl: [25.261, 0.535049, 0.681085],
            hcl_d50: [13.3347, 0.477121, 0.681085],
        },
        Sample {
            srgb: [0.5, 1.0, 0.5],
            hex: "#80ff80",
            hsl: [120.0, 1.0, 0.75],
            hsv: [120.0, 0.5, 1.0],
            xyz: [0.48448, 0.776121, 0.326734],
            xyy: [0.305216, 0.488946, 0.776121],
            lab: [0.906026, -0.60087, 0.498993],
            lab_d50: [0.906026, -0.619946, 0.369365],
            luv: [0.90603, -0.58869, 0.76102],
            luv_d50: [0.90603, -0.72202, 0.52855],
            hcl: [140.292, 0.78105, 0.906026],
            hcl_d50: [149.2134, 0.72164, 0.906026],
        },
        Sample {
            srgb: [0.5, 0.5, 0.5],
            hex: "#808080",
            hsl: [0.0, 0.0, 0.5],
            hsv: [0.0, 0.0, 0.5],
            xyz: [0.20344, 0.214041, 0.233054],
            xyy: [0.312727, 0.329023, 0.214041],
            lab: [0.53389, 0.0, 0.0],
            lab_d50: [0.53389, -0.014285, -0.115821],
            luv: [0.53389, 0.0, 0.0],
            luv_d50: [0.53389, -0.07857, -0.13699],
            hcl: [0.0, 0.0, 0.53389],
            hcl_d50: [262.9688, 0.116699, 0.53389],
        },
        Sample {
            srgb: [0.0, 1.0, 1.0],
            hex: "#00ffff",
            hsl: [180.0, 1.0, 0.5],
            hsv: [180.0, 1.0, 1.0],
            xyz: [0.538014, 0.787327, 1.069496],
            xyy: [0.224656, 0.32876, 0.787327],
            lab: [0.911132, -0.480875, -0.141312],
            lab_d50: [0.911132, -0.50063, -0.333781],
            luv: [0.91113, -0.70477, -0.15204],
            luv_d50: [0.91113, -0.83886, -0.38582],
            hcl: [196.3762, 0.501209, 0.911132],
            hcl_d50: [213.6923, 0.601698, 0.911132],
        },
        Sample {
            srgb: [1.0, 0.0, 1.0],
            hex: "#ff00ff",
            hsl: [300.0, 1.0, 0.5],
            hsv: [300.0, 1.0, 1.0],
            xyz: [0.592894, 0.284848, 0.969638],
            xyy: [0.320938, 0.15419, 0.284848],
            lab: [0.603242, 0.982343, -0.608249],
            lab_d50: [0.603242, 0.961939, -0.794531],
            luv: [0.60324, 0.84071, -1.08683],
            luv_d50: [0.60324, 0.75194, -1.24161],
            hcl: [328.235, 1.155407, 0.603242],
            hcl_d50: [320.4444, 1.24764, 0.603242],
        },
        Sample {
            srgb: [1.0, 1.0, 0.0],
            hex: "#ffff00",
            hsl: [60.0, 1.0, 0.5],
            hsv: [60.0, 1.0, 1.0],
            xyz: [0.770033, 0.927825, 0.138526],
            xyy: [0.41932, 0.505246, 0.927825],
            lab: [0.971393, -0.215537, 0.94478],
            lab_d50: [0.971393, -0.2378, 0.847398],
            luv: [0.97139, 0.07706, 1.06787],
            luv_d50: [0.97139, -0.0659, 0.81862],
            hcl: [102.8512, 0.969054, 0.971393],
            hcl_d50: [105.6754, 0.880131, 0.971393],
        },
        Sample {
            srgb: [0.0, 0.0, 1.0],
            hex: "#0000ff",
            hsl: [240.0, 1.0, 0.5],
            hsv: [240.0, 1.0, 1.0],
            xyz: [0.180437, 0.072175, 0.950304],
            xyy: [0.15, 0.06, 0.072175],
            lab: [0.32297, 0.791875, -1.078602],
            lab_d50: [0.32297, 0.77815, -1.263638],
            luv: [0.32297, -0.09405, -1.30342],
            luv_d50: [0.32297, -0.14158, -1.38629],
            hcl: [306.2849, 1.338076, 0.32297],
            hcl_d50: [301.6248, 1.484014, 0.32297],
        },
        Sample {
            srgb: [0.0, 1.0, 0.0],
            hex: "#00ff00",
            hsl: [120.0, 1.0, 0.5],
            hsv: [120.0, 1.0, 1.0],
            xyz: [0.357576, 0.715152, 0.119192],
            xyy: [0.3, 0.6, 0.715152],
            lab: [0.877347, -0.861827, 0.831793],
            lab_d50: [0.877347, -0.879067, 0.73917],
            luv: [0.87735, -0.83078, 1.07398],
            luv_d50: [0.87735, -0.95989, 0.84887],
            hcl: [136.016, 1.197759, 0.877347],
            hcl_d50: [139.9409, 1.148534, 0.877347],
        },
        Sample {
            srgb: [1.0, 0.0, 0.0],
            hex: "#ff0000",
            hsl: [0.0, 1.0, 0.5],
            hsv: [0.0, 1.0, 1.0],
            xyz: [0.412456, 0.212673, 0.019334],
            xyy: [0.64, 0.33, 0.212673],
            lab: [0.532408, 0.800925, 0.672032],
            lab_d50: [0.532408, 0.782845, 0.621518],
            luv: [0.53241, 1.75015, 0.37756],
            luv_d50: [0.53241, 1.6718, 0.24096],
            hcl: [39.999, 1.045518, 0.532408],
            hcl_d50: [38.4469, 0.999566, 0.532408],
        },
        Sample {
            srgb: [0.0, 0.0, 0.0],
            hex: "#000000",
            hsl: [0.0, 0.0, 0.0],
            hsv: [0.0, 0.0, 0.0],
            xyz: [0.0, 0.0, 0.0],
            xyy: [0.312727, 0.329023, 0.0],
            lab: [0.0, 0.0, 0.0],
            lab_d50: [0.0, 0.0, 0.0],
            luv: [0.0, 0.0, 0.0],
            luv_d50: [0.0, 0.0, 0.0],
            hcl: [0.0, 0.0, 0.0],
            hcl_d50: [0.0, 0.0, 0.0],
        },
    ];

    fn assert_near(space: ColorSpace, actual: &[Float; 3], expected: &[Float; 3], context: &str) {
        for index in 0..3 {
            let (a, e) = (actual[index], expected[index]);
            if Some(index) == space.hue_index() {
                let chroma = expected[1];
                let delta = (a - e).rem_euclid(360.0);
                assert!(
                    chroma < 1e-3 || delta.min(360.0 - delta) <= 0.05,
                    "{} hue of {} differs:\n{:?}\n{:?}",
                    space,
                    context,
                    actual,
                    expected
                );
            } else {
                assert!(
                    (a - e).abs() <= 1e-3,
                    "{} of {} differs:\n{:?}\n{:?}",
                    space,
                    context,
                    actual,
                    expected
                );
            }
        }
    }

    #[test]
    fn test_reference_conversions() {
        use ColorSpace::*;

        for sample in SAMPLES.iter() {
            let color = Color::new(sample.srgb);
            let context = sample.hex;

            assert_eq!(color.to_hex(), sample.hex, "{}", context);
            assert_near(Hsl, &color.hsl(), &sample.hsl, context);
            assert_near(Hsv, &color.hsv(), &sample.hsv, context);
            assert_near(Xyz, &color.xyz(), &sample.xyz, context);
            assert_near(Xyy, &color.xyy(), &sample.xyy, context);
            assert_near(Lab, &color.lab(), &sample.lab, context);
            assert_near(Lab, &color.lab_with(&D50), &sample.lab_d50, context);
            assert_near(Luv, &color.luv(), &sample.luv, context);
            assert_near(Luv, &color.luv_with(&D50), &sample.luv_d50, context);
            assert_near(Hcl, &color.hcl(), &sample.hcl, context);
            assert_near(Hcl, &color.hcl_with(&D50), &sample.hcl_d50, context);
        }
    }

    #[test]
    fn test_reference_creation() -> Result<(), HexFormatError> {
        for sample in SAMPLES.iter() {
            let color = Color::new(sample.srgb);
            let [h, s, l] = sample.hsl;
            let [hh, ss, v] = sample.hsv;
            let [x, y, z] = sample.xyz;

            let recreated = [
                Color::from_hex(sample.hex)?,
                Color::from_hsl(h, s, l),
                Color::from_hsv(hh, ss, v),
                Color::from_xyz(x, y, z),
                Color::from_space(ColorSpace::Xyy, sample.xyy),
                Color::from_space(ColorSpace::Lab, sample.lab),
                Color::from_space_with(ColorSpace::Lab, sample.lab_d50, &D50),
                Color::from_space(ColorSpace::Luv, sample.luv),
                Color::from_space_with(ColorSpace::Luv, sample.luv_d50, &D50),
                Color::from_space(ColorSpace::Hcl, sample.hcl),
                Color::from_space_with(ColorSpace::Hcl, sample.hcl_d50, &D50),
            ];

            for (index, other) in recreated.iter().enumerate() {
                assert!(
                    color.almost_equal(other),
                    "{} #{}: {:?} vs {:?}",
                    sample.hex,
                    index,
                    color,
                    other
                );
            }
        }

        Ok(())
    }

    #[test]
    fn test_short_hex() -> Result<(), HexFormatError> {
        let samples = [
            ([1.0, 1.0, 1.0], "#fff"),
            ([0.6, 1.0, 1.0], "#9ff"),
            ([1.0, 0.6, 1.0], "#f9f"),
            ([1.0, 1.0, 0.6], "#ff9"),
            ([0.6, 0.6, 1.0], "#99f"),
            ([1.0, 0.6, 0.6], "#f99"),
            ([0.6, 1.0, 0.6], "#9f9"),
            ([0.6, 0.6, 0.6], "#999"),
            ([0.0, 1.0, 1.0], "#0ff"),
            ([1.0, 0.0, 1.0], "#f0f"),
            ([1.0, 1.0, 0.0], "#ff0"),
            ([0.0, 0.0, 1.0], "#00f"),
            ([0.0, 1.0, 0.0], "#0f0"),
            ([1.0, 0.0, 0.0], "#f00"),
        ];

        for (coordinates, hex) in samples {
            assert_eq!(hex.parse::<Color>()?, Color::new(coordinates), "{}", hex);
            assert_eq!(Color::try_from(hex)?, Color::new(coordinates), "{}", hex);
        }

        assert_eq!(Color::from_hex("#f0c")?, Color::from_hex("#ff00cc")?, "short hex");
        Ok(())
    }

    #[test]
    fn test_round_trips() {
        let mut failures = Vec::new();
        let steps = 8;

        for r in 0..=steps {
            for g in 0..=steps {
                for b in 0..=steps {
                    let color = Color::srgb(
                        r as Float / steps as Float,
                        g as Float / steps as Float,
                        b as Float / steps as Float,
                    );

                    for space in ColorSpace::ALL {
                        let again = Color::from_space(space, color.to(space));
                        if !color.almost_equal(&again) {
                            failures.push((color, space, again));
                        }
                    }

                    let again = Color::from_space_with(
                        ColorSpace::Luv,
                        color.to_with(ColorSpace::Luv, &D50),
                        &D50,
                    );
                    if !color.almost_equal(&again) {
                        failures.push((color, ColorSpace::Luv, again));
                    }
                }
            }
        }

        assert!(failures.is_empty(), "round trips failed: {:?}", failures);
    }

    #[test]
    fn test_fixed_points() {
        use ColorSpace::*;

        let white = Color::srgb(1.0, 1.0, 1.0);
        assert_near(Lab, &white.lab(), &[1.0, 0.0, 0.0], "white");
        assert_eq!(white.to_hex(), "#ffffff", "white");
        assert_eq!(white.hsluv()[1], 0.0, "HSLuv saturation of white");
        assert_eq!(white.hpluv()[1], 0.0, "HPLuv saturation of white");

        let red = Color::srgb(1.0, 0.0, 0.0);
        assert_near(Lab, &red.lab(), &[0.532, 0.801, 0.672], "red");
        assert_near(Hcl, &red.hcl(), &[40.0, 1.046, 0.532], "red");
        assert_eq!(red.to_hex(), "#ff0000", "red");

        let black = Color::default();
        assert_eq!(black.hsluv()[1], 0.0, "HSLuv saturation of black");
        assert_eq!(black.hpluv()[1], 0.0, "HPLuv saturation of black");
        for space in ColorSpace::ALL {
            let coordinates = black.to(space);
            if let Some(index) = space.hue_index() {
                assert_eq!(coordinates[index], 0.0, "hue of black in {}", space);
            }
            assert!(
                coordinates.iter().all(|c| c.is_finite()),
                "black in {} is {:?}",
                space,
                coordinates
            );
        }
    }

    #[test]
    fn test_fast_linear() {
        let color = Color::srgb(0.2, 0.5, 0.8);
        let [r1, g1, b1] = color.linear_rgb();
        let [r2, g2, b2] = color.fast_linear_rgb();
        assert!((r1 - r2).abs() < 0.01, "red");
        assert!((g1 - g2).abs() < 0.01, "green");
        assert!((b1 - b2).abs() < 0.01, "blue");
        assert!(color.almost_equal(&Color::from_fast_linear_rgb(r2, g2, b2)), "fast linear");
        assert!(color.almost_equal(&Color::from_linear_rgb(r1, g1, b1)), "linear");
    }

    #[test]
    fn test_validity() {
        let color = Color::srgb(-0.1, 0.5, 1.1);
        assert!(!color.is_valid(), "{:?}", color);
        assert_eq!(color.clamped(), Color::srgb(0.0, 0.5, 1.0), "{:?}", color);
        assert!(color.clamped().is_valid(), "{:?}", color.clamped());

        let gray = Color::srgb(0.5, 0.5, 0.5);
        assert!(gray.almost_equal(&Color::srgb(0.505, 0.5, 0.5)), "almost equal");
        assert!(!gray.almost_equal(&Color::srgb(0.51, 0.5, 0.51)), "not almost equal");
    }

    #[test]
    fn test_distance() {
        let colors = [
            Color::srgb(1.0, 1.0, 1.0),
            Color::srgb(1.0, 0.0, 0.0),
            Color::srgb(0.19, 0.47, 0.92),
            Color::srgb(0.0, 0.0, 0.0),
        ];

        for c1 in colors.iter() {
            assert_eq!(c1.distance_rgb(c1), 0.0, "{:?}", c1);
            assert_eq!(c1.distance_lab(c1), 0.0, "{:?}", c1);
            assert_eq!(c1.distance_luv(c1), 0.0, "{:?}", c1);
            assert_eq!(c1.distance_linear_rgb(c1), 0.0, "{:?}", c1);

            for c2 in colors.iter() {
                assert_eq!(c1.distance_rgb(c2), c2.distance_rgb(c1), "{:?} vs {:?}", c1, c2);
                assert_eq!(c1.distance_lab(c2), c2.distance_lab(c1), "{:?} vs {:?}", c1, c2);
            }
        }

        let black = Color::default();
        let white = Color::srgb(1.0, 1.0, 1.0);
        assert!(
            (black.distance_rgb(&white) - (3.0 as Float).sqrt()).abs() < 1e-12,
            "sRGB distance"
        );
        assert!((black.distance_lab(&white) - 1.0).abs() < 1e-12, "CIELAB distance");
    }

    #[test]
    fn test_blend() -> Result<(), HexFormatError> {
        let c1 = Color::from_hex("#fdffcc")?;
        let c2 = Color::from_hex("#242a42")?;

        for (index, blend) in [
            Color::blend_rgb,
            Color::blend_linear_rgb,
            Color::blend_hsv,
            Color::blend_lab,
            Color::blend_luv,
            Color::blend_hcl,
            Color::blend_luv_lch,
        ]
        .iter()
        .enumerate()
        {
            assert!(blend(&c1, &c2, 0.0).almost_equal(&c1), "blend #{}", index);
            assert!(blend(&c1, &c2, 1.0).almost_equal(&c2), "blend #{}", index);
        }

        let [l1, _, _] = c1.lab();
        let [l2, _, _] = c2.lab();
        let [l, _, _] = c1.blend_lab(&c2, 0.5).lab();
        assert!(l2 < l && l < l1, "{} < {} < {}", l2, l, l1);

        let quarter = Color::new([
            0.75 * c1[0] + 0.25 * c2[0],
            0.75 * c1[1] + 0.25 * c2[1],
            0.75 * c1[2] + 0.25 * c2[2],
        ]);
        assert!(c1.blend_rgb(&c2, 0.25).distance_rgb(&quarter) < 1e-12, "quarter blend");

        Ok(())
    }

    #[test]
    fn test_blend_hue() {
        // Red to magenta crosses 0º, not cyan.
        let red = Color::from_hsv(0.0, 1.0, 1.0);
        let magenta = Color::from_hsv(300.0, 1.0, 1.0);
        let [h, _, _] = red.blend_hsv(&magenta, 0.5).hsv();
        assert!((h - 330.0).abs() < 1e-9, "{}", h);

        // Gray adopts blue's hue.
        let gray = Color::srgb(0.5, 0.5, 0.5);
        let blue = Color::srgb(0.0, 0.0, 1.0);
        let [blue_hue, _, _] = blue.hcl();
        let [h, _, _] = gray.blend_hcl(&blue, 0.5).hcl();
        assert!((h - blue_hue).abs() < 1e-6, "{} vs {}", h, blue_hue);

        let interpolator =
            Interpolator::new(&red, &magenta, ColorSpace::Hsv, HueInterpolation::Longer);
        assert_eq!(interpolator.space(), ColorSpace::Hsv, "interpolation space");
        let [h, _, _] = interpolator.at(0.5).hsv();
        assert!((h - 150.0).abs() < 1e-9, "{}", h);
    }

    #[test]
    fn test_format() {
        let color = Color::srgb(0.25, 0.5, 0.75);
        assert_eq!(format!("{:?}", color), "Color([0.25, 0.5, 0.75])", "debug");
        assert_eq!(format!("{}", color), "color(srgb 0.25 0.5 0.75)", "display");
        assert_eq!(format!("{:.1}", color), "color(srgb 0.3 0.5 0.8)", "display with precision");
    }
}
