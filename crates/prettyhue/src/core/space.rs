/// The enumeration of supported color models.
///
/// [`Color`](crate::Color) always stores gamma-corrected sRGB coordinates.
/// Every other model is a transient view, computed on demand with
/// [`Color::to`](crate::Color::to) and turned back into a color with
/// [`Color::from_space`](crate::Color::from_space). This enumeration tags the
/// three coordinates of such a view.
///
/// # RGB
///
/// [sRGB](https://en.wikipedia.org/wiki/SRGB) and linear sRGB have red, green,
/// and blue coordinates. In-gamut colors have coordinates in unit range
/// `0..=1`. HSV and HSL are cylindrical rearrangements of sRGB that need no
/// white point.
///
/// # CIE
///
/// [XYZ](https://en.wikipedia.org/wiki/CIE_1931_color_space) serves as the
/// hub for all conversions that leave the RGB branch. xyY splits XYZ into
/// chromaticity x, y and luminance Y. CIELAB and CIELUV are perceptually
/// motivated and relative to a reference white point. This crate scales their
/// lightness to `0..=1` instead of the traditional `0..=100`. HCL and LCh(uv)
/// are their polar forms.
///
/// | Model    | Coordinate 1 | Coordinate 2 | Coordinate 3 |
/// | -------- | :----------: | :----------: | :----------: |
/// | Xyy      | x            | y            | Y            |
/// | Lab      | L            | a            | b            |
/// | Luv      | L            | u            | v            |
/// | Hcl      | hº           | C            | L            |
/// | LuvLch   | L            | C            | hº           |
/// | Hsv      | hº           | S            | V            |
/// | Hsl      | hº           | S            | L            |
/// | Hsluv    | hº           | S            | L            |
/// | Hpluv    | hº           | S            | L            |
///
/// Note that HCL puts the hue first, whereas LCh(uv) puts it last.
///
/// # HSLuv and HPLuv
///
/// [HSLuv](https://www.hsluv.org) rescales the chroma of LCh(uv) by the
/// maximum chroma the sRGB gamut allows for the given lightness and hue. As a
/// result, every saturation in `0..=1` is displayable. HPLuv instead divides by
/// the maximum chroma that is safe for *all* hues, which yields pastel colors
/// only. Both are defined relative to D65 and ignore any other white point.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ColorSpace {
    /// Gamma-corrected sRGB.
    Srgb,
    /// sRGB without gamma.
    LinearSrgb,
    /// Hue, saturation, and value derived from sRGB.
    Hsv,
    /// Hue, saturation, and lightness derived from sRGB.
    Hsl,
    /// CIE XYZ.
    Xyz,
    /// CIE xyY.
    Xyy,
    /// CIELAB, relative to a white point.
    Lab,
    /// CIELUV, relative to a white point.
    Luv,
    /// The polar form of CIELAB, with hue first.
    Hcl,
    /// The polar form of CIELUV, with hue last.
    LuvLch,
    /// HSLuv.
    Hsluv,
    /// HPLuv.
    Hpluv,
}

impl ColorSpace {
    /// All color spaces, in declaration order.
    pub const ALL: [ColorSpace; 12] = [
        Self::Srgb,
        Self::LinearSrgb,
        Self::Hsv,
        Self::Hsl,
        Self::Xyz,
        Self::Xyy,
        Self::Lab,
        Self::Luv,
        Self::Hcl,
        Self::LuvLch,
        Self::Hsluv,
        Self::Hpluv,
    ];

    /// Determine whether this color space is polar.
    pub const fn is_polar(&self) -> bool {
        self.hue_index().is_some()
    }

    /// Determine the index of the hue coordinate, if this color space has one.
    pub const fn hue_index(&self) -> Option<usize> {
        use ColorSpace::*;
        match *self {
            Hsv | Hsl | Hcl | Hsluv | Hpluv => Some(0),
            LuvLch => Some(2),
            _ => None,
        }
    }

    /// Determine the index of the chroma or saturation coordinate, if this
    /// color space has one.
    pub const fn chroma_index(&self) -> Option<usize> {
        if self.is_polar() {
            Some(1)
        } else {
            None
        }
    }

    /// Determine whether this color space is RGB.
    ///
    /// RGB color spaces are additive and have red, green, and blue coordinates.
    /// In-gamut colors have coordinates in unit range `0..=1`.
    pub const fn is_rgb(&self) -> bool {
        matches!(*self, Self::Srgb | Self::LinearSrgb)
    }

    /// Determine whether conversions to and from this color space depend on
    /// the reference white point.
    pub const fn is_white_relative(&self) -> bool {
        use ColorSpace::*;
        matches!(*self, Xyy | Lab | Luv | Hcl | LuvLch)
    }
}

impl core::fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        use ColorSpace::*;

        let s = match *self {
            Srgb => "sRGB",
            LinearSrgb => "linear sRGB",
            Hsv => "HSV",
            Hsl => "HSL",
            Xyz => "XYZ",
            Xyy => "xyY",
            Lab => "CIELAB",
            Luv => "CIELUV",
            Hcl => "HCL",
            LuvLch => "LCh(uv)",
            Hsluv => "HSLuv",
            Hpluv => "HPLuv",
        };

        f.write_str(s)
    }
}
