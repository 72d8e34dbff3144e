//! Bridges between [`Color`] and other representations.
//!
//! [`HexColor`] wraps a color for text-based formats. With the `serde`
//! feature, it serializes as a hashed hexadecimal string. The 16-bit methods
//! on [`Color`] mirror the premultiplied RGBA used by image libraries. With
//! the `image` feature, colors also convert into that crate's pixel types.

use std::str::FromStr;

use crate::error::HexFormatError;
use crate::{Color, Float};

/// A color that reads and writes as hashed hexadecimal.
///
/// Parsing accepts the three and six digit forms, independent of case.
/// Formatting always produces the six digit lower case form, which quantizes
/// each coordinate to 8 bits.
///
/// ```
/// # use prettyhue::{Color, HexColor};
/// # use prettyhue::error::HexFormatError;
/// let HexColor(color) = "#F0C".parse()?;
/// assert_eq!(color, Color::from_24bit(0xff, 0x00, 0xcc));
/// assert_eq!(HexColor(color).to_string(), "#ff00cc");
/// # Ok::<(), HexFormatError>(())
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct HexColor(pub Color);

impl From<Color> for HexColor {
    fn from(value: Color) -> Self {
        Self(value)
    }
}

impl From<HexColor> for Color {
    fn from(value: HexColor) -> Self {
        value.0
    }
}

impl FromStr for HexColor {
    type Err = HexFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::from_hex(s).map(Self)
    }
}

impl TryFrom<&str> for HexColor {
    type Error = HexFormatError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::from_str(value)
    }
}

impl TryFrom<String> for HexColor {
    type Error = HexFormatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_str(value.as_str())
    }
}

impl From<HexColor> for String {
    fn from(value: HexColor) -> Self {
        value.0.to_hex()
    }
}

impl std::fmt::Display for HexColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0.to_hex())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for HexColor {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.to_hex())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for HexColor {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        Self::from_str(&s).map_err(serde::de::Error::custom)
    }
}

// ====================================================================================================================

impl Color {
    /// Determine the 16-bit RGBA coordinates with full opacity.
    ///
    /// Each coordinate is scaled by 65535, incremented by one half, and
    /// truncated, saturating at the ends.
    ///
    /// ```
    /// # use prettyhue::Color;
    /// assert_eq!(Color::srgb(1.0, 0.5, 0.0).to_rgba16(), [0xffff, 0x8000, 0, 0xffff]);
    /// ```
    pub fn to_rgba16(&self) -> [u16; 4] {
        let [r, g, b] = self.coordinates().map(|c| c.mul_add(65535.0, 0.5) as u16);
        [r, g, b, 0xffff]
    }

    /// Instantiate a color from premultiplied 16-bit RGBA coordinates.
    ///
    /// This method divides out the alpha. Since a fully transparent color has
    /// no meaningful color coordinates, it returns `None` for an alpha of 0.
    ///
    /// ```
    /// # use prettyhue::Color;
    /// let color = Color::from_rgba16(0x4000, 0x2000, 0, 0x8000);
    /// assert_eq!(color, Some(Color::srgb(0.5, 0.25, 0.0)));
    /// assert_eq!(Color::from_rgba16(0xffff, 0xffff, 0xffff, 0), None);
    /// ```
    pub fn from_rgba16(r: u16, g: u16, b: u16, a: u16) -> Option<Self> {
        if a == 0 {
            return None;
        }

        let alpha = a as Float;
        Some(Self::srgb(
            r as Float / alpha,
            g as Float / alpha,
            b as Float / alpha,
        ))
    }
}

#[cfg(feature = "image")]
impl From<Color> for image::Rgba<u16> {
    fn from(value: Color) -> Self {
        image::Rgba(value.to_rgba16())
    }
}

#[cfg(feature = "image")]
impl From<Color> for image::Rgb<u8> {
    fn from(value: Color) -> Self {
        image::Rgb(value.to_24bit())
    }
}

#[cfg(test)]
mod test {
    use super::HexColor;
    use crate::error::HexFormatError;
    use crate::Color;

    #[test]
    fn test_hex_color() -> Result<(), HexFormatError> {
        for hex in ["#000000", "#ff0000", "#00ff00", "#0000ff", "#ffffff"] {
            let color: HexColor = hex.parse()?;
            assert_eq!(String::from(color), hex, "{}", hex);
            assert_eq!(HexColor::try_from(hex.to_owned())?, color, "{}", hex);
        }

        assert_eq!(
            HexColor::try_from("#12345"),
            Err(HexFormatError::UnexpectedCharacters),
            "too short"
        );
        assert_eq!(HexColor::try_from("red"), Err(HexFormatError::UnknownFormat), "color name");

        let color = Color::srgb(0.25, 0.5, 0.75);
        assert_eq!(Color::from(HexColor::from(color)), color, "{:?}", color);
        Ok(())
    }

    #[test]
    fn test_rgba16() {
        assert_eq!(Color::default().to_rgba16(), [0, 0, 0, 0xffff], "black");
        assert_eq!(
            Color::srgb(1.25, -0.25, 1.0).to_rgba16(),
            [0xffff, 0, 0xffff, 0xffff],
            "clamped"
        );

        let color = Color::from_24bit(0x31, 0x78, 0xea);
        let [r, g, b, a] = color.to_rgba16();
        assert_eq!(
            Color::from_rgba16(r, g, b, a).map(|c| c.to_hex()),
            Some(color.to_hex()),
            "{:?}",
            color
        );
        assert_eq!(Color::from_rgba16(1, 2, 3, 0), None, "transparent");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde() -> Result<(), serde_json::Error> {
        #[derive(Debug, PartialEq, serde::Serialize, serde::Deserialize)]
        struct Swatch {
            name: String,
            color: HexColor,
        }

        let swatch = Swatch {
            name: "cobalt".to_owned(),
            color: HexColor(Color::from_24bit(0x31, 0x78, 0xea)),
        };

        let json = serde_json::to_string(&swatch)?;
        assert_eq!(json, r##"{"name":"cobalt","color":"#3178ea"}"##, "serialized swatch");
        assert_eq!(serde_json::from_str::<Swatch>(&json)?, swatch, "deserialized swatch");

        let error = serde_json::from_str::<HexColor>(r##""#ggg""##);
        assert!(error.is_err_and(|e| e.to_string().contains("hexadecimal")), "malformed hex");
        Ok(())
    }

    #[cfg(feature = "image")]
    #[test]
    fn test_image_pixels() {
        let color = Color::srgb(1.0, 0.5, 0.0);
        assert_eq!(image::Rgb::<u8>::from(color), image::Rgb([0xff, 0x80, 0x00]), "8-bit pixel");
        assert_eq!(
            image::Rgba::<u16>::from(color),
            image::Rgba([0xffff, 0x8000, 0, 0xffff]),
            "16-bit pixel"
        );
    }
}
