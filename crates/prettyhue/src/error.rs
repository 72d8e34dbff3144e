//! Utility module with prettyhue's errors.

/// An erroneous hexadecimal color.
///
/// Parsing colors only fails for malformed input. Out-of-gamut coordinates
/// are not an error; [`Color::is_valid`](crate::Color::is_valid) detects them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HexFormatError {
    /// A color format that does not start with `#`.
    UnknownFormat,

    /// A color format with unexpected characters or an unexpected number of
    /// characters. For example, `#00` is missing a hexadecimal digit, whereas
    /// `#💩00` has the correct length but contains an unsuitable character.
    UnexpectedCharacters,

    /// A color format with a malformed hexadecimal coordinate. For example,
    /// `#efg` has a malformed third coordinate.
    MalformedHex,
}

impl std::fmt::Display for HexFormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use HexFormatError::*;

        match self {
            UnknownFormat => f.write_str("hex color should start with `#`"),
            UnexpectedCharacters => {
                f.write_str("hex color should have 3 or 6 ASCII digits after `#`")
            }
            MalformedHex => f.write_str("hex color should contain only hexadecimal digits"),
        }
    }
}

impl std::error::Error for HexFormatError {}
