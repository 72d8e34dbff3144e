use super::conversion::{from_24bit, to_24bit};
use crate::error::HexFormatError;
use crate::Float;

/// Parse a 24-bit color in hashed hexadecimal format. If successful, this
/// function returns the three coordinates as unsigned bytes. It transparently
/// handles single-digit coordinates.
fn parse_hashed(s: &str) -> Result<[u8; 3], HexFormatError> {
    if !s.starts_with('#') {
        return Err(HexFormatError::UnknownFormat);
    } else if s.len() != 4 && s.len() != 7 {
        return Err(HexFormatError::UnexpectedCharacters);
    }

    fn parse_coordinate(s: &str, index: usize) -> Result<u8, HexFormatError> {
        let factor = s.len() / 3;
        let t = s
            .get(1 + factor * index..1 + factor * (index + 1))
            .ok_or(HexFormatError::UnexpectedCharacters)?;

        // from_str_radix() tolerates a leading plus sign.
        if !t.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(HexFormatError::MalformedHex);
        }
        let n = u8::from_str_radix(t, 16).map_err(|_| HexFormatError::MalformedHex)?;

        Ok(if factor == 1 { 16 * n + n } else { n })
    }

    let c1 = parse_coordinate(s, 0)?;
    let c2 = parse_coordinate(s, 1)?;
    let c3 = parse_coordinate(s, 2)?;
    Ok([c1, c2, c3])
}

/// Parse the string into sRGB coordinates.
///
/// This function recognizes the three and six digit hashed hexadecimal
/// formats, independent of case. It does not trim white space.
pub(crate) fn parse(s: &str) -> Result<[Float; 3], HexFormatError> {
    let [r, g, b] = parse_hashed(s)?;
    Ok(from_24bit(r, g, b))
}

/// Format the sRGB coordinates in six digit hashed hexadecimal format.
///
/// Coordinates outside the unit range saturate.
pub(crate) fn format_hex(coordinates: &[Float; 3]) -> String {
    let [r, g, b] = to_24bit(coordinates);
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

// --------------------------------------------------------------------------------------------------------------------

/// Format the sRGB coordinates as a CSS color.
///
/// This function uses the `color()` function with space-separated arguments.
/// It respects the formatter's precision, defaulting to 5 digits past the
/// decimal, and avoids trailing zeros.
pub(crate) fn format(
    coordinates: &[Float; 3],
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    f.write_str("color(srgb ")?;

    let factor = (10.0 as Float).powi(f.precision().unwrap_or(5) as i32);
    for (index, coordinate) in coordinates.iter().enumerate() {
        if coordinate.is_nan() {
            f.write_str("none")?;
        } else {
            // CSS mandates NO trailing zeros whatsoever. But formatting
            // floats with a precision produces trailing zeros. Rounding
            // avoids them, for the most part. If fractional part is zero,
            // we do need an explicit precision---of zero!
            let c = (coordinate * factor).round() / factor;
            if c == c.trunc() {
                f.write_fmt(format_args!("{:.0}", c))?;
            } else {
                f.write_fmt(format_args!("{}", c))?;
            }
        }

        if index < 2 {
            f.write_str(" ")?;
        }
    }

    f.write_str(")")
}

// ====================================================================================================================
