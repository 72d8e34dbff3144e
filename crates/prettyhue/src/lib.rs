//! # Pretty 🌸 Hue
//!
//! Prettyhue converts, compares, blends, and orders colors. It represents
//! colors in gamma-corrected sRGB and translates them on demand into a dozen
//! color models, from linear sRGB and CIE XYZ through CIELAB and CIELUV to
//! HSLuv.
//!
//!
//! ## 1. Overview
//!
//! Prettyhue's main abstractions are:
//!
//!   * [`Color`] stores three [`Float`] sRGB coordinates. Its methods convert
//!     to and from other color spaces, measure distances, and blend colors.
//!     They also test validity and parse or format hashed hexadecimal strings.
//!   * [`ColorSpace`] enumerates the supported color models. Colors convert
//!     between any two of them with [`Color::to`] and [`Color::from_space`].
//!   * [`WhitePoint`] captures the reference white of the CIE-derived
//!     models. [`D65`] is the default, [`D50`] the common alternative.
//!   * [`Interpolator`] blends two colors in one of the supported spaces and
//!     handles hues according to a [`HueInterpolation`] strategy.
//!   * The [`sort`] module orders colors so that neighbors look alike.
#![cfg_attr(
    feature = "random",
    doc = "  * The optional [`generate`] module creates random colors and palettes."
)]
#![cfg_attr(
    not(feature = "random"),
    doc = "  * The optional `generate` module creates random colors and palettes."
)]
//!
//!
//! ## 2. Colors and Their Spaces
//!
//! Colors are small `Copy` values. Conversions go through CIE XYZ unless a
//! shorter path exists, so that converting from HSV to HSL never leaves sRGB.
//!
//! ```
//! # use prettyhue::{Color, ColorSpace};
//! let coral = Color::from_hex("#ff7f50")?;
//! let [l, a, b] = coral.lab();
//! assert!(0.67 < l && l < 0.68);
//! assert!(a > 0.0 && b > 0.0);
//!
//! let [h, s, v] = coral.to(ColorSpace::Hsv);
//! assert!((h - 16.1).abs() < 0.1);
//! assert_eq!(Color::from_hsv(h, s, v).to_hex(), "#ff7f50");
//! # Ok::<(), prettyhue::error::HexFormatError>(())
//! ```
//!
//! Conversion from other spaces may produce sRGB coordinates outside the unit
//! range. [`Color::is_valid`] detects such colors and [`Color::clamped`]
//! forces them into gamut.
//!
//!
//! ## 3. Blending and Sorting
//!
//! Blending in CIELAB or HCL avoids the muddy middles of sRGB gradients.
//!
//! ```
//! # use prettyhue::Color;
//! let c1 = Color::from_hex("#fdffcc")?;
//! let c2 = Color::from_hex("#242a42")?;
//! assert_eq!(c1.blend_lab(&c2, 0.5).to_hex(), "#8b8d85");
//! # Ok::<(), prettyhue::error::HexFormatError>(())
//! ```
//!
//! [`sort::sorted`] finds a short path through a set of colors, with the
//! darkest color first.
//!
//!
//! ## 4. Feature Flags
//!
//!   * `f64` selects 64-bit floating point numbers as [`Float`]. It is
//!     enabled by default.
//!   * `random` enables the `generate` module, which depends on
//!     `rand`. It is enabled by default.
//!   * `serde` makes [`HexColor`] serializable as a hexadecimal string.
//!   * `image` converts colors into `image` crate pixels.
//!
//! Prettyhue logs through the `log` facade. Sorting reports its progress at
//! debug level and random generators report retries at trace level.
//!
//!
//! ## 5. Acknowledgements
//!
//! The conversion formulae between sRGB, XYZ, CIELAB, and CIELUV follow
//! [Color.js](https://colorjs.io) and [CSS Color
//! 4](https://www.w3.org/TR/css-color-4/). HSLuv and HPLuv follow the
//! [reference implementation](https://www.hsluv.org). Thank you! 🌸

/// The floating point type in use.
#[cfg(feature = "f64")]
pub type Float = f64;
/// The floating point type in use.
#[cfg(not(feature = "f64"))]
pub type Float = f32;

/// [`Float`]'s bits.
#[cfg(feature = "f64")]
pub type Bits = u64;
/// [`Float`]'s bits.
#[cfg(not(feature = "f64"))]
pub type Bits = u32;

mod core;
pub mod error;
mod interop;
mod object;
pub mod sort;

#[cfg(feature = "random")]
pub mod generate;

#[doc(hidden)]
pub use crate::core::to_eq_bits;

pub use crate::core::{ColorSpace, HueInterpolation, WhitePoint, D50, D65};
pub use interop::HexColor;
pub use object::{Color, Interpolator};
