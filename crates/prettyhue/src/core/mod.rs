mod conversion;
mod cylinder;
mod difference;
mod equality;
mod gamut;
mod hsluv;
mod math;
mod space;
mod string;
mod white;

// conversion
pub(crate) use conversion::{convert, fast_delinearize, fast_linearize, from_24bit, to_24bit};

// difference
pub use difference::HueInterpolation;
pub(crate) use difference::{interpolate, prepare_to_interpolate};

// equality
#[cfg(test)]
pub(crate) use equality::{assert_same_coordinates, to_eq_coordinates};
pub use equality::to_eq_bits;
pub(crate) use equality::is_achromatic;

// gamut
pub(crate) use gamut::{clip, in_gamut};

// math
pub(crate) use math::{euclidean, Accumulator, FloatExt};

// space
pub use space::ColorSpace;

// string
pub(crate) use string::{format, format_hex, parse};

// white
pub use white::{WhitePoint, D50, D65};
