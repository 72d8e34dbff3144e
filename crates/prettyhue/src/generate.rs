//! Random colors and palettes.
//!
//! The warm and happy generators sample HCL and retry until the color is
//! within sRGB gamut. Their `fast_` counterparts sample HSV instead, which
//! always yields a valid color but is less uniform perceptually. All functions
//! take the random number generator as an argument, so that seeding it makes
//! results reproducible.
//!
//! ```
//! # use prettyhue::generate::{fast_happy_palette, happy_color};
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(665);
//! assert!(happy_color(&mut rng).is_valid());
//!
//! let palette = fast_happy_palette(&mut rng, 6);
//! assert_eq!(palette.len(), 6);
//! ```

use log::trace;
use rand::Rng;

use crate::{Color, Float};

/// Sample a color until it is valid.
fn sample_valid<R, F>(rng: &mut R, label: &str, mut sample: F) -> Color
where
    R: Rng + ?Sized,
    F: FnMut(&mut R) -> Color,
{
    let mut attempts = 1_usize;
    loop {
        let color = sample(rng);
        if color.is_valid() {
            trace!("{} color after {} attempt(s)", label, attempts);
            return color;
        }
        attempts += 1;
    }
}

/// Generate a random warm color, with low chroma and medium-low lightness.
pub fn warm_color<R: Rng + ?Sized>(rng: &mut R) -> Color {
    sample_valid(rng, "warm", |rng| {
        let h = rng.random::<Float>() * 360.0;
        let c = 0.1 + rng.random::<Float>() * 0.3;
        let l = 0.2 + rng.random::<Float>() * 0.3;
        Color::from_hcl(h, c, l)
    })
}

/// Generate a random happy color, with medium-high chroma and lightness.
pub fn happy_color<R: Rng + ?Sized>(rng: &mut R) -> Color {
    sample_valid(rng, "happy", |rng| {
        let h = rng.random::<Float>() * 360.0;
        let c = 0.5 + rng.random::<Float>() * 0.3;
        let l = 0.5 + rng.random::<Float>() * 0.3;
        Color::from_hcl(h, c, l)
    })
}

/// Generate a random warm-ish color by sampling HSV.
pub fn fast_warm_color<R: Rng + ?Sized>(rng: &mut R) -> Color {
    Color::from_hsv(
        rng.random::<Float>() * 360.0,
        0.5 + rng.random::<Float>() * 0.3,
        0.3 + rng.random::<Float>() * 0.3,
    )
}

/// Generate a random happy-ish color by sampling HSV.
pub fn fast_happy_color<R: Rng + ?Sized>(rng: &mut R) -> Color {
    Color::from_hsv(
        rng.random::<Float>() * 360.0,
        0.7 + rng.random::<Float>() * 0.3,
        0.6 + rng.random::<Float>() * 0.3,
    )
}

/// Generate a palette of warm-ish colors with evenly spaced hues.
///
/// The i-th color has hue `i * 360 / n`, starting at 0.
pub fn fast_warm_palette<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Vec<Color> {
    palette(n, |hue| {
        Color::from_hsv(
            hue,
            0.55 + rng.random::<Float>() * 0.2,
            0.35 + rng.random::<Float>() * 0.2,
        )
    })
}

/// Generate a palette of happy-ish colors with evenly spaced hues.
pub fn fast_happy_palette<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Vec<Color> {
    palette(n, |hue| {
        Color::from_hsv(
            hue,
            0.8 + rng.random::<Float>() * 0.2,
            0.65 + rng.random::<Float>() * 0.2,
        )
    })
}

fn palette<F: FnMut(Float) -> Color>(n: usize, mut make: F) -> Vec<Color> {
    let step = 360.0 / n.max(1) as Float;
    (0..n).map(|index| make(index as Float * step)).collect()
}
