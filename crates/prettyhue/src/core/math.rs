use crate::Float;

/// An extension trait for floating point numbers.
///
/// The trait pre-computes constants that depend on the floating point
/// representation.
pub(crate) trait FloatExt {
    /// The factor determining rounding precision.
    ///
    /// When limiting a floating point number's precision, the number is
    /// multiplied by some factor, rounded, and divided by the same factor
    /// again. Typically, that factor is a power of ten, which directly
    /// translates into significant digits after the decimal.
    const ROUNDING_FACTOR: Self;
}

impl FloatExt for f64 {
    const ROUNDING_FACTOR: f64 = 1e12;
}

impl FloatExt for f32 {
    const ROUNDING_FACTOR: f32 = 1e4;
}

// --------------------------------------------------------------------------------------------------------------------

/// A floating point accumulator.
///
/// Unlike plain summation with the `+` operator, this struct minimizes the
/// cumulative error by using [Kahan's algorithm with Neumaier's
/// improvements](https://en.wikipedia.org/wiki/Kahan_summation_algorithm).
#[derive(Debug, Default)]
pub(crate) struct Accumulator {
    sum: Float,
    compensation: Float,
}

impl Accumulator {
    #[inline]
    pub fn total(&self) -> Float {
        self.sum + self.compensation
    }
}

impl core::ops::AddAssign<Float> for Accumulator {
    fn add_assign(&mut self, rhs: Float) {
        let t = self.sum + rhs;
        if rhs.abs() < self.sum.abs() {
            self.compensation += (self.sum - t) + rhs;
        } else {
            self.compensation += (rhs - t) + self.sum;
        }
        self.sum = t;
    }
}

impl core::iter::Sum<Float> for Accumulator {
    fn sum<I: Iterator<Item = Float>>(iter: I) -> Self {
        let mut accumulator = Self::default();
        for value in iter {
            accumulator += value;
        }
        accumulator
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Compute the Euclidian distance between two coordinate triples.
#[inline]
pub(crate) fn euclidean(coordinates1: &[Float; 3], coordinates2: &[Float; 3]) -> Float {
    let [x1, y1, z1] = coordinates1;
    let [x2, y2, z2] = coordinates2;

    let dx = x1 - x2;
    let dy = y1 - y2;
    let dz = z1 - z2;

    dx.mul_add(dx, dy.mul_add(dy, dz * dz)).sqrt()
}
