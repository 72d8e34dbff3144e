//! Render the ColorBrewer spectral scheme as three vertical gradients, with
//! linear, tenth power, and square root spacing. The keypoints are blended
//! in HCL.

use image::{ImageResult, Rgb, RgbImage};
use prettyhue::error::HexFormatError;
use prettyhue::{Color, Float};

const WIDTH: u32 = 40;
const HEIGHT: u32 = 1024;

const SPECTRAL: [(&str, Float); 11] = [
    ("#9e0142", 0.0),
    ("#d53e4f", 0.1),
    ("#f46d43", 0.2),
    ("#fdae61", 0.3),
    ("#fee090", 0.4),
    ("#ffffbf", 0.5),
    ("#e6f598", 0.6),
    ("#abdda4", 0.7),
    ("#66c2a5", 0.8),
    ("#3288bd", 0.9),
    ("#5e4fa2", 1.0),
];

/// A gradient defined by colors at increasing positions.
struct GradientTable(Vec<(Color, Float)>);

impl GradientTable {
    fn parse(keypoints: &[(&str, Float)]) -> Result<Self, HexFormatError> {
        let entries = keypoints
            .iter()
            .map(|(hex, position)| Ok((Color::from_hex(hex)?, *position)))
            .collect::<Result<Vec<_>, HexFormatError>>()?;
        Ok(Self(entries))
    }

    /// Blend the two keypoints surrounding the position.
    fn interpolated(&self, t: Float) -> Color {
        for pair in self.0.windows(2) {
            let (c1, p1) = pair[0];
            let (c2, p2) = pair[1];
            if p1 <= t && t <= p2 {
                return c1.blend_hcl(&c2, (t - p1) / (p2 - p1)).clamped();
            }
        }
        self.0.last().map_or_else(Color::default, |(c, _)| *c)
    }

    /// Pick the nearest keypoint.
    fn nearest(&self, t: Float) -> Color {
        for pair in self.0.windows(2) {
            if t < (pair[0].1 + pair[1].1) * 0.5 {
                return pair[0].0;
            }
        }
        self.0.last().map_or_else(Color::default, |(c, _)| *c)
    }

    fn at(&self, t: Float) -> Color {
        self.interpolated(t).blend_rgb(&self.nearest(t), 0.2)
    }
}

fn render(table: &GradientTable, spacing: fn(Float) -> Float) -> RgbImage {
    RgbImage::from_fn(WIDTH, HEIGHT, |_, y| {
        let t = (HEIGHT - 1 - y) as Float / HEIGHT as Float;
        Rgb::from(table.at(spacing(t)))
    })
}

fn main() -> ImageResult<()> {
    let table = GradientTable::parse(&SPECTRAL)
        .map_err(|e| image::ImageError::IoError(std::io::Error::other(e)))?;

    render(&table, |t| t).save("gradient_linear.png")?;
    render(&table, |t| t.powi(10)).save("gradient_square.png")?;
    render(&table, Float::sqrt).save("gradient_sqroot.png")?;
    Ok(())
}
