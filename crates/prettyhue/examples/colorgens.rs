//! Render ten random colors from each generator: warm, fast warm, happy, and
//! fast happy, one row each.

use image::{ImageResult, Rgb, RgbImage};
use prettyhue::generate::{fast_happy_color, fast_warm_color, happy_color, warm_color};
use prettyhue::Color;
use rand::rngs::StdRng;
use rand::SeedableRng;

const BLOCKS: u32 = 10;
const BLOCK: u32 = 40;
const GAP: u32 = 5;

type Generator = fn(&mut StdRng) -> Color;

fn main() -> ImageResult<()> {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(665);
    let mut rng = StdRng::seed_from_u64(seed);

    let generators: [Generator; 4] = [warm_color, fast_warm_color, happy_color, fast_happy_color];
    let mut image = RgbImage::from_pixel(
        BLOCKS * (BLOCK + GAP) - GAP,
        4 * (BLOCK + GAP) - GAP,
        Rgb([0xff, 0xff, 0xff]),
    );

    for column in 0..BLOCKS {
        for (row, generate) in generators.iter().enumerate() {
            let pixel = Rgb::from(generate(&mut rng));
            let left = column * (BLOCK + GAP);
            let top = row as u32 * (BLOCK + GAP);
            for x in left..left + BLOCK {
                for y in top..top + BLOCK {
                    image.put_pixel(x, y, pixel);
                }
            }
        }
    }

    image.save("colorgens.png")
}
