//! Render three stripes of the same random colors: unsorted, sorted
//! lexicographically by LCh(uv), and sorted with [`prettyhue::sort`].

use std::cmp::Ordering;

use image::{ImageResult, Rgb, RgbImage};
use log::info;
use prettyhue::sort::{path_length, sorted};
use prettyhue::Color;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const COUNT: u32 = 512;
const HEIGHT: u32 = 64;
const GAP: u32 = 16;

fn random_colors(rng: &mut StdRng, n: u32) -> Vec<Color> {
    (0..n)
        .map(|_| Color::srgb(rng.random(), rng.random(), rng.random()))
        .collect()
}

fn by_luv_lch(c1: &Color, c2: &Color) -> Ordering {
    let [l1, ch1, h1] = c1.luv_lch();
    let [l2, ch2, h2] = c2.luv_lch();
    l1.total_cmp(&l2)
        .then(h1.total_cmp(&h2))
        .then(ch1.total_cmp(&ch2))
}

fn draw_stripes(stripes: &[&[Color]]) -> RgbImage {
    let count = stripes.len() as u32;
    let mut image = RgbImage::from_pixel(
        COUNT,
        count * HEIGHT + (count - 1) * GAP,
        Rgb([0xff, 0xff, 0xff]),
    );

    for (row, colors) in stripes.iter().enumerate() {
        let top = row as u32 * (HEIGHT + GAP);
        for (x, color) in colors.iter().enumerate() {
            let pixel = Rgb::from(color.clamped());
            for y in top..top + HEIGHT {
                image.put_pixel(x as u32, y, pixel);
            }
        }
    }

    image
}

fn main() -> ImageResult<()> {
    env_logger::init();

    let mut rng = StdRng::seed_from_u64(8_675_309);
    let unsorted = random_colors(&mut rng, COUNT);

    let mut lexicographic = unsorted.clone();
    lexicographic.sort_by(by_luv_lch);

    let smooth = sorted(&unsorted);

    info!("unsorted path length: {:.3}", path_length(&unsorted));
    info!("LCh(uv) path length: {:.3}", path_length(&lexicographic));
    info!("smooth path length: {:.3}", path_length(&smooth));

    draw_stripes(&[&unsorted[..], &lexicographic, &smooth]).save("colorsort.png")
}
