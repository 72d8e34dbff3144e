use prettyhue::Color;

/// Two pairs of colors whose sRGB distances are nearly the same but whose
/// perceptual distances are not.
fn pairs() -> [(Color, Color); 2] {
    [
        (
            Color::srgb(150.0 / 255.0, 10.0 / 255.0, 150.0 / 255.0),
            Color::srgb(53.0 / 255.0, 10.0 / 255.0, 150.0 / 255.0),
        ),
        (
            Color::srgb(10.0 / 255.0, 150.0 / 255.0, 50.0 / 255.0),
            Color::srgb(99.9 / 255.0, 150.0 / 255.0, 10.0 / 255.0),
        ),
    ]
}

fn main() {
    let [(c1a, c1b), (c2a, c2b)] = pairs();

    println!(
        "distance_rgb: {:.5} and {:.5}",
        c1a.distance_rgb(&c1b),
        c2a.distance_rgb(&c2b)
    );
    println!(
        "distance_lab: {:.5} and {:.5}",
        c1a.distance_lab(&c1b),
        c2a.distance_lab(&c2b)
    );
    println!(
        "distance_luv: {:.5} and {:.5}",
        c1a.distance_luv(&c1b),
        c2a.distance_luv(&c2b)
    );
}
