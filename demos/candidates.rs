//! Print the candidate palette seed for an image.
//!
//! Usage: cargo run --example candidates -- <image> [colors] [method]

use zenhist::{ColorHistogram, PixelBuffer, SampleMethod, unpack_rgba};

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let Some(path) = args.next() else {
        eprintln!("usage: candidates <image> [colors] [method: 1|2]");
        std::process::exit(2);
    };
    let colors: usize = args.next().and_then(|s| s.parse().ok()).unwrap_or(256);
    let method = args
        .next()
        .and_then(|s| s.parse::<u8>().ok())
        .map(SampleMethod::from_id)
        .transpose()
        .unwrap_or_else(|e| {
            eprintln!("{e}");
            std::process::exit(2);
        })
        .unwrap_or_default();

    let img = match image::open(&path) {
        Ok(img) => img.to_rgba8(),
        Err(e) => {
            eprintln!("{path}: {e}");
            std::process::exit(1);
        }
    };
    let (w, h) = (img.width() as usize, img.height() as usize);
    let pixels: Vec<rgb::RGBA<u8>> = img
        .pixels()
        .map(|p| rgb::RGBA {
            r: p.0[0],
            g: p.0[1],
            b: p.0[2],
            a: p.0[3],
        })
        .collect();
    let buffer = PixelBuffer::from_rgba(&pixels, w, h).unwrap_or_else(|e| {
        eprintln!("{path}: {e}");
        std::process::exit(1);
    });

    let mut hist = ColorHistogram::new(method, colors);
    hist.sample(&buffer);

    let Some(candidates) = hist.importance_sorted_colors() else {
        eprintln!("{path}: no colors");
        return;
    };

    eprintln!(
        "{path}: {w}x{h}, {} unique, {} candidates ({:?})",
        hist.len(),
        candidates.len(),
        method
    );
    eprintln!("{:>10} {:>8}", "rgba", "count");
    for color in &candidates {
        let p = unpack_rgba(*color);
        let count = hist.histogram().get(color).copied().unwrap_or(0);
        eprintln!(
            "  {:02x}{:02x}{:02x}{:02x} {:>8}",
            p.r, p.g, p.b, p.a, count
        );
    }
}
