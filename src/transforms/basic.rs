//! Simple per-pixel filters: grayscale, invert, sepia.
//!
//! Each visits every coordinate exactly once and computes the new pixel from
//! the old one alone. Fractional results are truncated toward zero.

use crate::color::Pixel;
use crate::raster::Raster;

/// Convert to grayscale.
///
/// Each output channel is the integer average (r + g + b) / 3 of the input
/// channels, truncated.
pub fn grayscale(image: &Raster) -> Raster {
    image.map_pixels(|p| {
        let avg = (p.r + p.g + p.b) / 3;
        Pixel::new(avg, avg, avg)
    })
}

/// Invert every channel: c' = 255 - c.
///
/// Applying invert twice restores the original image exactly.
pub fn invert(image: &Raster) -> Raster {
    image.map_pixels(|p| Pixel::new(255 - p.r, 255 - p.g, 255 - p.b))
}

/// Apply a sepia tone via a fixed 3x3 channel-mixing matrix.
///
/// r' = .393 r + .769 g + .189 b
/// g' = .349 r + .686 g + .168 b
/// b' = .272 r + .534 g + .131 b
///
/// Results are truncated but **not clamped**: bright inputs can push a
/// channel past 255, and downstream consumers see the overflowed value.
pub fn sepia(image: &Raster) -> Raster {
    image.map_pixels(|p| {
        let r = p.r as f64;
        let g = p.g as f64;
        let b = p.b as f64;
        Pixel::new(
            (0.393 * r + 0.769 * g + 0.189 * b) as i32,
            (0.349 * r + 0.686 * g + 0.168 * b) as i32,
            (0.272 * r + 0.534 * g + 0.131 * b) as i32,
        )
    })
}
