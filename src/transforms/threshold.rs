//! Black/white stylization by luminance-median threshold.
//!
//! Two passes over the full grid with a barrier between them: the first
//! collects every pixel's luminance, the second classifies each pixel against
//! the sorted middle value.

use rayon::prelude::*;

use crate::color::Pixel;
use crate::raster::Raster;

/// Reduce the image to pure black and pure white.
///
/// 1. Compute `luminance = sqrt(.299 r^2 + .587 g^2 + .114 b^2)` for every
///    pixel and sort the values ascending.
/// 2. Take the element at index `count / 2` as the threshold. For even
///    counts this is the upper-middle element, not the averaged textbook
///    median; the selection rule is part of the operation's contract.
/// 3. Pixels with `luminance >= threshold` become white, the rest black.
///
/// An image whose pixels all share one luminance comes out entirely white,
/// since every pixel compares `>=` against its own value.
pub fn black_white(image: &Raster) -> Raster {
    let mut luminances: Vec<f64> = image.pixels().map(|p| p.luminance()).collect();
    luminances.par_sort_unstable_by(f64::total_cmp);
    let threshold = luminances[luminances.len() / 2];

    image.map_pixels(move |p| {
        if p.luminance() >= threshold {
            Pixel::white()
        } else {
            Pixel::black()
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_is_only_black_and_white() {
        let image = Raster::from_fn(8, 8, |x, y| {
            Pixel::new((x * 30) as i32, (y * 30) as i32, ((x + y) * 10) as i32)
        })
        .unwrap();

        let bw = black_white(&image);

        assert!(bw
            .pixels()
            .all(|p| p == Pixel::black() || p == Pixel::white()));
    }

    #[test]
    fn test_uniform_luminance_becomes_all_white() {
        let image = Raster::filled(5, 5, Pixel::new(77, 77, 77)).unwrap();

        let bw = black_white(&image);

        assert!(bw.pixels().all(|p| p == Pixel::white()));
    }

    #[test]
    fn test_middle_index_threshold_even_count() {
        // Gray pixels have luminance equal to their channel value, so the
        // sorted luminances are [0, 60, 100, 200]. The threshold is the
        // element at index 4 / 2 = 2, i.e. 100: exactly two pixels white.
        let mut image = Raster::new(2, 2).unwrap();
        image.set(0, 0, Pixel::new(0, 0, 0)).unwrap();
        image.set(1, 0, Pixel::new(60, 60, 60)).unwrap();
        image.set(0, 1, Pixel::new(100, 100, 100)).unwrap();
        image.set(1, 1, Pixel::new(200, 200, 200)).unwrap();

        let bw = black_white(&image);

        assert_eq!(bw.get(0, 0).unwrap(), Pixel::black());
        assert_eq!(bw.get(1, 0).unwrap(), Pixel::black());
        assert_eq!(bw.get(0, 1).unwrap(), Pixel::white());
        assert_eq!(bw.get(1, 1).unwrap(), Pixel::white());
    }

    #[test]
    fn test_input_is_unmodified() {
        let image = Raster::filled(3, 3, Pixel::new(12, 34, 56)).unwrap();
        let copy = image.clone();

        let _ = black_white(&image);

        assert_eq!(image, copy);
    }
}
