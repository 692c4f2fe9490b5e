//! Exact 90-degree clockwise rotation.
//!
//! Rotation is a pure coordinate permutation: no resampling, no
//! interpolation. The source pixel at (x, y) lands at (H - 1 - y, x) in the
//! rotated image, whose dimensions are the source's swapped.

use ndarray::Array2;

use crate::color::Pixel;
use crate::raster::Raster;

/// Rotate the image 90 degrees clockwise.
///
/// Output dimensions are (width = input height, height = input width).
/// Rotating four times returns the original image.
pub fn rotate_90_cw(image: &Raster) -> Raster {
    let (h, w) = (image.height(), image.width());
    let src = image.data();
    let mut out = Array2::from_elem((w, h), Pixel::black());

    for y in 0..h {
        for x in 0..w {
            // (x, y) -> (h - 1 - y, x)
            out[[x, h - 1 - y]] = src[[y, x]];
        }
    }

    Raster::from_array(out)
}
