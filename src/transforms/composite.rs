//! Composite "retro" filter: warm color shift plus two overlay blends.
//!
//! Three sequential full-image passes, each reading the output of the
//! previous one:
//!
//! 1. warm shift: r' = r * 1.2, g' = g, b' = b / 1.5 (truncated, unclamped)
//! 2. halo blend: c' = .65 c + .35 c_halo
//! 3. grain blend: c' = .95 c + .05 c_grain
//!
//! The halo and grain reference images are caller-supplied read-only inputs;
//! their dimensions are independent of the target. Each target coordinate is
//! mapped into an overlay by per-axis scale factors (overlay extent divided
//! by target extent) with nearest-neighbor lookup, no interpolation.

use ndarray::Array2;

use crate::color::Pixel;
use crate::raster::Raster;

/// The two fixed reference images consumed by [`retro_filter`]: a vignette
/// halo mask and a decorative grain texture.
#[derive(Debug, Clone)]
pub struct Overlays {
    pub halo: Raster,
    pub grain: Raster,
}

impl Overlays {
    pub fn new(halo: Raster, grain: Raster) -> Self {
        Overlays { halo, grain }
    }
}

/// Apply the composite filter: warm shift, then halo blend, then grain blend.
pub fn retro_filter(image: &Raster, overlays: &Overlays) -> Raster {
    let warmed = warm_shift(image);
    let with_halo = blend_overlay(&warmed, &overlays.halo, 0.65, 0.35);
    blend_overlay(&with_halo, &overlays.grain, 0.95, 0.05)
}

/// Warm color shift. Truncates, never clamps: the red channel can leave the
/// 0-255 range and the following blend passes operate on the raw value.
fn warm_shift(image: &Raster) -> Raster {
    image.map_pixels(|p| {
        Pixel::new(
            (p.r as f64 * 1.2) as i32,
            p.g,
            (p.b as f64 / 1.5) as i32,
        )
    })
}

/// Weighted per-channel blend of `image` with a nearest-neighbor sample of
/// `overlay`, truncated to integers.
fn blend_overlay(
    image: &Raster,
    overlay: &Raster,
    image_weight: f64,
    overlay_weight: f64,
) -> Raster {
    let (h, w) = (image.height(), image.width());
    let scale_x = overlay.width() as f64 / w as f64;
    let scale_y = overlay.height() as f64 / h as f64;

    let src = image.data();
    let ovl = overlay.data();
    let mut out = Array2::from_elem((h, w), Pixel::black());

    for y in 0..h {
        for x in 0..w {
            let ox = (x as f64 * scale_x) as usize;
            let oy = (y as f64 * scale_y) as usize;
            let p = src[[y, x]];
            let o = ovl[[oy, ox]];
            out[[y, x]] = Pixel::new(
                (image_weight * p.r as f64 + overlay_weight * o.r as f64) as i32,
                (image_weight * p.g as f64 + overlay_weight * o.g as f64) as i32,
                (image_weight * p.b as f64 + overlay_weight * o.b as f64) as i32,
            );
        }
    }

    Raster::from_array(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform_overlays(halo: Pixel, grain: Pixel) -> Overlays {
        Overlays::new(
            Raster::filled(1, 1, halo).unwrap(),
            Raster::filled(1, 1, grain).unwrap(),
        )
    }

    #[test]
    fn test_warm_shift_known_values() {
        let image = Raster::filled(1, 1, Pixel::new(100, 150, 200)).unwrap();

        let warmed = warm_shift(&image);

        // 100 * 1.2 = 120, 200 / 1.5 = 133.3 -> 133
        assert_eq!(warmed.get(0, 0).unwrap(), Pixel::new(120, 150, 133));
    }

    #[test]
    fn test_warm_shift_red_overflows_unclamped() {
        let image = Raster::filled(1, 1, Pixel::new(250, 0, 0)).unwrap();

        let warmed = warm_shift(&image);

        assert_eq!(warmed.get(0, 0).unwrap().r, 300);
    }

    #[test]
    fn test_blend_weights() {
        let image = Raster::filled(1, 1, Pixel::new(100, 100, 100)).unwrap();
        let overlay = Raster::filled(1, 1, Pixel::new(0, 200, 100)).unwrap();

        let blended = blend_overlay(&image, &overlay, 0.65, 0.35);

        // .65 * 100 + .35 * {0, 200, 100} = {65, 135, 100}
        assert_eq!(blended.get(0, 0).unwrap(), Pixel::new(65, 135, 100));
    }

    #[test]
    fn test_blend_nearest_neighbor_mapping() {
        // 2x1 target against a 4x2 overlay: scale_x = 2, scale_y = 2, so
        // target x = 0, 1 samples overlay columns 0 and 2, always row 0.
        let image = Raster::filled(2, 1, Pixel::black()).unwrap();
        let overlay = Raster::from_fn(4, 2, |x, y| {
            Pixel::new((x * 10) as i32, (y * 100) as i32, 0)
        })
        .unwrap();

        let blended = blend_overlay(&image, &overlay, 0.0, 1.0);

        assert_eq!(blended.get(0, 0).unwrap(), Pixel::new(0, 0, 0));
        assert_eq!(blended.get(1, 0).unwrap(), Pixel::new(20, 0, 0));
    }

    #[test]
    fn test_retro_filter_golden_value() {
        // Hand-computed composition of the three passes:
        // warm:  (100, 150, 200) -> (120, 150, 133)
        // halo:  .65 * c + .35 * 50  -> (95, 115, 103)
        // grain: .95 * c + .05 * 10  -> (90, 109, 98)
        let image = Raster::filled(1, 1, Pixel::new(100, 150, 200)).unwrap();
        let overlays = uniform_overlays(Pixel::new(50, 50, 50), Pixel::new(10, 10, 10));

        let filtered = retro_filter(&image, &overlays);

        assert_eq!(filtered.get(0, 0).unwrap(), Pixel::new(90, 109, 98));
    }

    #[test]
    fn test_retro_filter_passes_compose_sequentially() {
        // The grain pass must read the halo-blended image, not the original.
        let image = Raster::filled(1, 1, Pixel::new(100, 150, 200)).unwrap();
        let overlays = uniform_overlays(Pixel::new(50, 50, 50), Pixel::new(10, 10, 10));

        let by_hand = blend_overlay(
            &blend_overlay(&warm_shift(&image), &overlays.halo, 0.65, 0.35),
            &overlays.grain,
            0.95,
            0.05,
        );

        assert_eq!(retro_filter(&image, &overlays), by_hand);
    }

    #[test]
    fn test_retro_filter_preserves_dimensions() {
        let image = Raster::new(6, 4).unwrap();
        let overlays = uniform_overlays(Pixel::white(), Pixel::black());

        let filtered = retro_filter(&image, &overlays);

        assert_eq!(filtered.width(), 6);
        assert_eq!(filtered.height(), 4);
    }
}
