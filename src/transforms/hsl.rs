//! HSL-space adjustments: set hue, saturation, or lightness.
//!
//! Each operation converts every pixel RGB -> HSL, overwrites exactly one
//! component with the caller-supplied value, and converts back. Because both
//! conversions round, the three operations commute only approximately; the
//! order of chained adjustments can shift channels by a unit.
//!
//! Parameter policy: hue is wrapped into [0, 360) with `rem_euclid`,
//! saturation and lightness are clamped to [0, 1]. Out-of-range arguments
//! therefore produce well-defined output instead of being rejected.

use crate::raster::Raster;

/// Set every pixel's hue to `hue` degrees, wrapped into [0, 360).
pub fn set_hue(image: &Raster, hue: f64) -> Raster {
    let hue = hue.rem_euclid(360.0);
    image.map_pixels(move |p| {
        let mut hsl = p.to_hsl();
        hsl.h = hue;
        hsl.to_pixel()
    })
}

/// Set every pixel's saturation to `saturation`, clamped to [0, 1].
pub fn set_saturation(image: &Raster, saturation: f64) -> Raster {
    let saturation = saturation.clamp(0.0, 1.0);
    image.map_pixels(move |p| {
        let mut hsl = p.to_hsl();
        hsl.s = saturation;
        hsl.to_pixel()
    })
}

/// Set every pixel's lightness to `lightness`, clamped to [0, 1].
pub fn set_lightness(image: &Raster, lightness: f64) -> Raster {
    let lightness = lightness.clamp(0.0, 1.0);
    image.map_pixels(move |p| {
        let mut hsl = p.to_hsl();
        hsl.l = lightness;
        hsl.to_pixel()
    })
}
