//! Decode/encode boundary over the `image` crate (feature `codec`).
//!
//! The transform core only ever sees fully-decoded [`Raster`] values; this
//! module is the glue that produces and consumes them. Loaded images are
//! converted to plain RGB (alpha, if present, is stripped). On save the
//! output format is inferred from the path's file extension and channels are
//! clamped back into 0-255.

use std::path::Path;

use image::{Rgb, RgbImage};

use crate::color::Pixel;
use crate::error::{Error, Result};
use crate::raster::Raster;
use crate::transforms::Overlays;

/// Decode the image at `path` into a raster.
pub fn load(path: impl AsRef<Path>) -> Result<Raster> {
    let path = path.as_ref();
    let decoded = image::open(path).map_err(|source| Error::Resource {
        path: path.to_path_buf(),
        source,
    })?;

    let rgb = decoded.to_rgb8();
    let (width, height) = rgb.dimensions();
    Raster::from_fn(width as usize, height as usize, |x, y| {
        let px = rgb.get_pixel(x as u32, y as u32).0;
        Pixel::new(px[0] as i32, px[1] as i32, px[2] as i32)
    })
}

/// Encode `raster` to `path`, with the format chosen by the extension.
///
/// Channels outside 0-255 (possible after the unclamped sepia or warm-shift
/// transforms) are clamped here, at the last moment before encoding.
pub fn save(raster: &Raster, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let out = RgbImage::from_fn(
        raster.width() as u32,
        raster.height() as u32,
        |x, y| {
            let p = raster.data()[[y as usize, x as usize]];
            Rgb([
                p.r.clamp(0, 255) as u8,
                p.g.clamp(0, 255) as u8,
                p.b.clamp(0, 255) as u8,
            ])
        },
    );

    out.save(path).map_err(|source| Error::Resource {
        path: path.to_path_buf(),
        source,
    })
}

impl Overlays {
    /// Load the halo and grain reference images for the composite filter.
    ///
    /// Fails fast if either asset is missing or unreadable, before any
    /// transform has started.
    pub fn load(halo: impl AsRef<Path>, grain: impl AsRef<Path>) -> Result<Self> {
        Ok(Overlays::new(load(halo)?, load(grain)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("round_trip.png");

        let image = Raster::from_fn(3, 2, |x, y| {
            Pixel::new((x * 80) as i32, (y * 100) as i32, 42)
        })
        .unwrap();

        save(&image, &path).unwrap();
        let loaded = load(&path).unwrap();

        assert_eq!(loaded, image);
    }

    #[test]
    fn test_save_clamps_overflowed_channels() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clamped.png");

        let image = Raster::filled(1, 1, Pixel::new(344, 306, 238)).unwrap();

        save(&image, &path).unwrap();
        let loaded = load(&path).unwrap();

        assert_eq!(loaded.get(0, 0).unwrap(), Pixel::new(255, 255, 238));
    }

    #[test]
    fn test_load_missing_file_is_resource_error() {
        let err = load("/nonexistent/halo.png").unwrap_err();

        assert!(matches!(err, Error::Resource { .. }));
    }

    #[test]
    fn test_overlays_load_fails_fast() {
        let dir = tempfile::tempdir().unwrap();
        let halo = dir.path().join("halo.png");
        save(&Raster::filled(2, 2, Pixel::white()).unwrap(), &halo).unwrap();

        let err = Overlays::load(&halo, dir.path().join("missing_grain.png"));

        assert!(err.is_err());
    }
}
