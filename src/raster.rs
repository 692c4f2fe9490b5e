//! In-memory 2D pixel grid.
//!
//! `Raster` is the image abstraction every transform consumes and produces.
//! It wraps an `ndarray::Array2<Pixel>` indexed `[[y, x]]` (row-major, row
//! first), the same layout convention the rest of the crate's loops follow.
//!
//! Checked accessors ([`Raster::get`], [`Raster::set`]) report out-of-range
//! coordinates as [`Error::OutOfBounds`]; they never wrap or clamp.

use ndarray::Array2;

use crate::color::Pixel;
use crate::error::{Error, Result};

/// A dense W x H grid of [`Pixel`] values.
///
/// Both dimensions are at least 1. Every coordinate with `x < width` and
/// `y < height` holds a defined pixel.
#[derive(Debug, Clone, PartialEq)]
pub struct Raster {
    pixels: Array2<Pixel>,
}

impl Raster {
    /// Create a raster of the given size, filled with black.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        Raster::filled(width, height, Pixel::black())
    }

    /// Create a raster of the given size, filled with one pixel value.
    pub fn filled(width: usize, height: usize, pixel: Pixel) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::EmptyRaster { width, height });
        }
        Ok(Raster {
            pixels: Array2::from_elem((height, width), pixel),
        })
    }

    /// Create a raster by evaluating `f(x, y)` for every coordinate.
    pub fn from_fn<F>(width: usize, height: usize, f: F) -> Result<Self>
    where
        F: Fn(usize, usize) -> Pixel,
    {
        if width == 0 || height == 0 {
            return Err(Error::EmptyRaster { width, height });
        }
        Ok(Raster {
            pixels: Array2::from_shape_fn((height, width), |(y, x)| f(x, y)),
        })
    }

    /// Wrap an already-validated pixel grid. Internal constructor for
    /// transforms that build their output directly.
    pub(crate) fn from_array(pixels: Array2<Pixel>) -> Self {
        Raster { pixels }
    }

    pub fn width(&self) -> usize {
        self.pixels.ncols()
    }

    pub fn height(&self) -> usize {
        self.pixels.nrows()
    }

    /// Read the pixel at (x, y).
    pub fn get(&self, x: usize, y: usize) -> Result<Pixel> {
        self.check_bounds(x, y)?;
        Ok(self.pixels[[y, x]])
    }

    /// Write the pixel at (x, y).
    pub fn set(&mut self, x: usize, y: usize, pixel: Pixel) -> Result<()> {
        self.check_bounds(x, y)?;
        self.pixels[[y, x]] = pixel;
        Ok(())
    }

    fn check_bounds(&self, x: usize, y: usize) -> Result<()> {
        if x >= self.width() || y >= self.height() {
            return Err(Error::OutOfBounds {
                x,
                y,
                width: self.width(),
                height: self.height(),
            });
        }
        Ok(())
    }

    /// Iterate over all pixels in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = Pixel> + '_ {
        self.pixels.iter().copied()
    }

    /// Direct grid access for transform internals; all transform loops stay
    /// within `0..height` x `0..width` by construction.
    pub(crate) fn data(&self) -> &Array2<Pixel> {
        &self.pixels
    }

    /// Produce a new raster by applying a pure per-pixel function.
    ///
    /// Rows are processed in parallel; `f` must not depend on coordinates or
    /// neighboring pixels.
    pub(crate) fn map_pixels<F>(&self, f: F) -> Raster
    where
        F: Fn(Pixel) -> Pixel + Send + Sync,
    {
        let mut pixels = self.pixels.clone();
        pixels.par_mapv_inplace(f);
        Raster { pixels }
    }
}
