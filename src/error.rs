//! Error types for raster operations.

#[cfg(feature = "codec")]
use std::path::PathBuf;

use thiserror::Error;

/// Error type for raster operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Coordinate access outside the raster grid.
    ///
    /// Checked accessors never wrap or clamp coordinates.
    #[error("coordinate ({x}, {y}) is outside a {width}x{height} raster")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    /// Raster constructed with a zero dimension.
    #[error("raster dimensions must be at least 1x1, got {width}x{height}")]
    EmptyRaster { width: usize, height: usize },

    /// An image file could not be read or written.
    #[cfg(feature = "codec")]
    #[error("cannot read or write image at {path}: {source}")]
    Resource {
        path: PathBuf,
        source: image::ImageError,
    },
}

/// Result type for raster operations.
pub type Result<T> = std::result::Result<T, Error>;
