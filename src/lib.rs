//! # pixeltone
//!
//! A fixed catalog of pixel-level raster transformations: grayscale,
//! inversion, sepia, black/white median thresholding, 90-degree rotation, a
//! composite warm-shift-plus-overlay "retro" filter, and HSL-space hue /
//! saturation / lightness adjustments.
//!
//! ## Image model
//!
//! Images are [`Raster`] values: dense W x H grids of RGB [`Pixel`]s backed
//! by `ndarray`. There is no alpha channel. Channels are nominally 0-255 but
//! stored as `i32`, because the sepia and warm-shift formulas deliberately
//! do not clamp and later stages must see the overflowed values.
//!
//! ## Transform discipline
//!
//! Every transform in [`transforms`] is a pure function: `&Raster` in, new
//! `Raster` out, input untouched. Chaining is plain function composition:
//!
//! ```
//! use pixeltone::{transforms, Pixel, Raster};
//!
//! let image = Raster::filled(4, 4, Pixel::new(100, 150, 200)).unwrap();
//! let result = transforms::invert(&transforms::grayscale(&image));
//! assert_eq!(result.get(0, 0).unwrap(), Pixel::new(105, 105, 105));
//! ```
//!
//! ## Codec boundary
//!
//! Decoding and encoding live behind the default `codec` feature
//! ([`codec::load`], [`codec::save`]), including loading the halo/grain
//! overlay pair the composite filter needs. The transform core itself never
//! touches the filesystem.

pub mod color;
pub mod error;
pub mod raster;
pub mod transforms;

#[cfg(feature = "codec")]
pub mod codec;

pub use color::{Hsl, Pixel};
pub use error::{Error, Result};
pub use raster::Raster;
pub use transforms::Overlays;
