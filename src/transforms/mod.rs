//! The transformation catalog.
//!
//! Every transform is a stateless pure function: it borrows a [`Raster`],
//! returns a new one, and never retains a reference after returning. Inputs
//! are never mutated, so a failed or interrupted call cannot leave a
//! half-transformed image behind.
//!
//! ## Catalog
//!
//! - **Per-pixel**: [`grayscale`], [`invert`], [`sepia`] (basic.rs)
//! - **Geometric**: [`rotate_90_cw`] (rotate.rs)
//! - **Global**: [`black_white`] luminance-median threshold (threshold.rs)
//! - **Composite**: [`retro_filter`] warm shift + overlay blends (composite.rs)
//! - **Color space**: [`set_hue`], [`set_saturation`], [`set_lightness`] (hsl.rs)
//!
//! Pure per-pixel transforms process rows in parallel via rayon; the
//! black/white threshold keeps a full-image barrier between its median pass
//! and its write pass. Results are identical to sequential execution.
//!
//! [`Raster`]: crate::raster::Raster

pub mod basic;
pub mod composite;
pub mod hsl;
pub mod rotate;
pub mod threshold;

pub use basic::{grayscale, invert, sepia};
pub use composite::{retro_filter, Overlays};
pub use hsl::{set_hue, set_lightness, set_saturation};
pub use rotate::rotate_90_cw;
pub use threshold::black_white;
