//! Pixel color values and RGB <-> HSL conversion.
//!
//! `Pixel` is the RGB sample every transform reads and writes. Channels are
//! stored as `i32` rather than `u8` because the sepia and warm-shift formulas
//! intentionally do not clamp their results, so a channel can leave the
//! nominal 0-255 range and downstream code must see the overflowed value.
//!
//! `Hsl` is a transient value: produced by [`Pixel::to_hsl`], adjusted, and
//! converted straight back with [`Hsl::to_pixel`]. It is never stored in a
//! raster.
//!
//! The round trip RGB -> HSL -> RGB is not bit-exact (both directions round),
//! but an unchanged round trip reproduces the original pixel within +/-1 per
//! channel.

/// One RGB color sample.
///
/// Channels are nominally in 0-255. Values outside that range are legal and
/// occur after the unclamped sepia / warm-shift transforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pixel {
    pub r: i32,
    pub g: i32,
    pub b: i32,
}

impl Pixel {
    pub const fn new(r: i32, g: i32, b: i32) -> Self {
        Pixel { r, g, b }
    }

    pub const fn black() -> Self {
        Pixel::new(0, 0, 0)
    }

    pub const fn white() -> Self {
        Pixel::new(255, 255, 255)
    }

    /// Perceptual brightness estimate, used by the black/white threshold.
    ///
    /// luminance = sqrt(.299 r^2 + .587 g^2 + .114 b^2)
    pub fn luminance(&self) -> f64 {
        let r = self.r as f64;
        let g = self.g as f64;
        let b = self.b as f64;
        (0.299 * r * r + 0.587 * g * g + 0.114 * b * b).sqrt()
    }

    /// Convert to HSL.
    ///
    /// Channels are normalized to 0.0-1.0 first; out-of-range channels are
    /// clamped into the displayable range before conversion.
    pub fn to_hsl(&self) -> Hsl {
        let r = self.r.clamp(0, 255) as f64 / 255.0;
        let g = self.g.clamp(0, 255) as f64 / 255.0;
        let b = self.b.clamp(0, 255) as f64 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if (max - min).abs() < 1e-9 {
            // Achromatic: hue is undefined, report 0.
            return Hsl { h: 0.0, s: 0.0, l };
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        let h = if (max - r).abs() < 1e-9 {
            let mut h = (g - b) / d;
            if g < b {
                h += 6.0;
            }
            h * 60.0
        } else if (max - g).abs() < 1e-9 {
            ((b - r) / d + 2.0) * 60.0
        } else {
            ((r - g) / d + 4.0) * 60.0
        };

        Hsl { h, s, l }
    }
}

/// One HSL color value: hue in degrees 0-360, saturation and lightness 0-1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Hsl { h, s, l }
    }

    /// Convert back to an RGB pixel.
    ///
    /// Each channel is rounded to the nearest integer and clamped to 0-255.
    pub fn to_pixel(&self) -> Pixel {
        if self.s.abs() < 1e-9 {
            let v = channel(self.l);
            return Pixel::new(v, v, v);
        }

        let q = if self.l < 0.5 {
            self.l * (1.0 + self.s)
        } else {
            self.l + self.s - self.l * self.s
        };
        let p = 2.0 * self.l - q;

        let h_norm = self.h / 360.0;

        fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
            if t < 0.0 {
                t += 1.0;
            }
            if t > 1.0 {
                t -= 1.0;
            }
            if t < 1.0 / 6.0 {
                return p + (q - p) * 6.0 * t;
            }
            if t < 0.5 {
                return q;
            }
            if t < 2.0 / 3.0 {
                return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
            }
            p
        }

        Pixel::new(
            channel(hue_to_rgb(p, q, h_norm + 1.0 / 3.0)),
            channel(hue_to_rgb(p, q, h_norm)),
            channel(hue_to_rgb(p, q, h_norm - 1.0 / 3.0)),
        )
    }
}

#[inline]
fn channel(v: f64) -> i32 {
    (v * 255.0).round().clamp(0.0, 255.0) as i32
}
