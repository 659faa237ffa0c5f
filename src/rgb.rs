/*
 * // Copyright 2025 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use crate::range::{Alpha, Byte};
use num_traits::AsPrimitive;

/// An sRGB color with byte-ranged channels.
///
/// The pivot of the conversion graph: CMYK and hex route through RGB, and so
/// does every colorimetric chain toward XYZ/LAB.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Rgb {
    /// Red channel in [0, 255].
    pub r: Byte,
    /// Green channel in [0, 255].
    pub g: Byte,
    /// Blue channel in [0, 255].
    pub b: Byte,
    pub alpha: Alpha,
}

impl Rgb {
    #[inline]
    pub const fn new(r: Byte, g: Byte, b: Byte, alpha: Alpha) -> Rgb {
        Rgb { r, g, b, alpha }
    }

    /// Builds from raw channel values produced by a conversion formula,
    /// sanitizing each into a whole byte.
    #[inline]
    pub fn from_channels(r: f32, g: f32, b: f32, alpha: Alpha) -> Rgb {
        Rgb {
            r: Byte::saturating(r),
            g: Byte::saturating(g),
            b: Byte::saturating(b),
            alpha,
        }
    }

    #[inline]
    pub const fn black() -> Rgb {
        Rgb {
            r: Byte::trusted(0.0),
            g: Byte::trusted(0.0),
            b: Byte::trusted(0.0),
            alpha: Alpha::opaque(),
        }
    }

    #[inline]
    pub const fn white() -> Rgb {
        Rgb {
            r: Byte::trusted(255.0),
            g: Byte::trusted(255.0),
            b: Byte::trusted(255.0),
            alpha: Alpha::opaque(),
        }
    }

    /// Channels scaled into [0, 1] fractions, the domain of every formula.
    #[inline]
    pub fn fractions(&self) -> [f32; 3] {
        [
            self.r.get() / 255.0,
            self.g.get() / 255.0,
            self.b.get() / 255.0,
        ]
    }

    pub fn euclidean_distance(&self, other: Rgb) -> f32 {
        let dr = self.r.get() - other.r.get();
        let dg = self.g.get() - other.g.get();
        let db = self.b.get() - other.b.get();
        (dr * dr + dg * dg + db * db).sqrt()
    }

    /// Whole-byte channels, for packing into hex or display text.
    #[inline]
    pub fn bytes<V: Copy + 'static>(&self) -> [V; 3]
    where
        f32: AsPrimitive<V>,
    {
        [
            self.r.get().round().as_(),
            self.g.get().round().as_(),
            self.b.get().round().as_(),
        ]
    }
}
