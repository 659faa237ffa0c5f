/*
 * // Copyright 2025 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use crate::hsl::Hsl;
use crate::hsv::Hsv;
use crate::range::{Alpha, Percentile, Radial};

/// Saturation + lightness with the hue dropped: the partial form of HSL used
/// where hue is never needed.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Sl {
    pub s: Percentile,
    pub l: Percentile,
    pub alpha: Alpha,
}

/// Saturation + value with the hue dropped: the partial form of HSV.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Sv {
    pub s: Percentile,
    pub v: Percentile,
    pub alpha: Alpha,
}

impl Sl {
    #[inline]
    pub const fn new(s: Percentile, l: Percentile, alpha: Alpha) -> Sl {
        Sl { s, l, alpha }
    }

    /// Narrows an HSL value, dropping the hue permanently.
    #[inline]
    pub const fn from_hsl(hsl: &Hsl) -> Sl {
        Sl {
            s: hsl.s,
            l: hsl.l,
            alpha: hsl.alpha,
        }
    }

    /// Widens back to HSL. The hue must come from the caller; an SL value
    /// never synthesizes one, so this is not an inverse of [`Sl::from_hsl`].
    #[inline]
    pub const fn with_hue(&self, h: Radial) -> Hsl {
        Hsl {
            h,
            s: self.s,
            l: self.l,
            alpha: self.alpha,
        }
    }
}

impl Sv {
    #[inline]
    pub const fn new(s: Percentile, v: Percentile, alpha: Alpha) -> Sv {
        Sv { s, v, alpha }
    }

    /// Narrows an HSV value, dropping the hue permanently.
    #[inline]
    pub const fn from_hsv(hsv: &Hsv) -> Sv {
        Sv {
            s: hsv.s,
            v: hsv.v,
            alpha: hsv.alpha,
        }
    }

    /// Widens back to HSV with a caller-supplied hue.
    #[inline]
    pub const fn with_hue(&self, h: Radial) -> Hsv {
        Hsv {
            h,
            s: self.s,
            v: self.v,
            alpha: self.alpha,
        }
    }
}
