/*
 * // Copyright 2025 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use crate::hsl::Hsl;
use crate::range::{Alpha, Percentile, Radial};

/// An HSV color: hue in degrees, saturation and value as percentages.
///
/// Reachable only through the HSL hub.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Hsv {
    pub h: Radial,
    pub s: Percentile,
    pub v: Percentile,
    pub alpha: Alpha,
}

impl Hsv {
    #[inline]
    pub const fn new(h: Radial, s: Percentile, v: Percentile, alpha: Alpha) -> Hsv {
        Hsv { h, s, v, alpha }
    }

    /// `v = l + s·min(l, 1-l)`; `s' = 0` when `v = 0`, else `2(1 - l/v)`.
    pub fn from_hsl(hsl: &Hsl) -> Hsv {
        let s = hsl.s.get() / 100.0;
        let l = hsl.l.get() / 100.0;
        let v = l + s * l.min(1.0 - l);
        let s_v = if v == 0.0 { 0.0 } else { 2.0 * (1.0 - l / v) };
        Hsv {
            h: hsl.h,
            s: Percentile::saturating(s_v * 100.0),
            v: Percentile::saturating(v * 100.0),
            alpha: hsl.alpha,
        }
    }

    /// `l = v(1 - s/2)`; `s' = (v-l)/min(l, 1-l)`, zero at `l ∈ {0, 1}`.
    pub fn to_hsl(&self) -> Hsl {
        let s = self.s.get() / 100.0;
        let v = self.v.get() / 100.0;
        let l = v * (1.0 - s / 2.0);
        let s_l = if l <= 0.0 || l >= 1.0 {
            0.0
        } else {
            (v - l) / l.min(1.0 - l)
        };
        Hsl {
            h: self.h,
            s: Percentile::saturating(s_l * 100.0),
            l: Percentile::saturating(l * 100.0),
            alpha: self.alpha,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hsl(h: f32, s: f32, l: f32) -> Hsl {
        Hsl::new(
            Radial::new(h).unwrap(),
            Percentile::new(s).unwrap(),
            Percentile::new(l).unwrap(),
            Alpha::opaque(),
        )
    }

    #[test]
    fn full_lightness_is_full_value_zero_saturation() {
        let hsv = Hsv::from_hsl(&hsl(120.0, 100.0, 100.0));
        assert_eq!(hsv.v.get(), 100.0);
        assert_eq!(hsv.s.get(), 0.0);
    }

    #[test]
    fn black_stays_black() {
        let hsv = Hsv::from_hsl(&hsl(0.0, 0.0, 0.0));
        assert_eq!(hsv.v.get(), 0.0);
        assert_eq!(hsv.s.get(), 0.0);
        let back = hsv.to_hsl();
        assert_eq!(back.l.get(), 0.0);
        assert_eq!(back.s.get(), 0.0);
    }

    #[test]
    fn saturated_midtone() {
        // hsl(0, 100%, 50%) is pure red: hsv(0, 100%, 100%)
        let hsv = Hsv::from_hsl(&hsl(0.0, 100.0, 50.0));
        assert_eq!(hsv.s.get(), 100.0);
        assert_eq!(hsv.v.get(), 100.0);
        let back = hsv.to_hsl();
        assert_eq!(back.s.get(), 100.0);
        assert_eq!(back.l.get(), 50.0);
    }

    #[test]
    fn round_trip_preserves_hue_and_alpha() {
        for (h, s, l) in [(12.0, 34.0, 56.0), (340.0, 5.0, 95.0), (200.0, 80.0, 20.0)] {
            let source = hsl(h, s, l);
            let rolled_back = Hsv::from_hsl(&source).to_hsl();
            assert_eq!(rolled_back.h, source.h);
            assert_eq!(rolled_back.alpha, source.alpha);
            assert!((rolled_back.s.get() - source.s.get()).abs() <= 0.05);
            assert!((rolled_back.l.get() - source.l.get()).abs() <= 0.05);
        }
    }
}
