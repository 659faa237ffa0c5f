/*
 * // Copyright 2025 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use crate::range::{Alpha, Percentile};
use crate::rgb::Rgb;

/// A CMYK color; ink coverages are percentages in [0, 100].
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Cmyk {
    pub c: Percentile,
    pub m: Percentile,
    pub y: Percentile,
    pub k: Percentile,
    pub alpha: Alpha,
}

impl Cmyk {
    #[inline]
    pub const fn new(
        c: Percentile,
        m: Percentile,
        y: Percentile,
        k: Percentile,
        alpha: Alpha,
    ) -> Cmyk {
        Cmyk { c, m, y, k, alpha }
    }

    /// `k = 1 - max(r', g', b')`; each ink is `(1 - channel' - k) / (1 - k)`,
    /// zero when `k = 1`.
    pub fn from_rgb(rgb: &Rgb) -> Cmyk {
        let [r, g, b] = rgb.fractions();
        let k = 1.0 - r.max(g).max(b);
        let (c, m, y) = if k >= 1.0 {
            (0.0, 0.0, 0.0)
        } else {
            let reach = 1.0 - k;
            (
                (1.0 - r - k) / reach,
                (1.0 - g - k) / reach,
                (1.0 - b - k) / reach,
            )
        };
        Cmyk {
            c: Percentile::saturating(c * 100.0),
            m: Percentile::saturating(m * 100.0),
            y: Percentile::saturating(y * 100.0),
            k: Percentile::saturating(k * 100.0),
            alpha: rgb.alpha,
        }
    }

    /// `r = 255 (1 - c)(1 - k)`, analogously for green/magenta and
    /// blue/yellow.
    pub fn to_rgb(&self) -> Rgb {
        let c = self.c.get() / 100.0;
        let m = self.m.get() / 100.0;
        let y = self.y.get() / 100.0;
        let k = self.k.get() / 100.0;
        Rgb::from_channels(
            255.0 * (1.0 - c) * (1.0 - k),
            255.0 * (1.0 - m) * (1.0 - k),
            255.0 * (1.0 - y) * (1.0 - k),
            self.alpha,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::Byte;

    fn pct(v: f32) -> Percentile {
        Percentile::new(v).unwrap()
    }

    #[test]
    fn zero_ink_is_white() {
        let cmyk = Cmyk::new(pct(0.0), pct(0.0), pct(0.0), pct(0.0), Alpha::opaque());
        assert_eq!(cmyk.to_rgb(), Rgb::white());
    }

    #[test]
    fn full_key_is_black_with_zero_inks() {
        let cmyk = Cmyk::from_rgb(&Rgb::black());
        assert_eq!(cmyk.k.get(), 100.0);
        assert_eq!(cmyk.c.get(), 0.0);
        assert_eq!(cmyk.m.get(), 0.0);
        assert_eq!(cmyk.y.get(), 0.0);
        assert_eq!(cmyk.to_rgb(), Rgb::black());
    }

    #[test]
    fn pure_red() {
        let red = Rgb::new(
            Byte::new(255.0).unwrap(),
            Byte::new(0.0).unwrap(),
            Byte::new(0.0).unwrap(),
            Alpha::opaque(),
        );
        let cmyk = Cmyk::from_rgb(&red);
        assert_eq!(cmyk.c.get(), 0.0);
        assert_eq!(cmyk.m.get(), 100.0);
        assert_eq!(cmyk.y.get(), 100.0);
        assert_eq!(cmyk.k.get(), 0.0);
        assert_eq!(cmyk.to_rgb(), red);
    }

    #[test]
    fn round_trip_within_a_byte() {
        let rgb = Rgb::from_channels(12.0, 200.0, 98.0, Alpha::opaque());
        let rolled_back = Cmyk::from_rgb(&rgb).to_rgb();
        assert!((rgb.r.get() - rolled_back.r.get()).abs() <= 1.0);
        assert!((rgb.g.get() - rolled_back.g.get()).abs() <= 1.0);
        assert!((rgb.b.get() - rolled_back.b.get()).abs() <= 1.0);
    }
}
