/*
 * // Copyright 2025 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use crate::range::{Alpha, Percentile, Radial};
use crate::rgb::Rgb;

/// An HSL color: hue in degrees, saturation and lightness as percentages.
///
/// The hub for HSV, SL and SV.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Hsl {
    pub h: Radial,
    pub s: Percentile,
    pub l: Percentile,
    pub alpha: Alpha,
}

/// `hueToRGB` kernel of the HSL→RGB formula; `t` is the hue fraction offset
/// by ±1/3 per channel.
#[inline]
fn hue_to_rgb(p: f32, q: f32, t: f32) -> f32 {
    let mut t = t;
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        return p + (q - p) * 6.0 * t;
    }
    if t < 1.0 / 2.0 {
        return q;
    }
    if t < 2.0 / 3.0 {
        return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
    }
    p
}

impl Hsl {
    #[inline]
    pub const fn new(h: Radial, s: Percentile, l: Percentile, alpha: Alpha) -> Hsl {
        Hsl { h, s, l, alpha }
    }

    /// `l = (max+min)/2`; saturation from the chroma delta; hue by the
    /// channel-of-max 60°-sector formula, normalized mod 360.
    pub fn from_rgb(rgb: &Rgb) -> Hsl {
        let [r, g, b] = rgb.fractions();
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        let (h, s) = if max == min {
            (0.0, 0.0)
        } else {
            let delta = max - min;
            let s = if l > 0.5 {
                delta / (2.0 - max - min)
            } else {
                delta / (max + min)
            };
            let sector = if max == r {
                (g - b) / delta + if g < b { 6.0 } else { 0.0 }
            } else if max == g {
                (b - r) / delta + 2.0
            } else {
                (r - g) / delta + 4.0
            };
            ((sector * 60.0) % 360.0, s)
        };

        Hsl {
            h: Radial::saturating(h),
            s: Percentile::saturating(s * 100.0),
            l: Percentile::saturating(l * 100.0),
            alpha: rgb.alpha,
        }
    }

    /// Inverse via `hue_to_rgb(p, q, t)` with `q = l < 0.5 ? l(1+s) :
    /// l+s-ls`, `p = 2l - q`, sampled at h+1/3, h, h-1/3.
    pub fn to_rgb(&self) -> Rgb {
        let h = self.h.get() / 360.0;
        let s = self.s.get() / 100.0;
        let l = self.l.get() / 100.0;

        let (r, g, b) = if s == 0.0 {
            (l, l, l)
        } else {
            let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
            let p = 2.0 * l - q;
            (
                hue_to_rgb(p, q, h + 1.0 / 3.0),
                hue_to_rgb(p, q, h),
                hue_to_rgb(p, q, h - 1.0 / 3.0),
            )
        };

        Rgb::from_channels(r * 255.0, g * 255.0, b * 255.0, self.alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::Byte;

    fn rgb(r: f32, g: f32, b: f32) -> Rgb {
        Rgb::new(
            Byte::new(r).unwrap(),
            Byte::new(g).unwrap(),
            Byte::new(b).unwrap(),
            Alpha::opaque(),
        )
    }

    #[test]
    fn pure_red_lands_on_zero_hue() {
        let hsl = Hsl::from_rgb(&rgb(255.0, 0.0, 0.0));
        assert_eq!(hsl.h.get(), 0.0);
        assert_eq!(hsl.s.get(), 100.0);
        assert_eq!(hsl.l.get(), 50.0);
        assert_eq!(hsl.alpha.get(), 1.0);
    }

    #[test]
    fn achromatic_has_zero_saturation() {
        let hsl = Hsl::from_rgb(&rgb(128.0, 128.0, 128.0));
        assert_eq!(hsl.h.get(), 0.0);
        assert_eq!(hsl.s.get(), 0.0);
        assert!((hsl.l.get() - 50.2).abs() < 0.05);
    }

    #[test]
    fn blue_sector() {
        let hsl = Hsl::from_rgb(&rgb(0.0, 0.0, 255.0));
        assert_eq!(hsl.h.get(), 240.0);
        assert_eq!(hsl.s.get(), 100.0);
        assert_eq!(hsl.l.get(), 50.0);
    }

    #[test]
    fn round_trip_within_a_byte() {
        for (r, g, b) in [
            (255.0, 0.0, 0.0),
            (12.0, 200.0, 98.0),
            (250.0, 251.0, 1.0),
            (0.0, 0.0, 0.0),
            (255.0, 255.0, 255.0),
        ] {
            let source = rgb(r, g, b);
            let rolled_back = Hsl::from_rgb(&source).to_rgb();
            assert!((source.r.get() - rolled_back.r.get()).abs() <= 1.0);
            assert!((source.g.get() - rolled_back.g.get()).abs() <= 1.0);
            assert!((source.b.get() - rolled_back.b.get()).abs() <= 1.0);
        }
    }
}
