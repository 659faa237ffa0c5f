/*
 * // Copyright 2025 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use crate::range::{Alpha, XyzX, XyzY, XyzZ};
use crate::rgb::Rgb;

/// D65 reference white, the normalization point for LAB.
pub const D65_WHITE: [f32; 3] = [95.047, 100.0, 108.883];

/// Linear sRGB → XYZ, row major. Outputs are scaled ×100 afterwards.
const SRGB_TO_XYZ: [[f32; 3]; 3] = [
    [0.4124564, 0.3575761, 0.1804375],
    [0.2126729, 0.7151522, 0.0721750],
    [0.0193339, 0.1191920, 0.9503041],
];

/// Inverse of [`SRGB_TO_XYZ`].
const XYZ_TO_SRGB: [[f32; 3]; 3] = [
    [3.2404542, -1.5371385, -0.4985314],
    [-0.9692660, 1.8760108, 0.0415560],
    [0.0556434, -0.2040259, 1.0572252],
];

/// sRGB gamma decode into linear light.
#[inline]
fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// sRGB gamma encode from linear light.
#[inline]
fn srgb_from_linear(c: f32) -> f32 {
    if c <= 0.0031308 {
        c * 12.92
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

/// A CIE XYZ color under the D65 illuminant, components scaled so that the
/// reference white is (95.047, 100.0, 108.883).
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Xyz {
    pub x: XyzX,
    pub y: XyzY,
    pub z: XyzZ,
    pub alpha: Alpha,
}

impl Xyz {
    #[inline]
    pub const fn new(x: XyzX, y: XyzY, z: XyzZ, alpha: Alpha) -> Xyz {
        Xyz { x, y, z, alpha }
    }

    /// Per-channel sRGB gamma decode, then the linear-sRGB→XYZ matrix ×100.
    pub fn from_rgb(rgb: &Rgb) -> Xyz {
        let [r, g, b] = rgb.fractions().map(srgb_to_linear);
        let m = SRGB_TO_XYZ;
        let x = (m[0][0] * r + m[0][1] * g + m[0][2] * b) * 100.0;
        let y = (m[1][0] * r + m[1][1] * g + m[1][2] * b) * 100.0;
        let z = (m[2][0] * r + m[2][1] * g + m[2][2] * b) * 100.0;
        Xyz {
            x: XyzX::saturating(x),
            y: XyzY::saturating(y),
            z: XyzZ::saturating(z),
            alpha: rgb.alpha,
        }
    }

    /// Matrix inverse, gamma re-encode, channels sanitized into whole bytes.
    pub fn to_rgb(&self) -> Rgb {
        let x = self.x.get() / 100.0;
        let y = self.y.get() / 100.0;
        let z = self.z.get() / 100.0;
        let m = XYZ_TO_SRGB;
        let r = srgb_from_linear(m[0][0] * x + m[0][1] * y + m[0][2] * z);
        let g = srgb_from_linear(m[1][0] * x + m[1][1] * y + m[1][2] * z);
        let b = srgb_from_linear(m[2][0] * x + m[2][1] * y + m[2][2] * z);
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
    fn black_is_origin() {
        let xyz = Xyz::from_rgb(&Rgb::black());
        assert_eq!(xyz.x.get(), 0.0);
        assert_eq!(xyz.y.get(), 0.0);
        assert_eq!(xyz.z.get(), 0.0);
    }

    #[test]
    fn white_hits_the_reference_point() {
        let xyz = Xyz::from_rgb(&Rgb::white());
        assert!((xyz.x.get() - D65_WHITE[0]).abs() <= 0.01);
        assert!((xyz.y.get() - D65_WHITE[1]).abs() <= 0.01);
        assert!((xyz.z.get() - D65_WHITE[2]).abs() <= 0.01);
    }

    #[test]
    fn companding_breakpoint_is_continuous() {
        let below = srgb_to_linear(0.04044);
        let above = srgb_to_linear(0.04046);
        assert!((below - above).abs() < 1e-4);
        let encoded = srgb_from_linear(srgb_to_linear(0.5));
        assert!((encoded - 0.5).abs() < 1e-5);
    }

    #[test]
    fn round_trip_within_a_byte() {
        for (r, g, b) in [
            (255.0, 0.0, 0.0),
            (0.0, 255.0, 0.0),
            (0.0, 0.0, 255.0),
            (12.0, 200.0, 98.0),
            (130.0, 131.0, 132.0),
        ] {
            let source = rgb(r, g, b);
            let rolled_back = Xyz::from_rgb(&source).to_rgb();
            assert!((source.r.get() - rolled_back.r.get()).abs() <= 1.0);
            assert!((source.g.get() - rolled_back.g.get()).abs() <= 1.0);
            assert!((source.b.get() - rolled_back.b.get()).abs() <= 1.0);
        }
    }
}
