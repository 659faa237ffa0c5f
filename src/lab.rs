/*
 * // Copyright 2025 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use crate::range::{Alpha, LabA, LabB, LabL, XyzX, XyzY, XyzZ, sanitize};
use crate::xyz::{D65_WHITE, Xyz};

/// CIE 1976 breakpoint between the cube-root and linear segments.
const EPSILON: f32 = 0.008856;
/// Slope of the linear segment below [`EPSILON`].
const LINEAR_SLOPE: f32 = 7.787;
const LINEAR_OFFSET: f32 = 16.0 / 116.0;

#[inline]
fn pivot(t: f32) -> f32 {
    if t > EPSILON {
        t.cbrt()
    } else {
        LINEAR_SLOPE * t + LINEAR_OFFSET
    }
}

#[inline]
fn pivot_inverse(f: f32) -> f32 {
    let f3 = f * f * f;
    if f3 > EPSILON {
        f3
    } else {
        (f - LINEAR_OFFSET) / LINEAR_SLOPE
    }
}

/// A CIE LAB color referenced to the D65 white point.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Lab {
    /// L* in [0, 100].
    pub l: LabL,
    /// a*, the green–red axis, in [-125, 125].
    pub a: LabA,
    /// b*, the blue–yellow axis, in [-125, 125].
    pub b: LabB,
    pub alpha: Alpha,
}

impl Lab {
    #[inline]
    pub const fn new(l: LabL, a: LabA, b: LabB, alpha: Alpha) -> Lab {
        Lab { l, a, b, alpha }
    }

    /// `L = 116 f(Y/Yn) - 16`, `a = 500 (f(X/Xn) - f(Y/Yn))`,
    /// `b = 200 (f(Y/Yn) - f(Z/Zn))`.
    pub fn from_xyz(xyz: &Xyz) -> Lab {
        let fx = pivot(xyz.x.get() / D65_WHITE[0]);
        let fy = pivot(xyz.y.get() / D65_WHITE[1]);
        let fz = pivot(xyz.z.get() / D65_WHITE[2]);
        let (l, a, b) = sanitize::lab(116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz));
        Lab {
            l,
            a,
            b,
            alpha: xyz.alpha,
        }
    }

    /// Algebraic rearrangement of the forward formula with the same
    /// breakpoint test.
    pub fn to_xyz(&self) -> Xyz {
        let fy = (self.l.get() + 16.0) / 116.0;
        let fx = self.a.get() / 500.0 + fy;
        let fz = fy - self.b.get() / 200.0;
        Xyz {
            x: XyzX::saturating(pivot_inverse(fx) * D65_WHITE[0]),
            y: XyzY::saturating(pivot_inverse(fy) * D65_WHITE[1]),
            z: XyzZ::saturating(pivot_inverse(fz) * D65_WHITE[2]),
            alpha: self.alpha,
        }
    }

    /// CIE76 color difference (straight euclidean distance in LAB).
    pub fn euclidean_distance(&self, other: Lab) -> f32 {
        let dl = self.l.get() - other.l.get();
        let da = self.a.get() - other.a.get();
        let db = self.b.get() - other.b.get();
        (dl * dl + da * da + db * db).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rgb::Rgb;

    #[test]
    fn black_is_origin() {
        let lab = Lab::from_xyz(&Xyz::from_rgb(&Rgb::black()));
        assert_eq!(lab.l.get(), 0.0);
        assert_eq!(lab.a.get(), 0.0);
        assert_eq!(lab.b.get(), 0.0);
        let back = lab.to_xyz();
        assert_eq!(back.x.get(), 0.0);
        assert_eq!(back.y.get(), 0.0);
        assert_eq!(back.z.get(), 0.0);
    }

    #[test]
    fn white_is_full_lightness_neutral() {
        let lab = Lab::from_xyz(&Xyz::from_rgb(&Rgb::white()));
        assert!((lab.l.get() - 100.0).abs() <= 0.05);
        assert!(lab.a.get().abs() <= 0.05);
        assert!(lab.b.get().abs() <= 0.05);
    }

    #[test]
    fn round_trip_stays_tight() {
        let xyz = Xyz::new(
            XyzX::new(41.24).unwrap(),
            XyzY::new(21.26).unwrap(),
            XyzZ::new(1.93).unwrap(),
            Alpha::opaque(),
        );
        let rolled_back = Lab::from_xyz(&xyz).to_xyz();
        assert!((xyz.x.get() - rolled_back.x.get()).abs() <= 0.05);
        assert!((xyz.y.get() - rolled_back.y.get()).abs() <= 0.05);
        assert!((xyz.z.get() - rolled_back.z.get()).abs() <= 0.05);
    }

    #[test]
    fn linear_segment_round_trips() {
        // Y below the CIE breakpoint exercises the 7.787 slope.
        let xyz = Xyz::new(
            XyzX::new(0.5).unwrap(),
            XyzY::new(0.4).unwrap(),
            XyzZ::new(0.6).unwrap(),
            Alpha::opaque(),
        );
        let rolled_back = Lab::from_xyz(&xyz).to_xyz();
        assert!((xyz.x.get() - rolled_back.x.get()).abs() <= 0.05);
        assert!((xyz.y.get() - rolled_back.y.get()).abs() <= 0.05);
        assert!((xyz.z.get() - rolled_back.z.get()).abs() <= 0.05);
    }

    #[test]
    fn distance_to_self_is_zero() {
        let lab = Lab::from_xyz(&Xyz::from_rgb(&Rgb::white()));
        assert_eq!(lab.euclidean_distance(lab), 0.0);
    }
}
