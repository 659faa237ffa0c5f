/*
 * // Copyright 2025 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use crate::err::PaletteError;
use num_traits::Float;

/// Names every legal interval a color component may carry.
///
/// Each key corresponds to one branded scalar type; the key exists so that
/// boundary code can check a raw number against an interval chosen at
/// runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeKey {
    Alpha,
    Byte,
    Percentile,
    Radial,
    LabL,
    LabA,
    LabB,
    XyzX,
    XyzY,
    XyzZ,
}

impl RangeKey {
    /// Closed interval of legal values for this key.
    pub const fn bounds(self) -> (f32, f32) {
        match self {
            RangeKey::Alpha => (0.0, 1.0),
            RangeKey::Byte => (0.0, 255.0),
            RangeKey::Percentile => (0.0, 100.0),
            RangeKey::Radial => (0.0, 360.0),
            RangeKey::LabL => (0.0, 100.0),
            RangeKey::LabA => (-125.0, 125.0),
            RangeKey::LabB => (-125.0, 125.0),
            RangeKey::XyzX => (0.0, 95.047),
            RangeKey::XyzY => (0.0, 100.0),
            RangeKey::XyzZ => (0.0, 108.883),
        }
    }
}

/// Whether `value` lies in the closed interval of `key`. Total: NaN and
/// infinities are simply out of range.
#[inline]
pub fn is_in_range(value: f32, key: RangeKey) -> bool {
    let (lo, hi) = key.bounds();
    value >= lo && value <= hi
}

/// Checks `value` against `key`, reporting why it does not fit.
///
/// Fails exactly when [`is_in_range`] returns false. Every branding
/// constructor routes through this check.
#[inline]
pub fn range(value: f32, key: RangeKey) -> Result<(), PaletteError> {
    if value.is_nan() {
        return Err(PaletteError::NotANumber(key));
    }
    if !is_in_range(value, key) {
        return Err(PaletteError::OutOfRange { key, value });
    }
    Ok(())
}

#[inline]
pub(crate) fn round_decimals<T: Float>(value: T, decimals: i32) -> T {
    let factor = T::from(10f32).unwrap_or_else(T::one).powi(decimals);
    (value * factor).round() / factor
}

macro_rules! branded_scalar {
    ($name: ident, $key: expr, $decimals: expr, $doc: expr) => {
        #[doc = $doc]
        ///
        /// Constructible only through [`Self::new`] (which rejects
        /// out-of-interval input) or [`Self::saturating`] (which rounds and
        /// clamps); an invalid value is unrepresentable.
        #[repr(transparent)]
        #[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Default)]
        pub struct $name(f32);

        impl $name {
            pub const KEY: RangeKey = $key;
            pub const MIN: f32 = Self::KEY.bounds().0;
            pub const MAX: f32 = Self::KEY.bounds().1;

            /// Validating constructor. Fails on NaN or out-of-interval input;
            /// never clamps silently.
            #[inline]
            pub fn new(raw: f32) -> Result<$name, PaletteError> {
                range(raw, Self::KEY)?;
                Ok($name(raw))
            }

            /// Round-then-clamp constructor, the explicit alternative to a
            /// construction failure. Used inside conversion formulas where
            /// floating point may overshoot the interval by a hair.
            #[inline]
            pub fn saturating(raw: f32) -> $name {
                let rounded = round_decimals(raw, $decimals);
                $name(rounded.max(Self::MIN).min(Self::MAX))
            }

            /// For compile-time constants known to be in range.
            #[inline]
            pub(crate) const fn trusted(raw: f32) -> $name {
                debug_assert!(raw >= Self::MIN && raw <= Self::MAX);
                $name(raw)
            }

            #[inline]
            pub const fn get(self) -> f32 {
                self.0
            }
        }
    };
}

branded_scalar!(
    Alpha,
    RangeKey::Alpha,
    2,
    "Opacity in [0, 1], shared by every color format."
);
branded_scalar!(Byte, RangeKey::Byte, 0, "An RGB channel in [0, 255].");
branded_scalar!(
    Percentile,
    RangeKey::Percentile,
    2,
    "A percentage-like component in [0, 100]."
);
branded_scalar!(Radial, RangeKey::Radial, 2, "A hue angle in [0, 360] degrees.");
branded_scalar!(LabL, RangeKey::LabL, 2, "CIE LAB L* in [0, 100].");
branded_scalar!(LabA, RangeKey::LabA, 2, "CIE LAB a* in [-125, 125].");
branded_scalar!(LabB, RangeKey::LabB, 2, "CIE LAB b* in [-125, 125].");
branded_scalar!(XyzX, RangeKey::XyzX, 3, "CIE XYZ X in [0, 95.047] (D65).");
branded_scalar!(XyzY, RangeKey::XyzY, 3, "CIE XYZ Y in [0, 100.0] (D65).");
branded_scalar!(XyzZ, RangeKey::XyzZ, 3, "CIE XYZ Z in [0, 108.883] (D65).");

impl Alpha {
    /// Fully opaque, the default alpha for every constructed color.
    #[inline]
    pub const fn opaque() -> Alpha {
        Alpha(1.0)
    }
}

/// Round-then-clamp helpers named after the component family they sanitize.
pub mod sanitize {
    use super::{Byte, LabA, LabB, LabL, Percentile, Radial};

    #[inline]
    pub fn percentile(raw: f32) -> Percentile {
        Percentile::saturating(raw)
    }

    #[inline]
    pub fn radial(raw: f32) -> Radial {
        Radial::saturating(raw)
    }

    #[inline]
    pub fn rgb_byte(raw: f32) -> Byte {
        Byte::saturating(raw)
    }

    #[inline]
    pub fn lab(l: f32, a: f32, b: f32) -> (LabL, LabA, LabB) {
        (LabL::saturating(l), LabA::saturating(a), LabB::saturating(b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentile_accepts_closed_interval() {
        assert!(Percentile::new(0.0).is_ok());
        assert!(Percentile::new(100.0).is_ok());
        assert!(Percentile::new(42.5).is_ok());
        assert!(Percentile::new(101.0).is_err());
        assert!(Percentile::new(-1.0).is_err());
    }

    #[test]
    fn nan_never_brands() {
        assert!(matches!(
            Alpha::new(f32::NAN),
            Err(PaletteError::NotANumber(RangeKey::Alpha))
        ));
        assert!(!is_in_range(f32::NAN, RangeKey::Alpha));
    }

    #[test]
    fn range_agrees_with_is_in_range() {
        let keys = [
            RangeKey::Alpha,
            RangeKey::Byte,
            RangeKey::Percentile,
            RangeKey::Radial,
            RangeKey::LabL,
            RangeKey::LabA,
            RangeKey::LabB,
            RangeKey::XyzX,
            RangeKey::XyzY,
            RangeKey::XyzZ,
        ];
        let probes = [
            -1000.0,
            -125.0,
            -1.0,
            0.0,
            0.5,
            1.0,
            95.047,
            100.0,
            108.883,
            255.0,
            360.0,
            1e9,
            f32::NAN,
            f32::INFINITY,
            f32::NEG_INFINITY,
        ];
        for key in keys {
            for probe in probes {
                assert_eq!(is_in_range(probe, key), range(probe, key).is_ok());
            }
        }
    }

    #[test]
    fn saturating_rounds_then_clamps() {
        assert_eq!(Percentile::saturating(100.004).get(), 100.0);
        assert_eq!(Percentile::saturating(100.51).get(), 100.0);
        assert_eq!(Percentile::saturating(-0.004).get(), 0.0);
        assert_eq!(Percentile::saturating(42.499).get(), 42.5);
        assert_eq!(Byte::saturating(254.6).get(), 255.0);
        assert_eq!(Byte::saturating(261.2).get(), 255.0);
        assert_eq!(XyzX::saturating(95.047).get(), 95.047);
    }

    #[test]
    fn lab_sanitize_covers_negative_axis() {
        let (l, a, b) = sanitize::lab(101.0, -130.0, 130.0);
        assert_eq!(l.get(), 100.0);
        assert_eq!(a.get(), -125.0);
        assert_eq!(b.get(), 125.0);
    }
}
