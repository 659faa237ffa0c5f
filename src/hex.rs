/*
 * // Copyright 2025 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use crate::err::PaletteError;
use crate::range::Alpha;
use crate::rgb::Rgb;
use std::fmt::{Display, Formatter};

/// One hex byte, the `RR` in `#RRGGBB`. Matches `^[0-9A-Fa-f]{2}$` on
/// construction and is stored canonically as the parsed byte; rendering is
/// always lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexComponent(u8);

impl HexComponent {
    pub fn new(raw: &str) -> Result<HexComponent, PaletteError> {
        if raw.len() != 2 || !raw.bytes().all(|c| c.is_ascii_hexdigit()) {
            return Err(PaletteError::MalformedHex(raw.to_owned()));
        }
        match u8::from_str_radix(raw, 16) {
            Ok(byte) => Ok(HexComponent(byte)),
            Err(_) => Err(PaletteError::MalformedHex(raw.to_owned())),
        }
    }

    #[inline]
    pub const fn from_byte(byte: u8) -> HexComponent {
        HexComponent(byte)
    }

    #[inline]
    pub const fn byte(self) -> u8 {
        self.0
    }
}

impl Display for HexComponent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02x}", self.0)
    }
}

/// A `#RRGGBB` triple. Matches `^#[0-9A-Fa-f]{6}$` on construction and is
/// stored as the parsed 24-bit value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexSet(u32);

impl HexSet {
    pub fn new(raw: &str) -> Result<HexSet, PaletteError> {
        let digits = match raw.strip_prefix('#') {
            Some(d) => d,
            None => return Err(PaletteError::MalformedHex(raw.to_owned())),
        };
        if digits.len() != 6 || !digits.bytes().all(|c| c.is_ascii_hexdigit()) {
            return Err(PaletteError::MalformedHex(raw.to_owned()));
        }
        match u32::from_str_radix(digits, 16) {
            Ok(bits) => Ok(HexSet(bits)),
            Err(_) => Err(PaletteError::MalformedHex(raw.to_owned())),
        }
    }

    #[inline]
    pub const fn from_bytes(r: u8, g: u8, b: u8) -> HexSet {
        HexSet(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Byte channels `[r, g, b]` of the triple.
    #[inline]
    pub const fn channels(self) -> [u8; 3] {
        [
            ((self.0 >> 16) & 0xff) as u8,
            ((self.0 >> 8) & 0xff) as u8,
            (self.0 & 0xff) as u8,
        ]
    }
}

impl Display for HexSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

/// A hex-encoded color: the `#RRGGBB` triple plus an alpha byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexColor {
    pub set: HexSet,
    pub alpha: HexComponent,
}

impl HexColor {
    #[inline]
    pub const fn new(set: HexSet, alpha: HexComponent) -> HexColor {
        HexColor { set, alpha }
    }

    /// Parses `#RRGGBB` or `#RRGGBBAA` text. An 8-digit input is truncated
    /// to 7 characters with the trailing byte split off as the alpha
    /// component before either part is validated.
    pub fn parse(raw: &str) -> Result<HexColor, PaletteError> {
        if raw.len() == 9 {
            let set_part = raw
                .get(..7)
                .ok_or_else(|| PaletteError::MalformedHex(raw.to_owned()))?;
            let alpha_part = raw
                .get(7..9)
                .ok_or_else(|| PaletteError::MalformedHex(raw.to_owned()))?;
            let set = HexSet::new(set_part)?;
            let alpha = HexComponent::new(alpha_part)?;
            return Ok(HexColor { set, alpha });
        }
        let set = HexSet::new(raw)?;
        Ok(HexColor {
            set,
            alpha: HexComponent::from_byte(255),
        })
    }

    /// Numeric opacity, the alpha byte scaled into [0, 1].
    #[inline]
    pub const fn alpha_value(&self) -> Alpha {
        Alpha::trusted(self.alpha.byte() as f32 / 255.0)
    }

    /// Rounds each RGB channel to the nearest byte; the alpha byte is
    /// `round(alpha * 255)`.
    pub fn from_rgb(rgb: &Rgb) -> HexColor {
        let [r, g, b] = rgb.bytes::<u8>();
        HexColor {
            set: HexSet::from_bytes(r, g, b),
            alpha: HexComponent::from_byte((rgb.alpha.get() * 255.0).round() as u8),
        }
    }

    /// Splits the 24-bit triple into byte channels.
    pub fn to_rgb(&self) -> Rgb {
        let [r, g, b] = self.set.channels();
        Rgb::from_channels(r as f32, g as f32, b as f32, self.alpha_value())
    }
}

impl Display for HexColor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.set, self.alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::Byte;

    #[test]
    fn component_pattern() {
        assert!(HexComponent::new("ff").is_ok());
        assert!(HexComponent::new("0A").is_ok());
        assert!(HexComponent::new("f").is_err());
        assert!(HexComponent::new("zz").is_err());
        assert!(HexComponent::new("fff").is_err());
        assert_eq!(HexComponent::new("FF").unwrap().byte(), 255);
    }

    #[test]
    fn set_pattern() {
        assert!(HexSet::new("#ff00aa").is_ok());
        assert!(HexSet::new("ff00aa").is_err());
        assert!(HexSet::new("#ff00a").is_err());
        assert!(HexSet::new("#gg00aa").is_err());
        assert_eq!(HexSet::new("#FF8000").unwrap().channels(), [255, 128, 0]);
    }

    #[test]
    fn eight_digit_input_splits_alpha() {
        let hex = HexColor::parse("#ff000080").unwrap();
        assert_eq!(hex.set, HexSet::new("#ff0000").unwrap());
        assert_eq!(hex.alpha.byte(), 0x80);
        assert!((hex.alpha_value().get() - 128.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn six_digit_input_is_opaque() {
        let hex = HexColor::parse("#336699").unwrap();
        assert_eq!(hex.alpha.byte(), 255);
        assert_eq!(hex.to_string(), "#336699ff");
    }

    #[test]
    fn round_trips_through_rgb() {
        let hex = HexColor::parse("#12ab9cff").unwrap();
        let rgb = hex.to_rgb();
        assert_eq!(rgb.r, Byte::new(0x12 as f32).unwrap());
        assert_eq!(rgb.g, Byte::new(0xab as f32).unwrap());
        assert_eq!(rgb.b, Byte::new(0x9c as f32).unwrap());
        assert_eq!(HexColor::from_rgb(&rgb), hex);
    }

    #[test]
    fn rejects_multibyte_garbage() {
        assert!(HexColor::parse("#ff00é0aa").is_err());
        assert!(HexColor::parse("").is_err());
    }
}
