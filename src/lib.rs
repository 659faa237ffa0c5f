/*
 * // Copyright 2025 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
//! Branded color values and the nine-format conversion graph backing a
//! palette application: CMYK, hex, HSL, HSV, LAB, RGB, SL, SV and XYZ, with
//! every component range-checked at construction so an out-of-range color is
//! unrepresentable.
#![allow(clippy::manual_clamp, clippy::excessive_precision)]
#![deny(unreachable_pub)]
#![forbid(unsafe_code)]
mod cmyk;
mod color;
mod err;
mod hex;
mod hsl;
mod hsv;
mod lab;
mod palette;
mod range;
mod rgb;
mod sl;
mod strfmt;
mod validate;
mod xyz;

pub use cmyk::Cmyk;
pub use color::{Color, ColorFormat, hsl_to, to_hsl};
pub use err::PaletteError;
pub use hex::{HexColor, HexComponent, HexSet};
pub use hsl::Hsl;
pub use hsv::Hsv;
pub use lab::Lab;
pub use palette::{Palette, PaletteItem, RawPalette, RawPaletteItem, brand_palette};
pub use range::{
    Alpha, Byte, LabA, LabB, LabL, Percentile, Radial, RangeKey, XyzX, XyzY, XyzZ, is_in_range,
    range, sanitize,
};
pub use rgb::Rgb;
pub use sl::{Sl, Sv};
pub use strfmt::{ColorString, parse_color, string_to_value, to_css_string, value_to_string};
pub use validate::{RawColor, RawComponent, brand_color, color_values, convert_raw};
pub use xyz::{D65_WHITE, Xyz};
