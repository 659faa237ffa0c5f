/*
 * // Copyright 2025 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use crate::range::RangeKey;
use std::fmt::{Display, Formatter};

/// Errors arising while branding raw values or parsing textual colors.
#[derive(Debug, Clone, PartialEq)]
pub enum PaletteError {
    /// The raw value was NaN and cannot carry the given brand.
    NotANumber(RangeKey),
    /// The raw value lies outside the closed interval of the given brand.
    OutOfRange { key: RangeKey, value: f32 },
    /// A hex component or hex triple did not match its pattern.
    MalformedHex(String),
    /// A component was missing or could not be read as a number.
    MalformedComponent(String),
    /// A textual format tag did not name one of the nine color formats.
    UnknownFormat(String),
}

impl Display for PaletteError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PaletteError::NotANumber(key) => {
                write!(f, "NaN is not a valid {key:?} value")
            }
            PaletteError::OutOfRange { key, value } => {
                let (lo, hi) = key.bounds();
                write!(f, "{value} is outside the {key:?} interval [{lo}, {hi}]")
            }
            PaletteError::MalformedHex(s) => write!(f, "malformed hex value `{s}`"),
            PaletteError::MalformedComponent(s) => {
                write!(f, "missing or malformed component `{s}`")
            }
            PaletteError::UnknownFormat(s) => write!(f, "unknown color format `{s}`"),
        }
    }
}

impl std::error::Error for PaletteError {}
