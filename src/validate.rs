/*
 * // Copyright 2025 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use crate::cmyk::Cmyk;
use crate::color::{Color, ColorFormat};
use crate::err::PaletteError;
use crate::hex::HexColor;
use crate::hsl::Hsl;
use crate::hsv::Hsv;
use crate::lab::Lab;
use crate::range::{
    Alpha, Byte, LabA, LabB, LabL, Percentile, Radial, RangeKey, XyzX, XyzY, XyzZ, range,
};
use crate::rgb::Rgb;
use crate::sl::{Sl, Sv};
use crate::xyz::Xyz;
use serde::Deserialize;
use std::collections::BTreeMap;

/// A component as it arrives from the outside world: a number, or a string
/// such as `"42%"`, `"180°"` or `"0.5"`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawComponent {
    Number(f64),
    Text(String),
}

impl RawComponent {
    /// Normalizes to a plain number: strings are trimmed and stripped of a
    /// trailing `%` or `°` before parsing. `None` when the text is not
    /// numeric at all.
    pub fn as_number(&self) -> Option<f32> {
        match self {
            RawComponent::Number(v) => Some(*v as f32),
            RawComponent::Text(s) => {
                let trimmed = s.trim();
                let bare = trimmed
                    .strip_suffix('%')
                    .or_else(|| trimmed.strip_suffix('°'))
                    .unwrap_or(trimmed)
                    .trim();
                bare.parse::<f32>().ok()
            }
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            RawComponent::Text(s) => Some(s),
            RawComponent::Number(_) => None,
        }
    }
}

impl From<f32> for RawComponent {
    fn from(v: f32) -> RawComponent {
        RawComponent::Number(v as f64)
    }
}

impl From<&str> for RawComponent {
    fn from(v: &str) -> RawComponent {
        RawComponent::Text(v.to_owned())
    }
}

/// An unbranded color as deserialized from the outside: a format tag, a
/// component map, and an optional alpha. Only this representation is ever
/// validated at runtime; once branded into [`Color`] the invariants are
/// carried by the types.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawColor {
    pub format: ColorFormat,
    #[serde(default)]
    pub value: BTreeMap<String, RawComponent>,
    #[serde(default)]
    pub alpha: Option<RawComponent>,
}

impl RawColor {
    pub fn new(format: ColorFormat) -> RawColor {
        RawColor {
            format,
            value: BTreeMap::new(),
            alpha: None,
        }
    }

    pub fn with(mut self, key: &str, component: impl Into<RawComponent>) -> RawColor {
        self.value.insert(key.to_owned(), component.into());
        self
    }

    pub fn with_alpha(mut self, alpha: impl Into<RawComponent>) -> RawColor {
        self.alpha = Some(alpha.into());
        self
    }
}

/// Component keys of each format, in display order.
pub(crate) const fn component_keys(format: ColorFormat) -> &'static [&'static str] {
    match format {
        ColorFormat::Cmyk => &["cyan", "magenta", "yellow", "key"],
        ColorFormat::Hex => &["hex"],
        ColorFormat::Hsl => &["hue", "saturation", "lightness"],
        ColorFormat::Hsv => &["hue", "saturation", "value"],
        ColorFormat::Lab => &["l", "a", "b"],
        ColorFormat::Rgb => &["red", "green", "blue"],
        ColorFormat::Sl => &["saturation", "lightness"],
        ColorFormat::Sv => &["saturation", "value"],
        ColorFormat::Xyz => &["x", "y", "z"],
    }
}

pub(crate) const fn component_ranges(format: ColorFormat) -> &'static [RangeKey] {
    match format {
        ColorFormat::Cmyk => &[
            RangeKey::Percentile,
            RangeKey::Percentile,
            RangeKey::Percentile,
            RangeKey::Percentile,
        ],
        ColorFormat::Hex => &[],
        ColorFormat::Hsl => &[RangeKey::Radial, RangeKey::Percentile, RangeKey::Percentile],
        ColorFormat::Hsv => &[RangeKey::Radial, RangeKey::Percentile, RangeKey::Percentile],
        ColorFormat::Lab => &[RangeKey::LabL, RangeKey::LabA, RangeKey::LabB],
        ColorFormat::Rgb => &[RangeKey::Byte, RangeKey::Byte, RangeKey::Byte],
        ColorFormat::Sl => &[RangeKey::Percentile, RangeKey::Percentile],
        ColorFormat::Sv => &[RangeKey::Percentile, RangeKey::Percentile],
        ColorFormat::Xyz => &[RangeKey::XyzX, RangeKey::XyzY, RangeKey::XyzZ],
    }
}

fn numeric_component(raw: &RawColor, key: &str, range_key: RangeKey) -> Result<f32, PaletteError> {
    let component = raw
        .value
        .get(key)
        .ok_or_else(|| PaletteError::MalformedComponent(key.to_owned()))?;
    let value = component
        .as_number()
        .ok_or_else(|| PaletteError::MalformedComponent(key.to_owned()))?;
    range(value, range_key)?;
    Ok(value)
}

fn alpha_component(raw: &RawColor) -> Result<Alpha, PaletteError> {
    match &raw.alpha {
        None => Ok(Alpha::opaque()),
        Some(component) => {
            let value = component
                .as_number()
                .ok_or_else(|| PaletteError::MalformedComponent("alpha".to_owned()))?;
            Alpha::new(value)
        }
    }
}

/// Per-format structural and range check over a whole raw color. String
/// percentages and degrees are normalized before the range check, so numeric
/// and string encodings are accepted uniformly. Total: never fails.
pub fn color_values(raw: &RawColor) -> bool {
    brand_color(raw).is_ok()
}

/// Brands a whole raw color, failing on the first missing, non-numeric or
/// out-of-range component.
pub fn brand_color(raw: &RawColor) -> Result<Color, PaletteError> {
    let alpha = alpha_component(raw)?;
    let keys = component_keys(raw.format);
    let ranges = component_ranges(raw.format);
    match raw.format {
        ColorFormat::Hex => {
            let text = raw
                .value
                .get("hex")
                .and_then(RawComponent::as_text)
                .ok_or_else(|| PaletteError::MalformedComponent("hex".to_owned()))?;
            let mut hex = HexColor::parse(text)?;
            // An explicit numeric alpha wins over the trailing hex byte.
            if raw.alpha.is_some() {
                hex = HexColor::new(
                    hex.set,
                    crate::hex::HexComponent::from_byte((alpha.get() * 255.0).round() as u8),
                );
            }
            Ok(Color::Hex(hex))
        }
        ColorFormat::Cmyk => {
            let c = numeric_component(raw, keys[0], ranges[0])?;
            let m = numeric_component(raw, keys[1], ranges[1])?;
            let y = numeric_component(raw, keys[2], ranges[2])?;
            let k = numeric_component(raw, keys[3], ranges[3])?;
            Ok(Color::Cmyk(Cmyk::new(
                Percentile::new(c)?,
                Percentile::new(m)?,
                Percentile::new(y)?,
                Percentile::new(k)?,
                alpha,
            )))
        }
        ColorFormat::Hsl => {
            let h = numeric_component(raw, keys[0], ranges[0])?;
            let s = numeric_component(raw, keys[1], ranges[1])?;
            let l = numeric_component(raw, keys[2], ranges[2])?;
            Ok(Color::Hsl(Hsl::new(
                Radial::new(h)?,
                Percentile::new(s)?,
                Percentile::new(l)?,
                alpha,
            )))
        }
        ColorFormat::Hsv => {
            let h = numeric_component(raw, keys[0], ranges[0])?;
            let s = numeric_component(raw, keys[1], ranges[1])?;
            let v = numeric_component(raw, keys[2], ranges[2])?;
            Ok(Color::Hsv(Hsv::new(
                Radial::new(h)?,
                Percentile::new(s)?,
                Percentile::new(v)?,
                alpha,
            )))
        }
        ColorFormat::Lab => {
            let l = numeric_component(raw, keys[0], ranges[0])?;
            let a = numeric_component(raw, keys[1], ranges[1])?;
            let b = numeric_component(raw, keys[2], ranges[2])?;
            Ok(Color::Lab(Lab::new(
                LabL::new(l)?,
                LabA::new(a)?,
                LabB::new(b)?,
                alpha,
            )))
        }
        ColorFormat::Rgb => {
            let r = numeric_component(raw, keys[0], ranges[0])?;
            let g = numeric_component(raw, keys[1], ranges[1])?;
            let b = numeric_component(raw, keys[2], ranges[2])?;
            Ok(Color::Rgb(Rgb::new(
                Byte::new(r)?,
                Byte::new(g)?,
                Byte::new(b)?,
                alpha,
            )))
        }
        ColorFormat::Sl => {
            let s = numeric_component(raw, keys[0], ranges[0])?;
            let l = numeric_component(raw, keys[1], ranges[1])?;
            Ok(Color::Sl(Sl::new(Percentile::new(s)?, Percentile::new(l)?, alpha)))
        }
        ColorFormat::Sv => {
            let s = numeric_component(raw, keys[0], ranges[0])?;
            let v = numeric_component(raw, keys[1], ranges[1])?;
            Ok(Color::Sv(Sv::new(Percentile::new(s)?, Percentile::new(v)?, alpha)))
        }
        ColorFormat::Xyz => {
            let x = numeric_component(raw, keys[0], ranges[0])?;
            let y = numeric_component(raw, keys[1], ranges[1])?;
            let z = numeric_component(raw, keys[2], ranges[2])?;
            Ok(Color::Xyz(Xyz::new(
                XyzX::new(x)?,
                XyzY::new(y)?,
                XyzZ::new(z)?,
                alpha,
            )))
        }
    }
}

/// Brands and converts in one step. When validation fails the failure is not
/// propagated: a single diagnostic is logged (fire-and-forget) and the
/// documented default for the target format comes back, keeping rendering
/// non-fatal.
pub fn convert_raw(raw: &RawColor, target: ColorFormat) -> Color {
    match brand_color(raw) {
        Ok(color) => color.to_format(target),
        Err(e) => {
            log::warn!(
                "invalid {} color, substituting the {} default: {}",
                raw.format,
                target,
                e
            );
            Color::default_for(target)
        }
    }
}
