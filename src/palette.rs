/*
 * // Copyright 2025 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use crate::color::Color;
use crate::validate::{RawColor, component_keys, convert_raw};
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A palette entry as deserialized from storage or import: any of the color
/// fields may be absent or partially filled.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawPaletteItem {
    #[serde(default)]
    pub id: Option<String>,
    /// User-picked custom color, if any.
    #[serde(default)]
    pub custom: Option<RawColor>,
    /// Cached per-format renditions of the item's color.
    #[serde(default)]
    pub colors: Vec<RawColor>,
}

/// A whole palette as deserialized from the outside world.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawPalette {
    #[serde(default)]
    pub name: Option<String>,
    /// Where the palette came from (file name, generator, user input).
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub items: Vec<RawPaletteItem>,
}

/// A fully branded palette entry.
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteItem {
    pub id: String,
    pub custom: Option<Color>,
    pub colors: Vec<Color>,
}

/// A fully branded palette with provenance metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub name: String,
    pub source: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub items: Vec<PaletteItem>,
}

/// Fills absent components of a raw color with the format's zero value and
/// absent alpha with 1, leaving present components untouched.
fn defaulted(raw: &RawColor) -> RawColor {
    let mut filled = raw.clone();
    for key in component_keys(raw.format) {
        if !filled.value.contains_key(*key) {
            filled = match raw.format {
                crate::ColorFormat::Hex => filled.with(key, "#000000"),
                _ => filled.with(key, 0.0f32),
            };
        }
    }
    if filled.alpha.is_none() {
        filled = filled.with_alpha(1.0f32);
    }
    filled
}

/// Lifts a whole raw palette into branded form. Pure: the input is only
/// read. Absent color fields default to the format's zero value; a present
/// but invalid color degrades to the format default (logged by the
/// conversion fallback).
pub fn brand_palette(raw: &RawPalette) -> Palette {
    let items = raw
        .items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let id = item
                .id
                .clone()
                .unwrap_or_else(|| format!("item-{index}"));
            let custom = item
                .custom
                .as_ref()
                .map(|c| convert_raw(&defaulted(c), c.format));
            let colors = item
                .colors
                .iter()
                .map(|c| convert_raw(&defaulted(c), c.format))
                .collect();
            PaletteItem { id, custom, colors }
        })
        .collect();

    Palette {
        name: raw.name.clone().unwrap_or_else(|| "untitled".to_owned()),
        source: raw.source.clone(),
        created_at: raw.created_at,
        items,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, ColorFormat};

    #[test]
    fn absent_fields_default_to_zero_values() {
        let raw = RawPalette {
            items: vec![RawPaletteItem {
                id: None,
                custom: None,
                colors: vec![RawColor::new(ColorFormat::Hsl).with("hue", 120.0f32)],
            }],
            ..RawPalette::default()
        };
        let palette = brand_palette(&raw);
        assert_eq!(palette.name, "untitled");
        assert_eq!(palette.items.len(), 1);
        assert_eq!(palette.items[0].id, "item-0");
        match palette.items[0].colors[0] {
            Color::Hsl(hsl) => {
                assert_eq!(hsl.h.get(), 120.0);
                assert_eq!(hsl.s.get(), 0.0);
                assert_eq!(hsl.l.get(), 0.0);
                assert_eq!(hsl.alpha.get(), 1.0);
            }
            ref other => panic!("expected hsl, got {:?}", other.format()),
        }
    }

    #[test]
    fn invalid_cached_color_degrades_to_format_default() {
        let raw = RawPalette {
            items: vec![RawPaletteItem {
                id: Some("x".to_owned()),
                custom: Some(
                    RawColor::new(ColorFormat::Rgb)
                        .with("red", 300.0f32)
                        .with("green", 0.0f32)
                        .with("blue", 0.0f32),
                ),
                colors: vec![],
            }],
            ..RawPalette::default()
        };
        let palette = brand_palette(&raw);
        assert_eq!(
            palette.items[0].custom,
            Some(Color::default_for(ColorFormat::Rgb))
        );
    }

    #[test]
    fn input_is_not_mutated() {
        let raw = RawPalette {
            name: Some("p".to_owned()),
            items: vec![RawPaletteItem::default()],
            ..RawPalette::default()
        };
        let snapshot = raw.clone();
        let _ = brand_palette(&raw);
        assert_eq!(raw, snapshot);
    }

    #[test]
    fn deserializes_from_json() {
        let raw: RawPalette = serde_json::from_str(
            r##"{
                "name": "sunset",
                "source": "import.json",
                "created_at": "2026-08-01T12:00:00Z",
                "items": [
                    {"id": "a", "colors": [
                        {"format": "rgb", "value": {"red": 255, "green": 96, "blue": 0}},
                        {"format": "hex", "value": {"hex": "#ff6000"}}
                    ]}
                ]
            }"##,
        )
        .unwrap();
        let palette = brand_palette(&raw);
        assert_eq!(palette.name, "sunset");
        assert_eq!(palette.items[0].colors.len(), 2);
        assert_eq!(palette.items[0].colors[0].format(), ColorFormat::Rgb);
        assert_eq!(palette.items[0].colors[1].format(), ColorFormat::Hex);
        assert!(palette.created_at.is_some());
    }
}
