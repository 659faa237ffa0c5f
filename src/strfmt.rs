/*
 * // Copyright 2025 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use crate::color::{Color, ColorFormat};
use crate::err::PaletteError;
use crate::hex::HexColor;
use crate::validate::{RawColor, brand_color, component_keys};

/// A color whose components are display strings (`"42%"`, `"180°"`).
///
/// Parallel to [`Color`]; intended for editing widgets and labels only,
/// never for computation.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorString {
    Cmyk { c: String, m: String, y: String, k: String, alpha: String },
    Hex { set: String, alpha: String },
    Hsl { h: String, s: String, l: String, alpha: String },
    Hsv { h: String, s: String, v: String, alpha: String },
    Lab { l: String, a: String, b: String, alpha: String },
    Rgb { r: String, g: String, b: String, alpha: String },
    Sl { s: String, l: String, alpha: String },
    Sv { s: String, v: String, alpha: String },
    Xyz { x: String, y: String, z: String, alpha: String },
}

impl ColorString {
    pub const fn format(&self) -> ColorFormat {
        match self {
            ColorString::Cmyk { .. } => ColorFormat::Cmyk,
            ColorString::Hex { .. } => ColorFormat::Hex,
            ColorString::Hsl { .. } => ColorFormat::Hsl,
            ColorString::Hsv { .. } => ColorFormat::Hsv,
            ColorString::Lab { .. } => ColorFormat::Lab,
            ColorString::Rgb { .. } => ColorFormat::Rgb,
            ColorString::Sl { .. } => ColorFormat::Sl,
            ColorString::Sv { .. } => ColorFormat::Sv,
            ColorString::Xyz { .. } => ColorFormat::Xyz,
        }
    }
}

/// Two decimals, trailing zeros trimmed: `50.50` → `"50.5"`, `1.00` → `"1"`.
fn scalar(v: f32) -> String {
    let text = format!("{v:.2}");
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

fn percent(v: f32) -> String {
    format!("{}%", scalar(v))
}

fn degrees(v: f32) -> String {
    format!("{}°", scalar(v))
}

/// Formats every component: `%` on percentiles, `°` on hue, alpha and hex
/// bare.
pub fn value_to_string(color: &Color) -> ColorString {
    match color {
        Color::Cmyk(v) => ColorString::Cmyk {
            c: percent(v.c.get()),
            m: percent(v.m.get()),
            y: percent(v.y.get()),
            k: percent(v.k.get()),
            alpha: scalar(v.alpha.get()),
        },
        Color::Hex(v) => ColorString::Hex {
            set: v.set.to_string(),
            alpha: v.alpha.to_string(),
        },
        Color::Hsl(v) => ColorString::Hsl {
            h: degrees(v.h.get()),
            s: percent(v.s.get()),
            l: percent(v.l.get()),
            alpha: scalar(v.alpha.get()),
        },
        Color::Hsv(v) => ColorString::Hsv {
            h: degrees(v.h.get()),
            s: percent(v.s.get()),
            v: percent(v.v.get()),
            alpha: scalar(v.alpha.get()),
        },
        Color::Lab(v) => ColorString::Lab {
            l: scalar(v.l.get()),
            a: scalar(v.a.get()),
            b: scalar(v.b.get()),
            alpha: scalar(v.alpha.get()),
        },
        Color::Rgb(v) => ColorString::Rgb {
            r: scalar(v.r.get()),
            g: scalar(v.g.get()),
            b: scalar(v.b.get()),
            alpha: scalar(v.alpha.get()),
        },
        Color::Sl(v) => ColorString::Sl {
            s: percent(v.s.get()),
            l: percent(v.l.get()),
            alpha: scalar(v.alpha.get()),
        },
        Color::Sv(v) => ColorString::Sv {
            s: percent(v.s.get()),
            v: percent(v.v.get()),
            alpha: scalar(v.alpha.get()),
        },
        Color::Xyz(v) => ColorString::Xyz {
            x: scalar(v.x.get()),
            y: scalar(v.y.get()),
            z: scalar(v.z.get()),
            alpha: scalar(v.alpha.get()),
        },
    }
}

/// Strips units, reparses and re-brands. A range failure surfaces exactly as
/// it would from the branding constructors.
pub fn string_to_value(color: &ColorString) -> Result<Color, PaletteError> {
    let format = color.format();
    let raw = match color {
        ColorString::Cmyk { c, m, y, k, alpha } => RawColor::new(format)
            .with("cyan", c.as_str())
            .with("magenta", m.as_str())
            .with("yellow", y.as_str())
            .with("key", k.as_str())
            .with_alpha(alpha.as_str()),
        ColorString::Hex { set, alpha } => {
            let mut joined = set.clone();
            joined.push_str(alpha);
            RawColor::new(format).with("hex", joined.as_str())
        }
        ColorString::Hsl { h, s, l, alpha } => RawColor::new(format)
            .with("hue", h.as_str())
            .with("saturation", s.as_str())
            .with("lightness", l.as_str())
            .with_alpha(alpha.as_str()),
        ColorString::Hsv { h, s, v, alpha } => RawColor::new(format)
            .with("hue", h.as_str())
            .with("saturation", s.as_str())
            .with("value", v.as_str())
            .with_alpha(alpha.as_str()),
        ColorString::Lab { l, a, b, alpha } => RawColor::new(format)
            .with("l", l.as_str())
            .with("a", a.as_str())
            .with("b", b.as_str())
            .with_alpha(alpha.as_str()),
        ColorString::Rgb { r, g, b, alpha } => RawColor::new(format)
            .with("red", r.as_str())
            .with("green", g.as_str())
            .with("blue", b.as_str())
            .with_alpha(alpha.as_str()),
        ColorString::Sl { s, l, alpha } => RawColor::new(format)
            .with("saturation", s.as_str())
            .with("lightness", l.as_str())
            .with_alpha(alpha.as_str()),
        ColorString::Sv { s, v, alpha } => RawColor::new(format)
            .with("saturation", s.as_str())
            .with("value", v.as_str())
            .with_alpha(alpha.as_str()),
        ColorString::Xyz { x, y, z, alpha } => RawColor::new(format)
            .with("x", x.as_str())
            .with("y", y.as_str())
            .with("z", z.as_str())
            .with_alpha(alpha.as_str()),
    };
    brand_color(&raw)
}

/// CSS-style function notation: `rgb(255, 0, 0, 1)`, `hsl(0, 100%, 50%, 1)`,
/// hex as `#rrggbbaa`.
pub fn to_css_string(color: &Color) -> String {
    match value_to_string(color) {
        ColorString::Hex { set, alpha } => format!("{set}{alpha}"),
        ColorString::Cmyk { c, m, y, k, alpha } => {
            format!("cmyk({c}, {m}, {y}, {k}, {alpha})")
        }
        ColorString::Hsl { h, s, l, alpha } => format!("hsl({h}, {s}, {l}, {alpha})"),
        ColorString::Hsv { h, s, v, alpha } => format!("hsv({h}, {s}, {v}, {alpha})"),
        ColorString::Lab { l, a, b, alpha } => format!("lab({l}, {a}, {b}, {alpha})"),
        ColorString::Rgb { r, g, b, alpha } => format!("rgb({r}, {g}, {b}, {alpha})"),
        ColorString::Sl { s, l, alpha } => format!("sl({s}, {l}, {alpha})"),
        ColorString::Sv { s, v, alpha } => format!("sv({s}, {v}, {alpha})"),
        ColorString::Xyz { x, y, z, alpha } => format!("xyz({x}, {y}, {z}, {alpha})"),
    }
}

/// Parses user-typed text in a known format: an optional `name(...)` wrapper,
/// comma- or whitespace-separated components with optional `%`/`°` units, and
/// an optional trailing alpha (default 1).
pub fn parse_color(format: ColorFormat, text: &str) -> Result<Color, PaletteError> {
    let trimmed = text.trim();
    if format == ColorFormat::Hex {
        let body = strip_wrapper(trimmed, format).unwrap_or(trimmed);
        return Ok(Color::Hex(HexColor::parse(body.trim())?));
    }

    let body = strip_wrapper(trimmed, format).unwrap_or(trimmed);
    let parts: Vec<&str> = if body.contains(',') {
        body.split(',').map(str::trim).collect()
    } else {
        body.split_whitespace().collect()
    };
    let keys = component_keys(format);
    if parts.len() < keys.len() || parts.len() > keys.len() + 1 {
        return Err(PaletteError::MalformedComponent(text.to_owned()));
    }

    let mut raw = RawColor::new(format);
    for (key, part) in keys.iter().zip(&parts) {
        if part.is_empty() {
            return Err(PaletteError::MalformedComponent((*key).to_owned()));
        }
        raw = raw.with(key, *part);
    }
    if parts.len() == keys.len() + 1 {
        raw = raw.with_alpha(parts[keys.len()]);
    }
    brand_color(&raw)
}

fn strip_wrapper<'a>(text: &'a str, format: ColorFormat) -> Option<&'a str> {
    let rest = text.strip_prefix(format.as_str())?;
    rest.trim_start().strip_prefix('(')?.trim_end().strip_suffix(')')
}
