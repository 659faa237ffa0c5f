/*
 * // Copyright 2025 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use crate::cmyk::Cmyk;
use crate::err::PaletteError;
use crate::hex::{HexColor, HexComponent, HexSet};
use crate::hsl::Hsl;
use crate::hsv::Hsv;
use crate::lab::Lab;
use crate::range::{Alpha, LabA, LabB, LabL, Percentile, Radial, XyzX, XyzY, XyzZ};
use crate::rgb::Rgb;
use crate::sl::{Sl, Sv};
use crate::xyz::Xyz;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Discriminant over the nine supported color encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorFormat {
    Cmyk,
    Hex,
    Hsl,
    Hsv,
    Lab,
    Rgb,
    Sl,
    Sv,
    Xyz,
}

impl ColorFormat {
    pub const ALL: [ColorFormat; 9] = [
        ColorFormat::Cmyk,
        ColorFormat::Hex,
        ColorFormat::Hsl,
        ColorFormat::Hsv,
        ColorFormat::Lab,
        ColorFormat::Rgb,
        ColorFormat::Sl,
        ColorFormat::Sv,
        ColorFormat::Xyz,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            ColorFormat::Cmyk => "cmyk",
            ColorFormat::Hex => "hex",
            ColorFormat::Hsl => "hsl",
            ColorFormat::Hsv => "hsv",
            ColorFormat::Lab => "lab",
            ColorFormat::Rgb => "rgb",
            ColorFormat::Sl => "sl",
            ColorFormat::Sv => "sv",
            ColorFormat::Xyz => "xyz",
        }
    }
}

impl Display for ColorFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorFormat {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cmyk" => Ok(ColorFormat::Cmyk),
            "hex" => Ok(ColorFormat::Hex),
            "hsl" => Ok(ColorFormat::Hsl),
            "hsv" => Ok(ColorFormat::Hsv),
            "lab" => Ok(ColorFormat::Lab),
            "rgb" => Ok(ColorFormat::Rgb),
            "sl" => Ok(ColorFormat::Sl),
            "sv" => Ok(ColorFormat::Sv),
            "xyz" => Ok(ColorFormat::Xyz),
            other => Err(PaletteError::UnknownFormat(other.to_owned())),
        }
    }
}

/// A color value in exactly one of the nine encodings.
///
/// Every component is branded, so a constructed `Color` is valid by
/// definition; conversions are pure and total.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    Cmyk(Cmyk),
    Hex(HexColor),
    Hsl(Hsl),
    Hsv(Hsv),
    Lab(Lab),
    Rgb(Rgb),
    Sl(Sl),
    Sv(Sv),
    Xyz(Xyz),
}

const DEFAULT_CMYK: Cmyk = Cmyk::new(
    Percentile::trusted(0.0),
    Percentile::trusted(0.0),
    Percentile::trusted(0.0),
    Percentile::trusted(0.0),
    Alpha::opaque(),
);
const DEFAULT_HEX: HexColor = HexColor::new(HexSet::from_bytes(0, 0, 0), HexComponent::from_byte(255));
const DEFAULT_HSL: Hsl = Hsl::new(
    Radial::trusted(0.0),
    Percentile::trusted(0.0),
    Percentile::trusted(0.0),
    Alpha::opaque(),
);
const DEFAULT_HSV: Hsv = Hsv::new(
    Radial::trusted(0.0),
    Percentile::trusted(0.0),
    Percentile::trusted(0.0),
    Alpha::opaque(),
);
const DEFAULT_LAB: Lab = Lab::new(
    LabL::trusted(0.0),
    LabA::trusted(0.0),
    LabB::trusted(0.0),
    Alpha::opaque(),
);
const DEFAULT_SL: Sl = Sl::new(Percentile::trusted(0.0), Percentile::trusted(0.0), Alpha::opaque());
const DEFAULT_SV: Sv = Sv::new(Percentile::trusted(0.0), Percentile::trusted(0.0), Alpha::opaque());
const DEFAULT_XYZ: Xyz = Xyz::new(
    XyzX::trusted(0.0),
    XyzY::trusted(0.0),
    XyzZ::trusted(0.0),
    Alpha::opaque(),
);

impl Color {
    #[inline]
    pub const fn format(&self) -> ColorFormat {
        match self {
            Color::Cmyk(_) => ColorFormat::Cmyk,
            Color::Hex(_) => ColorFormat::Hex,
            Color::Hsl(_) => ColorFormat::Hsl,
            Color::Hsv(_) => ColorFormat::Hsv,
            Color::Lab(_) => ColorFormat::Lab,
            Color::Rgb(_) => ColorFormat::Rgb,
            Color::Sl(_) => ColorFormat::Sl,
            Color::Sv(_) => ColorFormat::Sv,
            Color::Xyz(_) => ColorFormat::Xyz,
        }
    }

    #[inline]
    pub fn alpha(&self) -> Alpha {
        match self {
            Color::Cmyk(v) => v.alpha,
            Color::Hex(v) => v.alpha_value(),
            Color::Hsl(v) => v.alpha,
            Color::Hsv(v) => v.alpha,
            Color::Lab(v) => v.alpha,
            Color::Rgb(v) => v.alpha,
            Color::Sl(v) => v.alpha,
            Color::Sv(v) => v.alpha,
            Color::Xyz(v) => v.alpha,
        }
    }

    /// The documented neutral default for a format: every component at its
    /// zero value, alpha fully opaque. An immutable constant table.
    pub const fn default_for(format: ColorFormat) -> Color {
        match format {
            ColorFormat::Cmyk => Color::Cmyk(DEFAULT_CMYK),
            ColorFormat::Hex => Color::Hex(DEFAULT_HEX),
            ColorFormat::Hsl => Color::Hsl(DEFAULT_HSL),
            ColorFormat::Hsv => Color::Hsv(DEFAULT_HSV),
            ColorFormat::Lab => Color::Lab(DEFAULT_LAB),
            ColorFormat::Rgb => Color::Rgb(Rgb::black()),
            ColorFormat::Sl => Color::Sl(DEFAULT_SL),
            ColorFormat::Sv => Color::Sv(DEFAULT_SV),
            ColorFormat::Xyz => Color::Xyz(DEFAULT_XYZ),
        }
    }

    /// Converts into RGB, the pivot of the conversion graph. SL/SV sources
    /// widen with hue 0°; use [`Sl::with_hue`]/[`Sv::with_hue`] when the
    /// original hue is still at hand.
    pub fn to_rgb(&self) -> Rgb {
        match self {
            Color::Rgb(v) => *v,
            Color::Hex(v) => v.to_rgb(),
            Color::Cmyk(v) => v.to_rgb(),
            Color::Hsl(v) => v.to_rgb(),
            Color::Hsv(v) => v.to_hsl().to_rgb(),
            Color::Sl(v) => v.with_hue(Radial::trusted(0.0)).to_rgb(),
            Color::Sv(v) => v.with_hue(Radial::trusted(0.0)).to_hsl().to_rgb(),
            Color::Lab(v) => v.to_xyz().to_rgb(),
            Color::Xyz(v) => v.to_rgb(),
        }
    }

    /// Converts into HSL, the hub for HSV/SL/SV.
    pub fn to_hsl(&self) -> Hsl {
        match self {
            Color::Hsl(v) => *v,
            Color::Hsv(v) => v.to_hsl(),
            Color::Sl(v) => v.with_hue(Radial::trusted(0.0)),
            Color::Sv(v) => v.with_hue(Radial::trusted(0.0)).to_hsl(),
            other => Hsl::from_rgb(&other.to_rgb()),
        }
    }

    pub fn to_hsv(&self) -> Hsv {
        match self {
            Color::Hsv(v) => *v,
            Color::Sv(v) => v.with_hue(Radial::trusted(0.0)),
            other => Hsv::from_hsl(&other.to_hsl()),
        }
    }

    /// Converts into XYZ; non-colorimetric sources chain through RGB.
    pub fn to_xyz(&self) -> Xyz {
        match self {
            Color::Xyz(v) => *v,
            Color::Lab(v) => v.to_xyz(),
            other => Xyz::from_rgb(&other.to_rgb()),
        }
    }

    pub fn to_lab(&self) -> Lab {
        match self {
            Color::Lab(v) => *v,
            other => Lab::from_xyz(&other.to_xyz()),
        }
    }

    pub fn to_cmyk(&self) -> Cmyk {
        match self {
            Color::Cmyk(v) => *v,
            other => Cmyk::from_rgb(&other.to_rgb()),
        }
    }

    pub fn to_hex(&self) -> HexColor {
        match self {
            Color::Hex(v) => *v,
            other => HexColor::from_rgb(&other.to_rgb()),
        }
    }

    pub fn to_sl(&self) -> Sl {
        match self {
            Color::Sl(v) => *v,
            other => Sl::from_hsl(&other.to_hsl()),
        }
    }

    pub fn to_sv(&self) -> Sv {
        match self {
            Color::Sv(v) => *v,
            other => Sv::from_hsv(&other.to_hsv()),
        }
    }

    /// Total dispatch covering every ordered pair of the nine formats,
    /// generated from the hub graph.
    pub fn to_format(&self, target: ColorFormat) -> Color {
        match target {
            ColorFormat::Cmyk => Color::Cmyk(self.to_cmyk()),
            ColorFormat::Hex => Color::Hex(self.to_hex()),
            ColorFormat::Hsl => Color::Hsl(self.to_hsl()),
            ColorFormat::Hsv => Color::Hsv(self.to_hsv()),
            ColorFormat::Lab => Color::Lab(self.to_lab()),
            ColorFormat::Rgb => Color::Rgb(self.to_rgb()),
            ColorFormat::Sl => Color::Sl(self.to_sl()),
            ColorFormat::Sv => Color::Sv(self.to_sv()),
            ColorFormat::Xyz => Color::Xyz(self.to_xyz()),
        }
    }
}

/// Dispatch entry point: any color into HSL.
#[inline]
pub fn to_hsl(color: &Color) -> Hsl {
    color.to_hsl()
}

/// Dispatch entry point: an HSL value into any target format.
#[inline]
pub fn hsl_to(hsl: Hsl, target: ColorFormat) -> Color {
    Color::Hsl(hsl).to_format(target)
}
