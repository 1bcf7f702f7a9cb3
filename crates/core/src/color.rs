//! Color types and conversion functions for the picker core.
//!
//! `Color` keeps one canonical HSV value plus a separate alpha. Every other
//! representation (`Rgb`, `Rgb8`, `Hsl`, hex, hex8 and the CSS-like strings)
//! is derived on demand through the pure conversion functions in this module.
//! Uses `f64` throughout; only the 8-bit outputs quantize.

use crate::error::PickerError;
use crate::format::DisplayFormat;
use crate::parse::ColorInput;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// RGB with components in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// RGB quantized to 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Hue in degrees [0, 360), saturation and value in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

/// Hue in degrees [0, 360), saturation and lightness in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

/// Wraps a hue into [0, 360). Non-finite hues become 0.
pub fn normalize_hue(h: f64) -> f64 {
    if !h.is_finite() {
        return 0.0;
    }
    let wrapped = h.rem_euclid(360.0);
    // rem_euclid of a tiny negative number can round up to exactly 360.0
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Clamps to [0, 1], mapping NaN to 0.
pub fn clamp_unit(x: f64) -> f64 {
    if x.is_nan() {
        0.0
    } else {
        x.clamp(0.0, 1.0)
    }
}

/// Clamps an alpha to [0, 1], mapping NaN to fully opaque.
pub fn clamp_alpha(a: f64) -> f64 {
    if a.is_nan() {
        1.0
    } else {
        a.clamp(0.0, 1.0)
    }
}

/// Converts HSV to RGB with the sector algorithm (sector = floor(h / 60) mod 6).
pub fn hsv_to_rgb(c: Hsv) -> Rgb {
    let h = normalize_hue(c.h) / 60.0;
    let s = clamp_unit(c.s);
    let v = clamp_unit(c.v);

    let sector = h.floor();
    let f = h - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    let (r, g, b) = match (sector as usize) % 6 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };
    Rgb { r, g, b }
}

/// Converts RGB to HSV. Achromatic colors get hue 0.
pub fn rgb_to_hsv(c: Rgb) -> Hsv {
    let r = clamp_unit(c.r);
    let g = clamp_unit(c.g);
    let b = clamp_unit(c.b);

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let d = max - min;

    let s = if max == 0.0 { 0.0 } else { d / max };
    let h = if d == 0.0 {
        0.0
    } else if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    Hsv {
        h: normalize_hue(h * 60.0),
        s,
        v: max,
    }
}

/// Converts HSV to HSL. Hue is shared unchanged.
pub fn hsv_to_hsl(c: Hsv) -> Hsl {
    let s = clamp_unit(c.s);
    let v = clamp_unit(c.v);
    let l = v * (1.0 - s / 2.0);
    let sl = if l <= 0.0 || l >= 1.0 {
        0.0
    } else {
        (v - l) / l.min(1.0 - l)
    };
    Hsl {
        h: normalize_hue(c.h),
        s: clamp_unit(sl),
        l,
    }
}

/// Converts HSL to HSV. Hue is shared unchanged.
pub fn hsl_to_hsv(c: Hsl) -> Hsv {
    let s = clamp_unit(c.s);
    let l = clamp_unit(c.l);
    let v = l + s * l.min(1.0 - l);
    let sv = if v <= 0.0 { 0.0 } else { 2.0 * (1.0 - l / v) };
    Hsv {
        h: normalize_hue(c.h),
        s: clamp_unit(sv),
        v: clamp_unit(v),
    }
}

/// Convenience: RGB to HSL via HSV.
pub fn rgb_to_hsl(c: Rgb) -> Hsl {
    hsv_to_hsl(rgb_to_hsv(c))
}

/// Convenience: HSL to RGB via HSV.
pub fn hsl_to_rgb(c: Hsl) -> Rgb {
    hsv_to_rgb(hsl_to_hsv(c))
}

fn quantize(c: f64) -> u8 {
    (clamp_unit(c) * 255.0).round() as u8
}

impl Rgb {
    /// Quantizes each channel to 0–255 with rounding.
    pub fn to_rgb8(self) -> Rgb8 {
        Rgb8 {
            r: quantize(self.r),
            g: quantize(self.g),
            b: quantize(self.b),
        }
    }
}

impl From<Rgb8> for Rgb {
    fn from(c: Rgb8) -> Self {
        Rgb {
            r: c.r as f64 / 255.0,
            g: c.g as f64 / 255.0,
            b: c.b as f64 / 255.0,
        }
    }
}

/// Formats an alpha rounded to two decimals, without trailing zeros.
fn format_alpha(a: f64) -> String {
    let rounded = (clamp_alpha(a) * 100.0).round() / 100.0;
    format!("{rounded}")
}

fn percent(x: f64) -> i64 {
    (x * 100.0).round() as i64
}

fn degrees(h: f64) -> i64 {
    (h.round() as i64).rem_euclid(360)
}

/// A single color: canonical HSV plus alpha.
///
/// Constructors normalize their input (hue wraps, everything else clamps),
/// so a `Color` is always in range.
///
/// Serializes as a `"#rrggbbaa"` string. Deserializes from anything
/// [`ColorInput`] accepts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    hsv: Hsv,
    alpha: f64,
}

impl Default for Color {
    /// Fully saturated red, opaque.
    fn default() -> Self {
        Color::from_hsv(
            Hsv {
                h: 0.0,
                s: 1.0,
                v: 1.0,
            },
            1.0,
        )
    }
}

impl Color {
    pub fn from_hsv(hsv: Hsv, alpha: f64) -> Self {
        Color {
            hsv: Hsv {
                h: normalize_hue(hsv.h),
                s: clamp_unit(hsv.s),
                v: clamp_unit(hsv.v),
            },
            alpha: clamp_alpha(alpha),
        }
    }

    pub fn from_hsl(hsl: Hsl, alpha: f64) -> Self {
        Color::from_hsv(hsl_to_hsv(hsl), alpha)
    }

    pub fn from_rgb(rgb: Rgb, alpha: f64) -> Self {
        Color::from_hsv(rgb_to_hsv(rgb), alpha)
    }

    pub fn from_rgb8(rgb: Rgb8, alpha: f64) -> Self {
        Color::from_rgb(rgb.into(), alpha)
    }

    pub fn hsv(&self) -> Hsv {
        self.hsv
    }

    pub fn hsl(&self) -> Hsl {
        hsv_to_hsl(self.hsv)
    }

    pub fn rgb(&self) -> Rgb {
        hsv_to_rgb(self.hsv)
    }

    pub fn rgb8(&self) -> Rgb8 {
        self.rgb().to_rgb8()
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Returns a copy with only the alpha replaced.
    pub fn with_alpha(self, alpha: f64) -> Self {
        Color {
            alpha: clamp_alpha(alpha),
            ..self
        }
    }

    /// Returns a copy with only the hue replaced.
    pub fn with_hue(self, hue: f64) -> Self {
        Color {
            hsv: Hsv {
                h: normalize_hue(hue),
                ..self.hsv
            },
            ..self
        }
    }

    /// Six lowercase hex digits, no `#`.
    pub fn to_hex(&self) -> String {
        let Rgb8 { r, g, b } = self.rgb8();
        format!("{r:02x}{g:02x}{b:02x}")
    }

    /// Eight lowercase hex digits (alpha last), no `#`.
    pub fn to_hex8(&self) -> String {
        let a = (self.alpha * 255.0).round() as u8;
        format!("{}{a:02x}", self.to_hex())
    }

    pub fn to_hex_string(&self) -> String {
        format!("#{}", self.to_hex())
    }

    pub fn to_hex8_string(&self) -> String {
        format!("#{}", self.to_hex8())
    }

    /// `rgb(r, g, b)`, or `rgba(r, g, b, a)` when not fully opaque.
    pub fn to_rgb_string(&self) -> String {
        let Rgb8 { r, g, b } = self.rgb8();
        if self.alpha < 1.0 {
            format!("rgba({r}, {g}, {b}, {})", format_alpha(self.alpha))
        } else {
            format!("rgb({r}, {g}, {b})")
        }
    }

    /// `hsv(h, s%, v%)`, or `hsva(h, s%, v%, a)` when not fully opaque.
    pub fn to_hsv_string(&self) -> String {
        let (h, s, v) = (degrees(self.hsv.h), percent(self.hsv.s), percent(self.hsv.v));
        if self.alpha < 1.0 {
            format!("hsva({h}, {s}%, {v}%, {})", format_alpha(self.alpha))
        } else {
            format!("hsv({h}, {s}%, {v}%)")
        }
    }

    /// `hsl(h, s%, l%)`, or `hsla(h, s%, l%, a)` when not fully opaque.
    pub fn to_hsl_string(&self) -> String {
        let hsl = self.hsl();
        let (h, s, l) = (degrees(hsl.h), percent(hsl.s), percent(hsl.l));
        if self.alpha < 1.0 {
            format!("hsla({h}, {s}%, {l}%, {})", format_alpha(self.alpha))
        } else {
            format!("hsl({h}, {s}%, {l}%)")
        }
    }

    /// Renders the color in the given display format.
    pub fn to_format_string(&self, format: DisplayFormat) -> String {
        match format {
            DisplayFormat::Hex => self.to_hex_string(),
            DisplayFormat::Hex8 => self.to_hex8_string(),
            DisplayFormat::Rgb => self.to_rgb_string(),
            DisplayFormat::Hsv => self.to_hsv_string(),
            DisplayFormat::Hsl => self.to_hsl_string(),
        }
    }
}

impl std::str::FromStr for Color {
    type Err = PickerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse::parse_color_str(s)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex8_string())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let input = ColorInput::deserialize(deserializer)?;
        input.resolve().map_err(serde::de::Error::custom)
    }
}
