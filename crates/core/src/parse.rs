//! Parsing of color inputs: hex strings, CSS-like functional strings, and
//! channel objects.
//!
//! Saturation, value and lightness numbers up to 1 are fractions; anything
//! above 1 is read as a percentage, so `{h: 0, s: 57, v: 100}` and
//! `{h: 0, s: 0.57, v: 1}` describe the same color. A `%` suffix in a string
//! always means percentage. Out-of-range values clamp, hue wraps.

use crate::color::{clamp_alpha, clamp_unit, Color, Hsl, Hsv, Rgb, Rgb8};
use crate::error::PickerError;
use serde::{Deserialize, Serialize};

/// Anything a color can be set from.
///
/// Deserializes untagged: a string first, then an `{r, g, b}` object, then
/// `{h, s, v}`, then `{h, s, l}`. Each object accepts an optional `a`.
///
/// Typed values (`Hsv`, `Hsl`, `Rgb8`, `Color`) convert into `Resolved`,
/// which only clamps: their components are already fractions, so the
/// percentage reading of the object forms does not apply to them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorInput {
    Text(String),
    Rgb {
        r: f64,
        g: f64,
        b: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        a: Option<f64>,
    },
    Hsv {
        h: f64,
        s: f64,
        v: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        a: Option<f64>,
    },
    Hsl {
        h: f64,
        s: f64,
        l: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        a: Option<f64>,
    },
    #[serde(skip_deserializing)]
    Resolved(Color),
}

impl ColorInput {
    /// Resolves the input to a normalized color.
    pub fn resolve(&self) -> Result<Color, PickerError> {
        match *self {
            ColorInput::Text(ref s) => parse_color_str(s),
            ColorInput::Rgb { r, g, b, a } => Ok(Color::from_rgb(
                Rgb {
                    r: channel(r),
                    g: channel(g),
                    b: channel(b),
                },
                object_alpha(a),
            )),
            ColorInput::Hsv { h, s, v, a } => Ok(Color::from_hsv(
                Hsv {
                    h,
                    s: fraction_or_percent(s),
                    v: fraction_or_percent(v),
                },
                object_alpha(a),
            )),
            ColorInput::Hsl { h, s, l, a } => Ok(Color::from_hsl(
                Hsl {
                    h,
                    s: fraction_or_percent(s),
                    l: fraction_or_percent(l),
                },
                object_alpha(a),
            )),
            ColorInput::Resolved(color) => Ok(color),
        }
    }
}

impl From<&str> for ColorInput {
    fn from(s: &str) -> Self {
        ColorInput::Text(s.to_string())
    }
}

impl From<String> for ColorInput {
    fn from(s: String) -> Self {
        ColorInput::Text(s)
    }
}

impl From<Hsv> for ColorInput {
    fn from(c: Hsv) -> Self {
        ColorInput::Resolved(Color::from_hsv(c, 1.0))
    }
}

impl From<Hsl> for ColorInput {
    fn from(c: Hsl) -> Self {
        ColorInput::Resolved(Color::from_hsl(c, 1.0))
    }
}

impl From<Rgb8> for ColorInput {
    fn from(c: Rgb8) -> Self {
        ColorInput::Resolved(Color::from_rgb8(c, 1.0))
    }
}

impl From<Color> for ColorInput {
    fn from(c: Color) -> Self {
        ColorInput::Resolved(c)
    }
}

/// Reads `n` as a fraction when `n <= 1`, as a percentage otherwise.
pub fn fraction_or_percent(n: f64) -> f64 {
    if n > 1.0 {
        clamp_unit(n / 100.0)
    } else {
        clamp_unit(n)
    }
}

fn channel(n: f64) -> f64 {
    clamp_unit(n / 255.0)
}

fn object_alpha(a: Option<f64>) -> f64 {
    a.map(clamp_alpha).unwrap_or(1.0)
}

fn invalid(input: &str, reason: impl std::fmt::Display) -> PickerError {
    PickerError::InvalidColorFormat(format!("{input:?}: {reason}"))
}

/// Parses a color string.
///
/// Accepts hex (`#`-prefixed or bare, 3, 6 or 8 digits) and the functional
/// forms `rgb()`, `rgba()`, `hsl()`, `hsla()`, `hsv()`, `hsva()` with comma or
/// whitespace separators.
pub fn parse_color_str(input: &str) -> Result<Color, PickerError> {
    let text = input.trim().to_ascii_lowercase();
    if text.is_empty() {
        return Err(invalid(input, "empty color"));
    }
    match text.find('(') {
        Some(open) => parse_functional(input, &text[..open], &text[open + 1..]),
        None => parse_hex(input, &text),
    }
}

fn parse_hex(input: &str, text: &str) -> Result<Color, PickerError> {
    let digits = text.strip_prefix('#').unwrap_or(text);
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid(input, "non-hex character"));
    }
    let expanded: String = match digits.len() {
        3 => digits.chars().flat_map(|c| [c, c]).collect(),
        6 | 8 => digits.to_string(),
        n => return Err(invalid(input, format!("expected 3, 6 or 8 hex digits, got {n}"))),
    };
    let byte = |i: usize| {
        u8::from_str_radix(&expanded[i..i + 2], 16).map_err(|e| invalid(input, e))
    };
    let rgb = Rgb8 {
        r: byte(0)?,
        g: byte(2)?,
        b: byte(4)?,
    };
    let alpha = if expanded.len() == 8 {
        byte(6)? as f64 / 255.0
    } else {
        1.0
    };
    Ok(Color::from_rgb8(rgb, alpha))
}

fn parse_functional(input: &str, name: &str, rest: &str) -> Result<Color, PickerError> {
    let body = rest
        .trim_end()
        .strip_suffix(')')
        .ok_or_else(|| invalid(input, "missing closing parenthesis"))?;
    let parts: Vec<&str> = body
        .split(|c: char| c == ',' || c == '/' || c.is_whitespace())
        .filter(|p| !p.is_empty())
        .collect();
    if parts.len() != 3 && parts.len() != 4 {
        return Err(invalid(
            input,
            format!("expected 3 or 4 components, got {}", parts.len()),
        ));
    }
    let alpha = match parts.get(3) {
        Some(part) => parse_alpha(input, part)?,
        None => 1.0,
    };

    match name.trim() {
        "rgb" | "rgba" => {
            let rgb = Rgb {
                r: parse_channel(input, parts[0])?,
                g: parse_channel(input, parts[1])?,
                b: parse_channel(input, parts[2])?,
            };
            Ok(Color::from_rgb(rgb, alpha))
        }
        "hsv" | "hsva" => {
            let hsv = Hsv {
                h: parse_hue(input, parts[0])?,
                s: parse_fraction(input, parts[1])?,
                v: parse_fraction(input, parts[2])?,
            };
            Ok(Color::from_hsv(hsv, alpha))
        }
        "hsl" | "hsla" => {
            let hsl = Hsl {
                h: parse_hue(input, parts[0])?,
                s: parse_fraction(input, parts[1])?,
                l: parse_fraction(input, parts[2])?,
            };
            Ok(Color::from_hsl(hsl, alpha))
        }
        other => Err(invalid(input, format!("unknown color function '{other}'"))),
    }
}

/// Parses a finite number, reporting whether it carried a `%` suffix.
fn parse_number(input: &str, part: &str) -> Result<(f64, bool), PickerError> {
    let (digits, is_percent) = match part.strip_suffix('%') {
        Some(d) => (d, true),
        None => (part, false),
    };
    let n: f64 = digits
        .parse()
        .map_err(|_| invalid(input, format!("'{part}' is not a number")))?;
    if !n.is_finite() {
        return Err(invalid(input, format!("'{part}' is not finite")));
    }
    Ok((n, is_percent))
}

fn parse_channel(input: &str, part: &str) -> Result<f64, PickerError> {
    let (n, is_percent) = parse_number(input, part)?;
    Ok(if is_percent {
        clamp_unit(n / 100.0)
    } else {
        channel(n)
    })
}

fn parse_fraction(input: &str, part: &str) -> Result<f64, PickerError> {
    let (n, is_percent) = parse_number(input, part)?;
    Ok(if is_percent {
        clamp_unit(n / 100.0)
    } else {
        fraction_or_percent(n)
    })
}

fn parse_hue(input: &str, part: &str) -> Result<f64, PickerError> {
    let part = part.strip_suffix("deg").unwrap_or(part);
    let (n, is_percent) = parse_number(input, part)?;
    if is_percent {
        return Err(invalid(input, "hue cannot be a percentage"));
    }
    Ok(n)
}

fn parse_alpha(input: &str, part: &str) -> Result<f64, PickerError> {
    let (n, is_percent) = parse_number(input, part)?;
    Ok(clamp_alpha(if is_percent { n / 100.0 } else { n }))
}
