//! Display formats and the whitelist a picker is allowed to switch between.

use crate::error::PickerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the current color is shown and edited.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayFormat {
    Hex,
    Hex8,
    #[default]
    Rgb,
    Hsv,
    Hsl,
}

impl DisplayFormat {
    /// Every supported format, in selector order.
    pub const ALL: [DisplayFormat; 5] = [
        DisplayFormat::Hex,
        DisplayFormat::Hex8,
        DisplayFormat::Rgb,
        DisplayFormat::Hsv,
        DisplayFormat::Hsl,
    ];

    pub fn name(self) -> &'static str {
        match self {
            DisplayFormat::Hex => "hex",
            DisplayFormat::Hex8 => "hex8",
            DisplayFormat::Rgb => "rgb",
            DisplayFormat::Hsv => "hsv",
            DisplayFormat::Hsl => "hsl",
        }
    }

    /// True when the grid edits saturation/lightness instead of saturation/value.
    pub fn is_hsl_family(self) -> bool {
        self == DisplayFormat::Hsl
    }
}

impl fmt::Display for DisplayFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DisplayFormat {
    type Err = PickerError;

    /// Parses a format name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        DisplayFormat::ALL
            .into_iter()
            .find(|f| f.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| PickerError::UnsupportedDisplayFormat(s.to_string()))
    }
}

/// A non-empty, duplicate-free set of formats, kept in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatWhitelist {
    formats: Vec<DisplayFormat>,
}

impl FormatWhitelist {
    /// Builds a whitelist, dropping repeated entries.
    ///
    /// Returns `PickerError::InvalidConfig` if no format is given.
    pub fn new(formats: impl IntoIterator<Item = DisplayFormat>) -> Result<Self, PickerError> {
        let mut unique = Vec::new();
        for format in formats {
            if !unique.contains(&format) {
                unique.push(format);
            }
        }
        if unique.is_empty() {
            return Err(PickerError::InvalidConfig(
                "format whitelist requires at least 1 format".to_string(),
            ));
        }
        Ok(Self { formats: unique })
    }

    pub fn all() -> Self {
        Self {
            formats: DisplayFormat::ALL.to_vec(),
        }
    }

    pub fn contains(&self, format: DisplayFormat) -> bool {
        self.formats.contains(&format)
    }

    pub fn as_slice(&self) -> &[DisplayFormat] {
        &self.formats
    }
}

impl Default for FormatWhitelist {
    fn default() -> Self {
        Self::all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("hex8".parse::<DisplayFormat>().unwrap(), DisplayFormat::Hex8);
        assert_eq!("HSL".parse::<DisplayFormat>().unwrap(), DisplayFormat::Hsl);
        assert_eq!(" rgb ".parse::<DisplayFormat>().unwrap(), DisplayFormat::Rgb);
    }

    #[test]
    fn unknown_name_is_unsupported() {
        let err = "xyz".parse::<DisplayFormat>().unwrap_err();
        assert_eq!(err, PickerError::UnsupportedDisplayFormat("xyz".into()));
    }

    #[test]
    fn display_matches_name() {
        for format in DisplayFormat::ALL {
            assert_eq!(format.to_string(), format.name());
            assert_eq!(format.name().parse::<DisplayFormat>().unwrap(), format);
        }
    }

    #[test]
    fn only_hsl_uses_lightness_axis() {
        let hsl_family: Vec<_> = DisplayFormat::ALL
            .into_iter()
            .filter(|f| f.is_hsl_family())
            .collect();
        assert_eq!(hsl_family, vec![DisplayFormat::Hsl]);
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&DisplayFormat::Hex8).unwrap();
        assert_eq!(json, "\"hex8\"");
        let f: DisplayFormat = serde_json::from_str("\"hsv\"").unwrap();
        assert_eq!(f, DisplayFormat::Hsv);
    }

    #[test]
    fn whitelist_dedups_and_keeps_order() {
        let list = FormatWhitelist::new([
            DisplayFormat::Rgb,
            DisplayFormat::Hex,
            DisplayFormat::Rgb,
        ])
        .unwrap();
        assert_eq!(list.as_slice(), &[DisplayFormat::Rgb, DisplayFormat::Hex]);
        assert!(!list.contains(DisplayFormat::Hsl));
    }

    #[test]
    fn empty_whitelist_is_rejected() {
        let err = FormatWhitelist::new(Vec::new()).unwrap_err();
        assert!(matches!(err, PickerError::InvalidConfig(_)));
    }

    #[test]
    fn default_whitelist_has_every_format() {
        let list = FormatWhitelist::default();
        for format in DisplayFormat::ALL {
            assert!(list.contains(format));
        }
    }
}
