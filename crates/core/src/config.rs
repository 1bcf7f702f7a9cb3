//! Picker configuration, loadable from JSON.
//!
//! Every field has a default, so `{}` is a valid config: all five formats
//! whitelisted, rgb selected, starting at opaque red.

use crate::error::PickerError;
use crate::format::DisplayFormat;
use crate::parse::ColorInput;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    /// Formats the user may switch between, in selector order.
    pub formats: Vec<DisplayFormat>,
    /// Format selected at start. Must be in `formats`.
    pub format: DisplayFormat,
    /// Initial color.
    pub value: ColorInput,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            formats: DisplayFormat::ALL.to_vec(),
            format: DisplayFormat::Rgb,
            value: ColorInput::Hsv {
                h: 0.0,
                s: 1.0,
                v: 1.0,
                a: None,
            },
        }
    }
}

impl PickerConfig {
    /// Parses a config from a JSON object. Missing keys take their defaults.
    pub fn from_json(json: &str) -> Result<Self, PickerError> {
        serde_json::from_str(json).map_err(|e| PickerError::InvalidConfig(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        let config = PickerConfig::from_json("{}").unwrap();
        assert_eq!(config, PickerConfig::default());
    }

    #[test]
    fn partial_config_overrides_only_given_keys() {
        let config = PickerConfig::from_json(r##"{"formats": ["hex", "rgb"], "value": "#00ff00"}"##)
            .unwrap();
        assert_eq!(config.formats, vec![DisplayFormat::Hex, DisplayFormat::Rgb]);
        assert_eq!(config.format, DisplayFormat::Rgb);
        assert_eq!(config.value, ColorInput::Text("#00ff00".into()));
    }

    #[test]
    fn value_accepts_objects() {
        let config = PickerConfig::from_json(r#"{"value": {"h": 120, "s": 50, "l": 50}}"#).unwrap();
        assert!(matches!(config.value, ColorInput::Hsl { .. }));
    }

    #[test]
    fn unknown_format_name_is_invalid_config() {
        let err = PickerConfig::from_json(r#"{"formats": ["cmyk"]}"#).unwrap_err();
        assert!(matches!(err, PickerError::InvalidConfig(_)), "{err:?}");
    }

    #[test]
    fn malformed_json_is_invalid_config() {
        let err = PickerConfig::from_json("{formats").unwrap_err();
        assert!(matches!(err, PickerError::InvalidConfig(_)), "{err:?}");
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = PickerConfig {
            formats: vec![DisplayFormat::Hsl],
            format: DisplayFormat::Hsl,
            value: ColorInput::Text("#123456".into()),
        };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(PickerConfig::from_json(&json).unwrap(), config);
    }
}
