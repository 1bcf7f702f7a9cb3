//! Numeric entry fields of the picker's text-input row.

use crate::error::PickerError;
use std::str::FromStr;

/// One numeric input. Ranges are in the units the user types: degrees for
/// hue, percent for saturation/value/lightness/alpha, 0–255 for channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Hue,
    Saturation,
    Value,
    Lightness,
    Red,
    Green,
    Blue,
    Alpha,
}

impl Field {
    pub const ALL: [Field; 8] = [
        Field::Hue,
        Field::Saturation,
        Field::Value,
        Field::Lightness,
        Field::Red,
        Field::Green,
        Field::Blue,
        Field::Alpha,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Field::Hue => "hue",
            Field::Saturation => "saturation",
            Field::Value => "value",
            Field::Lightness => "lightness",
            Field::Red => "red",
            Field::Green => "green",
            Field::Blue => "blue",
            Field::Alpha => "alpha",
        }
    }

    /// Single-letter label shown under the input.
    pub fn short_name(self) -> &'static str {
        match self {
            Field::Hue => "h",
            Field::Saturation => "s",
            Field::Value => "v",
            Field::Lightness => "l",
            Field::Red => "r",
            Field::Green => "g",
            Field::Blue => "b",
            Field::Alpha => "a",
        }
    }

    /// Inclusive (min, max) accepted by the field.
    pub fn range(self) -> (f64, f64) {
        match self {
            Field::Hue => (0.0, 359.0),
            Field::Saturation | Field::Value | Field::Lightness | Field::Alpha => (0.0, 100.0),
            Field::Red | Field::Green | Field::Blue => (0.0, 255.0),
        }
    }

    /// Checks `value` against the field range.
    pub fn check(self, value: f64) -> Result<f64, PickerError> {
        let (min, max) = self.range();
        if value.is_finite() && (min..=max).contains(&value) {
            Ok(value)
        } else {
            Err(PickerError::OutOfRangeValue {
                field: self.name().to_string(),
                value,
                min,
                max,
            })
        }
    }
}

impl FromStr for Field {
    type Err = PickerError;

    /// Accepts the full name or the single-letter label, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Field::ALL
            .into_iter()
            .find(|f| {
                f.name().eq_ignore_ascii_case(wanted) || f.short_name().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| PickerError::UnknownField(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_and_short_names() {
        assert_eq!("hue".parse::<Field>().unwrap(), Field::Hue);
        assert_eq!("L".parse::<Field>().unwrap(), Field::Lightness);
        assert_eq!("Alpha".parse::<Field>().unwrap(), Field::Alpha);
        assert_eq!(
            "q".parse::<Field>().unwrap_err(),
            PickerError::UnknownField("q".into())
        );
    }

    #[test]
    fn check_accepts_bounds_inclusive() {
        assert_eq!(Field::Hue.check(0.0), Ok(0.0));
        assert_eq!(Field::Hue.check(359.0), Ok(359.0));
        assert_eq!(Field::Red.check(255.0), Ok(255.0));
    }

    #[test]
    fn check_rejects_outside_range() {
        let err = Field::Saturation.check(101.0).unwrap_err();
        assert_eq!(
            err,
            PickerError::OutOfRangeValue {
                field: "saturation".into(),
                value: 101.0,
                min: 0.0,
                max: 100.0,
            }
        );
        assert!(Field::Hue.check(360.0).is_err());
        assert!(Field::Blue.check(-1.0).is_err());
        assert!(Field::Alpha.check(f64::NAN).is_err());
        assert!(Field::Green.check(f64::INFINITY).is_err());
    }
}
