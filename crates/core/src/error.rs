//! Error types for the color picker core.

use thiserror::Error;

/// Errors produced by color state operations.
///
/// None of these are fatal: the state is left untouched and the caller may
/// retry with valid input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PickerError {
    /// A color string or object could not be parsed.
    #[error("invalid color format: {0}")]
    InvalidColorFormat(String),

    /// A display format name is unknown or not in the configured whitelist.
    #[error("unsupported display format: {0}")]
    UnsupportedDisplayFormat(String),

    /// A numeric field entry was outside its declared range.
    #[error("value {value} out of range for {field}: expected {min}..={max}")]
    OutOfRangeValue {
        field: String,
        value: f64,
        min: f64,
        max: f64,
    },

    /// A key name has no grid mapping.
    #[error("unknown key: {0}")]
    UnknownKey(String),

    /// A name matches none of the numeric entry fields.
    #[error("unknown field: {0}")]
    UnknownField(String),

    /// The picker configuration is unusable.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
