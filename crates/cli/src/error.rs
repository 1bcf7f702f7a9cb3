//! Structured CLI errors with meaningful exit codes.
//!
//! Exit code scheme:
//! - 0:  success
//! - 2:  clap arg parse error (automatic, before our code runs)
//! - 10: picker error (bad color, unsupported format, out-of-range field)
//! - 12: input error (bad --config, unknown key or field name)
//! - 13: serialization error

use color_picker_core::PickerError;
use std::fmt;

/// Errors produced by CLI operations, each mapped to a distinct exit code.
pub enum CliError {
    /// A color state operation failed.
    Picker(PickerError),
    /// The command line or config contents were unusable.
    Input(String),
    /// A serialization error (JSON output failure).
    Serialization(String),
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Picker(_) => 10,
            CliError::Input(_) => 12,
            CliError::Serialization(_) => 13,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Picker(e) => write!(f, "{e}"),
            CliError::Input(msg) => write!(f, "{msg}"),
            CliError::Serialization(msg) => write!(f, "{msg}"),
        }
    }
}

impl From<PickerError> for CliError {
    fn from(e: PickerError) -> Self {
        match e {
            PickerError::InvalidConfig(msg) => CliError::Input(msg),
            PickerError::UnknownKey(key) => CliError::Input(format!("unknown key: {key}")),
            PickerError::UnknownField(name) => CliError::Input(format!("unknown field: {name}")),
            other => CliError::Picker(other),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialization(e.to_string())
    }
}
