#![deny(unsafe_code)]
//! State core for a color picker widget.
//!
//! Provides `Color` (canonical HSV plus alpha) with conversions to RGB, HSL,
//! hex and hex8, parsing of `ColorInput` strings and objects, grid and
//! keyboard mapping onto saturation/value or saturation/lightness, and
//! `ColorState`, which owns the picker's color and display format and gates
//! live ("input") versus committed ("change") notifications.
//!
//! Rendering and raw DOM event handling live outside this crate: the host
//! translates pointer and key events into the normalized calls here and
//! re-renders from the emitted `ColorEvent`s.

pub mod color;
pub mod config;
pub mod error;
pub mod field;
pub mod format;
pub mod grid;
pub mod notify;
pub mod parse;
pub mod state;

pub use color::{Color, Hsl, Hsv, Rgb, Rgb8};
pub use config::PickerConfig;
pub use error::PickerError;
pub use field::Field;
pub use format::{DisplayFormat, FormatWhitelist};
pub use grid::{map_grid_coordinate, GridPoint, KeyCommand};
pub use notify::{ColorEvent, ListenerId, NotificationKind, PointerGesture};
pub use parse::ColorInput;
pub use state::ColorState;
