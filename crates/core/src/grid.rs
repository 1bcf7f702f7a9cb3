//! Mapping of grid-surface pointer positions and keyboard commands onto
//! saturation and value (or lightness).
//!
//! Both axes are capped at [`GRID_MAX`] rather than 1.0, so a fully
//! saturated or full-value color is never reachable from the grid itself,
//! only from numeric entry.

use crate::error::PickerError;
use serde::Serialize;
use std::str::FromStr;

/// Upper bound of both grid axes.
pub const GRID_MAX: f64 = 0.99;

/// Step applied by the arrow keys.
pub const FINE_STEP: f64 = 0.01;

/// Step applied by Home/End and PageUp/PageDown.
pub const COARSE_STEP: f64 = 0.10;

/// A position on the grid in color terms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GridPoint {
    pub saturation: f64,
    pub value_or_lightness: f64,
}

/// Clamps to [0, GRID_MAX], mapping NaN to 0.
pub fn clamp_grid(x: f64) -> f64 {
    if x.is_nan() {
        0.0
    } else {
        x.clamp(0.0, GRID_MAX)
    }
}

/// Maps a normalized surface coordinate to saturation and value/lightness.
///
/// `x` is the horizontal fraction from the left edge, `y` the vertical
/// fraction from the top. Value grows upward, so `y` is inverted.
pub fn map_grid_coordinate(x: f64, y: f64) -> GridPoint {
    GridPoint {
        saturation: clamp_grid(x),
        value_or_lightness: GRID_MAX - clamp_grid(y),
    }
}

/// Which grid axis a key moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Saturation,
    ValueOrLightness,
}

/// Keyboard commands understood by the grid surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCommand {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Home,
    End,
    PageUp,
    PageDown,
}

impl KeyCommand {
    pub const ALL: [KeyCommand; 8] = [
        KeyCommand::ArrowLeft,
        KeyCommand::ArrowRight,
        KeyCommand::ArrowUp,
        KeyCommand::ArrowDown,
        KeyCommand::Home,
        KeyCommand::End,
        KeyCommand::PageUp,
        KeyCommand::PageDown,
    ];

    /// The DOM `KeyboardEvent.key` name.
    pub fn name(self) -> &'static str {
        match self {
            KeyCommand::ArrowLeft => "ArrowLeft",
            KeyCommand::ArrowRight => "ArrowRight",
            KeyCommand::ArrowUp => "ArrowUp",
            KeyCommand::ArrowDown => "ArrowDown",
            KeyCommand::Home => "Home",
            KeyCommand::End => "End",
            KeyCommand::PageUp => "PageUp",
            KeyCommand::PageDown => "PageDown",
        }
    }

    pub fn axis(self) -> Axis {
        match self {
            KeyCommand::ArrowLeft | KeyCommand::ArrowRight | KeyCommand::Home | KeyCommand::End => {
                Axis::Saturation
            }
            _ => Axis::ValueOrLightness,
        }
    }

    /// Signed change this key applies to its axis.
    pub fn delta(self) -> f64 {
        match self {
            KeyCommand::ArrowRight | KeyCommand::ArrowUp => FINE_STEP,
            KeyCommand::ArrowLeft | KeyCommand::ArrowDown => -FINE_STEP,
            KeyCommand::End | KeyCommand::PageUp => COARSE_STEP,
            KeyCommand::Home | KeyCommand::PageDown => -COARSE_STEP,
        }
    }

    /// Moves `point` along this key's axis, clamped like pointer input.
    pub fn apply(self, point: GridPoint) -> GridPoint {
        match self.axis() {
            Axis::Saturation => GridPoint {
                saturation: clamp_grid(point.saturation + self.delta()),
                ..point
            },
            Axis::ValueOrLightness => GridPoint {
                value_or_lightness: clamp_grid(point.value_or_lightness + self.delta()),
                ..point
            },
        }
    }
}

impl FromStr for KeyCommand {
    type Err = PickerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        KeyCommand::ALL
            .into_iter()
            .find(|k| k.name() == s)
            .ok_or_else(|| PickerError::UnknownKey(s.to_string()))
    }
}
