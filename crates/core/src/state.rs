//! `ColorState`: the single stateful component behind a picker widget.
//!
//! Owns one color, the selected display format, the transient pointer
//! gesture and the registered listeners. Every state-changing call emits
//! exactly one notification, gated by the gesture (see [`crate::notify`]);
//! no-op updates are not suppressed. Calls that fail leave the state alone
//! and emit nothing.

use crate::color::{Color, Hsl, Hsv, Rgb8};
use crate::config::PickerConfig;
use crate::error::PickerError;
use crate::field::Field;
use crate::format::{DisplayFormat, FormatWhitelist};
use crate::grid::{map_grid_coordinate, GridPoint, KeyCommand};
use crate::notify::{ColorEvent, ListenerId, Listeners, NotificationKind, PointerGesture};
use crate::parse::ColorInput;
use tracing::{debug, trace};

#[derive(Debug)]
pub struct ColorState {
    color: Color,
    format: DisplayFormat,
    formats: FormatWhitelist,
    gesture: PointerGesture,
    listeners: Listeners,
}

impl Default for ColorState {
    fn default() -> Self {
        Self {
            color: Color::default(),
            format: DisplayFormat::Rgb,
            formats: FormatWhitelist::all(),
            gesture: PointerGesture::default(),
            listeners: Listeners::default(),
        }
    }
}

impl ColorState {
    /// Opaque red, rgb format, every format whitelisted.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a state from a config.
    ///
    /// Fails if the whitelist is empty, the initial format is not
    /// whitelisted, or the initial value does not parse.
    pub fn with_config(config: &PickerConfig) -> Result<Self, PickerError> {
        let formats = FormatWhitelist::new(config.formats.iter().copied())?;
        if !formats.contains(config.format) {
            return Err(PickerError::UnsupportedDisplayFormat(
                config.format.to_string(),
            ));
        }
        let color = config.value.resolve()?;
        Ok(Self {
            color,
            format: config.format,
            formats,
            gesture: PointerGesture::default(),
            listeners: Listeners::default(),
        })
    }

    // -- queries --

    pub fn current(&self) -> Color {
        self.color
    }

    pub fn format(&self) -> DisplayFormat {
        self.format
    }

    pub fn formats(&self) -> &[DisplayFormat] {
        self.formats.as_slice()
    }

    pub fn gesture(&self) -> PointerGesture {
        self.gesture
    }

    /// The color rendered in `format`. Pure.
    pub fn color(&self, format: DisplayFormat) -> String {
        self.color.to_format_string(format)
    }

    /// The color rendered in the selected format.
    pub fn display_string(&self) -> String {
        self.color(self.format)
    }

    /// Saturation and value (or lightness, for hsl) of the current color,
    /// i.e. where the grid thumb sits.
    pub fn grid_thumb(&self) -> GridPoint {
        if self.format.is_hsl_family() {
            let hsl = self.color.hsl();
            GridPoint {
                saturation: hsl.s,
                value_or_lightness: hsl.l,
            }
        } else {
            let hsv = self.color.hsv();
            GridPoint {
                saturation: hsv.s,
                value_or_lightness: hsv.v,
            }
        }
    }

    /// The fully saturated, full-value color of the current hue, painted
    /// behind the grid gradients.
    pub fn hue_backdrop(&self) -> Color {
        Color::from_hsv(
            Hsv {
                h: self.color.hsv().h,
                s: 1.0,
                v: 1.0,
            },
            1.0,
        )
    }

    /// The number a numeric field shows, rounded the way the text inputs
    /// display it. Saturation follows the selected format family.
    pub fn field_value(&self, field: Field) -> f64 {
        let hsv = self.color.hsv();
        let hsl = self.color.hsl();
        let rgb = self.color.rgb8();
        match field {
            Field::Hue => hsv.h.round().rem_euclid(360.0),
            Field::Saturation if self.format.is_hsl_family() => (hsl.s * 100.0).round(),
            Field::Saturation => (hsv.s * 100.0).round(),
            Field::Value => (hsv.v * 100.0).round(),
            Field::Lightness => (hsl.l * 100.0).round(),
            Field::Red => rgb.r as f64,
            Field::Green => rgb.g as f64,
            Field::Blue => rgb.b as f64,
            Field::Alpha => (self.color.alpha() * 100.0).round(),
        }
    }

    // -- mutations --

    /// Replaces the color. On a parse error the previous color is kept and
    /// no notification is emitted.
    pub fn set_color(&mut self, input: impl Into<ColorInput>) -> Result<(), PickerError> {
        let input = input.into();
        match input.resolve() {
            Ok(color) => {
                self.color = color;
                self.notify();
                Ok(())
            }
            Err(e) => {
                debug!(error = %e, "keeping previous color");
                Err(e)
            }
        }
    }

    /// Selects a display format. Returns false, changing nothing, when the
    /// format is not whitelisted.
    pub fn set_format(&mut self, format: DisplayFormat) -> bool {
        if !self.formats.contains(format) {
            debug!(format = %format, "display format not in whitelist");
            return false;
        }
        self.format = format;
        self.notify();
        true
    }

    /// Selects a display format by name.
    pub fn set_format_str(&mut self, name: &str) -> Result<(), PickerError> {
        let format: DisplayFormat = name.parse()?;
        if self.set_format(format) {
            Ok(())
        } else {
            Err(PickerError::UnsupportedDisplayFormat(name.to_string()))
        }
    }

    /// Replaces alpha only.
    pub fn set_alpha(&mut self, alpha: f64) {
        self.color = self.color.with_alpha(alpha);
        self.notify();
    }

    /// Replaces hue only, as the hue slider does.
    pub fn set_hue(&mut self, hue: f64) {
        self.color = self.color.with_hue(hue);
        self.notify();
    }

    /// Moves the grid thumb by one keyboard step.
    pub fn adjust_axis(&mut self, key: KeyCommand) {
        let next = key.apply(self.grid_thumb());
        self.apply_grid_point(next);
    }

    /// Applies a numeric field entry.
    ///
    /// Values outside the field range are rejected with
    /// `PickerError::OutOfRangeValue`. Entries other than alpha are rounded
    /// to whole units.
    pub fn set_field(&mut self, field: Field, value: f64) -> Result<(), PickerError> {
        let value = field.check(value).inspect_err(|e| {
            debug!(error = %e, "rejecting field entry");
        })?;
        let entered = value.round();
        let c = self.color;
        let alpha = c.alpha();
        let with_channel = |update: fn(&mut Rgb8, u8)| {
            let mut rgb = c.rgb8();
            update(&mut rgb, entered as u8);
            Color::from_rgb8(rgb, alpha)
        };

        self.color = match field {
            Field::Hue => c.with_hue(entered),
            Field::Saturation if self.format.is_hsl_family() => Color::from_hsl(
                Hsl {
                    s: entered / 100.0,
                    ..c.hsl()
                },
                alpha,
            ),
            Field::Saturation => Color::from_hsv(
                Hsv {
                    s: entered / 100.0,
                    ..c.hsv()
                },
                alpha,
            ),
            Field::Value => Color::from_hsv(
                Hsv {
                    v: entered / 100.0,
                    ..c.hsv()
                },
                alpha,
            ),
            Field::Lightness => Color::from_hsl(
                Hsl {
                    l: entered / 100.0,
                    ..c.hsl()
                },
                alpha,
            ),
            Field::Red => with_channel(|rgb, n| rgb.r = n),
            Field::Green => with_channel(|rgb, n| rgb.g = n),
            Field::Blue => with_channel(|rgb, n| rgb.b = n),
            Field::Alpha => c.with_alpha(value / 100.0),
        };
        self.notify();
        Ok(())
    }

    // -- gestures --

    /// Pointer pressed on the grid surface.
    pub fn press_grid(&mut self) {
        if !self.gesture.active {
            self.gesture.active = true;
            self.notify();
        }
    }

    /// Pointer released anywhere. Ends a grid drag; releasing with no drag
    /// in progress does nothing.
    pub fn release_pointer(&mut self) {
        if self.gesture.active {
            self.gesture.active = false;
            self.notify();
        }
    }

    /// Pointer moved to normalized grid coordinates. Only applies while a
    /// grid drag is active; returns whether the color changed.
    pub fn move_pointer(&mut self, x: f64, y: f64) -> bool {
        if !self.gesture.active {
            return false;
        }
        self.apply_grid_point(map_grid_coordinate(x, y));
        true
    }

    /// A click on the grid: press, move to (x, y), release.
    pub fn click_grid(&mut self, x: f64, y: f64) {
        self.press_grid();
        self.move_pointer(x, y);
        self.release_pointer();
    }

    /// Pointer pressed on a child slider.
    pub fn press_slider(&mut self) {
        if !self.gesture.slider_active {
            self.gesture.slider_active = true;
            self.notify();
        }
    }

    /// Pointer released on a child slider.
    pub fn release_slider(&mut self) {
        if self.gesture.slider_active {
            self.gesture.slider_active = false;
            self.notify();
        }
    }

    // -- listeners --

    /// Registers a listener for live updates during a drag.
    pub fn on_input(&mut self, listener: impl FnMut(&ColorEvent) + 'static) -> ListenerId {
        self.listeners.add(NotificationKind::Input, listener)
    }

    /// Registers a listener for committed updates.
    pub fn on_change(&mut self, listener: impl FnMut(&ColorEvent) + 'static) -> ListenerId {
        self.listeners.add(NotificationKind::Change, listener)
    }

    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    fn apply_grid_point(&mut self, point: GridPoint) {
        let alpha = self.color.alpha();
        self.color = if self.format.is_hsl_family() {
            Color::from_hsl(
                Hsl {
                    s: point.saturation,
                    l: point.value_or_lightness,
                    ..self.color.hsl()
                },
                alpha,
            )
        } else {
            Color::from_hsv(
                Hsv {
                    s: point.saturation,
                    v: point.value_or_lightness,
                    ..self.color.hsv()
                },
                alpha,
            )
        };
        self.notify();
    }

    fn notify(&mut self) {
        let event = ColorEvent {
            kind: self.gesture.kind(),
            color: self.color,
            format: self.format,
        };
        trace!(
            kind = event.kind.name(),
            color = %self.color.to_hex8_string(),
            format = %self.format,
            "notify"
        );
        self.listeners.emit(&event);
    }
}
