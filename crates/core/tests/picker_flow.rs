//! End-to-end flows through `ColorState`, the way a rendering layer drives it.

use color_picker_core::{
    ColorEvent, ColorState, DisplayFormat, Field, Hsl, Hsv, KeyCommand, NotificationKind,
    PickerConfig, Rgb8,
};
use std::cell::RefCell;
use std::rc::Rc;

fn record(state: &mut ColorState) -> Rc<RefCell<Vec<ColorEvent>>> {
    let log = Rc::new(RefCell::new(Vec::new()));
    let input = Rc::clone(&log);
    state.on_input(move |e: &ColorEvent| input.borrow_mut().push(*e));
    let change = Rc::clone(&log);
    state.on_change(move |e: &ColorEvent| change.borrow_mut().push(*e));
    log
}

#[test]
fn arrow_up_on_pure_red_clamps_value_to_grid_max() {
    let mut state = ColorState::new();
    state.set_color("#ff0000").unwrap();
    assert_eq!(state.format(), DisplayFormat::Rgb);

    state.adjust_axis(KeyCommand::ArrowUp);

    // v: 1.0 + 0.01 clamps to 0.99; red channel = round(0.99 * 255) = round(252.45)
    let hsv = state.current().hsv();
    assert!((hsv.v - 0.99).abs() < 1e-12, "v = {}", hsv.v);
    assert_eq!(hsv.s, 1.0);
    assert_eq!(state.current().rgb8(), Rgb8 { r: 252, g: 0, b: 0 });
    assert_eq!(state.display_string(), "rgb(252, 0, 0)");
}

#[test]
fn one_notification_per_input_in_order() {
    let mut state = ColorState::new();
    let log = record(&mut state);

    state.set_color("hsl(200, 50%, 50%)").unwrap();
    state.adjust_axis(KeyCommand::ArrowLeft);
    state.adjust_axis(KeyCommand::PageDown);
    state.set_alpha(0.5);
    assert!(state.set_format(DisplayFormat::Hex8));
    state.set_field(Field::Red, 10.0).unwrap();

    let kinds: Vec<_> = log.borrow().iter().map(|e| e.kind).collect();
    assert_eq!(kinds, vec![NotificationKind::Change; 6]);
    let last = log.borrow()[5];
    assert_eq!(last.format, DisplayFormat::Hex8);
    assert_eq!(last.color.rgb8().r, 10);
    assert_eq!(last.color.alpha(), 0.5);
}

#[test]
fn dragging_out_of_bounds_and_releasing_commits() {
    let mut state = ColorState::new();
    let log = record(&mut state);

    state.press_grid();
    state.move_pointer(0.4, 0.6);
    // pointer left the surface; release is still observed
    state.move_pointer(1.7, -0.3);
    state.release_pointer();

    let events = log.borrow();
    let kinds: Vec<_> = events.iter().map(|e| e.kind).collect();
    assert_eq!(
        kinds,
        vec![
            NotificationKind::Input,
            NotificationKind::Input,
            NotificationKind::Input,
            NotificationKind::Change,
        ]
    );
    let committed = events[3].color.hsv();
    assert!((committed.s - 0.99).abs() < 1e-12);
    assert!((committed.v - 0.99).abs() < 1e-12);
}

#[test]
fn hsl_config_drives_lightness_axis() {
    let config = PickerConfig::from_json(
        r#"{"formats": ["hsl", "hex"], "format": "hsl", "value": {"h": 30, "s": 100, "l": 50}}"#,
    )
    .unwrap();
    let mut state = ColorState::with_config(&config).unwrap();
    assert_eq!(state.display_string(), "hsl(30, 100%, 50%)");

    for _ in 0..3 {
        state.adjust_axis(KeyCommand::PageUp);
    }
    assert_eq!(state.field_value(Field::Lightness), 80.0);
    assert_eq!(state.field_value(Field::Hue), 30.0);

    assert!(!state.set_format(DisplayFormat::Rgb));
    assert_eq!(state.color(DisplayFormat::Rgb), state.current().to_rgb_string());
}

#[test]
fn bad_input_is_reported_and_ignored() {
    let mut state = ColorState::new();
    let log = record(&mut state);

    assert!(state.set_color("rgb(1, 2)").is_err());
    assert!(state.set_format_str("cmyk").is_err());
    assert!(state.set_field(Field::Alpha, 150.0).is_err());
    assert!("Tab".parse::<KeyCommand>().is_err());

    assert!(log.borrow().is_empty());
    assert_eq!(state.color(DisplayFormat::Hex8), "#ff0000ff");
}

#[test]
fn typed_inputs_just_past_full_scale_stay_at_full_scale() {
    let mut state = ColorState::new();
    let log = record(&mut state);

    // Float noise from a host computing s = 1.0 must not read as 1%.
    state.set_color(Hsv { h: 0.0, s: 1.0 + 1e-12, v: 1.0 }).unwrap();
    assert_eq!(state.display_string(), "rgb(255, 0, 0)");
    assert_eq!(state.grid_thumb().saturation, 1.0);

    assert!(state.set_format(DisplayFormat::Hsl));
    state.set_color(Hsl { h: 0.0, s: 1.0, l: 1.0000001 }).unwrap();
    assert_eq!(state.display_string(), "hsl(0, 0%, 100%)");
    assert_eq!(state.color(DisplayFormat::Hex), "#ffffff");

    assert_eq!(log.borrow().len(), 3);
}
