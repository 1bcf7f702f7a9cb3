//! Live-vs-committed notification gating and listener storage.
//!
//! Grid dragging and slider dragging are independent input sources, so the
//! gate keeps one flag per source. Any flag set means the user is mid-gesture
//! and mutations are reported as `Input`; with both clear they are `Change`.

use crate::color::Color;
use crate::format::DisplayFormat;
use std::fmt;

/// Which listeners a notification goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    /// Live update during an in-progress drag.
    Input,
    /// Committed update.
    Change,
}

impl NotificationKind {
    pub fn name(self) -> &'static str {
        match self {
            NotificationKind::Input => "input",
            NotificationKind::Change => "change",
        }
    }
}

/// Transient pointer state of one picker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointerGesture {
    /// Pointer is down on the grid surface.
    pub active: bool,
    /// A child slider is being dragged.
    pub slider_active: bool,
}

impl PointerGesture {
    /// Gates a mutation happening right now.
    pub fn kind(&self) -> NotificationKind {
        if self.active || self.slider_active {
            NotificationKind::Input
        } else {
            NotificationKind::Change
        }
    }
}

/// Payload handed to listeners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorEvent {
    pub kind: NotificationKind,
    pub color: Color,
    pub format: DisplayFormat,
}

/// Handle returned when registering a listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&ColorEvent)>;

/// Registered input and change listeners, called in registration order.
#[derive(Default)]
pub struct Listeners {
    next_id: u64,
    input: Vec<(ListenerId, Listener)>,
    change: Vec<(ListenerId, Listener)>,
}

impl Listeners {
    pub fn add(
        &mut self,
        kind: NotificationKind,
        listener: impl FnMut(&ColorEvent) + 'static,
    ) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        let entry: (ListenerId, Listener) = (id, Box::new(listener));
        match kind {
            NotificationKind::Input => self.input.push(entry),
            NotificationKind::Change => self.change.push(entry),
        }
        id
    }

    /// Unregisters a listener. Returns false if the id was not registered.
    pub fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.input.len() + self.change.len();
        self.input.retain(|(i, _)| *i != id);
        self.change.retain(|(i, _)| *i != id);
        self.input.len() + self.change.len() != before
    }

    pub fn emit(&mut self, event: &ColorEvent) {
        let targets = match event.kind {
            NotificationKind::Input => &mut self.input,
            NotificationKind::Change => &mut self.change,
        };
        for (_, listener) in targets.iter_mut() {
            listener(event);
        }
    }
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("input", &self.input.len())
            .field("change", &self.change.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn event(kind: NotificationKind) -> ColorEvent {
        ColorEvent {
            kind,
            color: Color::default(),
            format: DisplayFormat::Rgb,
        }
    }

    #[test]
    fn gate_is_change_only_when_both_flags_clear() {
        let cases = [
            (false, false, NotificationKind::Change),
            (true, false, NotificationKind::Input),
            (false, true, NotificationKind::Input),
            (true, true, NotificationKind::Input),
        ];
        for (active, slider_active, expected) in cases {
            let gesture = PointerGesture {
                active,
                slider_active,
            };
            assert_eq!(gesture.kind(), expected, "{gesture:?}");
        }
    }

    #[test]
    fn emit_reaches_only_matching_listeners_in_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut listeners = Listeners::default();
        for tag in ["input-a", "input-b"] {
            let log = Rc::clone(&log);
            listeners.add(NotificationKind::Input, move |_| log.borrow_mut().push(tag));
        }
        let change_log = Rc::clone(&log);
        listeners.add(NotificationKind::Change, move |_| change_log.borrow_mut().push("change"));

        listeners.emit(&event(NotificationKind::Input));
        assert_eq!(*log.borrow(), vec!["input-a", "input-b"]);

        listeners.emit(&event(NotificationKind::Change));
        assert_eq!(*log.borrow(), vec!["input-a", "input-b", "change"]);
    }

    #[test]
    fn removed_listener_is_not_called() {
        let count = Rc::new(RefCell::new(0));
        let mut listeners = Listeners::default();
        let c = Rc::clone(&count);
        let id = listeners.add(NotificationKind::Change, move |_| *c.borrow_mut() += 1);

        assert!(listeners.remove(id));
        assert!(!listeners.remove(id));
        listeners.emit(&event(NotificationKind::Change));
        assert_eq!(*count.borrow(), 0);
        assert_eq!(format!("{listeners:?}"), "Listeners { input: 0, change: 0 }");
    }

    #[test]
    fn listener_ids_are_unique_across_kinds() {
        let mut listeners = Listeners::default();
        let a = listeners.add(NotificationKind::Input, |_| {});
        let b = listeners.add(NotificationKind::Change, |_| {});
        assert_ne!(a, b);
    }

    #[test]
    fn debug_shows_listener_counts() {
        let mut listeners = Listeners::default();
        listeners.add(NotificationKind::Input, |_| {});
        assert_eq!(format!("{listeners:?}"), "Listeners { input: 1, change: 0 }");
    }
}
