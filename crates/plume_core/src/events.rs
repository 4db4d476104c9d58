//! Event dispatch primitives
//!
//! Events are delivered to handlers stored in an element's [`Props`](crate::Props)
//! under the handler's prop name (`on_click`, `on_key_down`, ...).

use std::fmt;
use std::rc::Rc;

use crate::dom::NodeId;

/// Kinds of UI events an element can handle
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    Focus,
    Blur,
    KeyDown,
    /// Text content of an input changed
    Change,
    PointerEnter,
    PointerLeave,
}

impl EventKind {
    /// Prop name under which a handler for this kind is stored
    pub fn prop_name(self) -> &'static str {
        match self {
            EventKind::Click => "on_click",
            EventKind::Focus => "on_focus",
            EventKind::Blur => "on_blur",
            EventKind::KeyDown => "on_key_down",
            EventKind::Change => "on_change",
            EventKind::PointerEnter => "on_pointer_enter",
            EventKind::PointerLeave => "on_pointer_leave",
        }
    }

    pub fn all() -> &'static [EventKind] {
        const KINDS: [EventKind; 7] = [
            EventKind::Click,
            EventKind::Focus,
            EventKind::Blur,
            EventKind::KeyDown,
            EventKind::Change,
            EventKind::PointerEnter,
            EventKind::PointerLeave,
        ];
        &KINDS
    }
}

/// Logical keys relevant to list navigation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    Home,
    End,
    Enter,
    Escape,
    Tab,
    Char(char),
}

/// Event-specific payload
#[derive(Clone, Debug, PartialEq)]
pub enum EventData {
    None,
    Key(Key),
    Text(String),
}

/// A UI event delivered to a mounted node
#[derive(Clone, Debug)]
pub struct Event {
    pub kind: EventKind,
    pub target: Option<NodeId>,
    pub data: EventData,
    pub default_prevented: bool,
}

impl Event {
    pub fn new(kind: EventKind) -> Self {
        Self {
            kind,
            target: None,
            data: EventData::None,
            default_prevented: false,
        }
    }

    pub fn key_down(key: Key) -> Self {
        Self {
            data: EventData::Key(key),
            ..Self::new(EventKind::KeyDown)
        }
    }

    pub fn change(text: impl Into<String>) -> Self {
        Self {
            data: EventData::Text(text.into()),
            ..Self::new(EventKind::Change)
        }
    }

    pub fn key(&self) -> Option<Key> {
        match self.data {
            EventData::Key(key) => Some(key),
            _ => None,
        }
    }

    pub fn text(&self) -> Option<&str> {
        match &self.data {
            EventData::Text(text) => Some(text),
            _ => None,
        }
    }
}

/// A shared, single-threaded event callback
#[derive(Clone)]
pub struct EventHandler(Rc<dyn Fn(&mut Event)>);

impl EventHandler {
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(&mut Event) + 'static,
    {
        Self(Rc::new(handler))
    }

    pub fn call(&self, event: &mut Event) {
        (self.0)(event)
    }

    /// Run `first`, then `second` unless `first` prevented the default
    pub fn chain(first: EventHandler, second: EventHandler) -> EventHandler {
        EventHandler::new(move |event| {
            first.call(event);
            if !event.default_prevented {
                second.call(event);
            }
        })
    }

    pub fn ptr_eq(&self, other: &EventHandler) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for EventHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("EventHandler(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_chain_runs_both_in_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let a = {
            let log = log.clone();
            EventHandler::new(move |_| log.borrow_mut().push("caller"))
        };
        let b = {
            let log = log.clone();
            EventHandler::new(move |_| log.borrow_mut().push("hook"))
        };

        EventHandler::chain(a, b).call(&mut Event::new(EventKind::Click));
        assert_eq!(*log.borrow(), vec!["caller", "hook"]);
    }

    #[test]
    fn test_chain_stops_on_prevent_default() {
        let hits = Rc::new(RefCell::new(0));
        let a = EventHandler::new(|e| e.default_prevented = true);
        let b = {
            let hits = hits.clone();
            EventHandler::new(move |_| *hits.borrow_mut() += 1)
        };

        EventHandler::chain(a, b).call(&mut Event::key_down(Key::Enter));
        assert_eq!(*hits.borrow(), 0);
    }

    #[test]
    fn test_event_payload_accessors() {
        assert_eq!(Event::key_down(Key::Escape).key(), Some(Key::Escape));
        assert_eq!(Event::change("ap").text(), Some("ap"));
        assert_eq!(Event::new(EventKind::Blur).key(), None);
    }
}
