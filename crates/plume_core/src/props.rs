//! Prop bags
//!
//! `Props` is the ordered attribute/handler map components receive from
//! callers and hand to hooks. Merging follows object-spread semantics: keys
//! applied later win, insertion order of first appearance is kept.

use indexmap::IndexMap;

use crate::events::{EventHandler, EventKind};

/// A single prop value
#[derive(Clone, Debug)]
pub enum PropValue {
    Str(String),
    Bool(bool),
    Int(i64),
    Handler(EventHandler),
}

impl PropValue {
    /// Attribute text for this value
    ///
    /// `None` for handlers and for `Bool(false)`: a boolean attribute is
    /// either present or absent, so `"false"` must be passed as a string.
    pub fn as_attr(&self) -> Option<String> {
        match self {
            PropValue::Str(s) => Some(s.clone()),
            PropValue::Bool(true) => Some("true".to_string()),
            PropValue::Bool(false) => None,
            PropValue::Int(i) => Some(i.to_string()),
            PropValue::Handler(_) => None,
        }
    }
}

impl PartialEq for PropValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (PropValue::Str(a), PropValue::Str(b)) => a == b,
            (PropValue::Bool(a), PropValue::Bool(b)) => a == b,
            (PropValue::Int(a), PropValue::Int(b)) => a == b,
            (PropValue::Handler(a), PropValue::Handler(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        PropValue::Str(value.to_string())
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        PropValue::Str(value)
    }
}

impl From<bool> for PropValue {
    fn from(value: bool) -> Self {
        PropValue::Bool(value)
    }
}

impl From<i64> for PropValue {
    fn from(value: i64) -> Self {
        PropValue::Int(value)
    }
}

impl From<EventHandler> for PropValue {
    fn from(value: EventHandler) -> Self {
        PropValue::Handler(value)
    }
}

/// Ordered prop map
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Props {
    entries: IndexMap<String, PropValue>,
}

impl Props {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<PropValue>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&PropValue> {
        self.entries.get(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        match self.entries.get(key) {
            Some(PropValue::Str(s)) => Some(s),
            _ => None,
        }
    }

    /// Boolean prop; a present `Str("true")` also counts as set
    pub fn get_bool(&self, key: &str) -> bool {
        match self.entries.get(key) {
            Some(PropValue::Bool(b)) => *b,
            Some(PropValue::Str(s)) => s == "true",
            _ => false,
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<PropValue> {
        self.entries.shift_remove(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Spread `other` over `self`
    pub fn extend(&mut self, other: Props) {
        self.entries.extend(other.entries);
    }

    /// Retain only entries for which `keep` returns true
    pub fn retain(&mut self, mut keep: impl FnMut(&str, &PropValue) -> bool) {
        self.entries.retain(|k, v| keep(k, v));
    }

    pub fn handler(&self, kind: EventKind) -> Option<&EventHandler> {
        match self.entries.get(kind.prop_name()) {
            Some(PropValue::Handler(h)) => Some(h),
            _ => None,
        }
    }

    /// Install `handler` for `kind`, running any handler already present first
    pub fn compose_handler(&mut self, kind: EventKind, handler: EventHandler) {
        let combined = match self.handler(kind) {
            Some(existing) => EventHandler::chain(existing.clone(), handler),
            None => handler,
        };
        self.insert(kind.prop_name(), combined);
    }
}

impl<K: Into<String>, V: Into<PropValue>> FromIterator<(K, V)> for Props {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut props = Props::new();
        for (k, v) in iter {
            props.insert(k, v);
        }
        props
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::Event;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_extend_overrides_and_keeps_order() {
        let mut props = Props::new().with("id", "a").with("role", "option");
        props.extend(Props::new().with("id", "b").with("tabindex", -1i64));

        let keys: Vec<&str> = props.keys().collect();
        assert_eq!(keys, vec!["id", "role", "tabindex"]);
        assert_eq!(props.get_str("id"), Some("b"));
    }

    #[test]
    fn test_get_bool() {
        let props = Props::new()
            .with("disabled", true)
            .with("aria-expanded", "true")
            .with("hidden", false);
        assert!(props.get_bool("disabled"));
        assert!(props.get_bool("aria-expanded"));
        assert!(!props.get_bool("hidden"));
        assert!(!props.get_bool("missing"));
    }

    #[test]
    fn test_compose_handler_keeps_caller_handler() {
        let calls = Rc::new(Cell::new(0));
        let c1 = calls.clone();
        let c2 = calls.clone();
        let mut props =
            Props::new().with("on_click", EventHandler::new(move |_| c1.set(c1.get() + 1)));
        props.compose_handler(
            EventKind::Click,
            EventHandler::new(move |_| c2.set(c2.get() + 10)),
        );

        props
            .handler(EventKind::Click)
            .expect("handler installed")
            .call(&mut Event::new(EventKind::Click));
        assert_eq!(calls.get(), 11);
    }

    #[test]
    fn test_handlers_have_no_attr_text() {
        let value = PropValue::from(EventHandler::new(|_| {}));
        assert_eq!(value.as_attr(), None);
        assert_eq!(PropValue::from(3i64).as_attr().as_deref(), Some("3"));
    }

    #[test]
    fn test_false_booleans_are_absent_attributes() {
        assert_eq!(PropValue::from(true).as_attr().as_deref(), Some("true"));
        assert_eq!(PropValue::from(false).as_attr(), None);
        assert_eq!(PropValue::from("false").as_attr().as_deref(), Some("false"));
    }
}
