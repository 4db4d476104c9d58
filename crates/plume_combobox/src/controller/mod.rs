//! Reference interaction controller
//!
//! [`ComboboxController`] is a ready-made [`ComboboxInteraction`]: a popover
//! state machine plus the text value, highlighted option and selection. State
//! lives behind `Rc<RefCell<_>>` so the event handlers it installs on rendered
//! nodes can drive it after the render returns.
//!
//! Options are registered by the list item hook in render order; keyboard
//! navigation walks them in that order, skipping disabled ones.

pub mod machine;

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use plume_core::{Event, EventHandler, EventKind, Key, NodeId, NodeRef, Props};
use thiserror::Error;

pub use machine::{ComboboxEvent, ComboboxMachine, PopoverState};

use crate::interaction::{ComboboxInteraction, HookProps};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ControllerError {
    #[error("combobox list item is missing a `value` prop")]
    MissingItemValue,

    #[error("duplicate combobox option value `{0}`")]
    DuplicateItemValue(String),
}

type SelectCallback = Rc<dyn Fn(&str)>;

/// Options accepted by [`ComboboxController::use_combobox`]
#[derive(Clone)]
pub struct ComboboxOptions {
    /// Prefix for the generated element ids
    pub id: String,
    /// Expand the list when the input gains focus
    pub open_on_focus: bool,
    pub disabled: bool,
    pub on_select: Option<SelectCallback>,
}

impl ComboboxOptions {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            open_on_focus: false,
            disabled: false,
            on_select: None,
        }
    }

    pub fn open_on_focus(mut self, open: bool) -> Self {
        self.open_on_focus = open;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn on_select<F>(mut self, callback: F) -> Self
    where
        F: Fn(&str) + 'static,
    {
        self.on_select = Some(Rc::new(callback));
        self
    }
}

impl Default for ComboboxOptions {
    fn default() -> Self {
        Self::new("combobox")
    }
}

impl fmt::Debug for ComboboxOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComboboxOptions")
            .field("id", &self.id)
            .field("open_on_focus", &self.open_on_focus)
            .field("disabled", &self.disabled)
            .field("on_select", &self.on_select.is_some())
            .finish()
    }
}

/// Context handed to the leaves for one render
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComboboxSnapshot {
    pub id: String,
    pub state: PopoverState,
    pub value: String,
    pub navigation: Option<String>,
    pub selected: Option<String>,
    pub disabled: bool,
}

impl ComboboxSnapshot {
    pub fn is_expanded(&self) -> bool {
        self.state.is_expanded()
    }

    pub fn input_id(&self) -> String {
        format!("{}-input", self.id)
    }

    pub fn list_id(&self) -> String {
        format!("{}-list", self.id)
    }

    /// Element id of the option for `value`
    ///
    /// ASCII letters, digits and `-` are kept; every other byte is written as
    /// `_xx` hex, so distinct values always get distinct ids.
    pub fn option_id(&self, value: &str) -> String {
        let mut id = format!("{}-option-", self.id);
        for byte in value.bytes() {
            if byte.is_ascii_alphanumeric() || byte == b'-' {
                id.push(char::from(byte));
            } else {
                id.push_str(&format!("_{byte:02x}"));
            }
        }
        id
    }
}

/// ARIA state attributes spell out `"false"` instead of being omitted
fn aria_bool(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

#[derive(Clone, Debug)]
struct OptionEntry {
    value: String,
    disabled: bool,
}

struct Inner {
    machine: ComboboxMachine,
    id: String,
    disabled: bool,
    value: String,
    navigation: Option<String>,
    selected: Option<String>,
    options: Vec<OptionEntry>,
    on_select: Option<SelectCallback>,
    input_ref: NodeRef,
    list_ref: NodeRef,
}

impl Inner {
    fn snapshot(&self) -> ComboboxSnapshot {
        ComboboxSnapshot {
            id: self.id.clone(),
            state: self.machine.state(),
            value: self.value.clone(),
            navigation: self.navigation.clone(),
            selected: self.selected.clone(),
            disabled: self.disabled,
        }
    }

    fn is_enabled_option(&self, value: &str) -> bool {
        self.options.iter().any(|o| o.value == value && !o.disabled)
    }

    fn enabled(&self) -> impl DoubleEndedIterator<Item = &str> {
        self.options
            .iter()
            .filter(|o| !o.disabled)
            .map(|o| o.value.as_str())
    }

    /// Enabled option `step` places away from the highlighted one, wrapping
    fn step(&self, forward: bool) -> Option<String> {
        let enabled: Vec<&str> = self.enabled().collect();
        if enabled.is_empty() {
            return None;
        }
        let current = self
            .navigation
            .as_deref()
            .and_then(|nav| enabled.iter().position(|v| *v == nav));
        let len = enabled.len();
        let index = match (current, forward) {
            (None, true) => 0,
            (None, false) => len - 1,
            (Some(i), true) => (i + 1) % len,
            (Some(i), false) => (i + len - 1) % len,
        };
        Some(enabled[index].to_string())
    }
}

/// Stateful [`ComboboxInteraction`] driven by DOM events
#[derive(Clone)]
pub struct ComboboxController {
    inner: Rc<RefCell<Inner>>,
}

impl ComboboxController {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                machine: ComboboxMachine::default(),
                id: String::from("combobox"),
                disabled: false,
                value: String::new(),
                navigation: None,
                selected: None,
                options: Vec::new(),
                on_select: None,
                input_ref: NodeRef::new(),
                list_ref: NodeRef::new(),
            })),
        }
    }

    pub fn snapshot(&self) -> ComboboxSnapshot {
        self.inner.borrow().snapshot()
    }

    pub fn state(&self) -> PopoverState {
        self.inner.borrow().machine.state()
    }

    pub fn is_expanded(&self) -> bool {
        self.state().is_expanded()
    }

    pub fn value(&self) -> String {
        self.inner.borrow().value.clone()
    }

    pub fn navigation(&self) -> Option<String> {
        self.inner.borrow().navigation.clone()
    }

    pub fn selected(&self) -> Option<String> {
        self.inner.borrow().selected.clone()
    }

    /// Option values registered by the last render, in order
    pub fn option_values(&self) -> Vec<String> {
        self.inner
            .borrow()
            .options
            .iter()
            .map(|o| o.value.clone())
            .collect()
    }

    /// Node the list mounted to, if it has been mounted
    pub fn list_node(&self) -> Option<NodeId> {
        self.inner.borrow().list_ref.get()
    }

    /// Node the input mounted to, if it has been mounted
    pub fn input_node(&self) -> Option<NodeId> {
        self.inner.borrow().input_ref.get()
    }

    /// Recorded `(from, event, to)` transitions
    pub fn history(&self) -> Vec<(PopoverState, &'static str, PopoverState)> {
        self.inner.borrow().machine.history().collect()
    }

    pub fn clear_history(&self) {
        self.inner.borrow_mut().machine.clear_history();
    }

    /// Feed an event to the machine and apply its effect on the data
    ///
    /// Ignored while disabled. Navigating to or selecting an option that is
    /// not a registered enabled option is ignored as well.
    pub fn send(&self, event: ComboboxEvent) {
        let mut inner = self.inner.borrow_mut();
        if inner.disabled {
            return;
        }
        if let ComboboxEvent::Navigate(value) | ComboboxEvent::Select(value) = &event {
            if !inner.is_enabled_option(value) {
                tracing::trace!(event = event.name(), %value, "ignoring unknown or disabled option");
                return;
            }
        }

        let from = inner.machine.state();
        let to = inner.machine.send(&event);

        let mut notify = None;
        match event {
            ComboboxEvent::Change(text) => {
                inner.value = text;
                inner.navigation = None;
            }
            ComboboxEvent::Navigate(value) => inner.navigation = Some(value),
            ComboboxEvent::Select(value) => {
                inner.value = value.clone();
                inner.selected = Some(value.clone());
                inner.navigation = None;
                notify = inner.on_select.clone().map(|cb| (cb, value));
            }
            ComboboxEvent::Escape | ComboboxEvent::Blur => inner.navigation = None,
            ComboboxEvent::Focus => {}
        }
        tracing::debug!(id = %inner.id, ?from, ?to, "combobox transition");
        drop(inner);

        if let Some((callback, value)) = notify {
            callback(&value);
        }
    }

    /// Keyboard handling for the input; returns whether the key was consumed
    pub fn handle_key(&self, key: Key) -> bool {
        let (expanded, navigation, target) = {
            let inner = self.inner.borrow();
            let expanded = inner.machine.state().is_expanded();
            let target = match key {
                Key::ArrowDown => {
                    if expanded {
                        inner.step(true)
                    } else {
                        inner.enabled().next().map(str::to_string)
                    }
                }
                Key::ArrowUp => inner.step(false),
                Key::Home if expanded => inner.enabled().next().map(str::to_string),
                Key::End if expanded => inner.enabled().next_back().map(str::to_string),
                _ => None,
            };
            // a highlight left over from an earlier render may be gone by now
            let selectable = inner
                .navigation
                .clone()
                .filter(|nav| inner.is_enabled_option(nav));
            (expanded, selectable, target)
        };

        match key {
            Key::ArrowDown | Key::ArrowUp | Key::Home | Key::End => match target {
                Some(value) => {
                    self.send(ComboboxEvent::Navigate(value));
                    true
                }
                None => false,
            },
            Key::Enter => match navigation {
                Some(value) if expanded => {
                    self.send(ComboboxEvent::Select(value));
                    true
                }
                _ => false,
            },
            Key::Escape if expanded => {
                self.send(ComboboxEvent::Escape);
                true
            }
            _ => false,
        }
    }

    fn handler(&self, f: impl Fn(&ComboboxController, &mut Event) + 'static) -> EventHandler {
        let controller = self.clone();
        EventHandler::new(move |event| f(&controller, event))
    }
}

impl Default for ComboboxController {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ComboboxController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ComboboxController")
            .field(&self.snapshot())
            .finish()
    }
}

impl ComboboxInteraction for ComboboxController {
    type Options = ComboboxOptions;
    type Context = ComboboxSnapshot;
    type Error = ControllerError;

    fn use_combobox(&self, options: &ComboboxOptions) -> Result<ComboboxSnapshot, ControllerError> {
        let mut inner = self.inner.borrow_mut();
        inner.id = options.id.clone();
        inner.disabled = options.disabled;
        inner.on_select = options.on_select.clone();
        inner.machine.set_open_on_focus(options.open_on_focus);
        if options.disabled && inner.machine.state().is_expanded() {
            inner.machine.reset();
            inner.navigation = None;
        }
        inner.options.clear();
        Ok(inner.snapshot())
    }

    fn use_input(&self, cx: &ComboboxSnapshot, props: Props) -> Result<HookProps, ControllerError> {
        let mut out = Props::new()
            .with("id", cx.input_id())
            .with("type", "text")
            .with("autocomplete", "off");
        out.extend(props);
        out.insert("role", "combobox");
        out.insert("aria-autocomplete", "list");
        out.insert("aria-haspopup", "listbox");
        out.insert("aria-expanded", aria_bool(cx.is_expanded()));
        out.insert("aria-controls", cx.list_id());
        out.insert("value", cx.value.clone());
        if let Some(nav) = &cx.navigation {
            out.insert("aria-activedescendant", cx.option_id(nav));
        }
        if cx.disabled {
            out.insert("disabled", true);
        }

        out.compose_handler(
            EventKind::Change,
            self.handler(|c, event| {
                if let Some(text) = event.text() {
                    c.send(ComboboxEvent::Change(text.to_string()));
                }
            }),
        );
        out.compose_handler(
            EventKind::KeyDown,
            self.handler(|c, event| {
                if let Some(key) = event.key() {
                    if c.handle_key(key) {
                        event.default_prevented = true;
                    }
                }
            }),
        );
        out.compose_handler(EventKind::Focus, self.handler(|c, _| c.send(ComboboxEvent::Focus)));
        out.compose_handler(EventKind::Blur, self.handler(|c, _| c.send(ComboboxEvent::Blur)));

        let input_ref = self.inner.borrow().input_ref.clone();
        Ok(HookProps::new(out).with_ref(input_ref))
    }

    fn use_list(&self, cx: &ComboboxSnapshot, props: Props) -> Result<HookProps, ControllerError> {
        let mut out = props;
        out.insert("id", cx.list_id());
        out.insert("role", "listbox");
        out.insert("tabindex", -1i64);
        if !cx.is_expanded() {
            out.insert("hidden", true);
        }

        let list_ref = self.inner.borrow().list_ref.clone();
        Ok(HookProps::new(out).with_ref(list_ref))
    }

    fn use_list_item(
        &self,
        cx: &ComboboxSnapshot,
        props: Props,
    ) -> Result<HookProps, ControllerError> {
        let value = props
            .get_str("value")
            .ok_or(ControllerError::MissingItemValue)?
            .to_string();
        let disabled = props.get_bool("disabled");

        {
            let mut inner = self.inner.borrow_mut();
            if inner.options.iter().any(|o| o.value == value) {
                return Err(ControllerError::DuplicateItemValue(value));
            }
            tracing::trace!(%value, disabled, "registering option");
            inner.options.push(OptionEntry {
                value: value.clone(),
                disabled,
            });
        }

        let highlighted = cx.navigation.as_deref() == Some(value.as_str());
        let mut out = props;
        out.insert("id", cx.option_id(&value));
        out.insert("role", "option");
        out.insert("type", "button");
        out.insert("tabindex", -1i64);
        out.insert("aria-selected", aria_bool(highlighted));
        if highlighted {
            out.insert("data-highlighted", "");
        }
        if cx.selected.as_deref() == Some(value.as_str()) {
            out.insert("data-selected", "");
        }
        if disabled {
            out.insert("aria-disabled", "true");
            out.insert("data-disabled", "");
            return Ok(HookProps::new(out));
        }

        let on_click = value.clone();
        out.compose_handler(
            EventKind::Click,
            self.handler(move |c, _| c.send(ComboboxEvent::Select(on_click.clone()))),
        );
        out.compose_handler(
            EventKind::PointerEnter,
            self.handler(move |c, _| c.send(ComboboxEvent::Navigate(value.clone()))),
        );
        Ok(HookProps::new(out))
    }
}
