//! Popover state machine
//!
//! Flat machine deciding whether the suggestion list is shown:
//!
//! ```text
//!            change("")            navigate
//!   Idle <---------------- Suggesting ------> Navigating
//!    |  change(text) / focus*    ^               |
//!    +---------------------------+               |
//!    ^        escape / blur / select             |
//!    +-------------------------------------------+
//! ```
//!
//! `*` focus only opens when `open_on_focus` is set.

use std::collections::VecDeque;

/// Where the combobox popover is
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PopoverState {
    /// Collapsed, nothing highlighted
    #[default]
    Idle,
    /// Expanded while the user types
    Suggesting,
    /// Expanded with an option highlighted
    Navigating,
}

impl PopoverState {
    pub fn is_expanded(self) -> bool {
        matches!(self, PopoverState::Suggesting | PopoverState::Navigating)
    }
}

/// Inputs that drive the machine
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ComboboxEvent {
    Focus,
    Change(String),
    Navigate(String),
    Select(String),
    Escape,
    Blur,
}

impl ComboboxEvent {
    pub fn name(&self) -> &'static str {
        match self {
            ComboboxEvent::Focus => "focus",
            ComboboxEvent::Change(_) => "change",
            ComboboxEvent::Navigate(_) => "navigate",
            ComboboxEvent::Select(_) => "select",
            ComboboxEvent::Escape => "escape",
            ComboboxEvent::Blur => "blur",
        }
    }
}

/// Next state for `event` in `state`
pub fn transition(state: PopoverState, event: &ComboboxEvent, open_on_focus: bool) -> PopoverState {
    use ComboboxEvent::*;
    use PopoverState::*;

    match (state, event) {
        (Idle, Focus) if open_on_focus => Suggesting,
        (_, Focus) => state,
        (_, Change(text)) if text.is_empty() => Idle,
        (_, Change(_)) => Suggesting,
        (_, Navigate(_)) => Navigating,
        (_, Select(_) | Escape | Blur) => Idle,
    }
}

/// Most recent transitions kept by [`ComboboxMachine::history`]
pub const HISTORY_LIMIT: usize = 64;

pub type Transition = (PopoverState, &'static str, PopoverState);

/// Machine instance with a bounded transition history
#[derive(Clone, Debug, Default)]
pub struct ComboboxMachine {
    state: PopoverState,
    open_on_focus: bool,
    history: VecDeque<Transition>,
}

impl ComboboxMachine {
    pub fn new(open_on_focus: bool) -> Self {
        Self {
            open_on_focus,
            ..Self::default()
        }
    }

    pub fn state(&self) -> PopoverState {
        self.state
    }

    pub fn set_open_on_focus(&mut self, open_on_focus: bool) {
        self.open_on_focus = open_on_focus;
    }

    /// Send an event, returning the new state
    pub fn send(&mut self, event: &ComboboxEvent) -> PopoverState {
        let from = self.state;
        let to = transition(from, event, self.open_on_focus);
        self.state = to;
        if self.history.len() == HISTORY_LIMIT {
            self.history.pop_front();
        }
        self.history.push_back((from, event.name(), to));
        to
    }

    /// Force the machine back to idle without recording an event
    pub fn reset(&mut self) {
        self.state = PopoverState::Idle;
    }

    /// Recorded transitions, oldest first
    pub fn history(&self) -> impl Iterator<Item = Transition> + '_ {
        self.history.iter().copied()
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}
