//! Combobox components
//!
//! [`Combobox`] provides the interaction context and resolved part styles;
//! the three leaves render inside its scope:
//!
//! | component | element | style |
//! |---|---|---|
//! | [`ComboboxInput`] | `input` | `Input.field` |
//! | [`ComboboxList`] | `div` | `comboboxList` |
//! | [`ComboboxListItem`] | `button` | `comboboxListItem` |
//!
//! Every leaf strips theming props before calling its hook and merges the
//! caller's ref with the ref the hook returns.

mod combobox;
mod input;
mod list;
mod list_item;

pub use combobox::{Combobox, ComboboxChildren, ComboboxProps, ComboboxScope};
pub use input::{combobox_input, ComboboxInput};
pub use list::{combobox_list, ComboboxList};
pub use list_item::{combobox_list_item, ComboboxListItem};
