//! Plume Combobox
//!
//! A themed combobox split into four components: the [`Combobox`] wrapper,
//! which renders nothing itself, and the [`ComboboxInput`], [`ComboboxList`]
//! and [`ComboboxListItem`] leaves. Behavior is supplied by any
//! [`ComboboxInteraction`] hook; [`ComboboxController`] is the built-in one.
//!
//! # Example
//!
//! ```rust
//! use plume_combobox::{
//!     combobox_input, combobox_list, combobox_list_item, Combobox, ComboboxController,
//!     ComboboxOptions, ComboboxProps,
//! };
//! use plume_core::{Document, Event, Key};
//! use plume_theme::RenderEnv;
//!
//! let env = RenderEnv::default();
//! let controller = ComboboxController::new();
//! let combobox = Combobox::new(controller.clone());
//! let props = ComboboxProps::new(ComboboxOptions::new("fruit"));
//!
//! let tree = combobox
//!     .render_with(&env, &props, |scope| {
//!         let items = ["apple", "banana"]
//!             .into_iter()
//!             .map(|v| combobox_list_item(v).label(v).render(scope))
//!             .collect::<Result<Vec<_>, _>>()?;
//!         Ok(vec![
//!             combobox_input().render(scope)?,
//!             combobox_list().children(items).render(scope)?,
//!         ])
//!     })
//!     .unwrap();
//!
//! let mut doc = Document::new();
//! doc.mount(tree);
//!
//! let input = controller.input_node().unwrap();
//! doc.dispatch(input, Event::key_down(Key::ArrowDown));
//! assert_eq!(controller.navigation().as_deref(), Some("apple"));
//! ```

pub mod components;
pub mod controller;
pub mod interaction;

pub use components::{
    combobox_input, combobox_list, combobox_list_item, Combobox, ComboboxChildren, ComboboxInput,
    ComboboxList, ComboboxListItem, ComboboxProps, ComboboxScope,
};
pub use controller::{
    ComboboxController, ComboboxEvent, ComboboxOptions, ComboboxSnapshot, ControllerError,
    PopoverState,
};
pub use interaction::{ComboboxInteraction, HookProps};
