//! Built-in component themes

pub mod combobox;
pub mod input;
