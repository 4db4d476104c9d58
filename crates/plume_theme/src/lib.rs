//! Plume Theme System
//!
//! The styling engine behind Plume components: color modes, design tokens,
//! style objects with pseudo states, and per-component style configs.
//!
//! # Overview
//!
//! - **Color mode**: [`ColorMode`] selects between light and dark values
//! - **Tokens**: [`Tokens`] map names such as `gray.700` or `md` to CSS values
//! - **Style objects**: [`SystemStyleObject`] holds CSS-like properties plus
//!   nested pseudo-state objects (`_hover`, `_focus`, ...)
//! - **Component configs**: [`ComponentStyleConfig`] registers a component's
//!   parts, base style, sizes and variants
//! - **Overrides**: [`ThemeOverrides`] loads per-part customizations from TOML
//!
//! # Quick Start
//!
//! ```rust
//! use plume_theme::{ColorMode, RenderEnv, Theme, ThemingProps};
//!
//! let env = RenderEnv::new(Theme::default(), ColorMode::Dark);
//! let styles = env.use_style_config("Combobox", &ThemingProps::default());
//!
//! let list = styles.part("comboboxList");
//! assert_eq!(list.get("bg").map(|v| v.to_string()).as_deref(), Some("gray.700"));
//! ```
//!
//! # Resolution
//!
//! `use_style_config` merges, per part and in order: the base style, the
//! active size, the active variant, then any overrides loaded into the theme.
//! Token names are only turned into concrete CSS when a styled primitive is
//! built (see [`system::styled`]).

pub mod component;
pub mod components;
pub mod config;
pub mod css;
pub mod env;
pub mod error;
pub mod mode;
pub mod style;
pub mod system;
pub mod theme;
pub mod theming;
pub mod tokens;

pub use component::{ComponentStyleConfig, Register, StyleContext, StyleFn};
pub use config::ThemeOverrides;
pub use env::RenderEnv;
pub use error::ThemeError;
pub use mode::ColorMode;
pub use style::{PartStyles, Pseudo, StyleValue, SystemStyleObject};
pub use system::{styled, Styled};
pub use theme::Theme;
pub use theming::{omit_theming_props, ThemingProps, THEMING_PROP_KEYS};
pub use tokens::{Scale, Tokens};
