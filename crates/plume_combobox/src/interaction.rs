//! Interaction hook seam
//!
//! The components in this crate only render and style. Everything that makes
//! a combobox behave like one (open state, highlighting, keyboard handling,
//! ARIA attributes) comes from a [`ComboboxInteraction`] implementation.

use std::fmt;

use plume_core::{NodeRef, Props};

/// Props produced by an interaction hook, with an optional ref the hook wants
/// attached to the rendered node
#[derive(Clone, Debug, Default)]
pub struct HookProps {
    pub props: Props,
    pub node_ref: Option<NodeRef>,
}

impl HookProps {
    pub fn new(props: Props) -> Self {
        Self {
            props,
            node_ref: None,
        }
    }

    pub fn with_ref(mut self, node_ref: NodeRef) -> Self {
        self.node_ref = Some(node_ref);
        self
    }
}

impl From<Props> for HookProps {
    fn from(props: Props) -> Self {
        Self::new(props)
    }
}

/// Headless combobox behavior
///
/// `use_combobox` runs once per render of the wrapper and computes the shared
/// context; the three leaf hooks receive that context and the leaf's caller
/// props (theming props already removed) and return the props to render.
/// Any error aborts the render and is handed back to the caller unchanged.
pub trait ComboboxInteraction {
    /// Configuration accepted by the wrapper
    type Options;
    /// Shared state handed to every leaf
    type Context: Clone + PartialEq + fmt::Debug;
    type Error: std::error::Error + 'static;

    fn use_combobox(&self, options: &Self::Options) -> Result<Self::Context, Self::Error>;

    fn use_input(&self, cx: &Self::Context, props: Props) -> Result<HookProps, Self::Error>;

    fn use_list(&self, cx: &Self::Context, props: Props) -> Result<HookProps, Self::Error>;

    fn use_list_item(&self, cx: &Self::Context, props: Props) -> Result<HookProps, Self::Error>;
}
