//! Text input of a combobox

use plume_core::{merge_refs, Element, NodeRef, PropValue, Props, Tag};
use plume_theme::components::input;
use plume_theme::{omit_theming_props, styled, ThemingProps};

use super::combobox::ComboboxScope;
use crate::interaction::{ComboboxInteraction, HookProps};

/// Input leaf; styled by the `Input` theme's `field` part
#[derive(Clone, Debug, Default)]
pub struct ComboboxInput {
    props: Props,
    node_ref: Option<NodeRef>,
}

impl ComboboxInput {
    #[cfg(debug_assertions)]
    pub const DISPLAY_NAME: &'static str = "ComboboxInput";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn prop(mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.props.insert(key, value);
        self
    }

    pub fn props(mut self, props: Props) -> Self {
        self.props.extend(props);
        self
    }

    pub fn node_ref(mut self, node_ref: NodeRef) -> Self {
        self.node_ref = Some(node_ref);
        self
    }

    pub fn render<H: ComboboxInteraction>(
        self,
        scope: &ComboboxScope<'_, H>,
    ) -> Result<Element, H::Error> {
        let theming = ThemingProps::from_props(&self.props);
        let field = scope
            .env()
            .use_style_config(input::NAME, &theming)
            .part("field");

        let HookProps { props, node_ref } = scope
            .hook()
            .use_input(scope.context(), omit_theming_props(self.props))?;

        Ok(styled(Tag::Input)
            .props(props)
            .refs(merge_refs([node_ref, self.node_ref]))
            .css(field)
            .debug_name("ComboboxInput")
            .build(scope.env()))
    }
}

/// Start a [`ComboboxInput`]
pub fn combobox_input() -> ComboboxInput {
    ComboboxInput::new()
}
