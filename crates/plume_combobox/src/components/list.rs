//! Suggestion list popup

use plume_core::{merge_refs, Element, NodeRef, PropValue, Props, Tag};
use plume_theme::{omit_theming_props, styled, SystemStyleObject};

use super::combobox::ComboboxScope;
use crate::interaction::{ComboboxInteraction, HookProps};

/// List leaf; styled by the `comboboxList` part
#[derive(Debug, Default)]
pub struct ComboboxList {
    props: Props,
    node_ref: Option<NodeRef>,
    children: Vec<Element>,
}

impl ComboboxList {
    #[cfg(debug_assertions)]
    pub const DISPLAY_NAME: &'static str = "ComboboxList";

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

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn render<H: ComboboxInteraction>(
        self,
        scope: &ComboboxScope<'_, H>,
    ) -> Result<Element, H::Error> {
        let HookProps { props, node_ref } = scope
            .hook()
            .use_list(scope.context(), omit_theming_props(self.props))?;

        let base = SystemStyleObject::new()
            .set("outline", 0)
            .set("width", "100%");

        Ok(styled(Tag::Div)
            .props(props)
            .refs(merge_refs([node_ref, self.node_ref]))
            .css(base)
            .css(scope.styles().part("comboboxList"))
            .children(self.children)
            .debug_name("ComboboxList")
            .build(scope.env()))
    }
}

/// Start a [`ComboboxList`]
pub fn combobox_list() -> ComboboxList {
    ComboboxList::new()
}
