//! Option inside the suggestion list

use plume_core::{merge_refs, Element, NodeRef, PropValue, Props, Tag};
use plume_theme::{omit_theming_props, styled, SystemStyleObject};

use super::combobox::ComboboxScope;
use crate::interaction::{ComboboxInteraction, HookProps};

/// List item leaf; a button styled by the `comboboxListItem` part
#[derive(Debug, Default)]
pub struct ComboboxListItem {
    props: Props,
    node_ref: Option<NodeRef>,
    label: Option<String>,
    children: Vec<Element>,
}

impl ComboboxListItem {
    #[cfg(debug_assertions)]
    pub const DISPLAY_NAME: &'static str = "ComboboxListItem";

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

    pub fn value(self, value: impl Into<String>) -> Self {
        self.prop("value", value.into())
    }

    pub fn disabled(self, disabled: bool) -> Self {
        self.prop("disabled", disabled)
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
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

    pub fn render<H: ComboboxInteraction>(
        self,
        scope: &ComboboxScope<'_, H>,
    ) -> Result<Element, H::Error> {
        let HookProps { props, node_ref } = scope
            .hook()
            .use_list_item(scope.context(), omit_theming_props(self.props))?;

        let mut item = styled(Tag::Button)
            .props(props)
            .refs(merge_refs([node_ref, self.node_ref]))
            .css(base_css())
            .css(scope.styles().part("comboboxListItem"))
            .children(self.children)
            .debug_name("ComboboxListItem");
        if let Some(label) = self.label {
            item = item.text(label);
        }
        Ok(item.build(scope.env()))
    }
}

fn base_css() -> SystemStyleObject {
    SystemStyleObject::new()
        .set("textDecoration", "none")
        .set("color", "inherit")
        .set("userSelect", "none")
        .set("display", "flex")
        .set("width", "100%")
        .set("alignItems", "center")
        .set("textAlign", "left")
        .set("flex", "0 0 auto")
        .set("outline", 0)
}

/// Start a [`ComboboxListItem`] for option `value`
pub fn combobox_list_item(value: impl Into<String>) -> ComboboxListItem {
    ComboboxListItem::new().value(value)
}
