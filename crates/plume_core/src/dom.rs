//! Rendered element trees and the mounted document
//!
//! Components produce [`Element`] descriptions. [`Document::mount`] turns them
//! into nodes addressed by [`NodeId`], filling every attached [`NodeRef`] with
//! the node it ended up on. Handlers stay on the mounted node so tests and
//! hosts can [`dispatch`](Document::dispatch) events against it.

use std::cell::Cell;
use std::rc::Rc;

use indexmap::IndexMap;
use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;

use crate::events::Event;
use crate::props::{PropValue, Props};

new_key_type! {
    /// Identifier of a mounted node
    pub struct NodeId;
}

/// Host element kinds the styled primitives render to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tag {
    Div,
    Input,
    Button,
    Span,
}

impl Tag {
    pub fn name(self) -> &'static str {
        match self {
            Tag::Div => "div",
            Tag::Input => "input",
            Tag::Button => "button",
            Tag::Span => "span",
        }
    }
}

/// A shared slot that receives the node an element mounts to
#[derive(Clone, Debug, Default)]
pub struct NodeRef(Rc<Cell<Option<NodeId>>>);

impl NodeRef {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<NodeId> {
        self.0.get()
    }

    pub fn set(&self, node: Option<NodeId>) {
        self.0.set(node)
    }

    pub fn ptr_eq(&self, other: &NodeRef) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Combine refs so that all of them receive the same node
///
/// `None` entries are skipped and duplicates (same slot) are kept once.
pub fn merge_refs<I>(refs: I) -> SmallVec<[NodeRef; 2]>
where
    I: IntoIterator<Item = Option<NodeRef>>,
{
    let mut merged: SmallVec<[NodeRef; 2]> = SmallVec::new();
    for r in refs.into_iter().flatten() {
        if !merged.iter().any(|m| m.ptr_eq(&r)) {
            merged.push(r);
        }
    }
    merged
}

/// Resolved CSS for one element
///
/// `declarations` apply unconditionally; `states` holds declarations keyed
/// by selector (`&:hover, &[data-hover]`) that apply in a pseudo state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ComputedStyle {
    pub declarations: IndexMap<String, String>,
    pub states: IndexMap<String, IndexMap<String, String>>,
}

impl ComputedStyle {
    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations.get(property).map(String::as_str)
    }

    /// Declarations for the state whose selector contains `needle`
    pub fn state(&self, needle: &str) -> Option<&IndexMap<String, String>> {
        self.states
            .iter()
            .find(|(selector, _)| selector.contains(needle))
            .map(|(_, decls)| decls)
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty() && self.states.is_empty()
    }
}

/// Description of a rendered host element
#[derive(Clone, Debug)]
pub struct Element {
    pub tag: Tag,
    pub props: Props,
    pub style: ComputedStyle,
    pub refs: SmallVec<[NodeRef; 2]>,
    pub children: Vec<Element>,
    pub text: Option<String>,
    /// Component name, only recorded in debug builds
    pub debug_name: Option<&'static str>,
}

impl Element {
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            props: Props::new(),
            style: ComputedStyle::default(),
            refs: SmallVec::new(),
            children: Vec::new(),
            text: None,
            debug_name: None,
        }
    }

    pub fn attr(mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.props.insert(key, value);
        self
    }

    pub fn props(mut self, props: Props) -> Self {
        self.props.extend(props);
        self
    }

    pub fn style(mut self, style: ComputedStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_ref(mut self, node_ref: NodeRef) -> Self {
        self.refs.push(node_ref);
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

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }
}

/// A node in the mounted document
#[derive(Clone, Debug)]
pub struct MountedNode {
    pub tag: Tag,
    pub attributes: IndexMap<String, String>,
    pub props: Props,
    pub style: ComputedStyle,
    pub text: Option<String>,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    pub debug_name: Option<&'static str>,
}

/// Mounted element tree
#[derive(Default)]
pub struct Document {
    nodes: SlotMap<NodeId, MountedNode>,
    roots: Vec<NodeId>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mount a forest of elements, returning the root node ids
    pub fn mount(&mut self, elements: Vec<Element>) -> Vec<NodeId> {
        let ids: Vec<NodeId> = elements
            .into_iter()
            .map(|el| self.mount_element(el, None))
            .collect();
        self.roots.extend(ids.iter().copied());
        tracing::trace!(roots = ids.len(), total = self.nodes.len(), "mounted elements");
        ids
    }

    /// Drop every node. Refs keep their last id until the next mount.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.roots.clear();
    }

    /// Replace the document content with a fresh render
    pub fn replace(&mut self, elements: Vec<Element>) -> Vec<NodeId> {
        self.clear();
        self.mount(elements)
    }

    fn mount_element(&mut self, element: Element, parent: Option<NodeId>) -> NodeId {
        let attributes = element
            .props
            .iter()
            .filter_map(|(k, v)| v.as_attr().map(|text| (k.to_string(), text)))
            .collect();

        let id = self.nodes.insert(MountedNode {
            tag: element.tag,
            attributes,
            props: element.props,
            style: element.style,
            text: element.text,
            parent,
            children: Vec::new(),
            debug_name: element.debug_name,
        });

        for node_ref in &element.refs {
            node_ref.set(Some(id));
        }

        let children: Vec<NodeId> = element
            .children
            .into_iter()
            .map(|child| self.mount_element(child, Some(id)))
            .collect();
        if let Some(node) = self.nodes.get_mut(id) {
            node.children = children;
        }
        id
    }

    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn get(&self, id: NodeId) -> Option<&MountedNode> {
        self.nodes.get(id)
    }

    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        self.nodes
            .get(id)
            .and_then(|node| node.attributes.get(name))
            .map(String::as_str)
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes
            .get(id)
            .map(|node| node.children.as_slice())
            .unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes in document order (depth-first from the roots)
    pub fn walk(&self) -> Vec<NodeId> {
        let mut out = Vec::with_capacity(self.nodes.len());
        let mut stack: Vec<NodeId> = self.roots.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.children(id).iter().rev().copied());
        }
        out
    }

    /// First node in document order whose attribute `name` equals `value`
    pub fn find_by_attr(&self, name: &str, value: &str) -> Option<NodeId> {
        self.walk()
            .into_iter()
            .find(|&id| self.attr(id, name) == Some(value))
    }

    pub fn find_all_by_attr(&self, name: &str, value: &str) -> Vec<NodeId> {
        self.walk()
            .into_iter()
            .filter(|&id| self.attr(id, name) == Some(value))
            .collect()
    }

    /// Deliver `event` to the handler registered on `target`
    ///
    /// Returns false when the node is gone or has no handler for the event.
    pub fn dispatch(&self, target: NodeId, mut event: Event) -> bool {
        let Some(handler) = self
            .nodes
            .get(target)
            .and_then(|node| node.props.handler(event.kind))
            .cloned()
        else {
            return false;
        };
        event.target = Some(target);
        tracing::trace!(kind = ?event.kind, "dispatching event");
        handler.call(&mut event);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{EventHandler, EventKind};

    #[test]
    fn test_mount_fills_refs() {
        let outer = NodeRef::new();
        let inner = NodeRef::new();
        let tree = Element::new(Tag::Div)
            .with_ref(outer.clone())
            .child(Element::new(Tag::Button).with_ref(inner.clone()));

        let mut doc = Document::new();
        let roots = doc.mount(vec![tree]);

        assert_eq!(outer.get(), Some(roots[0]));
        assert_eq!(doc.children(roots[0]), &[inner.get().unwrap()]);
        assert_eq!(doc.get(inner.get().unwrap()).unwrap().parent, Some(roots[0]));
    }

    #[test]
    fn test_merge_refs_dedupes_and_skips_none() {
        let a = NodeRef::new();
        let merged = merge_refs([Some(a.clone()), None, Some(a.clone())]);
        assert_eq!(merged.len(), 1);

        let b = NodeRef::new();
        let merged = merge_refs([Some(a), Some(b)]);
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn test_handlers_are_not_attributes() {
        let el = Element::new(Tag::Input)
            .attr("role", "combobox")
            .attr("on_change", EventHandler::new(|_| {}));
        let mut doc = Document::new();
        let id = doc.mount(vec![el])[0];

        assert_eq!(doc.attr(id, "role"), Some("combobox"));
        assert_eq!(doc.attr(id, "on_change"), None);
        assert!(doc.dispatch(id, Event::change("a")));
        assert!(!doc.dispatch(id, Event::new(EventKind::Click)));
    }

    #[test]
    fn test_false_boolean_props_are_not_mounted() {
        let el = Element::new(Tag::Button)
            .attr("disabled", false)
            .attr("hidden", true)
            .attr("aria-expanded", "false");
        let mut doc = Document::new();
        let id = doc.mount(vec![el])[0];

        assert_eq!(doc.attr(id, "disabled"), None);
        assert_eq!(doc.attr(id, "hidden"), Some("true"));
        assert_eq!(doc.attr(id, "aria-expanded"), Some("false"));
    }

    #[test]
    fn test_walk_is_document_order() {
        let tree = Element::new(Tag::Div)
            .attr("id", "a")
            .child(Element::new(Tag::Div).attr("id", "b"))
            .child(Element::new(Tag::Div).attr("id", "c"));
        let mut doc = Document::new();
        doc.mount(vec![tree, Element::new(Tag::Span).attr("id", "d")]);

        let ids: Vec<&str> = doc
            .walk()
            .into_iter()
            .map(|id| doc.attr(id, "id").unwrap())
            .collect();
        assert_eq!(ids, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_computed_style_state_lookup() {
        let mut style = ComputedStyle::default();
        let mut hover = IndexMap::new();
        hover.insert("background".to_string(), "#edf2f7".to_string());
        style.states.insert("&:hover, &[data-hover]".to_string(), hover);

        assert_eq!(
            style.state(":hover").and_then(|d| d.get("background")).map(String::as_str),
            Some("#edf2f7")
        );
        assert!(style.state(":active").is_none());
    }
}
