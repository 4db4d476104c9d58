//! Styled primitives
//!
//! [`styled`] builds a host element whose base CSS comes from a style object
//! (the component's internal `__css`). Token names are compiled to concrete
//! CSS against the render environment when the element is built.

use plume_core::{Element, NodeRef, Props, Tag};
use smallvec::SmallVec;

use crate::env::RenderEnv;
use crate::style::SystemStyleObject;

pub struct Styled {
    tag: Tag,
    props: Props,
    css: SystemStyleObject,
    refs: SmallVec<[NodeRef; 2]>,
    children: Vec<Element>,
    text: Option<String>,
    debug_name: Option<&'static str>,
}

/// Start a styled primitive for `tag`
pub fn styled(tag: Tag) -> Styled {
    Styled {
        tag,
        props: Props::new(),
        css: SystemStyleObject::new(),
        refs: SmallVec::new(),
        children: Vec::new(),
        text: None,
        debug_name: None,
    }
}

impl Styled {
    /// Spread props onto the element
    pub fn props(mut self, props: Props) -> Self {
        self.props.extend(props);
        self
    }

    /// Layer a style object over the CSS collected so far
    pub fn css(mut self, style: SystemStyleObject) -> Self {
        self.css.merge(style);
        self
    }

    pub fn refs(mut self, refs: impl IntoIterator<Item = NodeRef>) -> Self {
        self.refs.extend(refs);
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

    /// Record a component name; kept only in debug builds
    #[allow(unused_mut, unused_variables)]
    pub fn debug_name(mut self, name: &'static str) -> Self {
        #[cfg(debug_assertions)]
        {
            self.debug_name = Some(name);
        }
        self
    }

    pub fn build(self, env: &RenderEnv) -> Element {
        let style = env.css(&self.css);
        let mut element = Element::new(self.tag)
            .props(self.props)
            .style(style)
            .children(self.children);
        element.refs = self.refs;
        element.text = self.text;
        element.debug_name = self.debug_name;
        element
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::ColorMode;
    use crate::theme::Theme;

    #[test]
    fn test_build_compiles_css_for_mode() {
        let env = RenderEnv::new(Theme::default(), ColorMode::Dark);
        let el = styled(Tag::Div)
            .props(Props::new().with("role", "listbox"))
            .css(SystemStyleObject::new().set("outline", 0).set("width", "100%"))
            .css(SystemStyleObject::new().set("bg", "gray.700"))
            .build(&env);

        assert_eq!(el.tag, Tag::Div);
        assert_eq!(el.props.get_str("role"), Some("listbox"));
        assert_eq!(el.style.get("outline"), Some("0"));
        assert_eq!(el.style.get("width"), Some("100%"));
        assert_eq!(el.style.get("background"), Some("#2d3748"));
    }

    #[test]
    fn test_later_css_wins() {
        let env = RenderEnv::default();
        let el = styled(Tag::Button)
            .css(SystemStyleObject::new().set("color", "inherit"))
            .css(SystemStyleObject::new().set("color", "gray.700"))
            .build(&env);
        assert_eq!(el.style.get("color"), Some("#2d3748"));
    }
}
