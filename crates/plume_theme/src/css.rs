//! Style object to CSS compilation
//!
//! Expands shorthand properties (`bg`, `paddingY`, `h`), converts camelCase
//! names to CSS names, and looks token values up in the scale the CSS
//! property draws from.

use indexmap::IndexMap;
use plume_core::ComputedStyle;

use crate::style::{StyleValue, SystemStyleObject};
use crate::tokens::{Scale, Tokens};

/// CSS properties a style-object property expands to
pub fn expand_property(property: &str) -> Vec<String> {
    let expanded: &[&str] = match property {
        "bg" | "background" => &["background"],
        "bgColor" | "backgroundColor" => &["background-color"],
        "p" => &["padding"],
        "px" | "paddingX" => &["padding-left", "padding-right"],
        "py" | "paddingY" => &["padding-top", "padding-bottom"],
        "m" => &["margin"],
        "mx" | "marginX" => &["margin-left", "margin-right"],
        "my" | "marginY" => &["margin-top", "margin-bottom"],
        "w" => &["width"],
        "h" => &["height"],
        "minW" => &["min-width"],
        "maxW" => &["max-width"],
        "minH" => &["min-height"],
        "maxH" => &["max-height"],
        "shadow" => &["box-shadow"],
        "rounded" => &["border-radius"],
        _ => return vec![kebab_case(property)],
    };
    expanded.iter().map(|s| s.to_string()).collect()
}

/// Token scale for a CSS property, if it has one
pub fn scale_for(css_property: &str) -> Option<Scale> {
    match css_property {
        "background" | "background-color" | "color" | "border-color" | "outline-color"
        | "fill" | "stroke" => Some(Scale::Colors),
        "box-shadow" => Some(Scale::Shadows),
        "border-radius" => Some(Scale::Radii),
        "width" | "height" | "min-width" | "max-width" | "min-height" | "max-height" => {
            Some(Scale::Sizes)
        }
        "font-size" => Some(Scale::FontSizes),
        p if p.starts_with("padding") || p.starts_with("margin") || p == "gap" => {
            Some(Scale::Space)
        }
        _ => None,
    }
}

fn kebab_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

fn compile_declarations<'a>(
    props: impl Iterator<Item = (&'a str, &'a StyleValue)>,
    tokens: &Tokens,
) -> IndexMap<String, String> {
    let mut out = IndexMap::new();
    for (property, value) in props {
        let raw = value.to_string();
        for css_property in expand_property(property) {
            let resolved = scale_for(&css_property)
                .and_then(|scale| tokens.resolve(scale, &raw))
                .unwrap_or_else(|| raw.clone());
            out.insert(css_property, resolved);
        }
    }
    out
}

/// Compile a style object into resolved CSS
pub fn compile(style: &SystemStyleObject, tokens: &Tokens) -> ComputedStyle {
    let mut computed = ComputedStyle {
        declarations: compile_declarations(style.props(), tokens),
        states: IndexMap::new(),
    };
    for (pseudo, nested) in style.pseudos() {
        let decls = compile_declarations(nested.props(), tokens);
        computed
            .states
            .entry(pseudo.selector().to_string())
            .or_default()
            .extend(decls);
        if nested.pseudos().next().is_some() {
            tracing::warn!(?pseudo, "nested pseudo states are not compiled");
        }
    }
    computed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Pseudo;

    #[test]
    fn test_shorthands_expand() {
        assert_eq!(
            expand_property("paddingY"),
            vec!["padding-top".to_string(), "padding-bottom".to_string()]
        );
        assert_eq!(expand_property("bg"), vec!["background".to_string()]);
        assert_eq!(expand_property("zIndex"), vec!["z-index".to_string()]);
        assert_eq!(expand_property("textDecoration"), vec!["text-decoration".to_string()]);
    }

    #[test]
    fn test_compile_resolves_tokens_per_scale() {
        let style = SystemStyleObject::new()
            .set("bg", "gray.700")
            .set("boxShadow", "sm")
            .set("minWidth", "3xs")
            .set("paddingY", "2")
            .set("borderRadius", "md")
            .set("zIndex", 1)
            .set("color", "inherit");
        let css = compile(&style, &Tokens::default());

        assert_eq!(css.get("background"), Some("#2d3748"));
        assert_eq!(css.get("box-shadow"), Some("0 1px 2px 0 rgba(0, 0, 0, 0.05)"));
        assert_eq!(css.get("min-width"), Some("14rem"));
        assert_eq!(css.get("padding-top"), Some("0.5rem"));
        assert_eq!(css.get("padding-bottom"), Some("0.5rem"));
        assert_eq!(css.get("border-radius"), Some("0.375rem"));
        assert_eq!(css.get("z-index"), Some("1"));
        assert_eq!(css.get("color"), Some("inherit"));
    }

    #[test]
    fn test_compile_pseudo_states() {
        let style = SystemStyleObject::new().on(
            Pseudo::Hover,
            SystemStyleObject::new().set("bg", "whiteAlpha.100"),
        );
        let css = compile(&style, &Tokens::default());
        let hover = css.state(":hover").expect("hover selector");
        assert_eq!(
            hover.get("background").map(String::as_str),
            Some("rgba(255, 255, 255, 0.06)")
        );
    }
}
