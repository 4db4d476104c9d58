//! Component style configs

use indexmap::IndexMap;

use crate::mode::ColorMode;
use crate::style::PartStyles;
use crate::theming::ThemingProps;
use crate::tokens::Tokens;

/// Inputs a style function sees: the active mode, theming props and tokens
#[derive(Clone, Copy, Debug)]
pub struct StyleContext<'a> {
    pub color_mode: ColorMode,
    pub theming: &'a ThemingProps,
    pub tokens: &'a Tokens,
}

impl<'a> StyleContext<'a> {
    pub fn new(color_mode: ColorMode, theming: &'a ThemingProps, tokens: &'a Tokens) -> Self {
        Self {
            color_mode,
            theming,
            tokens,
        }
    }

    /// Pick the light or dark value for the active mode
    pub fn mode<T>(&self, light: T, dark: T) -> T {
        self.color_mode.pick(light, dark)
    }

    /// Resolved CSS color for a palette token
    pub fn color(&self, token: &str) -> String {
        self.tokens.color_css(token)
    }
}

/// A pure function from style context to per-part styles
pub type StyleFn = fn(&StyleContext<'_>) -> PartStyles;

/// Static registration of the parts a component exposes to theming
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Register {
    pub parts: &'static [&'static str],
}

impl Register {
    pub fn contains(&self, part: &str) -> bool {
        self.parts.contains(&part)
    }
}

/// Everything the styling engine knows about one component
#[derive(Clone, Debug)]
pub struct ComponentStyleConfig {
    pub register: Register,
    pub base_style: Option<StyleFn>,
    pub sizes: IndexMap<String, StyleFn>,
    pub variants: IndexMap<String, StyleFn>,
    pub default_props: ThemingProps,
}

impl ComponentStyleConfig {
    pub fn new(register: Register) -> Self {
        Self {
            register,
            base_style: None,
            sizes: IndexMap::new(),
            variants: IndexMap::new(),
            default_props: ThemingProps::default(),
        }
    }

    pub fn base_style(mut self, style: StyleFn) -> Self {
        self.base_style = Some(style);
        self
    }

    pub fn size(mut self, name: impl Into<String>, style: StyleFn) -> Self {
        self.sizes.insert(name.into(), style);
        self
    }

    pub fn variant(mut self, name: impl Into<String>, style: StyleFn) -> Self {
        self.variants.insert(name.into(), style);
        self
    }

    pub fn default_props(mut self, props: ThemingProps) -> Self {
        self.default_props = props;
        self
    }

    pub fn parts(&self) -> &'static [&'static str] {
        self.register.parts
    }

    /// Merge base, size and variant styles for `cx`
    ///
    /// The result always lists exactly the registered parts, in register order.
    pub fn resolve(&self, cx: &StyleContext<'_>) -> PartStyles {
        let mut styles = self.base_style.map(|f| f(cx)).unwrap_or_default();

        if let Some(size) = cx.theming.size.as_deref() {
            match self.sizes.get(size) {
                Some(f) => styles.merge(f(cx)),
                None if !self.sizes.is_empty() => {
                    tracing::warn!(size, "unknown size, using base style")
                }
                None => {}
            }
        }
        if let Some(variant) = cx.theming.variant.as_deref() {
            match self.variants.get(variant) {
                Some(f) => styles.merge(f(cx)),
                None if !self.variants.is_empty() => {
                    tracing::warn!(variant, "unknown variant, using base style")
                }
                None => {}
            }
        }

        styles.conform_to(self.register.parts)
    }
}
