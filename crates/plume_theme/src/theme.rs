//! Theme registry
//!
//! A [`Theme`] owns the design tokens, the registered component style configs
//! and any per-part overrides loaded on top of them.

use rustc_hash::FxHashMap;

use crate::component::{ComponentStyleConfig, StyleContext};
use crate::components::{combobox, input};
use crate::config::ThemeOverrides;
use crate::error::ThemeError;
use crate::mode::ColorMode;
use crate::style::PartStyles;
use crate::theming::ThemingProps;
use crate::tokens::Tokens;

#[derive(Clone, Debug)]
pub struct Theme {
    tokens: Tokens,
    components: FxHashMap<String, ComponentStyleConfig>,
    overrides: FxHashMap<String, PartStyles>,
}

impl Theme {
    /// A theme with `tokens` and no components
    pub fn empty(tokens: Tokens) -> Self {
        Self {
            tokens,
            components: FxHashMap::default(),
            overrides: FxHashMap::default(),
        }
    }

    pub fn tokens(&self) -> &Tokens {
        &self.tokens
    }

    pub fn tokens_mut(&mut self) -> &mut Tokens {
        &mut self.tokens
    }

    /// Register or replace a component style config
    pub fn register(&mut self, name: impl Into<String>, config: ComponentStyleConfig) {
        let name = name.into();
        tracing::debug!(component = %name, parts = ?config.parts(), "registering component theme");
        self.components.insert(name, config);
    }

    pub fn component(&self, name: &str) -> Option<&ComponentStyleConfig> {
        self.components.get(name)
    }

    /// Registered component names, sorted
    pub fn component_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.components.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Resolve the styles of component `name` for the given theming props
    ///
    /// Unknown components resolve to empty styles.
    pub fn use_style_config(
        &self,
        name: &str,
        theming: &ThemingProps,
        color_mode: ColorMode,
    ) -> PartStyles {
        let Some(config) = self.components.get(name) else {
            tracing::warn!(component = name, "no style config registered");
            return PartStyles::default();
        };

        let theming = theming.clone().or(&config.default_props);
        let cx = StyleContext::new(color_mode, &theming, &self.tokens);
        let mut styles = config.resolve(&cx);

        if let Some(overrides) = self.overrides.get(name) {
            styles.merge(overrides.clone());
        }

        tracing::debug!(
            component = name,
            %color_mode,
            variant = ?theming.variant,
            size = ?theming.size,
            "resolved style config"
        );
        styles
    }

    /// Layer per-part overrides onto registered components
    ///
    /// Every component and part must be registered; nothing is applied when
    /// any entry is rejected.
    pub fn apply_overrides(&mut self, overrides: &ThemeOverrides) -> Result<(), ThemeError> {
        let parsed = overrides.part_styles()?;
        for (component, parts) in &parsed {
            let config = self
                .components
                .get(component)
                .ok_or_else(|| ThemeError::UnknownComponent(component.clone()))?;
            if let Some(part) = parts.names().find(|p| !config.register.contains(p)) {
                return Err(ThemeError::UnknownPart {
                    component: component.clone(),
                    part: part.to_string(),
                });
            }
        }

        for (component, parts) in parsed {
            tracing::debug!(%component, parts = parts.len(), "applying style overrides");
            self.overrides.entry(component).or_default().merge(parts);
        }
        Ok(())
    }

    pub fn clear_overrides(&mut self) {
        self.overrides.clear();
    }

    /// Check every base style declares exactly its component's registered parts
    pub fn validate(&self) -> Result<(), ThemeError> {
        let theming = ThemingProps::default();
        for name in self.component_names() {
            let config = &self.components[name];
            let Some(base_style) = config.base_style else {
                continue;
            };
            for mode in ColorMode::all() {
                let styles = base_style(&StyleContext::new(*mode, &theming, &self.tokens));
                if let Some(part) = styles.names().find(|p| !config.register.contains(p)) {
                    return Err(ThemeError::UnknownPart {
                        component: name.to_string(),
                        part: part.to_string(),
                    });
                }
                if let Some(part) = config.parts().iter().find(|p| !styles.contains(p)) {
                    return Err(ThemeError::MissingPart {
                        component: name.to_string(),
                        part: part.to_string(),
                    });
                }
            }
        }
        Ok(())
    }
}

impl Default for Theme {
    fn default() -> Self {
        let mut theme = Theme::empty(Tokens::default());
        theme.register(combobox::NAME, combobox::config());
        theme.register(input::NAME, input::config());
        theme
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::Register;
    use crate::style::{StyleValue, SystemStyleObject};

    #[test]
    fn test_default_theme_validates() {
        let theme = Theme::default();
        assert_eq!(theme.component_names(), vec!["Combobox", "Input"]);
        theme.validate().expect("built-in themes are consistent");
    }

    #[test]
    fn test_unknown_component_is_empty() {
        let styles =
            Theme::default().use_style_config("Menu", &ThemingProps::default(), ColorMode::Light);
        assert!(styles.is_empty());
    }

    #[test]
    fn test_resolved_parts_follow_register() {
        let theme = Theme::default();
        for mode in ColorMode::all() {
            let styles = theme.use_style_config("Input", &ThemingProps::default(), *mode);
            let names: Vec<&str> = styles.names().collect();
            assert_eq!(names, input::REGISTER.parts.to_vec());
        }
    }

    #[test]
    fn test_validate_rejects_stray_parts() {
        fn stray(_cx: &StyleContext<'_>) -> PartStyles {
            PartStyles::new().with("ghost", SystemStyleObject::new().set("opacity", 1))
        }
        let mut theme = Theme::default();
        theme.register(
            "Broken",
            ComponentStyleConfig::new(Register { parts: &["body"] }).base_style(stray),
        );
        assert!(matches!(
            theme.validate(),
            Err(ThemeError::UnknownPart { part, .. }) if part == "ghost"
        ));
    }

    #[test]
    fn test_overrides_merge_over_base() {
        let mut theme = Theme::default();
        let overrides = ThemeOverrides::from_toml_str(
            r#"
            [components.Combobox.comboboxList]
            bg = "gray.800"
            "#,
        )
        .unwrap();
        theme.apply_overrides(&overrides).unwrap();

        let list = theme
            .use_style_config("Combobox", &ThemingProps::default(), ColorMode::Dark)
            .part("comboboxList");
        assert_eq!(list.get("bg"), Some(&StyleValue::from("gray.800")));
        assert_eq!(list.get("boxShadow"), Some(&StyleValue::from("dark-lg")));
    }
}
