//! Render environment
//!
//! The ambient inputs of a render pass: the theme and the active color mode.
//! Passed explicitly down the render path instead of living in a global.

use plume_core::ComputedStyle;

use crate::config::ThemeOverrides;
use crate::css;
use crate::error::ThemeError;
use crate::mode::ColorMode;
use crate::style::{PartStyles, SystemStyleObject};
use crate::theme::Theme;
use crate::theming::ThemingProps;

#[derive(Clone, Debug, Default)]
pub struct RenderEnv {
    theme: Theme,
    color_mode: ColorMode,
}

impl RenderEnv {
    pub fn new(theme: Theme, color_mode: ColorMode) -> Self {
        Self { theme, color_mode }
    }

    /// Default theme with `overrides` applied; the file's color mode wins
    /// over `fallback_mode` when it pins one
    pub fn with_overrides(
        overrides: &ThemeOverrides,
        fallback_mode: ColorMode,
    ) -> Result<Self, ThemeError> {
        let mut theme = Theme::default();
        theme.apply_overrides(overrides)?;
        Ok(Self::new(theme, overrides.color_mode.unwrap_or(fallback_mode)))
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn theme_mut(&mut self) -> &mut Theme {
        &mut self.theme
    }

    pub fn color_mode(&self) -> ColorMode {
        self.color_mode
    }

    pub fn set_color_mode(&mut self, mode: ColorMode) {
        if mode != self.color_mode {
            tracing::debug!(from = %self.color_mode, to = %mode, "switching color mode");
            self.color_mode = mode;
        }
    }

    pub fn toggle_color_mode(&mut self) {
        self.set_color_mode(self.color_mode.toggle());
    }

    /// Resolve a component's part styles for the active mode
    pub fn use_style_config(&self, name: &str, theming: &ThemingProps) -> PartStyles {
        self.theme.use_style_config(name, theming, self.color_mode)
    }

    /// Compile a style object against the theme tokens
    pub fn css(&self, style: &SystemStyleObject) -> ComputedStyle {
        css::compile(style, self.theme.tokens())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_color_mode_wins() {
        let overrides = ThemeOverrides::from_toml_str(r#"color_mode = "dark""#).unwrap();
        let env = RenderEnv::with_overrides(&overrides, ColorMode::Light).unwrap();
        assert_eq!(env.color_mode(), ColorMode::Dark);

        let env = RenderEnv::with_overrides(&ThemeOverrides::default(), ColorMode::Light).unwrap();
        assert_eq!(env.color_mode(), ColorMode::Light);
    }

    #[test]
    fn test_with_overrides_rejects_unknown_part() {
        let overrides = ThemeOverrides::from_toml_str(
            r#"
            [components.Combobox.menuList]
            bg = "red"
            "#,
        )
        .unwrap();
        assert!(matches!(
            RenderEnv::with_overrides(&overrides, ColorMode::Light),
            Err(ThemeError::UnknownPart { part, .. }) if part == "menuList"
        ));
    }

    #[test]
    fn test_toggle() {
        let mut env = RenderEnv::default();
        assert_eq!(env.color_mode(), ColorMode::Light);
        env.toggle_color_mode();
        assert_eq!(env.color_mode(), ColorMode::Dark);
    }
}
