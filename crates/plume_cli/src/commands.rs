//! Subcommand implementations; each returns the text to print

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};
use plume_core::ComputedStyle;
use plume_theme::{
    ColorMode, Pseudo, RenderEnv, SystemStyleObject, Theme, ThemeOverrides, ThemingProps,
};
use serde_json::json;

/// Arguments of `plume css`
#[derive(Debug, Default)]
pub struct CssRequest {
    pub component: String,
    pub part: String,
    pub mode: Option<ColorMode>,
    pub states: Vec<Pseudo>,
    pub variant: Option<String>,
    pub size: Option<String>,
    pub overrides: Option<PathBuf>,
    pub json: bool,
}

pub fn parts(component: Option<&str>) -> Result<String> {
    let theme = Theme::default();
    let names = match component {
        Some(name) => {
            if theme.component(name).is_none() {
                return Err(unknown_component(&theme, name));
            }
            vec![name]
        }
        None => theme.component_names(),
    };

    let mut out = String::new();
    for name in names {
        if let Some(config) = theme.component(name) {
            writeln!(out, "{name}: {}", config.parts().join(", "))?;
        }
    }
    Ok(out.trim_end().to_string())
}

pub fn css(req: &CssRequest) -> Result<String> {
    let mut theme = Theme::default();
    let mut file_mode = None;
    if let Some(path) = &req.overrides {
        let overrides = load_overrides(path)?;
        theme
            .apply_overrides(&overrides)
            .with_context(|| format!("applying overrides from {}", path.display()))?;
        file_mode = overrides.color_mode;
    }
    let mode = req.mode.or(file_mode).unwrap_or_default();

    let config = theme
        .component(&req.component)
        .ok_or_else(|| unknown_component(&theme, &req.component))?;
    if !config.register.contains(&req.part) {
        bail!(
            "component `{}` has no part `{}` (parts: {})",
            req.component,
            req.part,
            config.parts().join(", ")
        );
    }

    let mut theming = ThemingProps::new();
    if let Some(variant) = &req.variant {
        theming = theming.variant(variant.clone());
    }
    if let Some(size) = &req.size {
        theming = theming.size(size.clone());
    }

    let env = RenderEnv::new(theme, mode);
    let style = env
        .use_style_config(&req.component, &theming)
        .part(&req.part);
    tracing::debug!(component = %req.component, part = %req.part, %mode, "compiling part");

    let computed = if req.states.is_empty() {
        env.css(&style)
    } else {
        let mut flat = SystemStyleObject::new();
        for (property, value) in style.resolve(&req.states) {
            flat.insert(property, value);
        }
        env.css(&flat)
    };

    if req.json {
        let value = json!({
            "component": req.component,
            "part": req.part,
            "mode": mode.name(),
            "declarations": computed.declarations,
            "states": computed.states,
        });
        return Ok(serde_json::to_string_pretty(&value)?);
    }
    Ok(render_css(&req.part, &computed))
}

pub fn validate(path: &Path) -> Result<String> {
    let overrides = load_overrides(path)?;
    let mut theme = Theme::default();
    theme
        .apply_overrides(&overrides)
        .with_context(|| format!("invalid overrides in {}", path.display()))?;
    theme.validate().context("theme failed validation")?;

    let parts: usize = overrides.components.values().map(|parts| parts.len()).sum();
    Ok(format!(
        "ok: {} ({} components, {} parts)",
        path.display(),
        overrides.components.len(),
        parts
    ))
}

fn load_overrides(path: &Path) -> Result<ThemeOverrides> {
    ThemeOverrides::load(path).with_context(|| format!("loading {}", path.display()))
}

fn unknown_component(theme: &Theme, name: &str) -> anyhow::Error {
    anyhow!(
        "unknown component `{name}` (registered: {})",
        theme.component_names().join(", ")
    )
}

fn render_css(part: &str, computed: &ComputedStyle) -> String {
    let class = format!(".{part}");
    let mut out = String::new();
    write_block(&mut out, &class, computed.declarations.iter());
    for (selector, declarations) in &computed.states {
        write_block(&mut out, &selector.replace('&', &class), declarations.iter());
    }
    out.trim_end().to_string()
}

fn write_block<'a>(
    out: &mut String,
    selector: &str,
    declarations: impl Iterator<Item = (&'a String, &'a String)>,
) {
    out.push_str(selector);
    out.push_str(" {\n");
    for (property, value) in declarations {
        out.push_str("  ");
        out.push_str(property);
        out.push_str(": ");
        out.push_str(value);
        out.push_str(";\n");
    }
    out.push_str("}\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn request(component: &str, part: &str) -> CssRequest {
        CssRequest {
            component: component.to_string(),
            part: part.to_string(),
            ..CssRequest::default()
        }
    }

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("plume-{}-{name}", std::process::id()));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_parts_lists_registered_components() {
        let out = parts(None).unwrap();
        assert_eq!(
            out,
            "Combobox: comboboxList, comboboxListItem, comboboxInput, command\nInput: field, addon"
        );
        assert!(parts(Some("Menu")).unwrap_err().to_string().contains("Menu"));
    }

    #[test]
    fn test_css_prints_base_and_state_blocks() {
        let mut req = request("Combobox", "comboboxListItem");
        req.mode = Some(ColorMode::Dark);
        let out = css(&req).unwrap();

        assert!(out.starts_with(".comboboxListItem {\n  padding-top: 0.4rem;"));
        assert!(out.contains(
            ".comboboxListItem:hover, .comboboxListItem[data-hover] {\n  background: rgba(255, 255, 255, 0.06);\n}"
        ));
    }

    #[test]
    fn test_css_flattens_requested_states() {
        let mut req = request("Combobox", "comboboxListItem");
        req.states = vec![Pseudo::Hover, Pseudo::Active];
        let out = css(&req).unwrap();

        // active is declared after hover, so it wins
        assert!(out.contains("background: #e2e8f0;"));
        assert!(!out.contains("data-hover"));
    }

    #[test]
    fn test_css_json_output() {
        let mut req = request("Input", "field");
        req.size = Some("sm".to_string());
        req.json = true;
        let out: serde_json::Value = serde_json::from_str(&css(&req).unwrap()).unwrap();

        assert_eq!(out["mode"], "light");
        assert_eq!(out["declarations"]["height"], "2rem");
    }

    #[test]
    fn test_css_rejects_unknown_part() {
        let err = css(&request("Combobox", "menuList")).unwrap_err();
        assert!(err.to_string().contains("no part `menuList`"));
    }

    #[test]
    fn test_override_file_sets_mode_unless_flag_given() {
        let path = temp_file(
            "dark.toml",
            "color_mode = \"dark\"\n[components.Combobox.comboboxList]\nborderRadius = \"sm\"\n",
        );
        let mut req = request("Combobox", "comboboxList");
        req.overrides = Some(path.clone());

        let out = css(&req).unwrap();
        assert!(out.contains("background: #2d3748;"));
        assert!(out.contains("border-radius: 0.125rem;"));

        req.mode = Some(ColorMode::Light);
        assert!(css(&req).unwrap().contains("background: #fff;"));
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_validate() {
        let good = temp_file(
            "good.toml",
            "[components.Combobox.comboboxListItem._hover]\nbg = \"whiteAlpha.300\"\n\n[components.Input.field]\nh = 12\n",
        );
        assert!(validate(&good).unwrap().contains("2 components, 2 parts"));

        let bad = temp_file("bad.toml", "[components.Combobox.popover]\nbg = \"red\"\n");
        let err = validate(&bad).unwrap_err();
        assert!(format!("{err:#}").contains("popover"));

        fs::remove_file(good).ok();
        fs::remove_file(bad).ok();
    }
}
