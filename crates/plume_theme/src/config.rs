//! Theme override files
//!
//! Per-part customizations are loaded from TOML:
//!
//! ```toml
//! color_mode = "dark"
//!
//! [components.Combobox.comboboxList]
//! bg = "gray.800"
//! borderRadius = "lg"
//!
//! [components.Combobox.comboboxListItem._hover]
//! bg = "whiteAlpha.300"
//! ```
//!
//! Keys starting with `_` must name a pseudo state and hold a table; every
//! other key holds a string or a number.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::error::ThemeError;
use crate::mode::ColorMode;
use crate::style::{PartStyles, Pseudo, StyleValue, SystemStyleObject};

/// Parsed override file
#[derive(Debug, Default, Deserialize)]
pub struct ThemeOverrides {
    /// Preferred color mode, if the file pins one
    #[serde(default)]
    pub color_mode: Option<ColorMode>,
    /// component name -> part name -> style table
    #[serde(default)]
    pub components: IndexMap<String, IndexMap<String, toml::Table>>,
}

impl ThemeOverrides {
    pub fn from_toml_str(source: &str) -> Result<Self, ThemeError> {
        Ok(toml::from_str(source)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ThemeError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| ThemeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let overrides = Self::from_toml_str(&source)?;
        tracing::debug!(
            path = %path.display(),
            components = overrides.components.len(),
            "loaded theme overrides"
        );
        Ok(overrides)
    }

    /// Convert the raw tables into style objects, keyed by component
    pub fn part_styles(&self) -> Result<IndexMap<String, PartStyles>, ThemeError> {
        let mut out = IndexMap::new();
        for (component, parts) in &self.components {
            let mut styles = PartStyles::new();
            for (part, table) in parts {
                styles.insert(part.clone(), style_from_table(table)?);
            }
            out.insert(component.clone(), styles);
        }
        Ok(out)
    }
}

fn style_from_table(table: &toml::Table) -> Result<SystemStyleObject, ThemeError> {
    let mut style = SystemStyleObject::new();
    for (key, value) in table {
        if key.starts_with('_') {
            let pseudo =
                Pseudo::from_key(key).ok_or_else(|| ThemeError::UnknownPseudo(key.clone()))?;
            let nested = value.as_table().ok_or_else(|| ThemeError::InvalidValue {
                property: key.clone(),
                reason: "pseudo states take a table".to_string(),
            })?;
            style.insert_pseudo(pseudo, style_from_table(nested)?);
            continue;
        }

        let value = match value {
            toml::Value::String(s) => StyleValue::Str(s.clone()),
            toml::Value::Integer(i) => StyleValue::Num(*i as f64),
            toml::Value::Float(f) => StyleValue::Num(*f),
            other => {
                return Err(ThemeError::InvalidValue {
                    property: key.clone(),
                    reason: format!("expected a string or number, found {}", other.type_str()),
                })
            }
        };
        style.insert(key.clone(), value);
    }
    Ok(style)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_parts_and_pseudos() {
        let overrides = ThemeOverrides::from_toml_str(
            r#"
            color_mode = "dark"

            [components.Combobox.comboboxListItem]
            paddingY = "0.5rem"
            zIndex = 2

            [components.Combobox.comboboxListItem._hover]
            bg = "whiteAlpha.300"
            "#,
        )
        .unwrap();

        assert_eq!(overrides.color_mode, Some(ColorMode::Dark));
        let styles = overrides.part_styles().unwrap();
        let item = styles["Combobox"].part("comboboxListItem");
        assert_eq!(item.get("paddingY"), Some(&StyleValue::from("0.5rem")));
        assert_eq!(item.get("zIndex"), Some(&StyleValue::from(2)));
        assert_eq!(
            item.pseudo(Pseudo::Hover).and_then(|s| s.get("bg")),
            Some(&StyleValue::from("whiteAlpha.300"))
        );
    }

    #[test]
    fn test_rejects_unknown_pseudo() {
        let overrides = ThemeOverrides::from_toml_str(
            r#"
            [components.Combobox.comboboxList._visited]
            bg = "red"
            "#,
        )
        .unwrap();
        assert!(matches!(
            overrides.part_styles(),
            Err(ThemeError::UnknownPseudo(key)) if key == "_visited"
        ));
    }

    #[test]
    fn test_rejects_boolean_values() {
        let overrides = ThemeOverrides::from_toml_str(
            r#"
            [components.Combobox.command]
            hidden = true
            "#,
        )
        .unwrap();
        let err = overrides.part_styles().unwrap_err();
        assert!(err.to_string().contains("hidden"));
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        assert!(matches!(
            ThemeOverrides::from_toml_str("color_mode = "),
            Err(ThemeError::Parse(_))
        ));
    }
}
