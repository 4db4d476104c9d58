//! Theming props
//!
//! Props that only steer style resolution. Components read them to pick a
//! variant/size and must strip them before props reach a rendered element.

use plume_core::Props;

/// Prop names that only affect style resolution
pub const THEMING_PROP_KEYS: [&str; 5] =
    ["variant", "size", "colorScheme", "styleConfig", "orientation"];

/// Style-resolution inputs carried alongside regular props
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ThemingProps {
    pub variant: Option<String>,
    pub size: Option<String>,
    pub color_scheme: Option<String>,
    pub orientation: Option<String>,
}

impl ThemingProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn variant(mut self, variant: impl Into<String>) -> Self {
        self.variant = Some(variant.into());
        self
    }

    pub fn size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }

    pub fn color_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.color_scheme = Some(scheme.into());
        self
    }

    /// Read theming props out of a prop bag
    pub fn from_props(props: &Props) -> Self {
        let read = |key: &str| props.get_str(key).map(str::to_string);
        Self {
            variant: read("variant"),
            size: read("size"),
            color_scheme: read("colorScheme"),
            orientation: read("orientation"),
        }
    }

    /// Write these theming props into a prop bag
    pub fn apply_to(&self, props: &mut Props) {
        let fields = [
            ("variant", &self.variant),
            ("size", &self.size),
            ("colorScheme", &self.color_scheme),
            ("orientation", &self.orientation),
        ];
        for (key, value) in fields {
            if let Some(value) = value {
                props.insert(key, value.as_str());
            }
        }
    }

    /// Fill unset fields from `defaults`
    pub fn or(mut self, defaults: &ThemingProps) -> Self {
        self.variant = self.variant.or_else(|| defaults.variant.clone());
        self.size = self.size.or_else(|| defaults.size.clone());
        self.color_scheme = self.color_scheme.or_else(|| defaults.color_scheme.clone());
        self.orientation = self.orientation.or_else(|| defaults.orientation.clone());
        self
    }
}

/// Drop every theming-only prop
pub fn omit_theming_props(mut props: Props) -> Props {
    props.retain(|key, _| !THEMING_PROP_KEYS.contains(&key));
    props
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_omit_theming_props() {
        let props = Props::new()
            .with("variant", "filled")
            .with("size", "sm")
            .with("colorScheme", "blue")
            .with("styleConfig", "custom")
            .with("orientation", "vertical")
            .with("placeholder", "Search");

        let clean = omit_theming_props(props);
        let keys: Vec<&str> = clean.keys().collect();
        assert_eq!(keys, vec!["placeholder"]);
    }

    #[test]
    fn test_from_props_and_defaults() {
        let props = Props::new().with("size", "lg");
        let theming = ThemingProps::from_props(&props)
            .or(&ThemingProps::new().size("md").variant("outline"));

        assert_eq!(theming.size.as_deref(), Some("lg"));
        assert_eq!(theming.variant.as_deref(), Some("outline"));
        assert_eq!(theming.color_scheme, None);
    }

    #[test]
    fn test_apply_to_round_trips() {
        let theming = ThemingProps::new().variant("flushed").color_scheme("red");
        let mut props = Props::new();
        theming.apply_to(&mut props);
        assert_eq!(ThemingProps::from_props(&props), theming);
    }
}
