//! Style objects
//!
//! A [`SystemStyleObject`] is an ordered map of CSS-like properties
//! (`bg`, `paddingY`, `boxShadow`, ...) whose values may be token names, plus
//! nested objects applied in a [`Pseudo`] state. [`PartStyles`] maps the part
//! names of a multipart component to their style objects.

use std::fmt;

use indexmap::IndexMap;

/// A style property value
#[derive(Clone, Debug, PartialEq)]
pub enum StyleValue {
    Str(String),
    Num(f64),
}

impl StyleValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            StyleValue::Str(s) => Some(s),
            StyleValue::Num(_) => None,
        }
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::Str(s) => f.write_str(s),
            StyleValue::Num(n) if n.fract() == 0.0 => write!(f, "{}", *n as i64),
            StyleValue::Num(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        StyleValue::Str(value.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        StyleValue::Str(value)
    }
}

impl From<f64> for StyleValue {
    fn from(value: f64) -> Self {
        StyleValue::Num(value)
    }
}

impl From<i32> for StyleValue {
    fn from(value: i32) -> Self {
        StyleValue::Num(f64::from(value))
    }
}

/// Interaction states a style object can target
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum Pseudo {
    Hover,
    Active,
    Focus,
    Expanded,
    Disabled,
    Invalid,
    ReadOnly,
}

impl Pseudo {
    /// Style-object key (`_hover`)
    pub fn key(self) -> &'static str {
        match self {
            Pseudo::Hover => "_hover",
            Pseudo::Active => "_active",
            Pseudo::Focus => "_focus",
            Pseudo::Expanded => "_expanded",
            Pseudo::Disabled => "_disabled",
            Pseudo::Invalid => "_invalid",
            Pseudo::ReadOnly => "_readOnly",
        }
    }

    /// CSS selector the state compiles to
    pub fn selector(self) -> &'static str {
        match self {
            Pseudo::Hover => "&:hover, &[data-hover]",
            Pseudo::Active => "&:active, &[data-active]",
            Pseudo::Focus => "&:focus, &[data-focus]",
            Pseudo::Expanded => "&[aria-expanded=true], &[data-expanded]",
            Pseudo::Disabled => "&[disabled], &[aria-disabled=true], &[data-disabled]",
            Pseudo::Invalid => "&[aria-invalid=true], &[data-invalid]",
            Pseudo::ReadOnly => "&[aria-readonly=true], &[readonly], &[data-readonly]",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::all().iter().copied().find(|p| p.key() == key)
    }

    pub fn all() -> &'static [Pseudo] {
        const ALL: [Pseudo; 7] = [
            Pseudo::Hover,
            Pseudo::Active,
            Pseudo::Focus,
            Pseudo::Expanded,
            Pseudo::Disabled,
            Pseudo::Invalid,
            Pseudo::ReadOnly,
        ];
        &ALL
    }
}

/// CSS-like properties with nested pseudo-state objects
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SystemStyleObject {
    props: IndexMap<String, StyleValue>,
    pseudos: IndexMap<Pseudo, SystemStyleObject>,
}

impl SystemStyleObject {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style property insert
    pub fn set(mut self, property: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.insert(property, value);
        self
    }

    /// Builder-style pseudo insert; merges into an existing state object
    pub fn on(mut self, pseudo: Pseudo, style: SystemStyleObject) -> Self {
        self.insert_pseudo(pseudo, style);
        self
    }

    pub fn insert(&mut self, property: impl Into<String>, value: impl Into<StyleValue>) {
        self.props.insert(property.into(), value.into());
    }

    pub fn insert_pseudo(&mut self, pseudo: Pseudo, style: SystemStyleObject) {
        match self.pseudos.get_mut(&pseudo) {
            Some(existing) => existing.merge(style),
            None => {
                self.pseudos.insert(pseudo, style);
            }
        }
    }

    pub fn get(&self, property: &str) -> Option<&StyleValue> {
        self.props.get(property)
    }

    pub fn pseudo(&self, pseudo: Pseudo) -> Option<&SystemStyleObject> {
        self.pseudos.get(&pseudo)
    }

    pub fn props(&self) -> impl Iterator<Item = (&str, &StyleValue)> {
        self.props.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn pseudos(&self) -> impl Iterator<Item = (Pseudo, &SystemStyleObject)> {
        self.pseudos.iter().map(|(p, s)| (*p, s))
    }

    pub fn is_empty(&self) -> bool {
        self.props.is_empty() && self.pseudos.is_empty()
    }

    /// Deep-merge `other` into `self`; `other` wins on conflicts
    pub fn merge(&mut self, other: SystemStyleObject) {
        self.props.extend(other.props);
        for (pseudo, style) in other.pseudos {
            self.insert_pseudo(pseudo, style);
        }
    }

    pub fn merged(mut self, other: SystemStyleObject) -> Self {
        self.merge(other);
        self
    }

    /// Flatten to the properties in effect while `active` states hold
    ///
    /// State objects are layered in declaration order, so a state declared
    /// later wins over an earlier one.
    pub fn resolve(&self, active: &[Pseudo]) -> IndexMap<String, StyleValue> {
        let mut out = self.props.clone();
        for (pseudo, style) in &self.pseudos {
            if active.contains(pseudo) {
                out.extend(style.resolve(active));
            }
        }
        out
    }
}

/// Style objects keyed by part name
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PartStyles {
    parts: IndexMap<String, SystemStyleObject>,
}

impl PartStyles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, part: impl Into<String>, style: SystemStyleObject) -> Self {
        self.insert(part, style);
        self
    }

    pub fn insert(&mut self, part: impl Into<String>, style: SystemStyleObject) {
        self.parts.insert(part.into(), style);
    }

    pub fn get(&self, part: &str) -> Option<&SystemStyleObject> {
        self.parts.get(part)
    }

    /// Style for `part`, empty when the part has none
    pub fn part(&self, part: &str) -> SystemStyleObject {
        self.parts.get(part).cloned().unwrap_or_default()
    }

    pub fn contains(&self, part: &str) -> bool {
        self.parts.contains_key(part)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.parts.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SystemStyleObject)> {
        self.parts.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Deep-merge every part of `other` into `self`
    pub fn merge(&mut self, other: PartStyles) {
        for (part, style) in other.parts {
            match self.parts.get_mut(&part) {
                Some(existing) => existing.merge(style),
                None => {
                    self.parts.insert(part, style);
                }
            }
        }
    }

    /// Reorder to `order`, inserting empty objects for absent parts
    ///
    /// Parts not named in `order` are dropped.
    pub fn conform_to(self, order: &[&str]) -> PartStyles {
        let mut parts = self.parts;
        let conformed = order
            .iter()
            .map(|name| {
                let style = parts.shift_remove(*name).unwrap_or_default();
                (name.to_string(), style)
            })
            .collect();
        if !parts.is_empty() {
            tracing::debug!(
                dropped = ?parts.keys().collect::<Vec<_>>(),
                "dropping unregistered style parts"
            );
        }
        PartStyles { parts: conformed }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item() -> SystemStyleObject {
        SystemStyleObject::new()
            .set("paddingY", "0.4rem")
            .on(Pseudo::Focus, SystemStyleObject::new().set("bg", "gray.100"))
            .on(Pseudo::Active, SystemStyleObject::new().set("bg", "gray.200"))
            .on(
                Pseudo::Disabled,
                SystemStyleObject::new()
                    .set("opacity", 0.4)
                    .set("cursor", "not-allowed"),
            )
    }

    #[test]
    fn test_resolve_layers_states_in_declaration_order() {
        let style = item();
        assert_eq!(style.resolve(&[]).get("bg"), None);
        assert_eq!(
            style.resolve(&[Pseudo::Focus]).get("bg"),
            Some(&StyleValue::from("gray.100"))
        );
        // _active is declared after _focus
        assert_eq!(
            style.resolve(&[Pseudo::Active, Pseudo::Focus]).get("bg"),
            Some(&StyleValue::from("gray.200"))
        );
    }

    #[test]
    fn test_merge_is_deep() {
        let base = item();
        let patch = SystemStyleObject::new()
            .set("paddingY", "1rem")
            .on(Pseudo::Focus, SystemStyleObject::new().set("color", "red"));
        let merged = base.merged(patch);

        assert_eq!(merged.get("paddingY"), Some(&StyleValue::from("1rem")));
        let focus = merged.pseudo(Pseudo::Focus).unwrap();
        assert_eq!(focus.get("bg"), Some(&StyleValue::from("gray.100")));
        assert_eq!(focus.get("color"), Some(&StyleValue::from("red")));
    }

    #[test]
    fn test_number_display() {
        assert_eq!(StyleValue::from(1).to_string(), "1");
        assert_eq!(StyleValue::from(0.4).to_string(), "0.4");
    }

    #[test]
    fn test_pseudo_keys_round_trip() {
        for pseudo in Pseudo::all() {
            assert_eq!(Pseudo::from_key(pseudo.key()), Some(*pseudo));
        }
        assert_eq!(Pseudo::from_key("_visited"), None);
    }

    #[test]
    fn test_conform_to_orders_and_fills() {
        let styles = PartStyles::new()
            .with("b", SystemStyleObject::new().set("opacity", 1))
            .with("stray", SystemStyleObject::new());
        let conformed = styles.conform_to(&["a", "b"]);

        let names: Vec<&str> = conformed.names().collect();
        assert_eq!(names, vec!["a", "b"]);
        assert!(conformed.part("a").is_empty());
    }
}
