//! Light/dark color mode

use serde::Deserialize;
use std::fmt;

/// The display mode styles are resolved for
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Light,
    Dark,
}

impl ColorMode {
    pub fn toggle(self) -> Self {
        match self {
            ColorMode::Light => ColorMode::Dark,
            ColorMode::Dark => ColorMode::Light,
        }
    }

    /// Pick the value matching this mode
    pub fn pick<T>(self, light: T, dark: T) -> T {
        match self {
            ColorMode::Light => light,
            ColorMode::Dark => dark,
        }
    }

    pub fn all() -> &'static [ColorMode] {
        &[ColorMode::Light, ColorMode::Dark]
    }

    pub fn name(self) -> &'static str {
        match self {
            ColorMode::Light => "light",
            ColorMode::Dark => "dark",
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "light" => Ok(ColorMode::Light),
            "dark" => Ok(ColorMode::Dark),
            other => Err(format!("unknown color mode `{other}`")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pick_and_toggle() {
        assert_eq!(ColorMode::Light.pick("#fff", "gray.700"), "#fff");
        assert_eq!(ColorMode::Dark.pick("#fff", "gray.700"), "gray.700");
        assert_eq!(ColorMode::Light.toggle(), ColorMode::Dark);
        assert_eq!(ColorMode::Dark.toggle().toggle(), ColorMode::Dark);
    }

    #[test]
    fn test_parse() {
        assert_eq!("Dark".parse::<ColorMode>(), Ok(ColorMode::Dark));
        assert!("dim".parse::<ColorMode>().is_err());
    }
}
