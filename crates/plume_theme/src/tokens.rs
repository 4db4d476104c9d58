//! Design tokens
//!
//! Tokens are the named values style objects refer to: palette colors
//! (`gray.100`, `whiteAlpha.200`), shadows, radii, the spacing scale and the
//! sizes scale. Values that are not a token name pass through untouched.

use plume_core::Color;
use rustc_hash::FxHashMap;

/// Token scale a CSS property draws from
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum Scale {
    Colors,
    Shadows,
    Radii,
    Space,
    Sizes,
    FontSizes,
}

/// Complete set of theme tokens
#[derive(Clone, Debug)]
pub struct Tokens {
    colors: FxHashMap<String, Color>,
    shadows: FxHashMap<String, String>,
    radii: FxHashMap<String, String>,
    space: FxHashMap<String, String>,
    sizes: FxHashMap<String, String>,
    font_sizes: FxHashMap<String, String>,
}

impl Tokens {
    /// Look a color up by palette name (`gray.700`) or hex literal
    pub fn color(&self, name: &str) -> Option<Color> {
        self.colors
            .get(name)
            .copied()
            .or_else(|| Color::parse_hex(name))
    }

    /// CSS text for a color token, or the input unchanged
    pub fn color_css(&self, name: &str) -> String {
        self.color(name)
            .map(|c| c.to_css())
            .unwrap_or_else(|| name.to_string())
    }

    /// Resolve `value` in `scale`, `None` when it is not a token
    pub fn resolve(&self, scale: Scale, value: &str) -> Option<String> {
        match scale {
            Scale::Colors => self.colors.get(value).map(|c| c.to_css()),
            Scale::Shadows => self.shadows.get(value).cloned(),
            Scale::Radii => self.radii.get(value).cloned(),
            Scale::Space => self.space.get(value).cloned(),
            Scale::Sizes => self
                .sizes
                .get(value)
                .or_else(|| self.space.get(value))
                .cloned(),
            Scale::FontSizes => self.font_sizes.get(value).cloned(),
        }
    }

    /// Add or replace a palette color
    pub fn set_color(&mut self, name: impl Into<String>, color: Color) {
        self.colors.insert(name.into(), color);
    }

    pub fn set_token(&mut self, scale: Scale, name: impl Into<String>, value: impl Into<String>) {
        let (name, value) = (name.into(), value.into());
        match scale {
            Scale::Colors => {
                if let Some(color) = Color::parse_hex(&value) {
                    self.colors.insert(name, color);
                } else {
                    tracing::warn!(%name, %value, "ignoring non-hex color token");
                }
            }
            Scale::Shadows => {
                self.shadows.insert(name, value);
            }
            Scale::Radii => {
                self.radii.insert(name, value);
            }
            Scale::Space => {
                self.space.insert(name, value);
            }
            Scale::Sizes => {
                self.sizes.insert(name, value);
            }
            Scale::FontSizes => {
                self.font_sizes.insert(name, value);
            }
        }
    }
}

fn table(entries: &[(&str, &str)]) -> FxHashMap<String, String> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

const ALPHA_STEPS: [(&str, f32); 10] = [
    ("50", 0.04),
    ("100", 0.06),
    ("200", 0.08),
    ("300", 0.16),
    ("400", 0.24),
    ("500", 0.36),
    ("600", 0.48),
    ("700", 0.64),
    ("800", 0.80),
    ("900", 0.92),
];

impl Default for Tokens {
    fn default() -> Self {
        let mut colors = FxHashMap::default();
        colors.insert("white".to_string(), Color::WHITE);
        colors.insert("black".to_string(), Color::BLACK);
        colors.insert("transparent".to_string(), Color::TRANSPARENT);

        let palettes: [(&str, [u32; 10]); 3] = [
            (
                "gray",
                [
                    0xF7FAFC, 0xEDF2F7, 0xE2E8F0, 0xCBD5E0, 0xA0AEC0, 0x718096, 0x4A5568,
                    0x2D3748, 0x1A202C, 0x171923,
                ],
            ),
            (
                "blue",
                [
                    0xEBF8FF, 0xBEE3F8, 0x90CDF4, 0x63B3ED, 0x4299E1, 0x3182CE, 0x2B6CB0,
                    0x2C5282, 0x2A4365, 0x1A365D,
                ],
            ),
            (
                "red",
                [
                    0xFFF5F5, 0xFED7D7, 0xFEB2B2, 0xFC8181, 0xF56565, 0xE53E3E, 0xC53030,
                    0x9B2C2C, 0x822727, 0x63171B,
                ],
            ),
        ];
        for (name, shades) in palettes {
            for ((step, _), hex) in ALPHA_STEPS.iter().zip(shades) {
                colors.insert(format!("{name}.{step}"), Color::from_hex(hex));
            }
        }
        for (step, alpha) in ALPHA_STEPS {
            colors.insert(format!("whiteAlpha.{step}"), Color::WHITE.with_alpha(alpha));
            colors.insert(format!("blackAlpha.{step}"), Color::BLACK.with_alpha(alpha));
        }

        let space = table(&[
            ("0", "0"),
            ("px", "1px"),
            ("0.5", "0.125rem"),
            ("1", "0.25rem"),
            ("1.5", "0.375rem"),
            ("2", "0.5rem"),
            ("2.5", "0.625rem"),
            ("3", "0.75rem"),
            ("3.5", "0.875rem"),
            ("4", "1rem"),
            ("5", "1.25rem"),
            ("6", "1.5rem"),
            ("8", "2rem"),
            ("10", "2.5rem"),
            ("12", "3rem"),
            ("16", "4rem"),
        ]);

        Self {
            colors,
            shadows: table(&[
                ("xs", "0 0 0 1px rgba(0, 0, 0, 0.05)"),
                ("sm", "0 1px 2px 0 rgba(0, 0, 0, 0.05)"),
                (
                    "base",
                    "0 1px 3px 0 rgba(0, 0, 0, 0.1), 0 1px 2px 0 rgba(0, 0, 0, 0.06)",
                ),
                (
                    "md",
                    "0 4px 6px -1px rgba(0, 0, 0, 0.1), 0 2px 4px -1px rgba(0, 0, 0, 0.06)",
                ),
                (
                    "lg",
                    "0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -2px rgba(0, 0, 0, 0.05)",
                ),
                ("outline", "0 0 0 3px rgba(66, 153, 225, 0.6)"),
                ("none", "none"),
                (
                    "dark-lg",
                    "rgba(0, 0, 0, 0.1) 0px 0px 0px 1px, rgba(0, 0, 0, 0.2) 0px 5px 10px, rgba(0, 0, 0, 0.4) 0px 15px 40px",
                ),
            ]),
            radii: table(&[
                ("none", "0"),
                ("sm", "0.125rem"),
                ("base", "0.25rem"),
                ("md", "0.375rem"),
                ("lg", "0.5rem"),
                ("xl", "0.75rem"),
                ("full", "9999px"),
            ]),
            space,
            sizes: table(&[
                ("3xs", "14rem"),
                ("2xs", "16rem"),
                ("xs", "20rem"),
                ("sm", "24rem"),
                ("md", "28rem"),
                ("lg", "32rem"),
                ("full", "100%"),
            ]),
            font_sizes: table(&[
                ("xs", "0.75rem"),
                ("sm", "0.875rem"),
                ("md", "1rem"),
                ("lg", "1.125rem"),
                ("xl", "1.25rem"),
            ]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_lookup() {
        let tokens = Tokens::default();
        assert_eq!(tokens.color("gray.700"), Some(Color::from_hex(0x2D3748)));
        assert_eq!(
            tokens.resolve(Scale::Colors, "whiteAlpha.100").as_deref(),
            Some("rgba(255, 255, 255, 0.06)")
        );
        assert_eq!(tokens.color_css("inherit"), "inherit");
        assert_eq!(tokens.color_css("#fff"), "#ffffff");
    }

    #[test]
    fn test_sizes_fall_back_to_space() {
        let tokens = Tokens::default();
        assert_eq!(tokens.resolve(Scale::Sizes, "3xs").as_deref(), Some("14rem"));
        assert_eq!(tokens.resolve(Scale::Sizes, "10").as_deref(), Some("2.5rem"));
        assert_eq!(tokens.resolve(Scale::Space, "3xs"), None);
    }

    #[test]
    fn test_set_token() {
        let mut tokens = Tokens::default();
        tokens.set_token(Scale::Radii, "md", "4px");
        tokens.set_token(Scale::Colors, "brand.500", "#ff5500");
        assert_eq!(tokens.resolve(Scale::Radii, "md").as_deref(), Some("4px"));
        assert_eq!(tokens.color("brand.500"), Some(Color::from_hex(0xFF5500)));
    }
}
