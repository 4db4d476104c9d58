//! RGBA colors

use std::fmt;

/// An RGBA color with components in `0.0..=1.0`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self::rgb(r, g, b)
    }

    /// Parse `#rgb` or `#rrggbb` notation
    pub fn parse_hex(value: &str) -> Option<Self> {
        let digits = value.strip_prefix('#')?;
        match digits.len() {
            3 => {
                let expanded: String = digits.chars().flat_map(|c| [c, c]).collect();
                u32::from_str_radix(&expanded, 16).ok().map(Self::from_hex)
            }
            6 => u32::from_str_radix(digits, 16).ok().map(Self::from_hex),
            _ => None,
        }
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }

    /// Serialize as a CSS color: `#rrggbb` when opaque, `rgba(...)` otherwise
    pub fn to_css(&self) -> String {
        let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        if self.a < 1.0 {
            format!(
                "rgba({}, {}, {}, {})",
                channel(self.r),
                channel(self.g),
                channel(self.b),
                (self.a * 100.0).round() / 100.0
            )
        } else {
            format!(
                "#{:02x}{:02x}{:02x}",
                channel(self.r),
                channel(self.g),
                channel(self.b)
            )
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}
