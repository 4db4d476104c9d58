//! Combobox theme
//!
//! Styles for the list popup, its items, the input and the command hint.
//! Only a base style is defined; colors and elevation switch on color mode.

use crate::component::{ComponentStyleConfig, Register, StyleContext};
use crate::style::{PartStyles, Pseudo, SystemStyleObject};

/// Component name used for style lookup
pub const NAME: &str = "Combobox";

/// Parts downstream themes may target
pub const REGISTER: Register = Register {
    parts: &["comboboxList", "comboboxListItem", "comboboxInput", "command"],
};

pub fn base_style(cx: &StyleContext<'_>) -> PartStyles {
    let item_tint = cx.mode("gray.100", "whiteAlpha.100");

    PartStyles::new()
        .with(
            "comboboxList",
            SystemStyleObject::new()
                .set("bg", cx.mode("#fff", "gray.700"))
                .set("boxShadow", cx.mode("sm", "dark-lg"))
                .set("color", "inherit")
                .set("minWidth", "3xs")
                .set("paddingY", "2")
                .set("zIndex", 1)
                .set("borderRadius", "md")
                .set("borderWidth", "1px"),
        )
        .with(
            "comboboxListItem",
            SystemStyleObject::new()
                .set("paddingY", "0.4rem")
                .set("paddingX", "0.8rem")
                .set("transition", "background 50ms ease-in 0s")
                .on(Pseudo::Focus, SystemStyleObject::new().set("bg", item_tint))
                .on(Pseudo::Hover, SystemStyleObject::new().set("bg", item_tint))
                .on(
                    Pseudo::Active,
                    SystemStyleObject::new().set("bg", cx.mode("gray.200", "whiteAlpha.200")),
                )
                .on(Pseudo::Expanded, SystemStyleObject::new().set("bg", item_tint))
                .on(
                    Pseudo::Disabled,
                    SystemStyleObject::new()
                        .set("opacity", 0.4)
                        .set("cursor", "not-allowed"),
                ),
        )
        .with(
            "comboboxInput",
            SystemStyleObject::new()
                .set("width", "100%")
                .set("backgroundColor", "red"),
        )
        .with("command", SystemStyleObject::new().set("opacity", 0.6))
}

pub fn config() -> ComponentStyleConfig {
    ComponentStyleConfig::new(REGISTER).base_style(base_style)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::ColorMode;
    use crate::style::StyleValue;
    use crate::theming::ThemingProps;
    use crate::tokens::Tokens;

    fn styles(mode: ColorMode) -> PartStyles {
        let theming = ThemingProps::default();
        let tokens = Tokens::default();
        base_style(&StyleContext::new(mode, &theming, &tokens))
    }

    fn bg(styles: &PartStyles, part: &str, states: &[Pseudo]) -> Option<StyleValue> {
        styles.part(part).resolve(states).get("bg").cloned()
    }

    #[test]
    fn test_registered_parts_match_style_keys() {
        for mode in ColorMode::all() {
            let resolved = styles(*mode);
            let names: Vec<&str> = resolved.names().collect();
            assert_eq!(names, REGISTER.parts.to_vec(), "mode={mode}");
        }
    }

    #[test]
    fn test_list_item_backgrounds_per_state() {
        let expected = [
            (ColorMode::Light, "gray.100", "gray.200"),
            (ColorMode::Dark, "whiteAlpha.100", "whiteAlpha.200"),
        ];
        for (mode, tint, pressed) in expected {
            let s = styles(mode);
            assert_eq!(bg(&s, "comboboxListItem", &[]), None, "mode={mode}");
            for state in [Pseudo::Focus, Pseudo::Hover, Pseudo::Expanded] {
                assert_eq!(
                    bg(&s, "comboboxListItem", &[state]),
                    Some(StyleValue::from(tint)),
                    "mode={mode} state={state:?}"
                );
            }
            assert_eq!(
                bg(&s, "comboboxListItem", &[Pseudo::Active]),
                Some(StyleValue::from(pressed)),
                "mode={mode}"
            );
        }
    }

    #[test]
    fn test_disabled_item_is_dimmed_and_blocked() {
        for mode in ColorMode::all() {
            let resolved = styles(*mode).part("comboboxListItem").resolve(&[Pseudo::Disabled]);
            assert_eq!(resolved.get("opacity"), Some(&StyleValue::from(0.4)));
            assert_eq!(resolved.get("cursor"), Some(&StyleValue::from("not-allowed")));
        }
    }

    #[test]
    fn test_list_surface_switches_with_mode() {
        let light = styles(ColorMode::Light).part("comboboxList");
        let dark = styles(ColorMode::Dark).part("comboboxList");

        assert_eq!(light.get("bg"), Some(&StyleValue::from("#fff")));
        assert_eq!(dark.get("bg"), Some(&StyleValue::from("gray.700")));
        assert_eq!(light.get("boxShadow"), Some(&StyleValue::from("sm")));
        assert_eq!(dark.get("boxShadow"), Some(&StyleValue::from("dark-lg")));
        assert_eq!(light.get("zIndex"), dark.get("zIndex"));
    }
}
