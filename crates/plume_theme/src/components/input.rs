//! Input theme
//!
//! Text field styling shared by every text-entry component, including the
//! combobox input. Defaults to the `md` size and `outline` variant.

use crate::component::{ComponentStyleConfig, Register, StyleContext};
use crate::style::{PartStyles, Pseudo, SystemStyleObject};
use crate::theming::ThemingProps;

pub const NAME: &str = "Input";

pub const REGISTER: Register = Register {
    parts: &["field", "addon"],
};

fn base_style(_cx: &StyleContext<'_>) -> PartStyles {
    PartStyles::new()
        .with(
            "field",
            SystemStyleObject::new()
                .set("width", "100%")
                .set("minWidth", 0)
                .set("outline", 0)
                .set("position", "relative")
                .set("appearance", "none")
                .set("transition", "all 0.2s"),
        )
        .with("addon", SystemStyleObject::new())
}

fn sized(font_size: &str, px: i32, h: i32, radius: &str) -> PartStyles {
    let style = SystemStyleObject::new()
        .set("fontSize", font_size)
        .set("px", px)
        .set("h", h)
        .set("borderRadius", radius);
    PartStyles::new()
        .with("field", style.clone())
        .with("addon", style)
}

fn size_lg(_cx: &StyleContext<'_>) -> PartStyles {
    sized("lg", 4, 12, "md")
}

fn size_md(_cx: &StyleContext<'_>) -> PartStyles {
    sized("md", 4, 10, "md")
}

fn size_sm(_cx: &StyleContext<'_>) -> PartStyles {
    sized("sm", 3, 8, "sm")
}

/// Focus and error ring colors for the active mode
fn ring_colors(cx: &StyleContext<'_>) -> (String, String) {
    (
        cx.color(cx.mode("blue.500", "blue.300")),
        cx.color(cx.mode("red.500", "red.300")),
    )
}

fn read_only() -> SystemStyleObject {
    SystemStyleObject::new()
        .set("boxShadow", "none !important")
        .set("userSelect", "all")
}

fn disabled() -> SystemStyleObject {
    SystemStyleObject::new()
        .set("opacity", 0.4)
        .set("cursor", "not-allowed")
}

fn variant_outline(cx: &StyleContext<'_>) -> PartStyles {
    let (focus, error) = ring_colors(cx);
    PartStyles::new()
        .with(
            "field",
            SystemStyleObject::new()
                .set("border", "1px solid")
                .set("borderColor", "inherit")
                .set("bg", "inherit")
                .on(
                    Pseudo::Hover,
                    SystemStyleObject::new()
                        .set("borderColor", cx.mode("gray.300", "whiteAlpha.400")),
                )
                .on(Pseudo::ReadOnly, read_only())
                .on(Pseudo::Disabled, disabled())
                .on(
                    Pseudo::Invalid,
                    SystemStyleObject::new()
                        .set("borderColor", error.as_str())
                        .set("boxShadow", format!("0 0 0 1px {error}")),
                )
                .on(
                    Pseudo::Focus,
                    SystemStyleObject::new()
                        .set("zIndex", 1)
                        .set("borderColor", focus.as_str())
                        .set("boxShadow", format!("0 0 0 1px {focus}")),
                ),
        )
        .with(
            "addon",
            SystemStyleObject::new()
                .set("border", "1px solid")
                .set("borderColor", cx.mode("inherit", "whiteAlpha.50"))
                .set("bg", cx.mode("gray.100", "whiteAlpha.300")),
        )
}

fn variant_filled(cx: &StyleContext<'_>) -> PartStyles {
    let (focus, error) = ring_colors(cx);
    PartStyles::new()
        .with(
            "field",
            SystemStyleObject::new()
                .set("border", "2px solid")
                .set("borderColor", "transparent")
                .set("bg", cx.mode("gray.100", "whiteAlpha.50"))
                .on(
                    Pseudo::Hover,
                    SystemStyleObject::new().set("bg", cx.mode("gray.200", "whiteAlpha.100")),
                )
                .on(Pseudo::ReadOnly, read_only())
                .on(Pseudo::Disabled, disabled())
                .on(
                    Pseudo::Invalid,
                    SystemStyleObject::new().set("borderColor", error.as_str()),
                )
                .on(
                    Pseudo::Focus,
                    SystemStyleObject::new()
                        .set("bg", "transparent")
                        .set("borderColor", focus.as_str()),
                ),
        )
        .with(
            "addon",
            SystemStyleObject::new()
                .set("border", "2px solid")
                .set("borderColor", "transparent")
                .set("bg", cx.mode("gray.100", "whiteAlpha.50")),
        )
}

fn variant_flushed(cx: &StyleContext<'_>) -> PartStyles {
    let (focus, error) = ring_colors(cx);
    let underline = || {
        SystemStyleObject::new()
            .set("borderBottom", "1px solid")
            .set("borderColor", "inherit")
            .set("borderRadius", 0)
            .set("px", 0)
            .set("bg", "transparent")
    };
    PartStyles::new()
        .with(
            "field",
            underline()
                .on(Pseudo::ReadOnly, read_only())
                .on(
                    Pseudo::Invalid,
                    SystemStyleObject::new()
                        .set("borderColor", error.as_str())
                        .set("boxShadow", format!("0px 1px 0px 0px {error}")),
                )
                .on(
                    Pseudo::Focus,
                    SystemStyleObject::new()
                        .set("borderColor", focus.as_str())
                        .set("boxShadow", format!("0px 1px 0px 0px {focus}")),
                ),
        )
        .with("addon", underline())
}

fn variant_unstyled(_cx: &StyleContext<'_>) -> PartStyles {
    let bare = SystemStyleObject::new()
        .set("bg", "transparent")
        .set("px", 0)
        .set("height", "auto");
    PartStyles::new()
        .with("field", bare.clone())
        .with("addon", bare)
}

pub fn config() -> ComponentStyleConfig {
    ComponentStyleConfig::new(REGISTER)
        .base_style(base_style)
        .size("lg", size_lg)
        .size("md", size_md)
        .size("sm", size_sm)
        .variant("outline", variant_outline)
        .variant("filled", variant_filled)
        .variant("flushed", variant_flushed)
        .variant("unstyled", variant_unstyled)
        .default_props(ThemingProps::new().size("md").variant("outline"))
}
