//! The site's color themes.

use xcss::{ColorToken, RgbaColor, Theme, ThemeRegistry};

use crate::error::Result;

/// The dark palette, tuned by hand.
pub fn dark() -> Theme {
    Theme::new("dark", true)
        .with_color(ColorToken::Fg1, RgbaColor::rgb(0xf2, 0xf2, 0xf2))
        .with_color(ColorToken::Fg2, RgbaColor::rgb(0xc9, 0xcc, 0xd1))
        .with_color(ColorToken::Fg3, RgbaColor::rgb(0x8b, 0x91, 0x9a))
        .with_color(ColorToken::Bg1, RgbaColor::rgb(0x0d, 0x11, 0x17))
        .with_color(ColorToken::Bg2, RgbaColor::rgb(0x16, 0x1b, 0x22))
        .with_color(ColorToken::Bg3, RgbaColor::rgb(0x21, 0x26, 0x2d))
        .with_color(ColorToken::Brand, RgbaColor::rgb(0x22, 0xc5, 0x5e))
        .with_color(ColorToken::Accent, RgbaColor::rgb(0x4a, 0xde, 0x80))
        .with_color(ColorToken::Border, RgbaColor::rgb(0x30, 0x36, 0x3d))
        .with_color(ColorToken::Selection, RgbaColor::rgb(0x22, 0xc5, 0x5e).with_alpha(0.3))
}

/// The light palette, derived from its seed colors.
pub fn light() -> Theme {
    Theme::from_seed(
        "light",
        false,
        RgbaColor::rgb(0x11, 0x18, 0x27),
        RgbaColor::rgb(0xfa, 0xfa, 0xfa),
        RgbaColor::rgb(0x16, 0xa3, 0x4a),
    )
}

/// Registers the site themes with `default` bound to `:root`.
pub fn registry(default: &str) -> Result<ThemeRegistry> {
    Ok(ThemeRegistry::builder(default)
        .theme(dark())
        .theme(light())
        .build()?)
}
