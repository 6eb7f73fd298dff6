//! Theme definitions and the theme registry.
//!
//! A [`Theme`] binds every [`ColorToken`] to a concrete color. Themes are
//! collected into a [`ThemeRegistry`] at startup; the registry checks that
//! no theme is partial and is read-only afterwards, so it can be shared by
//! every concurrent render.
//!
//! ## Late binding
//!
//! Styles never bake theme colors into their rules. They reference custom
//! properties (`var(--colors-brand)`), and [`ThemeRegistry::css_text`]
//! emits one block of property definitions per theme:
//!
//! ```css
//! :root,.x-theme-dark{--colors-fg1:#f5f5f5;--colors-fg1-rgb:245, 245, 245;...}
//! .x-theme-light{--colors-fg1:#111111;--colors-fg1-rgb:17, 17, 17;...}
//! ```
//!
//! Switching theme is then a matter of swapping the class on `<html>`; no
//! component class name changes.

use std::collections::HashMap;

use crate::error::{Result, XcssError};
use crate::types::color::RgbaColor;
use crate::types::token::ColorToken;

/// A named color theme.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Unique name for this theme (e.g., "dark").
    pub name: String,
    /// Whether this is a dark theme.
    pub is_dark: bool,
    colors: HashMap<ColorToken, RgbaColor>,
}

impl Theme {
    /// Creates a new empty theme with the given name.
    pub fn new(name: &str, is_dark: bool) -> Self {
        Self {
            name: name.to_string(),
            is_dark,
            colors: HashMap::new(),
        }
    }

    /// Builder method binding a token to a color.
    pub fn with_color(mut self, token: ColorToken, color: RgbaColor) -> Self {
        self.colors.insert(token, color);
        self
    }

    /// Derives a complete theme from three seed colors.
    ///
    /// Secondary and tertiary foregrounds step towards the background,
    /// raised backgrounds step away from it, and the selection is a
    /// translucent brand color.
    pub fn from_seed(
        name: &str,
        is_dark: bool,
        foreground: RgbaColor,
        background: RgbaColor,
        brand: RgbaColor,
    ) -> Self {
        let (toward_bg, away_from_bg): (fn(&RgbaColor, f32) -> RgbaColor, fn(&RgbaColor, f32) -> RgbaColor) =
            if is_dark {
                (RgbaColor::darken, RgbaColor::lighten)
            } else {
                (RgbaColor::lighten, RgbaColor::darken)
            };

        Theme::new(name, is_dark)
            .with_color(ColorToken::Fg1, foreground)
            .with_color(ColorToken::Fg2, toward_bg(&foreground, 0.2))
            .with_color(ColorToken::Fg3, toward_bg(&foreground, 0.4))
            .with_color(ColorToken::Bg1, background)
            .with_color(ColorToken::Bg2, away_from_bg(&background, 0.04))
            .with_color(ColorToken::Bg3, away_from_bg(&background, 0.08))
            .with_color(ColorToken::Brand, brand)
            .with_color(ColorToken::Accent, away_from_bg(&brand, 0.1))
            .with_color(ColorToken::Border, away_from_bg(&background, 0.15))
            .with_color(ColorToken::Selection, brand.with_alpha(0.3))
    }

    /// Looks up the color bound to a token.
    pub fn get_color(&self, token: ColorToken) -> Option<&RgbaColor> {
        self.colors.get(&token)
    }

    /// Tokens this theme does not define, in [`ColorToken::ALL`] order.
    pub fn missing_tokens(&self) -> Vec<ColorToken> {
        ColorToken::ALL
            .into_iter()
            .filter(|token| !self.colors.contains_key(token))
            .collect()
    }

    fn write_properties(&self, out: &mut String) {
        for token in ColorToken::ALL {
            if let Some(color) = self.colors.get(&token) {
                out.push_str(&token.var_name());
                out.push(':');
                out.push_str(&color.to_css());
                out.push(';');
                out.push_str(&token.channels_var_name());
                out.push(':');
                out.push_str(&color.channels());
                out.push(';');
                out.push_str(&token.alpha_var_name());
                out.push(':');
                out.push_str(&color.alpha_css());
                out.push(';');
            }
        }
    }
}

/// The built-in `dark` and `light` themes.
pub fn standard_themes() -> Vec<Theme> {
    vec![
        Theme::from_seed(
            "dark",
            true,
            RgbaColor::rgb(0xed, 0xed, 0xed),
            RgbaColor::rgb(0x11, 0x11, 0x11),
            RgbaColor::rgb(0x3b, 0x82, 0xf6),
        ),
        Theme::from_seed(
            "light",
            false,
            RgbaColor::rgb(0x11, 0x11, 0x11),
            RgbaColor::rgb(0xff, 0xff, 0xff),
            RgbaColor::rgb(0x25, 0x63, 0xeb),
        ),
    ]
}

/// Collects themes and validates them into a [`ThemeRegistry`].
#[derive(Debug, Clone)]
pub struct ThemeRegistryBuilder {
    default: String,
    themes: Vec<Theme>,
}

impl ThemeRegistryBuilder {
    /// Registers a theme. Registration order is the order of
    /// [`ThemeRegistry::list_themes`] and of the emitted CSS.
    pub fn theme(mut self, theme: Theme) -> Self {
        self.themes.push(theme);
        self
    }

    /// Validates the themes.
    ///
    /// Fails when two themes share a name, when the default theme is not
    /// registered, or when any theme leaves a [`ColorToken`] undefined.
    pub fn build(self) -> Result<ThemeRegistry> {
        for (idx, theme) in self.themes.iter().enumerate() {
            if self.themes[..idx].iter().any(|t| t.name == theme.name) {
                return Err(XcssError::DuplicateTheme(theme.name.clone()));
            }
            if let Some(token) = theme.missing_tokens().first() {
                return Err(XcssError::MissingThemeToken {
                    theme: theme.name.clone(),
                    token: token.name().to_string(),
                });
            }
        }

        let default = self
            .themes
            .iter()
            .position(|t| t.name == self.default)
            .ok_or_else(|| XcssError::UnknownTheme(self.default.clone()))?;

        log::debug!(
            "theme registry built with {} themes (default `{}`)",
            self.themes.len(),
            self.default
        );

        Ok(ThemeRegistry {
            themes: self.themes,
            default,
        })
    }
}

/// Immutable set of validated themes.
#[derive(Debug, Clone)]
pub struct ThemeRegistry {
    themes: Vec<Theme>,
    default: usize,
}

impl Default for ThemeRegistry {
    /// [`standard_themes`], with `dark` as the default.
    fn default() -> Self {
        Self {
            themes: standard_themes(),
            default: 0,
        }
    }
}

impl ThemeRegistry {
    /// Starts a registry whose default theme is `default`.
    pub fn builder(default: impl Into<String>) -> ThemeRegistryBuilder {
        ThemeRegistryBuilder {
            default: default.into(),
            themes: Vec::new(),
        }
    }

    /// The theme bound to `:root`.
    pub fn default_theme(&self) -> &Theme {
        &self.themes[self.default]
    }

    /// Looks up a theme by name.
    pub fn get(&self, name: &str) -> Result<&Theme> {
        self.themes
            .iter()
            .find(|t| t.name == name)
            .ok_or_else(|| XcssError::UnknownTheme(name.to_string()))
    }

    /// Resolves a token name (with or without `$`) to its color in a theme.
    pub fn resolve_token(&self, theme: &str, token: &str) -> Result<&RgbaColor> {
        let token: ColorToken = token.parse()?;
        self.get(theme)?
            .get_color(token)
            .ok_or_else(|| XcssError::unknown_token(token.name(), Some("colors")))
    }

    /// Theme names in registration order.
    pub fn list_themes(&self) -> Vec<&str> {
        self.themes.iter().map(|t| t.name.as_str()).collect()
    }

    /// The class that activates `theme` on an element.
    pub fn theme_class(prefix: &str, theme: &str) -> String {
        format!("{}-theme-{}", prefix, theme)
    }

    /// Serializes one custom-property block per theme.
    ///
    /// The default theme is bound to `:root` as well as to its class, so
    /// pages render correctly before any theme class is applied.
    pub fn css_text(&self, prefix: &str) -> String {
        let mut out = String::new();
        for (idx, theme) in self.themes.iter().enumerate() {
            if idx == self.default {
                out.push_str(":root,");
            }
            out.push('.');
            out.push_str(&Self::theme_class(prefix, &theme.name));
            out.push('{');
            theme.write_properties(&mut out);
            out.push('}');
        }
        out
    }
}
