//! Semantic color tokens.
//!
//! Components never name concrete colors. They refer to a [`ColorToken`]
//! (`$fg1`, `$brand`, ...) and every registered theme binds each token to a
//! value. Because the set is a closed enum, a theme that forgets a token is
//! caught when the registry is built instead of at render time.

use std::fmt;
use std::str::FromStr;

use crate::error::XcssError;

/// Semantic color token shared by every theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ColorToken {
    /// Primary text.
    Fg1,
    /// Secondary text (summaries, captions).
    Fg2,
    /// Tertiary text (footer links, credits).
    Fg3,
    /// Page background.
    Bg1,
    /// Raised surfaces (cards, code blocks).
    Bg2,
    /// Overlays and hover fills.
    Bg3,
    /// Brand color (logo, link hover).
    Brand,
    /// Accent color (secondary highlight).
    Accent,
    /// Hairlines and separators.
    Border,
    /// Text selection background.
    Selection,
}

impl ColorToken {
    /// Every token, in serialization order.
    pub const ALL: [ColorToken; 10] = [
        ColorToken::Fg1,
        ColorToken::Fg2,
        ColorToken::Fg3,
        ColorToken::Bg1,
        ColorToken::Bg2,
        ColorToken::Bg3,
        ColorToken::Brand,
        ColorToken::Accent,
        ColorToken::Border,
        ColorToken::Selection,
    ];

    /// The token name as written in styles (without the `$` sigil).
    pub const fn name(self) -> &'static str {
        match self {
            ColorToken::Fg1 => "fg1",
            ColorToken::Fg2 => "fg2",
            ColorToken::Fg3 => "fg3",
            ColorToken::Bg1 => "bg1",
            ColorToken::Bg2 => "bg2",
            ColorToken::Bg3 => "bg3",
            ColorToken::Brand => "brand",
            ColorToken::Accent => "accent",
            ColorToken::Border => "border",
            ColorToken::Selection => "selection",
        }
    }

    /// The custom property holding the serialized color.
    pub fn var_name(self) -> String {
        format!("--colors-{}", self.name())
    }

    /// The custom property holding the bare `r, g, b` channels.
    pub fn channels_var_name(self) -> String {
        format!("--colors-{}-rgb", self.name())
    }

    /// The custom property holding the alpha channel, `1` for opaque colors.
    pub fn alpha_var_name(self) -> String {
        format!("--colors-{}-alpha", self.name())
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorToken {
    type Err = XcssError;

    /// Accepts the token name with or without its `$` sigil.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().trim_start_matches('$');
        ColorToken::ALL
            .into_iter()
            .find(|token| token.name() == name)
            .ok_or_else(|| XcssError::unknown_token(name, Some("colors")))
    }
}
