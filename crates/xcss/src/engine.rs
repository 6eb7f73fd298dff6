//! The shared style engine.
//!
//! An [`Engine`] bundles everything that is fixed at startup: the class
//! prefix, the breakpoint registry, the theme registry and the token
//! scales. It is immutable, `Send + Sync`, and shared by every concurrent
//! render; per-request state lives in a [`RenderContext`].
//!
//! ```
//! use xcss::{Breakpoints, Engine, EngineConfig};
//! # fn main() -> xcss::Result<()> {
//! let engine = Engine::new(
//!     EngineConfig::default()
//!         .with_prefix("bs")
//!         .with_breakpoints(Breakpoints::new().with("sm", "(min-width: 640px)")?),
//! )?;
//! assert_eq!(engine.prefix(), "bs");
//! assert_eq!(engine.theme_class("light")?, "bs-theme-light");
//! # Ok(())
//! # }
//! ```

use crate::collector::Collector;
use crate::compile::{CompiledStyle, compile};
use crate::context::RenderContext;
use crate::error::{Result, XcssError};
use crate::hash::class_suffix;
use crate::recipe::Recipe;
use crate::responsive::Breakpoints;
use crate::scales::Scales;
use crate::style::Style;
use crate::types::theme::ThemeRegistry;

/// Startup configuration for an [`Engine`].
#[derive(Debug, Clone)]
pub struct EngineConfig {
    prefix: String,
    breakpoints: Breakpoints,
    themes: ThemeRegistry,
    scales: Scales,
}

impl Default for EngineConfig {
    /// Prefix `x`, the default breakpoints, the standard themes and the
    /// default scales.
    fn default() -> Self {
        Self {
            prefix: "x".to_string(),
            breakpoints: Breakpoints::default(),
            themes: ThemeRegistry::default(),
            scales: Scales::default(),
        }
    }
}

impl EngineConfig {
    /// Default configuration with custom themes.
    pub fn new(themes: ThemeRegistry) -> Self {
        Self {
            themes,
            ..Self::default()
        }
    }

    /// Builder method to set the class prefix.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Builder method to replace the breakpoints.
    pub fn with_breakpoints(mut self, breakpoints: Breakpoints) -> Self {
        self.breakpoints = breakpoints;
        self
    }

    /// Builder method to replace the themes.
    pub fn with_themes(mut self, themes: ThemeRegistry) -> Self {
        self.themes = themes;
        self
    }

    /// Builder method to replace the token scales.
    pub fn with_scales(mut self, scales: Scales) -> Self {
        self.scales = scales;
        self
    }
}

/// Immutable engine state shared across renders.
#[derive(Debug)]
pub struct Engine {
    prefix: String,
    breakpoints: Breakpoints,
    themes: ThemeRegistry,
    scales: Scales,
}

impl Engine {
    /// Validates the configuration.
    ///
    /// The prefix must be a lowercase identifier starting with a letter.
    pub fn new(config: EngineConfig) -> Result<Self> {
        let EngineConfig {
            prefix,
            breakpoints,
            themes,
            scales,
        } = config;

        let valid_prefix = prefix.starts_with(|c: char| c.is_ascii_lowercase())
            && prefix
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
        if !valid_prefix {
            return Err(XcssError::invalid_value(
                prefix,
                "class prefix must start with a lowercase letter",
            ));
        }

        log::debug!(
            "engine ready: prefix `{}`, {} breakpoints, themes {:?}",
            prefix,
            breakpoints.len(),
            themes.list_themes()
        );
        Ok(Self {
            prefix,
            breakpoints,
            themes,
            scales,
        })
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn breakpoints(&self) -> &Breakpoints {
        &self.breakpoints
    }

    pub fn themes(&self) -> &ThemeRegistry {
        &self.themes
    }

    pub fn scales(&self) -> &Scales {
        &self.scales
    }

    /// A variant-less recipe for a one-off style.
    pub fn css(&self, style: Style) -> Recipe {
        Recipe::css(style)
    }

    /// Starts a render with the default theme.
    pub fn render_context(&self) -> RenderContext<'_> {
        RenderContext::new(self)
    }

    /// The class that activates `theme`.
    pub fn theme_class(&self, theme: &str) -> Result<String> {
        self.themes.get(theme)?;
        Ok(ThemeRegistry::theme_class(&self.prefix, theme))
    }

    /// Rules that do not depend on any component: token scales on `:root`
    /// and one custom-property block per theme.
    pub fn global_css(&self) -> String {
        let mut css = self.scales.css_text();
        css.push_str(&self.themes.css_text(&self.prefix));
        css
    }

    /// The complete stylesheet for one render: the global rules followed by
    /// everything `collector` has registered.
    pub fn css_text(&self, collector: &mut Collector) -> String {
        let mut css = self.global_css();
        css.push_str(&collector.flush());
        css
    }

    pub(crate) fn class_name_for(&self, recipe: &str, key: &str) -> String {
        format!("{}-{}-{}", self.prefix, recipe, class_suffix(key))
    }

    pub(crate) fn compile(&self, style: &Style, selector: &str) -> Result<CompiledStyle> {
        compile(style, selector, &self.scales, &self.breakpoints)
    }
}
