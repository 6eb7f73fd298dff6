//! Render context for one server response.
//!
//! The `RenderContext` is created once per request and passed to every
//! component rendered for it. It:
//! - borrows the shared [`Engine`]
//! - owns the request's [`Collector`]
//! - carries the active theme
//!
//! When the page is rendered, [`RenderContext::css_text`] produces the
//! stylesheet for the document head.

use crate::collector::Collector;
use crate::engine::Engine;
use crate::error::Result;
use crate::recipe::Recipe;
use crate::style::Style;
use crate::types::theme::ThemeRegistry;
use crate::variant::Selection;

/// Request-scoped style state.
#[derive(Debug)]
pub struct RenderContext<'e> {
    engine: &'e Engine,
    collector: Collector,
    theme: String,
}

impl<'e> RenderContext<'e> {
    /// Create a context using the engine's default theme.
    pub fn new(engine: &'e Engine) -> Self {
        Self {
            engine,
            collector: Collector::new(),
            theme: engine.themes().default_theme().name.clone(),
        }
    }

    /// Switch the active theme. Fails for an unregistered theme.
    pub fn with_theme(mut self, theme: &str) -> Result<Self> {
        self.engine.themes().get(theme)?;
        self.theme = theme.to_string();
        Ok(self)
    }

    pub fn engine(&self) -> &'e Engine {
        self.engine
    }

    /// Name of the active theme.
    pub fn theme(&self) -> &str {
        &self.theme
    }

    /// The class that activates the active theme, for the `<html>` element.
    pub fn theme_class(&self) -> String {
        ThemeRegistry::theme_class(self.engine.prefix(), &self.theme)
    }

    /// Resolve a recipe invocation to its class name.
    pub fn class(&mut self, recipe: &Recipe, selection: &Selection) -> Result<String> {
        recipe
            .class_name(self.engine, &mut self.collector, selection)
            .inspect_err(|err| log::warn!("failed to resolve `{}`: {}", recipe.name(), err))
    }

    /// Resolve a one-off style to its class name.
    pub fn css(&mut self, style: Style) -> Result<String> {
        let recipe = self.engine.css(style);
        self.class(&recipe, &Selection::new())
    }

    pub fn collector(&self) -> &Collector {
        &self.collector
    }

    /// The stylesheet for everything rendered so far.
    pub fn css_text(&mut self) -> String {
        self.engine.css_text(&mut self.collector)
    }

    /// Drop all collected styles, keeping engine and theme.
    pub fn reset(&mut self) {
        self.collector.reset();
    }

    /// Give up the context, keeping its collected styles.
    pub fn into_collector(self) -> Collector {
        self.collector
    }
}
