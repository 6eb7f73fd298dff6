//! The process-wide site: configuration, engine and primitives.

use once_cell::sync::OnceCell;
use xcss::{Engine, EngineConfig, RenderContext};

use crate::config::SiteConfig;
use crate::document::Document;
use crate::error::Result;
use crate::primitives::Primitives;
use crate::themes;

static SITE: OnceCell<Site> = OnceCell::new();

/// Everything shared read-only by concurrent requests.
#[derive(Debug)]
pub struct Site {
    config: SiteConfig,
    engine: Engine,
    primitives: Primitives,
}

impl Site {
    pub fn new(config: SiteConfig) -> Result<Self> {
        let themes = themes::registry(&config.default_theme)?;
        let engine = Engine::new(
            EngineConfig::new(themes).with_prefix(config.class_prefix.clone()),
        )?;
        let primitives = Primitives::new()?;
        log::info!(
            "site ready (prefix `{}`, default theme `{}`)",
            config.class_prefix,
            config.default_theme
        );
        Ok(Self {
            config,
            engine,
            primitives,
        })
    }

    /// The site built from [`SiteConfig::default`], initialized on first use.
    pub fn global() -> Result<&'static Site> {
        SITE.get_or_try_init(|| Site::new(SiteConfig::default()))
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn primitives(&self) -> &Primitives {
        &self.primitives
    }

    /// A fresh context for one request, using `theme` when given.
    pub fn render_context(&self, theme: Option<&str>) -> Result<RenderContext<'_>> {
        let cx = self.engine.render_context();
        Ok(match theme {
            Some(theme) => cx.with_theme(theme)?,
            None => cx,
        })
    }

    pub fn document(&self) -> Document<'_> {
        Document::new(&self.config)
    }
}
