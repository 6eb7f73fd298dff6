//! # xcss - typed style recipes for server-rendered pages
//!
//! `xcss` turns style objects written in Rust into deterministic,
//! deduplicated CSS classes, and collects the rules a page uses into a
//! single stylesheet for the document head.
//!
//! - **Recipes**: named styles with variant groups, defaults, compound
//!   variants, responsive overrides and an inline `css` escape hatch
//! - **Tokens**: `$token` references resolve to CSS custom properties, so
//!   theme switches never change a class name
//! - **Responsive values**: any value or variant choice can be keyed by
//!   breakpoint (`@initial`, `@sm`, `@md`, ...)
//! - **Collection**: a request-scoped collector serializes exactly the
//!   rules one render used
//!
//! ## Quick Start
//!
//! ```rust
//! use xcss::{Conditions, Engine, EngineConfig, Recipe, Responsive, Selection, style};
//!
//! # fn main() -> xcss::Result<()> {
//! let engine = Engine::new(EngineConfig::default())?;
//!
//! let button = Recipe::builder("button")
//!     .base(style! {
//!         px: "$4",
//!         xColor: "$fg1",
//!         "&:hover": { xColorOpacity: 0.7 },
//!     })
//!     .variant("tone", "brand", style! { xBg: "$brand" })
//!     .variant("tone", "plain", style! { xBg: "$bg2" })
//!     .variant("wide", true, style! { w: "$full" })
//!     .variant("wide", false, style! {})
//!     .default_variant("tone", "plain")
//!     .compound(
//!         Conditions::new().when("tone", "brand").when("wide", true),
//!         style! { fontWeight: "$bold" },
//!     )
//!     .build()?;
//!
//! let mut cx = engine.render_context();
//! let class = cx.class(
//!     &button,
//!     &Selection::new()
//!         .with("tone", "brand")
//!         .choose("wide", Responsive::at([("initial", false), ("@md", true)])),
//! )?;
//! assert!(class.starts_with("x-button-"));
//!
//! let stylesheet = cx.css_text();
//! assert!(stylesheet.contains("@media (min-width: 768px)"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`types`]: colors, color tokens, themes and declaration values
//! - [`style`]: declaration sets
//! - [`scales`]: theme-independent token scales
//! - [`utils`]: utilities, token resolution and units
//! - [`responsive`]: breakpoints and responsive values
//! - [`recipe`] / [`variant`]: recipes, variant values and selections
//! - [`collector`] / [`context`] / [`engine`]: collection and serialization
//! - [`parser`]: value, media condition and selector parsing
//! - [`error`]: error types

extern crate self as xcss;

pub mod collector;
pub mod compile;
pub mod context;
pub mod engine;
pub mod error;
pub mod hash;
pub mod parser;
pub mod recipe;
pub mod responsive;
pub mod scales;
pub mod style;
pub mod types;
pub mod utils;
pub mod variant;

pub use collector::{Collector, ResolvedEntry};
pub use compile::{CompiledStyle, CssRule};
pub use context::RenderContext;
pub use engine::{Engine, EngineConfig};
pub use error::{Result, XcssError};
pub use recipe::{Conditions, Recipe, RecipeBuilder};
pub use responsive::{Breakpoint, Breakpoints};
pub use scales::Scales;
pub use style::{Style, StyleItem};
pub use types::{ColorParseError, ColorToken, RgbaColor, StyleValue, Theme, ThemeRegistry};
pub use variant::{Responsive, Selection, Variant, VariantEnum};

pub use xcss_macros::{Variant, style};
