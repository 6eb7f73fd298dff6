//! # boringstonks
//!
//! The styling layer of the BoringStonks blog. It wires the [`xcss`]
//! engine to the site's themes, exposes the `text`, `container` and
//! `stack` primitives pages are built from, and renders the HTML shell
//! that carries each response's stylesheet.
//!
//! ```
//! use boringstonks::primitives::{ContainerProps, ContainerSize};
//! use boringstonks::{Site, SiteConfig};
//! use xcss::style;
//!
//! # fn main() -> boringstonks::Result<()> {
//! let site = Site::new(SiteConfig::default())?;
//! let mut cx = site.render_context(Some("light"))?;
//!
//! let column = site
//!     .primitives()
//!     .container(&mut cx, ContainerProps::new().size(ContainerSize::Small))?;
//! let footer = cx.css(style! { pt: "$32", pb: "$8", overflow: "hidden" })?;
//!
//! let html = site
//!     .document()
//!     .with_title("About")
//!     .with_body(format!(r#"<div class="{}"><footer class="{}"></footer></div>"#, column, footer))
//!     .render(&mut cx);
//! assert!(html.starts_with(r#"<!DOCTYPE html><html lang="en" class="x-theme-light">"#));
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod document;
pub mod error;
pub mod log_init;
pub mod primitives;
pub mod site;
pub mod themes;

pub use config::{Avatar, SiteConfig};
pub use document::Document;
pub use error::{Result, SiteError};
pub use log_init::init_logger;
pub use site::Site;
