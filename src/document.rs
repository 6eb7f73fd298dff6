//! The HTML shell every page is rendered into.
//!
//! The collected stylesheet is written into `<head>` ahead of the body, so
//! the first paint is already styled, and `<html>` carries the theme class
//! that binds the color custom properties.

use std::fmt::Write;

use xcss::RenderContext;

use crate::config::SiteConfig;

const FONT_PRELOAD: &str = r#"<link rel="preload" href="/fonts/Inter-roman-latin.var.woff2" as="font" type="font/woff2" crossorigin>"#;

const ICONS: &[&str] = &[
    r#"<link rel="shortcut icon" href="favicon.ico" type="image/x-icon">"#,
    r#"<link rel="apple-touch-icon" sizes="180x180" href="/apple-touch-icon.png">"#,
    r#"<link rel="icon" type="image/png" sizes="32x32" href="/favicon-32x32.png">"#,
    r#"<link rel="icon" type="image/png" sizes="16x16" href="/favicon-16x16.png">"#,
    r#"<link rel="manifest" href="/site.webmanifest">"#,
];

/// A page ready to be serialized.
#[derive(Debug, Clone)]
pub struct Document<'a> {
    config: &'a SiteConfig,
    title: Option<String>,
    body: String,
}

impl<'a> Document<'a> {
    pub fn new(config: &'a SiteConfig) -> Self {
        Self {
            config,
            title: None,
            body: String::new(),
        }
    }

    /// Sets the page title, rendered as `{title} | BoringStonks`.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the body markup. It is inserted as is.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Serializes the page, draining the stylesheet from `cx`.
    ///
    /// Call this after every component has been rendered into the body;
    /// classes requested later are missing from the stylesheet.
    pub fn render(self, cx: &mut RenderContext<'_>) -> String {
        let css = cx.css_text();
        let title = match &self.title {
            Some(title) => format!("{} | BoringStonks", title),
            None => "BoringStonks".to_string(),
        };

        let mut out = String::with_capacity(css.len() + self.body.len() + 1024);
        out.push_str("<!DOCTYPE html>");
        // Writing into a String cannot fail.
        let _ = write!(
            out,
            r#"<html lang="{}" class="{}"><head><meta charset="utf-8">"#,
            escape(&self.config.lang),
            cx.theme_class()
        );
        let _ = write!(out, "<title>{}</title>", escape(&title));
        out.push_str(FONT_PRELOAD);
        let _ = write!(out, r#"<style id="xcss">{}</style>"#, css);
        for icon in ICONS {
            out.push_str(icon);
        }
        out.push_str("</head><body>");
        out.push_str(&self.body);
        out.push_str("</body></html>");

        log::debug!(
            "rendered document `{}` ({} bytes of css, theme `{}`)",
            title,
            css.len(),
            cx.theme()
        );
        out
    }
}

/// Escapes text for use in element content and quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(escape(r#"<a href="x">Tom & Jerry's</a>"#), "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;");
        assert_eq!(escape("plain"), "plain");
    }
}
