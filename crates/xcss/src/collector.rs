//! Request-scoped style collection.
//!
//! A [`Collector`] records every resolved style entry of one render pass,
//! de-duplicated by canonical key and kept in first-registration order.
//! A class name stands for exactly one key; a second key hashing to the same
//! class is rejected.
//! [`Collector::flush`] serializes them for the document head.
//!
//! A collector is never shared between independent renders: each request
//! owns one (usually through a [`RenderContext`]) so concurrent renders can
//! neither see nor corrupt each other's entries.
//!
//! [`RenderContext`]: crate::RenderContext

use std::collections::HashMap;

use crate::error::{Result, XcssError};

/// One resolved style: canonical key, class name and serialized rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedEntry {
    pub key: String,
    pub class_name: String,
    pub css: String,
}

/// Ordered, de-duplicated style entries for one render.
#[derive(Debug, Default)]
pub struct Collector {
    entries: Vec<ResolvedEntry>,
    index: HashMap<String, usize>,
    by_class: HashMap<String, usize>,
    /// Text of the last flush; valid until the next registration.
    flushed: Option<String>,
}

impl Collector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry unless one with the same key exists.
    ///
    /// Returns `true` when the entry was new. Fails with
    /// [`XcssError::ClassCollision`] when its class name is already
    /// registered under another key; the collector is left unchanged.
    pub fn register(&mut self, entry: ResolvedEntry) -> Result<bool> {
        if self.index.contains_key(&entry.key) {
            return Ok(false);
        }
        if let Some(&idx) = self.by_class.get(&entry.class_name) {
            log::error!("class `{}` collides", entry.class_name);
            return Err(XcssError::ClassCollision {
                existing: self.entries[idx].key.clone(),
                class_name: entry.class_name,
                key: entry.key,
            });
        }
        log::debug!("registering `{}`", entry.class_name);
        let idx = self.entries.len();
        self.index.insert(entry.key.clone(), idx);
        self.by_class.insert(entry.class_name.clone(), idx);
        self.entries.push(entry);
        self.flushed = None;
        Ok(true)
    }

    pub fn get(&self, key: &str) -> Option<&ResolvedEntry> {
        self.index.get(key).map(|&idx| &self.entries[idx])
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Entries in first-registration order.
    pub fn entries(&self) -> &[ResolvedEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serializes all entries in first-registration order.
    ///
    /// Flushing does not consume the entries; calling it again without new
    /// registrations returns byte-identical text.
    pub fn flush(&mut self) -> String {
        if let Some(text) = &self.flushed {
            return text.clone();
        }
        let text: String = self.entries.iter().map(|entry| entry.css.as_str()).collect();
        log::debug!(
            "flushed {} entries ({} bytes)",
            self.entries.len(),
            text.len()
        );
        self.flushed = Some(text.clone());
        text
    }

    /// Clears all entries for the next independent render.
    pub fn reset(&mut self) {
        log::debug!("collector reset ({} entries dropped)", self.entries.len());
        self.entries.clear();
        self.index.clear();
        self.by_class.clear();
        self.flushed = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(key: &str, css: &str) -> ResolvedEntry {
        ResolvedEntry {
            key: key.to_string(),
            class_name: format!("x-{}", key),
            css: css.to_string(),
        }
    }

    #[test]
    fn register_is_idempotent_by_key() {
        let mut collector = Collector::new();
        assert!(collector.register(entry("a", ".x-a{color:red}")).unwrap());
        assert!(!collector.register(entry("a", ".x-a{color:blue}")).unwrap());
        assert_eq!(collector.len(), 1);
        assert_eq!(collector.flush(), ".x-a{color:red}");
    }

    #[test]
    fn flush_is_stable_and_ordered() {
        let mut collector = Collector::new();
        collector.register(entry("b", ".x-b{}")).unwrap();
        collector.register(entry("a", ".x-a{}")).unwrap();
        let first = collector.flush();
        assert_eq!(first, ".x-b{}.x-a{}");
        assert_eq!(collector.flush(), first);

        collector.register(entry("c", ".x-c{}")).unwrap();
        assert_eq!(collector.flush(), ".x-b{}.x-a{}.x-c{}");
    }

    #[test]
    fn same_class_for_another_key_is_rejected() {
        let mut collector = Collector::new();
        collector.register(entry("a", ".x-a{color:red}")).unwrap();
        let clash = ResolvedEntry {
            key: "b".to_string(),
            class_name: "x-a".to_string(),
            css: ".x-a{color:blue}".to_string(),
        };
        assert_eq!(
            collector.register(clash).unwrap_err(),
            XcssError::ClassCollision {
                class_name: "x-a".into(),
                existing: "a".into(),
                key: "b".into(),
            }
        );
        assert_eq!(collector.len(), 1);
        assert!(!collector.contains("b"));
        assert_eq!(collector.flush(), ".x-a{color:red}");
    }

    #[test]
    fn reset_clears_everything() {
        let mut collector = Collector::new();
        collector.register(entry("a", ".x-a{}")).unwrap();
        collector.flush();
        collector.reset();
        assert!(collector.is_empty());
        assert!(!collector.contains("a"));
        assert_eq!(collector.flush(), "");
    }
}
