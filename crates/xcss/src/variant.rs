//! Variant values and selections.
//!
//! A recipe declares variant groups (`size`, `weight`, `grow`) whose arms
//! are keyed by strings. Callers pick arms through a [`Selection`], either
//! with dynamic strings or with typed values implementing [`Variant`]:
//!
//! ```
//! use xcss::{Responsive, Selection, Variant};
//!
//! #[derive(Clone, Copy, Variant)]
//! enum Size {
//!     Small,
//!     Base,
//!     #[variant(rename = "2xl")]
//!     TwoXl,
//! }
//!
//! assert_eq!(Size::TwoXl.variant_key(), "2xl");
//!
//! let selection = Selection::new()
//!     .with("grow", true)
//!     .choose("size", Responsive::at([("initial", Size::Small), ("@md", Size::Base)]));
//! assert_eq!(selection.len(), 2);
//! ```

use std::borrow::Cow;

use crate::style::Style;
use crate::types::value::normalize_alias;

/// A value that selects a variant arm.
///
/// Derive it for enums with `#[derive(Variant)]`; keys are the kebab-case
/// variant names unless renamed with `#[variant(rename = "..")]`.
pub trait Variant {
    fn variant_key(&self) -> Cow<'_, str>;
}

/// A fieldless enum whose variants can be enumerated, so a recipe can
/// declare one arm per variant.
pub trait VariantEnum: Variant + Copy + 'static {
    const ALL: &'static [Self];
}

impl Variant for &str {
    fn variant_key(&self) -> Cow<'_, str> {
        Cow::Borrowed(*self)
    }
}

impl Variant for String {
    fn variant_key(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }
}

impl Variant for &String {
    fn variant_key(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }
}

impl Variant for bool {
    fn variant_key(&self) -> Cow<'_, str> {
        Cow::Borrowed(if *self { "true" } else { "false" })
    }
}

/// A fixed value or a breakpoint-keyed map of values.
#[derive(Debug, Clone, PartialEq)]
pub enum Responsive<T> {
    Fixed(T),
    /// `(alias, value)` pairs; `initial` (or `@initial`) is the base.
    At(Vec<(String, T)>),
}

impl<T> Responsive<T> {
    /// Builds a breakpoint-keyed value. Aliases may carry a leading `@`.
    pub fn at<K: AsRef<str>>(arms: impl IntoIterator<Item = (K, T)>) -> Self {
        Responsive::At(
            arms.into_iter()
                .map(|(alias, value)| (normalize_alias(alias.as_ref()), value))
                .collect(),
        )
    }
}

impl<T> From<T> for Responsive<T> {
    fn from(value: T) -> Self {
        Responsive::Fixed(value)
    }
}

/// A choice for one variant group, reduced to arm keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Choice {
    Fixed(String),
    At(Vec<(String, String)>),
}

/// The arguments of one recipe invocation: variant choices plus an
/// optional inline `css` override.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    choices: Vec<(String, Choice)>,
    css: Option<Style>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Chooses a fixed arm for `group`.
    pub fn with(mut self, group: &str, value: impl Variant) -> Self {
        self.set(group, Choice::Fixed(value.variant_key().into_owned()));
        self
    }

    /// Chooses arms per breakpoint for `group`.
    pub fn with_responsive<K, V>(mut self, group: &str, arms: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: Variant,
    {
        let arms = arms
            .into_iter()
            .map(|(alias, value)| {
                (
                    normalize_alias(alias.as_ref()),
                    value.variant_key().into_owned(),
                )
            })
            .collect();
        self.set(group, Choice::At(arms));
        self
    }

    /// Chooses a typed, possibly responsive value for `group`.
    pub fn choose<V: Variant>(self, group: &str, value: Responsive<V>) -> Self {
        match value {
            Responsive::Fixed(value) => self.with(group, value),
            Responsive::At(arms) => self.with_responsive(group, arms),
        }
    }

    /// Like [`choose`](Self::choose), doing nothing for `None`.
    pub fn choose_opt<V: Variant>(self, group: &str, value: Option<Responsive<V>>) -> Self {
        match value {
            Some(value) => self.choose(group, value),
            None => self,
        }
    }

    /// Adds inline declarations applied after everything the recipe
    /// contributes.
    pub fn css(mut self, style: Style) -> Self {
        self.css = Some(match self.css.take() {
            Some(existing) => existing.extend(style),
            None => style,
        });
        self
    }

    pub fn len(&self) -> usize {
        self.choices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.choices.is_empty() && self.css.is_none()
    }

    pub(crate) fn choices(&self) -> &[(String, Choice)] {
        &self.choices
    }

    pub(crate) fn inline_css(&self) -> Option<&Style> {
        self.css.as_ref().filter(|style| !style.is_empty())
    }

    fn set(&mut self, group: &str, choice: Choice) {
        self.choices.retain(|(name, _)| name != group);
        self.choices.push((group.to_string(), choice));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_choice_replaces_earlier() {
        let selection = Selection::new().with("size", "sm").with("size", "lg");
        assert_eq!(
            selection.choices(),
            &[("size".to_string(), Choice::Fixed("lg".into()))]
        );
    }

    #[test]
    fn responsive_aliases_are_normalized() {
        let selection = Selection::new().with_responsive("dir", [("@initial", "col"), ("@sm", "row")]);
        assert_eq!(
            selection.choices()[0].1,
            Choice::At(vec![
                ("initial".into(), "col".into()),
                ("sm".into(), "row".into())
            ])
        );
    }

    #[test]
    fn empty_css_is_ignored() {
        let selection = Selection::new().css(Style::new());
        assert!(selection.inline_css().is_none());
    }
}
