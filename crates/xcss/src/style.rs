//! Declaration sets.
//!
//! A [`Style`] is the style-object of a recipe arm, a compound override or
//! an inline `css` escape hatch. It is an ordered list of items:
//!
//! - declarations: `mt: "$16"`, `xColor: "$fg3"`, `height: 350`
//! - nested selector blocks: `ul { .. }`, `"&:hover" { .. }`, `"& svg" { .. }`
//! - breakpoint blocks: `"@sm" { .. }`
//! - breakpoint ranges: applies from one breakpoint until (excluding) a
//!   later one, see [`Style::between`]
//!
//! Order matters: later declarations of the same raw property win, and
//! breakpoint blocks are emitted in breakpoint registration order.
//!
//! ```
//! use xcss::Style;
//!
//! let links = Style::new()
//!     .set("mt", "$16")
//!     .at("@sm", Style::new().set("mt", "$0"))
//!     .nest("a", Style::new()
//!         .set("xColor", "$fg3")
//!         .set("xColorOpacity", 0.7)
//!         .nest("&:hover", Style::new().set("xColorOpacity", 0.4)));
//! assert_eq!(links.items().len(), 3);
//! ```
//!
//! The [`style!`](crate::style) macro builds the same structure from a
//! literal closer to the original object syntax.

use crate::types::value::{StyleValue, normalize_alias};

/// One entry of a [`Style`].
#[derive(Clone, Debug, PartialEq)]
pub enum StyleItem {
    Declaration { property: String, value: StyleValue },
    Nested { selector: String, style: Style },
    Breakpoint { alias: String, style: Style },
    /// Applies at `from` and stops applying at `until`.
    Range {
        from: String,
        until: String,
        style: Style,
    },
}

/// An ordered declaration set.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Style {
    items: Vec<StyleItem>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a declaration. The property may be a raw CSS property in
    /// camelCase or kebab-case, a custom property, or a utility.
    pub fn set(mut self, property: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.items.push(StyleItem::Declaration {
            property: property.into(),
            value: value.into(),
        });
        self
    }

    /// Adds a nested selector block. `&` stands for the generated class;
    /// a selector without `&` targets descendants.
    pub fn nest(mut self, selector: impl Into<String>, style: Style) -> Self {
        self.items.push(StyleItem::Nested {
            selector: selector.into(),
            style,
        });
        self
    }

    /// Adds a block that only applies at a breakpoint (`"@sm"` or `"sm"`).
    pub fn at(mut self, alias: impl AsRef<str>, style: Style) -> Self {
        self.items.push(StyleItem::Breakpoint {
            alias: normalize_alias(alias.as_ref()),
            style,
        });
        self
    }

    /// Adds a block that applies from breakpoint `from` (`"initial"` for
    /// the base) up to, but not including, breakpoint `until`.
    pub fn between(mut self, from: impl AsRef<str>, until: impl AsRef<str>, style: Style) -> Self {
        self.items.push(StyleItem::Range {
            from: normalize_alias(from.as_ref()),
            until: normalize_alias(until.as_ref()),
            style,
        });
        self
    }

    /// Appends every item of `other` after this style's items.
    pub fn extend(mut self, other: Style) -> Self {
        self.items.extend(other.items);
        self
    }

    pub fn items(&self) -> &[StyleItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// A stable textual form used in canonical cache keys.
    pub fn canonical(&self) -> String {
        let mut out = String::new();
        self.write_canonical(&mut out);
        out
    }

    pub(crate) fn write_canonical(&self, out: &mut String) {
        out.push('{');
        for item in &self.items {
            match item {
                StyleItem::Declaration { property, value } => {
                    out.push_str(property);
                    out.push(':');
                    value.write_canonical(out);
                    out.push(';');
                }
                StyleItem::Nested { selector, style } => {
                    out.push_str(&format!("{:?}", selector));
                    style.write_canonical(out);
                }
                StyleItem::Breakpoint { alias, style } => {
                    out.push('@');
                    out.push_str(alias);
                    style.write_canonical(out);
                }
                StyleItem::Range { from, until, style } => {
                    out.push('@');
                    out.push_str(from);
                    out.push_str("..");
                    out.push_str(until);
                    style.write_canonical(out);
                }
            }
        }
        out.push('}');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_normalizes_alias() {
        let style = Style::new().at("@sm", Style::new().set("mt", "$0"));
        assert!(matches!(
            &style.items()[0],
            StyleItem::Breakpoint { alias, .. } if alias == "sm"
        ));
    }

    #[test]
    fn between_differs_from_at() {
        let body = Style::new().set("mt", "$0");
        let ranged = Style::new().between("@initial", "@sm", body.clone());
        let open = Style::new().at("initial", body);
        assert_eq!(ranged.canonical(), r#"{@initial..sm{mt:"$0";}}"#);
        assert_ne!(ranged.canonical(), open.canonical());
    }

    #[test]
    fn canonical_distinguishes_order() {
        let a = Style::new().set("mt", "$4").set("mb", "$2");
        let b = Style::new().set("mb", "$2").set("mt", "$4");
        assert_ne!(a.canonical(), b.canonical());
        assert_eq!(a.canonical(), a.clone().canonical());
    }

    #[test]
    fn extend_keeps_order() {
        let style = Style::new()
            .set("display", "flex")
            .extend(Style::new().set("gap", "$2"));
        assert_eq!(style.canonical(), r#"{display:"flex";gap:"$2";}"#);
    }
}
