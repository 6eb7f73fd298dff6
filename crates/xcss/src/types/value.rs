//! Declaration values.

use std::fmt::Write;

/// The value side of a declaration.
///
/// Text values may contain `$token` references; numbers get a `px` unit
/// unless the property is unitless. A responsive value maps breakpoint
/// aliases to values, with `initial` meaning "no media condition".
#[derive(Clone, Debug, PartialEq)]
pub enum StyleValue {
    Text(String),
    Number(f64),
    Responsive(Vec<(String, StyleValue)>),
}

impl StyleValue {
    /// Builds a responsive value from `(alias, value)` pairs.
    ///
    /// Aliases may be written with or without the leading `@`.
    ///
    /// ```
    /// use xcss::StyleValue;
    ///
    /// let size = StyleValue::responsive([("@initial", "$sm"), ("@md", "$lg")]);
    /// assert!(matches!(size, StyleValue::Responsive(ref arms) if arms[1].0 == "md"));
    /// ```
    pub fn responsive<K, V>(arms: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: Into<StyleValue>,
    {
        StyleValue::Responsive(
            arms.into_iter()
                .map(|(alias, value)| (normalize_alias(alias.as_ref()), value.into()))
                .collect(),
        )
    }

    pub(crate) fn write_canonical(&self, out: &mut String) {
        match self {
            StyleValue::Text(text) => {
                let _ = write!(out, "{:?}", text);
            }
            StyleValue::Number(n) => out.push_str(&format_number(*n)),
            StyleValue::Responsive(arms) => {
                out.push('{');
                for (alias, value) in arms {
                    out.push('@');
                    out.push_str(alias);
                    out.push(':');
                    value.write_canonical(out);
                    out.push(';');
                }
                out.push('}');
            }
        }
    }
}

/// Strips the optional `@` sigil from a breakpoint alias.
pub(crate) fn normalize_alias(alias: &str) -> String {
    alias.trim().trim_start_matches('@').to_string()
}

/// Formats a number without a trailing `.0`.
pub(crate) fn format_number(n: f64) -> String {
    if n == 0.0 {
        return "0".to_string();
    }
    format!("{}", n)
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        StyleValue::Text(value.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        StyleValue::Text(value)
    }
}

impl From<&String> for StyleValue {
    fn from(value: &String) -> Self {
        StyleValue::Text(value.clone())
    }
}

macro_rules! number_value {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for StyleValue {
                fn from(value: $ty) -> Self {
                    StyleValue::Number(value as f64)
                }
            }
        )*
    };
}

number_value!(f64, f32, i32, i64, u8, u16, u32, u64, usize);
