//! Error types for style resolution.
//!
//! Every variant describes a static mismatch between a component and the
//! style configuration (a missing token, an undeclared variant, a clashing
//! breakpoint). None of them is transient, so callers fix the call site
//! rather than retry.

use thiserror::Error;

use crate::types::color::ColorParseError;

/// Errors that can occur while building or resolving styles.
///
/// # Examples
///
/// ```rust
/// use xcss::{Breakpoints, XcssError};
///
/// let result = Breakpoints::new()
///     .with("sm", "(min-width: 640px)")
///     .and_then(|bp| bp.with("small", "(min-width:640px)"));
/// assert!(matches!(result, Err(XcssError::DuplicateBreakpoint { .. })));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum XcssError {
    /// A `$token` reference (or a theme lookup) named a token that does not exist.
    ///
    /// `scale` is the scale the token was looked up in, when one applies.
    #[error("Unknown token `{token}`{}", scale_suffix(.scale))]
    UnknownToken {
        token: String,
        scale: Option<String>,
    },

    /// A theme does not define a token every theme must define.
    #[error("Theme `{theme}` does not define token `{token}`")]
    MissingThemeToken { theme: String, token: String },

    /// A selection or recipe definition referenced an undeclared variant group or value.
    #[error("Invalid variant for recipe `{recipe}`: {group}={value}")]
    InvalidVariant {
        recipe: String,
        group: String,
        value: String,
    },

    /// Two breakpoints share an alias or a media condition.
    #[error("Duplicate breakpoint `{alias}`: {reason}")]
    DuplicateBreakpoint { alias: String, reason: String },

    /// The `initial` alias cannot be registered; it always means "no condition".
    #[error("Breakpoint alias `{0}` is reserved")]
    ReservedBreakpoint(String),

    /// A responsive value or `@alias` block named an unregistered breakpoint.
    #[error("Unknown breakpoint `{0}`")]
    UnknownBreakpoint(String),

    /// A theme name was not found in the registry.
    #[error("Unknown theme `{0}`")]
    UnknownTheme(String),

    /// Two themes were registered under the same name.
    #[error("Duplicate theme `{0}`")]
    DuplicateTheme(String),

    /// Two different canonical keys produced the same class name.
    #[error("Class `{class_name}` already stands for `{existing}`, not `{key}`")]
    ClassCollision {
        class_name: String,
        existing: String,
        key: String,
    },

    /// A declaration value or media condition could not be parsed.
    #[error("Invalid value `{value}`: {reason}")]
    InvalidValue { value: String, reason: String },

    /// A literal color could not be parsed.
    #[error("Invalid color: {0}")]
    InvalidColor(#[from] ColorParseError),
}

impl XcssError {
    pub(crate) fn unknown_token(token: impl Into<String>, scale: Option<&str>) -> Self {
        Self::UnknownToken {
            token: token.into(),
            scale: scale.map(str::to_string),
        }
    }

    pub(crate) fn invalid_value(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            value: value.into(),
            reason: reason.into(),
        }
    }
}

fn scale_suffix(scale: &Option<String>) -> String {
    scale
        .as_deref()
        .map(|s| format!(" in scale `{s}`"))
        .unwrap_or_default()
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, XcssError>;
