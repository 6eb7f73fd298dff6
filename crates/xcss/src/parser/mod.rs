//! Small parsers used while compiling styles.
//!
//! Style objects are built in Rust, so there is no stylesheet grammar to
//! parse. What remains textual is:
//!
//! - declaration values, which may embed `$token` references
//!   (`"$4"`, `"-$space$2"`, `"1px solid $border"`)
//! - breakpoint media conditions (`"(min-width: 640px)"`)
//! - nested selectors (`"&:hover"`, `"ul, ol"`, `"& svg"`)
//!
//! ## Submodules
//!
//! - [`values`]: `$token` segments inside a value
//! - [`media`]: media condition validation and normalization
//! - [`selectors`]: selector lists and `&` parent substitution
//!
//! ## Example
//!
//! ```rust
//! use xcss::parser::{Segment, TokenRef, value_segments};
//!
//! let segments = value_segments("calc(100% - $4)").unwrap();
//! assert_eq!(segments[0], Segment::Literal("calc(100% - "));
//! assert_eq!(
//!     segments[1],
//!     Segment::Token(TokenRef { negative: false, scale: None, name: "4" })
//! );
//! ```

pub mod media;
pub mod selectors;
pub mod values;

pub use crate::parser::media::MediaTerm;
pub use crate::parser::selectors::{combine_selectors, split_selector_list};
pub use crate::parser::values::{Segment, TokenRef};

use crate::error::{Result, XcssError};

use nom::combinator::all_consuming;

/// Splits a declaration value into literal text and token references.
///
/// Fails with [`XcssError::InvalidValue`] on a `$` that does not start a
/// well-formed reference.
pub fn value_segments(input: &str) -> Result<Vec<Segment<'_>>> {
    match all_consuming(values::parse_value_segments)(input) {
        Ok((_, segments)) => Ok(segments),
        Err(_) => Err(XcssError::invalid_value(
            input,
            "expected `$token` or `$scale$token` after `$`",
        )),
    }
}

/// Validates a media condition and returns its normalized form.
///
/// Whitespace is collapsed and feature names lowercased, so
/// `"(min-width:640px)"` and `"( min-width: 640px )"` normalize to the
/// same `"(min-width: 640px)"`.
pub fn media_condition(input: &str) -> Result<String> {
    match all_consuming(media::parse_media_query)(input.trim()) {
        Ok((_, terms)) => Ok(terms
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" and ")),
        Err(_) => Err(XcssError::invalid_value(
            input,
            "expected media features like `(min-width: 640px)` joined by `and`",
        )),
    }
}

/// Negates a normalized media condition for use inside a larger condition.
///
/// `(min-width: 640px)` becomes `not (min-width: 640px)`; a multi-term
/// condition is parenthesized first. A condition with a media type cannot be
/// negated this way and fails with [`XcssError::InvalidValue`].
pub fn negate_media_condition(condition: &str) -> Result<String> {
    let terms = match all_consuming(media::parse_media_query)(condition.trim()) {
        Ok((_, terms)) => terms,
        Err(_) => return Err(XcssError::invalid_value(condition, "malformed media condition")),
    };
    if terms.iter().any(|term| matches!(term, MediaTerm::Type(_))) {
        return Err(XcssError::invalid_value(
            condition,
            "a media type cannot be excluded from a breakpoint range",
        ));
    }
    let joined = terms
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" and ");
    Ok(if terms.len() == 1 {
        format!("not {}", joined)
    } else {
        format!("not ({})", joined)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_without_tokens_is_one_literal() {
        assert_eq!(
            value_segments("1px solid").unwrap(),
            vec![Segment::Literal("1px solid")]
        );
        assert!(value_segments("").unwrap().is_empty());
    }

    #[test]
    fn test_explicit_scale_and_negative() {
        let segments = value_segments("-$space$2").unwrap();
        assert_eq!(
            segments,
            vec![Segment::Token(TokenRef {
                negative: true,
                scale: Some("space"),
                name: "2"
            })]
        );
    }

    #[test]
    fn test_hyphen_literal_kept() {
        let segments = value_segments("border-box").unwrap();
        assert_eq!(segments, vec![Segment::Literal("border-box")]);
    }

    #[test]
    fn test_dangling_dollar_is_invalid() {
        assert!(matches!(
            value_segments("$ 4"),
            Err(XcssError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_media_condition_normalizes() {
        assert_eq!(
            media_condition("(min-width:640px)").unwrap(),
            "(min-width: 640px)"
        );
        assert_eq!(
            media_condition("screen  and ( Min-Width :  40em )").unwrap(),
            "screen and (min-width: 40em)"
        );
        assert_eq!(
            media_condition("(prefers-reduced-motion)").unwrap(),
            "(prefers-reduced-motion)"
        );
    }

    #[test]
    fn test_negate_media_condition() {
        assert_eq!(
            negate_media_condition("(min-width: 640px)").unwrap(),
            "not (min-width: 640px)"
        );
        assert_eq!(
            negate_media_condition("(min-width: 640px) and (hover)").unwrap(),
            "not ((min-width: 640px) and (hover))"
        );
        assert!(negate_media_condition("screen and (min-width: 640px)").is_err());
    }

    #[test]
    fn test_media_condition_rejects_garbage() {
        assert!(media_condition("min-width: 640px").is_err());
        assert!(media_condition("(min-width: 640px").is_err());
        assert!(media_condition("").is_err());
    }
}
