//! Token references inside declaration values.
//!
//! A value is a sequence of literal text and references:
//!
//! - `$name`: token `name` in the scale implied by the property
//! - `$scale$name`: token `name` in an explicit scale
//! - `-$name`: the negated token
//!
//! A `-` that is not directly followed by `$` is ordinary text, so
//! `border-box` and `calc(100% - $4)` both parse.

use nom::{
    IResult,
    branch::alt,
    bytes::complete::{is_not, tag, take_while1},
    character::complete::char,
    combinator::{map, not, opt, recognize},
    multi::{many0, many1_count},
    sequence::{preceded, terminated},
};

/// A `$token` reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenRef<'a> {
    pub negative: bool,
    pub scale: Option<&'a str>,
    pub name: &'a str,
}

/// One piece of a declaration value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Literal(&'a str),
    Token(TokenRef<'a>),
}

/// Parses a token or scale name (`fg1`, `2xl`, `fontSizes`).
pub fn parse_token_name(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_ascii_alphanumeric() || c == '_' || c == '.')(input)
}

/// Parses `$name`, `$scale$name`, optionally preceded by `-`.
pub fn parse_token_ref(input: &str) -> IResult<&str, TokenRef<'_>> {
    let (input, negative) = map(opt(char('-')), |sign| sign.is_some())(input)?;
    let (input, first) = preceded(char('$'), parse_token_name)(input)?;
    let (input, second) = opt(preceded(char('$'), parse_token_name))(input)?;

    let token = match second {
        Some(name) => TokenRef {
            negative,
            scale: Some(first),
            name,
        },
        None => TokenRef {
            negative,
            scale: None,
            name: first,
        },
    };
    Ok((input, token))
}

/// Parses a run of text containing no token reference.
fn parse_literal(input: &str) -> IResult<&str, &str> {
    recognize(many1_count(alt((
        is_not("-$"),
        terminated(tag("-"), not(char('$'))),
    ))))(input)
}

/// Parses a whole value into segments. Stops (without error) at a `$`
/// that does not begin a reference; callers check for leftover input.
pub fn parse_value_segments(input: &str) -> IResult<&str, Vec<Segment<'_>>> {
    many0(alt((
        map(parse_token_ref, Segment::Token),
        map(parse_literal, Segment::Literal),
    )))(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_segments() {
        let (rest, segments) = parse_value_segments("1px solid $border").unwrap();
        assert_eq!(rest, "");
        assert_eq!(
            segments,
            vec![
                Segment::Literal("1px solid "),
                Segment::Token(TokenRef {
                    negative: false,
                    scale: None,
                    name: "border"
                }),
            ]
        );
    }

    #[test]
    fn test_two_tokens() {
        let (rest, segments) = parse_value_segments("$2 $4").unwrap();
        assert_eq!(rest, "");
        assert_eq!(segments.len(), 3);
    }

    #[test]
    fn test_stops_at_bare_dollar() {
        let (rest, _) = parse_value_segments("a $").unwrap();
        assert_eq!(rest, "$");
    }
}
