//! Media conditions for breakpoints.
//!
//! Accepted grammar (a deliberately small subset of media queries):
//!
//! ```text
//! query   := term ( "and" term )*
//! term    := media-type | "(" feature ( ":" value )? ")"
//! ```

use std::fmt;

use nom::{
    IResult,
    branch::alt,
    bytes::complete::{tag_no_case, take_till1, take_while1},
    character::complete::{char, multispace0, multispace1},
    combinator::{map, opt, recognize},
    multi::separated_list1,
    sequence::{delimited, pair, preceded, tuple},
};

/// One `and`-joined term of a media query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaTerm {
    /// `screen`, `print`
    Type(String),
    /// `(min-width: 640px)`, `(hover)`
    Feature { name: String, value: Option<String> },
}

impl fmt::Display for MediaTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaTerm::Type(name) => write!(f, "{}", name),
            MediaTerm::Feature { name, value: None } => write!(f, "({})", name),
            MediaTerm::Feature {
                name,
                value: Some(value),
            } => write!(f, "({}: {})", name, value),
        }
    }
}

fn parse_media_ident(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_ascii_alphanumeric() || c == '-')(input)
}

fn collapse_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Parses `( name [: value] )`.
pub fn parse_feature(input: &str) -> IResult<&str, MediaTerm> {
    let (input, _) = pair(char('('), multispace0)(input)?;
    let (input, name) = parse_media_ident(input)?;
    let (input, _) = multispace0(input)?;
    let (input, value) = opt(preceded(
        pair(char(':'), multispace0),
        take_till1(|c| c == ')' || c == '('),
    ))(input)?;
    let (input, _) = char(')')(input)?;

    Ok((
        input,
        MediaTerm::Feature {
            name: name.to_ascii_lowercase(),
            value: value.map(collapse_whitespace).filter(|v| !v.is_empty()),
        },
    ))
}

fn parse_term(input: &str) -> IResult<&str, MediaTerm> {
    alt((
        parse_feature,
        map(parse_media_ident, |name| {
            MediaTerm::Type(name.to_ascii_lowercase())
        }),
    ))(input)
}

fn parse_and(input: &str) -> IResult<&str, &str> {
    recognize(tuple((multispace1, tag_no_case("and"), multispace1)))(input)
}

/// Parses a full query, allowing surrounding whitespace.
pub fn parse_media_query(input: &str) -> IResult<&str, Vec<MediaTerm>> {
    delimited(multispace0, separated_list1(parse_and, parse_term), multispace0)(input)
}
