//! DSL parsing for the style! macro.

use syn::{
    Expr, Ident, LitStr, Result, Token, braced,
    ext::IdentExt,
    parse::{Parse, ParseStream},
    token,
};

/// A `{ key: value, ... }` style object.
#[derive(Debug)]
pub struct StyleBlock {
    pub entries: Vec<Entry>,
}

/// One entry of a style object.
#[derive(Debug)]
pub enum Entry {
    /// `key: value` or `key: { ... }`
    Pair { key: Key, value: EntryValue },
    /// `..expr` - extend with another `Style`
    Splat(Expr),
}

/// An entry key: a bare identifier (`mt`, `xColor`) or a string
/// (`"&:hover"`, `"@sm"`, `"font-size"`).
#[derive(Debug)]
pub enum Key {
    Ident(Ident),
    Str(LitStr),
}

impl Key {
    pub fn text(&self) -> String {
        match self {
            Key::Ident(ident) => ident.unraw().to_string(),
            Key::Str(lit) => lit.value(),
        }
    }

    pub fn is_breakpoint(&self) -> bool {
        self.text().starts_with('@')
    }
}

#[derive(Debug)]
pub enum EntryValue {
    Expr(Expr),
    Block(StyleBlock),
}

impl StyleBlock {
    /// A block whose entries are all `"@alias": expr` is a responsive
    /// value rather than a nested rule.
    pub fn is_responsive_value(&self) -> bool {
        !self.entries.is_empty()
            && self.entries.iter().all(|entry| {
                matches!(
                    entry,
                    Entry::Pair { key, value: EntryValue::Expr(_) } if key.is_breakpoint()
                )
            })
    }
}

impl Parse for StyleBlock {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut entries = Vec::new();

        while !input.is_empty() {
            entries.push(input.parse::<Entry>()?);

            // Consume optional trailing comma
            if input.peek(Token![,]) {
                let _comma: Token![,] = input.parse()?;
            } else if !input.is_empty() {
                return Err(input.error("expected `,` between style entries"));
            }
        }

        Ok(StyleBlock { entries })
    }
}

impl Parse for Entry {
    fn parse(input: ParseStream) -> Result<Self> {
        if input.peek(Token![..]) {
            let _dotdot: Token![..] = input.parse()?;
            return Ok(Entry::Splat(input.parse()?));
        }

        let key = if input.peek(LitStr) {
            Key::Str(input.parse()?)
        } else if input.peek(Ident::peek_any) {
            Key::Ident(input.call(Ident::parse_any)?)
        } else {
            return Err(input.error("expected a property name or a quoted selector"));
        };

        let _colon: Token![:] = input.parse()?;

        // Braces open a nested block; anything else is a value expression.
        let value = if input.peek(token::Brace) {
            let content;
            braced!(content in input);
            EntryValue::Block(content.parse()?)
        } else {
            EntryValue::Expr(input.parse()?)
        };

        Ok(Entry::Pair { key, value })
    }
}
