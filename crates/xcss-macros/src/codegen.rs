//! Code generation for the style! macro.

use proc_macro2::TokenStream;
use quote::quote;

use crate::parse::{Entry, EntryValue, StyleBlock};

/// Generate a `Style` builder chain for a parsed style object.
pub fn generate(block: &StyleBlock) -> TokenStream {
    let calls: Vec<TokenStream> = block.entries.iter().map(generate_entry).collect();
    quote! { ::xcss::Style::new() #(#calls)* }
}

fn generate_entry(entry: &Entry) -> TokenStream {
    let (key, value) = match entry {
        Entry::Splat(expr) => return quote! { .extend(#expr) },
        Entry::Pair { key, value } => (key, value),
    };
    let name = key.text();

    match value {
        EntryValue::Expr(expr) => quote! { .set(#name, #expr) },
        EntryValue::Block(block) if key.is_breakpoint() => {
            let inner = generate(block);
            quote! { .at(#name, #inner) }
        }
        EntryValue::Block(block) if block.is_responsive_value() => {
            let arms = generate_responsive_arms(block);
            quote! { .set(#name, ::xcss::StyleValue::responsive([#(#arms),*])) }
        }
        EntryValue::Block(block) => {
            let inner = generate(block);
            quote! { .nest(#name, #inner) }
        }
    }
}

/// `(alias, StyleValue)` tuples for a responsive value block.
fn generate_responsive_arms(block: &StyleBlock) -> Vec<TokenStream> {
    block
        .entries
        .iter()
        .filter_map(|entry| match entry {
            Entry::Pair {
                key,
                value: EntryValue::Expr(expr),
            } => {
                let alias = key.text();
                Some(quote! { (#alias, ::xcss::StyleValue::from(#expr)) })
            }
            _ => None,
        })
        .collect()
}
