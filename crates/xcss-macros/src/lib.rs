//! Procedural macros for the xcss style engine.
//!
//! This crate provides the `style!` macro for declarative style objects and
//! `#[derive(Variant)]` for typed variant enums.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod codegen;
mod parse;
mod variant;

/// Declarative style-object macro.
///
/// # Syntax
///
/// ```ignore
/// style! {
///     // Declarations: camelCase, utilities, or quoted raw properties
///     mt: "$16",
///     xColor: "$fg3",
///     height: 350,
///     "font-variant": "small-caps",
///
///     // Responsive value: a block of `@alias` entries only
///     fontSize: { "@initial": "$sm", "@md": "$lg" },
///
///     // Breakpoint block
///     "@sm": { mt: "$0" },
///
///     // Nested selectors: `&` is the class, anything else a descendant
///     "&:hover": { xColorOpacity: 0.4 },
///     ul: { display: "flex" },
///
///     // Splat another Style
///     ..shared_links,
/// }
/// ```
///
/// # Mapping
///
/// - `key: expr` becomes `.set("key", expr)`
/// - `"@alias": { .. }` becomes `.at("@alias", ..)`
/// - `key: { "@a": x, "@b": y }` becomes
///   `.set("key", StyleValue::responsive([("@a", x), ("@b", y)]))`
/// - any other `key: { .. }` becomes `.nest("key", ..)`
/// - `..expr` becomes `.extend(expr)`
///
/// # Return Type
///
/// Always returns `xcss::Style`.
#[proc_macro]
pub fn style(input: TokenStream) -> TokenStream {
    let block = parse_macro_input!(input as parse::StyleBlock);
    codegen::generate(&block).into()
}

/// Derives `Variant` and `VariantEnum` for a fieldless enum.
///
/// Keys are the kebab-case variant names; `#[variant(rename = "2xl")]`
/// overrides one. The enum must also be `Copy`.
///
/// ```ignore
/// #[derive(Clone, Copy, Variant)]
/// enum Dir {
///     Row,        // "row"
///     ColReverse, // "col-reverse"
/// }
/// ```
#[proc_macro_derive(Variant, attributes(variant))]
pub fn derive_variant(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    variant::derive(&input)
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}
