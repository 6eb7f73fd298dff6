//! `#[derive(Variant)]` for fieldless enums.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Error, Fields, LitStr, Result};

pub fn derive(input: &DeriveInput) -> Result<TokenStream> {
    let Data::Enum(data) = &input.data else {
        return Err(Error::new_spanned(
            &input.ident,
            "Variant can only be derived for enums",
        ));
    };

    let mut idents = Vec::with_capacity(data.variants.len());
    let mut keys = Vec::with_capacity(data.variants.len());
    for variant in &data.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(Error::new_spanned(
                variant,
                "Variant enums cannot have fields",
            ));
        }

        let mut rename = None;
        for attr in &variant.attrs {
            if !attr.path().is_ident("variant") {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename") {
                    let lit: LitStr = meta.value()?.parse()?;
                    rename = Some(lit.value());
                    Ok(())
                } else {
                    Err(meta.error("expected `rename = \"...\"`"))
                }
            })?;
        }

        keys.push(rename.unwrap_or_else(|| kebab_case(&variant.ident.to_string())));
        idents.push(&variant.ident);
    }

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::xcss::Variant for #name #ty_generics #where_clause {
            fn variant_key(&self) -> ::std::borrow::Cow<'_, str> {
                ::std::borrow::Cow::Borrowed(match self {
                    #(Self::#idents => #keys,)*
                })
            }
        }

        impl #impl_generics ::xcss::VariantEnum for #name #ty_generics #where_clause {
            const ALL: &'static [Self] = &[#(Self::#idents),*];
        }
    })
}

/// `ColReverse` -> `col-reverse`
fn kebab_case(ident: &str) -> String {
    let mut out = String::with_capacity(ident.len() + 4);
    for (idx, c) in ident.chars().enumerate() {
        if c.is_ascii_uppercase() {
            if idx > 0 {
                out.push('-');
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}
