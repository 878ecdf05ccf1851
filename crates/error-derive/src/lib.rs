//! `#[derive(Error)]` for error enums.
//!
//! Every variant needs a `#[msg = "..."]` attribute. Variants may be
//! * unit variants, displayed as their message
//! * tuple variants with exactly one field, which additionally get a `From` impl
//!   and report the field as their [source](std::error::Error::source)
//! * variants with named fields, whose message may refer to the fields
//!   like a format string: `#[msg = "expected {expected} points, got {got}"]`

use proc_macro::TokenStream;
use quote::quote;

#[proc_macro_derive(Error, attributes(msg))]
pub fn derive_error(input: TokenStream) -> TokenStream {
    let item: syn::ItemEnum = syn::parse(input).expect("Could not parse input as enum");

    if !item.generics.params.is_empty() {
        panic!("generic error enums are not supported");
    }

    let name = item.ident;
    let mut variant_displays: Vec<proc_macro2::TokenStream> = vec![];
    let mut from_impls: Vec<proc_macro2::TokenStream> = vec![];
    let mut variant_sources: Vec<proc_macro2::TokenStream> = vec![];

    for variant in &item.variants {
        let ident = &variant.ident;

        let display_attribute = variant
            .attrs
            .iter()
            .flat_map(|attr| match &attr.meta {
                syn::Meta::NameValue(name_value) => Some(name_value),
                _ => None,
            })
            .find(|name_value| name_value.path.is_ident("msg"))
            .map(|name_value| &name_value.value);

        let Some(display_value) = display_attribute else {
            panic!("variant {ident} needs a #[msg = \"...\"] attribute");
        };

        match &variant.fields {
            syn::Fields::Unit => {
                variant_displays.push(quote!(
                    Self::#ident => ::std::fmt::Display::fmt(&(#display_value), f)
                ));
            },
            syn::Fields::Unnamed(unnamed_fields) => {
                if unnamed_fields.unnamed.len() != 1 {
                    panic!("Need exactly one field");
                }

                let field = &unnamed_fields.unnamed[0];
                let ty = &field.ty;

                from_impls.push(quote!(
                    #[automatically_derived]
                    impl From<#ty> for #name {
                        fn from(value: #ty) -> Self {
                            Self::#ident(value)
                        }
                    }
                ));
                variant_displays.push(quote!(
                    Self::#ident(_) => ::std::fmt::Display::fmt(&(#display_value), f)
                ));
                variant_sources.push(quote!(Self::#ident(ref value) => Some(value)));
            },
            syn::Fields::Named(named_fields) => {
                let syn::Expr::Lit(syn::ExprLit {
                    lit: syn::Lit::Str(message),
                    ..
                }) = display_value
                else {
                    panic!("variants with named fields need a string literal as their message");
                };

                // Only bind the fields that the message actually refers to,
                // format_args! rejects unused named arguments.
                let placeholders = placeholder_names(&message.value());
                let used_fields: Vec<_> = named_fields
                    .named
                    .iter()
                    .filter_map(|field| field.ident.as_ref())
                    .filter(|field| placeholders.iter().any(|name| **field == name.as_str()))
                    .collect();

                variant_displays.push(quote!(
                    Self::#ident { #(#used_fields,)* .. } => write!(f, #message, #(#used_fields = #used_fields),*)
                ));
            },
        }
    }

    quote!(
        #[automatically_derived]
        impl ::std::fmt::Display for #name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> Result<(), ::std::fmt::Error> {
                match self {
                    #(
                        #variant_displays,
                    )*
                }
            }
        }

        #(
            #from_impls
        )*

        #[automatically_derived]
        impl ::std::error::Error for #name {
            fn source(&self) -> Option<&(dyn ::std::error::Error + 'static)> {
                match self {
                    #(
                        #variant_sources,
                    )*
                    #[allow(unreachable_patterns)]
                    _ => None,
                }
            }
        }
    )
    .into()
}

/// Collect the names of all `{name}` and `{name:spec}` placeholders in a format string
fn placeholder_names(message: &str) -> Vec<String> {
    let mut names = vec![];
    let mut chars = message.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
            },
            '{' => {
                let name: String = chars
                    .by_ref()
                    .take_while(|&c| c != '}')
                    .collect::<String>()
                    .split(':')
                    .next()
                    .unwrap_or_default()
                    .trim()
                    .to_owned();

                if !name.is_empty() && !names.contains(&name) {
                    names.push(name);
                }
            },
            _ => {},
        }
    }

    names
}
