//! Derive macros for Junimo storefront slices
//!
//! # Available Macros
//!
//! - `#[derive(Lifecycle)]` - Tags the request/success/failure variants of a
//!   slice action enum and implements `junimo_core::slice::Lifecycle`
//!
//! # Example
//!
//! ```ignore
//! use junimo_macros::Lifecycle;
//!
//! #[derive(Lifecycle, Clone, Debug)]
//! #[slice = "cart"]
//! enum CartAction {
//!     #[request]
//!     GetCartRequest { user_id: u64 },
//!     #[success]
//!     GetCartSuccess(ShoppingCart),
//!     #[failure]
//!     GetCartFailure { message: String },
//!     Reset,
//! }
//!
//! // Generated:
//! // CartAction::Reset.action_type() == "cart/Reset"
//! // CartAction::GetCartRequest { user_id: 1 }.phase() == Some(Phase::Request)
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, Attribute, Data, DeriveInput, Expr, Fields, Lit, Meta, Variant};

/// Derive macro for slice action enums
///
/// Generates `impl junimo_core::slice::Lifecycle`:
/// - `action_type()` - `"<slice>/<Variant>"` for every variant
/// - `phase()` - `Request`, `Success` or `Failure(message)` for tagged
///   variants, `None` for the rest
///
/// # Attributes
///
/// - `#[slice = "name"]` on the enum - prefix for action types. Defaults to
///   the enum name without its `Action` suffix, lowercased.
/// - `#[request]` - variant starts a request
/// - `#[success]` - variant delivers a request's payload
/// - `#[failure]` - variant reports a failure. It must carry the message as
///   a `message` field or as its only unnamed field.
///
/// # Panics
///
/// This macro will produce a compile error (not a runtime panic) if:
/// - Applied to a non-enum type
/// - A variant carries more than one lifecycle attribute
/// - A `#[failure]` variant has no message field
#[proc_macro_derive(Lifecycle, attributes(slice, request, success, failure))]
pub fn derive_lifecycle(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_lifecycle(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand_lifecycle(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;

    let Data::Enum(data_enum) = &input.data else {
        return Err(syn::Error::new_spanned(
            input,
            "#[derive(Lifecycle)] can only be used on enums",
        ));
    };

    let slice = slice_name(input)?;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let mut type_arms = Vec::with_capacity(data_enum.variants.len());
    let mut phase_arms = Vec::new();

    for variant in &data_enum.variants {
        let variant_name = &variant.ident;
        let pattern = wildcard_pattern(variant);
        let action_type = format!("{slice}/{variant_name}");
        type_arms.push(quote! { #pattern => #action_type, });

        let is_request = has_attribute(&variant.attrs, "request");
        let is_success = has_attribute(&variant.attrs, "success");
        let is_failure = has_attribute(&variant.attrs, "failure");

        if [is_request, is_success, is_failure].iter().filter(|b| **b).count() > 1 {
            return Err(syn::Error::new_spanned(
                variant,
                "Variant can carry only one of #[request], #[success], #[failure]",
            ));
        }

        if is_request {
            phase_arms.push(quote! {
                #pattern => ::core::option::Option::Some(::junimo_core::slice::Phase::Request),
            });
        } else if is_success {
            phase_arms.push(quote! {
                #pattern => ::core::option::Option::Some(::junimo_core::slice::Phase::Success),
            });
        } else if is_failure {
            let binding = failure_pattern(variant)?;
            phase_arms.push(quote! {
                #binding => ::core::option::Option::Some(
                    ::junimo_core::slice::Phase::Failure(::core::convert::AsRef::<str>::as_ref(message))
                ),
            });
        }
    }

    Ok(quote! {
        impl #impl_generics ::junimo_core::slice::Lifecycle for #name #ty_generics #where_clause {
            fn action_type(&self) -> &'static str {
                match self {
                    #(#type_arms)*
                }
            }

            #[allow(unreachable_patterns)]
            fn phase(&self) -> ::core::option::Option<::junimo_core::slice::Phase<'_>> {
                match self {
                    #(#phase_arms)*
                    _ => ::core::option::Option::None,
                }
            }
        }
    })
}

/// `#[slice = "..."]`, or the enum name minus `Action`, lowercased
fn slice_name(input: &DeriveInput) -> syn::Result<String> {
    for attr in &input.attrs {
        if !attr.path().is_ident("slice") {
            continue;
        }
        if let Meta::NameValue(meta) = &attr.meta {
            if let Expr::Lit(expr) = &meta.value {
                if let Lit::Str(value) = &expr.lit {
                    return Ok(value.value());
                }
            }
        }
        return Err(syn::Error::new_spanned(
            attr,
            "expected #[slice = \"name\"]",
        ));
    }

    let ident = input.ident.to_string();
    let base = ident.strip_suffix("Action").unwrap_or(&ident);
    Ok(base.to_lowercase())
}

fn wildcard_pattern(variant: &Variant) -> TokenStream2 {
    let variant_name = &variant.ident;
    match &variant.fields {
        Fields::Named(_) => quote! { Self::#variant_name { .. } },
        Fields::Unnamed(_) => quote! { Self::#variant_name(..) },
        Fields::Unit => quote! { Self::#variant_name },
    }
}

/// Pattern binding the failure message as `message`
fn failure_pattern(variant: &Variant) -> syn::Result<TokenStream2> {
    let variant_name = &variant.ident;
    match &variant.fields {
        Fields::Named(fields)
            if fields
                .named
                .iter()
                .any(|f| f.ident.as_ref().is_some_and(|i| i == "message")) =>
        {
            Ok(quote! { Self::#variant_name { message, .. } })
        },
        Fields::Unnamed(fields) if fields.unnamed.len() == 1 => {
            Ok(quote! { Self::#variant_name(message) })
        },
        _ => Err(syn::Error::new_spanned(
            variant,
            "#[failure] variants need a `message` field or a single unnamed field",
        )),
    }
}

/// Helper function to check if an attribute list contains a specific attribute
fn has_attribute(attrs: &[Attribute], name: &str) -> bool {
    attrs.iter().any(|attr| attr.path().is_ident(name))
}
