//! Implementation of `#[derive(ToValue)]`.
//!
//! The derive writes a `ToValue` hook and tags the type `UserDefined`. Shapes:
//!
//! - named fields: object keyed by field name
//! - one unnamed field: the inner value
//! - other unnamed fields: array
//! - no fields (unit): null
//! - enum unit variant: string of the variant name
//! - other enum variants: `{ "Variant": payload }`, payload shaped as above

use std::collections::HashSet;

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Fields, Ident, Path, parse_macro_input, spanned::Spanned};

use crate::common::{parse_container_attrs, parse_member_attrs};

pub fn derive_to_value_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match generate(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn generate(mut input: DeriveInput) -> syn::Result<TokenStream2> {
    let krate = parse_container_attrs(&input.attrs)?.krate;

    let body = match &input.data {
        Data::Struct(data) => {
            let target = format_ident!("jv");
            let (pattern, fill) = shape(&krate, &target, &data.fields)?;
            quote! {
                let Self #pattern = self;
                #fill
                ::core::result::Result::Ok(())
            }
        }
        Data::Enum(data) => {
            let mut keys = HashSet::new();
            let mut arms = Vec::with_capacity(data.variants.len());
            for variant in &data.variants {
                let attrs = parse_member_attrs(&variant.attrs, false)?;
                let key = attrs.key(&variant.ident);
                if !keys.insert(key.clone()) {
                    return Err(syn::Error::new_spanned(
                        variant,
                        format!("[arbor] duplicate variant name `{}`", key),
                    ));
                }
                arms.push(variant_arm(&krate, &variant.ident, &key, &variant.fields)?);
            }
            if arms.is_empty() {
                quote!(match *self {})
            } else {
                quote! {
                    match self {
                        #(#arms)*
                    }
                    ::core::result::Result::Ok(())
                }
            }
        }
        Data::Union(data) => {
            return Err(syn::Error::new(
                data.union_token.span(),
                "[arbor] `ToValue` cannot be derived for unions",
            ));
        }
    };

    let type_params: Vec<Ident> = input
        .generics
        .type_params()
        .map(|p| p.ident.clone())
        .collect();
    let where_clause = input.generics.make_where_clause();
    for param in &type_params {
        where_clause
            .predicates
            .push(syn::parse_quote!(#param: #krate::Convert));
    }

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics #krate::ToValue for #name #ty_generics #where_clause {
            fn to_value(&self, jv: &mut #krate::Value<'_>) -> #krate::Result<()> {
                #body
            }
        }

        impl #impl_generics #krate::Convert for #name #ty_generics #where_clause {
            type Tag = #krate::tag::UserDefined;
        }
    })
}

fn variant_arm(
    krate: &Path,
    ident: &Ident,
    key: &str,
    fields: &Fields,
) -> syn::Result<TokenStream2> {
    if let Fields::Unit = fields {
        return Ok(quote! {
            Self::#ident => #krate::value_from_into(#key, jv)?,
        });
    }

    let payload = format_ident!("payload");
    let (pattern, fill) = shape(krate, &payload, fields)?;
    Ok(quote! {
        Self::#ident #pattern => {
            let obj = jv.emplace_object();
            let mut #payload = #krate::Value::null(obj.storage());
            {
                let #payload = &mut #payload;
                #fill
            }
            obj.insert(#key, #payload);
        }
    })
}

/// The destructuring pattern for `fields` and the statements that fill
/// `target` (a `&mut Value`) from the bound fields.
fn shape(
    krate: &Path,
    target: &Ident,
    fields: &Fields,
) -> syn::Result<(TokenStream2, TokenStream2)> {
    match fields {
        Fields::Named(named) => {
            let mut keys = HashSet::new();
            let mut pattern = Vec::new();
            let mut inserts = Vec::new();
            for (index, field) in named.named.iter().enumerate() {
                let attrs = parse_member_attrs(&field.attrs, true)?;
                if attrs.skip {
                    continue;
                }
                let Some(ident) = &field.ident else { continue };
                let key = attrs.key(ident);
                if !keys.insert(key.clone()) {
                    return Err(syn::Error::new_spanned(
                        field,
                        format!("[arbor] duplicate field name `{}`", key),
                    ));
                }
                let binding = format_ident!("__field{}", index);
                pattern.push(quote!(#ident: #binding));
                inserts.push(quote! {
                    obj.insert(#key, #krate::value_from(#binding, storage)?);
                });
            }
            let pattern = quote!({ #(#pattern,)* .. });
            if inserts.is_empty() {
                return Ok((pattern, quote!(#target.emplace_object();)));
            }
            let count = inserts.len();
            Ok((
                pattern,
                quote! {
                    let obj = #target.emplace_object();
                    let storage = obj.storage();
                    obj.reserve(#count);
                    #(#inserts)*
                },
            ))
        }
        Fields::Unnamed(unnamed) => {
            for field in &unnamed.unnamed {
                if let Some(attr) = field.attrs.iter().find(|a| a.path().is_ident("arbor")) {
                    return Err(syn::Error::new_spanned(
                        attr,
                        "[arbor] `rename` and `skip` apply only to named fields",
                    ));
                }
            }
            let bindings: Vec<Ident> = (0..unnamed.unnamed.len())
                .map(|index| format_ident!("__field{}", index))
                .collect();
            let pattern = quote!((#(#bindings),*));
            match bindings.as_slice() {
                [] => return Ok((pattern, quote!(#target.emplace_array();))),
                [inner] => {
                    return Ok((pattern, quote!(#krate::value_from_into(#inner, #target)?;)));
                }
                _ => {}
            }
            let len = bindings.len();
            Ok((
                pattern,
                quote! {
                    let arr = #target.emplace_array();
                    let storage = arr.storage();
                    arr.reserve(#len);
                    #(arr.push(#krate::value_from(#bindings, storage)?);)*
                },
            ))
        }
        Fields::Unit => Ok((quote!(), quote!(#target.set_null();))),
    }
}
