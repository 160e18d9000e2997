//! Introspect derive macro for compile-time field enumeration.
//!
//! This crate provides the [`Introspect`](macro@Introspect) derive macro that
//! implements `serializer::Introspect` for a struct with named fields. The
//! generated impl lists every declared field, in declaration order, paired
//! with its rendered textual value, so any record type can be handed to the
//! document serializers without bespoke code.
//!
//! ```ignore
//! use serializer::Introspect;
//!
//! #[derive(Introspect)]
//! struct InfoProductDto {
//!     id: Uuid,
//!     name: String,
//!     price: f64,
//!     weight: f64,
//! }
//!
//! assert_eq!(InfoProductDto::type_name(), "InfoProductDto");
//! ```
//!
//! Every field type must implement `serializer::IntrospectValue`; `Option`
//! fields render their `None` as the literal text `null`.

extern crate proc_macro;

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields};

/// Derives `serializer::Introspect` for a named-field struct.
///
/// Tuple structs, unit structs, enums and unions are rejected at compile
/// time: there are no stable attribute names to enumerate.
#[proc_macro_derive(Introspect)]
pub fn introspect_derive(input: TokenStream) -> TokenStream {
    let ast: DeriveInput = parse_macro_input!(input as DeriveInput);

    match impl_introspect(ast) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn impl_introspect(ast: DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let fields = match &ast.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    &ast.ident,
                    "Introspect requires a struct with named fields",
                ))
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                &ast.ident,
                "Introspect can only be derived for structs",
            ))
        }
    };

    let ident = &ast.ident;
    let type_name = ident.to_string();
    let (impl_generics, ty_generics, where_clause) = ast.generics.split_for_impl();

    let entries = fields.iter().map(|field| {
        let name = field.ident.as_ref().expect("named field");
        let name_str = name.to_string();
        quote! {
            ::serializer::introspect::Field::new(
                #name_str,
                ::serializer::introspect::IntrospectValue::render(&self.#name),
            )
        }
    });

    Ok(quote! {
        impl #impl_generics ::serializer::introspect::Introspect for #ident #ty_generics #where_clause {
            fn type_name() -> &'static str {
                #type_name
            }

            fn fields(&self) -> ::std::vec::Vec<::serializer::introspect::Field> {
                ::std::vec![ #( #entries ),* ]
            }
        }
    })
}
