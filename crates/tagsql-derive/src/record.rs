//! Record derive macro implementation
//!
//! Generates a `tagsql::Record` impl: a static field-descriptor table in
//! declaration order plus value and zero-test accessors for persisted fields.

mod attrs;

use attrs::{ColumnSpec, field_attr};

use crate::sql_ident::parse_column;
use proc_macro2::TokenStream;
use quote::quote;
use std::collections::HashMap;
use syn::{Data, DeriveInput, Fields, Result};

pub fn expand(input: DeriveInput) -> Result<TokenStream> {
    let name = &input.ident;
    let generics = &input.generics;

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    &input,
                    "Record can only be derived for structs with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                &input,
                "Record can only be derived for structs",
            ));
        }
    };

    let mut descriptors = Vec::with_capacity(fields.len());
    let mut value_arms = Vec::with_capacity(fields.len());
    let mut zero_arms = Vec::with_capacity(fields.len());
    let mut null_default_checks = Vec::new();
    let mut id_field: Option<String> = None;
    let mut columns: HashMap<String, String> = HashMap::new();
    let mut bounded = generics.clone();

    for (index, field) in fields.iter().enumerate() {
        let Some(field_ident) = field.ident.as_ref() else {
            continue;
        };
        let field_name = syn::ext::IdentExt::unraw(field_ident).to_string();
        let ty = &field.ty;
        let attr = field_attr(field)?;

        if attr.is_id {
            if let Some(first) = &id_field {
                return Err(syn::Error::new_spanned(
                    field,
                    format!("multiple primary keys: `{first}` is already marked #[orm(id)]"),
                ));
            }
            id_field = Some(field_name.clone());
        }

        let column = match &attr.column {
            Some(ColumnSpec::Named(column, span)) => Some(parse_column(column, *span)?),
            Some(ColumnSpec::FieldName) => Some(parse_column(&field_name, field_ident.span())?),
            None => None,
        };

        if let Some(column) = &column {
            if let Some(first) = columns.insert(column.clone(), field_name.clone()) {
                return Err(syn::Error::new_spanned(
                    field,
                    format!("duplicate column `{column}`: already used by field `{first}`"),
                ));
            }
        }

        let mut descriptor = match &column {
            Some(column) => quote! {
                ::tagsql::FieldDescriptor::new(
                    #field_name,
                    #column,
                    <#ty as ::tagsql::FieldValue>::KIND,
                )
            },
            None => {
                if attr.nullable || attr.is_id {
                    return Err(syn::Error::new_spanned(
                        field,
                        "#[orm(nullable)] and #[orm(id)] require #[orm(column)]",
                    ));
                }
                quote! {
                    ::tagsql::FieldDescriptor::new(#field_name, "", ::tagsql::ValueKind::Other)
                }
            }
        };

        if attr.nullable {
            descriptor = quote! { #descriptor.nullable() };
            // Generic field types are checked when the descriptor is validated instead.
            if generics.params.is_empty() {
                let message = format!("nullable field `{field_name}` has a type with no null default");
                null_default_checks.push(quote! {
                    ::core::assert!(
                        <#ty as ::tagsql::FieldValue>::KIND
                            .null_default_literal()
                            .is_some(),
                        #message
                    );
                });
            }
        }
        if attr.is_id {
            descriptor = quote! { #descriptor.primary_key() };
        }
        match (&attr.foreign_key, &attr.foreign_table) {
            (Some(key), Some(table)) => {
                descriptor = quote! { #descriptor.foreign(#key, #table) };
            }
            (None, None) => {}
            _ => {
                return Err(syn::Error::new_spanned(
                    field,
                    "#[orm(foreign_key)] and #[orm(foreign_table)] must be used together",
                ));
            }
        }
        descriptors.push(descriptor);

        if column.is_some() {
            if !generics.params.is_empty() {
                bounded
                    .make_where_clause()
                    .predicates
                    .push(syn::parse_quote!(#ty: ::tagsql::FieldValue));
            }
            value_arms.push(quote! {
                #index => ::core::option::Option::Some(
                    ::tagsql::FieldValue::to_value(&self.#field_ident)
                ),
            });
            zero_arms.push(quote! {
                #index => ::tagsql::FieldValue::is_zero(&self.#field_ident),
            });
        }
    }

    let (impl_generics, ty_generics, where_clause) = bounded.split_for_impl();

    let checks = if null_default_checks.is_empty() {
        quote! {}
    } else {
        quote! {
            const _: () = {
                #(#null_default_checks)*
            };
        }
    };

    Ok(quote! {
        impl #impl_generics ::tagsql::Record for #name #ty_generics #where_clause {
            const FIELDS: &'static [::tagsql::FieldDescriptor] = &[
                #(#descriptors),*
            ];

            fn value(&self, index: usize) -> ::core::option::Option<::tagsql::Value> {
                match index {
                    #(#value_arms)*
                    _ => ::core::option::Option::None,
                }
            }

            fn is_zero(&self, index: usize) -> bool {
                match index {
                    #(#zero_arms)*
                    _ => true,
                }
            }
        }

        #checks
    })
}
