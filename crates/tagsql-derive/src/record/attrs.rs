//! Field-level `#[orm(...)]` attribute parsing for the Record derive macro.

use proc_macro2::Span;
use syn::ext::IdentExt;
use syn::parse::{Parse, ParseStream};
use syn::{Result, Token};

/// Where a field's column name comes from.
pub(super) enum ColumnSpec {
    /// `#[orm(column)]`: the field's own name.
    FieldName,
    /// `#[orm(column = "name")]`
    Named(String, Span),
}

/// Parsed `#[orm(...)]` field attributes.
#[derive(Default)]
pub(super) struct FieldAttr {
    pub is_id: bool,
    pub nullable: bool,
    pub column: Option<ColumnSpec>,
    pub foreign_key: Option<String>,
    pub foreign_table: Option<String>,
}

impl Parse for FieldAttr {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut attr = FieldAttr::default();

        loop {
            if input.is_empty() {
                break;
            }

            let ident = input.call(syn::Ident::parse_any)?;
            match ident.to_string().as_str() {
                "id" | "primary_key" => attr.is_id = true,
                "nullable" => {
                    // `nullable` or `nullable = "y"`; an empty string means not nullable.
                    attr.nullable = match parse_opt_str(input)? {
                        Some(lit) => !lit.value().is_empty(),
                        None => true,
                    };
                }
                "column" => {
                    attr.column = Some(match parse_opt_str(input)? {
                        Some(lit) => ColumnSpec::Named(lit.value(), lit.span()),
                        None => ColumnSpec::FieldName,
                    });
                }
                "foreign_key" => attr.foreign_key = Some(parse_str(input)?.value()),
                "foreign_table" => attr.foreign_table = Some(parse_str(input)?.value()),
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown orm attribute `{other}`"),
                    ));
                }
            }

            if input.peek(Token![,]) {
                let _: Token![,] = input.parse()?;
            } else {
                break;
            }
        }

        Ok(attr)
    }
}

fn parse_str(input: ParseStream) -> Result<syn::LitStr> {
    let _: Token![=] = input.parse()?;
    input.parse()
}

fn parse_opt_str(input: ParseStream) -> Result<Option<syn::LitStr>> {
    if input.peek(Token![=]) {
        parse_str(input).map(Some)
    } else {
        Ok(None)
    }
}

impl FieldAttr {
    fn merge(&mut self, other: FieldAttr) {
        self.is_id |= other.is_id;
        self.nullable |= other.nullable;
        if other.column.is_some() {
            self.column = other.column;
        }
        if other.foreign_key.is_some() {
            self.foreign_key = other.foreign_key;
        }
        if other.foreign_table.is_some() {
            self.foreign_table = other.foreign_table;
        }
    }
}

/// Collect all `#[orm(...)]` attributes on a field.
pub(super) fn field_attr(field: &syn::Field) -> Result<FieldAttr> {
    let mut merged = FieldAttr::default();
    for attr in &field.attrs {
        if attr.path().is_ident("orm") {
            merged.merge(attr.parse_args::<FieldAttr>()?);
        }
    }
    Ok(merged)
}
