//! Derive macros for tagsql
//!
//! Provides `#[derive(Record)]`.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod record;
mod sql_ident;

/// Derive the `Record` field-descriptor table for a struct.
///
/// # Example
///
/// ```ignore
/// use tagsql::Record;
///
/// #[derive(Record)]
/// struct Site {
///     #[orm(id, column = "id")]
///     id: i32,
///     #[orm(column = "name", nullable)]
///     name: String,
///     #[orm(column = "property_id", foreign_key = "id", foreign_table = "properties")]
///     property_id: i32,
///     #[orm(column)]
///     is_active: i32,
///     // Not persisted: any type is allowed.
///     order_by: Vec<String>,
/// }
/// ```
///
/// # Attributes
///
/// - `#[orm(column = "name")]` - Persist the field under `name`
/// - `#[orm(column)]` - Persist the field under its own name
/// - `#[orm(nullable)]` - Null-coalesce the column on read
/// - `#[orm(id)]` / `#[orm(primary_key)]` - Mark field as primary key (at most one)
/// - `#[orm(foreign_key = "...", foreign_table = "...")]` - Relationship metadata
///
/// Fields without a column are never part of generated SQL.
#[proc_macro_derive(Record, attributes(orm))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    record::expand(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
