//! # tagsql
//!
//! SQL statement generation from annotated record types.
//!
//! A record declares, per field, its column name, nullability and whether it
//! is the primary key. Given an instance, the builders produce SQL text with
//! positional `?` markers and the values to bind, in order.
//!
//! ## Features
//!
//! - **INSERT**: non-key fields holding a non-zero value
//! - **SELECT**: all columns (null-coalesced when nullable), filtered on non-zero fields
//! - **UPDATE**: fields named in a [`FieldMask`], keyed on the primary key
//! - **DELETE**: keyed on the primary key, or a soft delete through an `is_active` flag
//!
//! ```ignore
//! use tagsql::{FieldMask, Record, build_read, build_update};
//!
//! #[derive(Record)]
//! struct Task {
//!     #[orm(id, column = "id")]
//!     id: i32,
//!     #[orm(column = "title", nullable)]
//!     title: String,
//!     #[orm(column = "is_active")]
//!     is_active: i32,
//! }
//!
//! let task = Task { id: 3, title: "%report%".into(), is_active: 1 };
//!
//! let q = build_read("task", &task)?;
//! // SELECT id, ifnull(title, '') as title, is_active FROM task
//! //   WHERE true AND id = ? AND title LIKE ? AND is_active = ?
//!
//! let q = build_update("task", &task, &FieldMask::new(["title"]))?;
//! // UPDATE task SET title = ? WHERE id = ?
//! # Ok::<(), tagsql::BuildError>(())
//! ```
//!
//! The SQL dialect (only the null-coalescing function differs) is read from
//! `TAGSQL_SQL_DRIVER`; see [`Config`].

pub mod builder;
pub mod config;
pub mod error;
pub mod ident;
pub mod named;
pub mod prelude;
pub mod query;
pub mod record;
pub mod value;

pub use builder::{
    Compiler, DeleteBuilder, FieldMask, InsertBuilder, SelectBuilder, SqlBuilder, UpdateBuilder,
    build_create, build_delete, build_read, build_update,
};
pub use config::{Config, Dialect};
pub use error::{BuildError, BuildResult};
pub use ident::TableName;
pub use query::BuiltQuery;
pub use record::{FieldDescriptor, FieldState, Record, RecordDescriptor};
pub use value::{FieldValue, Value, ValueKind};

#[cfg(feature = "derive")]
pub use tagsql_derive::Record;
