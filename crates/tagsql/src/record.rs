//! Record metadata: the static field-descriptor table and its validated view.
//!
//! A [`Record`] exposes an ordered `&'static [FieldDescriptor]` table plus
//! per-call access to its current field values. The table is normally
//! generated by `#[derive(Record)]`:
//!
//! ```ignore
//! use tagsql::Record;
//!
//! #[derive(Record)]
//! struct Task {
//!     #[orm(id, column = "id")]
//!     id: i32,
//!     #[orm(column = "title", nullable)]
//!     title: String,
//!     #[orm(column = "is_active")]
//!     is_active: i32,
//!     // no column: never persisted
//!     order_by: String,
//! }
//! ```

use crate::error::{BuildError, BuildResult};
use crate::ident::is_valid_ident;
use crate::value::{Value, ValueKind};
use std::collections::HashMap;

/// Annotations of a single record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Field identifier inside the record (used by field masks).
    pub name: &'static str,
    /// Persisted column name; empty means the field is not persisted.
    pub column: &'static str,
    pub kind: ValueKind,
    /// Wrap the column in a null-coalescing expression on read.
    pub nullable: bool,
    pub primary_key: bool,
    pub foreign_key: Option<&'static str>,
    pub foreign_table: Option<&'static str>,
}

impl FieldDescriptor {
    pub const fn new(name: &'static str, column: &'static str, kind: ValueKind) -> Self {
        Self {
            name,
            column,
            kind,
            nullable: false,
            primary_key: false,
            foreign_key: None,
            foreign_table: None,
        }
    }

    pub const fn nullable(self) -> Self {
        Self {
            nullable: true,
            ..self
        }
    }

    pub const fn primary_key(self) -> Self {
        Self {
            primary_key: true,
            ..self
        }
    }

    /// Attach relationship metadata (not used by the statement builders).
    pub const fn foreign(self, key: &'static str, table: &'static str) -> Self {
        Self {
            foreign_key: Some(key),
            foreign_table: Some(table),
            ..self
        }
    }

    /// Whether the field has a column and takes part in generated SQL.
    pub const fn is_persisted(&self) -> bool {
        !self.column.is_empty()
    }
}

/// A row type whose fields can be compiled into SQL.
///
/// This trait should typically be derived using `#[derive(Record)]`
/// from the `tagsql-derive` crate.
pub trait Record {
    /// Field annotations in declaration order.
    const FIELDS: &'static [FieldDescriptor];

    /// Current value of the field at `index` in [`Record::FIELDS`].
    fn value(&self, index: usize) -> Option<Value>;

    /// Whether the field at `index` currently holds its zero value.
    fn is_zero(&self, index: usize) -> bool {
        self.value(index).is_none_or(|v| v.is_zero())
    }
}

/// A field descriptor paired with its current zero state.
#[derive(Debug, Clone, Copy)]
pub struct FieldState {
    pub descriptor: &'static FieldDescriptor,
    pub zero: bool,
}

impl FieldState {
    /// Persisted and holding a non-zero value.
    pub fn is_set(&self) -> bool {
        self.descriptor.is_persisted() && !self.zero
    }
}

/// Validated view over a record's descriptor table.
#[derive(Debug, Clone, Copy)]
pub struct RecordDescriptor {
    fields: &'static [FieldDescriptor],
    primary_key: Option<usize>,
}

impl RecordDescriptor {
    /// Validate a descriptor table.
    ///
    /// Rejects more than one primary key, nullable fields whose kind has no
    /// null-default literal, invalid column identifiers and columns shared by
    /// two fields.
    pub fn new(fields: &'static [FieldDescriptor]) -> BuildResult<Self> {
        let mut primary_key: Option<usize> = None;
        let mut columns: HashMap<&'static str, &'static str> = HashMap::new();

        for (index, field) in fields.iter().enumerate() {
            if field.is_persisted() {
                if !is_valid_ident(field.column) {
                    return Err(BuildError::invalid_ident(format!(
                        "column '{}' of field '{}'",
                        field.column, field.name
                    )));
                }
                if let Some(first) = columns.insert(field.column, field.name) {
                    return Err(BuildError::DuplicateColumn {
                        column: field.column,
                        first,
                        second: field.name,
                    });
                }
            }

            if field.nullable && field.kind.null_default_literal().is_none() {
                return Err(BuildError::UnsupportedNullDefault {
                    field: field.name,
                    kind: field.kind,
                });
            }

            if field.primary_key {
                if let Some(first) = primary_key {
                    return Err(BuildError::MultiplePrimaryKeys {
                        first: fields[first].name,
                        second: field.name,
                    });
                }
                primary_key = Some(index);
            }
        }

        // A key without a column cannot be used as a predicate.
        let primary_key = primary_key.filter(|&i| fields[i].is_persisted());

        Ok(Self {
            fields,
            primary_key,
        })
    }

    /// Descriptor for a record type.
    pub fn of<R: Record + ?Sized>() -> BuildResult<Self> {
        Self::new(R::FIELDS)
    }

    pub fn fields(&self) -> &'static [FieldDescriptor] {
        self.fields
    }

    /// The persisted primary-key field, if any.
    pub fn primary_key(&self) -> Option<&'static FieldDescriptor> {
        self.primary_key.map(|i| &self.fields[i])
    }

    /// Look up a field by its record identifier.
    pub fn field(&self, name: &str) -> Option<&'static FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Index of the first field persisted under `column`.
    pub fn column_index(&self, column: &str) -> Option<usize> {
        if column.is_empty() {
            return None;
        }
        self.fields.iter().position(|f| f.column == column)
    }

    /// Walk the fields of `record` in declaration order.
    pub fn introspect<R: Record + ?Sized>(&self, record: &R) -> impl Iterator<Item = FieldState> {
        let fields = self.fields;
        fields.iter().enumerate().map(move |(index, descriptor)| FieldState {
            descriptor,
            zero: record.is_zero(index),
        })
    }
}
