use super::traits::SqlBuilder;
use crate::error::{BuildError, BuildResult};
use crate::ident::TableName;
use crate::record::{Record, RecordDescriptor};
use std::collections::HashSet;

/// Set of record field identifiers an UPDATE may modify.
///
/// Keys are field names (`is_active`), not column names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMask {
    fields: HashSet<String>,
}

impl FieldMask {
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    /// Mask selecting every persisted, non-key field of `R`.
    pub fn all<R: Record + ?Sized>() -> Self {
        Self::new(
            R::FIELDS
                .iter()
                .filter(|f| f.is_persisted() && !f.primary_key)
                .map(|f| f.name),
        )
    }

    pub fn insert(&mut self, field: impl Into<String>) -> &mut Self {
        self.fields.insert(field.into());
        self
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains(field)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for FieldMask {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// UPDATE builder keyed on the primary key.
///
/// Only masked fields are set, whatever their value. Fails if the record has
/// no primary key or nothing to set, so a table-wide UPDATE is never emitted.
#[must_use]
pub struct UpdateBuilder<'a, R: Record + ?Sized> {
    table: &'a str,
    record: &'a R,
    mask: &'a FieldMask,
}

impl<'a, R: Record + ?Sized> UpdateBuilder<'a, R> {
    pub fn new(table: &'a str, record: &'a R, mask: &'a FieldMask) -> Self {
        Self {
            table,
            record,
            mask,
        }
    }
}

impl<R: Record + ?Sized> SqlBuilder for UpdateBuilder<'_, R> {
    type Source = R;

    const OPERATION: &'static str = "update";

    fn table(&self) -> &str {
        self.table
    }

    fn source(&self) -> &R {
        self.record
    }

    fn build_named(&self) -> BuildResult<String> {
        let table = TableName::parse(self.table)?;
        let descriptor = RecordDescriptor::of::<R>()?;

        let key = descriptor
            .primary_key()
            .ok_or_else(|| BuildError::MissingPrimaryKey {
                table: self.table.to_string(),
            })?;

        let sets: Vec<String> = descriptor
            .fields()
            .iter()
            .filter(|f| f.is_persisted() && !f.primary_key && self.mask.contains(f.name))
            .map(|f| format!("{0} = :{0}", f.column))
            .collect();

        if sets.is_empty() {
            return Err(BuildError::EmptyUpdate {
                table: self.table.to_string(),
            });
        }

        Ok(format!(
            "UPDATE {table} SET {} WHERE {1} = :{1}",
            sets.join(", "),
            key.column
        ))
    }
}
