use super::traits::SqlBuilder;
use crate::config::DEFAULT_ACTIVE_FIELD;
use crate::error::{BuildError, BuildResult};
use crate::ident::TableName;
use crate::record::{Record, RecordDescriptor};

/// DELETE builder keyed on the primary key.
///
/// Records with a persisted active-flag field (`is_active` by default) are
/// soft deleted instead: the flag column is set to whatever value the record
/// currently holds.
#[must_use]
pub struct DeleteBuilder<'a, R: Record + ?Sized> {
    table: &'a str,
    record: &'a R,
    active_field: &'a str,
}

impl<'a, R: Record + ?Sized> DeleteBuilder<'a, R> {
    pub fn new(table: &'a str, record: &'a R) -> Self {
        Self {
            table,
            record,
            active_field: DEFAULT_ACTIVE_FIELD,
        }
    }

    /// Set the field identifier that marks a soft-deletable record.
    pub fn active_field(mut self, name: &'a str) -> Self {
        self.active_field = name;
        self
    }
}

impl<R: Record + ?Sized> SqlBuilder for DeleteBuilder<'_, R> {
    type Source = R;

    const OPERATION: &'static str = "delete";

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
            })?
            .column;

        let active = descriptor
            .field(self.active_field)
            .filter(|f| f.is_persisted());

        Ok(match active {
            Some(flag) => format!(
                "UPDATE {table} SET {0} = :{0} WHERE {key} = :{key}",
                flag.column
            ),
            None => format!("DELETE FROM {table} WHERE {key} = :{key}"),
        })
    }
}
