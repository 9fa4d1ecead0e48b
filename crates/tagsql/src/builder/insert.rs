use super::traits::SqlBuilder;
use crate::error::BuildResult;
use crate::ident::TableName;
use crate::record::{Record, RecordDescriptor};

/// INSERT builder.
///
/// Inserts every persisted, non-key field whose value is not zero. Key
/// columns are left to the database; zero fields fall back to column defaults.
#[must_use]
pub struct InsertBuilder<'a, R: Record + ?Sized> {
    table: &'a str,
    record: &'a R,
}

impl<'a, R: Record + ?Sized> InsertBuilder<'a, R> {
    pub fn new(table: &'a str, record: &'a R) -> Self {
        Self { table, record }
    }
}

impl<R: Record + ?Sized> SqlBuilder for InsertBuilder<'_, R> {
    type Source = R;

    const OPERATION: &'static str = "insert";

    fn table(&self) -> &str {
        self.table
    }

    fn source(&self) -> &R {
        self.record
    }

    fn build_named(&self) -> BuildResult<String> {
        let table = TableName::parse(self.table)?;
        let descriptor = RecordDescriptor::of::<R>()?;

        let columns: Vec<&str> = descriptor
            .introspect(self.record)
            .filter(|f| f.is_set() && !f.descriptor.primary_key)
            .map(|f| f.descriptor.column)
            .collect();
        let values: Vec<String> = columns.iter().map(|c| format!(":{c}")).collect();

        // No insertable fields yields `INSERT INTO t () VALUES ()`.
        Ok(format!(
            "INSERT INTO {table} ({}) VALUES ({})",
            columns.join(", "),
            values.join(", ")
        ))
    }
}
