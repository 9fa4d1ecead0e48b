use super::traits::SqlBuilder;
use crate::config::Dialect;
use crate::error::{BuildError, BuildResult};
use crate::ident::TableName;
use crate::record::{Record, RecordDescriptor};

/// SELECT builder using the record both as projection and as filter template.
///
/// - Every persisted field is projected; nullable ones are wrapped as
///   `<null_fn>(col, <default>) as col`.
/// - Every persisted field with a non-zero value adds ` AND col = :col`
///   (`LIKE` for text; wildcards are up to the caller) after a `WHERE true` base.
#[must_use]
pub struct SelectBuilder<'a, R: Record + ?Sized> {
    table: &'a str,
    record: &'a R,
    dialect: Dialect,
}

impl<'a, R: Record + ?Sized> SelectBuilder<'a, R> {
    pub fn new(table: &'a str, record: &'a R) -> Self {
        Self {
            table,
            record,
            dialect: Dialect::default(),
        }
    }

    /// Set the dialect used for null-coalescing projections.
    pub fn dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }
}

impl<R: Record + ?Sized> SqlBuilder for SelectBuilder<'_, R> {
    type Source = R;

    const OPERATION: &'static str = "select";

    fn table(&self) -> &str {
        self.table
    }

    fn source(&self) -> &R {
        self.record
    }

    fn build_named(&self) -> BuildResult<String> {
        let table = TableName::parse(self.table)?;
        let descriptor = RecordDescriptor::of::<R>()?;
        let null_fn = self.dialect.null_fn();

        let mut projection = Vec::with_capacity(descriptor.fields().len());
        let mut predicate = String::from(" WHERE true");

        for field in descriptor.introspect(self.record) {
            let d = field.descriptor;
            if !d.is_persisted() {
                continue;
            }
            let col = d.column;

            if d.nullable {
                let default = d.kind.null_default_literal().ok_or(
                    BuildError::UnsupportedNullDefault {
                        field: d.name,
                        kind: d.kind,
                    },
                )?;
                projection.push(format!("{null_fn}({col}, {default}) as {col}"));
            } else {
                projection.push(col.to_string());
            }

            if !field.zero {
                let op = if d.kind.is_pattern_matched() { "LIKE" } else { "=" };
                predicate.push_str(&format!(" AND {col} {op} :{col}"));
            }
        }

        let mut sql = String::from("SELECT ");
        if !projection.is_empty() {
            sql.push_str(&projection.join(", "));
            sql.push(' ');
        }
        sql.push_str("FROM ");
        sql.push_str(table.as_str());
        sql.push_str(&predicate);
        Ok(sql)
    }
}
