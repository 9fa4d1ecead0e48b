use crate::error::BuildResult;
use crate::named;
use crate::query::BuiltQuery;
use crate::record::Record;

/// Base trait for statement builders.
///
/// Implementors assemble SQL with `:column` placeholders; [`SqlBuilder::build`]
/// resolves them against the source record.
pub trait SqlBuilder {
    /// The record the statement is built from.
    type Source: Record + ?Sized;

    /// Statement kind, used in log events.
    const OPERATION: &'static str;

    fn table(&self) -> &str;

    fn source(&self) -> &Self::Source;

    /// Build the SQL string with named placeholders.
    fn build_named(&self) -> BuildResult<String>;

    /// Build the final SQL with positional placeholders and its bindings.
    fn build(&self) -> BuildResult<BuiltQuery> {
        let result = self
            .build_named()
            .and_then(|sql| named::resolve(&sql, self.source()));

        #[cfg(feature = "tracing")]
        log_outcome(Self::OPERATION, self.table(), &result);

        result
    }
}

#[cfg(feature = "tracing")]
fn log_outcome(op: &'static str, table: &str, result: &BuildResult<BuiltQuery>) {
    match result {
        Ok(query) => tracing::debug!(
            target: "tagsql.sql",
            op,
            table,
            param_count = query.params().len(),
            sql = %query.sql(),
        ),
        Err(error) => tracing::warn!(
            target: "tagsql.sql",
            op,
            table,
            %error,
            "statement build failed"
        ),
    }
}
