//! Named placeholder resolution.
//!
//! Rewrites `:column` tokens into positional `?` markers and collects the
//! matching record values in occurrence order. A repeated name is bound once
//! per occurrence. `::` (Postgres casts) is left untouched.

use crate::error::{BuildError, BuildResult};
use crate::query::BuiltQuery;
use crate::record::Record;
use regex::Regex;
use std::sync::OnceLock;

fn placeholder_re() -> &'static Regex {
    static PLACEHOLDER_RE: OnceLock<Regex> = OnceLock::new();
    PLACEHOLDER_RE.get_or_init(|| {
        Regex::new(r"::|:([A-Za-z_][A-Za-z0-9_]*)").expect("invalid built-in placeholder regex")
    })
}

/// Resolve every `:name` in `sql` against the columns of `record`.
///
/// Fails with [`BuildError::UnboundPlaceholder`] if a name does not match any
/// persisted column.
pub fn resolve<R: Record + ?Sized>(sql: &str, record: &R) -> BuildResult<BuiltQuery> {
    let mut out = String::with_capacity(sql.len());
    let mut params = Vec::new();
    let mut last = 0;

    for caps in placeholder_re().captures_iter(sql) {
        let Some(name) = caps.get(1) else {
            continue;
        };
        let token = caps.get(0).unwrap_or(name);

        let value = R::FIELDS
            .iter()
            .position(|f| f.is_persisted() && f.column == name.as_str())
            .and_then(|index| record.value(index))
            .ok_or_else(|| BuildError::UnboundPlaceholder {
                name: name.as_str().to_string(),
            })?;

        out.push_str(&sql[last..token.start()]);
        out.push('?');
        params.push(value);
        last = token.end();
    }
    out.push_str(&sql[last..]);

    Ok(BuiltQuery::new(out, params))
}
