use crate::value::Value;
use serde::Serialize;

/// Final SQL text with `?` markers and the values bound to them, in order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuiltQuery {
    sql: String,
    params: Vec<Value>,
}

impl BuiltQuery {
    pub fn new(sql: String, params: Vec<Value>) -> Self {
        Self { sql, params }
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn params(&self) -> &[Value] {
        &self.params
    }

    /// Number of positional markers in the SQL text.
    pub fn placeholder_count(&self) -> usize {
        self.sql.matches('?').count()
    }

    pub fn into_parts(self) -> (String, Vec<Value>) {
        (self.sql, self.params)
    }
}
