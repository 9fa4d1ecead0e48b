//! Table name validation.
//!
//! Table names are spliced into SQL text, so they are checked before use.
//! Each dot-separated part must match `[A-Za-z_][A-Za-z0-9_$]*`.
//!
//! # Example
//! ```ignore
//! use tagsql::TableName;
//!
//! let t = TableName::parse("public.users")?;
//! assert_eq!(t.as_str(), "public.users");
//! # Ok::<(), tagsql::BuildError>(())
//! ```

use crate::error::{BuildError, BuildResult};
use std::fmt;

/// A validated, possibly schema-qualified, table name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TableName(String);

impl TableName {
    pub fn parse(s: &str) -> BuildResult<Self> {
        if s.is_empty() {
            return Err(BuildError::invalid_ident("Table name cannot be empty"));
        }

        for part in s.split('.') {
            validate_part(part).map_err(|reason| {
                BuildError::invalid_ident(format!("'{s}': {reason}"))
            })?;
        }

        Ok(Self(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn validate_part(part: &str) -> Result<(), String> {
    let mut chars = part.chars();
    let Some(first) = chars.next() else {
        return Err("empty identifier segment".to_string());
    };
    if !(first == '_' || first.is_ascii_alphabetic()) {
        return Err(format!("invalid start character '{first}'"));
    }
    match chars.find(|&c| !(c == '_' || c == '$' || c.is_ascii_alphanumeric())) {
        Some(c) => Err(format!("invalid character '{c}'")),
        None => Ok(()),
    }
}

/// Whether `s` is a single unqualified identifier.
pub fn is_valid_ident(s: &str) -> bool {
    validate_part(s).is_ok()
}

impl fmt::Display for TableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
