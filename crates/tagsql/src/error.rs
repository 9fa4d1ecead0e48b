//! Error types for tagsql

use crate::value::ValueKind;
use thiserror::Error;

/// Result type alias for statement building
pub type BuildResult<T> = Result<T, BuildError>;

/// Errors raised while compiling a record into SQL.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BuildError {
    /// A `:name` placeholder has no matching column on the record
    #[error("Could not find name '{name}' in record")]
    UnboundPlaceholder { name: String },

    /// A nullable field has a value kind with no zero literal for the null-coalescing default
    #[error("Cannot determine a null default for field '{field}' of kind {kind:?}")]
    UnsupportedNullDefault { field: &'static str, kind: ValueKind },

    /// More than one field is tagged as primary key
    #[error("Multiple primary keys declared: '{first}' and '{second}'")]
    MultiplePrimaryKeys {
        first: &'static str,
        second: &'static str,
    },

    /// Two persisted fields share a column, so `:column` would bind only one of them
    #[error("Column '{column}' is used by both '{first}' and '{second}'")]
    DuplicateColumn {
        column: &'static str,
        first: &'static str,
        second: &'static str,
    },

    /// UPDATE/DELETE requested on a record without a primary-key column
    #[error("No primary key column on record for table '{table}'")]
    MissingPrimaryKey { table: String },

    /// UPDATE with nothing to SET
    #[error("UPDATE on table '{table}' has no columns to set")]
    EmptyUpdate { table: String },

    /// Invalid SQL identifier
    #[error("Invalid identifier: {0}")]
    InvalidIdent(String),
}

impl BuildError {
    /// Create an invalid identifier error
    pub fn invalid_ident(message: impl Into<String>) -> Self {
        Self::InvalidIdent(message.into())
    }

    /// Check if this is a placeholder binding error
    pub fn is_unbound_placeholder(&self) -> bool {
        matches!(self, Self::UnboundPlaceholder { .. })
    }

    /// Check if this error comes from the record's annotations rather than the call
    pub fn is_record_defect(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedNullDefault { .. }
                | Self::MultiplePrimaryKeys { .. }
                | Self::DuplicateColumn { .. }
        )
    }
}
