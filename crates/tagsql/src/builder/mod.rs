//! Statement builders.
//!
//! Each builder walks the record's field descriptors, assembles SQL with
//! `:column` placeholders and then resolves them into `?` markers plus the
//! bound values, in order.
//!
//! - INSERT skips key fields and zero values.
//! - SELECT projects every column and filters on non-zero values.
//! - UPDATE sets the masked fields and is keyed on the primary key.
//! - DELETE is keyed on the primary key and becomes a soft delete when the
//!   record carries an active flag.

pub mod delete;
pub mod insert;
pub mod select;
pub mod traits;
pub mod update;

pub use delete::DeleteBuilder;
pub use insert::InsertBuilder;
pub use select::SelectBuilder;
pub use traits::SqlBuilder;
pub use update::{FieldMask, UpdateBuilder};

use crate::config::Config;
use crate::error::BuildResult;
use crate::query::BuiltQuery;
use crate::record::Record;

/// Runs the four builders against an explicit [`Config`].
///
/// The free functions ([`build_create`] etc.) use [`Config::global`] instead.
#[derive(Debug, Clone, Default)]
pub struct Compiler {
    config: Config,
}

impl Compiler {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn create<R: Record + ?Sized>(&self, table: &str, record: &R) -> BuildResult<BuiltQuery> {
        InsertBuilder::new(table, record).build()
    }

    pub fn read<R: Record + ?Sized>(&self, table: &str, record: &R) -> BuildResult<BuiltQuery> {
        SelectBuilder::new(table, record)
            .dialect(self.config.dialect)
            .build()
    }

    pub fn update<R: Record + ?Sized>(
        &self,
        table: &str,
        record: &R,
        mask: &FieldMask,
    ) -> BuildResult<BuiltQuery> {
        UpdateBuilder::new(table, record, mask).build()
    }

    pub fn delete<R: Record + ?Sized>(&self, table: &str, record: &R) -> BuildResult<BuiltQuery> {
        DeleteBuilder::new(table, record)
            .active_field(&self.config.active_field)
            .build()
    }
}

/// Build an INSERT for the non-zero, non-key fields of `record`.
pub fn build_create<R: Record + ?Sized>(table: &str, record: &R) -> BuildResult<BuiltQuery> {
    InsertBuilder::new(table, record).build()
}

/// Build a SELECT filtered on the non-zero fields of `record`.
pub fn build_read<R: Record + ?Sized>(table: &str, record: &R) -> BuildResult<BuiltQuery> {
    SelectBuilder::new(table, record)
        .dialect(Config::global().dialect)
        .build()
}

/// Build an UPDATE of the fields named in `mask`, keyed on the primary key.
pub fn build_update<R: Record + ?Sized>(
    table: &str,
    record: &R,
    mask: &FieldMask,
) -> BuildResult<BuiltQuery> {
    UpdateBuilder::new(table, record, mask).build()
}

/// Build a DELETE (or soft-delete UPDATE) keyed on the primary key.
pub fn build_delete<R: Record + ?Sized>(table: &str, record: &R) -> BuildResult<BuiltQuery> {
    DeleteBuilder::new(table, record)
        .active_field(&Config::global().active_field)
        .build()
}
