//! Convenient imports for typical `tagsql` usage.
//!
//! ```ignore
//! use tagsql::prelude::*;
//! ```

pub use crate::{
    BuildError, BuildResult, BuiltQuery, FieldMask, FieldValue, Record, Value, build_create,
    build_delete, build_read, build_update,
};

pub use crate::{Compiler, Config, Dialect};
