//! Example showing the four statements generated for a derived record.
//!
//! Run with:
//!   cargo run --example crud_derive -p tagsql
//!
//! Set the dialect in a .env file or environment variable:
//!   TAGSQL_SQL_DRIVER=pgsql
//!
//! Set RUST_LOG=tagsql=debug to see the build events.

use tagsql::prelude::*;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Default, Record)]
#[allow(dead_code)]
struct Task {
    #[orm(id, column = "id")]
    id: i32,
    #[orm(column = "title", nullable)]
    title: String,
    #[orm(column = "estimate", nullable)]
    estimate: f64,
    #[orm(column = "project_id", foreign_key = "id", foreign_table = "projects")]
    project_id: i32,
    #[orm(column = "is_active")]
    is_active: i32,
    // Request-only, never persisted.
    order_by: String,
}

fn print(label: &str, query: &BuiltQuery) {
    println!("{label}:\n  {}\n  {:?}", query.sql(), query.params());
}

fn main() -> Result<(), BuildError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("dialect: {:?}", Config::global().dialect);

    let mut task = Task {
        title: "Write report".to_string(),
        estimate: 1.5,
        project_id: 7,
        is_active: 1,
        order_by: "id".to_string(),
        ..Task::default()
    };
    print("create", &build_create("task", &task)?);

    task.id = 42;
    print("read", &build_read("task", &Task { title: "%report%".into(), ..Task::default() })?);
    print("update", &build_update("task", &task, &FieldMask::new(["title", "estimate"]))?);

    task.is_active = 0;
    print("delete", &build_delete("task", &task)?);

    Ok(())
}
