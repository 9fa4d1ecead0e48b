//! End-to-end tests for `#[derive(Record)]` with the statement builders.
//!
//! These tests do NOT touch a database; they only check generated SQL and bindings.

#![allow(dead_code)]

use tagsql::prelude::*;
use tagsql::{FieldDescriptor, RecordDescriptor, ValueKind};

// ── Record definitions ─────────────────────────────────────────────────────

#[derive(Debug, Default, Record)]
struct Item {
    #[orm(id, column = "id")]
    id: i32,
    #[orm(column = "name", nullable)]
    name: String,
    #[orm(column = "is_active")]
    is_active: i32,
}

#[derive(Debug, Default, Record)]
struct TimesheetLine {
    #[orm(primary_key, column = "id")]
    id: i64,
    #[orm(column = "employee_id", foreign_key = "id", foreign_table = "employees")]
    employee_id: i64,
    #[orm(column = "hours", nullable = "y")]
    hours: f64,
    #[orm(column)]
    note: Option<String>,
    #[orm(column = "approved")]
    approved: bool,
    #[orm(column = "external_ref")]
    external_ref: Option<uuid::Uuid>,
    field_mask: Vec<String>,
}

#[derive(Debug, Record)]
struct Tagged<T> {
    #[orm(id, column = "id")]
    id: i32,
    #[orm(column = "payload")]
    payload: T,
}

#[derive(Debug, Default, Record)]
struct Counter {
    #[orm(id, column = "id")]
    id: u64,
    #[orm(column = "hits", nullable)]
    hits: usize,
    #[orm(column = "delta")]
    delta: isize,
}

fn compiler() -> Compiler {
    Compiler::new(Config::new())
}

// ── Descriptor table ───────────────────────────────────────────────────────

#[test]
fn derive_builds_descriptor_table() {
    let fields = TimesheetLine::FIELDS;
    assert_eq!(fields.len(), 7);
    assert_eq!(
        fields[0],
        FieldDescriptor::new("id", "id", ValueKind::Integer).primary_key()
    );
    assert_eq!(fields[1].foreign_table, Some("employees"));
    assert_eq!(fields[1].foreign_key, Some("id"));
    assert!(fields[2].nullable);
    assert_eq!(fields[2].kind, ValueKind::Float);
    assert_eq!(fields[3].column, "note");
    assert_eq!(fields[4].kind, ValueKind::Boolean);
    assert_eq!(fields[5].kind, ValueKind::Other);
    assert!(!fields[6].is_persisted());

    let desc = RecordDescriptor::of::<TimesheetLine>().unwrap();
    assert_eq!(desc.primary_key().map(|f| f.name), Some("id"));
}

// ── Example scenario: all fields at zero ───────────────────────────────────

#[test]
fn all_zero_record() {
    let item = Item::default();
    let c = compiler();

    let create = c.create("t", &item).unwrap();
    assert_eq!(create.sql(), "INSERT INTO t () VALUES ()");

    let read = c.read("t", &item).unwrap();
    assert_eq!(
        read.sql(),
        "SELECT id, ifnull(name, '') as name, is_active FROM t WHERE true"
    );
    assert!(read.params().is_empty());

    let delete = c.delete("t", &item).unwrap();
    assert_eq!(delete.sql(), "UPDATE t SET is_active = ? WHERE id = ?");
    assert_eq!(delete.params(), &[Value::Int(0), Value::Int(0)]);
}

#[test]
fn populated_record() {
    let item = Item {
        id: 4,
        name: "lamp".to_string(),
        is_active: 1,
    };
    let c = compiler();

    let create = c.create("items", &item).unwrap();
    assert_eq!(create.sql(), "INSERT INTO items (name, is_active) VALUES (?, ?)");
    assert_eq!(create.params(), &[Value::Text("lamp".into()), Value::Int(1)]);

    let read = c.read("items", &item).unwrap();
    assert_eq!(
        read.sql(),
        "SELECT id, ifnull(name, '') as name, is_active FROM items \
         WHERE true AND id = ? AND name LIKE ? AND is_active = ?"
    );
    assert_eq!(read.params().len(), read.placeholder_count());

    let update = c.update("items", &item, &FieldMask::new(["is_active"])).unwrap();
    assert_eq!(update.sql(), "UPDATE items SET is_active = ? WHERE id = ?");
    assert_eq!(update.params(), &[Value::Int(1), Value::Int(4)]);
}

// ── Presence tracking and non-elided kinds ─────────────────────────────────

#[test]
fn option_fields_track_presence() {
    let line = TimesheetLine {
        id: 10,
        note: Some(String::new()),
        ..TimesheetLine::default()
    };
    let read = compiler().read("timesheet_line", &line).unwrap();

    // `note` is set (to an empty string) so it filters; `external_ref` is None so it does not.
    assert!(read.sql().contains("AND note LIKE ?"));
    assert!(!read.sql().contains("external_ref ="));
    // Booleans are never elided.
    assert!(read.sql().contains("AND approved = ?"));
    assert_eq!(
        read.params(),
        &[Value::Int(10), Value::Text(String::new()), Value::Bool(false)]
    );
}

#[test]
fn other_kinds_are_always_inserted_when_present() {
    let uid = uuid::Uuid::nil();
    let line = TimesheetLine {
        hours: 7.5,
        external_ref: Some(uid),
        ..TimesheetLine::default()
    };
    let create = compiler().create("timesheet_line", &line).unwrap();
    assert_eq!(
        create.sql(),
        "INSERT INTO timesheet_line (hours, approved, external_ref) VALUES (?, ?, ?)"
    );
    assert_eq!(
        create.params(),
        &[Value::Float(7.5), Value::Bool(false), Value::Uuid(uid)]
    );
}

#[test]
fn hard_delete_without_active_flag() {
    let line = TimesheetLine {
        id: 3,
        ..TimesheetLine::default()
    };
    let delete = compiler().delete("timesheet_line", &line).unwrap();
    assert_eq!(delete.sql(), "DELETE FROM timesheet_line WHERE id = ?");
    assert_eq!(delete.params(), &[Value::Int(3)]);
}

#[test]
fn update_ignores_unpersisted_and_key_fields_in_mask() {
    let line = TimesheetLine {
        id: 3,
        ..TimesheetLine::default()
    };
    let mask = FieldMask::new(["id", "field_mask", "hours", "note"]);
    let update = compiler().update("timesheet_line", &line, &mask).unwrap();
    assert_eq!(
        update.sql(),
        "UPDATE timesheet_line SET hours = ?, note = ? WHERE id = ?"
    );
    assert_eq!(
        update.params(),
        &[Value::Float(0.0), Value::Null, Value::Int(3)]
    );
}

// ── Dialects ───────────────────────────────────────────────────────────────

#[test]
fn dialect_switch() {
    let line = TimesheetLine::default();
    let mysql = compiler().read("t", &line).unwrap();
    let pg = Compiler::new(Config::new().dialect(Dialect::Postgres))
        .read("t", &line)
        .unwrap();

    assert!(mysql.sql().contains("ifnull(hours, 0.0) as hours"));
    assert!(pg.sql().contains("coalesce(hours, 0.0) as hours"));
    assert_ne!(mysql.sql(), pg.sql());
}

// ── Wide integers ──────────────────────────────────────────────────────────

#[test]
fn wide_integer_fields_bind_and_elide() {
    let zero = Counter::default();
    let read = compiler().read("counters", &zero).unwrap();
    assert_eq!(
        read.sql(),
        "SELECT id, ifnull(hits, 0) as hits, delta FROM counters WHERE true"
    );
    assert!(read.params().is_empty());

    let counter = Counter {
        id: u64::MAX,
        hits: 12,
        delta: -3,
    };
    let create = compiler().create("counters", &counter).unwrap();
    assert_eq!(create.sql(), "INSERT INTO counters (hits, delta) VALUES (?, ?)");
    assert_eq!(create.params(), &[Value::Int(12), Value::Int(-3)]);

    let update = compiler()
        .update("counters", &counter, &FieldMask::new(["hits"]))
        .unwrap();
    assert_eq!(update.sql(), "UPDATE counters SET hits = ? WHERE id = ?");
    assert_eq!(update.params(), &[Value::Int(12), Value::UInt(u64::MAX)]);
}

// ── Generic records ────────────────────────────────────────────────────────

#[test]
fn generic_record() {
    let tagged = Tagged {
        id: 1,
        payload: 2.5_f64,
    };
    let q = compiler().read("tagged", &tagged).unwrap();
    assert_eq!(
        q.sql(),
        "SELECT id, payload FROM tagged WHERE true AND id = ? AND payload = ?"
    );
    assert_eq!(q.params(), &[Value::Int(1), Value::Float(2.5)]);
    assert_eq!(Tagged::<String>::FIELDS[1].kind, ValueKind::Text);
}

// ── Free functions ─────────────────────────────────────────────────────────

#[test]
fn free_functions_match_default_compiler_for_dialect_independent_ops() {
    let item = Item {
        id: 9,
        name: "x".into(),
        is_active: 0,
    };
    assert_eq!(
        build_create("items", &item).unwrap(),
        compiler().create("items", &item).unwrap()
    );
    assert_eq!(
        build_update("items", &item, &FieldMask::all::<Item>()).unwrap(),
        compiler().update("items", &item, &FieldMask::all::<Item>()).unwrap()
    );
    assert!(build_read("items", &item).is_ok());
}
