//! Bound values and the per-type rules for zero testing and null defaults.

use serde::Serialize;

/// The closed set of value kinds a record field can have.
///
/// The kind decides two things: whether the field's current value counts as
/// "unset" (zero) and which literal stands in for `NULL` on read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ValueKind {
    Integer,
    Float,
    Text,
    Boolean,
    Other,
}

impl ValueKind {
    /// Literal substituted for `NULL` in a null-coalescing projection.
    ///
    /// Returns `None` for kinds that have no sensible zero literal; a nullable
    /// field of such a kind is rejected when the record descriptor is built.
    pub const fn null_default_literal(self) -> Option<&'static str> {
        match self {
            ValueKind::Integer | ValueKind::Boolean => Some("0"),
            ValueKind::Float => Some("0.0"),
            ValueKind::Text => Some("''"),
            ValueKind::Other => None,
        }
    }

    /// Whether filters on this kind compare with `LIKE` rather than `=`.
    pub const fn is_pattern_matched(self) -> bool {
        matches!(self, ValueKind::Text)
    }
}

/// A value bound to a positional placeholder.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    /// Unsigned value above `i64::MAX`; smaller unsigned values bind as [`Value::Int`].
    UInt(u64),
    Float(f64),
    Text(String),
    Bytes(Vec<u8>),
    Timestamp(chrono::NaiveDateTime),
    Date(chrono::NaiveDate),
    Uuid(uuid::Uuid),
    Json(serde_json::Value),
}

impl Value {
    /// Zero test on a bound value: `0`, `0.0`, `""` and `NULL` are zero.
    ///
    /// Every other variant is never zero, so fields of those kinds are always
    /// included by the create and read builders.
    pub fn is_zero(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Int(v) => *v == 0,
            Value::UInt(v) => *v == 0,
            Value::Float(v) => *v == 0.0,
            Value::Text(v) => v.is_empty(),
            Value::Bool(_)
            | Value::Bytes(_)
            | Value::Timestamp(_)
            | Value::Date(_)
            | Value::Uuid(_)
            | Value::Json(_) => false,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

/// Conversion from a record field type to its [`ValueKind`] and bound [`Value`].
///
/// `#[derive(Record)]` requires every persisted field type to implement this.
pub trait FieldValue {
    /// The kind of this field type.
    const KIND: ValueKind;

    /// Snapshot the current value for binding.
    fn to_value(&self) -> Value;

    /// Whether the current value is the type's zero value (treated as "unset").
    fn is_zero(&self) -> bool {
        self.to_value().is_zero()
    }
}

macro_rules! impl_integer {
    ($($t:ty),*) => {
        $(
            impl FieldValue for $t {
                const KIND: ValueKind = ValueKind::Integer;

                fn to_value(&self) -> Value {
                    Value::Int(i64::from(*self))
                }

                fn is_zero(&self) -> bool {
                    *self == 0
                }
            }
        )*
    };
}

impl_integer!(i8, i16, i32, i64, u8, u16, u32);

macro_rules! impl_wide_integer {
    ($($t:ty),*) => {
        $(
            impl FieldValue for $t {
                const KIND: ValueKind = ValueKind::Integer;

                fn to_value(&self) -> Value {
                    match i64::try_from(*self) {
                        Ok(v) => Value::Int(v),
                        Err(_) => Value::UInt(*self as u64),
                    }
                }

                fn is_zero(&self) -> bool {
                    *self == 0
                }
            }
        )*
    };
}

// Values that fit bind as `Int`; only unsigned values past `i64::MAX` use `UInt`.
impl_wide_integer!(isize, u64, usize);

impl FieldValue for f32 {
    const KIND: ValueKind = ValueKind::Float;

    fn to_value(&self) -> Value {
        Value::Float(f64::from(*self))
    }

    fn is_zero(&self) -> bool {
        *self == 0.0
    }
}

impl FieldValue for f64 {
    const KIND: ValueKind = ValueKind::Float;

    fn to_value(&self) -> Value {
        Value::Float(*self)
    }

    fn is_zero(&self) -> bool {
        *self == 0.0
    }
}

impl FieldValue for String {
    const KIND: ValueKind = ValueKind::Text;

    fn to_value(&self) -> Value {
        Value::Text(self.clone())
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

// Booleans are never elided, but still default to `0` when nullable.
impl FieldValue for bool {
    const KIND: ValueKind = ValueKind::Boolean;

    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }

    fn is_zero(&self) -> bool {
        false
    }
}

impl FieldValue for Vec<u8> {
    const KIND: ValueKind = ValueKind::Other;

    fn to_value(&self) -> Value {
        Value::Bytes(self.clone())
    }
}

impl FieldValue for chrono::NaiveDateTime {
    const KIND: ValueKind = ValueKind::Other;

    fn to_value(&self) -> Value {
        Value::Timestamp(*self)
    }
}

impl FieldValue for chrono::DateTime<chrono::Utc> {
    const KIND: ValueKind = ValueKind::Other;

    fn to_value(&self) -> Value {
        Value::Timestamp(self.naive_utc())
    }
}

impl FieldValue for chrono::NaiveDate {
    const KIND: ValueKind = ValueKind::Other;

    fn to_value(&self) -> Value {
        Value::Date(*self)
    }
}

impl FieldValue for uuid::Uuid {
    const KIND: ValueKind = ValueKind::Other;

    fn to_value(&self) -> Value {
        Value::Uuid(*self)
    }
}

impl FieldValue for serde_json::Value {
    const KIND: ValueKind = ValueKind::Other;

    fn to_value(&self) -> Value {
        Value::Json(self.clone())
    }
}

// Option<T> tracks presence: `None` is unset, `Some(v)` is set even when `v` is zero.
impl<T: FieldValue> FieldValue for Option<T> {
    const KIND: ValueKind = T::KIND;

    fn to_value(&self) -> Value {
        self.as_ref().map_or(Value::Null, FieldValue::to_value)
    }

    fn is_zero(&self) -> bool {
        self.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_values_per_kind() {
        assert!(0_i32.is_zero());
        assert!(!7_i64.is_zero());
        assert!(0.0_f64.is_zero());
        assert!(!1.5_f32.is_zero());
        assert!(String::new().is_zero());
        assert!(!"x".to_string().is_zero());
    }

    #[test]
    fn wide_integers() {
        assert!(0_u64.is_zero());
        assert!(0_usize.is_zero());
        assert!(0_isize.is_zero());
        assert!(!3_usize.is_zero());
        assert_eq!(<u64 as FieldValue>::KIND, ValueKind::Integer);
        assert_eq!(<isize as FieldValue>::KIND, ValueKind::Integer);

        assert_eq!(42_u64.to_value(), Value::Int(42));
        assert_eq!(7_usize.to_value(), Value::Int(7));
        assert_eq!((-5_isize).to_value(), Value::Int(-5));
        assert_eq!(u64::MAX.to_value(), Value::UInt(u64::MAX));
        assert!(!Value::UInt(u64::MAX).is_zero());
        assert!(Value::UInt(0).is_zero());
    }

    #[test]
    fn booleans_and_other_kinds_are_never_zero() {
        assert!(!false.is_zero());
        assert!(!Vec::<u8>::new().is_zero());
        assert!(!uuid::Uuid::nil().is_zero());
        assert!(!serde_json::Value::Null.is_zero());
    }

    #[test]
    fn option_tracks_presence() {
        let unset: Option<i32> = None;
        let zero: Option<i32> = Some(0);
        assert!(unset.is_zero());
        assert!(!zero.is_zero());
        assert_eq!(unset.to_value(), Value::Null);
        assert_eq!(zero.to_value(), Value::Int(0));
        assert_eq!(<Option<String> as FieldValue>::KIND, ValueKind::Text);
    }

    #[test]
    fn null_default_literals() {
        assert_eq!(ValueKind::Integer.null_default_literal(), Some("0"));
        assert_eq!(ValueKind::Boolean.null_default_literal(), Some("0"));
        assert_eq!(ValueKind::Float.null_default_literal(), Some("0.0"));
        assert_eq!(ValueKind::Text.null_default_literal(), Some("''"));
        assert_eq!(ValueKind::Other.null_default_literal(), None);
    }

    #[test]
    fn value_zero_test() {
        assert!(Value::Null.is_zero());
        assert!(Value::Int(0).is_zero());
        assert!(Value::Text(String::new()).is_zero());
        assert!(!Value::Bool(false).is_zero());
        assert!(!Value::Float(0.5).is_zero());
    }

    #[test]
    fn values_serialize_untagged() {
        let values = vec![Value::Int(1), Value::Text("a".into()), Value::Null];
        let json = serde_json::to_string(&values).unwrap();
        assert_eq!(json, r#"[1,"a",null]"#);
    }
}
