//! Declarative field tables and the generic parse-with-defaults routine.
//!
//! A schema is a static slice of [`Field`]s. Each field names a host property
//! and knows how to apply a present value to the target struct. The routine
//! starts from `T::default()` and applies each field in table order:
//!
//! - absent property: the default stays
//! - present and applicable: the value is copied (or parsed, for nested
//!   sub-objects)
//! - present but wrong-typed: the default stays and a warning is logged
//!
//! A source that is not an object degrades to `T::default()` as a whole.

use glide_bridge_core::Value;

/// Host type a field expects, used in degradation warnings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Boolean (only `true` is truthy)
    Bool,
    /// Integer
    Int,
    /// String
    String,
    /// Nested object
    Object,
    /// Indexed collection
    Array,
    /// Integer status code or nested object
    IntOrObject,
}

impl FieldKind {
    /// Human readable name.
    pub fn name(self) -> &'static str {
        match self {
            FieldKind::Bool => "bool",
            FieldKind::Int => "int",
            FieldKind::String => "string",
            FieldKind::Object => "object",
            FieldKind::Array => "array",
            FieldKind::IntOrObject => "int or object",
        }
    }
}

/// One schema entry.
pub struct Field<T> {
    /// Host property name
    pub name: &'static str,
    /// Expected host type
    pub kind: FieldKind,
    /// Apply a present value; `false` means wrong-typed, default kept
    pub apply: fn(&mut T, &Value) -> bool,
}

/// Parse `source` against `schema`, filling gaps with defaults.
///
/// `context` names the struct being parsed in log output.
pub fn parse_with_defaults<T: Default>(source: &Value, schema: &[Field<T>], context: &str) -> T {
    let mut target = T::default();
    if !source.has_properties() {
        tracing::warn!(
            target: "glide::config",
            context,
            actual = source.type_name(),
            "expected an object, using defaults"
        );
        return target;
    }
    for field in schema {
        let Some(value) = source.property(field.name) else {
            continue;
        };
        if !(field.apply)(&mut target, value) {
            tracing::warn!(
                target: "glide::config",
                context,
                field = field.name,
                expected = field.kind.name(),
                actual = value.type_name(),
                "wrong-typed field, using default"
            );
        }
    }
    target
}

/// Parse a nested sub-object, `None` when the value is not an object.
pub fn parse_nested<T: Default>(value: &Value, schema: &[Field<T>], context: &str) -> Option<T> {
    if value.has_properties() {
        Some(parse_with_defaults(value, schema, context))
    } else {
        None
    }
}

/// Copy an integer into `slot`.
pub fn set_int(slot: &mut i64, value: &Value) -> bool {
    match value.as_int() {
        Some(i) => {
            *slot = i;
            true
        }
        None => false,
    }
}

/// Copy a boolean into `slot`; only `Bool(true)` reads as true.
pub fn set_flag(slot: &mut bool, value: &Value) -> bool {
    match value {
        Value::Bool(b) => {
            *slot = *b;
            true
        }
        _ => false,
    }
}

/// Copy a string into `slot` as an owned allocation.
pub fn set_string(slot: &mut Option<String>, value: &Value) -> bool {
    match value.as_str() {
        Some(s) => {
            *slot = Some(s.to_string());
            true
        }
        None => false,
    }
}
