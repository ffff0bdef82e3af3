//! Host value types for glide-bridge
//!
//! This module defines:
//! - Value: Unified enum for every value a host binding hands to the core
//!   or receives back from it
//! - MapKey: Key of an associative host collection
//! - HostObject: Named-property object (an instance of a host class)
//!
//! ## Host Value Model
//!
//! The Value enum has exactly 9 variants:
//! - Null, Bool, Int, Float, String, Bytes (scalars)
//! - Array (indexed collection), Map (associative collection), Object
//!
//! ### Type Rules
//!
//! - No implicit type coercions inside this type; converting to wire form is
//!   the job of [`crate::coerce`]
//! - `Int(1) != Float(1.0)`, different types are never equal
//! - `Bytes` are not `String`
//! - Float uses IEEE-754 equality: `NaN != NaN`, `-0.0 == 0.0`
//! - `Map` preserves insertion order; inserting an existing key replaces the
//!   value in place (the key keeps its first position)

use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical host value type for all binding surfaces
///
/// Host bindings convert their native values into this enum before calling
/// into the core, and the response converter produces this enum on the way
/// back out.
///
/// Serde goes through the canonical JSON form in [`crate::json`].
#[derive(Debug, Clone)]
pub enum Value {
    /// Null value
    Null,
    /// Boolean value
    Bool(bool),
    /// 64-bit signed integer
    Int(i64),
    /// 64-bit floating point (IEEE-754)
    Float(f64),
    /// UTF-8 string
    String(String),
    /// Raw bytes
    Bytes(Vec<u8>),
    /// Indexed collection
    Array(Vec<Value>),
    /// Insertion-ordered associative collection
    Map(Vec<(MapKey, Value)>),
    /// Object with named properties
    Object(HostObject),
}

/// Key of an associative host collection.
///
/// Hosts with mixed arrays (positional and named entries in one collection)
/// map positional entries to `Index` and named entries to `Name`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MapKey {
    /// Positional entry
    Index(i64),
    /// Named entry
    Name(String),
}

impl MapKey {
    /// Get the name if this is a named key
    pub fn as_name(&self) -> Option<&str> {
        match self {
            MapKey::Name(n) => Some(n),
            MapKey::Index(_) => None,
        }
    }

    /// Check if this is a positional key
    pub fn is_index(&self) -> bool {
        matches!(self, MapKey::Index(_))
    }
}

impl fmt::Display for MapKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapKey::Index(i) => write!(f, "{}", i),
            MapKey::Name(n) => f.write_str(n),
        }
    }
}

impl From<&str> for MapKey {
    fn from(s: &str) -> Self {
        MapKey::Name(s.to_string())
    }
}

impl From<String> for MapKey {
    fn from(s: String) -> Self {
        MapKey::Name(s)
    }
}

impl From<i64> for MapKey {
    fn from(i: i64) -> Self {
        MapKey::Index(i)
    }
}

/// An instance of a host class: class name plus properties in declaration order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HostObject {
    /// Host class name (informational only)
    pub class: String,
    /// Declared properties, in declaration order
    pub properties: Vec<(String, Value)>,
}

impl HostObject {
    /// Create an empty object of the given class.
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            properties: Vec::new(),
        }
    }

    /// Builder-style property setter.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(name, value);
        self
    }

    /// Set a property, replacing an existing one of the same name.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        let name = name.into();
        let value = value.into();
        match self.properties.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.properties.push((name, value)),
        }
    }

    /// Look up a property by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.properties
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }
}

// Custom PartialEq implementation for IEEE-754 float semantics
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            // IEEE-754: NaN != NaN, -0.0 == 0.0
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Bytes(a), Value::Bytes(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            // Order is part of a host map's identity
            (Value::Map(a), Value::Map(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a == b,
            _ => false,
        }
    }
}

impl Value {
    /// Create an empty associative map.
    pub fn map() -> Self {
        Value::Map(Vec::new())
    }

    /// Get the type name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "Null",
            Value::Bool(_) => "Bool",
            Value::Int(_) => "Int",
            Value::Float(_) => "Float",
            Value::String(_) => "String",
            Value::Bytes(_) => "Bytes",
            Value::Array(_) => "Array",
            Value::Map(_) => "Map",
            Value::Object(_) => "Object",
        }
    }

    /// Check if this is a null value
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Check if this is a scalar (anything but Array, Map and Object)
    pub fn is_scalar(&self) -> bool {
        !matches!(self, Value::Array(_) | Value::Map(_) | Value::Object(_))
    }

    /// Check if this is exactly `Bool(true)`
    pub fn is_true(&self) -> bool {
        matches!(self, Value::Bool(true))
    }

    /// Get as bool if this is a Bool value
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get as i64 if this is an Int value
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Get as f64 if this is a Float value
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Get as &str if this is a String value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get as &[u8] if this is a String or Bytes value
    pub fn as_byte_slice(&self) -> Option<&[u8]> {
        match self {
            Value::String(s) => Some(s.as_bytes()),
            Value::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// Get as &[Value] if this is an Array value
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Get the entries if this is a Map value
    pub fn as_map(&self) -> Option<&[(MapKey, Value)]> {
        match self {
            Value::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Get as &HostObject if this is an Object value
    pub fn as_object(&self) -> Option<&HostObject> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Named-property lookup on an Object or on a Map with named keys.
    ///
    /// Returns `None` for every other variant.
    pub fn property(&self, name: &str) -> Option<&Value> {
        match self {
            Value::Object(o) => o.get(name),
            Value::Map(m) => m
                .iter()
                .find(|(k, _)| k.as_name() == Some(name))
                .map(|(_, v)| v),
            _ => None,
        }
    }

    /// Check if this value can be read with [`Value::property`].
    pub fn has_properties(&self) -> bool {
        matches!(self, Value::Object(_) | Value::Map(_))
    }

    /// Number of elements of a collection, `None` for scalars and objects.
    pub fn len(&self) -> Option<usize> {
        match self {
            Value::Array(a) => Some(a.len()),
            Value::Map(m) => Some(m.len()),
            _ => None,
        }
    }

    /// Insert into a Map value with last-write-wins semantics.
    ///
    /// A key that is already present keeps its position and takes the new
    /// value. Returns `false` (and does nothing) if `self` is not a Map.
    pub fn map_insert(&mut self, key: MapKey, value: Value) -> bool {
        match self {
            Value::Map(entries) => {
                match entries.iter_mut().find(|(k, _)| *k == key) {
                    Some(slot) => slot.1 = value,
                    None => entries.push((key, value)),
                }
                true
            }
            _ => false,
        }
    }
}

// ============================================================================
// From implementations for ergonomic API usage
// ============================================================================

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i as i64)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<Vec<u8>> for Value {
    fn from(b: Vec<u8>) -> Self {
        Value::Bytes(b)
    }
}

impl From<&[u8]> for Value {
    fn from(b: &[u8]) -> Self {
        Value::Bytes(b.to_vec())
    }
}

impl From<Vec<Value>> for Value {
    fn from(a: Vec<Value>) -> Self {
        Value::Array(a)
    }
}

impl From<Vec<(MapKey, Value)>> for Value {
    fn from(m: Vec<(MapKey, Value)>) -> Self {
        Value::Map(m)
    }
}

impl From<HostObject> for Value {
    fn from(o: HostObject) -> Self {
        Value::Object(o)
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Null
    }
}
