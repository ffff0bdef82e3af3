//! Scalar coercion to wire form.
//!
//! Strings and bytes are borrowed as-is. Every other scalar is rendered to
//! its canonical host string form into a fresh buffer:
//!
//! | Host value | Wire bytes |
//! |------------|------------|
//! | `Int(-1)` | `-1` |
//! | `Bool(true)` | `1` |
//! | `Bool(false)` | (empty) |
//! | `Null` | (empty) |
//! | `Float(2.0)` | `2` |
//! | `Float(0.5)` | `0.5` |
//! | `Float(inf)` / `Float(-inf)` / `Float(nan)` | `INF` / `-INF` / `NAN` |
//!
//! Collections are not scalars; [`coerce`] hands them back as
//! [`Coerced::NotScalar`] and the caller decides which error to raise.

use crate::value::Value;
use crate::wire::WireArgument;

/// Outcome of coercing a host value.
#[derive(Debug, PartialEq)]
pub enum Coerced<'a> {
    /// The value has a wire form
    Wire(WireArgument<'a>),
    /// The value is an Array, Map or Object
    NotScalar(&'static str),
}

/// Coerce a host value into a wire argument without touching the value.
pub fn coerce(value: &Value) -> Coerced<'_> {
    match value {
        Value::String(s) => Coerced::Wire(WireArgument::Borrowed(s.as_bytes())),
        Value::Bytes(b) => Coerced::Wire(WireArgument::Borrowed(b)),
        Value::Int(i) => Coerced::Wire(WireArgument::Owned(int_to_bytes(*i))),
        Value::Float(f) => Coerced::Wire(WireArgument::Owned(float_to_bytes(*f))),
        Value::Bool(true) => Coerced::Wire(WireArgument::Owned(b"1".to_vec())),
        Value::Bool(false) | Value::Null => Coerced::Wire(WireArgument::Owned(Vec::new())),
        Value::Array(_) | Value::Map(_) | Value::Object(_) => {
            Coerced::NotScalar(value.type_name())
        }
    }
}

/// Decimal form of an integer.
pub fn int_to_bytes(i: i64) -> Vec<u8> {
    i.to_string().into_bytes()
}

/// Canonical host form of a float.
pub fn float_to_bytes(f: f64) -> Vec<u8> {
    float_to_string(f).into_bytes()
}

/// Canonical host form of a float, as a string.
pub fn float_to_string(f: f64) -> String {
    if f.is_nan() {
        "NAN".to_string()
    } else if f.is_infinite() {
        if f.is_sign_positive() { "INF" } else { "-INF" }.to_string()
    } else {
        // Rust's Display is shortest round-trip and omits ".0" on integral values
        format!("{}", f)
    }
}

/// Format an integer into a caller-supplied stack buffer.
///
/// Returns the number of bytes written. The buffer must hold at least 20
/// bytes, which covers `i64::MIN`.
pub fn format_int(i: i64, buf: &mut [u8; 20]) -> usize {
    let mut n = i.unsigned_abs();
    let mut tmp = [0u8; 20];
    let mut pos = tmp.len();
    loop {
        pos -= 1;
        tmp[pos] = b'0' + (n % 10) as u8;
        n /= 10;
        if n == 0 {
            break;
        }
    }
    if i < 0 {
        pos -= 1;
        tmp[pos] = b'-';
    }
    let len = tmp.len() - pos;
    buf[..len].copy_from_slice(&tmp[pos..]);
    len
}
