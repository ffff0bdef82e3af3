//! Response conversion from native responses to host values.
//!
//! | Shape | Accepts | Produces |
//! |-------|---------|----------|
//! | `Plain` | anything | scalars 1:1, `Ok` as `true`, lists and sets as arrays, maps as maps |
//! | `AssociativeMap` | map, or flat array of alternating key/value | host map, last write wins |
//! | `BoolOk` | anything | `true` for `Ok`, `false` otherwise |
//! | `NilableString` | nil or string | `false` for nil, the string otherwise |
//!
//! A wire error element anywhere in the response fails the whole conversion
//! with `CommandFailed`. Strings become host strings when they are valid
//! UTF-8 and bytes otherwise.

use glide_bridge_core::coerce::float_to_string;
use glide_bridge_core::{Error, MapKey, Response, ResponseShape, Result, Value};

/// Convert a native response into a host value of the requested shape.
pub fn convert_response(response: Response, shape: ResponseShape) -> Result<Value> {
    match shape {
        ResponseShape::Plain => convert_plain(response),
        ResponseShape::AssociativeMap => convert_map(response),
        ResponseShape::BoolOk => match response {
            Response::Ok => Ok(Value::Bool(true)),
            Response::Error(reason) => Err(Error::CommandFailed { reason }),
            _ => Ok(Value::Bool(false)),
        },
        ResponseShape::NilableString => match response {
            // Absent reads as false so callers can test the result directly
            Response::Null => Ok(Value::Bool(false)),
            Response::String(bytes) => Ok(string_value(bytes)),
            Response::Error(reason) => Err(Error::CommandFailed { reason }),
            other => Err(Error::decode("string or nil", other.type_name())),
        },
    }
}

fn convert_plain(response: Response) -> Result<Value> {
    Ok(match response {
        Response::Null => Value::Null,
        Response::Ok => Value::Bool(true),
        Response::Int(i) => Value::Int(i),
        Response::Float(f) => Value::Float(f),
        Response::Bool(b) => Value::Bool(b),
        Response::String(bytes) => string_value(bytes),
        Response::Array(items) | Response::Set(items) => Value::Array(
            items
                .into_iter()
                .map(convert_plain)
                .collect::<Result<Vec<_>>>()?,
        ),
        Response::Map(pairs) => pairs_to_map(pairs)?,
        Response::Error(reason) => return Err(Error::CommandFailed { reason }),
    })
}

fn convert_map(response: Response) -> Result<Value> {
    match response {
        Response::Map(pairs) => pairs_to_map(pairs),
        Response::Array(items) => {
            if items.len() % 2 != 0 {
                return Err(Error::decode(
                    "even number of key/value elements",
                    format!("{} elements", items.len()),
                ));
            }
            let mut iter = items.into_iter();
            let mut pairs = Vec::new();
            while let (Some(k), Some(v)) = (iter.next(), iter.next()) {
                pairs.push((k, v));
            }
            pairs_to_map(pairs)
        }
        Response::Error(reason) => Err(Error::CommandFailed { reason }),
        other => Err(Error::decode("map", other.type_name())),
    }
}

fn pairs_to_map(pairs: Vec<(Response, Response)>) -> Result<Value> {
    let mut map = Value::Map(Vec::with_capacity(pairs.len()));
    for (key, value) in pairs {
        let key = map_key(key)?;
        map.map_insert(key, convert_plain(value)?);
    }
    Ok(map)
}

fn map_key(key: Response) -> Result<MapKey> {
    Ok(match key {
        Response::Int(i) => MapKey::Index(i),
        Response::String(bytes) => MapKey::Name(String::from_utf8_lossy(&bytes).into_owned()),
        Response::Float(f) => MapKey::Name(float_to_string(f)),
        Response::Bool(true) => MapKey::Name("1".to_string()),
        Response::Bool(false) | Response::Null => MapKey::Name(String::new()),
        Response::Ok => MapKey::Name("OK".to_string()),
        Response::Error(reason) => return Err(Error::CommandFailed { reason }),
        other => return Err(Error::decode("scalar map key", other.type_name())),
    })
}

fn string_value(bytes: Vec<u8>) -> Value {
    match String::from_utf8(bytes) {
        Ok(s) => Value::String(s),
        Err(e) => Value::Bytes(e.into_bytes()),
    }
}
