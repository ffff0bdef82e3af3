//! Canonical JSON form of host values.
//!
//! Bindings and test fixtures exchange host values as JSON. Types without a
//! native JSON representation use tagged objects:
//!
//! | Type | JSON Representation |
//! |------|---------------------|
//! | Bytes | `{"$bytes": "<base64>"}` |
//! | NaN | `{"$f64": "NaN"}` |
//! | +Infinity | `{"$f64": "+Inf"}` |
//! | -Infinity | `{"$f64": "-Inf"}` |
//! | -0.0 | `{"$f64": "-0.0"}` |
//! | Map with positional keys | `{"$map": [[key, value], ...]}` |
//! | Object | `{"$object": "<class>", "$properties": {...}}` |
//!
//! A Map whose keys are all names is written as a plain JSON object, and a
//! plain JSON object reads back as a named-key Map.
//!
//! `Value`'s own `Serialize`/`Deserialize` use this form, so every command
//! and output carrying host values shares it.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use serde::de;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value as JsonValue;

use crate::value::{HostObject, MapKey, Value};

/// Convert a Value to a JSON value with special encoding.
pub fn value_to_json(value: &Value) -> JsonValue {
    match value {
        Value::Null => JsonValue::Null,
        Value::Bool(b) => JsonValue::Bool(*b),
        Value::Int(i) => JsonValue::Number((*i).into()),
        Value::Float(f) => float_to_json(*f),
        Value::String(s) => JsonValue::String(s.clone()),
        Value::Bytes(b) => serde_json::json!({"$bytes": BASE64.encode(b)}),
        Value::Array(arr) => JsonValue::Array(arr.iter().map(value_to_json).collect()),
        Value::Map(entries) if entries.iter().all(|(k, _)| !k.is_index()) => {
            let obj: serde_json::Map<String, JsonValue> = entries
                .iter()
                .map(|(k, v)| (k.to_string(), value_to_json(v)))
                .collect();
            JsonValue::Object(obj)
        }
        Value::Map(entries) => {
            let pairs: Vec<JsonValue> = entries
                .iter()
                .map(|(k, v)| {
                    let key = match k {
                        MapKey::Index(i) => JsonValue::Number((*i).into()),
                        MapKey::Name(n) => JsonValue::String(n.clone()),
                    };
                    JsonValue::Array(vec![key, value_to_json(v)])
                })
                .collect();
            serde_json::json!({"$map": pairs})
        }
        Value::Object(o) => {
            let props: serde_json::Map<String, JsonValue> = o
                .properties
                .iter()
                .map(|(k, v)| (k.clone(), value_to_json(v)))
                .collect();
            serde_json::json!({"$object": o.class, "$properties": props})
        }
    }
}

/// Convert a JSON value to a Value, recognizing special encodings.
pub fn json_to_value(json: &JsonValue) -> Result<Value, String> {
    match json {
        JsonValue::Null => Ok(Value::Null),
        JsonValue::Bool(b) => Ok(Value::Bool(*b)),
        JsonValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Value::Int(i))
            } else if let Some(f) = n.as_f64() {
                Ok(Value::Float(f))
            } else {
                Err("Invalid number".to_string())
            }
        }
        JsonValue::String(s) => Ok(Value::String(s.clone())),
        JsonValue::Array(arr) => {
            let items: Result<Vec<Value>, String> = arr.iter().map(json_to_value).collect();
            Ok(Value::Array(items?))
        }
        JsonValue::Object(obj) => {
            if obj.len() == 1 {
                if let Some(JsonValue::String(encoded)) = obj.get("$bytes") {
                    let decoded = BASE64
                        .decode(encoded)
                        .map_err(|e| format!("Invalid base64: {}", e))?;
                    return Ok(Value::Bytes(decoded));
                }
                if let Some(JsonValue::String(s)) = obj.get("$f64") {
                    return json_special_float_from_str(s).map(Value::Float);
                }
                if let Some(JsonValue::Array(pairs)) = obj.get("$map") {
                    return json_pairs_to_map(pairs);
                }
            }
            if obj.len() == 2 {
                if let (Some(JsonValue::String(class)), Some(JsonValue::Object(props))) =
                    (obj.get("$object"), obj.get("$properties"))
                {
                    let mut object = HostObject::new(class.clone());
                    for (k, v) in props {
                        object.set(k.clone(), json_to_value(v)?);
                    }
                    return Ok(Value::Object(object));
                }
            }

            let mut map = Value::map();
            for (k, v) in obj {
                map.map_insert(MapKey::Name(k.clone()), json_to_value(v)?);
            }
            Ok(map)
        }
    }
}

fn json_pairs_to_map(pairs: &[JsonValue]) -> Result<Value, String> {
    let mut map = Value::map();
    for pair in pairs {
        let (key, value) = match pair.as_array().map(Vec::as_slice) {
            Some([k, v]) => (k, v),
            _ => return Err("Invalid $map entry: expected [key, value]".to_string()),
        };
        let key = match key {
            JsonValue::Number(n) => MapKey::Index(
                n.as_i64()
                    .ok_or_else(|| "Invalid $map key: not an integer".to_string())?,
            ),
            JsonValue::String(s) => MapKey::Name(s.clone()),
            _ => return Err("Invalid $map key".to_string()),
        };
        map.map_insert(key, json_to_value(value)?);
    }
    Ok(map)
}

/// Convert a float to JSON, handling special values.
fn float_to_json(f: f64) -> JsonValue {
    if f.is_nan() {
        serde_json::json!({"$f64": "NaN"})
    } else if f.is_infinite() {
        if f.is_sign_positive() {
            serde_json::json!({"$f64": "+Inf"})
        } else {
            serde_json::json!({"$f64": "-Inf"})
        }
    } else if f == 0.0 && f.is_sign_negative() {
        serde_json::json!({"$f64": "-0.0"})
    } else {
        serde_json::Number::from_f64(f)
            .map(JsonValue::Number)
            .unwrap_or_else(|| serde_json::json!({"$f64": format!("{}", f)}))
    }
}

/// Parse a special float string.
fn json_special_float_from_str(s: &str) -> Result<f64, String> {
    match s {
        "NaN" => Ok(f64::NAN),
        "+Inf" => Ok(f64::INFINITY),
        "-Inf" => Ok(f64::NEG_INFINITY),
        "-0.0" => Ok(-0.0_f64),
        other => other
            .parse::<f64>()
            .map_err(|e| format!("Invalid float: {}", e)),
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        value_to_json(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let json = JsonValue::deserialize(deserializer)?;
        json_to_value(&json).map_err(de::Error::custom)
    }
}
