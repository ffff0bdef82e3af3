//! Native response model and output shapes.
//!
//! [`Response`] mirrors the tagged values the native client produces.
//! [`CommandResult`] is what a native entry point hands back: an error flag
//! plus an optional response. [`ResponseShape`] is a decoding policy chosen
//! by the caller, not something carried on the wire.

use serde::{Deserialize, Serialize};

/// A tagged value produced by the native client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Response {
    /// Nil reply
    Null,
    /// Simple `OK` status reply
    Ok,
    /// Integer reply
    Int(i64),
    /// Double reply
    Float(f64),
    /// Boolean reply
    Bool(bool),
    /// Bulk or simple string reply (binary safe)
    String(Vec<u8>),
    /// Array reply
    Array(Vec<Response>),
    /// Map reply, as ordered key/value pairs
    Map(Vec<(Response, Response)>),
    /// Set reply
    Set(Vec<Response>),
    /// Error element
    Error(String),
}

impl Response {
    /// Wire type name, used in decode errors
    pub fn type_name(&self) -> &'static str {
        match self {
            Response::Null => "Null",
            Response::Ok => "Ok",
            Response::Int(_) => "Int",
            Response::Float(_) => "Float",
            Response::Bool(_) => "Bool",
            Response::String(_) => "String",
            Response::Array(_) => "Array",
            Response::Map(_) => "Map",
            Response::Set(_) => "Set",
            Response::Error(_) => "Error",
        }
    }

    /// Convenience constructor for string replies.
    pub fn string(s: impl AsRef<[u8]>) -> Self {
        Response::String(s.as_ref().to_vec())
    }
}

/// Result of one native invocation.
///
/// When `error` is set the response is treated as absent, whatever it holds.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CommandResult {
    /// Error message reported by the native client
    pub error: Option<String>,
    /// Raw response, meaningful only when `error` is `None`
    pub response: Option<Response>,
}

impl CommandResult {
    /// Successful result carrying a response.
    pub fn ok(response: Response) -> Self {
        Self {
            error: None,
            response: Some(response),
        }
    }

    /// Failed result.
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            response: None,
        }
    }

    /// Check the error flag.
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// Consume the result: `Err(message)` on failure, the response otherwise.
    ///
    /// A successful result without a response reads as `Response::Null`.
    pub fn into_response(self) -> std::result::Result<Response, String> {
        match self.error {
            Some(message) => Err(message),
            None => Ok(self.response.unwrap_or(Response::Null)),
        }
    }
}

/// How a response is decoded into a host value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResponseShape {
    /// Scalars map 1:1, collections to host arrays and maps
    Plain,
    /// Key/value pairs to a host associative map
    AssociativeMap,
    /// `Ok` becomes `true`, anything else `false`
    BoolOk,
    /// Nil becomes `false`, strings stay strings
    NilableString,
}
