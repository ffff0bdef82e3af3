//! Fixed-arity dispatch.
//!
//! Commands with a small, known argument shape skip [`crate::args`]
//! entirely: a [`CoreArgs`] holds up to [`MAX_CORE_ARGS`] typed arguments
//! plus an optional key, integers are formatted into stack buffers at
//! dispatch time, and a [`Processor`] turns the raw response into the
//! command's output.

use glide_bridge_core::coerce::format_int;
use glide_bridge_core::{Error, Response, ResponseShape, Result, Value};

use crate::convert::convert_response;
use crate::native::{invoke, NativeClient, Route};
use crate::{Output, RequestType};

/// Maximum number of typed arguments (the key is extra).
pub const MAX_CORE_ARGS: usize = 8;

/// One typed argument of the fixed path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CoreArg<'a> {
    /// Bytes borrowed from the caller
    Bytes(&'a [u8]),
    /// Integer, rendered in decimal on the stack
    Int(i64),
}

impl<'a> CoreArg<'a> {
    /// Borrow a host key or argument.
    ///
    /// Strings and bytes are borrowed, integers stay typed. Other values need
    /// a heap rendering and belong on the raw path.
    pub fn from_value(value: &'a Value) -> Result<Self> {
        match value {
            Value::String(s) => Ok(CoreArg::Bytes(s.as_bytes())),
            Value::Bytes(b) => Ok(CoreArg::Bytes(b)),
            Value::Int(i) => Ok(CoreArg::Int(*i)),
            other => Err(Error::invalid(format!(
                "expected a string, bytes or integer argument, got {}",
                other.type_name()
            ))),
        }
    }
}

/// Arguments of one fixed-arity command.
#[derive(Debug, Clone)]
pub struct CoreArgs<'a> {
    kind: RequestType,
    key: Option<&'a [u8]>,
    args: [CoreArg<'a>; MAX_CORE_ARGS],
    len: usize,
    route: Option<&'a Route>,
}

impl<'a> CoreArgs<'a> {
    /// No key, no arguments, no route.
    pub fn new(kind: RequestType) -> Self {
        Self {
            kind,
            key: None,
            args: [CoreArg::Int(0); MAX_CORE_ARGS],
            len: 0,
            route: None,
        }
    }

    /// Set the key, sent before all other arguments.
    pub fn key(mut self, key: &'a [u8]) -> Self {
        self.key = Some(key);
        self
    }

    /// Set the key from a host value.
    pub fn key_value(self, key: &'a Value) -> Result<Self> {
        match CoreArg::from_value(key)? {
            CoreArg::Bytes(b) => Ok(self.key(b)),
            CoreArg::Int(i) => self.arg(CoreArg::Int(i)),
        }
    }

    /// Append an argument.
    pub fn arg(mut self, arg: CoreArg<'a>) -> Result<Self> {
        if self.len == MAX_CORE_ARGS {
            return Err(Error::invalid(format!(
                "{} takes at most {} arguments",
                self.kind.name(),
                MAX_CORE_ARGS
            )));
        }
        self.args[self.len] = arg;
        self.len += 1;
        Ok(self)
    }

    /// Append an integer argument.
    pub fn int(self, i: i64) -> Result<Self> {
        self.arg(CoreArg::Int(i))
    }

    /// Append a static token.
    pub fn token(self, token: &'static str) -> Result<Self> {
        self.arg(CoreArg::Bytes(token.as_bytes()))
    }

    /// Append a static token when `cond` holds.
    pub fn token_if(self, cond: bool, token: &'static str) -> Result<Self> {
        if cond {
            self.token(token)
        } else {
            Ok(self)
        }
    }

    /// Route the command.
    pub fn route(mut self, route: Option<&'a Route>) -> Self {
        self.route = route;
        self
    }

    /// Number of wire arguments, key included.
    pub fn argc(&self) -> usize {
        self.len + usize::from(self.key.is_some())
    }
}

/// Turns a raw response into the command's output.
pub type Processor = fn(Response) -> Result<Output>;

/// Dispatch a fixed-arity command.
pub fn execute_core(
    client: &dyn NativeClient,
    args: &CoreArgs<'_>,
    process: Processor,
) -> Result<Output> {
    let mut digits = [[0u8; 20]; MAX_CORE_ARGS];
    let mut lens = [0usize; MAX_CORE_ARGS];
    for (i, arg) in args.args[..args.len].iter().enumerate() {
        if let CoreArg::Int(n) = arg {
            lens[i] = format_int(*n, &mut digits[i]);
        }
    }

    let mut slices: [&[u8]; MAX_CORE_ARGS + 1] = [&[]; MAX_CORE_ARGS + 1];
    let mut argc = 0;
    if let Some(key) = args.key {
        slices[0] = key;
        argc = 1;
    }
    for (i, arg) in args.args[..args.len].iter().enumerate() {
        slices[argc] = match arg {
            CoreArg::Bytes(b) => *b,
            CoreArg::Int(_) => &digits[i][..lens[i]],
        };
        argc += 1;
    }

    let response = invoke(client, args.kind, &slices[..argc], args.route)?;
    process(response)
}

// =============================================================================
// Processors
// =============================================================================

/// Integer reply.
pub fn process_int(response: Response) -> Result<Output> {
    match response {
        Response::Int(i) => Ok(Output::Int(i)),
        Response::Error(reason) => Err(Error::CommandFailed { reason }),
        other => Err(Error::decode("integer", other.type_name())),
    }
}

/// Integer reply or `false` when the key is absent.
pub fn process_int_or_absent(response: Response) -> Result<Output> {
    match response {
        Response::Null => Ok(Output::Bool(false)),
        other => process_int(other),
    }
}

/// Boolean reply; integer replies read as `!= 0`.
pub fn process_bool(response: Response) -> Result<Output> {
    match response {
        Response::Bool(b) => Ok(Output::Bool(b)),
        Response::Int(i) => Ok(Output::Bool(i != 0)),
        Response::Ok => Ok(Output::Bool(true)),
        Response::Error(reason) => Err(Error::CommandFailed { reason }),
        other => Err(Error::decode("boolean", other.type_name())),
    }
}

/// `OK` status reply.
pub fn process_ok(response: Response) -> Result<Output> {
    match response {
        Response::Ok => Ok(Output::Ok),
        Response::Error(reason) => Err(Error::CommandFailed { reason }),
        other => Err(Error::decode("OK", other.type_name())),
    }
}

/// Array reply; nil (an aborted EXEC) passes through as `Null`.
pub fn process_array(response: Response) -> Result<Output> {
    match response {
        Response::Array(_) | Response::Set(_) | Response::Null => {
            convert_response(response, ResponseShape::Plain).map(Output::Value)
        }
        Response::Error(reason) => Err(Error::CommandFailed { reason }),
        other => Err(Error::decode("array", other.type_name())),
    }
}

/// String reply or `false` when absent.
pub fn process_string_or_absent(response: Response) -> Result<Output> {
    match convert_response(response, ResponseShape::NilableString)? {
        Value::Bool(false) => Ok(Output::Bool(false)),
        value => Ok(Output::Value(value)),
    }
}

/// Any reply, decoded plainly.
pub fn process_plain(response: Response) -> Result<Output> {
    convert_response(response, ResponseShape::Plain).map(Output::Value)
}
