//! Core types for glide-bridge
//!
//! This crate defines the foundational types every other crate builds on:
//! - Value: Host value enum (what bindings hand to the core and get back)
//! - WireArgument: One length-delimited command argument
//! - coerce: Scalar to wire conversion with canonical string forms
//! - Response / CommandResult / ResponseShape: Native response model
//! - Error: Marshalling error hierarchy
//! - json: Canonical JSON form of host values

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod coerce;
pub mod error;
pub mod json;
pub mod response;
pub mod value;
pub mod wire;

pub use coerce::{coerce, Coerced};
pub use error::{Error, Result};
pub use json::{json_to_value, value_to_json};
pub use response::{CommandResult, Response, ResponseShape};
pub use value::{HostObject, MapKey, Value};
pub use wire::WireArgument;
