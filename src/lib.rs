//! glide-bridge - command marshalling core for Valkey GLIDE host bindings
//!
//! A host binding hands over host values; glide-bridge turns them into
//! length-delimited wire arguments, dispatches through a native client
//! handle and converts the reply back into host values.
//!
//! # Quick Start
//!
//! ```ignore
//! use glide_bridge::{Command, Executor, Output, Value};
//!
//! let executor = Executor::new(&client);
//!
//! let dumped = executor.execute(Command::Dump { key: "k".into() })?;
//! executor.execute(Command::Restore {
//!     key: "copy".into(),
//!     ttl: 0,
//!     serialized: dumped.into_value(),
//!     options: None,
//! })?;
//! ```
//!
//! # Architecture
//!
//! All commands go through the [`Executor`]. Client configuration lives in
//! [`config`], which parses host configuration objects into a
//! [`config::ConfigurationTree`] and maps it onto a connection request.

// Re-export the public API from glide-bridge-executor
pub use glide_bridge_executor::*;

/// Client configuration parsing.
pub use glide_bridge_config as config;

/// Canonical JSON form of host values.
pub use glide_bridge_core::json;
