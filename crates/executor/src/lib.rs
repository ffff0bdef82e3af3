//! # Glide Bridge Executor
//!
//! Marshals host commands into native-client calls and decodes the replies.
//!
//! This is the crate a host binding talks to. It provides:
//! - [`Executor`] - the single dispatch point, borrowing a [`NativeClient`]
//! - [`Command`]/[`Output`] - the typed command surface
//! - [`ArgumentList`] and the builders - wire forms of the raw path
//! - [`CoreArgs`] and [`execute_core`] - the allocation-free fixed path
//!
//! ## Quick Start
//!
//! ```text
//! use glide_bridge_executor::{Command, Executor, Value};
//!
//! let executor = Executor::new(&client);
//!
//! executor.execute(Command::Select { db: 2 })?;
//! let payload = executor.execute(Command::Dump { key: "k".into() })?;
//! ```
//!
//! ## Dispatch Paths
//!
//! | Path | Used by | Allocation |
//! |------|---------|------------|
//! | **fixed** | small known shapes (`DbSize`, `Move`, `Exec`, ...) | none; integers rendered on the stack |
//! | **raw** | variadic and option-driven commands | one [`ArgumentList`] per call, freed on every path |
//!
//! ## Sub-command Families
//!
//! `CLIENT`, `CONFIG` and `OBJECT` resolve their first token against a
//! static table (see [`subcommand`]). Unknown `CLIENT` and `OBJECT` tokens
//! pass through as `CustomCommand`; unknown `CONFIG` operations are rejected.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod args;
mod command;
mod convert;
mod executor;
mod fixed;
mod native;
mod output;
mod request;
pub mod subcommand;

// Handler modules
mod handlers;

// Test modules
#[cfg(test)]
mod tests;

// =============================================================================
// Public API
// =============================================================================

pub use args::{
    build_fixed, build_from_map, config_get_args, config_set_from_map, function_call_args,
    prefixed_passthrough, restore_args, watch_args, AllocationProbe, ArgumentList,
    MAX_RESTORE_ARGS,
};
pub use command::Command;
pub use convert::convert_response;
pub use executor::Executor;
pub use fixed::{
    execute_core, process_array, process_bool, process_int, process_int_or_absent, process_ok,
    process_plain, process_string_or_absent, CoreArg, CoreArgs, Processor, MAX_CORE_ARGS,
};
pub use native::{NativeClient, Route};
pub use output::Output;
pub use request::RequestType;

// Re-export the value model so users don't need glide-bridge-core directly
pub use glide_bridge_core::{
    CommandResult, Error, HostObject, MapKey, Response, ResponseShape, Result, Value,
    WireArgument,
};
