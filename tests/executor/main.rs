//! Executor Layer Tests
//!
//! End-to-end tests for the glide-bridge-executor crate against an
//! in-process fake server:
//! - Command enum - the marshalled command surface
//! - Output enum - decoded results
//! - Executor - stateless dispatch over a borrowed native client
//! - JSON scripts - commands and outputs in their canonical JSON form

mod common;

mod command_dispatch;
mod error_handling;
mod json_scripts;
mod properties;
