//! Output enum for command execution results.
//!
//! Every command produces exactly one output variant, documented on the
//! [`Command`](crate::Command) variant.

use serde::{Deserialize, Serialize};

use glide_bridge_core::Value;

/// Successful command execution results.
///
/// # Example
///
/// ```text
/// use glide_bridge_executor::{Command, Output};
///
/// match executor.execute(Command::Dump { key })? {
///     Output::Bool(false) => println!("no such key"),
///     Output::Value(payload) => println!("dumped {:?}", payload),
///     _ => unreachable!("Dump returns a payload or false"),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Output {
    /// `OK` status
    Ok,
    /// Boolean result (also the absent sentinel of nilable strings)
    Bool(bool),
    /// Integer result
    Int(i64),
    /// Any other host value
    Value(Value),
}

impl Output {
    /// Flatten into the host value handed back to the binding.
    pub fn into_value(self) -> Value {
        match self {
            Output::Ok => Value::Bool(true),
            Output::Bool(b) => Value::Bool(b),
            Output::Int(i) => Value::Int(i),
            Output::Value(v) => v,
        }
    }
}

impl From<Value> for Output {
    fn from(v: Value) -> Self {
        match v {
            Value::Bool(b) => Output::Bool(b),
            Value::Int(i) => Output::Int(i),
            other => Output::Value(other),
        }
    }
}
