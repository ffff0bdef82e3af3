//! Command enum defining every operation the executor marshals.
//!
//! Commands are:
//! - **Self-contained**: All parameters needed for execution are in the variant
//! - **Serializable**: Can be converted to/from JSON for cross-language use
//! - **Typed**: Host values appear only where the host may pass any scalar
//! - **Pure data**: No client handle, no closures

use serde::{Deserialize, Serialize};

use glide_bridge_core::Value;

use crate::native::Route;

/// A command is a self-contained, serializable operation.
///
/// # Command Categories
///
/// | Category | Count | Path |
/// |----------|-------|------|
/// | Transaction | 5 | fixed, raw for `Watch` |
/// | Scripting | 4 | raw |
/// | Serialization | 2 | fixed / raw |
/// | Server | 9 | fixed, raw for `Config` |
/// | Client | 1 | raw |
/// | Keyspace | 4 | fixed, raw for unknown `Object` sub-commands |
/// | Passthrough | 1 | raw |
///
/// Keys and free-form arguments are host values: strings and bytes are sent
/// as-is, other scalars in their canonical string form. Keys on the fixed
/// path must be strings, bytes or integers.
///
/// # Example
///
/// ```ignore
/// use glide_bridge_executor::{Command, Value};
///
/// let cmd = Command::Restore {
///     key: "k".into(),
///     ttl: 1000,
///     serialized: Value::Bytes(payload),
///     options: None,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub enum Command {
    // ==================== Transaction (5) ====================
    /// Start a transaction.
    /// Returns: `Output::Ok`
    Multi,

    /// Execute the queued transaction.
    /// Returns: `Output::Value` (array of replies, or `Null` when aborted)
    Exec,

    /// Drop the queued transaction.
    /// Returns: `Output::Ok`
    Discard,

    /// Watch keys for the next transaction.
    /// Returns: `Output::Ok`
    Watch { keys: Vec<Value> },

    /// Forget all watched keys.
    /// Returns: `Output::Ok`
    Unwatch,

    // ==================== Scripting (4) ====================
    /// Call a library function.
    /// Returns: `Output::Value`
    FCall {
        function: String,
        numkeys: i64,
        #[serde(default)]
        args: Vec<Value>,
    },

    /// Call a read-only library function.
    /// Returns: `Output::Value`
    FCallRo {
        function: String,
        numkeys: i64,
        #[serde(default)]
        args: Vec<Value>,
    },

    /// `FUNCTION <args...>`, sent as a passthrough.
    /// Returns: `Output::Value`
    Function { args: Vec<Value> },

    /// `ACL <args...>`, sent as a passthrough.
    /// Returns: `Output::Value`
    Acl { args: Vec<Value> },

    // ==================== Serialization (2) ====================
    /// Serialize a key's value.
    /// Returns: `Output::Value` (payload) or `Output::Bool(false)` when absent
    Dump { key: Value },

    /// Recreate a key from a DUMP payload.
    /// Returns: `Output::Bool` (true on `OK`)
    Restore {
        key: Value,
        ttl: i64,
        serialized: Value,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        options: Option<Value>,
    },

    // ==================== Server (9) ====================
    /// `CONFIG GET|SET|RESETSTAT|REWRITE`.
    ///
    /// `GET` takes a parameter name or an array of them in `key`. `SET` takes
    /// either `key` and `value`, or an associative array in `key`.
    /// Returns: `Output::Value` (map) for `GET`, `Output::Bool` otherwise
    Config {
        operation: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        key: Option<Value>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        value: Option<Value>,
    },

    /// Number of keys in the selected database.
    /// Returns: `Output::Int`
    DbSize {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        route: Option<Route>,
    },

    /// Wait for replicas to acknowledge writes.
    /// Returns: `Output::Int`
    Wait { numreplicas: i64, timeout: i64 },

    /// Select a logical database.
    /// Returns: `Output::Ok`
    Select { db: i64 },

    /// Swap two logical databases.
    /// Returns: `Output::Ok`
    SwapDb { first: i64, second: i64 },

    /// Delete every key of the selected database.
    /// Returns: `Output::Ok`
    FlushDb {
        #[serde(default)]
        asynchronous: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        route: Option<Route>,
    },

    /// Delete every key of every database.
    /// Returns: `Output::Ok`
    FlushAll {
        #[serde(default)]
        asynchronous: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        route: Option<Route>,
    },

    /// Server time.
    /// Returns: `Output::Value` (array)
    Time {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        route: Option<Route>,
    },

    /// Replication role.
    /// Returns: `Output::Value` (array)
    Role {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        route: Option<Route>,
    },

    // ==================== Client (1) ====================
    /// `CLIENT <sub-command> <args...>`.
    /// Returns: `Output::Value`
    Client {
        args: Vec<Value>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        route: Option<Route>,
    },

    // ==================== Keyspace (4) ====================
    /// Move a key to another database.
    /// Returns: `Output::Bool`
    Move { key: Value, db: i64 },

    /// Copy a key.
    /// Returns: `Output::Bool`
    Copy {
        source: Value,
        destination: Value,
        #[serde(default)]
        replace: bool,
    },

    /// Keys matching a pattern.
    /// Returns: `Output::Value` (array)
    Keys { pattern: Value },

    /// `OBJECT <sub-command> <key>`.
    /// Returns: `Output::Int` for counters and `Output::Value` for `ENCODING`,
    /// or `Output::Bool(false)` when the key is missing; `Output::Value` for
    /// other sub-commands
    Object { subcommand: String, key: Value },

    // ==================== Passthrough (1) ====================
    /// Any command, sent verbatim.
    /// Returns: `Output::Value`
    RawCommand {
        args: Vec<Value>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        route: Option<Route>,
    },
}

impl Command {
    /// Variant name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Multi => "Multi",
            Command::Exec => "Exec",
            Command::Discard => "Discard",
            Command::Watch { .. } => "Watch",
            Command::Unwatch => "Unwatch",
            Command::FCall { .. } => "FCall",
            Command::FCallRo { .. } => "FCallRo",
            Command::Function { .. } => "Function",
            Command::Acl { .. } => "Acl",
            Command::Dump { .. } => "Dump",
            Command::Restore { .. } => "Restore",
            Command::Config { .. } => "Config",
            Command::DbSize { .. } => "DbSize",
            Command::Wait { .. } => "Wait",
            Command::Select { .. } => "Select",
            Command::SwapDb { .. } => "SwapDb",
            Command::FlushDb { .. } => "FlushDb",
            Command::FlushAll { .. } => "FlushAll",
            Command::Time { .. } => "Time",
            Command::Role { .. } => "Role",
            Command::Client { .. } => "Client",
            Command::Move { .. } => "Move",
            Command::Copy { .. } => "Copy",
            Command::Keys { .. } => "Keys",
            Command::Object { .. } => "Object",
            Command::RawCommand { .. } => "RawCommand",
        }
    }
}
