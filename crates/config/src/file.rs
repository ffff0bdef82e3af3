//! File-backed client configuration.
//!
//! A TOML document is read into the same host value graph a binding would
//! build by hand (tables become objects, arrays become arrays), and then
//! goes through the regular parser, so file and programmatic configuration
//! share every default.
//!
//! # Example
//!
//! ```toml
//! request_timeout = 2000
//! client_name = "orders"
//!
//! [[addresses]]
//! host = "10.0.0.1"
//! port = 6379
//!
//! [credentials]
//! username = "app"
//! password = "secret"
//! ```

use std::path::Path;

use glide_bridge_core::{Error, HostObject, Result, Value};

use crate::parse::{parse_cluster_config, parse_standalone_config};
use crate::tree::ConfigurationTree;

/// Class name given to the document's root table.
pub const ROOT_CLASS: &str = "ClientConfiguration";

/// Commented template with every supported field.
pub fn default_toml() -> &'static str {
    r#"# glide-bridge client configuration
#
# Seed addresses (default: localhost:6379)
# [[addresses]]
# host = "localhost"
# port = 6379

use_tls = false

# read_from: 0 primary, 1 prefer replica, 2 AZ affinity,
#            3 AZ affinity replicas and primary
read_from = 0

# Milliseconds; -1 uses the native default
request_timeout = -1

# protocol: 0 RESP3, 1 RESP2
protocol = 0

inflight_requests_limit = -1
lazy_connect = false

# client_name = "my-service"
# client_az = "us-east-1a"

# [credentials]
# username = "default"
# password = "secret"

# [reconnect_strategy]
# num_of_retries = 5
# factor = 100
# exponent_base = 2
# jitter_percent = 20

# [advanced_config]
# connection_timeout = 250
# [advanced_config.tls_config]
# use_insecure_tls = false

# Standalone only
# database_id = 0

# Cluster only: 0 enabled (default interval), 1 disabled,
# or a table with duration_in_sec
# periodic_checks = 0
"#
}

/// Parse TOML text into a host value graph.
pub fn parse_toml(content: &str) -> Result<Value> {
    let table: toml::Table = toml::from_str(content).map_err(|e| Error::Serialization {
        reason: format!("Failed to parse configuration: {}", e),
    })?;
    Ok(table_to_object(ROOT_CLASS, table))
}

/// Read a TOML configuration file into a host value graph.
///
/// # Errors
///
/// `Io` if the file cannot be read, `Serialization` if it is not valid TOML.
pub fn load_file(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        reason: format!("Failed to read config file '{}': {}", path.display(), e),
    })?;
    tracing::debug!(target: "glide::config", path = %path.display(), "loading configuration file");
    parse_toml(&content)
}

/// Load and parse a standalone configuration file.
pub fn standalone_from_file(path: &Path) -> Result<ConfigurationTree> {
    parse_standalone_config(&load_file(path)?)
}

/// Load and parse a cluster configuration file.
pub fn cluster_from_file(path: &Path) -> Result<ConfigurationTree> {
    parse_cluster_config(&load_file(path)?)
}

fn table_to_object(class: &str, table: toml::Table) -> Value {
    let mut object = HostObject::new(class);
    for (key, value) in table {
        let converted = toml_to_value(&key, value);
        object.set(key, converted);
    }
    Value::Object(object)
}

fn toml_to_value(key: &str, value: toml::Value) -> Value {
    match value {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(i) => Value::Int(i),
        toml::Value::Float(f) => Value::Float(f),
        toml::Value::Boolean(b) => Value::Bool(b),
        toml::Value::Datetime(d) => Value::String(d.to_string()),
        toml::Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(|item| toml_to_value(key, item))
                .collect(),
        ),
        toml::Value::Table(t) => table_to_object(key, t),
    }
}
