//! Host configuration objects to [`ConfigurationTree`].
//!
//! | Field | Host type | Default |
//! |-------|-----------|---------|
//! | `addresses` | array of `{host, port}` | empty; entry `localhost:6379` |
//! | `use_tls` | bool | `false` |
//! | `credentials` | `{username?, password?}` | absent |
//! | `read_from` | int code | primary |
//! | `request_timeout` | int | `-1` |
//! | `reconnect_strategy` | `{num_of_retries, factor, exponent_base, jitter_percent?}` | absent |
//! | `client_name` | string | absent |
//! | `protocol` | int code | RESP3 |
//! | `inflight_requests_limit` | int | `-1` |
//! | `client_az` | string | absent |
//! | `advanced_config` | `{connection_timeout?, tls_config?}` | absent |
//! | `lazy_connect` | bool | `false` |
//! | `database_id` (standalone) | int | `-1` |
//! | `periodic_checks` (cluster) | int code or `{duration_in_sec}` | enabled-default |
//!
//! Only the top level is strict: it must be an object (host `Object` or
//! named-key `Map`). Everything below degrades to defaults.

use glide_bridge_core::{Error, Result, Value};

use crate::schema::{parse_nested, parse_with_defaults, set_flag, set_int, set_string, Field, FieldKind};
use crate::tree::{
    AdvancedConfig, BackoffStrategy, BaseClientConfig, ClientMode, ConfigurationTree, NodeAddress,
    PeriodicChecks, ProtocolVersion, ReadFrom, ServerCredentials, TlsAdvancedConfig,
};

const NODE_ADDRESS: &[Field<NodeAddress>] = &[
    Field {
        name: "host",
        kind: FieldKind::String,
        apply: |a, v| set_string(&mut a.host, v),
    },
    Field {
        name: "port",
        kind: FieldKind::Int,
        apply: |a, v| set_int(&mut a.port, v),
    },
];

const CREDENTIALS: &[Field<ServerCredentials>] = &[
    Field {
        name: "username",
        kind: FieldKind::String,
        apply: |c, v| set_string(&mut c.username, v),
    },
    Field {
        name: "password",
        kind: FieldKind::String,
        apply: |c, v| set_string(&mut c.password, v),
    },
];

const BACKOFF: &[Field<BackoffStrategy>] = &[
    Field {
        name: "num_of_retries",
        kind: FieldKind::Int,
        apply: |b, v| set_int(&mut b.num_of_retries, v),
    },
    Field {
        name: "factor",
        kind: FieldKind::Int,
        apply: |b, v| set_int(&mut b.factor, v),
    },
    Field {
        name: "exponent_base",
        kind: FieldKind::Int,
        apply: |b, v| set_int(&mut b.exponent_base, v),
    },
    Field {
        name: "jitter_percent",
        kind: FieldKind::Int,
        apply: |b, v| set_int(&mut b.jitter_percent, v),
    },
];

const TLS: &[Field<TlsAdvancedConfig>] = &[Field {
    name: "use_insecure_tls",
    kind: FieldKind::Bool,
    apply: |t, v| set_flag(&mut t.use_insecure_tls, v),
}];

const ADVANCED: &[Field<AdvancedConfig>] = &[
    Field {
        name: "connection_timeout",
        kind: FieldKind::Int,
        apply: |a, v| set_int(&mut a.connection_timeout, v),
    },
    Field {
        name: "tls_config",
        kind: FieldKind::Object,
        apply: |a, v| {
            a.tls_config = parse_nested(v, TLS, "TlsAdvancedConfig");
            a.tls_config.is_some()
        },
    },
];

const BASE: &[Field<BaseClientConfig>] = &[
    Field {
        name: "addresses",
        kind: FieldKind::Array,
        apply: |c, v| match parse_addresses(v) {
            Some(addresses) => {
                c.addresses = addresses;
                true
            }
            None => false,
        },
    },
    Field {
        name: "use_tls",
        kind: FieldKind::Bool,
        apply: |c, v| set_flag(&mut c.use_tls, v),
    },
    Field {
        name: "credentials",
        kind: FieldKind::Object,
        apply: |c, v| {
            c.credentials = parse_nested(v, CREDENTIALS, "ServerCredentials");
            c.credentials.is_some()
        },
    },
    Field {
        name: "read_from",
        kind: FieldKind::Int,
        apply: |c, v| v.as_int().map(|code| c.read_from = ReadFrom::from_code(code)).is_some(),
    },
    Field {
        name: "request_timeout",
        kind: FieldKind::Int,
        apply: |c, v| set_int(&mut c.request_timeout, v),
    },
    Field {
        name: "reconnect_strategy",
        kind: FieldKind::Object,
        apply: |c, v| {
            c.reconnect_strategy = parse_nested(v, BACKOFF, "BackoffStrategy");
            c.reconnect_strategy.is_some()
        },
    },
    Field {
        name: "client_name",
        kind: FieldKind::String,
        apply: |c, v| set_string(&mut c.client_name, v),
    },
    Field {
        name: "protocol",
        kind: FieldKind::Int,
        apply: |c, v| {
            v.as_int()
                .map(|code| c.protocol = ProtocolVersion::from_code(code))
                .is_some()
        },
    },
    Field {
        name: "inflight_requests_limit",
        kind: FieldKind::Int,
        apply: |c, v| set_int(&mut c.inflight_requests_limit, v),
    },
    Field {
        name: "client_az",
        kind: FieldKind::String,
        apply: |c, v| set_string(&mut c.client_az, v),
    },
    Field {
        name: "advanced_config",
        kind: FieldKind::Object,
        apply: |c, v| {
            c.advanced_config = parse_nested(v, ADVANCED, "AdvancedConfig");
            c.advanced_config.is_some()
        },
    },
    Field {
        name: "lazy_connect",
        kind: FieldKind::Bool,
        apply: |c, v| set_flag(&mut c.lazy_connect, v),
    },
];

struct StandaloneExt {
    database_id: i64,
}

impl Default for StandaloneExt {
    fn default() -> Self {
        Self { database_id: -1 }
    }
}

const STANDALONE: &[Field<StandaloneExt>] = &[Field {
    name: "database_id",
    kind: FieldKind::Int,
    apply: |s, v| set_int(&mut s.database_id, v),
}];

#[derive(Default)]
struct ClusterExt {
    periodic_checks: PeriodicChecks,
}

#[derive(Default)]
struct ManualInterval {
    duration_in_sec: i64,
}

const MANUAL_INTERVAL: &[Field<ManualInterval>] = &[Field {
    name: "duration_in_sec",
    kind: FieldKind::Int,
    apply: |m, v| set_int(&mut m.duration_in_sec, v),
}];

const CLUSTER: &[Field<ClusterExt>] = &[Field {
    name: "periodic_checks",
    kind: FieldKind::IntOrObject,
    apply: |c, v| {
        if let Some(code) = v.as_int() {
            c.periodic_checks = PeriodicChecks::from_code(code);
            true
        } else if let Some(manual) = parse_nested(v, MANUAL_INTERVAL, "PeriodicChecksManualInterval") {
            c.periodic_checks = PeriodicChecks::ManualInterval {
                duration_in_sec: manual.duration_in_sec,
            };
            true
        } else {
            false
        }
    },
}];

fn parse_addresses(value: &Value) -> Option<Vec<NodeAddress>> {
    let entries: Vec<&Value> = match value {
        Value::Array(items) => items.iter().collect(),
        Value::Map(entries) => entries.iter().map(|(_, v)| v).collect(),
        _ => return None,
    };
    let addresses = entries
        .into_iter()
        .map(|entry| parse_with_defaults(entry, NODE_ADDRESS, "NodeAddress"))
        .collect();
    Some(addresses)
}

fn require_object(config: &Value) -> Result<()> {
    if config.has_properties() {
        Ok(())
    } else {
        Err(Error::invalid(format!(
            "client configuration must be an object, got {}",
            config.type_name()
        )))
    }
}

/// Parse a standalone client configuration.
///
/// # Errors
///
/// `InvalidArgument` if `config` is not an object. Nothing is allocated in
/// that case.
pub fn parse_standalone_config(config: &Value) -> Result<ConfigurationTree> {
    require_object(config)?;
    let base = parse_with_defaults(config, BASE, "ClientConfiguration");
    let ext = parse_with_defaults(config, STANDALONE, "ClientConfiguration");
    Ok(ConfigurationTree {
        base,
        mode: ClientMode::Standalone {
            database_id: ext.database_id,
        },
    })
}

/// Parse a cluster client configuration.
///
/// # Errors
///
/// `InvalidArgument` if `config` is not an object.
pub fn parse_cluster_config(config: &Value) -> Result<ConfigurationTree> {
    require_object(config)?;
    let base = parse_with_defaults(config, BASE, "ClusterClientConfiguration");
    let ext = parse_with_defaults(config, CLUSTER, "ClusterClientConfiguration");
    Ok(ConfigurationTree {
        base,
        mode: ClientMode::Cluster {
            periodic_checks: ext.periodic_checks,
        },
    })
}
