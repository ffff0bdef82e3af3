//! Connection request derived from a configuration tree.
//!
//! This is the flat record the native client is created from. Mapping rules:
//! first address or `localhost:6379`; authentication only when both username
//! and password are present; request timeout from the tree when positive,
//! else 5000 ms; database id only for standalone trees with a non-negative
//! id, else 0.

use serde::{Deserialize, Serialize};

use crate::tree::{
    ClientMode, ConfigurationTree, PeriodicChecks, ProtocolVersion, ReadFrom, DEFAULT_HOST,
    DEFAULT_PORT,
};

/// Client name used when the configuration does not set one.
pub const DEFAULT_CLIENT_NAME: &str = "glide-bridge";

/// Request timeout used when the configuration leaves it unset or non-positive.
pub const DEFAULT_REQUEST_TIMEOUT_MS: i64 = 5000;

/// TLS mode on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TlsMode {
    /// Plain TCP
    NoTls,
    /// TLS with certificate verification
    SecureTls,
    /// TLS without certificate verification
    InsecureTls,
}

/// Username and password pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticationInfo {
    /// Username
    pub username: String,
    /// Password
    pub password: String,
}

/// Everything needed to create a native client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionRequest {
    pub host: String,
    pub port: i64,
    pub authentication: Option<AuthenticationInfo>,
    pub tls_mode: TlsMode,
    pub cluster_mode_enabled: bool,
    pub request_timeout_ms: i64,
    pub read_from: ReadFrom,
    pub database_id: i64,
    pub protocol: ProtocolVersion,
    pub client_name: String,
    pub client_az: Option<String>,
    pub periodic_checks: Option<PeriodicChecks>,
    pub lazy_connect: bool,
    pub inflight_requests_limit: Option<i64>,
    pub connection_timeout_ms: Option<i64>,
}

impl ConnectionRequest {
    /// Build the request from a parsed tree.
    pub fn from_tree(tree: &ConfigurationTree) -> Self {
        let base = &tree.base;

        let (host, port) = match base.addresses.first() {
            Some(addr) => (
                addr.host.clone().unwrap_or_else(|| DEFAULT_HOST.to_string()),
                addr.port,
            ),
            None => (DEFAULT_HOST.to_string(), DEFAULT_PORT),
        };

        let authentication = base.credentials.as_ref().and_then(|c| {
            match (&c.username, &c.password) {
                (Some(username), Some(password)) => Some(AuthenticationInfo {
                    username: username.clone(),
                    password: password.clone(),
                }),
                _ => None,
            }
        });

        let insecure = base
            .advanced_config
            .as_ref()
            .and_then(|a| a.tls_config.as_ref())
            .map_or(false, |t| t.use_insecure_tls);
        let tls_mode = match (base.use_tls, insecure) {
            (false, _) => TlsMode::NoTls,
            (true, false) => TlsMode::SecureTls,
            (true, true) => TlsMode::InsecureTls,
        };

        let (database_id, periodic_checks) = match tree.mode {
            ClientMode::Standalone { database_id } if database_id >= 0 => (database_id, None),
            ClientMode::Standalone { .. } => (0, None),
            ClientMode::Cluster { periodic_checks } => (0, Some(periodic_checks)),
        };

        let connection_timeout_ms = base
            .advanced_config
            .as_ref()
            .map(|a| a.connection_timeout)
            .filter(|t| *t >= 0);

        Self {
            host,
            port,
            authentication,
            tls_mode,
            cluster_mode_enabled: tree.mode.is_cluster(),
            request_timeout_ms: if base.request_timeout > 0 {
                base.request_timeout
            } else {
                DEFAULT_REQUEST_TIMEOUT_MS
            },
            read_from: base.read_from,
            database_id,
            protocol: base.protocol,
            client_name: base
                .client_name
                .clone()
                .unwrap_or_else(|| DEFAULT_CLIENT_NAME.to_string()),
            client_az: base.client_az.clone(),
            periodic_checks,
            lazy_connect: base.lazy_connect,
            inflight_requests_limit: Some(base.inflight_requests_limit).filter(|l| *l >= 0),
            connection_timeout_ms,
        }
    }
}
