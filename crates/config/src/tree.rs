//! The parsed client configuration tree.
//!
//! Every optional field has a documented default (see [`crate::parse`]).
//! The tree owns its strings, its address list and its nested sub-configs.
//! [`ConfigurationTree::release`] frees them exactly once and leaves the
//! fields empty, so a second release is a no-op.

use serde::{Deserialize, Serialize};

/// Default host for address entries without a usable `host`.
pub const DEFAULT_HOST: &str = "localhost";
/// Default port for address entries without a usable `port`.
pub const DEFAULT_PORT: i64 = 6379;

/// One server address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeAddress {
    /// Host name; `None` only after release
    pub host: Option<String>,
    /// TCP port
    pub port: i64,
}

impl Default for NodeAddress {
    fn default() -> Self {
        Self {
            host: Some(DEFAULT_HOST.to_string()),
            port: DEFAULT_PORT,
        }
    }
}

/// Optional username and password.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerCredentials {
    /// Username, if given as a string
    pub username: Option<String>,
    /// Password, if given as a string
    pub password: Option<String>,
}

/// Read preference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReadFrom {
    /// Always read from the primary
    #[default]
    Primary,
    /// Prefer replicas, fall back to the primary
    PreferReplica,
    /// Prefer replicas in the client's availability zone
    AzAffinity,
    /// Prefer replicas and the primary in the client's availability zone
    AzAffinityReplicasAndPrimary,
}

impl ReadFrom {
    /// Map the host integer code. Unknown codes read as `Primary`.
    pub fn from_code(code: i64) -> Self {
        match code {
            1 => ReadFrom::PreferReplica,
            2 => ReadFrom::AzAffinity,
            3 => ReadFrom::AzAffinityReplicasAndPrimary,
            _ => ReadFrom::Primary,
        }
    }
}

/// Protocol version.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProtocolVersion {
    /// RESP3
    #[default]
    Resp3,
    /// RESP2
    Resp2,
}

impl ProtocolVersion {
    /// Map the host integer code. Unknown codes read as `Resp3`.
    pub fn from_code(code: i64) -> Self {
        match code {
            1 => ProtocolVersion::Resp2,
            _ => ProtocolVersion::Resp3,
        }
    }
}

/// Reconnect backoff strategy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackoffStrategy {
    /// Number of retries before the delay stops growing
    pub num_of_retries: i64,
    /// Delay multiplier in milliseconds
    pub factor: i64,
    /// Exponent base
    pub exponent_base: i64,
    /// Jitter as a percentage of the delay, -1 when unset
    pub jitter_percent: i64,
}

impl Default for BackoffStrategy {
    fn default() -> Self {
        Self {
            num_of_retries: 0,
            factor: 0,
            exponent_base: 0,
            jitter_percent: -1,
        }
    }
}

/// TLS options beyond the on/off flag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TlsAdvancedConfig {
    /// Skip certificate verification
    pub use_insecure_tls: bool,
}

/// Advanced connection options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvancedConfig {
    /// Connection timeout in milliseconds, -1 when unset
    pub connection_timeout: i64,
    /// TLS sub-config
    pub tls_config: Option<TlsAdvancedConfig>,
}

impl Default for AdvancedConfig {
    fn default() -> Self {
        Self {
            connection_timeout: -1,
            tls_config: None,
        }
    }
}

/// Cluster topology checks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PeriodicChecks {
    /// Native client default interval
    #[default]
    EnabledDefault,
    /// No periodic checks
    Disabled,
    /// Fixed interval
    ManualInterval {
        /// Interval in seconds
        duration_in_sec: i64,
    },
}

impl PeriodicChecks {
    /// Map the host integer status code. Unknown codes read as `EnabledDefault`.
    pub fn from_code(code: i64) -> Self {
        match code {
            1 => PeriodicChecks::Disabled,
            _ => PeriodicChecks::EnabledDefault,
        }
    }
}

/// Fields shared by standalone and cluster configurations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseClientConfig {
    /// Seed addresses, in host order
    pub addresses: Vec<NodeAddress>,
    /// Use TLS
    pub use_tls: bool,
    /// Credentials
    pub credentials: Option<ServerCredentials>,
    /// Read preference
    pub read_from: ReadFrom,
    /// Request timeout in milliseconds, -1 when unset
    pub request_timeout: i64,
    /// Reconnect strategy
    pub reconnect_strategy: Option<BackoffStrategy>,
    /// Client name sent on connect
    pub client_name: Option<String>,
    /// Protocol version
    pub protocol: ProtocolVersion,
    /// Inflight request limit, -1 when unset
    pub inflight_requests_limit: i64,
    /// Availability zone of the client
    pub client_az: Option<String>,
    /// Advanced options
    pub advanced_config: Option<AdvancedConfig>,
    /// Defer connecting until the first command
    pub lazy_connect: bool,
}

impl Default for BaseClientConfig {
    fn default() -> Self {
        Self {
            addresses: Vec::new(),
            use_tls: false,
            credentials: None,
            read_from: ReadFrom::Primary,
            request_timeout: -1,
            reconnect_strategy: None,
            client_name: None,
            protocol: ProtocolVersion::Resp3,
            inflight_requests_limit: -1,
            client_az: None,
            advanced_config: None,
            lazy_connect: false,
        }
    }
}

/// Standalone or cluster extension of the base config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ClientMode {
    /// Single server (with optional replicas)
    Standalone {
        /// Logical database index, -1 when unset
        database_id: i64,
    },
    /// Cluster
    Cluster {
        /// Topology checks
        periodic_checks: PeriodicChecks,
    },
}

impl ClientMode {
    /// Check for cluster mode
    pub fn is_cluster(&self) -> bool {
        matches!(self, ClientMode::Cluster { .. })
    }
}

/// A complete parsed configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigurationTree {
    /// Shared fields
    pub base: BaseClientConfig,
    /// Mode-specific fields
    pub mode: ClientMode,
}

impl ConfigurationTree {
    /// Number of heap allocations the tree currently owns.
    ///
    /// Counts the address list, each address host, each present nested
    /// sub-config and each owned string.
    pub fn allocation_count(&self) -> usize {
        let base = &self.base;
        let mut count = 0;
        if !base.addresses.is_empty() {
            count += 1;
            count += base.addresses.iter().filter(|a| a.host.is_some()).count();
        }
        if let Some(creds) = &base.credentials {
            count += 1;
            count += creds.username.is_some() as usize;
            count += creds.password.is_some() as usize;
        }
        count += base.reconnect_strategy.is_some() as usize;
        count += base.client_name.is_some() as usize;
        count += base.client_az.is_some() as usize;
        if let Some(advanced) = &base.advanced_config {
            count += 1;
            count += advanced.tls_config.is_some() as usize;
        }
        if let ClientMode::Cluster {
            periodic_checks: PeriodicChecks::ManualInterval { .. },
        } = self.mode
        {
            count += 1;
        }
        count
    }

    /// Free every owned allocation, nulling each field as it goes.
    ///
    /// Returns how many allocations were freed. Safe on partially filled
    /// trees and on repeated calls (which free nothing).
    pub fn release(&mut self) -> usize {
        let freed = self.allocation_count();
        let base = &mut self.base;
        for address in &mut base.addresses {
            address.host = None;
        }
        base.addresses = Vec::new();
        base.credentials = None;
        base.reconnect_strategy = None;
        base.client_name = None;
        base.client_az = None;
        base.advanced_config = None;
        if let ClientMode::Cluster { periodic_checks } = &mut self.mode {
            if let PeriodicChecks::ManualInterval { .. } = periodic_checks {
                *periodic_checks = PeriodicChecks::EnabledDefault;
            }
        }
        if freed > 0 {
            tracing::trace!(target: "glide::config", freed, "configuration tree released");
        }
        freed
    }
}
