//! Client configuration for glide-bridge
//!
//! Host configuration objects (or TOML files) are parsed into a
//! [`ConfigurationTree`] with a documented default for every optional field,
//! and the tree maps onto the [`ConnectionRequest`] a native client is
//! created from.
//!
//! ```ignore
//! use glide_bridge_config::{parse_standalone_config, ConnectionRequest};
//!
//! let mut tree = parse_standalone_config(&host_config)?;
//! let request = ConnectionRequest::from_tree(&tree);
//! tree.release();
//! ```

#![warn(clippy::all)]

pub mod file;
pub mod parse;
pub mod request;
pub mod schema;
pub mod tree;

pub use file::{cluster_from_file, load_file, parse_toml, standalone_from_file};
pub use parse::{parse_cluster_config, parse_standalone_config};
pub use request::{AuthenticationInfo, ConnectionRequest, TlsMode, DEFAULT_CLIENT_NAME};
pub use schema::{parse_with_defaults, Field, FieldKind};
pub use tree::{
    AdvancedConfig, BackoffStrategy, BaseClientConfig, ClientMode, ConfigurationTree, NodeAddress,
    PeriodicChecks, ProtocolVersion, ReadFrom, ServerCredentials, TlsAdvancedConfig,
};
