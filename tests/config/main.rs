//! Configuration Tests
//!
//! Host configuration graphs and TOML files through to the connection
//! request a native client is created from.

use std::fs;

use glide_bridge::config::{
    cluster_from_file, parse_cluster_config, parse_standalone_config, standalone_from_file,
    BackoffStrategy, ConnectionRequest, PeriodicChecks, ProtocolVersion, ReadFrom, TlsMode,
    DEFAULT_CLIENT_NAME,
};
use glide_bridge::{Error, HostObject, Value};
use tempfile::TempDir;

fn address(host: &str, port: i64) -> Value {
    Value::Object(HostObject::new("NodeAddress").with("host", host).with("port", port))
}

fn full_standalone() -> Value {
    Value::Object(
        HostObject::new("StandaloneClientConfiguration")
            .with("addresses", Value::Array(vec![address("10.0.0.5", 7000)]))
            .with("use_tls", true)
            .with(
                "credentials",
                Value::Object(
                    HostObject::new("ServerCredentials")
                        .with("username", "app")
                        .with("password", "secret"),
                ),
            )
            .with("read_from", 1)
            .with("request_timeout", 2500)
            .with(
                "reconnect_strategy",
                Value::Object(
                    HostObject::new("BackoffStrategy")
                        .with("num_of_retries", 5)
                        .with("factor", 100)
                        .with("exponent_base", 2),
                ),
            )
            .with("client_name", "orders")
            .with("protocol", 1)
            .with("client_az", "us-east-1a")
            .with(
                "advanced_config",
                Value::Object(
                    HostObject::new("AdvancedConfig")
                        .with("connection_timeout", 300)
                        .with(
                            "tls_config",
                            Value::Object(
                                HostObject::new("TlsAdvancedConfig").with("use_insecure_tls", true),
                            ),
                        ),
                ),
            )
            .with("lazy_connect", true)
            .with("database_id", 4),
    )
}

#[test]
fn standalone_object_maps_to_connection_request() {
    let tree = parse_standalone_config(&full_standalone()).unwrap();
    let request = ConnectionRequest::from_tree(&tree);

    assert_eq!(request.host, "10.0.0.5");
    assert_eq!(request.port, 7000);
    assert_eq!(request.tls_mode, TlsMode::InsecureTls);
    assert_eq!(request.authentication.as_ref().unwrap().username, "app");
    assert_eq!(request.read_from, ReadFrom::PreferReplica);
    assert_eq!(request.request_timeout_ms, 2500);
    assert_eq!(request.protocol, ProtocolVersion::Resp2);
    assert_eq!(request.client_name, "orders");
    assert_eq!(request.client_az.as_deref(), Some("us-east-1a"));
    assert_eq!(request.database_id, 4);
    assert_eq!(request.connection_timeout_ms, Some(300));
    assert!(request.lazy_connect);
    assert!(!request.cluster_mode_enabled);
    assert_eq!(request.periodic_checks, None);

    assert_eq!(
        tree.base.reconnect_strategy,
        Some(BackoffStrategy {
            num_of_retries: 5,
            factor: 100,
            exponent_base: 2,
            jitter_percent: -1,
        })
    );
}

#[test]
fn empty_object_maps_to_default_request() {
    let tree = parse_standalone_config(&Value::Object(HostObject::new("Config"))).unwrap();
    let request = ConnectionRequest::from_tree(&tree);

    assert_eq!(request.host, "localhost");
    assert_eq!(request.port, 6379);
    assert_eq!(request.authentication, None);
    assert_eq!(request.tls_mode, TlsMode::NoTls);
    assert_eq!(request.request_timeout_ms, 5000);
    assert_eq!(request.database_id, 0);
    assert_eq!(request.client_name, DEFAULT_CLIENT_NAME);
    assert_eq!(request.inflight_requests_limit, None);
    assert_eq!(request.connection_timeout_ms, None);
}

#[test]
fn release_frees_everything_once() {
    let mut tree = parse_standalone_config(&full_standalone()).unwrap();
    let owned = tree.allocation_count();
    assert!(owned > 0);

    assert_eq!(tree.release(), owned);
    assert_eq!(tree.allocation_count(), 0);
    assert_eq!(tree.release(), 0);
    assert!(tree.base.addresses.is_empty());
    assert!(tree.base.client_name.is_none());
}

#[test]
fn cluster_with_manual_interval() {
    let config = Value::Object(
        HostObject::new("ClusterClientConfiguration")
            .with("addresses", Value::Array(vec![address("node-1", 7001), address("node-2", 7002)]))
            .with(
                "periodic_checks",
                Value::Object(HostObject::new("PeriodicChecksManualInterval").with("duration_in_sec", 30)),
            ),
    );

    let tree = parse_cluster_config(&config).unwrap();
    let request = ConnectionRequest::from_tree(&tree);

    assert!(request.cluster_mode_enabled);
    assert_eq!(request.host, "node-1");
    assert_eq!(
        request.periodic_checks,
        Some(PeriodicChecks::ManualInterval { duration_in_sec: 30 })
    );
}

#[test]
fn non_object_config_is_rejected() {
    for bad in [Value::Null, Value::Int(1), Value::from("localhost")] {
        assert!(matches!(
            parse_standalone_config(&bad),
            Err(Error::InvalidArgument { .. })
        ));
        assert!(matches!(
            parse_cluster_config(&bad),
            Err(Error::InvalidArgument { .. })
        ));
    }
}

#[test]
fn standalone_file_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("client.toml");
    fs::write(
        &path,
        r#"
request_timeout = 1500
client_name = "from-file"
database_id = 2

[[addresses]]
host = "cache.internal"
port = 6380

[credentials]
username = "svc"
password = "pw"
"#,
    )
    .unwrap();

    let tree = standalone_from_file(&path).unwrap();
    let request = ConnectionRequest::from_tree(&tree);

    assert_eq!(request.host, "cache.internal");
    assert_eq!(request.port, 6380);
    assert_eq!(request.request_timeout_ms, 1500);
    assert_eq!(request.client_name, "from-file");
    assert_eq!(request.database_id, 2);
    assert!(request.authentication.is_some());
}

#[test]
fn cluster_file_with_disabled_checks() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("cluster.toml");
    fs::write(&path, "periodic_checks = 1\n").unwrap();

    let tree = cluster_from_file(&path).unwrap();
    assert_eq!(
        ConnectionRequest::from_tree(&tree).periodic_checks,
        Some(PeriodicChecks::Disabled)
    );
}

#[test]
fn file_errors_are_typed() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.toml");
    assert!(matches!(standalone_from_file(&missing), Err(Error::Io { .. })));

    let broken = dir.path().join("broken.toml");
    fs::write(&broken, "request_timeout = [").unwrap();
    assert!(matches!(
        standalone_from_file(&broken),
        Err(Error::Serialization { .. })
    ));
}
