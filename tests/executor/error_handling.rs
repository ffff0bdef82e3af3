//! Error Handling Tests
//!
//! Server errors surface as `CommandFailed`; malformed commands are rejected
//! before anything reaches the server.

use crate::common::*;
use glide_bridge::{AllocationProbe, Command, Error, Executor, Value};

#[test]
fn restore_onto_existing_key_fails() {
    let server = FakeServer::new();
    let executor = Executor::new(&server);
    executor
        .execute(Command::RawCommand {
            args: vec!["SET".into(), "k".into(), "v".into()],
            route: None,
        })
        .unwrap();
    let payload = executor.execute(Command::Dump { key: "k".into() }).unwrap();

    let result = executor.execute(Command::Restore {
        key: "k".into(),
        ttl: 0,
        serialized: payload.into_value(),
        options: None,
    });

    match result {
        Err(Error::CommandFailed { reason }) => assert!(reason.starts_with("BUSYKEY"), "got: {}", reason),
        other => panic!("Expected CommandFailed, got {:?}", other),
    }
}

#[test]
fn restore_with_corrupt_payload_fails() {
    let server = FakeServer::new();
    let executor = Executor::new(&server);

    let result = executor.execute(Command::Restore {
        key: "k".into(),
        ttl: 0,
        serialized: Value::Bytes(vec![0x01, 0x02]),
        options: None,
    });
    assert!(matches!(result, Err(Error::CommandFailed { .. })));
}

#[test]
fn select_out_of_range_fails() {
    let server = FakeServer::new();
    let executor = Executor::new(&server);

    let result = executor.execute(Command::Select { db: 99 });
    assert!(matches!(result, Err(Error::CommandFailed { .. })));
}

#[test]
fn exec_without_multi_fails() {
    let server = FakeServer::new();
    let executor = Executor::new(&server);

    let result = executor.execute(Command::Exec);
    match result {
        Err(Error::CommandFailed { reason }) => assert!(reason.contains("EXEC without MULTI")),
        other => panic!("Expected CommandFailed, got {:?}", other),
    }
}

#[test]
fn unknown_config_option_fails_on_server() {
    let server = FakeServer::new();
    let executor = Executor::new(&server);

    let result = executor.execute(Command::Config {
        operation: "SET".into(),
        key: Some("no-such-option".into()),
        value: Some("1".into()),
    });
    assert!(matches!(result, Err(Error::CommandFailed { .. })));
}

#[test]
fn rejections_never_reach_the_server() {
    let server = FakeServer::new();
    let executor = Executor::new(&server);

    let rejected = [
        Command::Watch { keys: vec![] },
        Command::RawCommand {
            args: vec![],
            route: None,
        },
        Command::Config {
            operation: "LIST".into(),
            key: None,
            value: None,
        },
        Command::Client {
            args: vec![],
            route: None,
        },
        Command::Wait {
            numreplicas: -2,
            timeout: 0,
        },
        Command::Restore {
            key: "".into(),
            ttl: 0,
            serialized: "x".into(),
            options: None,
        },
        Command::Dump {
            key: Value::Array(vec![]),
        },
    ];

    for cmd in rejected {
        let name = cmd.name();
        let err = executor.execute(cmd).unwrap_err();
        assert!(err.is_rejection(), "{} should be rejected, got {:?}", name, err);
    }
}

#[test]
fn exhausted_budget_reports_resource_exhausted() {
    let server = FakeServer::new();
    let probe = AllocationProbe::new();
    let executor = Executor::new(&server)
        .with_probe(probe.clone())
        .with_allocation_budget(1);

    let result = executor.execute(Command::Watch {
        keys: vec![Value::Int(1), Value::Int(2)],
    });

    assert!(matches!(result, Err(Error::ResourceExhausted { .. })));
    assert!(probe.is_balanced());
}
