//! Command Dispatch Tests
//!
//! Drives the Executor against the fake server and checks that commands
//! land with the right wire form and decode to the documented Output.

use crate::common::*;
use glide_bridge::{Command, Executor, MapKey, Output, Route, Value};

fn set(executor: &Executor<'_>, key: &str, value: &str) {
    let output = executor
        .execute(Command::RawCommand {
            args: vec!["SET".into(), key.into(), value.into()],
            route: None,
        })
        .unwrap();
    assert_eq!(output, Output::Bool(true));
}

// ============================================================================
// Serialization
// ============================================================================

#[test]
fn dump_then_restore_copies_a_key() {
    let server = FakeServer::new();
    let executor = Executor::new(&server);
    set(&executor, "src", "hello");

    let payload = executor
        .execute(Command::Dump { key: "src".into() })
        .unwrap()
        .into_value();
    assert!(matches!(payload, Value::Bytes(_)), "payload is binary: {:?}", payload);

    let restored = executor
        .execute(Command::Restore {
            key: "dst".into(),
            ttl: 0,
            serialized: payload,
            options: None,
        })
        .unwrap();

    assert_eq!(restored, Output::Bool(true));
    assert_eq!(server.get(b"dst"), Some(b"hello".to_vec()));
}

#[test]
fn restore_replace_overwrites() {
    let server = FakeServer::new();
    let executor = Executor::new(&server);
    set(&executor, "a", "one");
    set(&executor, "b", "two");

    let payload = executor.execute(Command::Dump { key: "a".into() }).unwrap();
    let output = executor
        .execute(Command::Restore {
            key: "b".into(),
            ttl: 0,
            serialized: payload.into_value(),
            options: Some(Value::Map(vec![
                (MapKey::Index(0), "REPLACE".into()),
                (MapKey::from("IDLETIME"), Value::Int(10)),
            ])),
        })
        .unwrap();

    assert_eq!(output, Output::Bool(true));
    assert_eq!(server.get(b"b"), Some(b"one".to_vec()));
}

#[test]
fn dump_missing_key_is_false() {
    let server = FakeServer::new();
    let executor = Executor::new(&server);

    let output = executor.execute(Command::Dump { key: "nope".into() }).unwrap();
    assert_eq!(output, Output::Bool(false));
}

// ============================================================================
// Keyspace
// ============================================================================

#[test]
fn move_select_and_dbsize() {
    let server = FakeServer::new();
    let executor = Executor::new(&server);
    set(&executor, "k", "v");

    let moved = executor
        .execute(Command::Move {
            key: "k".into(),
            db: 3,
        })
        .unwrap();
    assert_eq!(moved, Output::Bool(true));
    assert_eq!(executor.execute(Command::DbSize { route: None }).unwrap(), Output::Int(0));

    assert_eq!(executor.execute(Command::Select { db: 3 }).unwrap(), Output::Ok);
    assert_eq!(executor.execute(Command::DbSize { route: None }).unwrap(), Output::Int(1));
}

#[test]
fn copy_respects_replace() {
    let server = FakeServer::new();
    let executor = Executor::new(&server);
    set(&executor, "a", "1");
    set(&executor, "b", "2");

    let copy = |replace| {
        executor
            .execute(Command::Copy {
                source: "a".into(),
                destination: "b".into(),
                replace,
            })
            .unwrap()
    };

    assert_eq!(copy(false), Output::Bool(false));
    assert_eq!(server.get(b"b"), Some(b"2".to_vec()));
    assert_eq!(copy(true), Output::Bool(true));
    assert_eq!(server.get(b"b"), Some(b"1".to_vec()));
}

#[test]
fn keys_and_object_encoding() {
    let server = FakeServer::new();
    let executor = Executor::new(&server);
    set(&executor, "user:1", "a");
    set(&executor, "user:2", "b");
    set(&executor, "other", "c");

    let keys = executor
        .execute(Command::Keys {
            pattern: "user:*".into(),
        })
        .unwrap();
    assert_eq!(
        keys,
        Output::Value(Value::Array(vec!["user:1".into(), "user:2".into()]))
    );

    let encoding = executor
        .execute(Command::Object {
            subcommand: "encoding".into(),
            key: "other".into(),
        })
        .unwrap();
    assert_eq!(encoding, Output::Value("embstr".into()));
}

// ============================================================================
// Server
// ============================================================================

#[test]
fn config_set_then_get() {
    let server = FakeServer::new();
    let executor = Executor::new(&server);

    let set = executor
        .execute(Command::Config {
            operation: "SET".into(),
            key: Some(Value::Map(vec![
                (MapKey::from("maxmemory"), "100mb".into()),
                (MapKey::from("timeout"), Value::Int(30)),
            ])),
            value: None,
        })
        .unwrap();
    assert_eq!(set, Output::Bool(true));

    let got = executor
        .execute(Command::Config {
            operation: "GET".into(),
            key: Some(Value::Array(vec!["maxmemory".into(), "timeout".into()])),
            value: None,
        })
        .unwrap();
    assert_eq!(
        got,
        Output::Value(Value::Map(vec![
            (MapKey::from("maxmemory"), "100mb".into()),
            (MapKey::from("timeout"), "30".into()),
        ]))
    );
}

#[test]
fn flushdb_clears_selected_database() {
    let server = FakeServer::new();
    let executor = Executor::new(&server);
    set(&executor, "a", "1");

    let output = executor
        .execute(Command::FlushDb {
            asynchronous: true,
            route: None,
        })
        .unwrap();

    assert_eq!(output, Output::Ok);
    assert_eq!(executor.execute(Command::DbSize { route: None }).unwrap(), Output::Int(0));
}

#[test]
fn routed_commands_use_routed_entry_point() {
    let server = FakeServer::new();
    let executor = Executor::new(&server);
    let route = Route::new("allPrimaries");

    executor
        .execute(Command::DbSize {
            route: Some(route.clone()),
        })
        .unwrap();
    executor
        .execute(Command::RawCommand {
            args: vec!["PING".into()],
            route: Some(route),
        })
        .unwrap();
    executor.execute(Command::DbSize { route: None }).unwrap();

    assert_eq!(server.routed_calls(), 2);
}

#[test]
fn transaction_markers() {
    let server = FakeServer::new();
    let executor = Executor::new(&server);

    let results = executor.execute_many(vec![Command::Multi, Command::Exec]);
    assert_eq!(results[0].as_ref().unwrap(), &Output::Ok);
    assert_eq!(
        results[1].as_ref().unwrap(),
        &Output::Value(Value::Array(vec![]))
    );
}
