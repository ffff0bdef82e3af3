//! JSON Script Tests
//!
//! Bindings that marshal through JSON hand over a list of commands and read
//! back the outputs. These run such scripts against the fake server.

use crate::common::*;
use glide_bridge::{Command, Executor, Output};
use serde_json::json;

fn run(server: &FakeServer, script: serde_json::Value) -> serde_json::Value {
    let commands: Vec<Command> = serde_json::from_value(script).unwrap();
    let outputs: Vec<Output> = Executor::new(server)
        .execute_many(commands)
        .into_iter()
        .collect::<Result<_, _>>()
        .unwrap();
    serde_json::to_value(outputs).unwrap()
}

#[test]
fn keyspace_script() {
    let server = FakeServer::new();

    let outputs = run(
        &server,
        json!([
            {"RawCommand": {"args": ["SET", "user:1", "ada"]}},
            {"Move": {"key": "user:1", "db": 3}},
            {"Select": {"db": 3}},
            {"Keys": {"pattern": "user:*"}},
            {"Object": {"subcommand": "REFCOUNT", "key": "user:1"}},
            {"Object": {"subcommand": "FREQ", "key": "user:2"}},
        ]),
    );

    assert_eq!(
        outputs,
        json!([
            {"Bool": true},
            {"Bool": true},
            "Ok",
            {"Value": ["user:1"]},
            {"Int": 1},
            {"Bool": false},
        ])
    );
}

#[test]
fn dump_payload_travels_as_tagged_bytes() {
    let server = FakeServer::new();
    run(&server, json!([{"RawCommand": {"args": ["SET", "src", "ada"]}}]));

    let dumped = run(&server, json!([{"Dump": {"key": "src"}}]));
    let payload = dumped[0]["Value"].clone();
    assert!(payload["$bytes"].is_string(), "payload is {}", payload);

    let restored = run(
        &server,
        json!([{"Restore": {"key": "dst", "ttl": 0, "serialized": payload}}]),
    );

    assert_eq!(restored, json!([{"Bool": true}]));
    assert_eq!(server.get(b"dst"), Some(b"ada".to_vec()));
}

#[test]
fn malformed_script_is_rejected_before_execution() {
    let result: Result<Vec<Command>, _> = serde_json::from_value(json!([
        {"Select": {"db": 1}},
        {"Restore": {"key": "k", "ttl": 0, "serialized": {"$bytes": "not base64!"}}},
    ]));
    assert!(result.is_err());
}
