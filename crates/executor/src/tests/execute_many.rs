//! Tests for the execute_many batch execution method.

use super::mock::RecordingClient;
use crate::{Command, CommandResult, Error, Executor, Output, RequestType, Response, Value};

#[test]
fn test_execute_many_empty() {
    let client = RecordingClient::new();
    let executor = Executor::new(&client);

    assert!(executor.execute_many(vec![]).is_empty());
    assert!(client.calls().is_empty());
}

#[test]
fn test_execute_many_transaction_sequence() {
    let client = RecordingClient::new()
        .then(CommandResult::ok(Response::Ok))
        .then(CommandResult::ok(Response::Ok))
        .then(CommandResult::ok(Response::Array(vec![Response::Ok])));
    let executor = Executor::new(&client);

    let results = executor.execute_many(vec![
        Command::Multi,
        Command::Select { db: 1 },
        Command::Exec,
    ]);

    assert_eq!(results.len(), 3);
    assert_eq!(results[0].as_ref().unwrap(), &Output::Ok);
    assert_eq!(results[1].as_ref().unwrap(), &Output::Ok);
    assert_eq!(
        results[2].as_ref().unwrap(),
        &Output::Value(Value::Array(vec![Value::Bool(true)]))
    );

    let kinds: Vec<_> = client.calls().iter().map(|c| c.kind).collect();
    assert_eq!(kinds, [RequestType::Multi, RequestType::Select, RequestType::Exec]);
}

#[test]
fn test_execute_many_continues_after_error() {
    let client = RecordingClient::new()
        .then(CommandResult::failed("ERR DB index is out of range"))
        .then(CommandResult::ok(Response::Int(5)));
    let executor = Executor::new(&client);

    let results = executor.execute_many(vec![
        Command::Select { db: 99 },
        Command::Watch { keys: vec![] },
        Command::DbSize { route: None },
    ]);

    assert!(matches!(results[0], Err(Error::CommandFailed { .. })));
    assert!(matches!(results[1], Err(Error::InvalidArgument { .. })));
    assert_eq!(results[2].as_ref().unwrap(), &Output::Int(5));
    assert_eq!(client.calls().len(), 2);
}
