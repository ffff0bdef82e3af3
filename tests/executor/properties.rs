//! Property Tests
//!
//! Invariants that hold for any stored value.

use crate::common::*;
use glide_bridge::{Command, Executor, Output, Value};
use proptest::prelude::*;

fn set_bytes(executor: &Executor<'_>, key: &str, value: Vec<u8>) {
    executor
        .execute(Command::RawCommand {
            args: vec!["SET".into(), key.into(), Value::Bytes(value)],
            route: None,
        })
        .unwrap();
}

proptest! {
    #[test]
    fn dump_then_restore_preserves_any_value(value in proptest::collection::vec(any::<u8>(), 0..64)) {
        let server = FakeServer::new();
        let executor = Executor::new(&server);
        set_bytes(&executor, "src", value.clone());

        let payload = executor
            .execute(Command::Dump { key: "src".into() })
            .unwrap()
            .into_value();
        let restored = executor
            .execute(Command::Restore {
                key: "dst".into(),
                ttl: 0,
                serialized: payload,
                options: None,
            })
            .unwrap();

        prop_assert_eq!(restored, Output::Bool(true));
        prop_assert_eq!(server.get(b"dst"), Some(value));
    }

    #[test]
    fn copy_never_clobbers_without_replace(
        a in proptest::collection::vec(any::<u8>(), 1..16),
        b in proptest::collection::vec(any::<u8>(), 1..16),
    ) {
        let server = FakeServer::new();
        let executor = Executor::new(&server);
        set_bytes(&executor, "a", a);
        set_bytes(&executor, "b", b.clone());

        let copied = executor
            .execute(Command::Copy {
                source: "a".into(),
                destination: "b".into(),
                replace: false,
            })
            .unwrap();

        prop_assert_eq!(copied, Output::Bool(false));
        prop_assert_eq!(server.get(b"b"), Some(b));
    }
}
