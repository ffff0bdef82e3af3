//! DUMP and RESTORE handlers.

use glide_bridge_core::{Error, ResponseShape, Result, Value};

use crate::args::{restore_args, MAX_RESTORE_ARGS};
use crate::fixed::{execute_core, process_string_or_absent, CoreArgs};
use crate::handlers::raw::dispatch_shaped;
use crate::{Executor, Output, RequestType};

/// Handle Dump.
pub fn dump(ex: &Executor<'_>, key: Value) -> Result<Output> {
    let args = CoreArgs::new(RequestType::Dump).key_value(&key)?;
    execute_core(ex.client(), &args, process_string_or_absent)
}

/// Handle Restore.
pub fn restore(
    ex: &Executor<'_>,
    key: Value,
    ttl: i64,
    serialized: Value,
    options: Option<Value>,
) -> Result<Output> {
    if is_empty_scalar(&key) {
        return Err(Error::invalid("RESTORE requires a non-empty key"));
    }
    if is_empty_scalar(&serialized) {
        return Err(Error::invalid("RESTORE requires a non-empty payload"));
    }
    let mut list = ex.args().bounded(MAX_RESTORE_ARGS)?;
    restore_args(&mut list, &key, ttl, &serialized, options.as_ref())?;
    dispatch_shaped(ex, RequestType::Restore, &list, None, ResponseShape::BoolOk)
}

fn is_empty_scalar(value: &Value) -> bool {
    match value {
        Value::String(s) => s.is_empty(),
        Value::Bytes(b) => b.is_empty(),
        Value::Null => true,
        _ => false,
    }
}
