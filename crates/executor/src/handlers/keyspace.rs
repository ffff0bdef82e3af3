//! Keyspace handlers: MOVE, COPY, KEYS and the OBJECT family.

use glide_bridge_core::{Error, ResponseShape, Result, Value};

use crate::fixed::{
    execute_core, process_array, process_bool, process_int_or_absent, process_string_or_absent,
    CoreArg, CoreArgs, Processor,
};
use crate::handlers::raw::dispatch_shaped;
use crate::subcommand::{Resolved, OBJECT};
use crate::{Executor, Output, RequestType};

/// Handle Move.
pub fn move_key(ex: &Executor<'_>, key: Value, db: i64) -> Result<Output> {
    let args = CoreArgs::new(RequestType::Move).key_value(&key)?.int(db)?;
    execute_core(ex.client(), &args, process_bool)
}

/// Handle Copy.
pub fn copy(ex: &Executor<'_>, source: Value, destination: Value, replace: bool) -> Result<Output> {
    let args = CoreArgs::new(RequestType::Copy)
        .key_value(&source)?
        .arg(CoreArg::from_value(&destination)?)?
        .token_if(replace, "REPLACE")?;
    execute_core(ex.client(), &args, process_bool)
}

/// Handle Keys.
pub fn keys(ex: &Executor<'_>, pattern: Value) -> Result<Output> {
    let args = CoreArgs::new(RequestType::Keys).arg(CoreArg::from_value(&pattern)?)?;
    execute_core(ex.client(), &args, process_array)
}

/// Handle Object.
pub fn object(ex: &Executor<'_>, subcommand: String, key: Value) -> Result<Output> {
    if subcommand.is_empty() {
        return Err(Error::invalid("OBJECT requires a sub-command"));
    }
    match OBJECT.resolve(subcommand.as_bytes()) {
        Resolved::Known(kind) => {
            let args = CoreArgs::new(kind).key_value(&key)?;
            let process: Processor = match kind {
                RequestType::ObjectEncoding => process_string_or_absent,
                _ => process_int_or_absent,
            };
            execute_core(ex.client(), &args, process)
        }
        Resolved::Passthrough => {
            let mut list = ex.args();
            list.reserve(3)?;
            list.push_token(OBJECT.family)?;
            list.push_borrowed(subcommand.as_bytes())?;
            list.push_value(&key)?;
            dispatch_shaped(
                ex,
                RequestType::CustomCommand,
                &list,
                None,
                ResponseShape::Plain,
            )
        }
    }
}
