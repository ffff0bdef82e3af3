//! Server introspection and administration handlers.

use glide_bridge_core::{Error, ResponseShape, Result, Value};

use crate::args::{config_get_args, config_set_from_map, prefixed_passthrough};
use crate::fixed::{execute_core, process_array, process_int, process_ok, CoreArgs};
use crate::handlers::raw::dispatch_shaped;
use crate::native::Route;
use crate::subcommand::{Resolved, CONFIG};
use crate::{Executor, Output, RequestType};

/// Handle Config.
pub fn config(
    ex: &Executor<'_>,
    operation: String,
    key: Option<Value>,
    value: Option<Value>,
) -> Result<Output> {
    let kind = match CONFIG.resolve(operation.as_bytes()) {
        Resolved::Known(kind) => kind,
        Resolved::Passthrough => {
            return Err(Error::invalid(format!(
                "unknown CONFIG operation '{}'",
                operation
            )))
        }
    };

    let mut list = ex.args();
    match kind {
        RequestType::ConfigGet => {
            let parameters = key
                .as_ref()
                .ok_or_else(|| Error::invalid("CONFIG GET requires a parameter"))?;
            config_get_args(&mut list, parameters)?;
            dispatch_shaped(ex, kind, &list, None, ResponseShape::AssociativeMap)
        }
        RequestType::ConfigSet => {
            match (key.as_ref(), value.as_ref()) {
                (Some(mapping @ Value::Map(_)), _) => config_set_from_map(&mut list, mapping)?,
                (Some(Value::Array(_)), _) => {
                    return Err(Error::invalid("CONFIG SET requires an associative array"))
                }
                (Some(name), Some(setting)) => {
                    list.push_value(name)?;
                    list.push_value(setting)?;
                }
                _ => return Err(Error::invalid("CONFIG SET requires a parameter and a value")),
            }
            dispatch_shaped(ex, kind, &list, None, ResponseShape::BoolOk)
        }
        _ => dispatch_shaped(ex, kind, &list, None, ResponseShape::BoolOk),
    }
}

/// Handle Acl: `ACL <args...>` as a passthrough.
pub fn acl(ex: &Executor<'_>, args: Vec<Value>) -> Result<Output> {
    let mut list = ex.args();
    prefixed_passthrough(&mut list, "ACL", &args)?;
    dispatch_shaped(
        ex,
        RequestType::CustomCommand,
        &list,
        None,
        ResponseShape::Plain,
    )
}

/// Handle DbSize.
pub fn dbsize(ex: &Executor<'_>, route: Option<Route>) -> Result<Output> {
    let args = CoreArgs::new(RequestType::DBSize).route(route.as_ref());
    execute_core(ex.client(), &args, process_int)
}

/// Handle Wait.
pub fn wait(ex: &Executor<'_>, numreplicas: i64, timeout: i64) -> Result<Output> {
    if numreplicas < 0 {
        return Err(Error::invalid("WAIT replica count must not be negative"));
    }
    let args = CoreArgs::new(RequestType::Wait).int(numreplicas)?.int(timeout)?;
    execute_core(ex.client(), &args, process_int)
}

/// Handle Select.
pub fn select(ex: &Executor<'_>, db: i64) -> Result<Output> {
    let args = CoreArgs::new(RequestType::Select).int(db)?;
    execute_core(ex.client(), &args, process_ok)
}

/// Handle SwapDb.
pub fn swapdb(ex: &Executor<'_>, first: i64, second: i64) -> Result<Output> {
    let args = CoreArgs::new(RequestType::SwapDb).int(first)?.int(second)?;
    execute_core(ex.client(), &args, process_ok)
}

/// Handle FlushDb.
pub fn flushdb(ex: &Executor<'_>, asynchronous: bool, route: Option<Route>) -> Result<Output> {
    flush(ex, RequestType::FlushDB, asynchronous, route)
}

/// Handle FlushAll.
pub fn flushall(ex: &Executor<'_>, asynchronous: bool, route: Option<Route>) -> Result<Output> {
    flush(ex, RequestType::FlushAll, asynchronous, route)
}

fn flush(
    ex: &Executor<'_>,
    kind: RequestType,
    asynchronous: bool,
    route: Option<Route>,
) -> Result<Output> {
    let args = CoreArgs::new(kind)
        .token_if(asynchronous, "ASYNC")?
        .route(route.as_ref());
    execute_core(ex.client(), &args, process_ok)
}

/// Handle Time.
pub fn time(ex: &Executor<'_>, route: Option<Route>) -> Result<Output> {
    let args = CoreArgs::new(RequestType::Time).route(route.as_ref());
    execute_core(ex.client(), &args, process_array)
}

/// Handle Role.
pub fn role(ex: &Executor<'_>, route: Option<Route>) -> Result<Output> {
    let args = CoreArgs::new(RequestType::Role).route(route.as_ref());
    execute_core(ex.client(), &args, process_array)
}
