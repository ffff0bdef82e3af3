//! Transaction control handlers.

use glide_bridge_core::{Result, Value};

use crate::args::watch_args;
use crate::fixed::{execute_core, process_array, process_ok, CoreArgs};
use crate::handlers::raw::dispatch;
use crate::{Executor, Output, RequestType};

/// Handle Multi.
pub fn multi(ex: &Executor<'_>) -> Result<Output> {
    execute_core(ex.client(), &CoreArgs::new(RequestType::Multi), process_ok)
}

/// Handle Exec.
pub fn exec(ex: &Executor<'_>) -> Result<Output> {
    execute_core(ex.client(), &CoreArgs::new(RequestType::Exec), process_array)
}

/// Handle Discard.
pub fn discard(ex: &Executor<'_>) -> Result<Output> {
    execute_core(ex.client(), &CoreArgs::new(RequestType::Discard), process_ok)
}

/// Handle Watch.
pub fn watch(ex: &Executor<'_>, keys: Vec<Value>) -> Result<Output> {
    let mut list = ex.args();
    watch_args(&mut list, &keys)?;
    process_ok(dispatch(ex, RequestType::Watch, &list, None)?)
}

/// Handle Unwatch.
pub fn unwatch(ex: &Executor<'_>) -> Result<Output> {
    execute_core(ex.client(), &CoreArgs::new(RequestType::UnWatch), process_ok)
}
