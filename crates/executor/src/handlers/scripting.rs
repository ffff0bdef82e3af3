//! Function call and FUNCTION family handlers.

use glide_bridge_core::{ResponseShape, Result, Value};

use crate::args::{function_call_args, prefixed_passthrough};
use crate::handlers::raw::dispatch_shaped;
use crate::{Executor, Output, RequestType};

/// Handle FCall and FCallRo.
pub fn fcall(
    ex: &Executor<'_>,
    function: String,
    numkeys: i64,
    args: Vec<Value>,
    read_only: bool,
) -> Result<Output> {
    let kind = if read_only {
        RequestType::FCallReadOnly
    } else {
        RequestType::FCall
    };
    let mut list = ex.args();
    function_call_args(&mut list, &function, numkeys, &args)?;
    dispatch_shaped(ex, kind, &list, None, ResponseShape::Plain)
}

/// Handle Function: `FUNCTION <args...>` as a passthrough.
pub fn function(ex: &Executor<'_>, args: Vec<Value>) -> Result<Output> {
    let mut list = ex.args();
    prefixed_passthrough(&mut list, "FUNCTION", &args)?;
    dispatch_shaped(
        ex,
        RequestType::CustomCommand,
        &list,
        None,
        ResponseShape::Plain,
    )
}
