//! Raw path dispatch and the verbatim passthrough command.

use glide_bridge_core::{Error, Response, ResponseShape, Result, Value};

use crate::args::{build_fixed, ArgumentList};
use crate::convert::convert_response;
use crate::native::{invoke, Route};
use crate::{Executor, Output, RequestType};

/// Dispatch a built argument list. The list is freed by its owner when it
/// goes out of scope, whatever this returns.
pub(crate) fn dispatch(
    ex: &Executor<'_>,
    kind: RequestType,
    list: &ArgumentList<'_>,
    route: Option<&Route>,
) -> Result<Response> {
    invoke(ex.client(), kind, &list.as_slices(), route)
}

/// Dispatch and decode with `shape`.
pub(crate) fn dispatch_shaped(
    ex: &Executor<'_>,
    kind: RequestType,
    list: &ArgumentList<'_>,
    route: Option<&Route>,
    shape: ResponseShape,
) -> Result<Output> {
    let response = dispatch(ex, kind, list, route)?;
    convert_response(response, shape).map(Output::from)
}

/// Handle RawCommand.
pub fn raw_command(ex: &Executor<'_>, args: Vec<Value>, route: Option<Route>) -> Result<Output> {
    if args.is_empty() {
        return Err(Error::invalid("raw command requires at least one argument"));
    }
    let mut list = ex.args();
    build_fixed(&mut list, &[], &args)?;
    dispatch_shaped(
        ex,
        RequestType::CustomCommand,
        &list,
        route.as_ref(),
        ResponseShape::Plain,
    )
}
