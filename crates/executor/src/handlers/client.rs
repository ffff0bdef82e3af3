//! CLIENT family handler.

use glide_bridge_core::{Error, ResponseShape, Result, Value};

use crate::args::ensure_scalars;
use crate::handlers::raw::dispatch_shaped;
use crate::native::Route;
use crate::subcommand::{Resolved, CLIENT};
use crate::{Executor, Output, RequestType};

/// Handle Client.
///
/// A string first argument names the sub-command. Known sub-commands go out
/// under their own kind without the token; `KILL` becomes `ClientKill` when
/// filter arguments follow it. Unknown tokens are sent as
/// `CustomCommand ["CLIENT", token, rest...]`. Any other scalar in first
/// position is not a sub-command name: the whole list goes out as
/// `ClientInfo`.
pub fn client(ex: &Executor<'_>, args: Vec<Value>, route: Option<Route>) -> Result<Output> {
    let (token, rest) = args
        .split_first()
        .ok_or_else(|| Error::invalid("CLIENT requires a sub-command"))?;
    ensure_scalars(&args)?;

    let name = match token {
        Value::String(s) => Some(s.as_bytes()),
        Value::Bytes(b) => Some(b.as_slice()),
        _ => None,
    };

    let mut list = ex.args();
    let (kind, trailing) = match name.map(|n| CLIENT.resolve(n)) {
        None => (RequestType::ClientInfo, args.as_slice()),
        Some(Resolved::Known(RequestType::ClientKillSimple)) if !rest.is_empty() => {
            (RequestType::ClientKill, rest)
        }
        Some(Resolved::Known(kind)) => (kind, rest),
        Some(Resolved::Passthrough) => {
            list.reserve(rest.len() + 2)?;
            list.push_token(CLIENT.family)?;
            list.push_value(token)?;
            (RequestType::CustomCommand, rest)
        }
    };
    list.push_values(trailing)?;

    dispatch_shaped(ex, kind, &list, route.as_ref(), ResponseShape::Plain)
}
