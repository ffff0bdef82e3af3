//! The seam to the native client.
//!
//! Connection management, transport and cluster topology all live behind
//! [`NativeClient`]. The executor only ever calls its two entry points, and
//! does so through [`invoke`] so every dispatch is logged the same way.

use serde::{Deserialize, Serialize};

use glide_bridge_core::{CommandResult, Error, Response, Result, Value};

use crate::RequestType;

/// Opaque cluster routing directive, forwarded to the native client untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route(pub Value);

impl Route {
    /// Wrap a host routing value.
    pub fn new(value: impl Into<Value>) -> Self {
        Route(value.into())
    }

    /// The wrapped host value.
    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

/// A native client handle.
///
/// Argument count and lengths are carried by the slice: `args.len()` is the
/// count and each element's length is explicit, so arguments are binary safe.
/// Implementations are externally synchronized; the executor never calls one
/// handle from two threads at once.
pub trait NativeClient {
    /// Execute on the default node selection.
    fn execute_command(&self, kind: RequestType, args: &[&[u8]]) -> CommandResult;

    /// Execute with an explicit cluster route.
    fn execute_command_with_route(
        &self,
        kind: RequestType,
        args: &[&[u8]],
        route: &Route,
    ) -> CommandResult;
}

/// Call the right entry point and turn the error flag into `CommandFailed`.
///
/// With a route the cluster-aware entry point is used, otherwise the plain
/// one. A failed result never yields a partial value.
pub(crate) fn invoke(
    client: &dyn NativeClient,
    kind: RequestType,
    args: &[&[u8]],
    route: Option<&Route>,
) -> Result<Response> {
    tracing::debug!(
        target: "glide::executor",
        kind = kind.name(),
        argc = args.len(),
        routed = route.is_some(),
        "dispatching command"
    );
    let result = match route {
        Some(route) => client.execute_command_with_route(kind, args, route),
        None => client.execute_command(kind, args),
    };
    result.into_response().map_err(|reason| {
        tracing::warn!(target: "glide::executor", kind = kind.name(), error = %reason, "command failed");
        Error::CommandFailed { reason }
    })
}
