//! The Executor - single dispatch point for marshalled commands.
//!
//! The Executor borrows a native client handle and routes each command to
//! its handler, which builds the wire arguments, dispatches through the
//! fixed or raw path and converts the response.

use glide_bridge_core::Result;

use crate::args::{AllocationProbe, ArgumentList};
use crate::native::NativeClient;
use crate::{Command, Output};

/// The command executor.
///
/// The Executor is **stateless** between calls: it holds a borrowed client
/// handle and, for diagnostics, an optional allocation probe and budget that
/// every argument list it creates inherits. Nothing a call allocates
/// outlives that call.
///
/// # Example
///
/// ```ignore
/// use glide_bridge_executor::{Command, Executor, Value};
///
/// let executor = Executor::new(&client);
///
/// let size = executor.execute(Command::DbSize { route: None })?;
///
/// let results = executor.execute_many(vec![
///     Command::Multi,
///     Command::Select { db: 1 },
///     Command::Exec,
/// ]);
/// ```
pub struct Executor<'c> {
    client: &'c dyn NativeClient,
    probe: Option<AllocationProbe>,
    budget: Option<usize>,
}

impl<'c> Executor<'c> {
    /// Create an executor over a native client handle.
    pub fn new(client: &'c dyn NativeClient) -> Self {
        Self {
            client,
            probe: None,
            budget: None,
        }
    }

    /// Record every argument allocation in `probe`.
    pub fn with_probe(mut self, probe: AllocationProbe) -> Self {
        self.probe = Some(probe);
        self
    }

    /// Fail argument building with `ResourceExhausted` after `budget`
    /// allocations in a single call.
    pub fn with_allocation_budget(mut self, budget: usize) -> Self {
        self.budget = Some(budget);
        self
    }

    /// The borrowed client handle.
    pub(crate) fn client(&self) -> &'c dyn NativeClient {
        self.client
    }

    /// A fresh argument list wired to this executor's probe and budget.
    pub(crate) fn args<'a>(&self) -> ArgumentList<'a> {
        ArgumentList::new()
            .with_probe(self.probe.clone())
            .with_budget(self.budget)
    }

    /// Execute a single command.
    pub fn execute(&self, cmd: Command) -> Result<Output> {
        match cmd {
            // Transaction
            Command::Multi => crate::handlers::transaction::multi(self),
            Command::Exec => crate::handlers::transaction::exec(self),
            Command::Discard => crate::handlers::transaction::discard(self),
            Command::Watch { keys } => crate::handlers::transaction::watch(self, keys),
            Command::Unwatch => crate::handlers::transaction::unwatch(self),

            // Scripting
            Command::FCall {
                function,
                numkeys,
                args,
            } => crate::handlers::scripting::fcall(self, function, numkeys, args, false),
            Command::FCallRo {
                function,
                numkeys,
                args,
            } => crate::handlers::scripting::fcall(self, function, numkeys, args, true),
            Command::Function { args } => crate::handlers::scripting::function(self, args),
            Command::Acl { args } => crate::handlers::server::acl(self, args),

            // Serialization
            Command::Dump { key } => crate::handlers::serialization::dump(self, key),
            Command::Restore {
                key,
                ttl,
                serialized,
                options,
            } => crate::handlers::serialization::restore(self, key, ttl, serialized, options),

            // Server
            Command::Config {
                operation,
                key,
                value,
            } => crate::handlers::server::config(self, operation, key, value),
            Command::DbSize { route } => crate::handlers::server::dbsize(self, route),
            Command::Wait {
                numreplicas,
                timeout,
            } => crate::handlers::server::wait(self, numreplicas, timeout),
            Command::Select { db } => crate::handlers::server::select(self, db),
            Command::SwapDb { first, second } => {
                crate::handlers::server::swapdb(self, first, second)
            }
            Command::FlushDb {
                asynchronous,
                route,
            } => crate::handlers::server::flushdb(self, asynchronous, route),
            Command::FlushAll {
                asynchronous,
                route,
            } => crate::handlers::server::flushall(self, asynchronous, route),
            Command::Time { route } => crate::handlers::server::time(self, route),
            Command::Role { route } => crate::handlers::server::role(self, route),

            // Client family
            Command::Client { args, route } => crate::handlers::client::client(self, args, route),

            // Keyspace
            Command::Move { key, db } => crate::handlers::keyspace::move_key(self, key, db),
            Command::Copy {
                source,
                destination,
                replace,
            } => crate::handlers::keyspace::copy(self, source, destination, replace),
            Command::Keys { pattern } => crate::handlers::keyspace::keys(self, pattern),
            Command::Object { subcommand, key } => {
                crate::handlers::keyspace::object(self, subcommand, key)
            }

            // Passthrough
            Command::RawCommand { args, route } => crate::handlers::raw::raw_command(self, args, route),
        }
    }

    /// Execute commands in order, one result per command.
    ///
    /// A failing command does not stop the ones after it.
    pub fn execute_many(&self, cmds: Vec<Command>) -> Vec<Result<Output>> {
        cmds.into_iter().map(|cmd| self.execute(cmd)).collect()
    }
}
