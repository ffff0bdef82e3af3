//! Argument lists for the raw dispatch path.
//!
//! An [`ArgumentList`] holds the wire arguments of one command. Caller-owned
//! strings and bytes are borrowed; everything the list has to render
//! (integers, floats, booleans) is an owned buffer that the list records the
//! moment it is allocated and frees when the list goes out of scope, on the
//! success path and on every error path alike.
//!
//! The builder functions at the bottom of this module fix the wire forms of
//! the commands that need more than "prefix then arguments".

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use glide_bridge_core::coerce::int_to_bytes;
use glide_bridge_core::{coerce, Coerced, Error, MapKey, Result, Value, WireArgument};

/// Upper bound on RESTORE arguments: key, ttl, payload, two flags, two pairs.
pub const MAX_RESTORE_ARGS: usize = 10;

/// Ledger of builder allocations.
///
/// Clones share counters, so a test can hand a probe to the executor and
/// read it back after the call.
#[derive(Debug, Clone, Default)]
pub struct AllocationProbe {
    tracked: Arc<AtomicUsize>,
    released: Arc<AtomicUsize>,
}

impl AllocationProbe {
    /// Fresh probe with zeroed counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocations recorded so far.
    pub fn tracked(&self) -> usize {
        self.tracked.load(Ordering::SeqCst)
    }

    /// Allocations freed so far.
    pub fn released(&self) -> usize {
        self.released.load(Ordering::SeqCst)
    }

    /// Every recorded allocation has been freed.
    pub fn is_balanced(&self) -> bool {
        self.tracked() == self.released()
    }

    fn record_tracked(&self) {
        self.tracked.fetch_add(1, Ordering::SeqCst);
    }

    fn record_released(&self, n: usize) {
        self.released.fetch_add(n, Ordering::SeqCst);
    }
}

/// Ordered wire arguments of one command.
#[derive(Debug, Default)]
pub struct ArgumentList<'a> {
    args: Vec<WireArgument<'a>>,
    bound: Option<usize>,
    has_storage: bool,
    probe: Option<AllocationProbe>,
    budget: Option<usize>,
}

impl<'a> ArgumentList<'a> {
    /// Empty list with no probe and no allocation budget.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach an allocation ledger.
    pub fn with_probe(mut self, probe: Option<AllocationProbe>) -> Self {
        self.probe = probe;
        self
    }

    /// Fail with `ResourceExhausted` once `budget` allocations have been made.
    pub fn with_budget(mut self, budget: Option<usize>) -> Self {
        self.budget = budget;
        self
    }

    /// Reserve a fixed upper bound up front.
    ///
    /// For commands whose final argument count is only known after parsing
    /// their options. Pushing past the bound is an error.
    pub fn bounded(mut self, bound: usize) -> Result<Self> {
        self.bound = Some(bound);
        self.reserve(bound)?;
        Ok(self)
    }

    /// Number of arguments.
    pub fn len(&self) -> usize {
        self.args.len()
    }

    /// True when no argument has been pushed.
    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    /// Number of owned argument buffers currently held.
    pub fn owned_count(&self) -> usize {
        self.args.iter().filter(|a| a.is_owned()).count()
    }

    /// The arguments, in order.
    pub fn args(&self) -> &[WireArgument<'a>] {
        &self.args
    }

    /// Byte views for the native entry points.
    pub fn as_slices(&self) -> Vec<&[u8]> {
        self.args.iter().map(WireArgument::as_bytes).collect()
    }

    /// Reserve room for `additional` more arguments.
    pub fn reserve(&mut self, additional: usize) -> Result<()> {
        if !self.has_storage {
            self.take_allocation("argument storage")?;
            self.has_storage = true;
        }
        self.args.try_reserve(additional).map_err(|e| Error::ResourceExhausted {
            reason: format!("argument storage: {}", e),
        })
    }

    /// Push a caller-owned byte slice.
    pub fn push_borrowed(&mut self, bytes: &'a [u8]) -> Result<()> {
        self.push(WireArgument::Borrowed(bytes))
    }

    /// Push a static token such as `REPLACE`.
    pub fn push_token(&mut self, token: &'static str) -> Result<()> {
        self.push(WireArgument::Borrowed(token.as_bytes()))
    }

    /// Push an integer in decimal form.
    pub fn push_int(&mut self, i: i64) -> Result<()> {
        self.push_owned(int_to_bytes(i))
    }

    /// Push a host scalar, coerced to its wire form.
    ///
    /// Collections are rejected with `InvalidArgument`.
    pub fn push_value(&mut self, value: &'a Value) -> Result<()> {
        match coerce(value) {
            Coerced::Wire(WireArgument::Borrowed(b)) => self.push_borrowed(b),
            Coerced::Wire(WireArgument::Owned(rendered)) => self.push_owned(rendered),
            Coerced::NotScalar(type_name) => Err(Error::invalid(format!(
                "expected a scalar argument, got {}",
                type_name
            ))),
        }
    }

    /// Push every element of a slice of host scalars.
    pub fn push_values(&mut self, values: &'a [Value]) -> Result<()> {
        ensure_scalars(values)?;
        self.reserve(values.len())?;
        for value in values {
            self.push_value(value)?;
        }
        Ok(())
    }

    /// Allocation site for rendered arguments.
    ///
    /// Room is made first so that once the buffer is recorded nothing can
    /// fail before the list owns it.
    fn push_owned(&mut self, rendered: Vec<u8>) -> Result<()> {
        self.check_bound()?;
        self.ensure_room()?;
        self.take_allocation("argument buffer")?;
        self.args.push(WireArgument::Owned(rendered));
        Ok(())
    }

    fn push(&mut self, arg: WireArgument<'a>) -> Result<()> {
        self.check_bound()?;
        self.ensure_room()?;
        self.args.push(arg);
        Ok(())
    }

    fn ensure_room(&mut self) -> Result<()> {
        if self.args.len() == self.args.capacity() {
            self.reserve(1)?;
        }
        Ok(())
    }

    fn check_bound(&self) -> Result<()> {
        match self.bound {
            Some(bound) if self.args.len() >= bound => Err(Error::invalid(format!(
                "argument list exceeds its bound of {}",
                bound
            ))),
            _ => Ok(()),
        }
    }

    fn take_allocation(&mut self, what: &str) -> Result<()> {
        if let Some(remaining) = self.budget.as_mut() {
            if *remaining == 0 {
                tracing::trace!(target: "glide::args", what, "allocation budget exhausted");
                return Err(Error::ResourceExhausted {
                    reason: format!("allocation budget exhausted at {}", what),
                });
            }
            *remaining -= 1;
        }
        if let Some(probe) = &self.probe {
            probe.record_tracked();
        }
        Ok(())
    }
}

impl Drop for ArgumentList<'_> {
    fn drop(&mut self) {
        if let Some(probe) = &self.probe {
            let storage = usize::from(self.has_storage);
            probe.record_released(self.owned_count() + storage);
        }
    }
}

// =============================================================================
// Builders
// =============================================================================

/// Reject collection-typed arguments before anything is allocated.
pub(crate) fn ensure_scalars<'v>(values: impl IntoIterator<Item = &'v Value>) -> Result<()> {
    match values.into_iter().find(|v| !v.is_scalar()) {
        Some(value) => Err(Error::invalid(format!(
            "expected a scalar argument, got {}",
            value.type_name()
        ))),
        None => Ok(()),
    }
}

/// Prefix tokens first, then each trailing argument in caller order.
pub fn build_fixed<'a>(
    list: &mut ArgumentList<'a>,
    prefix: &[&'static str],
    trailing: &'a [Value],
) -> Result<()> {
    ensure_scalars(trailing)?;
    list.reserve(prefix.len() + trailing.len())?;
    for token in prefix {
        list.push_token(token)?;
    }
    list.push_values(trailing)
}

/// Interleave a mapping into the list.
///
/// Positional entries are single flag tokens; named entries become a
/// (name, value) pair. Objects contribute their properties as named
/// entries. An empty mapping is rejected.
pub fn build_from_map<'a>(list: &mut ArgumentList<'a>, pairs: &'a Value) -> Result<()> {
    match pairs {
        Value::Map(entries) => {
            if entries.is_empty() {
                return Err(Error::invalid("mapping must not be empty"));
            }
            ensure_scalars(entries.iter().map(|(_, v)| v))?;
            list.reserve(entries.len() * 2)?;
            for (key, value) in entries {
                if let MapKey::Name(name) = key {
                    list.push_borrowed(name.as_bytes())?;
                }
                list.push_value(value)?;
            }
            Ok(())
        }
        Value::Object(object) => {
            if object.properties.is_empty() {
                return Err(Error::invalid("mapping must not be empty"));
            }
            ensure_scalars(object.properties.iter().map(|(_, v)| v))?;
            list.reserve(object.properties.len() * 2)?;
            for (name, value) in &object.properties {
                list.push_borrowed(name.as_bytes())?;
                list.push_value(value)?;
            }
            Ok(())
        }
        other => Err(Error::invalid(format!(
            "expected a mapping, got {}",
            other.type_name()
        ))),
    }
}

/// `[key, ttl, serialized, (REPLACE)?, (ABSTTL)?, (IDLETIME, n)?, (FREQ, n)?]`.
///
/// `options` may be an array of flag tokens or a map mixing positional flags
/// with named options. Flags match `REPLACE` and `ABSTTL` exactly, either as
/// positional string entries or as names. `IDLETIME` and `FREQ` are emitted
/// only for integer values `>= 0`. Anything else is ignored.
pub fn restore_args<'a>(
    list: &mut ArgumentList<'a>,
    key: &'a Value,
    ttl: i64,
    serialized: &'a Value,
    options: Option<&'a Value>,
) -> Result<()> {
    ensure_scalars([key, serialized])?;
    list.push_value(key)?;
    list.push_int(ttl)?;
    list.push_value(serialized)?;

    let mut replace = false;
    let mut absttl = false;
    let mut idletime = None;
    let mut freq = None;

    let mut flag = |token: &str| match token {
        "REPLACE" => replace = true,
        "ABSTTL" => absttl = true,
        _ => {}
    };

    match options {
        Some(Value::Array(items)) => {
            for item in items {
                if let Some(token) = item.as_str() {
                    flag(token);
                }
            }
        }
        Some(Value::Map(entries)) => {
            for (key, value) in entries {
                match key {
                    MapKey::Index(_) => {
                        if let Some(token) = value.as_str() {
                            flag(token);
                        }
                    }
                    MapKey::Name(name) => match name.as_str() {
                        "IDLETIME" => idletime = value.as_int().filter(|n| *n >= 0).or(idletime),
                        "FREQ" => freq = value.as_int().filter(|n| *n >= 0).or(freq),
                        other => flag(other),
                    },
                }
            }
        }
        _ => {}
    }

    if replace {
        list.push_token("REPLACE")?;
    }
    if absttl {
        list.push_token("ABSTTL")?;
    }
    if let Some(n) = idletime {
        list.push_token("IDLETIME")?;
        list.push_int(n)?;
    }
    if let Some(n) = freq {
        list.push_token("FREQ")?;
        list.push_int(n)?;
    }
    Ok(())
}

/// CONFIG SET arguments: `[k1, v1, k2, v2, ...]` in mapping order.
///
/// Every key must be a name; positional keys make the mapping
/// non-associative and are rejected.
pub fn config_set_from_map<'a>(list: &mut ArgumentList<'a>, mapping: &'a Value) -> Result<()> {
    let entries = match mapping {
        Value::Map(entries) => entries,
        other => {
            return Err(Error::invalid(format!(
                "CONFIG SET expects an associative array, got {}",
                other.type_name()
            )))
        }
    };
    if entries.is_empty() {
        return Err(Error::invalid("CONFIG SET requires at least one parameter"));
    }
    if entries.iter().any(|(k, _)| k.is_index()) {
        return Err(Error::invalid("CONFIG SET requires string parameter names"));
    }
    build_from_map(list, mapping)
}

/// CONFIG GET arguments: a single parameter or an array of them.
pub fn config_get_args<'a>(list: &mut ArgumentList<'a>, parameters: &'a Value) -> Result<()> {
    match parameters {
        Value::Array(items) if items.is_empty() => {
            Err(Error::invalid("CONFIG GET requires at least one parameter"))
        }
        Value::Array(items) => list.push_values(items),
        Value::Map(entries) if entries.is_empty() => {
            Err(Error::invalid("CONFIG GET requires at least one parameter"))
        }
        Value::Map(entries) => {
            ensure_scalars(entries.iter().map(|(_, v)| v))?;
            list.reserve(entries.len())?;
            for (_, value) in entries {
                list.push_value(value)?;
            }
            Ok(())
        }
        scalar => list.push_value(scalar),
    }
}

/// `[function-name, numkeys, ...args]`.
pub fn function_call_args<'a>(
    list: &mut ArgumentList<'a>,
    function: &'a str,
    numkeys: i64,
    args: &'a [Value],
) -> Result<()> {
    if function.is_empty() {
        return Err(Error::invalid("function name must not be empty"));
    }
    ensure_scalars(args)?;
    list.reserve(2 + args.len())?;
    list.push_borrowed(function.as_bytes())?;
    list.push_int(numkeys)?;
    list.push_values(args)
}

/// Literal command token followed by the caller's arguments.
pub fn prefixed_passthrough<'a>(
    list: &mut ArgumentList<'a>,
    token: &'static str,
    args: &'a [Value],
) -> Result<()> {
    if args.is_empty() {
        return Err(Error::invalid(format!("{} requires a sub-command", token)));
    }
    build_fixed(list, &[token], args)
}

/// WATCH arguments: one or more keys.
pub fn watch_args<'a>(list: &mut ArgumentList<'a>, keys: &'a [Value]) -> Result<()> {
    if keys.is_empty() {
        return Err(Error::invalid("WATCH requires at least one key"));
    }
    list.push_values(keys)
}
