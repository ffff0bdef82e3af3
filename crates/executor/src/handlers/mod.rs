//! Command handlers organized by command family.
//!
//! | Module | Commands | Path |
//! |--------|----------|------|
//! | `transaction` | Multi, Exec, Discard, Watch, Unwatch | fixed / raw |
//! | `scripting` | FCall, FCallRo, Function | raw |
//! | `serialization` | Dump, Restore | fixed / raw |
//! | `server` | Config, Acl, DbSize, Wait, Select, SwapDb, FlushDb, FlushAll, Time, Role | fixed / raw |
//! | `client` | Client | raw |
//! | `keyspace` | Move, Copy, Keys, Object | fixed / raw |
//! | `raw` | RawCommand, shared raw dispatch | raw |

pub mod client;
pub mod keyspace;
pub mod raw;
pub mod scripting;
pub mod serialization;
pub mod server;
pub mod transaction;
