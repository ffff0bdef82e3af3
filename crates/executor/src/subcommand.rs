//! Sub-command resolution for command families.
//!
//! Each family (`CLIENT`, `CONFIG`, `OBJECT`) has a static table from the
//! upper-case sub-command token to a dedicated command kind. Matching is
//! exact and case-insensitive. Tokens not in the table resolve to
//! [`Resolved::Passthrough`], and the caller sends the command as
//! `CustomCommand` with the family and sub-command tokens re-inserted in
//! front of the remaining arguments.

use crate::RequestType;

/// A family's lookup table.
#[derive(Debug)]
pub struct SubcommandTable {
    /// Family token, as sent on the passthrough path
    pub family: &'static str,
    entries: &'static [(&'static str, RequestType)],
}

/// Result of a table lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolved {
    /// Dedicated kind; the sub-command token is not sent
    Known(RequestType),
    /// Unknown token; send as `[family, token, rest...]`
    Passthrough,
}

impl SubcommandTable {
    /// Look up a sub-command token.
    pub fn resolve(&self, token: &[u8]) -> Resolved {
        self.entries
            .iter()
            .find(|(name, _)| name.as_bytes().eq_ignore_ascii_case(token))
            .map_or(Resolved::Passthrough, |(_, kind)| Resolved::Known(*kind))
    }
}

/// `CLIENT` sub-commands. `KILL` resolves to the simple form; the handler
/// upgrades it to `ClientKill` when filter arguments follow.
pub static CLIENT: SubcommandTable = SubcommandTable {
    family: "CLIENT",
    entries: &[
        ("INFO", RequestType::ClientInfo),
        ("KILL", RequestType::ClientKillSimple),
        ("LIST", RequestType::ClientList),
        ("GETNAME", RequestType::ClientGetName),
        ("ID", RequestType::ClientId),
        ("SETNAME", RequestType::ClientSetName),
        ("PAUSE", RequestType::ClientPause),
        ("UNPAUSE", RequestType::ClientUnpause),
        ("REPLY", RequestType::ClientReply),
    ],
};

/// `CONFIG` operations. There is no passthrough for this family.
pub static CONFIG: SubcommandTable = SubcommandTable {
    family: "CONFIG",
    entries: &[
        ("GET", RequestType::ConfigGet),
        ("SET", RequestType::ConfigSet),
        ("RESETSTAT", RequestType::ConfigResetStat),
        ("REWRITE", RequestType::ConfigRewrite),
    ],
};

/// `OBJECT` sub-commands.
pub static OBJECT: SubcommandTable = SubcommandTable {
    family: "OBJECT",
    entries: &[
        ("REFCOUNT", RequestType::ObjectRefCount),
        ("IDLETIME", RequestType::ObjectIdleTime),
        ("FREQ", RequestType::ObjectFreq),
        ("ENCODING", RequestType::ObjectEncoding),
    ],
};
