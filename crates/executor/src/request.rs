//! Command kinds understood by the native client.

use serde::{Deserialize, Serialize};

/// The command kind passed to the native entry points.
///
/// `CustomCommand` is the generic passthrough: the full command, including
/// its leading tokens, travels in the argument list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum RequestType {
    // ==================== Passthrough ====================
    CustomCommand,

    // ==================== Transactions ====================
    Multi,
    Exec,
    Discard,
    Watch,
    UnWatch,

    // ==================== Scripting ====================
    FCall,
    FCallReadOnly,

    // ==================== Serialization ====================
    Dump,
    Restore,

    // ==================== Server ====================
    ConfigGet,
    ConfigSet,
    ConfigResetStat,
    ConfigRewrite,
    DBSize,
    Wait,
    Select,
    SwapDb,
    FlushDB,
    FlushAll,
    Time,
    Role,

    // ==================== Client family ====================
    ClientInfo,
    ClientKill,
    ClientKillSimple,
    ClientList,
    ClientGetName,
    ClientId,
    ClientSetName,
    ClientPause,
    ClientUnpause,
    ClientReply,

    // ==================== Keyspace ====================
    Move,
    Copy,
    Keys,
    ObjectRefCount,
    ObjectIdleTime,
    ObjectFreq,
    ObjectEncoding,
}

impl RequestType {
    /// Stable name for logs.
    pub fn name(self) -> &'static str {
        match self {
            RequestType::CustomCommand => "CustomCommand",
            RequestType::Multi => "Multi",
            RequestType::Exec => "Exec",
            RequestType::Discard => "Discard",
            RequestType::Watch => "Watch",
            RequestType::UnWatch => "UnWatch",
            RequestType::FCall => "FCall",
            RequestType::FCallReadOnly => "FCallReadOnly",
            RequestType::Dump => "Dump",
            RequestType::Restore => "Restore",
            RequestType::ConfigGet => "ConfigGet",
            RequestType::ConfigSet => "ConfigSet",
            RequestType::ConfigResetStat => "ConfigResetStat",
            RequestType::ConfigRewrite => "ConfigRewrite",
            RequestType::DBSize => "DBSize",
            RequestType::Wait => "Wait",
            RequestType::Select => "Select",
            RequestType::SwapDb => "SwapDb",
            RequestType::FlushDB => "FlushDB",
            RequestType::FlushAll => "FlushAll",
            RequestType::Time => "Time",
            RequestType::Role => "Role",
            RequestType::ClientInfo => "ClientInfo",
            RequestType::ClientKill => "ClientKill",
            RequestType::ClientKillSimple => "ClientKillSimple",
            RequestType::ClientList => "ClientList",
            RequestType::ClientGetName => "ClientGetName",
            RequestType::ClientId => "ClientId",
            RequestType::ClientSetName => "ClientSetName",
            RequestType::ClientPause => "ClientPause",
            RequestType::ClientUnpause => "ClientUnpause",
            RequestType::ClientReply => "ClientReply",
            RequestType::Move => "Move",
            RequestType::Copy => "Copy",
            RequestType::Keys => "Keys",
            RequestType::ObjectRefCount => "ObjectRefCount",
            RequestType::ObjectIdleTime => "ObjectIdleTime",
            RequestType::ObjectFreq => "ObjectFreq",
            RequestType::ObjectEncoding => "ObjectEncoding",
        }
    }

    /// True for the generic passthrough kind.
    pub fn is_passthrough(self) -> bool {
        self == RequestType::CustomCommand
    }
}
