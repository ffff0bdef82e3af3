//! Common test utilities for executor tests

use std::collections::BTreeMap;

use glide_bridge::{CommandResult, NativeClient, RequestType, Response, Route};
use parking_lot::Mutex;

const DATABASES: usize = 16;
const DUMP_PREFIX: &[u8] = b"DUMP\xff";

/// A small in-memory server speaking just enough of the command set for
/// end-to-end tests.
pub struct FakeServer {
    state: Mutex<State>,
}

struct State {
    dbs: Vec<BTreeMap<Vec<u8>, Vec<u8>>>,
    selected: usize,
    config: BTreeMap<String, String>,
    in_multi: bool,
    routed_calls: usize,
}

impl FakeServer {
    pub fn new() -> Self {
        let mut config = BTreeMap::new();
        config.insert("maxmemory".to_string(), "0".to_string());
        config.insert("timeout".to_string(), "0".to_string());
        Self {
            state: Mutex::new(State {
                dbs: vec![BTreeMap::new(); DATABASES],
                selected: 0,
                config,
                in_multi: false,
                routed_calls: 0,
            }),
        }
    }

    /// Number of calls that arrived through the routed entry point.
    pub fn routed_calls(&self) -> usize {
        self.state.lock().routed_calls
    }

    /// Raw value of `key` in the selected database.
    pub fn get(&self, key: &[u8]) -> Option<Vec<u8>> {
        let state = self.state.lock();
        state.dbs[state.selected].get(key).cloned()
    }

    fn handle(&self, kind: RequestType, args: &[&[u8]]) -> CommandResult {
        let mut state = self.state.lock();
        match state.apply(kind, args) {
            Response::Error(message) => CommandResult::failed(message),
            reply => CommandResult::ok(reply),
        }
    }
}

impl State {
    fn db(&mut self) -> &mut BTreeMap<Vec<u8>, Vec<u8>> {
        &mut self.dbs[self.selected]
    }

    fn apply(&mut self, kind: RequestType, args: &[&[u8]]) -> Response {
        match kind {
            RequestType::Multi => {
                self.in_multi = true;
                Response::Ok
            }
            RequestType::Exec | RequestType::Discard if !self.in_multi => {
                Response::Error(format!("ERR {} without MULTI", kind.name().to_uppercase()))
            }
            RequestType::Exec => {
                self.in_multi = false;
                Response::Array(Vec::new())
            }
            RequestType::Discard => {
                self.in_multi = false;
                Response::Ok
            }
            RequestType::Select => match parse_int(args[0]) {
                Some(db) if (0..DATABASES as i64).contains(&db) => {
                    self.selected = db as usize;
                    Response::Ok
                }
                _ => Response::Error("ERR DB index is out of range".into()),
            },
            RequestType::DBSize => Response::Int(self.db().len() as i64),
            RequestType::FlushDB => {
                self.db().clear();
                Response::Ok
            }
            RequestType::Dump => match self.db().get(args[0]) {
                Some(value) => Response::String([DUMP_PREFIX, value].concat()),
                None => Response::Null,
            },
            RequestType::Restore => self.restore(args),
            RequestType::Move => {
                let target = parse_int(args[1]).unwrap_or(-1);
                if !(0..DATABASES as i64).contains(&target) {
                    return Response::Error("ERR DB index is out of range".into());
                }
                let target = target as usize;
                if self.dbs[target].contains_key(args[0]) {
                    return Response::Int(0);
                }
                match self.db().remove(args[0]) {
                    Some(value) => {
                        self.dbs[target].insert(args[0].to_vec(), value);
                        Response::Int(1)
                    }
                    None => Response::Int(0),
                }
            }
            RequestType::Copy => {
                let replace = args.get(2).map_or(false, |a| a.eq_ignore_ascii_case(b"REPLACE"));
                let db = self.db();
                match db.get(args[0]).cloned() {
                    Some(_) if db.contains_key(args[1]) && !replace => Response::Bool(false),
                    Some(value) => {
                        db.insert(args[1].to_vec(), value);
                        Response::Bool(true)
                    }
                    None => Response::Bool(false),
                }
            }
            RequestType::Keys => {
                let prefix = args[0].strip_suffix(b"*").unwrap_or(args[0]);
                Response::Array(
                    self.db()
                        .keys()
                        .filter(|k| k.starts_with(prefix))
                        .map(|k| Response::String(k.clone()))
                        .collect(),
                )
            }
            RequestType::ObjectRefCount | RequestType::ObjectFreq => {
                match self.db().contains_key(args[0]) {
                    true => Response::Int(1),
                    false => Response::Null,
                }
            }
            RequestType::ObjectEncoding => match self.db().get(args[0]) {
                Some(_) => Response::string("embstr"),
                None => Response::Null,
            },
            RequestType::ConfigGet => Response::Array(
                args.iter()
                    .filter_map(|name| {
                        let name = String::from_utf8_lossy(name).into_owned();
                        self.config.get(&name).map(|v| (name, v.clone()))
                    })
                    .flat_map(|(k, v)| [Response::string(k), Response::string(v)])
                    .collect(),
            ),
            RequestType::ConfigSet => {
                for pair in args.chunks(2) {
                    let name = String::from_utf8_lossy(pair[0]).into_owned();
                    if !self.config.contains_key(&name) {
                        return Response::Error(format!("ERR Unknown option '{}'", name));
                    }
                    self.config
                        .insert(name, String::from_utf8_lossy(pair[1]).into_owned());
                }
                Response::Ok
            }
            RequestType::CustomCommand => self.custom(args),
            _ => Response::Ok,
        }
    }

    fn restore(&mut self, args: &[&[u8]]) -> Response {
        let replace = args[3..].iter().any(|a| *a == b"REPLACE");
        let Some(value) = args[2].strip_prefix(DUMP_PREFIX) else {
            return Response::Error("ERR DUMP payload version or checksum are wrong".into());
        };
        let value = value.to_vec();
        let db = self.db();
        if db.contains_key(args[0]) && !replace {
            return Response::Error("BUSYKEY Target key name already exists.".into());
        }
        db.insert(args[0].to_vec(), value);
        Response::Ok
    }

    fn custom(&mut self, args: &[&[u8]]) -> Response {
        let name = args[0].to_ascii_uppercase();
        match (name.as_slice(), &args[1..]) {
            (b"PING", []) => Response::string("PONG"),
            (b"SET", [key, value]) => {
                self.db().insert(key.to_vec(), value.to_vec());
                Response::Ok
            }
            (b"GET", [key]) => self
                .db()
                .get(*key)
                .map_or(Response::Null, |v| Response::String(v.clone())),
            _ => Response::Error(format!(
                "ERR unknown command '{}'",
                String::from_utf8_lossy(args[0])
            )),
        }
    }
}

fn parse_int(bytes: &[u8]) -> Option<i64> {
    std::str::from_utf8(bytes).ok()?.parse().ok()
}

impl NativeClient for FakeServer {
    fn execute_command(&self, kind: RequestType, args: &[&[u8]]) -> CommandResult {
        self.handle(kind, args)
    }

    fn execute_command_with_route(
        &self,
        kind: RequestType,
        args: &[&[u8]],
        _route: &Route,
    ) -> CommandResult {
        self.state.lock().routed_calls += 1;
        self.handle(kind, args)
    }
}
