use inkline::{Color, MatchResult, Snapshot};
use serde::{Deserialize, Serialize};

/// A command from the chat-transport layer.
///
/// The transport validates and attributes the command (who sent it, in
/// which room) and forwards it here; one request per line of JSON on
/// stdin, one [`Reply`] per line on stdout.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Request {
    StartMatch {
        room: String,
    },
    JoinMatch {
        room: String,
        player: String,
    },
    PlaceStone {
        room: String,
        player: String,
        coord: String,
    },
    Forfeit {
        room: String,
        player: String,
    },
    ForceStop {
        room: String,
    },
    Snapshot {
        room: String,
    },
}

/// The engine's answer to a [`Request`].
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Reply {
    MatchStarted {
        match_id: String,
    },
    Joined {
        color: Color,
        started: bool,
        snapshot: Snapshot,
    },
    Placed {
        painted: usize,
        snapshot: Snapshot,
        #[serde(skip_serializing_if = "Option::is_none", default)]
        result: Option<MatchResult>,
    },
    Forfeited {
        result: MatchResult,
    },
    Stopped {
        removed: bool,
    },
    Board {
        snapshot: Snapshot,
    },
    Error {
        message: String,
    },
}
