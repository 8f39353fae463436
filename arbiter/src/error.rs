use inkline::{ForfeitError, IllegalMove, JoinError};

/// The error type for one engine operation.
///
/// Every variant is a recoverable, caller-visible condition; the chat
/// layer turns them into messages and decides whether to prompt again.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EngineError {
    /// The room has no live match.
    NoSuchMatch { room: String },
    /// The room already has a match that has not finished.
    AlreadyActive { room: String },
    Join { err: JoinError },
    Move { err: IllegalMove },
    Forfeit { err: ForfeitError },
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EngineError::Join { err } => Some(err),
            EngineError::Move { err } => Some(err),
            EngineError::Forfeit { err } => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::NoSuchMatch { room } => {
                write!(f, "There is no match in room {}", room)
            }
            EngineError::AlreadyActive { room } => {
                write!(f, "Room {} already has a match", room)
            }
            EngineError::Join { err: _ } => write!(f, "Could not join the match"),
            EngineError::Move { err: _ } => write!(f, "The move was rejected"),
            EngineError::Forfeit { err: _ } => write!(f, "The concession was rejected"),
        }
    }
}
