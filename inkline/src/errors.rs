use crate::{Coord, CoordFromStrErr};

/// The error type for [`Board::place()`](crate::Board::place), i.e. for
/// putting down a single stone.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum IllegalPlacement {
    OutOfBounds,
    CellOccupied { coord: Coord },
}

impl std::error::Error for IllegalPlacement {}

impl std::fmt::Display for IllegalPlacement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalPlacement::OutOfBounds => {
                write!(f, "The stone was placed outside the bounds of the board")
            }
            IllegalPlacement::CellOccupied { coord } => {
                write!(f, "There is already a stone on {}", coord)
            }
        }
    }
}

/// The error type for joining a match.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum JoinError {
    AlreadyJoined,
    MatchFull,
    AlreadyStarted,
}

impl std::error::Error for JoinError {}

impl std::fmt::Display for JoinError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JoinError::AlreadyJoined => write!(f, "You already have a seat in this match"),
            JoinError::MatchFull => write!(f, "Both seats of this match are taken"),
            JoinError::AlreadyStarted => write!(f, "The match has already started"),
        }
    }
}

/// The error type for one placement attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IllegalMove {
    NotActive,
    NotAPlayer,
    WrongTurn,
    BadCoordinate {
        token: String,
        err: CoordFromStrErr,
    },
    Placement {
        coord: Coord,
        err: IllegalPlacement,
    },
}

impl std::error::Error for IllegalMove {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IllegalMove::BadCoordinate { err, .. } => Some(err),
            IllegalMove::Placement { err, .. } => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalMove::NotActive => write!(f, "The match is not accepting moves"),
            IllegalMove::NotAPlayer => write!(f, "Only seated players may place stones"),
            IllegalMove::WrongTurn => write!(f, "It is the other player's turn"),
            IllegalMove::BadCoordinate { token, err: _ } => {
                write!(f, "Could not read '{}' as a coordinate", token)
            }
            IllegalMove::Placement { coord, err: _ } => {
                write!(f, "The stone cannot be placed on {}", coord)
            }
        }
    }
}

/// The error type for conceding a match.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ForfeitError {
    NotAPlayer,
}

impl std::error::Error for ForfeitError {}

impl std::fmt::Display for ForfeitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ForfeitError::NotAPlayer => write!(f, "Only seated players may concede the match"),
        }
    }
}
