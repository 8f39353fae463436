use serde::{Deserialize, Serialize};

use crate::{Color, Coord, MatchResult, Phase};

/// One reported cell. Only cells with a stone or paint appear in a
/// [`Snapshot`]; every other cell is implied empty.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellReport {
    pub coord: Coord,
    /// `None` while no stone has been placed here.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub occupant: Option<Color>,
    /// `None` while no three-in-a-row has claimed this cell.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub paint: Option<Color>,
}

/// A read-only view of a match, sufficient for an external renderer to
/// draw the board and a summary without reaching into engine internals.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Seated players in join order; index 0 plays black.
    pub players: Vec<String>,
    pub current_player_idx: usize,
    pub turn_count: u32,
    pub phase: Phase,
    /// Non-empty cells in row-major order.
    pub cells: Vec<CellReport>,
    /// Live painted-cell counts, indexed like `players`.
    pub scores: [usize; 2],
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub result: Option<MatchResult>,
}
