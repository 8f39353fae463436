use std::collections::BTreeSet;

use crate::{Board, Color, Coord};

/// The four axis directions. The opposite directions are covered by the
/// anchor patterns below and need no separate checks.
const DIRECTIONS: [(i8, i8); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Finds every straight run of exactly three `color` stones through the
/// stone just placed at `last_move`, and returns the union of the 3×3
/// neighborhoods around the runs' center cells, clipped to the board.
///
/// Per direction, the new stone is tested as the first, middle and last
/// cell of a run, so one placement can contribute several centers across
/// (or even within) directions. A probe outside the board fails its
/// check; it is never counted as a match.
pub fn paint_region(board: &Board, color: Color, last_move: Coord) -> BTreeSet<Coord> {
    let mut centers = BTreeSet::new();
    for (dr, dc) in DIRECTIONS {
        // Anchor -k means the new stone is the k-th cell of the run.
        for anchor in [0i8, -1, -2] {
            let mut center = None;
            let mut matched = true;
            for k in 0..3i8 {
                let step = anchor + k;
                match last_move.offset(dr * step, dc * step) {
                    Some(c) if has_stone(board, color, c) => {
                        if k == 1 {
                            center = Some(c);
                        }
                    }
                    _ => {
                        matched = false;
                        break;
                    }
                }
            }
            if matched {
                if let Some(c) = center {
                    centers.insert(c);
                }
            }
        }
    }

    let mut cells = BTreeSet::new();
    for center in centers {
        for dr in -1..=1 {
            for dc in -1..=1 {
                if let Some(coord) = center.offset(dr, dc) {
                    cells.insert(coord);
                }
            }
        }
    }
    cells
}

fn has_stone(board: &Board, color: Color, coord: Coord) -> bool {
    board
        .get(coord)
        .map_or(false, |cell| cell.occupant == Some(color))
}
