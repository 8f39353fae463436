use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::errors::IllegalPlacement;
use crate::{Coord, BOARD_SIZE, NUM_CELLS};

/// The stone color of one of the two seats in a match.
///
/// The first player to join holds the black stones, the second the white.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Black,
    White,
}

impl Color {
    pub fn opponent(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

/// One square of the board.
///
/// Occupancy and paint are independent: a painted cell may still be empty,
/// and a stone may sit on territory painted by either side.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    pub occupant: Option<Color>,
    pub paint: Option<Color>,
}

/// The fixed 10×10 playing grid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE as usize]; BOARD_SIZE as usize],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cell at `coord`, or `None` if the coordinate is outside
    /// the board.
    pub fn get(&self, coord: Coord) -> Option<Cell> {
        if coord.in_bounds() {
            Some(self.cells[coord.row as usize][coord.col as usize])
        } else {
            None
        }
    }

    fn cell_mut(&mut self, coord: Coord) -> Option<&mut Cell> {
        if coord.in_bounds() {
            Some(&mut self.cells[coord.row as usize][coord.col as usize])
        } else {
            None
        }
    }

    /// Iterates over all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cols)| {
            cols.iter()
                .enumerate()
                .map(move |(col, &cell)| (Coord::new(row as u8, col as u8), cell))
        })
    }

    /// Puts a stone on an empty cell.
    ///
    /// An occupant is set at most once and never cleared again.
    pub fn place(&mut self, color: Color, coord: Coord) -> Result<(), IllegalPlacement> {
        let cell = self.cell_mut(coord).ok_or(IllegalPlacement::OutOfBounds)?;
        if cell.occupant.is_some() {
            return Err(IllegalPlacement::CellOccupied { coord });
        }
        cell.occupant = Some(color);
        Ok(())
    }

    /// Claims the given cells as `color`'s territory.
    ///
    /// First painter wins: cells already painted, by either side, are left
    /// untouched. Returns the number of newly claimed cells.
    pub fn paint(&mut self, color: Color, cells: &BTreeSet<Coord>) -> usize {
        let mut claimed = 0;
        for &coord in cells {
            if let Some(cell) = self.cell_mut(coord) {
                if cell.paint.is_none() {
                    cell.paint = Some(color);
                    claimed += 1;
                }
            }
        }
        claimed
    }

    /// The number of cells painted by `color`.
    pub fn score(&self, color: Color) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| cell.paint == Some(color))
            .count()
    }

    /// The number of cells with a stone on them.
    pub fn occupied_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| cell.occupant.is_some())
            .count()
    }

    pub fn is_full(&self) -> bool {
        self.occupied_count() == NUM_CELLS
    }
}
