use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::alignment::paint_region;
use crate::{Board, CellReport, Color, Coord, ForfeitError, IllegalMove, JoinError, Snapshot};

/// Seat colors by join order: the first player to join plays black.
const SEAT_COLORS: [Color; 2] = [Color::Black, Color::White];

/// Lifecycle phase of a match.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Waiting for players; zero or one seat taken.
    Forming,
    /// Two seated players, alternating play.
    Active,
    /// Terminal. No transition leaves this phase.
    Finished,
}

/// What a successful join changed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct JoinOutcome {
    /// The seat color assigned to the joining player.
    pub color: Color,
    /// True when this join filled the second seat and play began.
    pub started: bool,
}

/// What a successful placement changed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlaceOutcome {
    pub coord: Coord,
    /// Cells newly claimed by the paint pass, for caller notification.
    pub painted: usize,
    /// Present when this move ended the match.
    pub result: Option<MatchResult>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Verdict {
    WonByPlayer { player_idx: usize },
    Tie,
}

/// Why the match ended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EndReason {
    BoardFull,
    Forfeit { player: String },
}

/// The final report handed to the caller when a match finishes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Painted-cell counts, indexed like the player list.
    pub scores: [usize; 2],
    pub verdict: Verdict,
    pub reason: EndReason,
}

/// A single two-player match.
///
/// Player identifiers are opaque strings supplied by the caller; seats
/// (and thereby stone colors) are assigned in join order and never
/// change for the lifetime of the match.
#[derive(Clone, Debug, Default)]
pub struct Match {
    board: Board,
    players: Vec<String>,
    current_player_idx: usize,
    phase: Phase,
    turn_count: u32,
    result: Option<MatchResult>,
}

impl Default for Phase {
    fn default() -> Self {
        Phase::Forming
    }
}

impl Match {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn players(&self) -> &[String] {
        &self.players
    }

    pub fn turn_count(&self) -> u32 {
        self.turn_count
    }

    /// The player whose turn it is, while the match is active.
    pub fn current_player(&self) -> Option<&str> {
        if self.phase == Phase::Active {
            self.players
                .get(self.current_player_idx)
                .map(String::as_str)
        } else {
            None
        }
    }

    pub fn result(&self) -> Option<&MatchResult> {
        self.result.as_ref()
    }

    fn player_idx(&self, player: &str) -> Option<usize> {
        self.players.iter().position(|p| p == player)
    }

    /// Seats a player. The second join starts the match, with the first
    /// seat (black) to move.
    pub fn join(&mut self, player: &str) -> Result<JoinOutcome, JoinError> {
        if self.player_idx(player).is_some() {
            return Err(JoinError::AlreadyJoined);
        }
        if self.players.len() >= 2 {
            return Err(JoinError::MatchFull);
        }
        if self.phase != Phase::Forming {
            return Err(JoinError::AlreadyStarted);
        }
        let color = SEAT_COLORS[self.players.len()];
        self.players.push(player.to_string());
        let started = self.players.len() == 2;
        if started {
            self.phase = Phase::Active;
            self.current_player_idx = 0;
            self.turn_count = 1;
        }
        Ok(JoinOutcome { color, started })
    }

    /// Places a stone for `player` at the cell named by `coord_token`,
    /// then paints the territory of any three-in-a-row this completes.
    ///
    /// A full board finishes the match without passing the turn;
    /// otherwise the turn swaps, and the turn count goes up each time
    /// play returns to the first seat.
    pub fn place(&mut self, player: &str, coord_token: &str) -> Result<PlaceOutcome, IllegalMove> {
        if self.phase != Phase::Active {
            return Err(IllegalMove::NotActive);
        }
        let player_idx = self.player_idx(player).ok_or(IllegalMove::NotAPlayer)?;
        if player_idx != self.current_player_idx {
            return Err(IllegalMove::WrongTurn);
        }
        let coord: Coord = coord_token.parse().map_err(|err| IllegalMove::BadCoordinate {
            token: coord_token.to_string(),
            err,
        })?;
        let color = SEAT_COLORS[player_idx];
        self.board
            .place(color, coord)
            .map_err(|err| IllegalMove::Placement { coord, err })?;

        let region = paint_region(&self.board, color, coord);
        let painted = self.board.paint(color, &region);

        if self.board.is_full() {
            let result = self.finish(EndReason::BoardFull);
            return Ok(PlaceOutcome {
                coord,
                painted,
                result: Some(result),
            });
        }

        self.current_player_idx = 1 - self.current_player_idx;
        if self.current_player_idx == 0 {
            self.turn_count += 1;
        }
        Ok(PlaceOutcome {
            coord,
            painted,
            result: None,
        })
    }

    /// Concedes the match on behalf of `player`. The scores still decide
    /// the verdict; the reason names the conceding player.
    pub fn forfeit(&mut self, player: &str) -> Result<MatchResult, ForfeitError> {
        if self.player_idx(player).is_none() {
            return Err(ForfeitError::NotAPlayer);
        }
        Ok(self.finish(EndReason::Forfeit {
            player: player.to_string(),
        }))
    }

    fn finish(&mut self, reason: EndReason) -> MatchResult {
        let scores = [
            self.board.score(Color::Black),
            self.board.score(Color::White),
        ];
        let verdict = match scores[0].cmp(&scores[1]) {
            Ordering::Greater => Verdict::WonByPlayer { player_idx: 0 },
            Ordering::Less => Verdict::WonByPlayer { player_idx: 1 },
            Ordering::Equal => Verdict::Tie,
        };
        self.phase = Phase::Finished;
        let result = MatchResult {
            scores,
            verdict,
            reason,
        };
        self.result = Some(result.clone());
        result
    }

    /// A read-only view for the external renderer/notifier.
    pub fn snapshot(&self) -> Snapshot {
        let cells = self
            .board
            .cells()
            .filter(|(_, cell)| cell.occupant.is_some() || cell.paint.is_some())
            .map(|(coord, cell)| CellReport {
                coord,
                occupant: cell.occupant,
                paint: cell.paint,
            })
            .collect();
        Snapshot {
            players: self.players.clone(),
            current_player_idx: self.current_player_idx,
            turn_count: self.turn_count,
            phase: self.phase,
            cells,
            scores: [
                self.board.score(Color::Black),
                self.board.score(Color::White),
            ],
            result: self.result.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CoordFromStrErr, IllegalPlacement, BOARD_SIZE};

    fn active_match() -> Match {
        let mut m = Match::new();
        m.join("alice").unwrap();
        m.join("bob").unwrap();
        m
    }

    #[test]
    fn second_join_starts_the_match() {
        let mut m = Match::new();
        assert_eq!(m.phase(), Phase::Forming);
        let first = m.join("alice").unwrap();
        assert_eq!(first.color, Color::Black);
        assert!(!first.started);
        assert_eq!(m.phase(), Phase::Forming);

        let second = m.join("bob").unwrap();
        assert_eq!(second.color, Color::White);
        assert!(second.started);
        assert_eq!(m.phase(), Phase::Active);
        assert_eq!(m.turn_count(), 1);
        assert_eq!(m.current_player(), Some("alice"));
    }

    #[test]
    fn join_error_precedence() {
        let mut m = Match::new();
        m.join("alice").unwrap();
        assert_eq!(m.join("alice"), Err(JoinError::AlreadyJoined));
        m.join("bob").unwrap();
        assert_eq!(m.join("alice"), Err(JoinError::AlreadyJoined));
        assert_eq!(m.join("carol"), Err(JoinError::MatchFull));
    }

    #[test]
    fn placing_before_the_match_starts_is_rejected() {
        let mut m = Match::new();
        m.join("alice").unwrap();
        assert_eq!(m.place("alice", "A1"), Err(IllegalMove::NotActive));
    }

    #[test]
    fn turns_alternate_strictly() {
        let mut m = active_match();
        m.place("alice", "A1").unwrap();
        assert_eq!(m.current_player(), Some("bob"));
        assert_eq!(m.place("alice", "B1"), Err(IllegalMove::WrongTurn));
        m.place("bob", "J10").unwrap();
        assert_eq!(m.current_player(), Some("alice"));
    }

    #[test]
    fn turn_count_increments_once_per_full_round() {
        let mut m = active_match();
        assert_eq!(m.turn_count(), 1);
        m.place("alice", "A1").unwrap();
        assert_eq!(m.turn_count(), 1);
        m.place("bob", "J10").unwrap();
        assert_eq!(m.turn_count(), 2);
    }

    #[test]
    fn completing_a_run_paints_the_clipped_block() {
        let mut m = active_match();
        m.place("alice", "A1").unwrap();
        m.place("bob", "E5").unwrap();
        m.place("alice", "B1").unwrap();
        m.place("bob", "F5").unwrap();
        let outcome = m.place("alice", "C1").unwrap();
        // Run at row 0, cols 0-2; center B1; the block is clipped to 6 cells.
        assert_eq!(outcome.painted, 6);
        assert!(outcome.result.is_none());
        assert_eq!(m.board().score(Color::Black), 6);
        assert_eq!(m.board().score(Color::White), 0);
        for token in ["A1", "B1", "C1", "A2", "B2", "C2"] {
            let cell = m.board().get(token.parse().unwrap()).unwrap();
            assert_eq!(cell.paint, Some(Color::Black));
        }
    }

    #[test]
    fn outsiders_cannot_place_and_the_turn_is_unchanged() {
        let mut m = active_match();
        assert_eq!(m.place("carol", "A1"), Err(IllegalMove::NotAPlayer));
        assert_eq!(m.current_player(), Some("alice"));
        assert_eq!(m.board().occupied_count(), 0);
    }

    #[test]
    fn bad_tokens_mutate_nothing() {
        let mut m = active_match();
        for token in ["K1", "A11"] {
            let err = m.place("alice", token).unwrap_err();
            assert!(matches!(err, IllegalMove::BadCoordinate { .. }));
        }
        assert_eq!(
            m.place("alice", "A0"),
            Err(IllegalMove::BadCoordinate {
                token: "A0".to_string(),
                err: CoordFromStrErr::OutOfRange,
            })
        );
        assert_eq!(m.board().occupied_count(), 0);
        assert_eq!(m.current_player(), Some("alice"));
        assert_eq!(m.turn_count(), 1);
    }

    #[test]
    fn occupied_cells_are_rejected_without_mutation() {
        let mut m = active_match();
        m.place("alice", "D4").unwrap();
        let err = m.place("bob", "D4").unwrap_err();
        assert_eq!(
            err,
            IllegalMove::Placement {
                coord: "D4".parse().unwrap(),
                err: IllegalPlacement::CellOccupied {
                    coord: "D4".parse().unwrap()
                },
            }
        );
        assert_eq!(m.board().occupied_count(), 1);
        assert_eq!(m.current_player(), Some("bob"));
    }

    #[test]
    fn forfeit_names_the_conceding_player() {
        let mut m = active_match();
        m.place("alice", "A1").unwrap();
        m.place("bob", "E5").unwrap();
        m.place("alice", "B1").unwrap();
        m.place("bob", "F5").unwrap();
        m.place("alice", "C1").unwrap();

        let result = m.forfeit("bob").unwrap();
        assert_eq!(m.phase(), Phase::Finished);
        assert_eq!(result.scores, [6, 0]);
        assert_eq!(result.verdict, Verdict::WonByPlayer { player_idx: 0 });
        assert_eq!(
            result.reason,
            EndReason::Forfeit {
                player: "bob".to_string()
            }
        );
    }

    #[test]
    fn forfeit_by_an_outsider_is_rejected() {
        let mut m = active_match();
        assert_eq!(m.forfeit("carol"), Err(ForfeitError::NotAPlayer));
        assert_eq!(m.phase(), Phase::Active);
    }

    #[test]
    fn finished_matches_accept_no_moves() {
        let mut m = active_match();
        m.forfeit("alice").unwrap();
        assert_eq!(m.place("bob", "A1"), Err(IllegalMove::NotActive));
    }

    #[test]
    fn filling_the_board_finishes_without_passing_the_turn() {
        let mut m = active_match();
        let mut last_outcome = None;
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let player = m.current_player().unwrap().to_string();
                let token = Coord::new(row, col).to_string();
                last_outcome = Some(m.place(&player, &token).unwrap());
            }
        }
        let result = last_outcome.unwrap().result.expect("board is full");
        assert_eq!(m.phase(), Phase::Finished);
        assert_eq!(result.reason, EndReason::BoardFull);
        assert_eq!(result.scores[0], m.board().score(Color::Black));
        assert_eq!(result.scores[1], m.board().score(Color::White));
        match result.verdict {
            Verdict::WonByPlayer { player_idx: 0 } => {
                assert!(result.scores[0] > result.scores[1])
            }
            Verdict::WonByPlayer { player_idx: 1 } => {
                assert!(result.scores[1] > result.scores[0])
            }
            Verdict::WonByPlayer { .. } => panic!("impossible seat index"),
            Verdict::Tie => assert_eq!(result.scores[0], result.scores[1]),
        }
        // The final stone is white's 50th move; the count only advances
        // when play returns to black, so it stays at 50.
        assert_eq!(m.turn_count(), 50);
        assert_eq!(m.place("alice", "A1"), Err(IllegalMove::NotActive));
    }

    #[test]
    fn snapshot_reports_only_marked_cells() {
        let mut m = active_match();
        m.place("alice", "A1").unwrap();
        m.place("bob", "E5").unwrap();
        let snapshot = m.snapshot();
        assert_eq!(snapshot.players, vec!["alice", "bob"]);
        assert_eq!(snapshot.phase, Phase::Active);
        assert_eq!(snapshot.current_player_idx, 0);
        assert_eq!(snapshot.cells.len(), 2);
        assert_eq!(snapshot.scores, [0, 0]);
        assert!(snapshot.result.is_none());
        let first = &snapshot.cells[0];
        assert_eq!(first.coord, "A1".parse().unwrap());
        assert_eq!(first.occupant, Some(Color::Black));
        assert_eq!(first.paint, None);
    }
}
