use dashmap::mapref::one::RefMut;
use inkline::{JoinOutcome, MatchResult, Snapshot};
use tracing::{debug, info};

use crate::error::EngineError;
use crate::registry::{MatchEntry, MatchId, MatchRegistry};

/// What a successful join changed, bundled with the fresh board view.
#[derive(Clone, Debug)]
pub struct JoinReport {
    pub outcome: JoinOutcome,
    pub snapshot: Snapshot,
}

/// What a successful placement changed.
#[derive(Clone, Debug)]
pub struct PlaceReport {
    /// Cells newly claimed by this move's paint pass.
    pub painted: usize,
    pub snapshot: Snapshot,
    /// Present when this move ended the match.
    pub result: Option<MatchResult>,
}

/// The synchronous boundary between the chat-command layer and the
/// match state.
///
/// One engine serves every room; per-room exclusivity is delegated to
/// the registry. Matches leave the registry the moment their final
/// result has been reported.
#[derive(Debug, Default)]
pub struct Engine {
    registry: MatchRegistry,
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a forming match with zero seated players.
    pub fn start_match(&self, room: &str) -> Result<MatchId, EngineError> {
        let id = self
            .registry
            .create(room)
            .ok_or_else(|| EngineError::AlreadyActive {
                room: room.to_string(),
            })?;
        info!(room, match_id = %id, "match created");
        Ok(id)
    }

    pub fn join_match(&self, room: &str, player: &str) -> Result<JoinReport, EngineError> {
        let mut entry = self.room_entry(room)?;
        let outcome = entry
            .game
            .join(player)
            .map_err(|err| EngineError::Join { err })?;
        if outcome.started {
            info!(room, player, "second seat taken, match started");
        } else {
            info!(room, player, "player joined");
        }
        Ok(JoinReport {
            outcome,
            snapshot: entry.game.snapshot(),
        })
    }

    pub fn place_stone(
        &self,
        room: &str,
        player: &str,
        coord_token: &str,
    ) -> Result<PlaceReport, EngineError> {
        let report = {
            let mut entry = self.room_entry(room)?;
            let outcome = entry
                .game
                .place(player, coord_token)
                .map_err(|err| EngineError::Move { err })?;
            debug!(
                room,
                player,
                coord = %outcome.coord,
                painted = outcome.painted,
                "stone placed"
            );
            PlaceReport {
                painted: outcome.painted,
                snapshot: entry.game.snapshot(),
                result: outcome.result,
            }
        };
        if report.result.is_some() {
            info!(room, "board full, match finished");
            self.registry.remove(room);
        }
        Ok(report)
    }

    pub fn forfeit(&self, room: &str, player: &str) -> Result<MatchResult, EngineError> {
        let result = {
            let mut entry = self.room_entry(room)?;
            entry
                .game
                .forfeit(player)
                .map_err(|err| EngineError::Forfeit { err })?
        };
        info!(room, player, "match ended by forfeit");
        self.registry.remove(room);
        Ok(result)
    }

    /// Unconditional removal; no error when the room has no match.
    pub fn force_stop(&self, room: &str) -> bool {
        let removed = self.registry.remove(room);
        if removed {
            info!(room, "match force-stopped");
        }
        removed
    }

    pub fn snapshot(&self, room: &str) -> Result<Snapshot, EngineError> {
        let entry = self.room_entry(room)?;
        Ok(entry.game.snapshot())
    }

    fn room_entry(&self, room: &str) -> Result<RefMut<'_, String, MatchEntry>, EngineError> {
        self.registry
            .get_mut(room)
            .ok_or_else(|| EngineError::NoSuchMatch {
                room: room.to_string(),
            })
    }
}
