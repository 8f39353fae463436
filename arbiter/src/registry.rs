use dashmap::mapref::entry::Entry;
use dashmap::mapref::one::RefMut;
use dashmap::DashMap;
use inkline::Match;
use rand::distributions::Alphanumeric;
use rand::Rng;

/// Opaque identifier handed out for one created match.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MatchId(String);

impl MatchId {
    fn generate() -> Self {
        let id = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(8)
            .map(char::from)
            .collect();
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for MatchId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A registry entry: one live match and its identifier.
#[derive(Clone, Debug)]
pub struct MatchEntry {
    pub id: MatchId,
    pub game: Match,
}

/// Maps a room key to its single live match.
///
/// Entries for independent rooms never contend. All mutation of one
/// match goes through the exclusive reference returned by
/// [`Self::get_mut`], so at most one operation per room is in flight.
#[derive(Debug, Default)]
pub struct MatchRegistry {
    matches: DashMap<String, MatchEntry>,
}

impl MatchRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a forming match for `room`.
    ///
    /// Returns `None` when the room already has a live match.
    pub fn create(&self, room: &str) -> Option<MatchId> {
        match self.matches.entry(room.to_string()) {
            Entry::Occupied(_) => None,
            Entry::Vacant(vacant) => {
                let id = MatchId::generate();
                vacant.insert(MatchEntry {
                    id: id.clone(),
                    game: Match::new(),
                });
                Some(id)
            }
        }
    }

    /// Exclusive access to the room's match, if any.
    pub fn get_mut(&self, room: &str) -> Option<RefMut<'_, String, MatchEntry>> {
        self.matches.get_mut(room)
    }

    /// Removes the room's match. Idempotent; returns whether an entry
    /// existed.
    pub fn remove(&self, room: &str) -> bool {
        self.matches.remove(room).is_some()
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}
