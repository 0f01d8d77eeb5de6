//! Stored records: registered players and reported matches.

use std::fmt;

/// Unique player identifier, assigned by the store on registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlayerId(pub u32);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u32> for PlayerId {
    fn from(value: u32) -> Self {
        PlayerId(value)
    }
}

/// A registered player. Names need not be unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// Store-assigned id.
    pub id: PlayerId,
    /// Full name as registered.
    pub name: String,
}

impl Player {
    /// Create a player record.
    pub fn new(id: impl Into<PlayerId>, name: impl Into<String>) -> Player {
        Player {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// One played match. Participants are stored positionally, `winner` must be one of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchRecord {
    /// First participant.
    pub id1: PlayerId,
    /// Second participant.
    pub id2: PlayerId,
    /// Either `id1` or `id2`.
    pub winner: PlayerId,
}

impl MatchRecord {
    /// Create a match record. Not validated.
    pub fn new(
        id1: impl Into<PlayerId>,
        id2: impl Into<PlayerId>,
        winner: impl Into<PlayerId>,
    ) -> MatchRecord {
        MatchRecord {
            id1: id1.into(),
            id2: id2.into(),
            winner: winner.into(),
        }
    }

    /// The participant that did not win, or `None` if `winner` is not a participant.
    pub fn loser(&self) -> Option<PlayerId> {
        if self.winner == self.id1 {
            Some(self.id2)
        } else if self.winner == self.id2 {
            Some(self.id1)
        } else {
            None
        }
    }
}
