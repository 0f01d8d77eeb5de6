//! Who has already played whom.

use std::collections::{HashMap, HashSet};

use crate::player::{MatchRecord, PlayerId};

/// Prior-opponent log for the current tournament.
///
/// Pairs are stored unordered: `has_played(a, b) == has_played(b, a)`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MatchHistory {
    opponents: HashMap<PlayerId, HashSet<PlayerId>>,
}

impl MatchHistory {
    /// An empty history: nobody has played yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the history from stored matches.
    pub fn from_matches<'a>(matches: impl IntoIterator<Item = &'a MatchRecord>) -> Self {
        let mut history = Self::new();
        for m in matches {
            history.record(m.id1, m.id2);
        }
        history
    }

    /// Note that `a` and `b` have met.
    pub fn record(&mut self, a: PlayerId, b: PlayerId) {
        self.opponents.entry(a).or_default().insert(b);
        self.opponents.entry(b).or_default().insert(a);
    }

    /// True if `a` and `b` have already met.
    pub fn has_played(&self, a: PlayerId, b: PlayerId) -> bool {
        self.opponents.get(&a).is_some_and(|set| set.contains(&b))
    }

    /// Distinct opponents faced by `id`, in no particular order.
    pub fn opponents_of(&self, id: PlayerId) -> impl Iterator<Item = PlayerId> + '_ {
        self.opponents.get(&id).into_iter().flatten().copied()
    }
}
