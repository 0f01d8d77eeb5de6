//! Pairing engine: turns ranked standings into the next round's pairings.
//!
//! Players are paired with their neighbour in the ranking: ranks `(0, 1)`, `(2, 3)`, and so
//! on. With an odd number of players the lowest ranked one receives a [`Bye`] instead of
//! being dropped or paired with a phantom opponent.
//!
//! When a [`MatchHistory`] is supplied, an adjacent pair that already played is repaired
//! locally by swapping with the player two ranks away (first downwards, then with the
//! previous pair). If neither swap helps the rematch is accepted and logged. The search never
//! looks further than one neighbouring pair, so a round is computed in linear time.
//!
//! [`compute_pairings`] is a pure function: identical input always gives identical output.

use std::collections::HashSet;

use tracing::{debug, info, warn};

use crate::error::{Result, TournamentError};
use crate::history::MatchHistory;
use crate::player::PlayerId;
use crate::standings::StandingEntry;

/// Two players meeting this round. `a` is the better ranked of the two.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pairing {
    /// Better ranked player.
    pub id_a: PlayerId,
    /// Name of `id_a`.
    pub name_a: String,
    /// Worse ranked player.
    pub id_b: PlayerId,
    /// Name of `id_b`.
    pub name_b: String,
}

impl Pairing {
    fn between(a: &StandingEntry, b: &StandingEntry) -> Pairing {
        Pairing {
            id_a: a.id,
            name_a: a.name.clone(),
            id_b: b.id,
            name_b: b.name.clone(),
        }
    }
}

impl std::fmt::Display for Pairing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} VS {} {}",
            self.id_a, self.name_a, self.id_b, self.name_b
        )
    }
}

/// A player sitting out the round without an opponent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bye {
    /// Player id.
    pub id: PlayerId,
    /// Player name.
    pub name: String,
}

/// Everything scheduled for one round: every input player appears exactly once, either in
/// one of the `pairings` or as the `bye`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RoundPairings {
    /// Pairings, best ranked first.
    pub pairings: Vec<Pairing>,
    /// Set only when the player count is odd.
    pub bye: Option<Bye>,
}

impl RoundPairings {
    /// Number of players scheduled this round.
    pub fn len(&self) -> usize {
        self.pairings.len() * 2 + usize::from(self.bye.is_some())
    }

    /// True if nobody is scheduled.
    pub fn is_empty(&self) -> bool {
        self.pairings.is_empty() && self.bye.is_none()
    }

    /// Ids of every scheduled player, pairings first (in order), bye last.
    pub fn players(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.pairings
            .iter()
            .flat_map(|p| [p.id_a, p.id_b])
            .chain(self.bye.as_ref().map(|b| b.id))
    }
}

/// Pairs `standings` for the next round.
///
/// `standings` must already be ranked (best first, as returned by
/// [`get_standings`](crate::standings::get_standings)); the engine trusts that order.
/// `history`, when given, enables rematch avoidance. Without it only adjacency applies.
///
/// # Errors
/// [`TournamentError::InvalidStandings`] if a player id appears more than once or an entry
/// claims more wins than matches played. Empty standings are not an error: they yield an
/// empty round.
pub fn compute_pairings(
    standings: &[StandingEntry],
    history: Option<&MatchHistory>,
) -> Result<RoundPairings> {
    validate(standings)?;

    // ranks into `standings`, kept in pairing order
    let mut pool: Vec<usize> = (0..standings.len()).collect();

    let bye = if pool.len() % 2 == 1 {
        pool.pop().map(|rank| {
            let entry = &standings[rank];
            info!("{} {} receives a bye", entry.id, entry.name);
            Bye {
                id: entry.id,
                name: entry.name.clone(),
            }
        })
    } else {
        None
    };

    let played = |x: usize, y: usize| -> bool {
        history.is_some_and(|h| h.has_played(standings[x].id, standings[y].id))
    };

    let mut pairs: Vec<(usize, usize)> = Vec::with_capacity(pool.len() / 2);
    let mut i = 0;
    while i + 1 < pool.len() {
        if played(pool[i], pool[i + 1]) {
            if i + 2 < pool.len() && !played(pool[i], pool[i + 2]) {
                debug!(
                    "rematch {} VS {} avoided by pulling up {}",
                    standings[pool[i]].id,
                    standings[pool[i + 1]].id,
                    standings[pool[i + 2]].id
                );
                pool.swap(i + 1, i + 2);
            } else if i >= 2
                && !played(pool[i - 1], pool[i])
                && !played(pool[i - 2], pool[i + 1])
            {
                debug!(
                    "rematch {} VS {} avoided by swapping with the previous pair",
                    standings[pool[i]].id,
                    standings[pool[i + 1]].id
                );
                pool.swap(i - 1, i + 1);
                pairs.pop();
                pairs.push((pool[i - 2], pool[i - 1]));
            }
        }
        pairs.push((pool[i], pool[i + 1]));
        i += 2;
    }

    // better rank first inside a pair, pairs ordered by their best rank
    for pair in &mut pairs {
        if pair.1 < pair.0 {
            *pair = (pair.1, pair.0);
        }
    }
    pairs.sort_unstable();

    // a later swap can still repair an earlier pair, so only the final round is checked
    for &(a, b) in &pairs {
        if played(a, b) {
            warn!(
                "{} and {} already played, no local swap available: accepting rematch",
                standings[a].name,
                standings[b].name
            );
        }
    }

    let pairings: Vec<Pairing> = pairs
        .into_iter()
        .map(|(a, b)| Pairing::between(&standings[a], &standings[b]))
        .collect();

    info!(
        players = standings.len(),
        pairings = pairings.len(),
        bye = bye.is_some(),
        "round paired"
    );
    Ok(RoundPairings { pairings, bye })
}

fn validate(standings: &[StandingEntry]) -> Result<()> {
    let mut seen = HashSet::with_capacity(standings.len());
    for entry in standings {
        if !seen.insert(entry.id) {
            return Err(TournamentError::invalid_standings(format!(
                "player {} appears more than once",
                entry.id
            )));
        }
        if entry.wins > entry.matches_played {
            return Err(TournamentError::invalid_standings(format!(
                "player {} has {} wins in {} matches",
                entry.id, entry.wins, entry.matches_played
            )));
        }
    }
    Ok(())
}
