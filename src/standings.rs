//! Standings provider.
//!
//! Derives per-player win counts and matches played from the stored history and ranks
//! players by wins, highest first. Ties are broken deterministically (see [`TieBreak`]) so
//! that the same stored history always produces the same ranking, and therefore the same
//! pairings.

use std::collections::HashMap;

use tracing::{info, instrument};

use crate::error::{Result, TournamentError};
use crate::history::MatchHistory;
use crate::player::{MatchRecord, Player, PlayerId};
use crate::store::Store;

/// One row of the standings table. Derived, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandingEntry {
    /// Player id.
    pub id: PlayerId,
    /// Player name.
    pub name: String,
    /// Matches won.
    pub wins: u32,
    /// Matches played, won or lost.
    pub matches_played: u32,
}

impl StandingEntry {
    /// Create a standings row.
    pub fn new(
        id: impl Into<PlayerId>,
        name: impl Into<String>,
        wins: u32,
        matches_played: u32,
    ) -> StandingEntry {
        StandingEntry {
            id: id.into(),
            name: name.into(),
            wins,
            matches_played,
        }
    }

    /// Matches lost.
    pub fn losses(&self) -> u32 {
        self.matches_played.saturating_sub(self.wins)
    }
}

impl std::fmt::Display for StandingEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {}: {} win / {} played",
            self.id, self.name, self.wins, self.matches_played
        )
    }
}

/// How players with the same number of wins are ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TieBreak {
    /// Lower player id first.
    #[default]
    PlayerId,
    /// Higher median-Buchholz first (sum of opponents' wins, minus the best and worst
    /// opponent), then lower player id.
    Median,
}

impl std::str::FromStr for TieBreak {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("id") || s.eq_ignore_ascii_case("player_id") {
            Ok(TieBreak::PlayerId)
        } else if s.eq_ignore_ascii_case("median") {
            Ok(TieBreak::Median)
        } else {
            Err(format!("unknown tie-break '{s}' (expected 'id' or 'median')"))
        }
    }
}

/// Reads the full history from `store` and ranks every registered player.
///
/// # Errors
/// [`TournamentError::StoreUnavailable`] if the store cannot be read,
/// [`TournamentError::CorruptStanding`] if a match references an unknown player or names a
/// winner that did not take part.
#[instrument(skip(store))]
pub fn get_standings<S: Store>(store: &S, tie_break: TieBreak) -> Result<Vec<StandingEntry>> {
    let players = store.fetch_all_players()?;
    let matches = store.fetch_all_matches()?;
    derive_standings(&players, &matches, tie_break)
}

/// Ranks `players` from an in-memory snapshot of the store.
pub fn derive_standings(
    players: &[Player],
    matches: &[MatchRecord],
    tie_break: TieBreak,
) -> Result<Vec<StandingEntry>> {
    let mut index: HashMap<PlayerId, usize> = HashMap::with_capacity(players.len());
    let mut entries = Vec::with_capacity(players.len());
    for player in players {
        if index.insert(player.id, entries.len()).is_some() {
            return Err(TournamentError::corrupt(format!(
                "player {} is registered twice",
                player.id
            )));
        }
        entries.push(StandingEntry::new(player.id, player.name.clone(), 0, 0));
    }

    for m in matches {
        check_match(m, &index)?;
        entries[index[&m.id1]].matches_played += 1;
        entries[index[&m.id2]].matches_played += 1;
        entries[index[&m.winner]].wins += 1;
    }

    match tie_break {
        TieBreak::PlayerId => {
            entries.sort_by(|a, b| b.wins.cmp(&a.wins).then(a.id.cmp(&b.id)));
        }
        TieBreak::Median => {
            let history = MatchHistory::from_matches(matches);
            let wins: HashMap<PlayerId, u32> = entries.iter().map(|e| (e.id, e.wins)).collect();
            let medians: HashMap<PlayerId, u32> = entries
                .iter()
                .map(|e| (e.id, median_buchholz(e.id, &history, &wins)))
                .collect();
            entries.sort_by(|a, b| {
                b.wins
                    .cmp(&a.wins)
                    .then(medians[&b.id].cmp(&medians[&a.id]))
                    .then(a.id.cmp(&b.id))
            });
        }
    }

    info!(
        players = entries.len(),
        matches = matches.len(),
        "standings derived"
    );
    Ok(entries)
}

fn check_match(m: &MatchRecord, index: &HashMap<PlayerId, usize>) -> Result<()> {
    for id in [m.id1, m.id2] {
        if !index.contains_key(&id) {
            return Err(TournamentError::corrupt(format!(
                "match {} vs {} references unknown player {id}",
                m.id1, m.id2
            )));
        }
    }
    if m.id1 == m.id2 {
        return Err(TournamentError::corrupt(format!(
            "player {} is recorded playing against themselves",
            m.id1
        )));
    }
    if m.loser().is_none() {
        return Err(TournamentError::corrupt(format!(
            "match {} vs {} names {} as winner",
            m.id1, m.id2, m.winner
        )));
    }
    Ok(())
}

// https://en.wikipedia.org/wiki/Tie-breaking_in_Swiss-system_tournaments#Median_/_Buchholz_/_Solkoff
fn median_buchholz(id: PlayerId, history: &MatchHistory, wins: &HashMap<PlayerId, u32>) -> u32 {
    let adv_wins: Vec<u32> = history
        .opponents_of(id)
        .map(|adv| wins.get(&adv).copied().unwrap_or(0))
        .collect();

    if adv_wins.len() <= 1 {
        return 0;
    }
    let min = adv_wins.iter().min().copied().unwrap_or(0);
    let max = adv_wins.iter().max().copied().unwrap_or(0);
    adv_wins.iter().sum::<u32>() - min - max
}
