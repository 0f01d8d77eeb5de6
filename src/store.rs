//! The storage capability the core reads from.
//!
//! The core never opens connections itself: a [`Store`] handle is injected into
//! [`Tournament`](crate::tournament::Tournament) and queried at most once per fetch.
//! [`MemoryStore`] is an in-process implementation carrying the collaborator operations
//! (registration, match reporting, reset) that sit outside the core.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, info};

use crate::error::{Result, TournamentError};
use crate::player::{MatchRecord, Player, PlayerId};

/// Read access to persisted players and matches.
///
/// Implementations report infrastructure failures as
/// [`TournamentError::StoreUnavailable`] and do not retry.
pub trait Store {
    /// Every reported match, in storage order.
    fn fetch_all_matches(&self) -> Result<Vec<MatchRecord>>;

    /// Every registered player, in storage order.
    fn fetch_all_players(&self) -> Result<Vec<Player>>;
}

impl<S: Store + ?Sized> Store for &S {
    fn fetch_all_matches(&self) -> Result<Vec<MatchRecord>> {
        (**self).fetch_all_matches()
    }

    fn fetch_all_players(&self) -> Result<Vec<Player>> {
        (**self).fetch_all_players()
    }
}

impl<S: Store + ?Sized> Store for Arc<S> {
    fn fetch_all_matches(&self) -> Result<Vec<MatchRecord>> {
        (**self).fetch_all_matches()
    }

    fn fetch_all_players(&self) -> Result<Vec<Player>> {
        (**self).fetch_all_players()
    }
}

#[derive(Debug, Default)]
struct Tables {
    players: Vec<Player>,
    matches: Vec<MatchRecord>,
    next_id: u32,
}

/// In-memory store. Ids are assigned sequentially starting at 1 and are never reused,
/// even after [`delete_players`](Self::delete_players).
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Tables>> {
        self.tables
            .read()
            .map_err(|_| TournamentError::store_unavailable("memory store lock poisoned"))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Tables>> {
        self.tables
            .write()
            .map_err(|_| TournamentError::store_unavailable("memory store lock poisoned"))
    }

    /// Adds a player and returns the id the store assigned to it.
    pub fn register_player(&self, name: impl Into<String>) -> Result<PlayerId> {
        let mut tables = self.write()?;
        tables.next_id = tables
            .next_id
            .checked_add(1)
            .ok_or_else(|| TournamentError::store_unavailable("player id space exhausted"))?;
        let player = Player::new(tables.next_id, name);
        let id = player.id;
        debug!(%id, name = %player.name, "player registered");
        tables.players.push(player);
        Ok(id)
    }

    /// Records the outcome of a single match, winner first.
    pub fn report_match(&self, winner: PlayerId, loser: PlayerId) -> Result<()> {
        if winner == loser {
            return Err(TournamentError::InvalidMatch {
                reason: format!("{winner} cannot play against themselves"),
            });
        }
        let mut tables = self.write()?;
        for id in [winner, loser] {
            if !tables.players.iter().any(|p| p.id == id) {
                return Err(TournamentError::UnknownPlayer(id));
            }
        }
        debug!(%winner, %loser, "match reported");
        tables.matches.push(MatchRecord::new(winner, loser, winner));
        Ok(())
    }

    /// Number of registered players.
    pub fn count_players(&self) -> Result<usize> {
        Ok(self.read()?.players.len())
    }

    /// Removes every match record.
    pub fn delete_matches(&self) -> Result<()> {
        let mut tables = self.write()?;
        info!(count = tables.matches.len(), "deleting matches");
        tables.matches.clear();
        Ok(())
    }

    /// Removes every player. Their matches go with them.
    pub fn delete_players(&self) -> Result<()> {
        let mut tables = self.write()?;
        info!(count = tables.players.len(), "deleting players");
        tables.matches.clear();
        tables.players.clear();
        Ok(())
    }
}

impl Store for MemoryStore {
    fn fetch_all_matches(&self) -> Result<Vec<MatchRecord>> {
        Ok(self.read()?.matches.clone())
    }

    fn fetch_all_players(&self) -> Result<Vec<Player>> {
        Ok(self.read()?.players.clone())
    }
}
