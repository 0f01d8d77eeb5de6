//! # Swiss Tournament
//!
//! Standings and next-round pairings for a Swiss-system tournament.
//!
//! It provides:
//! - A [`Store`](crate::store::Store) trait describing the persisted players and matches the
//!   crate reads, and an in-memory [`MemoryStore`](crate::store::MemoryStore)
//! - A standings provider ranking players by wins with a deterministic tie-break
//! - A pure pairing engine pairing neighbours in the standings, giving a bye on odd player
//!   counts and avoiding rematches with a bounded local swap
//! - A [`Tournament`](crate::tournament::Tournament) facade combining the three
//!
//! # Documentation Overview
//!
//! - For the storage contract and the reference store, see the [`store`] module.
//! - For ranking and tie-break rules, see [`standings`].
//! - For the pairing algorithm, byes and rematch handling, see [`pairing`].
//! - For runtime options, see [`Configuration`](crate::configuration::Configuration).
//! - For failure kinds, see [`TournamentError`](crate::error::TournamentError).
//!
//! # Usage Example
//!
//! ```
//! use swiss_tournament::prelude::*;
//!
//! fn main() -> anyhow::Result<()> {
//!     let store = MemoryStore::new();
//!     for name in ["Markov Chaney", "Joe Malik", "Mao Tsu-hsi", "Atlanta Hope", "Bruno Walton"] {
//!         store.register_player(name)?;
//!     }
//!
//!     let tournament = Tournament::new(&store, Configuration::from_env())?;
//!     let round = tournament.swiss_pairings()?;
//!
//!     for pairing in &round.pairings {
//!         println!("{pairing}");
//!     }
//!     if let Some(bye) = &round.bye {
//!         println!("{} sits out this round", bye.name);
//!     }
//!     assert_eq!(round.len(), 5);
//!     Ok(())
//! }
//! ```
#![warn(missing_docs)]

pub mod configuration;
pub mod error;
pub mod history;
mod logger;
pub mod pairing;
pub mod player;
pub mod standings;
pub mod store;
pub mod tournament;

/// Commonly used types and traits for quick access.
///
/// Import this prelude to get started easily:
/// ```rust
/// use swiss_tournament::prelude::*;
/// ```
pub mod prelude {
    pub use crate::configuration::Configuration;
    pub use crate::error::TournamentError;
    pub use crate::history::MatchHistory;
    pub use crate::pairing::{compute_pairings, Bye, Pairing, RoundPairings};
    pub use crate::player::{MatchRecord, Player, PlayerId};
    pub use crate::standings::{get_standings, StandingEntry, TieBreak};
    pub use crate::store::{MemoryStore, Store};
    pub use crate::tournament::Tournament;
}
