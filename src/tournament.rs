//! Entry point tying the store, the standings provider and the pairing engine together.
//!
//! A [`Tournament`] owns an injected [`Store`] handle and a [`Configuration`]. Each query
//! reads the store once (players, then matches) and computes everything else from that
//! snapshot, so standings and pairings returned by one call are always consistent with each
//! other. No retries happen here; wrap the store if you need them.
//!
//! # Example
//!
//! ```
//! use swiss_tournament::prelude::*;
//!
//! # fn main() -> swiss_tournament::error::Result<()> {
//! let store = MemoryStore::new();
//! let a = store.register_player("Twilight Sparkle")?;
//! let b = store.register_player("Fluttershy")?;
//! let c = store.register_player("Applejack")?;
//! let d = store.register_player("Pinkie Pie")?;
//!
//! let tournament = Tournament::new(&store, Configuration::new())?;
//! store.report_match(a, b)?;
//! store.report_match(c, d)?;
//!
//! let round = tournament.swiss_pairings()?;
//! assert_eq!(round.pairings.len(), 2);
//! assert_eq!((round.pairings[0].id_a, round.pairings[0].id_b), (a, c));
//! assert_eq!((round.pairings[1].id_a, round.pairings[1].id_b), (b, d));
//! # Ok(())
//! # }
//! ```

use tracing::{info, instrument, trace};

use crate::configuration::Configuration;
use crate::error::{Result, TournamentError};
use crate::history::MatchHistory;
use crate::logger::init_logger;
use crate::pairing::{compute_pairings, RoundPairings};
use crate::standings::{derive_standings, get_standings, StandingEntry};
use crate::store::Store;

/// Standings and pairings over one injected store.
pub struct Tournament<S: Store> {
    store: S,
    config: Configuration,
}

impl<S: Store> Tournament<S> {
    /// Create a [`Tournament`] reading from `store`.
    ///
    /// # Errors
    /// Returns [`TournamentError::Logging`] if `config` asks for a log file and the logger
    /// cannot be installed.
    #[instrument(skip_all)]
    pub fn new(store: S, config: Configuration) -> Result<Tournament<S>> {
        if config.log {
            init_logger().map_err(|e| TournamentError::Logging(e.into()))?;
        }
        trace!(?config);
        Ok(Tournament { store, config })
    }

    /// The injected store handle.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The active configuration.
    pub fn config(&self) -> Configuration {
        self.config
    }

    /// Players ranked by wins, ties broken by the configured
    /// [`TieBreak`](crate::standings::TieBreak).
    #[instrument(skip(self))]
    pub fn player_standings(&self) -> Result<Vec<StandingEntry>> {
        get_standings(&self.store, self.config.tie_break)
    }

    /// Pairings for the next round, from the current standings.
    ///
    /// Prior meetings are avoided when [`Configuration::with_avoid_repeats`] is on (the
    /// default); otherwise players are paired strictly by adjacency.
    #[instrument(skip(self))]
    pub fn swiss_pairings(&self) -> Result<RoundPairings> {
        let players = self.store.fetch_all_players()?;
        let matches = self.store.fetch_all_matches()?;
        let standings = derive_standings(&players, &matches, self.config.tie_break)?;

        let history = self
            .config
            .avoid_repeats
            .then(|| MatchHistory::from_matches(&matches));
        let round = compute_pairings(&standings, history.as_ref())?;

        for pairing in &round.pairings {
            info!("{pairing}");
        }
        Ok(round)
    }
}
