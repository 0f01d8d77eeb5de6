//! Error taxonomy shared by the store, the standings provider and the pairing engine.

use thiserror::Error;

use crate::player::PlayerId;

type BoxedSource = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Every failure the crate can surface. Nothing is swallowed: a failed store fetch is an error,
/// never an empty success.
#[derive(Debug, Error)]
pub enum TournamentError {
    /// The backing store could not be reached. Not retried here.
    #[error("store unavailable: {message}")]
    StoreUnavailable {
        /// What the store was doing.
        message: String,
        /// Underlying driver error, if any.
        #[source]
        source: Option<BoxedSource>,
    },

    /// Persisted match data is inconsistent with the registered players.
    #[error("corrupt standing: {reason}")]
    CorruptStanding {
        /// Which record is inconsistent.
        reason: String,
    },

    /// The caller handed the pairing engine standings that break its input contract.
    #[error("invalid standings: {reason}")]
    InvalidStandings {
        /// Which entry broke the contract.
        reason: String,
    },

    /// A match was reported for a player the store does not know.
    #[error("unknown player {0}")]
    UnknownPlayer(PlayerId),

    /// A match was reported that cannot have happened.
    #[error("invalid match: {reason}")]
    InvalidMatch {
        /// Why the match was rejected.
        reason: String,
    },

    /// The file logger requested by the configuration could not be installed.
    #[error("could not set up logging")]
    Logging(#[source] BoxedSource),
}

impl TournamentError {
    /// A [`StoreUnavailable`](Self::StoreUnavailable) error without an underlying source.
    pub fn store_unavailable(message: impl Into<String>) -> Self {
        Self::StoreUnavailable {
            message: message.into(),
            source: None,
        }
    }

    /// A [`StoreUnavailable`](Self::StoreUnavailable) error wrapping the driver error.
    pub fn store_unavailable_with(
        message: impl Into<String>,
        source: impl Into<BoxedSource>,
    ) -> Self {
        Self::StoreUnavailable {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// A [`CorruptStanding`](Self::CorruptStanding) error.
    pub fn corrupt(reason: impl Into<String>) -> Self {
        Self::CorruptStanding {
            reason: reason.into(),
        }
    }

    /// An [`InvalidStandings`](Self::InvalidStandings) error.
    pub fn invalid_standings(reason: impl Into<String>) -> Self {
        Self::InvalidStandings {
            reason: reason.into(),
        }
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, TournamentError>;
