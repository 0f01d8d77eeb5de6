//! Config for the tournament behaviors
//!
//! Configuration can be created programmatically using [`Configuration::new()`] or by reading
//! environment variables using [`Configuration::from_env()`].
//!
//! # Environment Variables
//!
//! All values are optional and case-insensitive. Set a flag to `"true"` to enable it.
//!
//! - `SWISS_LOG` — Enable logging to a file (default: `false`)
//! - `SWISS_AVOID_REPEATS` — Avoid pairing players who already met (default: `true`)
//! - `SWISS_TIE_BREAK` — `id` or `median`, how equal win counts are ranked (default: `id`)

use tracing::warn;

use crate::standings::TieBreak;

/// Configuration for tournament behaviors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Configuration {
    pub(crate) log: bool,
    pub(crate) avoid_repeats: bool,
    pub(crate) tie_break: TieBreak,
}

impl Configuration {
    /// Create a new configuration with default parameters.
    ///
    /// By default:
    /// - Logging to file is disabled.
    /// - Prior opponents are avoided when pairing.
    /// - Equal win counts are ranked by ascending player id.
    pub fn new() -> Self {
        Self {
            log: false,
            avoid_repeats: true,
            tie_break: TieBreak::PlayerId,
        }
    }

    /// Create configuration from environment variables.
    ///
    /// Any unrecognised value (including unset) falls back to the default for that field.
    pub fn from_env() -> Self {
        fn get_env_flag(var: &str, default: bool) -> bool {
            match std::env::var(var) {
                Ok(val) => val.eq_ignore_ascii_case("true"),
                Err(_) => default,
            }
        }

        let tie_break = match std::env::var("SWISS_TIE_BREAK") {
            Ok(val) => val.parse().unwrap_or_else(|e| {
                warn!("SWISS_TIE_BREAK ignored: {e}");
                TieBreak::default()
            }),
            Err(_) => TieBreak::default(),
        };

        Self {
            log: get_env_flag("SWISS_LOG", false),
            avoid_repeats: get_env_flag("SWISS_AVOID_REPEATS", true),
            tie_break,
        }
    }

    /// Enable or disable logging to file.
    pub fn with_log(mut self, value: bool) -> Self {
        self.log = value;
        self
    }

    /// Enable or disable rematch avoidance.
    ///
    /// When disabled, pairings follow strict standings adjacency.
    pub fn with_avoid_repeats(mut self, value: bool) -> Self {
        self.avoid_repeats = value;
        self
    }

    /// Choose how players with equal wins are ranked.
    pub fn with_tie_break(mut self, value: TieBreak) -> Self {
        self.tie_break = value;
        self
    }

    /// Tie-break policy for standings.
    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }

    /// Whether prior meetings are fed to the pairing engine.
    pub fn avoid_repeats(&self) -> bool {
        self.avoid_repeats
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_overrides_defaults() {
        let config = Configuration::new()
            .with_avoid_repeats(false)
            .with_tie_break(TieBreak::Median);
        assert!(!config.avoid_repeats());
        assert_eq!(config.tie_break(), TieBreak::Median);
        assert!(!config.log);
        assert_eq!(Configuration::default(), Configuration::new());
    }

    #[test]
    fn from_env_reads_and_falls_back() {
        std::env::set_var("SWISS_AVOID_REPEATS", "FALSE");
        std::env::set_var("SWISS_TIE_BREAK", "Median");
        std::env::remove_var("SWISS_LOG");
        let config = Configuration::from_env();
        assert!(!config.avoid_repeats);
        assert_eq!(config.tie_break, TieBreak::Median);
        assert!(!config.log);

        std::env::set_var("SWISS_TIE_BREAK", "coin-flip");
        assert_eq!(Configuration::from_env().tie_break, TieBreak::PlayerId);

        std::env::remove_var("SWISS_AVOID_REPEATS");
        std::env::remove_var("SWISS_TIE_BREAK");
        assert_eq!(Configuration::from_env(), Configuration::new());
    }
}
