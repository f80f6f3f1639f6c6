//! Match configuration.
//!
//! Every tunable of a match lives in `MatchConfig`. The engine never reads
//! global state: the config is owned by the game object and passed by
//! reference into the combat and round operations.

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::error::ConfigError;
use crate::board::MAX_STACK_DEPTH;

/// Tunables for one match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Number of parallel columns (lanes).
    pub column_count: usize,

    /// Ticks simulated per round.
    pub max_ticks_per_round: u32,

    /// Maximum cards per player per tier, at most `MAX_STACK_DEPTH`.
    pub stack_limit: usize,

    /// Action points granted at the start of every round.
    pub initial_ap: i32,

    /// Starting crystal hp for each player.
    pub crystal_hp: i32,

    /// Cards dealt into the hand at setup.
    pub starting_hand_size: usize,

    /// Cards drawn by each player at the end of a round.
    pub draw_per_round: usize,

    /// No cards are drawn at round end once a hand holds this many.
    pub hand_limit: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            column_count: 3,
            max_ticks_per_round: 5,
            stack_limit: 2,
            initial_ap: 20,
            crystal_hp: 20,
            starting_hand_size: 6,
            draw_per_round: 2,
            hand_limit: 8,
        }
    }
}

impl MatchConfig {
    /// Load a config from JSON. Missing fields take their defaults.
    ///
    /// ```
    /// use crystal_clash::core::MatchConfig;
    ///
    /// let config = MatchConfig::from_json(r#"{ "crystal_hp": 5 }"#).unwrap();
    /// assert_eq!(config.crystal_hp, 5);
    /// assert_eq!(config.max_ticks_per_round, 5);
    /// ```
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: MatchConfig = serde_json::from_str(json)?;
        Ok(config.validated())
    }

    /// Clamp any out-of-range values so the config is safe to use.
    ///
    /// - at least one column and one tick per round
    /// - stack limit between 1 and `MAX_STACK_DEPTH`
    /// - non-negative AP, positive crystal hp
    #[must_use]
    pub fn validated(mut self) -> Self {
        if self.column_count == 0 {
            warn!("column_count is 0, clamping to 1");
            self.column_count = 1;
        }
        if self.max_ticks_per_round == 0 {
            warn!("max_ticks_per_round is 0, clamping to 1");
            self.max_ticks_per_round = 1;
        }
        if self.stack_limit == 0 {
            warn!("stack_limit is 0, clamping to 1");
            self.stack_limit = 1;
        }
        if self.stack_limit > MAX_STACK_DEPTH {
            warn!(stack_limit = self.stack_limit, max = MAX_STACK_DEPTH, "stack_limit too deep, clamping");
            self.stack_limit = MAX_STACK_DEPTH;
        }
        if self.initial_ap < 0 {
            warn!(initial_ap = self.initial_ap, "negative initial_ap, clamping to 0");
            self.initial_ap = 0;
        }
        if self.crystal_hp <= 0 {
            warn!(crystal_hp = self.crystal_hp, "crystal_hp must be positive, clamping to 1");
            self.crystal_hp = 1;
        }
        self
    }
}
