//! Core engine types: players, RNG, configuration, moves, errors and state.

pub mod action;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{Move, MoveRecord};
pub use config::MatchConfig;
pub use error::{ConfigError, InvalidSeat, MoveError, SnapshotError};
pub use player::{PlayerId, PlayerMap, PLAYER_COUNT};
pub use rng::{GameRng, GameRngState};
pub use state::{GameState, PlayerState, RoundPhase};
