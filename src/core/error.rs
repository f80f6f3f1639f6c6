//! Error types.
//!
//! A rejected move is the only failure a player can cause. Every rejection
//! leaves the game state untouched.

use super::player::PlayerId;
use crate::cards::CardId;

/// Why a move was rejected.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// The match has already concluded.
    #[error("match is over")]
    GameOver,

    /// The player has committed and can no longer change their deployment.
    #[error("{0} has already committed")]
    AlreadyCommitted(PlayerId),

    /// The move is not legal in the current round phase.
    #[error("move not allowed during the {0} phase")]
    WrongPhase(&'static str),

    /// The card is not in the player's hand.
    #[error("{0} is not in {1}'s hand")]
    CardNotInHand(CardId, PlayerId),

    /// The column index does not exist.
    #[error("no column {0}")]
    NoSuchColumn(usize),

    /// The player's stack in the active tier is full.
    #[error("{player}'s stack in column {column} is full")]
    StackFull { player: PlayerId, column: usize },

    /// Not enough action points to pay for the card.
    #[error("card costs {cost} AP but only {available} remain")]
    InsufficientAp { cost: i32, available: i32 },

    /// The player has no card in the active tier of that column.
    #[error("{player} has no card in column {column}")]
    EmptyStack { player: PlayerId, column: usize },

    /// Simulation needs both players to have committed.
    #[error("both players must commit before combat")]
    NotAllCommitted,

    /// No tick can be processed because combat is not running.
    #[error("combat is not running")]
    NotSimulating,

    /// The round cannot end while ticks remain.
    #[error("combat ticks remain")]
    StillSimulating,
}

/// A seat number outside the two-player range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("no player seat {0}")]
pub struct InvalidSeat(pub u8);

/// Snapshot encode/decode failure.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("snapshot codec error: {0}")]
    Codec(#[from] bincode::Error),
}

/// Configuration loading failure.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}
