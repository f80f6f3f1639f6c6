//! Move representation.
//!
//! Moves form a closed set: each variant carries exactly the arguments it
//! needs and is resolved by exactly one handler in `rules`.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use crate::cards::CardId;

/// A move submitted by (or on behalf of) a player.
///
/// ```
/// use crystal_clash::cards::CardId;
/// use crystal_clash::core::Move;
///
/// let deploy = Move::PlayCard { card: CardId::new(4), column: 1 };
/// assert_eq!(deploy.name(), "playCard");
/// assert!(Move::CommitPlayer.is_player_scoped());
/// assert!(!Move::ProcessTick.is_player_scoped());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Deploy a card from hand into the active tier of a column.
    PlayCard { card: CardId, column: usize },
    /// Discard a card from hand.
    RemoveCard { card: CardId },
    /// Take the top card of the player's stack in a column back to hand.
    RemoveCardFromBoard { column: usize },
    /// Signal that deployment is finished.
    CommitPlayer,
    /// Withdraw a commit while still in the playing phase.
    UncommitPlayer,
    /// Start combat once both players have committed.
    SimulateRound,
    /// Advance combat by one tick.
    ProcessTick,
    /// Run lane progression and round bookkeeping after combat.
    EndRound,
}

impl Move {
    /// Stable name used in logs and external interfaces.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Move::PlayCard { .. } => "playCard",
            Move::RemoveCard { .. } => "removeCard",
            Move::RemoveCardFromBoard { .. } => "removeCardFromBoard",
            Move::CommitPlayer => "commitPlayer",
            Move::UncommitPlayer => "uncommitPlayer",
            Move::SimulateRound => "simulateRound",
            Move::ProcessTick => "processTick",
            Move::EndRound => "endRound",
        }
    }

    /// Whether the move acts on the submitting player's own hand, board or
    /// commit flag, as opposed to driving the shared round.
    #[must_use]
    pub const fn is_player_scoped(&self) -> bool {
        !matches!(self, Move::SimulateRound | Move::ProcessTick | Move::EndRound)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::PlayCard { card, column } => write!(f, "playCard({card}, {column})"),
            Move::RemoveCard { card } => write!(f, "removeCard({card})"),
            Move::RemoveCardFromBoard { column } => write!(f, "removeCardFromBoard({column})"),
            other => f.write_str(other.name()),
        }
    }
}

/// An accepted move with metadata for replay.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The player who submitted the move.
    pub player: PlayerId,

    /// The move taken.
    pub mv: Move,

    /// Round in which the move was accepted.
    pub round: u32,

    /// Sequence number across the whole match.
    pub sequence: u32,
}
