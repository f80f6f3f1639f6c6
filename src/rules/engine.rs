//! Rules engine trait.

use serde::{Deserialize, Serialize};

use crate::core::{GameState, MatchConfig, Move, MoveError, PlayerId};

/// Why a match ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EndReason {
    /// The loser's crystal was destroyed.
    Crystal,
}

impl EndReason {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            EndReason::Crystal => "crystal",
        }
    }
}

/// Result of a completed match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchOutcome {
    pub winner: PlayerId,
    pub reason: EndReason,
}

impl MatchOutcome {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.winner == player
    }
}

/// Rules engine trait.
///
/// The outer layers (UI, network relay, bots) drive a match exclusively
/// through this interface.
///
/// ## Implementation Notes
///
/// - `legal_moves`: empty if the player cannot act
/// - `apply_move`: deterministic; an `Err` leaves the state untouched
/// - `is_terminal`: `None` while the match continues
pub trait RulesEngine {
    /// Get the match configuration.
    fn config(&self) -> &MatchConfig;

    /// Enumerate every move `player` may submit right now.
    fn legal_moves(&self, state: &GameState, player: PlayerId) -> Vec<Move>;

    /// Apply a move on behalf of `player`.
    ///
    /// Returns the outcome if the match is over after the move.
    fn apply_move(&self, state: &mut GameState, player: PlayerId, mv: Move) -> Result<Option<MatchOutcome>, MoveError>;

    /// Check if the match is over.
    fn is_terminal(&self, state: &GameState) -> Option<MatchOutcome> {
        state.outcome
    }

    /// Whether `mv` would currently be accepted.
    fn is_legal(&self, state: &GameState, player: PlayerId, mv: Move) -> bool {
        self.legal_moves(state, player).contains(&mv)
    }
}
