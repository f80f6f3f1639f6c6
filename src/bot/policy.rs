//! Move policies for automated players.

use crate::core::{GameRng, GameState, Move, PlayerId};
use crate::rules::RulesEngine;

/// Chooses a move for a player from a read-only view of the match.
pub trait MovePolicy<E: RulesEngine> {
    /// Pick one of the player's legal moves, or `None` if it has none.
    fn choose_move(&mut self, engine: &E, state: &GameState, player: PlayerId) -> Option<Move>;
}

/// Uniform random choice among deployments and commit.
///
/// Discards and withdrawals are never picked; the bot only ever adds to
/// the board and then commits.
#[derive(Clone, Debug)]
pub struct RandomBot {
    rng: GameRng,
}

impl RandomBot {
    pub fn new(seed: u64) -> Self {
        Self { rng: GameRng::new(seed) }
    }
}

impl<E: RulesEngine> MovePolicy<E> for RandomBot {
    fn choose_move(&mut self, engine: &E, state: &GameState, player: PlayerId) -> Option<Move> {
        let candidates: Vec<Move> = engine
            .legal_moves(state, player)
            .into_iter()
            .filter(|mv| matches!(mv, Move::PlayCard { .. } | Move::CommitPlayer))
            .collect();
        self.rng.choose(&candidates).copied()
    }
}

/// Always commits immediately.
#[derive(Clone, Copy, Debug, Default)]
pub struct PassiveBot;

impl<E: RulesEngine> MovePolicy<E> for PassiveBot {
    fn choose_move(&mut self, engine: &E, state: &GameState, player: PlayerId) -> Option<Move> {
        engine
            .legal_moves(state, player)
            .into_iter()
            .find(|mv| *mv == Move::CommitPlayer)
    }
}
