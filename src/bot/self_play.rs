//! Self-play driver.
//!
//! Runs whole matches between two policies: each round both players pick
//! moves until they commit, combat is drained, and the round is closed.

use tracing::{debug, info};

use super::policy::MovePolicy;
use crate::core::{GameState, Move, MoveError, PlayerId, PlayerMap};
use crate::rules::{MatchOutcome, RulesEngine};

/// Limits for a self-play run.
#[derive(Clone, Debug)]
pub struct SelfPlayConfig {
    /// Rounds to play before giving up on a decision.
    pub max_rounds: u32,

    /// Moves a player may make in one deployment phase before it is
    /// committed on its behalf.
    pub max_moves_per_round: usize,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        Self {
            max_rounds: 50,
            max_moves_per_round: 20,
        }
    }
}

impl SelfPlayConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_rounds(mut self, rounds: u32) -> Self {
        self.max_rounds = rounds;
        self
    }

    pub fn with_max_moves_per_round(mut self, moves: usize) -> Self {
        self.max_moves_per_round = moves;
        self
    }
}

/// Summary of a finished (or abandoned) match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchReport {
    /// `None` if the round cap was reached first.
    pub outcome: Option<MatchOutcome>,

    /// Rounds started, including the one the match ended in.
    pub rounds: u32,

    /// Accepted moves, across both players.
    pub moves: usize,

    /// Crystal hp at the end.
    pub crystal_hp: PlayerMap<i32>,
}

/// Play a match to its end or the round cap.
pub fn play_match<E, P>(
    engine: &E,
    state: &mut GameState,
    policies: &mut PlayerMap<P>,
    config: &SelfPlayConfig,
) -> Result<MatchReport, MoveError>
where
    E: RulesEngine,
    P: MovePolicy<E>,
{
    while engine.is_terminal(state).is_none() && state.current_round <= config.max_rounds {
        play_round(engine, state, policies, config)?;
    }

    let report = MatchReport {
        outcome: engine.is_terminal(state),
        rounds: state.current_round.min(config.max_rounds),
        moves: state.history.len(),
        crystal_hp: PlayerMap::new(|p| state.crystals[p].hp),
    };
    info!(
        winner = ?report.outcome.map(|o| o.winner),
        rounds = report.rounds,
        moves = report.moves,
        "self-play match finished"
    );
    Ok(report)
}

/// Deployment, combat and round end for one round.
fn play_round<E, P>(
    engine: &E,
    state: &mut GameState,
    policies: &mut PlayerMap<P>,
    config: &SelfPlayConfig,
) -> Result<(), MoveError>
where
    E: RulesEngine,
    P: MovePolicy<E>,
{
    for player in PlayerId::all() {
        let policy = &mut policies[player];
        for _ in 0..config.max_moves_per_round {
            match policy.choose_move(engine, state, player) {
                Some(mv) => {
                    engine.apply_move(state, player, mv)?;
                    if mv == Move::CommitPlayer {
                        break;
                    }
                }
                None => break,
            }
        }
        if !state.player(player).committed {
            engine.apply_move(state, player, Move::CommitPlayer)?;
        }
    }

    engine.apply_move(state, PlayerId::P0, Move::SimulateRound)?;
    while state.is_simulating {
        engine.apply_move(state, PlayerId::P0, Move::ProcessTick)?;
    }
    if engine.is_terminal(state).is_none() {
        engine.apply_move(state, PlayerId::P0, Move::EndRound)?;
    }
    debug!(round = state.current_round, "self-play round finished");
    Ok(())
}
