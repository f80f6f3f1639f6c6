//! Commit gate.
//!
//! The only synchronization between the two players: combat starts once
//! both have committed their deployment.

use tracing::debug;

use crate::combat::CombatEvent;
use crate::core::{GameState, MoveError, PlayerId, RoundPhase};

fn require_playing(state: &GameState) -> Result<(), MoveError> {
    if state.round_phase == RoundPhase::Playing {
        Ok(())
    } else {
        Err(MoveError::WrongPhase(state.round_phase.name()))
    }
}

/// Mark `player` as done deploying.
pub fn commit(state: &mut GameState, player: PlayerId) -> Result<(), MoveError> {
    require_playing(state)?;
    if state.player(player).committed {
        return Err(MoveError::AlreadyCommitted(player));
    }
    state.player_mut(player).committed = true;
    debug!(%player, "committed");
    Ok(())
}

/// Withdraw a commit. Only legal while still playing.
///
/// Clearing an already clear flag is accepted and changes nothing.
pub fn uncommit(state: &mut GameState, player: PlayerId) -> Result<(), MoveError> {
    require_playing(state)?;
    state.player_mut(player).committed = false;
    debug!(%player, "uncommitted");
    Ok(())
}

/// Whether both players have committed.
#[must_use]
pub fn all_committed(state: &GameState) -> bool {
    state.players.iter().all(|(_, p)| p.committed)
}

/// Start combat if both players have committed. Returns whether it did.
pub fn try_simulate(state: &mut GameState) -> bool {
    if state.round_phase != RoundPhase::Playing || !all_committed(state) {
        return false;
    }
    state.round_phase = RoundPhase::Combat;
    state.is_simulating = true;
    state.current_tick = 1;
    let round = state.current_round;
    state.log(CombatEvent::RoundStarted { round });
    debug!(round, "combat started");
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MatchConfig;

    fn state() -> GameState {
        GameState::new(&MatchConfig::default(), 0)
    }

    #[test]
    fn test_simulate_needs_both() {
        let mut state = state();

        assert!(!try_simulate(&mut state));
        commit(&mut state, PlayerId::P0).unwrap();
        assert!(!try_simulate(&mut state));
        assert_eq!(state.round_phase, RoundPhase::Playing);

        commit(&mut state, PlayerId::P1).unwrap();
        assert!(try_simulate(&mut state));
        assert_eq!(state.round_phase, RoundPhase::Combat);
        assert!(state.is_simulating);
        assert_eq!(state.current_tick, 1);
        assert_eq!(state.events.len(), 1);
    }

    #[test]
    fn test_double_commit_rejected() {
        let mut state = state();
        commit(&mut state, PlayerId::P1).unwrap();
        assert_eq!(
            commit(&mut state, PlayerId::P1),
            Err(MoveError::AlreadyCommitted(PlayerId::P1))
        );
    }

    #[test]
    fn test_uncommit_only_while_playing() {
        let mut state = state();
        commit(&mut state, PlayerId::P0).unwrap();
        uncommit(&mut state, PlayerId::P0).unwrap();
        assert!(!state.player(PlayerId::P0).committed);

        commit(&mut state, PlayerId::P0).unwrap();
        commit(&mut state, PlayerId::P1).unwrap();
        try_simulate(&mut state);

        assert_eq!(
            uncommit(&mut state, PlayerId::P0),
            Err(MoveError::WrongPhase("combat"))
        );
        assert!(state.player(PlayerId::P0).committed);
    }
}
