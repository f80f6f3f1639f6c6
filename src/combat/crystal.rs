//! Crystal damage and the win condition.
//!
//! A crystal only takes damage from a card standing unopposed in its
//! owner's base. The win check runs right after every hit, so nothing can
//! be logged against a match that is already over.

use tracing::info;

use super::log::CombatEvent;
use crate::cards::CardId;
use crate::core::{GameState, PlayerId};
use crate::rules::{EndReason, MatchOutcome};

/// Apply one breach hit from `attacker` (owned by `owner`) to the
/// opponent's crystal. Returns true if the hit ended the match.
pub fn apply_breach(state: &mut GameState, column: usize, attacker: CardId, owner: PlayerId, damage: i32) -> bool {
    if state.is_game_over() {
        return true;
    }

    let defender = owner.opponent();
    let crystal = &mut state.crystals[defender];
    let destroyed = crystal.damage(damage, owner);
    let crystal_hp = crystal.hp;

    state.log(CombatEvent::CrystalHit {
        column,
        attacker,
        owner,
        damage,
        crystal_hp,
    });

    if destroyed {
        end_match(state, owner);
    }
    destroyed
}

/// Record the winner and stop the simulation.
pub fn end_match(state: &mut GameState, winner: PlayerId) {
    if state.is_game_over() {
        return;
    }
    state.outcome = Some(MatchOutcome {
        winner,
        reason: EndReason::Crystal,
    });
    state.is_simulating = false;
    state.log(CombatEvent::MatchWon { winner });
    info!(
        %winner,
        round = state.current_round,
        tick = state.current_tick,
        "match over, crystal destroyed"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MatchConfig;

    #[test]
    fn test_breach_reduces_defender_crystal() {
        let mut state = GameState::new(&MatchConfig::default(), 0);

        let ended = apply_breach(&mut state, 1, CardId::new(3), PlayerId::P0, 4);

        assert!(!ended);
        assert_eq!(state.crystals[PlayerId::P1].hp, 16);
        assert_eq!(state.crystals[PlayerId::P1].last_damaged_by, Some(PlayerId::P0));
        assert_eq!(state.crystals[PlayerId::P0].hp, 20);
        assert_eq!(state.events.len(), 1);
    }

    #[test]
    fn test_lethal_breach_ends_match_once() {
        let config = MatchConfig {
            crystal_hp: 3,
            ..MatchConfig::default()
        };
        let mut state = GameState::new(&config, 0);
        state.is_simulating = true;

        assert!(apply_breach(&mut state, 0, CardId::new(1), PlayerId::P1, 5));
        assert!(!state.is_simulating);
        assert_eq!(state.winner(), Some(PlayerId::P1));
        let logged = state.events.len();

        // Further hits after the end are swallowed.
        assert!(apply_breach(&mut state, 0, CardId::new(1), PlayerId::P1, 5));
        assert_eq!(state.events.len(), logged);
        assert_eq!(state.crystals[PlayerId::P0].hp, -2);
    }
}
