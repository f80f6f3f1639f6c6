//! Tick scheduling.
//!
//! A round of combat is `max_ticks_per_round` ticks. Each tick walks the
//! columns in ascending order and, within a column, resolves player 0's
//! top card before player 1's. That fixed order is the tie-break for every
//! simultaneous situation.
//!
//! Callers either step one tick at a time with [`process_tick`] (for
//! animated playback) or drain the round with [`run_to_completion`]; both
//! produce the same state and log.

use tracing::debug;

use super::log::CombatEvent;
use super::resolver::resolve_card;
use crate::core::{GameState, MatchConfig, MoveError, PlayerId, RoundPhase};

/// Process the next tick of the running combat.
pub fn process_tick(state: &mut GameState, config: &MatchConfig) -> Result<(), MoveError> {
    if state.is_game_over() {
        return Err(MoveError::GameOver);
    }
    if !state.is_simulating || state.round_phase != RoundPhase::Combat {
        return Err(MoveError::NotSimulating);
    }

    let tick = state.current_tick;
    state.log(CombatEvent::TickStarted { tick });
    debug!(round = state.current_round, tick, "processing tick");

    'columns: for column in 0..state.columns.len() {
        for player in PlayerId::all() {
            resolve_card(state, column, player, tick);
            if state.is_game_over() {
                break 'columns;
            }
        }
    }

    if state.is_game_over() {
        return Ok(());
    }

    age_base_occupants(state);

    state.current_tick += 1;
    if state.current_tick > config.max_ticks_per_round {
        state.is_simulating = false;
        debug!(round = state.current_round, "combat ticks exhausted");
    }
    Ok(())
}

/// Drain every remaining tick of the round. Returns how many ran.
pub fn run_to_completion(state: &mut GameState, config: &MatchConfig) -> Result<u32, MoveError> {
    let mut ticks = 0;
    while state.is_simulating {
        process_tick(state, config)?;
        ticks += 1;
    }
    Ok(ticks)
}

/// Every card standing in a base tier has now spent one more tick there.
fn age_base_occupants(state: &mut GameState) {
    for column in &mut state.columns {
        if !column.active_tier.is_base() {
            continue;
        }
        for card in column.active_mut().cards_mut() {
            card.ticks_in_base += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::TierKind;
    use crate::cards::{Card, CardClass, CardDefinition, CardId, DefinitionId};

    fn card(id: u32, damage: i32, hp: i32, tick: u32) -> Card {
        let def = CardDefinition::new(DefinitionId::new(0), "Unit", CardClass::Assassin).with_stats(damage, hp, tick, 1);
        Card::from_definition(CardId::new(id), &def)
    }

    fn combat_state() -> GameState {
        let mut state = GameState::new(&MatchConfig::default(), 0);
        state.round_phase = RoundPhase::Combat;
        state.is_simulating = true;
        state
    }

    #[test]
    fn test_rejects_when_not_simulating() {
        let mut state = GameState::new(&MatchConfig::default(), 0);
        assert_eq!(process_tick(&mut state, &MatchConfig::default()), Err(MoveError::NotSimulating));
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_ticks_exhaust() {
        let config = MatchConfig::default();
        let mut state = combat_state();

        let ran = run_to_completion(&mut state, &config).unwrap();

        assert_eq!(ran, 5);
        assert!(!state.is_simulating);
        assert_eq!(state.current_tick, 6);
        let markers = state
            .events
            .iter()
            .filter(|e| matches!(e, CombatEvent::TickStarted { .. }))
            .count();
        assert_eq!(markers, 5);
    }

    #[test]
    fn test_columns_resolve_in_ascending_order() {
        let config = MatchConfig::default();
        let mut state = combat_state();
        for column in [2, 0] {
            let tier = state.columns[column].active_mut();
            tier.push(PlayerId::P1, card(10 + column as u32, 1, 9, 1));
            tier.push(PlayerId::P0, card(20 + column as u32, 1, 9, 1));
        }

        process_tick(&mut state, &config).unwrap();

        let columns: Vec<usize> = state
            .events
            .iter()
            .filter_map(|e| match e {
                CombatEvent::Clash { column, owner, .. } => {
                    assert_eq!(*owner, PlayerId::P0);
                    Some(*column)
                }
                _ => None,
            })
            .collect();
        assert_eq!(columns, vec![0, 2]);
    }

    #[test]
    fn test_base_occupants_age_each_tick() {
        let config = MatchConfig::default();
        let mut state = combat_state();
        state.columns[1].active_tier = TierKind::BaseOfPlayer0;
        state.columns[1].active_mut().push(PlayerId::P1, card(1, 2, 5, 1));

        process_tick(&mut state, &config).unwrap();
        process_tick(&mut state, &config).unwrap();

        let tier = state.columns[1].active().unwrap();
        assert_eq!(tier.top(PlayerId::P1).unwrap().ticks_in_base, 2);
        // First tick idles, second tick breaches.
        assert_eq!(state.crystals[PlayerId::P0].hp, 18);
    }

    #[test]
    fn test_stops_immediately_on_crystal_kill() {
        let config = MatchConfig {
            crystal_hp: 2,
            ..MatchConfig::default()
        };
        let mut state = GameState::new(&config, 0);
        state.round_phase = RoundPhase::Combat;
        state.is_simulating = true;
        for column in 0..2 {
            state.columns[column].active_tier = TierKind::BaseOfPlayer1;
            let mut attacker = card(column as u32, 5, 5, 1);
            attacker.ticks_in_base = 3;
            state.columns[column].active_mut().push(PlayerId::P0, attacker);
        }

        process_tick(&mut state, &config).unwrap();

        assert_eq!(state.winner(), Some(PlayerId::P0));
        assert!(!state.is_simulating);
        assert_eq!(state.current_tick, 1);
        let hits = state
            .events
            .iter()
            .filter(|e| matches!(e, CombatEvent::CrystalHit { .. }))
            .count();
        assert_eq!(hits, 1);
        assert!(matches!(state.events.last(), Some(CombatEvent::MatchWon { .. })));
        assert_eq!(process_tick(&mut state, &config), Err(MoveError::GameOver));
    }
}
