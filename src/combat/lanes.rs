//! Lane progression at round end.
//!
//! Each column moves through three states: contested Equator, a siege of one
//! player's base, and back. Whoever holds the Equator alone at round end
//! advances into the opponent's base at half strength; a defender who holds
//! its base alone at round end drives the siege back to the Equator.

use tracing::debug;

use super::log::CombatEvent;
use crate::board::TierKind;
use crate::core::{GameState, PlayerId};

/// What happened to one column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LaneTransition {
    /// No asymmetric hold; the column stays as it is.
    Held,
    /// `winner` took the Equator and now besieges the opponent's base.
    Pushed { winner: PlayerId },
    /// `defender` cleared its base; combat returns to the Equator.
    Repelled { defender: PlayerId },
}

/// Run lane progression on every column, in ascending order.
pub fn progress_lanes(state: &mut GameState) -> Vec<LaneTransition> {
    (0..state.columns.len()).map(|column| progress_column(state, column)).collect()
}

/// Run lane progression on one column.
pub fn progress_column(state: &mut GameState, column_idx: usize) -> LaneTransition {
    let column = &mut state.columns[column_idx];
    let active = column.active_tier;
    let mut events = Vec::new();

    let transition = match active.owner() {
        None => {
            let tier = column.tier_mut(TierKind::Equator);
            let winner = match (tier.is_empty(PlayerId::P0), tier.is_empty(PlayerId::P1)) {
                (false, true) => PlayerId::P0,
                (true, false) => PlayerId::P1,
                _ => return LaneTransition::Held,
            };
            let loser = winner.opponent();
            let survivors = tier.take_all(winner);

            let base = TierKind::base_of(loser);
            let pushed = survivors.len();
            let target = column.tier_mut(base);
            for mut card in survivors {
                card.hp = card.hp.div_euclid(2);
                card.ticks_in_base = 0;
                if card.is_destroyed() {
                    events.push(CombatEvent::CardLostInPush {
                        column: column_idx,
                        card: card.id,
                        owner: winner,
                    });
                } else {
                    target.push(winner, card);
                }
            }

            column.active_tier = base;
            column.controlling_player = Some(winner);
            events.insert(
                0,
                CombatEvent::LanePushed {
                    column: column_idx,
                    winner,
                    into: base,
                    cards: pushed,
                },
            );
            LaneTransition::Pushed { winner }
        }
        Some(defender) => {
            let attacker = defender.opponent();
            let tier = column.tier_mut(active);
            if tier.is_empty(defender) || !tier.is_empty(attacker) {
                return LaneTransition::Held;
            }
            let returning = tier.take_all(defender);
            let count = returning.len();

            let equator = column.tier_mut(TierKind::Equator);
            for mut card in returning {
                card.ticks_in_base = 0;
                equator.push(defender, card);
            }

            column.active_tier = TierKind::Equator;
            column.controlling_player = Some(defender);
            events.push(CombatEvent::LaneRepelled {
                column: column_idx,
                defender,
                cards: count,
            });
            LaneTransition::Repelled { defender }
        }
    };

    debug!(column = column_idx, ?transition, "lane progressed");
    for event in events {
        state.log(event);
    }
    transition
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, CardClass, CardDefinition, CardId, DefinitionId};
    use crate::core::MatchConfig;

    fn card(id: u32, hp: i32) -> Card {
        let def = CardDefinition::new(DefinitionId::new(0), "Unit", CardClass::Tank).with_stats(2, hp, 1, 1);
        Card::from_definition(CardId::new(id), &def)
    }

    fn state() -> GameState {
        GameState::new(&MatchConfig::default(), 0)
    }

    #[test]
    fn test_equator_win_pushes_and_halves() {
        let mut state = state();
        let equator = state.columns[0].tier_mut(TierKind::Equator);
        equator.push(PlayerId::P1, card(1, 7));
        let mut veteran = card(2, 4);
        veteran.ticks_in_base = 9;
        equator.push(PlayerId::P1, veteran);

        let transition = progress_column(&mut state, 0);

        assert_eq!(transition, LaneTransition::Pushed { winner: PlayerId::P1 });
        let column = &state.columns[0];
        assert_eq!(column.active_tier, TierKind::BaseOfPlayer0);
        assert_eq!(column.controlling_player, Some(PlayerId::P1));
        let equator = column.tier(TierKind::Equator).unwrap();
        assert!(PlayerId::all().all(|p| equator.is_empty(p)));

        let base = column.tier(TierKind::BaseOfPlayer0).unwrap();
        let hps: Vec<i32> = base.stack(PlayerId::P1).iter().map(|c| c.hp).collect();
        assert_eq!(hps, vec![3, 2]);
        assert!(base.stack(PlayerId::P1).iter().all(|c| c.ticks_in_base == 0));
    }

    #[test]
    fn test_one_hp_card_is_lost_in_push() {
        let mut state = state();
        state.columns[0].tier_mut(TierKind::Equator).push(PlayerId::P0, card(1, 1));

        progress_column(&mut state, 0);

        let column = &state.columns[0];
        assert_eq!(column.active_tier, TierKind::BaseOfPlayer1);
        assert!(column.tier(TierKind::BaseOfPlayer1).unwrap().is_empty(PlayerId::P0));
        assert!(state
            .events
            .iter()
            .any(|e| matches!(e, CombatEvent::CardLostInPush { .. })));
    }

    #[test]
    fn test_contested_or_empty_equator_holds() {
        let mut state = state();
        let equator = state.columns[1].tier_mut(TierKind::Equator);
        equator.push(PlayerId::P0, card(1, 5));
        equator.push(PlayerId::P1, card(2, 5));

        let transitions = progress_lanes(&mut state);

        assert_eq!(transitions, vec![LaneTransition::Held; 3]);
        assert_eq!(state.columns[1].active_tier, TierKind::Equator);
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_defender_repels_siege() {
        let mut state = state();
        state.columns[2].active_tier = TierKind::BaseOfPlayer0;
        state.columns[2].tier_mut(TierKind::BaseOfPlayer0).push(PlayerId::P0, card(1, 5));

        let transition = progress_column(&mut state, 2);

        assert_eq!(transition, LaneTransition::Repelled { defender: PlayerId::P0 });
        let column = &state.columns[2];
        assert_eq!(column.active_tier, TierKind::Equator);
        let equator = column.tier(TierKind::Equator).unwrap();
        assert_eq!(equator.top(PlayerId::P0).unwrap().hp, 5);
        assert!(column.tier(TierKind::BaseOfPlayer0).unwrap().is_empty(PlayerId::P0));
    }

    #[test]
    fn test_siege_with_attackers_holds() {
        let mut state = state();
        state.columns[0].active_tier = TierKind::BaseOfPlayer1;
        let base = state.columns[0].tier_mut(TierKind::BaseOfPlayer1);
        base.push(PlayerId::P0, card(1, 5));
        base.push(PlayerId::P1, card(2, 5));

        assert_eq!(progress_column(&mut state, 0), LaneTransition::Held);
        assert_eq!(state.columns[0].active_tier, TierKind::BaseOfPlayer1);

        let _ = state.columns[0].tier_mut(TierKind::BaseOfPlayer1).take_all(PlayerId::P1);
        assert_eq!(progress_column(&mut state, 0), LaneTransition::Held);
    }
}
