//! Per-card action resolution for one tick.
//!
//! Only the top card of a stack acts. Depending on what faces it, an
//! eligible card either clashes with an equally eligible opposing top card,
//! attacks an opposing top card that cannot answer this tick, breaches the
//! enemy crystal, or idles.

use smallvec::SmallVec;
use tracing::trace;

use super::crystal;
use super::log::CombatEvent;
use crate::board::Stack;
use crate::cards::CardId;
use crate::core::{GameState, PlayerId};

/// What a resolver call did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// The player has no card in the active tier.
    NoActor,
    /// The top card's cadence does not allow acting, or it already acted.
    NotEligible,
    /// Both top cards hit each other.
    Clash,
    /// The top card hit the opposing top card.
    Attack,
    /// The top card hit the enemy crystal.
    Breach,
    /// Uncontested, nothing to hit this tick.
    Idle,
    /// The match is already over.
    Skipped,
}

/// Split a tier's stacks into (owner's, opponent's).
fn sides<'a>(stacks: (&'a mut Stack, &'a mut Stack), owner: PlayerId) -> (&'a mut Stack, &'a mut Stack) {
    if owner == PlayerId::P0 {
        stacks
    } else {
        (stacks.1, stacks.0)
    }
}

/// Pop the top card of `stack` if it is destroyed.
fn remove_if_destroyed(
    stack: &mut Stack,
    column: usize,
    owner: PlayerId,
    events: &mut SmallVec<[CombatEvent; 4]>,
) {
    if stack.first().is_some_and(|c| c.is_destroyed()) {
        let card = stack.remove(0);
        events.push(CombatEvent::CardDestroyed {
            column,
            card: card.id,
            owner,
        });
    }
}

/// Resolve the action of `owner`'s top card in a column's active tier on
/// `tick`.
///
/// The column index must be in range.
pub fn resolve_card(state: &mut GameState, column_idx: usize, owner: PlayerId, tick: u32) -> Resolution {
    if state.is_game_over() {
        return Resolution::Skipped;
    }

    let opponent = owner.opponent();
    let mut events: SmallVec<[CombatEvent; 4]> = SmallVec::new();
    let mut breach: Option<(CardId, i32)> = None;

    let column = &mut state.columns[column_idx];
    let kind = column.active_tier;
    let tier = column.active_mut();

    let resolution = {
        let (mine, theirs) = sides(tier.stacks_mut(), owner);

        let Some(actor) = mine.first_mut() else {
            return Resolution::NoActor;
        };
        if !actor.can_act_on(tick) {
            return Resolution::NotEligible;
        }
        actor.last_tick_acted = Some(tick);

        match theirs.first_mut() {
            None => {
                if kind.is_enemy_base_for(owner) && actor.ticks_in_base >= 1 {
                    breach = Some((actor.id, actor.damage));
                    Resolution::Breach
                } else {
                    Resolution::Idle
                }
            }
            Some(target) if target.can_act_on(tick) => {
                let actor_damage = actor.damage;
                let opponent_damage = target.damage;
                actor.hp -= opponent_damage;
                target.hp -= actor_damage;
                target.last_tick_acted = Some(tick);
                events.push(CombatEvent::Clash {
                    column: column_idx,
                    actor: actor.id,
                    owner,
                    opponent: target.id,
                    actor_damage,
                    opponent_damage,
                    actor_hp: actor.hp,
                    opponent_hp: target.hp,
                });
                remove_if_destroyed(mine, column_idx, owner, &mut events);
                remove_if_destroyed(theirs, column_idx, opponent, &mut events);
                Resolution::Clash
            }
            Some(target) => {
                target.take_damage(actor.damage);
                events.push(CombatEvent::Attack {
                    column: column_idx,
                    attacker: actor.id,
                    owner,
                    target: target.id,
                    damage: actor.damage,
                    target_hp: target.hp,
                });
                remove_if_destroyed(theirs, column_idx, opponent, &mut events);
                Resolution::Attack
            }
        }
    };

    if tier.is_empty(opponent) && !tier.is_empty(owner) {
        column.controlling_player = Some(owner);
    }

    trace!(column = column_idx, %owner, tick, ?resolution, "card resolved");

    for event in events {
        state.log(event);
    }
    if let Some((attacker, damage)) = breach {
        crystal::apply_breach(state, column_idx, attacker, owner, damage);
    }

    resolution
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::TierKind;
    use crate::cards::{Card, CardClass, CardDefinition, DefinitionId};
    use crate::core::MatchConfig;

    fn card(id: u32, damage: i32, hp: i32, tick: u32) -> Card {
        let def = CardDefinition::new(DefinitionId::new(0), "Unit", CardClass::Tank).with_stats(damage, hp, tick, 1);
        Card::from_definition(CardId::new(id), &def)
    }

    fn state_with(p0: Vec<Card>, p1: Vec<Card>) -> GameState {
        let mut state = GameState::new(&MatchConfig::default(), 0);
        let tier = state.columns[0].active_mut();
        for c in p0 {
            tier.push(PlayerId::P0, c);
        }
        for c in p1 {
            tier.push(PlayerId::P1, c);
        }
        state
    }

    fn top_hp(state: &GameState, player: PlayerId) -> Option<i32> {
        state.columns[0].active().and_then(|t| t.top(player)).map(|c| c.hp)
    }

    #[test]
    fn test_clash_damages_both_and_marks_both() {
        let mut state = state_with(vec![card(1, 3, 5, 1)], vec![card(2, 2, 5, 1)]);

        assert_eq!(resolve_card(&mut state, 0, PlayerId::P0, 1), Resolution::Clash);
        assert_eq!(top_hp(&state, PlayerId::P0), Some(3));
        assert_eq!(top_hp(&state, PlayerId::P1), Some(2));

        // Player 1 already acted in the clash.
        assert_eq!(resolve_card(&mut state, 0, PlayerId::P1, 1), Resolution::NotEligible);
        let tier = state.columns[0].active().unwrap();
        assert_eq!(tier.top(PlayerId::P1).unwrap().last_tick_acted, Some(1));
    }

    #[test]
    fn test_clash_can_destroy_both() {
        let mut state = state_with(vec![card(1, 5, 2, 1)], vec![card(2, 5, 2, 1)]);

        resolve_card(&mut state, 0, PlayerId::P0, 1);

        let tier = state.columns[0].active().unwrap();
        assert!(tier.is_empty(PlayerId::P0));
        assert!(tier.is_empty(PlayerId::P1));
        let destroyed = state
            .events
            .iter()
            .filter(|e| matches!(e, CombatEvent::CardDestroyed { .. }))
            .count();
        assert_eq!(destroyed, 2);
    }

    #[test]
    fn test_attack_when_target_off_cadence() {
        let mut state = state_with(vec![card(1, 3, 5, 1)], vec![card(2, 4, 5, 2)]);

        assert_eq!(resolve_card(&mut state, 0, PlayerId::P0, 1), Resolution::Attack);
        assert_eq!(top_hp(&state, PlayerId::P0), Some(5));
        assert_eq!(top_hp(&state, PlayerId::P1), Some(2));
    }

    #[test]
    fn test_destroyed_top_promotes_bottom() {
        let mut state = state_with(vec![card(1, 9, 5, 1)], vec![card(2, 1, 3, 4), card(3, 1, 7, 4)]);

        resolve_card(&mut state, 0, PlayerId::P0, 1);

        let tier = state.columns[0].active().unwrap();
        assert_eq!(tier.len(PlayerId::P1), 1);
        assert_eq!(tier.top(PlayerId::P1).unwrap().id, CardId::new(3));
        assert_eq!(tier.top(PlayerId::P1).unwrap().hp, 7);
    }

    #[test]
    fn test_off_cadence_card_does_nothing() {
        let mut state = state_with(vec![card(1, 3, 5, 2)], vec![card(2, 3, 5, 2)]);

        assert_eq!(resolve_card(&mut state, 0, PlayerId::P0, 1), Resolution::NotEligible);
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_uncontested_equator_idles_and_takes_control() {
        let mut state = state_with(vec![card(1, 3, 5, 1)], vec![]);

        assert_eq!(resolve_card(&mut state, 0, PlayerId::P0, 1), Resolution::Idle);
        assert_eq!(state.columns[0].controlling_player, Some(PlayerId::P0));
        assert_eq!(state.crystals[PlayerId::P1].hp, 20);
    }

    #[test]
    fn test_breach_needs_a_prior_tick_in_base() {
        let mut state = state_with(vec![], vec![]);
        state.columns[0].active_tier = TierKind::BaseOfPlayer1;
        state.columns[0].active_mut().push(PlayerId::P0, card(1, 3, 5, 1));

        assert_eq!(resolve_card(&mut state, 0, PlayerId::P0, 1), Resolution::Idle);
        assert_eq!(state.crystals[PlayerId::P1].hp, 20);

        state.columns[0].active_mut().top_mut(PlayerId::P0).unwrap().ticks_in_base = 1;
        assert_eq!(resolve_card(&mut state, 0, PlayerId::P0, 2), Resolution::Breach);
        assert_eq!(state.crystals[PlayerId::P1].hp, 17);
    }

    #[test]
    fn test_defender_in_own_base_never_breaches() {
        let mut state = state_with(vec![], vec![]);
        state.columns[0].active_tier = TierKind::BaseOfPlayer0;
        let mut defender = card(1, 3, 5, 1);
        defender.ticks_in_base = 4;
        state.columns[0].active_mut().push(PlayerId::P0, defender);

        assert_eq!(resolve_card(&mut state, 0, PlayerId::P0, 1), Resolution::Idle);
        assert_eq!(state.crystals[PlayerId::P1].hp, 20);
        assert_eq!(state.crystals[PlayerId::P0].hp, 20);
    }
}
