//! Deployment moves: play, discard and withdraw.
//!
//! Each handler checks every precondition before touching the state, so a
//! rejected move never leaves a partial mutation behind.

use tracing::debug;

use crate::cards::{CardId, StackPosition};
use crate::core::{GameState, MatchConfig, MoveError, PlayerId, RoundPhase};

/// Shared precondition of the board moves: playing phase, not committed.
fn require_deploying(state: &GameState, player: PlayerId) -> Result<(), MoveError> {
    if state.round_phase != RoundPhase::Playing {
        return Err(MoveError::WrongPhase(state.round_phase.name()));
    }
    if state.player(player).committed {
        return Err(MoveError::AlreadyCommitted(player));
    }
    Ok(())
}

fn require_column(state: &GameState, column: usize) -> Result<(), MoveError> {
    if column < state.columns.len() {
        Ok(())
    } else {
        Err(MoveError::NoSuchColumn(column))
    }
}

/// Deploy a card from hand onto the active tier of `column`.
pub fn play_card(
    state: &mut GameState,
    config: &MatchConfig,
    player: PlayerId,
    card: CardId,
    column: usize,
) -> Result<(), MoveError> {
    require_deploying(state, player)?;
    let hand_idx = state
        .player(player)
        .hand_index(card)
        .ok_or(MoveError::CardNotInHand(card, player))?;
    require_column(state, column)?;
    if state.columns[column].active_len(player) >= config.stack_limit {
        return Err(MoveError::StackFull { player, column });
    }
    let cost = state.player(player).hand[hand_idx].cost;
    let available = state.player(player).ap;
    if available < cost {
        return Err(MoveError::InsufficientAp { cost, available });
    }

    let owner = state.player_mut(player);
    let mut deployed = owner.hand.remove(hand_idx);
    owner.ap -= cost;

    let tier = state.columns[column].active_mut();
    deployed.initial_position = Some(StackPosition::from_index(tier.len(player)));
    tier.push(player, deployed);

    debug!(%player, %card, column, cost, "card deployed");
    Ok(())
}

/// Discard a card from hand.
pub fn remove_card(state: &mut GameState, player: PlayerId, card: CardId) -> Result<(), MoveError> {
    require_deploying(state, player)?;
    let hand_idx = state
        .player(player)
        .hand_index(card)
        .ok_or(MoveError::CardNotInHand(card, player))?;

    let owner = state.player_mut(player);
    let discarded = owner.hand.remove(hand_idx);
    owner.discard.push_back(discarded);

    debug!(%player, %card, "card discarded");
    Ok(())
}

/// Take the top card of `player`'s stack in `column` back to hand and
/// refund its cost.
pub fn remove_card_from_board(state: &mut GameState, player: PlayerId, column: usize) -> Result<(), MoveError> {
    require_deploying(state, player)?;
    require_column(state, column)?;
    let Some(mut card) = state.columns[column].active_mut().pop_top(player) else {
        return Err(MoveError::EmptyStack { player, column });
    };

    card.reset_for_hand();
    let id = card.id;
    let refund = card.cost;
    let owner = state.player_mut(player);
    owner.ap += refund;
    owner.hand.push_back(card);

    debug!(%player, card = %id, column, refund, "card withdrawn");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardClass, CardDefinition, DefinitionId};

    fn setup() -> (GameState, MatchConfig, CardId, CardId, CardId) {
        let config = MatchConfig::default();
        let mut state = GameState::new(&config, 0);
        let def = CardDefinition::new(DefinitionId::new(0), "Grunt", CardClass::Tank).with_stats(2, 4, 1, 3);
        let a = state.spawn_card(PlayerId::P0, &def);
        let b = state.spawn_card(PlayerId::P0, &def);
        let c = state.spawn_card(PlayerId::P0, &def);
        (state, config, a, b, c)
    }

    #[test]
    fn test_play_card_stacks_top_then_bottom() {
        let (mut state, config, a, b, _) = setup();

        play_card(&mut state, &config, PlayerId::P0, a, 1).unwrap();
        play_card(&mut state, &config, PlayerId::P0, b, 1).unwrap();

        let tier = state.columns[1].active().unwrap();
        assert_eq!(tier.stack(PlayerId::P0)[0].id, a);
        assert_eq!(tier.stack(PlayerId::P0)[0].initial_position, Some(StackPosition::Top));
        assert_eq!(tier.stack(PlayerId::P0)[1].initial_position, Some(StackPosition::Bottom));
        assert_eq!(state.player(PlayerId::P0).ap, 14);
        assert_eq!(state.player(PlayerId::P0).hand.len(), 1);
    }

    #[test]
    fn test_third_card_rejected() {
        let (mut state, config, a, b, c) = setup();
        play_card(&mut state, &config, PlayerId::P0, a, 0).unwrap();
        play_card(&mut state, &config, PlayerId::P0, b, 0).unwrap();
        let before = state.clone();

        assert_eq!(
            play_card(&mut state, &config, PlayerId::P0, c, 0),
            Err(MoveError::StackFull { player: PlayerId::P0, column: 0 })
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_insufficient_ap() {
        let (mut state, config, a, _, _) = setup();
        state.player_mut(PlayerId::P0).ap = 2;

        assert_eq!(
            play_card(&mut state, &config, PlayerId::P0, a, 0),
            Err(MoveError::InsufficientAp { cost: 3, available: 2 })
        );
    }

    #[test]
    fn test_withdraw_refunds_and_promotes() {
        let (mut state, config, a, b, _) = setup();
        play_card(&mut state, &config, PlayerId::P0, a, 2).unwrap();
        play_card(&mut state, &config, PlayerId::P0, b, 2).unwrap();

        remove_card_from_board(&mut state, PlayerId::P0, 2).unwrap();

        let player = state.player(PlayerId::P0);
        assert_eq!(player.ap, 17);
        assert!(player.hand_index(a).is_some());
        assert_eq!(player.hand[player.hand_index(a).unwrap()].initial_position, None);
        let tier = state.columns[2].active().unwrap();
        assert_eq!(tier.top(PlayerId::P0).unwrap().id, b);
    }

    #[test]
    fn test_withdraw_from_empty_stack() {
        let (mut state, _, _, _, _) = setup();
        assert_eq!(
            remove_card_from_board(&mut state, PlayerId::P0, 0),
            Err(MoveError::EmptyStack { player: PlayerId::P0, column: 0 })
        );
        assert_eq!(
            remove_card_from_board(&mut state, PlayerId::P0, 7),
            Err(MoveError::NoSuchColumn(7))
        );
    }

    #[test]
    fn test_discard() {
        let (mut state, _, a, _, _) = setup();

        remove_card(&mut state, PlayerId::P0, a).unwrap();

        let player = state.player(PlayerId::P0);
        assert_eq!(player.hand.len(), 2);
        assert_eq!(player.discard.len(), 1);
        assert_eq!(
            remove_card(&mut state, PlayerId::P0, a),
            Err(MoveError::CardNotInHand(a, PlayerId::P0))
        );
    }

    #[test]
    fn test_committed_player_cannot_deploy() {
        let (mut state, config, a, _, _) = setup();
        state.player_mut(PlayerId::P0).committed = true;

        assert_eq!(
            play_card(&mut state, &config, PlayerId::P0, a, 0),
            Err(MoveError::AlreadyCommitted(PlayerId::P0))
        );
        assert_eq!(
            remove_card(&mut state, PlayerId::P0, a),
            Err(MoveError::AlreadyCommitted(PlayerId::P0))
        );
    }
}
