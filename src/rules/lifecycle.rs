//! End-of-round bookkeeping.

use tracing::debug;

use crate::core::{GameState, MatchConfig, RoundPhase};

/// Reset both players and every board card for the next round.
///
/// Run after lane progression. Drawing from an exhausted deck draws fewer
/// cards; it is not an error.
pub fn end_round(state: &mut GameState, config: &MatchConfig) {
    for (player, ps) in state.players.iter_mut() {
        ps.ap = config.initial_ap;
        ps.committed = false;
        if ps.hand.len() < config.hand_limit {
            let drawn = (0..config.draw_per_round).filter_map(|_| ps.draw()).count();
            debug!(%player, drawn, hand = ps.hand.len(), "round draw");
        }
    }

    for column in &mut state.columns {
        for (_, tier) in column.tiers_mut() {
            for card in tier.cards_mut() {
                card.last_tick_acted = None;
                card.record_round_held();
            }
        }
    }

    state.current_round += 1;
    state.round_phase = RoundPhase::Playing;
    state.current_tick = 1;
    state.is_simulating = false;
    debug!(round = state.current_round, "round started");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, CardClass, CardDefinition, CardId, DefinitionId};
    use crate::core::PlayerId;

    fn grunt(id: u32) -> Card {
        let def = CardDefinition::new(DefinitionId::new(0), "Grunt", CardClass::Tank).with_stats(1, 3, 1, 1);
        Card::from_definition(CardId::new(id), &def)
    }

    #[test]
    fn test_resets_players_and_draws() {
        let config = MatchConfig::default();
        let mut state = GameState::new(&config, 0);
        state.round_phase = RoundPhase::Combat;
        state.current_tick = 6;
        for (i, player) in PlayerId::all().enumerate() {
            let ps = state.player_mut(player);
            ps.ap = 1;
            ps.committed = true;
            for n in 0..3 {
                ps.deck.push_back(grunt((i * 10 + n) as u32));
            }
        }

        end_round(&mut state, &config);

        for player in PlayerId::all() {
            let ps = state.player(player);
            assert_eq!(ps.ap, 20);
            assert!(!ps.committed);
            assert_eq!(ps.hand.len(), 2);
            assert_eq!(ps.deck.len(), 1);
        }
        assert_eq!(state.current_round, 2);
        assert_eq!(state.current_tick, 1);
        assert_eq!(state.round_phase, RoundPhase::Playing);
    }

    #[test]
    fn test_full_hand_skips_draw() {
        let config = MatchConfig::default();
        let mut state = GameState::new(&config, 0);
        let ps = state.player_mut(PlayerId::P0);
        for n in 0..8 {
            ps.hand.push_back(grunt(n));
        }
        ps.deck.push_back(grunt(99));

        end_round(&mut state, &config);

        assert_eq!(state.player(PlayerId::P0).hand.len(), 8);
        assert_eq!(state.player(PlayerId::P0).deck.len(), 1);
    }

    #[test]
    fn test_exhausted_deck_draws_what_it_can() {
        let config = MatchConfig::default();
        let mut state = GameState::new(&config, 0);
        state.player_mut(PlayerId::P1).deck.push_back(grunt(1));

        end_round(&mut state, &config);

        assert_eq!(state.player(PlayerId::P1).hand.len(), 1);
        assert!(state.player(PlayerId::P0).hand.is_empty());
    }

    #[test]
    fn test_board_cards_forget_last_tick() {
        let config = MatchConfig::default();
        let mut state = GameState::new(&config, 0);
        let mut card = grunt(1);
        card.last_tick_acted = Some(5);
        state.columns[0].active_mut().push(PlayerId::P0, card);

        end_round(&mut state, &config);

        let top = state.columns[0].active().unwrap().top(PlayerId::P0).unwrap();
        assert_eq!(top.last_tick_acted, None);
        assert_eq!(top.rounds_held, 1);
    }
}
