//! The lane-battle game: setup and move dispatch.

use tracing::debug;

use super::commit;
use super::engine::{MatchOutcome, RulesEngine};
use super::lifecycle;
use super::moves;
use crate::cards::{CardRegistry, DeckRecipe};
use crate::combat;
use crate::core::{GameState, MatchConfig, Move, MoveError, MoveRecord, PlayerId, RoundPhase};

/// Game rules plus the catalog decks are built from.
#[derive(Clone, Debug)]
pub struct LaneGame {
    config: MatchConfig,
    registry: CardRegistry,
    recipe: DeckRecipe,
}

/// Builder for creating a `LaneGame`.
///
/// ```
/// use crystal_clash::core::PlayerId;
/// use crystal_clash::rules::{LaneGameBuilder, RulesEngine};
///
/// let (game, state) = LaneGameBuilder::new().starting_hand_size(4).build(42);
///
/// assert_eq!(state.player(PlayerId::P0).hand.len(), 4);
/// assert_eq!(state.player(PlayerId::P0).deck.len(), 13);
/// assert_eq!(game.config().starting_hand_size, 4);
/// ```
pub struct LaneGameBuilder {
    config: MatchConfig,
    registry: CardRegistry,
    recipe: DeckRecipe,
}

impl Default for LaneGameBuilder {
    fn default() -> Self {
        Self {
            config: MatchConfig::default(),
            registry: CardRegistry::standard(),
            recipe: CardRegistry::standard_recipe(),
        }
    }
}

impl LaneGameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration. Out-of-range values are clamped.
    pub fn config(mut self, config: MatchConfig) -> Self {
        self.config = config.validated();
        self
    }

    pub fn crystal_hp(mut self, hp: i32) -> Self {
        self.config.crystal_hp = hp;
        self
    }

    pub fn initial_ap(mut self, ap: i32) -> Self {
        self.config.initial_ap = ap;
        self
    }

    pub fn starting_hand_size(mut self, size: usize) -> Self {
        self.config.starting_hand_size = size;
        self
    }

    pub fn registry(mut self, registry: CardRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Deck contents for both players. An empty recipe deals no cards,
    /// which suits hand-built scenarios.
    pub fn recipe(mut self, recipe: DeckRecipe) -> Self {
        self.recipe = recipe;
        self
    }

    /// Build the game and initial state.
    pub fn build(self, seed: u64) -> (LaneGame, GameState) {
        let config = self.config.validated();
        let mut state = GameState::new(&config, seed);

        let mut deck_rng = state.rng.for_context("deck");
        for player in PlayerId::all() {
            let deck = self
                .registry
                .build_deck(&self.recipe, state.card_id_counter(), &mut deck_rng);
            let ps = state.player_mut(player);
            ps.deck = deck.into_iter().collect();
            for _ in 0..config.starting_hand_size {
                if ps.draw().is_none() {
                    break;
                }
            }
        }

        debug!(seed, columns = config.column_count, "match created");

        let game = LaneGame {
            config,
            registry: self.registry,
            recipe: self.recipe,
        };
        (game, state)
    }
}

impl LaneGame {
    /// Get the card registry.
    pub fn registry(&self) -> &CardRegistry {
        &self.registry
    }

    /// Get the deck recipe.
    pub fn recipe(&self) -> &DeckRecipe {
        &self.recipe
    }

    /// Drain every remaining combat tick. Equivalent to submitting
    /// `ProcessTick` until it fails, but records no history.
    pub fn run_combat(&self, state: &mut GameState) -> Result<u32, MoveError> {
        if state.is_game_over() {
            return Err(MoveError::GameOver);
        }
        combat::run_to_completion(state, &self.config)
    }

    fn dispatch(&self, state: &mut GameState, player: PlayerId, mv: Move) -> Result<(), MoveError> {
        match mv {
            Move::PlayCard { card, column } => moves::play_card(state, &self.config, player, card, column),
            Move::RemoveCard { card } => moves::remove_card(state, player, card),
            Move::RemoveCardFromBoard { column } => moves::remove_card_from_board(state, player, column),
            Move::CommitPlayer => commit::commit(state, player),
            Move::UncommitPlayer => commit::uncommit(state, player),
            Move::SimulateRound => {
                if state.round_phase != RoundPhase::Playing {
                    return Err(MoveError::WrongPhase(state.round_phase.name()));
                }
                if commit::try_simulate(state) {
                    Ok(())
                } else {
                    Err(MoveError::NotAllCommitted)
                }
            }
            Move::ProcessTick => combat::process_tick(state, &self.config),
            Move::EndRound => {
                if state.round_phase != RoundPhase::Combat {
                    return Err(MoveError::WrongPhase(state.round_phase.name()));
                }
                if state.is_simulating {
                    return Err(MoveError::StillSimulating);
                }
                combat::progress_lanes(state);
                lifecycle::end_round(state, &self.config);
                Ok(())
            }
        }
    }
}

impl RulesEngine for LaneGame {
    fn config(&self) -> &MatchConfig {
        &self.config
    }

    fn legal_moves(&self, state: &GameState, player: PlayerId) -> Vec<Move> {
        if state.is_game_over() {
            return vec![];
        }

        let mut legal = Vec::new();
        let ps = state.player(player);

        match state.round_phase {
            RoundPhase::Playing => {
                legal.push(Move::UncommitPlayer);
                if !ps.committed {
                    for card in &ps.hand {
                        if card.cost > ps.ap {
                            continue;
                        }
                        for (column, col) in state.columns.iter().enumerate() {
                            if col.active_len(player) < self.config.stack_limit {
                                legal.push(Move::PlayCard { card: card.id, column });
                            }
                        }
                    }
                    for card in &ps.hand {
                        legal.push(Move::RemoveCard { card: card.id });
                    }
                    for (column, col) in state.columns.iter().enumerate() {
                        if col.active_len(player) > 0 {
                            legal.push(Move::RemoveCardFromBoard { column });
                        }
                    }
                    legal.push(Move::CommitPlayer);
                }
                if commit::all_committed(state) {
                    legal.push(Move::SimulateRound);
                }
            }
            RoundPhase::Combat => {
                if state.is_simulating {
                    legal.push(Move::ProcessTick);
                } else {
                    legal.push(Move::EndRound);
                }
            }
        }

        legal
    }

    fn apply_move(&self, state: &mut GameState, player: PlayerId, mv: Move) -> Result<Option<MatchOutcome>, MoveError> {
        if state.is_game_over() {
            return Err(MoveError::GameOver);
        }

        let round = state.current_round;
        if let Err(err) = self.dispatch(state, player, mv) {
            debug!(%player, %mv, %err, "move rejected");
            return Err(err);
        }

        let sequence = state.history.len() as u32;
        state.history.push_back(MoveRecord {
            player,
            mv,
            round,
            sequence,
        });
        debug!(%player, %mv, sequence, "move applied");

        Ok(state.outcome)
    }
}
