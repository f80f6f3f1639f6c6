//! Game state: the authoritative snapshot every operation reads and mutates.
//!
//! ## PlayerState
//!
//! Per-player hand, deck, discard pile, action points and commit flag.
//!
//! ## GameState
//!
//! Both players, the columns, both crystals, round/tick counters, the
//! combat log, the match outcome and the RNG.
//!
//! Containers use `im` persistent structures so cloning a state for
//! playback or bot lookahead is O(1).

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::MoveRecord;
use super::error::SnapshotError;
use super::player::{PlayerId, PlayerMap};
use super::rng::GameRng;
use super::MatchConfig;
use crate::board::{Column, Crystal};
use crate::cards::{Card, CardDefinition, CardId};
use crate::combat::CombatEvent;
use crate::rules::MatchOutcome;

/// Which half of the round the match is in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Players deploy and withdraw cards.
    Playing,
    /// Ticks are being simulated, or waiting for `endRound`.
    Combat,
}

impl RoundPhase {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            RoundPhase::Playing => "playing",
            RoundPhase::Combat => "combat",
        }
    }
}

/// One player's private resources.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    /// Cards in hand, in the order they arrived.
    pub hand: Vector<Card>,

    /// Draw pile; the top is the back.
    pub deck: Vector<Card>,

    /// Cards discarded from hand.
    pub discard: Vector<Card>,

    /// Action points left this round.
    pub ap: i32,

    /// Whether the player has finished deploying.
    pub committed: bool,
}

impl PlayerState {
    /// Position of a card in hand.
    #[must_use]
    pub fn hand_index(&self, card: CardId) -> Option<usize> {
        self.hand.iter().position(|c| c.id == card)
    }

    /// Move the top card of the deck into the hand.
    pub fn draw(&mut self) -> Option<CardId> {
        let card = self.deck.pop_back()?;
        let id = card.id;
        self.hand.push_back(card);
        Some(id)
    }
}

/// Full match state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub players: PlayerMap<PlayerState>,

    pub columns: Vec<Column>,

    pub crystals: PlayerMap<Crystal>,

    /// Round number (starts at 1).
    pub current_round: u32,

    /// Tick about to be processed (1-based).
    pub current_tick: u32,

    pub round_phase: RoundPhase,

    /// True from a successful simulate until ticks run out or the match ends.
    pub is_simulating: bool,

    /// Human-readable combat log, append-only.
    pub combat_log: Vector<String>,

    /// Typed events, one per `combat_log` line.
    pub events: Vector<CombatEvent>,

    /// Set once, when a crystal falls.
    pub outcome: Option<MatchOutcome>,

    /// Every accepted move, in order.
    pub history: Vector<MoveRecord>,

    /// Deterministic RNG (deck shuffles).
    pub rng: GameRng,

    next_card_id: u32,
}

impl GameState {
    /// Create an empty match: no cards dealt yet, full crystals and AP.
    #[must_use]
    pub fn new(config: &MatchConfig, seed: u64) -> Self {
        Self {
            players: PlayerMap::new(|_| PlayerState {
                ap: config.initial_ap,
                ..PlayerState::default()
            }),
            columns: (0..config.column_count).map(|_| Column::new()).collect(),
            crystals: PlayerMap::new(|_| Crystal::new(config.crystal_hp)),
            current_round: 1,
            current_tick: 1,
            round_phase: RoundPhase::Playing,
            is_simulating: false,
            combat_log: Vector::new(),
            events: Vector::new(),
            outcome: None,
            history: Vector::new(),
            rng: GameRng::new(seed),
            next_card_id: 0,
        }
    }

    #[must_use]
    pub fn player(&self, player: PlayerId) -> &PlayerState {
        &self.players[player]
    }

    pub fn player_mut(&mut self, player: PlayerId) -> &mut PlayerState {
        &mut self.players[player]
    }

    #[must_use]
    pub fn column(&self, index: usize) -> Option<&Column> {
        self.columns.get(index)
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.outcome.is_some()
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.outcome.map(|o| o.winner)
    }

    /// Append an event to the combat log.
    pub fn log(&mut self, event: CombatEvent) {
        self.combat_log.push_back(event.to_string());
        self.events.push_back(event);
    }

    /// Mutable access to the next card ID counter, for deck generation.
    pub fn card_id_counter(&mut self) -> &mut u32 {
        &mut self.next_card_id
    }

    /// Create a card from a definition directly in a player's hand.
    pub fn spawn_card(&mut self, player: PlayerId, def: &CardDefinition) -> CardId {
        let id = CardId::new(self.next_card_id);
        self.next_card_id += 1;
        self.players[player].hand.push_back(Card::from_definition(id, def));
        id
    }

    /// Find a card anywhere on the board: (column, owner, stack index).
    #[must_use]
    pub fn locate_on_board(&self, card: CardId) -> Option<(usize, PlayerId, usize)> {
        self.columns.iter().enumerate().find_map(|(ci, column)| {
            let tier = column.active()?;
            PlayerId::all().find_map(|p| {
                tier.stack(p)
                    .iter()
                    .position(|c| c.id == card)
                    .map(|idx| (ci, p, idx))
            })
        })
    }

    /// Encode the whole state with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(bincode::serialize(self)?)
    }

    /// Restore a state encoded by [`GameState::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        Ok(bincode::deserialize(bytes)?)
    }
}
