//! Cards in play - runtime card state.
//!
//! A `Card` is created once when the deck is generated and then only moves
//! between containers (deck, hand, discard pile, a tier's stack). Whoever
//! holds the value owns the card; moving it is a move in the Rust sense.

use serde::{Deserialize, Serialize};

use super::definition::{CardClass, CardDefinition, DefinitionId, HoldBonus};

/// Identifier of a card, unique within a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card#{}", self.0)
    }
}

/// Where in its stack a card was placed when deployed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StackPosition {
    Top,
    Bottom,
}

impl StackPosition {
    /// Position for a card landing at `index` of a stack.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        if index == 0 {
            StackPosition::Top
        } else {
            StackPosition::Bottom
        }
    }
}

/// A card in a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub definition: DefinitionId,
    pub name: String,
    pub class: CardClass,
    pub damage: i32,
    pub hp: i32,
    pub tick_interval: u32,
    pub cost: i32,

    /// Tick on which the card last acted this round.
    pub last_tick_acted: Option<u32>,

    /// Stack position assigned at deployment.
    pub initial_position: Option<StackPosition>,

    /// Ticks spent standing in a base tier since entering it.
    pub ticks_in_base: u32,

    /// Round ends survived on the board.
    pub rounds_held: u32,

    pub hold_bonus: Option<HoldBonus>,
}

impl Card {
    /// Instantiate a definition.
    #[must_use]
    pub fn from_definition(id: CardId, def: &CardDefinition) -> Self {
        Self {
            id,
            definition: def.id,
            name: def.name.clone(),
            class: def.class,
            damage: def.damage,
            hp: def.hp,
            tick_interval: def.tick_interval.max(1),
            cost: def.cost,
            last_tick_acted: None,
            initial_position: None,
            ticks_in_base: 0,
            rounds_held: 0,
            hold_bonus: def.hold_bonus,
        }
    }

    /// Whether the cadence lets this card act on `tick` and it has not yet.
    ///
    /// ```
    /// use crystal_clash::cards::{Card, CardClass, CardDefinition, CardId, DefinitionId};
    ///
    /// let def = CardDefinition::new(DefinitionId::new(0), "Slow", CardClass::Tank)
    ///     .with_stats(1, 5, 3, 1);
    /// let mut card = Card::from_definition(CardId::new(0), &def);
    ///
    /// assert!(!card.can_act_on(2));
    /// assert!(card.can_act_on(3));
    /// card.last_tick_acted = Some(3);
    /// assert!(!card.can_act_on(3));
    /// ```
    #[must_use]
    pub fn can_act_on(&self, tick: u32) -> bool {
        tick % self.tick_interval == 0 && self.last_tick_acted != Some(tick)
    }

    /// Subtract damage. Returns true if the card is now destroyed.
    pub fn take_damage(&mut self, amount: i32) -> bool {
        self.hp -= amount;
        self.is_destroyed()
    }

    /// A card with hp at or below zero is removed from play.
    #[must_use]
    pub fn is_destroyed(&self) -> bool {
        self.hp <= 0
    }

    /// Clear board bookkeeping when the card returns to a hand.
    ///
    /// `rounds_held` survives, along with any hold bonus already applied,
    /// so a redeployed card never earns the same bonus twice.
    pub fn reset_for_hand(&mut self) {
        self.last_tick_acted = None;
        self.initial_position = None;
        self.ticks_in_base = 0;
    }

    /// Count one more held round and apply any hold bonus that unlocks.
    pub fn record_round_held(&mut self) {
        self.rounds_held += 1;
        let Some(bonus) = self.hold_bonus else {
            return;
        };
        if self.rounds_held == bonus.hp_after_rounds {
            self.hp += bonus.hp_gain;
        }
        if self.rounds_held == bonus.quicken_after_rounds {
            self.tick_interval = bonus.quickened_interval.max(1);
        }
    }
}
