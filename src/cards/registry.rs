//! Card registry and deck generation.
//!
//! The `CardRegistry` stores the card definitions available in a match and
//! turns a deck recipe into shuffled, uniquely numbered `Card`s.

use rustc_hash::FxHashMap;
use tracing::warn;

use super::definition::{CardClass, CardDefinition, DefinitionId, HoldBonus};
use super::instance::{Card, CardId};
use crate::core::GameRng;

/// How many copies of each definition go into a deck.
pub type DeckRecipe = Vec<(DefinitionId, usize)>;

/// Registry of card definitions.
///
/// ## Example
///
/// ```
/// use crystal_clash::cards::{CardClass, CardDefinition, CardRegistry, DefinitionId};
///
/// let mut registry = CardRegistry::new();
/// registry.register(
///     CardDefinition::new(DefinitionId::new(1), "Sentinel", CardClass::Tank).with_stats(1, 8, 2, 2),
/// );
///
/// assert_eq!(registry.get(DefinitionId::new(1)).unwrap().hp, 8);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    cards: FxHashMap<DefinitionId, CardDefinition>,
}

impl CardRegistry {
    pub const STEADY_DEFENDER: DefinitionId = DefinitionId(0);
    pub const SWIFT_STRIKER: DefinitionId = DefinitionId(1);
    pub const PATIENT_WARRIOR: DefinitionId = DefinitionId(2);
    pub const HEAVY_STRIKER: DefinitionId = DefinitionId(3);
    pub const DAMAGE_REFLECTOR: DefinitionId = DefinitionId(4);

    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The five-card standard catalog.
    #[must_use]
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register(
            CardDefinition::new(Self::STEADY_DEFENDER, "Steady Defender", CardClass::Tank)
                .with_stats(2, 6, 3, 3),
        );
        registry.register(
            CardDefinition::new(Self::SWIFT_STRIKER, "Swift Striker", CardClass::Assassin)
                .with_stats(3, 2, 1, 3),
        );
        registry.register(
            CardDefinition::new(Self::PATIENT_WARRIOR, "Patient Warrior", CardClass::Tank)
                .with_stats(3, 4, 3, 3)
                .with_hold_bonus(HoldBonus {
                    hp_after_rounds: 1,
                    hp_gain: 1,
                    quicken_after_rounds: 2,
                    quickened_interval: 2,
                }),
        );
        registry.register(
            CardDefinition::new(Self::HEAVY_STRIKER, "Heavy Striker", CardClass::Adc)
                .with_stats(5, 3, 5, 4),
        );
        registry.register(
            CardDefinition::new(Self::DAMAGE_REFLECTOR, "Damage Reflector", CardClass::Mage)
                .with_stats(2, 4, 3, 3),
        );
        registry
    }

    /// The standard 17-card deck recipe.
    #[must_use]
    pub fn standard_recipe() -> DeckRecipe {
        vec![
            (Self::STEADY_DEFENDER, 4),
            (Self::SWIFT_STRIKER, 4),
            (Self::PATIENT_WARRIOR, 3),
            (Self::HEAVY_STRIKER, 3),
            (Self::DAMAGE_REFLECTOR, 3),
        ]
    }

    /// Register a card definition.
    ///
    /// Panics if a definition with the same ID already exists.
    pub fn register(&mut self, card: CardDefinition) {
        if self.cards.contains_key(&card.id) {
            panic!("Card definition {} already registered", card.id);
        }
        self.cards.insert(card.id, card);
    }

    /// Get a definition by ID.
    #[must_use]
    pub fn get(&self, id: DefinitionId) -> Option<&CardDefinition> {
        self.cards.get(&id)
    }

    /// Number of registered definitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Build a shuffled deck from a recipe.
    ///
    /// Cards are numbered from `next_id`, which is advanced past the last
    /// card created so IDs stay unique across both players' decks. Recipe
    /// entries naming unknown definitions are skipped.
    pub fn build_deck(&self, recipe: &[(DefinitionId, usize)], next_id: &mut u32, rng: &mut GameRng) -> Vec<Card> {
        let mut deck = Vec::with_capacity(recipe.iter().map(|(_, n)| n).sum());

        for &(def_id, copies) in recipe {
            let Some(def) = self.get(def_id) else {
                warn!(definition = %def_id, "deck recipe names an unregistered card, skipping");
                continue;
            };
            for _ in 0..copies {
                deck.push(Card::from_definition(CardId::new(*next_id), def));
                *next_id += 1;
            }
        }

        rng.shuffle(&mut deck);
        deck
    }
}
