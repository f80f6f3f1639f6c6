//! Card definitions - static card data.
//!
//! `CardDefinition` holds the printed stats of a card type. Runtime state
//! (current hp, tick bookkeeping, position) lives on `Card`.

use serde::{Deserialize, Serialize};

/// Identifier of a card definition (the "type" of card, e.g. Swift Striker),
/// not of a specific card in a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DefinitionId(pub u32);

impl DefinitionId {
    /// Create a new definition ID.
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

impl std::fmt::Display for DefinitionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Def({})", self.0)
    }
}

/// Class tag of a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardClass {
    Tank,
    Adc,
    Support,
    Assassin,
    Mage,
}

impl std::fmt::Display for CardClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CardClass::Tank => "Tank",
            CardClass::Adc => "ADC",
            CardClass::Support => "Support",
            CardClass::Assassin => "Assassin",
            CardClass::Mage => "Mage",
        };
        f.write_str(name)
    }
}

/// Bonus a card earns for surviving on the board across round ends.
///
/// After `hp_after_rounds` held rounds the card gains `hp_gain` hp; after
/// `quicken_after_rounds` its tick interval becomes `quickened_interval`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HoldBonus {
    pub hp_after_rounds: u32,
    pub hp_gain: i32,
    pub quicken_after_rounds: u32,
    pub quickened_interval: u32,
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use crystal_clash::cards::{CardClass, CardDefinition, DefinitionId};
///
/// let striker = CardDefinition::new(DefinitionId::new(1), "Swift Striker", CardClass::Assassin)
///     .with_stats(3, 2, 1, 3);
///
/// assert_eq!(striker.damage, 3);
/// assert_eq!(striker.tick_interval, 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Unique identifier for this definition.
    pub id: DefinitionId,

    /// Card name (for display and the combat log).
    pub name: String,

    /// Class tag.
    pub class: CardClass,

    /// Damage dealt per action.
    pub damage: i32,

    /// Starting hp.
    pub hp: i32,

    /// The card acts on ticks divisible by this interval.
    pub tick_interval: u32,

    /// AP cost to deploy.
    pub cost: i32,

    /// Optional reward for holding the board.
    pub hold_bonus: Option<HoldBonus>,
}

impl CardDefinition {
    /// Create a definition with zeroed stats and a tick interval of 1.
    #[must_use]
    pub fn new(id: DefinitionId, name: impl Into<String>, class: CardClass) -> Self {
        Self {
            id,
            name: name.into(),
            class,
            damage: 0,
            hp: 1,
            tick_interval: 1,
            cost: 0,
            hold_bonus: None,
        }
    }

    /// Set damage, hp, tick interval and cost (builder pattern).
    ///
    /// A tick interval of 0 is raised to 1 so the cadence check is total.
    #[must_use]
    pub fn with_stats(mut self, damage: i32, hp: i32, tick_interval: u32, cost: i32) -> Self {
        self.damage = damage.max(0);
        self.hp = hp;
        self.tick_interval = tick_interval.max(1);
        self.cost = cost;
        self
    }

    /// Attach a hold bonus (builder pattern).
    #[must_use]
    pub fn with_hold_bonus(mut self, bonus: HoldBonus) -> Self {
        self.hold_bonus = Some(bonus);
        self
    }
}
