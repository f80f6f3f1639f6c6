//! Tiers: the combat sites within a column.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Card;
use crate::core::{PlayerId, PlayerMap};

/// Deepest stack a player may hold in one tier.
pub const MAX_STACK_DEPTH: usize = 2;

/// One player's cards in a tier. Index 0 is the top of the stack.
pub type Stack = SmallVec<[Card; MAX_STACK_DEPTH]>;

/// The three tiers of every column.
///
/// A closed enumeration instead of signed offsets: each variant names its
/// tier outright and there is no index arithmetic to get wrong.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TierKind {
    /// Neutral midpoint where every column starts.
    Equator,
    /// Player 0's base. Breaching it damages player 0's crystal.
    BaseOfPlayer0,
    /// Player 1's base. Breaching it damages player 1's crystal.
    BaseOfPlayer1,
}

impl TierKind {
    /// All tiers, in a fixed order.
    pub const ALL: [TierKind; 3] = [TierKind::Equator, TierKind::BaseOfPlayer0, TierKind::BaseOfPlayer1];

    /// The base owned by `player`.
    #[must_use]
    pub const fn base_of(player: PlayerId) -> Self {
        match player.index() {
            0 => TierKind::BaseOfPlayer0,
            _ => TierKind::BaseOfPlayer1,
        }
    }

    /// Owner of this tier if it is a base.
    #[must_use]
    pub const fn owner(self) -> Option<PlayerId> {
        match self {
            TierKind::Equator => None,
            TierKind::BaseOfPlayer0 => Some(PlayerId::P0),
            TierKind::BaseOfPlayer1 => Some(PlayerId::P1),
        }
    }

    #[must_use]
    pub const fn is_base(self) -> bool {
        !matches!(self, TierKind::Equator)
    }

    /// True when `player` is the attacker in this tier: it is the
    /// opponent's base.
    #[must_use]
    pub fn is_enemy_base_for(self, player: PlayerId) -> bool {
        self.owner() == Some(player.opponent())
    }
}

impl std::fmt::Display for TierKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TierKind::Equator => f.write_str("Equator"),
            TierKind::BaseOfPlayer0 => f.write_str("P0 base"),
            TierKind::BaseOfPlayer1 => f.write_str("P1 base"),
        }
    }
}

/// A combat site holding one stack per player.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tier {
    stacks: PlayerMap<Stack>,
}

impl Tier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A player's stack, top first.
    #[must_use]
    pub fn stack(&self, player: PlayerId) -> &[Card] {
        &self.stacks[player]
    }

    pub fn stack_mut(&mut self, player: PlayerId) -> &mut Stack {
        &mut self.stacks[player]
    }

    /// Both stacks at once, player 0 first.
    pub fn stacks_mut(&mut self) -> (&mut Stack, &mut Stack) {
        self.stacks.both_mut()
    }

    #[must_use]
    pub fn len(&self, player: PlayerId) -> usize {
        self.stacks[player].len()
    }

    #[must_use]
    pub fn is_empty(&self, player: PlayerId) -> bool {
        self.stacks[player].is_empty()
    }

    /// The only card of a stack that can act or be targeted.
    #[must_use]
    pub fn top(&self, player: PlayerId) -> Option<&Card> {
        self.stacks[player].first()
    }

    pub fn top_mut(&mut self, player: PlayerId) -> Option<&mut Card> {
        self.stacks[player].first_mut()
    }

    /// Place a card beneath the existing ones. Returns its index.
    pub fn push(&mut self, player: PlayerId, card: Card) -> usize {
        let stack = &mut self.stacks[player];
        stack.push(card);
        stack.len() - 1
    }

    /// Remove the top card, promoting the one beneath it.
    pub fn pop_top(&mut self, player: PlayerId) -> Option<Card> {
        let stack = &mut self.stacks[player];
        if stack.is_empty() {
            None
        } else {
            Some(stack.remove(0))
        }
    }

    /// Take every card of a player out of this tier, preserving order.
    pub fn take_all(&mut self, player: PlayerId) -> Stack {
        std::mem::take(&mut self.stacks[player])
    }

    /// Every card in the tier, player 0's first.
    pub fn cards_mut(&mut self) -> impl Iterator<Item = &mut Card> {
        let (a, b) = self.stacks.both_mut();
        a.iter_mut().chain(b.iter_mut())
    }
}
