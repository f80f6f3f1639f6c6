//! Columns (lanes) and crystals.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::tier::{Tier, TierKind};
use crate::core::PlayerId;

/// One of the parallel lanes.
///
/// Tiers are created on first access, so a column restored from a partial
/// snapshot heals itself instead of failing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    tiers: FxHashMap<TierKind, Tier>,

    /// Tier where combat currently happens. Changes only at round end.
    pub active_tier: TierKind,

    /// Who last held the active tier uncontested.
    pub controlling_player: Option<PlayerId>,
}

impl Default for Column {
    fn default() -> Self {
        Self::new()
    }
}

impl Column {
    /// A fresh column: empty tiers, combat at the Equator.
    #[must_use]
    pub fn new() -> Self {
        let tiers = TierKind::ALL.iter().map(|&kind| (kind, Tier::new())).collect();
        Self {
            tiers,
            active_tier: TierKind::Equator,
            controlling_player: None,
        }
    }

    /// Read a tier. `None` only for a tier that was never materialized.
    #[must_use]
    pub fn tier(&self, kind: TierKind) -> Option<&Tier> {
        self.tiers.get(&kind)
    }

    /// Mutable access to a tier, creating it empty if missing.
    pub fn tier_mut(&mut self, kind: TierKind) -> &mut Tier {
        self.tiers.entry(kind).or_default()
    }

    /// The tier currently hosting combat.
    #[must_use]
    pub fn active(&self) -> Option<&Tier> {
        self.tier(self.active_tier)
    }

    pub fn active_mut(&mut self) -> &mut Tier {
        let kind = self.active_tier;
        self.tier_mut(kind)
    }

    /// Number of cards `player` has in the active tier.
    #[must_use]
    pub fn active_len(&self, player: PlayerId) -> usize {
        self.active().map_or(0, |t| t.len(player))
    }

    /// Iterate every materialized tier mutably.
    pub fn tiers_mut(&mut self) -> impl Iterator<Item = (TierKind, &mut Tier)> {
        self.tiers.iter_mut().map(|(k, t)| (*k, t))
    }
}

/// A player's crystal. The match ends the moment one reaches zero.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Crystal {
    pub hp: i32,
    pub last_damaged_by: Option<PlayerId>,
}

impl Crystal {
    #[must_use]
    pub fn new(hp: i32) -> Self {
        Self {
            hp,
            last_damaged_by: None,
        }
    }

    /// Apply breach damage. Negative amounts are ignored so hp never rises.
    /// Returns true if the crystal is destroyed.
    pub fn damage(&mut self, amount: i32, by: PlayerId) -> bool {
        self.hp -= amount.max(0);
        self.last_damaged_by = Some(by);
        self.is_destroyed()
    }

    #[must_use]
    pub fn is_destroyed(&self) -> bool {
        self.hp <= 0
    }
}
