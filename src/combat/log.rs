//! Combat log events.
//!
//! Every observable combat step is a `CombatEvent`. The state stores each
//! event alongside its rendered line, in resolution order, so two runs from
//! the same state can be compared event by event.

use serde::{Deserialize, Serialize};

use crate::board::TierKind;
use crate::cards::CardId;
use crate::core::PlayerId;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CombatEvent {
    /// Combat for a round began.
    RoundStarted { round: u32 },

    /// Marker written before a tick resolves.
    TickStarted { tick: u32 },

    /// One card hit the opposing top card.
    Attack {
        column: usize,
        attacker: CardId,
        owner: PlayerId,
        target: CardId,
        damage: i32,
        target_hp: i32,
    },

    /// Two top cards hit each other in the same step.
    Clash {
        column: usize,
        actor: CardId,
        owner: PlayerId,
        opponent: CardId,
        actor_damage: i32,
        opponent_damage: i32,
        actor_hp: i32,
        opponent_hp: i32,
    },

    /// A card dropped to zero hp and left its stack.
    CardDestroyed { column: usize, card: CardId, owner: PlayerId },

    /// An unopposed card in the enemy base hit the crystal.
    CrystalHit {
        column: usize,
        attacker: CardId,
        owner: PlayerId,
        damage: i32,
        crystal_hp: i32,
    },

    /// A crystal fell.
    MatchWon { winner: PlayerId },

    /// The Equator was won and its survivors advanced into a base.
    LanePushed { column: usize, winner: PlayerId, into: TierKind, cards: usize },

    /// A pushed card was halved to nothing.
    CardLostInPush { column: usize, card: CardId, owner: PlayerId },

    /// A defender cleared its base and returned to the Equator.
    LaneRepelled { column: usize, defender: PlayerId, cards: usize },
}

impl std::fmt::Display for CombatEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CombatEvent::RoundStarted { round } => write!(f, "=== Round {round} combat ==="),
            CombatEvent::TickStarted { tick } => write!(f, "--- Tick {tick} ---"),
            CombatEvent::Attack { column, attacker, owner, target, damage, target_hp } => write!(
                f,
                "Column {}: {attacker} ({owner}) attacks {target} for {damage}, target hp {target_hp}",
                column + 1
            ),
            CombatEvent::Clash {
                column,
                actor,
                owner,
                opponent,
                actor_damage,
                opponent_damage,
                actor_hp,
                opponent_hp,
            } => write!(
                f,
                "Column {}: {actor} ({owner}) clashes with {opponent}, dealing {actor_damage} and taking {opponent_damage} (hp {actor_hp} / {opponent_hp})",
                column + 1
            ),
            CombatEvent::CardDestroyed { column, card, owner } => {
                write!(f, "Column {}: {card} ({owner}) is destroyed", column + 1)
            }
            CombatEvent::CrystalHit { column, attacker, owner, damage, crystal_hp } => write!(
                f,
                "Column {}: {attacker} ({owner}) strikes the {} crystal for {damage}, crystal hp {crystal_hp}",
                column + 1,
                owner.opponent()
            ),
            CombatEvent::MatchWon { winner } => write!(f, "{winner} wins: enemy crystal destroyed"),
            CombatEvent::LanePushed { column, winner, into, cards } => write!(
                f,
                "Column {}: {winner} takes the Equator and pushes {cards} card(s) into the {into}",
                column + 1
            ),
            CombatEvent::CardLostInPush { column, card, owner } => {
                write!(f, "Column {}: {card} ({owner}) does not survive the push", column + 1)
            }
            CombatEvent::LaneRepelled { column, defender, cards } => write!(
                f,
                "Column {}: {defender} repels the siege, {cards} card(s) return to the Equator",
                column + 1
            ),
        }
    }
}
