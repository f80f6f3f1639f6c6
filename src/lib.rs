//! # crystal-clash
//!
//! A two-player lane-battle card engine.
//!
//! Both players secretly deploy cards into three shared columns, then
//! commit. Combat then runs deterministically, tick by tick: the top cards
//! of opposing stacks trade blows, survivors push toward the enemy base at
//! round end, and a card standing unopposed in the enemy base damages that
//! player's crystal. The first crystal to fall ends the match.
//!
//! ## Design Principles
//!
//! 1. **Closed move set**: every input is a [`Move`] variant resolved by
//!    exactly one handler. A rejected move returns a [`MoveError`] and
//!    leaves the state untouched.
//!
//! 2. **Deterministic**: fixed resolution order (column ascending, player 0
//!    before player 1) and a seeded RNG. Stepping combat one tick at a time
//!    and draining it in one call produce identical states and logs.
//!
//! 3. **No global state**: configuration is owned by the game object and
//!    passed by reference.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: O(1) state cloning via `im-rs`, so
//!   playback and bots can snapshot freely.
//!
//! - **Explicit tiers**: each column has exactly three tiers (Equator and
//!   one base per player), addressed by [`TierKind`].
//!
//! ## Modules
//!
//! - `core`: players, RNG, configuration, moves, errors, state
//! - `cards`: card definitions, cards in play, registry and decks
//! - `board`: columns, tiers, crystals
//! - `combat`: tick scheduler, action resolver, lanes, crystal damage
//! - `rules`: `RulesEngine` trait and the `LaneGame` implementation
//! - `bot`: move policies and self-play
//!
//! ## Example
//!
//! ```
//! use crystal_clash::{LaneGameBuilder, Move, PlayerId, RulesEngine};
//!
//! let (game, mut state) = LaneGameBuilder::new().build(7);
//!
//! let card = state.player(PlayerId::P0).hand[0].id;
//! game.apply_move(&mut state, PlayerId::P0, Move::PlayCard { card, column: 1 }).unwrap();
//! game.apply_move(&mut state, PlayerId::P0, Move::CommitPlayer).unwrap();
//! game.apply_move(&mut state, PlayerId::P1, Move::CommitPlayer).unwrap();
//! game.apply_move(&mut state, PlayerId::P0, Move::SimulateRound).unwrap();
//! game.run_combat(&mut state).unwrap();
//! game.apply_move(&mut state, PlayerId::P0, Move::EndRound).unwrap();
//!
//! assert_eq!(state.current_round, 2);
//! ```

pub mod board;
pub mod bot;
pub mod cards;
pub mod combat;
pub mod core;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    GameRng, GameRngState, GameState, MatchConfig, Move, MoveError, MoveRecord, PlayerId, PlayerMap, PlayerState,
    RoundPhase,
};

pub use crate::cards::{Card, CardClass, CardDefinition, CardId, CardRegistry, DefinitionId};

pub use crate::board::{Column, Crystal, Tier, TierKind};

pub use crate::combat::{CombatEvent, LaneTransition};

pub use crate::rules::{EndReason, LaneGame, LaneGameBuilder, MatchOutcome, RulesEngine};

pub use crate::bot::{play_match, MatchReport, MovePolicy, RandomBot};
