//! Match rules.
//!
//! `RulesEngine` is the narrow interface outer layers use: enumerate legal
//! moves, apply a move, check for the end. `LaneGame` implements it by
//! dispatching each `Move` variant to exactly one handler:
//!
//! - `moves`: deploy, discard, withdraw
//! - `commit`: the commit gate that starts combat
//! - `combat` (crate module): ticks, lanes, crystals
//! - `lifecycle`: end-of-round bookkeeping

pub mod commit;
pub mod engine;
pub mod game;
pub mod lifecycle;
pub mod moves;

pub use engine::{EndReason, MatchOutcome, RulesEngine};
pub use game::{LaneGame, LaneGameBuilder};
