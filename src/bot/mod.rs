//! Automated players.
//!
//! - `MovePolicy`: picks one legal move from a read-only state
//! - `RandomBot` / `PassiveBot`: baseline policies
//! - `play_match`: runs whole matches between two policies

pub mod policy;
pub mod self_play;

pub use policy::{MovePolicy, PassiveBot, RandomBot};
pub use self_play::{play_match, MatchReport, SelfPlayConfig};
