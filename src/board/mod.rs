//! The battlefield: columns, their tiers, and the players' crystals.
//!
//! Each column has exactly three tiers (the Equator and one base per
//! player). Combat only happens in a column's active tier; lane progression
//! moves the active tier between the Equator and the bases.

pub mod column;
pub mod tier;

pub use column::{Column, Crystal};
pub use tier::{Stack, Tier, TierKind, MAX_STACK_DEPTH};
